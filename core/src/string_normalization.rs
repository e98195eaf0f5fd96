use unidecode::unidecode;

/// Folds a display name into its lookup form: ASCII, lowercase, single
/// spaces. "Chloë  Grace Moretz " and "chloe grace moretz" collide on
/// purpose.
pub fn clean_str(input: &str) -> String {
    unidecode(input)
        .trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<&str>>()
        .join(" ")
}
