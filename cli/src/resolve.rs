use anyhow::{Result, bail};
use degrees_core::Dataset;

/// Resolves a typed name to a person id. Names are not unique: prefer the
/// exact (case-insensitive) spelling among the normalized matches,
/// otherwise take the first candidate.
pub fn resolve_person(name: &str, dataset: &Dataset) -> Result<String> {
    let candidates = dataset.candidates_for_name(name);

    if candidates.is_empty() {
        bail!("'{name}' not found in the dataset");
    }

    if candidates.len() == 1 {
        return Ok(candidates[0].clone());
    }

    let lowercase_query = name.to_lowercase();
    for id in candidates {
        if let Some(person) = dataset.person(id) {
            if person.name.to_lowercase() == lowercase_query {
                return Ok(id.clone());
            }
        }
    }

    Ok(candidates[0].clone())
}
