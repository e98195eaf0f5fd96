use colored::{ColoredString, Colorize};

/// Terminal palette for the connection output. Constructing with
/// `use_colors = false` forces plain text process-wide.
pub struct ColorScheme;

impl ColorScheme {
    pub fn new(use_colors: bool) -> Self {
        if !use_colors {
            colored::control::set_override(false);
        }
        Self
    }

    pub fn person_name(&self, text: &str) -> ColoredString {
        text.yellow()
    }

    pub fn movie_title(&self, text: &str) -> ColoredString {
        text.cyan().italic()
    }

    pub fn success(&self, text: &str) -> ColoredString {
        text.green().bold()
    }

    pub fn error(&self, text: &str) -> ColoredString {
        text.red().bold()
    }

    pub fn step_number(&self, text: &str) -> ColoredString {
        text.dimmed()
    }

    pub fn number(&self, text: &str) -> ColoredString {
        text.green()
    }

    pub fn stats(&self, text: &str) -> ColoredString {
        text.blue()
    }

    pub fn id(&self, text: &str) -> ColoredString {
        text.dimmed()
    }
}
