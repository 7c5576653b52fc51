//! Semantic color palette for terminal output.

use owo_colors::{OwoColorize, Style};

/// Style for success marks (green bold).
pub fn success_style() -> Style {
    Style::new().green().bold()
}

/// Style for error marks (red bold).
pub fn error_style() -> Style {
    Style::new().red().bold()
}

/// Style for warnings and deny effects (yellow).
pub fn warning_style() -> Style {
    Style::new().yellow()
}

/// Style for secondary text (dimmed).
pub fn muted_style() -> Style {
    Style::new().dimmed()
}

/// Style for section headers and role names (bold).
pub fn header_style() -> Style {
    Style::new().bold()
}

/// Style for paths and commands (blue).
pub fn code_style() -> Style {
    Style::new().blue()
}

fn paint<T: std::fmt::Display>(value: &T, style: Style) -> String {
    if super::no_color() {
        value.to_string()
    } else {
        value.style(style).to_string()
    }
}

/// Applies the palette to anything displayable, honoring `--no-color`.
pub trait SemanticStyle {
    fn success(&self) -> String;
    fn error(&self) -> String;
    fn warning(&self) -> String;
    fn muted(&self) -> String;
    fn header(&self) -> String;
    fn code(&self) -> String;
}

impl<T: std::fmt::Display> SemanticStyle for T {
    fn success(&self) -> String {
        paint(self, success_style())
    }

    fn error(&self) -> String {
        paint(self, error_style())
    }

    fn warning(&self) -> String {
        paint(self, warning_style())
    }

    fn muted(&self) -> String {
        paint(self, muted_style())
    }

    fn header(&self) -> String {
        paint(self, header_style())
    }

    fn code(&self) -> String {
        paint(self, code_style())
    }
}
