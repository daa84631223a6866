//! Visual theme for line-oriented output.
//!
//! The full-screen wizard has its own palette in
//! [`crate::wizard::palette`]; this theme styles everything printed with
//! `console` before and after it runs.

use console::Style;

/// Width of the label column in key-value displays.
pub const FIELD_WIDTH: usize = 12;

/// Initiator's visual theme.
#[derive(Debug, Clone)]
pub struct InitiatorTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for highlighted/important text (bold).
    pub highlight: Style,
    /// Style for the header mark (purple bold).
    pub header: Style,
    /// Style for box-drawing borders (dim).
    pub border: Style,
    /// Style for key labels in key-value displays (bold).
    pub key: Style,
    /// Style for values in key-value displays.
    pub value: Style,
}

impl Default for InitiatorTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl InitiatorTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            header: Style::new().bold().color256(141),
            border: Style::new().dim(),
            key: Style::new().bold(),
            value: Style::new().color256(117),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
            header: Style::new(),
            border: Style::new(),
            key: Style::new(),
            value: Style::new(),
        }
    }

    /// Pick [`new`](Self::new) or [`plain`](Self::plain).
    pub fn for_colors(colors: bool) -> Self {
        if colors {
            Self::new()
        } else {
            Self::plain()
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a header banner.
    pub fn format_header(&self, title: &str) -> String {
        format!(
            "{} {}",
            self.header.apply_to("◆"),
            self.highlight.apply_to(title)
        )
    }

    /// Format one `Label:     value` row.
    pub fn format_field(&self, label: &str, value: &str) -> String {
        let label = format!("{:<width$}", format!("{}:", label), width = FIELD_WIDTH);
        format!("{}{}", self.key.apply_to(label), self.value.apply_to(value))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stdout is a TTY
    console::Term::stdout().is_term()
}
