//! Line-oriented user interface.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for interactive terminal usage (dialoguer prompts)
//! - [`NonInteractiveUI`] for pipes and CI, answering prompts from
//!   `INITIATOR_PROMPT_*` variables or defaults
//! - [`MockUI`] for tests
//! - [`flow::run_prompt_flow`], the wizard stages as a series of prompts
//!
//! The full-screen wizard lives in [`crate::wizard`].
//!
//! # Example
//!
//! ```
//! use initiator::ui::{create_ui, OutputMode};
//!
//! // Use non-interactive mode for testability
//! let mut ui = create_ui(false, OutputMode::Quiet);
//! ui.show_header("New project");
//! ui.success("Project configured");
//! ```

pub mod flow;
pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod prompts;
pub mod terminal;
pub mod theme;

pub use flow::run_prompt_flow;
pub use mock::MockUI;
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use prompts::prompt_user;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, InitiatorTheme};

use crate::error::Result;
use crate::wizard::WizardResult;

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Show a prompt and get user input.
    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult>;

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);

    /// Show the final selections.
    fn show_summary(&mut self, result: &WizardResult);

    /// Check if running in interactive mode.
    fn is_interactive(&self) -> bool;
}

/// Label/value rows describing a result, in display order.
///
/// The libraries row is left out when none were chosen.
pub fn summary_fields(result: &WizardResult) -> Vec<(&'static str, String)> {
    let mut fields = vec![
        ("Language", result.language.clone()),
        ("Framework", result.framework.clone()),
        ("Name", result.name.clone()),
    ];
    if !result.libraries.is_empty() {
        fields.push(("Libraries", result.libraries.join(", ")));
    }
    fields
}

/// A prompt to show to the user.
#[derive(Debug, Clone)]
pub struct Prompt {
    /// Unique key for the prompt (used for overrides and lookup).
    pub key: String,
    /// The question to display.
    pub question: String,
    /// The type of prompt.
    pub prompt_type: PromptType,
    /// Default value if user just presses enter.
    pub default: Option<String>,
}

/// The type of prompt.
#[derive(Debug, Clone)]
pub enum PromptType {
    /// Yes/no confirmation.
    Confirm,
    /// Free-form text input.
    Input,
    /// Select one from a list of options.
    Select { options: Vec<PromptOption> },
    /// Select multiple from a list of options.
    MultiSelect { options: Vec<PromptOption> },
}

/// An option in a select prompt.
#[derive(Debug, Clone)]
pub struct PromptOption {
    /// Display label.
    pub label: String,
    /// Value returned when selected.
    pub value: String,
}

impl PromptOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Result of a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptResult {
    /// Boolean result from confirm.
    Bool(bool),
    /// String result from input or select.
    String(String),
    /// Multiple string results from multi-select.
    Strings(Vec<String>),
    /// The user backed out of the prompt (Esc or Ctrl-C).
    Cancelled,
}

impl PromptResult {
    /// Get as string, suitable for display.
    pub fn as_string(&self) -> String {
        match self {
            Self::Bool(b) => b.to_string(),
            Self::String(s) => s.clone(),
            Self::Strings(v) => v.join(","),
            Self::Cancelled => String::new(),
        }
    }

    /// Get as bool if this is a Bool result.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}
