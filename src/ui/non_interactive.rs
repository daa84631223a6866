//! Non-interactive UI for pipes, CI and other headless environments.

use std::collections::HashMap;

use crate::error::{InitiatorError, Result};
use crate::wizard::WizardResult;

use super::{
    summary_fields, InitiatorTheme, OutputMode, Prompt, PromptResult, PromptType, UserInterface,
};

/// Prefix of environment variables that answer prompts by key.
pub const PROMPT_ENV_PREFIX: &str = "INITIATOR_PROMPT_";

/// UI implementation for non-interactive mode.
///
/// Prompts are answered from `INITIATOR_PROMPT_<KEY>` variables, then from
/// the prompt's default. A prompt with neither is a validation error.
pub struct NonInteractiveUI {
    mode: OutputMode,
    env_overrides: HashMap<String, String>,
    theme: InitiatorTheme,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        let env_overrides: HashMap<String, String> = std::env::vars()
            .filter(|(k, _)| k.starts_with(PROMPT_ENV_PREFIX))
            .collect();

        Self::with_overrides(mode, env_overrides)
    }

    /// Create with explicit overrides (for testing).
    pub fn with_overrides(mode: OutputMode, overrides: HashMap<String, String>) -> Self {
        Self {
            mode,
            env_overrides: overrides,
            theme: InitiatorTheme::plain(),
        }
    }

    fn answer(&self, prompt: &Prompt) -> Option<String> {
        let env_key = format!("{}{}", PROMPT_ENV_PREFIX, prompt.key.to_uppercase());
        self.env_overrides
            .get(&env_key)
            .or(prompt.default.as_ref())
            .cloned()
    }
}

fn parse_bool(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "true" | "yes" | "y" | "1"
    )
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        println!("{}", msg);
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_decoration() {
            println!("{}", self.theme.format_success(msg));
        }
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_warning(msg));
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_error(msg));
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        let Some(value) = self.answer(prompt) else {
            return Err(InitiatorError::Validation {
                field: prompt.key.clone(),
                message: format!(
                    "cannot prompt in non-interactive mode (set {}{} or pass a flag)",
                    PROMPT_ENV_PREFIX,
                    prompt.key.to_uppercase()
                ),
            });
        };

        Ok(match prompt.prompt_type {
            PromptType::Confirm => PromptResult::Bool(parse_bool(&value)),
            PromptType::MultiSelect { .. } => PromptResult::Strings(
                value
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect(),
            ),
            PromptType::Input | PromptType::Select { .. } => PromptResult::String(value),
        })
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_decoration() {
            eprintln!("\n{}\n", title);
        }
    }

    fn show_summary(&mut self, result: &WizardResult) {
        for (label, value) in summary_fields(result) {
            println!("{}", self.theme.format_field(label, &value));
        }
    }

    fn is_interactive(&self) -> bool {
        false
    }
}
