//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion. It can be configured with
//! pre-determined prompt responses.
//!
//! # Example
//!
//! ```
//! use initiator::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.set_prompt_response("name", "demo");
//!
//! ui.message("Starting");
//! ui.success("Done!");
//!
//! assert!(ui.has_message("Starting"));
//! assert!(ui.has_success("Done!"));
//! ```

use std::collections::{HashMap, HashSet, VecDeque};

use crate::error::Result;
use crate::wizard::WizardResult;

use super::{OutputMode, Prompt, PromptResult, PromptType, UserInterface};

/// Mock UI implementation for testing.
///
/// Supports single responses (via `set_prompt_response`), queued responses
/// (via `queue_prompt_responses`) for keys asked more than once, and
/// cancelling a prompt (via `cancel_prompt`).
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    interactive: bool,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
    summaries: Vec<WizardResult>,
    prompt_responses: HashMap<String, String>,
    prompt_queues: HashMap<String, VecDeque<String>>,
    cancelled_prompts: HashSet<String>,
    prompts_shown: Vec<String>,
}

impl MockUI {
    /// Create a new interactive MockUI with Normal output mode.
    pub fn new() -> Self {
        Self {
            mode: OutputMode::Normal,
            interactive: true,
            ..Default::default()
        }
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Self::new()
        }
    }

    /// Set a response for a prompt key.
    pub fn set_prompt_response(&mut self, key: &str, response: &str) {
        self.prompt_responses
            .insert(key.to_string(), response.to_string());
    }

    /// Queue multiple responses for the same prompt key.
    ///
    /// Responses are returned in order. After the queue is exhausted,
    /// falls back to `set_prompt_response` or defaults.
    pub fn queue_prompt_responses(&mut self, key: &str, responses: Vec<&str>) {
        let queue = responses.into_iter().map(|s| s.to_string()).collect();
        self.prompt_queues.insert(key.to_string(), queue);
    }

    /// Answer the prompt with this key as if the user pressed Esc.
    pub fn cancel_prompt(&mut self, key: &str) {
        self.cancelled_prompts.insert(key.to_string());
    }

    /// Set whether this mock behaves as interactive.
    pub fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Every result passed to `show_summary`.
    pub fn summaries(&self) -> &[WizardResult] {
        &self.summaries
    }

    /// Get all prompts that were shown (by key).
    pub fn prompts_shown(&self) -> &[String] {
        &self.prompts_shown
    }

    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }

    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }

    fn next_response(&mut self, prompt: &Prompt) -> Option<String> {
        if let Some(response) = self
            .prompt_queues
            .get_mut(&prompt.key)
            .and_then(|queue| queue.pop_front())
        {
            return Some(response);
        }
        self.prompt_responses
            .get(&prompt.key)
            .or(prompt.default.as_ref())
            .cloned()
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        self.prompts_shown.push(prompt.key.clone());

        if self.cancelled_prompts.contains(&prompt.key) {
            return Ok(PromptResult::Cancelled);
        }

        let response = self.next_response(prompt).unwrap_or_default();
        Ok(match prompt.prompt_type {
            PromptType::Confirm => {
                PromptResult::Bool(matches!(response.as_str(), "true" | "yes" | "y" | "1"))
            }
            PromptType::MultiSelect { .. } => PromptResult::Strings(
                response
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect(),
            ),
            PromptType::Input | PromptType::Select { .. } => PromptResult::String(response),
        })
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }

    fn show_summary(&mut self, result: &WizardResult) {
        self.summaries.push(result.clone());
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::PromptOption;

    fn prompt(key: &str, prompt_type: PromptType, default: Option<&str>) -> Prompt {
        Prompt {
            key: key.to_string(),
            question: "?".to_string(),
            prompt_type,
            default: default.map(String::from),
        }
    }

    #[test]
    fn captures_output() {
        let mut ui = MockUI::new();
        ui.message("hello");
        ui.warning("careful");
        ui.error("broken");
        ui.show_header("New project");
        assert!(ui.has_message("hell"));
        assert!(ui.has_warning("careful"));
        assert!(ui.has_error("broken"));
        assert_eq!(ui.headers(), ["New project"]);
    }

    #[test]
    fn queued_responses_come_first() {
        let mut ui = MockUI::new();
        ui.set_prompt_response("name", "final");
        ui.queue_prompt_responses("name", vec!["", "second"]);
        let p = prompt("name", PromptType::Input, None);
        assert_eq!(ui.prompt(&p).unwrap().as_string(), "");
        assert_eq!(ui.prompt(&p).unwrap().as_string(), "second");
        assert_eq!(ui.prompt(&p).unwrap().as_string(), "final");
        assert_eq!(ui.prompts_shown().len(), 3);
    }

    #[test]
    fn falls_back_to_prompt_default() {
        let mut ui = MockUI::new();
        let p = prompt("language", PromptType::Input, Some("Go"));
        assert_eq!(ui.prompt(&p).unwrap().as_string(), "Go");
    }

    #[test]
    fn typed_results() {
        let mut ui = MockUI::new();
        ui.set_prompt_response("confirm", "yes");
        ui.set_prompt_response("libraries", "gin, sqlc");
        let confirm = prompt("confirm", PromptType::Confirm, None);
        assert_eq!(ui.prompt(&confirm).unwrap(), PromptResult::Bool(true));

        let options = vec![PromptOption::new("gin", "gin")];
        let multi = prompt("libraries", PromptType::MultiSelect { options }, None);
        assert_eq!(
            ui.prompt(&multi).unwrap(),
            PromptResult::Strings(vec!["gin".into(), "sqlc".into()])
        );
    }

    #[test]
    fn cancelled_prompt() {
        let mut ui = MockUI::new();
        ui.cancel_prompt("framework");
        let p = prompt("framework", PromptType::Select { options: vec![] }, Some("Vanilla"));
        assert!(ui.prompt(&p).unwrap().is_cancelled());
    }

    #[test]
    fn with_mode_is_interactive() {
        let mut ui = MockUI::with_mode(OutputMode::Quiet);
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
        assert!(ui.is_interactive());
        ui.set_interactive(false);
        assert!(!ui.is_interactive());
    }
}
