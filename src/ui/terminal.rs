//! Interactive terminal UI.

use std::io::{IsTerminal, Write};

use console::Term;

use crate::error::Result;
use crate::wizard::WizardResult;

use super::{
    prompt_user, should_use_colors, summary_fields, InitiatorTheme, NonInteractiveUI, OutputMode,
    Prompt, PromptResult, UserInterface,
};

/// Interactive terminal UI implementation.
///
/// Status lines and the summary go to stdout. Prompts and errors use stderr
/// so a redirected stdout only carries the result.
pub struct TerminalUI {
    out: Term,
    prompt_term: Term,
    theme: InitiatorTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        Self {
            out: Term::stdout(),
            prompt_term: Term::stderr(),
            theme: InitiatorTheme::for_colors(should_use_colors()),
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        writeln!(self.out, "{}", msg).ok();
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_decoration() {
            writeln!(self.out, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        writeln!(self.prompt_term, "{}", self.theme.format_warning(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.prompt_term, "{}", self.theme.format_error(msg)).ok();
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        prompt_user(prompt, &self.prompt_term)
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_decoration() {
            writeln!(self.prompt_term, "\n{}\n", self.theme.format_header(title)).ok();
        }
    }

    fn show_summary(&mut self, result: &WizardResult) {
        let b = &self.theme.border;
        let decorated = self.mode.shows_decoration();
        if decorated {
            writeln!(self.out).ok();
            writeln!(
                self.out,
                "  {} {}",
                b.apply_to("┌─"),
                b.apply_to("Project ──────────────────────────")
            )
            .ok();
        }
        for (label, value) in summary_fields(result) {
            let row = self.theme.format_field(label, &value);
            if decorated {
                writeln!(self.out, "  {} {}", b.apply_to("│"), row).ok();
            } else {
                writeln!(self.out, "{}", row).ok();
            }
        }
        if decorated {
            writeln!(
                self.out,
                "  {}",
                b.apply_to("└────────────────────────────────────")
            )
            .ok();
        }
    }

    fn is_interactive(&self) -> bool {
        self.prompt_term.is_term()
    }
}

/// Create the appropriate UI based on context.
///
/// Prompts need a terminal on both stdin and stderr; otherwise the
/// non-interactive UI answers them.
pub fn create_ui(interactive: bool, mode: OutputMode) -> Box<dyn UserInterface> {
    if interactive && Term::stderr().is_term() && std::io::stdin().is_terminal() {
        Box::new(TerminalUI::new(mode))
    } else {
        Box::new(NonInteractiveUI::new(mode))
    }
}
