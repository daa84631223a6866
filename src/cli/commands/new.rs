//! New command implementation.
//!
//! The `initiator new` command collects a language, framework, optional
//! libraries and a project name. It runs the full-screen wizard when both
//! stdin and stdout are terminals, the prompt flow otherwise, and no wizard
//! at all when every value was passed as a flag (or `--no-tui` is set).

use std::io::IsTerminal;

use crate::catalog::{Catalog, BASELINE_FRAMEWORK};
use crate::cli::args::NewArgs;
use crate::error::{InitiatorError, Result, EXIT_CANCELLED};
use crate::ui::{run_prompt_flow, UserInterface};
use crate::wizard::{run_wizard, WizardOptions, WizardOutcome, WizardResult};

use super::dispatcher::{Command, CommandResult};

/// The new command implementation.
pub struct NewCommand {
    catalog: Catalog,
    args: NewArgs,
    no_color: bool,
    full_screen: bool,
}

impl NewCommand {
    /// Create a new command. The full-screen wizard is used when stdin and
    /// stdout are both terminals.
    pub fn new(catalog: Catalog, args: NewArgs, no_color: bool) -> Self {
        let full_screen = std::io::stdin().is_terminal() && std::io::stdout().is_terminal();
        Self {
            catalog,
            args,
            no_color,
            full_screen,
        }
    }

    /// Choose between the full-screen wizard and the prompt flow.
    pub fn with_full_screen(mut self, full_screen: bool) -> Self {
        self.full_screen = full_screen;
        self
    }

    /// Get the command arguments.
    pub fn args(&self) -> &NewArgs {
        &self.args
    }

    fn name_flag(&self) -> Option<String> {
        self.args
            .name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(String::from)
    }

    /// Whether flags alone decide the result.
    fn skips_wizard(&self) -> bool {
        self.args.no_tui
            || (self.args.lang.is_some()
                && self.args.framework.is_some()
                && self.name_flag().is_some())
    }

    fn resolve_language(&self, value: &str) -> Result<String> {
        self.catalog
            .resolve_language(value)
            .ok_or_else(|| InitiatorError::InvalidSelection {
                kind: "language",
                value: value.to_string(),
            })
    }

    fn resolve_framework(&self, language: &str, value: &str) -> Result<String> {
        self.catalog
            .resolve_framework(language, value)
            .ok_or_else(|| InitiatorError::InvalidSelection {
                kind: "framework",
                value: value.to_string(),
            })
    }

    /// Build the result from flags only.
    fn from_flags(&self) -> Result<WizardResult> {
        let Some(name) = self.name_flag() else {
            return Err(InitiatorError::Validation {
                field: "name".to_string(),
                message: "required when --no-tui is set".to_string(),
            });
        };
        let Some(lang) = self.args.lang.as_deref() else {
            return Err(InitiatorError::Validation {
                field: "language".to_string(),
                message: "required when --no-tui is set".to_string(),
            });
        };

        let language = self.resolve_language(lang)?;
        let framework = match self.args.framework.as_deref() {
            Some(fw) => self.resolve_framework(&language, fw)?,
            None => BASELINE_FRAMEWORK.to_string(),
        };

        Ok(WizardResult {
            language,
            framework,
            name,
            libraries: Vec::new(),
        })
    }

    /// Run a wizard front-end with the flags as starting points.
    fn from_wizard(&self, ui: &mut dyn UserInterface) -> Result<Option<WizardResult>> {
        // Reject a bad flag before the wizard opens.
        let language = self
            .args
            .lang
            .as_deref()
            .map(|l| self.resolve_language(l))
            .transpose()?;
        if let Some(fw) = self.args.framework.as_deref() {
            match &language {
                Some(language) => {
                    self.resolve_framework(language, fw)?;
                }
                None if !self.catalog.offers_framework(fw) => {
                    return Err(InitiatorError::InvalidSelection {
                        kind: "framework",
                        value: fw.to_string(),
                    });
                }
                None => {}
            }
        }

        let options = WizardOptions {
            default_language: language.clone(),
            default_framework: self.args.framework.clone(),
            no_color: self.no_color,
        };

        let outcome = if self.full_screen {
            tracing::debug!("Running full-screen wizard");
            run_wizard(self.catalog.clone(), &options)?
        } else {
            tracing::debug!("Running prompt flow");
            run_prompt_flow(ui, self.catalog.clone(), &options)?
        };

        let mut result = match outcome {
            WizardOutcome::Completed(result) => result,
            WizardOutcome::Cancelled => return Ok(None),
        };

        // Flags win over answers.
        if let Some(language) = language {
            result.language = language;
        }
        // A framework flag given without --lang only applies when the chosen
        // language offers it.
        if let Some(fw) = self.args.framework.as_deref() {
            match self.catalog.resolve_framework(&result.language, fw) {
                Some(framework) => result.framework = framework,
                None => ui.warning(&format!(
                    "{} does not offer {}; keeping {}",
                    result.language, fw, result.framework
                )),
            }
        }
        if let Some(name) = self.name_flag() {
            result.name = name;
        }
        Ok(Some(result))
    }
}

impl Command for NewCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let result = if self.skips_wizard() {
            self.from_flags()?
        } else {
            match self.from_wizard(ui)? {
                Some(result) => result,
                None => {
                    ui.warning("Cancelled");
                    return Ok(CommandResult::failure(EXIT_CANCELLED));
                }
            }
        };

        if self.args.json {
            let json = serde_json::to_string_pretty(&result)
                .map_err(|e| InitiatorError::Other(e.into()))?;
            ui.message(&json);
        } else {
            ui.show_summary(&result);
            ui.success(&format!("Ready to create {}", result.name));
        }
        Ok(CommandResult::success())
    }
}
