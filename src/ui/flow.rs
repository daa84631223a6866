//! The wizard as a sequence of line prompts.
//!
//! Used when the full-screen wizard cannot run (stdout is not a terminal)
//! and when prompts are answered from the environment. Drives the same
//! [`WizardState`] as the full-screen wizard, so stage order, library
//! skipping and name validation are identical.

use crate::catalog::Catalog;
use crate::error::{InitiatorError, Result};
use crate::wizard::selection::ListItem;
use crate::wizard::stage::{Stage, WizardState, NAME_REQUIRED};
use crate::wizard::{WizardOptions, WizardOutcome, WizardResult};

use super::{Prompt, PromptOption, PromptResult, PromptType, UserInterface};

/// Run every stage through `ui`'s prompts.
///
/// Cancelling any prompt, or declining the final confirmation, yields
/// [`WizardOutcome::Cancelled`].
///
/// # Errors
///
/// - `InvalidSelection` when an answer names something not offered
/// - `Validation` when a non-interactive UI supplies a blank name
/// - `CatalogInvariant` when a stage has nothing to choose from
pub fn run_prompt_flow(
    ui: &mut dyn UserInterface,
    catalog: Catalog,
    options: &WizardOptions,
) -> Result<WizardOutcome> {
    let mut state = WizardState::new(catalog, options);
    ui.show_header("New project");

    while !state.is_finished() {
        match state.stage() {
            Stage::Language | Stage::Framework => choose_one(ui, &mut state)?,
            Stage::Libraries => choose_libraries(ui, &mut state)?,
            Stage::Name => enter_name(ui, &mut state)?,
            Stage::Confirm => review(ui, &mut state)?,
            Stage::Done => break,
        }
    }

    Ok(state.outcome().unwrap_or(WizardOutcome::Cancelled))
}

fn options_for<T: ListItem>(items: &[T]) -> Vec<PromptOption> {
    items
        .iter()
        .map(|item| {
            let label = if item.description().is_empty() {
                item.name().to_string()
            } else {
                format!("{}  {}", item.name(), item.description())
            };
            PromptOption::new(label, item.name())
        })
        .collect()
}

fn stage_prompt(state: &WizardState, prompt_type: PromptType, default: Option<String>) -> Prompt {
    let stage = state.stage();
    Prompt {
        key: stage.to_string(),
        question: stage.title().to_string(),
        prompt_type,
        default,
    }
}

fn choose_one(ui: &mut dyn UserInterface, state: &mut WizardState) -> Result<()> {
    let Some(current) = state.highlighted().map(|c| c.name().to_string()) else {
        // Empty list: let the state machine report the broken catalog.
        state.confirm()?;
        return Ok(());
    };

    let (kind, options) = match state.stage() {
        Stage::Language => ("language", options_for(state.languages().items())),
        _ => ("framework", options_for(state.frameworks().items())),
    };
    let prompt = stage_prompt(state, PromptType::Select { options }, Some(current));

    match ui.prompt(&prompt)? {
        PromptResult::Cancelled => {
            state.cancel();
        }
        answer => {
            let value = answer.as_string();
            if !state.highlight(&value) {
                return Err(InitiatorError::InvalidSelection { kind, value });
            }
            state.confirm()?;
        }
    }
    Ok(())
}

fn choose_libraries(ui: &mut dyn UserInterface, state: &mut WizardState) -> Result<()> {
    let options = options_for(state.libraries().items());
    let current: Vec<String> = state.selected_libraries().iter().cloned().collect();
    let prompt = stage_prompt(
        state,
        PromptType::MultiSelect { options },
        Some(current.join(",")),
    );

    let wanted = match ui.prompt(&prompt)? {
        PromptResult::Cancelled => {
            state.cancel();
            return Ok(());
        }
        PromptResult::Strings(values) => values,
        other => vec![other.as_string()],
    };

    let names: Vec<String> = state
        .libraries()
        .items()
        .iter()
        .map(|item| item.name.clone())
        .collect();
    let mut chosen = Vec::with_capacity(wanted.len());
    for value in wanted.iter().filter(|v| !v.trim().is_empty()) {
        match names.iter().find(|n| n.eq_ignore_ascii_case(value.trim())) {
            Some(name) => chosen.push(name.clone()),
            None => {
                return Err(InitiatorError::InvalidSelection {
                    kind: "library",
                    value: value.clone(),
                })
            }
        }
    }

    for name in &names {
        let is_selected = state.selected_libraries().contains(name);
        if is_selected != chosen.contains(name) && state.highlight(name) {
            state.toggle();
        }
    }
    state.confirm()?;
    Ok(())
}

fn enter_name(ui: &mut dyn UserInterface, state: &mut WizardState) -> Result<()> {
    let default = Some(state.pending().name.clone()).filter(|n| !n.is_empty());
    let prompt = Prompt {
        question: "Project name".to_string(),
        ..stage_prompt(state, PromptType::Input, default)
    };

    match ui.prompt(&prompt)? {
        PromptResult::Cancelled => {
            state.cancel();
        }
        answer => {
            state.set_name(&answer.as_string());
            state.confirm()?;
            if let Some(error) = state.name_error() {
                if !ui.is_interactive() {
                    return Err(InitiatorError::Validation {
                        field: "name".to_string(),
                        message: NAME_REQUIRED.to_string(),
                    });
                }
                ui.warning(error);
            }
        }
    }
    Ok(())
}

/// One-line description of the pending result for the review prompt.
fn review_question(result: &WizardResult) -> String {
    let mut question = format!(
        "Create \"{}\" with {} / {}",
        result.name, result.language, result.framework
    );
    if !result.libraries.is_empty() {
        question.push_str(&format!(" + {}", result.libraries.join(", ")));
    }
    question.push('?');
    question
}

fn review(ui: &mut dyn UserInterface, state: &mut WizardState) -> Result<()> {
    let prompt = Prompt {
        question: review_question(state.pending()),
        ..stage_prompt(state, PromptType::Confirm, Some("true".to_string()))
    };

    match ui.prompt(&prompt)? {
        PromptResult::Bool(true) => {
            state.confirm()?;
        }
        _ => {
            state.cancel();
        }
    }
    Ok(())
}
