//! Interactive prompts.

use std::io;

use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, MultiSelect, Select};

use crate::error::{InitiatorError, Result};

use super::{Prompt, PromptOption, PromptResult, PromptType};

/// Convert dialoguer errors. An interrupted read means the user pressed
/// Ctrl-C and becomes [`PromptResult::Cancelled`].
fn map_dialoguer_err(e: dialoguer::Error) -> Result<PromptResult> {
    let io_err: io::Error = e.into();
    if io_err.kind() == io::ErrorKind::Interrupted {
        Ok(PromptResult::Cancelled)
    } else {
        Err(InitiatorError::Io(io_err))
    }
}

/// Dialoguer theme without the default yellow `?` prefix.
fn prompt_theme() -> ColorfulTheme {
    ColorfulTheme {
        prompt_prefix: style("".to_string()),
        ..ColorfulTheme::default()
    }
}

/// Prompt the user for input.
pub fn prompt_user(prompt: &Prompt, term: &Term) -> Result<PromptResult> {
    let result = match &prompt.prompt_type {
        PromptType::Confirm => prompt_confirm(prompt, term),
        PromptType::Input => prompt_input(prompt, term),
        PromptType::Select { options } => prompt_select(prompt, options, term),
        PromptType::MultiSelect { options } => prompt_multiselect(prompt, options, term),
    };
    result.or_else(map_dialoguer_err)
}

fn prompt_confirm(
    prompt: &Prompt,
    term: &Term,
) -> std::result::Result<PromptResult, dialoguer::Error> {
    let default = prompt
        .default
        .as_ref()
        .map(|s| s.to_lowercase() == "true" || s == "y" || s == "yes")
        .unwrap_or(true);

    let answer = Confirm::with_theme(&prompt_theme())
        .with_prompt(&prompt.question)
        .default(default)
        .interact_on_opt(term)?;

    Ok(answer.map_or(PromptResult::Cancelled, PromptResult::Bool))
}

fn prompt_input(
    prompt: &Prompt,
    term: &Term,
) -> std::result::Result<PromptResult, dialoguer::Error> {
    let theme = prompt_theme();
    let input = Input::<String>::with_theme(&theme)
        .with_prompt(&prompt.question)
        .allow_empty(true);

    let result: String = match &prompt.default {
        Some(default) => input.default(default.clone()).interact_on(term)?,
        None => input.interact_on(term)?,
    };

    Ok(PromptResult::String(result))
}

fn prompt_select(
    prompt: &Prompt,
    options: &[PromptOption],
    term: &Term,
) -> std::result::Result<PromptResult, dialoguer::Error> {
    let labels: Vec<_> = options.iter().map(|o| o.label.as_str()).collect();

    let default_idx = prompt
        .default
        .as_ref()
        .and_then(|d| options.iter().position(|o| o.value == *d))
        .unwrap_or(0);

    let selection = Select::with_theme(&prompt_theme())
        .with_prompt(&prompt.question)
        .items(&labels)
        .default(default_idx)
        .interact_on_opt(term)?;

    Ok(selection
        .and_then(|i| options.get(i))
        .map_or(PromptResult::Cancelled, |o| {
            PromptResult::String(o.value.clone())
        }))
}

fn prompt_multiselect(
    prompt: &Prompt,
    options: &[PromptOption],
    term: &Term,
) -> std::result::Result<PromptResult, dialoguer::Error> {
    let labels: Vec<_> = options.iter().map(|o| o.label.as_str()).collect();
    let defaults = multiselect_defaults(prompt.default.as_deref(), options);

    let selections = MultiSelect::with_theme(&prompt_theme())
        .with_prompt(&prompt.question)
        .items(&labels)
        .defaults(&defaults)
        .interact_on_opt(term)?;

    let Some(selections) = selections else {
        return Ok(PromptResult::Cancelled);
    };
    let values = selections
        .iter()
        .filter_map(|&i| options.get(i))
        .map(|o| o.value.clone())
        .collect();

    Ok(PromptResult::Strings(values))
}

/// Checked state per option from a comma-separated default.
fn multiselect_defaults(default: Option<&str>, options: &[PromptOption]) -> Vec<bool> {
    let default_values: Vec<&str> = default
        .map(|d| d.split(',').map(str::trim).collect())
        .unwrap_or_default();
    options
        .iter()
        .map(|o| default_values.contains(&o.value.as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<PromptOption> {
        vec![
            PromptOption::new("gin  (web)", "gin"),
            PromptOption::new("sqlc  (sql)", "sqlc"),
            PromptOption::new("zap  (logging)", "zap"),
        ]
    }

    #[test]
    fn multiselect_defaults_from_csv() {
        let checked = multiselect_defaults(Some("zap, gin"), &options());
        assert_eq!(checked, vec![true, false, true]);
    }

    #[test]
    fn multiselect_defaults_empty() {
        assert_eq!(multiselect_defaults(None, &options()), vec![false; 3]);
        assert_eq!(multiselect_defaults(Some(""), &options()), vec![false; 3]);
    }

    #[test]
    fn interrupted_read_is_cancel() {
        let err = dialoguer::Error::IO(io::Error::new(io::ErrorKind::Interrupted, "ctrl-c"));
        assert_eq!(map_dialoguer_err(err).unwrap(), PromptResult::Cancelled);
    }

    #[test]
    fn other_io_errors_propagate() {
        let err = dialoguer::Error::IO(io::Error::new(io::ErrorKind::BrokenPipe, "gone"));
        assert!(matches!(map_dialoguer_err(err), Err(InitiatorError::Io(_))));
    }
}
