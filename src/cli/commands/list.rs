//! List command implementation.
//!
//! The `initiator list` command prints what the wizard would offer, in the
//! order the wizard shows it.

use serde::Serialize;

use crate::catalog::Catalog;
use crate::cli::args::ListArgs;
use crate::error::{InitiatorError, Result};
use crate::ui::{should_use_colors, InitiatorTheme, UserInterface};
use crate::wizard::selection::{sort_labels, unique_labels};

use super::dispatcher::{Command, CommandResult};

#[derive(Debug, Serialize)]
struct LanguageListing {
    name: String,
    frameworks: Vec<FrameworkListing>,
}

#[derive(Debug, Serialize)]
struct FrameworkListing {
    name: String,
    description: String,
    libraries: Vec<LibraryListing>,
}

#[derive(Debug, Serialize)]
struct LibraryListing {
    name: String,
    description: String,
}

/// The list command implementation.
pub struct ListCommand {
    catalog: Catalog,
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(catalog: Catalog, args: ListArgs) -> Self {
        Self { catalog, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ListArgs {
        &self.args
    }

    fn sorted(values: Vec<String>) -> Vec<String> {
        let mut values = unique_labels(values);
        sort_labels(&mut values);
        values
    }

    fn listing(&self) -> Result<Vec<LanguageListing>> {
        let languages = match self.args.lang.as_deref() {
            Some(lang) => {
                let name = self.catalog.resolve_language(lang).ok_or_else(|| {
                    InitiatorError::InvalidSelection {
                        kind: "language",
                        value: lang.to_string(),
                    }
                })?;
                vec![name]
            }
            None => Self::sorted(self.catalog.language_names()),
        };

        Ok(languages
            .into_iter()
            .map(|language| {
                let frameworks = Self::sorted(self.catalog.framework_names(&language))
                    .into_iter()
                    .map(|framework| {
                        let libraries =
                            Self::sorted(self.catalog.library_names(&language, &framework))
                                .into_iter()
                                .map(|library| LibraryListing {
                                    description: self
                                        .catalog
                                        .library_description(&language, &framework, &library),
                                    name: library,
                                })
                                .collect();
                        FrameworkListing {
                            description: self
                                .catalog
                                .framework_description(&language, &framework),
                            name: framework,
                            libraries,
                        }
                    })
                    .collect();
                LanguageListing {
                    name: language,
                    frameworks,
                }
            })
            .collect())
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let listing = self.listing()?;

        if self.args.json {
            let json = serde_json::to_string_pretty(&listing)
                .map_err(|e| InitiatorError::Other(e.into()))?;
            ui.message(&json);
            return Ok(CommandResult::success());
        }

        if listing.is_empty() {
            ui.warning("The catalog offers no languages.");
            return Ok(CommandResult::success());
        }

        let theme = InitiatorTheme::for_colors(should_use_colors());
        for (i, language) in listing.iter().enumerate() {
            if i > 0 {
                ui.message("");
            }
            ui.message(&format!("  {}", theme.key.apply_to(&language.name)));
            for framework in &language.frameworks {
                ui.message(&format!(
                    "    {} {}",
                    theme.highlight.apply_to(&framework.name),
                    theme.dim.apply_to(format!("· {}", framework.description)),
                ));
                for library in &framework.libraries {
                    ui.message(&format!(
                        "      {} {} {}",
                        theme.dim.apply_to("└──"),
                        library.name,
                        theme.dim.apply_to(format!("· {}", library.description)),
                    ));
                }
            }
        }

        Ok(CommandResult::success())
    }
}
