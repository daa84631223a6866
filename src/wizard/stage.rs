//! The wizard's stage state machine.
//!
//! [`WizardState`] owns everything the user has chosen so far and moves
//! through the stages in a fixed order:
//!
//! ```text
//! Language → Framework → [Libraries] → Name → Confirm → Done
//! ```
//!
//! Libraries is only entered when the chosen language/framework pair has
//! add-ons. Every stage change reports a [`Direction`] so the caller can
//! start the slide animation. Cancel is accepted on every stage and is
//! terminal.

use std::collections::BTreeSet;
use std::fmt;

use crate::catalog::{template_count_label, Catalog, BASELINE_FRAMEWORK};
use crate::error::{InitiatorError, Result};

use super::keys::Action;
use super::name_input::NameInput;
use super::selection::{
    sort_labels, unique_labels, Choice, FrameworkChoice, LanguageChoice, LibraryChoice,
    SelectionList,
};
use super::{WizardOptions, WizardOutcome, WizardResult};

/// Error shown under the name field when it is left blank.
pub const NAME_REQUIRED: &str = "Name is required";

/// One step of the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stage {
    Language,
    Framework,
    Libraries,
    Name,
    Confirm,
    Done,
}

impl Stage {
    pub const ALL: [Stage; 6] = [
        Stage::Language,
        Stage::Framework,
        Stage::Libraries,
        Stage::Name,
        Stage::Confirm,
        Stage::Done,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Stage::Language => "Choose a language",
            Stage::Framework => "Choose a framework",
            Stage::Libraries => "Choose libraries",
            Stage::Name => "Name your project",
            Stage::Confirm => "Confirm your selections",
            Stage::Done => "Done",
        }
    }

    pub fn subtitle(&self) -> &'static str {
        match self {
            Stage::Language => "Pick the main language for the starter",
            Stage::Framework => "Select the starter template",
            Stage::Libraries => "Select optional packages (space to toggle)",
            Stage::Name => "This will create the folder name",
            Stage::Confirm => "Review before creating the project",
            Stage::Done => "",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Language => "language",
            Stage::Framework => "framework",
            Stage::Libraries => "libraries",
            Stage::Name => "name",
            Stage::Confirm => "confirm",
            Stage::Done => "done",
        };
        write!(f, "{}", name)
    }
}

/// Which way a stage change went.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// What applying an action did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Same stage; the state may still have changed (highlight, text, error).
    Stay,
    /// Entered a new stage.
    Moved(Direction),
    /// Confirmed the review; the result is final.
    Finished,
    /// The user cancelled.
    Cancelled,
}

/// The whole mutable state of one wizard run.
#[derive(Debug, Clone)]
pub struct WizardState {
    catalog: Catalog,
    stage: Stage,
    languages: SelectionList<LanguageChoice>,
    frameworks: SelectionList<FrameworkChoice>,
    libraries: SelectionList<LibraryChoice>,
    selected_libraries: BTreeSet<String>,
    pending: WizardResult,
    name_input: NameInput,
    name_error: Option<String>,
    cancelled: bool,
}

impl WizardState {
    /// Start at the language stage with the default language highlighted.
    pub fn new(catalog: Catalog, options: &WizardOptions) -> Self {
        let mut names = unique_labels(catalog.language_names());
        sort_labels(&mut names);
        let items = names
            .into_iter()
            .map(|name| {
                let count = unique_labels(catalog.framework_names(&name)).len();
                LanguageChoice {
                    description: template_count_label(count),
                    name,
                }
            })
            .collect();

        let mut languages = SelectionList::new(items);
        if let Some(lang) = &options.default_language {
            languages.select_label(lang);
        }

        let pending = WizardResult {
            language: options.default_language.clone().unwrap_or_default(),
            framework: options
                .default_framework
                .clone()
                .filter(|f| !f.trim().is_empty())
                .unwrap_or_else(|| BASELINE_FRAMEWORK.to_string()),
            ..WizardResult::default()
        };

        Self {
            catalog,
            stage: Stage::Language,
            languages,
            frameworks: SelectionList::default(),
            libraries: SelectionList::default(),
            selected_libraries: BTreeSet::new(),
            pending,
            name_input: NameInput::new(),
            name_error: None,
            cancelled: false,
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Whether no further input will be accepted.
    pub fn is_finished(&self) -> bool {
        self.cancelled || self.stage == Stage::Done
    }

    /// The final outcome, once finished.
    pub fn outcome(&self) -> Option<WizardOutcome> {
        if self.cancelled {
            Some(WizardOutcome::Cancelled)
        } else if self.stage == Stage::Done {
            Some(WizardOutcome::Completed(self.pending.clone()))
        } else {
            None
        }
    }

    /// Selections accumulated so far.
    pub fn pending(&self) -> &WizardResult {
        &self.pending
    }

    pub fn languages(&self) -> &SelectionList<LanguageChoice> {
        &self.languages
    }

    pub fn frameworks(&self) -> &SelectionList<FrameworkChoice> {
        &self.frameworks
    }

    pub fn libraries(&self) -> &SelectionList<LibraryChoice> {
        &self.libraries
    }

    pub fn selected_libraries(&self) -> &BTreeSet<String> {
        &self.selected_libraries
    }

    pub fn name_input(&self) -> &NameInput {
        &self.name_input
    }

    pub fn name_error(&self) -> Option<&str> {
        self.name_error.as_deref()
    }

    /// Highlighted row of the active list, if the stage has one.
    pub fn highlighted(&self) -> Option<Choice<'_>> {
        match self.stage {
            Stage::Language => self.languages.selected().map(Choice::Language),
            Stage::Framework => self.frameworks.selected().map(Choice::Framework),
            Stage::Libraries => self.libraries.selected().map(Choice::Library),
            _ => None,
        }
    }

    /// Size every list for rendering.
    pub fn set_list_size(&mut self, width: u16, height: u16) {
        self.languages.set_size(width, height);
        self.frameworks.set_size(width, height);
        self.libraries.set_size(width, height);
    }

    /// Whether the current language/framework pair has a library stage.
    pub fn has_library_stage(&self) -> bool {
        !self.libraries.is_empty()
    }

    /// Fraction of the flow completed, for the progress bar.
    pub fn progress(&self) -> f64 {
        let total = if self.has_library_stage() { 4.0 } else { 3.0 };
        match self.stage {
            Stage::Language => 0.0,
            Stage::Framework => 1.0 / total,
            Stage::Libraries => 2.0 / total,
            Stage::Name => (total - 1.0) / total,
            Stage::Confirm | Stage::Done => 1.0,
        }
    }

    /// Short label for the status line.
    pub fn step_label(&self) -> &'static str {
        match self.stage {
            Stage::Language => "Step 1",
            Stage::Framework => "Step 2",
            Stage::Libraries => "Step 3/4",
            Stage::Name if self.has_library_stage() => "Step 4/4",
            Stage::Name => "Step 3/3",
            Stage::Confirm | Stage::Done => "Review",
        }
    }

    /// Apply one semantic action.
    ///
    /// # Errors
    ///
    /// Returns `CatalogInvariant` when confirming a stage whose list is
    /// empty. The state is cancelled before the error is returned.
    pub fn apply(&mut self, action: Action) -> Result<Transition> {
        if self.is_finished() {
            return Ok(Transition::Stay);
        }

        match action {
            Action::Cancel => Ok(self.cancel()),
            Action::Confirm => self.confirm(),
            Action::Back => Ok(self.back()),
            Action::Toggle => Ok(self.toggle()),
            Action::Up => {
                self.move_highlight(false);
                Ok(Transition::Stay)
            }
            Action::Down => {
                self.move_highlight(true);
                Ok(Transition::Stay)
            }
            edit => {
                self.edit_name(edit);
                Ok(Transition::Stay)
            }
        }
    }

    pub fn cancel(&mut self) -> Transition {
        if self.is_finished() {
            return Transition::Stay;
        }
        tracing::debug!("Wizard cancelled on {} stage", self.stage);
        self.cancelled = true;
        Transition::Cancelled
    }

    /// Advance from the current stage.
    pub fn confirm(&mut self) -> Result<Transition> {
        if self.is_finished() {
            return Ok(Transition::Stay);
        }

        match self.stage {
            Stage::Language => {
                let language = match self.languages.selected() {
                    Some(item) => item.name.clone(),
                    None => return Err(self.invariant("no language to select")),
                };
                self.pending.language = language;
                self.frameworks = self.build_frameworks();
                Ok(self.enter(Stage::Framework, Direction::Forward))
            }
            Stage::Framework => {
                let framework = match self.frameworks.selected() {
                    Some(item) => item.name.clone(),
                    None => return Err(self.invariant("no framework to select")),
                };
                self.pending.framework = framework;
                self.selected_libraries.clear();
                self.libraries = self.build_libraries();
                let next = if self.libraries.is_empty() {
                    Stage::Name
                } else {
                    Stage::Libraries
                };
                Ok(self.enter(next, Direction::Forward))
            }
            Stage::Libraries => Ok(self.enter(Stage::Name, Direction::Forward)),
            Stage::Name => {
                let value = self.name_input.value();
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    self.name_error = Some(NAME_REQUIRED.to_string());
                    return Ok(Transition::Stay);
                }
                self.name_error = None;
                self.pending.name = trimmed.to_string();
                let mut libraries: Vec<String> = self.selected_libraries.iter().cloned().collect();
                sort_labels(&mut libraries);
                self.pending.libraries = libraries;
                Ok(self.enter(Stage::Confirm, Direction::Forward))
            }
            Stage::Confirm => {
                tracing::debug!(
                    "Wizard finished: {} / {} / {}",
                    self.pending.language,
                    self.pending.framework,
                    self.pending.name
                );
                self.stage = Stage::Done;
                Ok(Transition::Finished)
            }
            Stage::Done => Ok(Transition::Stay),
        }
    }

    /// Return to the previous stage. Selections made on later stages are
    /// kept; they are simply no longer active.
    pub fn back(&mut self) -> Transition {
        if self.is_finished() {
            return Transition::Stay;
        }

        let previous = match self.stage {
            Stage::Framework => Stage::Language,
            Stage::Libraries => Stage::Framework,
            Stage::Name if self.libraries.is_empty() => Stage::Framework,
            Stage::Name => Stage::Libraries,
            Stage::Confirm => Stage::Name,
            Stage::Language | Stage::Done => return Transition::Stay,
        };
        self.enter(previous, Direction::Backward)
    }

    /// Flip the highlighted library. Only meaningful on the library stage.
    pub fn toggle(&mut self) -> Transition {
        if self.stage != Stage::Libraries || self.cancelled {
            return Transition::Stay;
        }
        let Some(name) = self.libraries.selected().map(|item| item.name.clone()) else {
            return Transition::Stay;
        };
        if !self.selected_libraries.remove(&name) {
            self.selected_libraries.insert(name);
        }
        let items = self.library_items();
        self.libraries.set_items(items);
        Transition::Stay
    }

    /// Move the current stage's highlight to the item named `label`
    /// (case-insensitive). Returns false when no item matches or the stage
    /// has no list.
    pub fn highlight(&mut self, label: &str) -> bool {
        match self.stage {
            Stage::Language => self.languages.select_label(label),
            Stage::Framework => self.frameworks.select_label(label),
            Stage::Libraries => self.libraries.select_label(label),
            _ => false,
        }
    }

    /// Replace the name buffer. Ignored outside the name stage.
    pub fn set_name(&mut self, value: &str) {
        if self.stage == Stage::Name {
            self.name_input.set_value(value);
        }
    }

    fn move_highlight(&mut self, down: bool) {
        macro_rules! step {
            ($list:expr) => {
                if down {
                    $list.next()
                } else {
                    $list.previous()
                }
            };
        }
        match self.stage {
            Stage::Language => step!(self.languages),
            Stage::Framework => step!(self.frameworks),
            Stage::Libraries => step!(self.libraries),
            _ => {}
        }
    }

    fn edit_name(&mut self, action: Action) {
        if self.stage != Stage::Name {
            return;
        }
        let input = &mut self.name_input;
        match action {
            Action::Insert(c) => input.insert(c),
            Action::DeleteBack => input.delete_back(),
            Action::DeleteForward => input.delete_forward(),
            Action::CursorLeft => input.move_left(),
            Action::CursorRight => input.move_right(),
            Action::CursorHome => input.move_home(),
            Action::CursorEnd => input.move_end(),
            _ => {}
        }
    }

    fn enter(&mut self, stage: Stage, direction: Direction) -> Transition {
        tracing::debug!("Stage {} -> {} ({:?})", self.stage, stage, direction);
        self.stage = stage;
        Transition::Moved(direction)
    }

    fn invariant(&mut self, message: &str) -> InitiatorError {
        tracing::warn!("Cancelling wizard on {} stage: {}", self.stage, message);
        self.cancelled = true;
        InitiatorError::CatalogInvariant {
            message: message.to_string(),
        }
    }

    fn build_frameworks(&self) -> SelectionList<FrameworkChoice> {
        let language = &self.pending.language;
        let mut names = unique_labels(self.catalog.framework_names(language));
        sort_labels(&mut names);
        let items = names
            .into_iter()
            .map(|name| FrameworkChoice {
                description: self.catalog.framework_description(language, &name),
                name,
            })
            .collect();

        let mut list = SelectionList::new(items);
        list.set_size(self.languages.width(), self.languages.height());
        list.select_label(&self.pending.framework);
        list
    }

    fn build_libraries(&self) -> SelectionList<LibraryChoice> {
        let mut list = SelectionList::new(self.library_items());
        list.set_size(self.frameworks.width(), self.frameworks.height());
        list
    }

    fn library_items(&self) -> Vec<LibraryChoice> {
        let (language, framework) = (&self.pending.language, &self.pending.framework);
        let mut names = unique_labels(self.catalog.library_names(language, framework));
        sort_labels(&mut names);
        names
            .into_iter()
            .map(|name| LibraryChoice {
                description: self.catalog.library_description(language, framework, &name),
                checked: self.selected_libraries.contains(&name),
                name,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogFile, FrameworkEntry, LanguageEntry, LibraryEntry};

    fn catalog() -> Catalog {
        Catalog::new(CatalogFile {
            languages: vec![
                LanguageEntry::new(
                    "Go",
                    vec![
                        FrameworkEntry::new("Vanilla", "minimal starter").with_libraries(vec![
                            LibraryEntry::new("sqlc", "sql"),
                            LibraryEntry::new("Gin", "web"),
                        ]),
                        FrameworkEntry::new("Cobra", "cli"),
                        FrameworkEntry::new("vanilla", "duplicate"),
                    ],
                ),
                LanguageEntry::new("python", vec![FrameworkEntry::new("FastAPI", "api")]),
                LanguageEntry::new("Elixir", vec![]),
            ],
        })
    }

    fn wizard() -> WizardState {
        WizardState::new(catalog(), &WizardOptions::default())
    }

    fn confirm(state: &mut WizardState) -> Transition {
        state.apply(Action::Confirm).unwrap()
    }

    fn type_name(state: &mut WizardState, name: &str) {
        for c in name.chars() {
            state.apply(Action::Insert(c)).unwrap();
        }
    }

    fn labels<T: crate::wizard::selection::ListItem>(list: &SelectionList<T>) -> Vec<String> {
        list.items().iter().map(|i| i.label().into_owned()).collect()
    }

    #[test]
    fn languages_sorted_case_insensitively() {
        let state = wizard();
        assert_eq!(labels(state.languages()), vec!["Elixir", "Go", "python"]);
        assert_eq!(state.languages().items()[1].description, "2 templates");
        assert_eq!(state.stage(), Stage::Language);
    }

    #[test]
    fn default_language_is_highlighted() {
        let options = WizardOptions {
            default_language: Some("PYTHON".into()),
            ..Default::default()
        };
        let state = WizardState::new(catalog(), &options);
        assert_eq!(state.languages().selected().unwrap().name, "python");
    }

    #[test]
    fn frameworks_deduped_and_sorted() {
        let mut state = wizard();
        state.apply(Action::Down).unwrap();
        assert_eq!(confirm(&mut state), Transition::Moved(Direction::Forward));
        assert_eq!(state.stage(), Stage::Framework);
        assert_eq!(state.pending().language, "Go");
        assert_eq!(labels(state.frameworks()), vec!["Cobra", "Vanilla"]);
        // Baseline framework is preselected.
        assert_eq!(state.frameworks().selected().unwrap().name, "Vanilla");
    }

    #[test]
    fn repeated_language_entries_merge() {
        let catalog = Catalog::new(CatalogFile {
            languages: vec![
                LanguageEntry::new(
                    "Go",
                    vec![
                        FrameworkEntry::new("Vanilla", "minimal starter"),
                        FrameworkEntry::new("Cobra", "cli"),
                    ],
                ),
                LanguageEntry::new(
                    "Go",
                    vec![
                        FrameworkEntry::new("cobra", "cli again"),
                        FrameworkEntry::new("Vanilla", "minimal starter"),
                    ],
                ),
            ],
        });
        let mut state = WizardState::new(catalog, &WizardOptions::default());
        assert_eq!(labels(state.languages()), vec!["Go"]);

        confirm(&mut state);
        assert_eq!(state.stage(), Stage::Framework);
        assert_eq!(labels(state.frameworks()), vec!["Cobra", "Vanilla"]);
    }

    #[test]
    fn language_without_frameworks_offers_baseline() {
        let mut state = wizard();
        confirm(&mut state);
        assert_eq!(state.pending().language, "Elixir");
        assert_eq!(labels(state.frameworks()), vec![BASELINE_FRAMEWORK]);
    }

    #[test]
    fn empty_libraries_skip_stage_both_ways() {
        let mut state = wizard();
        state.apply(Action::Down).unwrap();
        confirm(&mut state);
        state.apply(Action::Up).unwrap();
        assert_eq!(state.frameworks().selected().unwrap().name, "Cobra");
        confirm(&mut state);
        assert_eq!(state.stage(), Stage::Name);
        assert!(!state.has_library_stage());

        assert_eq!(state.back(), Transition::Moved(Direction::Backward));
        assert_eq!(state.stage(), Stage::Framework);
    }

    #[test]
    fn toggle_flips_library_and_keeps_highlight() {
        let mut state = wizard();
        state.apply(Action::Down).unwrap();
        confirm(&mut state);
        confirm(&mut state);
        assert_eq!(state.stage(), Stage::Libraries);
        assert_eq!(labels(state.libraries()), vec!["[ ] Gin", "[ ] sqlc"]);

        state.apply(Action::Down).unwrap();
        state.apply(Action::Toggle).unwrap();
        assert_eq!(labels(state.libraries()), vec!["[ ] Gin", "[x] sqlc"]);
        assert_eq!(state.libraries().index(), Some(1));

        state.apply(Action::Toggle).unwrap();
        assert!(state.selected_libraries().is_empty());
        assert_eq!(labels(state.libraries()), vec!["[ ] Gin", "[ ] sqlc"]);
        assert_eq!(state.libraries().index(), Some(1));
    }

    #[test]
    fn highlight_by_name_then_toggle() {
        let mut state = wizard();
        assert!(state.highlight("go"));
        confirm(&mut state);
        assert!(!state.highlight("Rails"));
        confirm(&mut state);
        assert!(state.highlight("SQLC"));
        state.toggle();
        assert!(state.selected_libraries().contains("sqlc"));
        confirm(&mut state);
        assert!(!state.highlight("Go"));
    }

    #[test]
    fn set_name_only_on_name_stage() {
        let mut state = wizard();
        state.set_name("early");
        assert!(state.name_input().is_empty());
        confirm(&mut state);
        confirm(&mut state);
        state.set_name("demo");
        assert_eq!(confirm(&mut state), Transition::Moved(Direction::Forward));
        assert_eq!(state.pending().name, "demo");
    }

    #[test]
    fn toggle_ignored_outside_libraries() {
        let mut state = wizard();
        assert_eq!(state.toggle(), Transition::Stay);
        assert!(state.selected_libraries().is_empty());
    }

    #[test]
    fn whitespace_name_is_rejected_then_accepted() {
        let mut state = wizard();
        confirm(&mut state);
        confirm(&mut state);
        assert_eq!(state.stage(), Stage::Name);

        type_name(&mut state, "   ");
        assert_eq!(confirm(&mut state), Transition::Stay);
        assert_eq!(state.stage(), Stage::Name);
        assert_eq!(state.name_error(), Some(NAME_REQUIRED));

        state.apply(Action::CursorHome).unwrap();
        type_name(&mut state, "acme");
        assert_eq!(confirm(&mut state), Transition::Moved(Direction::Forward));
        assert_eq!(state.pending().name, "acme");
        assert_eq!(state.name_error(), None);
    }

    #[test]
    fn full_flow_produces_result() {
        let mut state = wizard();
        state.apply(Action::Down).unwrap();
        confirm(&mut state);
        confirm(&mut state);
        state.apply(Action::Toggle).unwrap();
        state.apply(Action::Down).unwrap();
        state.apply(Action::Toggle).unwrap();
        confirm(&mut state);
        type_name(&mut state, "demo");
        confirm(&mut state);
        assert_eq!(state.stage(), Stage::Confirm);
        assert_eq!(confirm(&mut state), Transition::Finished);

        let expected = WizardResult {
            language: "Go".into(),
            framework: "Vanilla".into(),
            name: "demo".into(),
            libraries: vec!["Gin".into(), "sqlc".into()],
        };
        assert_eq!(state.outcome(), Some(WizardOutcome::Completed(expected)));
    }

    #[test]
    fn reconfirming_framework_resets_libraries() {
        let mut state = wizard();
        state.apply(Action::Down).unwrap();
        confirm(&mut state);
        confirm(&mut state);
        state.apply(Action::Toggle).unwrap();
        assert_eq!(state.selected_libraries().len(), 1);

        state.back();
        confirm(&mut state);
        assert!(state.selected_libraries().is_empty());
    }

    #[test]
    fn back_keeps_downstream_pending_fields() {
        let mut state = wizard();
        state.apply(Action::Down).unwrap();
        confirm(&mut state);
        confirm(&mut state);
        state.apply(Action::Toggle).unwrap();
        confirm(&mut state);
        type_name(&mut state, "demo");
        confirm(&mut state);
        assert_eq!(state.pending().libraries, vec!["Gin"]);

        state.back();
        assert_eq!(state.stage(), Stage::Name);
        assert_eq!(state.back(), Transition::Moved(Direction::Backward));
        assert_eq!(state.stage(), Stage::Libraries);
        assert_eq!(state.pending().libraries, vec!["Gin"]);
        assert_eq!(state.pending().name, "demo");
    }

    #[test]
    fn back_on_language_stays() {
        let mut state = wizard();
        assert_eq!(state.back(), Transition::Stay);
        assert_eq!(state.stage(), Stage::Language);
    }

    #[test]
    fn cancel_is_terminal() {
        let mut state = wizard();
        confirm(&mut state);
        assert_eq!(state.apply(Action::Cancel).unwrap(), Transition::Cancelled);
        assert!(state.is_cancelled());
        assert_eq!(state.outcome(), Some(WizardOutcome::Cancelled));

        assert_eq!(confirm(&mut state), Transition::Stay);
        assert_eq!(state.back(), Transition::Stay);
        assert_eq!(state.stage(), Stage::Framework);
    }

    #[test]
    fn empty_catalog_is_an_invariant_error() {
        let mut state = WizardState::new(Catalog::default(), &WizardOptions::default());
        let err = state.apply(Action::Confirm).unwrap_err();
        assert!(matches!(err, InitiatorError::CatalogInvariant { .. }));
        assert!(state.is_cancelled());
        assert_eq!(state.outcome(), Some(WizardOutcome::Cancelled));
    }

    #[test]
    fn progress_and_step_labels() {
        let mut state = wizard();
        assert_eq!(state.progress(), 0.0);
        assert_eq!(state.step_label(), "Step 1");

        state.apply(Action::Down).unwrap();
        confirm(&mut state);
        assert_eq!(state.step_label(), "Step 2");
        assert!((state.progress() - 1.0 / 3.0).abs() < 1e-9);

        confirm(&mut state);
        assert_eq!(state.step_label(), "Step 3/4");
        assert!((state.progress() - 0.5).abs() < 1e-9);

        confirm(&mut state);
        assert_eq!(state.step_label(), "Step 4/4");
        assert!((state.progress() - 0.75).abs() < 1e-9);

        type_name(&mut state, "x");
        confirm(&mut state);
        assert_eq!(state.step_label(), "Review");
        assert_eq!(state.progress(), 1.0);
    }

    #[test]
    fn name_stage_without_libraries_is_step_three_of_three() {
        let mut state = wizard();
        confirm(&mut state);
        confirm(&mut state);
        assert_eq!(state.step_label(), "Step 3/3");
        assert!((state.progress() - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn highlighted_matches_stage_kind() {
        let mut state = wizard();
        assert!(matches!(state.highlighted(), Some(Choice::Language(_))));
        confirm(&mut state);
        assert!(matches!(state.highlighted(), Some(Choice::Framework(_))));
        confirm(&mut state);
        assert!(state.highlighted().is_none());
    }

    #[test]
    fn list_size_carries_to_new_lists() {
        let mut state = wizard();
        state.set_list_size(70, 12);
        state.apply(Action::Down).unwrap();
        confirm(&mut state);
        assert_eq!(state.frameworks().width(), 70);
        confirm(&mut state);
        assert_eq!(state.libraries().height(), 12);
    }
}
