//! The interactive project wizard.
//!
//! The wizard walks the user through language, framework, optional
//! libraries, project name and a final review, then hands back a
//! [`WizardResult`]. It neither writes files nor runs generators.
//!
//! # Layout
//!
//! - [`stage`] - the stage state machine ([`stage::WizardState`])
//! - [`selection`] - highlight-cursor lists and their item kinds
//! - [`name_input`] - the project name text buffer
//! - [`spring`] - damped spring integrator for animations
//! - [`animation`] - reveal and physics timers, [`animation::Scheduler`]
//! - [`title`] - the animated title block
//! - [`layout`], [`palette`], [`render`] - drawing
//! - [`keys`] - key bindings
//! - [`app`] - message handling for one run
//! - [`event_loop`] - the crossterm terminal driver
//!
//! # Example
//!
//! ```
//! use initiator::catalog::Catalog;
//! use initiator::wizard::keys::Action;
//! use initiator::wizard::stage::WizardState;
//! use initiator::wizard::{WizardOptions, WizardOutcome};
//!
//! let options = WizardOptions {
//!     default_language: Some("Python".into()),
//!     ..Default::default()
//! };
//! let mut state = WizardState::new(Catalog::builtin(), &options);
//! state.apply(Action::Confirm).unwrap(); // Python
//! state.apply(Action::Confirm).unwrap(); // Vanilla
//! for c in "api".chars() {
//!     state.apply(Action::Insert(c)).unwrap();
//! }
//! state.apply(Action::Confirm).unwrap();
//! state.apply(Action::Confirm).unwrap();
//!
//! match state.outcome() {
//!     Some(WizardOutcome::Completed(result)) => assert_eq!(result.name, "api"),
//!     other => panic!("unexpected outcome: {:?}", other),
//! }
//! ```

pub mod animation;
pub mod app;
pub mod event_loop;
pub mod keys;
pub mod layout;
pub mod name_input;
pub mod palette;
pub mod render;
pub mod selection;
pub mod spring;
pub mod stage;
pub mod title;

use serde::Serialize;

pub use event_loop::run_wizard;
pub use stage::{Stage, WizardState};

/// The user's selections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WizardResult {
    pub language: String,
    pub framework: String,
    pub name: String,
    /// Chosen libraries, sorted case-insensitively.
    pub libraries: Vec<String>,
}

/// How a wizard run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardOutcome {
    Completed(WizardResult),
    Cancelled,
}

/// Settings for one wizard run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WizardOptions {
    /// Language highlighted on the first stage.
    pub default_language: Option<String>,
    /// Framework highlighted on the framework stage.
    pub default_framework: Option<String>,
    /// Draw without colors.
    pub no_color: bool,
}
