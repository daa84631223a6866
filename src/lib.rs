//! Initiator - start a new project from an interactive terminal wizard.
//!
//! Initiator asks for a language, a starter framework, optional libraries
//! and a project name, then reports the choices. The full-screen wizard
//! has an animated title, a spring-driven panel entrance and sliding stage
//! transitions. Where no terminal is available the same stages run as
//! plain prompts.
//!
//! # Modules
//!
//! - [`catalog`] - The language/framework/library option catalog
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`ui`] - Line-oriented output and prompts
//! - [`wizard`] - The full-screen wizard and its stage machine
//!
//! # Example
//!
//! ```
//! use initiator::catalog::Catalog;
//!
//! let catalog = Catalog::builtin();
//! assert!(catalog.framework_names("Go").contains(&"Cobra".to_string()));
//! assert_eq!(catalog.resolve_language("python").as_deref(), Some("Python"));
//! ```

pub mod catalog;
pub mod cli;
pub mod error;
pub mod ui;
pub mod wizard;

pub use error::{InitiatorError, Result};
pub use wizard::{WizardOptions, WizardOutcome, WizardResult};
