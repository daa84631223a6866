//! Error types for initiator operations.
//!
//! This module defines [`InitiatorError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `InitiatorError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `InitiatorError::Other`) for unexpected errors
//! - A cancelled wizard is not an error; see [`crate::wizard::WizardOutcome`]

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for initiator operations.
#[derive(Debug, Error)]
pub enum InitiatorError {
    /// Catalog file not found at the given location.
    #[error("Catalog not found: {path}")]
    CatalogNotFound { path: PathBuf },

    /// Failed to parse a catalog file.
    #[error("Failed to parse catalog at {path}: {message}")]
    CatalogParse { path: PathBuf, message: String },

    /// The wizard tried to advance from a stage whose list is empty.
    ///
    /// This means the option catalog handed to the wizard is malformed.
    #[error("Catalog invariant violated: {message}")]
    CatalogInvariant { message: String },

    /// A language or framework passed on the command line is not in the catalog.
    #[error("Unknown {kind}: {value}")]
    InvalidSelection { kind: &'static str, value: String },

    /// A user-supplied value failed validation.
    #[error("Invalid {field}: {message}")]
    Validation { field: String, message: String },

    /// Terminal setup or teardown failed.
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Exit code for a run the user cancelled.
pub const EXIT_CANCELLED: i32 = 130;

/// Exit code for bad input: flags, answers or the catalog file.
pub const EXIT_USAGE: i32 = 2;

impl InitiatorError {
    /// Process exit code for this error.
    ///
    /// Problems with what the user supplied exit with [`EXIT_USAGE`];
    /// everything else exits with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::CatalogNotFound { .. }
            | Self::CatalogParse { .. }
            | Self::InvalidSelection { .. }
            | Self::Validation { .. } => EXIT_USAGE,
            Self::CatalogInvariant { .. } | Self::Terminal { .. } | Self::Io(_) | Self::Other(_) => {
                1
            }
        }
    }
}

/// Result type alias for initiator operations.
pub type Result<T> = std::result::Result<T, InitiatorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_not_found_displays_path() {
        let err = InitiatorError::CatalogNotFound {
            path: PathBuf::from("/foo/catalog.yml"),
        };
        assert!(err.to_string().contains("/foo/catalog.yml"));
    }

    #[test]
    fn catalog_parse_displays_path_and_message() {
        let err = InitiatorError::CatalogParse {
            path: PathBuf::from("/catalog.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/catalog.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn catalog_invariant_displays_message() {
        let err = InitiatorError::CatalogInvariant {
            message: "no language selected".into(),
        };
        assert!(err.to_string().contains("no language selected"));
    }

    #[test]
    fn invalid_selection_displays_kind_and_value() {
        let err = InitiatorError::InvalidSelection {
            kind: "language",
            value: "Cobol".into(),
        };
        assert_eq!(err.to_string(), "Unknown language: Cobol");
    }

    #[test]
    fn validation_displays_field_and_message() {
        let err = InitiatorError::Validation {
            field: "name".into(),
            message: "Name is required".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("name"));
        assert!(msg.contains("Name is required"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: InitiatorError = io_err.into();
        assert!(matches!(err, InitiatorError::Io(_)));
    }

    #[test]
    fn input_errors_exit_with_usage_code() {
        let err = InitiatorError::InvalidSelection {
            kind: "framework",
            value: "Rails".into(),
        };
        assert_eq!(err.exit_code(), EXIT_USAGE);
        let err = InitiatorError::CatalogNotFound {
            path: PathBuf::from("missing.yml"),
        };
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn runtime_errors_exit_with_one() {
        let err = InitiatorError::Terminal {
            message: "no tty".into(),
        };
        assert_eq!(err.exit_code(), 1);
        let err = InitiatorError::CatalogInvariant {
            message: "empty".into(),
        };
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(InitiatorError::Terminal {
                message: "raw mode".into(),
            })
        }
        assert!(returns_error().is_err());
    }
}
