//! Catalog schema definitions.
//!
//! These structs map one-to-one to the YAML catalog format:
//!
//! ```yaml
//! languages:
//!   - name: Go
//!     frameworks:
//!       - name: Cobra
//!         description: CLI app structure
//!         libraries:
//!           - name: gin
//!             description: HTTP web framework
//! ```

use serde::{Deserialize, Serialize};

/// Root of a catalog file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogFile {
    /// Language entries in file order. A language may appear more than once;
    /// its frameworks are merged.
    pub languages: Vec<LanguageEntry>,
}

/// A selectable language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageEntry {
    /// Display name (e.g., "Go").
    pub name: String,

    /// Starter frameworks for this language.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub frameworks: Vec<FrameworkEntry>,
}

/// A starter framework for a language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameworkEntry {
    /// Display name (e.g., "Cobra").
    pub name: String,

    /// Short description shown under the name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Optional add-on libraries for this language/framework pair.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub libraries: Vec<LibraryEntry>,
}

/// An optional add-on library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LibraryEntry {
    /// Library name (e.g., "gin").
    pub name: String,

    /// Short description shown under the name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl LanguageEntry {
    pub fn new(name: impl Into<String>, frameworks: Vec<FrameworkEntry>) -> Self {
        Self {
            name: name.into(),
            frameworks,
        }
    }
}

impl FrameworkEntry {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: Some(description.into()),
            libraries: Vec::new(),
        }
    }

    /// Attach libraries to this framework.
    pub fn with_libraries(mut self, libraries: Vec<LibraryEntry>) -> Self {
        self.libraries = libraries;
        self
    }
}

impl LibraryEntry {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: Some(description.into()),
        }
    }
}
