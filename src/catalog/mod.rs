//! The option catalog offered by the wizard.
//!
//! A [`Catalog`] is an immutable value built once (from the built-in table
//! or a YAML file) and handed to the wizard for the lifetime of one run.
//!
//! - Schema definitions in [`schema`]
//! - File loading in [`loader`]
//! - The default table in [`builtin`]
//!
//! Lookups by language and framework name are case-insensitive and merge
//! repeated entries, so a catalog that lists "Go" twice behaves like one
//! that lists it once with the union of its frameworks. Name lists are
//! returned raw (catalog order, duplicates kept); callers deduplicate and
//! sort before display.
//!
//! # Example
//!
//! ```
//! use initiator::catalog::Catalog;
//!
//! let catalog = Catalog::builtin();
//! assert!(catalog.framework_names("Go").iter().any(|f| f == "Cobra"));
//! assert!(catalog.has_libraries("Go", "Cobra"));
//! ```

pub mod builtin;
pub mod loader;
pub mod schema;

pub use loader::{load_catalog, parse_catalog};
pub use schema::{CatalogFile, FrameworkEntry, LanguageEntry, LibraryEntry};

/// Framework every language offers even when the catalog lists none.
pub const BASELINE_FRAMEWORK: &str = "Vanilla";

/// Immutable catalog of languages, frameworks and libraries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    file: CatalogFile,
}

/// Description line for a language ("3 templates").
pub fn template_count_label(count: usize) -> String {
    let noun = if count == 1 { "template" } else { "templates" };
    format!("{} {}", count, noun)
}

fn same_name(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}

impl Catalog {
    /// Wrap a parsed catalog file.
    pub fn new(file: CatalogFile) -> Self {
        Self { file }
    }

    /// The catalog shipped with the binary.
    pub fn builtin() -> Self {
        builtin::builtin_catalog()
    }

    /// The underlying file representation (for serialization).
    pub fn file(&self) -> &CatalogFile {
        &self.file
    }

    pub fn is_empty(&self) -> bool {
        self.file.languages.is_empty()
    }

    /// Language names in catalog order.
    pub fn language_names(&self) -> Vec<String> {
        self.file
            .languages
            .iter()
            .map(|l| l.name.clone())
            .collect()
    }

    fn languages_named<'a>(&'a self, language: &'a str) -> impl Iterator<Item = &'a LanguageEntry> {
        self.file
            .languages
            .iter()
            .filter(move |l| same_name(&l.name, language))
    }

    fn frameworks_named<'a>(
        &'a self,
        language: &'a str,
        framework: &'a str,
    ) -> impl Iterator<Item = &'a FrameworkEntry> {
        self.languages_named(language)
            .flat_map(|l| l.frameworks.iter())
            .filter(move |f| same_name(&f.name, framework))
    }

    /// Framework names for a language, merged across repeated entries.
    ///
    /// The baseline framework is prepended when missing, so a language with
    /// no frameworks still offers one choice.
    pub fn framework_names(&self, language: &str) -> Vec<String> {
        let mut names: Vec<String> = self
            .languages_named(language)
            .flat_map(|l| l.frameworks.iter().map(|f| f.name.clone()))
            .collect();
        if !names.iter().any(|n| same_name(n, BASELINE_FRAMEWORK)) {
            names.insert(0, BASELINE_FRAMEWORK.to_string());
        }
        names
    }

    /// Library names for a language/framework pair, merged across entries.
    pub fn library_names(&self, language: &str, framework: &str) -> Vec<String> {
        self.frameworks_named(language, framework)
            .flat_map(|f| f.libraries.iter().map(|l| l.name.clone()))
            .collect()
    }

    /// Whether the pair has at least one non-blank library.
    pub fn has_libraries(&self, language: &str, framework: &str) -> bool {
        self.library_names(language, framework)
            .iter()
            .any(|n| !n.trim().is_empty())
    }

    /// Description line for a framework.
    pub fn framework_description(&self, language: &str, framework: &str) -> String {
        if let Some(desc) = self
            .frameworks_named(language, framework)
            .find_map(|f| f.description.clone())
        {
            return desc;
        }
        if same_name(framework, BASELINE_FRAMEWORK) {
            return "minimal starter".to_string();
        }
        format!("{} template", language)
    }

    /// Description line for a library.
    pub fn library_description(&self, language: &str, framework: &str, library: &str) -> String {
        self.frameworks_named(language, framework)
            .flat_map(|f| f.libraries.iter())
            .filter(|l| same_name(&l.name, library))
            .find_map(|l| l.description.clone())
            .unwrap_or_else(|| "optional package".to_string())
    }

    /// Resolve a language name case-insensitively to its catalog spelling.
    pub fn resolve_language(&self, name: &str) -> Option<String> {
        self.file
            .languages
            .iter()
            .find(|l| same_name(&l.name, name))
            .map(|l| l.name.clone())
    }

    /// Resolve a framework name case-insensitively to its catalog spelling.
    pub fn resolve_framework(&self, language: &str, name: &str) -> Option<String> {
        self.framework_names(language)
            .into_iter()
            .find(|f| same_name(f, name))
    }

    /// Whether any language offers a framework with this name.
    pub fn offers_framework(&self, name: &str) -> bool {
        self.file
            .languages
            .iter()
            .any(|l| self.resolve_framework(&l.name, name).is_some())
    }
}

impl From<CatalogFile> for Catalog {
    fn from(file: CatalogFile) -> Self {
        Self::new(file)
    }
}
