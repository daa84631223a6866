//! Built-in option catalog.
//!
//! Used when no `--catalog` file is given.

use super::schema::{CatalogFile, FrameworkEntry, LanguageEntry, LibraryEntry};
use super::Catalog;

fn go_libraries() -> Vec<LibraryEntry> {
    vec![
        LibraryEntry::new("gin", "HTTP web framework"),
        LibraryEntry::new("gorm", "ORM with auto-migrations"),
        LibraryEntry::new("sqlc", "type-safe SQL code generation"),
    ]
}

/// Build the default catalog.
pub fn builtin_catalog() -> Catalog {
    Catalog::new(CatalogFile {
        languages: vec![
            LanguageEntry::new(
                "Go",
                vec![
                    FrameworkEntry::new("Vanilla", "minimal starter").with_libraries(go_libraries()),
                    FrameworkEntry::new("Cobra", "CLI app structure").with_libraries(go_libraries()),
                ],
            ),
            LanguageEntry::new(
                "JavaScript",
                vec![
                    FrameworkEntry::new("Express", "Node.js web server"),
                    FrameworkEntry::new("Hono", "lightweight web framework"),
                ],
            ),
            LanguageEntry::new(
                "TypeScript",
                vec![
                    FrameworkEntry::new("NestJS", "typed Node framework"),
                    FrameworkEntry::new("Bun", "Bun runtime server"),
                ],
            ),
            LanguageEntry::new(
                "Python",
                vec![FrameworkEntry::new("FastAPI", "Python API server")],
            ),
            LanguageEntry::new(
                "PHP",
                vec![FrameworkEntry::new("Laravel", "PHP web framework")],
            ),
        ],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_languages() {
        let catalog = builtin_catalog();
        let names = catalog.language_names();
        assert!(names.contains(&"Go".to_string()));
        assert!(names.contains(&"Python".to_string()));
    }

    #[test]
    fn go_frameworks_offer_libraries() {
        let catalog = builtin_catalog();
        assert_eq!(
            catalog.library_names("Go", "Cobra"),
            vec!["gin", "gorm", "sqlc"]
        );
        assert!(catalog.has_libraries("Go", "Vanilla"));
    }

    #[test]
    fn other_languages_skip_libraries() {
        let catalog = builtin_catalog();
        assert!(!catalog.has_libraries("Python", "FastAPI"));
        assert!(!catalog.has_libraries("PHP", "Vanilla"));
    }

    #[test]
    fn every_language_has_baseline() {
        let catalog = builtin_catalog();
        for language in catalog.language_names() {
            assert!(catalog
                .framework_names(&language)
                .iter()
                .any(|f| f == super::super::BASELINE_FRAMEWORK));
        }
    }
}
