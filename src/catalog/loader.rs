//! Catalog file loading.

use std::fs;
use std::path::Path;

use crate::catalog::schema::CatalogFile;
use crate::catalog::Catalog;
use crate::error::{InitiatorError, Result};

/// Load a catalog file from disk.
///
/// # Errors
///
/// Returns `CatalogNotFound` if the file doesn't exist.
/// Returns `CatalogParse` if the YAML is invalid.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            InitiatorError::CatalogNotFound {
                path: path.to_path_buf(),
            }
        } else {
            InitiatorError::Io(e)
        }
    })?;

    let catalog = parse_catalog(&content, path)?;
    tracing::debug!(
        "Loaded catalog from {} ({} languages)",
        path.display(),
        catalog.file().languages.len()
    );
    Ok(catalog)
}

/// Parse YAML content into a [`Catalog`].
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_catalog(content: &str, source_path: &Path) -> Result<Catalog> {
    let file: CatalogFile =
        serde_yaml::from_str(content).map_err(|e| InitiatorError::CatalogParse {
            path: source_path.to_path_buf(),
            message: e.to_string(),
        })?;
    Ok(Catalog::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn load_catalog_reads_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("catalog.yml");
        fs::write(
            &path,
            "languages:\n  - name: Rust\n    frameworks:\n      - name: Axum\n",
        )
        .unwrap();

        let catalog = load_catalog(&path).unwrap();
        assert_eq!(catalog.language_names(), vec!["Rust"]);
        assert_eq!(catalog.framework_names("Rust"), vec!["Vanilla", "Axum"]);
    }

    #[test]
    fn load_catalog_missing_file() {
        let result = load_catalog(Path::new("/nonexistent/catalog.yml"));
        assert!(matches!(
            result,
            Err(InitiatorError::CatalogNotFound { .. })
        ));
    }

    #[test]
    fn parse_catalog_reports_path_on_error() {
        let path = PathBuf::from("bad.yml");
        let err = parse_catalog("languages: [", &path).unwrap_err();
        match err {
            InitiatorError::CatalogParse { path, .. } => {
                assert_eq!(path, PathBuf::from("bad.yml"));
            }
            other => panic!("Expected CatalogParse, got {:?}", other),
        }
    }

    #[test]
    fn parse_catalog_rejects_wrong_shape() {
        let result = parse_catalog("languages: 42", Path::new("x.yml"));
        assert!(result.is_err());
    }
}
