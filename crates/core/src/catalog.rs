//! Catalog files
//!
//! A catalog is read once at startup from JSON (a bare array or an object
//! with `items`) or TOML (`[[items]]` tables), chosen by file extension.

use crate::error::{Error, ErrorCode, Result, ResultExt};
use folio_search::Catalog;
use std::path::Path;

/// On-disk catalog formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    /// `.json`
    Json,
    /// `.toml`
    Toml,
}

impl CatalogFormat {
    /// Format implied by a path's extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            _ => Err(Error::new(
                ErrorCode::UnsupportedCatalogFormat,
                format!("Unsupported catalog file: {}", path.display()),
            )
            .with_suggestion("Use a .json or .toml catalog file")),
        }
    }

    /// Parse catalog text in this format
    pub fn parse(self, content: &str) -> Result<Catalog> {
        let catalog = match self {
            Self::Json => Catalog::from_json(content)?,
            Self::Toml => Catalog::from_toml(content)?,
        };
        Ok(catalog)
    }
}

/// Read and validate a catalog file
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let format = CatalogFormat::from_path(path)?;

    if !path.exists() {
        return Err(Error::file_not_found(path).with_context("While loading the catalog"));
    }

    let content = std::fs::read_to_string(path)?;
    let catalog = format
        .parse(&content)
        .context(format!("In {}", path.display()))?;

    tracing::debug!(path = %path.display(), items = catalog.len(), "Catalog loaded");
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(CatalogFormat::from_path(Path::new("a.JSON")).unwrap(), CatalogFormat::Json);
        assert_eq!(CatalogFormat::from_path(Path::new("a.toml")).unwrap(), CatalogFormat::Toml);

        let err = CatalogFormat::from_path(Path::new("a.yaml")).unwrap_err();
        assert_eq!(err.code, ErrorCode::UnsupportedCatalogFormat);
    }

    #[test]
    fn test_load_json_catalog() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(
            &path,
            r#"[{"id": "home", "title": "Home", "target": {"navigate": "/"}}]"#,
        )
        .unwrap();

        let catalog = load_catalog(&path).unwrap();
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_load_missing_catalog() {
        let err = load_catalog(Path::new("/no/such/catalog.json")).unwrap_err();
        assert_eq!(err.code, ErrorCode::FileNotFound);
    }

    #[test]
    fn test_duplicate_ids_reported() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalog.toml");
        std::fs::write(
            &path,
            r#"
            [[items]]
            id = "home"
            target = { navigate = "/" }

            [[items]]
            id = "home"
            target = { navigate = "/home" }
            "#,
        )
        .unwrap();

        let err = load_catalog(&path).unwrap_err();
        assert_eq!(err.code, ErrorCode::DuplicateCatalogId);
        assert!(err.context.is_some());
    }
}
