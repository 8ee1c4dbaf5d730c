use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ReportError, Result};
use crate::registry::PRICE_IN_CART_KEY;

/// Products with a quantity below this are not reported
pub const DEFAULT_MIN_QUANTITY: f64 = 3.0;

/// Report configuration
///
/// ```toml
/// [filter]
/// min_quantity = 3
///
/// [categories]
/// price_in_cart = "price_in_cart"
///
/// [ingest]
/// forward_references = "drop"   # or "resolve"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default)]
    pub filter: FilterConfig,

    #[serde(default)]
    pub categories: CategoryKeys,

    #[serde(default)]
    pub ingest: IngestConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterConfig {
    #[serde(default = "default_min_quantity")]
    pub min_quantity: f64,
}

fn default_min_quantity() -> f64 {
    DEFAULT_MIN_QUANTITY
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            min_quantity: DEFAULT_MIN_QUANTITY,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryKeys {
    /// Category that additionally receives every hidden-price product
    #[serde(default = "default_price_in_cart")]
    pub price_in_cart: String,
}

fn default_price_in_cart() -> String {
    PRICE_IN_CART_KEY.to_string()
}

impl Default for CategoryKeys {
    fn default() -> Self {
        Self {
            price_in_cart: default_price_in_cart(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IngestConfig {
    #[serde(default)]
    pub forward_references: ForwardReferences,
}

/// How a product line is matched against categories declared after it
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ForwardReferences {
    /// Only categories declared on an earlier line receive the product
    #[default]
    Drop,
    /// Any declared category receives the product
    Resolve,
}

impl ReportConfig {
    /// Load config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| ReportError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(path, &content)
    }

    /// Load config if a path is given, defaults otherwise
    pub fn load_optional(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    fn from_toml(path: &Path, content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| ReportError::ConfigParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_defaults() {
        let config = ReportConfig::default();
        assert_eq!(config.filter.min_quantity, 3.0);
        assert_eq!(config.categories.price_in_cart, "price_in_cart");
        assert_eq!(config.ingest.forward_references, ForwardReferences::Drop);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let path = PathBuf::from("report.toml");
        let config = ReportConfig::from_toml(&path, "[filter]\nmin_quantity = 1\n").unwrap();
        assert_eq!(config.filter.min_quantity, 1.0);
        assert_eq!(config.categories.price_in_cart, "price_in_cart");

        let config =
            ReportConfig::from_toml(&path, "[ingest]\nforward_references = \"resolve\"\n").unwrap();
        assert_eq!(config.ingest.forward_references, ForwardReferences::Resolve);
        assert_eq!(config.filter.min_quantity, 3.0);
    }

    #[test]
    fn test_invalid_toml() {
        let path = PathBuf::from("report.toml");
        let err = ReportConfig::from_toml(&path, "[ingest]\nforward_references = \"later\"\n")
            .unwrap_err();
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn test_load_from_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("report.toml");
        fs::write(&path, "[categories]\nprice_in_cart = \"hidden\"\n").unwrap();

        let config = ReportConfig::load_optional(Some(&path)).unwrap();
        assert_eq!(config.categories.price_in_cart, "hidden");

        let missing = tmp.path().join("missing.toml");
        assert!(matches!(
            ReportConfig::load(&missing),
            Err(ReportError::ConfigRead { .. })
        ));
        assert_eq!(
            ReportConfig::load_optional(None).unwrap(),
            ReportConfig::default()
        );
    }
}
