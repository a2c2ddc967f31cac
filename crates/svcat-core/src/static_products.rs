use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// A hand-curated storefront product, used instead of the spreadsheet when
/// importing from the static list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticProduct {
    pub id: String,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub image: Option<String>,
    /// Free text such as `"150-300g"` or `"250g"`.
    #[serde(default)]
    pub weight_range: String,
}

#[derive(Debug, Deserialize)]
pub struct StaticProductsFile {
    pub static_products: Vec<StaticProduct>,
}

/// Load and validate the static product list from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_static_products(path: &Path) -> Result<StaticProductsFile, ConfigError> {
    let content =
        std::fs::read_to_string(path).map_err(|e| ConfigError::StaticProductsIo {
            path: path.display().to_string(),
            source: e,
        })?;

    let file: StaticProductsFile = serde_yaml::from_str(&content)?;
    validate_static_products(&file)?;

    Ok(file)
}

fn validate_static_products(file: &StaticProductsFile) -> Result<(), ConfigError> {
    let mut seen_ids = HashSet::new();

    for product in &file.static_products {
        if product.id.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "static product '{}' has an empty id",
                product.name
            )));
        }

        if product.name.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "static product '{}' has an empty name",
                product.id
            )));
        }

        if !seen_ids.insert(product.id.trim()) {
            return Err(ConfigError::Validation(format!(
                "duplicate static product id: '{}'",
                product.id
            )));
        }
    }

    Ok(())
}
