//! JSON file output for an assembled [`Catalog`].

use std::path::{Path, PathBuf};

use serde::Serialize;
use svcat_core::Catalog;

use crate::error::ImportError;

pub const CATEGORIES_FILE: &str = "categories.json";
pub const MATERIALS_FILE: &str = "materials.json";
pub const COLLECTIONS_FILE: &str = "collections.json";
pub const PRODUCTS_FILE: &str = "products.json";
pub const SUMMARY_FILE: &str = "summary.json";
pub const COMPLETE_FILE: &str = "complete-data.json";

/// Write the catalog as pretty-printed JSON files under `dir`, creating the
/// directory if needed.
///
/// Returns the written paths in write order. Existing files are overwritten.
///
/// # Errors
///
/// Returns [`ImportError::Io`] if the directory or a file cannot be written,
/// or [`ImportError::Serialize`] if serialization fails.
pub fn write_catalog_json(catalog: &Catalog, dir: &Path) -> Result<Vec<PathBuf>, ImportError> {
    std::fs::create_dir_all(dir).map_err(|e| ImportError::Io {
        path: dir.display().to_string(),
        source: e,
    })?;

    let written = vec![
        write_json(dir, CATEGORIES_FILE, &catalog.categories)?,
        write_json(dir, MATERIALS_FILE, &catalog.materials)?,
        write_json(dir, COLLECTIONS_FILE, &catalog.collections)?,
        write_json(dir, PRODUCTS_FILE, &catalog.products)?,
        write_json(dir, SUMMARY_FILE, &catalog.summary)?,
        write_json(dir, COMPLETE_FILE, catalog)?,
    ];

    tracing::info!(dir = %dir.display(), files = written.len(), "wrote catalog JSON");
    Ok(written)
}

fn write_json<T: Serialize + ?Sized>(
    dir: &Path,
    file_name: &str,
    value: &T,
) -> Result<PathBuf, ImportError> {
    let path = dir.join(file_name);
    let mut body = serde_json::to_string_pretty(value)?;
    body.push('\n');
    std::fs::write(&path, body).map_err(|e| ImportError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    tracing::debug!(path = %path.display(), "wrote file");
    Ok(path)
}
