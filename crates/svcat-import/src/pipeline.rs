//! End-to-end import: read → parse → clean → group → classify → assemble.
//!
//! Every stage is a one-shot transform over in-memory data. The first error
//! ends the run; nothing is retried.

use std::path::PathBuf;

use chrono::Utc;
use svcat_core::{
    load_static_products, AppConfig, Catalog, CleanedRecord, CollectionDocument, CollectionId,
    MaterialDocument, MaterialId, ParsePolicy, RawRow, RunSummary,
};
use uuid::Uuid;

use crate::assemble::{assemble_products, CategoryLookup, FlagPolicy};
use crate::clean::clean_row_with;
use crate::error::ImportError;
use crate::group::group_records;
use crate::reader::{read_rows, ReaderKind};
use crate::static_source::static_records;

/// Where catalog rows come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Csv { path: PathBuf, reader: ReaderKind },
    Static { path: PathBuf },
}

impl Source {
    /// Short label recorded in the run summary, e.g. `csv:./data/catalog.csv`.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Source::Csv { path, .. } => format!("csv:{}", path.display()),
            Source::Static { path } => format!("static:{}", path.display()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImportOptions {
    pub source: Source,
    pub parse_policy: ParsePolicy,
    pub flags: FlagPolicy,
}

impl ImportOptions {
    /// CSV import using the paths and policies from `config`.
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            source: Source::Csv {
                path: config.csv_path.clone(),
                reader: ReaderKind::default(),
            },
            parse_policy: config.parse_policy,
            flags: FlagPolicy::from_app_config(config),
        }
    }
}

/// Run the whole pipeline for `options` and return the assembled catalog.
///
/// # Errors
///
/// Returns [`ImportError`] if the source cannot be read or parsed, or if a
/// field is invalid under [`ParsePolicy::Strict`].
pub fn build_catalog(options: &ImportOptions) -> Result<Catalog, ImportError> {
    let label = options.source.label();
    tracing::info!(source = %label, policy = %options.parse_policy, "starting catalog import");

    match &options.source {
        Source::Csv { path, reader } => {
            let rows = read_rows(path, *reader)?;
            catalog_from_rows(&rows, options.parse_policy, &options.flags, label)
        }
        Source::Static { path } => {
            let file = load_static_products(path)?;
            let records = static_records(&file.static_products);
            Ok(catalog_from_records(
                &records,
                file.static_products.len(),
                options.parse_policy,
                &options.flags,
                label,
            ))
        }
    }
}

/// Clean `rows` under `policy` and assemble them into a catalog.
///
/// # Errors
///
/// Returns [`ImportError::InvalidField`] for the first bad numeric cell under
/// [`ParsePolicy::Strict`].
pub fn catalog_from_rows(
    rows: &[RawRow],
    policy: ParsePolicy,
    flags: &FlagPolicy,
    source: String,
) -> Result<Catalog, ImportError> {
    let records = rows
        .iter()
        .enumerate()
        .map(|(idx, row)| clean_row_with(row, policy, idx + 1))
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(rows = rows.len(), "cleaned rows");

    Ok(catalog_from_records(
        &records,
        rows.len(),
        policy,
        flags,
        source,
    ))
}

/// Group, classify, and assemble already-cleaned records.
#[must_use]
pub fn catalog_from_records(
    records: &[CleanedRecord],
    rows_read: usize,
    policy: ParsePolicy,
    flags: &FlagPolicy,
    source: String,
) -> Catalog {
    let categories = CategoryLookup::from_records(records);
    let grouping = group_records(records);
    let assembled = assemble_products(&grouping.groups, &categories, flags);

    let materials: Vec<MaterialDocument> = MaterialId::ALL
        .into_iter()
        .map(MaterialDocument::from)
        .collect();
    let collections: Vec<CollectionDocument> = CollectionId::ALL
        .into_iter()
        .map(CollectionDocument::from)
        .collect();
    let categories = categories.into_documents();

    let summary = RunSummary {
        run_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        source,
        parse_policy: policy,
        rows_read,
        rows_cleaned: records.len(),
        rows_without_name: grouping.rows_without_name,
        rows_without_weight: grouping.rows_without_weight,
        groups_formed: grouping.groups_formed,
        groups_dropped: grouping.groups_dropped,
        dangling_category_refs: assembled.dangling_category_refs,
        categories: categories.len(),
        materials: materials.len(),
        collections: collections.len(),
        products: assembled.products.len(),
        variants: assembled.products.iter().map(|p| p.variants.len()).sum(),
    };

    tracing::info!(
        run_id = %summary.run_id,
        products = summary.products,
        variants = summary.variants,
        categories = summary.categories,
        groups_dropped = summary.groups_dropped,
        "assembled catalog"
    );

    Catalog {
        categories,
        materials,
        collections,
        products: assembled.products,
        summary,
    }
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod tests;
