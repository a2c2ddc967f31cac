//! Grouping cleaned rows into products with weight variants.

use std::collections::HashMap;

use svcat_core::{CleanedRecord, ProductGroup, Variant, VariantStatus};

/// Result of [`group_records`], with counts of what was discarded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Grouping {
    /// Products in first-seen name order, each with at least one variant.
    pub groups: Vec<ProductGroup>,
    /// Distinct non-blank names seen, before empty groups were removed.
    pub groups_formed: usize,
    /// Groups removed because no row had a positive weight.
    pub groups_dropped: usize,
    pub rows_without_name: usize,
    pub rows_without_weight: usize,
}

/// Partition `records` by exact product name and build sorted variant lists.
///
/// The first row of a group decides its category; later rows' categories are
/// not reconciled. Rows with zero weight contribute no variant, and a group
/// that ends up with no variants is dropped. Rows with a blank name belong to
/// no group.
#[must_use]
pub fn group_records(records: &[CleanedRecord]) -> Grouping {
    let mut groups: Vec<ProductGroup> = Vec::new();
    let mut index_by_name: HashMap<&str, usize> = HashMap::new();
    let mut rows_without_name = 0usize;
    let mut rows_without_weight = 0usize;

    for record in records {
        let name = record.name.trim();
        if name.is_empty() {
            rows_without_name += 1;
            continue;
        }

        let idx = *index_by_name.entry(name).or_insert_with(|| {
            groups.push(ProductGroup {
                name: name.to_string(),
                category: record.category.clone(),
                variants: Vec::new(),
                image: None,
                source_rows: 0,
            });
            groups.len() - 1
        });

        let group = &mut groups[idx];
        group.source_rows += 1;
        if group.image.is_none() {
            group.image.clone_from(&record.image);
        }

        if record.weight_grams > 0.0 {
            group.variants.push(variant_from(record));
        } else {
            rows_without_weight += 1;
        }
    }

    let groups_formed = groups.len();

    let groups: Vec<ProductGroup> = groups
        .into_iter()
        .filter_map(|mut group| {
            if group.variants.is_empty() {
                tracing::warn!(
                    product = %group.name,
                    rows = group.source_rows,
                    "dropping product with no weighted variants"
                );
                return None;
            }
            // Stable, so equal weights keep input order.
            group
                .variants
                .sort_by(|a, b| a.weight_grams.total_cmp(&b.weight_grams));
            Some(group)
        })
        .collect();

    let groups_dropped = groups_formed - groups.len();

    tracing::debug!(
        groups = groups.len(),
        groups_dropped,
        rows_without_name,
        rows_without_weight,
        "grouped records"
    );

    Grouping {
        groups,
        groups_formed,
        groups_dropped,
        rows_without_name,
        rows_without_weight,
    }
}

fn variant_from(record: &CleanedRecord) -> Variant {
    Variant {
        weight_grams: record.weight_grams,
        height_inches: record.height_inches,
        diameter_inches: record.diameter_inches,
        length_inches: record.length_inches,
        status: VariantStatus::from_label(&record.status),
        notes: Some(record.notes.trim())
            .filter(|n| !n.is_empty())
            .map(str::to_string),
    }
}

#[cfg(test)]
#[path = "group_test.rs"]
mod tests;
