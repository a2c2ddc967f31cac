//! Static product list → cleaned records.

use svcat_core::{CleanedRecord, StaticProduct, MAX_WEIGHT_GRAMS};

use crate::clean::storable;
use crate::parse::all_numbers;

/// Expand static products into cleaned records, one per distinct weight in
/// each product's `weight_range`.
///
/// Weights follow the row cleaner's storage rules: rounded to three decimals
/// and kept only inside `(0, MAX_WEIGHT_GRAMS]`. A product whose range holds
/// no usable number yields a single zero-weight record, which grouping later
/// drops.
#[must_use]
pub fn static_records(products: &[StaticProduct]) -> Vec<CleanedRecord> {
    let mut records = Vec::new();

    for product in products {
        let mut weights: Vec<f64> = all_numbers(&product.weight_range)
            .into_iter()
            .filter_map(|w| storable(w, MAX_WEIGHT_GRAMS))
            .collect();
        weights.sort_by(f64::total_cmp);
        weights.dedup_by(|a, b| a.total_cmp(b).is_eq());
        if weights.is_empty() {
            tracing::debug!(id = %product.id, range = %product.weight_range, "static product has no usable weight");
            weights.push(0.0);
        }

        for weight in weights {
            records.push(CleanedRecord {
                category: product.category.trim().to_string(),
                name: product.name.trim().to_string(),
                weight_grams: weight,
                height_inches: None,
                diameter_inches: None,
                length_inches: None,
                status: "available".to_string(),
                notes: String::new(),
                image: product
                    .image
                    .as_deref()
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string),
            });
        }
    }

    records
}
