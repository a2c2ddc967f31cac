//! Row-level types that flow through the import pipeline, from the raw CSV
//! mapping up to a grouped product with its weight variants.

use serde::{Deserialize, Serialize};

/// Column headers of the catalog spreadsheet, as exported.
pub mod columns {
    pub const CATEGORY: &str = "Category";
    pub const PRODUCT_NAME: &str = "Product Name";
    pub const WEIGHT_GRAMS: &str = "Weight (Grams)";
    pub const HEIGHT_INCHES: &str = "Height (Inches)";
    pub const DIAMETER_INCHES: &str = "Diameter (Inches)";
    pub const LENGTH_INCHES: &str = "Length (inches)";
    pub const STATUS: &str = "Status";
    pub const NOTES: &str = "Notes";

    pub const ALL: [&str; 8] = [
        CATEGORY,
        PRODUCT_NAME,
        WEIGHT_GRAMS,
        HEIGHT_INCHES,
        DIAMETER_INCHES,
        LENGTH_INCHES,
        STATUS,
        NOTES,
    ];
}

/// Largest weight a variant may carry. Anything heavier is treated as a
/// data-entry error.
pub const MAX_WEIGHT_GRAMS: f64 = 999_999.999;

/// Largest height, diameter, or length a variant may carry.
pub const MAX_DIMENSION_INCHES: f64 = 99_999.999;

/// Round a weight or dimension to the three decimals the catalog stores.
///
/// A negative zero result is folded into `0.0`.
#[must_use]
pub fn round_measure(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0 + 0.0
}

/// Status strings (trimmed, lowercased) that mark a variant as not purchasable.
pub const UNAVAILABLE_STATUSES: [&str; 5] = [
    "out of stock",
    "out_of_stock",
    "sold out",
    "unavailable",
    "discontinued",
];

/// One spreadsheet line mapped onto the known catalog columns.
///
/// Every field is optional: the source is unvalidated and any cell may be
/// missing. Unknown columns are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRow {
    pub category: Option<String>,
    pub product_name: Option<String>,
    pub weight_grams: Option<String>,
    pub height_inches: Option<String>,
    pub diameter_inches: Option<String>,
    pub length_inches: Option<String>,
    pub status: Option<String>,
    pub notes: Option<String>,
}

impl RawRow {
    /// Build a row from `(header, value)` pairs.
    #[must_use]
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut row = RawRow::default();
        for (header, value) in pairs {
            row.set_field(header, value);
        }
        row
    }

    /// Assign `value` to the field named by `header`.
    ///
    /// Header matching trims and ignores ASCII case. Returns `false` when the
    /// header is not a catalog column.
    pub fn set_field(&mut self, header: &str, value: &str) -> bool {
        let slot = match canonical_column(header) {
            Some(columns::CATEGORY) => &mut self.category,
            Some(columns::PRODUCT_NAME) => &mut self.product_name,
            Some(columns::WEIGHT_GRAMS) => &mut self.weight_grams,
            Some(columns::HEIGHT_INCHES) => &mut self.height_inches,
            Some(columns::DIAMETER_INCHES) => &mut self.diameter_inches,
            Some(columns::LENGTH_INCHES) => &mut self.length_inches,
            Some(columns::STATUS) => &mut self.status,
            Some(columns::NOTES) => &mut self.notes,
            _ => return false,
        };
        *slot = Some(value.to_string());
        true
    }
}

/// Resolve a header cell to its canonical column name, if it is one.
#[must_use]
pub fn canonical_column(header: &str) -> Option<&'static str> {
    let header = header.trim_start_matches('\u{feff}').trim();
    columns::ALL
        .iter()
        .copied()
        .find(|col| col.eq_ignore_ascii_case(header))
}

/// A [`RawRow`] after trimming and numeric coercion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanedRecord {
    pub category: String,
    pub name: String,
    /// Always finite and `>= 0`; unreadable input becomes `0`.
    pub weight_grams: f64,
    pub height_inches: Option<f64>,
    pub diameter_inches: Option<f64>,
    pub length_inches: Option<f64>,
    pub status: String,
    pub notes: String,
    /// Storefront image path, only known for static product entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariantStatus {
    Available,
    OutOfStock,
}

impl VariantStatus {
    /// Classify a free-text spreadsheet status.
    ///
    /// Blank or unrecognized text counts as available; only the entries in
    /// [`UNAVAILABLE_STATUSES`] mark a variant out of stock.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        let normalized = label.trim().to_lowercase();
        if UNAVAILABLE_STATUSES.contains(&normalized.as_str()) {
            VariantStatus::OutOfStock
        } else {
            VariantStatus::Available
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            VariantStatus::Available => "available",
            VariantStatus::OutOfStock => "out_of_stock",
        }
    }
}

impl std::fmt::Display for VariantStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A concrete weight (and optional dimensions) a product is sold in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    pub weight_grams: f64,
    pub height_inches: Option<f64>,
    pub diameter_inches: Option<f64>,
    pub length_inches: Option<f64>,
    pub status: VariantStatus,
    pub notes: Option<String>,
}

/// All rows sharing one product name, folded into a single product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductGroup {
    pub name: String,
    /// Taken from the first row of the group.
    pub category: String,
    /// Sorted ascending by `weight_grams`; never empty once grouping finishes.
    pub variants: Vec<Variant>,
    pub image: Option<String>,
    /// Number of input rows folded into this group, including dropped ones.
    pub source_rows: usize,
}

impl ProductGroup {
    /// Weight of the lightest variant, or `0` when there are none.
    #[must_use]
    pub fn base_weight(&self) -> f64 {
        self.variants.first().map_or(0.0, |v| v.weight_grams)
    }

    #[must_use]
    pub fn total_weight(&self) -> f64 {
        round_measure(self.variants.iter().map(|v| v.weight_grams).sum())
    }

    #[must_use]
    pub fn max_weight(&self) -> f64 {
        self.variants.last().map_or(0.0, |v| v.weight_grams)
    }

    #[must_use]
    pub fn has_available_variant(&self) -> bool {
        self.variants
            .iter()
            .any(|v| v.status == VariantStatus::Available)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variant(weight: f64, status: VariantStatus) -> Variant {
        Variant {
            weight_grams: weight,
            height_inches: None,
            diameter_inches: None,
            length_inches: None,
            status,
            notes: None,
        }
    }

    fn group(variants: Vec<Variant>) -> ProductGroup {
        ProductGroup {
            name: "Plain Bowl".to_string(),
            category: "Bowl".to_string(),
            variants,
            image: None,
            source_rows: 2,
        }
    }

    #[test]
    fn from_pairs_maps_known_headers() {
        let row = RawRow::from_pairs([
            ("Category", "Bowl"),
            ("Product Name", "Plain Bowl"),
            ("Weight (Grams)", "150"),
            ("Length (inches)", "4.5"),
            ("Status", "available"),
        ]);
        assert_eq!(row.category.as_deref(), Some("Bowl"));
        assert_eq!(row.product_name.as_deref(), Some("Plain Bowl"));
        assert_eq!(row.weight_grams.as_deref(), Some("150"));
        assert_eq!(row.length_inches.as_deref(), Some("4.5"));
        assert_eq!(row.status.as_deref(), Some("available"));
        assert!(row.height_inches.is_none());
        assert!(row.notes.is_none());
    }

    #[test]
    fn set_field_ignores_case_and_padding() {
        let mut row = RawRow::default();
        assert!(row.set_field("  product name ", "Silver Coin"));
        assert!(row.set_field("LENGTH (INCHES)", "2"));
        assert_eq!(row.product_name.as_deref(), Some("Silver Coin"));
        assert_eq!(row.length_inches.as_deref(), Some("2"));
    }

    #[test]
    fn set_field_rejects_unknown_header() {
        let mut row = RawRow::default();
        assert!(!row.set_field("SKU", "ABC-1"));
        assert_eq!(row, RawRow::default());
    }

    #[test]
    fn variant_status_blocklist() {
        assert_eq!(
            VariantStatus::from_label(" Out of Stock "),
            VariantStatus::OutOfStock
        );
        assert_eq!(VariantStatus::from_label("SOLD OUT"), VariantStatus::OutOfStock);
        assert_eq!(
            VariantStatus::from_label("discontinued"),
            VariantStatus::OutOfStock
        );
    }

    #[test]
    fn variant_status_defaults_to_available() {
        assert_eq!(VariantStatus::from_label(""), VariantStatus::Available);
        assert_eq!(VariantStatus::from_label("in stock"), VariantStatus::Available);
        assert_eq!(VariantStatus::from_label("made to order"), VariantStatus::Available);
    }

    #[test]
    fn variant_status_serializes_snake_case() {
        let json = serde_json::to_string(&VariantStatus::OutOfStock).unwrap();
        assert_eq!(json, "\"out_of_stock\"");
    }

    #[test]
    fn product_group_weights() {
        let g = group(vec![
            variant(150.0, VariantStatus::Available),
            variant(300.0, VariantStatus::OutOfStock),
        ]);
        assert!((g.base_weight() - 150.0).abs() < f64::EPSILON);
        assert!((g.max_weight() - 300.0).abs() < f64::EPSILON);
        assert!((g.total_weight() - 450.0).abs() < f64::EPSILON);
    }

    #[test]
    fn total_weight_drops_float_noise() {
        let g = group(vec![
            variant(10.1, VariantStatus::Available),
            variant(20.2, VariantStatus::Available),
        ]);
        assert_eq!(g.total_weight().to_string(), "30.3");
    }

    #[test]
    fn round_measure_keeps_three_decimals() {
        assert_eq!(round_measure(2.123_456).to_string(), "2.123");
        assert_eq!(round_measure(0.0004).to_string(), "0");
        assert_eq!(round_measure(-0.0001).to_string(), "0");
        assert_eq!(round_measure(10.5).to_string(), "10.5");
    }

    #[test]
    fn product_group_availability() {
        let sold_out = group(vec![variant(150.0, VariantStatus::OutOfStock)]);
        assert!(!sold_out.has_available_variant());

        let mixed = group(vec![
            variant(150.0, VariantStatus::OutOfStock),
            variant(200.0, VariantStatus::Available),
        ]);
        assert!(mixed.has_available_variant());
    }

    #[test]
    fn product_group_without_variants_has_zero_weights() {
        let g = group(vec![]);
        assert!(g.base_weight().abs() < f64::EPSILON);
        assert!(g.total_weight().abs() < f64::EPSILON);
        assert!(!g.has_available_variant());
    }
}
