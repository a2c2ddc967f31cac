//! Field cleaning: [`RawRow`] → [`CleanedRecord`].
//!
//! Numeric parsing is delegated to [`crate::parse`]; this module applies the
//! [`ParsePolicy`] and the defaulting rules.

use svcat_core::records::columns;
use svcat_core::{
    round_measure, CleanedRecord, ParsePolicy, RawRow, MAX_DIMENSION_INCHES, MAX_WEIGHT_GRAMS,
};

use crate::error::ImportError;
use crate::parse::{lenient_number, strict_number};

/// Cleans one row under the lenient policy. Never fails.
///
/// Strings are trimmed and default to empty. Numbers are rounded to three
/// decimals. An unreadable weight becomes `0`, as does one that rounds to
/// zero or below or exceeds [`MAX_WEIGHT_GRAMS`]. Dimensions under the same
/// rules (bounded by [`MAX_DIMENSION_INCHES`]) become absent.
#[must_use]
pub fn clean_row(row: &RawRow) -> CleanedRecord {
    CleanedRecord {
        category: text(row.category.as_deref()),
        name: text(row.product_name.as_deref()),
        weight_grams: lenient_measure(row.weight_grams.as_deref(), MAX_WEIGHT_GRAMS)
            .unwrap_or(0.0),
        height_inches: lenient_measure(row.height_inches.as_deref(), MAX_DIMENSION_INCHES),
        diameter_inches: lenient_measure(row.diameter_inches.as_deref(), MAX_DIMENSION_INCHES),
        length_inches: lenient_measure(row.length_inches.as_deref(), MAX_DIMENSION_INCHES),
        status: text(row.status.as_deref()),
        notes: text(row.notes.as_deref()),
        image: None,
    }
}

/// Cleans one row under `policy`.
///
/// `line` is the 1-based data line used in error messages.
///
/// # Errors
///
/// Under [`ParsePolicy::Strict`], returns [`ImportError::InvalidField`] when a
/// non-blank numeric cell is not exactly one finite, non-negative number, or
/// when it exceeds [`MAX_WEIGHT_GRAMS`] / [`MAX_DIMENSION_INCHES`]. A value
/// that rounds to zero is accepted and treated like a blank cell.
/// Never fails under [`ParsePolicy::Lenient`].
pub fn clean_row_with(
    row: &RawRow,
    policy: ParsePolicy,
    line: usize,
) -> Result<CleanedRecord, ImportError> {
    match policy {
        ParsePolicy::Lenient => Ok(clean_row(row)),
        ParsePolicy::Strict => {
            let weight_grams = strict_field(
                row.weight_grams.as_deref(),
                columns::WEIGHT_GRAMS,
                MAX_WEIGHT_GRAMS,
                line,
            )?
            .unwrap_or(0.0);
            Ok(CleanedRecord {
                category: text(row.category.as_deref()),
                name: text(row.product_name.as_deref()),
                weight_grams,
                height_inches: strict_field(
                    row.height_inches.as_deref(),
                    columns::HEIGHT_INCHES,
                    MAX_DIMENSION_INCHES,
                    line,
                )?,
                diameter_inches: strict_field(
                    row.diameter_inches.as_deref(),
                    columns::DIAMETER_INCHES,
                    MAX_DIMENSION_INCHES,
                    line,
                )?,
                length_inches: strict_field(
                    row.length_inches.as_deref(),
                    columns::LENGTH_INCHES,
                    MAX_DIMENSION_INCHES,
                    line,
                )?,
                status: text(row.status.as_deref()),
                notes: text(row.notes.as_deref()),
                image: None,
            })
        }
    }
}

fn text(value: Option<&str>) -> String {
    value.map(str::trim).unwrap_or_default().to_string()
}

fn lenient_measure(value: Option<&str>, max: f64) -> Option<f64> {
    value.and_then(lenient_number).and_then(|v| storable(v, max))
}

/// Round to storage precision; `None` unless the result lies in `(0, max]`.
pub(crate) fn storable(value: f64, max: f64) -> Option<f64> {
    let rounded = round_measure(value);
    (rounded > 0.0 && rounded <= max).then_some(rounded)
}

/// Blank or rounds to zero → `None`; otherwise the cell must be a finite
/// number in `[0, max]`.
fn strict_field(
    value: Option<&str>,
    column: &'static str,
    max: f64,
    line: usize,
) -> Result<Option<f64>, ImportError> {
    let Some(raw) = value.filter(|v| !v.trim().is_empty()) else {
        return Ok(None);
    };

    match strict_number(raw).filter(|v| *v >= 0.0).map(round_measure) {
        Some(v) if v == 0.0 => Ok(None),
        Some(v) if v <= max => Ok(Some(v)),
        _ => Err(ImportError::InvalidField {
            line,
            column,
            value: raw.to_string(),
        }),
    }
}
