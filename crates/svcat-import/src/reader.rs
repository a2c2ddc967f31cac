//! Row parsers: CSV text in, [`RawRow`]s out.
//!
//! Two parsers exist. [`parse_rows_simple`] splits on commas with no quoting
//! support, so a cell containing a comma shifts every later column.
//! [`parse_rows_csv`] uses the `csv` crate and handles quoted fields.

use std::io::Read;
use std::path::Path;

use svcat_core::records::{canonical_column, columns};
use svcat_core::RawRow;

use crate::error::ImportError;

/// Which row parser to use for CSV input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReaderKind {
    /// Naive comma split, no quoting.
    Simple,
    /// RFC 4180 parsing via the `csv` crate.
    #[default]
    Csv,
}

impl std::fmt::Display for ReaderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReaderKind::Simple => write!(f, "simple"),
            ReaderKind::Csv => write!(f, "csv"),
        }
    }
}

/// Read a CSV file from disk and parse it with the chosen parser.
///
/// # Errors
///
/// Returns [`ImportError::Io`] if the file cannot be read, or any error from
/// the selected parser.
pub fn read_rows(path: &Path, kind: ReaderKind) -> Result<Vec<RawRow>, ImportError> {
    let text = std::fs::read_to_string(path).map_err(|e| ImportError::Io {
        path: path.display().to_string(),
        source: e,
    })?;

    tracing::debug!(path = %path.display(), bytes = text.len(), reader = %kind, "read CSV input");

    match kind {
        ReaderKind::Simple => parse_rows_simple(&text),
        ReaderKind::Csv => parse_rows_csv(text.as_bytes()),
    }
}

/// Split `text` into rows by newline and comma.
///
/// Blank lines are dropped. The first remaining line is the header. Data lines
/// whose every cell is blank (such as `,,,,,,,`) are skipped, matching
/// [`parse_rows_csv`]. Values map onto headers by position; missing trailing
/// values stay absent and extra values are ignored.
///
/// # Errors
///
/// Returns [`ImportError::EmptyInput`] when there is no header line, or
/// [`ImportError::MissingHeader`] when the header lacks `Product Name`.
pub fn parse_rows_simple(text: &str) -> Result<Vec<RawRow>, ImportError> {
    let mut lines = text.lines().filter(|line| !line.trim().is_empty());

    let header_line = lines.next().ok_or(ImportError::EmptyInput)?;
    let headers: Vec<&str> = header_line.split(',').collect();
    require_product_name(headers.iter().copied())?;

    let rows = lines
        .filter(|line| !line.split(',').all(|cell| cell.trim().is_empty()))
        .map(|line| RawRow::from_pairs(headers.iter().copied().zip(line.split(','))))
        .collect();

    Ok(rows)
}

/// Parse CSV from any reader using the `csv` crate.
///
/// Quoted fields may contain commas and newlines. Records may have fewer or
/// more fields than the header. Records whose every field is blank are
/// skipped.
///
/// # Errors
///
/// Returns [`ImportError::Csv`] on malformed input, [`ImportError::EmptyInput`]
/// when there is no header, or [`ImportError::MissingHeader`] when the header
/// lacks `Product Name`.
pub fn parse_rows_csv<R: Read>(reader: R) -> Result<Vec<RawRow>, ImportError> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    if headers.iter().all(|h| h.trim().is_empty()) {
        return Err(ImportError::EmptyInput);
    }
    require_product_name(headers.iter())?;

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result?;
        if record.iter().all(|field| field.trim().is_empty()) {
            continue;
        }
        rows.push(RawRow::from_pairs(headers.iter().zip(record.iter())));
    }

    Ok(rows)
}

fn require_product_name<'a, I>(headers: I) -> Result<(), ImportError>
where
    I: IntoIterator<Item = &'a str>,
{
    let found = headers
        .into_iter()
        .any(|h| canonical_column(h) == Some(columns::PRODUCT_NAME));
    if found {
        Ok(())
    } else {
        Err(ImportError::MissingHeader {
            column: columns::PRODUCT_NAME,
        })
    }
}

#[cfg(test)]
#[path = "reader_test.rs"]
mod tests;
