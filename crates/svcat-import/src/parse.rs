//! Low-level numeric parsing for spreadsheet cells.
//!
//! Uses manual byte scanning rather than `regex`. See [`crate::clean`] for how
//! these compose into field cleaning.

/// Reads the longest decimal number at the start of `s`.
///
/// Accepts an optional sign, digits with an optional fractional part, and an
/// optional exponent. Returns the value and the number of bytes consumed, or
/// `None` if `s` does not start with a number.
fn scan_number(s: &str) -> Option<(f64, usize)> {
    let bytes = s.as_bytes();
    let len = bytes.len();
    let mut i = 0;

    if i < len && (bytes[i] == b'+' || bytes[i] == b'-') {
        i += 1;
    }

    let int_start = i;
    while i < len && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut digits = i - int_start;

    if i < len && bytes[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < len && bytes[j].is_ascii_digit() {
            j += 1;
        }
        let frac = j - frac_start;
        if digits > 0 || frac > 0 {
            digits += frac;
            i = j;
        }
    }

    if digits == 0 {
        return None;
    }

    if i < len && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < len && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < len && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    s[..i].parse::<f64>().ok().map(|value| (value, i))
}

/// Parses the numeric prefix of a cell, ignoring trailing text.
///
/// `"150"`, `" 150g"`, and `"150.5 grams"` all read as numbers; `"abc"` and
/// `""` do not. Non-finite results are rejected.
#[must_use]
pub(crate) fn lenient_number(text: &str) -> Option<f64> {
    scan_number(text.trim_start())
        .map(|(value, _)| value)
        .filter(|v| v.is_finite())
}

/// Parses a cell that must be entirely one finite number (surrounding
/// whitespace allowed).
#[must_use]
pub(crate) fn strict_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    match scan_number(trimmed) {
        Some((value, consumed)) if consumed == trimmed.len() && value.is_finite() => Some(value),
        _ => None,
    }
}

/// Returns every unsigned number in `text`, left to right.
///
/// Hyphens are treated as separators, so `"150-300g"` yields `[150.0, 300.0]`.
#[must_use]
pub(crate) fn all_numbers(text: &str) -> Vec<f64> {
    let bytes = text.as_bytes();
    let len = bytes.len();
    let mut values = Vec::new();
    let mut i = 0;

    while i < len {
        let starts_number = bytes[i].is_ascii_digit()
            || (bytes[i] == b'.' && i + 1 < len && bytes[i + 1].is_ascii_digit());
        if starts_number {
            if let Some((value, consumed)) = scan_number(&text[i..]) {
                if value.is_finite() {
                    values.push(value);
                }
                i += consumed;
                continue;
            }
        }
        i += 1;
    }

    values
}
