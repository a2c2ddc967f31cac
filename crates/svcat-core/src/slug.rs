/// Generate a URL-safe slug from a display string.
///
/// Lowercases, drops everything outside `[a-z0-9]`, whitespace, and `-`, turns
/// whitespace runs into a single hyphen, collapses repeated hyphens, and trims
/// hyphens from both ends. The result is idempotent under `slugify`.
#[must_use]
pub fn slugify(input: &str) -> String {
    input
        .to_lowercase()
        .chars()
        .filter_map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' {
                Some(c)
            } else if c.is_whitespace() {
                Some('-')
            } else {
                None
            }
        })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}
