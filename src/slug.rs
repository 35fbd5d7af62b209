//! Anchor ids derived from heading text.

#[cfg(test)]
#[path = "slug_test.rs"]
mod slug_test;

/// Strip every non-word character (anything outside `[A-Za-z0-9_]`) and lower-case the rest.
///
/// Deterministic, so a heading keeps the same anchor across page loads and
/// deep links via `#fragment` stay valid. Distinct headings may collapse to the
/// same slug; callers accept last-write-wins on the element id.
#[must_use]
pub fn slugify(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
