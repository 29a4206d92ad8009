//! Text matching and ordering helpers shared by the shop and inventory views.

use core::cmp::Ordering;

/// Lower-cased search needle, built once per query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    /// Returns `None` for an empty term (the filter is skipped entirely).
    pub fn new(raw: &str) -> Option<Self> {
        if raw.is_empty() {
            None
        } else {
            Some(Self(raw.to_lowercase()))
        }
    }

    /// Case-insensitive substring match against any of `fields`.
    pub fn matches_any<'a>(&self, fields: impl IntoIterator<Item = &'a str>) -> bool {
        fields
            .into_iter()
            .any(|field| field.to_lowercase().contains(&self.0))
    }
}

/// Human-oriented string ordering: case-folded first, exact bytes as tie-break.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    folded.then_with(|| a.cmp(b))
}
