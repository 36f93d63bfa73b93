//! # Filter Engine
//!
//! Maps `(catalog, query)` to the ordered subsequence of matching videos.
//!
//! A record matches when the trimmed, lowercased query is a substring of its
//! lowercased title, description, or any single tag. A blank query matches
//! everything. There is no ranking: results keep catalog order.
//!
//! Pure and infallible. The result is always recomputed from scratch.

use crate::core::catalog::VideoRecord;

/// A query prepared for matching (trimmed and lowercased once).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Needle(String);

impl Needle {
    /// Returns `None` for a blank query, which means "no filtering".
    pub fn new(query: &str) -> Option<Self> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_lowercase()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Whether `record` matches the prepared needle.
pub fn matches(record: &VideoRecord, needle: &Needle) -> bool {
    let needle = needle.as_str();
    record.title.to_lowercase().contains(needle)
        || record.description.to_lowercase().contains(needle)
        || record
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(needle))
}

/// Catalog positions of the records matching `query`, in catalog order.
pub fn filter_positions(records: &[VideoRecord], query: &str) -> Vec<usize> {
    match Needle::new(query) {
        None => (0..records.len()).collect(),
        Some(needle) => records
            .iter()
            .enumerate()
            .filter(|(_, record)| matches(record, &needle))
            .map(|(i, _)| i)
            .collect(),
    }
}

/// Records matching `query`, in catalog order.
pub fn filter<'a>(records: &'a [VideoRecord], query: &str) -> Vec<&'a VideoRecord> {
    filter_positions(records, query)
        .into_iter()
        .map(|i| &records[i])
        .collect()
}
