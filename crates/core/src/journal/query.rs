//! Filtered, sorted views over a journal list
//!
//! Filtering runs text search first, then the tag filter, then a stable sort.
//! The source slice is never modified.

use std::cmp::Ordering;

use mindset_domain::{JournalEntry, JournalQuery, SortOption, TagFilter};

/// Apply `params` to `entries` and return the matching entries in order.
pub fn query(entries: &[JournalEntry], params: &JournalQuery) -> Vec<JournalEntry> {
    let needle = params
        .search_text
        .as_deref()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_lowercase);

    let mut view: Vec<JournalEntry> = entries
        .iter()
        .filter(|entry| needle.as_deref().map_or(true, |n| entry.matches_text(n)))
        .filter(|entry| match &params.tag {
            TagFilter::All => true,
            TagFilter::Tag(tag) => entry.has_tag(tag),
        })
        .cloned()
        .collect();

    match params.sort {
        SortOption::DateDesc => view.sort_by(|a, b| b.timestamp.cmp(&a.timestamp)),
        SortOption::DateAsc => view.sort_by(|a, b| a.timestamp.cmp(&b.timestamp)),
        SortOption::Genre => view.sort_by(|a, b| compare_tags(a.first_tag(), b.first_tag())),
        // Entries carry no level to sort on
        SortOption::Level => {}
    }

    view
}

/// Case-insensitive order; byte order only breaks ties such as `art`/`Art`.
fn compare_tags(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b))
}

/// Every tag used across `entries`, first-seen order, no duplicates.
pub fn available_tags(entries: &[JournalEntry]) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in entries.iter().flat_map(JournalEntry::tags) {
        if !tags.contains(tag) {
            tags.push(tag.clone());
        }
    }
    tags
}
