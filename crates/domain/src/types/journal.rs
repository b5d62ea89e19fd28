//! Journal types

use serde::{Deserialize, Serialize};

use super::{HierarchyLevel, Quote};
use crate::constants::UNTITLED_JOURNAL_TITLE;

/// A saved journal reflection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    pub id: String,
    pub title: String,
    pub content: String,
    /// Creation time in milliseconds, preserved across edits
    pub timestamp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hierarchy_level: Option<HierarchyLevel>,
    /// Snapshot of the quote at link time, not a reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linked_quote: Option<Quote>,
}

impl JournalEntry {
    pub fn tags(&self) -> &[String] {
        self.tags.as_deref().unwrap_or_default()
    }

    /// First tag, or `""` for untagged entries.
    pub fn first_tag(&self) -> &str {
        self.tags().first().map(String::as_str).unwrap_or_default()
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags().iter().any(|t| t == tag)
    }

    /// Case-insensitive substring match on title or content.
    ///
    /// `needle_lower` must already be lowercased.
    pub fn matches_text(&self, needle_lower: &str) -> bool {
        self.title.to_lowercase().contains(needle_lower)
            || self.content.to_lowercase().contains(needle_lower)
    }
}

/// Editor state for a new or existing entry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JournalDraft {
    /// `Some` when editing an existing entry
    pub id: Option<String>,
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub linked_quote: Option<Quote>,
}

impl JournalDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self { title: title.into(), content: content.into(), ..Self::default() }
    }

    /// Start a new entry seeded with a quote.
    pub fn about_quote(quote: Quote) -> Self {
        Self { linked_quote: Some(quote), ..Self::default() }
    }

    /// Reopen an existing entry for editing.
    pub fn from_entry(entry: &JournalEntry) -> Self {
        Self {
            id: Some(entry.id.clone()),
            title: entry.title.clone(),
            content: entry.content.clone(),
            tags: entry.tags().to_vec(),
            linked_quote: entry.linked_quote.clone(),
        }
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Both title and content are empty after trimming.
    pub fn is_blank(&self) -> bool {
        self.title.trim().is_empty() && self.content.trim().is_empty()
    }

    /// Materialize the draft into an entry with the given id and timestamp.
    pub fn into_entry(self, id: String, timestamp: i64) -> JournalEntry {
        let title = match self.title.trim() {
            "" => UNTITLED_JOURNAL_TITLE.to_string(),
            trimmed => trimmed.to_string(),
        };

        JournalEntry {
            id,
            title,
            content: self.content,
            timestamp,
            mood: None,
            tags: Some(self.tags),
            hierarchy_level: None,
            linked_quote: self.linked_quote,
        }
    }
}

/// Journal list ordering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOption {
    #[default]
    DateDesc,
    DateAsc,
    /// Lexicographic by first tag
    Genre,
    /// Accepted but does not reorder
    Level,
}

crate::impl_domain_str_conversions!(SortOption {
    DateDesc => "date_desc",
    DateAsc => "date_asc",
    Genre => "genre",
    Level => "level",
});

/// Journal tag filter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TagFilter {
    #[default]
    All,
    Tag(String),
}

impl std::str::FromStr for TagFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "" | "all" => Self::All,
            tag => Self::Tag(tag.to_string()),
        })
    }
}

/// Parameters for a filtered, sorted journal view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JournalQuery {
    pub search_text: Option<String>,
    pub tag: TagFilter,
    pub sort: SortOption,
}

impl JournalQuery {
    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search_text = Some(text.into());
        self
    }

    pub fn tagged(mut self, tag: impl Into<String>) -> Self {
        self.tag = TagFilter::Tag(tag.into());
        self
    }

    pub fn sorted_by(mut self, sort: SortOption) -> Self {
        self.sort = sort;
        self
    }
}
