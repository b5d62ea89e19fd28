//! In-memory journal mirrored to the persisted store
//!
//! The whole list is the unit of persistence: every mutation writes the full
//! list and only replaces the in-memory copy once the write succeeded.

use mindset_domain::{JournalEntry, JournalQuery, MindsetError, Result};
use tracing::{debug, info};

use super::query;
use crate::storage::RecordStore;

/// Whether an upsert created a new entry or replaced an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Created,
    Updated,
}

/// Journal entries, newest first
pub struct JournalBook {
    records: RecordStore,
    entries: Vec<JournalEntry>,
}

impl JournalBook {
    /// Load the journal. Absent or unreadable records yield an empty book.
    pub async fn load(records: RecordStore) -> Self {
        let entries = records.load_journal().await;
        debug!(count = entries.len(), "journal loaded");
        Self { records, entries }
    }

    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    pub fn get(&self, id: &str) -> Option<&JournalEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Replace the entry with the same id, keeping its original timestamp,
    /// or prepend `entry` when the id is unknown.
    pub async fn upsert(&mut self, mut entry: JournalEntry) -> Result<UpsertOutcome> {
        let mut next = self.entries.clone();

        let outcome = match next.iter().position(|existing| existing.id == entry.id) {
            Some(index) => {
                entry.timestamp = next[index].timestamp;
                next[index] = entry;
                UpsertOutcome::Updated
            }
            None => {
                next.insert(0, entry);
                UpsertOutcome::Created
            }
        };

        self.commit(next).await?;
        Ok(outcome)
    }

    /// Remove an entry by id. Returns `false` when no entry matched.
    pub async fn remove(&mut self, id: &str) -> Result<bool> {
        let next: Vec<JournalEntry> =
            self.entries.iter().filter(|entry| entry.id != id).cloned().collect();
        if next.len() == self.entries.len() {
            return Ok(false);
        }

        self.commit(next).await?;
        info!(id, "journal entry removed");
        Ok(true)
    }

    /// Replace the tag list of an existing entry.
    pub async fn update_tags(&mut self, id: &str, tags: Vec<String>) -> Result<JournalEntry> {
        let mut next = self.entries.clone();
        let entry = next
            .iter_mut()
            .find(|entry| entry.id == id)
            .ok_or_else(|| MindsetError::NotFound(format!("journal entry {id}")))?;
        entry.tags = Some(tags);
        let updated = entry.clone();

        self.commit(next).await?;
        Ok(updated)
    }

    /// Write `entries` back as the whole journal, undoing a prior mutation.
    pub async fn restore(&mut self, entries: Vec<JournalEntry>) -> Result<()> {
        self.commit(entries).await?;
        debug!(count = self.entries.len(), "journal restored");
        Ok(())
    }

    pub fn query(&self, params: &JournalQuery) -> Vec<JournalEntry> {
        query::query(&self.entries, params)
    }

    pub fn available_tags(&self) -> Vec<String> {
        query::available_tags(&self.entries)
    }

    /// Content of the newest `count` entries, each cut to `max_chars`
    /// characters.
    pub fn recent_excerpts(&self, count: usize, max_chars: usize) -> Vec<String> {
        self.entries
            .iter()
            .take(count)
            .map(|entry| entry.content.chars().take(max_chars).collect())
            .collect()
    }

    async fn commit(&mut self, next: Vec<JournalEntry>) -> Result<()> {
        self.records.save_journal(&next).await?;
        self.entries = next;
        Ok(())
    }
}
