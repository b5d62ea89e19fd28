//! Plain-text rendering for command output

use chrono::DateTime;
use mindset_domain::{HierarchyLevel, JournalEntry, Quote, UserProgress};

pub fn quote(quote: &Quote) -> String {
    let mut out = format!("\"{}\"\n  - {}", quote.text, quote.author);
    if let Some(category) = &quote.category {
        out.push_str(&format!(" [{category}]"));
    }
    out
}

/// One line per favorite, prefixed by its id.
pub fn favorite_line(quote: &Quote) -> String {
    format!("{}  \"{}\" - {}", quote.id, quote.text, quote.author)
}

pub fn date(timestamp_ms: i64) -> String {
    DateTime::from_timestamp_millis(timestamp_ms)
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| timestamp_ms.to_string())
}

pub fn journal_entry(entry: &JournalEntry) -> String {
    let mut out = format!("[{}] {}  {}", entry.id, date(entry.timestamp), entry.title);
    if !entry.tags().is_empty() {
        out.push_str(&format!("  #{}", entry.tags().join(" #")));
    }
    if !entry.content.is_empty() {
        out.push_str(&format!("\n    {}", entry.content.replace('\n', "\n    ")));
    }
    if let Some(linked) = &entry.linked_quote {
        out.push_str(&format!("\n    > \"{}\" - {}", linked.text, linked.author));
    }
    out
}

pub fn level(level: HierarchyLevel) -> String {
    format!(
        "{level}: {}\nSuggested genres: {}",
        level.description(),
        level.suggested_genres().join(", ")
    )
}

/// Counters plus how far the next milestone is.
pub fn progress(progress: &UserProgress, journals_required: u32, saves_required: u32) -> String {
    format!(
        "Quotes saved:      {} ({} until next reward)\n\
         Journals written:  {} ({} until next reward)\n\
         Rewards available: {}\n\
         Rewards claimed:   {}",
        progress.quotes_saved,
        until_next(progress.quotes_saved, saves_required),
        progress.journals_written,
        until_next(progress.journals_written, journals_required),
        progress.rewards_available,
        progress.total_rewards_claimed,
    )
}

fn until_next(count: u32, threshold: u32) -> u32 {
    let threshold = threshold.max(1);
    threshold - count % threshold
}
