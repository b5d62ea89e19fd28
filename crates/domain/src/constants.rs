//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

use crate::types::FallbackQuote;

// Persisted store keys
pub const STORAGE_KEY_LEVEL: &str = "mindset_level";
pub const STORAGE_KEY_GENRES: &str = "mindset_genres";
pub const STORAGE_KEY_FAVORITES: &str = "mindset_favorites";
pub const STORAGE_KEY_ONBOARDED: &str = "mindset_onboarded";
pub const STORAGE_KEY_PROGRESS: &str = "mindset_progress";
pub const STORAGE_KEY_JOURNAL: &str = "mindset_journal";
pub const ONBOARDED_MARKER: &str = "true";

// Milestones
pub const JOURNALS_REQUIRED_FOR_REWARD: u32 = 3;
pub const SAVES_REQUIRED_FOR_REWARD: u32 = 5;

// Journal
pub const UNTITLED_JOURNAL_TITLE: &str = "Untitled Thought";
pub const REWARD_JOURNAL_EXCERPTS: usize = 3;
pub const REWARD_EXCERPT_MAX_CHARS: usize = 200;

// Generation
pub const DEFAULT_GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
pub const REWARD_AUTHOR: &str = "Mindset AI Mentor";

/// Used when no API key is configured.
pub const FALLBACK_DAILY_UNCONFIGURED: FallbackQuote = FallbackQuote {
    text: "To the mind that is still, the whole universe surrenders.",
    author: "Lao Tzu",
    category: "Peace",
};

/// Used when the generation request fails.
pub const FALLBACK_DAILY_FAILURE: FallbackQuote = FallbackQuote {
    text: "Growth starts when we accept our own imperfections.",
    author: "Mindset AI",
    category: "Growth",
};

pub const FALLBACK_REWARD_UNCONFIGURED: FallbackQuote = FallbackQuote {
    text: "You are doing great. Keep going.",
    author: "Your Inner Self",
    category: "Reward",
};

pub const FALLBACK_REWARD_FAILURE: FallbackQuote = FallbackQuote {
    text: "The reward is in the journey itself.",
    author: "Mindset AI",
    category: "Reward",
};

/// Genres offered during onboarding and journal tagging.
pub const QUOTE_GENRES: &[&str] = &[
    "Beauty",
    "Change",
    "Confidence",
    "Courage",
    "Encouraging",
    "Experience",
    "Encouragement",
    "Funny",
    "Forgiveness",
    "Happiness",
    "Inspirational",
    "Journey",
    "Knowledge",
    "Karma",
    "Life",
    "Leadership",
    "Learning",
    "Loyalty",
    "Motivational",
    "Moving On",
    "Nature",
    "Optimistic",
    "Opportunity",
    "Positive",
    "Patience",
    "Peace",
    "Power",
    "Quality",
    "Respect",
    "Trust",
    "Thankful",
    "Uplifting",
    "Wisdom",
    "Work",
    "Yoga",
    "You're Beautiful",
    "Health",
    "Sleep",
    "Family",
    "Spirituality",
    "Creativity",
];

/// Fixed-date holidays keyed by `MM-DD`.
pub const HOLIDAYS: &[(&str, &str)] = &[
    ("01-01", "New Year's Day"),
    ("02-14", "Valentine's Day"),
    ("03-17", "St. Patrick's Day"),
    ("04-22", "Earth Day"),
    ("07-04", "Independence Day"),
    ("10-31", "Halloween"),
    ("12-24", "Christmas Eve"),
    ("12-25", "Christmas Day"),
    ("12-31", "New Year's Eve"),
];

/// Look up the holiday name for an `MM-DD` key.
pub fn holiday_for(month_day: &str) -> Option<&'static str> {
    HOLIDAYS.iter().find(|(key, _)| *key == month_day).map(|(_, name)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn holiday_lookup_matches_exact_keys() {
        assert_eq!(holiday_for("12-25"), Some("Christmas Day"));
        assert_eq!(holiday_for("01-01"), Some("New Year's Day"));
        assert_eq!(holiday_for("1-1"), None);
        assert_eq!(holiday_for("06-15"), None);
    }

    #[test]
    fn genres_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for genre in QUOTE_GENRES {
            assert!(seen.insert(genre), "duplicate genre {genre}");
        }
    }
}
