//! Focus levels
//!
//! Eight Maslow-inspired stages, in canonical order from basic needs to
//! transcendence.

use serde::{Deserialize, Serialize};

/// The user's current motivational focus
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HierarchyLevel {
    #[default]
    Physiological,
    Safety,
    #[serde(rename = "Belonging and Love")]
    BelongingAndLove,
    Esteem,
    Cognitive,
    Aesthetic,
    #[serde(rename = "Self-Actualization")]
    SelfActualization,
    Transcendence,
}

crate::impl_domain_str_conversions!(HierarchyLevel {
    Physiological => "Physiological",
    Safety => "Safety",
    BelongingAndLove => "Belonging and Love",
    Esteem => "Esteem",
    Cognitive => "Cognitive",
    Aesthetic => "Aesthetic",
    SelfActualization => "Self-Actualization",
    Transcendence => "Transcendence",
});

impl HierarchyLevel {
    /// All levels in hierarchy order.
    pub const ALL: [HierarchyLevel; 8] = [
        Self::Physiological,
        Self::Safety,
        Self::BelongingAndLove,
        Self::Esteem,
        Self::Cognitive,
        Self::Aesthetic,
        Self::SelfActualization,
        Self::Transcendence,
    ];

    /// Zero-based position in [`HierarchyLevel::ALL`].
    pub fn rank(self) -> usize {
        Self::ALL.iter().position(|level| *level == self).unwrap_or_default()
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Physiological => "Focusing on basic survival needs: health, food, sleep.",
            Self::Safety => "Building security, stability, and freedom from fear.",
            Self::BelongingAndLove => "Cultivating relationships, intimacy, and connection.",
            Self::Esteem => "Developing self-respect, status, and recognition.",
            Self::Cognitive => "Seeking knowledge, understanding, and meaning.",
            Self::Aesthetic => "Appreciating beauty, balance, and form.",
            Self::SelfActualization => "Realizing personal potential and self-fulfillment.",
            Self::Transcendence => {
                "Helping others to self-actualize and connecting to the universe."
            }
        }
    }

    /// Genres that pair well with this level (shown as suggestions).
    pub fn suggested_genres(self) -> &'static [&'static str] {
        match self {
            Self::Physiological => &["Health", "Sleep", "Patience", "Life", "Yoga"],
            Self::Safety => &["Peace", "Trust", "Work", "Stability", "Encouragement"],
            Self::BelongingAndLove => {
                &["Family", "Loyalty", "Forgiveness", "Friendship", "Thankful"]
            }
            Self::Esteem => &["Confidence", "Leadership", "Respect", "Power", "Courage"],
            Self::Cognitive => &["Wisdom", "Knowledge", "Learning", "Truth", "Experience"],
            Self::Aesthetic => &["Beauty", "Nature", "Art", "You're Beautiful", "Quality"],
            Self::SelfActualization => {
                &["Journey", "Growth", "Creativity", "Opportunity", "Optimistic"]
            }
            Self::Transcendence => &["Karma", "Spirituality", "Uplifting", "Change", "Moving On"],
        }
    }

    /// Every level except `self`, in hierarchy order.
    pub fn others(self) -> Vec<HierarchyLevel> {
        Self::ALL.into_iter().filter(|level| *level != self).collect()
    }
}
