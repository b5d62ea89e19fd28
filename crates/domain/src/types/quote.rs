//! Quote types

use serde::{Deserialize, Serialize};

/// Occasion a quote was generated for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuoteType {
    Daily,
    /// Sunday "quote of the week"
    Weekly,
    Holiday,
    Birthday,
    #[serde(rename = "Custom Reward")]
    Custom,
}

/// A quote shown to the user.
///
/// Two quotes are the same quote when their `text` matches exactly; `id` is
/// only a display handle derived from the creation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub id: String,
    pub text: String,
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub timestamp: i64,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub quote_type: Option<QuoteType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub holiday_name: Option<String>,
}

impl Quote {
    /// Build a quote from a generated triple, stamped with `timestamp_ms`.
    pub fn from_triple(triple: QuoteTriple, timestamp_ms: i64) -> Self {
        Self {
            id: timestamp_ms.to_string(),
            text: triple.text,
            author: triple.author,
            category: Some(triple.category),
            timestamp: timestamp_ms,
            quote_type: None,
            holiday_name: None,
        }
    }

    pub fn with_type(mut self, quote_type: QuoteType) -> Self {
        self.quote_type = Some(quote_type);
        self
    }

    pub fn with_holiday(mut self, holiday: Option<String>) -> Self {
        self.holiday_name = holiday;
        self
    }

    /// Favorite identity: exact text match.
    pub fn same_text(&self, other: &Quote) -> bool {
        self.text == other.text
    }
}

/// Raw generation output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteTriple {
    pub text: String,
    pub author: String,
    pub category: String,
}

/// Compile-time canned quote used when generation is unavailable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallbackQuote {
    pub text: &'static str,
    pub author: &'static str,
    pub category: &'static str,
}

impl FallbackQuote {
    pub fn to_triple(self) -> QuoteTriple {
        QuoteTriple {
            text: self.text.to_string(),
            author: self.author.to_string(),
            category: self.category.to_string(),
        }
    }
}

/// Tone of a claimed reward quote
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RewardMode {
    /// Comfort and validation
    #[default]
    Kind,
    /// Growth and gentle challenge
    Helpful,
}

crate::impl_domain_str_conversions!(RewardMode {
    Kind => "kind",
    Helpful => "helpful",
});

impl RewardMode {
    /// Category label the mentor is asked to return.
    pub fn category(self) -> &'static str {
        match self {
            Self::Kind => "Comfort",
            Self::Helpful => "Growth",
        }
    }
}
