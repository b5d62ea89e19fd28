//! Macro for implementing Display and FromStr for domain string enums
//!
//! Focus levels, sort options and reward modes all travel as plain strings
//! (persisted store values, CLI arguments). This macro provides a single
//! mapping for both directions.
//!
//! # Example
//!
//! ```rust
//! use mindset_domain::impl_domain_str_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Mood {
//!     Calm,
//!     Restless,
//! }
//!
//! impl_domain_str_conversions!(Mood {
//!     Calm => "calm",
//!     Restless => "restless",
//! });
//!
//! assert_eq!(Mood::Calm.to_string(), "calm");
//! assert_eq!("RESTLESS".parse::<Mood>().unwrap(), Mood::Restless);
//! ```

/// Implements Display, FromStr and `as_str` for string-backed enums
///
/// This macro generates:
/// - `as_str`: the canonical string for a variant
/// - Display trait: writes the canonical string unchanged
/// - FromStr trait: parses ASCII case-insensitively against the canonical
///   strings
///
/// # Arguments
///
/// * `$enum_name` - The name of the enum type
/// * `$variant => $str` - Mapping of enum variants to their canonical strings
#[macro_export]
macro_rules! impl_domain_str_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl $enum_name {
            /// Canonical string representation.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $str,)+
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                $(
                    if s.eq_ignore_ascii_case($str) {
                        return Ok(Self::$variant);
                    }
                )+
                Err(format!("Invalid {}: {}", stringify!($enum_name), s))
            }
        }
    };
}
