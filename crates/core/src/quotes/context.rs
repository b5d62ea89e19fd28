//! Calendar context for the daily quote and greeting

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike, Weekday};
use mindset_domain::constants::holiday_for;
use mindset_domain::QuoteType;

/// What makes today special, if anything
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateContext {
    pub is_sunday: bool,
    pub holiday: Option<String>,
    pub is_birthday: bool,
}

impl DateContext {
    /// Build the context for `date`. `birthday` is an `MM-DD` string.
    pub fn for_date(date: NaiveDate, birthday: Option<&str>) -> Self {
        let month_day = format!("{:02}-{:02}", date.month(), date.day());

        Self {
            is_sunday: date.weekday() == Weekday::Sun,
            holiday: holiday_for(&month_day).map(str::to_string),
            is_birthday: birthday.is_some_and(|b| b.trim() == month_day),
        }
    }

    /// Holiday wins over birthday, birthday over Sunday.
    pub fn quote_type(&self) -> QuoteType {
        if self.holiday.is_some() {
            QuoteType::Holiday
        } else if self.is_birthday {
            QuoteType::Birthday
        } else if self.is_sunday {
            QuoteType::Weekly
        } else {
            QuoteType::Daily
        }
    }
}

/// Time-of-day greeting, replaced by the holiday name on holidays.
pub fn greeting(now: NaiveDateTime) -> String {
    if let Some(holiday) = holiday_for(&now.format("%m-%d").to_string()) {
        return format!("Happy {holiday}");
    }

    match now.hour() {
        0..=11 => "Good Morning",
        12..=16 => "Good Afternoon",
        _ => "Good Evening",
    }
    .to_string()
}
