// Widget configuration model
// The option set accepted when the navigation bar is constructed

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::granularity::Granularity;
use crate::utils::date::parse_date;

/// Default big year-shift magnitude.
pub const DEFAULT_BIG_INC: i32 = 10;
/// Default tiny year-shift magnitude.
pub const DEFAULT_TINY_INC: i32 = 5;

/// Fatal construction-time misconfiguration.
///
/// Raised once, when the widget is built; a validly constructed widget never
/// errors again.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("minimum date {min} is after maximum date {max}")]
    BoundsOutOfOrder { min: NaiveDate, max: NaiveDate },
    #[error("year increments must be positive with tiny ({tiny}) smaller than big ({big})")]
    InvalidIncrements { big: i32, tiny: i32 },
}

/// Construction options for the navigation bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavBarConfig {
    /// Starting cursor value; today when absent
    pub initial_date: Option<NaiveDate>,
    /// Inclusive lower bound; unconstrained when absent
    pub min_date: Option<NaiveDate>,
    /// Inclusive upper bound; unconstrained when absent
    pub max_date: Option<NaiveDate>,
    /// When false and no explicit `max_date` is set, today becomes the max
    pub show_future: bool,
    /// Big year-shift magnitude
    pub big_inc: i32,
    /// Tiny year-shift magnitude, must stay below `big_inc`
    pub tiny_inc: i32,
    /// Label the tiny/big buttons "+/-N" instead of chevrons
    pub show_inc: bool,
    /// Finest selectable date unit
    pub granularity: Granularity,
    /// Display labels for months, index = month - 1
    pub month_names: [String; 12],
}

impl Default for NavBarConfig {
    fn default() -> Self {
        Self {
            initial_date: None,
            min_date: None,
            max_date: None,
            show_future: true,
            big_inc: DEFAULT_BIG_INC,
            tiny_inc: DEFAULT_TINY_INC,
            show_inc: false,
            granularity: Granularity::default(),
            month_names: default_month_names(),
        }
    }
}

fn default_month_names() -> [String; 12] {
    [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ]
    .map(str::to_string)
}

impl NavBarConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_initial_date(mut self, date: NaiveDate) -> Self {
        self.initial_date = Some(date);
        self
    }

    pub fn with_min_date(mut self, date: NaiveDate) -> Self {
        self.min_date = Some(date);
        self
    }

    pub fn with_max_date(mut self, date: NaiveDate) -> Self {
        self.max_date = Some(date);
        self
    }

    pub fn with_show_future(mut self, show_future: bool) -> Self {
        self.show_future = show_future;
        self
    }

    pub fn with_increments(mut self, big_inc: i32, tiny_inc: i32) -> Self {
        self.big_inc = big_inc;
        self.tiny_inc = tiny_inc;
        self
    }

    pub fn with_show_inc(mut self, show_inc: bool) -> Self {
        self.show_inc = show_inc;
        self
    }

    pub fn with_granularity(mut self, granularity: Granularity) -> Self {
        self.granularity = granularity;
        self
    }

    /// Convenience for the historical `showDays` flag.
    pub fn with_show_days(mut self, show_days: bool) -> Self {
        self.granularity = if show_days {
            Granularity::Day
        } else {
            Granularity::Month
        };
        self
    }

    pub fn with_month_names(mut self, month_names: [String; 12]) -> Self {
        self.month_names = month_names;
        self
    }

    /// Set the initial date from a string, recovering to today on parse
    /// failure.
    pub fn with_initial_date_str(mut self, input: &str) -> Self {
        self.initial_date = parse_date(input);
        if self.initial_date.is_none() {
            log::warn!("Invalid initial date '{}', falling back to today", input);
        }
        self
    }

    /// Set the minimum bound from a string; unparsable input leaves the
    /// bound absent.
    pub fn with_min_date_str(mut self, input: &str) -> Self {
        self.min_date = parse_date(input);
        if self.min_date.is_none() {
            log::warn!("Invalid minimum date '{}', treating as absent", input);
        }
        self
    }

    /// Set the maximum bound from a string; unparsable input leaves the
    /// bound absent.
    pub fn with_max_date_str(mut self, input: &str) -> Self {
        self.max_date = parse_date(input);
        if self.max_date.is_none() {
            log::warn!("Invalid maximum date '{}', treating as absent", input);
        }
        self
    }

    /// Check the construction-time invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.big_inc <= 0 || self.tiny_inc <= 0 || self.tiny_inc >= self.big_inc {
            return Err(ConfigError::InvalidIncrements {
                big: self.big_inc,
                tiny: self.tiny_inc,
            });
        }
        if let (Some(min), Some(max)) = (self.min_date, self.max_date) {
            if max < min {
                return Err(ConfigError::BoundsOutOfOrder { min, max });
            }
        }
        Ok(())
    }

    /// Display label for a 1-based month number.
    pub fn month_name(&self, month: u32) -> &str {
        self.month_names
            .get(month.saturating_sub(1) as usize)
            .map(String::as_str)
            .unwrap_or("?")
    }
}
