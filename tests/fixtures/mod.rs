// Test fixtures - reusable test data
// Provides consistent dates and configurations across test files

use chrono::NaiveDate;
use date_nav_bar::models::config::NavBarConfig;

/// Sample dates for testing
pub mod dates {
    use super::*;

    pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    /// Returns Mar 1, 2020
    pub fn mar_2020() -> NaiveDate {
        ymd(2020, 3, 1)
    }

    /// Returns Feb 29, 2024 (leap day)
    pub fn leap_day_2024() -> NaiveDate {
        ymd(2024, 2, 29)
    }
}

/// Sample configurations for testing
pub mod configs {
    use super::*;

    /// Cursor at Mar 2020, bounded to the first half of 2020
    pub fn first_half_2020() -> NavBarConfig {
        NavBarConfig::new()
            .with_initial_date(dates::mar_2020())
            .with_min_date(dates::ymd(2020, 1, 1))
            .with_max_date(dates::ymd(2020, 6, 1))
    }

    /// Unbounded day-granularity cursor at Mar 15, 2020
    pub fn mid_march_with_days() -> NavBarConfig {
        NavBarConfig::new()
            .with_show_days(true)
            .with_initial_date(dates::ymd(2020, 3, 15))
    }
}
