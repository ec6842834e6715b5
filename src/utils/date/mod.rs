// Date utility functions
// Free pure helpers with no global side effects

use chrono::NaiveDate;

/// Number of days in the given month, accounting for leap years.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Gregorian leap year rule.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// First day of the given month.
pub fn first_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)
}

/// Last day of the given month.
pub fn last_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, days_in_month(year, month))
}

/// Parse a date from the formats the widget historically accepted.
///
/// Full dates in ISO or US order, plus year-month forms which resolve to the
/// first of the month.
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    const FULL_FORMATS: [&str; 3] = ["%Y-%m-%d", "%m/%d/%Y", "%Y/%m/%d"];
    const MONTH_FORMATS: [&str; 2] = ["%Y-%m-%d", "%m/%d/%Y"];

    let input = input.trim();
    if let Some(date) = FULL_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(input, format).ok())
    {
        return Some(date);
    }

    // Year-month input ("2020-06", "06/2020") gets day 1 appended
    let padded: [String; 2] = [format!("{}-1", input), input.replacen('/', "/1/", 1)];
    padded
        .iter()
        .zip(MONTH_FORMATS.iter())
        .find_map(|(candidate, format)| NaiveDate::parse_from_str(candidate, format).ok())
}
