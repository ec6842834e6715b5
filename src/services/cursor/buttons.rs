// Derived button state computation
// Pure function of the cursor, its bounds and granularity

use chrono::{Datelike, NaiveDate};

use super::DateCursor;
use crate::models::buttons::{ButtonState, ButtonStates, YearButton, YearButtons};
use crate::utils::date::{days_in_month, first_of_month, last_of_month};

pub(super) fn compute(cursor: &DateCursor) -> ButtonStates {
    let year = cursor.date().year();

    let months = cursor.granularity().shows_months().then(|| {
        let mut states = [ButtonState::default(); 12];
        for (idx, state) in states.iter_mut().enumerate() {
            let month = idx as u32 + 1;
            *state = ButtonState {
                enabled: month_in_bounds(cursor, year, month),
                focused: month == cursor.date().month(),
            };
        }
        states
    });

    let days = cursor.granularity().shows_days().then(|| {
        let month = cursor.date().month();
        (1..=days_in_month(year, month))
            .map(|day| ButtonState {
                enabled: NaiveDate::from_ymd_opt(year, month, day)
                    .is_some_and(|date| date_in_bounds(cursor, date)),
                focused: day == cursor.date().day(),
            })
            .collect()
    });

    let (big_inc, tiny_inc) = cursor.increments();
    let year_button = |target_year: i32, focused: bool| YearButton {
        target_year,
        enabled: year_in_bounds(cursor, target_year),
        focused,
    };
    let years = YearButtons {
        prev_big: year_button(year - big_inc, false),
        prev_tiny: year_button(year - tiny_inc, false),
        prev: year_button(year - 1, false),
        current: year_button(year, true),
        next: year_button(year + 1, false),
        next_tiny: year_button(year + tiny_inc, false),
        next_big: year_button(year + big_inc, false),
    };

    ButtonStates { months, days, years }
}

/// A month is selectable when any of its days falls inside the bounds.
fn month_in_bounds(cursor: &DateCursor, year: i32, month: u32) -> bool {
    let (Some(first), Some(last)) = (first_of_month(year, month), last_of_month(year, month))
    else {
        return false;
    };
    cursor.min_date().map_or(true, |min| last >= min)
        && cursor.max_date().map_or(true, |max| first <= max)
}

/// A year-shift target is reachable when its year still holds at least one
/// in-bounds month.
fn year_in_bounds(cursor: &DateCursor, year: i32) -> bool {
    (1..=12).any(|month| month_in_bounds(cursor, year, month))
}

fn date_in_bounds(cursor: &DateCursor, date: NaiveDate) -> bool {
    cursor.min_date().map_or(true, |min| date >= min)
        && cursor.max_date().map_or(true, |max| date <= max)
}
