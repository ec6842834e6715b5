// Date cursor state machine
// Owns the current date, applies navigation commands and enforces bounds

use chrono::{Datelike, Local, NaiveDate};

use crate::models::buttons::ButtonStates;
use crate::models::command::NavCommand;
use crate::models::config::{ConfigError, NavBarConfig};
use crate::models::granularity::Granularity;
use crate::utils::date::days_in_month;

mod buttons;

/// Outcome of a committed navigation command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Applied {
    /// The committed cursor date
    pub date: NaiveDate,
    /// Whether bounds clamping altered what the raw command asked for
    pub clamped: bool,
}

/// The single currently-selected date, plus everything needed to constrain
/// it.
///
/// The cursor owns its value exclusively; it changes only through [`apply`]
/// and every committed value satisfies the invariants established at
/// construction (day valid for its month, pinned to 1 below `Day`
/// granularity, inside the configured bounds).
///
/// [`apply`]: DateCursor::apply
#[derive(Debug, Clone)]
pub struct DateCursor {
    date: NaiveDate,
    min_date: Option<NaiveDate>,
    max_date: Option<NaiveDate>,
    granularity: Granularity,
    big_inc: i32,
    tiny_inc: i32,
}

impl DateCursor {
    /// Build a cursor from the widget configuration.
    ///
    /// Fails on reversed bounds or invalid increments; an out-of-bounds or
    /// absent initial date is recovered by substitution and clamping instead.
    pub fn new(config: &NavBarConfig) -> Result<Self, ConfigError> {
        Self::with_today(config, Local::now().date_naive())
    }

    /// Construction against an explicit "today", so that the implicit
    /// max-bound derivation stays deterministic under test.
    pub(crate) fn with_today(config: &NavBarConfig, today: NaiveDate) -> Result<Self, ConfigError> {
        config.validate()?;

        let granularity = config.granularity;
        let min_date = config.min_date.map(|date| normalize(date, granularity));
        let mut max_date = config.max_date.map(|date| normalize(date, granularity));
        if max_date.is_none() && !config.show_future {
            max_date = Some(normalize(today, granularity));
        }

        let mut cursor = Self {
            date: today,
            min_date,
            max_date,
            granularity,
            big_inc: config.big_inc,
            tiny_inc: config.tiny_inc,
        };
        let initial = normalize(config.initial_date.unwrap_or(today), granularity);
        cursor.date = cursor.clamp_to_bounds(initial);
        Ok(cursor)
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn min_date(&self) -> Option<NaiveDate> {
        self.min_date
    }

    pub fn max_date(&self) -> Option<NaiveDate> {
        self.max_date
    }

    pub fn granularity(&self) -> Granularity {
        self.granularity
    }

    pub(crate) fn increments(&self) -> (i32, i32) {
        (self.big_inc, self.tiny_inc)
    }

    /// Apply a navigation command and commit the resulting date.
    ///
    /// Commands only overwrite the fields they name; payloads outside the
    /// configured granularity are ignored and out-of-range values are
    /// clamped, never rejected. The returned [`Applied::clamped`] flag tells
    /// the view layer the raw command result was corrected, so it can
    /// suppress a second notification.
    ///
    /// Clamping is idempotent: re-applying a committed value is a no-op, so
    /// a corrective re-apply never cascades.
    pub fn apply(&mut self, command: NavCommand) -> Applied {
        let mut year = self.date.year();
        let mut month = self.date.month();
        let mut day = self.date.day();

        match command {
            NavCommand::SetMonth(m) if self.granularity.shows_months() => month = m.clamp(1, 12),
            NavCommand::SetDay(d) if self.granularity.shows_days() => day = d.max(1),
            NavCommand::ShiftYear(delta) => year = year.saturating_add(delta),
            NavCommand::SetYear(y) => year = y,
            // Field commands outside the configured granularity are ignored
            NavCommand::SetMonth(_) | NavCommand::SetDay(_) => {}
        }

        // Month-end overflow clamps to the last valid day, it never spills
        // into the next month
        let day = day.min(days_in_month(year, month));
        let raw = NaiveDate::from_ymd_opt(year, month, day).unwrap_or(self.date);
        let committed = self.clamp_to_bounds(raw);
        self.date = committed;
        Applied {
            date: committed,
            clamped: committed != raw,
        }
    }

    /// Derived enabled/focused state for every control, recomputed from the
    /// committed cursor.
    pub fn button_states(&self) -> ButtonStates {
        buttons::compute(self)
    }

    fn clamp_to_bounds(&self, candidate: NaiveDate) -> NaiveDate {
        let mut date = candidate;
        if let Some(max) = self.max_date {
            date = date.min(max);
        }
        if let Some(min) = self.min_date {
            date = date.max(min);
        }
        date
    }
}

/// Pin the day to 1 below `Day` granularity, so every month/year move lands
/// on a valid date.
fn normalize(date: NaiveDate, granularity: Granularity) -> NaiveDate {
    if granularity.shows_days() {
        date
    } else {
        date.with_day(1).unwrap_or(date)
    }
}
