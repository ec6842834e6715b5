// Granularity module
// The finest date unit the widget lets the user pick

use serde::{Deserialize, Serialize};

/// Selectable date precision.
///
/// Controls which cursor fields respond to navigation commands and which
/// button groups the view renders. At `Year` and `Month` granularity the
/// cursor day stays pinned to 1, so "Jan 31 -> Feb 31" style overflow can
/// never occur.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Granularity {
    /// Only the year is selectable
    Year,
    /// Month and year are selectable
    #[default]
    Month,
    /// Day, month and year are selectable
    Day,
}

impl Granularity {
    /// Whether the month button set exists at this granularity.
    pub fn shows_months(self) -> bool {
        !matches!(self, Granularity::Year)
    }

    /// Whether the day button set exists at this granularity.
    pub fn shows_days(self) -> bool {
        matches!(self, Granularity::Day)
    }
}
