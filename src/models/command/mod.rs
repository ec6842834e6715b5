// Navigation command model
// Click intents forwarded from the view adapter to the date cursor

use serde::{Deserialize, Serialize};

/// Identifies one of the six year-shift buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum YearShift {
    PrevBig,
    PrevTiny,
    Prev,
    Next,
    NextTiny,
    NextBig,
}

impl YearShift {
    /// Signed year delta for this button under the configured increments.
    pub fn delta(self, big_inc: i32, tiny_inc: i32) -> i32 {
        match self {
            YearShift::PrevBig => -big_inc,
            YearShift::PrevTiny => -tiny_inc,
            YearShift::Prev => -1,
            YearShift::Next => 1,
            YearShift::NextTiny => tiny_inc,
            YearShift::NextBig => big_inc,
        }
    }
}

/// A single navigation intent.
///
/// A command names only the cursor field(s) it changes; unspecified fields
/// keep their current values. Out-of-range payloads are clamped by the
/// cursor rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavCommand {
    /// Select a month (1-12) within the current year
    SetMonth(u32),
    /// Select a day within the current month
    SetDay(u32),
    /// Move the year by a signed number of years
    ShiftYear(i32),
    /// Jump to a concrete year, as emitted by buttons that carry one
    SetYear(i32),
}
