// Derived button state model
// Computed fresh from the cursor on every render pass, never stored

/// Render state for a single selectable control.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonState {
    /// Whether the control is clickable
    pub enabled: bool,
    /// Whether the control matches the current cursor value
    pub focused: bool,
}

/// Render state for one year navigation button.
///
/// Carries the concrete year the button would land on, so the view can both
/// label the prev/current/next buttons and emit absolute year jumps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearButton {
    pub target_year: i32,
    pub enabled: bool,
    pub focused: bool,
}

/// The seven-button year group, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearButtons {
    pub prev_big: YearButton,
    pub prev_tiny: YearButton,
    pub prev: YearButton,
    pub current: YearButton,
    pub next: YearButton,
    pub next_tiny: YearButton,
    pub next_big: YearButton,
}

/// Full derived control state for one render pass.
///
/// `months` is absent at `Year` granularity, `days` is present only at `Day`
/// granularity and holds exactly days-in-month entries for the cursor month.
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonStates {
    pub months: Option<[ButtonState; 12]>,
    pub days: Option<Vec<ButtonState>>,
    pub years: YearButtons,
}

impl ButtonStates {
    /// 1-based month of the focused month button, if months are shown.
    pub fn focused_month(&self) -> Option<u32> {
        self.months.as_ref().and_then(|months| {
            months
                .iter()
                .position(|state| state.focused)
                .map(|idx| idx as u32 + 1)
        })
    }

    /// 1-based day of the focused day button, if days are shown.
    pub fn focused_day(&self) -> Option<u32> {
        self.days.as_ref().and_then(|days| {
            days.iter()
                .position(|state| state.focused)
                .map(|idx| idx as u32 + 1)
        })
    }
}
