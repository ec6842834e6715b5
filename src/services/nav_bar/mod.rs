// Navigation bar widget state
// Couples the date cursor with its observer list and configuration

use chrono::NaiveDate;

use crate::models::buttons::ButtonStates;
use crate::models::command::NavCommand;
use crate::models::config::{ConfigError, NavBarConfig};
use crate::services::cursor::{Applied, DateCursor};

type NavigateObserver = Box<dyn FnMut(NaiveDate)>;
type ReadyObserver = Box<dyn FnOnce(NaiveDate)>;

/// Widget-level state: the cursor plus the synchronous observer list.
///
/// Observers replace the legacy dual-callback paths of earlier revisions
/// with a single ordered list, each entry notified exactly once per
/// committed navigation.
pub struct DateNavBar {
    cursor: DateCursor,
    config: NavBarConfig,
    navigate_observers: Vec<NavigateObserver>,
    ready_observers: Vec<ReadyObserver>,
    ready_fired: bool,
}

impl DateNavBar {
    /// Build the widget state, validating the configuration.
    pub fn new(config: NavBarConfig) -> Result<Self, ConfigError> {
        let cursor = DateCursor::new(&config)?;
        log::debug!("Date nav bar created at {}", cursor.date());
        Ok(Self {
            cursor,
            config,
            navigate_observers: Vec::new(),
            ready_observers: Vec::new(),
            ready_fired: false,
        })
    }

    pub fn config(&self) -> &NavBarConfig {
        &self.config
    }

    /// The committed cursor date.
    pub fn date(&self) -> NaiveDate {
        self.cursor.date()
    }

    pub fn button_states(&self) -> ButtonStates {
        self.cursor.button_states()
    }

    /// Register an observer called once per committed navigation, in
    /// registration order, with the committed date.
    pub fn on_navigate(&mut self, observer: impl FnMut(NaiveDate) + 'static) {
        self.navigate_observers.push(Box::new(observer));
    }

    /// Register an observer called once, after the first render completes.
    pub fn on_ready(&mut self, observer: impl FnOnce(NaiveDate) + 'static) {
        self.ready_observers.push(Box::new(observer));
    }

    /// Apply a navigation command and notify the observers.
    ///
    /// Bounds clamping happens inside the cursor, so observers always see
    /// the final committed value and see it once; there is no separate
    /// corrective notification for a clamped command.
    pub fn apply(&mut self, command: NavCommand) -> Applied {
        let applied = self.cursor.apply(command);
        if applied.clamped {
            log::debug!("Navigation clamped to {}", applied.date);
        }
        for observer in &mut self.navigate_observers {
            observer(applied.date);
        }
        applied
    }

    /// Fire the ready observers with the current date.
    ///
    /// The view adapter calls this after its first render; later calls are
    /// no-ops.
    pub fn notify_ready(&mut self) {
        if self.ready_fired {
            return;
        }
        self.ready_fired = true;
        let date = self.cursor.date();
        for observer in self.ready_observers.drain(..) {
            observer(date);
        }
    }
}
