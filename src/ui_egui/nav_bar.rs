//! Date navigation bar rendering.
//!
//! Draws the month, year and optional day button sets from the derived
//! button state and forwards clicks as navigation commands. All state lives
//! in [`DateNavBar`]; this module is a pure view over it.

use chrono::NaiveDate;
use egui::{Frame, Margin, RichText, Rounding, Stroke, Ui};

use super::palette::NavBarPalette;
use crate::models::buttons::{ButtonState, YearButton};
use crate::models::command::{NavCommand, YearShift};
use crate::services::nav_bar::DateNavBar;

const BUTTON_TEXT_SIZE: f32 = 12.0;

/// What happened in the bar during this frame.
#[derive(Debug, Default, Clone, Copy)]
pub struct NavBarResponse {
    /// Date committed this frame, if a button was clicked
    pub changed: Option<NaiveDate>,
    /// Whether the committed date was clamped into the configured bounds
    pub clamped: bool,
}

pub struct NavBarView;

impl NavBarView {
    /// Render the bar and apply at most one click's worth of navigation.
    ///
    /// Observers registered on `nav` fire from inside this call; the
    /// response carries the same committed date for immediate-mode callers.
    pub fn show(ui: &mut Ui, nav: &mut DateNavBar) -> NavBarResponse {
        let palette = NavBarPalette::from_visuals(ui.visuals());
        let states = nav.button_states();
        let mut command = None;

        ui.horizontal_wrapped(|ui| {
            if let Some(months) = &states.months {
                Self::button_group(ui, &palette, |ui| {
                    for (idx, state) in months.iter().enumerate() {
                        let month = idx as u32 + 1;
                        if Self::nav_button(ui, &palette, nav.config().month_name(month), *state)
                        {
                            command = Some(NavCommand::SetMonth(month));
                        }
                    }
                });
            }

            Self::button_group(ui, &palette, |ui| {
                let years = &states.years;
                for (shift, button) in [
                    (Some(YearShift::PrevBig), years.prev_big),
                    (Some(YearShift::PrevTiny), years.prev_tiny),
                    (Some(YearShift::Prev), years.prev),
                    (None, years.current),
                    (Some(YearShift::Next), years.next),
                    (Some(YearShift::NextTiny), years.next_tiny),
                    (Some(YearShift::NextBig), years.next_big),
                ] {
                    let label = Self::year_label(nav, shift, button);
                    let state = ButtonState {
                        enabled: button.enabled,
                        focused: button.focused,
                    };
                    if Self::nav_button(ui, &palette, &label, state) {
                        command = Some(Self::year_command(nav, shift, button));
                    }
                }
            });
        });

        if let Some(days) = &states.days {
            ui.horizontal_wrapped(|ui| {
                Self::button_group(ui, &palette, |ui| {
                    for (idx, state) in days.iter().enumerate() {
                        let day = idx as u32 + 1;
                        if Self::nav_button(ui, &palette, &day.to_string(), *state) {
                            command = Some(NavCommand::SetDay(day));
                        }
                    }
                });
            });
        }

        let mut response = NavBarResponse::default();
        if let Some(command) = command {
            let applied = nav.apply(command);
            response.changed = Some(applied.date);
            response.clamped = applied.clamped;
        }
        nav.notify_ready();
        response
    }

    fn button_group(
        ui: &mut Ui,
        palette: &NavBarPalette,
        add_contents: impl FnOnce(&mut Ui),
    ) {
        Frame::none()
            .stroke(Stroke::new(1.0, palette.group_border))
            .rounding(Rounding::same(6.0))
            .inner_margin(Margin::symmetric(6.0, 4.0))
            .show(ui, |ui| {
                ui.horizontal(add_contents);
            });
    }

    fn nav_button(ui: &mut Ui, palette: &NavBarPalette, label: &str, state: ButtonState) -> bool {
        let color = if state.focused {
            palette.focused_text
        } else {
            palette.text
        };
        let mut button = egui::Button::new(
            RichText::new(label).size(BUTTON_TEXT_SIZE).color(color),
        );
        if state.focused {
            button = button.fill(palette.focused_bg);
        }
        ui.add_enabled(state.enabled, button).clicked()
    }

    /// Prev/current/next carry their concrete year; the increment buttons
    /// show chevrons, or the signed increment when `show_inc` is set.
    fn year_label(nav: &DateNavBar, shift: Option<YearShift>, button: YearButton) -> String {
        let config = nav.config();
        match shift {
            Some(YearShift::PrevBig) if config.show_inc => format!("-{}", config.big_inc),
            Some(YearShift::PrevTiny) if config.show_inc => format!("-{}", config.tiny_inc),
            Some(YearShift::NextTiny) if config.show_inc => format!("+{}", config.tiny_inc),
            Some(YearShift::NextBig) if config.show_inc => format!("+{}", config.big_inc),
            Some(YearShift::PrevBig) => "<<".to_string(),
            Some(YearShift::PrevTiny) => "<".to_string(),
            Some(YearShift::NextTiny) => ">".to_string(),
            Some(YearShift::NextBig) => ">>".to_string(),
            Some(YearShift::Prev) | Some(YearShift::Next) | None => {
                button.target_year.to_string()
            }
        }
    }

    /// Buttons labelled with a concrete year jump absolutely; the increment
    /// buttons shift relative to the current year.
    fn year_command(nav: &DateNavBar, shift: Option<YearShift>, button: YearButton) -> NavCommand {
        let config = nav.config();
        match shift {
            Some(YearShift::Prev) | Some(YearShift::Next) | None => {
                NavCommand::SetYear(button.target_year)
            }
            Some(shift) => NavCommand::ShiftYear(shift.delta(config.big_inc, config.tiny_inc)),
        }
    }
}
