// Integration tests for the navigation bar state layer
// Drives DateNavBar the way the view adapter does: a stream of click
// commands, with observers watching the committed dates

mod fixtures;

use std::cell::RefCell;
use std::rc::Rc;

use chrono::NaiveDate;
use date_nav_bar::models::command::NavCommand;
use date_nav_bar::models::config::{ConfigError, NavBarConfig};
use date_nav_bar::services::nav_bar::DateNavBar;
use pretty_assertions::assert_eq;

use fixtures::{configs, dates};

fn recording_nav(config: NavBarConfig) -> (DateNavBar, Rc<RefCell<Vec<NaiveDate>>>) {
    let mut nav = DateNavBar::new(config).expect("test configuration is valid");
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    nav.on_navigate(move |date| sink.borrow_mut().push(date));
    (nav, seen)
}

#[test]
fn test_click_sequence_within_bounds() {
    let (mut nav, seen) = recording_nav(configs::first_half_2020());

    nav.apply(NavCommand::SetMonth(5));
    nav.apply(NavCommand::SetMonth(2));
    nav.apply(NavCommand::SetMonth(2));

    assert_eq!(
        *seen.borrow(),
        vec![
            dates::ymd(2020, 5, 1),
            dates::ymd(2020, 2, 1),
            dates::ymd(2020, 2, 1),
        ]
    );
    assert_eq!(nav.date(), dates::ymd(2020, 2, 1));
}

#[test]
fn test_out_of_bounds_navigation_is_clamped_and_notified_once() {
    let (mut nav, seen) = recording_nav(configs::first_half_2020());

    let applied = nav.apply(NavCommand::ShiftYear(10));

    assert!(applied.clamped);
    assert_eq!(applied.date, dates::ymd(2020, 6, 1));
    assert_eq!(*seen.borrow(), vec![dates::ymd(2020, 6, 1)]);

    // The corrective re-apply pattern: feeding the committed value back in
    // changes nothing and needs no further correction
    let corrective = nav.apply(NavCommand::SetYear(2020));
    assert!(!corrective.clamped);
    assert_eq!(corrective.date, dates::ymd(2020, 6, 1));
}

#[test]
fn test_month_clicks_disabled_months_never_commit_out_of_bounds() {
    let (mut nav, _) = recording_nav(configs::first_half_2020());
    let states = nav.button_states();
    let months = states.months.expect("month granularity shows months");

    // Drive every month button, enabled or not, as a hostile adapter would
    for month in 1..=12u32 {
        let applied = nav.apply(NavCommand::SetMonth(month));
        assert!(applied.date >= dates::ymd(2020, 1, 1));
        assert!(applied.date <= dates::ymd(2020, 6, 1));
        let enabled = months[(month - 1) as usize].enabled;
        assert_eq!(enabled, (1..=6).contains(&month), "month {}", month);
    }
}

#[test]
fn test_day_navigation_with_month_end_overflow() {
    let (mut nav, seen) = recording_nav(configs::mid_march_with_days());

    nav.apply(NavCommand::SetDay(31));
    nav.apply(NavCommand::SetMonth(2));

    assert_eq!(
        *seen.borrow(),
        vec![dates::ymd(2020, 3, 31), dates::ymd(2020, 2, 29)]
    );

    let states = nav.button_states();
    let days = states.days.as_ref().expect("day granularity shows days");
    assert_eq!(days.len(), 29);
    assert_eq!(states.focused_day(), Some(29));
    assert_eq!(states.focused_month(), Some(2));
}

#[test]
fn test_year_buttons_track_bounds() {
    let config = NavBarConfig::new()
        .with_initial_date(dates::ymd(2020, 2, 1))
        .with_max_date(dates::ymd(2020, 3, 1));
    let (nav, _) = recording_nav(config);

    let years = nav.button_states().years;
    assert_eq!(years.current.target_year, 2020);
    assert!(!years.next.enabled);
    assert!(!years.next_tiny.enabled);
    assert!(!years.next_big.enabled);
    assert!(years.prev.enabled);
    assert!(years.prev_big.enabled);
}

#[test]
fn test_ready_notification_carries_initial_date() {
    let mut nav = DateNavBar::new(configs::first_half_2020()).unwrap();
    let ready = Rc::new(RefCell::new(None));
    let sink = Rc::clone(&ready);
    nav.on_ready(move |date| *sink.borrow_mut() = Some(date));

    nav.notify_ready();

    assert_eq!(*ready.borrow(), Some(dates::mar_2020()));
}

#[test]
fn test_reversed_bounds_refuse_construction() {
    let config = NavBarConfig::new()
        .with_min_date_str("2022-06")
        .with_max_date_str("2022-01");
    let err = DateNavBar::new(config).err().expect("construction must fail");
    assert_eq!(
        err,
        ConfigError::BoundsOutOfOrder {
            min: dates::ymd(2022, 6, 1),
            max: dates::ymd(2022, 1, 1),
        }
    );
}

#[test]
fn test_leap_day_fixture_round_trip() {
    let config = NavBarConfig::new()
        .with_show_days(true)
        .with_initial_date(dates::leap_day_2024());
    let (nav, _) = recording_nav(config);
    assert_eq!(nav.date(), dates::leap_day_2024());
    assert_eq!(nav.button_states().focused_day(), Some(29));
}
