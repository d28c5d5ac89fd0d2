use calshell::{
    app::AppState,
    input::normal_mode,
    navigation::{FixedClock, Navigation, ViewMode},
    ui::range_title::range_title,
};
use chrono::{NaiveDate, Weekday};
use crossterm::event::KeyCode;
use proptest::prelude::*;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn app_on(day: NaiveDate) -> AppState {
    AppState::new().with_clock(Box::new(FixedClock(day)))
}

#[test]
fn month_next_from_jan_31_lands_on_leap_day() {
    let mut app = app_on(date(2024, 1, 31));
    app.set_view_mode(ViewMode::Month);

    app.navigate(Navigation::Next);

    assert_eq!(app.anchor(), date(2024, 2, 29));
    assert_eq!(app.title(), "February 2024");
}

#[test]
fn month_round_trip_only_holds_up_to_clamping() {
    let mut app = app_on(date(2024, 1, 31));
    app.set_view_mode(ViewMode::Month);

    app.navigate(Navigation::Next);
    app.navigate(Navigation::Next);

    assert_eq!(app.anchor(), date(2024, 3, 29));
}

#[test]
fn today_key_returns_to_clock_date_from_anywhere() {
    let mut app = app_on(date(2024, 6, 10));
    app.navigate(Navigation::Goto(date(1999, 12, 31)));
    app.set_view_mode(ViewMode::Month);

    normal_mode::handle_key(KeyCode::Char('t'), &mut app);

    assert_eq!(app.anchor(), date(2024, 6, 10));
}

#[test]
fn titles_for_each_view() {
    let mut app = app_on(date(2024, 6, 10));

    app.set_view_mode(ViewMode::Day);
    assert_eq!(app.title(), "Monday, June 10, 2024");

    app.set_view_mode(ViewMode::Week);
    assert_eq!(app.title(), "June 9 - 15, 2024");

    app.week_start = Weekday::Mon;
    assert_eq!(app.title(), "June 10 - 16, 2024");

    app.set_view_mode(ViewMode::Month);
    assert_eq!(app.title(), "June 2024");
}

#[test]
fn week_title_across_year_boundary() {
    assert_eq!(range_title(ViewMode::Week, date(2025, 1, 1)), "Dec 29, 2024 - Jan 4, 2025");
}

fn any_date() -> impl Strategy<Value = NaiveDate> {
    (1900i32..2200, 1u32..=12, 1u32..=28).prop_map(|(y, m, d)| date(y, m, d))
}

proptest! {
    #[test]
    fn bracket_keys_invert_for_day_and_week(anchor in any_date()) {
        for (mode, key) in [(ViewMode::Day, 'd'), (ViewMode::Week, 'w')] {
            let mut app = app_on(anchor);
            normal_mode::handle_key(KeyCode::Char(key), &mut app);
            prop_assert_eq!(app.view.mode, mode);

            normal_mode::handle_key(KeyCode::Char('['), &mut app);
            normal_mode::handle_key(KeyCode::Char(']'), &mut app);

            prop_assert_eq!(app.anchor(), anchor);
        }
    }

    #[test]
    fn month_title_ignores_day_of_month(anchor in any_date(), day in 1u32..=28) {
        let other = NaiveDate::from_ymd_opt(
            chrono::Datelike::year(&anchor),
            chrono::Datelike::month(&anchor),
            day,
        ).unwrap();
        prop_assert_eq!(range_title(ViewMode::Month, anchor), range_title(ViewMode::Month, other));
    }
}
