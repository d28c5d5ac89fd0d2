use chrono::{Datelike, NaiveDate, Weekday};

use crate::navigation::{ViewMode, visible_range};

pub const DEFAULT_WEEK_START: Weekday = Weekday::Sun;

/// Title for the window shown by `mode` around `anchor`, weeks starting on
/// Sunday.
pub fn range_title(mode: ViewMode, anchor: NaiveDate) -> String {
    range_title_with(mode, anchor, DEFAULT_WEEK_START)
}

pub fn range_title_with(mode: ViewMode, anchor: NaiveDate, week_start: Weekday) -> String {
    match mode {
        ViewMode::Day => anchor.format("%A, %B %-d, %Y").to_string(),
        ViewMode::Week => {
            let (first, last) = visible_range(ViewMode::Week, anchor, week_start);
            week_title(first, last)
        }
        ViewMode::Month => anchor.format("%B %Y").to_string(),
    }
}

fn week_title(first: NaiveDate, last: NaiveDate) -> String {
    if first.year() != last.year() {
        format!("{} - {}", first.format("%b %-d, %Y"), last.format("%b %-d, %Y"))
    } else if first.month() != last.month() {
        format!("{} - {}, {}", first.format("%b %-d"), last.format("%b %-d"), last.year())
    } else {
        format!("{} {} - {}, {}", first.format("%B"), first.day(), last.day(), last.year())
    }
}
