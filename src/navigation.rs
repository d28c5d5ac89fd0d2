use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, Local, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Day,
    #[default]
    Week,
    Month,
}

impl ViewMode {
    pub fn label(self) -> &'static str {
        match self {
            ViewMode::Day => "Day",
            ViewMode::Week => "Week",
            ViewMode::Month => "Month",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "day" | "d" => Ok(ViewMode::Day),
            "week" | "w" => Ok(ViewMode::Week),
            "month" | "m" => Ok(ViewMode::Month),
            _ => Err(format!("Unknown view '{}'. Use day, week or month.", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Prev,
    Next,
    Today,
    Goto(NaiveDate),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    pub mode: ViewMode,
    pub anchor: NaiveDate,
}

impl ViewState {
    pub fn new(mode: ViewMode, anchor: NaiveDate) -> Self {
        Self { mode, anchor }
    }
}

/// Source of "today" for the navigator.
#[cfg_attr(test, mockall::automock)]
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to one date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Shifts `anchor` by one unit of `mode`.
///
/// Months step by calendar month and clamp to the last day of a shorter
/// target month (Jan 31 -> Feb 29 in 2024). At the edges of chrono's date
/// range the anchor is returned unchanged.
pub fn step(mode: ViewMode, anchor: NaiveDate, direction: Direction) -> NaiveDate {
    let shifted = match (mode, direction) {
        (ViewMode::Day, Direction::Prev) => anchor.checked_sub_days(Days::new(1)),
        (ViewMode::Day, Direction::Next) => anchor.checked_add_days(Days::new(1)),
        (ViewMode::Week, Direction::Prev) => anchor.checked_sub_days(Days::new(7)),
        (ViewMode::Week, Direction::Next) => anchor.checked_add_days(Days::new(7)),
        (ViewMode::Month, Direction::Prev) => anchor.checked_sub_months(Months::new(1)),
        (ViewMode::Month, Direction::Next) => anchor.checked_add_months(Months::new(1)),
    };
    shifted.unwrap_or(anchor)
}

pub fn week_start_of(date: NaiveDate, first_day: Weekday) -> NaiveDate {
    let offset = (7 + date.weekday().num_days_from_monday() - first_day.num_days_from_monday()) % 7;
    let offset = u64::from(offset);
    date.checked_sub_days(Days::new(offset)).unwrap_or(date)
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

pub fn last_of_month(date: NaiveDate) -> NaiveDate {
    first_of_month(date)
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(date)
}

/// Inclusive first and last day shown for `mode` around `anchor`.
pub fn visible_range(mode: ViewMode, anchor: NaiveDate, first_day: Weekday) -> (NaiveDate, NaiveDate) {
    match mode {
        ViewMode::Day => (anchor, anchor),
        ViewMode::Week => {
            let start = week_start_of(anchor, first_day);
            let end = start.checked_add_days(Days::new(6)).unwrap_or(start);
            (start, end)
        }
        ViewMode::Month => (first_of_month(anchor), last_of_month(anchor)),
    }
}

pub struct NavigationController {
    clock: Box<dyn Clock>,
}

impl NavigationController {
    pub fn new(clock: Box<dyn Clock>) -> Self {
        Self { clock }
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn navigate(&self, state: &mut ViewState, navigation: Navigation) {
        let target = match navigation {
            Navigation::Prev => step(state.mode, state.anchor, Direction::Prev),
            Navigation::Next => step(state.mode, state.anchor, Direction::Next),
            Navigation::Today => self.today(),
            Navigation::Goto(date) => date,
        };
        tracing::debug!("Anchor {} -> {} ({:?}, {})", state.anchor, target, navigation, state.mode);
        state.anchor = target;
    }
}

impl Default for NavigationController {
    fn default() -> Self {
        Self::new(Box::new(SystemClock))
    }
}

impl fmt::Debug for NavigationController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigationController").finish_non_exhaustive()
    }
}
