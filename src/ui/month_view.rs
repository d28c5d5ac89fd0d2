use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::app::AppState;
use crate::create_flow::EntityKind;
use crate::navigation::{first_of_month, last_of_month, week_start_of};

#[derive(Debug, Clone, PartialEq)]
pub struct MonthLayout {
    pub year: i32,
    pub month: u32,
    pub weekdays: Vec<Weekday>,
    pub weeks: Vec<Week>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Week {
    pub days: Vec<DayCell>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub is_selected: bool,
    pub is_today: bool,
    pub is_current_month: bool,
    pub event_count: usize,
    pub task_count: usize,
}

impl DayCell {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            is_selected: false,
            is_today: false,
            is_current_month: true,
            event_count: 0,
            task_count: 0,
        }
    }

    pub fn with_selected(mut self, selected: bool) -> Self {
        self.is_selected = selected;
        self
    }

    pub fn with_today(mut self, today: bool) -> Self {
        self.is_today = today;
        self
    }

    pub fn with_current_month(mut self, current_month: bool) -> Self {
        self.is_current_month = current_month;
        self
    }

    pub fn with_counts(mut self, events: usize, tasks: usize) -> Self {
        self.event_count = events;
        self.task_count = tasks;
        self
    }

    pub fn has_entries(&self) -> bool {
        self.event_count + self.task_count > 0
    }
}

/// Grid of whole weeks covering the anchor's month, padded with days from
/// the neighbouring months.
pub fn calculate_layout(state: &AppState) -> MonthLayout {
    let anchor = state.anchor();
    let today = state.today();
    let first = first_of_month(anchor);
    let last = last_of_month(anchor);
    let grid_start = week_start_of(first, state.week_start);

    let weekdays = (0..7u64)
        .filter_map(|offset| grid_start.checked_add_days(Days::new(offset)))
        .map(|d| d.weekday())
        .collect();

    let mut weeks = Vec::new();
    let mut current = grid_start;
    'grid: while current <= last {
        let mut days = Vec::with_capacity(7);
        for _ in 0..7 {
            let items = state.agenda_for(current);
            let tasks = items.iter().filter(|i| i.kind() == EntityKind::Task).count();
            days.push(
                DayCell::new(current)
                    .with_selected(current == anchor)
                    .with_today(current == today)
                    .with_current_month(current.month() == anchor.month() && current.year() == anchor.year())
                    .with_counts(items.len() - tasks, tasks),
            );
            let Some(next) = current.succ_opt() else {
                weeks.push(Week { days });
                break 'grid;
            };
            current = next;
        }
        weeks.push(Week { days });
    }

    MonthLayout {
        year: anchor.year(),
        month: anchor.month(),
        weekdays,
        weeks,
    }
}
