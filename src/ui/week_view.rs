use chrono::{Days, NaiveDate, Timelike};
use crate::app::AppState;
use crate::navigation::week_start_of;
use crate::ui::agenda::EntryBlock;

#[derive(Debug, Clone, PartialEq)]
pub struct WeekLayout {
    pub week_start: NaiveDate,
    pub days: Vec<DayColumn>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayColumn {
    pub date: NaiveDate,
    pub is_selected: bool,
    pub is_today: bool,
    pub all_day: Vec<EntryBlock>,
    pub slots: Vec<TimeSlot>,
}

/// Hour with at least one timed entry. Empty hours are left out.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSlot {
    pub hour: u32,
    pub entries: Vec<EntryBlock>,
}

pub fn calculate_layout(state: &AppState) -> WeekLayout {
    let anchor = state.anchor();
    let week_start = week_start_of(anchor, state.week_start);
    let today = state.today();

    let mut days = Vec::new();

    for day_offset in 0..7u64 {
        let Some(date) = week_start.checked_add_days(Days::new(day_offset)) else {
            continue;
        };
        let (all_day, slots) = build_column(state, date);

        days.push(DayColumn {
            date,
            is_selected: date == anchor,
            is_today: date == today,
            all_day,
            slots,
        });
    }

    WeekLayout { week_start, days }
}

fn build_column(state: &AppState, date: NaiveDate) -> (Vec<EntryBlock>, Vec<TimeSlot>) {
    let mut all_day = Vec::new();
    let mut slots: Vec<TimeSlot> = Vec::new();

    // Agenda items arrive sorted by start time.
    for item in state.agenda_for(date) {
        let block = EntryBlock::from_item(&item, date, &state.store);
        let Some(time) = item.time_on(date) else {
            all_day.push(block);
            continue;
        };
        let hour = time.hour();
        match slots.last_mut() {
            Some(slot) if slot.hour == hour => slot.entries.push(block),
            _ => slots.push(TimeSlot { hour, entries: vec![block] }),
        }
    }

    (all_day, slots)
}
