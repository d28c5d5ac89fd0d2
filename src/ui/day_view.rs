use chrono::{NaiveDate, Timelike};
use crate::app::AppState;
use crate::ui::agenda::EntryBlock;

#[derive(Debug, Clone, PartialEq)]
pub struct DayLayout {
    pub date: NaiveDate,
    pub is_today: bool,
    pub all_day: Vec<EntryBlock>,
    pub hours: Vec<HourBlock>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HourBlock {
    pub hour: u32,
    pub entries: Vec<EntryBlock>,
}

pub fn calculate_layout(state: &AppState) -> DayLayout {
    let date = state.anchor();
    let items = state.agenda_for(date);

    let mut all_day = Vec::new();
    let mut hours: Vec<HourBlock> = (0..24)
        .map(|hour| HourBlock { hour, entries: Vec::new() })
        .collect();

    for item in &items {
        let block = EntryBlock::from_item(item, date, &state.store);
        match item.time_on(date) {
            Some(time) => hours[time.hour() as usize].entries.push(block),
            None => all_day.push(block),
        }
    }

    DayLayout {
        date,
        is_today: date == state.today(),
        all_day,
        hours,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{EventDraft, TaskDraft, TaskStatus};
    use crate::navigation::{FixedClock, Navigation};

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn app_on(day: NaiveDate) -> AppState {
        AppState::new().with_clock(Box::new(FixedClock(day)))
    }

    fn add_event(state: &mut AppState, title: &str, day: NaiveDate, hour: u32, minute: u32, minutes: i64) {
        let calendar_id = state.store.default_calendar_id().unwrap().to_string();
        let start = day.and_hms_opt(hour, minute, 0).unwrap();
        state.store.add_event(EventDraft {
            title: title.to_string(),
            start,
            end: start + chrono::Duration::minutes(minutes),
            all_day: false,
            calendar_id,
        });
    }

    #[test]
    fn day_layout_has_24_hours_in_order() {
        let state = app_on(date(2025, 1, 15));

        let layout = calculate_layout(&state);

        assert_eq!(layout.date, date(2025, 1, 15));
        assert_eq!(layout.hours.len(), 24);
        for (i, hour_block) in layout.hours.iter().enumerate() {
            assert_eq!(hour_block.hour, i as u32);
        }
    }

    #[test]
    fn events_are_placed_in_correct_hour() {
        let mut state = app_on(date(2025, 1, 15));
        add_event(&mut state, "Morning Meeting", date(2025, 1, 15), 9, 30, 60);

        let layout = calculate_layout(&state);

        let hour_9 = &layout.hours[9];
        assert_eq!(hour_9.entries.len(), 1);
        assert_eq!(hour_9.entries[0].title, "Morning Meeting");
        assert_eq!(hour_9.entries[0].time_label, "09:30-10:30");
        assert!(hour_9.entries[0].color.is_some());
    }

    #[test]
    fn multiple_entries_in_same_hour() {
        let mut state = app_on(date(2025, 1, 15));
        add_event(&mut state, "Meeting A", date(2025, 1, 15), 10, 0, 30);
        add_event(&mut state, "Meeting B", date(2025, 1, 15), 10, 30, 30);

        let layout = calculate_layout(&state);

        assert_eq!(layout.hours[10].entries.len(), 2);
        assert!(layout.hours[0].entries.is_empty());
    }

    #[test]
    fn all_day_tasks_go_to_the_all_day_row() {
        let mut state = app_on(date(2025, 1, 15));
        state.store.add_task(TaskDraft {
            title: "Renew passport".to_string(),
            date: date(2025, 1, 15).and_hms_opt(0, 0, 0).unwrap(),
            all_day: true,
            status: TaskStatus::Pending,
        });

        let layout = calculate_layout(&state);

        assert_eq!(layout.all_day.len(), 1);
        assert_eq!(layout.all_day[0].title, "Renew passport");
        assert!(layout.hours.iter().all(|h| h.entries.is_empty()));
    }

    #[test]
    fn is_today_follows_the_clock() {
        let mut state = app_on(date(2025, 1, 15));
        assert!(calculate_layout(&state).is_today);

        state.set_view_mode(crate::navigation::ViewMode::Day);
        state.navigate(Navigation::Next);

        assert!(!calculate_layout(&state).is_today);
    }
}
