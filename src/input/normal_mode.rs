use chrono::Days;
use crossterm::event::KeyCode;

use crate::app::{AppState, Mode};
use crate::navigation::{Navigation, ViewMode};

pub fn handle_key(key: KeyCode, state: &mut AppState) {
    match key {
        KeyCode::Char('[') => state.navigate(Navigation::Prev),
        KeyCode::Char(']') => state.navigate(Navigation::Next),
        KeyCode::Char('t') => state.navigate(Navigation::Today),
        KeyCode::Char('h') => move_by_days(state, -1),
        KeyCode::Char('l') => move_by_days(state, 1),
        KeyCode::Char('j') => move_by_days(state, 7),
        KeyCode::Char('k') => move_by_days(state, -7),
        KeyCode::Char('d') => state.set_view_mode(ViewMode::Day),
        KeyCode::Char('w') => state.set_view_mode(ViewMode::Week),
        KeyCode::Char('m') => state.set_view_mode(ViewMode::Month),
        KeyCode::Char('a') => begin_create(state, false),
        KeyCode::Char('A') => begin_create(state, true),
        KeyCode::Char('v') => enter_visual_mode(state),
        KeyCode::Tab => state.cycle_selection(),
        KeyCode::Down => state.move_selection_down(),
        KeyCode::Up => state.move_selection_up(),
        KeyCode::Enter | KeyCode::Char('e') => edit_selected(state),
        KeyCode::Char('x') => state.request_delete_selected(),
        KeyCode::Char(' ') => state.toggle_selected_task(),
        KeyCode::Char('T') => toggle_tasks(state),
        KeyCode::Char(c @ '1'..='9') => toggle_calendar(state, c),
        KeyCode::Char(':') => enter_command_mode(state),
        KeyCode::Char('?') => show_help(state),
        _ => {}
    }
}

fn move_by_days(state: &mut AppState, days: i64) {
    let anchor = state.anchor();
    let target = if days < 0 {
        anchor.checked_sub_days(Days::new(days.unsigned_abs()))
    } else {
        anchor.checked_add_days(Days::new(days as u64))
    };
    if let Some(date) = target {
        state.navigate(Navigation::Goto(date));
    }
}

fn begin_create(state: &mut AppState, all_day: bool) {
    let gesture = state.gesture_at_anchor(all_day);
    if let Err(e) = state.begin_create(gesture) {
        state.set_status(e.to_string());
    }
}

fn enter_visual_mode(state: &mut AppState) {
    state.visual_selection_start = Some(state.anchor());
    state.mode = Mode::Visual;
}

fn edit_selected(state: &mut AppState) {
    if let Err(e) = state.edit_selected() {
        state.set_status(e.to_string());
    }
}

fn toggle_tasks(state: &mut AppState) {
    state.toggle_tasks();
    let message = if state.show_tasks { "Tasks shown" } else { "Tasks hidden" };
    state.set_status(message);
}

fn toggle_calendar(state: &mut AppState, digit: char) {
    let Some(index) = digit.to_digit(10).map(|d| d as usize - 1) else {
        return;
    };
    if state.toggle_calendar_at(index)
        && let Some(calendar) = state.store.calendars().get(index)
    {
        let label = if calendar.visible { "shown" } else { "hidden" };
        let message = format!("{} {}", calendar.name, label);
        state.set_status(message);
    }
}

fn enter_command_mode(state: &mut AppState) {
    state.mode = Mode::Command;
    state.command_buffer = ":".to_string();
}

fn show_help(state: &mut AppState) {
    state.show_help = true;
    state.help_scroll = 0;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use crate::create_flow::EntityKind;
    use crate::navigation::FixedClock;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn app_on(day: NaiveDate) -> AppState {
        AppState::new().with_clock(Box::new(FixedClock(day)))
    }

    #[test]
    fn h_key_moves_to_previous_day() {
        let mut state = app_on(date(2025, 1, 15));

        handle_key(KeyCode::Char('h'), &mut state);

        assert_eq!(state.anchor(), date(2025, 1, 14));
    }

    #[test]
    fn l_key_moves_to_next_day() {
        let mut state = app_on(date(2025, 1, 15));

        handle_key(KeyCode::Char('l'), &mut state);

        assert_eq!(state.anchor(), date(2025, 1, 16));
    }

    #[test]
    fn j_and_k_move_by_a_week() {
        let mut state = app_on(date(2025, 1, 15));

        handle_key(KeyCode::Char('j'), &mut state);
        assert_eq!(state.anchor(), date(2025, 1, 22));

        handle_key(KeyCode::Char('k'), &mut state);
        handle_key(KeyCode::Char('k'), &mut state);
        assert_eq!(state.anchor(), date(2025, 1, 8));
    }

    #[test]
    fn brackets_step_by_view_granularity() {
        let mut state = app_on(date(2024, 1, 31));
        state.set_view_mode(ViewMode::Month);

        handle_key(KeyCode::Char(']'), &mut state);

        assert_eq!(state.anchor(), date(2024, 2, 29));

        handle_key(KeyCode::Char('['), &mut state);

        assert_eq!(state.anchor(), date(2024, 1, 29));
    }

    #[test]
    fn t_key_jumps_to_today() {
        let mut state = app_on(date(2025, 1, 15));
        handle_key(KeyCode::Char(']'), &mut state);

        handle_key(KeyCode::Char('t'), &mut state);

        assert_eq!(state.anchor(), date(2025, 1, 15));
    }

    #[test]
    fn view_keys_switch_view() {
        let mut state = app_on(date(2025, 1, 15));

        handle_key(KeyCode::Char('m'), &mut state);
        assert_eq!(state.view.mode, ViewMode::Month);

        handle_key(KeyCode::Char('d'), &mut state);
        assert_eq!(state.view.mode, ViewMode::Day);

        handle_key(KeyCode::Char('w'), &mut state);
        assert_eq!(state.view.mode, ViewMode::Week);
    }

    #[test]
    fn a_key_opens_type_chooser() {
        let mut state = app_on(date(2025, 1, 15));

        handle_key(KeyCode::Char('a'), &mut state);

        assert_eq!(state.mode, Mode::Chooser);
        assert_eq!(state.flow.highlighted(), Some(EntityKind::Event));
    }

    #[test]
    fn a_key_while_editing_reports_error() {
        let mut state = app_on(date(2025, 1, 15));
        state.begin_create_as(EntityKind::Task, state.gesture_at_anchor(true), None).unwrap();

        handle_key(KeyCode::Char('a'), &mut state);

        assert!(state.status_message.is_some());
        assert!(state.task_form.is_some());
    }

    #[test]
    fn v_key_enters_visual_mode() {
        let mut state = app_on(date(2025, 1, 15));

        handle_key(KeyCode::Char('v'), &mut state);

        assert_eq!(state.mode, Mode::Visual);
        assert_eq!(state.visual_selection_start, Some(date(2025, 1, 15)));
    }

    #[test]
    fn colon_enters_command_mode() {
        let mut state = app_on(date(2025, 1, 15));

        handle_key(KeyCode::Char(':'), &mut state);

        assert_eq!(state.mode, Mode::Command);
        assert_eq!(state.command_buffer, ":");
    }

    #[test]
    fn question_mark_opens_help() {
        let mut state = app_on(date(2025, 1, 15));

        handle_key(KeyCode::Char('?'), &mut state);

        assert!(state.show_help);
    }

    #[test]
    fn capital_t_toggles_task_visibility() {
        let mut state = app_on(date(2025, 1, 15));

        handle_key(KeyCode::Char('T'), &mut state);

        assert!(!state.show_tasks);
        assert_eq!(state.status_message.as_deref(), Some("Tasks hidden"));
    }

    #[test]
    fn digit_toggles_calendar_visibility() {
        let mut state = app_on(date(2025, 1, 15));

        handle_key(KeyCode::Char('1'), &mut state);

        assert!(!state.store.calendars()[0].visible);
        assert_eq!(state.status_message.as_deref(), Some("Personal hidden"));

        handle_key(KeyCode::Char('9'), &mut state);
        assert_eq!(state.status_message.as_deref(), Some("Personal hidden"));
    }

    #[test]
    fn x_key_asks_for_confirmation() {
        let mut state = app_on(date(2025, 1, 15));
        state.begin_create_as(EntityKind::Task, state.gesture_at_anchor(true), None).unwrap();
        state.submit_form().unwrap();

        handle_key(KeyCode::Char('x'), &mut state);

        assert_eq!(state.mode, Mode::Confirm);
        assert!(state.pending_delete.is_some());
    }

    #[test]
    fn x_key_without_selection_does_nothing() {
        let mut state = app_on(date(2025, 1, 15));

        handle_key(KeyCode::Char('x'), &mut state);

        assert_eq!(state.mode, Mode::Normal);
    }

    #[test]
    fn space_toggles_selected_task() {
        let mut state = app_on(date(2025, 1, 15));
        state.begin_create_as(EntityKind::Task, state.gesture_at_anchor(true), None).unwrap();
        state.submit_form().unwrap();

        handle_key(KeyCode::Char(' '), &mut state);

        assert!(state.store.tasks()[0].is_done());
    }

    #[test]
    fn enter_opens_editor_for_selection() {
        let mut state = app_on(date(2025, 1, 15));
        state.begin_create_as(EntityKind::Event, state.gesture_at_anchor(false), Some("Review".to_string()))
            .unwrap();
        state.submit_form().unwrap();

        handle_key(KeyCode::Enter, &mut state);

        assert_eq!(state.mode, Mode::Form);
        assert_eq!(state.event_form.as_ref().unwrap().title, "Review");
    }
}
