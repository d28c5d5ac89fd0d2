use crossterm::event::KeyCode;

use crate::app::AppState;

pub fn handle_key(key: KeyCode, state: &mut AppState) {
    match key {
        KeyCode::Char('y') | KeyCode::Char('Y') => {
            if let Err(e) = state.confirm_delete() {
                tracing::error!("Delete failed: {}", e);
                state.set_status(e.to_string());
            }
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => state.cancel_delete(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use crate::app::Mode;
    use crate::create_flow::EntityKind;
    use crate::navigation::FixedClock;

    fn app_confirming_delete() -> AppState {
        let day = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let mut state = AppState::new().with_clock(Box::new(FixedClock(day)));
        state.begin_create_as(EntityKind::Event, state.gesture_at_anchor(false), None).unwrap();
        state.submit_form().unwrap();
        state.request_delete_selected();
        state
    }

    #[test]
    fn y_confirms_delete() {
        let mut state = app_confirming_delete();

        handle_key(KeyCode::Char('y'), &mut state);

        assert!(state.store.events().is_empty());
        assert_eq!(state.mode, Mode::Normal);
        assert_eq!(state.status_message.as_deref(), Some("Deleted event"));
    }

    #[test]
    fn n_keeps_entity() {
        let mut state = app_confirming_delete();

        handle_key(KeyCode::Char('n'), &mut state);

        assert_eq!(state.store.events().len(), 1);
        assert!(state.pending_delete.is_none());
    }

    #[test]
    fn other_keys_leave_prompt_open() {
        let mut state = app_confirming_delete();

        handle_key(KeyCode::Char('q'), &mut state);

        assert_eq!(state.mode, Mode::Confirm);
    }
}
