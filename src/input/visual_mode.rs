use chrono::Days;
use crossterm::event::KeyCode;

use crate::app::{AppState, Mode};
use crate::create_flow::CreateGesture;
use crate::navigation::Navigation;

pub fn handle_key(key: KeyCode, state: &mut AppState) {
    let anchor = state.anchor();
    match key {
        KeyCode::Char('h') => {
            if let Some(new_date) = anchor.checked_sub_days(Days::new(1)) {
                state.navigate(Navigation::Goto(new_date));
            }
        }
        KeyCode::Char('l') => {
            if let Some(new_date) = anchor.checked_add_days(Days::new(1)) {
                state.navigate(Navigation::Goto(new_date));
            }
        }
        KeyCode::Char('j') => {
            if let Some(new_date) = anchor.checked_add_days(Days::new(7)) {
                state.navigate(Navigation::Goto(new_date));
            }
        }
        KeyCode::Char('k') => {
            if let Some(new_date) = anchor.checked_sub_days(Days::new(7)) {
                state.navigate(Navigation::Goto(new_date));
            }
        }
        KeyCode::Char('a') | KeyCode::Enter => {
            if let Some((start, end)) = state.visual_selection_range() {
                state.visual_selection_start = None;
                state.mode = Mode::Normal;
                if let Err(e) = state.begin_create(CreateGesture::all_day(start, end)) {
                    state.set_status(e.to_string());
                }
            }
        }
        KeyCode::Esc => {
            state.visual_selection_start = None;
            state.mode = Mode::Normal;
        }
        _ => {}
    }
}
