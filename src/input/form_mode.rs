use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::AppState;
use crate::form::{EventField, FormFields};

pub fn handle_key(key: KeyEvent, state: &mut AppState) {
    match key.code {
        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => delete(state),
        KeyCode::Esc => state.cancel_flow(),
        KeyCode::Enter => submit(state),
        KeyCode::Tab => {
            if let Some(form) = active_form(state) {
                form.next_field();
            }
        }
        KeyCode::BackTab => {
            if let Some(form) = active_form(state) {
                form.prev_field();
            }
        }
        KeyCode::Backspace => {
            if let Some(text) = active_form(state).and_then(|form| form.active_text_mut()) {
                text.pop();
            }
        }
        KeyCode::Char(' ') => toggle_or_type(state),
        KeyCode::Char(c) => {
            if let Some(text) = active_form(state).and_then(|form| form.active_text_mut()) {
                text.push(c);
            }
        }
        _ => {}
    }
}

fn active_form(state: &mut AppState) -> Option<&mut dyn FormFields> {
    match (state.event_form.as_mut(), state.task_form.as_mut()) {
        (Some(form), _) => Some(form as &mut dyn FormFields),
        (None, Some(form)) => Some(form as &mut dyn FormFields),
        (None, None) => None,
    }
}

fn toggle_or_type(state: &mut AppState) {
    let calendar_count = state.store.calendars().len();
    if let Some(form) = state.event_form.as_mut()
        && form.active_field == EventField::Calendar
    {
        form.cycle_calendar(calendar_count);
        return;
    }
    let Some(form) = active_form(state) else {
        return;
    };
    match form.active_text_mut() {
        Some(text) => text.push(' '),
        None => form.toggle_active(),
    }
}

fn submit(state: &mut AppState) {
    if let Err(e) = state.submit_form() {
        tracing::debug!("Form not saved: {}", e);
        state.set_status(e.to_string());
    }
}

fn delete(state: &mut AppState) {
    let editing = active_form(state).is_some_and(|form| form.is_editing());
    if !editing {
        return;
    }
    if let Err(e) = state.delete_from_form() {
        state.set_status(e.to_string());
    }
}
