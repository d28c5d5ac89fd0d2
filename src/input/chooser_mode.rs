use crossterm::event::KeyCode;

use crate::app::AppState;
use crate::create_flow::EntityKind;

/// Keys for the "event or task?" dialog.
pub fn handle_key(key: KeyCode, state: &mut AppState) {
    let choice = match key {
        KeyCode::Char('e') => Some(EntityKind::Event),
        KeyCode::Char('t') => Some(EntityKind::Task),
        KeyCode::Enter => state.flow.highlighted(),
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Left | KeyCode::Right | KeyCode::Char('h') | KeyCode::Char('l') => {
            state.flow.toggle_highlight();
            None
        }
        KeyCode::Esc => {
            state.cancel_flow();
            None
        }
        _ => None,
    };
    if let Some(kind) = choice
        && let Err(e) = state.choose(kind)
    {
        state.set_status(e.to_string());
    }
}
