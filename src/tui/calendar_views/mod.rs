pub mod agenda_list;
pub mod day;
pub mod month;
pub mod week;

use ratatui::style::Style;
use calshell::{app::AppState, ui::{agenda::EntryBlock, theme::calendar_color}};

/// Colour for an entry: its calendar's colour for events, the theme's task
/// colours for tasks.
pub fn entry_style(app: &AppState, entry: &EntryBlock) -> Style {
    if entry.done {
        Style::default().fg(app.theme.task_done)
    } else if entry.color.is_some() {
        Style::default().fg(calendar_color(entry.color))
    } else {
        Style::default().fg(app.theme.task)
    }
}

pub fn entry_marker(entry: &EntryBlock) -> &'static str {
    match (entry.kind, entry.done) {
        (calshell::EntityKind::Event, _) => "•",
        (calshell::EntityKind::Task, false) => "☐",
        (calshell::EntityKind::Task, true) => "☑",
    }
}
