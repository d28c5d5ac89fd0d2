use chrono::NaiveDate;
use crossterm::event::KeyCode;

use crate::app::{AppState, Mode};
use crate::calendar::{DEFAULT_CALENDAR_COLOR, is_valid_color};
use crate::create_flow::EntityKind;
use crate::navigation::{Navigation, ViewMode};
use crate::ui::theme::Theme;

#[derive(Debug, PartialEq)]
pub enum Command {
    Quit,
    Goto(NaiveDate),
    Today,
    View(ViewMode),
    NewEvent(Option<String>),
    NewTask(Option<String>),
    AddCalendar { name: String, color: Option<String> },
    ToggleCalendar(String),
    Theme(String),
    Help,
    Error(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandResult {
    Continue,
    Quit,
}

pub fn parse_command(input: &str) -> Command {
    let trimmed = input.trim();

    let Some(command_text) = trimmed.strip_prefix(':') else {
        return Command::Error("Commands must start with ':'".to_string());
    };
    let parts: Vec<&str> = command_text.split_whitespace().collect();

    if parts.is_empty() {
        return Command::Error("Empty command".to_string());
    }

    match parts[0] {
        "q" | "quit" => Command::Quit,
        "help" => Command::Help,
        "today" => Command::Today,
        "goto" => {
            if parts.len() < 2 {
                Command::Error("goto requires a date argument".to_string())
            } else if let Ok(date) = NaiveDate::parse_from_str(parts[1], "%Y-%m-%d") {
                Command::Goto(date)
            } else {
                Command::Error(format!("Invalid date format: {}", parts[1]))
            }
        }
        "view" => match parts.get(1).map(|p| p.parse::<ViewMode>()) {
            Some(Ok(mode)) => Command::View(mode),
            Some(Err(e)) => Command::Error(e),
            None => Command::Error("view requires day, week or month".to_string()),
        },
        "new" => Command::NewEvent(title_from(&parts[1..])),
        "task" => Command::NewTask(title_from(&parts[1..])),
        "cal" | "calendar" => parse_calendar_command(&parts[1..]),
        "theme" => {
            if parts.len() < 2 {
                Command::Error("theme requires a theme name".to_string())
            } else {
                Command::Theme(parts[1].to_string())
            }
        }
        _ => Command::Error(format!("Unknown command: {}", parts[0])),
    }
}

fn title_from(words: &[&str]) -> Option<String> {
    if words.is_empty() {
        None
    } else {
        Some(words.join(" "))
    }
}

fn parse_calendar_command(args: &[&str]) -> Command {
    match args {
        ["add", rest @ ..] if !rest.is_empty() => {
            let (name_words, color) = match rest.split_last() {
                Some((last, init)) if last.starts_with('#') && !init.is_empty() => {
                    (init, Some(last.to_string()))
                }
                _ => (rest, None),
            };
            Command::AddCalendar {
                name: name_words.join(" "),
                color,
            }
        }
        ["toggle", rest @ ..] if !rest.is_empty() => Command::ToggleCalendar(rest.join(" ")),
        _ => Command::Error("Usage: cal add <name> [#rrggbb] | cal toggle <name>".to_string()),
    }
}

/// Applies a parsed command. Failures land in the status line.
pub fn execute(command: Command, state: &mut AppState) -> CommandResult {
    match command {
        Command::Quit => return CommandResult::Quit,
        Command::Goto(date) => state.navigate(Navigation::Goto(date)),
        Command::Today => state.navigate(Navigation::Today),
        Command::View(mode) => state.set_view_mode(mode),
        Command::NewEvent(title) => {
            let gesture = state.gesture_at_anchor(false);
            if let Err(e) = state.begin_create_as(EntityKind::Event, gesture, title) {
                state.set_status(e.to_string());
            }
        }
        Command::NewTask(title) => {
            let gesture = state.gesture_at_anchor(true);
            if let Err(e) = state.begin_create_as(EntityKind::Task, gesture, title) {
                state.set_status(e.to_string());
            }
        }
        Command::AddCalendar { name, color } => add_calendar(state, name, color),
        Command::ToggleCalendar(name) => toggle_calendar(state, &name),
        Command::Theme(name) => {
            state.theme = Theme::get_by_name(&name);
            let message = format!("Theme: {}", state.theme.name);
            state.set_status(message);
        }
        Command::Help => {
            state.show_help = !state.show_help;
            state.help_scroll = 0;
        }
        Command::Error(message) => state.set_status(message),
    }
    CommandResult::Continue
}

fn add_calendar(state: &mut AppState, name: String, color: Option<String>) {
    let color = color.unwrap_or_else(|| DEFAULT_CALENDAR_COLOR.to_string());
    if !is_valid_color(&color) {
        state.set_status(format!("Invalid colour '{}'. Use #rrggbb.", color));
        return;
    }
    if state.store.calendar_by_name(&name).is_some() {
        state.set_status(format!("Calendar '{}' already exists", name));
        return;
    }
    state.store.add_calendar(name.clone(), color);
    state.set_status(format!("Added calendar {}", name));
}

fn toggle_calendar(state: &mut AppState, name: &str) {
    let Some(id) = state.store.calendar_by_name(name).map(|c| c.id.clone()) else {
        state.set_status(format!("No calendar named '{}'", name));
        return;
    };
    state.store.toggle_calendar(&id);
    state.reset_selection();
}

/// Edits the command line; Enter runs it.
pub fn handle_key(key: KeyCode, state: &mut AppState) -> CommandResult {
    match key {
        KeyCode::Enter => {
            let command = parse_command(&state.command_buffer);
            state.command_buffer.clear();
            state.mode = Mode::Normal;
            execute(command, state)
        }
        KeyCode::Esc => {
            state.command_buffer.clear();
            state.mode = Mode::Normal;
            CommandResult::Continue
        }
        KeyCode::Backspace => {
            state.command_buffer.pop();
            if state.command_buffer.is_empty() {
                state.mode = Mode::Normal;
            }
            CommandResult::Continue
        }
        KeyCode::Char(c) => {
            state.command_buffer.push(c);
            CommandResult::Continue
        }
        _ => CommandResult::Continue,
    }
}
