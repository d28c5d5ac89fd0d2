use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use calshell::app::{AppState, Mode};
use calshell::navigation::ViewMode;
use crate::tui::{calendar_views, dialogs, sidebar};

pub fn ui(f: &mut Frame, app: &AppState) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.size());

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(26),
            Constraint::Min(0),
            Constraint::Length(38),
        ])
        .split(main_chunks[1]);

    let title_text = format!("{}  |  {} view  |  {:?}", app.title(), app.view.mode.label(), app.mode);

    let title = Paragraph::new(title_text)
        .style(Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" calshell "));
    f.render_widget(title, main_chunks[0]);

    sidebar::render(f, app, content_chunks[0]);

    match app.view.mode {
        ViewMode::Month => calendar_views::month::render(f, app, content_chunks[1]),
        ViewMode::Week => calendar_views::week::render(f, app, content_chunks[1]),
        ViewMode::Day => calendar_views::day::render(f, app, content_chunks[1]),
    }

    calendar_views::agenda_list::render(f, app, content_chunks[2]);

    let in_command = matches!(app.mode, Mode::Command);
    let status_text = if in_command {
        app.command_buffer.to_string()
    } else if let Some(message) = &app.status_message {
        message.clone()
    } else {
        format!("Events: {} | Tasks: {} | Press 'q' to quit, '?' for help",
            app.store.events().len(), app.store.tasks().len())
    };

    let status_color = if in_command {
        app.theme.command_mode
    } else {
        app.theme.status_bar
    };

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(status_color))
        .alignment(if in_command { Alignment::Left } else { Alignment::Center })
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(status, main_chunks[2]);

    if app.mode == Mode::Chooser {
        dialogs::type_chooser::render(f, app);
    }

    if app.event_form.is_some() {
        dialogs::event_form::render(f, app);
    }

    if app.task_form.is_some() {
        dialogs::task_form::render(f, app);
    }

    if app.pending_delete.is_some() {
        dialogs::delete_confirmation::render(f, app);
    }

    if app.show_help {
        dialogs::help::render(f, app);
    }
}
