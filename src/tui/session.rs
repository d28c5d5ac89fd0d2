use std::io;
use crossterm::{
    event::{self, Event as TermEvent, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    Terminal,
};
use calshell::{
    app::{AppState, Mode},
    input::{chooser_mode, command_mode, confirm_mode, form_mode, normal_mode, visual_mode},
};
use crate::tui::presentation::ui;

pub fn run_tui(mut app: AppState) -> Result<(), io::Error> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    tracing::info!("Starting TUI on {} ({} view)", app.anchor(), app.view.mode);

    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        tracing::error!("TUI loop failed: {}", err);
    }
    res
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppState,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let TermEvent::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            match app.mode {
                Mode::Normal => {
                    if app.show_help {
                        handle_help_keys(key.code, app);
                    } else {
                        match key.code {
                            KeyCode::Char('q') => return Ok(()),
                            _ => {
                                app.status_message = None;
                                normal_mode::handle_key(key.code, app);
                            }
                        }
                    }
                }
                Mode::Command => {
                    if command_mode::handle_key(key.code, app) == command_mode::CommandResult::Quit {
                        return Ok(());
                    }
                }
                Mode::Visual => visual_mode::handle_key(key.code, app),
                Mode::Chooser => chooser_mode::handle_key(key.code, app),
                Mode::Form => form_mode::handle_key(key, app),
                Mode::Confirm => confirm_mode::handle_key(key.code, app),
            }
        }
    }
}

fn handle_help_keys(code: KeyCode, app: &mut AppState) {
    match code {
        KeyCode::Char('j') | KeyCode::Down => {
            app.help_scroll = app.help_scroll.saturating_add(1);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.help_scroll = app.help_scroll.saturating_sub(1);
        }
        KeyCode::Char('q') | KeyCode::Char('?') | KeyCode::Esc => {
            app.show_help = false;
            app.help_scroll = 0;
        }
        _ => {}
    }
}
