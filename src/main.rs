mod cli;
use cli::{CliMode, USAGE, parse_cli_mode, run_agenda_mode};
mod tui;
use tui::{run_tui, sample_events::add_sample_entries};

use calshell::{app::AppState, navigation::ViewMode, storage::config::Config};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli_mode = match parse_cli_mode() {
        Ok(mode) => mode,
        Err(err) => {
            eprintln!("Error: {}", err);
            eprintln!("{}", USAGE);
            std::process::exit(2);
        }
    };

    if cli_mode == CliMode::Help {
        println!("{}", USAGE);
        return Ok(());
    }

    setup_logging();

    let config = match Config::load_or_create() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Using default config: {}", e);
            eprintln!("Warning: {} (using defaults)", e);
            Config::default()
        }
    };

    match cli_mode {
        CliMode::Agenda { date, sample, view, json } => {
            let mut app = build_app(&config, sample, view);
            run_agenda_mode(&mut app, date, json)
        }
        CliMode::Default { sample, view } => {
            let app = build_app(&config, sample, view);
            run_tui(app)?;
            tracing::info!("calshell exited");
            Ok(())
        }
        CliMode::Help => Ok(()),
    }
}

fn build_app(config: &Config, sample: bool, view: Option<ViewMode>) -> AppState {
    let mut app = AppState::from_config(config);
    if let Some(view) = view {
        app.set_view_mode(view);
    }
    if sample {
        add_sample_entries(&mut app);
    }
    app
}

fn setup_logging() {
    let log_dir = Config::config_dir();

    std::fs::create_dir_all(&log_dir).ok();

    let file_appender = tracing_appender::rolling::daily(log_dir, "calshell.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(false)
        .init();

    std::mem::forget(_guard);

    tracing::info!("calshell started");
}
