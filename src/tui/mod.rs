mod session;
mod presentation;
mod sidebar;
pub mod sample_events;
mod calendar_views;
mod dialogs;

pub use session::run_tui;
