pub mod agenda;
pub mod day_view;
pub mod month_view;
pub mod range_title;
pub mod theme;
pub mod week_view;
