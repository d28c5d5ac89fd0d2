use std::{
    env,
    io::{self, Write},
    process::{Command, Stdio},
};

use chrono::{Days, NaiveDate};
use serde::Serialize;

use calshell::{
    app::AppState,
    navigation::{Navigation, ViewMode},
    ui::agenda::EntryBlock,
};

pub const USAGE: &str = "Usage: calshell [--sample] [--agenda [YYYY/MM/DD]] [--view day|week|month] [--json] [--help]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Default { sample: bool, view: Option<ViewMode> },
    Agenda { date: Option<NaiveDate>, sample: bool, view: Option<ViewMode>, json: bool },
    Help,
}

pub fn parse_cli_mode() -> Result<CliMode, String> {
    parse_args(env::args().skip(1))
}

pub fn parse_args(args: impl IntoIterator<Item = String>) -> Result<CliMode, String> {
    let mut sample = false;
    let mut json = false;
    let mut view = None;
    let mut agenda: Option<Option<NaiveDate>> = None;
    let mut args = args.into_iter().peekable();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--sample" => {
                sample = true;
            }
            "--json" => {
                json = true;
            }
            "--view" => {
                let value = args.next().ok_or("--view requires day, week or month")?;
                view = Some(value.parse::<ViewMode>()?);
            }
            "--agenda" => {
                let target_date = match args.next_if(|next| !next.starts_with("--")) {
                    Some(date_str) => Some(
                        NaiveDate::parse_from_str(&date_str, "%Y/%m/%d")
                            .map_err(|_| format!("Invalid date '{}'. Use YYYY/MM/DD.", date_str))?,
                    ),
                    None => None,
                };
                agenda = Some(target_date);
            }
            "--help" | "-h" => return Ok(CliMode::Help),
            _ => return Err(format!("Unknown argument: {}", arg)),
        }
    }

    match agenda {
        Some(date) => Ok(CliMode::Agenda { date, sample, view, json }),
        None if json => Err("--json only applies to --agenda".to_string()),
        None => Ok(CliMode::Default { sample, view }),
    }
}

#[derive(Debug, Serialize)]
pub struct AgendaReport {
    pub title: String,
    pub view: ViewMode,
    pub first: NaiveDate,
    pub last: NaiveDate,
    pub days: Vec<AgendaDay>,
}

#[derive(Debug, Serialize)]
pub struct AgendaDay {
    pub date: NaiveDate,
    pub entries: Vec<AgendaEntry>,
}

#[derive(Debug, Serialize)]
pub struct AgendaEntry {
    pub kind: &'static str,
    pub id: String,
    pub title: String,
    pub time: String,
    pub calendar: Option<String>,
    pub done: bool,
}

/// Everything in the visible window of `app`, grouped by day.
pub fn build_report(app: &AppState) -> AgendaReport {
    let (first, last) = app.visible_range();
    let mut days = Vec::new();
    let mut current = Some(first);

    while let Some(date) = current.filter(|d| *d <= last) {
        let entries = app
            .agenda_for(date)
            .iter()
            .map(|item| {
                let block = EntryBlock::from_item(item, date, &app.store);
                AgendaEntry {
                    kind: block.kind.label(),
                    id: block.id,
                    title: block.title,
                    time: block.time_label,
                    calendar: app.calendar_for_item(item).map(|c| c.name.clone()),
                    done: block.done,
                }
            })
            .collect();
        days.push(AgendaDay { date, entries });
        current = date.checked_add_days(Days::new(1));
    }

    AgendaReport {
        title: app.title(),
        view: app.view.mode,
        first,
        last,
        days,
    }
}

pub fn run_agenda_mode(app: &mut AppState, date: Option<NaiveDate>, json: bool) -> anyhow::Result<()> {
    if let Some(date) = date {
        app.navigate(Navigation::Goto(date));
    }
    let report = build_report(app);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    display_with_pager(&format_agenda_text(&report))?;
    Ok(())
}

pub fn format_agenda_text(report: &AgendaReport) -> String {
    let mut lines = Vec::new();
    lines.push(format!("Agenda - {}", report.title));

    let mut empty = true;
    for day in report.days.iter().filter(|d| !d.entries.is_empty()) {
        empty = false;
        lines.push(String::new());
        lines.push(day.date.format("%A, %B %-d").to_string());
        for entry in &day.entries {
            lines.push(format!("- {}", build_agenda_line(entry)));
        }
    }

    if empty {
        lines.push(String::new());
        lines.push("Nothing scheduled.".to_string());
    }

    lines.join("\n")
}

fn build_agenda_line(entry: &AgendaEntry) -> String {
    let marker = match (entry.kind, entry.done) {
        ("task", true) => "[x] ",
        ("task", false) => "[ ] ",
        _ => "",
    };
    let mut line = format!("{:<13} {}{}", entry.time, marker, entry.title);
    if let Some(calendar) = &entry.calendar {
        line.push_str(&format!(" ({})", calendar));
    }
    line
}

fn display_with_pager(text: &str) -> Result<(), io::Error> {
    let pager_value = env::var("PAGER").unwrap_or_else(|_| "less".to_string());
    let mut parts = pager_value.split_whitespace();
    let cmd = match parts.next() {
        Some(c) => c,
        None => {
            println!("{text}");
            return Ok(());
        }
    };
    let args: Vec<&str> = parts.collect();

    match Command::new(cmd)
        .args(&args)
        .stdin(Stdio::piped())
        .spawn()
    {
        Ok(mut child) => {
            if let Some(stdin) = child.stdin.as_mut() {
                stdin.write_all(text.as_bytes())?;
            }
            let _ = child.wait();
        }
        Err(_) => {
            println!("{text}");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use calshell::calendar::EventDraft;
    use calshell::navigation::FixedClock;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn no_arguments_starts_tui() {
        assert_eq!(parse_args(args(&[])), Ok(CliMode::Default { sample: false, view: None }));
    }

    #[test]
    fn agenda_with_date_and_view() {
        let mode = parse_args(args(&["--agenda", "2024/06/10", "--view", "day", "--json"])).unwrap();

        assert_eq!(
            mode,
            CliMode::Agenda { date: Some(date(2024, 6, 10)), sample: false, view: Some(ViewMode::Day), json: true }
        );
    }

    #[test]
    fn agenda_without_date_uses_today() {
        let mode = parse_args(args(&["--agenda", "--sample"])).unwrap();

        assert_eq!(mode, CliMode::Agenda { date: None, sample: true, view: None, json: false });
    }

    #[test]
    fn bad_arguments_are_rejected() {
        assert!(parse_args(args(&["--agenda", "2024-06-10"])).is_err());
        assert!(parse_args(args(&["--view", "year"])).is_err());
        assert!(parse_args(args(&["--json"])).is_err());
        assert!(parse_args(args(&["--bogus"])).is_err());
    }

    #[test]
    fn report_covers_visible_week() {
        let mut app = AppState::new().with_clock(Box::new(FixedClock(date(2024, 6, 12))));
        let calendar_id = app.store.default_calendar_id().unwrap().to_string();
        app.store.add_event(EventDraft {
            title: "Dentist".to_string(),
            start: date(2024, 6, 12).and_hms_opt(9, 0, 0).unwrap(),
            end: date(2024, 6, 12).and_hms_opt(10, 0, 0).unwrap(),
            all_day: false,
            calendar_id,
        });

        let report = build_report(&app);

        assert_eq!(report.title, "June 9 - 15, 2024");
        assert_eq!(report.days.len(), 7);
        assert_eq!(report.days[3].entries[0].title, "Dentist");

        let text = format_agenda_text(&report);
        assert!(text.contains("09:00-10:00   Dentist (Personal)"));
    }

    #[test]
    fn empty_report_says_so() {
        let app = AppState::new().with_clock(Box::new(FixedClock(date(2024, 6, 12))));

        let text = format_agenda_text(&build_report(&app));

        assert!(text.ends_with("Nothing scheduled."));
    }
}
