use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use thiserror::Error;

use crate::calendar::{Calendar, EventDraft, TaskDraft, TaskStatus};
use crate::create_flow::{EditSurface, UNTITLED_EVENT, UNTITLED_TASK};

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Invalid date '{0}'. Use YYYY-MM-DD.")]
    InvalidDate(String),
    #[error("Invalid time '{0}'. Use HH:MM.")]
    InvalidTime(String),
    #[error("End {end} is before start {start}")]
    EndBeforeStart {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
    #[error("No calendar to put the event in")]
    NoCalendar,
}

/// Field navigation and editing shared by the event and task dialogs.
pub trait FormFields {
    fn next_field(&mut self);
    fn prev_field(&mut self);
    /// Text buffer behind the active field, if it is a text field.
    fn active_text_mut(&mut self) -> Option<&mut String>;
    /// Flips or cycles the active field if it is not a text field.
    fn toggle_active(&mut self);
    fn is_editing(&self) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventField {
    Title,
    StartDate,
    StartTime,
    EndDate,
    EndTime,
    AllDay,
    Calendar,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EventForm {
    pub id: Option<String>,
    pub title: String,
    pub start_date: String,
    pub start_time: String,
    pub end_date: String,
    pub end_time: String,
    pub all_day: bool,
    /// Calendar id the draft arrived with; kept unless a calendar is picked.
    pub calendar_id: String,
    pub calendar_index: Option<usize>,
    pub active_field: EventField,
}

impl EventForm {
    pub fn from_surface(surface: &EditSurface<EventDraft>, calendars: &[Calendar]) -> Self {
        let draft = &surface.draft;
        let calendar_index = calendars.iter().position(|c| c.id == draft.calendar_id);
        Self {
            id: surface.id.clone(),
            title: draft.title.clone(),
            start_date: draft.start.format(DATE_FORMAT).to_string(),
            start_time: draft.start.format(TIME_FORMAT).to_string(),
            end_date: draft.end.format(DATE_FORMAT).to_string(),
            end_time: draft.end.format(TIME_FORMAT).to_string(),
            all_day: draft.all_day,
            calendar_id: draft.calendar_id.clone(),
            calendar_index,
            active_field: EventField::Title,
        }
    }

    pub fn to_draft(&self, calendars: &[Calendar]) -> Result<EventDraft, FormError> {
        let calendar_id = match self.calendar_index.and_then(|i| calendars.get(i)) {
            Some(calendar) => calendar.id.clone(),
            None if !self.calendar_id.is_empty() => self.calendar_id.clone(),
            None => calendars
                .first()
                .map(|c| c.id.clone())
                .ok_or(FormError::NoCalendar)?,
        };

        let start_date = parse_date(&self.start_date)?;
        let end_date = parse_date(&self.end_date)?;
        let (start, end) = if self.all_day {
            (start_date.and_time(NaiveTime::MIN), end_date.and_time(NaiveTime::MIN))
        } else {
            (
                start_date.and_time(parse_time(&self.start_time)?),
                end_date.and_time(parse_time(&self.end_time)?),
            )
        };
        if end < start {
            return Err(FormError::EndBeforeStart { start, end });
        }

        Ok(EventDraft {
            title: title_or(&self.title, UNTITLED_EVENT),
            start,
            end,
            all_day: self.all_day,
            calendar_id,
        })
    }

    pub fn calendar<'a>(&self, calendars: &'a [Calendar]) -> Option<&'a Calendar> {
        self.calendar_index.and_then(|i| calendars.get(i))
    }

    pub fn calendar_name<'a>(&'a self, calendars: &'a [Calendar]) -> &'a str {
        match self.calendar(calendars) {
            Some(calendar) => &calendar.name,
            None if !self.calendar_id.is_empty() => &self.calendar_id,
            None => "(none)",
        }
    }

    /// Picks the next calendar. An unknown calendar id is replaced by the
    /// first calendar.
    pub fn cycle_calendar(&mut self, calendar_count: usize) {
        if calendar_count == 0 {
            return;
        }
        self.calendar_index = Some(match self.calendar_index {
            Some(i) => (i + 1) % calendar_count,
            None => 0,
        });
    }

    fn fields(&self) -> &'static [EventField] {
        if self.all_day {
            &[
                EventField::Title,
                EventField::StartDate,
                EventField::EndDate,
                EventField::AllDay,
                EventField::Calendar,
            ]
        } else {
            &[
                EventField::Title,
                EventField::StartDate,
                EventField::StartTime,
                EventField::EndDate,
                EventField::EndTime,
                EventField::AllDay,
                EventField::Calendar,
            ]
        }
    }
}

impl FormFields for EventForm {
    fn next_field(&mut self) {
        self.active_field = cycle(self.fields(), self.active_field, 1);
    }

    fn prev_field(&mut self) {
        self.active_field = cycle(self.fields(), self.active_field, -1);
    }

    fn active_text_mut(&mut self) -> Option<&mut String> {
        match self.active_field {
            EventField::Title => Some(&mut self.title),
            EventField::StartDate => Some(&mut self.start_date),
            EventField::StartTime => Some(&mut self.start_time),
            EventField::EndDate => Some(&mut self.end_date),
            EventField::EndTime => Some(&mut self.end_time),
            EventField::AllDay | EventField::Calendar => None,
        }
    }

    /// The calendar field is cycled by the caller, which knows the calendar
    /// count.
    fn toggle_active(&mut self) {
        if self.active_field == EventField::AllDay {
            self.all_day = !self.all_day;
        }
    }

    fn is_editing(&self) -> bool {
        self.id.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskField {
    Title,
    Date,
    Time,
    AllDay,
    Status,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TaskForm {
    pub id: Option<String>,
    pub title: String,
    pub date: String,
    pub time: String,
    pub all_day: bool,
    pub status: TaskStatus,
    pub active_field: TaskField,
}

impl TaskForm {
    pub fn from_surface(surface: &EditSurface<TaskDraft>) -> Self {
        let draft = &surface.draft;
        Self {
            id: surface.id.clone(),
            title: draft.title.clone(),
            date: draft.date.format(DATE_FORMAT).to_string(),
            time: draft.date.format(TIME_FORMAT).to_string(),
            all_day: draft.all_day,
            status: draft.status,
            active_field: TaskField::Title,
        }
    }

    pub fn to_draft(&self) -> Result<TaskDraft, FormError> {
        let date = parse_date(&self.date)?;
        let time = if self.all_day {
            NaiveTime::MIN
        } else {
            parse_time(&self.time)?
        };
        Ok(TaskDraft {
            title: title_or(&self.title, UNTITLED_TASK),
            date: date.and_time(time),
            all_day: self.all_day,
            status: self.status,
        })
    }

    fn fields(&self) -> &'static [TaskField] {
        if self.all_day {
            &[TaskField::Title, TaskField::Date, TaskField::AllDay, TaskField::Status]
        } else {
            &[
                TaskField::Title,
                TaskField::Date,
                TaskField::Time,
                TaskField::AllDay,
                TaskField::Status,
            ]
        }
    }
}

impl FormFields for TaskForm {
    fn next_field(&mut self) {
        self.active_field = cycle(self.fields(), self.active_field, 1);
    }

    fn prev_field(&mut self) {
        self.active_field = cycle(self.fields(), self.active_field, -1);
    }

    fn active_text_mut(&mut self) -> Option<&mut String> {
        match self.active_field {
            TaskField::Title => Some(&mut self.title),
            TaskField::Date => Some(&mut self.date),
            TaskField::Time => Some(&mut self.time),
            TaskField::AllDay | TaskField::Status => None,
        }
    }

    fn toggle_active(&mut self) {
        match self.active_field {
            TaskField::AllDay => self.all_day = !self.all_day,
            TaskField::Status => self.status = self.status.toggled(),
            _ => {}
        }
    }

    fn is_editing(&self) -> bool {
        self.id.is_some()
    }
}

fn cycle<T: Copy + PartialEq>(fields: &[T], current: T, offset: isize) -> T {
    let Some(index) = fields.iter().position(|f| *f == current) else {
        return fields.first().copied().unwrap_or(current);
    };
    let len = fields.len() as isize;
    let next = (index as isize + offset).rem_euclid(len) as usize;
    fields[next]
}

fn title_or(title: &str, fallback: &str) -> String {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}

pub fn parse_date(input: &str) -> Result<NaiveDate, FormError> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT)
        .map_err(|_| FormError::InvalidDate(input.to_string()))
}

/// Accepts `HH:MM`, `HHMM`, `HMM` or a bare hour.
pub fn parse_time(input: &str) -> Result<NaiveTime, FormError> {
    let trimmed = input.trim();
    if let Ok(time) = NaiveTime::parse_from_str(trimmed, TIME_FORMAT) {
        return Ok(time);
    }
    let invalid = || FormError::InvalidTime(input.to_string());
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }
    let num: u32 = trimmed.parse().map_err(|_| invalid())?;
    let (hour, minute) = match trimmed.len() {
        1 | 2 => (num, 0),
        3 | 4 => (num / 100, num % 100),
        _ => return Err(invalid()),
    };
    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(invalid)
}
