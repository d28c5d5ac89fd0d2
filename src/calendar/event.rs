use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub all_day: bool,
    pub calendar_id: String,
}

/// An event payload that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventDraft {
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub all_day: bool,
    pub calendar_id: String,
}

/// Partial update for an [`Event`]. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventPatch {
    pub title: Option<String>,
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
    pub all_day: Option<bool>,
    pub calendar_id: Option<String>,
}

impl Event {
    pub fn from_draft(id: String, draft: EventDraft) -> Self {
        Self {
            id,
            title: draft.title,
            start: draft.start,
            end: draft.end,
            all_day: draft.all_day,
            calendar_id: draft.calendar_id,
        }
    }

    pub fn to_draft(&self) -> EventDraft {
        EventDraft {
            title: self.title.clone(),
            start: self.start,
            end: self.end,
            all_day: self.all_day,
            calendar_id: self.calendar_id.clone(),
        }
    }

    pub fn first_day(&self) -> NaiveDate {
        self.start.date()
    }

    /// Last calendar day the event occupies. A timed event ending exactly at
    /// midnight does not spill into that day.
    pub fn last_day(&self) -> NaiveDate {
        let end_date = self.end.date();
        if self.end <= self.start {
            return self.start.date();
        }
        if !self.all_day && self.end.time() == NaiveTime::MIN && end_date > self.start.date() {
            return end_date.pred_opt().unwrap_or(end_date);
        }
        end_date
    }

    pub fn occurs_on(&self, date: NaiveDate) -> bool {
        self.intersects(date, date)
    }

    pub fn intersects(&self, first: NaiveDate, last: NaiveDate) -> bool {
        self.first_day() <= last && first <= self.last_day()
    }
}

impl EventPatch {
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn apply(self, event: &mut Event) {
        if let Some(title) = self.title {
            event.title = title;
        }
        if let Some(start) = self.start {
            event.start = start;
        }
        if let Some(end) = self.end {
            event.end = end;
        }
        if let Some(all_day) = self.all_day {
            event.all_day = all_day;
        }
        if let Some(calendar_id) = self.calendar_id {
            event.calendar_id = calendar_id;
        }
    }
}

impl From<EventDraft> for EventPatch {
    fn from(draft: EventDraft) -> Self {
        Self {
            title: Some(draft.title),
            start: Some(draft.start),
            end: Some(draft.end),
            all_day: Some(draft.all_day),
            calendar_id: Some(draft.calendar_id),
        }
    }
}
