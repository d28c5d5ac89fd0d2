use chrono::NaiveDate;
use uuid::Uuid;

use crate::calendar::{
    Calendar, Event, EventDraft, EventPatch, Task, TaskDraft, TaskPatch,
};

/// In-memory owner of calendars, events and tasks.
///
/// Update and remove on an unknown id are no-ops: they report the miss
/// through their return value and leave the collection untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalendarStore {
    calendars: Vec<Calendar>,
    events: Vec<Event>,
    tasks: Vec<Task>,
}

impl CalendarStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calendars(&self) -> &[Calendar] {
        &self.calendars
    }

    pub fn calendar(&self, id: &str) -> Option<&Calendar> {
        self.calendars.iter().find(|c| c.id == id)
    }

    pub fn calendar_by_name(&self, name: &str) -> Option<&Calendar> {
        self.calendars
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// The calendar new events land in: the first visible one, falling back
    /// to the first calendar at all.
    pub fn default_calendar_id(&self) -> Option<&str> {
        self.calendars
            .iter()
            .find(|c| c.visible)
            .or_else(|| self.calendars.first())
            .map(|c| c.id.as_str())
    }

    pub fn add_calendar(&mut self, name: impl Into<String>, color: impl Into<String>) -> String {
        let id = fresh_id(|candidate| self.calendar(candidate).is_some());
        let calendar = Calendar::new(id.clone(), name, color);
        tracing::info!("Added calendar {} ({})", calendar.name, id);
        self.calendars.push(calendar);
        id
    }

    pub fn set_calendar_visible(&mut self, id: &str, visible: bool) -> bool {
        match self.calendars.iter_mut().find(|c| c.id == id) {
            Some(calendar) => {
                calendar.visible = visible;
                true
            }
            None => {
                tracing::debug!("Visibility change for unknown calendar {}", id);
                false
            }
        }
    }

    pub fn toggle_calendar(&mut self, id: &str) -> bool {
        let Some(visible) = self.calendar(id).map(|c| c.visible) else {
            tracing::debug!("Toggle for unknown calendar {}", id);
            return false;
        };
        self.set_calendar_visible(id, !visible)
    }

    /// Events on unknown calendars count as visible.
    pub fn is_calendar_visible(&self, id: &str) -> bool {
        self.calendar(id).map(|c| c.visible).unwrap_or(true)
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn event(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn add_event(&mut self, draft: EventDraft) -> String {
        let id = fresh_id(|candidate| self.event(candidate).is_some());
        tracing::info!("Added event {}", id);
        self.events.push(Event::from_draft(id.clone(), draft));
        id
    }

    pub fn update_event(&mut self, id: &str, patch: EventPatch) -> bool {
        match self.events.iter_mut().find(|e| e.id == id) {
            Some(event) => {
                patch.apply(event);
                tracing::info!("Updated event {}", id);
                true
            }
            None => {
                tracing::debug!("Update for unknown event {} ignored", id);
                false
            }
        }
    }

    pub fn remove_event(&mut self, id: &str) -> Option<Event> {
        let Some(index) = self.events.iter().position(|e| e.id == id) else {
            tracing::debug!("Remove for unknown event {} ignored", id);
            return None;
        };
        tracing::info!("Removed event {}", id);
        Some(self.events.remove(index))
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn add_task(&mut self, draft: TaskDraft) -> String {
        let id = fresh_id(|candidate| self.task(candidate).is_some());
        tracing::info!("Added task {}", id);
        self.tasks.push(Task::from_draft(id.clone(), draft));
        id
    }

    pub fn update_task(&mut self, id: &str, patch: TaskPatch) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                patch.apply(task);
                tracing::info!("Updated task {}", id);
                true
            }
            None => {
                tracing::debug!("Update for unknown task {} ignored", id);
                false
            }
        }
    }

    pub fn remove_task(&mut self, id: &str) -> Option<Task> {
        let Some(index) = self.tasks.iter().position(|t| t.id == id) else {
            tracing::debug!("Remove for unknown task {} ignored", id);
            return None;
        };
        tracing::info!("Removed task {}", id);
        Some(self.tasks.remove(index))
    }

    pub fn toggle_task_status(&mut self, id: &str) -> bool {
        let Some(status) = self.task(id).map(|t| t.status) else {
            tracing::debug!("Status toggle for unknown task {} ignored", id);
            return false;
        };
        self.update_task(id, TaskPatch::status(status.toggled()))
    }

    /// Events on visible calendars touching the inclusive day range, ordered
    /// by start.
    pub fn events_between(&self, first: NaiveDate, last: NaiveDate) -> Vec<&Event> {
        let mut events: Vec<&Event> = self
            .events
            .iter()
            .filter(|e| self.is_calendar_visible(&e.calendar_id))
            .filter(|e| e.intersects(first, last))
            .collect();
        events.sort_by(|a, b| (!a.all_day, a.start).cmp(&(!b.all_day, b.start)));
        events
    }

    pub fn tasks_between(&self, first: NaiveDate, last: NaiveDate) -> Vec<&Task> {
        let mut tasks: Vec<&Task> = self
            .tasks
            .iter()
            .filter(|t| first <= t.day() && t.day() <= last)
            .collect();
        tasks.sort_by(|a, b| (!a.all_day, a.date).cmp(&(!b.all_day, b.date)));
        tasks
    }
}

fn fresh_id(taken: impl Fn(&str) -> bool) -> String {
    loop {
        let id = Uuid::new_v4().to_string();
        if !taken(&id) {
            return id;
        }
    }
}
