//! Create/edit flow shared by events and tasks.
//!
//! A generic create gesture carries no entity type. In [`CreateFlowMode::Chooser`]
//! the flow parks in `AwaitingTypeChoice` until the user picks one; in
//! [`CreateFlowMode::Direct`] it always opens an event. Editing states end in
//! save, delete or cancel, all of which return to `Idle`.

use std::fmt;

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calendar::{Event, EventDraft, EventPatch, Task, TaskDraft, TaskPatch, TaskStatus};
use crate::store::CalendarStore;

pub const UNTITLED_EVENT: &str = "Untitled event";
pub const UNTITLED_TASK: &str = "Untitled task";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Event,
    Task,
}

impl EntityKind {
    pub fn label(self) -> &'static str {
        match self {
            EntityKind::Event => "event",
            EntityKind::Task => "task",
        }
    }

    pub fn other(self) -> Self {
        match self {
            EntityKind::Event => EntityKind::Task,
            EntityKind::Task => EntityKind::Event,
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CreateFlowMode {
    #[default]
    Chooser,
    Direct,
}

/// Start/end/all-day triple produced by a click or drag on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreateGesture {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub all_day: bool,
}

impl CreateGesture {
    pub fn timed(date: NaiveDate, hour: u32, duration_minutes: u32) -> Self {
        let time = NaiveTime::from_hms_opt(hour.min(23), 0, 0).unwrap_or(NaiveTime::MIN);
        let start = date.and_time(time);
        let end = start
            .checked_add_signed(Duration::minutes(i64::from(duration_minutes)))
            .unwrap_or(start);
        Self { start, end, all_day: false }
    }

    /// All-day gesture over the inclusive day range; the bounds may come in
    /// either order.
    pub fn all_day(first: NaiveDate, last: NaiveDate) -> Self {
        let (first, last) = if first <= last { (first, last) } else { (last, first) };
        Self {
            start: first.and_time(NaiveTime::MIN),
            end: last.and_time(NaiveTime::MIN),
            all_day: true,
        }
    }
}

/// What an open edit dialog holds: the initial payload and, when editing an
/// existing entity, its id.
#[derive(Debug, Clone, PartialEq)]
pub struct EditSurface<T> {
    pub id: Option<String>,
    pub draft: T,
}

impl<T> EditSurface<T> {
    pub fn creating(draft: T) -> Self {
        Self { id: None, draft }
    }

    pub fn editing(id: String, draft: T) -> Self {
        Self { id: Some(id), draft }
    }

    pub fn is_editing(&self) -> bool {
        self.id.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum FlowState {
    #[default]
    Idle,
    AwaitingTypeChoice {
        gesture: CreateGesture,
        highlighted: EntityKind,
        calendar_id: String,
    },
    EditingEvent(EditSurface<EventDraft>),
    EditingTask(EditSurface<TaskDraft>),
}

impl FlowState {
    pub fn name(&self) -> &'static str {
        match self {
            FlowState::Idle => "idle",
            FlowState::AwaitingTypeChoice { .. } => "choosing a type",
            FlowState::EditingEvent(_) => "editing an event",
            FlowState::EditingTask(_) => "editing a task",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowOutcome {
    Created { kind: EntityKind, id: String },
    Updated { kind: EntityKind, id: String },
    Deleted { kind: EntityKind, id: String },
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlowError {
    #[error("cannot {action} while {state}")]
    InvalidTransition {
        action: &'static str,
        state: &'static str,
    },
}

#[derive(Debug, Clone, Default)]
pub struct CreateFlow {
    mode: CreateFlowMode,
    state: FlowState,
}

impl CreateFlow {
    pub fn new(mode: CreateFlowMode) -> Self {
        Self {
            mode,
            state: FlowState::Idle,
        }
    }

    pub fn mode(&self) -> CreateFlowMode {
        self.mode
    }

    pub fn state(&self) -> &FlowState {
        &self.state
    }

    pub fn is_idle(&self) -> bool {
        self.state == FlowState::Idle
    }

    /// Starts a create from a grid gesture. New events go into the store's
    /// default calendar.
    pub fn begin_create(&mut self, gesture: CreateGesture, store: &CalendarStore) -> Result<(), FlowError> {
        self.require_idle("start a new entry")?;
        let calendar_id = store.default_calendar_id().unwrap_or_default().to_string();
        self.state = match self.mode {
            CreateFlowMode::Chooser => FlowState::AwaitingTypeChoice {
                gesture,
                highlighted: EntityKind::Event,
                calendar_id,
            },
            CreateFlowMode::Direct => FlowState::EditingEvent(EditSurface::creating(
                new_event_draft(&gesture, calendar_id),
            )),
        };
        tracing::debug!("Create gesture at {} -> {}", gesture.start, self.state.name());
        Ok(())
    }

    /// Opens a create dialog for a known kind, skipping the chooser.
    pub fn begin_create_as(
        &mut self,
        kind: EntityKind,
        gesture: CreateGesture,
        store: &CalendarStore,
    ) -> Result<(), FlowError> {
        self.require_idle("start a new entry")?;
        let calendar_id = store.default_calendar_id().unwrap_or_default().to_string();
        self.state = open_draft(kind, &gesture, calendar_id);
        Ok(())
    }

    /// Moves the chooser highlight to the other kind.
    pub fn toggle_highlight(&mut self) {
        if let FlowState::AwaitingTypeChoice { highlighted, .. } = &mut self.state {
            *highlighted = highlighted.other();
        }
    }

    pub fn highlighted(&self) -> Option<EntityKind> {
        match &self.state {
            FlowState::AwaitingTypeChoice { highlighted, .. } => Some(*highlighted),
            _ => None,
        }
    }

    pub fn choose(&mut self, kind: EntityKind) -> Result<(), FlowError> {
        let FlowState::AwaitingTypeChoice { gesture, calendar_id, .. } = &self.state else {
            return Err(self.invalid("choose an entry type"));
        };
        let next = open_draft(kind, gesture, calendar_id.clone());
        tracing::debug!("Chose {} for gesture at {}", kind, gesture.start);
        self.state = next;
        Ok(())
    }

    pub fn edit_event(&mut self, event: &Event) -> Result<(), FlowError> {
        self.require_idle("edit an event")?;
        self.state = FlowState::EditingEvent(EditSurface::editing(event.id.clone(), event.to_draft()));
        Ok(())
    }

    pub fn edit_task(&mut self, task: &Task) -> Result<(), FlowError> {
        self.require_idle("edit a task")?;
        self.state = FlowState::EditingTask(EditSurface::editing(task.id.clone(), task.to_draft()));
        Ok(())
    }

    pub fn save_event(&mut self, store: &mut CalendarStore, draft: EventDraft) -> Result<FlowOutcome, FlowError> {
        let FlowState::EditingEvent(surface) = &self.state else {
            return Err(self.invalid("save an event"));
        };
        let outcome = match &surface.id {
            Some(id) => {
                store.update_event(id, EventPatch::from(draft));
                FlowOutcome::Updated { kind: EntityKind::Event, id: id.clone() }
            }
            None => FlowOutcome::Created {
                kind: EntityKind::Event,
                id: store.add_event(draft),
            },
        };
        self.state = FlowState::Idle;
        Ok(outcome)
    }

    pub fn save_task(&mut self, store: &mut CalendarStore, draft: TaskDraft) -> Result<FlowOutcome, FlowError> {
        let FlowState::EditingTask(surface) = &self.state else {
            return Err(self.invalid("save a task"));
        };
        let outcome = match &surface.id {
            Some(id) => {
                store.update_task(id, TaskPatch::from(draft));
                FlowOutcome::Updated { kind: EntityKind::Task, id: id.clone() }
            }
            None => FlowOutcome::Created {
                kind: EntityKind::Task,
                id: store.add_task(draft),
            },
        };
        self.state = FlowState::Idle;
        Ok(outcome)
    }

    /// Removes the entity being edited. Deleting an unsaved draft just closes
    /// the dialog.
    pub fn delete(&mut self, store: &mut CalendarStore) -> Result<FlowOutcome, FlowError> {
        let outcome = match &self.state {
            FlowState::EditingEvent(EditSurface { id: Some(id), .. }) => {
                store.remove_event(id);
                FlowOutcome::Deleted { kind: EntityKind::Event, id: id.clone() }
            }
            FlowState::EditingTask(EditSurface { id: Some(id), .. }) => {
                store.remove_task(id);
                FlowOutcome::Deleted { kind: EntityKind::Task, id: id.clone() }
            }
            FlowState::EditingEvent(_) | FlowState::EditingTask(_) => FlowOutcome::Cancelled,
            _ => return Err(self.invalid("delete")),
        };
        self.state = FlowState::Idle;
        Ok(outcome)
    }

    pub fn cancel(&mut self) -> FlowOutcome {
        if !self.is_idle() {
            tracing::debug!("Cancelled while {}", self.state.name());
        }
        self.state = FlowState::Idle;
        FlowOutcome::Cancelled
    }

    fn require_idle(&self, action: &'static str) -> Result<(), FlowError> {
        if self.is_idle() {
            Ok(())
        } else {
            Err(self.invalid(action))
        }
    }

    fn invalid(&self, action: &'static str) -> FlowError {
        FlowError::InvalidTransition {
            action,
            state: self.state.name(),
        }
    }
}

fn open_draft(kind: EntityKind, gesture: &CreateGesture, calendar_id: String) -> FlowState {
    match kind {
        EntityKind::Event => FlowState::EditingEvent(EditSurface::creating(new_event_draft(gesture, calendar_id))),
        EntityKind::Task => FlowState::EditingTask(EditSurface::creating(new_task_draft(gesture))),
    }
}

pub fn new_event_draft(gesture: &CreateGesture, calendar_id: String) -> EventDraft {
    EventDraft {
        title: UNTITLED_EVENT.to_string(),
        start: gesture.start,
        end: gesture.end,
        all_day: gesture.all_day,
        calendar_id,
    }
}

pub fn new_task_draft(gesture: &CreateGesture) -> TaskDraft {
    TaskDraft {
        title: UNTITLED_TASK.to_string(),
        date: gesture.start,
        all_day: gesture.all_day,
        status: TaskStatus::Pending,
    }
}
