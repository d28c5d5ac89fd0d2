pub mod event;
pub mod calendar_type;
pub mod task;

pub use event::{Event, EventDraft, EventPatch};
pub use calendar_type::{Calendar, DEFAULT_CALENDAR_COLOR, is_valid_color};
pub use task::{Task, TaskDraft, TaskPatch, TaskStatus};
