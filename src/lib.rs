pub mod calendar;
pub mod store;
pub mod navigation;
pub mod create_flow;
pub mod form;
pub mod input;
pub mod ui;
pub mod storage;
pub mod app;

pub use calendar::{Calendar, Event, Task, TaskStatus};
pub use store::CalendarStore;
pub use navigation::{Navigation, NavigationController, ViewMode, ViewState};
pub use create_flow::{CreateFlow, CreateFlowMode, EntityKind, FlowState};
pub use app::{AppState, Mode};
pub use ui::range_title::range_title;

pub use input::{normal_mode, command_mode};
