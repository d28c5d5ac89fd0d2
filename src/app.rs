use chrono::{NaiveDate, Weekday};
use thiserror::Error;

use crate::calendar::{Calendar, DEFAULT_CALENDAR_COLOR};
use crate::create_flow::{
    CreateFlow, CreateFlowMode, CreateGesture, EntityKind, FlowError, FlowOutcome, FlowState,
};
use crate::form::{EventForm, FormError, TaskForm};
use crate::navigation::{Clock, Navigation, NavigationController, SystemClock, ViewMode, ViewState, visible_range};
use crate::storage::config::Config;
use crate::store::CalendarStore;
use crate::ui::agenda::{AgendaItem, agenda_for};
use crate::ui::range_title::{DEFAULT_WEEK_START, range_title_with};
use crate::ui::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    Command,
    Visual,
    Chooser,
    Form,
    Confirm,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDelete {
    pub kind: EntityKind,
    pub id: String,
    pub title: String,
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Form(#[from] FormError),
    #[error(transparent)]
    Flow(#[from] FlowError),
}

/// Root of the application: owns the store, the view and the create flow.
#[derive(Debug)]
pub struct AppState {
    pub mode: Mode,
    pub view: ViewState,
    pub store: CalendarStore,
    pub flow: CreateFlow,
    pub navigator: NavigationController,
    pub week_start: Weekday,
    pub show_tasks: bool,
    pub selected_index: usize,
    pub command_buffer: String,
    pub status_message: Option<String>,
    pub show_help: bool,
    pub help_scroll: usize,
    pub theme: Theme,
    pub event_form: Option<EventForm>,
    pub task_form: Option<TaskForm>,
    pub pending_delete: Option<PendingDelete>,
    pub visual_selection_start: Option<NaiveDate>,
    pub default_event_hour: u32,
    pub default_event_minutes: u32,
}

impl AppState {
    pub fn new() -> Self {
        let navigator = NavigationController::new(Box::new(SystemClock));
        let today = navigator.today();
        let mut store = CalendarStore::new();
        store.add_calendar("Personal", DEFAULT_CALENDAR_COLOR);
        Self {
            mode: Mode::Normal,
            view: ViewState::new(ViewMode::Week, today),
            store,
            flow: CreateFlow::new(CreateFlowMode::Chooser),
            navigator,
            week_start: DEFAULT_WEEK_START,
            show_tasks: true,
            selected_index: 0,
            command_buffer: String::new(),
            status_message: None,
            show_help: false,
            help_scroll: 0,
            theme: Theme::default(),
            event_form: None,
            task_form: None,
            pending_delete: None,
            visual_selection_start: None,
            default_event_hour: 9,
            default_event_minutes: 60,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let mut store = CalendarStore::new();
        for seed in &config.calendars {
            let id = store.add_calendar(seed.name.clone(), seed.color.clone());
            store.set_calendar_visible(&id, seed.visible);
        }
        if store.calendars().is_empty() {
            store.add_calendar("Personal", DEFAULT_CALENDAR_COLOR);
        }
        let mut app = Self::new().with_theme(Theme::get_by_name(&config.ui.theme));
        app.store = store;
        app.view.mode = config.ui.default_view;
        app.week_start = config.ui.week_start();
        app.flow = CreateFlow::new(config.create.mode);
        app.default_event_hour = config.ui.default_event_hour.min(23);
        app.default_event_minutes = config.ui.default_event_minutes.max(1);
        app
    }

    /// Replaces the clock and re-anchors the view on its today.
    pub fn with_clock(mut self, clock: Box<dyn Clock>) -> Self {
        self.navigator = NavigationController::new(clock);
        self.view.anchor = self.navigator.today();
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn today(&self) -> NaiveDate {
        self.navigator.today()
    }

    pub fn anchor(&self) -> NaiveDate {
        self.view.anchor
    }

    pub fn title(&self) -> String {
        range_title_with(self.view.mode, self.view.anchor, self.week_start)
    }

    pub fn visible_range(&self) -> (NaiveDate, NaiveDate) {
        visible_range(self.view.mode, self.view.anchor, self.week_start)
    }

    pub fn navigate(&mut self, navigation: Navigation) {
        self.navigator.navigate(&mut self.view, navigation);
        self.reset_selection();
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view.mode = mode;
    }

    pub fn agenda_for(&self, date: NaiveDate) -> Vec<AgendaItem<'_>> {
        agenda_for(&self.store, date, self.show_tasks)
    }

    pub fn selected_item(&self) -> Option<AgendaItem<'_>> {
        self.agenda_for(self.view.anchor).get(self.selected_index).copied()
    }

    pub fn move_selection_down(&mut self) {
        let count = self.agenda_for(self.view.anchor).len();
        if count > 0 && self.selected_index < count - 1 {
            self.selected_index += 1;
        }
    }

    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Moves forward through the anchor day's agenda, wrapping at the end.
    pub fn cycle_selection(&mut self) {
        let count = self.agenda_for(self.view.anchor).len();
        if count > 0 {
            self.selected_index = (self.selected_index + 1) % count;
        }
    }

    pub fn reset_selection(&mut self) {
        self.selected_index = 0;
    }

    /// Gesture for a click on the anchor day: a timed slot at the default
    /// hour, or the whole day.
    pub fn gesture_at_anchor(&self, all_day: bool) -> CreateGesture {
        if all_day {
            CreateGesture::all_day(self.view.anchor, self.view.anchor)
        } else {
            CreateGesture::timed(self.view.anchor, self.default_event_hour, self.default_event_minutes)
        }
    }

    pub fn begin_create(&mut self, gesture: CreateGesture) -> Result<(), FlowError> {
        self.flow.begin_create(gesture, &self.store)?;
        self.sync_with_flow();
        Ok(())
    }

    /// Opens a create dialog of a known kind, optionally with a title.
    pub fn begin_create_as(
        &mut self,
        kind: EntityKind,
        gesture: CreateGesture,
        title: Option<String>,
    ) -> Result<(), FlowError> {
        self.flow.begin_create_as(kind, gesture, &self.store)?;
        self.sync_with_flow();
        if let Some(title) = title {
            if let Some(form) = self.event_form.as_mut() {
                form.title = title.clone();
            }
            if let Some(form) = self.task_form.as_mut() {
                form.title = title;
            }
        }
        Ok(())
    }

    pub fn choose(&mut self, kind: EntityKind) -> Result<(), FlowError> {
        self.flow.choose(kind)?;
        self.sync_with_flow();
        Ok(())
    }

    pub fn edit_selected(&mut self) -> Result<(), FlowError> {
        let Some((kind, id)) = self.selected_item().map(|item| (item.kind(), item.id().to_string())) else {
            return Ok(());
        };
        self.edit(kind, &id)
    }

    pub fn edit(&mut self, kind: EntityKind, id: &str) -> Result<(), FlowError> {
        match kind {
            EntityKind::Event => {
                if let Some(event) = self.store.event(id) {
                    self.flow.edit_event(event)?;
                }
            }
            EntityKind::Task => {
                if let Some(task) = self.store.task(id) {
                    self.flow.edit_task(task)?;
                }
            }
        }
        self.sync_with_flow();
        Ok(())
    }

    /// Saves whichever dialog is open. Validation failures leave the dialog
    /// open.
    pub fn submit_form(&mut self) -> Result<FlowOutcome, SubmitError> {
        let outcome = if let Some(form) = &self.event_form {
            let draft = form.to_draft(self.store.calendars())?;
            self.flow.save_event(&mut self.store, draft)?
        } else if let Some(form) = &self.task_form {
            let draft = form.to_draft()?;
            self.flow.save_task(&mut self.store, draft)?
        } else {
            return Err(SubmitError::Flow(FlowError::InvalidTransition {
                action: "save",
                state: self.flow.state().name(),
            }));
        };
        self.report(&outcome);
        self.sync_with_flow();
        Ok(outcome)
    }

    pub fn delete_from_form(&mut self) -> Result<FlowOutcome, FlowError> {
        let outcome = self.flow.delete(&mut self.store)?;
        self.report(&outcome);
        self.sync_with_flow();
        self.clamp_selection();
        Ok(outcome)
    }

    pub fn cancel_flow(&mut self) {
        self.flow.cancel();
        self.sync_with_flow();
    }

    pub fn request_delete_selected(&mut self) {
        if let Some(item) = self.selected_item() {
            self.pending_delete = Some(PendingDelete {
                kind: item.kind(),
                id: item.id().to_string(),
                title: item.title().to_string(),
            });
            self.mode = Mode::Confirm;
        }
    }

    /// Runs a confirmed delete through the flow so it ends like a dialog
    /// delete.
    pub fn confirm_delete(&mut self) -> Result<(), FlowError> {
        let Some(pending) = self.pending_delete.take() else {
            self.mode = Mode::Normal;
            return Ok(());
        };
        self.edit(pending.kind, &pending.id)?;
        if !self.flow.is_idle() {
            self.delete_from_form()?;
        }
        self.mode = Mode::Normal;
        Ok(())
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
        self.mode = Mode::Normal;
    }

    pub fn toggle_selected_task(&mut self) {
        let id = match self.selected_item() {
            Some(AgendaItem::Task(task)) => task.id.clone(),
            _ => return,
        };
        self.store.toggle_task_status(&id);
    }

    pub fn toggle_tasks(&mut self) {
        self.show_tasks = !self.show_tasks;
        self.clamp_selection();
    }

    /// Toggles the calendar at `index` in sidebar order.
    pub fn toggle_calendar_at(&mut self, index: usize) -> bool {
        let Some(id) = self.store.calendars().get(index).map(|c| c.id.clone()) else {
            return false;
        };
        let toggled = self.store.toggle_calendar(&id);
        self.clamp_selection();
        toggled
    }

    pub fn calendar_for_item(&self, item: &AgendaItem<'_>) -> Option<&Calendar> {
        match item {
            AgendaItem::Event(e) => self.store.calendar(&e.calendar_id),
            AgendaItem::Task(_) => None,
        }
    }

    pub fn visual_selection_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        self.visual_selection_start.map(|start| {
            let end = self.view.anchor;
            if start <= end {
                (start, end)
            } else {
                (end, start)
            }
        })
    }

    pub fn is_date_in_visual_selection(&self, date: NaiveDate) -> bool {
        if let Some((start, end)) = self.visual_selection_range() {
            date >= start && date <= end
        } else {
            false
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    fn clamp_selection(&mut self) {
        let count = self.agenda_for(self.view.anchor).len();
        if self.selected_index >= count {
            self.selected_index = count.saturating_sub(1);
        }
    }

    fn report(&mut self, outcome: &FlowOutcome) {
        let message = match outcome {
            FlowOutcome::Created { kind, .. } => format!("Created {}", kind),
            FlowOutcome::Updated { kind, .. } => format!("Updated {}", kind),
            FlowOutcome::Deleted { kind, .. } => format!("Deleted {}", kind),
            FlowOutcome::Cancelled => return,
        };
        self.status_message = Some(message);
    }

    /// Derives mode and open dialogs from the flow state.
    fn sync_with_flow(&mut self) {
        match self.flow.state() {
            FlowState::Idle => {
                self.event_form = None;
                self.task_form = None;
                self.mode = Mode::Normal;
            }
            FlowState::AwaitingTypeChoice { .. } => {
                self.event_form = None;
                self.task_form = None;
                self.mode = Mode::Chooser;
            }
            FlowState::EditingEvent(surface) => {
                self.event_form = Some(EventForm::from_surface(surface, self.store.calendars()));
                self.task_form = None;
                self.mode = Mode::Form;
            }
            FlowState::EditingTask(surface) => {
                self.task_form = Some(TaskForm::from_surface(surface));
                self.event_form = None;
                self.mode = Mode::Form;
            }
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{EventDraft, TaskStatus};
    use crate::navigation::FixedClock;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn app_on(day: NaiveDate) -> AppState {
        AppState::new().with_clock(Box::new(FixedClock(day)))
    }

    #[test]
    fn new_app_starts_in_normal_mode_on_week_view() {
        let app = app_on(date(2024, 6, 10));

        assert_eq!(app.mode, Mode::Normal);
        assert_eq!(app.view.mode, ViewMode::Week);
        assert_eq!(app.anchor(), date(2024, 6, 10));
    }

    #[test]
    fn new_app_has_one_calendar_and_no_entries() {
        let app = AppState::new();

        assert_eq!(app.store.calendars().len(), 1);
        assert!(app.store.events().is_empty());
        assert!(app.store.tasks().is_empty());
    }

    #[test]
    fn title_follows_view_mode() {
        let mut app = app_on(date(2024, 6, 10));

        app.set_view_mode(ViewMode::Month);

        assert_eq!(app.title(), "June 2024");
    }

    #[test]
    fn navigate_resets_selection() {
        let mut app = app_on(date(2024, 6, 10));
        app.selected_index = 3;

        app.navigate(Navigation::Next);

        assert_eq!(app.anchor(), date(2024, 6, 17));
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn chooser_then_task_opens_task_form() {
        let mut app = app_on(date(2024, 6, 10));

        app.begin_create(app.gesture_at_anchor(true)).unwrap();
        assert_eq!(app.mode, Mode::Chooser);

        app.choose(EntityKind::Task).unwrap();

        assert_eq!(app.mode, Mode::Form);
        let form = app.task_form.as_ref().unwrap();
        assert_eq!(form.title, "Untitled task");
        assert_eq!(form.date, "2024-06-10");
        assert!(form.all_day);
        assert_eq!(form.status, TaskStatus::Pending);
    }

    #[test]
    fn submit_creates_event_and_closes_form() {
        let mut app = app_on(date(2024, 6, 10));
        app.begin_create(app.gesture_at_anchor(false)).unwrap();
        app.choose(EntityKind::Event).unwrap();
        app.event_form.as_mut().unwrap().title = "Dentist".to_string();

        let outcome = app.submit_form().unwrap();

        assert!(matches!(outcome, FlowOutcome::Created { kind: EntityKind::Event, .. }));
        assert_eq!(app.mode, Mode::Normal);
        assert!(app.event_form.is_none());
        assert_eq!(app.agenda_for(date(2024, 6, 10))[0].title(), "Dentist");
        assert_eq!(app.status_message.as_deref(), Some("Created event"));
    }

    #[test]
    fn invalid_form_stays_open() {
        let mut app = app_on(date(2024, 6, 10));
        app.begin_create_as(EntityKind::Event, app.gesture_at_anchor(false), None).unwrap();
        app.event_form.as_mut().unwrap().end_time = "08:00".to_string();

        let result = app.submit_form();

        assert!(matches!(result, Err(SubmitError::Form(FormError::EndBeforeStart { .. }))));
        assert_eq!(app.mode, Mode::Form);
        assert!(app.store.events().is_empty());
    }

    #[test]
    fn begin_create_as_prefills_title() {
        let mut app = app_on(date(2024, 6, 10));

        app.begin_create_as(EntityKind::Task, app.gesture_at_anchor(true), Some("Pay rent".to_string()))
            .unwrap();

        assert_eq!(app.task_form.as_ref().unwrap().title, "Pay rent");
    }

    #[test]
    fn confirmed_delete_removes_selected_event() {
        let mut app = app_on(date(2024, 6, 10));
        let calendar_id = app.store.default_calendar_id().unwrap().to_string();
        let start = date(2024, 6, 10).and_hms_opt(9, 0, 0).unwrap();
        app.store.add_event(EventDraft {
            title: "Standup".to_string(),
            start,
            end: start + chrono::Duration::minutes(15),
            all_day: false,
            calendar_id,
        });

        app.request_delete_selected();
        assert_eq!(app.mode, Mode::Confirm);
        assert_eq!(app.pending_delete.as_ref().unwrap().title, "Standup");

        app.confirm_delete().unwrap();

        assert!(app.store.events().is_empty());
        assert_eq!(app.mode, Mode::Normal);
        assert!(app.flow.is_idle());
    }

    #[test]
    fn cancelled_delete_keeps_entity() {
        let mut app = app_on(date(2024, 6, 10));
        app.begin_create_as(EntityKind::Task, app.gesture_at_anchor(true), None).unwrap();
        app.submit_form().unwrap();

        app.request_delete_selected();
        app.cancel_delete();

        assert_eq!(app.store.tasks().len(), 1);
        assert_eq!(app.mode, Mode::Normal);
    }

    #[test]
    fn edit_selected_opens_event_form_with_id() {
        let mut app = app_on(date(2024, 6, 10));
        app.begin_create_as(EntityKind::Event, app.gesture_at_anchor(false), Some("Standup".to_string()))
            .unwrap();
        app.submit_form().unwrap();

        app.edit_selected().unwrap();

        let form = app.event_form.as_ref().unwrap();
        assert_eq!(form.title, "Standup");
        assert!(form.id.is_some());
    }

    #[test]
    fn hiding_calendar_hides_its_events() {
        let mut app = app_on(date(2024, 6, 10));
        app.begin_create_as(EntityKind::Event, app.gesture_at_anchor(false), None).unwrap();
        app.submit_form().unwrap();

        assert!(app.toggle_calendar_at(0));

        assert!(app.agenda_for(date(2024, 6, 10)).is_empty());
        assert!(!app.toggle_calendar_at(5));
    }

    #[test]
    fn toggle_selected_task_marks_done() {
        let mut app = app_on(date(2024, 6, 10));
        app.begin_create_as(EntityKind::Task, app.gesture_at_anchor(true), None).unwrap();
        app.submit_form().unwrap();

        app.toggle_selected_task();

        assert!(app.store.tasks()[0].is_done());
    }

    #[test]
    fn visual_selection_is_ordered() {
        let mut app = app_on(date(2024, 6, 10));
        app.visual_selection_start = Some(date(2024, 6, 12));

        assert_eq!(app.visual_selection_range(), Some((date(2024, 6, 10), date(2024, 6, 12))));
        assert!(app.is_date_in_visual_selection(date(2024, 6, 11)));
        assert!(!app.is_date_in_visual_selection(date(2024, 6, 13)));
    }

    #[test]
    fn from_config_applies_ui_settings() {
        let mut config = Config::default();
        config.ui.default_view = ViewMode::Month;
        config.ui.first_day_of_week = "Monday".to_string();
        config.create.mode = CreateFlowMode::Direct;
        config.ui.theme = "nord".to_string();

        let app = AppState::from_config(&config);

        assert_eq!(app.theme, Theme::nord());
        assert_eq!(app.view.mode, ViewMode::Month);
        assert_eq!(app.week_start, Weekday::Mon);
        assert_eq!(app.flow.mode(), CreateFlowMode::Direct);
        assert_eq!(app.store.calendars()[0].name, "Personal");
    }
}
