use calshell::{
    app::{AppState, Mode},
    calendar::{EventDraft, EventPatch, TaskStatus},
    create_flow::{CreateFlowMode, CreateGesture, EditSurface, EntityKind, FlowOutcome, FlowState},
    input::{chooser_mode, command_mode, form_mode, normal_mode},
    navigation::FixedClock,
    storage::config::Config,
};
use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pretty_assertions::assert_eq;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn app_on(day: NaiveDate) -> AppState {
    AppState::new().with_clock(Box::new(FixedClock(day)))
}

fn form_key(code: KeyCode, app: &mut AppState) {
    form_mode::handle_key(KeyEvent::new(code, KeyModifiers::NONE), app);
}

#[test]
fn all_day_gesture_then_task_choice_yields_untitled_task_draft() {
    let mut app = app_on(date(2024, 6, 10));

    app.begin_create(CreateGesture::all_day(date(2024, 6, 10), date(2024, 6, 10))).unwrap();
    chooser_mode::handle_key(KeyCode::Char('t'), &mut app);

    let FlowState::EditingTask(EditSurface { id, draft }) = app.flow.state() else {
        panic!("expected a task draft, got {}", app.flow.state().name());
    };
    assert_eq!(*id, None);
    assert_eq!(draft.title, "Untitled task");
    assert_eq!(draft.date, date(2024, 6, 10).and_hms_opt(0, 0, 0).unwrap());
    assert!(draft.all_day);
    assert_eq!(draft.status, TaskStatus::Pending);
    assert!(app.store.tasks().is_empty());
}

#[test]
fn keyboard_create_edit_and_delete_round() {
    let mut app = app_on(date(2024, 6, 10));

    normal_mode::handle_key(KeyCode::Char('a'), &mut app);
    chooser_mode::handle_key(KeyCode::Enter, &mut app);
    assert_eq!(app.mode, Mode::Form);

    for _ in 0.."Untitled event".len() {
        form_key(KeyCode::Backspace, &mut app);
    }
    for c in "Planning".chars() {
        form_key(KeyCode::Char(c), &mut app);
    }
    form_key(KeyCode::Enter, &mut app);

    assert_eq!(app.mode, Mode::Normal);
    let event = &app.store.events()[0];
    assert_eq!(event.title, "Planning");
    assert_eq!(event.start, date(2024, 6, 10).and_hms_opt(9, 0, 0).unwrap());
    assert_eq!(event.end, date(2024, 6, 10).and_hms_opt(10, 0, 0).unwrap());

    normal_mode::handle_key(KeyCode::Char('e'), &mut app);
    assert!(app.event_form.as_ref().unwrap().id.is_some());
    form_mode::handle_key(KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL), &mut app);

    assert!(app.store.events().is_empty());
    assert_eq!(app.status_message.as_deref(), Some("Deleted event"));
}

#[test]
fn direct_mode_skips_chooser() {
    let mut config = Config::default();
    config.create.mode = CreateFlowMode::Direct;
    let mut app = AppState::from_config(&config).with_clock(Box::new(FixedClock(date(2024, 6, 10))));

    normal_mode::handle_key(KeyCode::Char('A'), &mut app);

    assert_eq!(app.mode, Mode::Form);
    let form = app.event_form.as_ref().unwrap();
    assert!(form.all_day);
    assert_eq!(form.start_date, "2024-06-10");
}

#[test]
fn editing_task_status_through_form_updates_store() {
    let mut app = app_on(date(2024, 6, 10));
    command_mode::execute(command_mode::Command::NewTask(Some("File taxes".to_string())), &mut app);
    let created = app.submit_form().unwrap();
    let FlowOutcome::Created { kind: EntityKind::Task, id } = created else {
        panic!("expected a created task, got {:?}", created);
    };

    app.edit(EntityKind::Task, &id).unwrap();
    for _ in 0..3 {
        form_key(KeyCode::Tab, &mut app);
    }
    form_key(KeyCode::Char(' '), &mut app);
    form_key(KeyCode::Enter, &mut app);

    let task = app.store.task(&id).unwrap();
    assert_eq!(task.title, "File taxes");
    assert_eq!(task.status, TaskStatus::Done);
    assert_eq!(app.store.tasks().len(), 1);
}

#[test]
fn store_update_touches_only_patched_fields() {
    let mut app = app_on(date(2024, 6, 10));
    command_mode::execute(command_mode::Command::NewEvent(None), &mut app);
    app.submit_form().unwrap();
    let before = app.store.events()[0].clone();

    assert!(app.store.update_event(&before.id, EventPatch::title("X")));

    let after = app.store.event(&before.id).unwrap();
    assert_eq!(after.title, "X");
    assert_eq!(after.start, before.start);
    assert_eq!(after.end, before.end);
    assert_eq!(after.calendar_id, before.calendar_id);
}

#[test]
fn missing_ids_are_no_ops() {
    let mut app = app_on(date(2024, 6, 10));
    command_mode::execute(command_mode::Command::NewEvent(None), &mut app);
    app.submit_form().unwrap();
    let snapshot = app.store.clone();

    assert!(!app.store.update_event("missing", EventPatch::title("X")));
    assert!(app.store.remove_event("missing").is_none());
    assert!(app.store.remove_task("missing").is_none());

    assert_eq!(app.store, snapshot);
}

#[test]
fn unchanged_edit_keeps_unknown_calendar_id() {
    let mut app = app_on(date(2024, 6, 10));
    let id = app.store.add_event(EventDraft {
        title: "Imported".to_string(),
        start: date(2024, 6, 10).and_hms_opt(9, 0, 0).unwrap(),
        end: date(2024, 6, 10).and_hms_opt(10, 0, 0).unwrap(),
        all_day: false,
        calendar_id: "imported".to_string(),
    });

    app.edit(EntityKind::Event, &id).unwrap();
    app.submit_form().unwrap();

    assert_eq!(app.store.event(&id).unwrap().calendar_id, "imported");
}
