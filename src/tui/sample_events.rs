use chrono::{Days, NaiveDate, NaiveTime};
use calshell::{
    app::AppState,
    calendar::{EventDraft, TaskDraft, TaskStatus},
};

/// Seeds a Work calendar and a few events and tasks around today.
pub fn add_sample_entries(app: &mut AppState) {
    let today = app.today();

    let Some(tomorrow) = today.succ_opt() else { return };
    let Some(yesterday) = today.pred_opt() else { return };
    let Some(personal) = app.store.default_calendar_id().map(str::to_string) else { return };
    let work = match app.store.calendar_by_name("Work") {
        Some(calendar) => calendar.id.clone(),
        None => app.store.add_calendar("Work", "#e67c73"),
    };

    let events = vec![
        ("Morning Standup", &work, today, (9, 0), (9, 30)),
        ("Team Sync", &work, today, (14, 0), (15, 0)),
        ("Code Review", &work, tomorrow, (10, 0), (11, 0)),
        ("Sprint Planning", &work, tomorrow, (15, 0), (16, 30)),
        ("Dentist", &personal, yesterday, (11, 0), (11, 30)),
        ("Lunch with Sam", &personal, yesterday, (12, 30), (13, 30)),
    ];

    for (title, calendar_id, date, (start_h, start_m), (end_h, end_m)) in events {
        let Some(start) = date.and_hms_opt(start_h, start_m, 0) else { continue };
        let Some(end) = date.and_hms_opt(end_h, end_m, 0) else { continue };
        app.store.add_event(EventDraft {
            title: title.to_string(),
            start,
            end,
            all_day: false,
            calendar_id: calendar_id.clone(),
        });
    }

    if let Some(last) = today.checked_add_days(Days::new(2)) {
        app.store.add_event(EventDraft {
            title: "Offsite".to_string(),
            start: midnight(tomorrow),
            end: midnight(last),
            all_day: true,
            calendar_id: work.clone(),
        });
    }

    let tasks = vec![
        ("Pay rent", today, None, TaskStatus::Pending),
        ("Book flights", today, Some((17, 0)), TaskStatus::Pending),
        ("Renew library books", yesterday, None, TaskStatus::Done),
    ];

    for (title, date, time, status) in tasks {
        let at = time
            .and_then(|(h, m)| NaiveTime::from_hms_opt(h, m, 0))
            .map(|t| date.and_time(t))
            .unwrap_or_else(|| midnight(date));
        app.store.add_task(TaskDraft {
            title: title.to_string(),
            date: at,
            all_day: time.is_none(),
            status,
        });
    }

    tracing::info!("Seeded sample entries around {}", today);
}

fn midnight(date: NaiveDate) -> chrono::NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}
