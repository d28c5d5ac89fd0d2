use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use calshell::{
    app::AppState,
    form::{EventField, FormFields},
    ui::theme::calendar_color,
};
use crate::tui::dialogs::centered;

pub fn render(f: &mut Frame, app: &AppState) {
    let Some(form) = &app.event_form else {
        return;
    };

    let form_height = if form.all_day { 15 } else { 19 };
    let form_area = centered(f.size(), 64, form_height);

    f.render_widget(Clear, form_area);

    let label = |field: EventField, text: &'static str| {
        let color = if form.active_field == field { app.theme.selected_bg } else { app.theme.inactive_day };
        Span::styled(text, Style::default().fg(color))
    };

    let form_title = if form.is_editing() { "Edit Event" } else { "Create New Event" };
    let calendars = app.store.calendars();
    let calendar_rgb = form.calendar(calendars).and_then(|c| c.rgb());

    let mut form_text = vec![
        Line::from(vec![Span::styled(form_title, Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD))]),
        Line::from(""),
        Line::from(vec![label(EventField::Title, "Title:      "), Span::raw(form.title.as_str())]),
        Line::from(""),
        Line::from(vec![label(EventField::StartDate, "Start date: "), Span::raw(form.start_date.as_str())]),
    ];

    if !form.all_day {
        form_text.push(Line::from(vec![label(EventField::StartTime, "Start time: "), Span::raw(form.start_time.as_str())]));
    }
    form_text.push(Line::from(vec![label(EventField::EndDate, "End date:   "), Span::raw(form.end_date.as_str())]));
    if !form.all_day {
        form_text.push(Line::from(vec![label(EventField::EndTime, "End time:   "), Span::raw(form.end_time.as_str())]));
    }

    form_text.extend(vec![
        Line::from(""),
        Line::from(vec![
            label(EventField::AllDay, "All day:    "),
            Span::raw(if form.all_day { "[x]" } else { "[ ]" }),
        ]),
        Line::from(vec![
            label(EventField::Calendar, "Calendar:   "),
            Span::styled(form.calendar_name(calendars), Style::default().fg(calendar_color(calendar_rgb))),
        ]),
        Line::from(""),
    ]);

    let mut hints = vec![
        Span::styled("Tab", Style::default().fg(app.theme.title)),
        Span::raw(" = Next | "),
        Span::styled("Space", Style::default().fg(app.theme.title)),
        Span::raw(" = Toggle | "),
        Span::styled("Enter", Style::default().fg(app.theme.success)),
        Span::raw(" = Save | "),
        Span::styled("Esc", Style::default().fg(app.theme.error)),
        Span::raw(" = Cancel"),
    ];
    if form.is_editing() {
        hints.push(Span::raw(" | "));
        hints.push(Span::styled("^D", Style::default().fg(app.theme.error)));
        hints.push(Span::raw(" = Delete"));
    }
    form_text.push(Line::from(hints));

    let block_title = if form.is_editing() { " Edit Event " } else { " New Event " };

    let form_paragraph = Paragraph::new(form_text)
        .block(Block::default().borders(Borders::ALL).title(block_title))
        .alignment(Alignment::Left);

    f.render_widget(form_paragraph, form_area);
}
