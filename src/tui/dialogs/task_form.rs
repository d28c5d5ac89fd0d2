use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use calshell::{
    app::AppState,
    calendar::TaskStatus,
    form::{FormFields, TaskField},
};
use crate::tui::dialogs::centered;

pub fn render(f: &mut Frame, app: &AppState) {
    let Some(form) = &app.task_form else {
        return;
    };

    let form_area = centered(f.size(), 64, if form.all_day { 13 } else { 14 });
    f.render_widget(Clear, form_area);

    let label = |field: TaskField, text: &'static str| {
        let color = if form.active_field == field { app.theme.selected_bg } else { app.theme.inactive_day };
        Span::styled(text, Style::default().fg(color))
    };

    let form_title = if form.is_editing() { "Edit Task" } else { "Create New Task" };

    let mut form_text = vec![
        Line::from(vec![Span::styled(form_title, Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD))]),
        Line::from(""),
        Line::from(vec![label(TaskField::Title, "Title:   "), Span::raw(form.title.as_str())]),
        Line::from(""),
        Line::from(vec![label(TaskField::Date, "Date:    "), Span::raw(form.date.as_str())]),
    ];
    if !form.all_day {
        form_text.push(Line::from(vec![label(TaskField::Time, "Time:    "), Span::raw(form.time.as_str())]));
    }

    let status_style = match form.status {
        TaskStatus::Done => Style::default().fg(app.theme.task_done),
        TaskStatus::Pending => Style::default().fg(app.theme.task),
    };

    form_text.extend(vec![
        Line::from(""),
        Line::from(vec![label(TaskField::AllDay, "All day: "), Span::raw(if form.all_day { "[x]" } else { "[ ]" })]),
        Line::from(vec![label(TaskField::Status, "Status:  "), Span::styled(form.status.label(), status_style)]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Tab", Style::default().fg(app.theme.title)),
            Span::raw(" = Next | "),
            Span::styled("Space", Style::default().fg(app.theme.title)),
            Span::raw(" = Toggle | "),
            Span::styled("Enter", Style::default().fg(app.theme.success)),
            Span::raw(" = Save | "),
            Span::styled("Esc", Style::default().fg(app.theme.error)),
            Span::raw(" = Cancel"),
        ]),
    ]);

    let block_title = if form.is_editing() { " Edit Task " } else { " New Task " };

    let form_paragraph = Paragraph::new(form_text)
        .block(Block::default().borders(Borders::ALL).title(block_title))
        .alignment(Alignment::Left);

    f.render_widget(form_paragraph, form_area);
}
