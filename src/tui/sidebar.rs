use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use chrono::Datelike;
use calshell::{
    app::AppState,
    ui::{month_view, theme::calendar_color},
};

/// Mini month of the anchor, the calendar list and the tasks toggle.
pub fn render(f: &mut Frame, app: &AppState, area: ratatui::layout::Rect) {
    let layout = month_view::calculate_layout(app);

    let mut lines = vec![
        Line::from(vec![
            Span::styled(app.anchor().format("%B %Y").to_string(),
                Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD)),
        ]),
        Line::from(
            layout.weekdays.iter()
                .map(|w| Span::styled(format!("{:>3}", &w.to_string()[..2]), Style::default().fg(app.theme.weekday_header)))
                .collect::<Vec<_>>(),
        ),
    ];

    for week in &layout.weeks {
        let spans: Vec<Span> = week.days.iter()
            .map(|cell| {
                let mut style = Style::default();
                if !cell.is_current_month {
                    style = style.fg(app.theme.inactive_day);
                } else if cell.is_selected {
                    style = style.bg(app.theme.selected_bg).fg(app.theme.selected_fg);
                } else if cell.is_today {
                    style = style.fg(app.theme.today).add_modifier(Modifier::BOLD);
                }
                if cell.has_entries() {
                    style = style.add_modifier(Modifier::UNDERLINED);
                }
                Span::styled(format!("{:>3}", cell.date.day()), style)
            })
            .collect();
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Calendars", Style::default().fg(app.theme.help_section).add_modifier(Modifier::BOLD)),
    ]));

    for (idx, calendar) in app.store.calendars().iter().enumerate() {
        let marker = if calendar.visible { "[x]" } else { "[ ]" };
        let number = if idx < 9 { format!("{}", idx + 1) } else { " ".to_string() };
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", number), Style::default().fg(app.theme.inactive_day)),
            Span::styled(marker, Style::default().fg(calendar_color(calendar.rgb()))),
            Span::raw(" "),
            Span::raw(calendar.name.clone()),
        ]));
    }

    lines.push(Line::from(""));
    let tasks_marker = if app.show_tasks { "[x]" } else { "[ ]" };
    lines.push(Line::from(vec![
        Span::styled("T ", Style::default().fg(app.theme.inactive_day)),
        Span::styled(tasks_marker, Style::default().fg(app.theme.task)),
        Span::raw(" Tasks"),
    ]));

    let content = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(content, area);
}
