use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use chrono::Datelike;
use calshell::{
    app::{AppState, Mode},
    ui::month_view,
};

pub fn render(f: &mut Frame, app: &AppState, area: ratatui::layout::Rect) {
    let layout = month_view::calculate_layout(app);

    let mut lines = vec![
        Line::from(vec![
            Span::styled(app.title(), Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD)),
        ]),
        Line::from(""),
        Line::from(
            layout.weekdays.iter()
                .map(|w| Span::styled(format!(" {:<7}", w.to_string()), Style::default().fg(app.theme.weekday_header)))
                .collect::<Vec<_>>(),
        ),
    ];

    for week in &layout.weeks {
        let mut day_spans = Vec::new();
        let mut count_spans = Vec::new();

        for day_cell in &week.days {
            let mut style = Style::default();

            if !day_cell.is_current_month {
                style = style.fg(app.theme.inactive_day);
            } else if app.is_date_in_visual_selection(day_cell.date) {
                style = style.bg(app.theme.inactive_day).fg(app.theme.selected_fg).add_modifier(Modifier::BOLD);
            } else if day_cell.is_selected {
                style = style.bg(app.theme.selected_bg).fg(app.theme.selected_fg).add_modifier(Modifier::BOLD);
            } else if day_cell.is_today {
                style = style.fg(app.theme.today).add_modifier(Modifier::BOLD);
            }

            day_spans.push(Span::styled(format!(" {:>2}     ", day_cell.date.day()), style));

            let counts = match (day_cell.event_count, day_cell.task_count) {
                (0, 0) => "        ".to_string(),
                (e, 0) => format!(" {:<7}", format!("{}ev", e)),
                (0, t) => format!(" {:<7}", format!("{}tk", t)),
                (e, t) => format!(" {:<7}", format!("{}ev {}tk", e, t)),
            };
            count_spans.push(Span::styled(counts, Style::default().fg(app.theme.task)));
        }

        lines.push(Line::from(day_spans));
        lines.push(Line::from(count_spans));
    }

    lines.push(Line::from(""));

    if app.mode == Mode::Visual {
        if let Some((start, end)) = app.visual_selection_range() {
            let days = (end - start).num_days() + 1;
            lines.push(Line::from(vec![
                Span::styled("VISUAL ", Style::default().fg(app.theme.task).add_modifier(Modifier::BOLD)),
                Span::styled(format!("({} day{})", days, if days == 1 { "" } else { "s" }), Style::default().fg(app.theme.weekday_header)),
                Span::raw(" | "),
                Span::styled("Enter", Style::default().fg(app.theme.success)),
                Span::raw(" = Create | "),
                Span::styled("Esc", Style::default().fg(app.theme.error)),
                Span::raw(" = Cancel"),
            ]));
        }
    } else {
        lines.push(Line::from(vec![
            Span::styled("[ ]", Style::default().fg(app.theme.title)),
            Span::raw(" = Prev/next month | "),
            Span::styled("a/A", Style::default().fg(app.theme.success)),
            Span::raw(" = Create | "),
            Span::styled("v", Style::default().fg(app.theme.task)),
            Span::raw(" = Visual | "),
            Span::styled("d/w/m", Style::default().fg(app.theme.title)),
            Span::raw(" = Views"),
        ]));
    }

    let content = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(content, area);
}
