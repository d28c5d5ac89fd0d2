use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use chrono::Datelike;
use calshell::{
    app::AppState,
    ui::week_view,
};
use crate::tui::calendar_views::{entry_marker, entry_style};

const COLUMN_WIDTH: usize = 12;

pub fn render(f: &mut Frame, app: &AppState, area: ratatui::layout::Rect) {
    let layout = week_view::calculate_layout(app);

    let mut lines = vec![
        Line::from(vec![
            Span::styled(app.title(), Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD)),
        ]),
        Line::from(""),
    ];

    let mut header_spans = vec![Span::raw("      ")];

    for day in &layout.days {
        let day_str = format!("{:<width$}", format!("{} {}", day.date.format("%a"), day.date.day()), width = COLUMN_WIDTH);

        let style = if app.is_date_in_visual_selection(day.date) {
            Style::default().bg(app.theme.inactive_day).fg(app.theme.selected_fg).add_modifier(Modifier::BOLD)
        } else if day.is_selected {
            Style::default().bg(app.theme.selected_bg).fg(app.theme.selected_fg)
        } else if day.is_today {
            Style::default().fg(app.theme.today).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.weekday_header)
        };

        header_spans.push(Span::styled(day_str, style));
    }

    lines.push(Line::from(header_spans));

    let all_day_rows = layout.days.iter().map(|d| d.all_day.len()).max().unwrap_or(0);
    for row in 0..all_day_rows {
        let label = if row == 0 { "all-d " } else { "      " };
        let mut spans = vec![Span::styled(label, Style::default().fg(app.theme.inactive_day))];
        for day in &layout.days {
            spans.push(cell_span(app, day.all_day.get(row)));
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(""));

    for hour in 6..22 {
        let mut line_spans = vec![Span::styled(format!("{:02}:00 ", hour), Style::default().fg(app.theme.inactive_day))];

        for day in &layout.days {
            let entries: Vec<_> = day.slots.iter()
                .filter(|slot| slot.hour == hour)
                .flat_map(|slot| &slot.entries)
                .collect();

            let span = match entries.as_slice() {
                [] => Span::raw(" ".repeat(COLUMN_WIDTH)),
                [single] => cell_span(app, Some(*single)),
                many => Span::styled(format!("{:<width$}", format!("+{} items", many.len()), width = COLUMN_WIDTH),
                    Style::default().fg(app.theme.title)),
            };
            line_spans.push(span);
        }

        lines.push(Line::from(line_spans));
    }

    let content = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(content, area);
}

fn cell_span<'a>(app: &AppState, entry: Option<&calshell::ui::agenda::EntryBlock>) -> Span<'a> {
    let Some(entry) = entry else {
        return Span::raw(" ".repeat(COLUMN_WIDTH));
    };
    let text: String = format!("{} {}", entry_marker(entry), entry.title)
        .chars()
        .take(COLUMN_WIDTH - 1)
        .collect();
    Span::styled(format!("{:<width$}", text, width = COLUMN_WIDTH), entry_style(app, entry))
}
