use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use calshell::{
    app::AppState,
    ui::day_view,
};
use crate::tui::calendar_views::{entry_marker, entry_style};

pub fn render(f: &mut Frame, app: &AppState, area: ratatui::layout::Rect) {
    let layout = day_view::calculate_layout(app);

    let title_style = if layout.is_today {
        Style::default().fg(app.theme.today).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD)
    };

    let mut lines = vec![
        Line::from(vec![Span::styled(app.title(), title_style)]),
        Line::from(""),
    ];

    for entry in &layout.all_day {
        lines.push(Line::from(vec![
            Span::styled("All day ", Style::default().fg(app.theme.weekday_header)),
            Span::styled(format!("{} {}", entry_marker(entry), entry.title), entry_style(app, entry)),
        ]));
    }
    if !layout.all_day.is_empty() {
        lines.push(Line::from(""));
    }

    for hour_block in &layout.hours {
        if hour_block.entries.is_empty() {
            continue;
        }
        lines.push(Line::from(vec![
            Span::styled(format!("{:02}:00", hour_block.hour),
                Style::default().fg(app.theme.weekday_header).add_modifier(Modifier::BOLD)),
        ]));

        for entry in &hour_block.entries {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<12}", entry.time_label), Style::default().fg(app.theme.today)),
                Span::styled(format!("{} {}", entry_marker(entry), entry.title), entry_style(app, entry)),
            ]));
        }

        lines.push(Line::from(""));
    }

    if lines.len() == 2 {
        lines.push(Line::from(vec![
            Span::styled("Nothing scheduled", Style::default().fg(app.theme.inactive_day)),
        ]));
    }

    let content = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(content, area);
}
