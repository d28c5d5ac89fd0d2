use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use calshell::{app::AppState, ui::agenda::EntryBlock};
use crate::tui::calendar_views::{entry_marker, entry_style};

/// Entries on the anchor date with the selection cursor.
pub fn render(f: &mut Frame, app: &AppState, area: ratatui::layout::Rect) {
    let date = app.anchor();
    let items = app.agenda_for(date);

    let title = format!("{}", date.format("%a %B %-d, %Y"));

    let mut lines = vec![
        Line::from(vec![
            Span::styled(title, Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD)),
        ]),
        Line::from(""),
    ];

    if items.is_empty() {
        lines.push(Line::from(vec![
            Span::styled("Nothing scheduled", Style::default().fg(app.theme.inactive_day)),
        ]));
    } else {
        for (idx, item) in items.iter().enumerate() {
            let entry = EntryBlock::from_item(item, date, &app.store);
            let is_selected = idx == app.selected_index;

            let (time_style, title_style) = if is_selected {
                let selected = Style::default().bg(app.theme.selected_bg).fg(app.theme.selected_fg).add_modifier(Modifier::BOLD);
                (selected, selected)
            } else {
                (Style::default().fg(app.theme.today), entry_style(app, &entry))
            };

            let cursor = if is_selected { ">" } else { " " };

            lines.push(Line::from(vec![
                Span::styled(cursor, Style::default().fg(app.theme.selected_bg)),
                Span::styled(format!("{:<12}", entry.time_label), time_style),
                Span::styled(format!("{} {}", entry_marker(&entry), entry.title), title_style),
            ]));

            if let Some(calendar) = app.calendar_for_item(item) {
                lines.push(Line::from(vec![
                    Span::raw("             "),
                    Span::styled(calendar.name.clone(), Style::default().fg(app.theme.inactive_day)),
                ]));
            }
        }

        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("Tab", Style::default().fg(app.theme.title)),
            Span::raw(" = Next | "),
            Span::styled("e", Style::default().fg(app.theme.success)),
            Span::raw(" = Edit | "),
            Span::styled("x", Style::default().fg(app.theme.error)),
            Span::raw(" = Delete"),
        ]));
    }

    let content = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Agenda "));
    f.render_widget(content, area);
}
