use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use calshell::{app::AppState, create_flow::EntityKind};
use crate::tui::dialogs::centered;

pub fn render(f: &mut Frame, app: &AppState) {
    let Some(highlighted) = app.flow.highlighted() else {
        return;
    };

    let dialog_area = centered(f.size(), 40, 7);
    f.render_widget(Clear, dialog_area);

    let option = |kind: EntityKind, key: &'static str| {
        let style = if kind == highlighted {
            Style::default().bg(app.theme.selected_bg).fg(app.theme.selected_fg).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.status_bar)
        };
        Span::styled(format!(" [{}] {} ", key, kind.label()), style)
    };

    let dialog_text = vec![
        Line::from(vec![Span::styled("What do you want to create?", Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD))]),
        Line::from(""),
        Line::from(vec![option(EntityKind::Event, "e"), Span::raw("   "), option(EntityKind::Task, "t")]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Tab", Style::default().fg(app.theme.title)),
            Span::raw(" = Switch | "),
            Span::styled("Esc", Style::default().fg(app.theme.error)),
            Span::raw(" = Cancel"),
        ]),
    ];

    let dialog_paragraph = Paragraph::new(dialog_text)
        .block(Block::default().borders(Borders::ALL).title(" New "))
        .alignment(Alignment::Center);

    f.render_widget(dialog_paragraph, dialog_area);
}
