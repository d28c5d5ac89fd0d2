use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use calshell::app::AppState;
use crate::tui::dialogs::centered;

pub fn render(f: &mut Frame, app: &AppState) {
    let Some(pending) = &app.pending_delete else {
        return;
    };

    let dialog_area = centered(f.size(), 60, 10);
    f.render_widget(Clear, dialog_area);

    let heading = format!("Delete {}?", pending.kind);

    let dialog_text = vec![
        Line::from(vec![Span::styled(heading, Style::default().fg(app.theme.error).add_modifier(Modifier::BOLD))]),
        Line::from(""),
        Line::from(vec![
            Span::raw("Are you sure you want to delete "),
            Span::styled(pending.title.as_str(), Style::default().fg(app.theme.weekday_header).add_modifier(Modifier::BOLD)),
            Span::raw("?"),
        ]),
        Line::from(""),
        Line::from("This action cannot be undone."),
        Line::from(""),
        Line::from(vec![
            Span::styled("Y", Style::default().fg(app.theme.success)),
            Span::raw(" = Yes, delete | "),
            Span::styled("N", Style::default().fg(app.theme.error)),
            Span::raw(" = No, cancel"),
        ]),
    ];

    let dialog_paragraph = Paragraph::new(dialog_text)
        .block(Block::default()
            .borders(Borders::ALL)
            .title(" Confirm Delete "))
        .alignment(Alignment::Center);

    f.render_widget(dialog_paragraph, dialog_area);
}
