use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use calshell::{app::AppState, ui::theme::Theme};
use crate::tui::dialogs::centered;

pub fn render(f: &mut Frame, app: &AppState) {
    let help_height = 23;
    let help_area = centered(f.size(), 62, help_height);

    f.render_widget(Clear, help_area);

    let section = |name: &'static str| {
        Line::from(vec![Span::styled(name, Style::default().fg(app.theme.help_section))])
    };

    let help_text = vec![
        Line::from(vec![Span::styled("calshell Help", Style::default().fg(app.theme.help_title).add_modifier(Modifier::BOLD))]),
        Line::from(""),
        section("Navigation:"),
        Line::from("  [ / ]    - Previous/next day, week or month"),
        Line::from("  t        - Jump to today"),
        Line::from("  h/l      - Previous/next day"),
        Line::from("  j/k      - Next/previous week"),
        Line::from(""),
        section("Views:"),
        Line::from("  d/w/m    - Day/Week/Month view"),
        Line::from(""),
        section("Events and Tasks:"),
        Line::from("  a        - New entry at the default hour"),
        Line::from("  A        - New all-day entry"),
        Line::from("  v        - Visual mode (select a date range)"),
        Line::from("  Tab      - Select next entry of the day"),
        Line::from("  Enter/e  - Edit selected entry"),
        Line::from("  x        - Delete selected entry"),
        Line::from("  Space    - Mark selected task done/pending"),
        Line::from(""),
        section("Calendars:"),
        Line::from("  1-9      - Show/hide calendar"),
        Line::from("  T        - Show/hide tasks"),
        Line::from(""),
        section("Dialogs:"),
        Line::from("  e / t    - Pick event or task in the chooser"),
        Line::from("  Tab      - Next field (Shift-Tab: previous)"),
        Line::from("  Space    - Toggle all-day, status or calendar"),
        Line::from("  Enter    - Save"),
        Line::from("  Esc      - Cancel"),
        Line::from("  Ctrl-d   - Delete the entry being edited"),
        Line::from(""),
        section("Commands:"),
        Line::from("  :q             - Quit"),
        Line::from("  :goto DATE     - Jump to date (:goto 2025-12-25)"),
        Line::from("  :today         - Jump to today"),
        Line::from("  :view MODE     - day, week or month"),
        Line::from("  :new [title]   - New event"),
        Line::from("  :task [title]  - New task"),
        Line::from("  :cal add NAME [#rrggbb]"),
        Line::from("  :cal toggle NAME"),
        Line::from(format!("  :theme NAME    - {}", Theme::available_themes().join(", "))),
        Line::from("  :help          - Show this help"),
        Line::from(""),
    ];

    let visible_lines = help_height.saturating_sub(3) as usize;
    let total_lines = help_text.len();
    let max_scroll = total_lines.saturating_sub(visible_lines);
    let scroll = app.help_scroll.min(max_scroll);

    let scrolled_text: Vec<Line> = help_text
        .into_iter()
        .skip(scroll)
        .take(visible_lines)
        .collect();

    let help_paragraph = Paragraph::new(scrolled_text)
        .block(Block::default()
            .borders(Borders::ALL)
            .title(format!(" Help (j/k to scroll, q to close) [{}/{}] ", scroll + 1, total_lines)))
        .alignment(Alignment::Left);

    f.render_widget(help_paragraph, help_area);
}
