use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::app::App;

const BINDINGS: &[(&str, &str)] = &[
    ("j/k, \u{2191}/\u{2193}", "move cursor"),
    ("g/G, Home/End", "jump to top / bottom"),
    ("Ctrl+d / Ctrl+u", "page down / up"),
    ("Space, Enter", "toggle selection under cursor"),
    ("Tab", "switch between category and word lists"),
    ("/", "type into the focused list's filter"),
    ("1 / 2, t", "Summary / Trends tab"),
    ("d", "swap grouping dimension"),
    ("r", "reset selections and filters"),
    ("mouse", "click list rows and top-word bars"),
    ("?", "toggle this help"),
    ("q, Ctrl+C", "quit"),
];

/// Modal keybinding reference, centered over the dashboard.
pub fn render_overlay(f: &mut Frame, app: &App) {
    let theme = &app.theme;
    let width = 52u16.min(f.area().width);
    let height = (BINDINGS.len() as u16 + 2).min(f.area().height);
    let area = Rect {
        x: (f.area().width.saturating_sub(width)) / 2,
        y: (f.area().height.saturating_sub(height)) / 2,
        width,
        height,
    };
    f.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent))
        .title(" Help ");
    let lines: Vec<Line> = BINDINGS
        .iter()
        .map(|(keys, what)| {
            Line::from(vec![
                Span::styled(format!(" {keys:<16}"), Style::default().fg(theme.accent)),
                Span::styled(*what, Style::default().fg(theme.text)),
            ])
        })
        .collect();
    f.render_widget(Paragraph::new(lines).block(block), area);
}
