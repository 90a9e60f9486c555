use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::App;
use crate::view::spinner_char;

/// Full-body loading screen shown until the dataset arrives.
pub fn render_in(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let elapsed = app.elapsed();
    let elapsed_str = format!("{}:{:02}", elapsed.as_secs() / 60, elapsed.as_secs() % 60);

    let lines = vec![
        Line::from(Span::styled(
            format!("{} Loading {}\u{2026}", spinner_char(app.tick), app.source_label),
            Style::default()
                .fg(theme.spinner)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(elapsed_str, Style::default().fg(theme.dim))),
        Line::raw(""),
        Line::from(Span::styled("q to quit", Style::default().fg(theme.dim))),
    ];

    let pad = area.height.saturating_sub(lines.len() as u16) / 2;
    let centered = Rect {
        y: area.y + pad,
        height: area.height - pad,
        ..area
    };
    f.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        centered,
    );
}
