pub mod complexity;
pub mod filters;
pub mod heatmap;
pub mod help;
pub mod histogram;
pub mod loading;
pub mod stacked;
pub mod summary;
pub mod timeseries;
pub mod top_words;
pub mod totals;
pub mod trends;

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use lexiscope_core::Dimension;

use crate::theme::Theme;

/// Placeholder shown when an aggregate has no data to draw.
pub const NO_DATA_MSG: &str = "No data to display for selected options.";

/// Placeholder shown in every chart after a terminal load failure.
pub const LOAD_ERROR_MSG: &str = "Error loading data. See the log file.";

/// Spinner frames for animated progress indication.
const SPINNER_FRAMES: &[char] = &[
    '\u{280B}', '\u{2819}', '\u{2839}', '\u{2838}', '\u{283C}', '\u{2834}', '\u{2826}', '\u{2827}',
    '\u{2807}', '\u{280F}',
];

/// Get the current spinner character based on a tick counter.
pub fn spinner_char(tick: usize) -> char {
    SPINNER_FRAMES[tick % SPINNER_FRAMES.len()]
}

/// Truncate a string to fit in `max_width` columns, appending "\u{2026}" if truncated.
pub fn truncate(s: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if s.chars().count() <= max_width {
        return s.to_string();
    }
    let mut truncated: String = s.chars().take(max_width.saturating_sub(1)).collect();
    truncated.push('\u{2026}');
    truncated
}

/// Compact count formatting for value labels: 950, 1.2k, 3.4M.
pub fn format_count(n: u64) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}k", n as f64 / 1_000.0)
    } else {
        format!("{n}")
    }
}

/// Plural display name for the grouping dimension ("Titles" / "Agencies").
pub fn dimension_plural(dimension: Dimension) -> &'static str {
    match dimension {
        Dimension::Title => "Titles",
        Dimension::Agency => "Agencies",
    }
}

/// Display name for a category list entry (maps the `"all"` sentinel).
pub fn category_display(value: &str, dimension: Dimension) -> String {
    if value == lexiscope_core::ALL_CATEGORIES {
        format!("All {}", dimension_plural(dimension))
    } else {
        value.to_string()
    }
}

/// Standard bordered chart container.
pub fn chart_block<'a>(theme: &Theme, title: String) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style())
        .title(title)
}

/// Render a dim, centered message inside an (already bordered) area.
pub fn centered_message(f: &mut Frame, inner: Rect, theme: &Theme, message: &str) {
    if inner.height == 0 {
        return;
    }
    let pad = inner.height.saturating_sub(1) / 2;
    let area = Rect {
        x: inner.x,
        y: inner.y + pad,
        width: inner.width,
        height: inner.height - pad,
    };
    let text = Paragraph::new(message)
        .style(theme.placeholder_style())
        .alignment(Alignment::Center);
    f.render_widget(text, area);
}

/// One row of a label + proportional bar + value readout.
pub struct HBar {
    pub label: String,
    pub value_text: String,
    /// Fill fraction relative to the row maximum, in `[0, 1]`.
    pub ratio: f64,
    pub color: Color,
    pub selected: bool,
}

/// Render horizontal bars one per row; excess rows collapse into a
/// trailing "+N more" line.
pub fn render_hbars(f: &mut Frame, inner: Rect, theme: &Theme, bars: &[HBar]) {
    if inner.height == 0 || inner.width < 10 {
        return;
    }
    let rows = inner.height as usize;
    let shown = if bars.len() > rows { rows - 1 } else { bars.len() };

    let label_width = (inner.width as usize / 3).clamp(6, 24);
    let value_width = bars
        .iter()
        .take(shown)
        .map(|b| b.value_text.len())
        .max()
        .unwrap_or(0);
    let bar_width = (inner.width as usize).saturating_sub(label_width + value_width + 3);

    let mut lines: Vec<Line> = Vec::with_capacity(rows);
    for bar in bars.iter().take(shown) {
        let filled = ((bar.ratio * bar_width as f64) as usize).min(bar_width);
        let label_style = if bar.selected {
            theme.selected_style()
        } else {
            Style::default().fg(theme.text)
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<label_width$} ", truncate(&bar.label, label_width)),
                label_style,
            ),
            Span::styled("\u{2501}".repeat(filled), Style::default().fg(bar.color)),
            Span::raw(" ".repeat(bar_width.saturating_sub(filled) + 1)),
            Span::styled(
                format!("{:>value_width$}", bar.value_text),
                Style::default().fg(theme.dim),
            ),
        ]));
    }
    if bars.len() > shown {
        lines.push(Line::from(Span::styled(
            format!("\u{2026} +{} more", bars.len() - shown),
            Style::default().fg(theme.dim),
        )));
    }

    f.render_widget(Paragraph::new(lines), inner);
}
