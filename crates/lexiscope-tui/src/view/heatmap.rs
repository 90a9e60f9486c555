use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::App;
use crate::view::{LOAD_ERROR_MSG, NO_DATA_MSG, centered_message, chart_block, format_count, truncate};

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const LABEL_WIDTH: usize = 14;
const CELL_WIDTH: usize = 3; // two block chars + one gap

/// Category x calendar-month heatmap of total word frequency.
pub fn render(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let title = format!(" Word Usage Heatmap ({} \u{00d7} Month) ", app.dimension.label());
    let block = chart_block(theme, title);
    let inner = block.inner(area);
    f.render_widget(block, area);

    if app.load_error.is_some() {
        centered_message(f, inner, theme, LOAD_ERROR_MSG);
        return;
    }
    let Some(heatmap) = &app.charts.heatmap else {
        centered_message(f, inner, theme, NO_DATA_MSG);
        return;
    };
    if inner.height < 2 {
        return;
    }

    let mut lines: Vec<Line> = Vec::with_capacity(inner.height as usize);

    // Month header row.
    let mut header = vec![Span::raw(" ".repeat(LABEL_WIDTH + 1))];
    for month in MONTHS {
        header.push(Span::styled(
            format!("{month:<width$}", width = CELL_WIDTH),
            Style::default().fg(theme.dim),
        ));
    }
    lines.push(Line::from(header));

    // One row per category, as many as fit.
    let rows_available = inner.height as usize - 1;
    let shown = if heatmap.categories.len() > rows_available {
        rows_available.saturating_sub(1)
    } else {
        heatmap.categories.len()
    };
    for (category, cells) in heatmap.categories.iter().zip(&heatmap.cells).take(shown) {
        let mut spans = vec![Span::styled(
            format!("{:<width$} ", truncate(category, LABEL_WIDTH), width = LABEL_WIDTH),
            Style::default().fg(theme.text),
        )];
        for &value in cells {
            spans.push(Span::styled(
                "\u{2588}\u{2588} ",
                Style::default().fg(theme.heat_color(value, heatmap.max)),
            ));
        }
        lines.push(Line::from(spans));
    }
    if heatmap.categories.len() > shown {
        lines.push(Line::from(Span::styled(
            format!(
                "\u{2026} +{} more (max cell {})",
                heatmap.categories.len() - shown,
                format_count(heatmap.max)
            ),
            Style::default().fg(theme.dim),
        )));
    }

    f.render_widget(Paragraph::new(lines), inner);
}
