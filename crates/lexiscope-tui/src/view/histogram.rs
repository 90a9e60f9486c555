use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Bar, BarChart, BarGroup};

use crate::app::App;
use crate::view::{LOAD_ERROR_MSG, NO_DATA_MSG, centered_message, chart_block, format_count};

/// Word length distribution: 20 unit-width bins over `[0, 20)`, weighted
/// by occurrence count.
pub fn render(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let block = chart_block(theme, " Word Length Distribution ".to_string());
    let inner = block.inner(area);
    f.render_widget(block, area);

    if app.load_error.is_some() {
        centered_message(f, inner, theme, LOAD_ERROR_MSG);
        return;
    }
    let Some(bins) = &app.charts.histogram else {
        centered_message(f, inner, theme, NO_DATA_MSG);
        return;
    };

    let bars: Vec<Bar> = bins
        .iter()
        .enumerate()
        .map(|(length, &count)| {
            Bar::default()
                .label(format!("{length}").into())
                .value(count)
                .text_value(format_count(count))
                .style(Style::default().fg(theme.bar))
                .value_style(Style::default().fg(theme.header_fg).bg(theme.bar))
        })
        .collect();

    let chart = BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .bar_width(2)
        .bar_gap(1);
    f.render_widget(chart, inner);
}
