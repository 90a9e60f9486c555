use ratatui::Frame;
use ratatui::layout::Rect;

use crate::app::App;
use crate::view::{HBar, LOAD_ERROR_MSG, NO_DATA_MSG, centered_message, chart_block, format_count, render_hbars};

/// Total word count per category, top 10, as horizontal bars.
pub fn render(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let title = format!(" Total Word Count by {} (Top 10) ", app.dimension.label());
    let block = chart_block(theme, title);
    let inner = block.inner(area);
    f.render_widget(block, area);

    if app.load_error.is_some() {
        centered_message(f, inner, theme, LOAD_ERROR_MSG);
        return;
    }
    let Some(totals) = &app.charts.totals else {
        centered_message(f, inner, theme, NO_DATA_MSG);
        return;
    };

    let max = totals.iter().map(|(_, count)| *count).max().unwrap_or(1);
    let bars: Vec<HBar> = totals
        .iter()
        .map(|(category, count)| HBar {
            label: category.clone(),
            value_text: format_count(*count),
            ratio: *count as f64 / max.max(1) as f64,
            color: theme.bar,
            selected: app.filter.category_selected(category),
        })
        .collect();
    render_hbars(f, inner, theme, &bars);
}
