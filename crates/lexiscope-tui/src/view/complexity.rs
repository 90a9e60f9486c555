use ratatui::Frame;
use ratatui::layout::Rect;

use crate::app::App;
use crate::view::{HBar, LOAD_ERROR_MSG, NO_DATA_MSG, centered_message, chart_block, render_hbars};

/// Frequency-weighted mean word length per category, top 10.
pub fn render(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let title = format!(" Avg Word Length by {} (Top 10) ", app.dimension.label());
    let block = chart_block(theme, title);
    let inner = block.inner(area);
    f.render_widget(block, area);

    if app.load_error.is_some() {
        centered_message(f, inner, theme, LOAD_ERROR_MSG);
        return;
    }
    let Some(means) = &app.charts.mean_lengths else {
        centered_message(f, inner, theme, NO_DATA_MSG);
        return;
    };

    let max = means.iter().map(|(_, mean)| *mean).fold(0.0, f64::max);
    let bars: Vec<HBar> = means
        .iter()
        .map(|(category, mean)| HBar {
            label: category.clone(),
            value_text: format!("{mean:.2}"),
            ratio: if max > 0.0 { mean / max } else { 0.0 },
            color: theme.accent,
            selected: app.filter.category_selected(category),
        })
        .collect();
    render_hbars(f, inner, theme, &bars);
}
