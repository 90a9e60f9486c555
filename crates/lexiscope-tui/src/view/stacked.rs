use chrono::NaiveDate;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::symbols;
use ratatui::text::Span;
use ratatui::widgets::{Axis, Chart, Dataset, GraphType};

use crate::app::App;
use crate::view::{LOAD_ERROR_MSG, NO_DATA_MSG, centered_message, chart_block, format_count};

/// Stacked cumulative frequency of the selected words over version dates.
/// Each line is the running total through that word in selection order.
pub fn render(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let block = chart_block(theme, " Stacked Word Frequency ".to_string());
    let inner = block.inner(area);
    f.render_widget(block, area);

    if app.load_error.is_some() {
        centered_message(f, inner, theme, LOAD_ERROR_MSG);
        return;
    }
    let Some(layers) = &app.charts.stacked else {
        centered_message(f, inner, theme, NO_DATA_MSG);
        return;
    };
    let Some(first_layer) = layers.first() else {
        centered_message(f, inner, theme, NO_DATA_MSG);
        return;
    };
    let dates: Vec<NaiveDate> = first_layer.upper.iter().map(|(date, _)| *date).collect();
    let (Some(&min_date), Some(&max_date)) = (dates.iter().min(), dates.iter().max()) else {
        centered_message(f, inner, theme, NO_DATA_MSG);
        return;
    };
    let span_days = ((max_date - min_date).num_days() as f64).max(1.0);

    // The last layer carries the full running total, so it bounds the y axis.
    let y_max = layers
        .last()
        .map(|layer| layer.upper.iter().map(|(_, total)| *total).max().unwrap_or(0))
        .unwrap_or(0) as f64;
    let y_bound = (y_max * 1.1).max(1.0);

    let points: Vec<Vec<(f64, f64)>> = layers
        .iter()
        .map(|layer| {
            layer
                .upper
                .iter()
                .map(|(date, total)| ((*date - min_date).num_days() as f64, *total as f64))
                .collect()
        })
        .collect();

    let datasets: Vec<Dataset> = layers
        .iter()
        .zip(&points)
        .enumerate()
        .map(|(i, (layer, data))| {
            Dataset::default()
                .name(layer.word.clone())
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(theme.series_color(i)))
                .data(data)
        })
        .collect();

    let chart = Chart::new(datasets)
        .x_axis(
            Axis::default()
                .title("Version Date")
                .style(Style::default().fg(theme.dim))
                .labels(vec![
                    Span::raw(min_date.format("%b %y").to_string()),
                    Span::raw(max_date.format("%b %y").to_string()),
                ])
                .bounds([0.0, span_days]),
        )
        .y_axis(
            Axis::default()
                .title("Total (stacked)")
                .style(Style::default().fg(theme.dim))
                .labels(vec![
                    Span::raw("0"),
                    Span::raw(format_count((y_bound / 2.0) as u64)),
                    Span::raw(format_count(y_bound as u64)),
                ])
                .bounds([0.0, y_bound]),
        );
    f.render_widget(chart, inner);
}
