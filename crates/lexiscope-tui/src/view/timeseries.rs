use chrono::NaiveDate;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::symbols;
use ratatui::text::Span;
use ratatui::widgets::{Axis, Chart, Dataset, GraphType};

use crate::app::App;
use crate::view::{LOAD_ERROR_MSG, NO_DATA_MSG, centered_message, chart_block, format_count};

/// Frequency over version dates, one line per selected word.
pub fn render(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let block = chart_block(theme, " Word Frequency Over Time ".to_string());
    let inner = block.inner(area);
    f.render_widget(block, area);

    if app.load_error.is_some() {
        centered_message(f, inner, theme, LOAD_ERROR_MSG);
        return;
    }
    let Some(series) = &app.charts.series else {
        centered_message(f, inner, theme, NO_DATA_MSG);
        return;
    };

    let dates: Vec<NaiveDate> = series
        .iter()
        .flat_map(|s| s.points.iter().map(|(date, _)| *date))
        .collect();
    let (Some(&min_date), Some(&max_date)) = (dates.iter().min(), dates.iter().max()) else {
        // Every selected word is absent from the filtered view.
        centered_message(f, inner, theme, NO_DATA_MSG);
        return;
    };

    let span_days = ((max_date - min_date).num_days() as f64).max(1.0);
    let y_max = series
        .iter()
        .flat_map(|s| s.points.iter().map(|(_, count)| *count))
        .max()
        .unwrap_or(0) as f64;
    let y_bound = (y_max * 1.1).max(1.0);

    let points: Vec<Vec<(f64, f64)>> = series
        .iter()
        .map(|s| {
            s.points
                .iter()
                .map(|(date, count)| ((*date - min_date).num_days() as f64, *count as f64))
                .collect()
        })
        .collect();

    let datasets: Vec<Dataset> = series
        .iter()
        .zip(&points)
        .enumerate()
        .map(|(i, (s, data))| {
            Dataset::default()
                .name(s.word.clone())
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(theme.series_color(i)))
                .data(data)
        })
        .collect();

    let mid_date = min_date + chrono::Days::new((span_days / 2.0) as u64);
    let chart = Chart::new(datasets)
        .x_axis(
            Axis::default()
                .title("Version Date")
                .style(Style::default().fg(theme.dim))
                .labels(vec![
                    Span::raw(min_date.format("%b %y").to_string()),
                    Span::raw(mid_date.format("%b %y").to_string()),
                    Span::raw(max_date.format("%b %y").to_string()),
                ])
                .bounds([0.0, span_days]),
        )
        .y_axis(
            Axis::default()
                .title("Frequency")
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
