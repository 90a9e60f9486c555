use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::app::App;
use crate::view::{stacked, timeseries, top_words};

/// Trends tab: time series on top, top words and the stacked chart below.
pub fn render_in(f: &mut Frame, app: &mut App, area: Rect) {
    let rows = Layout::vertical([Constraint::Percentage(50), Constraint::Percentage(50)]).split(area);
    let bottom =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).split(rows[1]);

    timeseries::render(f, app, rows[0]);
    top_words::render(f, app, bottom[0]);
    stacked::render(f, app, bottom[1]);
}
