use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::app::App;
use crate::view::{complexity, heatmap, histogram, totals};

/// Summary tab: the four category-scoped charts in a 2x2 grid.
pub fn render_in(f: &mut Frame, app: &mut App, area: Rect) {
    let rows = Layout::vertical([Constraint::Percentage(50), Constraint::Percentage(50)]).split(area);
    let top = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).split(rows[0]);
    let bottom =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).split(rows[1]);

    totals::render(f, app, top[0]);
    complexity::render(f, app, top[1]);
    histogram::render(f, app, bottom[0]);
    heatmap::render(f, app, bottom[1]);
}
