use ratatui::Frame;
use ratatui::layout::Rect;

use crate::app::App;
use crate::view::{HBar, LOAD_ERROR_MSG, NO_DATA_MSG, centered_message, chart_block, format_count, render_hbars};

/// Top 20 words by total frequency across the filtered view.
///
/// Selected words are highlighted in their series color; clicking a
/// selected word's row removes it from the selection.
pub fn render(f: &mut Frame, app: &mut App, area: Rect) {
    let theme = &app.theme;
    let block = chart_block(theme, " Top 20 Words ".to_string());
    let inner = block.inner(area);
    f.render_widget(block, area);
    app.top_words_hit = None;

    if app.load_error.is_some() {
        centered_message(f, inner, theme, LOAD_ERROR_MSG);
        return;
    }
    let Some(ranked) = &app.charts.top_words else {
        centered_message(f, inner, theme, NO_DATA_MSG);
        return;
    };

    let max = ranked.iter().map(|(_, count)| *count).max().unwrap_or(1);
    let selected_words = app.filter.selected_words();
    let bars: Vec<HBar> = ranked
        .iter()
        .map(|(word, count)| {
            let selection_slot = selected_words.iter().position(|w| w == word);
            HBar {
                label: word.clone(),
                value_text: format_count(*count),
                ratio: *count as f64 / max.max(1) as f64,
                color: selection_slot
                    .map(|i| theme.series_color(i))
                    .unwrap_or(theme.bar),
                selected: selection_slot.is_some(),
            }
        })
        .collect();
    render_hbars(f, inner, theme, &bars);

    // Row -> word mapping for mouse clicks.
    let visible = (inner.height as usize).min(ranked.len());
    app.top_words_hit = Some((
        inner,
        ranked.iter().take(visible).map(|(w, _)| w.clone()).collect(),
    ));
}
