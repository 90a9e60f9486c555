use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use lexiscope_core::MAX_SELECTED_WORDS;

use crate::app::{App, InputMode};
use crate::model::panel::{FocusPanel, filtered_indices};
use crate::view::{category_display, dimension_plural, truncate};

/// Sidebar: category list, word list, and the selected-tags panel.
pub fn render_in(f: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Percentage(35),
        Constraint::Percentage(35),
        Constraint::Percentage(30),
    ])
    .split(area);

    render_list_pane(f, chunks[0], app, FocusPanel::Categories);
    render_list_pane(f, chunks[1], app, FocusPanel::Words);
    render_selected_tags(f, chunks[2], app);
}

fn render_list_pane(f: &mut Frame, area: Rect, app: &mut App, panel: FocusPanel) {
    let focused = app.focus == panel;
    let editing = focused && app.input_mode == InputMode::Filter;
    let dimension = app.dimension;

    let title = match panel {
        FocusPanel::Categories => format!(
            " {} ({}) ",
            dimension_plural(dimension),
            app.index.categories.len()
        ),
        FocusPanel::Words => format!(" Words ({}) ", app.index.words.len()),
    };
    let border_style = if focused {
        Style::default().fg(app.theme.accent)
    } else {
        app.theme.border_style()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let theme = &app.theme;
    let filter_state = &app.filter;
    let (items, pane) = match panel {
        FocusPanel::Categories => (&app.category_items, &mut app.category_pane),
        FocusPanel::Words => (&app.index.words, &mut app.word_pane),
    };

    let has_filter_line = editing || !pane.filter.is_empty();
    let mut list_area = inner;
    if has_filter_line && inner.height > 0 {
        let cursor = if editing { "\u{2588}" } else { "" };
        let filter_line = Line::from(vec![
            Span::styled(
                "/",
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(pane.filter.as_str(), Style::default().fg(theme.text)),
            Span::styled(cursor, Style::default().fg(theme.accent)),
        ]);
        f.render_widget(
            Paragraph::new(filter_line),
            Rect {
                height: 1,
                ..inner
            },
        );
        list_area = Rect {
            y: inner.y + 1,
            height: inner.height.saturating_sub(1),
            ..inner
        };
    }

    let visible = filtered_indices(items, &pane.filter);
    pane.clamp(visible.len());
    pane.ensure_visible(list_area.height as usize);

    let mut lines: Vec<Line> = Vec::with_capacity(list_area.height as usize);
    for (row, &item_idx) in visible
        .iter()
        .enumerate()
        .skip(pane.scroll_offset)
        .take(list_area.height as usize)
    {
        let raw = &items[item_idx];
        let (display, is_selected, marker_color) = match panel {
            FocusPanel::Categories => (
                category_display(raw, dimension),
                filter_state.category_selected(raw),
                theme.selected,
            ),
            FocusPanel::Words => {
                let slot = filter_state.selected_words().iter().position(|w| w == raw);
                (
                    raw.clone(),
                    slot.is_some(),
                    slot.map(|i| theme.series_color(i)).unwrap_or(theme.selected),
                )
            }
        };

        let marker = if is_selected { "\u{25cf} " } else { "  " };
        let mut text_style = if is_selected {
            Style::default().fg(marker_color)
        } else {
            Style::default().fg(theme.text)
        };
        if focused && row == pane.cursor {
            text_style = text_style.patch(theme.highlight_style());
        }
        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(marker_color)),
            Span::styled(
                truncate(&display, (list_area.width as usize).saturating_sub(2)),
                text_style,
            ),
        ]));
    }
    if visible.is_empty() {
        lines.push(Line::from(Span::styled(
            "(no matches)",
            theme.placeholder_style(),
        )));
    }
    f.render_widget(Paragraph::new(lines), list_area);

    // Remember the rows area for mouse click -> row mapping.
    match panel {
        FocusPanel::Categories => app.category_list_area = Some(list_area),
        FocusPanel::Words => app.word_list_area = Some(list_area),
    }
}

fn render_selected_tags(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let word_count = app.filter.selected_words().len();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style())
        .title(format!(" Selection ({}/{} words) ", word_count, MAX_SELECTED_WORDS));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut category_spans = vec![Span::styled(
        format!("{}: ", dimension_plural(app.dimension)),
        Style::default().fg(theme.dim),
    )];
    for (i, value) in app.filter.selected_categories().iter().enumerate() {
        if i > 0 {
            category_spans.push(Span::raw(" "));
        }
        category_spans.push(Span::styled(
            format!("[{}]", category_display(value, app.dimension)),
            theme.selected_style(),
        ));
    }

    let mut word_spans = vec![Span::styled(
        "Words: ",
        Style::default().fg(theme.dim),
    )];
    if word_count == 0 {
        word_spans.push(Span::styled("(none)", theme.placeholder_style()));
    }
    for (i, word) in app.filter.selected_words().iter().enumerate() {
        if i > 0 {
            word_spans.push(Span::raw(" "));
        }
        word_spans.push(Span::styled(
            format!("[{word}]"),
            Style::default().fg(theme.series_color(i)),
        ));
    }

    let text = vec![Line::from(category_spans), Line::from(word_spans)];
    f.render_widget(Paragraph::new(text).wrap(Wrap { trim: true }), inner);
}
