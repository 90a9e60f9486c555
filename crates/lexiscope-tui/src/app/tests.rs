use std::collections::BTreeMap;

use chrono::NaiveDate;
use ratatui::layout::Rect;

use lexiscope_core::{Dimension, FilterState, MAX_SELECTED_WORDS, Record};

use super::*;
use crate::action::Action;
use crate::tui_event::BackendEvent;

fn record(title: &str, agency: &str, date: (i32, u32, u32), words: &[(&str, u64)]) -> Record {
    Record {
        title: Some(title.to_string()),
        agency: Some(agency.to_string()),
        version_date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
        word_frequencies: words
            .iter()
            .map(|(w, c)| (w.to_string(), *c))
            .collect::<BTreeMap<_, _>>(),
    }
}

fn sample_records() -> Vec<Record> {
    let extra: Vec<(String, u64)> = (0..10).map(|i| (format!("a{i}"), 1)).collect();
    let extra_refs: Vec<(&str, u64)> = extra.iter().map(|(w, c)| (w.as_str(), *c)).collect();
    vec![
        record(
            "Clean Air Act",
            "EPA",
            (2024, 1, 15),
            &[("emission", 12), ("standard", 7), ("air", 3)],
        ),
        record(
            "Clean Air Act",
            "EPA",
            (2024, 2, 15),
            &[("emission", 8), ("air", 5)],
        ),
        record(
            "Highway Safety Rule",
            "DOT",
            (2024, 6, 1),
            &[("vehicle", 9), ("speed", 2)],
        ),
        record("Data Annex", "GSA", (2024, 3, 1), &extra_refs),
    ]
}

/// Create a minimal App for testing (no terminal, no backend task).
fn test_app() -> App {
    App::new(Theme::hacker(), Dimension::Title, "test.json".to_string())
}

fn loaded_app() -> App {
    let mut app = test_app();
    app.handle_backend_event(BackendEvent::DataLoaded(sample_records()));
    app
}

// ── Data load ───────────────────────────────────────────────────

#[test]
fn data_load_builds_index_and_opens_summary() {
    let app = loaded_app();
    assert_eq!(app.screen, Screen::Summary);
    assert!(app.loaded);
    assert_eq!(
        app.index.categories,
        ["Clean Air Act", "Data Annex", "Highway Safety Rule"]
    );
    // Sentinel first, then the sorted categories.
    assert_eq!(app.category_items[0], "all");
    assert!(app.charts.totals.is_some());
    assert!(app.charts.heatmap.is_some());
    // No words selected yet: word-scoped charts show placeholders.
    assert!(app.charts.series.is_none());
    assert!(app.charts.stacked.is_none());
}

#[test]
fn load_failure_is_terminal_with_placeholders_everywhere() {
    let mut app = test_app();
    app.handle_backend_event(BackendEvent::LoadFailed("connection refused".to_string()));
    assert_eq!(app.screen, Screen::Summary);
    assert!(!app.loaded);
    assert_eq!(app.load_error.as_deref(), Some("connection refused"));
    assert!(app.charts.totals.is_none());
    assert!(app.charts.top_words.is_none());
}

// ── Selection via actions ───────────────────────────────────────

#[test]
fn toggling_word_under_cursor_populates_word_charts() {
    let mut app = loaded_app();
    app.focus = FocusPanel::Words;
    // Vocabulary is sorted: a0..a9 come first, then "air".
    app.word_pane.cursor = 10;
    app.update(Action::ToggleSelect);

    assert_eq!(app.filter.selected_words(), ["air"]);
    let series = app.charts.series.as_ref().unwrap();
    assert_eq!(series[0].word, "air");
    assert_eq!(series[0].points.len(), 2);
    assert!(app.charts.stacked.is_some());
}

#[test]
fn eleventh_word_toggle_is_silent_noop() {
    let mut app = loaded_app();
    app.focus = FocusPanel::Words;
    for i in 0..=MAX_SELECTED_WORDS {
        app.word_pane.cursor = i;
        app.update(Action::ToggleSelect);
    }
    assert_eq!(app.filter.selected_words().len(), MAX_SELECTED_WORDS);
    let series = app.charts.series.as_ref().unwrap();
    assert_eq!(series.len(), MAX_SELECTED_WORDS);
}

#[test]
fn toggling_last_category_off_restores_all() {
    let mut app = loaded_app();
    app.focus = FocusPanel::Categories;
    app.category_pane.cursor = 1; // "Clean Air Act"
    app.update(Action::ToggleSelect);
    assert_eq!(app.filter.selected_categories(), ["Clean Air Act"]);

    app.update(Action::ToggleSelect);
    assert_eq!(app.filter.selected_categories(), ["all"]);
}

#[test]
fn category_selection_scopes_every_chart() {
    let mut app = loaded_app();
    app.focus = FocusPanel::Categories;
    app.category_pane.cursor = 3; // "Highway Safety Rule"
    app.update(Action::ToggleSelect);

    let totals = app.charts.totals.as_ref().unwrap();
    assert_eq!(totals.len(), 1);
    assert_eq!(totals[0], ("Highway Safety Rule".to_string(), 11));
    let top = app.charts.top_words.as_ref().unwrap();
    assert_eq!(top[0], ("vehicle".to_string(), 9));
}

// ── Reset (end-to-end default state) ────────────────────────────

#[test]
fn reset_restores_defaults_and_clears_filter_text() {
    let mut app = loaded_app();
    app.focus = FocusPanel::Words;
    app.word_pane.cursor = 10;
    app.update(Action::ToggleSelect);
    app.focus = FocusPanel::Categories;
    app.category_pane.cursor = 1;
    app.update(Action::ToggleSelect);
    app.category_pane.filter = "clean".to_string();
    app.word_pane.filter = "air".to_string();

    app.update(Action::Reset);

    assert_eq!(app.filter, FilterState::default());
    assert!(app.category_pane.filter.is_empty());
    assert!(app.word_pane.filter.is_empty());
    // Category charts render over all data again; word charts placeholder.
    let totals = app.charts.totals.as_ref().unwrap();
    assert_eq!(totals.len(), 3);
    assert!(app.charts.series.is_none());
    assert!(app.charts.stacked.is_none());
}

// ── Dimension switch ────────────────────────────────────────────

#[test]
fn dimension_switch_rebuilds_categories_and_keeps_words() {
    let mut app = loaded_app();
    app.focus = FocusPanel::Words;
    app.word_pane.cursor = 10;
    app.update(Action::ToggleSelect);
    app.focus = FocusPanel::Categories;
    app.category_pane.cursor = 1;
    app.update(Action::ToggleSelect);

    app.update(Action::SwitchDimension);

    assert_eq!(app.dimension, Dimension::Agency);
    assert_eq!(app.index.categories, ["DOT", "EPA", "GSA"]);
    // Old title selection has no meaning under Agency.
    assert_eq!(app.filter.selected_categories(), ["all"]);
    assert_eq!(app.filter.selected_words(), ["air"]);
}

// ── Filter text entry ───────────────────────────────────────────

#[test]
fn filter_mode_narrows_the_focused_list() {
    let mut app = loaded_app();
    app.focus = FocusPanel::Words;
    app.update(Action::StartFilter);
    assert_eq!(app.input_mode, InputMode::Filter);

    app.update(Action::FilterInput('a'));
    app.update(Action::FilterInput('i'));
    app.update(Action::FilterInput('r'));
    assert_eq!(app.word_pane.filter, "air");
    assert_eq!(app.visible_words().len(), 1);

    app.update(Action::FilterCancel);
    assert_eq!(app.input_mode, InputMode::Normal);
    // The filter text survives leaving entry mode.
    assert_eq!(app.word_pane.filter, "air");
}

#[test]
fn filter_backspace_sentinel_deletes() {
    let mut app = loaded_app();
    app.focus = FocusPanel::Categories;
    app.update(Action::StartFilter);
    app.update(Action::FilterInput('x'));
    app.update(Action::FilterInput('\x08'));
    assert!(app.category_pane.filter.is_empty());
}

// ── Tabs and help ───────────────────────────────────────────────

#[test]
fn tab_actions_switch_screens_after_load() {
    let mut app = loaded_app();
    app.update(Action::ShowTrends);
    assert_eq!(app.screen, Screen::Trends);
    app.update(Action::NextTab);
    assert_eq!(app.screen, Screen::Summary);
}

#[test]
fn tab_actions_are_ignored_while_loading() {
    let mut app = test_app();
    app.update(Action::ShowTrends);
    assert_eq!(app.screen, Screen::Loading);
}

#[test]
fn help_overlay_swallows_navigation() {
    let mut app = loaded_app();
    app.update(Action::ToggleHelp);
    assert!(app.show_help);

    let cursor_before = app.category_pane.cursor;
    app.update(Action::MoveDown);
    assert_eq!(app.category_pane.cursor, cursor_before);

    app.update(Action::ToggleHelp);
    assert!(!app.show_help);
}

// ── Mouse ───────────────────────────────────────────────────────

#[test]
fn click_on_category_row_toggles_it() {
    let mut app = loaded_app();
    app.category_list_area = Some(Rect::new(1, 2, 30, 10));

    // Row 1 of the list is the first concrete category.
    app.update(Action::ClickAt(5, 3));
    assert_eq!(app.filter.selected_categories(), ["Clean Air Act"]);
    assert_eq!(app.focus, FocusPanel::Categories);
}

#[test]
fn click_on_selected_top_word_removes_it() {
    let mut app = loaded_app();
    app.focus = FocusPanel::Words;
    app.word_pane.cursor = 10;
    app.update(Action::ToggleSelect);
    assert_eq!(app.filter.selected_words(), ["air"]);

    app.top_words_hit = Some((
        Rect::new(40, 10, 30, 5),
        vec!["emission".to_string(), "air".to_string()],
    ));
    // Clicking an unselected word's bar is a no-op.
    app.update(Action::ClickAt(45, 10));
    assert_eq!(app.filter.selected_words(), ["air"]);
    // Clicking the selected word's bar removes it.
    app.update(Action::ClickAt(45, 11));
    assert!(app.filter.selected_words().is_empty());
    assert!(app.charts.series.is_none());
}

#[test]
fn quit_action_sets_flag() {
    let mut app = loaded_app();
    assert!(app.update(Action::Quit));
    assert!(app.should_quit);
}
