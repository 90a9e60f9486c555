mod update;

use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use tracing::{error, info};

use lexiscope_core::{ALL_CATEGORIES, DatasetIndex, Dimension, FilterState, Record};

use crate::model::charts::ChartData;
use crate::model::panel::{FocusPanel, ListPane, filtered_indices};
use crate::theme::Theme;
use crate::tui_event::BackendEvent;
use crate::view;

/// Which screen is currently displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Loading,
    Summary,
    Trends,
}

/// Input mode determines how keyboard input is interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Filter,
}

/// Main application state.
pub struct App {
    pub screen: Screen,
    pub input_mode: InputMode,
    pub theme: Theme,
    pub dimension: Dimension,
    pub source_label: String,

    pub records: Vec<Record>,
    pub index: DatasetIndex,
    /// `"all"` sentinel followed by the index's category values.
    pub category_items: Vec<String>,
    pub filter: FilterState,
    pub charts: ChartData,
    pub loaded: bool,
    /// Terminal load failure; every chart renders its error placeholder.
    pub load_error: Option<String>,

    pub focus: FocusPanel,
    pub category_pane: ListPane,
    pub word_pane: ListPane,

    pub tick: usize,
    pub should_quit: bool,
    pub show_help: bool,
    /// Page size for Ctrl+d / Ctrl+u (set on resize).
    pub visible_rows: usize,

    /// Last rendered list areas (for mouse click -> row mapping).
    pub category_list_area: Option<Rect>,
    pub word_list_area: Option<Rect>,
    /// Last rendered top-words rows and their words, top to bottom.
    pub top_words_hit: Option<(Rect, Vec<String>)>,

    load_start: Instant,
}

impl App {
    pub fn new(theme: Theme, dimension: Dimension, source_label: String) -> Self {
        Self {
            screen: Screen::Loading,
            input_mode: InputMode::Normal,
            theme,
            dimension,
            source_label,
            records: Vec::new(),
            index: DatasetIndex::default(),
            category_items: vec![ALL_CATEGORIES.to_string()],
            filter: FilterState::new(),
            charts: ChartData::default(),
            loaded: false,
            load_error: None,
            focus: FocusPanel::Categories,
            category_pane: ListPane::default(),
            word_pane: ListPane::default(),
            tick: 0,
            should_quit: false,
            show_help: false,
            visible_rows: 20,
            category_list_area: None,
            word_list_area: None,
            top_words_hit: None,
            load_start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> std::time::Duration {
        self.load_start.elapsed()
    }

    /// Visible (text-filtered) indices into `category_items`.
    pub fn visible_categories(&self) -> Vec<usize> {
        filtered_indices(&self.category_items, &self.category_pane.filter)
    }

    /// Visible (text-filtered) indices into the vocabulary.
    pub fn visible_words(&self) -> Vec<usize> {
        filtered_indices(&self.index.words, &self.word_pane.filter)
    }

    /// Rebuild the dataset index and category list for the active dimension.
    pub fn rebuild_index(&mut self) {
        self.index = DatasetIndex::build(&self.records, self.dimension);
        self.category_items = std::iter::once(ALL_CATEGORIES.to_string())
            .chain(self.index.categories.iter().cloned())
            .collect();
    }

    /// Orchestrator step: recompute every chart aggregate from the current
    /// filter state. Runs after load and after every filter mutation.
    pub fn refresh(&mut self) {
        self.charts = ChartData::compute(&self.records, &self.filter, self.dimension);
    }

    pub fn handle_backend_event(&mut self, event: BackendEvent) {
        match event {
            BackendEvent::DataLoaded(records) => {
                info!(count = records.len(), "dataset ready");
                self.records = records;
                self.loaded = true;
                self.rebuild_index();
                self.refresh();
                self.screen = Screen::Summary;
            }
            BackendEvent::LoadFailed(message) => {
                error!(error = %message, "dataset load failed");
                self.load_error = Some(message);
                self.screen = Screen::Summary;
            }
        }
    }

    /// Render the current frame.
    pub fn view(&mut self, f: &mut Frame) {
        let chunks = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(10),
            Constraint::Length(1),
        ])
        .split(f.area());

        self.render_header(f, chunks[0]);

        match self.screen {
            Screen::Loading => view::loading::render_in(f, self, chunks[1]),
            Screen::Summary | Screen::Trends => {
                let body =
                    Layout::horizontal([Constraint::Length(34), Constraint::Min(40)])
                        .split(chunks[1]);
                view::filters::render_in(f, self, body[0]);
                if self.screen == Screen::Summary {
                    view::summary::render_in(f, self, body[1]);
                } else {
                    view::trends::render_in(f, self, body[1]);
                }
            }
        }

        self.render_footer(f, chunks[2]);

        if self.show_help {
            view::help::render_overlay(f, self);
        }
    }

    fn render_header(&self, f: &mut Frame, area: Rect) {
        let theme = &self.theme;
        let mut spans = vec![
            Span::styled(" lexiscope ", theme.header_style()),
            Span::styled(
                format!(" {} ", self.source_label),
                Style::default().fg(theme.text),
            ),
            Span::styled(
                format!("[{}] ", self.dimension.label()),
                Style::default().fg(theme.accent),
            ),
        ];

        if self.loaded {
            spans.push(Span::styled(
                format!("{} records ", self.records.len()),
                Style::default().fg(theme.dim),
            ));
        }
        if self.load_error.is_some() {
            spans.push(Span::styled(
                "load failed ",
                Style::default().fg(theme.error).add_modifier(Modifier::BOLD),
            ));
        }

        let tab = |label: &str, active: bool| {
            if active {
                Span::styled(
                    format!(" {label} "),
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
                )
            } else {
                Span::styled(format!(" {label} "), Style::default().fg(theme.dim))
            }
        };
        spans.push(tab("1:Summary", self.screen == Screen::Summary));
        spans.push(tab("2:Trends", self.screen == Screen::Trends));

        f.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_footer(&self, f: &mut Frame, area: Rect) {
        let theme = &self.theme;
        let hints = match (&self.screen, &self.input_mode) {
            (Screen::Loading, _) => " q:quit",
            (_, InputMode::Filter) => " Esc:done  Enter:apply  type to filter the focused list",
            _ => {
                " Tab:list  j/k:move  Space:toggle  /:filter  1/2:tabs  d:dimension  r:reset  ?:help  q:quit"
            }
        };
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(hints, theme.footer_style()))),
            area,
        );
    }
}

#[cfg(test)]
mod tests;
