use ratatui::layout::Position;

use lexiscope_core::ALL_CATEGORIES;

use super::{App, InputMode, Screen};
use crate::action::Action;
use crate::model::panel::FocusPanel;

impl App {
    /// Process a user action and update state. Returns true if the app
    /// should quit.
    ///
    /// Chart aggregates refresh inside the mutation paths, so every state
    /// change is followed by a full redraw of every chart on the next frame.
    pub fn update(&mut self, action: Action) -> bool {
        // Help overlay intercepts everything except quit and ticks.
        if self.show_help {
            match action {
                Action::Quit => {
                    self.should_quit = true;
                    return true;
                }
                Action::ToggleHelp | Action::NavigateBack | Action::ClickAt(_, _) => {
                    self.show_help = false;
                }
                Action::Tick => {
                    self.tick = self.tick.wrapping_add(1);
                }
                _ => {}
            }
            return false;
        }

        // Filter text entry for the focused list.
        if self.input_mode == InputMode::Filter {
            match action {
                Action::Quit => {
                    self.should_quit = true;
                    return true;
                }
                Action::FilterInput(ch) => {
                    let len = self.focused_len_after(ch);
                    self.focused_pane_mut().clamp(len);
                }
                Action::FilterCancel | Action::FilterConfirm => {
                    self.input_mode = InputMode::Normal;
                }
                Action::Tick => {
                    self.tick = self.tick.wrapping_add(1);
                }
                Action::Resize(_, h) => {
                    self.visible_rows = (h as usize).saturating_sub(6);
                }
                _ => {}
            }
            return false;
        }

        match action {
            Action::Quit => {
                self.should_quit = true;
                return true;
            }
            Action::Tick => {
                self.tick = self.tick.wrapping_add(1);
            }
            Action::Resize(_, h) => {
                self.visible_rows = (h as usize).saturating_sub(6);
            }
            Action::MoveUp => self.focused_pane_mut().move_up(),
            Action::MoveDown => {
                let len = self.focused_len();
                self.focused_pane_mut().move_down(len);
            }
            Action::PageUp => {
                let page = self.visible_rows;
                self.focused_pane_mut().page_up(page);
            }
            Action::PageDown => {
                let len = self.focused_len();
                let page = self.visible_rows;
                self.focused_pane_mut().page_down(len, page);
            }
            Action::GoTop => self.focused_pane_mut().go_top(),
            Action::GoBottom => {
                let len = self.focused_len();
                self.focused_pane_mut().go_bottom(len);
            }
            Action::ToggleSelect => self.toggle_under_cursor(),
            Action::NextPanel => self.focus = self.focus.next(),
            Action::ShowSummary => {
                if self.screen != Screen::Loading {
                    self.screen = Screen::Summary;
                }
            }
            Action::ShowTrends => {
                if self.screen != Screen::Loading {
                    self.screen = Screen::Trends;
                }
            }
            Action::NextTab => {
                self.screen = match self.screen {
                    Screen::Summary => Screen::Trends,
                    Screen::Trends => Screen::Summary,
                    Screen::Loading => Screen::Loading,
                };
            }
            Action::SwitchDimension => self.switch_dimension(),
            Action::Reset => self.reset(),
            Action::StartFilter => {
                if self.screen != Screen::Loading {
                    self.input_mode = InputMode::Filter;
                }
            }
            Action::ToggleHelp => self.show_help = true,
            Action::ClickAt(x, y) => self.handle_click(x, y),
            Action::NavigateBack
            | Action::FilterInput(_)
            | Action::FilterCancel
            | Action::FilterConfirm
            | Action::None => {}
        }
        false
    }

    fn focused_pane_mut(&mut self) -> &mut crate::model::panel::ListPane {
        match self.focus {
            FocusPanel::Categories => &mut self.category_pane,
            FocusPanel::Words => &mut self.word_pane,
        }
    }

    fn focused_len(&self) -> usize {
        match self.focus {
            FocusPanel::Categories => self.visible_categories().len(),
            FocusPanel::Words => self.visible_words().len(),
        }
    }

    /// Apply one filter keystroke to the focused pane and return the new
    /// visible length (for cursor clamping).
    fn focused_len_after(&mut self, ch: char) -> usize {
        self.focused_pane_mut().filter_input(ch);
        self.focused_len()
    }

    /// Toggle the entry under the cursor through FilterState, then refresh
    /// every chart. A cap-rejected word insert changes nothing and skips
    /// the refresh.
    fn toggle_under_cursor(&mut self) {
        if self.screen == Screen::Loading {
            return;
        }
        match self.focus {
            FocusPanel::Categories => {
                let visible = self.visible_categories();
                if let Some(&idx) = visible.get(self.category_pane.cursor) {
                    let value = self.category_items[idx].clone();
                    if self.filter.toggle_category(&value) {
                        self.refresh();
                    }
                }
            }
            FocusPanel::Words => {
                let visible = self.visible_words();
                if let Some(&idx) = visible.get(self.word_pane.cursor) {
                    let word = self.index.words[idx].clone();
                    if self.filter.toggle_word(&word) {
                        self.refresh();
                    }
                }
            }
        }
    }

    /// Swap the grouping dimension. The old category selection has no
    /// meaning in the new dimension's domain, so it resets to "all"; the
    /// word selection is dimension-independent and survives.
    fn switch_dimension(&mut self) {
        if self.screen == Screen::Loading {
            return;
        }
        self.dimension = self.dimension.other();
        self.rebuild_index();
        self.filter.toggle_category(ALL_CATEGORIES);
        self.category_pane.clear_filter();
        self.refresh();
    }

    /// Restore selections and filter-text inputs to their defaults.
    fn reset(&mut self) {
        self.filter.reset();
        self.category_pane.clear_filter();
        self.word_pane.clear_filter();
        self.refresh();
    }

    fn handle_click(&mut self, x: u16, y: u16) {
        let pos = Position::new(x, y);

        if let Some(area) = self.category_list_area
            && area.contains(pos)
        {
            let row = (y - area.y) as usize + self.category_pane.scroll_offset;
            let visible = self.visible_categories();
            if let Some(&idx) = visible.get(row) {
                self.focus = FocusPanel::Categories;
                self.category_pane.cursor = row;
                let value = self.category_items[idx].clone();
                if self.filter.toggle_category(&value) {
                    self.refresh();
                }
            }
            return;
        }

        if let Some(area) = self.word_list_area
            && area.contains(pos)
        {
            let row = (y - area.y) as usize + self.word_pane.scroll_offset;
            let visible = self.visible_words();
            if let Some(&idx) = visible.get(row) {
                self.focus = FocusPanel::Words;
                self.word_pane.cursor = row;
                let word = self.index.words[idx].clone();
                if self.filter.toggle_word(&word) {
                    self.refresh();
                }
            }
            return;
        }

        // Clicking a selected word's bar in the top-words chart removes it
        // from the selection (chart clicks never add).
        if let Some((area, words)) = self.top_words_hit.clone()
            && area.contains(pos)
        {
            let row = (y - area.y) as usize;
            if let Some(word) = words.get(row)
                && self.filter.remove_word(word)
            {
                self.refresh();
            }
        }
    }
}
