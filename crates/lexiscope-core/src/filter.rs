//! Selection state driving every chart: the active category set and the
//! ordered, capped word selection.

/// Sentinel category value meaning "no category filter".
pub const ALL_CATEGORIES: &str = "all";

/// Hard cap on simultaneously selected words.
pub const MAX_SELECTED_WORDS: usize = 10;

/// The current category and word selections.
///
/// Invariants, maintained by every mutating operation:
/// - the category selection is never empty (falls back to `["all"]`);
/// - `"all"` never coexists with concrete category values;
/// - the word selection is ordered, duplicate-free, and holds at most
///   [`MAX_SELECTED_WORDS`] entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    selected_categories: Vec<String>,
    selected_words: Vec<String>,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            selected_categories: vec![ALL_CATEGORIES.to_string()],
            selected_words: Vec::new(),
        }
    }
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_categories(&self) -> &[String] {
        &self.selected_categories
    }

    pub fn selected_words(&self) -> &[String] {
        &self.selected_words
    }

    /// True when the selection is the `"all"` sentinel.
    pub fn is_all_categories(&self) -> bool {
        self.selected_categories
            .iter()
            .any(|c| c == ALL_CATEGORIES)
    }

    pub fn category_selected(&self, value: &str) -> bool {
        self.selected_categories.iter().any(|c| c == value)
    }

    pub fn word_selected(&self, word: &str) -> bool {
        self.selected_words.iter().any(|w| w == word)
    }

    /// Toggle a category value. Selecting `"all"` collapses the selection to
    /// the sentinel; selecting a concrete value drops the sentinel; removing
    /// the last concrete value restores the sentinel. Returns true when the
    /// selection changed.
    pub fn toggle_category(&mut self, value: &str) -> bool {
        if value == ALL_CATEGORIES {
            if self.selected_categories == [ALL_CATEGORIES] {
                return false;
            }
            self.selected_categories = vec![ALL_CATEGORIES.to_string()];
            return true;
        }

        if let Some(pos) = self.selected_categories.iter().position(|c| c == value) {
            self.selected_categories.remove(pos);
            if self.selected_categories.is_empty() {
                self.selected_categories = vec![ALL_CATEGORIES.to_string()];
            }
        } else {
            if self.is_all_categories() {
                self.selected_categories.clear();
            }
            self.selected_categories.push(value.to_string());
        }
        true
    }

    /// Toggle a word. Insertion is refused once the cap is reached; the
    /// rejected toggle is a silent no-op. Returns true when the selection
    /// changed.
    pub fn toggle_word(&mut self, word: &str) -> bool {
        if let Some(pos) = self.selected_words.iter().position(|w| w == word) {
            self.selected_words.remove(pos);
            true
        } else if self.selected_words.len() < MAX_SELECTED_WORDS {
            self.selected_words.push(word.to_string());
            true
        } else {
            false
        }
    }

    /// Remove a word without the toggle-on path (per-tag removal).
    pub fn remove_word(&mut self, word: &str) -> bool {
        if let Some(pos) = self.selected_words.iter().position(|w| w == word) {
            self.selected_words.remove(pos);
            true
        } else {
            false
        }
    }

    /// Restore both selections to their defaults.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_all_and_no_words() {
        let state = FilterState::new();
        assert_eq!(state.selected_categories(), [ALL_CATEGORIES]);
        assert!(state.selected_words().is_empty());
        assert!(state.is_all_categories());
    }

    #[test]
    fn selecting_concrete_category_drops_sentinel() {
        let mut state = FilterState::new();
        assert!(state.toggle_category("EPA"));
        assert_eq!(state.selected_categories(), ["EPA"]);
        assert!(!state.is_all_categories());
    }

    #[test]
    fn selecting_all_collapses_any_prior_selection() {
        let mut state = FilterState::new();
        state.toggle_category("EPA");
        state.toggle_category("DOT");
        assert_eq!(state.selected_categories().len(), 2);

        assert!(state.toggle_category(ALL_CATEGORIES));
        assert_eq!(state.selected_categories(), [ALL_CATEGORIES]);
    }

    #[test]
    fn selecting_all_when_already_all_is_noop() {
        let mut state = FilterState::new();
        assert!(!state.toggle_category(ALL_CATEGORIES));
        assert_eq!(state.selected_categories(), [ALL_CATEGORIES]);
    }

    #[test]
    fn removing_last_category_restores_sentinel() {
        let mut state = FilterState::new();
        state.toggle_category("EPA");
        state.toggle_category("EPA");
        assert_eq!(state.selected_categories(), [ALL_CATEGORIES]);
    }

    #[test]
    fn word_toggle_on_off() {
        let mut state = FilterState::new();
        assert!(state.toggle_word("emission"));
        assert!(state.word_selected("emission"));
        assert!(state.toggle_word("emission"));
        assert!(!state.word_selected("emission"));
    }

    #[test]
    fn word_selection_preserves_insertion_order() {
        let mut state = FilterState::new();
        state.toggle_word("gamma");
        state.toggle_word("alpha");
        state.toggle_word("beta");
        assert_eq!(state.selected_words(), ["gamma", "alpha", "beta"]);
    }

    #[test]
    fn eleventh_word_is_silent_noop() {
        let mut state = FilterState::new();
        let words: Vec<String> = (0..MAX_SELECTED_WORDS).map(|i| format!("w{i}")).collect();
        for w in &words {
            assert!(state.toggle_word(w));
        }
        assert_eq!(state.selected_words().len(), MAX_SELECTED_WORDS);

        assert!(!state.toggle_word("overflow"));
        assert_eq!(state.selected_words(), words.as_slice());
        assert!(!state.word_selected("overflow"));
    }

    #[test]
    fn toggle_off_still_works_at_cap() {
        let mut state = FilterState::new();
        for i in 0..MAX_SELECTED_WORDS {
            state.toggle_word(&format!("w{i}"));
        }
        assert!(state.toggle_word("w0"));
        assert_eq!(state.selected_words().len(), MAX_SELECTED_WORDS - 1);
        // A slot freed up, so insertion is accepted again.
        assert!(state.toggle_word("fresh"));
    }

    #[test]
    fn remove_word_ignores_absent_words() {
        let mut state = FilterState::new();
        state.toggle_word("emission");
        assert!(!state.remove_word("standard"));
        assert!(state.remove_word("emission"));
        assert!(state.selected_words().is_empty());
    }

    #[test]
    fn reset_restores_defaults() {
        let mut state = FilterState::new();
        state.toggle_category("EPA");
        state.toggle_word("emission");
        state.reset();
        assert_eq!(state, FilterState::default());
    }
}
