/// A user intent, decoupled from the raw terminal event that produced it.
///
/// Input mapping happens in `input.rs`; all state mutation happens in
/// `App::update`. Chart redraws follow from state, never from here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    MoveUp,
    MoveDown,
    PageUp,
    PageDown,
    GoTop,
    GoBottom,
    /// Toggle the list entry under the cursor in or out of the selection.
    ToggleSelect,
    /// Cycle sidebar focus between the category and word lists.
    NextPanel,
    ShowSummary,
    ShowTrends,
    /// Cycle to the next chart tab.
    NextTab,
    /// Swap the grouping dimension (title <-> agency).
    SwitchDimension,
    /// Restore filter state and filter-text inputs to their defaults.
    Reset,
    /// Begin typing into the focused list's text filter.
    StartFilter,
    /// A character typed while filtering (`'\x08'` is the backspace sentinel).
    FilterInput(char),
    FilterCancel,
    FilterConfirm,
    ToggleHelp,
    NavigateBack,
    ClickAt(u16, u16),
    Resize(u16, u16),
    Tick,
    None,
}
