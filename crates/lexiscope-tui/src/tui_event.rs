use lexiscope_core::Record;

/// Events flowing from the dataset-loading task to the TUI.
#[derive(Debug)]
pub enum BackendEvent {
    /// Dataset fetched and decoded.
    DataLoaded(Vec<Record>),
    /// Dataset fetch or decode failed. Terminal for the session: every
    /// chart renders a static error placeholder and there is no retry.
    LoadFailed(String),
}
