//! The orchestrator's data half: every chart's aggregate, recomputed as a
//! unit after each filter mutation and rendered until the next one.

use lexiscope_core::aggregate::{
    self, HISTOGRAM_BINS, MonthlyHeatmap, StackedLayer, WordSeries,
};
use lexiscope_core::{Dimension, FilterState, Record, filtered_view};

/// Chart-ready aggregates for every panel. `None` means "no data": the
/// renderer shows a placeholder instead of an empty chart.
#[derive(Debug, Default)]
pub struct ChartData {
    pub totals: Option<Vec<(String, u64)>>,
    pub mean_lengths: Option<Vec<(String, f64)>>,
    pub histogram: Option<[u64; HISTOGRAM_BINS]>,
    pub heatmap: Option<MonthlyHeatmap>,
    pub series: Option<Vec<WordSeries>>,
    pub top_words: Option<Vec<(String, u64)>>,
    pub stacked: Option<Vec<StackedLayer>>,
}

impl ChartData {
    /// Full recompute: filtered view first, then every aggregator. No
    /// partial update — a single state change refreshes every chart.
    pub fn compute(records: &[Record], filter: &FilterState, dimension: Dimension) -> Self {
        let view = filtered_view(records, filter, dimension);
        let words = filter.selected_words();
        Self {
            totals: aggregate::totals_by_category(&view, dimension),
            mean_lengths: aggregate::mean_word_length_by_category(&view, dimension),
            histogram: aggregate::word_length_histogram(&view),
            heatmap: aggregate::monthly_heatmap(&view, dimension),
            series: aggregate::word_time_series(&view, words),
            top_words: aggregate::top_words(&view),
            stacked: aggregate::stacked_series(&view, words),
        }
    }
}
