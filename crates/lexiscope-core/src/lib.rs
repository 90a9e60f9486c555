use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod aggregate;
pub mod filter;
pub mod index;
pub mod view;

// Re-export for convenience
pub use aggregate::{
    HISTOGRAM_BINS, MonthlyHeatmap, StackedLayer, TOP_CATEGORIES, TOP_WORDS, WordSeries,
};
pub use filter::{ALL_CATEGORIES, FilterState, MAX_SELECTED_WORDS};
pub use index::DatasetIndex;
pub use view::filtered_view;

/// One document version and its precomputed word counts.
///
/// Records are immutable once loaded; the record list is the only dataset
/// the dashboard ever holds and it is loaded exactly once per session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub agency: Option<String>,
    pub version_date: NaiveDate,
    #[serde(default)]
    pub word_frequencies: BTreeMap<String, u64>,
}

impl Record {
    /// The record's value for the given grouping dimension, if present.
    pub fn category(&self, dimension: Dimension) -> Option<&str> {
        match dimension {
            Dimension::Title => self.title.as_deref(),
            Dimension::Agency => self.agency.as_deref(),
        }
    }

    /// Sum of all word counts in this record.
    pub fn total_frequency(&self) -> u64 {
        self.word_frequencies.values().sum()
    }
}

/// The grouping dimension records are indexed and filtered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Title,
    Agency,
}

impl Dimension {
    pub fn label(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Agency => "Agency",
        }
    }

    /// The other dimension (used by the runtime dimension switch).
    pub fn other(self) -> Self {
        match self {
            Self::Title => Self::Agency,
            Self::Agency => Self::Title,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Title => write!(f, "title"),
            Self::Agency => write!(f, "agency"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown dimension {0:?} (expected \"title\" or \"agency\")")]
pub struct ParseDimensionError(String);

impl FromStr for Dimension {
    type Err = ParseDimensionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "title" => Ok(Self::Title),
            "agency" => Ok(Self::Agency),
            other => Err(ParseDimensionError(other.to_string())),
        }
    }
}
