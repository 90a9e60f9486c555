use std::collections::BTreeSet;

use tracing::debug;

use crate::{Dimension, Record};

/// Distinct category values and vocabulary derived from the record list.
///
/// Both lists are sorted and duplicate-free, and rebuilding from the same
/// input yields the same output. Records missing the active dimension's
/// field contribute no category value but still contribute words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatasetIndex {
    pub categories: Vec<String>,
    pub words: Vec<String>,
}

impl DatasetIndex {
    pub fn build(records: &[Record], dimension: Dimension) -> Self {
        let categories: BTreeSet<&str> = records
            .iter()
            .filter_map(|r| r.category(dimension))
            .collect();
        let words: BTreeSet<&str> = records
            .iter()
            .flat_map(|r| r.word_frequencies.keys())
            .map(String::as_str)
            .collect();

        debug!(
            dimension = %dimension,
            categories = categories.len(),
            words = words.len(),
            "dataset index built"
        );
        Self {
            categories: categories.into_iter().map(str::to_string).collect(),
            words: words.into_iter().map(str::to_string).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn record(title: &str, agency: &str, words: &[&str]) -> Record {
        Record {
            title: Some(title.to_string()),
            agency: Some(agency.to_string()),
            version_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            word_frequencies: words.iter().map(|w| (w.to_string(), 1)).collect(),
        }
    }

    #[test]
    fn categories_are_sorted_and_deduplicated() {
        let records = vec![
            record("Zoning Rule", "DOT", &["road"]),
            record("Air Rule", "EPA", &["air"]),
            record("Zoning Rule", "DOT", &["bridge"]),
        ];
        let index = DatasetIndex::build(&records, Dimension::Title);
        assert_eq!(index.categories, ["Air Rule", "Zoning Rule"]);

        let by_agency = DatasetIndex::build(&records, Dimension::Agency);
        assert_eq!(by_agency.categories, ["DOT", "EPA"]);
    }

    #[test]
    fn words_are_union_over_all_records() {
        let records = vec![
            record("A", "X", &["beta", "alpha"]),
            record("B", "Y", &["gamma", "alpha"]),
        ];
        let index = DatasetIndex::build(&records, Dimension::Title);
        assert_eq!(index.words, ["alpha", "beta", "gamma"]);
    }

    #[test]
    fn build_is_stable_across_calls() {
        let records = vec![
            record("B", "Y", &["two", "one"]),
            record("A", "X", &["three"]),
        ];
        let first = DatasetIndex::build(&records, Dimension::Title);
        let second = DatasetIndex::build(&records, Dimension::Title);
        assert_eq!(first, second);
    }

    #[test]
    fn records_missing_dimension_field_are_skipped_for_categories() {
        let mut anonymous = record("ignored", "ignored", &["word"]);
        anonymous.title = None;
        let records = vec![anonymous, record("Named", "EPA", &["other"])];

        let index = DatasetIndex::build(&records, Dimension::Title);
        assert_eq!(index.categories, ["Named"]);
        // The anonymous record still contributes vocabulary.
        assert_eq!(index.words, ["other", "word"]);
    }

    #[test]
    fn empty_input_yields_empty_index() {
        let index = DatasetIndex::build(&[], Dimension::Agency);
        assert!(index.categories.is_empty());
        assert!(index.words.is_empty());
    }
}
