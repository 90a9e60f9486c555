use crate::{Dimension, FilterState, Record};

/// The record subset in scope for the current category selection.
///
/// A selection containing the `"all"` sentinel returns every record, order
/// preserved. Otherwise only records whose category (for the active
/// dimension) is a selected value pass; records missing that field never
/// match a concrete selection.
pub fn filtered_view<'a>(
    records: &'a [Record],
    filter: &FilterState,
    dimension: Dimension,
) -> Vec<&'a Record> {
    if filter.is_all_categories() {
        return records.iter().collect();
    }
    records
        .iter()
        .filter(|r| {
            r.category(dimension)
                .is_some_and(|c| filter.category_selected(c))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use chrono::NaiveDate;

    use super::*;

    fn record(title: &str, day: u32) -> Record {
        Record {
            title: Some(title.to_string()),
            agency: None,
            version_date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            word_frequencies: BTreeMap::new(),
        }
    }

    #[test]
    fn all_selection_returns_every_record_in_order() {
        let records = vec![record("B", 2), record("A", 1), record("C", 3)];
        let filter = FilterState::new();
        let view = filtered_view(&records, &filter, Dimension::Title);
        assert_eq!(view.len(), 3);
        for (seen, expected) in view.iter().zip(records.iter()) {
            assert_eq!(**seen, *expected);
        }
    }

    #[test]
    fn concrete_selection_filters_by_membership() {
        let records = vec![record("A", 1), record("B", 2), record("A", 3)];
        let mut filter = FilterState::new();
        filter.toggle_category("A");

        let view = filtered_view(&records, &filter, Dimension::Title);
        assert_eq!(view.len(), 2);
        assert!(view.iter().all(|r| r.title.as_deref() == Some("A")));
    }

    #[test]
    fn records_missing_field_never_match_concrete_selection() {
        let mut anonymous = record("ignored", 1);
        anonymous.title = None;
        let records = vec![anonymous, record("A", 2)];

        let mut filter = FilterState::new();
        filter.toggle_category("A");
        assert_eq!(filtered_view(&records, &filter, Dimension::Title).len(), 1);

        // Under "all" they are in scope again.
        filter.reset();
        assert_eq!(filtered_view(&records, &filter, Dimension::Title).len(), 2);
    }

    #[test]
    fn input_is_not_mutated() {
        let records = vec![record("A", 1)];
        let snapshot = records.clone();
        let mut filter = FilterState::new();
        filter.toggle_category("Z");
        let _ = filtered_view(&records, &filter, Dimension::Title);
        assert_eq!(records, snapshot);
    }
}
