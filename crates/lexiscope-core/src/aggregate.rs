//! Per-chart reductions of the filtered view into chart-ready series.
//!
//! Every aggregator returns `None` instead of computing when given an empty
//! filtered view (or an empty word selection, for word-scoped charts); the
//! renderer shows a placeholder for that case. Outputs are deterministic:
//! grouping goes through `BTreeMap`, so descending sorts break ties
//! alphabetically.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use crate::{Dimension, Record};

/// Category charts keep the top 10 entries.
pub const TOP_CATEGORIES: usize = 10;

/// The top-words chart keeps the top 20 entries.
pub const TOP_WORDS: usize = 20;

/// Word-length histogram bin count; bins are unit-width over `[0, 20)`.
pub const HISTOGRAM_BINS: usize = 20;

/// Total frequency per (category, calendar month) cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyHeatmap {
    /// Sorted category values, one row each.
    pub categories: Vec<String>,
    /// `cells[row][month]`, months 0-11; missing cells are 0.
    pub cells: Vec<[u64; 12]>,
    /// Largest cell value (0 when every cell is empty).
    pub max: u64,
}

/// One selected word's `(date, count)` sequence, date ascending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSeries {
    pub word: String,
    pub points: Vec<(NaiveDate, u64)>,
}

/// One stacked layer: the running total through this word, per record.
///
/// Layers stack in selection order; a word absent from a record contributes
/// 0 to that record's running total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackedLayer {
    pub word: String,
    pub upper: Vec<(NaiveDate, u64)>,
}

/// Sum of all frequency values per category, descending, top 10.
pub fn totals_by_category(
    records: &[&Record],
    dimension: Dimension,
) -> Option<Vec<(String, u64)>> {
    if records.is_empty() {
        return None;
    }
    let mut totals: BTreeMap<&str, u64> = BTreeMap::new();
    for record in records {
        if let Some(category) = record.category(dimension) {
            *totals.entry(category).or_default() += record.total_frequency();
        }
    }
    if totals.is_empty() {
        return None;
    }
    let mut ranked: Vec<(String, u64)> = totals
        .into_iter()
        .map(|(category, total)| (category.to_string(), total))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(TOP_CATEGORIES);
    Some(ranked)
}

/// Frequency-weighted mean word length per category, descending, top 10.
///
/// Each occurrence of a word counts its character length once, so a word
/// with frequency 3 contributes its length three times to the mean.
pub fn mean_word_length_by_category(
    records: &[&Record],
    dimension: Dimension,
) -> Option<Vec<(String, f64)>> {
    if records.is_empty() {
        return None;
    }
    // category -> (sum of length*frequency, sum of frequency)
    let mut sums: BTreeMap<&str, (u64, u64)> = BTreeMap::new();
    for record in records {
        let Some(category) = record.category(dimension) else {
            continue;
        };
        let entry = sums.entry(category).or_default();
        for (word, &count) in &record.word_frequencies {
            entry.0 += word.chars().count() as u64 * count;
            entry.1 += count;
        }
    }
    let mut ranked: Vec<(String, f64)> = sums
        .into_iter()
        .filter(|(_, (_, weight))| *weight > 0)
        .map(|(category, (weighted, weight))| {
            (category.to_string(), weighted as f64 / weight as f64)
        })
        .collect();
    if ranked.is_empty() {
        return None;
    }
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    ranked.truncate(TOP_CATEGORIES);
    Some(ranked)
}

/// Occurrence-weighted counts of word lengths in 20 unit bins over `[0, 20)`.
///
/// Lengths outside the domain are dropped, matching the fixed-domain
/// binning of the original dashboard.
pub fn word_length_histogram(records: &[&Record]) -> Option<[u64; HISTOGRAM_BINS]> {
    if records.is_empty() {
        return None;
    }
    let mut bins = [0u64; HISTOGRAM_BINS];
    for record in records {
        for (word, &count) in &record.word_frequencies {
            let length = word.chars().count();
            if length < HISTOGRAM_BINS {
                bins[length] += count;
            }
        }
    }
    Some(bins)
}

/// Total frequency per (category, calendar month), categories sorted.
pub fn monthly_heatmap(records: &[&Record], dimension: Dimension) -> Option<MonthlyHeatmap> {
    if records.is_empty() {
        return None;
    }
    let mut rows: BTreeMap<&str, [u64; 12]> = BTreeMap::new();
    for record in records {
        if let Some(category) = record.category(dimension) {
            let month = record.version_date.month0() as usize;
            rows.entry(category).or_insert([0; 12])[month] += record.total_frequency();
        }
    }
    if rows.is_empty() {
        return None;
    }
    let categories: Vec<String> = rows.keys().map(|c| c.to_string()).collect();
    let cells: Vec<[u64; 12]> = rows.values().copied().collect();
    let max = cells.iter().flatten().copied().max().unwrap_or(0);
    Some(MonthlyHeatmap {
        categories,
        cells,
        max,
    })
}

/// Per selected word, the `(date, count)` sequence over records that define
/// that word, date ascending. Words appear in selection order; a word no
/// record defines yields an empty series.
pub fn word_time_series(records: &[&Record], words: &[String]) -> Option<Vec<WordSeries>> {
    if records.is_empty() || words.is_empty() {
        return None;
    }
    let series = words
        .iter()
        .map(|word| {
            let mut points: Vec<(NaiveDate, u64)> = records
                .iter()
                .filter_map(|r| {
                    r.word_frequencies
                        .get(word)
                        .map(|&count| (r.version_date, count))
                })
                .collect();
            points.sort_by_key(|(date, _)| *date);
            WordSeries {
                word: word.clone(),
                points,
            }
        })
        .collect();
    Some(series)
}

/// Total frequency per word across the filtered view, descending, top 20.
pub fn top_words(records: &[&Record]) -> Option<Vec<(String, u64)>> {
    if records.is_empty() {
        return None;
    }
    let mut totals: BTreeMap<&str, u64> = BTreeMap::new();
    for record in records {
        for (word, &count) in &record.word_frequencies {
            *totals.entry(word).or_default() += count;
        }
    }
    if totals.is_empty() {
        return None;
    }
    let mut ranked: Vec<(String, u64)> = totals
        .into_iter()
        .map(|(word, total)| (word.to_string(), total))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(TOP_WORDS);
    Some(ranked)
}

/// Running totals of the selected words' frequencies per record, stacked in
/// selection order over the date-sorted record sequence.
pub fn stacked_series(records: &[&Record], words: &[String]) -> Option<Vec<StackedLayer>> {
    if records.is_empty() || words.is_empty() {
        return None;
    }
    let mut ordered: Vec<&&Record> = records.iter().collect();
    ordered.sort_by_key(|r| r.version_date);

    let mut layers: Vec<StackedLayer> = words
        .iter()
        .map(|word| StackedLayer {
            word: word.clone(),
            upper: Vec::with_capacity(ordered.len()),
        })
        .collect();

    for record in ordered {
        let mut running = 0u64;
        for (layer, word) in layers.iter_mut().zip(words) {
            running += record.word_frequencies.get(word).copied().unwrap_or(0);
            layer.upper.push((record.version_date, running));
        }
    }
    Some(layers)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, date: (i32, u32, u32), freqs: &[(&str, u64)]) -> Record {
        Record {
            title: Some(title.to_string()),
            agency: Some(format!("{title} Agency")),
            version_date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            word_frequencies: freqs.iter().map(|(w, c)| (w.to_string(), *c)).collect(),
        }
    }

    fn refs(records: &[Record]) -> Vec<&Record> {
        records.iter().collect()
    }

    #[test]
    fn totals_sum_all_frequencies_per_category() {
        let records = vec![
            record("A", (2024, 1, 1), &[("a", 2), ("b", 3)]),
            record("A", (2024, 2, 1), &[("a", 1)]),
        ];
        let totals = totals_by_category(&refs(&records), Dimension::Title).unwrap();
        assert_eq!(totals, [("A".to_string(), 6)]);
    }

    #[test]
    fn totals_rank_descending_and_truncate_to_ten() {
        let records: Vec<Record> = (0..12)
            .map(|i| record(&format!("cat{i:02}"), (2024, 1, 1), &[("w", i + 1)]))
            .collect();
        let totals = totals_by_category(&refs(&records), Dimension::Title).unwrap();
        assert_eq!(totals.len(), TOP_CATEGORIES);
        assert_eq!(totals[0], ("cat11".to_string(), 12));
        assert!(totals.windows(2).all(|w| w[0].1 >= w[1].1));
    }

    #[test]
    fn totals_break_ties_alphabetically() {
        let records = vec![
            record("zebra", (2024, 1, 1), &[("w", 5)]),
            record("apple", (2024, 1, 1), &[("w", 5)]),
        ];
        let totals = totals_by_category(&refs(&records), Dimension::Title).unwrap();
        assert_eq!(totals[0].0, "apple");
        assert_eq!(totals[1].0, "zebra");
    }

    #[test]
    fn totals_of_empty_view_is_none() {
        assert!(totals_by_category(&[], Dimension::Title).is_none());
    }

    #[test]
    fn mean_length_weights_by_frequency() {
        // "ab" (len 2) x3 and "abcd" (len 4) x1 -> (2*3 + 4*1) / 4 = 2.5
        let records = vec![record("A", (2024, 1, 1), &[("ab", 3), ("abcd", 1)])];
        let means = mean_word_length_by_category(&refs(&records), Dimension::Title).unwrap();
        assert_eq!(means.len(), 1);
        assert!((means[0].1 - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn mean_length_skips_categories_with_no_occurrences() {
        let records = vec![
            record("Empty", (2024, 1, 1), &[]),
            record("Full", (2024, 1, 1), &[("abc", 2)]),
        ];
        let means = mean_word_length_by_category(&refs(&records), Dimension::Title).unwrap();
        assert_eq!(means.len(), 1);
        assert_eq!(means[0].0, "Full");
    }

    #[test]
    fn histogram_counts_weighted_lengths_in_domain() {
        let records = vec![record(
            "A",
            (2024, 1, 1),
            &[("abc", 4), ("abcde", 2), ("a-very-long-hyphenated-word", 9)],
        )];
        let bins = word_length_histogram(&refs(&records)).unwrap();
        assert_eq!(bins[3], 4);
        assert_eq!(bins[5], 2);
        // Length 27 is outside [0, 20) and dropped.
        assert_eq!(bins.iter().sum::<u64>(), 6);
    }

    #[test]
    fn histogram_of_empty_view_is_none() {
        assert!(word_length_histogram(&[]).is_none());
    }

    #[test]
    fn heatmap_buckets_by_calendar_month() {
        let records = vec![
            record("A", (2023, 1, 5), &[("w", 2)]),
            record("A", (2024, 1, 20), &[("w", 3)]),
            record("B", (2024, 6, 1), &[("w", 7)]),
        ];
        let heatmap = monthly_heatmap(&refs(&records), Dimension::Title).unwrap();
        assert_eq!(heatmap.categories, ["A", "B"]);
        // Both January records land in month 0 regardless of year.
        assert_eq!(heatmap.cells[0][0], 5);
        assert_eq!(heatmap.cells[1][5], 7);
        assert_eq!(heatmap.cells[1][0], 0);
        assert_eq!(heatmap.max, 7);
    }

    #[test]
    fn time_series_excludes_records_lacking_the_word() {
        let records = vec![
            record("A", (2024, 3, 1), &[("alpha", 2)]),
            record("A", (2024, 1, 1), &[("alpha", 1), ("beta", 4)]),
            record("A", (2024, 2, 1), &[("beta", 5)]),
        ];
        let words = vec!["alpha".to_string(), "beta".to_string()];
        let series = word_time_series(&refs(&records), &words).unwrap();

        assert_eq!(series[0].word, "alpha");
        assert_eq!(
            series[0].points,
            [
                (NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), 1),
                (NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(), 2),
            ]
        );
        assert_eq!(series[1].points.len(), 2);
    }

    #[test]
    fn time_series_requires_words_and_records() {
        let records = vec![record("A", (2024, 1, 1), &[("w", 1)])];
        assert!(word_time_series(&refs(&records), &[]).is_none());
        assert!(word_time_series(&[], &["w".to_string()]).is_none());
    }

    #[test]
    fn top_words_sums_and_ranks() {
        let records = vec![
            record("A", (2024, 1, 1), &[("a", 2), ("b", 1)]),
            record("A", (2024, 1, 2), &[("a", 1), ("c", 5)]),
        ];
        let ranked = top_words(&refs(&records)).unwrap();
        assert_eq!(
            ranked,
            [
                ("c".to_string(), 5),
                ("a".to_string(), 3),
                ("b".to_string(), 1),
            ]
        );
    }

    #[test]
    fn top_words_truncates_to_twenty() {
        let freqs: Vec<(String, u64)> = (0..30).map(|i| (format!("w{i:02}"), i + 1)).collect();
        let freq_refs: Vec<(&str, u64)> = freqs.iter().map(|(w, c)| (w.as_str(), *c)).collect();
        let records = vec![record("A", (2024, 1, 1), &freq_refs)];
        let ranked = top_words(&refs(&records)).unwrap();
        assert_eq!(ranked.len(), TOP_WORDS);
        assert_eq!(ranked[0], ("w29".to_string(), 30));
    }

    #[test]
    fn stacked_layers_accumulate_in_selection_order() {
        let records = vec![
            record("A", (2024, 1, 2), &[("beta", 3)]),
            record("A", (2024, 1, 1), &[("alpha", 2), ("beta", 1)]),
        ];
        let words = vec!["alpha".to_string(), "beta".to_string()];
        let layers = stacked_series(&refs(&records), &words).unwrap();

        let jan1 = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let jan2 = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();

        // Records are walked date-ascending; absent words contribute 0.
        assert_eq!(layers[0].upper, [(jan1, 2), (jan2, 0)]);
        assert_eq!(layers[1].upper, [(jan1, 3), (jan2, 3)]);
    }

    #[test]
    fn stacked_requires_words_and_records() {
        let records = vec![record("A", (2024, 1, 1), &[("w", 1)])];
        assert!(stacked_series(&refs(&records), &[]).is_none());
        assert!(stacked_series(&[], &["w".to_string()]).is_none());
    }
}
