//! Interval analyzer for consecutive award wins per producer.
//!
//! Consumes the winner records of the dataset, groups win years per
//! producer, derives the interval between each pair of consecutive wins,
//! and reduces the full interval collection to the producers with the
//! global minimum and maximum interval (keeping all ties).

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::producers::parse_producers;

/// A winning movie as the analyzer sees it: the award year and the raw
/// producer credit string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinRecord {
    pub year: i32,
    pub producers: String,
}

/// The interval between two consecutive wins by one producer.
///
/// `interval` is always `following_win - previous_win` and strictly
/// positive, since win years per producer are kept as a set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProducerInterval {
    pub producer: String,
    pub interval: i32,
    pub previous_win: i32,
    pub following_win: i32,
}

/// The analysis result: every interval tying the global minimum, and every
/// interval tying the global maximum.
///
/// Both lists are sorted by producer name, then by `previous_win`. Both are
/// empty when no producer has two or more wins; that is a valid outcome,
/// not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntervalReport {
    pub min: Vec<ProducerInterval>,
    pub max: Vec<ProducerInterval>,
}

/// Compute the min/max interval report over a set of winning movies.
///
/// Pure and synchronous; safe to call concurrently from independent
/// requests. Input order does not affect the result.
pub fn compute_intervals(winners: &[WinRecord]) -> IntervalReport {
    let years_by_producer = group_win_years(winners);
    tracing::debug!(producers = years_by_producer.len(), "grouped win years");
    let intervals = consecutive_intervals(&years_by_producer);
    reduce_extremes(&intervals)
}

/// Group win years per producer name.
///
/// Years are collected into a `BTreeSet`: a producer co-winning with two
/// movies in the same year counts that year once, so no zero-length
/// interval can be produced. The outer `BTreeMap` keys by trimmed producer
/// name, which also fixes the output order of the later steps.
fn group_win_years(winners: &[WinRecord]) -> BTreeMap<String, BTreeSet<i32>> {
    let mut years_by_producer: BTreeMap<String, BTreeSet<i32>> = BTreeMap::new();
    for record in winners {
        for producer in parse_producers(&record.producers) {
            years_by_producer
                .entry(producer)
                .or_default()
                .insert(record.year);
        }
    }
    years_by_producer
}

/// Derive one interval per consecutive pair of win years, for every
/// producer with at least two wins. Producers with a single win contribute
/// nothing.
///
/// Iteration over the `BTreeMap` and each ascending year set means the
/// returned collection is already ordered by `(producer, previous_win)`.
fn consecutive_intervals(
    years_by_producer: &BTreeMap<String, BTreeSet<i32>>,
) -> Vec<ProducerInterval> {
    let mut intervals = Vec::new();
    for (producer, years) in years_by_producer {
        if years.len() < 2 {
            continue;
        }
        for (previous, following) in years.iter().zip(years.iter().skip(1)) {
            intervals.push(ProducerInterval {
                producer: producer.clone(),
                interval: following - previous,
                previous_win: *previous,
                following_win: *following,
            });
        }
    }
    intervals
}

/// Reduce the full interval collection to the min and max tie sets.
///
/// The collection is materialized first and then filtered against the
/// computed extreme values, so tie bookkeeping never depends on iteration
/// order. Filtering preserves the deterministic order established by
/// [`consecutive_intervals`].
fn reduce_extremes(intervals: &[ProducerInterval]) -> IntervalReport {
    let Some(min_value) = intervals.iter().map(|i| i.interval).min() else {
        return IntervalReport::default();
    };
    let max_value = intervals
        .iter()
        .map(|i| i.interval)
        .max()
        .unwrap_or(min_value);

    let select = |value: i32| {
        intervals
            .iter()
            .filter(|i| i.interval == value)
            .cloned()
            .collect::<Vec<_>>()
    };

    IntervalReport {
        min: select(min_value),
        max: select(max_value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn win(year: i32, producers: &str) -> WinRecord {
        WinRecord {
            year,
            producers: producers.into(),
        }
    }

    fn interval(producer: &str, previous: i32, following: i32) -> ProducerInterval {
        ProducerInterval {
            producer: producer.into(),
            interval: following - previous,
            previous_win: previous,
            following_win: following,
        }
    }

    #[test]
    fn test_empty_input_yields_empty_report() {
        let report = compute_intervals(&[]);
        assert!(report.min.is_empty());
        assert!(report.max.is_empty());
    }

    #[test]
    fn test_single_win_producers_are_excluded() {
        let report = compute_intervals(&[win(1980, "Allan Carr"), win(1981, "Frank Yablans")]);
        assert!(report.min.is_empty());
        assert!(report.max.is_empty());
    }

    #[test]
    fn test_two_wins_single_producer() {
        let report = compute_intervals(&[win(1990, "Joel Silver"), win(1991, "Joel Silver")]);
        assert_eq!(report.min, vec![interval("Joel Silver", 1990, 1991)]);
        assert_eq!(report.max, vec![interval("Joel Silver", 1990, 1991)]);
    }

    #[test]
    fn test_min_and_max_from_distinct_producers() {
        let report = compute_intervals(&[
            win(1990, "Joel Silver"),
            win(1991, "Joel Silver"),
            win(2002, "Matthew Vaughn"),
            win(2015, "Matthew Vaughn"),
        ]);
        assert_eq!(report.min, vec![interval("Joel Silver", 1990, 1991)]);
        assert_eq!(report.max, vec![interval("Matthew Vaughn", 2002, 2015)]);
    }

    #[test]
    fn test_producer_with_three_wins_yields_two_intervals() {
        let report = compute_intervals(&[
            win(2000, "Bo Derek"),
            win(2004, "Bo Derek"),
            win(2010, "Bo Derek"),
        ]);
        assert_eq!(report.min, vec![interval("Bo Derek", 2000, 2004)]);
        assert_eq!(report.max, vec![interval("Bo Derek", 2004, 2010)]);
    }

    #[test]
    fn test_same_producer_can_appear_in_both_lists() {
        // Only one multi-win producer: its single interval is both min and max.
        let report = compute_intervals(&[win(1985, "Buzz Feitshans"), win(1994, "Buzz Feitshans")]);
        assert_eq!(report.min, report.max);
        assert_eq!(report.min.len(), 1);
    }

    #[test]
    fn test_ties_are_all_kept_and_sorted_by_producer() {
        let report = compute_intervals(&[
            win(1990, "Zed Alpha"),
            win(1991, "Zed Alpha"),
            win(1980, "Ann Beta"),
            win(1981, "Ann Beta"),
        ]);
        assert_eq!(
            report.min,
            vec![
                interval("Ann Beta", 1980, 1981),
                interval("Zed Alpha", 1990, 1991),
            ]
        );
        assert_eq!(report.min, report.max);
    }

    #[test]
    fn test_equal_intervals_within_one_producer_sorted_by_previous_win() {
        let report = compute_intervals(&[
            win(2000, "Bo Derek"),
            win(2002, "Bo Derek"),
            win(2004, "Bo Derek"),
        ]);
        assert_eq!(
            report.min,
            vec![interval("Bo Derek", 2000, 2002), interval("Bo Derek", 2002, 2004)]
        );
    }

    #[test]
    fn test_shared_credit_counts_for_each_producer() {
        let report = compute_intervals(&[
            win(1990, "Steve Perry and Joel Silver"),
            win(1991, "Joel Silver"),
        ]);
        // Steve Perry has a single win and must not appear.
        assert_eq!(report.min, vec![interval("Joel Silver", 1990, 1991)]);
        assert_eq!(report.max, vec![interval("Joel Silver", 1990, 1991)]);
    }

    #[test]
    fn test_same_year_co_wins_are_deduplicated() {
        // Two winning movies in 1990 crediting the same producer: set
        // semantics, so no zero interval exists.
        let report = compute_intervals(&[
            win(1990, "Bo Derek"),
            win(1990, "Bo Derek and John Derek"),
            win(1994, "Bo Derek"),
        ]);
        assert_eq!(report.min, vec![interval("Bo Derek", 1990, 1994)]);
        assert!(report.min.iter().all(|i| i.interval > 0));
    }

    #[test]
    fn test_input_order_does_not_affect_result() {
        let mut records = vec![
            win(2015, "Matthew Vaughn"),
            win(1991, "Joel Silver"),
            win(2002, "Matthew Vaughn"),
            win(1990, "Joel Silver"),
        ];
        let forward = compute_intervals(&records);
        records.reverse();
        let backward = compute_intervals(&records);
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_analysis_is_idempotent() {
        let records = vec![
            win(1990, "Joel Silver"),
            win(1991, "Joel Silver"),
            win(2002, "Matthew Vaughn"),
            win(2015, "Matthew Vaughn"),
        ];
        assert_eq!(compute_intervals(&records), compute_intervals(&records));
    }

    #[test]
    fn test_report_serializes_with_wire_field_names() {
        let report = compute_intervals(&[win(1990, "Joel Silver"), win(1991, "Joel Silver")]);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["min"][0]["producer"], "Joel Silver");
        assert_eq!(json["min"][0]["interval"], 1);
        assert_eq!(json["min"][0]["previousWin"], 1990);
        assert_eq!(json["min"][0]["followingWin"], 1991);
    }
}
