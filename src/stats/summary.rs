use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Returned by [`summarize`] when there is nothing to summarize.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("cannot summarize an empty sequence")]
pub struct EmptyInput;

/// Summary statistics over a non-empty sequence of values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub min: f64,
    pub max: f64,
    pub count: usize,
    pub sum: f64,
    pub median: f64,
}

/// Compute min, max, count, sum and median of `values`.
pub fn summarize(values: &[f64]) -> Result<Summary, EmptyInput> {
    if values.is_empty() {
        return Err(EmptyInput);
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    Ok(Summary {
        min: sorted[0],
        max: sorted[sorted.len() - 1],
        count: sorted.len(),
        sum: values.iter().sum(),
        median: median(&sorted),
    })
}

/// Median of a **sorted**, non-empty slice: the middle value for odd lengths,
/// the mean of the two middle values for even lengths.
fn median(sorted: &[f64]) -> f64 {
    debug_assert!(!sorted.is_empty(), "median of an empty slice");
    let len = sorted.len();
    let mid = len / 2;
    if len % 2 == 1 {
        sorted[mid]
    } else {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summarize_empty_is_error() {
        assert_eq!(summarize(&[]), Err(EmptyInput));
    }

    #[test]
    fn test_summarize_single_value() {
        let summary = summarize(&[6.0]).unwrap();

        assert_eq!(
            summary,
            Summary {
                min: 6.0,
                max: 6.0,
                count: 1,
                sum: 6.0,
                median: 6.0,
            }
        );
    }

    #[test]
    fn test_summarize_unsorted_input() {
        let summary = summarize(&[3.0, -1.0, 10.0, 2.0, 4.0]).unwrap();

        assert_eq!(summary.min, -1.0);
        assert_eq!(summary.max, 10.0);
        assert_eq!(summary.count, 5);
        assert_eq!(summary.sum, 18.0);
        assert_eq!(summary.median, 3.0);
    }

    #[test]
    fn test_median_even_length_averages_middle_pair() {
        assert_eq!(median(&[1.0, 2.0, 3.0, 4.0]), 2.5);
        assert_eq!(summarize(&[4.0, 1.0, 3.0, 2.0]).unwrap().median, 2.5);
    }

    #[test]
    fn test_median_odd_length_takes_middle() {
        assert_eq!(median(&[1.0, 2.0, 3.0]), 2.0);
    }

    #[test]
    fn test_summarize_keeps_duplicates() {
        let summary = summarize(&[2.0, 2.0, 2.0, 8.0]).unwrap();

        assert_eq!(summary.count, 4);
        assert_eq!(summary.sum, 14.0);
        assert_eq!(summary.median, 2.0);
    }

    #[test]
    fn test_summary_serializes_flat_fields() {
        let summary = summarize(&[1.0, 2.0, 3.0]).unwrap();

        let json = serde_json::to_value(summary).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "min": 1.0,
                "max": 3.0,
                "count": 3,
                "sum": 6.0,
                "median": 2.0,
            })
        );
    }
}
