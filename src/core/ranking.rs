use std::collections::HashSet;
use std::hash::Hash;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RankingError {
    #[error("k must be at least 1")]
    InvalidK,
    #[error("predicted list has {len} items but k is {k}")]
    TooFewPredicted { len: usize, k: usize },
    #[error("batch contains no queries")]
    EmptyBatch,
    #[error("actual batch has {actual} queries but predicted batch has {predicted}")]
    LengthMismatch { actual: usize, predicted: usize },
}

/// Average precision at `k` for a single query.
///
/// Walks the top `k` entries of `predicted` in rank order and accumulates the
/// precision at every rank whose entry belongs to `actual`. The accumulated
/// sum is divided by the fixed cutoff `k` (not by the number of relevant
/// items), so missing relevant items inside the top `k` lower the score.
/// `predicted` must supply at least `k` entries; order is taken as given and
/// membership is exact equality.
pub fn apk<T>(actual: &[T], predicted: &[T], k: usize) -> Result<f64, RankingError>
where
    T: Eq + Hash,
{
    if k == 0 {
        return Err(RankingError::InvalidK);
    }
    if predicted.len() < k {
        return Err(RankingError::TooFewPredicted {
            len: predicted.len(),
            k,
        });
    }

    let relevant: HashSet<&T> = actual.iter().collect();

    let mut hits = 0usize;
    let mut sum = 0.0;
    for (m, item) in predicted[..k].iter().enumerate() {
        if relevant.contains(item) {
            hits += 1;
            sum += hits as f64 / (m + 1) as f64;
        }
    }

    Ok(sum / k as f64)
}

/// Mean average precision at `k` over a batch of queries.
///
/// The two batches must be aligned query-for-query; a length disagreement is
/// an error rather than a silent truncation of the longer batch.
pub fn mapk<T, A, P>(actual: &[A], predicted: &[P], k: usize) -> Result<f64, RankingError>
where
    T: Eq + Hash,
    A: AsRef<[T]>,
    P: AsRef<[T]>,
{
    let n = predicted.len();
    if n == 0 {
        return Err(RankingError::EmptyBatch);
    }
    if actual.len() != n {
        return Err(RankingError::LengthMismatch {
            actual: actual.len(),
            predicted: n,
        });
    }

    let mut sum = 0.0;
    for (a, p) in actual.iter().zip(predicted.iter()) {
        sum += apk(a.as_ref(), p.as_ref(), k)?;
    }

    Ok(sum / n as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_apk_perfect_prefix() {
        let score = apk(&[1, 2, 3], &[1, 2, 3, 4, 5], 3).unwrap();
        assert!((score - 1.0).abs() < EPS);
    }

    #[test]
    fn test_apk_late_hits() {
        // Hits at ranks 3, 4 and 5: (1/3 + 2/4 + 3/5) / 5
        let score = apk(&[1, 2, 3], &[4, 5, 1, 2, 3], 5).unwrap();
        let expected = (1.0 / 3.0 + 2.0 / 4.0 + 3.0 / 5.0) / 5.0;
        assert!((score - expected).abs() < EPS);
    }

    #[test]
    fn test_apk_no_hits() {
        let score = apk(&[7, 8], &[1, 2, 3], 3).unwrap();
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_apk_fixed_k_denominator() {
        // One relevant item found at rank 1, but the divisor stays k = 4.
        let score = apk(&[1], &[1, 9, 9, 9], 4).unwrap();
        assert!((score - 0.25).abs() < EPS);
    }

    #[test]
    fn test_apk_duplicate_predictions() {
        // Every occurrence of a relevant item counts toward precision.
        let score = apk(&[1], &[1, 1], 2).unwrap();
        assert!((score - 1.0).abs() < EPS);
    }

    #[test]
    fn test_apk_invalid_k() {
        assert!(matches!(apk(&[1], &[1, 2], 0), Err(RankingError::InvalidK)));
    }

    #[test]
    fn test_apk_too_few_predicted() {
        assert!(matches!(
            apk(&[1], &[1, 2], 3),
            Err(RankingError::TooFewPredicted { len: 2, k: 3 })
        ));
    }

    #[test]
    fn test_mapk_two_queries() {
        let actual = vec![vec![1, 2], vec![3]];
        let predicted = vec![vec![1, 2, 3], vec![3, 4, 5]];
        let score = mapk(&actual, &predicted, 2).unwrap();
        assert!((score - 0.75).abs() < EPS);
    }

    #[test]
    fn test_mapk_string_items() {
        let actual = vec![vec!["a"], vec!["b"]];
        let predicted = vec![vec!["a", "x"], vec!["x", "b"]];
        // Query 0: hit at rank 1 -> 1.0 / 2. Query 1: hit at rank 2 -> 0.5 / 2.
        let score = mapk(&actual, &predicted, 2).unwrap();
        assert!((score - 0.375).abs() < EPS);
    }

    #[test]
    fn test_mapk_empty_batch() {
        let empty: Vec<Vec<u32>> = Vec::new();
        assert!(matches!(
            mapk(&empty, &empty, 2),
            Err(RankingError::EmptyBatch)
        ));
    }

    #[test]
    fn test_mapk_length_mismatch() {
        let actual = vec![vec![1u32]];
        let predicted = vec![vec![1u32], vec![2u32]];
        assert!(matches!(
            mapk(&actual, &predicted, 1),
            Err(RankingError::LengthMismatch {
                actual: 1,
                predicted: 2
            })
        ));
    }

    #[test]
    fn test_mapk_propagates_apk_failure() {
        let actual = vec![vec![1u32]];
        let predicted = vec![vec![1u32]];
        assert!(matches!(
            mapk(&actual, &predicted, 5),
            Err(RankingError::TooFewPredicted { len: 1, k: 5 })
        ));
    }
}
