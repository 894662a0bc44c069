//! Weighted median
//!
//! Every median in the analysis engine (population insight, per-genre tables,
//! sensitivity ladders, score contexts) goes through [`weighted_median`], so
//! the cutoff rule below is the single definition used across the project.
//!
//! # Cutoff Rule
//!
//! ```text
//! values   : 10   20   30   40
//! weights  :  1    1    5    1      total = 8, cutoff = 4
//! cumsum   :  1    2    7    8
//!                        ^ first cumsum >= cutoff -> 30
//! ```
//!
//! Values are ordered with a stable sort, so observations with equal values
//! keep their input order. Because tied observations carry the same value,
//! the returned number does not depend on which of them crosses the cutoff.

/// Returns the value at which the cumulative weight first reaches half of the
/// total weight mass.
///
/// `values` and `weights` are parallel slices. Weights must be non-negative but
/// need not sum to one. Values are sorted ascending (stable), the weights are
/// accumulated in that order, and the value at the first index whose cumulative
/// weight is `>= total / 2` is returned. If rounding keeps the cumulative sum
/// below the cutoff, the largest value is returned.
///
/// An empty input returns the sentinel `0.0` rather than failing. Callers whose
/// input may be empty must treat `0.0` as "no data".
///
/// # Panics
///
/// Panics if `values` and `weights` have different lengths.
///
/// # Examples
///
/// ```
/// use timerespect_stats::weighted::weighted_median;
///
/// assert_eq!(weighted_median(&[5.0], &[1.0]), 5.0);
/// assert_eq!(weighted_median(&[], &[]), 0.0);
/// assert_eq!(weighted_median(&[3.0, 1.0, 2.0], &[1.0, 1.0, 1.0]), 2.0);
/// assert_eq!(weighted_median(&[10.0, 20.0, 30.0, 40.0], &[1.0, 1.0, 5.0, 1.0]), 30.0);
/// ```
#[must_use]
pub fn weighted_median(values: &[f64], weights: &[f64]) -> f64 {
    assert_eq!(
        values.len(),
        weights.len(),
        "values and weights must have the same length"
    );
    if values.is_empty() {
        return 0.0;
    }

    let mut order = (0..values.len()).collect::<Vec<_>>();
    order.sort_by(|&a, &b| values[a].total_cmp(&values[b]));

    let total = weights.iter().sum::<f64>();
    let cutoff = total / 2.0;

    let mut cumulative = 0.0;
    for &idx in &order {
        cumulative += weights[idx];
        if cumulative >= cutoff {
            return values[idx];
        }
    }
    order.last().map_or(0.0, |&idx| values[idx])
}

/// Convenience wrapper computing the weighted median of `(value, weight)` pairs.
///
/// ```
/// use timerespect_stats::weighted::weighted_median_by;
///
/// let pairs = [(50.0, 5.0), (50.0, 5.0), (10.0, 500.0)];
/// assert_eq!(weighted_median_by(pairs), 10.0);
/// ```
#[must_use]
pub fn weighted_median_by<I>(pairs: I) -> f64
where
    I: IntoIterator<Item = (f64, f64)>,
{
    let (values, weights): (Vec<f64>, Vec<f64>) = pairs.into_iter().unzip();
    weighted_median(&values, &weights)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_weights_match_ordinary_median() {
        assert_eq!(weighted_median(&[1.0, 2.0, 3.0], &[1.0, 1.0, 1.0]), 2.0);
        assert_eq!(
            weighted_median(&[9.0, 1.0, 5.0, 7.0, 3.0], &[2.0, 2.0, 2.0, 2.0, 2.0]),
            5.0
        );
    }

    #[test]
    fn test_even_count_returns_lower_middle() {
        // cumsum reaches exactly half at the second value
        assert_eq!(weighted_median(&[1.0, 2.0, 3.0, 4.0], &[1.0; 4]), 2.0);
    }

    #[test]
    fn test_weight_dominates_record_count() {
        let mut values = vec![50.0; 150];
        let mut weights = vec![5.0; 150];
        values.extend([10.0; 50]);
        weights.extend([500.0; 50]);
        assert_eq!(weighted_median(&values, &weights), 10.0);

        // with uniform weights the majority wins
        assert_eq!(weighted_median(&values, &[1.0; 200]), 50.0);
    }

    #[test]
    fn test_zero_weights_return_smallest() {
        assert_eq!(weighted_median(&[4.0, 2.0, 8.0], &[0.0, 0.0, 0.0]), 2.0);
    }

    #[test]
    fn test_input_order_does_not_matter() {
        let a = weighted_median(&[1.0, 5.0, 3.0, 5.0], &[2.0, 1.0, 4.0, 3.0]);
        let b = weighted_median(&[5.0, 3.0, 5.0, 1.0], &[3.0, 4.0, 1.0, 2.0]);
        assert_eq!(a, b);
    }

    #[test]
    #[should_panic(expected = "same length")]
    fn test_mismatched_lengths_panic() {
        let _ = weighted_median(&[1.0, 2.0], &[1.0]);
    }
}
