/// A set of percentiles computed in one pass over a dataset.
///
/// Points are kept in the order they were requested and looked up by exact
/// percentile.
///
/// ```
/// use timerespect_stats::percentiles::Percentiles;
///
/// let values = [10.0, 1.0, 9.0, 2.0, 8.0, 3.0, 7.0, 4.0, 6.0, 5.0];
/// let quartiles = Percentiles::new(&values, &[25.0, 50.0, 75.0]);
///
/// assert_eq!(quartiles.get(50.0), Some(5.5));
/// assert_eq!(quartiles.get(25.0), Some(3.25));
/// assert_eq!(quartiles.get(90.0), None);
/// ```
#[derive(Debug, Clone)]
pub struct Percentiles {
    /// `(percentile, value)` pairs with percentiles in `0.0..=100.0`.
    points: Vec<(f64, f64)>,
}

impl Percentiles {
    /// # Panics
    ///
    /// Panics if `sorted_values` is not in ascending order.
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64], percentile_points: &[f64]) -> Self {
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "percentiles need ascending input"
        );
        let points = percentile_points
            .iter()
            .map(|&p| (p, compute_percentile(sorted_values, p)))
            .collect();
        Self { points }
    }

    /// Sorts a copy of `values` and computes the requested points.
    #[must_use]
    pub fn new(values: &[f64], percentile_points: &[f64]) -> Self {
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);
        Self::from_sorted(&sorted, percentile_points)
    }

    /// Value at `percentile`, if it was one of the requested points.
    #[must_use]
    pub fn get(&self, percentile: f64) -> Option<f64> {
        self.points
            .iter()
            .find(|(p, _)| (p - percentile).abs() < f64::EPSILON)
            .map(|&(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.points.iter().copied()
    }
}

/// Computes a single percentile value from sorted data.
///
/// Uses linear interpolation between the closest ranks: for `n` values the
/// k-th percentile sits at fractional position `(n - 1) * k / 100`, and the
/// result is interpolated between the two values that bracket that position.
/// This is the same rule as the "linear" method of common dataframe libraries,
/// so the result is fully determined by the input.
///
/// # Returns
///
/// The value at the specified percentile. Returns `f64::NAN` if the input is empty.
///
/// # Examples
///
/// ```
/// use timerespect_stats::percentiles::compute_percentile;
///
/// let values = vec![1.0, 2.0, 3.0, 4.0];
///
/// assert_eq!(compute_percentile(&values, 50.0), 2.5);
/// assert_eq!(compute_percentile(&values, 0.0), 1.0);
/// assert_eq!(compute_percentile(&values, 100.0), 4.0);
/// ```
#[expect(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss
)]
#[must_use]
pub fn compute_percentile(sorted_values: &[f64], percentile: f64) -> f64 {
    let Some(&last) = sorted_values.last() else {
        return f64::NAN;
    };
    let max_index = sorted_values.len() - 1;
    let position = (max_index as f64 * percentile.clamp(0.0, 100.0)) / 100.0;
    let lower = position.floor() as usize;
    if lower >= max_index {
        return last;
    }
    let fraction = position - lower as f64;
    let low = sorted_values[lower];
    let high = sorted_values[lower + 1];
    low + (high - low) * fraction
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_nan() {
        assert!(compute_percentile(&[], 50.0).is_nan());
    }

    #[test]
    fn test_single_value() {
        assert_eq!(compute_percentile(&[7.0], 0.0), 7.0);
        assert_eq!(compute_percentile(&[7.0], 99.0), 7.0);
    }

    #[test]
    fn test_interpolates_between_ranks() {
        // 101 values 0..=100: the k-th percentile is exactly k.
        let values = (0..=100).map(f64::from).collect::<Vec<_>>();
        assert_eq!(compute_percentile(&values, 99.0), 99.0);

        // 11 values 0..=10: P99 sits at position 9.9.
        let values = (0..=10).map(f64::from).collect::<Vec<_>>();
        let p99 = compute_percentile(&values, 99.0);
        assert!((p99 - 9.9).abs() < 1e-9);
    }

    #[test]
    fn test_out_of_range_percentiles_are_clamped() {
        let values = [1.0, 2.0, 3.0];
        assert_eq!(compute_percentile(&values, -5.0), 1.0);
        assert_eq!(compute_percentile(&values, 150.0), 3.0);
    }

    #[test]
    fn test_repeated_runs_are_identical() {
        let values = [0.3, 1.7, 2.2, 9.1, 12.5, 40.0];
        let a = compute_percentile(&values, 99.0);
        let b = compute_percentile(&values, 99.0);
        assert_eq!(a.to_bits(), b.to_bits());
    }

    #[test]
    fn test_percentiles_keep_request_order() {
        let percentiles = Percentiles::new(&[4.0, 1.0, 3.0, 2.0], &[75.0, 25.0]);
        let points = percentiles.iter().map(|(p, _)| p).collect::<Vec<_>>();
        assert_eq!(points, vec![75.0, 25.0]);
    }
}
