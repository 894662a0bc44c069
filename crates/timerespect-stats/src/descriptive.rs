//! Unweighted central tendency
//!
//! Both functions take any iterator of `f64` and return `None` for an empty
//! input, leaving the choice of a fallback to the caller.

/// Arithmetic mean of the values, or `None` when there are none.
///
/// ```
/// # use timerespect_stats::descriptive::mean;
/// assert_eq!(mean([1.0, 2.0, 6.0]), Some(3.0));
/// assert_eq!(mean([]), None);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn mean<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0_usize), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| sum / count as f64)
}

/// Median of the values, or `None` when there are none.
///
/// An even number of values yields the midpoint of the two middle values.
///
/// ```
/// # use timerespect_stats::descriptive::median;
/// assert_eq!(median([3.0, 1.0, 2.0]), Some(2.0));
/// assert_eq!(median([4.0, 1.0, 3.0, 2.0]), Some(2.5));
/// assert_eq!(median([]), None);
/// ```
#[must_use]
pub fn median<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let mut sorted = values.into_iter().collect::<Vec<_>>();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    match sorted.len() {
        0 => None,
        n if n % 2 == 0 => Some(f64::midpoint(sorted[mid - 1], sorted[mid])),
        _ => Some(sorted[mid]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert!(mean(std::iter::empty()).is_none());
        assert!(median(std::iter::empty()).is_none());
    }

    #[test]
    fn test_single_value() {
        assert_eq!(mean([7.5]), Some(7.5));
        assert_eq!(median([7.5]), Some(7.5));
    }

    #[test]
    fn test_median_ignores_input_order() {
        let values = [9.0, 2.0, 4.0, 4.0, 5.0, 7.0, 5.0, 4.0];
        assert_eq!(median(values), Some(4.5));
        let mut reversed = values;
        reversed.reverse();
        assert_eq!(median(reversed), Some(4.5));
        assert_eq!(mean(values), Some(5.0));
    }

    #[test]
    fn test_median_is_robust_to_outliers() {
        assert_eq!(median([1.0, 2.0, 3.0, 1000.0, 2.5]), Some(2.5));
    }
}
