/// Ranks values in ascending order, assigning tied values the mean of the
/// ranks they span.
///
/// Ranks are 1-based and returned in input order. A set of `n` distinct values
/// yields a permutation of `1..=n`; ties share a fractional rank, so the sum of
/// all ranks is always `n * (n + 1) / 2`.
///
/// # Examples
///
/// ```
/// use timerespect_stats::rank::average_ranks;
///
/// assert_eq!(average_ranks(&[30.0, 10.0, 20.0]), vec![3.0, 1.0, 2.0]);
/// assert_eq!(average_ranks(&[5.0, 1.0, 5.0]), vec![2.5, 1.0, 2.5]);
/// assert!(average_ranks(&[]).is_empty());
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn average_ranks(values: &[f64]) -> Vec<f64> {
    let mut order = (0..values.len()).collect::<Vec<_>>();
    order.sort_by(|&a, &b| values[a].total_cmp(&values[b]));

    let mut ranks = vec![0.0; values.len()];
    let mut start = 0;
    while start < order.len() {
        let value = values[order[start]];
        let end = order[start..]
            .iter()
            .position(|&idx| values[idx].total_cmp(&value).is_ne())
            .map_or(order.len(), |offset| start + offset);
        // positions start..end hold ranks start+1..=end
        let rank = (start + 1 + end) as f64 / 2.0;
        for &idx in &order[start..end] {
            ranks[idx] = rank;
        }
        start = end;
    }
    ranks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distinct_values_form_permutation() {
        let ranks = average_ranks(&[4.0, 8.0, 1.0, 6.0]);
        assert_eq!(ranks, vec![2.0, 4.0, 1.0, 3.0]);
    }

    #[test]
    fn test_three_way_tie() {
        let ranks = average_ranks(&[2.0, 2.0, 2.0, 1.0]);
        assert_eq!(ranks, vec![3.0, 3.0, 3.0, 1.0]);
    }

    #[test]
    fn test_rank_sum_is_preserved_with_ties() {
        let values = [3.0, 1.0, 3.0, 2.0, 2.0, 9.0];
        let sum = average_ranks(&values).iter().sum::<f64>();
        assert_eq!(sum, 21.0);
    }
}
