//! Weighted random choice over a candidate slice.

use rand::Rng;

/// Draw one item with probability proportional to its weight.
///
/// A threshold is drawn uniformly in `[0, sum(weights))` and the slice is
/// walked accumulating weight; the first item whose cumulative weight
/// reaches the threshold wins. If every weight is zero the first item is
/// returned. Lengths must match and be non-zero; weights must be
/// non-negative — violations are caller bugs and abort.
pub fn weighted_choice<T, R>(items: &[T], weights: &[f64], rng: &mut R) -> T
where
    T: Copy,
    R: Rng + ?Sized,
{
    assert_eq!(items.len(), weights.len(), "items/weights length mismatch");
    assert!(!items.is_empty(), "cannot sample from an empty slice");

    let total: f64 = weights.iter().sum();
    if total <= 0.0 {
        return items[0];
    }
    let threshold: f64 = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for (item, &w) in items.iter().zip(weights.iter()) {
        cumulative += w;
        if cumulative >= threshold {
            return *item;
        }
    }
    // float rounding can leave the threshold just above the final sum
    items[items.len() - 1]
}
