//! Utility functions for the akinator crate

/// Shannon entropy in bits of a probability distribution.
///
/// H = -Σ(p * log2(p)) for p > 0; zero-mass entries contribute nothing.
///
/// # Examples
///
/// ```
/// use akinator::utils::shannon_entropy_bits;
///
/// // Fair coin carries one bit
/// assert!((shannon_entropy_bits(vec![0.5, 0.5]) - 1.0).abs() < 1e-12);
///
/// // Deterministic distribution (zero entropy, no NaN from log2(0))
/// assert_eq!(shannon_entropy_bits(vec![1.0, 0.0, 0.0]), 0.0);
/// ```
pub fn shannon_entropy_bits<I>(probabilities: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    probabilities
        .into_iter()
        .filter(|&p| p > 0.0)
        .map(|p| -p * p.log2())
        .sum()
}

/// Normalize weights to probabilities that sum to 1.0.
///
/// Returns `None` when the weights are empty or their total is zero or not
/// finite.
///
/// # Examples
///
/// ```
/// use akinator::utils::normalize_weights;
///
/// assert_eq!(normalize_weights(vec![1.0, 2.0, 1.0]), Some(vec![0.25, 0.5, 0.25]));
/// assert_eq!(normalize_weights(vec![0.0, 0.0]), None);
/// ```
pub fn normalize_weights<I>(weights: I) -> Option<Vec<f64>>
where
    I: IntoIterator<Item = f64>,
{
    let weights: Vec<f64> = weights.into_iter().collect();
    let total: f64 = weights.iter().sum();
    if weights.is_empty() || !total.is_finite() || total <= 0.0 {
        return None;
    }
    Some(weights.iter().map(|&w| w / total).collect())
}

/// Uniform distribution over `len` outcomes.
pub fn uniform(len: usize) -> Vec<f64> {
    if len == 0 {
        return Vec::new();
    }
    vec![1.0 / len as f64; len]
}

/// Index of the first maximal value, treating values within `tolerance` of the
/// running best as ties (the earlier index wins).
pub fn first_argmax_with_tolerance<I>(values: I, tolerance: f64) -> Option<usize>
where
    I: IntoIterator<Item = f64>,
{
    let mut best: Option<(usize, f64)> = None;
    for (idx, value) in values.into_iter().enumerate() {
        match best {
            Some((_, best_value)) if value <= best_value + tolerance => {}
            _ => best = Some((idx, value)),
        }
    }
    best.map(|(idx, _)| idx)
}
