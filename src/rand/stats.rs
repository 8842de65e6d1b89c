//! Uniformity statistics for checking sampler output.

/// Pearson chi-square statistic of `counts` against a uniform distribution.
pub fn chi_square(counts: &[u64]) -> f64 {
    let total: u64 = counts.iter().sum();
    if counts.is_empty() || total == 0 {
        return 0.0;
    }
    let expected = total as f64 / counts.len() as f64;
    counts
        .iter()
        .map(|&observed| {
            let d = observed as f64 - expected;
            d * d / expected
        })
        .sum()
}

/// Approximate upper critical value of the chi-square distribution with `df`
/// degrees of freedom, for a one-sided standard normal quantile `z`
/// (Wilson-Hilferty transformation).
pub fn critical_value(df: usize, z: f64) -> f64 {
    let k = df as f64;
    let h = 2.0 / (9.0 * k);
    k * (1.0 - h + z * h.sqrt()).powi(3)
}
