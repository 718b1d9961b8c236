//! Ranking key shared by the correction engine.

/// Blend edit cost and log-scaled popularity into a single ranking key.
///
/// `priority = weight_cost * cost - weight_freq * log10(frequency + 1)`
///
/// Lower values are preferred, so a higher frequency improves (lowers) the
/// priority. This deliberately biases the search toward popular words; it is
/// a ranking philosophy, not a neutral distance metric. The `+ 1` keeps the
/// logarithm defined for zero-frequency entries (`log10(1) = 0`), which are
/// treated as maximally unpopular.
pub fn priority(cost: u32, frequency: f64, weight_cost: f64, weight_freq: f64) -> f64 {
    weight_cost * f64::from(cost) - weight_freq * (frequency + 1.0).log10()
}
