//! Binomial probabilities for a fair coin.
//!
//! Everything is computed in `f64` with a plain iterative factorial. Beyond
//! roughly 20 flips the factorials stop being exact, and from 171 flips on they
//! overflow to infinity, so the final ratio comes out as `inf` or `NaN`. Callers
//! display whatever comes back.

/// Probability of heads on a single flip.
pub const FAIR_COIN: f64 = 0.5;

/// `m!` as a float. `0!` and `1!` are both `1`.
#[must_use]
pub fn factorial(m: u32) -> f64 {
    if m <= 1 {
        return 1.0;
    }

    let mut result = 1.0_f64;
    for i in 2..=m {
        result *= f64::from(i);
        // Infinity is absorbing; the remaining iterations cannot change it.
        if result.is_infinite() {
            break;
        }
    }
    result
}

/// Number of ways to pick `k` heads out of `n` flips, `n! / (k! * (n - k)!)`.
///
/// Returns `0.0` when `k > n`.
#[must_use]
pub fn binomial_coefficient(n: u32, k: u32) -> f64 {
    let Some(rest) = n.checked_sub(k) else {
        return 0.0;
    };
    factorial(n) / (factorial(k) * factorial(rest))
}

/// Probability, in `[0, 1]`, of exactly `k` heads in `n` fair flips.
///
/// Returns `0.0` when `k > n`.
#[must_use]
pub fn binomial_probability(n: u32, k: u32) -> f64 {
    let Some(tails) = n.checked_sub(k) else {
        return 0.0;
    };
    binomial_coefficient(n, k)
        * FAIR_COIN.powf(f64::from(k))
        * (1.0 - FAIR_COIN).powf(f64::from(tails))
}

/// [`binomial_probability`] scaled to a percentage.
#[must_use]
pub fn probability_percent(n: u32, k: u32) -> f64 {
    binomial_probability(n, k) * 100.0
}
