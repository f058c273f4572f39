use thiserror::Error;

use crate::probability::probability_percent;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CalculationError {
    #[error("at least one coin flip is required")]
    NoCoins,

    #[error("heads ({heads}) cannot exceed coin flips ({coins})")]
    HeadsExceedCoins { heads: u32, coins: u32 },
}

/// One finished probability calculation.
///
/// Always satisfies `coins >= 1` and `heads <= coins`. The probability is stored
/// as a percentage and is not guaranteed to be finite for large `coins`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calculation {
    coins: u32,
    heads: u32,
    probability: f64,
}

impl Calculation {
    /// Run the probability engine for `heads` out of `coins` flips.
    ///
    /// # Errors
    ///
    /// Returns `CalculationError::NoCoins` if `coins` is zero.
    /// Returns `CalculationError::HeadsExceedCoins` if `heads > coins`.
    pub fn new(coins: u32, heads: u32) -> Result<Self, CalculationError> {
        if coins == 0 {
            return Err(CalculationError::NoCoins);
        }
        if heads > coins {
            return Err(CalculationError::HeadsExceedCoins { heads, coins });
        }

        Ok(Self {
            coins,
            heads,
            probability: probability_percent(coins, heads),
        })
    }

    #[must_use]
    pub fn coins(&self) -> u32 {
        self.coins
    }

    #[must_use]
    pub fn heads(&self) -> u32 {
        self.heads
    }

    /// Probability of the outcome as a percentage.
    #[must_use]
    pub fn probability(&self) -> f64 {
        self.probability
    }
}
