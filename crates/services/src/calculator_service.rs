use std::sync::Arc;

use coinflip_core::model::Calculation;
use storage::repository::CalculationRepository;
use tracing::{debug, info};

use crate::error::CalculatorError;
use crate::input::validate_input;

/// Runs submitted flips through the probability engine and records results.
#[derive(Clone)]
pub struct CalculatorService {
    calculations: Arc<dyn CalculationRepository>,
}

impl CalculatorService {
    #[must_use]
    pub fn new(calculations: Arc<dyn CalculationRepository>) -> Self {
        Self { calculations }
    }

    /// Validate raw form text, compute the probability and prepend the result.
    ///
    /// Nothing is stored when validation fails.
    ///
    /// # Errors
    ///
    /// Returns `CalculatorError::InvalidInput` if either field is rejected.
    /// Returns `CalculatorError::Storage` if the result cannot be recorded.
    pub fn submit(&self, coins_raw: &str, heads_raw: &str) -> Result<Calculation, CalculatorError> {
        let input = validate_input(coins_raw, heads_raw).inspect_err(|err| {
            debug!(coins = coins_raw, heads = heads_raw, %err, "rejected calculator input");
        })?;
        self.calculate(input.coins, input.heads)
    }

    /// Compute and record an already-typed request.
    ///
    /// # Errors
    ///
    /// Returns `CalculatorError::Calculation` if `coins` is zero or `heads > coins`.
    /// Returns `CalculatorError::Storage` if the result cannot be recorded.
    pub fn calculate(&self, coins: u32, heads: u32) -> Result<Calculation, CalculatorError> {
        let calculation = Calculation::new(coins, heads)?;
        self.calculations.append(&calculation)?;
        info!(
            coins,
            heads,
            probability = calculation.probability(),
            "recorded calculation"
        );
        Ok(calculation)
    }

    /// Every calculation of this session, newest first.
    ///
    /// # Errors
    ///
    /// Returns `CalculatorError::Storage` if repository access fails.
    pub fn list_all(&self) -> Result<Vec<Calculation>, CalculatorError> {
        Ok(self.calculations.list_all()?)
    }

    /// # Errors
    ///
    /// Returns `CalculatorError::Storage` if repository access fails.
    pub fn count(&self) -> Result<usize, CalculatorError> {
        Ok(self.calculations.len()?)
    }
}
