mod calculation;

pub use calculation::{Calculation, CalculationError};
