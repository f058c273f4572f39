mod calculator;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use calculator::CalculatorView;
pub use state::{ViewError, ViewState, view_state_from_result};
