mod calculation_vm;
mod calculator_form_vm;

pub use calculation_vm::{CalculationCardVm, format_probability, map_calculation_cards};
pub use calculator_form_vm::{CalculatorFormVm, SubmitOutcome};
