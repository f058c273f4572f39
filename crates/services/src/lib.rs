#![forbid(unsafe_code)]

pub mod app_services;
pub mod calculator_service;
pub mod error;
pub mod input;

pub use app_services::AppServices;
pub use calculator_service::CalculatorService;
pub use error::{CalculatorError, INVALID_INPUT_MESSAGE, InvalidInputError};
pub use input::{InputField, ValidatedInput, validate_input};
