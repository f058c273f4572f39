mod components;
mod scripts;
mod view;

pub use view::CalculatorView;
