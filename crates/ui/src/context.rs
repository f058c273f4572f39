use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use services::CalculatorService;

pub trait UiApp: Send + Sync {
    fn open_dialog_on_launch(&self) -> bool;

    fn calculator(&self) -> Arc<CalculatorService>;
}

#[derive(Clone)]
pub struct AppContext {
    open_dialog_on_launch_once: Arc<AtomicBool>,

    calculator: Arc<CalculatorService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            open_dialog_on_launch_once: Arc::new(AtomicBool::new(app.open_dialog_on_launch())),
            calculator: app.calculator(),
        }
    }

    /// Returns the launch flag once; every later call returns `false`.
    #[must_use]
    pub fn take_open_dialog_on_launch(&self) -> bool {
        self.open_dialog_on_launch_once.swap(false, Ordering::AcqRel)
    }

    #[must_use]
    pub fn calculator(&self) -> Arc<CalculatorService> {
        Arc::clone(&self.calculator)
    }
}

// Provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
