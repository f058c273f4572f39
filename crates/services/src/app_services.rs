use std::sync::Arc;

use storage::repository::Storage;

use crate::calculator_service::CalculatorService;

/// Assembles app-facing services over a single session store.
#[derive(Clone)]
pub struct AppServices {
    calculator: Arc<CalculatorService>,
}

impl AppServices {
    /// Build services backed by the given storage.
    #[must_use]
    pub fn new(storage: &Storage) -> Self {
        let calculator = Arc::new(CalculatorService::new(Arc::clone(&storage.calculations)));
        Self { calculator }
    }

    /// Build services over a fresh, empty in-memory session.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(&Storage::in_memory())
    }

    #[must_use]
    pub fn calculator(&self) -> Arc<CalculatorService> {
        Arc::clone(&self.calculator)
    }
}
