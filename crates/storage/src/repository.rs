use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use coinflip_core::model::Calculation;
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("lock poisoned: {0}")]
    Lock(String),
}

/// Session-scoped list of finished calculations.
///
/// Ordering is by insertion time, newest first. Nothing is evicted and nothing
/// outlives the process.
pub trait CalculationRepository: Send + Sync {
    /// Record a calculation as the newest entry.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the calculation cannot be stored.
    fn append(&self, calculation: &Calculation) -> Result<(), StorageError>;

    /// Every stored calculation, newest first.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the list cannot be read.
    fn list_all(&self) -> Result<Vec<Calculation>, StorageError>;

    /// Number of stored calculations.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the list cannot be read.
    fn len(&self) -> Result<usize, StorageError> {
        Ok(self.list_all()?.len())
    }

    /// # Errors
    ///
    /// Returns `StorageError` if the list cannot be read.
    fn is_empty(&self) -> Result<bool, StorageError> {
        Ok(self.len()? == 0)
    }
}

/// In-memory repository; the only backend the calculator has.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    calculations: Arc<Mutex<VecDeque<Calculation>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl CalculationRepository for InMemoryRepository {
    fn append(&self, calculation: &Calculation) -> Result<(), StorageError> {
        let mut guard = self
            .calculations
            .lock()
            .map_err(|e| StorageError::Lock(e.to_string()))?;
        guard.push_front(*calculation);
        Ok(())
    }

    fn list_all(&self) -> Result<Vec<Calculation>, StorageError> {
        let guard = self
            .calculations
            .lock()
            .map_err(|e| StorageError::Lock(e.to_string()))?;
        Ok(guard.iter().copied().collect())
    }

    fn len(&self) -> Result<usize, StorageError> {
        let guard = self
            .calculations
            .lock()
            .map_err(|e| StorageError::Lock(e.to_string()))?;
        Ok(guard.len())
    }
}

/// Repositories behind trait objects so the composition root can swap backends.
#[derive(Clone)]
pub struct Storage {
    pub calculations: Arc<dyn CalculationRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let calculations: Arc<dyn CalculationRepository> = Arc::new(InMemoryRepository::new());
        Self { calculations }
    }
}
