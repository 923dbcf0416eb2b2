//! Traits describing the bin store and clock, plus the shared error type.

use async_trait::async_trait;
use chrono::{Local, NaiveDateTime, SubsecRound};

use crate::model::{Bin, BinId};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
/// Errors that can occur while working with the bin store.
pub enum BinError {
    /// No bin carries the requested identifier.
    #[error("Bin not found: {0}")]
    NotFound(BinId),
}

/// In-place edit of a stored bin.
pub type BinChange = Box<dyn FnOnce(&mut Bin) + Send>;

#[async_trait]
/// Backend holding the bin records.
pub trait BinStore: Send + Sync {
    /// All bins in insertion order.
    async fn list(&self) -> Vec<Bin>;

    /// Look up a single bin.
    ///
    /// # Errors
    ///
    /// Returns [`BinError::NotFound`] when no bin has the identifier.
    async fn get(&self, id: BinId) -> Result<Bin, BinError>;

    /// Apply `change` to the stored bin and return the result.
    ///
    /// The change runs while the record is exclusively held, so concurrent
    /// modifications of one bin never overwrite each other's fields wholesale.
    /// Never inserts a new record.
    ///
    /// # Errors
    ///
    /// Returns [`BinError::NotFound`] when no bin has the identifier.
    async fn modify(&self, id: BinId, change: BinChange) -> Result<Bin, BinError>;
}

/// Source of the current time for stamping updates.
pub trait Clock: Send + Sync {
    /// Current local time.
    fn now(&self) -> NaiveDateTime;
}

#[derive(Debug, Clone, Copy, Default)]
/// Wall clock in local time, truncated to microseconds.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local().trunc_subsecs(6)
    }
}
