//! High-level service facade over the bin store.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::alert;
use crate::model::{Bin, BinId, BinUpdate};
use crate::ports::{BinError, BinStore, Clock};

/// Public entry point for reading and updating bins.
pub struct BinService {
    store: Arc<dyn BinStore>,
    clock: Arc<dyn Clock>,
}

impl BinService {
    /// Create a new service bound to the provided store and clock.
    #[must_use]
    pub fn new(store: Arc<dyn BinStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// List all bins in insertion order.
    pub async fn bins(&self) -> Vec<Bin> {
        let bins = self.store.list().await;
        debug!(count = bins.len(), "listed bins");
        bins
    }

    /// Fetch a single bin.
    ///
    /// # Errors
    ///
    /// Returns [`BinError::NotFound`] if no bin has the identifier.
    pub async fn bin(&self, id: BinId) -> Result<Bin, BinError> {
        debug!(%id, "fetching bin");
        self.store.get(id).await
    }

    /// Apply new sensor values to a bin and re-evaluate its alert rules.
    ///
    /// The update and the alert rules run as one step against the stored
    /// record, so concurrent updates never clear a latched alert.
    ///
    /// # Errors
    ///
    /// Returns [`BinError::NotFound`] if no bin has the identifier.
    pub async fn update_bin(&self, id: BinId, update: BinUpdate) -> Result<Bin, BinError> {
        let now = self.clock.now();
        let bin = self
            .store
            .modify(
                id,
                Box::new(move |bin: &mut Bin| {
                    bin.apply(update, now);
                    alert::recompute(bin, now);
                }),
            )
            .await?;

        // Recomputing on the committed record only confirms rules that already fired.
        for trigger in alert::triggers(&bin) {
            warn!(%id, %trigger, weight = bin.weight, gas = %bin.gas_status.status, "bin alert raised");
        }

        info!(
            %id,
            load_status = %bin.load_status,
            weight = bin.weight,
            gas = %bin.gas_status.status,
            alert = bin.alert,
            "bin status updated"
        );
        Ok(bin)
    }
}
