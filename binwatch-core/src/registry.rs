//! In-memory bin registry.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::model::{Bin, BinId, seed_bins};
use crate::ports::{BinChange, BinError, BinStore};

/// Registry keeping all bins in process memory.
///
/// Records keep their insertion order. Modifications run under the write
/// lock, so readers never see a half-applied update.
pub struct InMemoryBinStore {
    bins: RwLock<Vec<Bin>>,
}

impl InMemoryBinStore {
    /// Build a registry from the provided bins.
    ///
    /// Later bins sharing an id with an earlier one are dropped.
    #[must_use]
    pub fn with_bins(bins: Vec<Bin>) -> Self {
        let mut unique: Vec<Bin> = Vec::with_capacity(bins.len());
        for bin in bins {
            if unique.iter().all(|kept| kept.id != bin.id) {
                unique.push(bin);
            }
        }
        Self {
            bins: RwLock::new(unique),
        }
    }

    /// Build a registry holding the three seed bins.
    #[must_use]
    pub fn seeded() -> Self {
        Self::with_bins(seed_bins())
    }
}

impl Default for InMemoryBinStore {
    fn default() -> Self {
        Self::seeded()
    }
}

#[async_trait]
impl BinStore for InMemoryBinStore {
    async fn list(&self) -> Vec<Bin> {
        self.bins.read().await.clone()
    }

    async fn get(&self, id: BinId) -> Result<Bin, BinError> {
        self.bins
            .read()
            .await
            .iter()
            .find(|bin| bin.id == id)
            .cloned()
            .ok_or(BinError::NotFound(id))
    }

    async fn modify(&self, id: BinId, change: BinChange) -> Result<Bin, BinError> {
        let mut bins = self.bins.write().await;
        let slot = bins
            .iter_mut()
            .find(|stored| stored.id == id)
            .ok_or(BinError::NotFound(id))?;
        change(slot);
        Ok(slot.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LoadStatus;

    #[tokio::test]
    async fn seeded_registry_lists_three_bins() {
        let store = InMemoryBinStore::seeded();
        let ids: Vec<BinId> = store.list().await.iter().map(|bin| bin.id).collect();
        assert_eq!(ids, vec![BinId(1), BinId(2), BinId(3)]);
    }

    #[tokio::test]
    async fn get_unknown_bin_fails() {
        let store = InMemoryBinStore::seeded();
        assert_eq!(store.get(BinId(999)).await, Err(BinError::NotFound(BinId(999))));
    }

    #[tokio::test]
    async fn modify_edits_record_in_place() {
        let store = InMemoryBinStore::seeded();

        let changed = store
            .modify(
                BinId(2),
                Box::new(|bin: &mut Bin| bin.load_status = LoadStatus::Empty),
            )
            .await
            .expect("bin 2 exists");
        assert_eq!(changed.load_status, LoadStatus::Empty);

        let bins = store.list().await;
        let second = bins.get(1).expect("three bins");
        assert_eq!(second.id, BinId(2));
        assert_eq!(second.load_status, LoadStatus::Empty);
    }

    #[tokio::test]
    async fn modify_unknown_bin_never_inserts() {
        let store = InMemoryBinStore::seeded();
        let before = store.list().await;

        let result = store
            .modify(BinId(7), Box::new(|bin: &mut Bin| bin.weight = 1.0))
            .await;

        assert_eq!(result, Err(BinError::NotFound(BinId(7))));
        assert_eq!(store.list().await, before);
    }

    #[tokio::test]
    async fn duplicate_ids_keep_the_first_record() {
        let mut bins = seed_bins();
        let mut copy = bins.first().cloned().expect("seed bin 1");
        copy.weight = 99.0;
        bins.push(copy);

        let store = InMemoryBinStore::with_bins(bins);
        let first = store.get(BinId(1)).await.expect("seed bin 1");

        assert_eq!(store.list().await.len(), 3);
        assert!(first.weight.abs() < f64::EPSILON);
    }
}
