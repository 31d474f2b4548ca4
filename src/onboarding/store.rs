//! Shared onboarding store — one record per session, observable by the UI.

use tokio::sync::watch;
use tracing::debug;

use super::model::{OnboardingRecord, OnboardingUpdate};

/// Session-scoped container for the onboarding record.
///
/// The store is meant to be created once when the onboarding flow mounts and
/// handed to the screens that need it (behind an `Arc` when shared), rather
/// than living in a process-wide global. Every mutation replaces the whole
/// record value, so a reader that cloned the previous record keeps an
/// unchanged snapshot, and subscribers are notified of each new value.
///
/// All operations are total; there is nothing to validate and nothing that
/// can fail.
#[derive(Debug)]
pub struct OnboardingStore {
    tx: watch::Sender<OnboardingRecord>,
}

impl OnboardingStore {
    /// Create a store holding the all-empty default record.
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(OnboardingRecord::default());
        Self { tx }
    }

    /// Current record.
    pub fn data(&self) -> OnboardingRecord {
        self.tx.borrow().clone()
    }

    /// Apply a partial update: fields named in `update` replace the stored
    /// values, everything else is untouched. Subscribers are notified even
    /// when the update is a no-op.
    pub fn update(&self, update: OnboardingUpdate) {
        self.tx.send_modify(|record| {
            *record = update.apply(record);
        });
        debug!("Onboarding record updated");
    }

    /// Rewind the record to the all-empty default.
    pub fn reset(&self) {
        self.tx.send_replace(OnboardingRecord::default());
        debug!("Onboarding record reset");
    }

    /// Subscribe to record changes. The receiver starts out seeing the
    /// current value and is marked changed on every subsequent mutation.
    pub fn subscribe(&self) -> watch::Receiver<OnboardingRecord> {
        self.tx.subscribe()
    }
}

impl Default for OnboardingStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_default_record() {
        let store = OnboardingStore::new();
        assert_eq!(store.data(), OnboardingRecord::default());
    }

    #[test]
    fn update_merges_into_stored_record() {
        let store = OnboardingStore::new();
        store.update(OnboardingUpdate::new().name("La Parrilla"));
        store.update(OnboardingUpdate::new().city("Buenos Aires"));

        let record = store.data();
        assert_eq!(record.name, "La Parrilla");
        assert_eq!(record.city, "Buenos Aires");
        assert!(record.address.is_empty());
    }

    #[test]
    fn sequential_disjoint_updates_compose() {
        let a = OnboardingUpdate::new()
            .name("La Parrilla")
            .description("Grill house");
        let b = OnboardingUpdate::new()
            .city("Buenos Aires")
            .tax_id("20-12345678-9");

        let sequential = OnboardingStore::new();
        sequential.update(a.clone());
        sequential.update(b.clone());

        let combined = OnboardingStore::new();
        combined.update(a.merge(b));

        assert_eq!(sequential.data(), combined.data());
    }

    #[test]
    fn reset_restores_default_regardless_of_prior_updates() {
        let store = OnboardingStore::new();
        store.update(
            OnboardingUpdate::new()
                .name("Sushi Club")
                .address("San Martín 500")
                .categories(vec!["sushi".to_string()]),
        );
        store.reset();
        assert_eq!(store.data(), OnboardingRecord::default());

        // Reset is idempotent
        store.reset();
        assert_eq!(store.data(), OnboardingRecord::default());
    }

    #[test]
    fn previously_read_snapshot_is_not_mutated() {
        let store = OnboardingStore::new();
        store.update(OnboardingUpdate::new().name("Before"));
        let snapshot = store.data();
        store.update(OnboardingUpdate::new().name("After"));

        assert_eq!(snapshot.name, "Before");
        assert_eq!(store.data().name, "After");
    }

    #[tokio::test]
    async fn subscribers_observe_each_mutation() {
        let store = OnboardingStore::new();
        let mut rx = store.subscribe();

        store.update(OnboardingUpdate::new().name("El Faro"));
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().name, "El Faro");

        store.reset();
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), OnboardingRecord::default());
    }
}
