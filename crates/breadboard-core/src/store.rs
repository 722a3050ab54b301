//! State containers for dashboard views.
//!
//! A [`Store`] caches one projection from the API. Views call
//! [`Store::refresh`] when they mount and read [`Store::value`] afterwards.
//! A host that draws a placeholder while the API answers splits the refresh
//! into [`Store::begin_refresh`], [`Store::load`] and [`Store::finish`].
//! Local edits go through [`Store::mutate`] with a pure reducer; the previous
//! value is never modified in place.

use crate::api::DashboardApi;

/// Loading state of a [`Store`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreStatus {
    /// Never refreshed
    #[default]
    Idle,
    /// A refresh is in progress
    Loading,
    /// Holds a value
    Ready,
}

type Loader<T> = fn(&dyn DashboardApi) -> T;

/// Cached projection with refresh/mutate semantics.
pub struct Store<T> {
    loader: Loader<T>,
    value: Option<T>,
    status: StoreStatus,
    revision: u64,
}

impl<T> Store<T> {
    /// Create an empty store that loads with `loader`.
    pub fn new(loader: Loader<T>) -> Self {
        Self {
            loader,
            value: None,
            status: StoreStatus::Idle,
            revision: 0,
        }
    }

    pub fn status(&self) -> StoreStatus {
        self.status
    }

    /// Current value, `None` until the first refresh.
    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Incremented on every refresh or mutation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Replace the cached value with a fresh load from `api`.
    pub fn refresh(&mut self, api: &dyn DashboardApi) -> &T {
        self.begin_refresh();
        let loaded = self.load(api);
        self.finish(loaded)
    }

    /// Mark the store as loading. The previous value stays readable.
    pub fn begin_refresh(&mut self) {
        self.status = StoreStatus::Loading;
    }

    /// Run the loader without touching the store.
    pub fn load(&self, api: &dyn DashboardApi) -> T {
        (self.loader)(api)
    }

    /// Store a loaded value and mark the store ready.
    pub fn finish(&mut self, value: T) -> &T {
        self.status = StoreStatus::Ready;
        self.revision += 1;
        self.value.insert(value)
    }

    /// Apply a pure reducer to the cached value.
    ///
    /// Returns `false` and leaves the store untouched when it holds no value.
    pub fn mutate(&mut self, reducer: impl FnOnce(&T) -> T) -> bool {
        match self.value.as_ref() {
            Some(current) => {
                let next = reducer(current);
                self.value = Some(next);
                self.revision += 1;
                true
            }
            None => false,
        }
    }

    /// Drop the cached value and return to [`StoreStatus::Idle`].
    pub fn clear(&mut self) {
        self.value = None;
        self.status = StoreStatus::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockApi;
    use crate::services::money::MoneyOverview;
    use chrono::{TimeZone, Utc};

    fn api() -> MockApi {
        MockApi::new(Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap())
    }

    #[test]
    fn test_refresh_loads_value() {
        let api = api();
        let mut store: Store<MoneyOverview> = Store::new(|api| api.get_money_overview());
        assert_eq!(store.status(), StoreStatus::Idle);
        assert!(store.value().is_none());

        let loaded = store.refresh(&api).clone();
        assert_eq!(store.status(), StoreStatus::Ready);
        assert_eq!(store.value(), Some(&loaded));
        assert_eq!(store.revision(), 1);
    }

    #[test]
    fn test_loading_is_visible_between_begin_and_finish() {
        let api = api();
        let mut store: Store<usize> = Store::new(|api| api.get_tasks(None).len());
        store.refresh(&api);
        let before = store.value().copied();

        store.begin_refresh();
        assert_eq!(store.status(), StoreStatus::Loading);
        assert_eq!(store.value().copied(), before);

        let loaded = store.load(&api);
        assert_eq!(*store.finish(loaded), 16);
        assert_eq!(store.status(), StoreStatus::Ready);
        assert_eq!(store.revision(), 2);
    }

    #[test]
    fn test_mutate_requires_value() {
        let mut store: Store<Vec<u32>> = Store::new(|_| vec![1, 2, 3]);
        assert!(!store.mutate(|v| v.iter().map(|n| n * 2).collect()));
        assert_eq!(store.revision(), 0);

        store.refresh(&api());
        assert!(store.mutate(|v| v.iter().map(|n| n * 2).collect()));
        assert_eq!(store.value(), Some(&vec![2, 4, 6]));
        assert_eq!(store.revision(), 2);
    }

    #[test]
    fn test_refresh_discards_local_mutations() {
        let api = api();
        let mut store: Store<Vec<String>> =
            Store::new(|api| api.get_clients().into_iter().map(|c| c.name).collect());
        store.refresh(&api);
        store.mutate(|names| names.iter().take(1).cloned().collect());
        assert_eq!(store.value().map(Vec::len), Some(1));

        store.refresh(&api);
        assert_eq!(store.value().map(Vec::len), Some(12));
    }

    #[test]
    fn test_clear_resets() {
        let mut store: Store<u8> = Store::new(|_| 7);
        store.refresh(&api());
        store.clear();
        assert_eq!(store.status(), StoreStatus::Idle);
        assert!(store.value().is_none());
    }
}
