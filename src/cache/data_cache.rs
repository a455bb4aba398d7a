use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use tokio::sync::watch;

use crate::analysis::AnalysisResult;
use crate::catalog::{CatalogCollection, CatalogProvider, Product};
use crate::config::CatalogConfig;
use crate::deadline::with_deadline;
use crate::error::AppResult;

use super::collection::{CachedCollection, CollectionState};
use super::memo::{AnalysisMemo, MemoCounters};
use super::ready::ReadyFlag;

#[derive(Debug, Default)]
struct CacheState {
    saved: CachedCollection<Product>,
    recommended: CachedCollection<Product>,
    memo: AnalysisMemo,
    ready: bool,
}

impl CacheState {
    fn collection(&self, collection: CatalogCollection) -> &CachedCollection<Product> {
        match collection {
            CatalogCollection::Saved => &self.saved,
            CatalogCollection::Recommended => &self.recommended,
        }
    }

    fn collection_mut(&mut self, collection: CatalogCollection) -> &mut CachedCollection<Product> {
        match collection {
            CatalogCollection::Saved => &mut self.saved,
            CatalogCollection::Recommended => &mut self.recommended,
        }
    }
}

/// Session store for the preloaded product sets and the analysis memo.
///
/// Shared by reference (typically `Arc<DataCache>`) between the loader task
/// and every consumer. The `ready` latch is set, under the same lock that
/// records fetch outcomes, once both collections have left the loading
/// state for the first time, and is never cleared.
#[derive(Debug)]
pub struct DataCache {
    state: Mutex<CacheState>,
    ready_tx: watch::Sender<bool>,
    initialized: AtomicBool,
}

impl Default for DataCache {
    fn default() -> Self {
        Self::new()
    }
}

impl DataCache {
    pub fn new() -> Self {
        let (ready_tx, _ready_rx) = watch::channel(false);
        Self {
            state: Mutex::new(CacheState::default()),
            ready_tx,
            initialized: AtomicBool::new(false),
        }
    }

    /// Fetches both collections concurrently, recording each outcome as it
    /// arrives. Only the first call fetches; later calls return `false`.
    pub async fn initialize(&self, provider: &dyn CatalogProvider, config: &CatalogConfig) -> bool {
        if self.initialized.swap(true, Ordering::AcqRel) {
            log::debug!("data cache already initialized; skipping fetch");
            return false;
        }

        let deadline = config.fetch_timeout();
        log::debug!(
            "fetching catalog (saved limit {}, recommended limit {})",
            config.saved_limit,
            config.recommended_limit
        );
        let saved = async {
            let result = with_deadline(
                "fetch saved",
                deadline,
                provider.fetch_saved(config.saved_limit),
            )
            .await;
            self.resolve(CatalogCollection::Saved, result);
        };
        let recommended = async {
            let result = with_deadline(
                "fetch recommended",
                deadline,
                provider.fetch_recommended(config.recommended_limit),
            )
            .await;
            self.resolve(CatalogCollection::Recommended, result);
        };
        tokio::join!(saved, recommended);
        true
    }

    /// Re-fetches collections whose last attempt failed. Does nothing until
    /// the cache is ready. Returns the number of collections re-fetched.
    pub async fn retry_failed(
        &self,
        provider: &dyn CatalogProvider,
        config: &CatalogConfig,
    ) -> usize {
        let (retry_saved, retry_recommended) = {
            let mut state = self.lock_state();
            if !state.ready {
                return 0;
            }
            (
                state.saved.begin_retry(),
                state.recommended.begin_retry(),
            )
        };

        let deadline = config.fetch_timeout();
        let saved = async {
            if retry_saved {
                log::debug!("retrying saved collection");
                let result = with_deadline(
                    "fetch saved",
                    deadline,
                    provider.fetch_saved(config.saved_limit),
                )
                .await;
                self.resolve(CatalogCollection::Saved, result);
            }
        };
        let recommended = async {
            if retry_recommended {
                log::debug!("retrying recommended collection");
                let result = with_deadline(
                    "fetch recommended",
                    deadline,
                    provider.fetch_recommended(config.recommended_limit),
                )
                .await;
                self.resolve(CatalogCollection::Recommended, result);
            }
        };
        tokio::join!(saved, recommended);
        usize::from(retry_saved) + usize::from(retry_recommended)
    }

    /// Records a fetch outcome for `collection`. Returns `false` if that
    /// collection was not waiting for one.
    pub fn resolve(&self, collection: CatalogCollection, result: AppResult<Vec<Product>>) -> bool {
        match &result {
            Ok(items) => log::debug!("{} resolved with {} items", collection.as_str(), items.len()),
            Err(err) => log::warn!("{} fetch failed: {err}", collection.as_str()),
        }

        let became_ready = {
            let mut state = self.lock_state();
            if !state.collection_mut(collection).resolve(result) {
                return false;
            }
            let settled = !state.saved.is_loading() && !state.recommended.is_loading();
            if settled && !state.ready {
                state.ready = true;
                true
            } else {
                false
            }
        };

        if became_ready {
            log::debug!("data cache ready");
            self.ready_tx.send_replace(true);
        }
        true
    }

    pub fn is_ready(&self) -> bool {
        *self.ready_tx.borrow()
    }

    pub fn ready_flag(&self) -> ReadyFlag {
        ReadyFlag::new(self.ready_tx.subscribe())
    }

    pub async fn wait_ready(&self) -> bool {
        self.ready_flag().wait().await
    }

    pub fn get_saved(&self, limit: Option<usize>) -> Option<Vec<Product>> {
        self.get(CatalogCollection::Saved, limit)
    }

    pub fn get_recommended(&self, limit: Option<usize>) -> Option<Vec<Product>> {
        self.get(CatalogCollection::Recommended, limit)
    }

    pub fn get(&self, collection: CatalogCollection, limit: Option<usize>) -> Option<Vec<Product>> {
        self.lock_state().collection(collection).items(limit)
    }

    pub fn saved_state(&self) -> CollectionState {
        self.collection_state(CatalogCollection::Saved)
    }

    pub fn recommended_state(&self) -> CollectionState {
        self.collection_state(CatalogCollection::Recommended)
    }

    pub fn collection_state(&self, collection: CatalogCollection) -> CollectionState {
        self.lock_state().collection(collection).state()
    }

    pub fn get_analysis(&self, key: &str) -> Option<AnalysisResult> {
        self.lock_state().memo.get(key)
    }

    pub fn peek_analysis(&self, key: &str) -> Option<AnalysisResult> {
        self.lock_state().memo.peek(key).cloned()
    }

    pub fn set_analysis(&self, key: impl Into<String>, value: AnalysisResult) {
        self.lock_state().memo.insert(key, value);
    }

    pub fn has_analysis(&self, key: &str) -> bool {
        self.lock_state().memo.contains(key)
    }

    pub fn memo_counters(&self) -> MemoCounters {
        self.lock_state().memo.counters()
    }

    pub fn memo_hit_rate(&self) -> f64 {
        self.lock_state().memo.hit_rate()
    }

    fn lock_state(&self) -> MutexGuard<'_, CacheState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
