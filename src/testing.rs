//! Fakes shared by unit tests across modules.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::oneshot;

use crate::analysis::{AnalysisKind, ContentProvider};
use crate::app::{App, Providers};
use crate::catalog::{CatalogProvider, Product};
use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::share::{LogShareProvider, ShareProvider, ShareRequest};
use crate::story::StoryDeck;

type Gate = (
    Mutex<Option<oneshot::Sender<AppResult<Vec<Product>>>>>,
    Mutex<Option<oneshot::Receiver<AppResult<Vec<Product>>>>>,
);

fn gate() -> Gate {
    let (tx, rx) = oneshot::channel();
    (Mutex::new(Some(tx)), Mutex::new(Some(rx)))
}

pub(crate) fn products(ids: &[&str]) -> Vec<Product> {
    ids.iter()
        .map(|id| Product::new(*id, format!("Product {id}")))
        .collect()
}

/// App over the default deck with a catalog that never answers.
pub(crate) fn test_app() -> App {
    app_with(
        Arc::new(ScriptedContent::new()),
        Arc::new(LogShareProvider::default()),
    )
}

pub(crate) fn app_with(content: Arc<dyn ContentProvider>, share: Arc<dyn ShareProvider>) -> App {
    let providers = Providers {
        catalog: Arc::new(GatedCatalog::new()),
        content,
        share,
    };
    App::new(StoryDeck::default(), providers, Config::default())
}

/// Polls `done` while yielding to the runtime so spawned tasks can progress.
pub(crate) async fn settle(mut done: impl FnMut() -> bool) {
    for _ in 0..1_000 {
        if done() {
            return;
        }
        tokio::task::yield_now().await;
    }
    panic!("condition did not settle");
}

/// Catalog whose fetches resolve only when the test releases them.
pub(crate) struct GatedCatalog {
    saved: Gate,
    recommended: Gate,
    saved_calls: AtomicUsize,
    recommended_calls: AtomicUsize,
}

impl GatedCatalog {
    pub(crate) fn new() -> Self {
        Self {
            saved: gate(),
            recommended: gate(),
            saved_calls: AtomicUsize::new(0),
            recommended_calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn release_saved(&self, result: AppResult<Vec<Product>>) {
        release(&self.saved, result);
    }

    pub(crate) fn release_recommended(&self, result: AppResult<Vec<Product>>) {
        release(&self.recommended, result);
    }

    pub(crate) fn saved_calls(&self) -> usize {
        self.saved_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn recommended_calls(&self) -> usize {
        self.recommended_calls.load(Ordering::SeqCst)
    }
}

fn release(gate: &Gate, result: AppResult<Vec<Product>>) {
    let tx = gate.0.lock().unwrap_or_else(PoisonError::into_inner).take();
    if let Some(tx) = tx {
        let _ = tx.send(result);
    }
}

async fn wait_gate(gate: &Gate, collection: &'static str) -> AppResult<Vec<Product>> {
    let rx = gate.1.lock().unwrap_or_else(PoisonError::into_inner).take();
    match rx {
        Some(rx) => rx
            .await
            .unwrap_or_else(|_| Err(AppError::catalog(collection, "gate dropped"))),
        None => Err(AppError::catalog(collection, "gate already used")),
    }
}

#[async_trait]
impl CatalogProvider for GatedCatalog {
    async fn fetch_saved(&self, _limit: usize) -> AppResult<Vec<Product>> {
        self.saved_calls.fetch_add(1, Ordering::SeqCst);
        wait_gate(&self.saved, "saved").await
    }

    async fn fetch_recommended(&self, _limit: usize) -> AppResult<Vec<Product>> {
        self.recommended_calls.fetch_add(1, Ordering::SeqCst);
        wait_gate(&self.recommended, "recommended").await
    }
}

/// Content provider answering from a fixed script and counting calls.
#[derive(Default)]
pub(crate) struct ScriptedContent {
    responses: HashMap<AnalysisKind, Result<Value, String>>,
    calls: AtomicUsize,
}

impl ScriptedContent {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn respond(mut self, kind: AnalysisKind, value: Value) -> Self {
        self.responses.insert(kind, Ok(value));
        self
    }

    pub(crate) fn fail(mut self, kind: AnalysisKind, message: &str) -> Self {
        self.responses.insert(kind, Err(message.to_string()));
        self
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ContentProvider for ScriptedContent {
    async fn analyze(&self, kind: AnalysisKind, _payload: Value) -> AppResult<Value> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.responses.get(&kind) {
            Some(Ok(value)) => Ok(value.clone()),
            Some(Err(message)) => Err(AppError::analysis(kind.key(), message.clone())),
            None => Err(AppError::analysis(kind.key(), "unscripted")),
        }
    }
}

/// Share target that always refuses, like a dismissed share sheet.
pub(crate) struct FailingShare;

#[async_trait]
impl ShareProvider for FailingShare {
    async fn share(&self, _request: &ShareRequest) -> AppResult<()> {
        Err(AppError::share("user dismissed the share sheet"))
    }
}
