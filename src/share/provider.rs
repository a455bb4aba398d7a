use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use crate::error::AppResult;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareRequest {
    pub title: String,
    pub url: String,
}

/// Platform share target (native share sheet, clipboard, ...).
#[async_trait]
pub trait ShareProvider: Send + Sync {
    async fn share(&self, request: &ShareRequest) -> AppResult<()>;
}

/// Share target that only logs and remembers what was shared.
#[derive(Debug, Default)]
pub struct LogShareProvider {
    shared: Mutex<Vec<ShareRequest>>,
}

impl LogShareProvider {
    pub fn shared(&self) -> Vec<ShareRequest> {
        self.shared
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl ShareProvider for LogShareProvider {
    async fn share(&self, request: &ShareRequest) -> AppResult<()> {
        log::info!("share: {} {}", request.title, request.url);
        self.shared
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request.clone());
        Ok(())
    }
}
