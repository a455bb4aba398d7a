use std::time::Duration;

use serde_json::Value;

use crate::cache::{DataCache, ErrorInfo};
use crate::deadline::with_deadline;
use crate::error::AppResult;

use super::guard::{AnalysisGuard, GuardState};
use super::kind::AnalysisKind;
use super::provider::{ContentProvider, build_payload};
use super::result::AnalysisResult;

#[derive(Debug, Clone, PartialEq)]
pub enum StartDecision {
    /// The guard is now in flight; send this payload to the provider.
    Started(Value),
    /// The memo already had a result; no call is needed.
    Cached(AnalysisResult),
    WaitingForProducts,
    /// Already in flight, done, or failed.
    Skipped,
}

/// One screen's view of an analysis: its guard plus the shared memo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisTask {
    guard: AnalysisGuard,
}

impl AnalysisTask {
    pub fn new(kind: AnalysisKind) -> Self {
        Self {
            guard: AnalysisGuard::new(kind),
        }
    }

    pub fn kind(&self) -> AnalysisKind {
        self.guard.kind()
    }

    pub fn state(&self) -> &GuardState {
        self.guard.state()
    }

    pub fn begin(&mut self, cache: &DataCache) -> StartDecision {
        if self.guard.state() != &GuardState::NotStarted {
            return StartDecision::Skipped;
        }

        let kind = self.kind();
        if let Some(result) = cache.get_analysis(kind.key()) {
            self.guard.adopt_cached();
            return StartDecision::Cached(result);
        }

        let products = cache
            .get(kind.source(), None)
            .filter(|items| !items.is_empty());
        let Some(products) = products else {
            return StartDecision::WaitingForProducts;
        };
        if !self.guard.try_start(true) {
            return StartDecision::Skipped;
        }
        log::debug!("starting {} analysis over {} products", kind.key(), products.len());
        StartDecision::Started(build_payload(kind, &products))
    }

    /// Applies a provider outcome. Successes land in the memo; failures only
    /// mark this task failed. Returns `false` if the task was not in flight.
    pub fn finish(&mut self, cache: &DataCache, result: AppResult<AnalysisResult>) -> bool {
        if !self.guard.is_in_flight() {
            return false;
        }

        let key = self.kind().key();
        match result {
            Ok(result) => {
                cache.set_analysis(key, result);
                log::debug!("{key} analysis stored");
                self.guard.complete()
            }
            Err(err) => {
                log::warn!("{key} analysis unavailable: {err}");
                self.guard.fail(ErrorInfo::from(&err))
            }
        }
    }

    pub fn retry(&mut self) -> bool {
        self.guard.retry()
    }

    /// Drives begin, provider call and finish in one go.
    pub async fn run(
        &mut self,
        cache: &DataCache,
        provider: &dyn ContentProvider,
        deadline: Option<Duration>,
    ) -> &GuardState {
        if let StartDecision::Started(payload) = self.begin(cache) {
            let result = request_analysis(provider, self.kind(), payload, deadline).await;
            self.finish(cache, result);
        }
        self.state()
    }
}

pub async fn request_analysis(
    provider: &dyn ContentProvider,
    kind: AnalysisKind,
    payload: Value,
    deadline: Option<Duration>,
) -> AppResult<AnalysisResult> {
    let raw = with_deadline(kind.key(), deadline, provider.analyze(kind, payload)).await?;
    AnalysisResult::from_value(kind.key(), raw)
}
