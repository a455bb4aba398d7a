use std::collections::HashMap;

use crate::analysis::{AnalysisKind, AnalysisResult, AnalysisTask, GuardState, StartDecision};
use crate::cache::DataCache;
use crate::error::AppResult;

/// Per-screen analysis guards, one per analysis kind on screen.
#[derive(Debug, Default)]
pub struct ScreenAnalyses {
    tasks: HashMap<AnalysisKind, AnalysisTask>,
}

impl ScreenAnalyses {
    pub fn begin(&mut self, kind: AnalysisKind, cache: &DataCache) -> StartDecision {
        self.tasks
            .entry(kind)
            .or_insert_with(|| AnalysisTask::new(kind))
            .begin(cache)
    }

    pub fn finish(
        &mut self,
        kind: AnalysisKind,
        cache: &DataCache,
        result: AppResult<AnalysisResult>,
    ) -> bool {
        self.tasks
            .get_mut(&kind)
            .is_some_and(|task| task.finish(cache, result))
    }

    pub fn retry(&mut self, kind: AnalysisKind) -> bool {
        self.tasks.get_mut(&kind).is_some_and(AnalysisTask::retry)
    }

    pub fn state(&self, kind: AnalysisKind) -> GuardState {
        self.tasks
            .get(&kind)
            .map_or(GuardState::NotStarted, |task| task.state().clone())
    }

    pub fn in_flight(&self) -> usize {
        self.tasks
            .values()
            .filter(|task| task.state() == &GuardState::InFlight)
            .count()
    }
}
