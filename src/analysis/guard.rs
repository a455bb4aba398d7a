use crate::cache::ErrorInfo;

use super::kind::AnalysisKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardState {
    NotStarted,
    InFlight,
    Done,
    Failed(ErrorInfo),
}

/// Start-once latch owned by the screen that consumes an analysis.
///
/// Repeated triggers (re-renders, revisits) are absorbed here instead of
/// in the shared cache. Only a failed run can be reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisGuard {
    kind: AnalysisKind,
    state: GuardState,
}

impl AnalysisGuard {
    pub fn new(kind: AnalysisKind) -> Self {
        Self {
            kind,
            state: GuardState::NotStarted,
        }
    }

    pub fn kind(&self) -> AnalysisKind {
        self.kind
    }

    pub fn state(&self) -> &GuardState {
        &self.state
    }

    /// Moves to in-flight when nothing has started yet and products are
    /// available.
    pub fn try_start(&mut self, products_available: bool) -> bool {
        if self.state != GuardState::NotStarted || !products_available {
            return false;
        }
        self.state = GuardState::InFlight;
        true
    }

    /// Marks done without a call, for results already in the memo.
    pub fn adopt_cached(&mut self) -> bool {
        if self.state != GuardState::NotStarted {
            return false;
        }
        self.state = GuardState::Done;
        true
    }

    pub fn complete(&mut self) -> bool {
        if self.state != GuardState::InFlight {
            return false;
        }
        self.state = GuardState::Done;
        true
    }

    pub fn fail(&mut self, error: ErrorInfo) -> bool {
        if self.state != GuardState::InFlight {
            return false;
        }
        self.state = GuardState::Failed(error);
        true
    }

    pub fn retry(&mut self) -> bool {
        if !matches!(self.state, GuardState::Failed(_)) {
            return false;
        }
        self.state = GuardState::NotStarted;
        true
    }

    pub fn is_in_flight(&self) -> bool {
        self.state == GuardState::InFlight
    }
}

#[cfg(test)]
mod tests {
    use super::{AnalysisGuard, GuardState};
    use crate::analysis::AnalysisKind;
    use crate::cache::ErrorInfo;

    fn error() -> ErrorInfo {
        ErrorInfo {
            message: "offline".to_string(),
        }
    }

    #[test]
    fn starts_once_and_only_with_products() {
        let mut guard = AnalysisGuard::new(AnalysisKind::Palette);
        assert!(!guard.try_start(false));
        assert_eq!(guard.state(), &GuardState::NotStarted);

        assert!(guard.try_start(true));
        assert!(!guard.try_start(true));
        assert!(guard.is_in_flight());

        assert!(guard.complete());
        assert!(!guard.try_start(true));
        assert!(!guard.retry());
        assert_eq!(guard.state(), &GuardState::Done);
    }

    #[test]
    fn failure_can_be_retried() {
        let mut guard = AnalysisGuard::new(AnalysisKind::Aesthetics);
        assert!(!guard.fail(error()));

        assert!(guard.try_start(true));
        assert!(guard.fail(error()));
        assert!(!guard.complete());
        assert_eq!(guard.state(), &GuardState::Failed(error()));

        assert!(guard.retry());
        assert!(guard.try_start(true));
    }

    #[test]
    fn cached_results_skip_the_call() {
        let mut guard = AnalysisGuard::new(AnalysisKind::TopBrands);
        assert!(guard.adopt_cached());
        assert!(!guard.try_start(true));
        assert!(!guard.adopt_cached());
    }
}
