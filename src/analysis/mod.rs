mod guard;
mod kind;
mod provider;
mod result;
mod task;

pub use guard::{AnalysisGuard, GuardState};
pub use kind::AnalysisKind;
pub use provider::{ContentProvider, build_payload};
pub use result::AnalysisResult;
pub use task::{AnalysisTask, StartDecision, request_analysis};
