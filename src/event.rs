use crossterm::event::Event;

use crate::analysis::{AnalysisKind, AnalysisResult};
use crate::error::AppResult;
use crate::playback::PlaybackPosition;
use crate::share::ShareOutcome;

/// Describes *why* the playback position changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavReason {
    /// Next screen within the same story.
    Step,
    /// First screen of the following story.
    NextStory,
    /// Wrapped from the very last screen back to the start.
    Loop,
    /// Previous screen within the same story.
    Retreat,
    /// Last screen of the preceding story.
    PreviousStory,
}

impl NavReason {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Step => "step",
            Self::NextStory => "next-story",
            Self::Loop => "loop",
            Self::Retreat => "retreat",
            Self::PreviousStory => "previous-story",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackEvent {
    pub from: PlaybackPosition,
    pub to: PlaybackPosition,
    pub reason: NavReason,
}

#[derive(Debug)]
pub(crate) enum DomainEvent {
    Input(Event),
    InputError(String),
    CatalogSettled { retried: usize },
    AnalysisComplete {
        kind: AnalysisKind,
        result: AppResult<AnalysisResult>,
    },
    ShareComplete(ShareOutcome),
    RedrawTick,
    Wake,
}
