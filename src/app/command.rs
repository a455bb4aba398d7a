use serde_json::Value;

use crate::analysis::AnalysisKind;
use crate::event::PlaybackEvent;
use crate::share::ShareRequest;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Advance,
    Retreat,
    /// Click or tap at `column` on a surface `width` columns wide.
    Tap {
        column: u16,
        width: u16,
    },
    ShareNext,
    SharePrevious,
    ShareSelect {
        index: usize,
    },
    SwipeStart {
        x: f32,
    },
    SwipeMove {
        x: f32,
    },
    SwipeEnd,
    Share,
    Retry,
    DebugStatusToggle,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Applied,
    Noop,
    QuitRequested,
}

/// Asynchronous work a command asks the event loop to start.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    StartAnalysis { kind: AnalysisKind, payload: Value },
    DispatchShare(ShareRequest),
    RetryCatalog,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CommandDispatchResult {
    pub outcome: CommandOutcome,
    pub effects: Vec<Effect>,
    pub moved: Option<PlaybackEvent>,
}

impl CommandDispatchResult {
    pub(crate) fn noop() -> Self {
        Self::from_outcome(CommandOutcome::Noop)
    }

    pub(crate) fn applied() -> Self {
        Self::from_outcome(CommandOutcome::Applied)
    }

    pub(crate) fn from_outcome(outcome: CommandOutcome) -> Self {
        Self {
            outcome,
            effects: Vec::new(),
            moved: None,
        }
    }

    pub(crate) fn with_effects(mut self, effects: Vec<Effect>) -> Self {
        self.effects = effects;
        self
    }
}
