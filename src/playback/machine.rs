use crate::cache::ReadyFlag;
use crate::event::{NavReason, PlaybackEvent};
use crate::story::{Screen, ScreenKind, Story, StoryDeck};

use super::position::PlaybackPosition;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavOutcome {
    Moved(PlaybackEvent),
    /// Held on the title screen until the data cache is ready.
    Gated,
    Noop,
}

impl NavOutcome {
    pub fn moved(&self) -> bool {
        matches!(self, Self::Moved(_))
    }
}

/// Owner of the current playback position.
///
/// The position only changes through [`advance`](Self::advance) and
/// [`retreat`](Self::retreat); both can be called at any time in any order.
/// Playback never ends: advancing past the last screen of the last story
/// returns to the start.
#[derive(Debug, Clone)]
pub struct PlaybackMachine {
    deck: StoryDeck,
    position: PlaybackPosition,
    ready: ReadyFlag,
}

impl PlaybackMachine {
    pub fn new(deck: StoryDeck, ready: ReadyFlag) -> Self {
        Self {
            deck,
            position: PlaybackPosition::START,
            ready,
        }
    }

    pub fn position(&self) -> PlaybackPosition {
        self.position
    }

    pub fn deck(&self) -> &StoryDeck {
        &self.deck
    }

    pub fn current_story(&self) -> &Story {
        &self.deck.stories()[self.position.story_index]
    }

    pub fn current_screen(&self) -> &Screen {
        &self.current_story().screens[self.position.screen_index]
    }

    pub fn is_share_screen(&self) -> bool {
        self.current_screen().kind() == ScreenKind::Share
    }

    pub fn is_gated(&self) -> bool {
        self.position.screen_index == 0
            && self.current_screen().kind() == ScreenKind::Title
            && !self.ready.is_ready()
    }

    pub fn advance(&mut self) -> NavOutcome {
        if self.is_gated() {
            log::trace!("advance held at {}: content not ready", self.position);
            return NavOutcome::Gated;
        }

        let from = self.position;
        let last_screen = self.current_story().len() - 1;
        let last_story = self.deck.len() - 1;
        let (to, reason) = if from.screen_index < last_screen {
            (
                PlaybackPosition::new(from.story_index, from.screen_index + 1),
                NavReason::Step,
            )
        } else if from.story_index < last_story {
            (
                PlaybackPosition::new(from.story_index + 1, 0),
                NavReason::NextStory,
            )
        } else {
            (PlaybackPosition::START, NavReason::Loop)
        };

        self.move_to(from, to, reason)
    }

    pub fn retreat(&mut self) -> NavOutcome {
        let from = self.position;
        let (to, reason) = if from.screen_index > 0 {
            (
                PlaybackPosition::new(from.story_index, from.screen_index - 1),
                NavReason::Retreat,
            )
        } else if from.story_index > 0 {
            let previous = from.story_index - 1;
            let last_screen = self.deck.stories()[previous].len() - 1;
            (
                PlaybackPosition::new(previous, last_screen),
                NavReason::PreviousStory,
            )
        } else {
            return NavOutcome::Noop;
        };

        self.move_to(from, to, reason)
    }

    fn move_to(
        &mut self,
        from: PlaybackPosition,
        to: PlaybackPosition,
        reason: NavReason,
    ) -> NavOutcome {
        if from == to {
            return NavOutcome::Noop;
        }
        self.position = to;
        NavOutcome::Moved(PlaybackEvent { from, to, reason })
    }
}
