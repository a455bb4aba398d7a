use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PlaybackPosition {
    pub story_index: usize,
    pub screen_index: usize,
}

impl PlaybackPosition {
    pub const START: Self = Self {
        story_index: 0,
        screen_index: 0,
    };

    pub fn new(story_index: usize, screen_index: usize) -> Self {
        Self {
            story_index,
            screen_index,
        }
    }

    pub fn is_start(self) -> bool {
        self == Self::START
    }
}

impl fmt::Display for PlaybackPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.story_index, self.screen_index)
    }
}
