mod deck;
mod screen;

pub use deck::{Story, StoryDeck};
pub use screen::{Screen, ScreenKind};
