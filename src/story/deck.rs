use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{AppError, AppResult};

use super::screen::Screen;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Story {
    pub id: String,
    pub screens: Vec<Screen>,
}

impl Story {
    pub fn new(id: impl Into<String>, screens: Vec<Screen>) -> Self {
        Self {
            id: id.into(),
            screens,
        }
    }

    pub fn len(&self) -> usize {
        self.screens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.screens.is_empty()
    }
}

#[derive(Debug, Deserialize)]
struct DeckFile {
    #[serde(default)]
    stories: Vec<Story>,
}

/// Stories for one playback session.
///
/// A deck always holds at least one story and every story at least one
/// screen, so a position of `(0, 0)` is valid for any deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryDeck {
    stories: Vec<Story>,
}

impl StoryDeck {
    pub fn new(stories: Vec<Story>) -> AppResult<Self> {
        if stories.is_empty() {
            return Err(AppError::invalid_argument("deck has no stories"));
        }

        let mut seen = HashSet::with_capacity(stories.len());
        for story in &stories {
            if story.is_empty() {
                return Err(AppError::invalid_argument(format!(
                    "story '{}' has no screens",
                    story.id
                )));
            }
            if !seen.insert(story.id.as_str()) {
                return Err(AppError::invalid_argument(format!(
                    "duplicate story id '{}'",
                    story.id
                )));
            }
        }

        Ok(Self { stories })
    }

    pub fn from_toml_str(raw: &str) -> AppResult<Self> {
        let parsed = toml::from_str::<DeckFile>(raw)
            .map_err(|source| AppError::invalid_argument(format!("failed to parse deck: {source}")))?;
        Self::new(parsed.stories)
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| {
            AppError::io_with_context(source, format!("failed to read deck: {}", path.display()))
        })?;
        Self::from_toml_str(&raw)
    }

    pub fn stories(&self) -> &[Story] {
        &self.stories
    }

    pub fn story(&self, index: usize) -> Option<&Story> {
        self.stories.get(index)
    }

    pub fn len(&self) -> usize {
        self.stories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stories.is_empty()
    }

    pub fn total_screens(&self) -> usize {
        self.stories.iter().map(Story::len).sum()
    }
}

impl Default for StoryDeck {
    fn default() -> Self {
        let recap = Story::new(
            "shopping-recap",
            vec![
                Screen::Title {
                    image: "recap-hero.png".to_string(),
                    heading: Some("Your year in shopping".to_string()),
                },
                Screen::PopularProducts,
                Screen::CarbonFootprint,
                Screen::TopBrands,
                Screen::Palette,
                Screen::SmallBusiness,
                Screen::ShippingTime,
                Screen::Aesthetics,
                Screen::Recommendations,
                Screen::Share,
            ],
        );
        let outro = Story::new(
            "outro",
            vec![
                Screen::color("#5433eb", "Thanks for shopping with us"),
                Screen::color("#0e8a4f", "See you next year"),
            ],
        );
        Self {
            stories: vec![recap, outro],
        }
    }
}
