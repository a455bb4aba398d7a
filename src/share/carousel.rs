use crate::story::{ScreenKind, Story};

use super::provider::{ShareProvider, ShareRequest};
use super::swipe::{SwipeDirection, SwipeTracker};
use super::text::share_text;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShareableScreen {
    /// Index of the screen within its story.
    pub screen_index: usize,
    pub kind: ScreenKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    Shared(ShareRequest),
    Failed(String),
    NothingToShare,
}

/// Browse-and-share state over a story's shareable screens.
///
/// Stepping saturates at both ends. An empty carousel ignores every
/// navigation call.
#[derive(Debug, Clone, PartialEq)]
pub struct ShareCarousel {
    screens: Vec<ShareableScreen>,
    index: usize,
    swipe: SwipeTracker,
    url: String,
}

impl ShareCarousel {
    pub fn new(story: &Story, url: impl Into<String>, swipe_threshold: f32) -> Self {
        let screens = story
            .screens
            .iter()
            .enumerate()
            .filter(|(_, screen)| screen.kind().is_shareable())
            .map(|(screen_index, screen)| ShareableScreen {
                screen_index,
                kind: screen.kind(),
            })
            .collect();
        Self {
            screens,
            index: 0,
            swipe: SwipeTracker::new(swipe_threshold),
            url: url.into(),
        }
    }

    pub fn screens(&self) -> &[ShareableScreen] {
        &self.screens
    }

    pub fn is_empty(&self) -> bool {
        self.screens.is_empty()
    }

    pub fn len(&self) -> usize {
        self.screens.len()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Option<ShareableScreen> {
        self.screens.get(self.index).copied()
    }

    /// Selects the screen at `index`.
    ///
    /// `index` must be below [`len`](Self::len). Debug builds panic on a
    /// violation; release builds log it and keep the current selection.
    pub fn select_index(&mut self, index: usize) {
        debug_assert!(
            self.is_empty() || index < self.screens.len(),
            "share index {index} out of range for {} screens",
            self.screens.len()
        );
        if index >= self.screens.len() {
            log::warn!(
                "ignoring share index {index}; {} screens available",
                self.screens.len()
            );
            return;
        }
        self.index = index;
    }

    pub fn step_next(&mut self) -> bool {
        if self.index + 1 >= self.screens.len() {
            return false;
        }
        self.index += 1;
        true
    }

    pub fn step_previous(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.index -= 1;
        true
    }

    pub fn touch_start(&mut self, x: f32) {
        self.swipe.touch_start(x);
    }

    pub fn touch_move(&mut self, x: f32) {
        self.swipe.touch_move(x);
    }

    /// Resolves the gesture into at most one step.
    pub fn touch_end(&mut self) -> Option<SwipeDirection> {
        let direction = self.swipe.touch_end()?;
        let moved = match direction {
            SwipeDirection::Next => self.step_next(),
            SwipeDirection::Previous => self.step_previous(),
        };
        moved.then_some(direction)
    }

    pub fn share_request(&self) -> Option<ShareRequest> {
        let current = self.current()?;
        Some(ShareRequest {
            title: share_text(current.kind).to_string(),
            url: self.url.clone(),
        })
    }

    /// Dispatches the selected screen to `provider`. Failures are logged
    /// and reported in the outcome, never propagated.
    pub async fn share(&self, provider: &dyn ShareProvider) -> ShareOutcome {
        let Some(request) = self.share_request() else {
            return ShareOutcome::NothingToShare;
        };
        dispatch_share(provider, request).await
    }
}

pub async fn dispatch_share(provider: &dyn ShareProvider, request: ShareRequest) -> ShareOutcome {
    match provider.share(&request).await {
        Ok(()) => ShareOutcome::Shared(request),
        Err(err) => {
            log::warn!("share dispatch failed: {err}");
            ShareOutcome::Failed(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ShareCarousel, ShareOutcome};
    use crate::share::{LogShareProvider, SwipeDirection};
    use crate::story::{Screen, ScreenKind, Story};
    use crate::testing::FailingShare;

    const URL: &str = "https://example.test/recap";

    fn story() -> Story {
        Story::new(
            "main",
            vec![
                Screen::title("hero.png"),
                Screen::color("#fff", "interlude"),
                Screen::TopBrands,
                Screen::Palette,
                Screen::Share,
            ],
        )
    }

    fn carousel() -> ShareCarousel {
        ShareCarousel::new(&story(), URL, 50.0)
    }

    #[test]
    fn filters_share_and_color_screens() {
        let carousel = carousel();
        let kinds: Vec<_> = carousel.screens().iter().map(|screen| screen.kind).collect();
        assert_eq!(
            kinds,
            vec![ScreenKind::Title, ScreenKind::TopBrands, ScreenKind::Palette]
        );
        assert_eq!(carousel.screens()[1].screen_index, 2);
    }

    #[test]
    fn stepping_saturates_at_both_ends() {
        let mut carousel = carousel();
        let len = carousel.len();
        for _ in 0..len {
            carousel.step_previous();
            assert_eq!(carousel.index(), 0);
        }
        for _ in 0..2 * len {
            carousel.step_next();
            assert!(carousel.index() < len);
        }
        assert_eq!(carousel.index(), len - 1);
    }

    #[test]
    fn swipe_steps_once_past_threshold() {
        let mut carousel = carousel();
        carousel.touch_start(100.0);
        carousel.touch_move(40.0);
        assert_eq!(carousel.touch_end(), Some(SwipeDirection::Next));
        assert_eq!(carousel.index(), 1);

        carousel.touch_start(100.0);
        carousel.touch_move(70.0);
        assert_eq!(carousel.touch_end(), None);
        assert_eq!(carousel.index(), 1);
    }

    #[test]
    fn select_index_sets_selection_directly() {
        let mut carousel = carousel();
        carousel.select_index(2);
        assert_eq!(carousel.current().map(|screen| screen.kind), Some(ScreenKind::Palette));
        carousel.select_index(0);
        assert_eq!(carousel.index(), 0);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "out of range")]
    fn select_index_out_of_range_is_a_programming_error() {
        let mut carousel = carousel();
        carousel.select_index(3);
    }

    #[tokio::test]
    async fn empty_carousel_is_inert() {
        let story = Story::new("outro", vec![Screen::color("#000", "bye"), Screen::Share]);
        let mut carousel = ShareCarousel::new(&story, URL, 50.0);
        assert!(carousel.is_empty());
        assert!(!carousel.step_next());
        assert!(!carousel.step_previous());
        carousel.select_index(0);
        assert_eq!(carousel.index(), 0);

        let provider = LogShareProvider::default();
        assert_eq!(carousel.share(&provider).await, ShareOutcome::NothingToShare);
        assert!(provider.shared().is_empty());
    }

    #[tokio::test]
    async fn share_uses_per_kind_text_and_stable_url() {
        let mut carousel = carousel();
        carousel.select_index(1);
        let provider = LogShareProvider::default();

        let ShareOutcome::Shared(request) = carousel.share(&provider).await else {
            panic!("share should succeed");
        };
        assert_eq!(request.title, "My top brands of the year!");
        assert_eq!(request.url, URL);
        assert_eq!(provider.shared(), vec![request]);
    }

    #[tokio::test]
    async fn share_failure_leaves_navigation_untouched() {
        let mut carousel = carousel();
        carousel.step_next();

        let outcome = carousel.share(&FailingShare).await;
        assert!(matches!(outcome, ShareOutcome::Failed(_)));
        assert_eq!(carousel.index(), 1);
        assert!(carousel.step_next());
    }
}
