use std::sync::Arc;

use crate::analysis::ContentProvider;
use crate::cache::DataCache;
use crate::catalog::CatalogProvider;
use crate::config::Config;
use crate::playback::PlaybackMachine;
use crate::share::{ShareCarousel, ShareProvider};
use crate::story::StoryDeck;

use super::analyses::ScreenAnalyses;
use super::state::AppState;

/// External collaborators, shared with spawned tasks.
#[derive(Clone)]
pub struct Providers {
    pub catalog: Arc<dyn CatalogProvider>,
    pub content: Arc<dyn ContentProvider>,
    pub share: Arc<dyn ShareProvider>,
}

pub struct App {
    pub state: AppState,
    pub playback: PlaybackMachine,
    pub cache: Arc<DataCache>,
    pub analyses: ScreenAnalyses,
    pub carousel: Option<ShareCarousel>,
    pub providers: Providers,
    pub config: Config,
}

impl App {
    pub fn new(deck: StoryDeck, providers: Providers, config: Config) -> Self {
        let cache = Arc::new(DataCache::new());
        let playback = PlaybackMachine::new(deck, cache.ready_flag());
        let mut app = Self {
            state: AppState::default(),
            playback,
            cache,
            analyses: ScreenAnalyses::default(),
            carousel: None,
            providers,
            config,
        };
        app.refresh_carousel();
        app
    }
}
