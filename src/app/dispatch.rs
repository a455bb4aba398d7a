use crate::analysis::{AnalysisKind, AnalysisResult, GuardState, StartDecision};
use crate::cache::CollectionState;
use crate::error::AppResult;
use crate::playback::NavOutcome;
use crate::share::{ShareCarousel, ShareOutcome};

use super::command::{Command, CommandDispatchResult, CommandOutcome, Effect};
use super::core::App;
use super::state::Mode;

impl App {
    pub fn dispatch(&mut self, command: Command) -> CommandDispatchResult {
        match command {
            Command::Advance => {
                let outcome = self.playback.advance();
                self.apply_nav(outcome)
            }
            Command::Retreat => {
                let outcome = self.playback.retreat();
                self.apply_nav(outcome)
            }
            Command::Tap { column, width } => {
                if column < width / 2 {
                    self.dispatch(Command::Retreat)
                } else {
                    self.dispatch(Command::Advance)
                }
            }
            Command::ShareNext => self.with_carousel(ShareCarousel::step_next),
            Command::SharePrevious => self.with_carousel(ShareCarousel::step_previous),
            Command::ShareSelect { index } => self.with_carousel(|carousel| {
                if index >= carousel.len() || index == carousel.index() {
                    return false;
                }
                carousel.select_index(index);
                true
            }),
            Command::SwipeStart { x } => self.with_carousel(|carousel| {
                carousel.touch_start(x);
                false
            }),
            Command::SwipeMove { x } => self.with_carousel(|carousel| {
                carousel.touch_move(x);
                false
            }),
            Command::SwipeEnd => self.with_carousel(|carousel| carousel.touch_end().is_some()),
            Command::Share => self.request_share(),
            Command::Retry => self.request_retry(),
            Command::DebugStatusToggle => {
                self.state.debug_status_visible = !self.state.debug_status_visible;
                CommandDispatchResult::applied()
            }
            Command::Quit => CommandDispatchResult::from_outcome(CommandOutcome::QuitRequested),
        }
    }

    /// Effects to start once the event loop is running.
    pub fn startup_effects(&mut self) -> Vec<Effect> {
        self.request_screen_analysis()
    }

    pub fn on_catalog_settled(&mut self, retried: usize) -> Vec<Effect> {
        let failed = [self.cache.saved_state(), self.cache.recommended_state()]
            .iter()
            .filter(|state| matches!(state, CollectionState::Failed(_)))
            .count();
        if failed > 0 {
            self.state
                .set_status(format!("{failed} product collection(s) could not load"));
        } else if retried > 0 {
            self.state.set_status("products reloaded");
        } else {
            self.state.set_status("ready");
        }
        self.request_screen_analysis()
    }

    pub fn on_analysis_complete(
        &mut self,
        kind: AnalysisKind,
        result: AppResult<AnalysisResult>,
    ) -> bool {
        self.analyses.finish(kind, &self.cache, result)
    }

    pub fn on_share_complete(&mut self, outcome: ShareOutcome) {
        match outcome {
            ShareOutcome::Shared(request) => {
                self.state.set_status(format!("shared: {}", request.title))
            }
            ShareOutcome::Failed(message) => {
                self.state.set_status(format!("share unavailable: {message}"))
            }
            ShareOutcome::NothingToShare => self.state.set_status("nothing to share"),
        }
    }

    pub fn has_pending_work(&self) -> bool {
        !self.cache.is_ready() || self.analyses.in_flight() > 0
    }

    pub(crate) fn refresh_carousel(&mut self) {
        if self.playback.is_share_screen() {
            self.carousel = Some(ShareCarousel::new(
                self.playback.current_story(),
                self.config.share.url.clone(),
                self.config.share.swipe_threshold,
            ));
            self.state.mode = Mode::Share;
        } else {
            self.carousel = None;
            self.state.mode = Mode::Playback;
        }
    }

    fn apply_nav(&mut self, outcome: NavOutcome) -> CommandDispatchResult {
        match outcome {
            NavOutcome::Moved(event) => {
                self.refresh_carousel();
                let effects = self.request_screen_analysis();
                self.state.set_status(format!(
                    "{} -> {}",
                    event.reason.as_str(),
                    self.playback.current_screen().kind().as_str()
                ));
                CommandDispatchResult {
                    outcome: CommandOutcome::Applied,
                    effects,
                    moved: Some(event),
                }
            }
            NavOutcome::Gated => {
                self.state.set_status("loading your products...");
                CommandDispatchResult::noop()
            }
            NavOutcome::Noop => CommandDispatchResult::noop(),
        }
    }

    fn with_carousel(&mut self, op: impl FnOnce(&mut ShareCarousel) -> bool) -> CommandDispatchResult {
        let Some(carousel) = self.carousel.as_mut() else {
            return CommandDispatchResult::noop();
        };
        if op(carousel) {
            CommandDispatchResult::applied()
        } else {
            CommandDispatchResult::noop()
        }
    }

    fn request_share(&mut self) -> CommandDispatchResult {
        let Some(request) = self
            .carousel
            .as_ref()
            .and_then(ShareCarousel::share_request)
        else {
            self.state.set_status("nothing to share");
            return CommandDispatchResult::noop();
        };
        self.state.set_status("sharing...");
        CommandDispatchResult::applied().with_effects(vec![Effect::DispatchShare(request)])
    }

    fn request_retry(&mut self) -> CommandDispatchResult {
        let any_failed = [self.cache.saved_state(), self.cache.recommended_state()]
            .iter()
            .any(|state| matches!(state, CollectionState::Failed(_)));
        if any_failed && self.cache.is_ready() {
            self.state.set_status("retrying products...");
            return CommandDispatchResult::applied().with_effects(vec![Effect::RetryCatalog]);
        }

        let Some(kind) = self.current_analysis_kind() else {
            return CommandDispatchResult::noop();
        };
        if !matches!(self.analyses.state(kind), GuardState::Failed(_)) {
            return CommandDispatchResult::noop();
        }
        self.analyses.retry(kind);
        self.state.set_status(format!("retrying {}", kind.key()));
        CommandDispatchResult::applied().with_effects(self.request_screen_analysis())
    }

    fn current_analysis_kind(&self) -> Option<AnalysisKind> {
        AnalysisKind::for_screen(self.playback.current_screen().kind())
    }

    fn request_screen_analysis(&mut self) -> Vec<Effect> {
        let Some(kind) = self.current_analysis_kind() else {
            return Vec::new();
        };
        match self.analyses.begin(kind, &self.cache) {
            StartDecision::Started(payload) => vec![Effect::StartAnalysis { kind, payload }],
            StartDecision::Cached(_) | StartDecision::WaitingForProducts | StartDecision::Skipped => {
                Vec::new()
            }
        }
    }
}
