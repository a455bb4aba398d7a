use std::time::{Duration, Instant};

use tokio::sync::mpsc::UnboundedReceiver;
use tokio::time::{self, MissedTickBehavior};

use crate::analysis::request_analysis;
use crate::error::AppResult;
use crate::event::DomainEvent;
use crate::share::dispatch_share;

use super::actors::UiActor;
use super::command::{CommandOutcome, Effect};
use super::core::App;
use super::event_bus::EventBusRuntime;
use super::terminal_session::{TerminalSession, TerminalSurface};

struct LoopRuntime {
    input_poll_timeout: Duration,
    ui_actor: UiActor,
    session: TerminalSession,
    redraw_tick: time::Interval,
    loop_event_rx: UnboundedReceiver<DomainEvent>,
    bus: EventBusRuntime,
}

enum WaitEvent {
    Event(DomainEvent),
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Break,
}

/// What the loop must do after one domain event was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct EventResponse {
    pub control: LoopControl,
    pub redraw: bool,
    pub clear_terminal: bool,
}

impl EventResponse {
    fn redraw() -> Self {
        Self {
            control: LoopControl::Continue,
            redraw: true,
            clear_terminal: false,
        }
    }

    fn idle() -> Self {
        Self {
            control: LoopControl::Continue,
            redraw: false,
            clear_terminal: false,
        }
    }
}

impl App {
    pub async fn run(&mut self) -> AppResult<()> {
        let mut runtime = self.initialize_loop_runtime()?;
        self.spawn_catalog_load(&mut runtime.bus);
        let effects = self.startup_effects();
        self.spawn_effects(&mut runtime.bus, effects);

        loop {
            self.update_ui_and_render_frame(&mut runtime)?;

            let waited = wait_next_event(
                &mut runtime.loop_event_rx,
                &mut runtime.redraw_tick,
                runtime.input_poll_timeout,
            )
            .await;
            if matches!(
                self.handle_waited_event(waited, &mut runtime)?,
                LoopControl::Break
            ) {
                break;
            }
        }

        log::info!("leaving playback at {}", self.playback.position());
        runtime.bus.shutdown();
        runtime.session.restore()?;
        Ok(())
    }

    fn initialize_loop_runtime(&mut self) -> AppResult<LoopRuntime> {
        let redraw_interval = Duration::from_millis(self.config.playback.redraw_interval_ms);
        let input_poll_timeout = Duration::from_millis(self.config.playback.input_poll_timeout_ms);
        let ui_actor = UiActor::new(Instant::now(), redraw_interval);
        let session = TerminalSession::enter()?;
        let (bus, loop_event_rx) = EventBusRuntime::spawn();
        let mut redraw_tick = time::interval(redraw_interval);
        redraw_tick.set_missed_tick_behavior(MissedTickBehavior::Skip);

        Ok(LoopRuntime {
            input_poll_timeout,
            ui_actor,
            session,
            redraw_tick,
            loop_event_rx,
            bus,
        })
    }

    /// Starts the one-time catalog fetch. The loop hears back once both
    /// collections have settled.
    pub(crate) fn spawn_catalog_load(&self, bus: &mut EventBusRuntime) {
        let cache = self.cache.clone();
        let catalog = self.providers.catalog.clone();
        let config = self.config.catalog.clone();
        bus.spawn_task(async move {
            cache.initialize(catalog.as_ref(), &config).await;
            DomainEvent::CatalogSettled { retried: 0 }
        });
    }

    pub(crate) fn spawn_effects(&self, bus: &mut EventBusRuntime, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::StartAnalysis { kind, payload } => {
                    let content = self.providers.content.clone();
                    let deadline = self.config.analysis.timeout();
                    log::debug!("requesting analysis {}", kind.key());
                    bus.spawn_task(async move {
                        let result =
                            request_analysis(content.as_ref(), kind, payload, deadline).await;
                        DomainEvent::AnalysisComplete { kind, result }
                    });
                }
                Effect::DispatchShare(request) => {
                    let share = self.providers.share.clone();
                    bus.spawn_task(async move {
                        DomainEvent::ShareComplete(dispatch_share(share.as_ref(), request).await)
                    });
                }
                Effect::RetryCatalog => {
                    let cache = self.cache.clone();
                    let catalog = self.providers.catalog.clone();
                    let config = self.config.catalog.clone();
                    bus.spawn_task(async move {
                        let retried = cache.retry_failed(catalog.as_ref(), &config).await;
                        DomainEvent::CatalogSettled { retried }
                    });
                }
            }
        }
    }

    fn update_ui_and_render_frame(&mut self, runtime: &mut LoopRuntime) -> AppResult<()> {
        if runtime.ui_actor.needs_redraw() {
            self.render_frame(&mut runtime.session)?;
            runtime.ui_actor.clear_redraw();
            if self.has_pending_work() {
                runtime.ui_actor.on_drawn_pending();
            }
        }
        Ok(())
    }

    fn handle_waited_event(
        &mut self,
        waited: WaitEvent,
        runtime: &mut LoopRuntime,
    ) -> AppResult<LoopControl> {
        let event = match waited {
            WaitEvent::Event(event) => event,
            WaitEvent::Closed => return Ok(LoopControl::Break),
        };

        if matches!(event, DomainEvent::RedrawTick) {
            if runtime
                .ui_actor
                .should_request_pending_redraw(self.has_pending_work())
            {
                runtime.ui_actor.mark_redraw();
            }
            return Ok(LoopControl::Continue);
        }

        let width = Self::surface_width(&runtime.session);
        let response = self.apply_domain_event(event, width, &mut runtime.bus);
        if response.clear_terminal {
            runtime.session.clear()?;
        }
        if response.redraw {
            runtime.ui_actor.mark_redraw();
        }
        Ok(response.control)
    }

    /// Applies one event to app state and starts whatever work it asks for.
    pub(crate) fn apply_domain_event(
        &mut self,
        event: DomainEvent,
        width: u16,
        bus: &mut EventBusRuntime,
    ) -> EventResponse {
        match event {
            DomainEvent::Input(input) => {
                let outcome = self.handle_input_event(input, width);
                let mut response = EventResponse {
                    control: LoopControl::Continue,
                    redraw: outcome.redraw,
                    clear_terminal: outcome.clear_terminal,
                };
                let Some(command) = outcome.command else {
                    return response;
                };

                let dispatch = self.dispatch(command);
                if let Some(moved) = dispatch.moved {
                    log::debug!("{} -> {} ({})", moved.from, moved.to, moved.reason.as_str());
                }
                match dispatch.outcome {
                    CommandOutcome::QuitRequested => {
                        response.control = LoopControl::Break;
                    }
                    CommandOutcome::Applied | CommandOutcome::Noop => {
                        self.spawn_effects(bus, dispatch.effects);
                        response.redraw = true;
                    }
                }
                response
            }
            DomainEvent::InputError(message) => {
                log::warn!("terminal input error: {message}");
                self.state.set_status(format!("input error: {message}"));
                EventResponse::redraw()
            }
            DomainEvent::CatalogSettled { retried } => {
                let effects = self.on_catalog_settled(retried);
                self.spawn_effects(bus, effects);
                EventResponse::redraw()
            }
            DomainEvent::AnalysisComplete { kind, result } => {
                if let Err(err) = &result {
                    log::warn!("analysis {} failed: {err}", kind.key());
                }
                if self.on_analysis_complete(kind, result) {
                    EventResponse::redraw()
                } else {
                    EventResponse::idle()
                }
            }
            DomainEvent::ShareComplete(outcome) => {
                self.on_share_complete(outcome);
                EventResponse::redraw()
            }
            DomainEvent::RedrawTick => {
                if self.has_pending_work() {
                    EventResponse::redraw()
                } else {
                    EventResponse::idle()
                }
            }
            DomainEvent::Wake => EventResponse::idle(),
        }
    }
}

async fn wait_next_event(
    loop_event_rx: &mut UnboundedReceiver<DomainEvent>,
    redraw_tick: &mut time::Interval,
    wake_timeout: Duration,
) -> WaitEvent {
    tokio::select! {
        biased;
        maybe_loop = loop_event_rx.recv() => {
            match maybe_loop {
                Some(event) => WaitEvent::Event(event),
                None => WaitEvent::Closed,
            }
        },
        _ = redraw_tick.tick() => {
            WaitEvent::Event(DomainEvent::RedrawTick)
        },
        _ = time::sleep(wake_timeout) => {
            WaitEvent::Event(DomainEvent::Wake)
        }
    }
}
