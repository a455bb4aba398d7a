use std::time::{Duration, Instant};

/// Tracks whether the next loop turn must redraw, and throttles redraws
/// requested only because background work is pending.
pub(crate) struct UiActor {
    needs_redraw: bool,
    last_pending_redraw: Instant,
    pending_redraw_interval: Duration,
}

impl UiActor {
    pub(crate) fn new(now: Instant, pending_redraw_interval: Duration) -> Self {
        Self {
            needs_redraw: true,
            last_pending_redraw: now,
            pending_redraw_interval,
        }
    }

    pub(crate) fn mark_redraw(&mut self) {
        self.needs_redraw = true;
    }

    pub(crate) fn clear_redraw(&mut self) {
        self.needs_redraw = false;
    }

    pub(crate) fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    pub(crate) fn should_request_pending_redraw(&self, pending_work: bool) -> bool {
        pending_work && self.last_pending_redraw.elapsed() >= self.pending_redraw_interval
    }

    pub(crate) fn on_drawn_pending(&mut self) {
        self.last_pending_redraw = Instant::now();
    }
}
