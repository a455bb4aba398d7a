pub const DEFAULT_SWIPE_THRESHOLD: f32 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Next,
    Previous,
}

/// Horizontal swipe recognizer.
///
/// Positions exist only for the duration of a gesture and are cleared by
/// every `touch_end`, whatever it resolved to.
#[derive(Debug, Clone, PartialEq)]
pub struct SwipeTracker {
    start_x: Option<f32>,
    end_x: Option<f32>,
    threshold: f32,
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new(DEFAULT_SWIPE_THRESHOLD)
    }
}

impl SwipeTracker {
    pub fn new(threshold: f32) -> Self {
        Self {
            start_x: None,
            end_x: None,
            threshold,
        }
    }

    pub fn touch_start(&mut self, x: f32) {
        self.start_x = Some(x);
        self.end_x = None;
    }

    pub fn touch_move(&mut self, x: f32) {
        self.end_x = Some(x);
    }

    /// Swiping left (start to the right of end) moves forward.
    pub fn touch_end(&mut self) -> Option<SwipeDirection> {
        let start = self.start_x.take();
        let end = self.end_x.take();
        let distance = start? - end?;
        if distance > self.threshold {
            Some(SwipeDirection::Next)
        } else if distance < -self.threshold {
            Some(SwipeDirection::Previous)
        } else {
            None
        }
    }

    pub fn is_tracking(&self) -> bool {
        self.start_x.is_some()
    }
}
