#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Playback,
    /// The current screen is a share screen and the carousel is active.
    Share,
}

#[derive(Debug, Clone, Default)]
pub struct StatusState {
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub mode: Mode,
    pub debug_status_visible: bool,
    pub status: StatusState,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            mode: Mode::Playback,
            debug_status_visible: false,
            status: StatusState::default(),
        }
    }
}

impl AppState {
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status.message = message.into();
    }
}
