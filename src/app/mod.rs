mod actors;
mod analyses;
pub mod command;
mod core;
mod dispatch;
mod event_bus;
mod event_loop;
mod input_ops;
pub mod keymap;
mod state;
pub(crate) mod terminal_session;
mod view_ops;

#[cfg(test)]
mod tests;

pub use analyses::ScreenAnalyses;
pub use command::{Command, CommandDispatchResult, CommandOutcome, Effect};
pub use core::{App, Providers};
pub use keymap::KeymapPreset;
pub use state::{AppState, Mode, StatusState};
