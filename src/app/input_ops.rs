use crossterm::event::{Event, KeyEventKind};

use super::command::Command;
use super::core::App;
use super::keymap::{KeymapPreset, map_key_to_command, map_mouse_to_command};

#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct InputOutcome {
    pub redraw: bool,
    pub clear_terminal: bool,
    pub command: Option<Command>,
}

impl App {
    /// Translates a terminal event into at most one command. `width` is the
    /// surface width in columns.
    pub(crate) fn handle_input_event(&self, event: Event, width: u16) -> InputOutcome {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let preset = KeymapPreset::parse(&self.config.keymap.preset);
                InputOutcome {
                    command: map_key_to_command(key, self.state.mode, preset),
                    ..InputOutcome::default()
                }
            }
            Event::Mouse(mouse) => InputOutcome {
                command: map_mouse_to_command(
                    mouse,
                    self.state.mode,
                    width,
                    self.config.share.cell_width_px,
                ),
                ..InputOutcome::default()
            },
            Event::Resize(_, _) => InputOutcome {
                redraw: true,
                clear_terminal: true,
                command: None,
            },
            _ => InputOutcome::default(),
        }
    }
}
