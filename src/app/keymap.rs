use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use super::command::Command;
use super::state::Mode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeymapPreset {
    Default,
    Vim,
}

impl KeymapPreset {
    pub fn parse(value: &str) -> Self {
        match value {
            "default" => Self::Default,
            "vim" => Self::Vim,
            _ => Self::Default,
        }
    }
}

pub fn map_key_to_command(key: KeyEvent, mode: Mode, preset: KeymapPreset) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Command::Quit),
            _ => None,
        };
    }

    let mapped = match mode {
        Mode::Playback => map_playback_key(key),
        Mode::Share => map_share_key(key),
    };
    if mapped.is_some() {
        return mapped;
    }

    match preset {
        KeymapPreset::Default => None,
        KeymapPreset::Vim => match key.code {
            KeyCode::Char('j') => Some(Command::Advance),
            KeyCode::Char('k') => Some(Command::Retreat),
            _ => None,
        },
    }
}

fn map_playback_key(key: KeyEvent) -> Option<Command> {
    match key.code {
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(' ') | KeyCode::Enter => {
            Some(Command::Advance)
        }
        KeyCode::Left | KeyCode::Char('h') => Some(Command::Retreat),
        _ => map_common_key(key),
    }
}

fn map_share_key(key: KeyEvent) -> Option<Command> {
    match key.code {
        KeyCode::Right | KeyCode::Char('l') => Some(Command::ShareNext),
        KeyCode::Left | KeyCode::Char('h') => Some(Command::SharePrevious),
        KeyCode::Char(digit @ '1'..='9') => digit.to_digit(10).map(|n| Command::ShareSelect {
            index: n as usize - 1,
        }),
        KeyCode::Char('s') => Some(Command::Share),
        KeyCode::Char(' ') | KeyCode::Enter => Some(Command::Advance),
        KeyCode::Backspace => Some(Command::Retreat),
        _ => map_common_key(key),
    }
}

fn map_common_key(key: KeyEvent) -> Option<Command> {
    match key.code {
        KeyCode::Char('r') => Some(Command::Retry),
        KeyCode::Char('d') => Some(Command::DebugStatusToggle),
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}

/// Maps a mouse event on a surface `width` columns wide. In share mode a
/// left-button press, drag and release become a swipe measured in pixels.
pub fn map_mouse_to_command(
    mouse: MouseEvent,
    mode: Mode,
    width: u16,
    cell_width_px: u16,
) -> Option<Command> {
    let x = f32::from(mouse.column) * f32::from(cell_width_px);
    match (mode, mouse.kind) {
        (Mode::Playback, MouseEventKind::Down(MouseButton::Left)) => Some(Command::Tap {
            column: mouse.column,
            width,
        }),
        (Mode::Share, MouseEventKind::Down(MouseButton::Left)) => Some(Command::SwipeStart { x }),
        (Mode::Share, MouseEventKind::Drag(MouseButton::Left)) => Some(Command::SwipeMove { x }),
        (Mode::Share, MouseEventKind::Up(MouseButton::Left)) => Some(Command::SwipeEnd),
        _ => None,
    }
}
