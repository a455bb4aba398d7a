use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Paragraph, Wrap};

use crate::app::{AppState, Mode};

/// Numbers shown on the debug status row.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DebugStats {
    pub ready: bool,
    pub memo_hit_rate: f64,
    pub analyses_in_flight: usize,
}

pub fn draw_status(
    frame: &mut Frame<'_>,
    area: Rect,
    app: &AppState,
    story_id: &str,
    stats: DebugStats,
) {
    let mode = match app.mode {
        Mode::Playback => "PLAY",
        Mode::Share => "SHARE",
    };
    let message = if app.status.message.is_empty() {
        "-"
    } else {
        app.status.message.as_str()
    };
    let status_text = format!("{story_id} | {mode} | {message}");
    let status = Paragraph::new(status_text)
        .style(Style::default())
        .wrap(Wrap { trim: true });

    if app.debug_status_visible && area.height >= 2 {
        let top = Rect::new(area.x, area.y, area.width, 1);
        frame.render_widget(status, top);

        let debug_text = format!(
            "ready={} | memo hit {:.0}% | analyses in flight={}",
            stats.ready,
            stats.memo_hit_rate * 100.0,
            stats.analyses_in_flight
        );
        let bottom = Rect::new(area.x, area.y + 1, area.width, area.height - 1);
        frame.render_widget(Paragraph::new(debug_text), bottom);
        return;
    }

    frame.render_widget(status, area);
}
