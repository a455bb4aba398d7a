use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::share::{ShareCarousel, share_text};

use super::layout::centered_rect;

pub fn draw_share_overlay(frame: &mut Frame<'_>, area: Rect, carousel: &ShareCarousel) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let popup = centered_rect(area, area.width.min(60), area.height.min(7));
    frame.render_widget(Clear, popup);
    let block = Block::default()
        .title(" Share ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let Some(current) = carousel.current() else {
        frame.render_widget(
            Paragraph::new("Nothing to share in this story").alignment(Alignment::Center),
            inner,
        );
        return;
    };

    let dots: Vec<Span<'_>> = (0..carousel.len())
        .map(|index| {
            if index == carousel.index() {
                Span::styled("● ", Style::default().add_modifier(Modifier::BOLD))
            } else {
                Span::styled("○ ", Style::default().fg(Color::DarkGray))
            }
        })
        .collect();
    let lines = vec![
        Line::from(current.kind.as_str()),
        Line::from(share_text(current.kind)),
        Line::default(),
        Line::from(dots),
        Line::from(Span::styled(
            "←/→ or drag to browse · s to share · enter to continue",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}
