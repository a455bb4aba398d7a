use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

/// Body of a card, already resolved from cache and analysis state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardBody {
    Loading(String),
    Failed(String),
    Lines(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub heading: String,
    pub subtitle: Option<String>,
    pub body: CardBody,
    /// Background for color screens, as `#rrggbb`.
    pub accent: Option<String>,
    /// Progress marker, e.g. `3/10`.
    pub progress: String,
}

pub fn draw_card(frame: &mut Frame<'_>, area: Rect, view: &CardView) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let accent = view
        .accent
        .as_deref()
        .and_then(|value| value.parse::<Color>().ok());
    let mut block = Block::default()
        .title(format!(" {} ", view.progress))
        .borders(Borders::ALL);
    if let Some(color) = accent {
        block = block.style(Style::default().bg(color));
    }
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let max_width = usize::from(inner.width);
    let mut lines = vec![Line::from(Span::styled(
        truncate_to_width(&view.heading, max_width),
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    if let Some(subtitle) = &view.subtitle {
        lines.push(Line::from(truncate_to_width(subtitle, max_width)));
    }
    lines.push(Line::default());

    match &view.body {
        CardBody::Loading(message) => lines.push(Line::from(Span::styled(
            message.clone(),
            Style::default().fg(Color::Yellow),
        ))),
        CardBody::Failed(message) => {
            lines.push(Line::from(Span::styled(
                message.clone(),
                Style::default().fg(Color::Red),
            )));
            lines.push(Line::from(Span::styled(
                "press r to retry, or tap to continue",
                Style::default().fg(Color::DarkGray),
            )));
        }
        CardBody::Lines(body) => {
            lines.extend(
                body.iter()
                    .map(|line| Line::from(truncate_to_width(line, max_width))),
            );
        }
    }

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner);
}

pub(crate) fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::truncate_to_width;

    #[test]
    fn truncate_keeps_short_text_and_marks_cut_text() {
        assert_eq!(truncate_to_width("mug", 10), "mug");
        assert_eq!(truncate_to_width("stoneware mug", 6), "stone…");
    }
}
