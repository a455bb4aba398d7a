use ratatui::layout::{Constraint, Direction, Layout, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiLayout {
    pub card: Rect,
    pub status: Rect,
}

pub fn split_layout(area: Rect, debug_status_visible: bool) -> UiLayout {
    let status_height = if debug_status_visible { 2 } else { 1 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(status_height)])
        .split(area);

    UiLayout {
        card: chunks[0],
        status: chunks[1],
    }
}

pub(crate) fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.max(1).min(area.width);
    let height = height.max(1).min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use ratatui::layout::Rect;

    use super::{centered_rect, split_layout};

    #[test]
    fn split_layout_reserves_status_rows() {
        let area = Rect::new(0, 0, 80, 30);

        let layout = split_layout(area, false);
        assert_eq!(layout.status.height, 1);
        assert_eq!(layout.card.height, 29);

        let debug = split_layout(area, true);
        assert_eq!(debug.status.height, 2);
        assert_eq!(debug.card.height, 28);
    }

    #[test]
    fn centered_rect_stays_within_area() {
        let area = Rect::new(10, 5, 20, 8);
        let centered = centered_rect(area, 99, 99);
        assert_eq!(centered, area);

        let small = centered_rect(area, 10, 4);
        assert_eq!(small, Rect::new(15, 7, 10, 4));
    }
}
