//! Layout helpers: split the terminal area into regions.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Primary screen layout: stack pane, optional readout line, status bar.
pub struct AppLayout {
    pub stack_area: Rect,
    pub readout_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    /// Compute the layout from the full terminal area.
    pub fn from_area(area: Rect, show_readout: bool) -> Self {
        let readout_height = u16::from(show_readout);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),                 // stack pane
                Constraint::Length(readout_height), // transform readout
                Constraint::Length(1),              // status bar
            ])
            .split(area);

        Self {
            stack_area: chunks[0],
            readout_area: chunks[1],
            status_area: chunks[2],
        }
    }

    /// Drawable region inside the stack pane's border.
    pub fn stack_inner(&self) -> Rect {
        Rect::new(
            self.stack_area.x.saturating_add(1),
            self.stack_area.y.saturating_add(1),
            self.stack_area.width.saturating_sub(2),
            self.stack_area.height.saturating_sub(2),
        )
    }
}

/// Is `(col, row)` inside `rect`?
pub fn point_in_rect(rect: Rect, col: u16, row: u16) -> bool {
    col >= rect.x
        && col < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}
