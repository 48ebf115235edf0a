//! Custom Ratatui widget that paints the rotation stack.
//!
//! Each [`PlacedItem`] carries a transform in abstract units where one unit
//! is one terminal column.  Terminal cells are roughly twice as tall as they
//! are wide, so vertical displacement is divided by [`CELL_ASPECT`] before it
//! becomes rows.  Panels are painted in the order given, which callers get
//! back-to-front from the core, so the centered panel ends up on top.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Color,
    text::Line,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use crate::core::{stack::PlacedItem, transform::ItemTransform};
use crate::ui::theme::Theme;

/// Height / width ratio of a terminal cell.
pub const CELL_ASPECT: f64 = 2.0;

/// Share of the pane height an unscaled panel occupies.
const PANEL_HEIGHT_FRACTION: f64 = 0.6;

/// Rows left free below the bottom edge of the centered panel.
const BOTTOM_MARGIN: f64 = 1.0;

/// What the preview harness shows inside each panel.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub label: String,
    pub color: Color,
}

impl Panel {
    /// The preview content factory: a coloured card per index.
    pub fn for_index(index: usize) -> Self {
        Self {
            label: format!("Panel {}", index + 1),
            color: Theme::panel_color(index),
        }
    }
}

/// Screen rectangle for a panel with `transform`, clipped to `area`.
///
/// Scaling is anchored at the panel's bottom edge.  Returns `None` when the
/// panel is entirely off-pane or collapses to nothing.
pub fn panel_rect(area: Rect, transform: &ItemTransform, view_width: f64) -> Option<Rect> {
    if area.width == 0 || area.height == 0 || view_width <= 0.0 {
        return None;
    }

    let base_height = (f64::from(area.height) * PANEL_HEIGHT_FRACTION).max(1.0);
    let width = view_width * transform.scale;
    let height = base_height * transform.scale;

    let center_x = f64::from(area.x) + f64::from(area.width) / 2.0 + transform.offset_x;
    let bottom = f64::from(area.y) + f64::from(area.height) - BOTTOM_MARGIN
        + transform.offset_y / CELL_ASPECT;

    let left = (center_x - width / 2.0).round() as i32;
    let right = (center_x + width / 2.0).round() as i32;
    let top = (bottom - height).round() as i32;
    let bottom = bottom.round() as i32;

    let x0 = left.max(i32::from(area.x));
    let x1 = right.min(i32::from(area.x) + i32::from(area.width));
    let y0 = top.max(i32::from(area.y));
    let y1 = bottom.min(i32::from(area.y) + i32::from(area.height));
    if x1 <= x0 || y1 <= y0 {
        return None;
    }

    Some(Rect::new(x0 as u16, y0 as u16, (x1 - x0) as u16, (y1 - y0) as u16))
}

// ───────────────────────────────────────── widget ────────────

pub struct StackWidget<'a> {
    items: &'a [PlacedItem<Panel>],
    view_width: f64,
    focused: Option<usize>,
    block: Option<Block<'a>>,
}

impl<'a> StackWidget<'a> {
    /// `items` must already be in back-to-front order.
    pub fn new(items: &'a [PlacedItem<Panel>], view_width: f64) -> Self {
        Self {
            items,
            view_width,
            focused: None,
            block: None,
        }
    }

    /// Index whose title is emphasised.
    pub fn focused(mut self, index: usize) -> Self {
        self.focused = Some(index);
        self
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }
}

impl<'a> Widget for StackWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let inner = match self.block {
            Some(block) => {
                let inner = block.inner(area);
                block.render(area, buf);
                inner
            }
            None => area,
        };

        if self.view_width <= 0.0 {
            Paragraph::new(Line::from("widen the terminal to show the stack"))
                .style(Theme::readout_style())
                .render(inner, buf);
            return;
        }

        for item in self.items {
            let Some(rect) = panel_rect(inner, &item.transform, self.view_width) else {
                continue;
            };
            Clear.render(rect, buf);

            let focused = self.focused == Some(item.index);
            let mut panel = Block::default()
                .style(Theme::panel_style(item.content.color))
                .title_style(Theme::panel_title_style(focused));
            // Tiny panels get no frame so the colour still shows.
            if rect.width >= 4 && rect.height >= 3 {
                panel = panel
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Theme::panel_style(item.content.color))
                    .title(format!(" {} ", item.content.label));
            }
            panel.render(rect, buf);
        }
    }
}
