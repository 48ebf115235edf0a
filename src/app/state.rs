//! Central application state.
//!
//! All mutable state lives here so that the rest of the app can be pure
//! functions over `&AppState` (rendering) or `&mut AppState` (event handling).

use ratatui::layout::Rect;

use crate::config::AppConfig;
use crate::core::stack::RotationStack;
use crate::ui::smooth_center::SmoothCenter;
use crate::ui::stack_widget::Panel;

/// The preview stack's content factory.
pub type PanelFactory = fn(usize) -> Panel;

/// Which view / overlay is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Stack,
    SettingsMenu,
}

/// Pointer bookkeeping for an in-progress mouse drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragAnchor {
    /// Column where the left button went down.
    pub start_column: u16,
}

/// Top-level application state.
pub struct AppState {
    /// Items, gesture state and view geometry.
    pub stack: RotationStack<PanelFactory>,
    /// Eases the displayed center after a commit.
    pub smooth: SmoothCenter,
    /// Set between mouse-down inside the stack and mouse-up.
    pub drag_anchor: Option<DragAnchor>,
    /// Controls the main event loop.
    pub should_quit: bool,
    /// An optional status message shown in the bottom bar.
    pub status_message: Option<String>,
    /// Which view / overlay is currently shown.
    pub active_view: ActiveView,
    /// User configuration.
    pub config: AppConfig,
    /// Currently highlighted item in the settings menu.
    pub settings_selected: usize,
    /// Last known terminal size, for mouse hit-testing.
    pub terminal_area: Rect,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let stack = RotationStack::new(config.item_count.max(1), Panel::for_index as PanelFactory);
        Self {
            stack,
            smooth: SmoothCenter::new(config.ease_speed),
            drag_anchor: None,
            should_quit: false,
            status_message: None,
            active_view: ActiveView::default(),
            config,
            settings_selected: 0,
            terminal_area: Rect::default(),
        }
    }

    /// Center position the render step should place items around.
    pub fn displayed_center(&self) -> f64 {
        self.smooth.displayed()
    }

    /// Index whose panel is currently frontmost on screen.
    pub fn focused_index(&self) -> usize {
        let last = self.stack.item_count().saturating_sub(1) as f64;
        self.displayed_center().round().clamp(0.0, last) as usize
    }

    /// Record a new terminal size and re-derive the view width from the
    /// stack pane's inner width.
    pub fn resize(&mut self, area: Rect) {
        self.terminal_area = area;
        let layout = crate::ui::layout::AppLayout::from_area(area, self.config.show_readout);
        self.stack.resize(f64::from(layout.stack_inner().width));
    }
}
