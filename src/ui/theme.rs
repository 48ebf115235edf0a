//! Colour palette and text styles used across the UI.

use ratatui::style::{Color, Modifier, Style};

/// Panel fills, cycled by item index.
const PANEL_COLORS: &[Color] = &[
    Color::Rgb(0xE5, 0x48, 0x4D), // red
    Color::Rgb(0xF7, 0x8C, 0x2C), // orange
    Color::Rgb(0xF5, 0xCE, 0x3E), // yellow
    Color::Rgb(0x46, 0xA7, 0x58), // green
    Color::Rgb(0x3E, 0x7B, 0xE6), // blue
];

/// Central theme: change colours here and they propagate everywhere.
pub struct Theme;

impl Theme {
    // ── panels ─────────────────────────────────────────────────
    pub fn panel_color(index: usize) -> Color {
        PANEL_COLORS[index % PANEL_COLORS.len()]
    }

    pub fn panel_style(color: Color) -> Style {
        Style::default().bg(color).fg(Color::Black)
    }

    pub fn panel_title_style(focused: bool) -> Style {
        let style = Style::default().fg(Color::Black);
        if focused {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }

    // ── chrome ─────────────────────────────────────────────────
    pub fn border_style() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn title_style() -> Style {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_bar_style() -> Style {
        Style::default().bg(Color::DarkGray).fg(Color::White)
    }

    pub fn readout_style() -> Style {
        Style::default().fg(Color::Yellow)
    }
}
