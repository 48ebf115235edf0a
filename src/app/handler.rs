//! Input handling: maps key/mouse events to gesture callbacks and state
//! mutations.
//!
//! Mouse drags inside the stack pane drive the gesture machine: the
//! horizontal translation is measured in columns from where the left button
//! went down, which is the same unit the view width is expressed in.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::config::Action;
use crate::core::gesture::Commit;
use crate::ui::layout::{point_in_rect, AppLayout};

use super::settings::SETTINGS_ITEMS;
use super::state::{ActiveView, AppState, DragAnchor};

/// Process a key event, dispatching based on the active view.
pub fn handle_key(state: &mut AppState, key: KeyEvent) {
    if key.kind == KeyEventKind::Release {
        return;
    }

    // Ctrl+c always quits, regardless of view.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return;
    }

    match state.active_view {
        ActiveView::Stack => handle_stack_key(state, key),
        ActiveView::SettingsMenu => handle_settings_key(state, key),
    }
}

// ── Stack view (configurable bindings) ──────────────────────────

fn handle_stack_key(state: &mut AppState, key: KeyEvent) {
    // A message lasts until the next keypress in the stack view.
    state.status_message = None;

    if key.code == KeyCode::Esc {
        cancel_drag(state, "escape");
        return;
    }

    let Some(action) = state.config.match_key(key) else {
        return;
    };

    match action {
        Action::Quit => state.should_quit = true,
        Action::OpenSettings => {
            cancel_drag(state, "settings opened");
            state.active_view = ActiveView::SettingsMenu;
            state.settings_selected = 0;
        }
        Action::ToggleReadout => {
            state.config.show_readout = !state.config.show_readout;
            let area = state.terminal_area;
            state.resize(area);
        }
        Action::Prev => {
            let commit = state.stack.step(-1);
            apply_commit(state, commit);
        }
        Action::Next => {
            let commit = state.stack.step(1);
            apply_commit(state, commit);
        }
        Action::First => {
            let commit = state.stack.jump_to(0);
            apply_commit(state, commit);
        }
        Action::Last => {
            let last = state.stack.item_count().saturating_sub(1);
            let commit = state.stack.jump_to(last);
            apply_commit(state, commit);
        }
    }
}

// ── Settings popup ──────────────────────────────────────────────

fn handle_settings_key(state: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => {
            state.active_view = ActiveView::Stack;
        }
        KeyCode::Up | KeyCode::Char('k') => {
            state.settings_selected = state.settings_selected.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if state.settings_selected + 1 < SETTINGS_ITEMS.len() {
                state.settings_selected += 1;
            }
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            if let Some(item) = SETTINGS_ITEMS.get(state.settings_selected) {
                item.activate(state);
                if let Err(err) = state.config.save() {
                    tracing::warn!("failed to save config: {err:#}");
                }
            }
        }
        _ => {}
    }
}

// ── Mouse ───────────────────────────────────────────────────────

/// Process a mouse event.  Only the stack view reacts to the mouse.
///
/// Drag updates are not eased: the first `Drag` after a press snaps the
/// displayed center to the live offset, even if a previous commit is still
/// easing into place.
pub fn handle_mouse(state: &mut AppState, mouse: MouseEvent) {
    if state.active_view != ActiveView::Stack {
        return;
    }

    let layout = AppLayout::from_area(state.terminal_area, state.config.show_readout);
    let pane = layout.stack_inner();

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if point_in_rect(pane, mouse.column, mouse.row) && state.stack.gesture().drag_enabled() {
                state.drag_anchor = Some(DragAnchor {
                    start_column: mouse.column,
                });
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            let Some(anchor) = state.drag_anchor else {
                return;
            };
            state.stack.drag_changed(translation(anchor, mouse.column));
            state.smooth.follow(state.stack.gesture().live());
        }
        MouseEventKind::Up(MouseButton::Left) => {
            let Some(anchor) = state.drag_anchor.take() else {
                return;
            };
            let commit = state.stack.drag_ended(translation(anchor, mouse.column));
            apply_commit(state, commit);
        }
        MouseEventKind::ScrollDown | MouseEventKind::ScrollRight => {
            if point_in_rect(pane, mouse.column, mouse.row) {
                let commit = state.stack.step(1);
                apply_commit(state, commit);
            }
        }
        MouseEventKind::ScrollUp | MouseEventKind::ScrollLeft => {
            if point_in_rect(pane, mouse.column, mouse.row) {
                let commit = state.stack.step(-1);
                apply_commit(state, commit);
            }
        }
        _ => {}
    }
}

/// Terminal lost focus mid-drag: the release will never arrive.
pub fn handle_focus_lost(state: &mut AppState) {
    cancel_drag(state, "focus lost");
}

/// Advance the ease animation by one frame.
pub fn handle_tick(state: &mut AppState) {
    if !state.stack.gesture().is_dragging() {
        state.smooth.tick();
    }
}

// ── helpers ─────────────────────────────────────────────────────

/// Horizontal translation from the drag-start column, in columns.
fn translation(anchor: DragAnchor, column: u16) -> f64 {
    f64::from(column) - f64::from(anchor.start_column)
}

/// Start easing toward a freshly committed center.
fn apply_commit(state: &mut AppState, commit: Option<Commit>) {
    let Some(commit) = commit else {
        return;
    };
    if commit.changed() {
        tracing::debug!(from = commit.from, to = commit.to, "center committed");
    }
    // Pick up from what is on screen, which may still be mid-ease.
    let from = if state.smooth.is_animating() {
        state.smooth.displayed()
    } else {
        commit.from
    };
    state.smooth.animate(from, commit.to);
    state.status_message = None;
}

fn cancel_drag(state: &mut AppState, reason: &str) {
    state.drag_anchor = None;
    if let Some(from) = state.stack.cancel_drag() {
        tracing::debug!(reason, "drag cancelled");
        state.smooth.animate(from, state.stack.gesture().committed());
    }
}
