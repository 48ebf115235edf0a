//! Drag gesture → centered index state machine.
//!
//! Two positions are tracked: the committed center (integral at rest) and
//! the live offset that follows the pointer during a drag.  Only a release
//! commits; a cancelled drag falls back to the committed center.

/// A drag of half a view width moves the center by exactly one index.
const DRAG_UNIT_FRACTION: f64 = 0.5;

/// Where the gesture currently is.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GesturePhase {
    #[default]
    Idle,
    /// Pointer is down; `translation` is the latest horizontal delta from
    /// the drag-start position.
    Dragging { translation: f64 },
}

/// Result of a gesture that changed (or tried to change) the committed center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Commit {
    /// Position displayed just before the commit.  The ease animation
    /// starts from here.
    pub from: f64,
    /// The new committed center.
    pub to: f64,
}

impl Commit {
    pub fn changed(&self) -> bool {
        (self.from - self.to).abs() > f64::EPSILON
    }
}

/// Gesture state for one stack instance.
#[derive(Debug, Clone)]
pub struct RotationGesture {
    item_count: usize,
    /// Committed center index.  Always integral in `[0, item_count - 1]`.
    committed: f64,
    /// Live offset.  May leave `[0, item_count - 1]` mid-drag.
    live: f64,
    phase: GesturePhase,
}

impl RotationGesture {
    pub fn new(item_count: usize) -> Self {
        debug_assert!(item_count >= 1, "a rotation stack needs at least one item");
        Self {
            item_count,
            committed: 0.0,
            live: 0.0,
            phase: GesturePhase::Idle,
        }
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    pub fn committed(&self) -> f64 {
        self.committed
    }

    /// Committed center as an item index.
    pub fn committed_index(&self) -> usize {
        self.committed as usize
    }

    pub fn live(&self) -> f64 {
        self.live
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, GesturePhase::Dragging { .. })
    }

    /// Single-item (or empty) stacks have nothing to rotate to.
    pub fn drag_enabled(&self) -> bool {
        self.item_count > 1
    }

    /// Change the number of items, keeping the committed center in range.
    pub fn set_item_count(&mut self, item_count: usize) {
        self.item_count = item_count;
        self.phase = GesturePhase::Idle;
        self.committed = self.clamp_index(self.committed);
        self.live = self.committed;
    }

    /// Position under the pointer for a given translation.
    fn position_for(&self, translation: f64, view_width: f64) -> f64 {
        let unit = view_width * DRAG_UNIT_FRACTION;
        if unit <= 0.0 {
            return self.committed;
        }
        self.committed - translation / unit
    }

    /// Round, then clamp into `[0, item_count - 1]`.
    fn clamp_index(&self, position: f64) -> f64 {
        let mut p = position.round();
        if p < 0.0 {
            p = 0.0;
        }
        if p >= self.item_count as f64 {
            p = self.item_count.saturating_sub(1) as f64;
        }
        p
    }

    /// Movement event.  The first one moves Idle → Dragging.
    pub fn drag_changed(&mut self, translation: f64, view_width: f64) {
        if !self.drag_enabled() {
            return;
        }
        self.phase = GesturePhase::Dragging { translation };
        self.live = self.position_for(translation, view_width);
    }

    /// Release.  Returns the commit, or `None` if no drag was in progress.
    pub fn drag_ended(&mut self, translation: f64, view_width: f64) -> Option<Commit> {
        if !self.is_dragging() {
            return None;
        }
        let from = self.position_for(translation, view_width);
        let to = self.clamp_index(from);
        self.live = to;
        self.committed = to;
        self.phase = GesturePhase::Idle;
        Some(Commit { from, to })
    }

    /// Abort an in-progress drag.  Nothing is committed.
    ///
    /// Returns the position the live offset was at, if a drag was active.
    pub fn cancel(&mut self) -> Option<f64> {
        if !self.is_dragging() {
            return None;
        }
        let from = self.live;
        self.live = self.committed;
        self.phase = GesturePhase::Idle;
        Some(from)
    }

    /// Move the committed center by `delta` items.  Ignored while dragging.
    pub fn step(&mut self, delta: i64) -> Option<Commit> {
        self.jump_to_position(self.committed + delta as f64)
    }

    /// Commit directly to `index` (clamped).  Ignored while dragging.
    pub fn jump_to(&mut self, index: usize) -> Option<Commit> {
        self.jump_to_position(index as f64)
    }

    fn jump_to_position(&mut self, position: f64) -> Option<Commit> {
        if self.is_dragging() {
            return None;
        }
        let from = self.committed;
        let to = self.clamp_index(position);
        self.committed = to;
        self.live = to;
        Some(Commit { from, to })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDTH: f64 = 335.0;

    fn released(gesture: &mut RotationGesture, translation: f64) -> f64 {
        gesture.drag_changed(translation, WIDTH);
        gesture.drag_ended(translation, WIDTH).unwrap().to
    }

    #[test]
    fn starts_idle_at_zero() {
        let g = RotationGesture::new(5);
        assert_eq!(g.phase(), GesturePhase::Idle);
        assert_eq!(g.committed(), 0.0);
        assert_eq!(g.live(), 0.0);
    }

    #[test]
    fn half_width_drag_left_moves_one_step() {
        let mut g = RotationGesture::new(5);
        assert_eq!(released(&mut g, -(WIDTH * 0.5)), 1.0);
        assert_eq!(g.committed_index(), 1);
        assert_eq!(g.live(), 1.0);
    }

    #[test]
    fn far_right_drag_from_end_clamps_to_first() {
        let mut g = RotationGesture::new(5);
        g.jump_to(4);
        assert_eq!(released(&mut g, WIDTH * 0.5 * 10.0), 0.0);
    }

    #[test]
    fn whole_step_drags_round_trip() {
        for n in 1..7usize {
            for c0 in 0..n {
                for k in -8i64..=8 {
                    let mut g = RotationGesture::new(n);
                    g.jump_to(c0);
                    g.drag_changed(-(WIDTH * 0.5) * k as f64, WIDTH);
                    let commit = g.drag_ended(-(WIDTH * 0.5) * k as f64, WIDTH);
                    let expected = (c0 as i64 + k).clamp(0, n as i64 - 1) as f64;
                    if n == 1 {
                        assert!(commit.is_none());
                        assert_eq!(g.committed(), 0.0);
                    } else {
                        assert_eq!(commit.unwrap().to, expected, "n={n} c0={c0} k={k}");
                    }
                }
            }
        }
    }

    #[test]
    fn live_offset_is_unclamped_mid_drag() {
        let mut g = RotationGesture::new(3);
        g.drag_changed(WIDTH, WIDTH);
        assert_eq!(g.live(), -2.0);
        assert_eq!(g.phase(), GesturePhase::Dragging { translation: WIDTH });
        assert_eq!(g.committed(), 0.0);
    }

    #[test]
    fn bounds_hold_at_both_ends() {
        let mut g = RotationGesture::new(4);
        for t in [1.0, 50.0, 10_000.0] {
            assert_eq!(released(&mut g, t), 0.0);
        }
        g.jump_to(3);
        for t in [-1.0, -50.0, -10_000.0] {
            assert_eq!(released(&mut g, t), 3.0);
        }
    }

    #[test]
    fn fractional_drag_rounds_to_nearest() {
        let mut g = RotationGesture::new(5);
        // 0.4 of a step stays put, 0.6 advances.
        assert_eq!(released(&mut g, -(WIDTH * 0.5) * 0.4), 0.0);
        assert_eq!(released(&mut g, -(WIDTH * 0.5) * 0.6), 1.0);
    }

    #[test]
    fn cancel_discards_drag() {
        let mut g = RotationGesture::new(5);
        g.jump_to(2);
        g.drag_changed(-WIDTH, WIDTH);
        assert_eq!(g.live(), 4.0);
        assert_eq!(g.cancel(), Some(4.0));
        assert_eq!(g.phase(), GesturePhase::Idle);
        assert_eq!(g.live(), 2.0);
        assert_eq!(g.committed(), 2.0);
        assert!(g.drag_ended(-WIDTH, WIDTH).is_none());
    }

    #[test]
    fn single_item_ignores_drag() {
        let mut g = RotationGesture::new(1);
        g.drag_changed(-WIDTH, WIDTH);
        assert_eq!(g.phase(), GesturePhase::Idle);
        assert_eq!(g.live(), 0.0);
        assert_eq!(g.step(3).unwrap().to, 0.0);
    }

    #[test]
    fn steps_clamp_and_are_blocked_mid_drag() {
        let mut g = RotationGesture::new(3);
        assert_eq!(g.step(1).unwrap().to, 1.0);
        assert_eq!(g.step(5).unwrap().to, 2.0);
        assert!(!g.step(1).unwrap().changed());
        g.drag_changed(1.0, WIDTH);
        assert!(g.step(-1).is_none());
    }

    #[test]
    fn shrinking_item_count_pulls_center_in() {
        let mut g = RotationGesture::new(6);
        g.jump_to(5);
        g.set_item_count(3);
        assert_eq!(g.committed(), 2.0);
        assert_eq!(g.live(), 2.0);
    }
}
