//! The rotation stack model: items, gesture state and view geometry.
//!
//! State flows one way: gesture callbacks mutate [`RotationStack`], and the
//! render step asks it for [`PlacedItem`]s at whatever center position it is
//! currently displaying.

use super::gesture::{Commit, RotationGesture};
use super::transform::{self, ItemTransform};

/// One item ready for the render step.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedItem<T> {
    pub index: usize,
    pub content: T,
    pub transform: ItemTransform,
}

/// A fixed-size stack of items built by a content factory.
pub struct RotationStack<F> {
    factory: F,
    gesture: RotationGesture,
    /// Width of the centered view (container minus both side edges).
    view_width: f64,
}

impl<T, F> RotationStack<F>
where
    F: Fn(usize) -> T,
{
    /// `item_count` must be at least 1.
    pub fn new(item_count: usize, factory: F) -> Self {
        Self {
            factory,
            gesture: RotationGesture::new(item_count),
            view_width: 0.0,
        }
    }

    pub fn item_count(&self) -> usize {
        self.gesture.item_count()
    }

    pub fn set_item_count(&mut self, item_count: usize) {
        self.gesture.set_item_count(item_count);
    }

    pub fn gesture(&self) -> &RotationGesture {
        &self.gesture
    }

    pub fn view_width(&self) -> f64 {
        self.view_width
    }

    /// Recompute the view width from the container width.
    pub fn resize(&mut self, container_width: f64) {
        self.view_width = transform::view_width(container_width);
    }

    // ── gesture callbacks ───────────────────────────────────────

    pub fn drag_changed(&mut self, translation: f64) {
        self.gesture.drag_changed(translation, self.view_width);
    }

    pub fn drag_ended(&mut self, translation: f64) -> Option<Commit> {
        self.gesture.drag_ended(translation, self.view_width)
    }

    pub fn cancel_drag(&mut self) -> Option<f64> {
        self.gesture.cancel()
    }

    pub fn step(&mut self, delta: i64) -> Option<Commit> {
        self.gesture.step(delta)
    }

    pub fn jump_to(&mut self, index: usize) -> Option<Commit> {
        self.gesture.jump_to(index)
    }

    // ── render boundary ─────────────────────────────────────────

    /// Content produced by the factory for `index`.
    pub fn content(&self, index: usize) -> T {
        (self.factory)(index)
    }

    /// All items placed around `center`, back-to-front.
    pub fn placed(&self, center: f64) -> Vec<PlacedItem<T>> {
        transform::draw_order(self.item_count(), center)
            .into_iter()
            .map(|index| PlacedItem {
                index,
                content: self.content(index),
                transform: ItemTransform::compute(index, center, self.view_width),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels() -> RotationStack<impl Fn(usize) -> String> {
        let mut stack = RotationStack::new(5, |i| format!("item {i}"));
        stack.resize(375.0);
        stack
    }

    #[test]
    fn places_every_item_once_with_center_last() {
        let stack = labels();
        let placed = stack.placed(stack.gesture().live());
        assert_eq!(placed.len(), 5);
        let mut seen: Vec<usize> = placed.iter().map(|p| p.index).collect();
        seen.sort_unstable();
        assert_eq!(seen, vec![0, 1, 2, 3, 4]);

        let top = placed.last().unwrap();
        assert_eq!(top.index, 0);
        assert_eq!(top.content, "item 0");
        assert_eq!(top.transform.scale, 1.0);
    }

    #[test]
    fn drag_moves_live_then_commits() {
        let mut stack = labels();
        assert_eq!(stack.view_width(), 335.0);

        stack.drag_changed(-335.0 * 0.5 * 0.5);
        assert_eq!(stack.gesture().live(), 0.5);
        assert_eq!(stack.gesture().committed(), 0.0);

        let commit = stack.drag_ended(-335.0 * 0.5 * 2.0).unwrap();
        assert_eq!(commit.to, 2.0);
        assert_eq!(stack.placed(stack.gesture().live()).last().unwrap().index, 2);
    }

    #[test]
    fn factory_is_called_per_index() {
        let stack = labels();
        assert_eq!(stack.content(3), "item 3");
    }
}
