//! Index-distance → visual transform mapping.
//!
//! Every item in the stack is placed purely from its signed distance to the
//! current (possibly fractional) center position.  Nothing here holds state,
//! so the whole fan can be recomputed from scratch on every frame.

use std::f64::consts::FRAC_PI_2;

// ───────────────────────────────────────── constants ─────────

/// Padding kept free on each side of the centered view.
pub const SIDE_EDGE: f64 = 20.0;

/// Scale multiplier applied once per unit of distance from center.
pub const SCALE_RATIO: f64 = 0.77;

/// Angle swept per index step: 9°.
pub const ARC_UNIT: f64 = FRAC_PI_2 / 10.0;

/// Angle saturation.  Items ten or more steps away share the same offset.
pub const MAX_ARC: f64 = FRAC_PI_2;

/// How far items are raised relative to their horizontal displacement.
pub const LIFT_RATIO: f64 = 0.3;

/// Stacking depth lost per unit of distance.
pub const DEPTH_STEP: f64 = 0.1;

// ───────────────────────────────────────── pure mappings ─────

/// Width of a single item view inside a container of `container_width`.
pub fn view_width(container_width: f64) -> f64 {
    (container_width - SIDE_EDGE * 2.0).max(0.0)
}

/// Signed distance of item `index` from `center`.
pub fn distance(index: usize, center: f64) -> f64 {
    index as f64 - center
}

/// `0.77^|d|`: exponential falloff, always in (0, 1].
pub fn scale(distance: f64) -> f64 {
    SCALE_RATIO.powf(distance.abs())
}

/// Arc angle for `distance`, saturating at ±90°.
pub fn arc_angle(distance: f64) -> f64 {
    (ARC_UNIT * distance).clamp(-MAX_ARC, MAX_ARC)
}

/// Horizontal displacement; asymptotic to `±view_width`.
pub fn offset_x(distance: f64, view_width: f64) -> f64 {
    arc_angle(distance).sin() * view_width
}

/// Vertical displacement.  Always ≤ 0: far items are lifted upward.
pub fn offset_y(offset_x: f64) -> f64 {
    // Subtracting from +0.0 keeps the centered item at +0.0, not -0.0.
    0.0 - offset_x.abs() * LIFT_RATIO
}

/// Stacking depth.  Higher draws on top; the centered item gets 1.0.
pub fn stack_order(distance: f64) -> f64 {
    1.0 - distance.abs() * DEPTH_STEP
}

// ───────────────────────────────────────── transform ─────────

/// The transform tuple handed to the render step for one item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemTransform {
    pub distance: f64,
    pub scale: f64,
    pub offset_x: f64,
    pub offset_y: f64,
    pub stack_order: f64,
}

impl ItemTransform {
    /// Compute the full transform for item `index` around `center`.
    pub fn compute(index: usize, center: f64, view_width: f64) -> Self {
        let d = distance(index, center);
        let x = offset_x(d, view_width);
        Self {
            distance: d,
            scale: scale(d),
            offset_x: x,
            offset_y: offset_y(x),
            stack_order: stack_order(d),
        }
    }
}

/// Indices `0..item_count` sorted back-to-front (ascending stack order).
///
/// Painting in this order leaves the centered item on top.  Ties keep index
/// order so the result is deterministic.
pub fn draw_order(item_count: usize, center: f64) -> Vec<usize> {
    let mut order: Vec<usize> = (0..item_count).collect();
    order.sort_by(|&a, &b| {
        stack_order(distance(a, center)).total_cmp(&stack_order(distance(b, center)))
    });
    order
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;
    const WIDTH: f64 = 335.0;

    #[test]
    fn centered_item_is_identity() {
        for i in 0..6 {
            let t = ItemTransform::compute(i, i as f64, WIDTH);
            assert_eq!(t.distance, 0.0);
            assert!((t.scale - 1.0).abs() < EPS);
            assert!(t.offset_x.abs() < EPS);
            assert!(t.offset_y.abs() < EPS);
            assert!((t.stack_order - 1.0).abs() < EPS);
        }
    }

    #[test]
    fn offset_saturates_beyond_ten_steps() {
        for d in [10.0, 10.5, 14.0, 40.0] {
            assert!((offset_x(d, WIDTH) - WIDTH).abs() < EPS, "d = {d}");
            assert!((offset_x(-d, WIDTH) + WIDTH).abs() < EPS, "d = -{d}");
        }
    }

    #[test]
    fn one_step_is_nine_degrees() {
        let expected = (9.0_f64).to_radians().sin() * WIDTH;
        assert!((offset_x(1.0, WIDTH) - expected).abs() < EPS);
        assert!((offset_x(-1.0, WIDTH) + expected).abs() < EPS);
    }

    #[test]
    fn scale_decreases_with_distance() {
        let mut prev = scale(0.0);
        assert!((prev - 1.0).abs() < EPS);
        for step in 1..40 {
            let d = step as f64 * 0.25;
            let s = scale(d);
            assert!(s < prev);
            assert!(s > 0.0 && s <= 1.0);
            assert_eq!(s, scale(-d));
            prev = s;
        }
        assert!((scale(1.0) - 0.77).abs() < EPS);
    }

    #[test]
    fn stack_order_peaks_at_center() {
        let order = draw_order(5, 2.0);
        assert_eq!(*order.last().unwrap(), 2);
        let mut prev = stack_order(0.0);
        for step in 1..20 {
            let so = stack_order(step as f64 * 0.5);
            assert!(so < prev);
            prev = so;
        }
    }

    #[test]
    fn items_are_lifted_symmetrically() {
        let left = ItemTransform::compute(0, 2.0, WIDTH);
        let right = ItemTransform::compute(4, 2.0, WIDTH);
        assert!(left.offset_x < 0.0 && right.offset_x > 0.0);
        assert!(left.offset_y < 0.0);
        assert!((left.offset_y - right.offset_y).abs() < EPS);
        assert!((right.offset_y + right.offset_x * LIFT_RATIO).abs() < EPS);
    }

    #[test]
    fn view_width_subtracts_both_edges() {
        assert_eq!(view_width(375.0), 335.0);
        assert_eq!(view_width(30.0), 0.0);
    }

    #[test]
    fn draw_order_during_drag() {
        // Between items 1 and 2, slightly closer to 2.
        assert_eq!(draw_order(4, 1.6), vec![0, 3, 1, 2]);
    }
}
