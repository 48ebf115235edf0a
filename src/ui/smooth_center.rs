//! Displayed-center easing with exponential ease-out.
//!
//! While a drag is active the displayed center tracks the live offset
//! exactly.  After a commit, the displayed center starts from where the
//! pointer left it and each tick closes a fixed fraction of the remaining
//! gap toward the committed index, so motion visibly decelerates into place.

use crate::config::DEFAULT_EASE_SPEED;

/// Below this gap the animation snaps onto its target.
const SETTLE_EPSILON: f64 = 0.002;

/// Center-position animator.
#[derive(Debug, Clone)]
pub struct SmoothCenter {
    /// Center position currently on screen.
    displayed: f64,
    /// Where the displayed center is heading.
    target: f64,
    /// Fraction of the remaining gap closed per tick.
    /// Good range: 0.2–0.45 at 30 fps.
    speed: f64,
}

impl SmoothCenter {
    pub fn new(speed: f64) -> Self {
        Self {
            displayed: 0.0,
            target: 0.0,
            speed: clamp_speed(speed),
        }
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn set_speed(&mut self, speed: f64) {
        self.speed = clamp_speed(speed);
    }

    /// Jump straight to `position` (drag in progress).
    pub fn follow(&mut self, position: f64) {
        self.displayed = position;
        self.target = position;
    }

    /// Ease from `from` to `to`.
    pub fn animate(&mut self, from: f64, to: f64) {
        self.displayed = from;
        self.target = to;
    }

    /// Advance one frame.
    pub fn tick(&mut self) {
        let gap = self.target - self.displayed;
        if gap.abs() < SETTLE_EPSILON {
            self.displayed = self.target;
        } else {
            self.displayed += gap * self.speed;
        }
    }

    pub fn displayed(&self) -> f64 {
        self.displayed
    }

    pub fn is_animating(&self) -> bool {
        self.displayed != self.target
    }
}

fn clamp_speed(speed: f64) -> f64 {
    if speed.is_finite() {
        speed.clamp(0.05, 0.95)
    } else {
        DEFAULT_EASE_SPEED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eases_monotonically_then_settles() {
        let mut ease = SmoothCenter::new(0.3);
        ease.animate(0.4, 2.0);
        assert!(ease.is_animating());

        let mut prev = ease.displayed();
        for _ in 0..200 {
            ease.tick();
            assert!(ease.displayed() >= prev);
            assert!(ease.displayed() <= 2.0);
            prev = ease.displayed();
        }
        assert_eq!(ease.displayed(), 2.0);
        assert!(!ease.is_animating());
    }

    #[test]
    fn follow_is_immediate() {
        let mut ease = SmoothCenter::new(0.3);
        ease.follow(-1.25);
        assert_eq!(ease.displayed(), -1.25);
        assert!(!ease.is_animating());
    }

    #[test]
    fn speed_is_bounded() {
        assert_eq!(SmoothCenter::new(4.0).speed(), 0.95);
        assert_eq!(SmoothCenter::new(0.0).speed(), 0.05);
    }

    #[test]
    fn non_finite_speed_still_settles() {
        let mut ease = SmoothCenter::new(f64::NAN);
        assert_eq!(ease.speed(), DEFAULT_EASE_SPEED);
        ease.set_speed(f64::INFINITY);
        assert_eq!(ease.speed(), DEFAULT_EASE_SPEED);

        ease.animate(0.0, 1.0);
        for _ in 0..1000 {
            ease.tick();
        }
        assert_eq!(ease.displayed(), 1.0);
        assert!(!ease.is_animating());
    }
}
