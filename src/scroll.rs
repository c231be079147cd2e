//! Values derived from the page's scroll position.
//!
//! Everything here is a pure function of the scroll offset (plus elapsed time
//! for the spring and the nav animation). Nothing writes back to the scroll
//! position except [`ScrollAnimation`], which only produces targets for the
//! header's nav links.

use crate::config::{ParallaxConfig, SpringConfig};
use crate::motion::ease_in_out_cubic;

/// Fraction of the document scrolled, in `[0, 1]`.
///
/// A page that fits in the viewport reports `0`.
pub fn scroll_progress(scroll_y: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if !scrollable.is_finite() || scrollable <= 0.0 || !scroll_y.is_finite() {
        return 0.0;
    }
    (scroll_y / scrollable).clamp(0.0, 1.0)
}

impl ParallaxConfig {
    /// Maps `scroll_y` (clamped to the input range) onto the output range.
    pub fn offset(&self, scroll_y: f64) -> f64 {
        let (in_lo, in_hi) = self.input;
        let (out_lo, out_hi) = self.output;
        if in_hi <= in_lo {
            return out_lo;
        }
        let t = ((scroll_y - in_lo) / (in_hi - in_lo)).clamp(0.0, 1.0);
        out_lo + (out_hi - out_lo) * t
    }
}

const SPRING_STEP_S: f64 = 0.001;
const REST_DELTA: f64 = 1e-4;
const REST_SPEED: f64 = 1e-3;
/// Frames longer than this (tab in background) are not replayed in full.
const MAX_FRAME_S: f64 = 0.1;

/// Damped spring chasing a moving target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    config: SpringConfig,
    value: f64,
    velocity: f64,
    target: f64,
}

impl Spring {
    pub fn new(config: SpringConfig, value: f64) -> Self {
        Self {
            config,
            value,
            velocity: 0.0,
            target: value,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn set_target(&mut self, target: f64) {
        if target.is_finite() {
            self.target = target;
        }
    }

    pub fn is_at_rest(&self) -> bool {
        (self.value - self.target).abs() < REST_DELTA && self.velocity.abs() < REST_SPEED
    }

    /// Advances the simulation by `dt_ms` milliseconds and returns the new value.
    pub fn step(&mut self, dt_ms: f64) -> f64 {
        if self.is_at_rest() {
            self.value = self.target;
            self.velocity = 0.0;
            return self.value;
        }
        let mut remaining = (dt_ms / 1000.0).clamp(0.0, MAX_FRAME_S);
        let SpringConfig {
            stiffness,
            damping,
            mass,
        } = self.config;
        while remaining > 0.0 {
            let dt = remaining.min(SPRING_STEP_S);
            let force = -stiffness * (self.value - self.target) - damping * self.velocity;
            self.velocity += force / mass * dt;
            self.value += self.velocity * dt;
            remaining -= dt;
        }
        if self.is_at_rest() {
            self.value = self.target;
            self.velocity = 0.0;
        }
        self.value
    }
}

/// Eased scroll from one offset to another over a fixed duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollAnimation {
    pub from: f64,
    pub to: f64,
    pub duration_ms: f64,
}

impl ScrollAnimation {
    /// Animation towards an element whose top edge is `element_top` px below
    /// the current viewport top, landing `offset` px from it.
    pub fn to_element(scroll_y: f64, element_top: f64, offset: f64, duration_ms: f64) -> Self {
        Self {
            from: scroll_y,
            to: (scroll_y + element_top + offset).max(0.0),
            duration_ms,
        }
    }

    pub fn to_top(scroll_y: f64, duration_ms: f64) -> Self {
        Self {
            from: scroll_y,
            to: 0.0,
            duration_ms,
        }
    }

    pub fn position_at(&self, elapsed_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 || elapsed_ms >= self.duration_ms {
            return self.to;
        }
        let t = (elapsed_ms / self.duration_ms).clamp(0.0, 1.0);
        self.from + (self.to - self.from) * ease_in_out_cubic(t)
    }

    pub fn is_finished(&self, elapsed_ms: f64) -> bool {
        elapsed_ms >= self.duration_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GLOW_PRIMARY, GLOW_SECONDARY, PROGRESS_SPRING};

    #[test]
    fn test_progress_ratio() {
        assert_eq!(scroll_progress(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(1000.0, 3000.0, 1000.0), 0.5);
        assert_eq!(scroll_progress(2000.0, 3000.0, 1000.0), 1.0);
        // overscroll on touch devices
        assert_eq!(scroll_progress(-40.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(2100.0, 3000.0, 1000.0), 1.0);
        // page shorter than the viewport
        assert_eq!(scroll_progress(0.0, 800.0, 1000.0), 0.0);
    }

    #[test]
    fn test_parallax_offsets() {
        assert_eq!(GLOW_PRIMARY.offset(0.0), 0.0);
        assert_eq!(GLOW_PRIMARY.offset(300.0), -45.0);
        assert_eq!(GLOW_PRIMARY.offset(600.0), -90.0);
        assert_eq!(GLOW_PRIMARY.offset(5000.0), -90.0);
        assert_eq!(GLOW_SECONDARY.offset(-20.0), 0.0);
        assert_eq!(GLOW_SECONDARY.offset(150.0), 20.0);
        assert_eq!(GLOW_SECONDARY.offset(9000.0), 80.0);
    }

    #[test]
    fn test_spring_converges_without_overshoot() {
        let mut spring = Spring::new(PROGRESS_SPRING, 0.0);
        spring.set_target(1.0);
        let mut last = 0.0;
        for _ in 0..120 {
            let v = spring.step(16.0);
            assert!(v.is_finite());
            assert!(v <= 1.0 + 1e-9, "spring overshot: {v}");
            assert!(v >= last - 1e-9);
            last = v;
        }
        assert!(spring.is_at_rest());
        assert_eq!(spring.value(), 1.0);
    }

    #[test]
    fn test_spring_ignores_invalid_targets_and_huge_frames() {
        let mut spring = Spring::new(PROGRESS_SPRING, 0.5);
        spring.set_target(f64::NAN);
        assert_eq!(spring.target(), 0.5);
        spring.set_target(0.0);
        let v = spring.step(10_000.0);
        assert!(v.is_finite());
        assert!((0.0..=0.5).contains(&v));
    }

    #[test]
    fn test_spring_at_rest_is_stable() {
        let mut spring = Spring::new(PROGRESS_SPRING, 0.25);
        assert_eq!(spring.step(16.0), 0.25);
        assert!(spring.is_at_rest());
    }

    #[test]
    fn test_scroll_animation_endpoints() {
        let anim = ScrollAnimation::to_element(100.0, 900.0, -90.0, 550.0);
        assert_eq!(anim.to, 910.0);
        assert_eq!(anim.position_at(0.0), 100.0);
        assert_eq!(anim.position_at(550.0), 910.0);
        assert_eq!(anim.position_at(10_000.0), 910.0);
        let mid = anim.position_at(275.0);
        assert!((mid - 505.0).abs() < 1e-9);
        assert!(anim.is_finished(550.0));
        assert!(!anim.is_finished(549.0));
    }

    #[test]
    fn test_scroll_animation_never_targets_above_top() {
        let anim = ScrollAnimation::to_element(0.0, 10.0, -90.0, 550.0);
        assert_eq!(anim.to, 0.0);
        let up = ScrollAnimation::to_top(1200.0, 500.0);
        assert_eq!(up.position_at(500.0), 0.0);
        assert!(up.position_at(250.0) < 1200.0);
    }
}
