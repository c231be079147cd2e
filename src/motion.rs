//! Easing curves and the entrance animation used by revealed sections.

pub fn ease_in_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Vertical distance a hidden section sits below its resting place.
pub const REVEAL_OFFSET_PX: f64 = 24.0;
pub const REVEAL_DURATION_S: f64 = 0.55;
/// Extra delay per item when several reveal together.
pub const REVEAL_STAGGER_S: f64 = 0.08;
/// Fraction of the element that must be visible to count as in view.
pub const REVEAL_THRESHOLD: f64 = 0.35;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealFrame {
    pub opacity: f64,
    pub translate_y: f64,
    pub delay_s: f64,
    pub duration_s: f64,
}

impl RevealFrame {
    pub fn new(visible: bool, index: usize) -> Self {
        if visible {
            Self {
                opacity: 1.0,
                translate_y: 0.0,
                delay_s: REVEAL_STAGGER_S * index as f64,
                duration_s: REVEAL_DURATION_S,
            }
        } else {
            Self {
                opacity: 0.0,
                translate_y: REVEAL_OFFSET_PX,
                delay_s: 0.0,
                duration_s: REVEAL_DURATION_S,
            }
        }
    }

    pub fn style(&self) -> String {
        format!(
            "opacity: {}; transform: translateY({}px); transition: opacity {}s ease-out {}s, transform {}s ease-out {}s;",
            self.opacity,
            self.translate_y,
            self.duration_s,
            self.delay_s,
            self.duration_s,
            self.delay_s
        )
    }
}
