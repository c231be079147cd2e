//! Circular layout for the skills section.

use std::f64::consts::TAU;

use crate::config::TooltipAnchor;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitPoint {
    pub angle: f64,
    pub x: f64,
    pub y: f64,
}

/// Positions of `count` entries spread evenly on a circle of `radius`,
/// relative to its centre. Entry 0 sits at angle 0 (3 o'clock).
pub fn orbit_positions(count: usize, radius: f64) -> Vec<OrbitPoint> {
    (0..count)
        .map(|i| {
            let angle = i as f64 / count as f64 * TAU;
            OrbitPoint {
                angle,
                x: radius * angle.cos(),
                y: radius * angle.sin(),
            }
        })
        .collect()
}

/// Gap between an icon and its tooltip.
const TOOLTIP_GAP_PX: f64 = 12.0;

impl OrbitPoint {
    /// CSS offset for the tooltip of the entry at this point.
    pub fn tooltip_offset(&self, anchor: TooltipAnchor, icon_size: f64) -> (f64, f64) {
        match anchor {
            TooltipAnchor::Below => (0.0, icon_size / 2.0 + TOOLTIP_GAP_PX),
            TooltipAnchor::Outward => {
                let push = icon_size / 2.0 + TOOLTIP_GAP_PX;
                (self.angle.cos() * push, self.angle.sin() * push)
            }
        }
    }

    /// Translation of the tooltip box in percent of its own size, so that it
    /// grows away from the anchor point.
    pub fn tooltip_translate(&self, anchor: TooltipAnchor) -> (f64, f64) {
        match anchor {
            TooltipAnchor::Below => (-50.0, 0.0),
            TooltipAnchor::Outward => (
                -50.0 + 50.0 * self.angle.cos(),
                -50.0 + 50.0 * self.angle.sin(),
            ),
        }
    }
}

/// Tracks which orbit entry the pointer is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OrbitHover {
    hovered: Option<usize>,
}

impl OrbitHover {
    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    pub fn is_hovered(&self, index: usize) -> bool {
        self.hovered == Some(index)
    }

    /// Ring rotation is paused while any entry is hovered.
    pub fn is_paused(&self) -> bool {
        self.hovered.is_some()
    }

    pub fn enter(&mut self, index: usize) {
        self.hovered = Some(index);
    }

    /// Leaving an entry only clears the pointer if it is still the hovered one.
    pub fn leave(&mut self, index: usize) {
        if self.hovered == Some(index) {
            self.hovered = None;
        }
    }

    /// Animation class for a rotating element: `class`, with `paused` added
    /// while hovered, or nothing when the ring doesn't rotate.
    pub fn spin_class(&self, rotate: bool, class: &str) -> String {
        match (rotate, self.is_paused()) {
            (false, _) => String::new(),
            (true, true) => format!("{class} paused"),
            (true, false) => class.to_string(),
        }
    }

    /// Width of the proficiency bar for `index`, animated from 0.
    pub fn bar_width(&self, index: usize, percent: u8) -> u8 {
        if self.is_hovered(index) {
            percent.min(100)
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_points_on_circle_evenly_spaced() {
        for n in 1..=16 {
            let radius = 140.0;
            let points = orbit_positions(n, radius);
            assert_eq!(points.len(), n);
            for (i, p) in points.iter().enumerate() {
                assert!((p.x.hypot(p.y) - radius).abs() < EPS);
                assert!((p.angle - i as f64 * TAU / n as f64).abs() < EPS);
            }
            for w in points.windows(2) {
                assert!((w[1].angle - w[0].angle - TAU / n as f64).abs() < EPS);
            }
        }
    }

    #[test]
    fn test_first_point_at_three_oclock() {
        let p = orbit_positions(12, 140.0)[0];
        assert_eq!((p.x, p.y), (140.0, 0.0));
    }

    #[test]
    fn test_no_entries() {
        assert!(orbit_positions(0, 140.0).is_empty());
    }

    #[test]
    fn test_hover_single_entry() {
        let mut hover = OrbitHover::default();
        assert!(!hover.is_paused());
        hover.enter(2);
        hover.enter(5);
        assert_eq!(hover.hovered(), Some(5));
        assert!(!hover.is_hovered(2));
        assert!(hover.is_paused());
        // a late leave from the previous entry doesn't clear the new one
        hover.leave(2);
        assert_eq!(hover.hovered(), Some(5));
        hover.leave(5);
        assert_eq!(hover.hovered(), None);
        assert!(!hover.is_paused());
    }

    #[test]
    fn test_spin_class() {
        let mut hover = OrbitHover::default();
        assert_eq!(hover.spin_class(true, "orbit-ring"), "orbit-ring");
        assert_eq!(hover.spin_class(false, "orbit-ring"), "");
        hover.enter(3);
        assert_eq!(hover.spin_class(true, "counter-rotate"), "counter-rotate paused");
        assert_eq!(hover.spin_class(false, "counter-rotate"), "");
    }

    #[test]
    fn test_bar_width() {
        let mut hover = OrbitHover::default();
        assert_eq!(hover.bar_width(0, 92), 0);
        hover.enter(0);
        assert_eq!(hover.bar_width(0, 92), 92);
        assert_eq!(hover.bar_width(1, 86), 0);
    }

    #[test]
    fn test_tooltip_offsets() {
        let points = orbit_positions(4, 140.0);
        assert_eq!(points[1].tooltip_offset(TooltipAnchor::Below, 58.0), (0.0, 41.0));
        let (x, y) = points[0].tooltip_offset(TooltipAnchor::Outward, 58.0);
        assert!((x - 41.0).abs() < EPS && y.abs() < EPS);
        let (x, y) = points[2].tooltip_offset(TooltipAnchor::Outward, 58.0);
        assert!((x + 41.0).abs() < EPS && y.abs() < 1e-6);
    }

    #[test]
    fn test_tooltip_translate() {
        let points = orbit_positions(4, 140.0);
        assert_eq!(points[3].tooltip_translate(TooltipAnchor::Below), (-50.0, 0.0));
        // entry on the right grows rightwards, entry on the left leftwards
        let (x, y) = points[0].tooltip_translate(TooltipAnchor::Outward);
        assert!(x.abs() < EPS && (y + 50.0).abs() < EPS);
        let (x, _) = points[2].tooltip_translate(TooltipAnchor::Outward);
        assert!((x + 100.0).abs() < EPS);
    }
}
