//! Flake layout for the winter variant's snowfall overlay.
//!
//! Flakes are placed with a golden-ratio sequence instead of randomness so the
//! server-rendered markup and the hydrated markup agree.

const GOLDEN: f64 = 0.618_033_988_749_895;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snowflake {
    /// Horizontal start position in percent of the viewport width.
    pub left_pct: f64,
    pub size_px: f64,
    pub duration_s: f64,
    /// Negative so the field is already populated on first paint.
    pub delay_s: f64,
    pub drift_px: f64,
    pub opacity: f64,
}

impl Snowflake {
    pub fn style(&self) -> String {
        format!(
            "left: {:.2}%; width: {:.1}px; height: {:.1}px; opacity: {:.2}; animation-duration: {:.2}s; animation-delay: {:.2}s; --drift: {:.1}px;",
            self.left_pct,
            self.size_px,
            self.size_px,
            self.opacity,
            self.duration_s,
            self.delay_s,
            self.drift_px
        )
    }
}

fn fract(x: f64) -> f64 {
    x - x.floor()
}

pub fn snowflakes(count: usize) -> Vec<Snowflake> {
    (0..count)
        .map(|i| {
            let n = i as f64 + 1.0;
            let a = fract(n * GOLDEN);
            let b = fract(n * GOLDEN * GOLDEN);
            let c = fract(n * 0.754_877_666_246_692_7);
            let duration_s = 8.0 + 10.0 * b;
            Snowflake {
                left_pct: a * 100.0,
                size_px: 2.0 + 4.0 * c,
                duration_s,
                delay_s: -duration_s * c,
                drift_px: (b - 0.5) * 80.0,
                opacity: 0.35 + 0.5 * (1.0 - c),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic() {
        assert_eq!(snowflakes(32), snowflakes(32));
        assert_eq!(snowflakes(8)[..], snowflakes(32)[..8]);
    }

    #[test]
    fn test_flakes_within_bounds() {
        for flake in snowflakes(200) {
            assert!((0.0..100.0).contains(&flake.left_pct));
            assert!((2.0..=6.0).contains(&flake.size_px));
            assert!(flake.duration_s >= 8.0 && flake.duration_s <= 18.0);
            assert!(flake.delay_s <= 0.0 && flake.delay_s > -flake.duration_s - 1e-9);
            assert!(flake.opacity > 0.0 && flake.opacity <= 1.0);
        }
    }

    #[test]
    fn test_spread_across_width() {
        let flakes = snowflakes(48);
        let left = flakes.iter().filter(|f| f.left_pct < 50.0).count();
        assert!(left > 16 && left < 32, "flakes bunched on one side: {left}");
    }
}
