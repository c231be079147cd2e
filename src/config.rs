//! Compile-time configuration for the page.
//!
//! The site ships as two variants of the same page. Everything that differs
//! between them lives in [`VariantConfig`]; the active one is picked with the
//! `frost` cargo feature. Timing and geometry constants shared by both
//! variants live next to it.

use crate::content::{HeroCopy, Project, AURORA_HERO, AURORA_PROJECTS, FROST_HERO, FROST_PROJECTS};

/// Where the skill tooltip is drawn relative to its icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TooltipAnchor {
    /// Directly underneath the icon.
    Below,
    /// Pushed away from the orbit hub along the icon's radial direction.
    Outward,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiteVariant {
    Aurora,
    Frost,
}

#[derive(Debug, Clone, Copy)]
pub struct VariantConfig {
    pub variant: SiteVariant,
    pub snowfall: bool,
    pub rotate_orbit: bool,
    pub tooltip_anchor: TooltipAnchor,
    pub hero: &'static HeroCopy,
    pub projects: &'static [Project],
}

pub const AURORA: VariantConfig = VariantConfig {
    variant: SiteVariant::Aurora,
    snowfall: false,
    rotate_orbit: true,
    tooltip_anchor: TooltipAnchor::Below,
    hero: &AURORA_HERO,
    projects: AURORA_PROJECTS,
};

pub const FROST: VariantConfig = VariantConfig {
    variant: SiteVariant::Frost,
    snowfall: true,
    rotate_orbit: false,
    tooltip_anchor: TooltipAnchor::Outward,
    hero: &FROST_HERO,
    projects: FROST_PROJECTS,
};

#[cfg(not(feature = "frost"))]
pub const ACTIVE: VariantConfig = AURORA;
#[cfg(feature = "frost")]
pub const ACTIVE: VariantConfig = FROST;

/// Timer periods in milliseconds.
pub struct Timings;

impl Timings {
    pub const ROTATING_TEXT_MS: u64 = 1800;
    pub const TYPEWRITER_SPEED_MS: u64 = 35;
    pub const TYPEWRITER_DELAY_MS: u64 = 800;
    pub const CURSOR_BLINK_MS: u64 = 1000;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

pub const PROGRESS_SPRING: SpringConfig = SpringConfig {
    stiffness: 120.0,
    damping: 20.0,
    mass: 0.2,
};

/// Linear mapping from a clamped scroll range onto a pixel offset range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallaxConfig {
    pub input: (f64, f64),
    pub output: (f64, f64),
}

pub const GLOW_PRIMARY: ParallaxConfig = ParallaxConfig {
    input: (0.0, 600.0),
    output: (0.0, -90.0),
};

pub const GLOW_SECONDARY: ParallaxConfig = ParallaxConfig {
    input: (0.0, 600.0),
    output: (0.0, 80.0),
};

pub struct NavScroll;

impl NavScroll {
    pub const DURATION_MS: f64 = 550.0;
    pub const OFFSET_PX: f64 = -90.0;
    pub const TO_TOP_MS: f64 = 500.0;
}

pub const ORBIT_RADIUS: f64 = 140.0;
pub const ORBIT_PERIOD_S: u32 = 40;
/// Decorative rings drawn behind the orbit.
pub const ORBIT_RINGS: [u32; 3] = [110, 160, 210];
pub const SNOWFLAKE_COUNT: usize = 48;
