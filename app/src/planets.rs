//! Planetary data — real-ish proportions, not to actual scale.
//!
//! Radii are relative to Earth, distances keep the inner planets visible,
//! year lengths come from real year-length ratios in Earth days.

use orrery_engine::MeshColor;

/// Earth days in an Earth year.
pub const EARTH_YEAR: f64 = 365.0;

/// Planet index constants.
pub const MERCURY: usize = 0;
pub const VENUS: usize = 1;
pub const EARTH: usize = 2;
pub const MARS: usize = 3;
pub const JUPITER: usize = 4;
pub const SATURN: usize = 5;
pub const URANUS: usize = 6;
pub const NEPTUNE: usize = 7;
pub const PLANET_COUNT: usize = 8;

// ── Sun ──────────────────────────────────────────────────────────────

pub const SUN_RADIUS: f32 = 3.0;
pub const SUN_COLOR: u32 = 0xffff00;
pub const SUN_EMISSIVE: f32 = 1.0;
/// Sun self-rotation per frame, scaled by the speed multiplier.
pub const SUN_SPIN: f32 = 0.001;

// ── Lights ───────────────────────────────────────────────────────────

pub const AMBIENT_COLOR: u32 = 0x333333;
pub const SUN_LIGHT_INTENSITY: f32 = 1.5;

// ── Planet spin ─────────────────────────────────────────────────────

/// Scales each planet's rotation rate into a per-frame radian increment.
pub const SPIN_STEP: f32 = 0.01;
/// Ring spin per frame. Not scaled by the speed multiplier; rings keep
/// spinning at a fixed rate even when time runs faster.
pub const RING_SPIN: f32 = 0.01;

// ── Rings ────────────────────────────────────────────────────────────

pub const RING_INNER_FACTOR: f32 = 1.4;
pub const RING_OUTER_FACTOR: f32 = 2.2;
pub const RING_COLOR: u32 = 0xf8e8c0;
pub const RING_OPACITY: f32 = 0.7;

// ── Orbit guides ─────────────────────────────────────────────────────

/// Segments per orbit guide circle (361 sample points, closed).
pub const ORBIT_SEGMENTS: usize = 360;
pub const ORBIT_COLOR: u32 = 0x444444;
pub const ORBIT_OPACITY: f32 = 0.3;

// ── Starfield ────────────────────────────────────────────────────────

pub const STAR_COUNT: usize = 10_000;
/// Stars scatter over [-1000, 1000] on all three axes.
pub const STAR_HALF_EXTENT: f32 = 1000.0;
pub const STAR_SEED: u64 = 42;

// ── Planets ──────────────────────────────────────────────────────────

/// Static description of one planet. Authored constants, never mutated.
pub struct PlanetSpec {
    pub name: &'static str,
    /// Body radius relative to Earth.
    pub radius: f32,
    /// Orbit radius (distance from the sun).
    pub distance: f32,
    /// Surface color, 0xRRGGBB.
    pub color: u32,
    /// Orbital period in Earth days.
    pub year_days: f64,
    /// Self-rotation rate, radians per frame before SPIN_STEP scaling.
    pub rotation_rate: f32,
    pub has_rings: bool,
}

/// The eight planets, ordered by distance from the sun.
pub const PLANETS: [PlanetSpec; PLANET_COUNT] = [
    PlanetSpec {
        name: "Mercury",
        radius: 0.38,
        distance: 5.8,
        color: 0xaaaaaa,
        year_days: 0.24 * EARTH_YEAR,
        rotation_rate: 0.017,
        has_rings: false,
    },
    PlanetSpec {
        name: "Venus",
        radius: 0.95,
        distance: 10.8,
        color: 0xe39e1c,
        year_days: 0.62 * EARTH_YEAR,
        rotation_rate: 0.004,
        has_rings: false,
    },
    PlanetSpec {
        name: "Earth",
        radius: 1.0,
        distance: 15.0,
        color: 0x2277ff,
        year_days: EARTH_YEAR,
        rotation_rate: 0.01,
        has_rings: false,
    },
    PlanetSpec {
        name: "Mars",
        radius: 0.53,
        distance: 22.8,
        color: 0xc1440e,
        year_days: 1.88 * EARTH_YEAR,
        rotation_rate: 0.01,
        has_rings: false,
    },
    PlanetSpec {
        name: "Jupiter",
        radius: 11.2,
        distance: 77.8,
        color: 0xd8ca9d,
        year_days: 11.86 * EARTH_YEAR,
        rotation_rate: 0.02,
        has_rings: false,
    },
    PlanetSpec {
        name: "Saturn",
        radius: 9.45,
        distance: 143.0,
        color: 0xead6b8,
        year_days: 29.46 * EARTH_YEAR,
        rotation_rate: 0.022,
        has_rings: true,
    },
    PlanetSpec {
        name: "Uranus",
        radius: 4.0,
        distance: 287.0,
        color: 0xc5e5ea,
        year_days: 84.01 * EARTH_YEAR,
        rotation_rate: 0.014,
        has_rings: false,
    },
    PlanetSpec {
        name: "Neptune",
        radius: 3.88,
        distance: 450.0,
        color: 0x3d5ef5,
        year_days: 164.79 * EARTH_YEAR,
        rotation_rate: 0.015,
        has_rings: false,
    },
];

impl PlanetSpec {
    pub fn mesh_color(&self) -> MeshColor {
        MeshColor::hex(self.color)
    }
}
