//! Static starfield point cloud.
//!
//! Generated once at init from a seeded RNG, never regenerated or animated.

use bytemuck::{Pod, Zeroable};

/// Seedable pseudo-random number generator (xorshift64).
/// Deterministic, fast, no-std compatible.
#[derive(Debug, Clone)]
pub struct Rng {
    state: u64,
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        Rng {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Generate a random float in [0, 1).
    pub fn next_f32(&mut self) -> f32 {
        (self.next_u64() >> 40) as f32 / (1u64 << 24) as f32
    }
}

/// One starfield point. 4 floats = 16 bytes (renderer-friendly stride).
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct StarPoint {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub _pad: f32,
}

impl StarPoint {
    pub const FLOATS: usize = 4;
}

/// A fixed point cloud rendered as unattenuated points by the host.
pub struct Starfield {
    points: Vec<StarPoint>,
}

impl Starfield {
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Fill the field with `count` points, each coordinate sampled
    /// independently and uniformly from [-half_extent, half_extent].
    pub fn scatter(&mut self, count: usize, half_extent: f32, seed: u64) {
        let mut rng = Rng::new(seed);
        self.points.clear();
        self.points.reserve(count);
        for _ in 0..count {
            let mut coord = || (rng.next_f32() - 0.5) * 2.0 * half_extent;
            self.points.push(StarPoint {
                x: coord(),
                y: coord(),
                z: coord(),
                _pad: 0.0,
            });
        }
    }

    pub fn count(&self) -> usize {
        self.points.len()
    }

    pub fn points(&self) -> &[StarPoint] {
        &self.points
    }

    /// Pointer to the point data for SAB serialization.
    pub fn buffer_ptr(&self) -> *const f32 {
        self.points.as_ptr() as *const f32
    }
}

impl Default for Starfield {
    fn default() -> Self {
        Self::new()
    }
}
