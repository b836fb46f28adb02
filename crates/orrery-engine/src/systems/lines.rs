//! Static guide-line buffer.
//!
//! Polylines are pushed once at init (orbit guides never move) and the
//! flat vertex buffer is handed to the host renderer as a GPU line list.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// Per-vertex data for line rendering.
/// 8 floats = 32 bytes per vertex.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct LineVertex {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
    pub _pad: f32,
}

impl LineVertex {
    /// Number of floats per vertex.
    pub const FLOATS: usize = 8;
    /// Stride in bytes.
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// RGBA color for line drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl LineColor {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create a color from a 0xRRGGBB hex value with the given alpha.
    pub fn hex(rgb: u32, a: f32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xff) as f32 / 255.0,
            g: ((rgb >> 8) & 0xff) as f32 / 255.0,
            b: (rgb & 0xff) as f32 / 255.0,
            a,
        }
    }
}

/// State for line rendering.
///
/// Holds the flat output vertex buffer. Each polyline of N points becomes
/// N-1 segments, two vertices per segment (line-list topology).
pub struct LineState {
    buffer: Vec<f32>,
}

impl LineState {
    pub fn new() -> Self {
        Self {
            buffer: Vec::with_capacity(4096 * LineVertex::FLOATS),
        }
    }

    /// Number of vertices currently in the buffer.
    pub fn vertex_count(&self) -> usize {
        self.buffer.len() / LineVertex::FLOATS
    }

    /// Raw pointer to the flat float buffer (for SAB copy).
    pub fn buffer_ptr(&self) -> *const f32 {
        self.buffer.as_ptr()
    }

    /// Append a polyline as line-list segments.
    ///
    /// Pass a point sequence whose last point equals the first to draw a
    /// closed loop.
    pub fn push_polyline(&mut self, points: &[Vec3], color: LineColor) {
        if points.len() < 2 {
            return;
        }
        for pair in points.windows(2) {
            for p in pair {
                self.buffer
                    .extend_from_slice(&[p.x, p.y, p.z, color.r, color.g, color.b, color.a, 0.0]);
            }
        }
    }
}

impl Default for LineState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_vertex_is_32_bytes() {
        assert_eq!(std::mem::size_of::<LineVertex>(), 32);
        assert_eq!(LineVertex::FLOATS, 8);
    }

    #[test]
    fn polyline_produces_segment_pairs() {
        let mut state = LineState::new();
        let points = [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 1.0),
        ];
        state.push_polyline(&points, LineColor::new(1.0, 1.0, 1.0, 1.0));
        // 2 segments, 2 vertices each
        assert_eq!(state.vertex_count(), 4);
    }

    #[test]
    fn closed_circle_of_361_points_gives_720_vertices() {
        let mut state = LineState::new();
        let points: Vec<Vec3> = (0..=360)
            .map(|i| {
                let angle = (i as f32).to_radians();
                Vec3::new(angle.cos() * 15.0, 0.0, angle.sin() * 15.0)
            })
            .collect();
        state.push_polyline(&points, LineColor::hex(0x444444, 0.3));
        assert_eq!(state.vertex_count(), 720);
    }

    #[test]
    fn degenerate_polyline_produces_nothing() {
        let mut state = LineState::new();
        state.push_polyline(&[], LineColor::new(1.0, 1.0, 1.0, 1.0));
        state.push_polyline(&[Vec3::ZERO], LineColor::new(1.0, 1.0, 1.0, 1.0));
        assert_eq!(state.vertex_count(), 0);
    }

    #[test]
    fn hex_color_decodes() {
        let c = LineColor::hex(0x444444, 0.3);
        assert!((c.r - 68.0 / 255.0).abs() < 1e-6);
        assert_eq!(c.r, c.g);
        assert_eq!(c.g, c.b);
        assert_eq!(c.a, 0.3);
    }
}
