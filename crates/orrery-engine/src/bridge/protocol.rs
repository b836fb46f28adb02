//! SharedArrayBuffer layout.
//! Must stay in sync with the TypeScript `protocol.ts`.
//!
//! Layout (all values in f32 / 4 bytes):
//! ```text
//! [Header: 16 floats]
//! [Meshes: max_mesh_instances × 16 floats]
//! [Lines:  max_line_vertices × 8 floats]
//! [Stars:  max_star_points × 4 floats]
//! [Lights: max_lights × 8 floats]
//! [Events: max_events × 4 floats]
//! ```
//!
//! Capacities are written once into the header at init.
//! TypeScript reads them from the header to compute offsets dynamically.

use crate::api::game::GameConfig;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 16;

/// Header field indices.
pub const HEADER_LOCK: usize = 0;
pub const HEADER_FRAME_COUNTER: usize = 1;
pub const HEADER_MAX_MESH_INSTANCES: usize = 2;
pub const HEADER_MESH_INSTANCE_COUNT: usize = 3;
pub const HEADER_MAX_LINE_VERTICES: usize = 4;
pub const HEADER_LINE_VERTEX_COUNT: usize = 5;
pub const HEADER_MAX_STAR_POINTS: usize = 6;
pub const HEADER_STAR_POINT_COUNT: usize = 7;
pub const HEADER_MAX_LIGHTS: usize = 8;
pub const HEADER_LIGHT_COUNT: usize = 9;
pub const HEADER_MAX_EVENTS: usize = 10;
pub const HEADER_EVENT_COUNT: usize = 11;
pub const HEADER_PROTOCOL_VERSION: usize = 12;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats per mesh instance (wire format — never changes).
pub const MESH_INSTANCE_FLOATS: usize = 16;

/// Floats per line vertex: x, y, z, r, g, b, a, pad.
pub const LINE_VERTEX_FLOATS: usize = 8;

/// Floats per star point: x, y, z, pad.
pub const STAR_POINT_FLOATS: usize = 4;

/// Floats per point light: x, y, z, r, g, b, intensity, radius.
pub const LIGHT_FLOATS: usize = 8;

/// Floats per game event: kind, a, b, c.
pub const EVENT_FLOATS: usize = 4;

/// Runtime-computed buffer layout, derived from GameConfig capacities.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    /// Maximum mesh instances.
    pub max_mesh_instances: usize,
    /// Maximum line vertices.
    pub max_line_vertices: usize,
    /// Maximum star points.
    pub max_star_points: usize,
    /// Maximum point lights.
    pub max_lights: usize,
    /// Maximum game events per frame.
    pub max_events: usize,

    /// Size of mesh data section in floats.
    pub mesh_data_floats: usize,
    /// Size of line data section in floats.
    pub line_data_floats: usize,
    /// Size of star data section in floats.
    pub star_data_floats: usize,
    /// Size of light data section in floats.
    pub light_data_floats: usize,
    /// Size of event data section in floats.
    pub event_data_floats: usize,

    /// Offset (in floats) where mesh data begins.
    pub mesh_data_offset: usize,
    /// Offset (in floats) where line data begins.
    pub line_data_offset: usize,
    /// Offset (in floats) where star data begins.
    pub star_data_offset: usize,
    /// Offset (in floats) where light data begins.
    pub light_data_offset: usize,
    /// Offset (in floats) where event data begins.
    pub event_data_offset: usize,

    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
    /// Total buffer size in bytes.
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    /// Compute layout from raw capacity values.
    pub fn new(
        max_mesh_instances: usize,
        max_line_vertices: usize,
        max_star_points: usize,
        max_lights: usize,
        max_events: usize,
    ) -> Self {
        let mesh_data_floats = max_mesh_instances * MESH_INSTANCE_FLOATS;
        let line_data_floats = max_line_vertices * LINE_VERTEX_FLOATS;
        let star_data_floats = max_star_points * STAR_POINT_FLOATS;
        let light_data_floats = max_lights * LIGHT_FLOATS;
        let event_data_floats = max_events * EVENT_FLOATS;

        let mesh_data_offset = HEADER_FLOATS;
        let line_data_offset = mesh_data_offset + mesh_data_floats;
        let star_data_offset = line_data_offset + line_data_floats;
        let light_data_offset = star_data_offset + star_data_floats;
        let event_data_offset = light_data_offset + light_data_floats;

        let buffer_total_floats = event_data_offset + event_data_floats;
        let buffer_total_bytes = buffer_total_floats * 4;

        Self {
            max_mesh_instances,
            max_line_vertices,
            max_star_points,
            max_lights,
            max_events,
            mesh_data_floats,
            line_data_floats,
            star_data_floats,
            light_data_floats,
            event_data_floats,
            mesh_data_offset,
            line_data_offset,
            star_data_offset,
            light_data_offset,
            event_data_offset,
            buffer_total_floats,
            buffer_total_bytes,
        }
    }

    /// Compute layout from a GameConfig.
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(
            config.max_mesh_instances,
            config.max_line_vertices,
            config.max_star_points,
            config.max_lights,
            config.max_events,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_default_config_matches_expected_sizes() {
        let layout = ProtocolLayout::from_config(&GameConfig::default());

        assert_eq!(layout.max_mesh_instances, 64);
        assert_eq!(layout.max_line_vertices, 4096);
        assert_eq!(layout.max_star_points, 4096);
        assert_eq!(layout.max_lights, 8);
        assert_eq!(layout.max_events, 32);

        assert_eq!(layout.mesh_data_floats, 64 * 16);
        assert_eq!(layout.line_data_floats, 4096 * 8);
        assert_eq!(layout.star_data_floats, 4096 * 4);
        assert_eq!(layout.light_data_floats, 8 * 8);
        assert_eq!(layout.event_data_floats, 32 * 4);
    }

    #[test]
    fn custom_capacities_compute_correctly() {
        let layout = ProtocolLayout::new(16, 6144, 10_000, 4, 16);

        assert_eq!(layout.mesh_data_floats, 16 * 16);
        assert_eq!(layout.line_data_floats, 6144 * 8);
        assert_eq!(layout.star_data_floats, 10_000 * 4);
        assert_eq!(layout.light_data_floats, 4 * 8);
        assert_eq!(layout.event_data_floats, 16 * 4);

        let expected_total =
            HEADER_FLOATS + 16 * 16 + 6144 * 8 + 10_000 * 4 + 4 * 8 + 16 * 4;
        assert_eq!(layout.buffer_total_floats, expected_total);
        assert_eq!(layout.buffer_total_bytes, expected_total * 4);
    }

    #[test]
    fn offsets_are_contiguous() {
        let layout = ProtocolLayout::new(10, 100, 1000, 2, 8);

        assert_eq!(layout.mesh_data_offset, HEADER_FLOATS);
        assert_eq!(layout.line_data_offset, layout.mesh_data_offset + layout.mesh_data_floats);
        assert_eq!(layout.star_data_offset, layout.line_data_offset + layout.line_data_floats);
        assert_eq!(layout.light_data_offset, layout.star_data_offset + layout.star_data_floats);
        assert_eq!(layout.event_data_offset, layout.light_data_offset + layout.light_data_floats);
        assert_eq!(layout.buffer_total_floats, layout.event_data_offset + layout.event_data_floats);
    }

    #[test]
    fn header_indices_fit_header() {
        assert!(HEADER_PROTOCOL_VERSION < HEADER_FLOATS);
        assert!(HEADER_EVENT_COUNT < HEADER_FLOATS);
    }
}
