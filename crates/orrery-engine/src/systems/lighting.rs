//! Point light and ambient state for the scene.
//!
//! Lights are persistent — add them once at init and they stay.
//! Each frame the bridge serializes active lights to the SAB for the
//! renderer's lighting pass.

use glam::Vec3;

/// A point light with position, color, intensity, and falloff radius.
///
/// Wire format (8 floats / 32 bytes):
/// `[x, y, z, r, g, b, intensity, radius]`
///
/// A radius of 0.0 disables distance falloff (unattenuated light).
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct PointLight {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub intensity: f32,
    pub radius: f32,
}

impl PointLight {
    /// Create a new point light at the given position.
    ///
    /// - `pos`: World-space position
    /// - `color`: RGB color (typically [0..1] but can exceed 1.0 for HDR)
    /// - `intensity`: Light strength multiplier
    /// - `radius`: Falloff distance in world units (0.0 = no falloff)
    pub fn new(pos: Vec3, color: [f32; 3], intensity: f32, radius: f32) -> Self {
        Self {
            x: pos.x,
            y: pos.y,
            z: pos.z,
            r: color[0],
            g: color[1],
            b: color[2],
            intensity,
            radius,
        }
    }
}

/// Manages active lights and the ambient color for the scene.
///
/// The ambient color defaults to (1.0, 1.0, 1.0) which produces unlit
/// output when no point lights are present.
pub struct LightState {
    lights: Vec<PointLight>,
    ambient: [f32; 3],
}

impl LightState {
    pub fn new() -> Self {
        Self {
            lights: Vec::new(),
            ambient: [1.0, 1.0, 1.0],
        }
    }

    /// Add a point light to the scene.
    pub fn add(&mut self, light: PointLight) {
        self.lights.push(light);
    }

    /// Get an iterator over active lights.
    pub fn iter(&self) -> impl Iterator<Item = &PointLight> {
        self.lights.iter()
    }

    /// Number of active lights.
    pub fn count(&self) -> usize {
        self.lights.len()
    }

    /// Set the ambient light color (default: white = no darkening).
    /// For a dark space scene use low values like (0.2, 0.2, 0.2).
    pub fn set_ambient(&mut self, r: f32, g: f32, b: f32) {
        self.ambient = [r, g, b];
    }

    /// Get the ambient color.
    pub fn ambient(&self) -> [f32; 3] {
        self.ambient
    }

    /// Pointer to the lights data for SAB serialization.
    pub fn buffer_ptr(&self) -> *const f32 {
        self.lights.as_ptr() as *const f32
    }
}

impl Default for LightState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::protocol::LIGHT_FLOATS;

    #[test]
    fn point_light_new() {
        let light = PointLight::new(Vec3::ZERO, [1.0, 1.0, 1.0], 1.5, 0.0);
        assert_eq!(light.x, 0.0);
        assert_eq!(light.intensity, 1.5);
        assert_eq!(light.radius, 0.0);
    }

    #[test]
    fn light_state_add_and_count() {
        let mut state = LightState::new();
        assert_eq!(state.count(), 0);
        state.add(PointLight::new(Vec3::ZERO, [1.0; 3], 1.5, 0.0));
        assert_eq!(state.count(), 1);
    }

    #[test]
    fn light_state_ambient() {
        let mut state = LightState::new();
        assert_eq!(state.ambient(), [1.0, 1.0, 1.0]);
        state.set_ambient(0.2, 0.2, 0.2);
        assert_eq!(state.ambient(), [0.2, 0.2, 0.2]);
    }

    #[test]
    fn point_light_is_8_floats() {
        assert_eq!(std::mem::size_of::<PointLight>(), LIGHT_FLOATS * 4);
    }
}
