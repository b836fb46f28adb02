/// RGB color for mesh rendering.
#[derive(Debug, Clone, Copy)]
pub struct MeshColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl MeshColor {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a 0xRRGGBB hex value.
    pub fn hex(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xff) as f32 / 255.0,
            g: ((rgb >> 8) & 0xff) as f32 / 255.0,
            b: (rgb & 0xff) as f32 / 255.0,
        }
    }
}

impl Default for MeshColor {
    fn default() -> Self {
        Self { r: 0.6, g: 0.6, b: 0.8 }
    }
}

/// Mesh shape primitive.
#[derive(Debug, Clone, Copy)]
pub enum Shape {
    Sphere { radius: f32 },
    /// Flat annulus in the local XY plane.
    Ring { inner: f32, outer: f32 },
}

/// Component for rendered meshes (raymarched spheres and annuli).
#[derive(Debug, Clone, Copy)]
pub struct MeshComponent {
    pub shape: Shape,
    pub color: MeshColor,
    /// Opacity (1.0 = opaque).
    pub alpha: f32,
    /// Phong specular exponent (default: 32.0).
    pub shininess: f32,
    /// HDR glow multiplier (default: 0.0 — lit by scene lights only).
    pub emissive: f32,
}

impl Default for MeshComponent {
    fn default() -> Self {
        Self {
            shape: Shape::Sphere { radius: 1.0 },
            color: MeshColor::default(),
            alpha: 1.0,
            shininess: 32.0,
            emissive: 0.0,
        }
    }
}

impl MeshComponent {
    pub fn sphere(radius: f32, color: MeshColor) -> Self {
        Self {
            shape: Shape::Sphere { radius },
            color,
            ..Default::default()
        }
    }

    pub fn ring(inner: f32, outer: f32, color: MeshColor) -> Self {
        Self {
            shape: Shape::Ring { inner, outer },
            color,
            ..Default::default()
        }
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_shininess(mut self, shininess: f32) -> Self {
        self.shininess = shininess;
        self
    }

    pub fn with_emissive(mut self, emissive: f32) -> Self {
        self.emissive = emissive;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_color_decodes_channels() {
        let c = MeshColor::hex(0x2277ff);
        assert!((c.r - 0x22 as f32 / 255.0).abs() < 1e-6);
        assert!((c.g - 0x77 as f32 / 255.0).abs() < 1e-6);
        assert!((c.b - 1.0).abs() < 1e-6);
    }

    #[test]
    fn builders_set_fields() {
        let m = MeshComponent::sphere(3.0, MeshColor::hex(0xffff00))
            .with_emissive(1.0)
            .with_shininess(8.0);
        assert!(matches!(m.shape, Shape::Sphere { radius } if radius == 3.0));
        assert_eq!(m.emissive, 1.0);
        assert_eq!(m.shininess, 8.0);
        assert_eq!(m.alpha, 1.0);
    }

    #[test]
    fn ring_keeps_radii() {
        let m = MeshComponent::ring(1.4, 2.2, MeshColor::default()).with_alpha(0.7);
        assert!(matches!(m.shape, Shape::Ring { inner, outer } if inner == 1.4 && outer == 2.2));
        assert_eq!(m.alpha, 0.7);
    }
}
