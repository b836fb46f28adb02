use bytemuck::{Pod, Zeroable};

/// Shape kind written into the instance stream.
pub const MESH_KIND_SPHERE: f32 = 0.0;
pub const MESH_KIND_RING: f32 = 1.0;

/// Per-instance mesh render data written to SharedArrayBuffer for the
/// host renderer. 16 floats = 64 bytes per instance.
///
/// `param0` is the sphere radius or the ring inner radius;
/// `param1` is the ring outer radius (0 for spheres).
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct MeshInstance {
    pub kind: f32,
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub rot_x: f32,
    pub rot_y: f32,
    pub rot_z: f32,
    pub param0: f32,
    pub param1: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub alpha: f32,
    pub emissive: f32,
    pub shininess: f32,
    pub _pad: f32,
}

impl MeshInstance {
    pub const FLOATS: usize = 16;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Buffer of mesh instances for the rendering pipeline.
pub struct MeshBuffer {
    instances: Vec<MeshInstance>,
}

impl MeshBuffer {
    pub fn new() -> Self {
        Self::with_capacity(64)
    }

    pub fn with_capacity(max: usize) -> Self {
        Self {
            instances: Vec::with_capacity(max),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn push(&mut self, instance: MeshInstance) {
        self.instances.push(instance);
    }

    pub fn instance_count(&self) -> usize {
        self.instances.len()
    }

    pub fn instances(&self) -> &[MeshInstance] {
        &self.instances
    }

    /// Raw pointer to instance data for SharedArrayBuffer reads.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}

impl Default for MeshBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mesh_instance_is_64_bytes() {
        assert_eq!(std::mem::size_of::<MeshInstance>(), 64);
        assert_eq!(MeshInstance::FLOATS, 16);
    }

    #[test]
    fn mesh_buffer_push_and_count() {
        let mut buf = MeshBuffer::new();
        buf.push(MeshInstance::default());
        buf.push(MeshInstance::default());
        assert_eq!(buf.instance_count(), 2);
    }
}
