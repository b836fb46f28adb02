use crate::components::entity::Entity;
use crate::components::mesh::Shape;
use crate::renderer::instance::{MeshBuffer, MeshInstance, MESH_KIND_RING, MESH_KIND_SPHERE};

/// Build the mesh instance buffer from entities with mesh components.
pub fn build_mesh_buffer<'a>(
    entities: impl Iterator<Item = &'a Entity>,
    buffer: &mut MeshBuffer,
) {
    buffer.clear();
    for entity in entities {
        if !entity.active {
            continue;
        }
        let mesh = match &entity.mesh {
            Some(m) => m,
            None => continue,
        };
        let (kind, param0, param1) = match mesh.shape {
            Shape::Sphere { radius } => (MESH_KIND_SPHERE, radius, 0.0),
            Shape::Ring { inner, outer } => (MESH_KIND_RING, inner, outer),
        };
        buffer.push(MeshInstance {
            kind,
            x: entity.pos.x,
            y: entity.pos.y,
            z: entity.pos.z,
            rot_x: entity.rotation.x,
            rot_y: entity.rotation.y,
            rot_z: entity.rotation.z,
            param0,
            param1,
            r: mesh.color.r,
            g: mesh.color.g,
            b: mesh.color.b,
            alpha: mesh.alpha,
            emissive: mesh.emissive,
            shininess: mesh.shininess,
            _pad: 0.0,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::EntityId;
    use crate::components::mesh::{MeshColor, MeshComponent};
    use glam::Vec3;

    #[test]
    fn build_buffer_from_entity_with_mesh() {
        let entity = Entity::new(EntityId(1))
            .with_pos(Vec3::new(15.0, 0.0, -4.0))
            .with_mesh(
                MeshComponent::sphere(1.0, MeshColor::new(0.2, 0.4, 0.8))
                    .with_shininess(16.0)
                    .with_emissive(0.5),
            );

        let entities = vec![entity];
        let mut buffer = MeshBuffer::new();
        build_mesh_buffer(entities.iter(), &mut buffer);

        assert_eq!(buffer.instance_count(), 1);
        let inst = &buffer.instances()[0];
        assert_eq!(inst.kind, MESH_KIND_SPHERE);
        assert_eq!(inst.x, 15.0);
        assert_eq!(inst.z, -4.0);
        assert_eq!(inst.param0, 1.0);
        assert_eq!(inst.shininess, 16.0);
        assert_eq!(inst.emissive, 0.5);
    }

    #[test]
    fn ring_shape_maps_to_ring_kind() {
        let entity = Entity::new(EntityId(1))
            .with_rotation(Vec3::new(std::f32::consts::FRAC_PI_2, 0.0, 0.0))
            .with_mesh(MeshComponent::ring(1.4, 2.2, MeshColor::default()).with_alpha(0.7));

        let entities = vec![entity];
        let mut buffer = MeshBuffer::new();
        build_mesh_buffer(entities.iter(), &mut buffer);

        let inst = &buffer.instances()[0];
        assert_eq!(inst.kind, MESH_KIND_RING);
        assert_eq!(inst.param0, 1.4);
        assert_eq!(inst.param1, 2.2);
        assert_eq!(inst.alpha, 0.7);
        assert!((inst.rot_x - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn build_buffer_skips_inactive_and_meshless() {
        let e1 = Entity::new(EntityId(1)); // no mesh
        let mut e2 = Entity::new(EntityId(2)).with_mesh(MeshComponent::default());
        e2.active = false;
        let e3 = Entity::new(EntityId(3)).with_mesh(MeshComponent::default());

        let entities = vec![e1, e2, e3];
        let mut buffer = MeshBuffer::new();
        build_mesh_buffer(entities.iter(), &mut buffer);

        assert_eq!(buffer.instance_count(), 1);
    }
}
