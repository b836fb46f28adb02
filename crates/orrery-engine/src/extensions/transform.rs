// extensions/transform.rs
//
// Transform hierarchy extension — tracks parent-child relationships by EntityId.
// A parent's world pose is read from its Scene entity each frame, so parents
// may be animated directly; children follow with their local offset/rotation
// applied on top.
//
// Usage:
//   let mut graph = TransformGraph::new();
//   graph.register(parent_id);
//   graph.register_with(child_id, LocalTransform::new().with_rotation(tilt));
//   graph.set_parent(child_id, Some(parent_id));
//   graph.propagate(&mut scene);  // Updates child world poses

use std::collections::HashMap;

use glam::Vec3;

use crate::api::types::EntityId;
use crate::core::scene::Scene;

/// Local transform data for entities in a hierarchy.
#[derive(Debug, Clone, Copy)]
pub struct LocalTransform {
    /// Position relative to parent.
    pub offset: Vec3,
    /// Euler rotation relative to parent, radians.
    pub rotation: Vec3,
}

impl Default for LocalTransform {
    fn default() -> Self {
        Self {
            offset: Vec3::ZERO,
            rotation: Vec3::ZERO,
        }
    }
}

impl LocalTransform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_offset(mut self, offset: Vec3) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }
}

/// Node in the transform hierarchy.
#[derive(Debug, Clone, Default)]
struct TransformNode {
    parent: Option<EntityId>,
    children: Vec<EntityId>,
    local: LocalTransform,
}

/// Transform hierarchy graph — manages parent-child relationships.
///
/// Exists separately from Scene to keep entity storage flat; games that
/// need parenting create this alongside their Scene.
#[derive(Debug, Default)]
pub struct TransformGraph {
    nodes: HashMap<EntityId, TransformNode>,
    /// Entities with no parent (top-level).
    roots: Vec<EntityId>,
}

impl TransformGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an entity in the hierarchy with default local transform.
    pub fn register(&mut self, id: EntityId) {
        self.nodes.entry(id).or_default();
        if !self.roots.contains(&id) {
            self.roots.push(id);
        }
    }

    /// Register an entity with a specific local transform.
    pub fn register_with(&mut self, id: EntityId, local: LocalTransform) {
        let node = self.nodes.entry(id).or_default();
        node.local = local;
        if !self.roots.contains(&id) {
            self.roots.push(id);
        }
    }

    /// Set the parent of an entity. Pass `None` to make it a root.
    pub fn set_parent(&mut self, child: EntityId, parent: Option<EntityId>) {
        self.nodes.entry(child).or_default();
        if let Some(p) = parent {
            self.nodes.entry(p).or_default();
        }

        // Remove from old parent's children
        if let Some(old_parent) = self.nodes.get(&child).and_then(|n| n.parent) {
            if let Some(old_node) = self.nodes.get_mut(&old_parent) {
                old_node.children.retain(|&c| c != child);
            }
        }

        if let Some(node) = self.nodes.get_mut(&child) {
            node.parent = parent;
        }

        if let Some(p) = parent {
            if let Some(parent_node) = self.nodes.get_mut(&p) {
                if !parent_node.children.contains(&child) {
                    parent_node.children.push(child);
                }
            }
            self.roots.retain(|&r| r != child);
        } else if !self.roots.contains(&child) {
            self.roots.push(child);
        }
    }

    /// Get the local transform for an entity.
    pub fn get_local(&self, id: EntityId) -> Option<&LocalTransform> {
        self.nodes.get(&id).map(|n| &n.local)
    }

    /// Get the local transform mutably.
    pub fn get_local_mut(&mut self, id: EntityId) -> Option<&mut LocalTransform> {
        self.nodes.get_mut(&id).map(|n| &mut n.local)
    }

    /// Get the parent of an entity.
    pub fn get_parent(&self, id: EntityId) -> Option<EntityId> {
        self.nodes.get(&id).and_then(|n| n.parent)
    }

    /// Propagate world poses from roots down through the hierarchy.
    ///
    /// Root entities keep the pose the game wrote into the scene; each child
    /// gets its local offset (rotated into the parent's frame about Y, the
    /// orbital-plane axis) added to the parent position, and its local Euler
    /// rotation added to the parent rotation.
    pub fn propagate(&mut self, scene: &mut Scene) {
        let roots: Vec<EntityId> = self.roots.clone();
        for root in roots {
            let Some((pos, rot)) = scene.get(root).map(|e| (e.pos, e.rotation)) else {
                continue;
            };
            let children: Vec<EntityId> = match self.nodes.get(&root) {
                Some(node) => node.children.clone(),
                None => continue,
            };
            for child in children {
                self.propagate_recursive(child, pos, rot, scene);
            }
        }
    }

    fn propagate_recursive(
        &self,
        id: EntityId,
        parent_pos: Vec3,
        parent_rot: Vec3,
        scene: &mut Scene,
    ) {
        let Some(node) = self.nodes.get(&id) else { return };
        let local = node.local;

        let cos_y = parent_rot.y.cos();
        let sin_y = parent_rot.y.sin();
        let rotated_offset = Vec3::new(
            local.offset.x * cos_y + local.offset.z * sin_y,
            local.offset.y,
            -local.offset.x * sin_y + local.offset.z * cos_y,
        );
        let world_pos = parent_pos + rotated_offset;
        let world_rot = parent_rot + local.rotation;

        if let Some(entity) = scene.get_mut(id) {
            entity.pos = world_pos;
            entity.rotation = world_rot;
        }

        let children: Vec<EntityId> = node.children.clone();
        for child in children {
            self.propagate_recursive(child, world_pos, world_rot, scene);
        }
    }

    /// Number of entities in the hierarchy.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the hierarchy is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::entity::Entity;

    #[test]
    fn parent_child_relationship() {
        let mut graph = TransformGraph::new();
        let parent = EntityId(1);
        let child = EntityId(2);

        graph.register(parent);
        graph.register(child);
        graph.set_parent(child, Some(parent));

        assert_eq!(graph.get_parent(child), Some(parent));
        assert_eq!(graph.get_parent(parent), None);
    }

    #[test]
    fn child_follows_moving_parent() {
        let mut graph = TransformGraph::new();
        let mut scene = Scene::new();

        let parent = EntityId(1);
        let child = EntityId(2);

        scene.spawn(Entity::new(parent).with_pos(Vec3::new(15.0, 0.0, 0.0)));
        scene.spawn(Entity::new(child));

        graph.register(parent);
        graph.register(child);
        graph.set_parent(child, Some(parent));

        graph.propagate(&mut scene);
        assert_eq!(scene.get(child).unwrap().pos, Vec3::new(15.0, 0.0, 0.0));

        // Parent animated directly in the scene — child tracks it
        scene.get_mut(parent).unwrap().pos = Vec3::new(0.0, 0.0, 15.0);
        graph.propagate(&mut scene);
        assert_eq!(scene.get(child).unwrap().pos, Vec3::new(0.0, 0.0, 15.0));
    }

    #[test]
    fn child_rotation_stacks_on_parent() {
        let mut graph = TransformGraph::new();
        let mut scene = Scene::new();

        let parent = EntityId(1);
        let child = EntityId(2);

        scene.spawn(Entity::new(parent).with_rotation(Vec3::new(0.0, 1.0, 0.0)));
        scene.spawn(Entity::new(child));

        graph.register(parent);
        graph.register_with(
            child,
            LocalTransform::new().with_rotation(Vec3::new(0.5, 0.0, 0.25)),
        );
        graph.set_parent(child, Some(parent));

        graph.propagate(&mut scene);

        let rot = scene.get(child).unwrap().rotation;
        assert!((rot.x - 0.5).abs() < 1e-6);
        assert!((rot.y - 1.0).abs() < 1e-6);
        assert!((rot.z - 0.25).abs() < 1e-6);
    }

    #[test]
    fn offset_rotates_with_parent_yaw() {
        let mut graph = TransformGraph::new();
        let mut scene = Scene::new();

        let parent = EntityId(1);
        let child = EntityId(2);

        scene.spawn(
            Entity::new(parent)
                .with_rotation(Vec3::new(0.0, std::f32::consts::FRAC_PI_2, 0.0)),
        );
        scene.spawn(Entity::new(child));

        graph.register(parent);
        graph.register_with(child, LocalTransform::new().with_offset(Vec3::new(1.0, 0.0, 0.0)));
        graph.set_parent(child, Some(parent));

        graph.propagate(&mut scene);

        let pos = scene.get(child).unwrap().pos;
        assert!(pos.x.abs() < 1e-6);
        assert!((pos.z - -1.0).abs() < 1e-6);
    }
}
