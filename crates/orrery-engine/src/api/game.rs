use crate::api::types::GameEvent;
use crate::api::types::EntityId;
use crate::core::scene::Scene;
use crate::extensions::transform::TransformGraph;
use crate::input::queue::InputQueue;
use crate::systems::lighting::LightState;
use crate::systems::lines::LineState;
use crate::systems::starfield::Starfield;

/// Configuration for the engine, provided by the game.
///
/// Buffer capacities size the SharedArrayBuffer sections; camera fields are
/// published to the host so it can build its perspective camera and orbit
/// controls without hardcoding values on both sides.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Maximum number of mesh instances (default: 64).
    pub max_mesh_instances: usize,
    /// Maximum number of guide-line vertices (default: 4096).
    pub max_line_vertices: usize,
    /// Maximum number of starfield points (default: 4096).
    pub max_star_points: usize,
    /// Maximum number of point lights (default: 8).
    pub max_lights: usize,
    /// Maximum number of game events per frame (default: 32).
    pub max_events: usize,
    /// Vertical field of view in degrees.
    pub camera_fov_deg: f32,
    /// Near clip plane distance.
    pub camera_near: f32,
    /// Far clip plane distance.
    pub camera_far: f32,
    /// Initial camera position in world space.
    pub camera_start: [f32; 3],
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_mesh_instances: 64,
            max_line_vertices: 4096,
            max_star_points: 4096,
            max_lights: 8,
            max_events: 32,
            camera_fov_deg: 60.0,
            camera_near: 0.1,
            camera_far: 1000.0,
            camera_start: [0.0, 10.0, 20.0],
        }
    }
}

/// The core contract every game must fulfill.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Setup initial state: spawn entities, add lights, build static geometry.
    /// Runs exactly once, before the first tick.
    fn init(&mut self, ctx: &mut EngineContext);

    /// The per-frame tick. Apply queued input, advance simulation state,
    /// reposition entities. Invoked exactly once per display refresh signal.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue);
}

/// Mutable access to engine state, passed to Game::init and Game::update.
pub struct EngineContext {
    pub scene: Scene,
    pub hierarchy: TransformGraph,
    pub lights: LightState,
    pub lines: LineState,
    pub stars: Starfield,
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl EngineContext {
    pub fn new() -> Self {
        Self {
            scene: Scene::new(),
            hierarchy: TransformGraph::new(),
            lights: LightState::new(),
            lines: LineState::new(),
            stars: Starfield::new(),
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Generate the next unique entity ID.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Emit a game event to be forwarded to the host page.
    pub fn emit_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Clear per-frame transient data (events).
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
    }

    /// Push parent world poses down to child entities.
    /// Called by the runner after `Game::update()`.
    pub fn propagate_transforms(&mut self) {
        self.hierarchy.propagate(&mut self.scene);
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_id_is_sequential() {
        let mut ctx = EngineContext::new();
        assert_eq!(ctx.next_id(), EntityId(1));
        assert_eq!(ctx.next_id(), EntityId(2));
        assert_eq!(ctx.next_id(), EntityId(3));
    }

    #[test]
    fn clear_frame_data_drops_events() {
        let mut ctx = EngineContext::new();
        ctx.emit_event(GameEvent { kind: 1.0, a: 2.0, b: 3.0, c: 4.0 });
        assert_eq!(ctx.events.len(), 1);
        ctx.clear_frame_data();
        assert!(ctx.events.is_empty());
    }

    #[test]
    fn default_config_has_sane_camera() {
        let config = GameConfig::default();
        assert!(config.camera_near > 0.0);
        assert!(config.camera_far > config.camera_near);
        assert!(config.camera_fov_deg > 0.0 && config.camera_fov_deg < 180.0);
    }
}
