use orrery_engine::systems::render::build_mesh_buffer;
use orrery_engine::{
    EngineContext, Game, GameConfig, InputEvent, InputQueue, MeshBuffer, ProtocolLayout,
};

/// Generic game runner that wires up the engine loop.
///
/// Each concrete game creates a `thread_local!` GameRunner and exports free
/// functions via `#[wasm_bindgen]`, because wasm-bindgen cannot export
/// generic structs directly.
///
/// `tick()` runs exactly one game update per call. The host invokes it once
/// per requestAnimationFrame signal, so simulation advancement is coupled to
/// the display refresh rate — a deliberate property of the orrery's clock
/// (speed is denominated in simulated days per rendered frame).
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    mesh_buffer: MeshBuffer,
    config: GameConfig,
    layout: ProtocolLayout,
    initialized: bool,
    frame: u32,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        let layout = ProtocolLayout::from_config(&config);
        let mesh_buffer = MeshBuffer::with_capacity(config.max_mesh_instances);

        Self {
            game,
            ctx: EngineContext::new(),
            input: InputQueue::new(),
            mesh_buffer,
            config,
            layout,
            initialized: false,
            frame: 0,
        }
    }

    /// Initialize the game. Call once after construction.
    pub fn init(&mut self) {
        self.config = self.game.config();
        self.layout = ProtocolLayout::from_config(&self.config);
        self.game.init(&mut self.ctx);
        self.ctx.propagate_transforms();
        build_mesh_buffer(self.ctx.scene.iter(), &mut self.mesh_buffer);
        self.initialized = true;
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame tick: apply input, update the game once, rebuild the
    /// mesh buffer. No accumulation or batching — one update per signal.
    pub fn tick(&mut self) {
        if !self.initialized {
            return;
        }

        self.ctx.clear_frame_data();
        self.game.update(&mut self.ctx, &self.input);
        self.input.drain();

        self.ctx.propagate_transforms();
        build_mesh_buffer(self.ctx.scene.iter(), &mut self.mesh_buffer);

        self.frame = self.frame.wrapping_add(1);
    }

    /// Frames ticked since init (wraps).
    pub fn frame_counter(&self) -> u32 {
        self.frame
    }

    // ---- Pointer accessors for SharedArrayBuffer reads ----

    pub fn mesh_instances_ptr(&self) -> *const f32 {
        self.mesh_buffer.instances_ptr()
    }

    pub fn mesh_instance_count(&self) -> u32 {
        self.mesh_buffer.instance_count() as u32
    }

    pub fn line_vertices_ptr(&self) -> *const f32 {
        self.ctx.lines.buffer_ptr()
    }

    pub fn line_vertex_count(&self) -> u32 {
        self.ctx.lines.vertex_count() as u32
    }

    pub fn star_points_ptr(&self) -> *const f32 {
        self.ctx.stars.buffer_ptr()
    }

    pub fn star_point_count(&self) -> u32 {
        self.ctx.stars.count() as u32
    }

    pub fn lights_ptr(&self) -> *const f32 {
        self.ctx.lights.buffer_ptr()
    }

    pub fn light_count(&self) -> u32 {
        self.ctx.lights.count() as u32
    }

    pub fn ambient_r(&self) -> f32 {
        self.ctx.lights.ambient()[0]
    }

    pub fn ambient_g(&self) -> f32 {
        self.ctx.lights.ambient()[1]
    }

    pub fn ambient_b(&self) -> f32 {
        self.ctx.lights.ambient()[2]
    }

    pub fn game_events_ptr(&self) -> *const f32 {
        self.ctx.events.as_ptr() as *const f32
    }

    pub fn game_events_len(&self) -> u32 {
        self.ctx.events.len() as u32
    }

    // ---- Capacity accessors (read by TypeScript via wasm_bindgen exports) ----

    pub fn max_mesh_instances(&self) -> u32 {
        self.layout.max_mesh_instances as u32
    }

    pub fn max_line_vertices(&self) -> u32 {
        self.layout.max_line_vertices as u32
    }

    pub fn max_star_points(&self) -> u32 {
        self.layout.max_star_points as u32
    }

    pub fn max_lights(&self) -> u32 {
        self.layout.max_lights as u32
    }

    pub fn max_events(&self) -> u32 {
        self.layout.max_events as u32
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }

    // ---- Camera bootstrap accessors ----

    pub fn camera_fov_deg(&self) -> f32 {
        self.config.camera_fov_deg
    }

    pub fn camera_near(&self) -> f32 {
        self.config.camera_near
    }

    pub fn camera_far(&self) -> f32 {
        self.config.camera_far
    }

    pub fn camera_start_x(&self) -> f32 {
        self.config.camera_start[0]
    }

    pub fn camera_start_y(&self) -> f32 {
        self.config.camera_start[1]
    }

    pub fn camera_start_z(&self) -> f32 {
        self.config.camera_start[2]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_engine::{Entity, MeshColor, MeshComponent};

    /// Minimal game that counts updates and spawns one sphere.
    struct CountingGame {
        updates: u32,
    }

    impl Game for CountingGame {
        fn init(&mut self, ctx: &mut EngineContext) {
            let id = ctx.next_id();
            ctx.scene
                .spawn(Entity::new(id).with_mesh(MeshComponent::sphere(1.0, MeshColor::default())));
        }

        fn update(&mut self, _ctx: &mut EngineContext, _input: &InputQueue) {
            self.updates += 1;
        }
    }

    #[test]
    fn tick_runs_exactly_one_update() {
        let mut runner = GameRunner::new(CountingGame { updates: 0 });
        runner.init();
        runner.tick();
        runner.tick();
        runner.tick();
        assert_eq!(runner.game.updates, 3);
        assert_eq!(runner.frame_counter(), 3);
    }

    #[test]
    fn tick_before_init_is_a_no_op() {
        let mut runner = GameRunner::new(CountingGame { updates: 0 });
        runner.tick();
        assert_eq!(runner.game.updates, 0);
    }

    #[test]
    fn init_builds_mesh_buffer() {
        let mut runner = GameRunner::new(CountingGame { updates: 0 });
        runner.init();
        assert_eq!(runner.mesh_instance_count(), 1);
    }

    #[test]
    fn input_is_drained_after_tick() {
        let mut runner = GameRunner::new(CountingGame { updates: 0 });
        runner.init();
        runner.push_input(InputEvent::Custom { kind: 1, a: 0.0, b: 0.0, c: 0.0 });
        runner.tick();
        assert!(runner.input.is_empty());
    }
}
