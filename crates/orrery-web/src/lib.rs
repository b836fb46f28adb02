pub mod runner;

pub use runner::GameRunner;

/// Generate all `#[wasm_bindgen]` exports for a game.
///
/// This macro eliminates the per-game boilerplate by generating:
/// - `thread_local!` storage for the GameRunner
/// - a `with_runner()` helper function
/// - All wasm-bindgen exports (game_init, game_tick, UI event handler,
///   buffer/capacity/camera accessors)
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
/// use orrery_engine::*;
///
/// mod game;
/// use game::SolarSystem;
///
/// orrery_web::export_game!(SolarSystem, "solar-orrery");
/// ```
///
/// # Arguments
///
/// - `$game_type`: The game struct type that implements `orrery_engine::Game`
/// - `$game_name`: A string literal used in the initialization log message
#[macro_export]
macro_rules! export_game {
    ($game_type:ty, $game_name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::GameRunner<$game_type>>> = RefCell::new(None);
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::GameRunner<$game_type>) -> R) -> R {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                let runner = borrow
                    .as_mut()
                    .expect("Game not initialized. Call game_init() first.");
                f(runner)
            })
        }

        #[wasm_bindgen]
        pub fn game_init() {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let game = <$game_type>::new();
            let runner = $crate::GameRunner::new(game);

            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });

            with_runner(|r| r.init());
            log::info!("{}: initialized", $game_name);
        }

        /// One tick per display refresh signal.
        #[wasm_bindgen]
        pub fn game_tick() {
            with_runner(|r| r.tick());
        }

        #[wasm_bindgen]
        pub fn game_custom_event(kind: u32, a: f32, b: f32, c: f32) {
            with_runner(|r| r.push_input(InputEvent::Custom { kind, a, b, c }));
        }

        // ---- Data accessors ----

        #[wasm_bindgen]
        pub fn get_mesh_instances_ptr() -> *const f32 {
            with_runner(|r| r.mesh_instances_ptr())
        }

        #[wasm_bindgen]
        pub fn get_mesh_instance_count() -> u32 {
            with_runner(|r| r.mesh_instance_count())
        }

        #[wasm_bindgen]
        pub fn get_line_vertices_ptr() -> *const f32 {
            with_runner(|r| r.line_vertices_ptr())
        }

        #[wasm_bindgen]
        pub fn get_line_vertex_count() -> u32 {
            with_runner(|r| r.line_vertex_count())
        }

        #[wasm_bindgen]
        pub fn get_star_points_ptr() -> *const f32 {
            with_runner(|r| r.star_points_ptr())
        }

        #[wasm_bindgen]
        pub fn get_star_point_count() -> u32 {
            with_runner(|r| r.star_point_count())
        }

        #[wasm_bindgen]
        pub fn get_lights_ptr() -> *const f32 {
            with_runner(|r| r.lights_ptr())
        }

        #[wasm_bindgen]
        pub fn get_light_count() -> u32 {
            with_runner(|r| r.light_count())
        }

        #[wasm_bindgen]
        pub fn get_ambient_r() -> f32 {
            with_runner(|r| r.ambient_r())
        }

        #[wasm_bindgen]
        pub fn get_ambient_g() -> f32 {
            with_runner(|r| r.ambient_g())
        }

        #[wasm_bindgen]
        pub fn get_ambient_b() -> f32 {
            with_runner(|r| r.ambient_b())
        }

        #[wasm_bindgen]
        pub fn get_game_events_ptr() -> *const f32 {
            with_runner(|r| r.game_events_ptr())
        }

        #[wasm_bindgen]
        pub fn get_game_events_len() -> u32 {
            with_runner(|r| r.game_events_len())
        }

        #[wasm_bindgen]
        pub fn get_frame_counter() -> u32 {
            with_runner(|r| r.frame_counter())
        }

        // ---- Capacity accessors ----

        #[wasm_bindgen]
        pub fn get_max_mesh_instances() -> u32 {
            with_runner(|r| r.max_mesh_instances())
        }

        #[wasm_bindgen]
        pub fn get_max_line_vertices() -> u32 {
            with_runner(|r| r.max_line_vertices())
        }

        #[wasm_bindgen]
        pub fn get_max_star_points() -> u32 {
            with_runner(|r| r.max_star_points())
        }

        #[wasm_bindgen]
        pub fn get_max_lights() -> u32 {
            with_runner(|r| r.max_lights())
        }

        #[wasm_bindgen]
        pub fn get_max_events() -> u32 {
            with_runner(|r| r.max_events())
        }

        #[wasm_bindgen]
        pub fn get_buffer_total_floats() -> u32 {
            with_runner(|r| r.buffer_total_floats())
        }

        // ---- Camera bootstrap accessors ----

        #[wasm_bindgen]
        pub fn get_camera_fov_deg() -> f32 {
            with_runner(|r| r.camera_fov_deg())
        }

        #[wasm_bindgen]
        pub fn get_camera_near() -> f32 {
            with_runner(|r| r.camera_near())
        }

        #[wasm_bindgen]
        pub fn get_camera_far() -> f32 {
            with_runner(|r| r.camera_far())
        }

        #[wasm_bindgen]
        pub fn get_camera_start_x() -> f32 {
            with_runner(|r| r.camera_start_x())
        }

        #[wasm_bindgen]
        pub fn get_camera_start_y() -> f32 {
            with_runner(|r| r.camera_start_y())
        }

        #[wasm_bindgen]
        pub fn get_camera_start_z() -> f32 {
            with_runner(|r| r.camera_start_z())
        }
    };
}
