pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod bridge;
pub mod input;
pub mod extensions;

// Re-export key types at crate root for convenience
pub use api::game::{Game, GameConfig, EngineContext};
pub use api::types::{EntityId, GameEvent};
pub use components::entity::Entity;
pub use components::mesh::{MeshComponent, MeshColor, Shape};
pub use core::scene::Scene;
pub use renderer::instance::{MeshInstance, MeshBuffer};
pub use input::queue::{InputEvent, InputQueue};
pub use bridge::protocol::ProtocolLayout;
pub use systems::render::build_mesh_buffer;
pub use systems::lighting::{PointLight, LightState};
pub use systems::lines::{LineColor, LineState, LineVertex};
pub use systems::starfield::{Rng, StarPoint, Starfield};
pub use bridge::protocol::{LIGHT_FLOATS, MESH_INSTANCE_FLOATS};

// Extensions — decoupled optional systems
pub use extensions::{LocalTransform, TransformGraph};
