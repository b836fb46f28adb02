// extensions/mod.rs
//
// Optional extension modules, decoupled from core Entity/Scene.
// Games opt-in by creating these systems alongside their Scene.

pub mod transform;

pub use transform::{LocalTransform, TransformGraph};
