pub mod render;
pub mod lighting;
pub mod lines;
pub mod starfield;
