use orrery_engine::*;
use wasm_bindgen::prelude::*;

mod clock;
mod game;
mod planets;
use game::SolarSystem;

orrery_web::export_game!(SolarSystem, "solar-orrery");
