//! Solar system — scene construction and the per-frame orbital animator.
//!
//! `init` builds the static scene once: sun, planets, Saturn's ring,
//! orbit guides, starfield, lights. `update` advances the simulation
//! clock and repositions every body from closed-form circular orbits.

use std::f32::consts::TAU as TAU32;
use std::f64::consts::TAU;

use glam::Vec3;
use orrery_engine::{
    EngineContext, Entity, EntityId, Game, GameConfig, GameEvent, InputEvent, InputQueue,
    LineColor, LocalTransform, MeshColor, MeshComponent, PointLight,
};

use crate::clock::SimulationClock;
use crate::planets::{self, PlanetSpec, PLANETS, PLANET_COUNT};

// ── UI event kinds from the host page ────────────────────────────────

pub const CUSTOM_SLOWER: u32 = 1;
pub const CUSTOM_TOGGLE_PAUSE: u32 = 2;
pub const CUSTOM_FASTER: u32 = 3;

// ── Game event kinds to the host page ────────────────────────────────

/// Time readout: a = whole day count, b = speed multiplier, c = paused flag.
pub const EVENT_TIME_INFO: f32 = 1.0;

pub struct SolarSystem {
    clock: SimulationClock,

    // Entity IDs
    sun_id: Option<EntityId>,
    planet_ids: [Option<EntityId>; PLANET_COUNT],
    ring_id: Option<EntityId>,
}

impl SolarSystem {
    pub fn new() -> Self {
        Self {
            clock: SimulationClock::new(),
            sun_id: None,
            planet_ids: [None; PLANET_COUNT],
            ring_id: None,
        }
    }

    /// Orbit guide: closed circle of 361 points in the y = 0 plane.
    fn orbit_guide_points(distance: f32) -> Vec<Vec3> {
        let mut points = Vec::with_capacity(planets::ORBIT_SEGMENTS + 1);
        for i in 0..=planets::ORBIT_SEGMENTS {
            let angle = (i as f32).to_radians();
            points.push(Vec3::new(
                angle.cos() * distance,
                0.0,
                angle.sin() * distance,
            ));
        }
        points
    }

    /// Heliocentric position for a planet after `elapsed_days` of simulated
    /// time. The angle is a pure function of elapsed time and the orbital
    /// period; it is deliberately not range-reduced (cos/sin handle large
    /// arguments, and reduction would change nothing visible).
    fn orbital_position(spec: &PlanetSpec, elapsed_days: f64) -> Vec3 {
        let angle = elapsed_days / spec.year_days * TAU;
        let distance = spec.distance as f64;
        Vec3::new(
            (angle.cos() * distance) as f32,
            0.0,
            (angle.sin() * distance) as f32,
        )
    }
}

impl Default for SolarSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for SolarSystem {
    fn config(&self) -> GameConfig {
        GameConfig {
            max_mesh_instances: 16,
            max_line_vertices: 6144,
            max_star_points: planets::STAR_COUNT,
            max_lights: 4,
            max_events: 16,
            camera_fov_deg: 75.0,
            camera_near: 0.1,
            camera_far: 2000.0,
            camera_start: [0.0, 50.0, 100.0],
        }
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        // ── Lights ───────────────────────────────────────────────────
        let ambient = MeshColor::hex(planets::AMBIENT_COLOR);
        ctx.lights.set_ambient(ambient.r, ambient.g, ambient.b);
        ctx.lights.add(PointLight::new(
            Vec3::ZERO,
            [1.0, 1.0, 1.0],
            planets::SUN_LIGHT_INTENSITY,
            0.0,
        ));

        // ── Starfield ────────────────────────────────────────────────
        ctx.stars.scatter(
            planets::STAR_COUNT,
            planets::STAR_HALF_EXTENT,
            planets::STAR_SEED,
        );

        // ── Sun ──────────────────────────────────────────────────────
        let sun_id = ctx.next_id();
        ctx.scene.spawn(
            Entity::new(sun_id).with_tag("sun").with_mesh(
                MeshComponent::sphere(
                    planets::SUN_RADIUS,
                    MeshColor::hex(planets::SUN_COLOR),
                )
                .with_emissive(planets::SUN_EMISSIVE),
            ),
        );
        self.sun_id = Some(sun_id);

        // ── Planets, orbit guides, Saturn's ring ─────────────────────
        let orbit_color = LineColor::hex(planets::ORBIT_COLOR, planets::ORBIT_OPACITY);
        for (i, spec) in PLANETS.iter().enumerate() {
            let id = ctx.next_id();
            ctx.scene.spawn(
                Entity::new(id)
                    .with_tag(spec.name)
                    .with_pos(Vec3::new(spec.distance, 0.0, 0.0))
                    .with_mesh(
                        MeshComponent::sphere(spec.radius, spec.mesh_color())
                            .with_shininess(16.0),
                    ),
            );
            ctx.hierarchy.register(id);
            self.planet_ids[i] = Some(id);

            ctx.lines
                .push_polyline(&Self::orbit_guide_points(spec.distance), orbit_color);

            if spec.has_rings {
                let ring_id = ctx.next_id();
                ctx.scene.spawn(
                    Entity::new(ring_id)
                        .with_tag(format!("{}-rings", spec.name.to_lowercase()))
                        .with_mesh(
                            MeshComponent::ring(
                                spec.radius * planets::RING_INNER_FACTOR,
                                spec.radius * planets::RING_OUTER_FACTOR,
                                MeshColor::hex(planets::RING_COLOR),
                            )
                            .with_alpha(planets::RING_OPACITY),
                        ),
                );
                // Tilted 90° about X so the annulus lies in the planet's
                // equatorial plane; inherits the planet's position.
                ctx.hierarchy.register_with(
                    ring_id,
                    LocalTransform::new()
                        .with_rotation(Vec3::new(std::f32::consts::FRAC_PI_2, 0.0, 0.0)),
                );
                ctx.hierarchy.set_parent(ring_id, Some(id));
                self.ring_id = Some(ring_id);
            }
        }
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        // UI events are applied before the tick reads the clock.
        for event in input.iter() {
            let InputEvent::Custom { kind, .. } = event;
            match *kind {
                CUSTOM_SLOWER => self.clock.slower(),
                CUSTOM_FASTER => self.clock.faster(),
                CUSTOM_TOGGLE_PAUSE => self.clock.toggle_pause(),
                _ => {}
            }
        }

        self.clock.tick();

        if !self.clock.is_paused() {
            let elapsed = self.clock.elapsed_days();
            let speed = self.clock.speed() as f32;

            for (i, spec) in PLANETS.iter().enumerate() {
                let Some(id) = self.planet_ids[i] else { continue };
                if let Some(entity) = ctx.scene.get_mut(id) {
                    entity.pos = Self::orbital_position(spec, elapsed);
                    entity.rotation.y = (entity.rotation.y
                        + spec.rotation_rate * speed * planets::SPIN_STEP)
                        .rem_euclid(TAU32);
                }
            }

            // Ring spin is a fixed per-frame increment, not speed-scaled.
            if let Some(ring_id) = self.ring_id {
                if let Some(local) = ctx.hierarchy.get_local_mut(ring_id) {
                    local.rotation.z = (local.rotation.z + planets::RING_SPIN).rem_euclid(TAU32);
                }
            }

            if let Some(sun_id) = self.sun_id {
                if let Some(sun) = ctx.scene.get_mut(sun_id) {
                    sun.rotation.y =
                        (sun.rotation.y + planets::SUN_SPIN * speed).rem_euclid(TAU32);
                }
            }
        }

        ctx.emit_event(GameEvent {
            kind: EVENT_TIME_INFO,
            a: self.clock.day_count() as f32,
            b: self.clock.speed() as f32,
            c: if self.clock.is_paused() { 1.0 } else { 0.0 },
        });
    }
}
