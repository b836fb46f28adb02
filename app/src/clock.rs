//! Simulated-time state for the orrery.
//!
//! The speed multiplier is denominated in simulated days added per rendered
//! frame, not per real second, so actual simulated speed follows the display
//! refresh rate. This is deliberate, not an oversight.

/// Lower clamp for the speed multiplier.
pub const SPEED_MIN: f64 = 0.1;
/// Upper clamp for the speed multiplier.
pub const SPEED_MAX: f64 = 10.0;
/// Starting speed: one simulated day per frame.
pub const SPEED_DEFAULT: f64 = 1.0;

/// Owns accumulated simulated days, the speed multiplier, and the pause
/// flag. Mutated only by the animator in response to frame ticks and UI
/// events; never reset for the process lifetime.
#[derive(Debug, Clone)]
pub struct SimulationClock {
    elapsed_days: f64,
    speed: f64,
    paused: bool,
}

impl SimulationClock {
    pub fn new() -> Self {
        Self {
            elapsed_days: 0.0,
            speed: SPEED_DEFAULT,
            paused: false,
        }
    }

    /// Advance by one frame. Does nothing while paused.
    pub fn tick(&mut self) {
        if !self.paused {
            self.elapsed_days += self.speed;
        }
    }

    /// Halve the speed multiplier, clamped to SPEED_MIN.
    pub fn slower(&mut self) {
        self.speed = (self.speed / 2.0).max(SPEED_MIN);
    }

    /// Double the speed multiplier, clamped to SPEED_MAX.
    pub fn faster(&mut self) {
        self.speed = (self.speed * 2.0).min(SPEED_MAX);
    }

    /// Flip between running and paused.
    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn elapsed_days(&self) -> f64 {
        self.elapsed_days
    }

    /// Whole simulated days elapsed, for the UI day counter.
    pub fn day_count(&self) -> u64 {
        self.elapsed_days.floor() as u64
    }
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self::new()
    }
}
