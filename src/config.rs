//! Tuning constants for the castle run.
//!
//! Everything the simulation reads lives in [`GameConfig`] so a run can be
//! reproduced (or rebalanced) by passing a different value into
//! [`GameState::new`](crate::world::GameState::new). With the `serde` feature the
//! struct round-trips through JSON and missing fields fall back to the defaults.

use crate::error::GameError;

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    // --- World ---
    pub world_width: f64,
    /// Resting y for the princess and guards.
    pub ground_y: f64,
    /// Resting y for the dragon (its sprite is taller).
    pub dragon_floor_y: f64,
    pub gate_x: f64,
    pub dragon_start_x: f64,
    /// Width used for the world-bound clamp.
    pub dragon_width: f64,

    // --- Dragon physics ---
    pub gravity: f64,
    pub acceleration: f64,
    pub friction: f64,
    pub air_resistance: f64,
    pub max_speed: f64,
    pub stop_threshold: f64,
    pub jump_speed: f64,
    /// Upward speed above which releasing the jump key cuts the jump.
    pub jump_cut_speed: f64,
    pub jump_cut_factor: f64,
    pub jump_buffer_ticks: u32,
    pub coyote_ticks: u32,
    pub spike_knockback_x: f64,
    pub spike_knockback_y: f64,

    // --- Princess ---
    pub princess_start_x: f64,
    pub princess_speed: f64,
    pub caught_distance: f64,

    // --- Guards ---
    pub guard_pursuit_radius: f64,
    pub guard_contact_distance: f64,
    pub guard_points: u32,

    // --- Fire ---
    pub fireball_speed: f64,
    pub fireball_lifetime: u32,
    pub fireball_hit_distance: f64,

    // --- Effects / loop ---
    pub particle_drift: f64,
    pub shake_decay: f64,
    pub tick_hz: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            world_width: 4000.0,
            ground_y: 280.0,
            dragon_floor_y: 250.0,
            gate_x: 3800.0,
            dragon_start_x: 100.0,
            dragon_width: 60.0,

            gravity: 0.6,
            acceleration: 0.8,
            friction: 0.88,
            air_resistance: 0.98,
            max_speed: 8.0,
            stop_threshold: 0.1,
            jump_speed: 16.0,
            jump_cut_speed: 7.0,
            jump_cut_factor: 0.5,
            jump_buffer_ticks: 8,
            coyote_ticks: 8,
            spike_knockback_x: 15.0,
            spike_knockback_y: 10.0,

            princess_start_x: 800.0,
            princess_speed: 2.3,
            caught_distance: 60.0,

            guard_pursuit_radius: 500.0,
            guard_contact_distance: 50.0,
            guard_points: 100,

            fireball_speed: 15.0,
            fireball_lifetime: 60,
            fireball_hit_distance: 30.0,

            particle_drift: 0.1,
            shake_decay: 0.9,
            tick_hz: 60,
        }
    }
}

impl GameConfig {
    /// Interval between ticks for `setInterval`.
    pub fn tick_interval_ms(&self) -> i32 {
        (1000.0 / self.tick_hz.max(1) as f64).round() as i32
    }

    /// Right-most x the dragon may occupy.
    pub fn max_dragon_x(&self) -> f64 {
        self.world_width - self.dragon_width
    }

    pub fn validate(&self) -> Result<(), GameError> {
        let invalid = |reason: &str| Err(GameError::InvalidConfig(reason.to_string()));
        if !(self.world_width > self.dragon_width) {
            return invalid("world_width must exceed dragon_width");
        }
        if !(self.friction > 0.0 && self.friction <= 1.0) {
            return invalid("friction must be in (0, 1]");
        }
        if !(self.air_resistance > 0.0 && self.air_resistance <= 1.0) {
            return invalid("air_resistance must be in (0, 1]");
        }
        if !(self.shake_decay >= 0.0 && self.shake_decay < 1.0) {
            return invalid("shake_decay must be in [0, 1)");
        }
        if !(self.max_speed > 0.0) || !(self.gravity > 0.0) {
            return invalid("max_speed and gravity must be positive");
        }
        if self.tick_hz == 0 {
            return invalid("tick_hz must be non-zero");
        }
        if !(self.gate_x > self.princess_start_x) {
            return invalid("gate_x must lie ahead of princess_start_x");
        }
        Ok(())
    }

    #[cfg(feature = "serde_json")]
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let cfg: GameConfig = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }
}
