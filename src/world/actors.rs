//! Scripted actors: the princess, the guards and the dragon's fireballs.

use log::debug;

use super::dragon::Dragon;
use super::{BLOOD, EMBER, Effects};
use crate::config::GameConfig;

#[derive(Clone, Debug, PartialEq)]
pub struct Princess {
    pub x: f64,
    pub y: f64,
    pub speed: f64,
}

impl Princess {
    pub fn new(cfg: &GameConfig) -> Self {
        Self {
            x: cfg.princess_start_x,
            y: cfg.ground_y,
            speed: cfg.princess_speed,
        }
    }

    /// Constant walk toward the gate, no avoidance.
    pub fn advance(&mut self) {
        self.x += self.speed;
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Guard {
    pub x: f64,
    pub y: f64,
    pub alive: bool,
    pub speed: f64,
    /// Phase of the idle bob, only used for drawing.
    pub bob: f64,
}

impl Guard {
    pub fn new(x: f64, y: f64, speed: f64) -> Self {
        Self {
            x,
            y,
            alive: true,
            speed,
            bob: 0.0,
        }
    }
}

/// Guard policy: chase the dragon at full speed when it is within `radius`,
/// otherwise drift toward the princess at half speed. Returns the new x.
pub fn guard_target_x(guard_x: f64, speed: f64, dragon_x: f64, princess_x: f64, radius: f64) -> f64 {
    let toward = |target: f64| if target > guard_x { 1.0 } else { -1.0 };
    if (guard_x - dragon_x).abs() < radius {
        guard_x + toward(dragon_x) * speed
    } else {
        guard_x + toward(princess_x) * speed * 0.5
    }
}

/// Move every living guard and resolve dragon contact. Returns points earned.
pub(super) fn update_guards(
    guards: &mut [Guard],
    dragon: &Dragon,
    princess: &Princess,
    cfg: &GameConfig,
    fx: &mut Effects,
) -> u32 {
    let mut points = 0;
    for g in guards.iter_mut().filter(|g| g.alive) {
        g.bob += 0.1;
        g.x = guard_target_x(g.x, g.speed, dragon.x, princess.x, cfg.guard_pursuit_radius);

        if (g.x - dragon.center_x()).abs() < cfg.guard_contact_distance {
            g.alive = false;
            points += cfg.guard_points;
            fx.puff(10, g.x + 30.0, g.y + 30.0, 10.0, 10.0, 40, BLOOD);
            fx.shake_to(10.0);
            debug!("guard trampled at x={:.0}", g.x);
        }
    }
    points
}

#[derive(Clone, Debug, PartialEq)]
pub struct Fireball {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    /// Ticks left; the fireball is dropped when this reaches zero.
    pub life: u32,
}

impl Fireball {
    pub fn breathe(dragon: &Dragon, cfg: &GameConfig) -> Self {
        let mouth = if dragon.facing.sign() > 0.0 { 80.0 } else { -20.0 };
        Self {
            x: dragon.x + mouth,
            y: dragon.y + 30.0,
            vx: dragon.facing.sign() * cfg.fireball_speed,
            life: cfg.fireball_lifetime,
        }
    }
}

/// Fly, leave embers, burn every guard in reach, expire. Returns points
/// earned.
pub(super) fn update_fireballs(
    fireballs: &mut Vec<Fireball>,
    guards: &mut [Guard],
    anim: u64,
    cfg: &GameConfig,
    fx: &mut Effects,
) -> u32 {
    let mut points = 0;
    for fb in fireballs.iter_mut() {
        fb.x += fb.vx;
        if anim % 2 == 0 {
            let vy = fx.jitter(2.0);
            fx.emit(fb.x, fb.y, 0.0, vy, 10, EMBER);
        }

        let x = fb.x;
        for g in guards
            .iter_mut()
            .filter(|g| g.alive && (x - g.x).abs() < cfg.fireball_hit_distance)
        {
            g.alive = false;
            fb.life = 0;
            points += cfg.guard_points;
            fx.burst(10, g.x + 30.0, g.y + 30.0, 15.0, 30, BLOOD);
            fx.shake_to(15.0);
            debug!("guard burned at x={:.0}", g.x);
        }

        fb.life = fb.life.saturating_sub(1);
    }
    fireballs.retain(|fb| fb.life > 0);
    points
}
