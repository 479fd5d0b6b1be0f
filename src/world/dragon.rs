//! The player: horizontal steering, jump assist (buffer + coyote time),
//! gravity, one-way platforms and obstacle collision.

use super::level::{Obstacle, Platform};
use super::{BLOOD, DUST, Effects};
use crate::config::GameConfig;
use crate::input::{HeldKeys, Key};

// Hitbox offsets relative to the sprite origin (the sprite is 100x100).
pub const HITBOX_LEFT: f64 = 20.0;
pub const HITBOX_RIGHT: f64 = 80.0;
pub const HITBOX_HEIGHT: f64 = 100.0;
/// Where the feet sit for platform landings.
pub const FEET_OFFSET: f64 = 90.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Facing {
    Left,
    Right,
}

impl Facing {
    pub fn sign(self) -> f64 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Dragon {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub facing: Facing,
    pub airborne: bool,
    /// Ticks left in which a jump is still allowed after leaving the ground.
    pub coyote: u32,
    /// Ticks left in which an early jump press is still honoured.
    pub jump_buffer: u32,
    pub anim: u64,
}

impl Dragon {
    pub fn new(cfg: &GameConfig) -> Self {
        Self {
            x: cfg.dragon_start_x,
            y: cfg.dragon_floor_y,
            vx: 0.0,
            vy: 0.0,
            facing: Facing::Right,
            airborne: false,
            coyote: 0,
            jump_buffer: 0,
            anim: 0,
        }
    }

    /// Centre line used for guard contact.
    pub fn center_x(&self) -> f64 {
        self.x + 30.0
    }

    pub fn overlaps(&self, ob: &Obstacle) -> bool {
        self.x + HITBOX_RIGHT > ob.x
            && self.x + HITBOX_LEFT < ob.x + ob.w
            && self.y + HITBOX_HEIGHT > ob.y
            && self.y < ob.y + ob.h
    }

    fn lands_on(&self, p: &Platform, prev_y: f64) -> bool {
        self.vy > 0.0
            && self.x + HITBOX_RIGHT > p.x
            && self.x + HITBOX_LEFT < p.x + p.w
            && prev_y + FEET_OFFSET <= p.y
            && self.y + FEET_OFFSET >= p.y
    }

    /// Returns whether a direction key is held.
    fn steer(&mut self, held: HeldKeys, cfg: &GameConfig) -> bool {
        let mut moving = false;
        if held.is_held(Key::Left) {
            self.vx -= cfg.acceleration;
            self.facing = Facing::Left;
            moving = true;
        }
        if held.is_held(Key::Right) {
            self.vx += cfg.acceleration;
            self.facing = Facing::Right;
            moving = true;
        }
        if !moving {
            self.vx *= cfg.friction;
        }
        if self.airborne {
            self.vx *= cfg.air_resistance;
        }
        self.vx = self.vx.clamp(-cfg.max_speed, cfg.max_speed);
        if self.vx.abs() < cfg.stop_threshold {
            self.vx = 0.0;
        }
        moving
    }

    /// Refresh / count down the jump buffer and coyote window and start a jump
    /// when both are open. Returns whether a jump started.
    fn try_jump(&mut self, held: HeldKeys, cfg: &GameConfig) -> bool {
        if held.is_held(Key::Jump) {
            self.jump_buffer = cfg.jump_buffer_ticks;
        } else {
            self.jump_buffer = self.jump_buffer.saturating_sub(1);
        }

        if !self.airborne {
            self.coyote = cfg.coyote_ticks;
        } else {
            self.coyote = self.coyote.saturating_sub(1);
        }

        if self.jump_buffer > 0 && self.coyote > 0 {
            self.vy = -cfg.jump_speed;
            self.airborne = true;
            self.jump_buffer = 0;
            self.coyote = 0;
            return true;
        }
        false
    }
}

pub(super) fn step(
    dragon: &mut Dragon,
    held: HeldKeys,
    cfg: &GameConfig,
    platforms: &[Platform],
    obstacles: &[Obstacle],
    fx: &mut Effects,
) {
    dragon.anim += 1;

    let moving = dragon.steer(held, cfg);
    let prev_x = dragon.x;
    dragon.x += dragon.vx;

    if moving && !dragon.airborne && dragon.anim % 10 == 0 {
        fx.puff(1, dragon.x + 50.0, dragon.y + FEET_OFFSET, 2.0, 2.0, 20, DUST);
    }

    if dragon.try_jump(held, cfg) {
        fx.puff(5, dragon.x + 50.0, dragon.y + FEET_OFFSET, 5.0, 3.0, 30, DUST);
    }

    // Short hop when the key is let go early.
    if !held.is_held(Key::Jump) && dragon.vy < -cfg.jump_cut_speed {
        dragon.vy *= cfg.jump_cut_factor;
    }

    dragon.vy += cfg.gravity;
    let prev_y = dragon.y;
    dragon.y += dragon.vy;

    let mut grounded = false;
    if dragon.y >= cfg.dragon_floor_y {
        if dragon.airborne {
            fx.puff(8, dragon.x + 50.0, cfg.dragon_floor_y + FEET_OFFSET, 10.0, 5.0, 30, DUST);
            fx.shake_to(5.0);
        }
        dragon.y = cfg.dragon_floor_y;
        dragon.vy = 0.0;
        grounded = true;
    }
    for p in platforms {
        if dragon.lands_on(p, prev_y) {
            dragon.y = p.y - FEET_OFFSET;
            dragon.vy = 0.0;
            grounded = true;
        }
    }
    dragon.airborne = !grounded;

    for ob in obstacles {
        if !dragon.overlaps(ob) {
            continue;
        }
        if ob.kind.is_lethal() {
            dragon.vx = -dragon.facing.sign() * cfg.spike_knockback_x;
            dragon.vy = -cfg.spike_knockback_y;
            fx.shake_to(15.0);
            fx.burst(10, dragon.x + 50.0, dragon.y + 50.0, 10.0, 20, BLOOD);
            continue;
        }
        if prev_x + HITBOX_RIGHT <= ob.x {
            dragon.x = ob.x - HITBOX_RIGHT;
            dragon.vx = 0.0;
        } else if prev_x + HITBOX_LEFT >= ob.x + ob.w {
            dragon.x = ob.x + ob.w - HITBOX_LEFT;
            dragon.vx = 0.0;
        }
    }

    dragon.x = dragon.x.clamp(0.0, cfg.max_dragon_x());
}
