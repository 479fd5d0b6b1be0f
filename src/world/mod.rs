//! Castle run simulation.
//!
//! The whole game lives in [`GameState`]: one dragon, one princess walking to
//! the gate, a handful of guards, fireballs, particles and a static level.
//! [`GameState::step`] advances everything by one fixed tick from the set of
//! held keys; nothing in here touches the DOM, so the simulation runs (and is
//! tested) natively. Randomness comes only from the seeded [`SimRng`] handed in
//! at construction, which makes a seed plus an input sequence a full replay.
//!
//! Tick order:
//! 1. dragon: input, jump assist, gravity, floor / platforms, obstacles, clamp
//! 2. princess advances
//! 3. guards pursue or drift, contact kills
//! 4. particles drift and expire
//! 5. fireballs fly, hit guards, expire
//! 6. outcome evaluation (sticky once terminal)

use log::info;

use crate::config::GameConfig;
use crate::input::HeldKeys;
use crate::rng::SimRng;

mod actors;
mod dragon;
mod level;
mod outcome;

pub use actors::{Fireball, Guard, Princess, guard_target_x};
pub use dragon::{Dragon, FEET_OFFSET, Facing, HITBOX_HEIGHT, HITBOX_LEFT, HITBOX_RIGHT};
pub use level::{Level, Obstacle, ObstacleKind, Platform, Scenery};
pub use outcome::{Outcome, evaluate};

pub const DUST: &str = "#888";
pub const BLOOD: &str = "#f00";
pub const EMBER: &str = "#ff0";

/// Cosmetic particle. Never affects gameplay.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub life: u32,
    pub max_life: u32,
    pub color: &'static str,
}

impl Particle {
    /// Remaining life as a 0..=1 opacity.
    pub fn fade(&self) -> f64 {
        if self.max_life == 0 {
            0.0
        } else {
            self.life as f64 / self.max_life as f64
        }
    }
}

/// Particles, screen shake and the random source that jitters them.
pub struct Effects {
    pub particles: Vec<Particle>,
    pub shake: f64,
    rng: SimRng,
}

impl Effects {
    fn new(rng: SimRng) -> Self {
        Self {
            particles: Vec::new(),
            shake: 0.0,
            rng,
        }
    }

    pub fn emit(&mut self, x: f64, y: f64, vx: f64, vy: f64, life: u32, color: &'static str) {
        self.particles.push(Particle {
            x,
            y,
            vx,
            vy,
            life,
            max_life: life,
            color,
        });
    }

    /// Particles thrown sideways and upward (dust, debris).
    pub fn puff(&mut self, count: usize, x: f64, y: f64, spread: f64, lift: f64, life: u32, color: &'static str) {
        for _ in 0..count {
            let vx = self.rng.jitter(spread);
            let vy = -self.rng.unit() * lift;
            self.emit(x, y, vx, vy, life, color);
        }
    }

    /// Particles thrown in every direction (impacts).
    pub fn burst(&mut self, count: usize, x: f64, y: f64, spread: f64, life: u32, color: &'static str) {
        for _ in 0..count {
            let vx = self.rng.jitter(spread);
            let vy = self.rng.jitter(spread);
            self.emit(x, y, vx, vy, life, color);
        }
    }

    pub fn jitter(&mut self, spread: f64) -> f64 {
        self.rng.jitter(spread)
    }

    pub fn shake_to(&mut self, amount: f64) {
        self.shake = amount;
    }

    fn decay_shake(&mut self, factor: f64) {
        if self.shake > 0.0 {
            self.shake *= factor;
        }
    }

    fn update_particles(&mut self, drift: f64) {
        for p in &mut self.particles {
            p.x += p.vx;
            p.y += p.vy;
            p.vy += drift;
            p.life = p.life.saturating_sub(1);
        }
        self.particles.retain(|p| p.life > 0);
    }
}

/// Complete simulation state for one run.
pub struct GameState {
    pub config: GameConfig,
    pub dragon: Dragon,
    pub princess: Princess,
    pub guards: Vec<Guard>,
    pub fireballs: Vec<Fireball>,
    pub obstacles: Vec<Obstacle>,
    pub platforms: Vec<Platform>,
    pub scenery: Scenery,
    pub fx: Effects,
    pub score: u32,
    outcome: Outcome,
}

impl GameState {
    /// New run with a generated level.
    ///
    /// `config` must pass [`GameConfig::validate`]; physics clamps panic on
    /// inverted bounds otherwise. Debug builds check this up front.
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let mut rng = SimRng::new(seed);
        let level = level::generate(&config, &mut rng);
        let mut state = Self::bare(config, rng);
        state.obstacles = level.obstacles;
        state.platforms = level.platforms;
        state.guards = level.guards;
        state.scenery = level.scenery;
        info!(
            "new run (seed {seed}): {} guards, {} obstacles",
            state.guards.len(),
            state.obstacles.len()
        );
        state
    }

    /// Dragon and princess only: no obstacles, platforms, guards or scenery.
    /// Callers populate whatever a scenario needs.
    pub fn empty(config: GameConfig, seed: u64) -> Self {
        Self::bare(config, SimRng::new(seed))
    }

    fn bare(config: GameConfig, rng: SimRng) -> Self {
        debug_assert!(config.validate().is_ok(), "invalid config: {config:?}");
        Self {
            dragon: Dragon::new(&config),
            princess: Princess::new(&config),
            guards: Vec::new(),
            fireballs: Vec::new(),
            obstacles: Vec::new(),
            platforms: Vec::new(),
            scenery: Scenery::default(),
            fx: Effects::new(rng),
            score: 0,
            outcome: Outcome::Running,
            config,
        }
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    pub fn alive_guards(&self) -> usize {
        self.guards.iter().filter(|g| g.alive).count()
    }

    /// Advance one tick. Once the run has ended this is a no-op.
    pub fn step(&mut self, held: HeldKeys) -> Outcome {
        if self.outcome.is_terminal() {
            return self.outcome;
        }

        self.fx.decay_shake(self.config.shake_decay);
        dragon::step(
            &mut self.dragon,
            held,
            &self.config,
            &self.platforms,
            &self.obstacles,
            &mut self.fx,
        );
        self.princess.advance();
        self.score += actors::update_guards(
            &mut self.guards,
            &self.dragon,
            &self.princess,
            &self.config,
            &mut self.fx,
        );
        self.fx.update_particles(self.config.particle_drift);
        self.score += actors::update_fireballs(
            &mut self.fireballs,
            &mut self.guards,
            self.dragon.anim,
            &self.config,
            &mut self.fx,
        );

        self.outcome = evaluate(self);
        if self.outcome.is_terminal() {
            info!("run over: {:?}, score {}", self.outcome, self.score);
        }
        self.outcome
    }

    /// Spawn a fireball from the dragon's mouth. Returns false once the run is
    /// over.
    pub fn breathe_fire(&mut self) -> bool {
        if self.outcome.is_terminal() {
            return false;
        }
        self.fireballs.push(Fireball::breathe(&self.dragon, &self.config));
        true
    }

    /// Text for the status bar.
    pub fn status_line(&self) -> String {
        match self.outcome {
            Outcome::Running => format!(
                "Points: {} | Defenders Remaining: {} | Distance to Gate: {}m",
                self.score,
                self.alive_guards(),
                (self.config.gate_x - self.princess.x).max(0.0).round() as i64
            ),
            terminal => terminal.message(self.score),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Key;

    fn far_guard(x: f64) -> Guard {
        Guard {
            x,
            y: 280.0,
            alive: true,
            speed: 0.0,
            bob: 0.0,
        }
    }

    #[test]
    fn generated_run_starts_running() {
        let state = GameState::new(GameConfig::default(), 7);
        assert_eq!(state.outcome(), Outcome::Running);
        assert_eq!(state.alive_guards(), state.guards.len());
        assert!(!state.guards.is_empty());
        assert!(state.status_line().starts_with("Points: 0 |"));
    }

    #[test]
    fn particles_drift_and_expire() {
        let mut fx = Effects::new(SimRng::new(1));
        fx.emit(0.0, 0.0, 1.0, 0.0, 2, DUST);
        fx.update_particles(0.1);
        assert_eq!(fx.particles.len(), 1);
        let p = &fx.particles[0];
        assert_eq!((p.x, p.y, p.life), (1.0, 0.0, 1));
        assert!((p.vy - 0.1).abs() < 1e-12);
        assert!((p.fade() - 0.5).abs() < 1e-12);
        fx.update_particles(0.1);
        assert!(fx.particles.is_empty());
    }

    #[test]
    fn shake_decays_each_tick() {
        let mut state = GameState::empty(GameConfig::default(), 3);
        state.guards.push(far_guard(3990.0));
        state.fx.shake_to(10.0);
        state.step(HeldKeys::new());
        assert!((state.fx.shake - 9.0).abs() < 1e-9);
    }

    #[test]
    fn terminal_state_freezes_simulation() {
        let mut state = GameState::empty(GameConfig::default(), 3);
        // No guards alive: the first evaluation ends the run.
        assert_eq!(state.step(HeldKeys::new()), Outcome::Won);
        let x = state.dragon.x;
        let px = state.princess.x;
        let anim = state.dragon.anim;
        for _ in 0..30 {
            assert_eq!(state.step(HeldKeys::with(&[Key::Right, Key::Jump])), Outcome::Won);
        }
        assert_eq!(state.dragon.x, x);
        assert_eq!(state.princess.x, px);
        assert_eq!(state.dragon.anim, anim);
        assert!(!state.breathe_fire());
        assert!(state.fireballs.is_empty());
        assert!(state.status_line().starts_with("VICTORY"));
    }

    #[test]
    fn breathe_fire_faces_the_dragon_direction() {
        let mut state = GameState::empty(GameConfig::default(), 3);
        assert!(state.breathe_fire());
        let fb = &state.fireballs[0];
        assert_eq!(fb.x, state.dragon.x + 80.0);
        assert_eq!(fb.vx, 15.0);

        state.dragon.facing = Facing::Left;
        state.breathe_fire();
        let fb = &state.fireballs[1];
        assert_eq!(fb.x, state.dragon.x - 20.0);
        assert_eq!(fb.vx, -15.0);
        assert_eq!(fb.y, state.dragon.y + 30.0);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "invalid config")]
    fn world_narrower_than_the_dragon_is_rejected() {
        let config = GameConfig {
            world_width: 40.0,
            ..GameConfig::default()
        };
        GameState::empty(config, 3);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "invalid config")]
    fn zero_top_speed_is_rejected() {
        let config = GameConfig {
            max_speed: 0.0,
            ..GameConfig::default()
        };
        GameState::new(config, 3);
    }

    #[test]
    fn status_line_reports_distance_to_gate() {
        let mut state = GameState::empty(GameConfig::default(), 3);
        state.guards.push(far_guard(3990.0));
        state.guards.push(Guard {
            alive: false,
            ..far_guard(2000.0)
        });
        assert_eq!(
            state.status_line(),
            "Points: 0 | Defenders Remaining: 1 | Distance to Gate: 3000m"
        );
    }
}
