// Castle level layout: obstacles on the floor, floating platforms, guards and
// background scenery. Obstacle kinds/sizes and guard placement are drawn from
// the run's seeded RNG; everything else sits on a fixed grid.

use log::debug;

use super::actors::Guard;
use crate::config::GameConfig;
use crate::rng::SimRng;

const OBSTACLE_COUNT: usize = 15;
const OBSTACLE_START_X: f64 = 600.0;
const OBSTACLE_SPACING: f64 = 250.0;
const OBSTACLE_JITTER: f64 = 100.0;
/// Obstacles stand on the floor surface, this far below the guards' y.
const FLOOR_SURFACE_OFFSET: f64 = 50.0;

const PLATFORM_COUNT: usize = 10;
const PLATFORM_START_X: f64 = 800.0;
const PLATFORM_SPACING: f64 = 400.0;
const PLATFORM_Y: f64 = 180.0;
const PLATFORM_W: f64 = 120.0;
const PLATFORM_H: f64 = 20.0;

const GUARD_COUNT: usize = 20;
const GUARD_SPAWN_X: f64 = 1000.0;
const GUARD_SPAWN_SPAN: f64 = 2500.0;
const GUARD_BASE_SPEED: f64 = 1.0;
const GUARD_SPEED_SPAN: f64 = 1.5;

const PILLAR_COUNT: usize = 20;
const PILLAR_SPACING: f64 = 400.0;
const TORCH_Y: f64 = 150.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ObstacleKind {
    Stone,
    Crystal,
    Crate,
    Spikes,
}

impl ObstacleKind {
    pub const ALL: [ObstacleKind; 4] = [
        ObstacleKind::Stone,
        ObstacleKind::Crystal,
        ObstacleKind::Crate,
        ObstacleKind::Spikes,
    ];

    /// Lethal obstacles knock the dragon back instead of blocking it.
    pub fn is_lethal(self) -> bool {
        matches!(self, ObstacleKind::Spikes)
    }

    fn size(self, rng: &mut SimRng) -> (f64, f64) {
        match self {
            ObstacleKind::Crystal => (40.0, 80.0),
            ObstacleKind::Crate => (70.0, 70.0),
            ObstacleKind::Spikes => (80.0, 30.0),
            ObstacleKind::Stone => (60.0 + rng.unit() * 40.0, 40.0 + rng.unit() * 30.0),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Obstacle {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    pub kind: ObstacleKind,
}

/// One-way platform: only its top edge is solid.
#[derive(Clone, Debug, PartialEq)]
pub struct Platform {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scenery {
    pub pillars: Vec<f64>,
    pub torches: Vec<(f64, f64)>,
}

pub struct Level {
    pub obstacles: Vec<Obstacle>,
    pub platforms: Vec<Platform>,
    pub guards: Vec<Guard>,
    pub scenery: Scenery,
}

impl Level {
    /// y of the floor surface obstacles stand on.
    pub fn floor_surface(cfg: &GameConfig) -> f64 {
        cfg.ground_y + FLOOR_SURFACE_OFFSET
    }
}

pub fn generate(cfg: &GameConfig, rng: &mut SimRng) -> Level {
    let floor = Level::floor_surface(cfg);

    let obstacles: Vec<Obstacle> = (0..OBSTACLE_COUNT)
        .map(|i| {
            let kind = ObstacleKind::ALL[rng.index(ObstacleKind::ALL.len())];
            let (w, h) = kind.size(rng);
            let x = OBSTACLE_START_X + i as f64 * OBSTACLE_SPACING + rng.unit() * OBSTACLE_JITTER;
            Obstacle {
                x,
                y: floor - h,
                w,
                h,
                kind,
            }
        })
        .collect();

    let platforms = (0..PLATFORM_COUNT)
        .map(|i| Platform {
            x: PLATFORM_START_X + i as f64 * PLATFORM_SPACING,
            y: PLATFORM_Y,
            w: PLATFORM_W,
            h: PLATFORM_H,
        })
        .collect();

    let guards = (0..GUARD_COUNT)
        .map(|_| {
            let x = GUARD_SPAWN_X + rng.unit() * GUARD_SPAWN_SPAN;
            let speed = GUARD_BASE_SPEED + rng.unit() * GUARD_SPEED_SPAN;
            Guard::new(x, cfg.ground_y, speed)
        })
        .collect();

    let scenery = Scenery {
        pillars: (0..PILLAR_COUNT)
            .map(|i| i as f64 * PILLAR_SPACING + PILLAR_SPACING / 2.0)
            .collect(),
        torches: (0..PILLAR_COUNT)
            .map(|i| (i as f64 * PILLAR_SPACING + PILLAR_SPACING, TORCH_Y))
            .collect(),
    };

    let spikes = obstacles.iter().filter(|o| o.kind.is_lethal()).count();
    debug!(
        "level: {} obstacles ({spikes} spikes), {PLATFORM_COUNT} platforms, {GUARD_COUNT} guards",
        obstacles.len()
    );

    Level {
        obstacles,
        platforms,
        guards,
        scenery,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_layout() {
        let cfg = GameConfig::default();
        let a = generate(&cfg, &mut SimRng::new(2024));
        let b = generate(&cfg, &mut SimRng::new(2024));
        assert_eq!(a.obstacles, b.obstacles);
        assert_eq!(a.guards, b.guards);
    }

    #[test]
    fn obstacles_rest_on_the_floor() {
        let cfg = GameConfig::default();
        let level = generate(&cfg, &mut SimRng::new(5));
        assert_eq!(level.obstacles.len(), OBSTACLE_COUNT);
        for (i, ob) in level.obstacles.iter().enumerate() {
            assert!((ob.y + ob.h - 330.0).abs() < 1e-9);
            let slot = OBSTACLE_START_X + i as f64 * OBSTACLE_SPACING;
            assert!(ob.x >= slot && ob.x < slot + OBSTACLE_JITTER);
            match ob.kind {
                ObstacleKind::Crystal => assert_eq!((ob.w, ob.h), (40.0, 80.0)),
                ObstacleKind::Crate => assert_eq!((ob.w, ob.h), (70.0, 70.0)),
                ObstacleKind::Spikes => assert_eq!((ob.w, ob.h), (80.0, 30.0)),
                ObstacleKind::Stone => {
                    assert!((60.0..100.0).contains(&ob.w));
                    assert!((40.0..70.0).contains(&ob.h));
                }
            }
        }
    }

    #[test]
    fn guards_spawn_alive_inside_their_band() {
        let cfg = GameConfig::default();
        let level = generate(&cfg, &mut SimRng::new(11));
        assert_eq!(level.guards.len(), GUARD_COUNT);
        for g in &level.guards {
            assert!(g.alive);
            assert!((1000.0..3500.0).contains(&g.x));
            assert!((1.0..2.5).contains(&g.speed));
            assert_eq!(g.y, cfg.ground_y);
        }
    }

    #[test]
    fn fixed_grid_for_platforms_and_scenery() {
        let cfg = GameConfig::default();
        let level = generate(&cfg, &mut SimRng::new(0));
        assert_eq!(level.platforms.len(), PLATFORM_COUNT);
        assert_eq!(level.platforms[1].x, 1200.0);
        assert_eq!(level.scenery.pillars[0], 200.0);
        assert_eq!(level.scenery.torches[0], (400.0, 150.0));
        assert_eq!(level.scenery.pillars.len(), PILLAR_COUNT);
    }

    #[test]
    fn only_spikes_are_lethal() {
        let lethal: Vec<_> = ObstacleKind::ALL.iter().filter(|k| k.is_lethal()).collect();
        assert_eq!(lethal, vec![&ObstacleKind::Spikes]);
    }
}
