//! Canvas projection of a [`GameState`]. Every frame is drawn from scratch; the
//! renderer keeps no game state of its own apart from a cosmetic RNG for shake
//! and particle sizes.

use std::f64::consts::{PI, TAU};

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Element, HtmlCanvasElement};

use crate::error::GameError;
use crate::rng::SimRng;
use crate::world::{Facing, GameState, Level, Obstacle, ObstacleKind};

mod camera;
pub mod sprites;

pub use camera::{camera_x, view_offset};

const SKY: &str = "#1a1a2e";
const FLOOR: &str = "#2d2438";

pub struct Renderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    status: Element,
    rng: SimRng,
}

impl Renderer {
    pub fn new(canvas: HtmlCanvasElement, status: Element, seed: u64) -> Result<Self, GameError> {
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or(GameError::NoContext)?
            .dyn_into()
            .map_err(|_| GameError::NoContext)?;
        Ok(Self {
            canvas,
            ctx,
            status,
            rng: SimRng::new(seed),
        })
    }

    pub fn set_status(&self, text: &str) {
        self.status.set_text_content(Some(text));
    }

    pub fn draw(&mut self, state: &GameState) {
        let cfg = &state.config;
        let vw = self.canvas.width() as f64;
        let vh = self.canvas.height() as f64;
        let floor = Level::floor_surface(cfg);

        self.ctx.set_fill_style_str(SKY);
        self.ctx.fill_rect(0.0, 0.0, vw, vh);

        let cam = camera_x(state.dragon.x, vw, cfg.world_width);
        let (ox, oy) = view_offset(
            cam,
            state.fx.shake,
            self.rng.jitter(1.0),
            self.rng.jitter(1.0),
        );

        self.ctx.save();
        self.ctx.translate(ox, oy).ok();

        self.ctx.set_fill_style_str(FLOOR);
        self.ctx.fill_rect(0.0, floor, cfg.world_width, vh - floor + 20.0);
        self.draw_scenery(state, floor);

        for p in &state.platforms {
            self.ctx.set_fill_style_str("#555");
            self.ctx.fill_rect(p.x, p.y, p.w, p.h);
            self.ctx.set_fill_style_str("#777");
            self.ctx.fill_rect(p.x, p.y, p.w, 4.0);
        }
        for ob in &state.obstacles {
            draw_obstacle(&self.ctx, ob);
        }
        self.draw_particles(state);
        self.draw_gate(cfg.gate_x, floor);

        sprites::draw(&self.ctx, sprites::PRINCESS, state.princess.x, state.princess.y);
        for g in state.guards.iter().filter(|g| g.alive) {
            sprites::draw(&self.ctx, sprites::GUARD, g.x, g.y + g.bob.sin() * 5.0);
        }

        let d = &state.dragon;
        let breath = (d.anim as f64 * 0.1).sin() * 3.0;
        match d.facing {
            Facing::Right => sprites::draw(&self.ctx, sprites::DRAGON, d.x, d.y + breath),
            Facing::Left => sprites::draw_mirrored(
                &self.ctx,
                sprites::DRAGON,
                d.x,
                d.y + breath,
                sprites::DRAGON_SIZE,
            ),
        }

        let size = 20.0 + (d.anim as f64 * 0.5).sin() * 8.0;
        self.ctx.set_shadow_color("#ff4500");
        self.ctx.set_shadow_blur(10.0 + state.fx.shake);
        self.ctx.set_fill_style_str("#ffa500");
        for fb in &state.fireballs {
            circle(&self.ctx, fb.x + size / 2.0, fb.y + 20.0 + size / 2.0, size / 2.0);
        }
        self.ctx.set_shadow_blur(0.0);

        self.ctx.restore();
        self.set_status(&state.status_line());
    }

    fn draw_scenery(&self, state: &GameState, floor: f64) {
        let ctx = &self.ctx;
        ctx.set_fill_style_str("#24243a");
        for &x in &state.scenery.pillars {
            ctx.fill_rect(x, 0.0, 40.0, floor);
        }
        let flicker = state.dragon.anim as f64 * 0.3;
        for &(x, y) in &state.scenery.torches {
            ctx.set_fill_style_str("#5b3a1a");
            ctx.fill_rect(x - 3.0, y, 6.0, 16.0);
            ctx.set_fill_style_str("#ff9f1a");
            circle(ctx, x, y - 4.0, 5.0 + (flicker + x).sin() * 1.5);
        }
    }

    fn draw_particles(&mut self, state: &GameState) {
        for p in &state.fx.particles {
            let size = 2.0 + self.rng.unit() * 3.0;
            self.ctx.set_global_alpha(p.fade());
            self.ctx.set_fill_style_str(p.color);
            circle(&self.ctx, p.x, p.y, size / 2.0);
        }
        self.ctx.set_global_alpha(1.0);
    }

    fn draw_gate(&self, gate_x: f64, floor: f64) {
        let ctx = &self.ctx;
        ctx.set_shadow_color("rgba(0,0,0,0.8)");
        ctx.set_shadow_blur(50.0);
        ctx.begin_path();
        ctx.move_to(gate_x, floor);
        ctx.line_to(gate_x, floor - 120.0);
        ctx.arc(gate_x + 60.0, floor - 120.0, 60.0, PI, 0.0).ok();
        ctx.line_to(gate_x + 120.0, floor);
        ctx.close_path();
        ctx.set_fill_style_str("#331a00");
        ctx.fill();
        ctx.set_shadow_blur(0.0);
        ctx.set_stroke_style_str("#1a1a1a");
        ctx.set_line_width(6.0);
        ctx.stroke();
    }
}

fn draw_obstacle(ctx: &CanvasRenderingContext2d, ob: &Obstacle) {
    let (x, y, w, h) = (ob.x, ob.y, ob.w, ob.h);
    match ob.kind {
        ObstacleKind::Stone => {
            ctx.set_fill_style_str("#6b7280");
            ctx.fill_rect(x, y, w, h);
            ctx.set_fill_style_str("#4b5563");
            ctx.fill_rect(x, y, w, 6.0);
        }
        ObstacleKind::Crystal => {
            ctx.set_shadow_color("#3b82f6");
            ctx.set_shadow_blur(15.0);
            ctx.set_fill_style_str("#60a5fa");
            polygon(
                ctx,
                &[
                    (x + w * 0.5, y),
                    (x + w, y + h * 0.2),
                    (x + w * 0.8, y + h),
                    (x + w * 0.2, y + h),
                    (x, y + h * 0.2),
                ],
            );
            ctx.set_shadow_blur(0.0);
        }
        ObstacleKind::Crate => {
            ctx.set_fill_style_str("#a16207");
            ctx.fill_rect(x, y, w, h);
            ctx.set_stroke_style_str("#451a03");
            ctx.set_line_width(4.0);
            ctx.stroke_rect(x + 2.0, y + 2.0, w - 4.0, h - 4.0);
            ctx.begin_path();
            ctx.move_to(x + 6.0, y + 6.0);
            ctx.line_to(x + w - 6.0, y + h - 6.0);
            ctx.move_to(x + w - 6.0, y + 6.0);
            ctx.line_to(x + 6.0, y + h - 6.0);
            ctx.stroke();
        }
        ObstacleKind::Spikes => {
            ctx.set_fill_style_str("#94a3b8");
            let tooth = (w - 4.0) / 3.0;
            for i in 0..3 {
                let left = x + i as f64 * (tooth + 2.0);
                polygon(
                    ctx,
                    &[(left + tooth / 2.0, y), (left + tooth, y + h), (left, y + h)],
                );
            }
        }
    }
}

fn circle(ctx: &CanvasRenderingContext2d, x: f64, y: f64, r: f64) {
    ctx.begin_path();
    ctx.arc(x, y, r.max(0.0), 0.0, TAU).ok();
    ctx.fill();
}

fn polygon(ctx: &CanvasRenderingContext2d, points: &[(f64, f64)]) {
    let Some(&(x0, y0)) = points.first() else {
        return;
    };
    ctx.begin_path();
    ctx.move_to(x0, y0);
    for &(x, y) in &points[1..] {
        ctx.line_to(x, y);
    }
    ctx.close_path();
    ctx.fill();
}
