//! Pixel-block sprites as (color, x, y, w, h) rect lists in sprite-local space.

use web_sys::CanvasRenderingContext2d;

pub type Rect = (&'static str, f64, f64, f64, f64);

/// 100x100, facing right.
pub const DRAGON: &[Rect] = &[
    ("#22c55e", 20.0, 50.0, 60.0, 30.0), // body
    ("#22c55e", 60.0, 25.0, 30.0, 30.0), // head
    ("#22c55e", 5.0, 60.0, 15.0, 15.0),  // tail
    ("#166534", 30.0, 30.0, 20.0, 20.0), // wing
    ("#000", 65.0, 30.0, 25.0, 4.0),     // brow
    ("#ef4444", 70.0, 38.0, 6.0, 6.0),
    ("#ef4444", 85.0, 38.0, 6.0, 6.0),
    ("#f8fafc", 65.0, 15.0, 6.0, 10.0), // horns
    ("#f8fafc", 85.0, 15.0, 6.0, 10.0),
];

/// 48x48.
pub const GUARD: &[Rect] = &[
    ("#64748b", 14.0, 15.0, 20.0, 33.0), // armour
    ("#94a3b8", 12.0, 12.0, 24.0, 15.0), // helmet
    ("#1e293b", 15.0, 18.0, 18.0, 3.0),  // visor
    ("#78350f", 38.0, 10.0, 4.0, 38.0),  // spear shaft
    ("#cbd5e1", 36.0, 0.0, 8.0, 10.0),   // spear tip
];

/// 48x48.
pub const PRINCESS: &[Rect] = &[
    ("#ec4899", 10.0, 25.0, 28.0, 23.0), // dress
    ("#fde68a", 12.0, 8.0, 24.0, 17.0),  // hair
    ("#fef3c7", 18.0, 12.0, 12.0, 12.0), // face
    ("#eab308", 16.0, 4.0, 16.0, 4.0),   // crown
];

pub const DRAGON_SIZE: f64 = 100.0;

pub fn draw(ctx: &CanvasRenderingContext2d, sprite: &[Rect], x: f64, y: f64) {
    for &(color, rx, ry, w, h) in sprite {
        ctx.set_fill_style_str(color);
        ctx.fill_rect(x + rx, y + ry, w, h);
    }
}

/// Same sprite mirrored around its own vertical centre line.
pub fn draw_mirrored(ctx: &CanvasRenderingContext2d, sprite: &[Rect], x: f64, y: f64, width: f64) {
    for &(color, rx, ry, w, h) in sprite {
        ctx.set_fill_style_str(color);
        ctx.fill_rect(x + width - rx - w, y + ry, w, h);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fits(sprite: &[Rect], size: f64) -> bool {
        sprite
            .iter()
            .all(|&(_, x, y, w, h)| x >= 0.0 && y >= 0.0 && x + w <= size && y + h <= size)
    }

    #[test]
    fn sprites_fit_their_boxes() {
        assert!(fits(DRAGON, DRAGON_SIZE));
        assert!(fits(GUARD, 48.0));
        assert!(fits(PRINCESS, 48.0));
    }
}
