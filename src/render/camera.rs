/// Left edge of the view: centred on the dragon, clamped to the world.
pub fn camera_x(dragon_x: f64, viewport_width: f64, world_width: f64) -> f64 {
    let max = (world_width - viewport_width).max(0.0);
    (dragon_x - viewport_width / 2.0).clamp(0.0, max)
}

/// Screen-space translation for this frame: camera plus a random shake.
/// `jitter_x` / `jitter_y` are unit samples in `[-0.5, 0.5)`.
pub fn view_offset(camera_x: f64, shake: f64, jitter_x: f64, jitter_y: f64) -> (f64, f64) {
    (-camera_x + jitter_x * shake, jitter_y * shake)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camera_follows_and_clamps() {
        assert_eq!(camera_x(100.0, 800.0, 4000.0), 0.0);
        assert_eq!(camera_x(2000.0, 800.0, 4000.0), 1600.0);
        assert_eq!(camera_x(3940.0, 800.0, 4000.0), 3200.0);
        // Viewport wider than the world pins to the origin.
        assert_eq!(camera_x(500.0, 5000.0, 4000.0), 0.0);
    }

    #[test]
    fn no_shake_no_jitter() {
        assert_eq!(view_offset(1600.0, 0.0, 0.4, -0.3), (-1600.0, 0.0));
        assert_eq!(view_offset(0.0, 10.0, 0.5, -0.5), (5.0, -5.0));
    }
}
