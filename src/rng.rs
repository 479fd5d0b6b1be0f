//! Seeded random source shared by level generation and particle jitter.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }

    /// Uniform in `[0, 1)`.
    pub fn unit(&mut self) -> f64 {
        self.0.gen_range(0.0..1.0)
    }

    /// Uniform in `[-spread / 2, spread / 2)`.
    pub fn jitter(&mut self, spread: f64) -> f64 {
        (self.unit() - 0.5) * spread
    }

    pub fn index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.0.gen_range(0..len)
    }
}

/// A fresh seed for a new run. Uses the browser crypto source when the `rng`
/// feature is on, otherwise mixes the high-resolution clock.
pub fn fresh_seed() -> u64 {
    #[cfg(feature = "rng")]
    {
        let mut buf = [0u8; 8];
        if getrandom::getrandom(&mut buf).is_ok() {
            return u64::from_le_bytes(buf);
        }
        log::warn!("getrandom unavailable, seeding from the clock");
    }
    clock_seed()
}

fn clock_seed() -> u64 {
    #[cfg(target_arch = "wasm32")]
    let now = web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0);
    #[cfg(not(target_arch = "wasm32"))]
    let now = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs_f64() * 1000.0)
        .unwrap_or(0.0);
    // One LCG step spreads the clock bits over the whole word.
    ((now * 1000.0) as u64)
        .wrapping_mul(6364136223846793005)
        .wrapping_add(1442695040888963407)
}
