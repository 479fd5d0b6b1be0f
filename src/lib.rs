//! Dragon Run core crate.
//!
//! A side-scrolling castle chase: the dragon has to burn or trample every
//! guard before the princess walks out of the gate, without touching her.
//! The simulation (`world`) is plain Rust driven by a fixed-rate tick and is
//! fully testable natively; `render` projects it onto a canvas and `app` owns
//! the page (DOM, keyboard, buttons, interval timer).

use wasm_bindgen::prelude::*;

mod app;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod render;
pub mod rng;
pub mod world;

pub use config::GameConfig;
pub use error::GameError;
pub use input::{HeldKeys, Key};
pub use world::{GameState, Outcome};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

pub const HELP_TEXT: &str = "Controls:\n- Arrow Keys: Move & Jump\n- Space: Breathe Fire\n\nGoal:\nStop the princess and the defenders from reaching the tower gate!";

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    logging::init(log::LevelFilter::Info);

    // The page may not have a body yet; start_game() mounts lazily as well.
    if let Err(err) = app::mount() {
        log::warn!("deferred mount: {err}");
    }
}

// -----------------------------------------------------------------------------
// JS entrypoints
// -----------------------------------------------------------------------------

/// Start (or restart) a run with the current configuration.
#[wasm_bindgen]
pub fn start_game() -> Result<(), JsValue> {
    app::start(None).map_err(Into::into)
}

/// Start a run with tuning overrides given as JSON; unspecified fields keep
/// their defaults.
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn start_game_with_config(json: &str) -> Result<(), JsValue> {
    let config = GameConfig::from_json(json)?;
    app::start(Some(config)).map_err(Into::into)
}

/// Stop the loop and return to the intro screen.
#[wasm_bindgen]
pub fn restart_game() {
    app::back_to_menu();
}

#[wasm_bindgen]
pub fn help_text() -> String {
    HELP_TEXT.to_string()
}
