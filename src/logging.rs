//! `log` backend: `console_log` in the browser, `env_logger` natively.

use log::LevelFilter;

/// Install the backend once; later calls only adjust the level.
pub fn init(level: LevelFilter) {
    if install().is_err() {
        log::debug!("logger already installed");
    }
    log::set_max_level(level);
}

// The backend passes everything; `log::max_level` is the only gate.
#[cfg(target_arch = "wasm32")]
fn install() -> Result<(), log::SetLoggerError> {
    console_log::init_with_level(log::Level::Trace)
}

#[cfg(not(target_arch = "wasm32"))]
fn install() -> Result<(), log::SetLoggerError> {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Trace)
        .is_test(cfg!(test))
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Level;

    #[test]
    fn init_is_idempotent() {
        init(LevelFilter::Warn);
        assert!(!log::log_enabled!(Level::Info));
        init(LevelFilter::Info);
        assert_eq!(log::max_level(), LevelFilter::Info);
        assert!(log::log_enabled!(Level::Info));
        assert!(!log::log_enabled!(Level::Debug));
    }
}
