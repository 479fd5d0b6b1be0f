use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures while wiring the game into the page. The simulation itself has no
/// error paths.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("no window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("game is not mounted")]
    NotMounted,
    #[error("canvas has no 2d context")]
    NoContext,
    #[error("DOM call failed: {0}")]
    Dom(String),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[cfg(feature = "serde_json")]
    #[error("config is not valid JSON: {0}")]
    ConfigJson(#[from] serde_json::Error),
}

impl From<JsValue> for GameError {
    fn from(value: JsValue) -> Self {
        GameError::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<GameError> for JsValue {
    fn from(err: GameError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
