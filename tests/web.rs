// Browser tests; run with `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;

wasm_bindgen_test_configure!(run_in_browser);

fn element(id: &str) -> HtmlElement {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
        .and_then(|el| el.dyn_into().ok())
        .unwrap_or_else(|| panic!("#{id} missing"))
}

#[wasm_bindgen_test]
fn start_game_builds_the_page() {
    dragon_run::start_game().expect("start");

    let canvas: web_sys::HtmlCanvasElement = element("gameViewport").dyn_into().expect("canvas");
    assert_eq!((canvas.width(), canvas.height()), (800, 400));
    assert!(element("intro").hidden());
    assert!(!element("gameArea").hidden());
    let status = element("status").text_content().unwrap_or_default();
    assert!(status.starts_with("Run!"), "status was {status:?}");
}

#[wasm_bindgen_test]
fn restart_returns_to_the_intro() {
    dragon_run::start_game().expect("start");
    dragon_run::restart_game();
    assert!(!element("intro").hidden());
    assert!(element("gameArea").hidden());

    // Starting again reuses the mounted elements.
    dragon_run::start_game().expect("restart");
    // status, canvas, menu and help buttons
    assert_eq!(element("gameArea").child_element_count(), 4);
}

#[wasm_bindgen_test]
fn help_text_lists_the_controls() {
    let text = dragon_run::help_text();
    assert!(text.contains("Arrow Keys"));
    assert!(text.contains("Space"));
}

#[cfg(feature = "serde_json")]
#[wasm_bindgen_test]
fn bad_config_json_is_rejected() {
    assert!(dragon_run::start_game_with_config("{not json").is_err());
    assert!(dragon_run::start_game_with_config(r#"{"max_speed": 10.0}"#).is_ok());
}
