//! Browser wiring: DOM lookup / creation, keyboard listeners, buttons and the
//! fixed-rate interval that drives [`GameState::step`].
//!
//! All browser-side state lives in the thread-local `APP`. Listeners and the
//! tick closure are registered once when the page is mounted and only ever
//! reach the game through that cell.

use std::cell::RefCell;

use log::{info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlCanvasElement, HtmlElement, KeyboardEvent, MouseEvent, Window};

use crate::HELP_TEXT;
use crate::config::GameConfig;
use crate::error::GameError;
use crate::input::{HeldKeys, Key};
use crate::render::Renderer;
use crate::rng::fresh_seed;
use crate::world::GameState;

const VIEWPORT_WIDTH: u32 = 800;
const VIEWPORT_HEIGHT: u32 = 400;
const START_STATUS: &str = "Run! Stop the princess! Arrow keys to move, Space to breathe fire.";

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

struct App {
    window: Window,
    config: GameConfig,
    state: Option<GameState>,
    held: HeldKeys,
    renderer: Renderer,
    intro: HtmlElement,
    game_area: HtmlElement,
    ticker: Closure<dyn FnMut()>,
    interval: Option<i32>,
}

impl App {
    fn start(&mut self, config: GameConfig) -> Result<(), GameError> {
        self.stop_timer();
        let seed = fresh_seed();
        self.state = Some(GameState::new(config.clone(), seed));
        self.config = config;
        self.held.clear();

        self.intro.set_hidden(true);
        self.game_area.set_hidden(false);
        self.renderer.set_status(START_STATUS);

        let handle = self.window.set_interval_with_callback_and_timeout_and_arguments_0(
            self.ticker.as_ref().unchecked_ref(),
            self.config.tick_interval_ms(),
        )?;
        self.interval = Some(handle);
        info!("game started (seed {seed})");
        Ok(())
    }

    fn back_to_menu(&mut self) {
        self.stop_timer();
        self.held.clear();
        self.intro.set_hidden(false);
        self.game_area.set_hidden(true);
        info!("back to menu");
    }

    fn stop_timer(&mut self) {
        if let Some(handle) = self.interval.take() {
            self.window.clear_interval_with_handle(handle);
        }
    }

    fn tick(&mut self) {
        let Some(state) = self.state.as_mut() else {
            return;
        };
        if !state.is_over() {
            state.step(self.held);
            self.renderer.draw(state);
        }
        if state.is_over() {
            self.stop_timer();
        }
    }

    /// Returns whether the key belongs to a running game (and so should not
    /// scroll the page).
    fn key_down(&mut self, key: Key) -> bool {
        self.held.press(key);
        let Some(state) = self.state.as_mut().filter(|s| !s.is_over()) else {
            return false;
        };
        if key == Key::Fire {
            state.breathe_fire();
        }
        true
    }

    fn key_up(&mut self, key: Key) {
        self.held.release(key);
    }
}

fn with_app<R>(f: impl FnOnce(&mut App) -> R) -> Option<R> {
    APP.with(|cell| cell.borrow_mut().as_mut().map(f))
}

/// Build (or adopt) the page elements and register listeners. Idempotent.
pub fn mount() -> Result<(), GameError> {
    if APP.with(|cell| cell.borrow().is_some()) {
        return Ok(());
    }
    let window = web_sys::window().ok_or(GameError::NoWindow)?;
    let doc = window.document().ok_or(GameError::NoDocument)?;
    let body: Element = doc.body().ok_or(GameError::NoBody)?.into();

    let intro = find_or_create(&doc, &body, "intro", "div", INTRO_STYLE)?;
    if intro.child_element_count() == 0 {
        intro.set_inner_html(
            "<h1 style='margin:0 0 8px 0;color:#22c55e;'>Dragon Run</h1>\
             <p style='margin:0 0 16px 0;'>The princess is heading for the gate. Stop her guards before she gets there.</p>",
        );
    }
    let start_btn = find_or_create(&doc, &intro, "startBtn", "button", BUTTON_STYLE)?;
    set_label(&start_btn, "Start");

    let game_area = find_or_create(&doc, &body, "gameArea", "div", GAME_AREA_STYLE)?;
    let status = find_or_create(&doc, &game_area, "status", "div", STATUS_STYLE)?;
    let canvas: HtmlCanvasElement = find_or_create(&doc, &game_area, "gameViewport", "canvas", CANVAS_STYLE)?
        .dyn_into()
        .map_err(|_| GameError::Dom("#gameViewport is not a canvas".into()))?;
    if canvas.width() != VIEWPORT_WIDTH {
        canvas.set_width(VIEWPORT_WIDTH);
        canvas.set_height(VIEWPORT_HEIGHT);
    }
    let restart_btn = find_or_create(&doc, &game_area, "restart", "button", BUTTON_STYLE)?;
    set_label(&restart_btn, "Menu");
    let help_btn = find_or_create(&doc, &game_area, "help", "button", BUTTON_STYLE)?;
    set_label(&help_btn, "How to play");

    let intro: HtmlElement = into_html(intro)?;
    let game_area: HtmlElement = into_html(game_area)?;
    intro.set_hidden(false);
    game_area.set_hidden(true);

    let renderer = Renderer::new(canvas, status, fresh_seed())?;
    let ticker = Closure::wrap(Box::new(move || {
        with_app(App::tick);
    }) as Box<dyn FnMut()>);

    register_listeners(&window, &start_btn, &restart_btn, &help_btn)?;

    APP.with(|cell| {
        cell.replace(Some(App {
            window,
            config: GameConfig::default(),
            state: None,
            held: HeldKeys::new(),
            renderer,
            intro,
            game_area,
            ticker,
            interval: None,
        }))
    });
    info!("page mounted");
    Ok(())
}

/// Start a new run, mounting the page first if needed.
pub fn start(config: Option<GameConfig>) -> Result<(), GameError> {
    mount()?;
    with_app(|app| {
        let config = config.unwrap_or_else(|| app.config.clone());
        app.start(config)
    })
    .unwrap_or(Err(GameError::NotMounted))
}

pub fn back_to_menu() {
    if with_app(App::back_to_menu).is_none() {
        warn!("back_to_menu before the page was mounted");
    }
}

fn register_listeners(
    window: &Window,
    start_btn: &Element,
    restart_btn: &Element,
    help_btn: &Element,
) -> Result<(), GameError> {
    {
        let closure = Closure::wrap(Box::new(move |evt: KeyboardEvent| {
            // Keys that aren't game controls are ignored.
            let Some(key) = Key::from_dom(&evt.key()) else {
                return;
            };
            if with_app(|app| app.key_down(key)).unwrap_or(false) {
                evt.prevent_default();
            }
        }) as Box<dyn FnMut(_)>);
        window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    {
        let closure = Closure::wrap(Box::new(move |evt: KeyboardEvent| {
            if let Some(key) = Key::from_dom(&evt.key()) {
                with_app(|app| app.key_up(key));
            }
        }) as Box<dyn FnMut(_)>);
        window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    {
        let closure = Closure::wrap(Box::new(move |_evt: MouseEvent| {
            if let Err(err) = start(None) {
                warn!("start failed: {err}");
            }
        }) as Box<dyn FnMut(_)>);
        start_btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    {
        let closure = Closure::wrap(Box::new(move |_evt: MouseEvent| {
            back_to_menu();
        }) as Box<dyn FnMut(_)>);
        restart_btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    {
        let window = window.clone();
        let closure = Closure::wrap(Box::new(move |_evt: MouseEvent| {
            window.alert_with_message(HELP_TEXT).ok();
        }) as Box<dyn FnMut(_)>);
        help_btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    Ok(())
}

/// Reuse a host-provided element by id, or create and append a styled one.
fn find_or_create(
    doc: &Document,
    parent: &Element,
    id: &str,
    tag: &str,
    style: &str,
) -> Result<Element, GameError> {
    if let Some(el) = doc.get_element_by_id(id) {
        return Ok(el);
    }
    let el = doc.create_element(tag)?;
    el.set_id(id);
    el.set_attribute("style", style)?;
    parent.append_child(&el)?;
    Ok(el)
}

fn set_label(el: &Element, label: &str) {
    if el.text_content().unwrap_or_default().is_empty() {
        el.set_text_content(Some(label));
    }
}

fn into_html(el: Element) -> Result<HtmlElement, GameError> {
    let id = el.id();
    el.dyn_into()
        .map_err(|_| GameError::Dom(format!("#{id} is not an HTML element")))
}

const INTRO_STYLE: &str = "max-width:560px; margin:80px auto; padding:24px; text-align:center; font-family:'Fira Code', monospace; color:#e5e7eb; background:rgba(0,0,0,0.42); border:1px solid #333; border-radius:12px;";
const GAME_AREA_STYLE: &str = "width:800px; margin:24px auto; font-family:'Fira Code', monospace; color:#ffd166;";
const STATUS_STYLE: &str = "padding:4px 8px; margin-bottom:8px; font-size:15px; background:rgba(0,0,0,0.42); border:1px solid #333; border-radius:6px; letter-spacing:0.5px;";
const CANVAS_STYLE: &str = "display:block; border:2px solid #222; border-radius:8px; background:#1a1a2e; box-shadow:0 0 32px 0 rgba(0,0,0,0.18);";
const BUTTON_STYLE: &str = "margin:8px 8px 0 0; padding:6px 14px; font-family:inherit; font-size:14px; cursor:pointer; background:#22c55e; color:#0b0b0b; border:none; border-radius:6px;";
