pub mod runner;

pub use runner::WidgetRunner;

use std::cell::RefCell;

use glitch_signal::InputEvent;
use wasm_bindgen::prelude::*;

// The runner lives in a `thread_local!` cell and the exports are free
// functions, because wasm-bindgen cannot export a stateful struct the page
// loop can drive directly. The WASM module is single-threaded.
thread_local! {
    static RUNNER: RefCell<Option<WidgetRunner>> = RefCell::new(None);
}

fn with_runner<R>(f: impl FnOnce(&mut WidgetRunner) -> R) -> R {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let runner = borrow
            .as_mut()
            .expect("Widget not initialized. Call widget_init() first.");
        f(runner)
    })
}

/// Build the runner with the stock word bank. Call once before anything else.
#[wasm_bindgen]
pub fn widget_init(seed: u32) {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    match WidgetRunner::new(seed as u64) {
        Ok(runner) => {
            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });
            log::info!("glitch-signal: initialized");
        }
        Err(err) => {
            log::error!("glitch-signal: init failed: {err}");
        }
    }
}

/// Replace the word bank from a JSON string. A rejected bank is logged and
/// the current one stays in place.
#[wasm_bindgen]
pub fn widget_load_words(json: &str) {
    with_runner(|r| {
        if let Err(err) = r.load_words(json) {
            log::error!("glitch-signal: word bank rejected: {err}");
        }
    });
}

/// Advance one browser frame. `dt` is the elapsed time in seconds.
#[wasm_bindgen]
pub fn widget_tick(dt: f32) {
    with_runner(|r| r.tick(dt));
}

#[wasm_bindgen]
pub fn widget_pointer_down(x: f32, y: f32) {
    with_runner(|r| r.push_input(InputEvent::PointerDown { x, y }));
}

#[wasm_bindgen]
pub fn widget_pointer_up(x: f32, y: f32) {
    with_runner(|r| r.push_input(InputEvent::PointerUp { x, y }));
}

#[wasm_bindgen]
pub fn widget_pointer_move(x: f32, y: f32) {
    with_runner(|r| r.push_input(InputEvent::PointerMove { x, y }));
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_frame_ptr() -> *const f32 {
    with_runner(|r| r.frame_ptr())
}

#[wasm_bindgen]
pub fn get_frame_floats() -> u32 {
    with_runner(|r| r.frame_floats())
}

#[wasm_bindgen]
pub fn get_word_ptr() -> *const u8 {
    with_runner(|r| r.word_ptr())
}

#[wasm_bindgen]
pub fn get_word_len() -> u32 {
    with_runner(|r| r.word_len())
}

#[wasm_bindgen]
pub fn get_trigger() -> f64 {
    with_runner(|r| r.trigger())
}

#[wasm_bindgen]
pub fn get_color() -> u32 {
    with_runner(|r| r.color_index())
}

#[wasm_bindgen]
pub fn get_world_width() -> f32 {
    with_runner(|r| r.world_width())
}

#[wasm_bindgen]
pub fn get_world_height() -> f32 {
    with_runner(|r| r.world_height())
}
