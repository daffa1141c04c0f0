//! Kino Quality WASM - Quality Selector for Browser Players
//!
//! Runs the quality selector next to a JavaScript player:
//! - Menu entries built from the engine's level list
//! - Manual selection mapped onto per-level `enabled` flags
//! - HLS master playlist parsing for engines that don't expose names
//!
//! ## Integration with hls.js
//!
//! ```javascript
//! import init, { KinoQualitySelector } from '@kino/quality-wasm';
//!
//! await init();
//! const selector = new KinoQualitySelector('{"displayCurrentQuality": true}', 'vhs', true, 8);
//! const levels = hls.levels.map(l => ({ bandwidth: l.bitrate, width: l.width, height: l.height }));
//! const entries = JSON.parse(selector.on_renditions_discovered(JSON.stringify(levels)));
//! ```

use wasm_bindgen::prelude::*;

mod host;
mod selector;

pub use host::BrowserHost;
pub use selector::KinoQualitySelector;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&"[Kino Quality WASM] Initialized".into());
}

/// Library version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Map a core error onto a JavaScript error value
pub(crate) fn to_js_error(err: kino_quality::Error) -> JsValue {
    JsValue::from_str(&format!("[{}] {}", err.error_code(), err))
}
