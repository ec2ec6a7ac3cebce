pub mod components;
pub mod config;
pub mod error;
pub mod state;
pub mod theme;
pub mod utils;

#[cfg(target_arch = "wasm32")]
pub mod bindings;

mod test_support;

pub use error::ToggleError;
pub use state::theme::ThemePreferenceToggle;
pub use theme::Theme;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }
    log::info!("Starting theme toggle (wasm)");

    let config = config::from_globals();
    match bindings::attach(config) {
        Err(err) if err.is_fatal() => log::error!("Theme toggle not installed: {}", err),
        Err(err) => log::warn!("Theme toggle degraded: {}", err),
        Ok(()) => {}
    }
}
