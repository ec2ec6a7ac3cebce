use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Document;

use crate::{
    config::ToggleConfig,
    error::ToggleError,
    state::theme::ThemePreferenceToggle,
    utils::{
        dom::{self, DomSurface},
        storage::{self, LocalStorageStore, PreferenceStore},
    },
};

pub type BrowserToggle = ThemePreferenceToggle<Box<dyn PreferenceStore>, DomSurface>;

/// Installs the toggle once the document has been parsed.
pub fn attach(config: ToggleConfig) -> Result<(), ToggleError> {
    let document = dom::document()?;
    let ready_state = document.ready_state();
    attach_to(&document, &ready_state, config)
}

fn attach_to(
    document: &Document,
    ready_state: &str,
    config: ToggleConfig,
) -> Result<(), ToggleError> {
    if ready_state != "loading" {
        return install(&config).map(|_| ());
    }

    let closure = Closure::once(move || {
        if let Err(err) = install(&config) {
            log::error!("Theme toggle not installed: {}", err);
        }
    });
    document
        .add_event_listener_with_callback("DOMContentLoaded", closure.as_ref().unchecked_ref())
        .map_err(|_| ToggleError::Listener("DOMContentLoaded".into()))?;
    closure.forget();
    Ok(())
}

pub fn install(config: &ToggleConfig) -> Result<Rc<BrowserToggle>, ToggleError> {
    let document = dom::document()?;
    let surface = DomSurface::locate(&document, config)?;
    let store = storage::store_or_memory(LocalStorageStore::new())?;
    let toggle = Rc::new(ThemePreferenceToggle::new(store, surface, config));
    toggle.initialize();

    let handler = Rc::clone(&toggle);
    let closure = Closure::wrap(Box::new(move |_: web_sys::Event| {
        handler.on_toggle();
    }) as Box<dyn FnMut(_)>);
    toggle
        .surface()
        .checkbox()
        .add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())
        .map_err(|_| ToggleError::Listener("change".into()))?;
    closure.forget();

    log::info!("Theme toggle installed on #{}", config.checkbox_id);
    Ok(toggle)
}
