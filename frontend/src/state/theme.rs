use std::cell::Cell;

use crate::{
    config::ToggleConfig,
    theme::Theme,
    utils::{dom::ThemeSurface, storage::PreferenceStore},
};

/// Keeps the stored preference, the page class and the checkbox in step.
pub struct ThemePreferenceToggle<S, D> {
    store: S,
    surface: D,
    storage_key: String,
    current: Cell<Theme>,
}

impl<S: PreferenceStore, D: ThemeSurface> ThemePreferenceToggle<S, D> {
    pub fn new(store: S, surface: D, config: &ToggleConfig) -> Self {
        Self {
            store,
            surface,
            storage_key: config.storage_key.clone(),
            current: Cell::new(Theme::default()),
        }
    }

    /// Applies the stored preference to the page. Runs once per page load.
    pub fn initialize(&self) -> Theme {
        let stored = match self.store.get(&self.storage_key) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("{}; falling back to light theme", err);
                None
            }
        };
        let theme = Theme::from_stored(stored.as_deref());
        self.surface.apply_theme(theme);
        self.surface.set_checked(theme.is_dark());
        self.current.set(theme);
        log::debug!("Initialized {} theme", theme);
        theme
    }

    /// Handles a `change` on the control: mirrors its checked state into the
    /// page, then persists it.
    pub fn on_toggle(&self) -> Theme {
        let theme = Theme::from_checked(self.surface.is_checked());
        self.surface.apply_theme(theme);
        self.current.set(theme);
        if let Err(err) = self.store.set(&self.storage_key, theme.as_str()) {
            log::warn!("{}; {} theme not persisted", err, theme);
        }
        log::debug!("Switched to {} theme", theme);
        theme
    }

    pub fn current(&self) -> Theme {
        self.current.get()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn surface(&self) -> &D {
        &self.surface
    }
}
