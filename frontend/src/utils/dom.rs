use std::cell::Cell;

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlInputElement};

use crate::{config::ToggleConfig, error::ToggleError, theme::Theme};

/// The two pieces of page state the theme is mirrored into: a class on the
/// document root and the checked state of the control.
pub trait ThemeSurface {
    fn apply_theme(&self, theme: Theme);
    fn set_checked(&self, checked: bool);
    fn is_checked(&self) -> bool;
}

pub fn document() -> Result<Document, ToggleError> {
    super::storage::window()?
        .document()
        .ok_or(ToggleError::NoDocument)
}

#[derive(Clone)]
pub struct DomSurface {
    body: HtmlElement,
    checkbox: HtmlInputElement,
    dark_class: String,
}

impl DomSurface {
    pub fn locate(document: &Document, config: &ToggleConfig) -> Result<Self, ToggleError> {
        let body = document.body().ok_or(ToggleError::NoBody)?;
        let element = document
            .get_element_by_id(&config.checkbox_id)
            .ok_or_else(|| ToggleError::MissingElement(config.checkbox_id.clone()))?;
        let checkbox = element
            .dyn_into::<HtmlInputElement>()
            .map_err(|_| ToggleError::NotCheckbox(config.checkbox_id.clone()))?;
        if !checkbox.type_().eq_ignore_ascii_case("checkbox") {
            return Err(ToggleError::NotCheckbox(config.checkbox_id.clone()));
        }
        Ok(Self {
            body,
            checkbox,
            dark_class: config.dark_class.clone(),
        })
    }

    pub fn checkbox(&self) -> &HtmlInputElement {
        &self.checkbox
    }

    pub fn has_dark_class(&self) -> bool {
        self.body.class_list().contains(&self.dark_class)
    }
}

impl ThemeSurface for DomSurface {
    fn apply_theme(&self, theme: Theme) {
        let list = self.body.class_list();
        let result = if theme.is_dark() {
            list.add_1(&self.dark_class)
        } else {
            list.remove_1(&self.dark_class)
        };
        if result.is_err() {
            log::warn!("Failed to update `{}` class on body", self.dark_class);
        }
    }

    fn set_checked(&self, checked: bool) {
        self.checkbox.set_checked(checked);
    }

    fn is_checked(&self) -> bool {
        self.checkbox.checked()
    }
}

#[derive(Debug, Default)]
pub struct MemorySurface {
    dark: Cell<bool>,
    checked: Cell<bool>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_dark_class(&self) -> bool {
        self.dark.get()
    }

    /// Simulates the user flipping the control before its `change` event fires.
    pub fn click(&self) {
        self.checked.set(!self.checked.get());
    }
}

impl ThemeSurface for MemorySurface {
    fn apply_theme(&self, theme: Theme) {
        self.dark.set(theme.is_dark());
    }

    fn set_checked(&self, checked: bool) {
        self.checked.set(checked);
    }

    fn is_checked(&self) -> bool {
        self.checked.get()
    }
}
