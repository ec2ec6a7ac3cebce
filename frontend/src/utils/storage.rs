use std::{cell::RefCell, collections::HashMap};

use web_sys::{Storage, Window};

use crate::error::ToggleError;

pub fn window() -> Result<Window, ToggleError> {
    web_sys::window().ok_or(ToggleError::NoWindow)
}

pub fn local_storage() -> Result<Storage, ToggleError> {
    window()?
        .local_storage()
        .map_err(|_| ToggleError::storage("localStorage access denied"))?
        .ok_or_else(|| ToggleError::storage("No localStorage"))
}

/// Key-value access to the persisted preference.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, ToggleError>;
    fn set(&self, key: &str, value: &str) -> Result<(), ToggleError>;
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>, ToggleError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ToggleError> {
        (**self).set(key, value)
    }
}

pub struct LocalStorageStore {
    storage: Storage,
}

impl LocalStorageStore {
    pub fn new() -> Result<Self, ToggleError> {
        Ok(Self {
            storage: local_storage()?,
        })
    }
}

impl PreferenceStore for LocalStorageStore {
    fn get(&self, key: &str) -> Result<Option<String>, ToggleError> {
        self.storage
            .get_item(key)
            .map_err(|_| ToggleError::storage(format!("Failed to read `{}`", key)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ToggleError> {
        self.storage
            .set_item(key, value)
            .map_err(|_| ToggleError::storage(format!("Failed to write `{}`", key)))
    }
}

/// Boxes an opened store. When only storage itself is unavailable the
/// preference is kept in memory for the session instead.
pub fn store_or_memory<S: PreferenceStore + 'static>(
    opened: Result<S, ToggleError>,
) -> Result<Box<dyn PreferenceStore>, ToggleError> {
    match opened {
        Ok(store) => Ok(Box::new(store)),
        Err(err) if !err.is_fatal() => {
            log::warn!("{}; theme preference kept for this session only", err);
            Ok(Box::new(MemoryStore::new()))
        }
        Err(err) => Err(err),
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }

    pub fn entry(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, ToggleError> {
        Ok(self.entry(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ToggleError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
