use serde::{Deserialize, Serialize};

use crate::{
    error::ToggleError,
    theme::{CHECKBOX_ID, DARK_MODE_CLASS, THEME_STORAGE_KEY},
};

const CONFIG_GLOBAL: &str = "__THEME_TOGGLE_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToggleConfig {
    pub storage_key: String,
    pub checkbox_id: String,
    pub dark_class: String,
}

impl Default for ToggleConfig {
    fn default() -> Self {
        Self {
            storage_key: THEME_STORAGE_KEY.to_string(),
            checkbox_id: CHECKBOX_ID.to_string(),
            dark_class: DARK_MODE_CLASS.to_string(),
        }
    }
}

impl ToggleConfig {
    pub fn from_json(raw: &str) -> Result<Self, ToggleError> {
        let cfg: Self =
            serde_json::from_str(raw).map_err(|err| ToggleError::Config(err.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// The id and class end up in `getElementById` and `classList`, which
    /// only take single non-empty tokens.
    fn validate(&self) -> Result<(), ToggleError> {
        for (field, value) in [
            ("checkbox_id", &self.checkbox_id),
            ("dark_class", &self.dark_class),
        ] {
            if value.is_empty() || value.chars().any(char::is_whitespace) {
                return Err(ToggleError::Config(format!(
                    "`{}` must be a single non-empty token, got {:?}",
                    field, value
                )));
            }
        }
        Ok(())
    }
}

fn json_from_window() -> Option<String> {
    // Expect optional global object: window.__THEME_TOGGLE_CONFIG = { storage_key: "..." }
    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &CONFIG_GLOBAL.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    js_sys::JSON::stringify(&any).ok()?.as_string()
}

/// Reads the page override, falling back to the defaults when none is set
/// or it cannot be parsed.
pub fn from_globals() -> ToggleConfig {
    let Some(raw) = json_from_window() else {
        return ToggleConfig::default();
    };
    match ToggleConfig::from_json(&raw) {
        Ok(cfg) => cfg,
        Err(err) => {
            log::warn!("{}; using default theme toggle config", err);
            ToggleConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_dom_contract() {
        let cfg = ToggleConfig::default();
        assert_eq!(cfg.storage_key, "theme");
        assert_eq!(cfg.checkbox_id, "checkbox");
        assert_eq!(cfg.dark_class, "dark-mode");
    }

    #[test]
    fn partial_json_keeps_remaining_defaults() {
        let cfg = ToggleConfig::from_json(r#"{"storage_key":"site-theme"}"#).unwrap();
        assert_eq!(cfg.storage_key, "site-theme");
        assert_eq!(cfg.checkbox_id, "checkbox");
        assert_eq!(cfg.dark_class, "dark-mode");
    }

    #[test]
    fn empty_object_is_default() {
        assert_eq!(ToggleConfig::from_json("{}").unwrap(), ToggleConfig::default());
    }

    #[test]
    fn malformed_json_is_config_error() {
        let err = ToggleConfig::from_json("{storage_key:").unwrap_err();
        assert!(matches!(err, ToggleError::Config(_)));
    }

    #[test]
    fn wrong_field_type_is_config_error() {
        let err = ToggleConfig::from_json(r#"{"storage_key":5}"#).unwrap_err();
        assert!(matches!(err, ToggleError::Config(_)));
    }

    #[test]
    fn blank_or_spaced_tokens_are_rejected() {
        for raw in [
            r#"{"dark_class":""}"#,
            r#"{"dark_class":"dark mode"}"#,
            r#"{"checkbox_id":""}"#,
            r#"{"checkbox_id":"theme\tbox"}"#,
        ] {
            let err = ToggleConfig::from_json(raw).unwrap_err();
            assert!(matches!(err, ToggleError::Config(_)), "accepted {}", raw);
        }
    }
}
