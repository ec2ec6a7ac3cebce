use serde::{Deserialize, Serialize};
use std::{convert::Infallible, fmt, str::FromStr};

pub const THEME_STORAGE_KEY: &str = "theme";
pub const CHECKBOX_ID: &str = "checkbox";
pub const DARK_MODE_CLASS: &str = "dark-mode";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Only the exact string `"dark"` selects dark; anything else, including
    /// no stored value at all, falls back to light.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn from_checked(checked: bool) -> Self {
        if checked {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Theme::from_stored(Some(s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_value_defaults_to_light() {
        assert_eq!(Theme::from_stored(None), Theme::Light);
        assert_eq!(Theme::default(), Theme::Light);
    }

    #[test]
    fn only_exact_dark_selects_dark() {
        assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
        for value in ["light", "", "Dark", "DARK", " dark", "dark ", "night", "true"] {
            assert_eq!(
                Theme::from_stored(Some(value)),
                Theme::Light,
                "unexpected theme for {:?}",
                value
            );
        }
    }

    #[test]
    fn checked_maps_to_dark() {
        assert_eq!(Theme::from_checked(true), Theme::Dark);
        assert_eq!(Theme::from_checked(false), Theme::Light);
        assert!(Theme::from_checked(true).is_dark());
        assert!(!Theme::from_checked(false).is_dark());
    }

    #[test]
    fn stored_strings_match_display() {
        assert_eq!(Theme::Dark.as_str(), "dark");
        assert_eq!(Theme::Light.to_string(), "light");
        assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert_eq!("sepia".parse::<Theme>().unwrap(), Theme::Light);
    }

    #[test]
    fn toggled_flips() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_value(Theme::Dark).unwrap(), serde_json::json!("dark"));
        let theme: Theme = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(theme, Theme::Light);
    }
}
