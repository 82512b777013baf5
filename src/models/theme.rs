//! Color theme preference.

use crate::config::THEME_STORAGE_KEY;
use crate::utils::dom;

/// The persisted light/dark preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Stored string form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse the stored string form; anything unrecognized is `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn toggled(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Read the persisted preference from localStorage, if any.
    pub fn load() -> Option<Self> {
        dom::storage_get(THEME_STORAGE_KEY).and_then(|s| Self::parse(&s))
    }

    /// Persist the preference to localStorage (best-effort).
    pub fn store(&self) {
        dom::storage_set(THEME_STORAGE_KEY, self.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_string_form() {
        assert_eq!(Theme::parse(Theme::Light.as_str()), Some(Theme::Light));
        assert_eq!(Theme::parse(Theme::Dark.as_str()), Some(Theme::Dark));
        assert_eq!(Theme::parse("solarized"), None);
    }

    #[test]
    fn toggling_flips_the_theme() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert!(Theme::Dark.is_dark());
        assert!(!Theme::Light.is_dark());
    }
}
