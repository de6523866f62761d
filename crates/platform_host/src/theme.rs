//! Light/dark theme preference: the only durable user state of the portfolio desktop.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::storage::prefs::PrefsStore;

/// Storage key holding the persisted theme.
pub const THEME_PREF_KEY: &str = "portfolio-theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Color scheme applied to the document root.
pub enum ThemePreference {
    /// Light scheme (default).
    #[default]
    Light,
    /// Dark scheme.
    Dark,
}

impl ThemePreference {
    /// Stable storage token for this theme.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Returns the other theme.
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Whether this is the dark scheme.
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown theme `{0}`")]
/// Raised when a stored or requested theme token is neither `light` nor `dark`.
pub struct ThemeParseError(pub String);

impl FromStr for ThemePreference {
    type Err = ThemeParseError;

    /// Accepts bare tokens (`dark`) and JSON-quoted tokens (`"dark"`).
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let token = raw.trim().trim_matches('"');
        match token {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(ThemeParseError(raw.to_string())),
        }
    }
}

/// Picks the startup theme: a valid stored value wins, then the system dark preference, then light.
pub fn resolve_initial_theme(stored: Option<&str>, system_prefers_dark: bool) -> ThemePreference {
    if let Some(theme) = stored.and_then(|raw| raw.parse().ok()) {
        return theme;
    }
    if system_prefers_dark {
        ThemePreference::Dark
    } else {
        ThemePreference::Light
    }
}

/// Loads the startup theme from `store`, falling back per [`resolve_initial_theme`].
///
/// Store failures are treated as "nothing stored".
pub async fn load_theme_preference<S: PrefsStore + ?Sized>(
    store: &S,
    system_prefers_dark: bool,
) -> ThemePreference {
    let stored = store.load_pref(THEME_PREF_KEY).await.ok().flatten();
    resolve_initial_theme(stored.as_deref(), system_prefers_dark)
}

/// Persists `theme` as its bare token.
///
/// # Errors
///
/// Returns the store error when the write fails.
pub async fn save_theme_preference<S: PrefsStore + ?Sized>(
    store: &S,
    theme: ThemePreference,
) -> Result<(), String> {
    store.save_pref(THEME_PREF_KEY, theme.as_str()).await
}
