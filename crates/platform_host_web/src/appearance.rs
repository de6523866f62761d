//! Document-level appearance hooks: system color-scheme query and the root theme class.

use platform_host::ThemePreference;

/// Class toggled on `<html>` while the dark theme is active.
pub const DARK_THEME_CLASS: &str = "dark";

/// Whether the browser reports `prefers-color-scheme: dark`. Always `false` off-browser.
pub fn system_prefers_dark() -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map(|query| query.matches())
            .unwrap_or(false)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        false
    }
}

/// Adds or removes [`DARK_THEME_CLASS`] on the document element.
///
/// # Errors
///
/// Returns an error when the document is unavailable or the class list rejects the change.
pub fn apply_document_theme(theme: ThemePreference) -> Result<(), String> {
    #[cfg(target_arch = "wasm32")]
    {
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
            .ok_or_else(|| "document element unavailable".to_string())?;
        let classes = root.class_list();
        let result = if theme.is_dark() {
            classes.add_1(DARK_THEME_CLASS)
        } else {
            classes.remove_1(DARK_THEME_CLASS)
        };
        result.map_err(|e| format!("theme class update failed: {e:?}"))
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = theme;
        Ok(())
    }
}
