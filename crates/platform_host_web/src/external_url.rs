//! External URL adapter using `window.open` and `location.href`.

use platform_host::{ExternalUrlFuture, ExternalUrlService};

/// Window features passed to `window.open` so the new tab cannot reach back into the desktop.
pub const NEW_TAB_FEATURES: &str = "noopener,noreferrer";

#[derive(Debug, Clone, Copy, Default)]
/// Browser external URL service.
pub struct WebExternalUrlService;

fn open_in_new_tab(url: &str) -> Result<(), String> {
    #[cfg(target_arch = "wasm32")]
    {
        let window = web_sys::window().ok_or_else(|| "window unavailable".to_string())?;
        window
            .open_with_url_and_target_and_features(url, "_blank", NEW_TAB_FEATURES)
            .map(|_| ())
            .map_err(|e| format!("window.open failed: {e:?}"))
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = url;
        Ok(())
    }
}

fn navigate_current(url: &str) -> Result<(), String> {
    #[cfg(target_arch = "wasm32")]
    {
        let window = web_sys::window().ok_or_else(|| "window unavailable".to_string())?;
        window
            .location()
            .set_href(url)
            .map_err(|e| format!("location.href assignment failed: {e:?}"))
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = url;
        Ok(())
    }
}

impl ExternalUrlService for WebExternalUrlService {
    fn open_url<'a>(&'a self, url: &'a str) -> ExternalUrlFuture<'a, Result<(), String>> {
        Box::pin(async move { open_in_new_tab(url) })
    }

    fn navigate<'a>(&'a self, url: &'a str) -> ExternalUrlFuture<'a, Result<(), String>> {
        Box::pin(async move { navigate_current(url) })
    }
}
