//! Host-side runtime helpers for executing reducer effects and querying browser environment state.

mod boot;
mod effects;

use std::rc::Rc;

use platform_host::{ExternalUrlService, PrefsStore};
use platform_host_web::{external_url_service, prefs_store};

use crate::{
    interaction::{ViewportSize, DEFAULT_VIEWPORT},
    reducer::RuntimeEffect,
    runtime_context::DesktopRuntimeContext,
};

#[derive(Clone)]
/// Host service bundle for desktop runtime side effects.
pub struct DesktopHostContext {
    prefs: Rc<dyn PrefsStore>,
    external_urls: Rc<dyn ExternalUrlService>,
}

impl Default for DesktopHostContext {
    fn default() -> Self {
        Self::new(Rc::new(prefs_store()), Rc::new(external_url_service()))
    }
}

impl DesktopHostContext {
    /// Builds a host bundle from explicit services.
    pub fn new(prefs: Rc<dyn PrefsStore>, external_urls: Rc<dyn ExternalUrlService>) -> Self {
        Self {
            prefs,
            external_urls,
        }
    }

    /// Returns the configured lightweight preference service.
    pub fn prefs_store(&self) -> Rc<dyn PrefsStore> {
        self.prefs.clone()
    }

    /// Returns the configured external URL service.
    pub fn external_url_service(&self) -> Rc<dyn ExternalUrlService> {
        self.external_urls.clone()
    }

    /// Installs boot-time theme hydration for the desktop provider.
    pub fn install_boot_hydration(&self, runtime: DesktopRuntimeContext) {
        boot::install_boot_hydration(self.clone(), runtime);
    }

    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    pub fn run_runtime_effect(&self, effect: RuntimeEffect) {
        effects::run_runtime_effect(self.clone(), effect);
    }

    /// Current browser viewport size, or [`DEFAULT_VIEWPORT`] off-browser.
    pub fn viewport_size(&self) -> ViewportSize {
        #[cfg(target_arch = "wasm32")]
        {
            let Some(window) = web_sys::window() else {
                return DEFAULT_VIEWPORT;
            };
            let read = |value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
                value.ok().and_then(|v| v.as_f64())
            };
            match (read(window.inner_width()), read(window.inner_height())) {
                (Some(width), Some(height)) => ViewportSize { width, height },
                _ => DEFAULT_VIEWPORT,
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            DEFAULT_VIEWPORT
        }
    }
}
