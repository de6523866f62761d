//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! On other targets every adapter degrades to an inert implementation so the runtime and its
//! tests build natively.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod appearance;
pub mod external_url;
pub mod storage;

pub use appearance::{apply_document_theme, system_prefers_dark, DARK_THEME_CLASS};
pub use external_url::WebExternalUrlService;
pub use storage::local_prefs::WebPrefsStore;

/// Preference store used by the desktop runtime in the browser.
pub fn prefs_store() -> WebPrefsStore {
    WebPrefsStore
}

/// External URL service used by the desktop runtime in the browser.
pub fn external_url_service() -> WebExternalUrlService {
    WebExternalUrlService
}
