//! Typed host-domain contracts shared by the portfolio desktop runtime and its browser adapters.
//!
//! The runtime only talks to the host through the traits exported here: lightweight preference
//! storage (used for the persisted theme) and external URL navigation. Concrete browser adapters
//! live in `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod external_url;
pub mod storage;
pub mod theme;

pub use external_url::{ExternalUrlFuture, ExternalUrlService, NoopExternalUrlService};
pub use storage::prefs::{MemoryPrefsStore, NoopPrefsStore, PrefsStore, PrefsStoreFuture};
pub use theme::{
    load_theme_preference, resolve_initial_theme, save_theme_preference, ThemeParseError,
    ThemePreference, THEME_PREF_KEY,
};
