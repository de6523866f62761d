//! Theme preference persistence through the host prefs store.

use platform_host::{load_theme_preference, save_theme_preference, ThemePreference};

use crate::host::DesktopHostContext;

/// Resolves the startup theme: stored preference, then the system color scheme, then light.
pub async fn load_theme(host: &DesktopHostContext, system_prefers_dark: bool) -> ThemePreference {
    let store = host.prefs_store();
    load_theme_preference(store.as_ref(), system_prefers_dark).await
}

/// Persists the theme preference.
pub async fn persist_theme(
    host: &DesktopHostContext,
    theme: ThemePreference,
) -> Result<(), String> {
    let store = host.prefs_store();
    save_theme_preference(store.as_ref(), theme).await
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use futures::executor::block_on;
    use platform_host::{MemoryPrefsStore, NoopExternalUrlService, THEME_PREF_KEY};
    use pretty_assertions::assert_eq;

    use super::*;

    fn host_with(store: MemoryPrefsStore) -> DesktopHostContext {
        DesktopHostContext::new(Rc::new(store), Rc::new(NoopExternalUrlService))
    }

    #[test]
    fn empty_store_follows_system_preference() {
        let host = host_with(MemoryPrefsStore::default());
        assert_eq!(block_on(load_theme(&host, true)), ThemePreference::Dark);
        assert_eq!(block_on(load_theme(&host, false)), ThemePreference::Light);
    }

    #[test]
    fn persisted_theme_wins_on_next_boot() {
        let store = MemoryPrefsStore::default();
        let host = host_with(store.clone());

        block_on(persist_theme(&host, ThemePreference::Dark)).expect("persist theme");
        assert_eq!(store.raw(THEME_PREF_KEY).as_deref(), Some("dark"));
        assert_eq!(block_on(load_theme(&host, false)), ThemePreference::Dark);
    }
}
