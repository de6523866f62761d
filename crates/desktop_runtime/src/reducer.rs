//! Reducer actions, side-effect intents, and transition logic for the desktop runtime.

mod appearance;

use platform_host::ThemePreference;

use crate::{
    model::{DesktopState, WindowId, WindowPayload},
    window_manager,
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Open (or reopen) a window on top with an optional payload.
    OpenWindow {
        /// Window to open.
        window_id: WindowId,
        /// Content for the window; dropped when addressed to another window.
        data: Option<WindowPayload>,
    },
    /// Close a window and clear its payload.
    CloseWindow {
        /// Window to close.
        window_id: WindowId,
    },
    /// Hide a window, keeping its stacking order.
    MinimizeWindow {
        /// Window to minimize.
        window_id: WindowId,
    },
    /// Unhide a minimized window and raise it.
    RestoreWindow {
        /// Window to restore.
        window_id: WindowId,
    },
    /// Flip the maximized flag.
    ToggleMaximize {
        /// Window to maximize or unmaximize.
        window_id: WindowId,
    },
    /// Raise an open window.
    BringToFront {
        /// Window to raise.
        window_id: WindowId,
    },
    /// Close when open, otherwise open with `data`.
    ToggleWindow {
        /// Window to toggle.
        window_id: WindowId,
        /// Payload used when opening.
        data: Option<WindowPayload>,
    },
    /// Close every window.
    CloseAllWindows,
    /// Replace a window payload in place.
    UpdateWindowData {
        /// Window whose payload is replaced.
        window_id: WindowId,
        /// New payload (`None` clears it).
        data: Option<WindowPayload>,
    },
    /// Switch between light and dark.
    ToggleTheme,
    /// Select a theme explicitly.
    SetTheme {
        /// Theme to apply and persist.
        theme: ThemePreference,
    },
    /// Apply the theme resolved at boot without persisting it.
    HydrateTheme {
        /// Resolved startup theme.
        theme: ThemePreference,
    },
    /// Open a URL outside the desktop in a new browser tab.
    OpenExternalUrl {
        /// Target address.
        url: String,
    },
    /// Navigate the top-level page (used for `mailto:` links).
    NavigateExternal {
        /// Target address.
        url: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the shell runtime to execute.
pub enum RuntimeEffect {
    /// Persist the theme preference.
    PersistTheme(ThemePreference),
    /// Update the document root theme class.
    ApplyTheme(ThemePreference),
    /// Open an external URL in a new tab.
    OpenExternalUrl(String),
    /// Navigate the top-level page.
    NavigateExternal(String),
}

/// Applies a [`DesktopAction`] to the desktop state and collects resulting side effects.
///
/// Window actions addressing identifiers missing from the registry leave the state unchanged.
pub fn reduce_desktop(state: &mut DesktopState, action: DesktopAction) -> Vec<RuntimeEffect> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::OpenWindow { window_id, data } => {
            window_manager::open_window(state, window_id, data);
        }
        DesktopAction::CloseWindow { window_id } => {
            window_manager::close_window(state, window_id);
        }
        DesktopAction::MinimizeWindow { window_id } => {
            window_manager::minimize_window(state, window_id);
        }
        DesktopAction::RestoreWindow { window_id } => {
            window_manager::restore_window(state, window_id);
        }
        DesktopAction::ToggleMaximize { window_id } => {
            window_manager::toggle_maximize(state, window_id);
        }
        DesktopAction::BringToFront { window_id } => {
            window_manager::bring_to_front(state, window_id);
        }
        DesktopAction::ToggleWindow { window_id, data } => {
            window_manager::toggle_window(state, window_id, data);
        }
        DesktopAction::CloseAllWindows => {
            window_manager::close_all_windows(state);
        }
        DesktopAction::UpdateWindowData { window_id, data } => {
            window_manager::update_window_data(state, window_id, data);
        }
        DesktopAction::OpenExternalUrl { url } => {
            effects.push(RuntimeEffect::OpenExternalUrl(url));
        }
        DesktopAction::NavigateExternal { url } => {
            effects.push(RuntimeEffect::NavigateExternal(url));
        }
        DesktopAction::ToggleTheme
        | DesktopAction::SetTheme { .. }
        | DesktopAction::HydrateTheme { .. } => {
            appearance::reduce_appearance_action(state, &action, &mut effects);
        }
    }
    effects
}
