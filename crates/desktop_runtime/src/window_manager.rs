//! Window-manager transitions applied by the desktop reducer.
//!
//! Every function returns `true` when it changed the state. Identifiers missing from the registry
//! are ignored.

use crate::model::{DesktopState, WindowId, WindowPayload};

fn next_z_index(state: &mut DesktopState) -> u32 {
    state.highest_z_index += 1;
    state.highest_z_index
}

/// Drops payloads addressed to a different window.
fn accept_payload(window_id: WindowId, data: Option<WindowPayload>) -> Option<WindowPayload> {
    data.filter(|payload| payload.target() == window_id)
}

fn clear_active(state: &mut DesktopState, window_id: WindowId) {
    if state.active_window == Some(window_id) {
        state.active_window = None;
    }
}

/// Opens (or reopens) `window_id` on top with fresh flags and `data`.
pub fn open_window(
    state: &mut DesktopState,
    window_id: WindowId,
    data: Option<WindowPayload>,
) -> bool {
    if state.windows.get(window_id).is_none() {
        return false;
    }
    let z_index = next_z_index(state);
    let data = accept_payload(window_id, data);
    if let Some(window) = state.windows.get_mut(window_id) {
        window.is_open = true;
        window.is_minimized = false;
        window.is_maximized = false;
        window.z_index = z_index;
        window.data = data;
    }
    state.active_window = Some(window_id);
    true
}

/// Closes `window_id` and clears its flags and payload. Safe on a closed window.
pub fn close_window(state: &mut DesktopState, window_id: WindowId) -> bool {
    let Some(window) = state.windows.get_mut(window_id) else {
        return false;
    };
    let before = window.clone();
    window.is_open = false;
    window.is_minimized = false;
    window.is_maximized = false;
    window.data = None;
    let changed = *window != before;
    let was_active = state.active_window == Some(window_id);
    clear_active(state, window_id);
    changed || was_active
}

/// Hides `window_id` without touching its stacking order.
pub fn minimize_window(state: &mut DesktopState, window_id: WindowId) -> bool {
    let Some(window) = state.windows.get_mut(window_id) else {
        return false;
    };
    let changed = !window.is_minimized;
    window.is_minimized = true;
    let was_active = state.active_window == Some(window_id);
    clear_active(state, window_id);
    changed || was_active
}

/// Unhides `window_id` and raises it.
pub fn restore_window(state: &mut DesktopState, window_id: WindowId) -> bool {
    if state.windows.get(window_id).is_none() {
        return false;
    }
    let z_index = next_z_index(state);
    if let Some(window) = state.windows.get_mut(window_id) {
        window.is_minimized = false;
        window.z_index = z_index;
    }
    state.active_window = Some(window_id);
    true
}

/// Flips the maximized flag only.
pub fn toggle_maximize(state: &mut DesktopState, window_id: WindowId) -> bool {
    let Some(window) = state.windows.get_mut(window_id) else {
        return false;
    };
    window.is_maximized = !window.is_maximized;
    true
}

/// Raises an open window above every other window.
///
/// Closed windows and the window already holding the highest stacking order are left untouched,
/// so no new state is published for repeated focus clicks.
pub fn bring_to_front(state: &mut DesktopState, window_id: WindowId) -> bool {
    let Some(window) = state.windows.get(window_id) else {
        return false;
    };
    if !window.is_open || window.z_index == state.highest_z_index {
        return false;
    }
    let z_index = next_z_index(state);
    if let Some(window) = state.windows.get_mut(window_id) {
        window.z_index = z_index;
    }
    state.active_window = Some(window_id);
    true
}

/// Closes an open window, opens a closed one.
pub fn toggle_window(
    state: &mut DesktopState,
    window_id: WindowId,
    data: Option<WindowPayload>,
) -> bool {
    if state.is_open(window_id) {
        close_window(state, window_id)
    } else {
        open_window(state, window_id, data)
    }
}

/// Closes every window. Minimized and maximized flags are left as they were.
pub fn close_all_windows(state: &mut DesktopState) -> bool {
    let mut changed = state.active_window.take().is_some();
    for (_, window) in state.windows.iter_mut() {
        changed |= window.is_open || window.data.is_some();
        window.is_open = false;
        window.data = None;
    }
    changed
}

/// Replaces the payload of `window_id` without touching flags or stacking order.
pub fn update_window_data(
    state: &mut DesktopState,
    window_id: WindowId,
    data: Option<WindowPayload>,
) -> bool {
    let data = accept_payload(window_id, data);
    let Some(window) = state.windows.get_mut(window_id) else {
        return false;
    };
    if window.data == data {
        return false;
    }
    window.data = data;
    true
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{BrowserPage, ProjectRef, WindowState, INITIAL_Z_INDEX};

    fn page(url: &str) -> WindowPayload {
        WindowPayload::Browser(BrowserPage {
            url: url.to_string(),
            original_url: url.to_string(),
            title: url.to_string(),
            is_embedded: true,
        })
    }

    fn window(state: &DesktopState, id: WindowId) -> WindowState {
        state.window(id).cloned().expect("registered window")
    }

    #[test]
    fn open_raises_and_activates() {
        let mut state = DesktopState::default();
        assert!(open_window(&mut state, WindowId::Finder, None));

        let finder = window(&state, WindowId::Finder);
        assert!(finder.is_open);
        assert_eq!(finder.z_index, INITIAL_Z_INDEX + 1);
        assert_eq!(state.highest_z_index, INITIAL_Z_INDEX + 1);
        assert_eq!(state.active_window, Some(WindowId::Finder));
    }

    #[test]
    fn reopen_resets_flags_and_replaces_data() {
        let mut state = DesktopState::default();
        open_window(&mut state, WindowId::Safari, Some(page("https://a.dev")));
        toggle_maximize(&mut state, WindowId::Safari);
        minimize_window(&mut state, WindowId::Safari);

        open_window(&mut state, WindowId::Safari, Some(page("https://b.dev")));
        let safari = window(&state, WindowId::Safari);
        assert!(!safari.is_minimized);
        assert!(!safari.is_maximized);
        assert_eq!(safari.data, Some(page("https://b.dev")));
    }

    #[test]
    fn mismatched_payload_is_dropped() {
        let mut state = DesktopState::default();
        let project = WindowPayload::Project(ProjectRef {
            slug: "dsa".to_string(),
        });
        open_window(&mut state, WindowId::Safari, Some(project.clone()));
        assert_eq!(window(&state, WindowId::Safari).data, None);

        update_window_data(&mut state, WindowId::Safari, Some(project));
        assert_eq!(window(&state, WindowId::Safari).data, None);
    }

    #[test]
    fn close_clears_entry_and_active_window() {
        let mut state = DesktopState::default();
        open_window(&mut state, WindowId::Safari, Some(page("https://a.dev")));
        toggle_maximize(&mut state, WindowId::Safari);

        assert!(close_window(&mut state, WindowId::Safari));
        let safari = window(&state, WindowId::Safari);
        assert!(!safari.is_open && !safari.is_minimized && !safari.is_maximized);
        assert_eq!(safari.data, None);
        assert_eq!(state.active_window, None);

        assert!(!close_window(&mut state, WindowId::Safari));
    }

    #[test]
    fn minimize_keeps_z_and_clears_active() {
        let mut state = DesktopState::default();
        open_window(&mut state, WindowId::Photos, None);
        let z = window(&state, WindowId::Photos).z_index;

        minimize_window(&mut state, WindowId::Photos);
        assert_eq!(window(&state, WindowId::Photos).z_index, z);
        assert_eq!(state.active_window, None);
    }

    #[test]
    fn bring_to_front_on_top_window_is_a_no_op() {
        let mut state = DesktopState::default();
        open_window(&mut state, WindowId::Finder, None);
        let before = state.clone();

        assert!(!bring_to_front(&mut state, WindowId::Finder));
        assert_eq!(state, before);
    }

    #[test]
    fn bring_to_front_ignores_closed_windows() {
        let mut state = DesktopState::default();
        let before = state.clone();
        assert!(!bring_to_front(&mut state, WindowId::Terminal));
        assert_eq!(state, before);
    }

    #[test]
    fn toggle_window_flips_open_state() {
        let mut state = DesktopState::default();
        toggle_window(&mut state, WindowId::Contact, None);
        assert!(state.is_open(WindowId::Contact));
        toggle_window(&mut state, WindowId::Contact, None);
        assert!(!state.is_open(WindowId::Contact));
    }

    #[test]
    fn close_all_keeps_minimized_and_maximized_flags() {
        let mut state = DesktopState::default();
        open_window(&mut state, WindowId::Finder, None);
        open_window(&mut state, WindowId::Terminal, None);
        minimize_window(&mut state, WindowId::Finder);
        toggle_maximize(&mut state, WindowId::Terminal);

        assert!(close_all_windows(&mut state));
        assert_eq!(state.active_window, None);
        assert!(state.windows.iter().all(|(_, w)| !w.is_open));
        assert!(window(&state, WindowId::Finder).is_minimized);
        assert!(window(&state, WindowId::Terminal).is_maximized);
    }

    #[test]
    fn update_data_leaves_order_alone() {
        let mut state = DesktopState::default();
        open_window(&mut state, WindowId::Safari, None);
        open_window(&mut state, WindowId::Finder, None);
        let highest = state.highest_z_index;

        assert!(update_window_data(
            &mut state,
            WindowId::Safari,
            Some(page("https://a.dev"))
        ));
        assert_eq!(state.highest_z_index, highest);
        assert_eq!(state.active_window, Some(WindowId::Finder));
        assert!(!update_window_data(
            &mut state,
            WindowId::Safari,
            Some(page("https://a.dev"))
        ));
    }

    #[test]
    fn unregistered_windows_are_ignored() {
        let mut state = DesktopState::default();
        state.windows.remove(WindowId::Resume);
        let before = state.clone();

        assert!(!open_window(&mut state, WindowId::Resume, None));
        assert!(!restore_window(&mut state, WindowId::Resume));
        assert!(!toggle_maximize(&mut state, WindowId::Resume));
        assert_eq!(state, before);
    }
}
