use desktop_runtime::{
    finder::{finder_locations, open_file_action, FinderNav, FinderNode},
    navigation::{open_in_safari, safari_home},
    reduce_desktop, DesktopAction, DesktopState, WindowId, WindowPayload, INITIAL_Z_INDEX,
};
use pretty_assertions::assert_eq;

fn dispatch(state: &mut DesktopState, action: DesktopAction) {
    reduce_desktop(state, action);
}

fn open(state: &mut DesktopState, window_id: WindowId) {
    dispatch(
        state,
        DesktopAction::OpenWindow {
            window_id,
            data: None,
        },
    );
}

/// Applies a z-changing action and checks it took a value above every earlier one.
fn raise(state: &mut DesktopState, action: DesktopAction, window_id: WindowId) {
    let before = state.highest_z_index;
    dispatch(state, action);
    assert!(state.highest_z_index > before, "{window_id} was not raised");
    assert_eq!(
        state.window(window_id).map(|w| w.z_index),
        Some(state.highest_z_index)
    );
    assert!(state
        .windows
        .iter()
        .filter(|(id, _)| *id != window_id)
        .all(|(_, w)| w.z_index < state.highest_z_index));
}

#[test]
fn every_raise_takes_a_strictly_higher_z_index() {
    let mut state = DesktopState::default();
    assert_eq!(state.highest_z_index, INITIAL_Z_INDEX);

    for window_id in [WindowId::Finder, WindowId::Contact, WindowId::Photos] {
        raise(
            &mut state,
            DesktopAction::OpenWindow {
                window_id,
                data: None,
            },
            window_id,
        );
    }
    raise(
        &mut state,
        DesktopAction::BringToFront {
            window_id: WindowId::Finder,
        },
        WindowId::Finder,
    );
    raise(
        &mut state,
        DesktopAction::RestoreWindow {
            window_id: WindowId::Contact,
        },
        WindowId::Contact,
    );
    raise(
        &mut state,
        DesktopAction::OpenWindow {
            window_id: WindowId::Finder,
            data: None,
        },
        WindowId::Finder,
    );

    let before = state.clone();
    dispatch(
        &mut state,
        DesktopAction::BringToFront {
            window_id: WindowId::Finder,
        },
    );
    assert_eq!(state, before);
}

#[test]
fn minimize_then_restore_keeps_payload_and_comes_back_on_top() {
    let mut state = DesktopState::default();
    dispatch(&mut state, open_in_safari("https://example.com/docs", "Docs"));
    open(&mut state, WindowId::Resume);
    let payload = state.window(WindowId::Safari).and_then(|w| w.data.clone());
    assert!(matches!(payload, Some(WindowPayload::Browser(_))));

    dispatch(
        &mut state,
        DesktopAction::MinimizeWindow {
            window_id: WindowId::Safari,
        },
    );
    let safari = state.window(WindowId::Safari).cloned().unwrap_or_default();
    assert!(safari.is_open);
    assert!(!safari.is_visible());
    assert_eq!(safari.data, payload);

    raise(
        &mut state,
        DesktopAction::RestoreWindow {
            window_id: WindowId::Safari,
        },
        WindowId::Safari,
    );
    let safari = state.window(WindowId::Safari).cloned().unwrap_or_default();
    assert!(safari.is_visible());
    assert_eq!(safari.data, payload);
    assert_eq!(state.active_window, Some(WindowId::Safari));
}

#[test]
fn close_all_hides_everything() {
    let mut state = DesktopState::default();
    for window_id in WindowId::ALL {
        open(&mut state, window_id);
    }
    dispatch(&mut state, DesktopAction::CloseAllWindows);

    assert!(WindowId::ALL.into_iter().all(|id| !state.is_open(id)));
    assert_eq!(state.active_window, None);
}

#[test]
fn focusing_the_top_window_is_a_noop() {
    let mut state = DesktopState::default();
    open(&mut state, WindowId::Photos);
    let before = state.clone();

    dispatch(&mut state, DesktopAction::BringToFront { window_id: WindowId::Photos });
    dispatch(&mut state, DesktopAction::BringToFront { window_id: WindowId::Contact });
    assert_eq!(state, before);
}

#[test]
fn finder_link_opens_safari_and_home_clears_page() {
    let mut state = DesktopState::default();
    open(&mut state, WindowId::Finder);

    let locations = finder_locations();
    let mut nav = FinderNav::default();
    let folder_id = nav
        .items(&locations)
        .iter()
        .find_map(|node| match node {
            FinderNode::Folder(folder) => Some(folder.id),
            FinderNode::File(_) => None,
        })
        .expect("work holds a project folder");
    nav.enter_folder(folder_id);

    let link = nav
        .items(&locations)
        .iter()
        .find_map(|node| match node {
            FinderNode::File(file) if file.href.is_some() => Some(file.clone()),
            _ => None,
        })
        .expect("project folder holds a link");
    let action = open_file_action(&link).expect("link opens");
    assert_eq!(
        action,
        open_in_safari(link.href.as_deref().unwrap_or_default(), &link.name)
    );
    dispatch(&mut state, action);

    assert!(state.is_window_open("safari"));
    assert!(matches!(
        state.window_data("safari"),
        Some(WindowPayload::Browser(_))
    ));
    assert_eq!(state.active_window, Some(WindowId::Safari));

    dispatch(&mut state, safari_home());
    assert_eq!(state.window_data("safari"), None);
    assert!(state.is_window_open("safari"));
}
