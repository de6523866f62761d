//! Dock descriptors, click resolution, magnification, and placement rules.

use crate::{
    model::{DesktopState, WindowId},
    reducer::DesktopAction,
};

/// Dock entry that closes every window instead of opening one.
pub const TRASH_APP_ID: &str = "trash";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DockApp {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub can_open: bool,
}

impl DockApp {
    pub fn window_id(&self) -> Option<WindowId> {
        WindowId::from_key(self.id)
    }
}

pub const DOCK_APPS: &[DockApp] = &[
    DockApp {
        id: "finder",
        name: "Portfolio",
        icon: "finder.png",
        can_open: true,
    },
    DockApp {
        id: "safari",
        name: "Ask Me",
        icon: "safari.png",
        can_open: true,
    },
    DockApp {
        id: "photos",
        name: "Gallery",
        icon: "photos.png",
        can_open: true,
    },
    DockApp {
        id: "contact",
        name: "Contact",
        icon: "contact.png",
        can_open: true,
    },
    DockApp {
        id: "terminal",
        name: "Skills",
        icon: "terminal.png",
        can_open: true,
    },
    DockApp {
        id: "resume",
        name: "Resume",
        icon: "resume.png",
        can_open: true,
    },
    DockApp {
        id: TRASH_APP_ID,
        name: "Archive",
        icon: "trash.png",
        can_open: false,
    },
];

/// Action for a dock click, or `None` when the icon does nothing.
pub fn resolve_dock_click(app: &DockApp, state: &DesktopState) -> Option<DesktopAction> {
    if app.id == TRASH_APP_ID {
        return Some(DesktopAction::CloseAllWindows);
    }
    if !app.can_open {
        return None;
    }
    let window_id = app.window_id()?;
    let window = state.window(window_id)?;
    let action = match (window.is_open, window.is_minimized) {
        (true, true) => DesktopAction::RestoreWindow { window_id },
        (true, false) => DesktopAction::BringToFront { window_id },
        (false, _) => DesktopAction::OpenWindow {
            window_id,
            data: None,
        },
    };
    Some(action)
}

/// Whether the running-app dot shows under `app`.
pub fn is_indicator_lit(app: &DockApp, state: &DesktopState) -> bool {
    app.window_id().is_some_and(|id| state.is_open(id))
}

pub fn icon_scale(index: usize, hovered: Option<usize>) -> f64 {
    match hovered.map(|h| h.abs_diff(index)) {
        Some(0) => 1.4,
        Some(1) => 1.2,
        Some(2) => 1.1,
        _ => 1.0,
    }
}

pub fn transform_origin(index: usize, hovered: Option<usize>) -> &'static str {
    match hovered {
        Some(h) if index < h => "bottom right",
        Some(h) if index > h => "bottom left",
        _ => "bottom",
    }
}

pub fn icon_style(index: usize, hovered: Option<usize>, can_open: bool) -> String {
    format!(
        "transform:scale({});transform-origin:{};transition:transform 0.2s ease-out;opacity:{};cursor:{};",
        icon_scale(index, hovered),
        transform_origin(index, hovered),
        if can_open { 1.0 } else { 0.6 },
        if can_open { "pointer" } else { "default" },
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DockPlacement {
    pub bottom_px: i32,
    pub z_index: u32,
}

impl DockPlacement {
    pub fn style(&self) -> String {
        format!("bottom:{}px;z-index:{};", self.bottom_px, self.z_index)
    }
}

/// Moves the dock above maximized windows.
pub fn dock_placement(state: &DesktopState) -> DockPlacement {
    if state.has_maximized_window() {
        DockPlacement {
            bottom_px: 8,
            z_index: 9999,
        }
    } else {
        DockPlacement {
            bottom_px: 20,
            z_index: 50,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::reducer::reduce_desktop;

    fn app(id: &str) -> DockApp {
        *DOCK_APPS
            .iter()
            .find(|app| app.id == id)
            .expect("dock app")
    }

    #[test]
    fn trash_is_last_and_closes_everything() {
        let trash = DOCK_APPS.last().copied().expect("dock apps");
        assert_eq!(trash.id, TRASH_APP_ID);
        assert!(!trash.can_open);
        assert_eq!(
            resolve_dock_click(&trash, &DesktopState::default()),
            Some(DesktopAction::CloseAllWindows)
        );
    }

    #[test]
    fn click_follows_window_lifecycle() {
        let finder = app("finder");
        let mut state = DesktopState::default();

        let open = resolve_dock_click(&finder, &state).expect("open action");
        assert_eq!(
            open,
            DesktopAction::OpenWindow {
                window_id: WindowId::Finder,
                data: None
            }
        );
        reduce_desktop(&mut state, open);

        assert_eq!(
            resolve_dock_click(&finder, &state),
            Some(DesktopAction::BringToFront {
                window_id: WindowId::Finder
            })
        );

        reduce_desktop(
            &mut state,
            DesktopAction::MinimizeWindow {
                window_id: WindowId::Finder,
            },
        );
        assert_eq!(
            resolve_dock_click(&finder, &state),
            Some(DesktopAction::RestoreWindow {
                window_id: WindowId::Finder
            })
        );
    }

    #[test]
    fn non_openable_icons_do_nothing() {
        let locked = DockApp {
            can_open: false,
            ..app("photos")
        };
        assert_eq!(resolve_dock_click(&locked, &DesktopState::default()), None);
    }

    #[test]
    fn magnification_falls_off_with_distance() {
        let scales: Vec<f64> = (0..6).map(|i| icon_scale(i, Some(2))).collect();
        assert_eq!(scales, vec![1.1, 1.2, 1.4, 1.2, 1.1, 1.0]);
        assert_eq!(icon_scale(0, None), 1.0);
    }

    #[test]
    fn origins_lean_away_from_hovered_icon() {
        assert_eq!(transform_origin(1, Some(3)), "bottom right");
        assert_eq!(transform_origin(3, Some(3)), "bottom");
        assert_eq!(transform_origin(4, Some(3)), "bottom left");
        assert_eq!(transform_origin(4, None), "bottom");
    }

    #[test]
    fn placement_rises_over_maximized_windows() {
        let mut state = DesktopState::default();
        assert_eq!(
            dock_placement(&state),
            DockPlacement {
                bottom_px: 20,
                z_index: 50
            }
        );

        reduce_desktop(
            &mut state,
            DesktopAction::OpenWindow {
                window_id: WindowId::Terminal,
                data: None,
            },
        );
        reduce_desktop(
            &mut state,
            DesktopAction::ToggleMaximize {
                window_id: WindowId::Terminal,
            },
        );
        assert_eq!(dock_placement(&state).style(), "bottom:8px;z-index:9999;");
    }

    #[test]
    fn indicator_tracks_open_windows() {
        let mut state = DesktopState::default();
        let contact = app("contact");
        assert!(!is_indicator_lit(&contact, &state));
        reduce_desktop(
            &mut state,
            DesktopAction::OpenWindow {
                window_id: WindowId::Contact,
                data: None,
            },
        );
        assert!(is_indicator_lit(&contact, &state));
        assert!(!is_indicator_lit(&app(TRASH_APP_ID), &state));
    }
}
