//! Fly-to-dock transitions played before a close or minimize is committed.
//!
//! A [`DockTransition`] is planned from the rendered window rectangle, applied as inline style
//! overrides, and after [`DockTransition::duration`] the container dispatches
//! [`DockTransition::commit_action`].

use std::time::Duration;

use crate::{
    interaction::{ViewportSize, WindowPosition},
    model::WindowId,
    reducer::DesktopAction,
};

/// Distance of the dock target point above the bottom edge of the viewport.
pub const DOCK_ANCHOR_OFFSET_PX: f64 = 40.0;

const CLOSE_SCALE: f64 = 0.1;
const CLOSE_OPACITY: f64 = 0.0;
const CLOSE_DURATION_MS: u64 = 350;
const CLOSE_EASING: &str = "cubic-bezier(0.55, 0.055, 0.675, 0.19)";

const MINIMIZE_SCALE: f64 = 0.15;
const MINIMIZE_OPACITY: f64 = 0.5;
const MINIMIZE_DURATION_MS: u64 = 400;
const MINIMIZE_EASING: &str = "cubic-bezier(0.645, 0.045, 0.355, 1)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DockTransitionKind {
    Close,
    Minimize,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
/// Viewport-relative bounding box of a rendered window.
pub struct ElementRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ElementRect {
    fn center(&self) -> (f64, f64) {
        (self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DockTransition {
    pub kind: DockTransitionKind,
    /// Translation from the window's current position to the dock point.
    pub delta_x: f64,
    pub delta_y: f64,
    pub scale: f64,
    pub opacity: f64,
    pub duration_ms: u64,
    pub easing: &'static str,
}

/// Point on screen the window shrinks toward.
pub fn dock_point(viewport: ViewportSize) -> (f64, f64) {
    (
        viewport.width / 2.0,
        viewport.height - DOCK_ANCHOR_OFFSET_PX,
    )
}

impl DockTransition {
    pub fn plan(kind: DockTransitionKind, rect: ElementRect, viewport: ViewportSize) -> Self {
        let (center_x, center_y) = rect.center();
        let (dock_x, dock_y) = dock_point(viewport);
        let (scale, opacity, duration_ms, easing) = match kind {
            DockTransitionKind::Close => {
                (CLOSE_SCALE, CLOSE_OPACITY, CLOSE_DURATION_MS, CLOSE_EASING)
            }
            DockTransitionKind::Minimize => (
                MINIMIZE_SCALE,
                MINIMIZE_OPACITY,
                MINIMIZE_DURATION_MS,
                MINIMIZE_EASING,
            ),
        };
        Self {
            kind,
            delta_x: dock_x - center_x,
            delta_y: dock_y - center_y,
            scale,
            opacity,
            duration_ms,
            easing,
        }
    }

    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    /// Style overrides appended after the frame style while the transition runs.
    pub fn style(&self, from: WindowPosition) -> String {
        format!(
            "transform:translate({}px, {}px) scale({});opacity:{};transition:transform {ms}ms {ease}, opacity {ms}ms {ease};pointer-events:none;",
            from.x + self.delta_x,
            from.y + self.delta_y,
            self.scale,
            self.opacity,
            ms = self.duration_ms,
            ease = self.easing,
        )
    }

    /// Store command issued once the visual phase completes.
    pub fn commit_action(&self, window_id: WindowId) -> DesktopAction {
        self.kind.commit_action(window_id)
    }
}

impl DockTransitionKind {
    pub fn commit_action(self, window_id: WindowId) -> DesktopAction {
        match self {
            Self::Close => DesktopAction::CloseWindow { window_id },
            Self::Minimize => DesktopAction::MinimizeWindow { window_id },
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const VIEWPORT: ViewportSize = ViewportSize {
        width: 1200.0,
        height: 800.0,
    };

    fn rect() -> ElementRect {
        ElementRect {
            left: 100.0,
            top: 100.0,
            width: 400.0,
            height: 300.0,
        }
    }

    #[test]
    fn close_plan_targets_dock_point() {
        let plan = DockTransition::plan(DockTransitionKind::Close, rect(), VIEWPORT);
        assert_eq!(dock_point(VIEWPORT), (600.0, 760.0));
        assert_eq!((plan.delta_x, plan.delta_y), (300.0, 510.0));
        assert_eq!(plan.scale, 0.1);
        assert_eq!(plan.opacity, 0.0);
        assert_eq!(plan.duration(), Duration::from_millis(350));
    }

    #[test]
    fn minimize_plan_is_slower_and_half_visible() {
        let plan = DockTransition::plan(DockTransitionKind::Minimize, rect(), VIEWPORT);
        assert_eq!(plan.scale, 0.15);
        assert_eq!(plan.opacity, 0.5);
        assert_eq!(plan.duration_ms, 400);
    }

    #[test]
    fn commit_actions_match_kind() {
        let close = DockTransition::plan(DockTransitionKind::Close, rect(), VIEWPORT);
        let minimize = DockTransition::plan(DockTransitionKind::Minimize, rect(), VIEWPORT);
        assert_eq!(
            close.commit_action(WindowId::Photos),
            DesktopAction::CloseWindow {
                window_id: WindowId::Photos
            }
        );
        assert_eq!(
            minimize.commit_action(WindowId::Photos),
            DesktopAction::MinimizeWindow {
                window_id: WindowId::Photos
            }
        );
    }

    #[test]
    fn style_offsets_from_current_position() {
        let plan = DockTransition::plan(DockTransitionKind::Close, rect(), VIEWPORT);
        let style = plan.style(WindowPosition { x: 10.0, y: -10.0 });
        assert!(style.starts_with("transform:translate(310px, 500px) scale(0.1);opacity:0;"));
    }
}
