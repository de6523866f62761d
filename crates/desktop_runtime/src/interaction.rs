//! Container-local window interaction: drag sessions, bounds clamping, viewport reflow, and the
//! inline frame style derived from window state.
//!
//! None of this is stored in [`crate::model::DesktopState`]; each window container owns one
//! [`ContainerInteraction`].

use serde::{Deserialize, Serialize};

use crate::model::{WindowId, WindowState};

/// Height of the top menu bar. Windows may not be dragged above it.
pub const NAVBAR_HEIGHT_PX: f64 = 40.0;
/// How far a window's top edge may approach the bottom of the viewport.
pub const DOCK_OVERLAP_ALLOWANCE_PX: f64 = 50.0;
/// Maximized frame margins.
pub const MAXIMIZED_TOP_PX: i32 = 52;
pub const MAXIMIZED_SIDE_PX: i32 = 8;
pub const MAXIMIZED_BOTTOM_PX: i32 = 88;
/// Viewport fallback used before the browser reports a size.
pub const DEFAULT_VIEWPORT: ViewportSize = ViewportSize {
    width: 1920.0,
    height: 1080.0,
};

const MAX_REFLOW_RATIO: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
/// Offset of a window from its CSS base location.
pub struct WindowPosition {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportSize {
    pub width: f64,
    pub height: f64,
}

impl Default for ViewportSize {
    fn default() -> Self {
        DEFAULT_VIEWPORT
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
/// Rendered window measurements needed for clamping.
pub struct WindowMetrics {
    pub width: f64,
    /// Computed CSS `left` of the element before translation.
    pub base_left: f64,
    /// Computed CSS `top` of the element before translation.
    pub base_top: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragBounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl DragBounds {
    pub fn new(viewport: ViewportSize, metrics: WindowMetrics) -> Self {
        Self {
            min_x: -metrics.base_left,
            max_x: viewport.width - metrics.width - metrics.base_left,
            min_y: NAVBAR_HEIGHT_PX - metrics.base_top,
            max_y: viewport.height - DOCK_OVERLAP_ALLOWANCE_PX - metrics.base_top,
        }
    }

    /// Clamps each axis; the lower bound wins when the bounds cross.
    pub fn clamp(&self, position: WindowPosition) -> WindowPosition {
        WindowPosition {
            x: clamp_axis(position.x, self.min_x, self.max_x),
            y: clamp_axis(position.y, self.min_y, self.max_y),
        }
    }
}

fn clamp_axis(value: f64, min: f64, max: f64) -> f64 {
    min.max(max.min(value))
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub start_pointer: PointerPosition,
    pub start_position: WindowPosition,
}

impl DragSession {
    /// Unclamped position for the current pointer.
    pub fn position_for(&self, pointer: PointerPosition) -> WindowPosition {
        WindowPosition {
            x: self.start_position.x + (pointer.x - self.start_pointer.x),
            y: self.start_position.y + (pointer.y - self.start_pointer.y),
        }
    }
}

/// Scales `position` from `previous` to `next` viewport proportions.
///
/// Returns `None` when either ratio falls outside the open interval `(0, 10)`.
pub fn reflow_position(
    position: WindowPosition,
    previous: ViewportSize,
    next: ViewportSize,
) -> Option<WindowPosition> {
    let ratio_x = next.width / previous.width;
    let ratio_y = next.height / previous.height;
    let usable = |ratio: f64| ratio > 0.0 && ratio < MAX_REFLOW_RATIO;
    if !usable(ratio_x) || !usable(ratio_y) {
        return None;
    }
    Some(WindowPosition {
        x: position.x * ratio_x,
        y: position.y * ratio_y,
    })
}

/// Parses a computed CSS length such as `"120px"`. Unparseable values read as `0`.
pub fn parse_css_px(raw: &str) -> f64 {
    raw.trim()
        .trim_end_matches("px")
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerInteraction {
    position: WindowPosition,
    pre_maximize: WindowPosition,
    drag: Option<DragSession>,
    viewport: ViewportSize,
}

impl ContainerInteraction {
    pub fn new(initial: Option<WindowPosition>, viewport: ViewportSize) -> Self {
        let position = initial.unwrap_or_default();
        Self {
            position,
            pre_maximize: position,
            drag: None,
            viewport,
        }
    }

    pub fn position(&self) -> WindowPosition {
        self.position
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Starts a drag session unless the window is maximized.
    pub fn begin_drag(&mut self, pointer: PointerPosition, is_maximized: bool) -> bool {
        if is_maximized {
            return false;
        }
        self.drag = Some(DragSession {
            start_pointer: pointer,
            start_position: self.position,
        });
        true
    }

    /// Moves the window for `pointer`. Without measured `bounds` the move is unclamped.
    pub fn drag_to(
        &mut self,
        pointer: PointerPosition,
        bounds: Option<DragBounds>,
    ) -> Option<WindowPosition> {
        let session = self.drag?;
        let raw = session.position_for(pointer);
        self.position = match bounds {
            Some(bounds) => bounds.clamp(raw),
            None => raw,
        };
        Some(self.position)
    }

    pub fn end_drag(&mut self) -> bool {
        self.drag.take().is_some()
    }

    /// Rescales the position for a new viewport. The stored viewport is always replaced.
    pub fn resize_viewport(&mut self, next: ViewportSize) {
        if let Some(position) = reflow_position(self.position, self.viewport, next) {
            self.position = position;
        }
        self.viewport = next;
    }

    /// Remembers the position when maximizing; puts it back when restoring.
    pub fn toggle_maximize(&mut self, currently_maximized: bool) {
        if currently_maximized {
            self.position = self.pre_maximize;
        } else {
            self.pre_maximize = self.position;
        }
    }
}

/// Inline style for a visible window frame.
pub fn frame_style(
    window_id: WindowId,
    window: &WindowState,
    interaction: &ContainerInteraction,
) -> String {
    if window.is_maximized {
        let right = if window_id.has_limited_width() {
            "right:auto;width:auto;".to_string()
        } else {
            format!(
                "right:{MAXIMIZED_SIDE_PX}px;width:calc(100% - {}px);max-width:none;",
                MAXIMIZED_SIDE_PX * 2
            )
        };
        return format!(
            "position:fixed;top:{MAXIMIZED_TOP_PX}px;left:{MAXIMIZED_SIDE_PX}px;{right}bottom:{MAXIMIZED_BOTTOM_PX}px;height:calc(100vh - {}px);transform:none;border-radius:12px;overflow:hidden;z-index:{};",
            MAXIMIZED_TOP_PX + MAXIMIZED_BOTTOM_PX,
            window.z_index
        );
    }

    let position = interaction.position();
    let (cursor, transition) = if interaction.is_dragging() {
        ("grabbing", "none")
    } else {
        ("default", "transform 0.1s ease-out")
    };
    format!(
        "z-index:{};transform:translate({}px, {}px);cursor:{cursor};transition:{transition};",
        window.z_index, position.x, position.y
    )
}
