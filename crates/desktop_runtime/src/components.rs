//! Desktop shell UI composition and interaction surfaces.

mod dock;
mod navbar;
mod welcome;
mod window;

use std::time::Duration;

use leptos::*;

use self::{dock::Dock, navbar::NavBar, welcome::Welcome};
pub use self::window::WindowContainer;

use crate::{
    apps::AppWindows,
    interaction::PointerPosition,
    model::WindowId,
    reducer::DesktopAction,
};
pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

const CLOCK_REFRESH: Duration = Duration::from_secs(60);

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct NavClockSnapshot {
    weekday: u32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
}

impl NavClockSnapshot {
    fn now() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let date = js_sys::Date::new_0();
            return Self {
                weekday: date.get_day(),
                month: date.get_month(),
                day: date.get_date(),
                hour: date.get_hours(),
                minute: date.get_minutes(),
            };
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self {
                weekday: 4,
                month: 0,
                day: 1,
                hour: 0,
                minute: 0,
            }
        }
    }
}

/// `Thu Jan 1 12:00 AM` style label.
fn format_nav_clock(snapshot: NavClockSnapshot) -> String {
    let weekday = WEEKDAYS[(snapshot.weekday % 7) as usize];
    let month = MONTHS[(snapshot.month % 12) as usize];
    let mut hour = snapshot.hour % 12;
    if hour == 0 {
        hour = 12;
    }
    let suffix = if snapshot.hour >= 12 { "PM" } else { "AM" };
    format!(
        "{weekday} {month} {} {hour}:{:02} {suffix}",
        snapshot.day, snapshot.minute
    )
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct WelcomeTypography {
    title_rem: f64,
    subtitle_rem: f64,
}

/// Hero font sizes scale with viewport width: title 4-10rem, subtitle 1-2rem.
fn welcome_typography(viewport_width: f64) -> WelcomeTypography {
    WelcomeTypography {
        title_rem: (viewport_width / 192.0).clamp(4.0, 10.0),
        subtitle_rem: (viewport_width / 960.0).clamp(1.0, 2.0),
    }
}

fn owner_first_name() -> &'static str {
    portfolio_assistant::PERSONAL_INFO
        .name
        .split_whitespace()
        .next()
        .unwrap_or_default()
}

fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: f64::from(ev.client_x()),
        y: f64::from(ev.client_y()),
    }
}

/// Opens a window from shell chrome (menu bar, dock) without a payload.
fn open_window(runtime: DesktopRuntimeContext, window_id: WindowId) {
    runtime.dispatch_action(DesktopAction::OpenWindow {
        window_id,
        data: None,
    });
}

#[component]
/// Desktop shell: menu bar, hero, every window, and the dock.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();

    view! {
        <main
            class="desktop-shell"
            data-theme=move || runtime.state.with(|s| s.theme.as_str())
        >
            <NavBar />
            <Welcome />
            <AppWindows />
            <Dock />
        </main>
    }
}
