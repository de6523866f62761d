use super::*;

enum NavMenuItem {
    Window { window_id: WindowId, label: &'static str },
    Separator,
}

const WINDOW_MENU: &[NavMenuItem] = &[
    NavMenuItem::Window {
        window_id: WindowId::Finder,
        label: "Projects",
    },
    NavMenuItem::Window {
        window_id: WindowId::Contact,
        label: "Contact",
    },
    NavMenuItem::Window {
        window_id: WindowId::Resume,
        label: "Resume",
    },
    NavMenuItem::Separator,
    NavMenuItem::Window {
        window_id: WindowId::Terminal,
        label: "Skills",
    },
];

#[component]
pub(super) fn NavBar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let menu_open = create_rw_signal(false);
    let clock_now = create_rw_signal(NavClockSnapshot::now());

    if let Ok(interval) = set_interval_with_handle(
        move || clock_now.set(NavClockSnapshot::now()),
        CLOCK_REFRESH,
    ) {
        on_cleanup(move || interval.clear());
    }

    let is_dark = move || runtime.state.with(|s| s.theme.is_dark());

    view! {
        <nav>
            <div class="nav-left">
                <img src="/images/logo.svg" alt="Logo" class="nav-logo" />
                <p class="nav-owner">{format!("{}'s Portfolio", owner_first_name())}</p>
                <div
                    class=move || if menu_open.get() { "nav-dropdown open" } else { "nav-dropdown" }
                    on:mouseenter=move |_| menu_open.set(true)
                    on:mouseleave=move |_| menu_open.set(false)
                >
                    <button class="nav-dropdown-trigger">"Window"</button>
                    <Show when=move || menu_open.get() fallback=|| ()>
                        <div class="nav-dropdown-menu">
                            <div class="nav-dropdown-menu-inner">
                                {WINDOW_MENU
                                    .iter()
                                    .map(|item| match item {
                                        NavMenuItem::Separator => {
                                            view! { <div class="nav-dropdown-separator"></div> }
                                                .into_view()
                                        }
                                        NavMenuItem::Window { window_id, label } => {
                                            let window_id = *window_id;
                                            view! {
                                                <button
                                                    class="nav-dropdown-item"
                                                    on:click=move |_| {
                                                        open_window(runtime, window_id);
                                                        menu_open.set(false);
                                                    }
                                                >
                                                    {*label}
                                                </button>
                                            }
                                                .into_view()
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </Show>
                </div>
            </div>
            <div class="nav-right">
                <button
                    class="nav-theme-toggle"
                    aria-label=move || {
                        if is_dark() { "Switch to light mode" } else { "Switch to dark mode" }
                    }
                    on:click=move |_| runtime.dispatch_action(DesktopAction::ToggleTheme)
                >
                    <img
                        src="/icons/mode.svg"
                        alt="Toggle theme"
                        class=move || if is_dark() { "nav-icon rotated" } else { "nav-icon" }
                    />
                </button>
                <time>{move || format_nav_clock(clock_now.get())}</time>
            </div>
        </nav>
    }
}
