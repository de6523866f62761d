use super::*;
use crate::dock::{
    dock_placement, icon_style, is_indicator_lit, resolve_dock_click, DockApp, DOCK_APPS,
};

#[component]
pub(super) fn Dock() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let hovered = create_rw_signal(None::<usize>);
    let placement = create_memo(move |_| runtime.state.with(dock_placement));

    let activate = move |app: DockApp| {
        let action = runtime.state.with_untracked(|s| resolve_dock_click(&app, s));
        if let Some(action) = action {
            runtime.dispatch_action(action);
        }
    };

    view! {
        <section id="dock" style=move || placement.get().style()>
            <div class="dock-container" on:mouseleave=move |_| hovered.set(None)>
                {DOCK_APPS
                    .iter()
                    .copied()
                    .enumerate()
                    .map(|(index, app)| {
                        view! {
                            <button
                                class="dock-icon"
                                aria-label=app.name
                                disabled=!app.can_open && app.window_id().is_some()
                                style=move || icon_style(index, hovered.get(), app.can_open)
                                on:mouseenter=move |_| hovered.set(Some(index))
                                on:click=move |_| activate(app)
                            >
                                <span class="dock-tooltip">{app.name}</span>
                                <img
                                    src=format!("/images/{}", app.icon)
                                    alt=app.name
                                    draggable="false"
                                />
                                <Show
                                    when=move || runtime.state.with(|s| is_indicator_lit(&app, s))
                                    fallback=|| ()
                                >
                                    <span class="dock-indicator"></span>
                                </Show>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
