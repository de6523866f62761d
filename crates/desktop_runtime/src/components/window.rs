use leptos::{html, leptos_dom::helpers::WindowListenerHandle};

use super::*;
use crate::{
    interaction::{frame_style, parse_css_px, ContainerInteraction, DragBounds, WindowMetrics},
    model::WindowState,
    transition::{DockTransition, DockTransitionKind, ElementRect},
};

fn measure_metrics(node: NodeRef<html::Div>) -> Option<WindowMetrics> {
    let element = node.get_untracked()?;
    let rect = element.get_bounding_client_rect();
    let style = web_sys::window()?.get_computed_style(&element).ok()??;
    Some(WindowMetrics {
        width: rect.width(),
        base_left: parse_css_px(&style.get_property_value("left").unwrap_or_default()),
        base_top: parse_css_px(&style.get_property_value("top").unwrap_or_default()),
    })
}

fn measure_rect(node: NodeRef<html::Div>) -> Option<ElementRect> {
    let rect = node.get_untracked()?.get_bounding_client_rect();
    Some(ElementRect {
        left: rect.left(),
        top: rect.top(),
        width: rect.width(),
        height: rect.height(),
    })
}

#[component]
/// Window chrome for one [`WindowId`]: visibility gate, drag, fly-to-dock close/minimize,
/// maximize, and focus-on-click. Children render inside the content area.
pub fn WindowContainer(
    window_id: WindowId,
    /// Title bar text.
    #[prop(into)]
    title: Signal<String>,
    /// Extra classes on the frame element.
    #[prop(optional)]
    class: &'static str,
    /// Starting offset from the CSS base location.
    #[prop(optional)]
    initial_position: Option<crate::interaction::WindowPosition>,
    children: ChildrenFn,
) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let window_state = create_memo(move |_| {
        runtime
            .state
            .with(|s| s.window(window_id).cloned().unwrap_or_default())
    });
    let interaction = create_rw_signal(ContainerInteraction::new(
        initial_position,
        runtime.host.get_value().viewport_size(),
    ));
    let transition = create_rw_signal(None::<(DockTransition, crate::interaction::WindowPosition)>);
    let frame_ref = create_node_ref::<html::Div>();
    let drag_listeners = store_value(Vec::<WindowListenerHandle>::new());

    let detach_drag_listeners = move || {
        drag_listeners.update_value(|handles| {
            for handle in handles.drain(..) {
                handle.remove();
            }
        });
    };

    let attach_drag_listeners = move || {
        let on_move = window_event_listener(ev::pointermove, move |ev| {
            let pointer = pointer_from_pointer_event(&ev);
            let viewport = runtime.host.get_value().viewport_size();
            let bounds = measure_metrics(frame_ref).map(|m| DragBounds::new(viewport, m));
            interaction.update(|i| {
                i.drag_to(pointer, bounds);
            });
        });
        let finish_drag = move || {
            interaction.update(|i| {
                i.end_drag();
            });
            detach_drag_listeners();
        };
        let on_up = window_event_listener(ev::pointerup, move |_| finish_drag());
        let on_cancel = window_event_listener(ev::pointercancel, move |_| finish_drag());
        drag_listeners.update_value(|handles| {
            handles.push(on_move);
            handles.push(on_up);
            handles.push(on_cancel);
        });
    };

    let resize_listener = window_event_listener(ev::resize, move |_| {
        let viewport = runtime.host.get_value().viewport_size();
        interaction.update(|i| i.resize_viewport(viewport));
    });
    on_cleanup(move || {
        resize_listener.remove();
        detach_drag_listeners();
    });

    let begin_drag = move |ev: web_sys::PointerEvent| {
        if ev.button() != 0 {
            return;
        }
        let is_maximized = window_state.get_untracked().is_maximized;
        let pointer = pointer_from_pointer_event(&ev);
        let started = interaction
            .try_update(|i| i.begin_drag(pointer, is_maximized))
            .unwrap_or(false);
        if !started {
            return;
        }
        ev.prevent_default();
        runtime.dispatch_action(DesktopAction::BringToFront { window_id });
        attach_drag_listeners();
    };

    let focus = move |_| runtime.dispatch_action(DesktopAction::BringToFront { window_id });

    let start_dock_transition = move |kind: DockTransitionKind| {
        if transition.get_untracked().is_some() {
            return;
        }
        let Some(rect) = measure_rect(frame_ref) else {
            runtime.dispatch_action(kind.commit_action(window_id));
            return;
        };
        let plan = DockTransition::plan(kind, rect, runtime.host.get_value().viewport_size());
        let from = if window_state.get_untracked().is_maximized {
            crate::interaction::WindowPosition::default()
        } else {
            interaction.get_untracked().position()
        };
        transition.set(Some((plan, from)));
        set_timeout(
            move || {
                logging::log!("{window_id}: {:?} committed", plan.kind);
                runtime.dispatch_action(plan.commit_action(window_id));
                transition.set(None);
            },
            plan.duration(),
        );
    };

    let toggle_maximize = move || {
        let is_maximized = window_state.get_untracked().is_maximized;
        interaction.update(|i| i.toggle_maximize(is_maximized));
        runtime.dispatch_action(DesktopAction::ToggleMaximize { window_id });
    };

    let style = move || {
        let mut style = frame_style(window_id, &window_state.get(), &interaction.get());
        if let Some((plan, from)) = transition.get() {
            style.push_str(&plan.style(from));
        }
        style
    };
    let frame_class = move || {
        let WindowState { is_maximized, .. } = window_state.get();
        format!(
            "window-frame {}{class}",
            if is_maximized { "maximized " } else { "" }
        )
    };

    view! {
        <Show when=move || window_state.get().is_visible() fallback=|| ()>
            <div
                node_ref=frame_ref
                id=window_id.key()
                class=frame_class
                style=style
                on:mousedown=focus
                role="dialog"
                aria-label=move || title.get()
            >
                <div id="window-header" on:pointerdown=begin_drag>
                    <div id="window-controls">
                        <button
                            class="close"
                            aria-label="Close window"
                            on:pointerdown=move |ev: web_sys::PointerEvent| ev.stop_propagation()
                            on:click=move |ev| {
                                stop_mouse_event(&ev);
                                start_dock_transition(DockTransitionKind::Close);
                            }
                        ></button>
                        <button
                            class="minimize"
                            aria-label="Minimize window"
                            on:pointerdown=move |ev: web_sys::PointerEvent| ev.stop_propagation()
                            on:click=move |ev| {
                                stop_mouse_event(&ev);
                                start_dock_transition(DockTransitionKind::Minimize);
                            }
                        ></button>
                        <button
                            class="maximize"
                            aria-label=move || {
                                if window_state.get().is_maximized {
                                    "Restore window"
                                } else {
                                    "Maximize window"
                                }
                            }
                            on:pointerdown=move |ev: web_sys::PointerEvent| ev.stop_propagation()
                            on:click=move |ev| {
                                stop_mouse_event(&ev);
                                toggle_maximize();
                            }
                        ></button>
                    </div>
                    <h2>{move || title.get()}</h2>
                </div>
                <div class=move || {
                    if window_state.get().is_maximized {
                        "window-content window-content-maximized"
                    } else {
                        "window-content"
                    }
                }>{children()}</div>
            </div>
        </Show>
    }
}
