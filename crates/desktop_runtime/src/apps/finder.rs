use super::*;
use crate::finder::{finder_locations, open_file_action, FinderNav, FinderNode, FinderViewMode};

#[component]
pub(super) fn FinderWindow() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let locations = store_value(finder_locations());
    let nav = create_rw_signal(FinderNav::default());
    let view_mode = create_rw_signal(FinderViewMode::Grid);
    let selected = create_rw_signal(None::<u32>);

    let title = Signal::derive(move || locations.with_value(|l| nav.get().title(l)));
    let items = move || locations.with_value(|l| nav.get().items(l).to_vec());

    let open_node = move |node: &FinderNode| match node {
        FinderNode::Folder(folder) => {
            selected.set(None);
            nav.update(|n| n.enter_folder(folder.id));
        }
        FinderNode::File(file) => {
            if let Some(action) = open_file_action(file) {
                runtime.dispatch_action(action);
            }
        }
    };

    view! {
        <WindowContainer window_id=WindowId::Finder title=title class="finder-window">
            <div class="finder-toolbar">
                <button
                    class="finder-back"
                    title="Back"
                    disabled=move || nav.get().folder.is_none()
                    on:click=move |_| nav.update(FinderNav::back)
                >
                    "‹"
                </button>
                <div class="finder-view-modes" role="group" aria-label="View mode">
                    {FinderViewMode::ALL
                        .into_iter()
                        .map(|mode| {
                            view! {
                                <button
                                    class=move || {
                                        if view_mode.get() == mode { "view-mode active" } else { "view-mode" }
                                    }
                                    title=mode.label()
                                    on:click=move |_| view_mode.set(mode)
                                >
                                    {mode.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <div class="finder-body">
                <nav class="finder-sidebar">
                    <h3>"Favorites"</h3>
                    <ul>
                        {locations
                            .get_value()
                            .into_iter()
                            .map(|location| {
                                let key = location.key;
                                view! {
                                    <li
                                        class=move || {
                                            if nav.get().location == key { "sidebar-item active" } else { "sidebar-item" }
                                        }
                                        on:click=move |_| {
                                            selected.set(None);
                                            nav.update(|n| n.select_location(key));
                                        }
                                    >
                                        <img src=location.icon alt="" />
                                        <span>{location.name}</span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </nav>
                <ul class=move || format!("finder-content {}", view_mode.get().label())>
                    {move || {
                        items()
                            .into_iter()
                            .map(|node| {
                                let id = node.id();
                                let icon = node.icon().to_string();
                                let name = node.name().to_string();
                                view! {
                                    <li
                                        class=move || {
                                            if selected.get() == Some(id) { "finder-item selected" } else { "finder-item" }
                                        }
                                        on:click=move |_| selected.set(Some(id))
                                        on:dblclick=move |_| open_node(&node)
                                    >
                                        <img src=icon alt="" />
                                        <p>{name}</p>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </div>
        </WindowContainer>
    }
}
