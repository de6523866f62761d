use portfolio_assistant::{projects_by_category, GALLERY_CATEGORIES};

use super::*;
use crate::model::ProjectRef;

const DEFAULT_CATEGORY: &str = "Library";

fn open_project_detail(runtime: DesktopRuntimeContext, slug: &str) {
    runtime.dispatch_action(DesktopAction::OpenWindow {
        window_id: WindowId::ProjectDetail,
        data: Some(WindowPayload::Project(ProjectRef {
            slug: slug.to_string(),
        })),
    });
}

#[component]
pub(super) fn PhotosWindow() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let category = create_rw_signal(DEFAULT_CATEGORY);

    view! {
        <WindowContainer window_id=WindowId::Photos title=move || "Gallery".to_string() class="photos-window">
            <div class="photos-body">
                <nav class="photos-sidebar">
                    <h3>"Photos"</h3>
                    <ul>
                        {GALLERY_CATEGORIES
                            .iter()
                            .map(|&name| {
                                view! {
                                    <li
                                        class=move || {
                                            if category.get() == name { "sidebar-item active" } else { "sidebar-item" }
                                        }
                                        on:click=move |_| category.set(name)
                                    >
                                        {name}
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </nav>
                <div class="photos-gallery">
                    {move || {
                        let projects = projects_by_category(category.get());
                        if projects.is_empty() {
                            return placeholder("No projects in this album yet.");
                        }
                        projects
                            .into_iter()
                            .map(|project| {
                                view! {
                                    <button
                                        class="photo-tile"
                                        title=project.title
                                        on:click=move |_| open_project_detail(runtime, project.slug)
                                    >
                                        <img src=project.thumbnail alt=project.title />
                                        <span class="photo-caption">{project.title}</span>
                                    </button>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </div>
        </WindowContainer>
    }
}
