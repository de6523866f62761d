use desktop_runtime::{
    use_desktop_runtime, DesktopAction, DesktopProvider, DesktopShell, ProjectRef, WindowId,
    WindowPayload,
};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use portfolio_assistant::{find_project_by_slug, PERSONAL_INFO};

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=format!("{} | Portfolio", PERSONAL_INFO.name) />
        <Meta name="description" content=PERSONAL_INFO.professional_summary />

        <Router>
            <div class="site-root">
                <Routes>
                    <Route path="" view=DesktopEntry />
                    <Route path="/projects/:slug" view=ProjectDeepLink />
                </Routes>
            </div>
        </Router>
    }
}

#[component]
pub fn DesktopEntry() -> impl IntoView {
    view! {
        <DesktopProvider>
            <DesktopShell />
        </DesktopProvider>
    }
}

/// `/projects/:slug` boots the desktop with that project's detail window open.
#[component]
fn ProjectDeepLink() -> impl IntoView {
    let params = use_params_map();
    let slug = params.with_untracked(|map| map.get("slug").cloned().unwrap_or_default());

    view! {
        <DesktopProvider>
            <OpenProject slug=slug />
            <DesktopShell />
        </DesktopProvider>
    }
}

#[component]
fn OpenProject(slug: String) -> impl IntoView {
    let runtime = use_desktop_runtime();
    match find_project_by_slug(&slug) {
        Some(project) => runtime.dispatch_action(DesktopAction::OpenWindow {
            window_id: WindowId::ProjectDetail,
            data: Some(WindowPayload::Project(ProjectRef {
                slug: project.slug.to_string(),
            })),
        }),
        None => logging::warn!("unknown project slug `{slug}`"),
    }
}
