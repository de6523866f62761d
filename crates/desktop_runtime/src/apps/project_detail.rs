use portfolio_assistant::{find_project_by_slug, Project};

use super::*;
use crate::{
    gallery::{Carousel, SLIDE_LOCK},
    navigation::open_in_safari,
};

#[component]
pub(super) fn ProjectDetailWindow() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let payload = window_payload(runtime, WindowId::ProjectDetail);
    let project = create_memo(move |_| match payload.get() {
        Some(WindowPayload::Project(project)) => find_project_by_slug(&project.slug),
        _ => None,
    });
    let title = Signal::derive(move || {
        project
            .get()
            .map(|p| p.title.to_string())
            .unwrap_or_else(|| "Project".to_string())
    });

    view! {
        <WindowContainer
            window_id=WindowId::ProjectDetail
            title=title
            class="project-detail-window"
        >
            {move || match project.get() {
                Some(project) => view! { <ProjectDetail project=project /> }.into_view(),
                None => placeholder("Select a project from the gallery."),
            }}
        </WindowContainer>
    }
}

/// Starts a slide change and releases the lock once the slide has settled.
fn slide(carousel: RwSignal<Carousel>, step: impl FnOnce(&mut Carousel) -> bool) {
    if carousel.try_update(step).unwrap_or(false) {
        set_timeout(move || carousel.update(Carousel::settle), SLIDE_LOCK);
    }
}

#[component]
fn ProjectDetail(project: &'static Project) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let carousel = create_rw_signal(Carousel::new(project.images.len()));

    let open_link = move |url: &'static str, title: String| {
        runtime.dispatch_action(open_in_safari(url, &title));
    };

    view! {
        <article class="project-detail">
            <div class="project-carousel">
                <div class="carousel-track">
                    {project
                        .images
                        .iter()
                        .enumerate()
                        .map(|(index, src)| {
                            view! {
                                <img
                                    class=move || {
                                        if carousel.get().index() == index { "carousel-slide active" } else { "carousel-slide" }
                                    }
                                    src=*src
                                    alt=format!("{} screenshot {}", project.title, index + 1)
                                />
                            }
                        })
                        .collect_view()}
                </div>
                <Show when=move || carousel.get().has_multiple() fallback=|| ()>
                    <button class="carousel-prev" aria-label="Previous image" on:click=move |_| slide(carousel, Carousel::prev)>
                        "‹"
                    </button>
                    <button class="carousel-next" aria-label="Next image" on:click=move |_| slide(carousel, Carousel::next)>
                        "›"
                    </button>
                    <div class="carousel-dots">
                        {(0..project.images.len())
                            .map(|index| {
                                view! {
                                    <button
                                        class=move || {
                                            if carousel.get().index() == index { "carousel-dot active" } else { "carousel-dot" }
                                        }
                                        aria-label=format!("Go to image {}", index + 1)
                                        on:click=move |_| slide(carousel, |c| c.go_to(index))
                                    ></button>
                                }
                            })
                            .collect_view()}
                    </div>
                </Show>
            </div>
            <header class="project-header">
                <h1>{project.title}</h1>
                <p class="project-description">{project.description}</p>
                <div class="project-links">
                    {project
                        .demo_url
                        .map(|url| {
                            view! {
                                <button
                                    class="project-link demo"
                                    on:click=move |_| open_link(url, format!("{} - Demo", project.title))
                                >
                                    "Live Demo"
                                </button>
                            }
                        })}
                    {project
                        .github_url
                        .map(|url| {
                            view! {
                                <button
                                    class="project-link github"
                                    on:click=move |_| open_link(url, format!("{} - GitHub", project.title))
                                >
                                    "GitHub"
                                </button>
                            }
                        })}
                </div>
            </header>
            <section>
                <h2>"Problem"</h2>
                <p>{project.problem}</p>
            </section>
            <section>
                <h2>"Objective"</h2>
                <p>{project.objective}</p>
            </section>
            <section>
                <h2>"Key Features"</h2>
                <ul>{project.features.iter().map(|f| view! { <li>{*f}</li> }).collect_view()}</ul>
            </section>
            <section>
                <h2>"Architecture"</h2>
                <p>{project.architecture}</p>
            </section>
            <section>
                <h2>"Challenges"</h2>
                <p>{project.challenges}</p>
            </section>
            <section>
                <h2>"Learnings"</h2>
                <p>{project.learnings}</p>
            </section>
            <section>
                <h2>"Tech Stack"</h2>
                <div class="tech-tags">
                    {project
                        .tech_stack
                        .iter()
                        .map(|tech| view! { <span class="tech-tag">{*tech}</span> })
                        .collect_view()}
                </div>
            </section>
        </article>
    }
}
