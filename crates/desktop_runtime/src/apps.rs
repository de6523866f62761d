//! Content windows. Each one wraps a [`WindowContainer`] and reads its payload from the store.

mod contact;
mod finder;
mod image_file;
mod photos;
mod project_detail;
mod resume;
mod safari;
mod terminal;
mod text_file;

use leptos::*;
use portfolio_assistant::{parse_inline, InlineSegment};

use crate::{
    components::{use_desktop_runtime, DesktopRuntimeContext, WindowContainer},
    model::{WindowId, WindowPayload},
    reducer::DesktopAction,
};

use self::{
    contact::ContactWindow, finder::FinderWindow, image_file::ImageFileWindow,
    photos::PhotosWindow, project_detail::ProjectDetailWindow, resume::ResumeWindow,
    safari::SafariWindow, terminal::TerminalWindow, text_file::TextFileWindow,
};

/// Reactive view of one window's payload.
fn window_payload(runtime: DesktopRuntimeContext, window_id: WindowId) -> Memo<Option<WindowPayload>> {
    create_memo(move |_| {
        runtime
            .state
            .with(|s| s.window(window_id).and_then(|w| w.data.clone()))
    })
}

fn render_inline(line: &str) -> View {
    parse_inline(line)
        .into_iter()
        .map(|segment| match segment {
            InlineSegment::Text(text) => text.into_view(),
            InlineSegment::Bold(text) => view! { <strong>{text}</strong> }.into_view(),
        })
        .collect_view()
}

/// Renders assistant reply markup: `## ` headings, `**bold**` spans, blank-line spacing.
fn render_markup(text: &str) -> View {
    text.lines()
        .map(|line| {
            if let Some(heading) = line.strip_prefix("## ") {
                view! { <h3 class="markup-heading">{heading.to_string()}</h3> }.into_view()
            } else if line.trim().is_empty() {
                view! { <br /> }.into_view()
            } else {
                view! { <p class="markup-line">{render_inline(line)}</p> }.into_view()
            }
        })
        .collect_view()
}

fn placeholder(message: &'static str) -> View {
    view! { <div class="window-placeholder">{message}</div> }.into_view()
}

#[component]
/// Mounts every content window; each stays hidden until opened.
pub(crate) fn AppWindows() -> impl IntoView {
    view! {
        <FinderWindow />
        <ContactWindow />
        <TerminalWindow />
        <SafariWindow />
        <PhotosWindow />
        <ResumeWindow />
        <TextFileWindow />
        <ImageFileWindow />
        <ProjectDetailWindow />
    }
}
