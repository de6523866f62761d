use super::*;

const DEFAULT_RESUME_HREF: &str = "/files/resume.pdf";

#[component]
pub(super) fn ResumeWindow() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let payload = window_payload(runtime, WindowId::Resume);
    let href = move || match payload.get() {
        Some(WindowPayload::Document(file)) => file
            .href
            .unwrap_or_else(|| DEFAULT_RESUME_HREF.to_string()),
        _ => DEFAULT_RESUME_HREF.to_string(),
    };

    view! {
        <WindowContainer window_id=WindowId::Resume title=move || "Resume".to_string() class="resume-window">
            <div class="resume-toolbar">
                <a class="resume-download" href=href download="resume.pdf" title="Download resume">
                    "Download"
                </a>
            </div>
            <iframe class="resume-frame" src=href title="Resume"></iframe>
        </WindowContainer>
    }
}
