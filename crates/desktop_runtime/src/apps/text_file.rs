use super::*;

#[component]
pub(super) fn TextFileWindow() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let payload = window_payload(runtime, WindowId::TxtFile);
    let file = create_memo(move |_| match payload.get() {
        Some(WindowPayload::TextFile(file)) => Some(file),
        _ => None,
    });
    let title = Signal::derive(move || {
        file.get()
            .map(|f| f.name)
            .unwrap_or_else(|| "Untitled.txt".to_string())
    });

    view! {
        <WindowContainer window_id=WindowId::TxtFile title=title class="text-file-window">
            {move || {
                let Some(file) = file.get() else {
                    return placeholder("No file selected.");
                };
                view! {
                    <div class="text-file">
                        {file.subtitle.map(|subtitle| view! { <h3>{subtitle}</h3> })}
                        {file
                            .image_url
                            .map(|src| view! { <img class="text-file-image" src=src alt="" /> })}
                        {file
                            .description
                            .into_iter()
                            .map(|paragraph| view! { <p>{paragraph}</p> })
                            .collect_view()}
                    </div>
                }
                    .into_view()
            }}
        </WindowContainer>
    }
}
