use super::*;

#[component]
pub(super) fn ImageFileWindow() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let payload = window_payload(runtime, WindowId::ImgFile);
    let file = create_memo(move |_| match payload.get() {
        Some(WindowPayload::ImageFile(file)) => Some(file),
        _ => None,
    });
    let title = Signal::derive(move || {
        file.get()
            .map(|f| f.name)
            .unwrap_or_else(|| "Preview".to_string())
    });

    view! {
        <WindowContainer window_id=WindowId::ImgFile title=title class="image-file-window">
            {move || match file.get().and_then(|f| f.image_url.map(|src| (src, f.name))) {
                Some((src, name)) => {
                    view! {
                        <div class="image-preview">
                            <img src=src alt=name />
                        </div>
                    }
                        .into_view()
                }
                None => placeholder("No preview available."),
            }}
        </WindowContainer>
    }
}
