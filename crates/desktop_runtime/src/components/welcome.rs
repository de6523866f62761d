use super::*;

fn render_chars(text: &str, class: &'static str) -> impl IntoView {
    text.chars()
        .map(|c| {
            let glyph = if c == ' ' { '\u{00A0}' } else { c };
            view! { <span class=format!("char {class}")>{glyph.to_string()}</span> }
        })
        .collect_view()
}

#[component]
pub(super) fn Welcome() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let typography = create_rw_signal(welcome_typography(
        runtime.host.get_value().viewport_size().width,
    ));

    let resize_listener = window_event_listener(ev::resize, move |_| {
        typography.set(welcome_typography(
            runtime.host.get_value().viewport_size().width,
        ));
    });
    on_cleanup(move || resize_listener.remove());

    view! {
        <section id="welcome">
            <p style=move || format!("font-size:{}rem;", typography.get().subtitle_rem)>
                {render_chars(
                    &format!("Hey, I'm {}! Welcome to my", owner_first_name()),
                    "subtitle",
                )}
            </p>
            <h1 style=move || format!("font-size:{}rem;", typography.get().title_rem)>
                {render_chars("portfolio", "title")}
            </h1>
            <div class="small-screen">
                <p>"This portfolio is designed for desktop/tablet screens only."</p>
            </div>
        </section>
    }
}
