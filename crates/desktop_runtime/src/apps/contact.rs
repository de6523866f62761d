use portfolio_assistant::{LinkKind, SocialLink, PERSONAL_INFO, SOCIAL_LINKS};

use super::*;
use crate::navigation::{domain_label, open_in_safari};

/// Mail links leave the site; everything else opens in Safari.
fn contact_action(link: &SocialLink) -> DesktopAction {
    match link.kind {
        LinkKind::Mail => DesktopAction::NavigateExternal {
            url: link.url.to_string(),
        },
        LinkKind::Social => open_in_safari(link.url, link.label),
    }
}

fn display_target(link: &SocialLink) -> String {
    match link.kind {
        LinkKind::Mail => link.display_target().to_string(),
        LinkKind::Social => domain_label(link.url),
    }
}

#[component]
pub(super) fn ContactWindow() -> impl IntoView {
    let runtime = use_desktop_runtime();

    view! {
        <WindowContainer window_id=WindowId::Contact title=move || "Contact".to_string() class="contact-window">
            <div class="contact">
                <img class="contact-avatar" src="/images/profile.png" alt=PERSONAL_INFO.name />
                <h3>"Let's Connect"</h3>
                <p>{format!("Got an idea or just want to say hi? Reach me at {}.", PERSONAL_INFO.email)}</p>
                <ul class="contact-cards">
                    {SOCIAL_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <li
                                    class="contact-card"
                                    style=format!("background-color:{};", link.color)
                                    on:click=move |_| runtime.dispatch_action(contact_action(link))
                                >
                                    <img src=link.icon alt=link.label />
                                    <div class="contact-card-text">
                                        <p class="contact-card-label">{link.label}</p>
                                        <p class="contact-card-target">{display_target(link)}</p>
                                    </div>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </WindowContainer>
    }
}
