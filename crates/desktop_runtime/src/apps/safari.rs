use leptos::html;
use portfolio_assistant::{
    ChatAuthor, ChatTranscript, LinkKind, RandomChooser, ResponseChooser, SocialLink, SOCIAL_LINKS,
};

use super::*;
use crate::{
    model::BrowserPage,
    navigation::{navigate_safari, safari_home, FrameStatus},
};

const FRAME_SANDBOX: &str = "allow-scripts allow-same-origin allow-forms allow-popups";
const FRAME_ALLOW: &str =
    "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture";

/// Chat state owned by the Safari window so it outlives mode switches and hide/show.
#[derive(Clone, Copy)]
struct SafariChat {
    transcript: RwSignal<ChatTranscript>,
    draft: RwSignal<String>,
}

impl SafariChat {
    fn new() -> Self {
        Self {
            transcript: create_rw_signal(ChatTranscript::default()),
            draft: create_rw_signal(String::new()),
        }
    }

    /// Sends the draft. The draft is cleared only when a message was sent.
    fn submit(&self, chooser: &mut impl ResponseChooser) -> bool {
        let text = self.draft.get_untracked();
        let sent = self
            .transcript
            .try_update(|t| t.submit(&text, chooser))
            .unwrap_or(false);
        if sent {
            self.draft.set(String::new());
        }
        sent
    }
}

/// Mail bookmarks leave the site; the rest load in place and raise Safari.
fn bookmark_actions(link: &SocialLink) -> Vec<DesktopAction> {
    match link.kind {
        LinkKind::Mail => vec![DesktopAction::NavigateExternal {
            url: link.url.to_string(),
        }],
        LinkKind::Social => vec![
            navigate_safari(link.url, link.label),
            DesktopAction::BringToFront {
                window_id: WindowId::Safari,
            },
        ],
    }
}

#[component]
pub(super) fn SafariWindow() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let chat = SafariChat::new();
    let payload = window_payload(runtime, WindowId::Safari);
    let page = create_memo(move |_| match payload.get() {
        Some(WindowPayload::Browser(page)) if page.is_embedded && !page.url.is_empty() => {
            Some(page)
        }
        _ => None,
    });
    let title = Signal::derive(move || {
        page.get()
            .map(|p| p.title)
            .unwrap_or_else(|| "Safari".to_string())
    });

    view! {
        <WindowContainer window_id=WindowId::Safari title=title class="safari-window">
            {move || match page.get() {
                Some(page) => view! { <BrowserView page=page /> }.into_view(),
                None => view! { <SafariHome chat=chat /> }.into_view(),
            }}
        </WindowContainer>
    }
}

#[component]
fn BrowserView(page: BrowserPage) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let status = create_rw_signal(FrameStatus::for_page(&page));
    let frame_ref = create_node_ref::<html::Iframe>();
    let url = store_value(page.url.clone());
    let original_url = store_value(page.original_url.clone());
    let page_title = page.title.clone();

    let back = move |_| {
        runtime.dispatch_action(safari_home());
        runtime.dispatch_action(DesktopAction::BringToFront {
            window_id: WindowId::Safari,
        });
    };
    let refresh = move |_| {
        if status.get_untracked() == FrameStatus::Failed {
            return;
        }
        if let Some(frame) = frame_ref.get_untracked() {
            status.set(FrameStatus::Loading);
            frame.set_src(&url.get_value());
        }
    };
    let open_in_new_tab = move |_| {
        runtime.dispatch_action(DesktopAction::OpenExternalUrl {
            url: original_url.get_value(),
        })
    };

    view! {
        <div class="safari-browser">
            <div class="safari-toolbar">
                <button class="safari-nav-btn" title="Back to home" on:click=back>
                    "‹"
                </button>
                <button class="safari-nav-btn" title="Refresh" on:click=refresh>
                    "↻"
                </button>
                <div class="safari-address">
                    <span class="safari-url">{original_url.get_value()}</span>
                </div>
                <button class="safari-external-btn" title="Open in new tab" on:click=open_in_new_tab>
                    "↗"
                </button>
            </div>
            <Show when=move || status.get() == FrameStatus::Loading fallback=|| ()>
                <div class="safari-loading">
                    <div class="safari-loading-bar"></div>
                </div>
            </Show>
            {move || {
                if status.get() == FrameStatus::Failed {
                    view! {
                        <div class="safari-fallback">
                            <h3>"This site can't be displayed here"</h3>
                            <p>
                                {format!(
                                    "{page_title} doesn't allow embedding in other websites for security reasons."
                                )}
                            </p>
                            <button class="safari-fallback-btn" on:click=open_in_new_tab>
                                "Open in new tab"
                            </button>
                        </div>
                    }
                        .into_view()
                } else {
                    view! {
                        <iframe
                            node_ref=frame_ref
                            src=url.get_value()
                            class="safari-iframe"
                            title=page_title.clone()
                            sandbox=FRAME_SANDBOX
                            allow=FRAME_ALLOW
                            allowfullscreen=true
                            on:load=move |_| status.set(FrameStatus::Loaded)
                            on:error=move |_| status.set(FrameStatus::Failed)
                        ></iframe>
                    }
                        .into_view()
                }
            }}
        </div>
    }
}

#[component]
fn SafariHome(chat: SafariChat) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let SafariChat { transcript, draft } = chat;
    let chat_ref = create_node_ref::<html::Div>();

    create_effect(move |_| {
        transcript.with(|t| t.messages().len());
        if let Some(chat) = chat_ref.get() {
            chat.set_scroll_top(chat.scroll_height());
        }
    });

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        chat.submit(&mut RandomChooser);
    };

    view! {
        <div class="safari-home">
            <div class="safari-bookmarks-bar">
                <span class="safari-bookmarks-label">"Bookmarks"</span>
                <div class="safari-bookmarks-tags">
                    {SOCIAL_LINKS
                        .iter()
                        .map(|social| {
                            let on_click = move |_| {
                                for action in bookmark_actions(social) {
                                    runtime.dispatch_action(action);
                                }
                            };
                            view! {
                                <button
                                    class="safari-bookmark-tag"
                                    title=social.label
                                    style=format!("--tag-color:{};", social.color)
                                    on:click=on_click
                                >
                                    <img src=social.icon alt=social.label />
                                    <span>{social.label}</span>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <div class="safari-chat-area">
                <div class="safari-chat-header">
                    <span>"Portfolio Assistant"</span>
                </div>
                <div class="safari-chat-messages" node_ref=chat_ref>
                    <For
                        each=move || transcript.with(|t| t.messages().to_vec())
                        key=|message| message.id
                        children=move |message| {
                            let class = match message.author {
                                ChatAuthor::Bot => "chat-message bot",
                                ChatAuthor::User => "chat-message user",
                            };
                            view! { <div class=class>{render_markup(&message.text)}</div> }
                        }
                    />
                </div>
                <form class="safari-chat-input" on:submit=submit>
                    <input
                        type="text"
                        placeholder="Ask about projects, skills, or contact..."
                        prop:value=move || draft.get()
                        on:input=move |ev| draft.set(event_target_value(&ev))
                    />
                    <button type="submit" disabled=move || draft.with(|d| d.trim().is_empty())>
                        "Send"
                    </button>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use portfolio_assistant::FixedChooser;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{model::DesktopState, reducer::reduce_desktop};

    #[test]
    fn chat_history_survives_home_view_rebuilds() {
        let reactive_runtime = create_runtime();
        let chat = SafariChat::new();

        chat.draft.set("hi".to_string());
        assert!(chat.submit(&mut FixedChooser(0)));
        assert_eq!(chat.draft.get_untracked(), "");

        let rebuilt = chat;
        assert_eq!(rebuilt.transcript.with_untracked(|t| t.messages().len()), 3);

        rebuilt.draft.set("   ".to_string());
        assert!(!rebuilt.submit(&mut FixedChooser(0)));
        assert_eq!(rebuilt.draft.get_untracked(), "   ");
        assert_eq!(chat.transcript.with_untracked(|t| t.messages().len()), 3);

        reactive_runtime.dispose();
    }

    #[test]
    fn back_then_bookmark_keeps_safari_on_top() {
        let mut state = DesktopState::default();
        reduce_desktop(
            &mut state,
            DesktopAction::OpenWindow {
                window_id: WindowId::Safari,
                data: None,
            },
        );
        reduce_desktop(
            &mut state,
            DesktopAction::OpenWindow {
                window_id: WindowId::Finder,
                data: None,
            },
        );

        let github = SOCIAL_LINKS
            .iter()
            .find(|l| l.id == "github")
            .expect("github bookmark");
        for action in bookmark_actions(github) {
            reduce_desktop(&mut state, action);
        }

        let safari = state.window(WindowId::Safari).cloned().unwrap_or_default();
        assert_eq!(safari.z_index, state.highest_z_index);
        assert_eq!(state.active_window, Some(WindowId::Safari));
        assert!(matches!(safari.data, Some(WindowPayload::Browser(_))));
    }

    #[test]
    fn mail_bookmark_only_navigates_away() {
        let mail = SOCIAL_LINKS
            .iter()
            .find(|l| l.kind == LinkKind::Mail)
            .expect("mail bookmark");
        assert_eq!(
            bookmark_actions(mail),
            vec![DesktopAction::NavigateExternal {
                url: mail.url.to_string()
            }]
        );
    }
}
