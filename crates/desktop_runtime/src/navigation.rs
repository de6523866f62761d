//! External link routing into the Safari window.

use url::Url;

use crate::{
    model::{BrowserPage, WindowId, WindowPayload},
    reducer::DesktopAction,
};

/// Hosts that refuse to render inside a frame.
pub const EMBED_BLOCKED_HOSTS: &[&str] = &[
    "github.com",
    "linkedin.com",
    "twitter.com",
    "x.com",
    "facebook.com",
    "instagram.com",
    "medium.com",
    "dev.to",
    "stackoverflow.com",
    "reddit.com",
    "codolio.com",
];

const YOUTUBE_EMBED_BASE: &str = "https://www.youtube.com/embed/";
const VIMEO_EMBED_BASE: &str = "https://player.vimeo.com/video/";

fn is_youtube_host(host: &str) -> bool {
    host == "youtube.com" || host.ends_with(".youtube.com")
}

fn youtube_video_id(url: &Url) -> Option<String> {
    let host = url.host_str()?;
    let mut segments = url.path_segments()?;
    let id = if host == "youtu.be" {
        segments.next().map(str::to_string)
    } else if is_youtube_host(host) {
        match segments.next()? {
            "watch" => url
                .query_pairs()
                .find(|(key, _)| key == "v")
                .map(|(_, value)| value.into_owned()),
            "embed" | "v" => segments.next().map(str::to_string),
            _ => None,
        }
    } else {
        None
    };
    id.filter(|id| !id.is_empty())
}

fn vimeo_video_id(url: &Url) -> Option<String> {
    let host = url.host_str()?;
    if host != "vimeo.com" && !host.ends_with(".vimeo.com") {
        return None;
    }
    let first = url.path_segments()?.next()?;
    let digits: String = first.chars().take_while(char::is_ascii_digit).collect();
    (!digits.is_empty()).then_some(digits)
}

/// Rewrites YouTube and Vimeo page links to their embeddable player URLs.
///
/// Any other (or unparseable) address is returned unchanged.
pub fn embed_url(raw: &str) -> String {
    let Ok(url) = Url::parse(raw) else {
        return raw.to_string();
    };
    if let Some(id) = youtube_video_id(&url) {
        return format!("{YOUTUBE_EMBED_BASE}{id}");
    }
    if let Some(id) = vimeo_video_id(&url) {
        return format!("{VIMEO_EMBED_BASE}{id}");
    }
    raw.to_string()
}

/// Host name without a `www.` prefix, or the input when it has no host.
pub fn domain_label(raw: &str) -> String {
    Url::parse(raw)
        .ok()
        .and_then(|url| url.host_str().map(|host| host.replacen("www.", "", 1)))
        .filter(|host| !host.is_empty())
        .unwrap_or_else(|| raw.to_string())
}

pub fn is_embed_blocked(raw: &str) -> bool {
    let Ok(url) = Url::parse(raw) else {
        return false;
    };
    let Some(host) = url.host_str() else {
        return false;
    };
    let host = host.to_lowercase();
    EMBED_BLOCKED_HOSTS.iter().any(|site| host.contains(site))
}

/// Embedded page record for `url`. A blank `title` defaults to [`domain_label`].
pub fn browser_page(url: &str, title: &str) -> BrowserPage {
    let title = if title.trim().is_empty() {
        domain_label(url)
    } else {
        title.to_string()
    };
    BrowserPage {
        url: embed_url(url),
        original_url: url.to_string(),
        title,
        is_embedded: true,
    }
}

/// Opens `url` in the Safari window, raising it.
pub fn open_in_safari(url: &str, title: &str) -> DesktopAction {
    DesktopAction::OpenWindow {
        window_id: WindowId::Safari,
        data: Some(WindowPayload::Browser(browser_page(url, title))),
    }
}

/// Replaces the page shown by an already open Safari window (keeps its maximized state).
pub fn navigate_safari(url: &str, title: &str) -> DesktopAction {
    DesktopAction::UpdateWindowData {
        window_id: WindowId::Safari,
        data: Some(WindowPayload::Browser(BrowserPage {
            url: url.to_string(),
            original_url: url.to_string(),
            title: title.to_string(),
            is_embedded: true,
        })),
    }
}

/// Returns Safari to its home screen.
pub fn safari_home() -> DesktopAction {
    DesktopAction::UpdateWindowData {
        window_id: WindowId::Safari,
        data: None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Load state of the embedded frame.
pub enum FrameStatus {
    Loading,
    Loaded,
    Failed,
}

impl FrameStatus {
    /// Known-blocked hosts skip straight to the fallback view.
    pub fn for_page(page: &BrowserPage) -> Self {
        if is_embed_blocked(&page.original_url) {
            Self::Failed
        } else {
            Self::Loading
        }
    }
}
