use std::{collections::BTreeMap, fmt, str::FromStr};

use platform_host::ThemePreference;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stacking order assigned before any window has been focused.
pub const INITIAL_Z_INDEX: u32 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowId {
    Finder,
    Contact,
    Terminal,
    Safari,
    Photos,
    Resume,
    #[serde(rename = "txtfile")]
    TxtFile,
    #[serde(rename = "imgfile")]
    ImgFile,
    #[serde(rename = "projectDetail")]
    ProjectDetail,
}

impl WindowId {
    pub const ALL: [WindowId; 9] = [
        Self::Finder,
        Self::Contact,
        Self::Terminal,
        Self::Safari,
        Self::Photos,
        Self::Resume,
        Self::TxtFile,
        Self::ImgFile,
        Self::ProjectDetail,
    ];

    pub const fn key(self) -> &'static str {
        match self {
            Self::Finder => "finder",
            Self::Contact => "contact",
            Self::Terminal => "terminal",
            Self::Safari => "safari",
            Self::Photos => "photos",
            Self::Resume => "resume",
            Self::TxtFile => "txtfile",
            Self::ImgFile => "imgfile",
            Self::ProjectDetail => "projectDetail",
        }
    }

    /// Looks up an identifier by its string key. Unknown keys yield `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.key() == key)
    }

    /// Windows that keep their natural width when maximized.
    pub const fn has_limited_width(self) -> bool {
        matches!(self, Self::ProjectDetail)
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown window id `{0}`")]
pub struct WindowIdParseError(pub String);

impl FromStr for WindowId {
    type Err = WindowIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s).ok_or_else(|| WindowIdParseError(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Txt,
    Img,
    Url,
    Pdf,
    Fig,
}

impl FileKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Txt => "TXT",
            Self::Img => "IMG",
            Self::Url => "URL",
            Self::Pdf => "PDF",
            Self::Fig => "FIG",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinderFile {
    pub id: u32,
    pub name: String,
    pub kind: FileKind,
    pub icon: String,
    pub subtitle: Option<String>,
    pub image_url: Option<String>,
    pub href: Option<String>,
    pub description: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowserPage {
    /// Address loaded in the frame (embed form for video hosts).
    pub url: String,
    /// Address the visitor asked for; used for "open in new tab".
    pub original_url: String,
    pub title: String,
    pub is_embedded: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRef {
    pub slug: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
/// Per-window content. Each variant belongs to exactly one window.
pub enum WindowPayload {
    Browser(BrowserPage),
    TextFile(FinderFile),
    ImageFile(FinderFile),
    Document(FinderFile),
    Project(ProjectRef),
}

impl WindowPayload {
    /// Window this payload renders in.
    pub const fn target(&self) -> WindowId {
        match self {
            Self::Browser(_) => WindowId::Safari,
            Self::TextFile(_) => WindowId::TxtFile,
            Self::ImageFile(_) => WindowId::ImgFile,
            Self::Document(_) => WindowId::Resume,
            Self::Project(_) => WindowId::ProjectDetail,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowState {
    pub is_open: bool,
    pub is_minimized: bool,
    pub is_maximized: bool,
    pub z_index: u32,
    pub data: Option<WindowPayload>,
}

impl Default for WindowState {
    fn default() -> Self {
        Self {
            is_open: false,
            is_minimized: false,
            is_maximized: false,
            z_index: INITIAL_Z_INDEX,
            data: None,
        }
    }
}

impl WindowState {
    pub fn is_visible(&self) -> bool {
        self.is_open && !self.is_minimized
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Fixed per-identifier window table. Entries are created once and never added or removed.
pub struct WindowRegistry(BTreeMap<WindowId, WindowState>);

impl Default for WindowRegistry {
    fn default() -> Self {
        Self(
            WindowId::ALL
                .into_iter()
                .map(|id| (id, WindowState::default()))
                .collect(),
        )
    }
}

impl WindowRegistry {
    pub fn get(&self, id: WindowId) -> Option<&WindowState> {
        self.0.get(&id)
    }

    pub fn get_mut(&mut self, id: WindowId) -> Option<&mut WindowState> {
        self.0.get_mut(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (WindowId, &WindowState)> {
        self.0.iter().map(|(id, state)| (*id, state))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (WindowId, &mut WindowState)> {
        self.0.iter_mut().map(|(id, state)| (*id, state))
    }

    #[cfg(test)]
    pub(crate) fn remove(&mut self, id: WindowId) -> Option<WindowState> {
        self.0.remove(&id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesktopState {
    pub windows: WindowRegistry,
    pub highest_z_index: u32,
    pub active_window: Option<WindowId>,
    pub theme: ThemePreference,
}

impl Default for DesktopState {
    fn default() -> Self {
        Self {
            windows: WindowRegistry::default(),
            highest_z_index: INITIAL_Z_INDEX,
            active_window: None,
            theme: ThemePreference::default(),
        }
    }
}

impl DesktopState {
    pub fn window(&self, id: WindowId) -> Option<&WindowState> {
        self.windows.get(id)
    }

    pub fn is_open(&self, id: WindowId) -> bool {
        self.window(id).is_some_and(|w| w.is_open)
    }

    /// `false` for unknown keys.
    pub fn is_window_open(&self, key: &str) -> bool {
        WindowId::from_key(key).is_some_and(|id| self.is_open(id))
    }

    /// `None` for unknown keys.
    pub fn window_data(&self, key: &str) -> Option<&WindowPayload> {
        let id = WindowId::from_key(key)?;
        self.window(id)?.data.as_ref()
    }

    pub fn has_maximized_window(&self) -> bool {
        self.windows
            .iter()
            .any(|(_, w)| w.is_open && w.is_maximized)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn window_keys_round_trip_through_from_str() {
        for id in WindowId::ALL {
            assert_eq!(id.key().parse::<WindowId>(), Ok(id));
        }
        assert_eq!(
            "notes".parse::<WindowId>(),
            Err(WindowIdParseError("notes".to_string()))
        );
        assert_eq!(WindowId::from_key("ProjectDetail"), None);
    }

    #[test]
    fn serde_uses_window_keys() {
        assert_eq!(
            serde_json::to_string(&WindowId::ProjectDetail).expect("serialize"),
            "\"projectDetail\""
        );
        assert_eq!(
            serde_json::from_str::<WindowId>("\"txtfile\"").expect("deserialize"),
            WindowId::TxtFile
        );
    }

    #[test]
    fn default_state_has_every_window_closed() {
        let state = DesktopState::default();
        assert_eq!(state.highest_z_index, INITIAL_Z_INDEX);
        assert_eq!(state.active_window, None);
        assert_eq!(state.windows.iter().count(), WindowId::ALL.len());
        assert!(state.windows.iter().all(|(_, w)| *w == WindowState::default()));
    }

    #[test]
    fn queries_tolerate_unknown_keys() {
        let state = DesktopState::default();
        assert!(!state.is_window_open("launchpad"));
        assert_eq!(state.window_data("launchpad"), None);
        assert!(!state.is_window_open("finder"));
    }

    #[test]
    fn payload_targets_are_unique_per_variant() {
        let page = WindowPayload::Browser(BrowserPage {
            url: "https://example.com".to_string(),
            original_url: "https://example.com".to_string(),
            title: "example.com".to_string(),
            is_embedded: true,
        });
        let project = WindowPayload::Project(ProjectRef {
            slug: "dsa".to_string(),
        });
        assert_eq!(page.target(), WindowId::Safari);
        assert_eq!(project.target(), WindowId::ProjectDetail);
    }

    #[test]
    fn minimized_windows_are_not_visible() {
        let window = WindowState {
            is_open: true,
            is_minimized: true,
            ..WindowState::default()
        };
        assert!(!window.is_visible());
    }
}
