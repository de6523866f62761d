//! Finder location tree and navigation.
//!
//! The `work` location is generated from the project knowledge base, one folder per project.

use portfolio_assistant::{Project, PERSONAL_INFO, PROJECTS};

use crate::{
    model::{FileKind, FinderFile, WindowId, WindowPayload},
    navigation::open_in_safari,
    reducer::DesktopAction,
};

const FOLDER_ICON: &str = "/images/folder.png";
const RESUME_HREF: &str = "/files/resume.pdf";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinderFolder {
    pub id: u32,
    pub name: String,
    pub icon: String,
    pub children: Vec<FinderNode>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FinderNode {
    Folder(FinderFolder),
    File(FinderFile),
}

impl FinderNode {
    pub fn id(&self) -> u32 {
        match self {
            Self::Folder(folder) => folder.id,
            Self::File(file) => file.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Folder(folder) => &folder.name,
            Self::File(file) => &file.name,
        }
    }

    pub fn icon(&self) -> &str {
        match self {
            Self::Folder(folder) => &folder.icon,
            Self::File(file) => &file.icon,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinderLocation {
    pub key: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub children: Vec<FinderNode>,
}

fn file(id: u32, name: impl Into<String>, kind: FileKind) -> FinderFile {
    let icon = match kind {
        FileKind::Txt => "/images/txt.png",
        FileKind::Img => "/images/image.png",
        FileKind::Url => "/images/safari.png",
        FileKind::Pdf => "/images/pdf.png",
        FileKind::Fig => "/images/plain.png",
    };
    FinderFile {
        id,
        name: name.into(),
        kind,
        icon: icon.to_string(),
        subtitle: None,
        image_url: None,
        href: None,
        description: Vec::new(),
    }
}

fn project_folder(project: &Project) -> FinderNode {
    let base = project.id * 100;
    let mut children = vec![
        FinderNode::File(FinderFile {
            subtitle: Some(project.title.to_string()),
            description: vec![
                project.description.to_string(),
                project.problem.to_string(),
                project.objective.to_string(),
            ],
            ..file(base + 1, format!("{}.txt", project.title), FileKind::Txt)
        }),
        FinderNode::File(FinderFile {
            image_url: Some(project.thumbnail.to_string()),
            ..file(base + 2, format!("{}.png", project.slug), FileKind::Img)
        }),
    ];
    if let Some(demo) = project.demo_url {
        children.push(FinderNode::File(FinderFile {
            href: Some(demo.to_string()),
            ..file(base + 3, format!("{}.com", project.slug), FileKind::Url)
        }));
    }
    if let Some(repo) = project.github_url {
        children.push(FinderNode::File(FinderFile {
            href: Some(repo.to_string()),
            ..file(base + 4, "Source Code", FileKind::Url)
        }));
    }
    FinderNode::Folder(FinderFolder {
        id: base,
        name: project.title.to_string(),
        icon: FOLDER_ICON.to_string(),
        children,
    })
}

/// The four sidebar locations: `work`, `about`, `resume`, `trash`.
pub fn finder_locations() -> Vec<FinderLocation> {
    vec![
        FinderLocation {
            key: "work",
            name: "Work",
            icon: "/icons/work.svg",
            children: PROJECTS.iter().map(project_folder).collect(),
        },
        FinderLocation {
            key: "about",
            name: "About me",
            icon: "/icons/info.svg",
            children: vec![
                FinderNode::File(FinderFile {
                    subtitle: Some(format!("Meet {}", PERSONAL_INFO.name)),
                    image_url: Some("/images/profile.png".to_string()),
                    description: PERSONAL_INFO.bio.iter().map(|s| s.to_string()).collect(),
                    ..file(1, "about-me.txt", FileKind::Txt)
                }),
                FinderNode::File(FinderFile {
                    image_url: Some("/images/profile.png".to_string()),
                    ..file(2, "me.png", FileKind::Img)
                }),
            ],
        },
        FinderLocation {
            key: "resume",
            name: "Resume",
            icon: "/icons/file.svg",
            children: vec![FinderNode::File(FinderFile {
                href: Some(RESUME_HREF.to_string()),
                ..file(1, "Resume.pdf", FileKind::Pdf)
            })],
        },
        FinderLocation {
            key: "trash",
            name: "Trash",
            icon: "/icons/trash.svg",
            children: vec![
                FinderNode::File(FinderFile {
                    image_url: Some("/images/trash-1.png".to_string()),
                    ..file(1, "old-portfolio.png", FileKind::Img)
                }),
                FinderNode::File(FinderFile {
                    href: Some("https://www.figma.com/community".to_string()),
                    ..file(2, "Design.fig", FileKind::Fig)
                }),
            ],
        },
    ]
}

/// Action for double-clicking a file, or `None` for links without a target.
pub fn open_file_action(file: &FinderFile) -> Option<DesktopAction> {
    let open = |window_id: WindowId, payload: WindowPayload| DesktopAction::OpenWindow {
        window_id,
        data: Some(payload),
    };
    match file.kind {
        FileKind::Txt => Some(open(WindowId::TxtFile, WindowPayload::TextFile(file.clone()))),
        FileKind::Img => Some(open(WindowId::ImgFile, WindowPayload::ImageFile(file.clone()))),
        FileKind::Pdf => Some(open(WindowId::Resume, WindowPayload::Document(file.clone()))),
        FileKind::Url | FileKind::Fig => file
            .href
            .as_deref()
            .map(|href| open_in_safari(href, &file.name)),
    }
}

fn find_folder(nodes: &[FinderNode], id: u32) -> Option<&FinderFolder> {
    nodes.iter().find_map(|node| match node {
        FinderNode::Folder(folder) if folder.id == id => Some(folder),
        FinderNode::Folder(folder) => find_folder(&folder.children, id),
        FinderNode::File(_) => None,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinderViewMode {
    Grid,
    List,
    Columns,
}

impl FinderViewMode {
    pub const ALL: [FinderViewMode; 3] = [Self::Grid, Self::List, Self::Columns];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Grid => "grid",
            Self::List => "list",
            Self::Columns => "columns",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Sidebar selection plus the folder currently entered.
pub struct FinderNav {
    pub location: &'static str,
    pub folder: Option<u32>,
}

impl Default for FinderNav {
    fn default() -> Self {
        Self {
            location: "work",
            folder: None,
        }
    }
}

impl FinderNav {
    pub fn select_location(&mut self, key: &'static str) {
        self.location = key;
        self.folder = None;
    }

    pub fn enter_folder(&mut self, id: u32) {
        self.folder = Some(id);
    }

    /// Leaves the current folder.
    pub fn back(&mut self) {
        self.folder = None;
    }

    fn current_location<'a>(&self, locations: &'a [FinderLocation]) -> Option<&'a FinderLocation> {
        locations.iter().find(|l| l.key == self.location)
    }

    fn current_folder<'a>(&self, locations: &'a [FinderLocation]) -> Option<&'a FinderFolder> {
        let location = self.current_location(locations)?;
        find_folder(&location.children, self.folder?)
    }

    /// Items shown in the content area.
    pub fn items<'a>(&self, locations: &'a [FinderLocation]) -> &'a [FinderNode] {
        if let Some(folder) = self.current_folder(locations) {
            return &folder.children;
        }
        self.current_location(locations)
            .map(|l| l.children.as_slice())
            .unwrap_or_default()
    }

    /// Window title: the open folder, else the location.
    pub fn title(&self, locations: &[FinderLocation]) -> String {
        if let Some(folder) = self.current_folder(locations) {
            return folder.name.clone();
        }
        self.current_location(locations)
            .map(|l| l.name.to_string())
            .unwrap_or_else(|| "Finder".to_string())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn locations_cover_work_about_resume_trash() {
        let keys: Vec<_> = finder_locations().iter().map(|l| l.key).collect();
        assert_eq!(keys, vec!["work", "about", "resume", "trash"]);
    }

    #[test]
    fn work_has_one_folder_per_project() {
        let locations = finder_locations();
        let nav = FinderNav::default();
        let names: Vec<_> = nav.items(&locations).iter().map(|n| n.name()).collect();
        assert_eq!(
            names,
            PROJECTS.iter().map(|p| p.title).collect::<Vec<_>>()
        );
    }

    #[test]
    fn entering_a_folder_lists_its_files() {
        let locations = finder_locations();
        let mut nav = FinderNav::default();
        nav.enter_folder(100);

        assert_eq!(nav.title(&locations), "DSA Visualizer");
        let kinds: Vec<_> = nav
            .items(&locations)
            .iter()
            .filter_map(|node| match node {
                FinderNode::File(file) => Some(file.kind),
                FinderNode::Folder(_) => None,
            })
            .collect();
        assert_eq!(kinds, vec![FileKind::Txt, FileKind::Img, FileKind::Url]);

        nav.back();
        assert_eq!(nav.title(&locations), "Work");
    }

    #[test]
    fn switching_location_leaves_folder() {
        let locations = finder_locations();
        let mut nav = FinderNav::default();
        nav.enter_folder(100);
        nav.select_location("resume");
        assert_eq!(nav.folder, None);
        assert_eq!(nav.items(&locations).len(), 1);
    }

    #[test]
    fn files_open_in_matching_windows() {
        let txt = file(1, "notes.txt", FileKind::Txt);
        let pdf = file(2, "cv.pdf", FileKind::Pdf);
        let link = FinderFile {
            href: Some("https://example.com".to_string()),
            ..file(3, "site", FileKind::Url)
        };

        assert_eq!(
            open_file_action(&txt),
            Some(DesktopAction::OpenWindow {
                window_id: WindowId::TxtFile,
                data: Some(WindowPayload::TextFile(txt.clone())),
            })
        );
        assert_eq!(
            open_file_action(&pdf),
            Some(DesktopAction::OpenWindow {
                window_id: WindowId::Resume,
                data: Some(WindowPayload::Document(pdf.clone())),
            })
        );
        assert_eq!(
            open_file_action(&link),
            Some(open_in_safari("https://example.com", "site"))
        );
        assert_eq!(open_file_action(&file(4, "broken.fig", FileKind::Fig)), None);
    }
}
