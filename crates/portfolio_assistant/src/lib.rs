//! Static portfolio knowledge base and the scripted assistant that answers questions about it.
//!
//! The assistant is a pure pipeline: [`classify`] maps free text to an [`Intent`] (plus the
//! matched [`Project`] for project questions) and [`respond`] formats a reply from the knowledge
//! base. The only non-determinism is the greeting/fallback pool selection, which goes through a
//! [`ResponseChooser`] so tests can pin it.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod chat;
pub mod intent;
pub mod knowledge;
pub mod response;

pub use chat::{parse_inline, ChatAuthor, ChatMessage, ChatTranscript, InlineSegment};
pub use intent::{classify, find_project, Classification, Intent};
pub use knowledge::{
    find_project_by_slug, projects_by_category, LinkKind, PersonalInfo, Project, SkillGroup,
    SocialLink, GALLERY_CATEGORIES, PERSONAL_INFO, PROJECTS, SOCIAL_LINKS,
};
pub use response::{answer, respond, FixedChooser, RandomChooser, ResponseChooser};
