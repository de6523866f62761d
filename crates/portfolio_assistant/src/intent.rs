//! Keyword-based intent classification.

use serde::Serialize;

use crate::knowledge::{Project, PROJECTS};

const GREETING_KEYWORDS: &[&str] = &[
    "hi",
    "hello",
    "hey",
    "howdy",
    "greetings",
    "good morning",
    "good afternoon",
    "good evening",
];
const PROJECT_KEYWORDS: &[&str] = &[
    "project",
    "built",
    "made",
    "created",
    "work",
    "portfolio",
    "app",
    "website",
    "application",
    "show me",
];
const SKILL_KEYWORDS: &[&str] = &[
    "skill",
    "technology",
    "tech",
    "stack",
    "know",
    "use",
    "work with",
    "proficient",
    "tools",
    "languages",
];
const CONTACT_KEYWORDS: &[&str] = &[
    "contact", "reach", "email", "linkedin", "github", "social", "connect", "hire", "message",
    "talk",
];
const ABOUT_KEYWORDS: &[&str] = &[
    "about",
    "who",
    "tell me about yourself",
    "introduction",
    "bio",
    "yourself",
    "background",
    "experience",
    "career",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
/// What a question is about. Variants are listed in classification priority order.
pub enum Intent {
    /// Salutation.
    Greeting,
    /// A question naming one project.
    SpecificProject,
    /// A question about projects in general.
    GeneralProjects,
    /// Skills / tech stack.
    Skills,
    /// How to get in touch.
    Contact,
    /// Background and profile.
    Profile,
    /// Anything else.
    OutOfScope,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Classifier output.
pub struct Classification {
    /// Detected intent.
    pub intent: Intent,
    /// Matched project; set only for [`Intent::SpecificProject`].
    pub project: Option<&'static Project>,
}

impl Classification {
    fn plain(intent: Intent) -> Self {
        Self {
            intent,
            project: None,
        }
    }
}

fn contains_any(haystack: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| haystack.contains(kw))
}

/// Finds the first project (knowledge-base order) that `query` names.
///
/// A project matches when the normalized query equals its slug, is a fragment of its lowercased
/// title, or contains one of its keyword tags.
pub fn find_project(query: &str) -> Option<&'static Project> {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return None;
    }
    PROJECTS.iter().find(|p| {
        p.slug == q || p.title.to_lowercase().contains(&q) || contains_any(&q, p.keywords)
    })
}

/// Classifies a free-text question. First matching rule wins.
pub fn classify(question: &str) -> Classification {
    let q = question.trim().to_lowercase();
    if q.is_empty() {
        return Classification::plain(Intent::OutOfScope);
    }

    if GREETING_KEYWORDS.iter().any(|kw| q.starts_with(kw)) {
        return Classification::plain(Intent::Greeting);
    }

    if let Some(project) = find_project(&q) {
        return Classification {
            intent: Intent::SpecificProject,
            project: Some(project),
        };
    }

    let intent = if contains_any(&q, PROJECT_KEYWORDS) {
        Intent::GeneralProjects
    } else if contains_any(&q, SKILL_KEYWORDS) {
        Intent::Skills
    } else if contains_any(&q, CONTACT_KEYWORDS) {
        Intent::Contact
    } else if contains_any(&q, ABOUT_KEYWORDS) {
        Intent::Profile
    } else {
        Intent::OutOfScope
    };
    Classification::plain(intent)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn intent_of(q: &str) -> Intent {
        classify(q).intent
    }

    #[test]
    fn greetings_match_prefix_only() {
        assert_eq!(intent_of("hi there"), Intent::Greeting);
        assert_eq!(intent_of("  Good Morning!"), Intent::Greeting);
        assert_eq!(intent_of("well, hello"), Intent::OutOfScope);
    }

    #[test]
    fn named_project_is_returned_with_specific_intent() {
        let result = classify("tell me about DSA Visualizer");
        assert_eq!(result.intent, Intent::SpecificProject);
        assert_eq!(result.project.map(|p| p.title), Some("DSA Visualizer"));
    }

    #[test]
    fn exact_slug_and_keyword_tags_select_projects() {
        assert_eq!(find_project("nyc-equity").map(|p| p.id), Some(3));
        assert_eq!(find_project("tell me about the student drift model").map(|p| p.id), Some(4));
        assert_eq!(find_project("peerlink").map(|p| p.id), Some(2));
    }

    #[test]
    fn title_fragment_selects_project() {
        let result = classify("drift detection");
        assert_eq!(result.intent, Intent::SpecificProject);
        assert_eq!(result.project.map(|p| p.id), Some(4));
        assert_eq!(find_project("Behavioral Drift Detection").map(|p| p.id), Some(4));
        assert_eq!(find_project("equity dash").map(|p| p.id), Some(3));
    }

    #[test]
    fn specific_project_wins_over_general_project_keywords() {
        let result = classify("show me the power bi project");
        assert_eq!(result.intent, Intent::SpecificProject);
        assert_eq!(result.project.map(|p| p.slug), Some("nyc-equity"));
    }

    #[test]
    fn general_project_questions() {
        assert_eq!(intent_of("what have you built?"), Intent::GeneralProjects);
        assert_eq!(classify("what have you built?").project, None);
    }

    #[test]
    fn skills_contact_and_profile() {
        assert_eq!(intent_of("what's your tech stack"), Intent::Skills);
        assert_eq!(intent_of("how do I reach you"), Intent::Contact);
        assert_eq!(intent_of("what is your background?"), Intent::Profile);
    }

    #[test]
    fn nonsense_and_blank_input_are_out_of_scope() {
        assert_eq!(intent_of("asdkjfh"), Intent::OutOfScope);
        assert_eq!(intent_of("   "), Intent::OutOfScope);
        assert_eq!(find_project(""), None);
    }
}
