//! Reply formatting over the knowledge base.
//!
//! Replies use a small markdown subset: `## ` headings, `**bold**` spans and `• ` bullets.

use rand::Rng;

use crate::{
    intent::{classify, Classification, Intent},
    knowledge::{Project, PERSONAL_INFO, PROJECTS, SOCIAL_LINKS},
};

const PROJECT_LIST_DESCRIPTION_CHARS: usize = 60;

/// Picks an index into a fixed response pool.
pub trait ResponseChooser {
    /// Returns an index in `0..len`. `len` is never zero.
    fn choose(&mut self, len: usize) -> usize;
}

#[derive(Debug, Clone, Copy, Default)]
/// Uniform random selection backed by the thread RNG.
pub struct RandomChooser;

impl ResponseChooser for RandomChooser {
    fn choose(&mut self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Always picks the same slot (modulo the pool size).
pub struct FixedChooser(pub usize);

impl ResponseChooser for FixedChooser {
    fn choose(&mut self, len: usize) -> usize {
        self.0 % len
    }
}

fn greetings() -> [String; 2] {
    let name = PERSONAL_INFO.name;
    [
        format!(
            "Hello! I'm {name}'s portfolio assistant. I can tell you about his projects, skills, and experience. What would you like to know?"
        ),
        format!(
            "Hi there! Ask me anything about {name}'s work—projects, tech stack, or how to get in touch."
        ),
    ]
}

const OUT_OF_SCOPE: [&str; 2] = [
    "I can help with questions about the portfolio owner's projects, skills, and background. Try asking about a specific project or technical skills!",
    "That's outside my scope, but I'd love to help with portfolio-related questions. Ask about projects, experience, or how to connect!",
];

fn bullets<'a>(items: impl IntoIterator<Item = &'a str>) -> String {
    items
        .into_iter()
        .map(|item| format!("• {item}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn project_detail(project: &Project) -> String {
    let mut lines = vec![
        format!("## {}", project.title),
        String::new(),
        format!("**Problem:** {}", project.problem),
        String::new(),
        format!("**Objective:** {}", project.objective),
        String::new(),
        "**Key Features:**".to_string(),
    ];
    lines.extend(project.features.iter().map(|f| format!("• {f}")));
    lines.extend([
        String::new(),
        format!("**Tech Stack:** {}", project.tech_stack.join(", ")),
        String::new(),
        format!("**Architecture:** {}", project.architecture),
        String::new(),
        format!("**Challenges:** {}", project.challenges),
        String::new(),
        format!("**Learnings:** {}", project.learnings),
    ]);

    if project.demo_url.is_some() || project.github_url.is_some() {
        lines.push(String::new());
        lines.push("**Links:**".to_string());
        if let Some(url) = project.demo_url {
            lines.push(format!("• [Live Demo]({url})"));
        }
        if let Some(url) = project.github_url {
            lines.push(format!("• [GitHub]({url})"));
        }
    }

    lines.join("\n")
}

fn project_list() -> String {
    let list = PROJECTS
        .iter()
        .map(|p| {
            let blurb: String = p
                .description
                .chars()
                .take(PROJECT_LIST_DESCRIPTION_CHARS)
                .collect();
            let stack: Vec<&str> = p.tech_stack.iter().take(2).copied().collect();
            format!("• **{}** — {blurb}... ({})", p.title, stack.join(", "))
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Here are the projects I've built:\n\n{list}\n\n*Would you like a detailed overview of any specific project? Just ask!*"
    )
}

fn profile() -> String {
    let info = &PERSONAL_INFO;
    let skills = info
        .skills
        .iter()
        .map(|group| format!("• **{}:** {}", group.label, group.items.join(", ")))
        .collect::<Vec<_>>()
        .join("\n");
    let goals = bullets(info.career_goals.iter().copied());

    format!(
        "## About {name}\n\n{summary}\n\n**Technical Skills:**\n{skills}\n\n**Notable Projects:** I've built eCommerce platforms, AI-powered tools, and mobile apps. Check out the Gallery or ask me about specific projects!\n\n**Career Focus:**\n{goals}\n\nFeel free to reach out—I'm always interested in exciting opportunities and collaborations.",
        name = info.name,
        summary = info.professional_summary,
    )
}

fn skills() -> String {
    let sections = PERSONAL_INFO
        .skills
        .iter()
        .map(|group| {
            format!(
                "**{}:**\n{}",
                group.heading,
                bullets(group.items.iter().copied())
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        "## Technical Skills\n\n{sections}\n\nI'm constantly learning and adding to my toolkit. Currently exploring AI/ML integrations and advanced system design patterns."
    )
}

fn contact() -> String {
    let links = SOCIAL_LINKS
        .iter()
        .map(|s| format!("• **{}:** {}", s.label, s.display_target()))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "## Let's Connect!\n\nYou can reach me through:\n\n{links}\n\nI'm open to freelance projects, full-time opportunities, and interesting collaborations. Looking forward to hearing from you!"
    )
}

/// Formats the reply for a classification.
///
/// A [`Intent::SpecificProject`] classification without a project falls back to the project list.
pub fn respond(classification: &Classification, chooser: &mut impl ResponseChooser) -> String {
    match classification.intent {
        Intent::SpecificProject => match classification.project {
            Some(project) => project_detail(project),
            None => project_list(),
        },
        Intent::GeneralProjects => project_list(),
        Intent::Profile => profile(),
        Intent::Skills => skills(),
        Intent::Contact => contact(),
        Intent::Greeting => {
            let mut pool = greetings();
            let slot = chooser.choose(pool.len());
            std::mem::take(&mut pool[slot])
        }
        Intent::OutOfScope => OUT_OF_SCOPE[chooser.choose(OUT_OF_SCOPE.len())].to_string(),
    }
}

/// Classifies `question` and formats the reply in one step.
pub fn answer(question: &str, chooser: &mut impl ResponseChooser) -> String {
    respond(&classify(question), chooser)
}
