//! Knowledge base records consumed by the assistant and the content windows.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
/// One group of the skills map.
pub struct SkillGroup {
    /// Short label used in the profile summary ("Frontend").
    pub label: &'static str,
    /// Heading used in the skills answer and the terminal window ("Frontend Development").
    pub heading: &'static str,
    /// Skill names.
    pub items: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
/// Owner profile.
pub struct PersonalInfo {
    /// Display name.
    pub name: &'static str,
    /// Job title.
    pub title: &'static str,
    /// Location.
    pub location: &'static str,
    /// Contact email.
    pub email: &'static str,
    /// Paragraph used by the profile answer.
    pub professional_summary: &'static str,
    /// Short bio lines shown in the about location.
    pub bio: &'static [&'static str],
    /// Skills map in display order.
    pub skills: &'static [SkillGroup],
    /// Career goals.
    pub career_goals: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
/// A portfolio project with the metadata the assistant quotes.
pub struct Project {
    /// Stable numeric id.
    pub id: u32,
    /// Display title.
    pub title: &'static str,
    /// URL-safe slug; an exact slug match selects the project.
    pub slug: &'static str,
    /// Lowercase keyword tags; any tag contained in a question selects the project.
    pub keywords: &'static [&'static str],
    /// Gallery images in carousel order.
    pub images: &'static [&'static str],
    /// Thumbnail image.
    pub thumbnail: &'static str,
    /// One-line description.
    pub description: &'static str,
    /// Problem statement.
    pub problem: &'static str,
    /// Objective.
    pub objective: &'static str,
    /// Key features.
    pub features: &'static [&'static str],
    /// Architecture summary.
    pub architecture: &'static str,
    /// Challenges.
    pub challenges: &'static str,
    /// Learnings.
    pub learnings: &'static str,
    /// Technologies used.
    pub tech_stack: &'static [&'static str],
    /// Live demo link.
    pub demo_url: Option<&'static str>,
    /// Source repository link.
    pub github_url: Option<&'static str>,
    /// Gallery categories this project appears under.
    pub categories: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
/// How a social link is followed.
pub enum LinkKind {
    /// Web profile, opened in the Safari window.
    Social,
    /// `mailto:` link, handed to the host.
    Mail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
/// Bookmark/contact entry.
pub struct SocialLink {
    /// Stable id.
    pub id: &'static str,
    /// Display label.
    pub label: &'static str,
    /// Target URL.
    pub url: &'static str,
    /// Icon asset path.
    pub icon: &'static str,
    /// Link kind.
    pub kind: LinkKind,
    /// Accent color for the bookmark tag.
    pub color: &'static str,
}

impl SocialLink {
    /// The URL as shown to a reader: `mailto:` links show the bare address.
    pub fn display_target(&self) -> &'static str {
        match self.kind {
            LinkKind::Mail => self.url.trim_start_matches("mailto:"),
            LinkKind::Social => self.url,
        }
    }
}

/// Owner profile.
pub static PERSONAL_INFO: PersonalInfo = PersonalInfo {
    name: "Suharshit Singh",
    title: "Full Stack Developer",
    location: "India",
    email: "suharshit123@gmail.com",
    professional_summary: "I'm Suharshit Singh, a Full Stack Developer with a passion for building modern, user-centric web and mobile applications. I specialize in the React ecosystem—including Next.js and React Native—paired with Node.js backends. My focus is on creating products that are not just functional, but delightful to use: clean interfaces, smooth interactions, and solid architecture under the hood.",
    bio: &[
        "I'm Suharshit Singh, a passionate Full Stack Developer who loves building sleek, interactive web applications.",
        "I specialize in React, Next.js, and Node.js—creating fast, responsive, and user-friendly experiences.",
        "I'm big on clean UI, good UX, and writing code that's maintainable and scalable.",
    ],
    skills: &[
        SkillGroup {
            label: "Frontend",
            heading: "Frontend Development",
            items: &["React.js", "Next.js", "TypeScript", "Tailwind CSS", "GSAP"],
        },
        SkillGroup {
            label: "Mobile",
            heading: "Mobile Development",
            items: &["React Native", "Expo"],
        },
        SkillGroup {
            label: "Backend",
            heading: "Backend Development",
            items: &["Node.js", "Express", "NestJS", "Hono"],
        },
        SkillGroup {
            label: "Database",
            heading: "Database",
            items: &["MongoDB", "PostgreSQL"],
        },
        SkillGroup {
            label: "Dev Tools",
            heading: "Dev Tools",
            items: &["Git", "GitHub", "Docker"],
        },
    ],
    career_goals: &[
        "Continue building impactful products that solve real problems",
        "Deepen expertise in full-stack architecture and system design",
        "Contribute to open-source projects and the developer community",
        "Explore opportunities in AI-powered application development",
    ],
};

/// Projects in gallery order. Classification checks them in this order.
pub static PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "DSA Visualizer",
        slug: "dsa",
        keywords: &["dsa", "data structures", "algorithms", "visualizer", "interactive", "learning"],
        images: &[
            "/images/dsa/dsaimage1.png",
            "/images/dsa/dsaimage2.png",
            "/images/dsa/dsaimage3.png",
            "/images/dsa/dsaimage4.png",
        ],
        thumbnail: "/images/dsa/dsaimage1.png",
        description: "Interactive platform to visualize data structures and algorithms step-by-step.",
        problem: "Learning data structures and algorithms can be abstract and difficult to grasp without visual representation of how they work step-by-step.",
        objective: "Create an interactive educational platform that visualizes DSA concepts in real-time, helping students understand complex algorithms through visual learning.",
        features: &[
            "Step-by-step algorithm visualization",
            "Interactive data structure manipulation",
            "Multiple sorting and searching algorithms",
            "Custom input support for testing",
            "Speed control for animation playback",
        ],
        architecture: "Built with modern web technologies for a responsive and interactive experience. Component-based architecture for modular algorithm implementations.",
        challenges: "Creating smooth animations that accurately represent algorithm steps while maintaining performance and educational clarity.",
        learnings: "Deepened understanding of algorithm complexity, animation optimization, and building educational tools that make learning engaging.",
        tech_stack: &["React", "JavaScript", "CSS"],
        demo_url: Some("https://dsa-visualizer-suharshit-singh.vercel.app/"),
        github_url: None,
        categories: &["Library", "Favorites"],
    },
    Project {
        id: 2,
        title: "PeerLink",
        slug: "peerlink",
        keywords: &["peerlink", "desktop", "networking", "collaboration", "peer", "application"],
        images: &[
            "/images/peerlink/peerlinkimage1.png",
            "/images/peerlink/peerlinkimage2.png",
            "/images/peerlink/peerlinkimage3.png",
        ],
        thumbnail: "/images/peerlink/peerlinkimage1.png",
        description: "Desktop-based peer networking and collaboration application.",
        problem: "Collaborative work often requires complex setups for peer-to-peer communication and file sharing between team members.",
        objective: "Build a streamlined desktop application that enables seamless peer networking and real-time collaboration without complicated infrastructure.",
        features: &[
            "Peer-to-peer connection establishment",
            "Real-time collaboration features",
            "File sharing capabilities",
            "Secure communication channels",
            "Intuitive desktop interface",
        ],
        architecture: "Desktop application built with modern frameworks for cross-platform compatibility. Peer-to-peer networking protocol for direct communication.",
        challenges: "Implementing reliable peer discovery and maintaining stable connections across different network configurations.",
        learnings: "Gained experience in desktop application development, networking protocols, and building robust peer-to-peer communication systems.",
        tech_stack: &["Python", "Networking", "Desktop"],
        demo_url: None,
        github_url: None,
        categories: &["Library", "People"],
    },
    Project {
        id: 3,
        title: "NYC Equity Dashboard",
        slug: "nyc-equity",
        keywords: &[
            "power bi",
            "dashboard",
            "nyc",
            "equity",
            "analytics",
            "data visualization",
            "civic",
        ],
        images: &[
            "/images/nyc equity/nycimage1.png",
            "/images/nyc equity/nycimage2.png",
            "/images/nyc equity/nycimage3.png",
            "/images/nyc equity/nycimage4.png",
        ],
        thumbnail: "/images/nyc equity/nycimage1.png",
        description: "Power BI dashboard analyzing service equity and civic efficiency in New York City.",
        problem: "Civic data is often scattered and difficult to analyze, making it challenging to identify service equity gaps across different communities.",
        objective: "Create a comprehensive Power BI dashboard that visualizes NYC civic data to identify equity patterns and inform better policy decisions.",
        features: &[
            "Interactive data visualizations",
            "Multi-dimensional equity analysis",
            "Geographic mapping of services",
            "Trend analysis over time",
            "Comparative community metrics",
        ],
        architecture: "Built with Microsoft Power BI for advanced data visualization. Connected to civic data sources with real-time refresh capabilities.",
        challenges: "Integrating diverse data sources and creating meaningful visualizations that reveal equity patterns without oversimplifying complex issues.",
        learnings: "Enhanced skills in data visualization, Power BI development, and translating complex civic data into actionable insights.",
        tech_stack: &["Power BI", "Data Analytics", "SQL"],
        demo_url: None,
        github_url: None,
        categories: &["Library", "Memories"],
    },
    Project {
        id: 4,
        title: "Student Behavioral Drift Detection",
        slug: "student-drift",
        keywords: &[
            "ml",
            "machine learning",
            "python",
            "analytics",
            "behavioral",
            "prediction",
            "student",
        ],
        images: &[
            "/images/student behavioural drift/studentimage1.png",
            "/images/student behavioural drift/studentimage2.png",
            "/images/student behavioural drift/studentimage3.png",
        ],
        thumbnail: "/images/student behavioural drift/studentimage1.png",
        description: "Predictive analytics project to detect behavioral drift in students using Python and ML.",
        problem: "Educational institutions struggle to identify students who may be experiencing behavioral changes that affect their academic performance early enough to intervene.",
        objective: "Develop a machine learning system that detects behavioral drift patterns in student data, enabling early intervention and support.",
        features: &[
            "Behavioral pattern analysis",
            "Drift detection algorithms",
            "Predictive modeling for interventions",
            "Visual analytics dashboard",
            "Early warning system",
        ],
        architecture: "Python-based ML pipeline with data preprocessing, feature engineering, and model training. Web interface for result visualization.",
        challenges: "Balancing model accuracy with interpretability, and handling imbalanced datasets while maintaining ethical considerations in educational analytics.",
        learnings: "Developed expertise in ML model development, drift detection techniques, and building analytics systems for educational contexts.",
        tech_stack: &["Python", "Machine Learning", "Analytics"],
        demo_url: Some("https://student-behavioral-drift-detection.onrender.com/"),
        github_url: None,
        categories: &["Library", "Favorites"],
    },
];

/// Gallery sidebar categories. `Library` lists every project.
pub static GALLERY_CATEGORIES: &[&str] = &["Library", "Memories", "Places", "People", "Favorites"];

/// Bookmarks and contact links.
pub static SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        id: "linkedin",
        label: "LinkedIn",
        url: "https://www.linkedin.com/in/suharshit-singh0905/",
        icon: "/icons/linkedin.svg",
        kind: LinkKind::Social,
        color: "#0A66C2",
    },
    SocialLink {
        id: "github",
        label: "GitHub",
        url: "https://github.com/Suharshit",
        icon: "/icons/github.svg",
        kind: LinkKind::Social,
        color: "#24292F",
    },
    SocialLink {
        id: "codolio",
        label: "Codolio",
        url: "https://codolio.com/profile/Suharshit",
        icon: "/icons/codolio.svg",
        kind: LinkKind::Social,
        color: "#6366F1",
    },
    SocialLink {
        id: "email",
        label: "Email",
        url: "mailto:suharshit123@gmail.com",
        icon: "/icons/mail.svg",
        kind: LinkKind::Mail,
        color: "#EA4335",
    },
];

/// Looks a project up by its exact slug.
pub fn find_project_by_slug(slug: &str) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.slug == slug)
}

/// Projects shown under a gallery category.
pub fn projects_by_category(category: &str) -> Vec<&'static Project> {
    if category == "Library" {
        return PROJECTS.iter().collect();
    }
    PROJECTS
        .iter()
        .filter(|p| p.categories.iter().any(|c| *c == category))
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn library_lists_every_project() {
        assert_eq!(projects_by_category("Library").len(), PROJECTS.len());
    }

    #[test]
    fn category_filter_respects_membership() {
        let favorites: Vec<_> = projects_by_category("Favorites")
            .into_iter()
            .map(|p| p.slug)
            .collect();
        assert_eq!(favorites, vec!["dsa", "student-drift"]);
        assert!(projects_by_category("Places").is_empty());
    }

    #[test]
    fn slugs_are_unique_and_resolvable() {
        for project in PROJECTS {
            assert_eq!(find_project_by_slug(project.slug), Some(project));
        }
    }

    #[test]
    fn mail_links_display_bare_address() {
        let email = SOCIAL_LINKS
            .iter()
            .find(|s| s.kind == LinkKind::Mail)
            .expect("mail link");
        assert_eq!(email.display_target(), "suharshit123@gmail.com");
    }

    #[test]
    fn profile_copy_keeps_dashes() {
        assert!(PERSONAL_INFO
            .professional_summary
            .contains("React ecosystem—including Next.js and React Native—paired"));
        assert!(PERSONAL_INFO
            .bio
            .iter()
            .any(|line| line.contains("Node.js—creating")));
    }

    #[test]
    fn knowledge_records_serialize() {
        let json = serde_json::to_value(SOCIAL_LINKS[3]).expect("encode");
        assert_eq!(json["kind"], "mail");
    }
}
