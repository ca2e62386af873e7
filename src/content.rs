//! Static page content. Everything here is fixed at build time.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    pub label: &'static str,
    pub href: &'static str,
    /// Opens in a new tab with `rel="noopener noreferrer"`.
    pub external: bool,
}

/// The shape every card on the page can be reduced to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentCard {
    pub title: &'static str,
    pub description: Option<&'static str>,
    pub tags: Vec<&'static str>,
    pub links: Vec<Link>,
}

/// Stroke icons drawn inline on a 24x24 grid, so no icon font has to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Briefcase,
    TrendingUp,
    Monitor,
    Server,
    Cloud,
    Wrench,
    Zap,
    Mail,
    LinkedIn,
    GitHub,
    Send,
    ArrowRight,
    ExternalLink,
    Download,
    Image,
}

impl Icon {
    pub const VIEW_BOX: &'static str = "0 0 24 24";

    /// SVG path data, stroked with `currentColor`.
    pub fn path(self) -> &'static str {
        match self {
            Icon::Briefcase => "M16 20V4a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16M4 6h16a2 2 0 0 1 2 2v10a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2z",
            Icon::TrendingUp => "M22 7l-8.5 8.5-5-5L2 17M16 7h6v6",
            Icon::Monitor => "M4 3h16a2 2 0 0 1 2 2v10a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2zM8 21h8M12 17v4",
            Icon::Server => "M4 2h16a2 2 0 0 1 2 2v4a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2zM4 14h16a2 2 0 0 1 2 2v4a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2v-4a2 2 0 0 1 2-2zM6 6h.01M6 18h.01",
            Icon::Cloud => "M17.5 19H9a7 7 0 1 1 6.71-9h1.79a4.5 4.5 0 1 1 0 9z",
            Icon::Wrench => "M14.7 6.3a1 1 0 0 0 0 1.4l1.6 1.6a1 1 0 0 0 1.4 0l3.77-3.77a6 6 0 0 1-7.94 7.94l-6.91 6.91a2.12 2.12 0 0 1-3-3l6.91-6.91a6 6 0 0 1 7.94-7.94l-3.76 3.76z",
            Icon::Zap => "M13 2L3 14h9l-1 8 10-12h-9l1-8z",
            Icon::Mail => "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2zM22 6l-10 7L2 6",
            Icon::LinkedIn => "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-4 0v7h-4v-7a6 6 0 0 1 6-6zM2 9h4v12H2zM4 2a2 2 0 1 0 0 4 2 2 0 1 0 0-4z",
            Icon::GitHub => "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.4 5.4 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4M9 18c-4.51 2-5-2-7-2",
            Icon::Send => "M22 2l-7 20-4-9-9-4zM22 2L11 13",
            Icon::ArrowRight => "M5 12h14M12 5l7 7-7 7",
            Icon::ExternalLink => "M15 3h6v6M10 14L21 3M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6",
            Icon::Download => "M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4M7 10l5 5 5-5M12 15V3",
            Icon::Image => "M5 3h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2zM9 7a2 2 0 1 0 0 4 2 2 0 1 0 0-4zM21 15l-3.09-3.09a2 2 0 0 0-2.82 0L6 21",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub headline: &'static str,
    pub email: &'static str,
    pub linkedin: &'static str,
    pub github: &'static str,
    pub resume_path: &'static str,
    pub avatar_path: &'static str,
}

impl Profile {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

pub static PROFILE: Profile = Profile {
    name: "Md Ruman",
    headline: "Full-Stack Developer",
    email: "your.email@example.com",
    linkedin: "https://linkedin.com/in/your-profile",
    github: "https://github.com/your-username",
    resume_path: "/resume.pdf",
    avatar_path: "/profile.png",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub static HERO_STATS: [Stat; 3] = [
    Stat {
        value: "2+",
        label: "Years Exp.",
    },
    Stat {
        value: "10+",
        label: "Projects",
    },
    Stat {
        value: "5+",
        label: "Technologies",
    },
];

/// Labels orbiting the hero visual, with their float animation delay.
pub static HERO_NODES: [(&str, &str, f64); 4] = [
    ("React", "top-4 left-1/2 -translate-x-1/2", 0.0),
    ("Node.js", "bottom-4 left-1/2 -translate-x-1/2", 0.5),
    ("AWS", "left-0 top-1/2 -translate-y-1/2", 1.0),
    ("TypeScript", "right-0 top-1/2 -translate-y-1/2", 1.5),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExperienceEntry {
    pub company: &'static str,
    pub role: &'static str,
    pub duration: &'static str,
    pub badge: Option<&'static str>,
    pub description: &'static str,
    pub highlights: &'static [&'static str],
    pub tech: &'static [&'static str],
    pub metrics: &'static [&'static str],
}

impl ExperienceEntry {
    pub fn card(&self) -> ContentCard {
        ContentCard {
            title: self.company,
            description: Some(self.description),
            tags: self.tech.to_vec(),
            links: Vec::new(),
        }
    }
}

pub static EXPERIENCES: [ExperienceEntry; 1] = [ExperienceEntry {
    company: "Incresco",
    role: "Full-Stack Web Developer",
    duration: "Jan 2025 - Present",
    badge: Some("Intern → Full-Time"),
    description: "Owning end-to-end development of scalable education platforms used by multiple institutions, from dynamic form engines to cloud-native integrations.",
    highlights: &[
        "Architected a configurable multi-tenant form system serving multiple colleges with dynamic validations and conditional rendering",
        "Built production APIs with NestJS and integrated Salesforce for real-time student data synchronisation",
        "Designed document processing pipelines using AWS S3, Lambda, and SQS handling thousands of submissions",
        "Delivered features across the full stack, from responsive Next.js UIs to cloud infrastructure",
    ],
    tech: &[
        "Next.js",
        "NestJS",
        "TypeScript",
        "AWS",
        "Salesforce",
        "DynamoDB",
        "S3",
        "Lambda",
        "SQS",
    ],
    metrics: &["Multi-tenant", "Production-grade", "1000s of submissions"],
}];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub highlights: &'static [&'static str],
    pub role: Option<&'static str>,
    pub tech_stack: &'static [&'static str],
    pub github_url: &'static str,
    pub live_url: Option<&'static str>,
    pub image: &'static str,
}

impl Project {
    pub fn links(&self) -> Vec<Link> {
        let mut links = vec![Link {
            label: "GitHub",
            href: self.github_url,
            external: true,
        }];
        if let Some(href) = self.live_url {
            links.push(Link {
                label: "Live Demo",
                href,
                external: true,
            });
        }
        links
    }

    pub fn card(&self) -> ContentCard {
        ContentCard {
            title: self.title,
            description: Some(self.description),
            tags: self.tech_stack.to_vec(),
            links: self.links(),
        }
    }
}

pub static PROJECTS: [Project; 4] = [
    Project {
        title: "Multi-Tenant Electronic Medical Record (EMR) System",
        description: "A full-stack, multi-tenant healthcare system designed to manage patients, doctors, consultations, and medical records across multiple clinics.",
        highlights: &[
            "Multi-tenant architecture",
            "Role-based access control",
            "Data isolation per tenant",
            "Real-world domain complexity",
        ],
        role: Some("Designed and implemented both frontend and backend systems with a focus on scalability, data separation, and real-time workflows."),
        tech_stack: &["Next.js", "NestJS", "Prisma", "MongoDB", "AWS", "Socket.io"],
        github_url: "#",
        live_url: Some("#"),
        image: "/project-emr.png",
    },
    Project {
        title: "AI Integration Platform",
        description: "A platform designed to integrate and manage AI capabilities such as conversational AI and automation for different applications.",
        highlights: &[
            "API-driven architecture",
            "Modular and extensible design",
            "Real-world AI usage",
        ],
        role: Some("Built backend services, database models, and frontend interfaces to support scalable AI interactions."),
        tech_stack: &["Next.js", "NestJS", "Prisma", "OpenAI API", "MongoDB"],
        github_url: "#",
        live_url: None,
        image: "/project-ai.png",
    },
    Project {
        title: "Real-Time Chat Application with Audio & Video",
        description: "A real-time communication platform supporting text chat, media sharing, and audio/video calls.",
        highlights: &["Real-time messaging", "Media uploads", "Audio/video calling"],
        role: None,
        tech_stack: &["MERN Stack", "Socket.IO", "Cloudinary", "LiveKit"],
        github_url: "#",
        live_url: None,
        image: "/project-chat.png",
    },
    Project {
        title: "Text-to-Image Generator",
        description: "An AI-based application that generates images from user prompts using external AI APIs.",
        highlights: &[
            "Prompt handling",
            "API integration",
            "Image rendering and storage",
        ],
        role: None,
        tech_stack: &["React", "Node.js", "AI APIs", "Cloud Storage"],
        github_url: "#",
        live_url: None,
        image: "/project-image-gen.png",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillCategory {
    pub name: &'static str,
    pub icon: Icon,
    /// Tailwind text color for the icon.
    pub tint: &'static str,
    pub skills: &'static [&'static str],
}

impl SkillCategory {
    pub fn card(&self) -> ContentCard {
        ContentCard {
            title: self.name,
            description: None,
            tags: self.skills.to_vec(),
            links: Vec::new(),
        }
    }
}

pub static SKILL_CATEGORIES: [SkillCategory; 4] = [
    SkillCategory {
        name: "Frontend",
        icon: Icon::Monitor,
        tint: "text-indigo-400",
        skills: &[
            "React",
            "Next.js",
            "TypeScript",
            "JavaScript",
            "HTML",
            "CSS",
            "Tailwind CSS",
        ],
    },
    SkillCategory {
        name: "Backend",
        icon: Icon::Server,
        tint: "text-violet-400",
        skills: &["Node.js", "NestJS", "Express.js", "REST APIs", "GraphQL"],
    },
    SkillCategory {
        name: "Databases & Cloud",
        icon: Icon::Cloud,
        tint: "text-cyan-400",
        skills: &[
            "MongoDB",
            "DynamoDB",
            "SQL",
            "Prisma ORM",
            "AWS S3",
            "AWS Lambda",
            "AWS SQS",
        ],
    },
    SkillCategory {
        name: "Tools & DevOps",
        icon: Icon::Wrench,
        tint: "text-emerald-400",
        skills: &["Git", "GitHub", "Postman", "VS Code", "Docker", "CI/CD"],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: Icon,
    pub description: &'static str,
}

impl ContactLink {
    /// Mail links stay in the current tab.
    pub fn is_external(&self) -> bool {
        !self.href.starts_with("mailto:")
    }

    pub fn card(&self) -> ContentCard {
        ContentCard {
            title: self.label,
            description: Some(self.description),
            tags: Vec::new(),
            links: vec![Link {
                label: self.label,
                href: self.href,
                external: self.is_external(),
            }],
        }
    }
}

pub static CONTACT_LINKS: [ContactLink; 3] = [
    ContactLink {
        label: "Email",
        href: "mailto:your.email@example.com",
        icon: Icon::Mail,
        description: "Drop me a line anytime",
    },
    ContactLink {
        label: "LinkedIn",
        href: "https://linkedin.com/in/your-profile",
        icon: Icon::LinkedIn,
        description: "Let's connect professionally",
    },
    ContactLink {
        label: "GitHub",
        href: "https://github.com/your-username",
        icon: Icon::GitHub,
        description: "Check out my code",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_links() {
        let emr = PROJECTS[0].card();
        let labels = emr.links.iter().map(|l| l.label).collect::<Vec<_>>();
        assert_eq!(labels, ["GitHub", "Live Demo"]);

        let chat = PROJECTS[2].card();
        assert_eq!(chat.links.len(), 1);
        assert!(chat.links.iter().all(|l| l.external));
    }

    #[test]
    fn test_contact_mail_stays_in_tab() {
        let external = CONTACT_LINKS
            .iter()
            .map(|c| (c.label, c.is_external()))
            .collect::<Vec<_>>();
        assert_eq!(
            external,
            [("Email", false), ("LinkedIn", true), ("GitHub", true)]
        );
        assert_eq!(CONTACT_LINKS[0].href, PROFILE.mailto());
        assert_eq!(CONTACT_LINKS[1].href, PROFILE.linkedin);
        assert_eq!(CONTACT_LINKS[2].href, PROFILE.github);
    }

    #[test]
    fn test_cards_carry_tags() {
        let skills = SKILL_CATEGORIES[1].card();
        assert_eq!(skills.title, "Backend");
        assert_eq!(skills.description, None);
        assert!(skills.tags.contains(&"GraphQL"));

        let job = EXPERIENCES[0].card();
        assert_eq!(job.tags.len(), EXPERIENCES[0].tech.len());
    }

    #[test]
    fn test_icons_are_drawable() {
        let all = [
            Icon::Briefcase,
            Icon::TrendingUp,
            Icon::Monitor,
            Icon::Server,
            Icon::Cloud,
            Icon::Wrench,
            Icon::Zap,
            Icon::Mail,
            Icon::LinkedIn,
            Icon::GitHub,
            Icon::Send,
            Icon::ArrowRight,
            Icon::ExternalLink,
            Icon::Download,
            Icon::Image,
        ];
        for icon in all {
            assert!(icon.path().starts_with('M'), "{icon:?}");
        }
        let mut paths = all.map(Icon::path).to_vec();
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), all.len());
    }

    #[test]
    fn test_project_images_are_site_paths() {
        assert!(PROJECTS.iter().all(|p| p.image.starts_with('/')));
    }
}
