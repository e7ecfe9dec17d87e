//! Static portfolio content plus the small amount of logic that selects from
//! it (tab and filter choices, progress bar tones, column splits).

use chrono::{DateTime, Datelike};

pub struct Link {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

pub struct Profile {
    pub name: &'static str,
    pub short_name: &'static str,
    pub tagline: &'static str,
    pub summary: &'static str,
    pub email: &'static str,
    pub location: &'static str,
    pub resume_href: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Tan Ming Reo",
    short_name: "Reo",
    tagline: "Creating beautiful and functional web experiences",
    summary: "Aspiring software engineer with strong academic achievements, leadership in extracurriculars and hands-on internship/contract experience.",
    email: "tmreo123@gmail.com",
    location: "Selangor, Malaysia",
    resume_href: "/Resume.pdf",
};

pub const HERO_ROLES: &[&str] = &["Aspiring Software Engineer", "UI/UX Designer", "Problem Solver"];

pub const NAV_LINKS: &[Link] = &[
    Link { label: "Home", href: "#home", icon: "" },
    Link { label: "About", href: "#about", icon: "" },
    Link { label: "Projects", href: "#projects", icon: "" },
    Link { label: "Skills", href: "#skills", icon: "" },
    Link { label: "Contact", href: "#contact", icon: "" },
];

const GITHUB: Link = Link {
    label: "GitHub",
    href: "https://github.com/Xterna1y",
    icon: "devicon-github-plain",
};

const LINKEDIN: Link = Link {
    label: "LinkedIn",
    href: "https://www.linkedin.com/in/ming-reo-tan-a8178b20a/",
    icon: "devicon-linkedin-plain",
};

const INSTAGRAM: Link = Link {
    label: "Instagram",
    href: "https://www.instagram.com/o_reo_tan/",
    icon: "extra-instagram",
};

const EMAIL: Link = Link {
    label: "Email",
    href: "mailto:tmreo123@gmail.com",
    icon: "extra-email",
};

/// Every social link, as listed in the footer.
pub const SOCIAL_LINKS: &[Link] = &[GITHUB, LINKEDIN, INSTAGRAM, EMAIL];

/// The shorter set of icons under the hero banner.
pub const HERO_SOCIALS: &[Link] = &[GITHUB, LINKEDIN, EMAIL];

pub struct ContactItem {
    pub label: &'static str,
    pub value: &'static str,
    pub href: Option<&'static str>,
    pub icon: &'static str,
}

pub const CONTACT_INFO: &[ContactItem] = &[
    ContactItem {
        label: "Email",
        value: PROFILE.email,
        href: Some("mailto:tmreo123@gmail.com"),
        icon: "extra-email",
    },
    ContactItem {
        label: "Location",
        value: PROFILE.location,
        href: None,
        icon: "extra-location",
    },
];

/// Year the site was built, shown in the footer copyright line.
pub fn build_year() -> Option<i32> {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .ok()
        .map(|t| t.year())
}

// ---------------------------------------------------------------------------
// About
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AboutTab {
    #[default]
    Basic,
    CoCurricular,
    Skills,
    Experience,
}

impl AboutTab {
    pub const ALL: [AboutTab; 4] = [
        AboutTab::Basic,
        AboutTab::CoCurricular,
        AboutTab::Skills,
        AboutTab::Experience,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AboutTab::Basic => "Basic info",
            AboutTab::CoCurricular => "Co-curricular Activities",
            AboutTab::Skills => "Skills",
            AboutTab::Experience => "Experience",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SkillView {
    #[default]
    Technical,
    Soft,
}

pub struct Education {
    pub school: &'static str,
    pub degree: &'static str,
    pub period: &'static str,
}

pub const EDUCATION: &[Education] = &[
    Education {
        school: "Taylor's University, Malaysia",
        degree: "B. Software Engineering (ongoing)",
        period: "Feb 2025 – Present",
    },
    Education {
        school: "Methodist College Kuala Lumpur (Penang Branch)",
        degree: "Diploma in IT — CGPA: 3.94 (Dean's List)",
        period: "May 2022 – Aug 2024",
    },
    Education {
        school: "ChinzeiGakuin High School, Nagasaki, Japan",
        degree: "Exchange Programme (Asia Kakehashi)",
        period: "Oct 2021 – Mar 2022",
    },
];

pub const LANGUAGES: &[&str] = &["English", "Bahasa Melayu", "Mandarin"];

pub struct Highlight {
    pub value: &'static str,
    pub label: &'static str,
}

pub const HIGHLIGHTS: &[Highlight] = &[
    Highlight { value: "Nov 2024", label: "Contract role" },
    Highlight { value: "Jun–Aug 2024", label: "IT Internship" },
    Highlight { value: "2019–2024", label: "Part-time instructor" },
];

pub struct Certificate {
    pub title: &'static str,
    pub url: Option<&'static str>,
}

pub struct Role {
    pub label: &'static str,
    pub certificates: &'static [Certificate],
}

pub struct ActivityGroup {
    pub institution: &'static str,
    pub roles: &'static [Role],
}

pub const ACTIVITIES: &[ActivityGroup] = &[
    ActivityGroup {
        institution: "MCKL",
        roles: &[
            Role {
                label: "Sports Club President",
                certificates: &[Certificate {
                    title: "Sports Club President — Certificate",
                    url: Some("/certs/mckl_sports_president.jpg"),
                }],
            },
            Role {
                label: "PAC Committee",
                certificates: &[Certificate {
                    title: "PAC Committee — Certificate",
                    url: Some("/certs/mckl_pac.jpg"),
                }],
            },
            Role {
                label: "Prom Night Co-chairman",
                certificates: &[Certificate {
                    title: "Prom Night Co-chair — Certificate",
                    url: Some("/certs/mckl_prom_cochair.jpg"),
                }],
            },
            Role {
                label: "Organising committee — Orientation Camp 2022",
                certificates: &[Certificate {
                    title: "Orientation Camp 2022 — Certificate",
                    url: Some("/certs/mckl_orientation_2022.jpg"),
                }],
            },
        ],
    },
    ActivityGroup {
        institution: "Taylor's",
        roles: &[
            Role {
                label: "Orientation Leader",
                certificates: &[Certificate {
                    title: "Orientation Leader — Certificate",
                    url: Some("/certs/taylors_orientation_leader.jpg"),
                }],
            },
            Role {
                label: "Project Manager — Taylor's Explorer",
                certificates: &[Certificate {
                    title: "Project Manager — Taylor's Explorer — Certificate",
                    url: Some("/certs/taylors_project_manager.jpg"),
                }],
            },
            Role {
                label: "Technical Team Lead — Agents Of Tech",
                certificates: &[],
            },
        ],
    },
];

/// Cells of a 2x2 role grid; `None` marks an empty placeholder.
pub fn grid_cells(roles: &'static [Role]) -> [Option<&'static Role>; 4] {
    let mut cells = [None; 4];
    for (cell, role) in cells.iter_mut().zip(roles) {
        *cell = Some(role);
    }
    cells
}

pub struct Job {
    pub title: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub description: &'static str,
}

pub const EXPERIENCE: &[Job] = &[
    Job {
        title: "Contract Software Engineer",
        company: "Sensoft Technologies",
        period: "Nov 2024 – Jan 2025",
        description: "Short-term contract focusing on software engineering tasks and project delivery.",
    },
    Job {
        title: "IT Infrastructure Intern",
        company: "UOB KayHian Securities (Penang)",
        period: "Jun 2024 – Aug 2024",
        description: "IT support and infrastructure tasks during internship.",
    },
    Job {
        title: "Indoor Rock-Climbing Instructor (Part-time)",
        company: "HangOut Climbing Gym",
        period: "2019 – 2024",
        description: "Coaching, safety and customer experience at the climbing gym.",
    },
];

// ---------------------------------------------------------------------------
// Skills
// ---------------------------------------------------------------------------

pub struct Skill {
    pub name: &'static str,
    pub level: u8,
    pub description: &'static str,
}

const fn skill(name: &'static str, level: u8) -> Skill {
    Skill {
        name,
        level,
        description: "",
    }
}

pub const TECHNICAL_SKILLS: &[Skill] = &[
    skill("React", 90),
    skill("TypeScript", 85),
    skill("Tailwind CSS", 80),
    skill("Vue.js", 70),
    skill("Node.js", 85),
    skill("Python", 80),
    skill("PostgreSQL", 75),
    skill("MongoDB", 70),
    skill("Git", 90),
    skill("Docker", 75),
    skill("AWS", 70),
    skill("Vite", 85),
];

/// How many of [`TECHNICAL_SKILLS`] are frontend; the rest are backend & tools.
pub const FRONTEND_SKILL_COUNT: usize = 4;

pub const SOFT_SKILLS: &[Skill] = &[
    skill("Leadership", 90),
    skill("Project Management", 90),
    skill("Teamwork", 90),
    skill("Adaptability", 90),
    skill("Communication", 80),
    skill("Public Speaking", 70),
    skill("Social Skills", 70),
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SkillCategory {
    #[default]
    Frontend,
    Backend,
    Tools,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 3] = [
        SkillCategory::Frontend,
        SkillCategory::Backend,
        SkillCategory::Tools,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SkillCategory::Frontend => "Frontend",
            SkillCategory::Backend => "Backend",
            SkillCategory::Tools => "Tools",
        }
    }
}

pub fn skills_for(category: SkillCategory) -> &'static [Skill] {
    match category {
        SkillCategory::Frontend => &[
            Skill {
                name: "HTML",
                level: 95,
                description: "Semantic markup, structure, and responsive layouts.",
            },
            Skill {
                name: "CSS",
                level: 60,
                description: "Basic styling, layouting and fundamentals.",
            },
            Skill {
                name: "React",
                level: 75,
                description: "Component-based UI development and state handling.",
            },
        ],
        SkillCategory::Backend => &[
            Skill {
                name: "C Programming",
                level: 90,
                description: "Memory management, pointers, embedded logic, and algorithms.",
            },
            Skill {
                name: "Python",
                level: 75,
                description: "Scripting, data handling, basic automation and backend logic.",
            },
            Skill {
                name: "SQL",
                level: 50,
                description: "Basic queries, CRUD operations, and relational concepts.",
            },
        ],
        SkillCategory::Tools => &[
            Skill {
                name: "Arduino",
                level: 80,
                description: "Hardware programming, sensors, microcontrollers, prototyping.",
            },
            Skill {
                name: "Kotlin",
                level: 40,
                description: "Basic understanding of mobile development and syntax.",
            },
        ],
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarTone {
    Green,
    Blue,
    Yellow,
    Gray,
}

impl BarTone {
    pub fn for_level(level: u8) -> Self {
        match level {
            90.. => BarTone::Green,
            75..=89 => BarTone::Blue,
            60..=74 => BarTone::Yellow,
            _ => BarTone::Gray,
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            BarTone::Green => "bg-green",
            BarTone::Blue => "bg-blue",
            BarTone::Yellow => "bg-yellow",
            BarTone::Gray => "bg-muted",
        }
    }
}

/// Splits into two columns, the first getting the extra item.
pub fn split_columns<T>(items: &[T]) -> (&[T], &[T]) {
    items.split_at(items.len().div_ceil(2))
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProjectCategory {
    #[default]
    All,
    Frontend,
    Backend,
    Fullstack,
    Mobile,
}

impl ProjectCategory {
    pub const ALL: [ProjectCategory; 5] = [
        ProjectCategory::All,
        ProjectCategory::Frontend,
        ProjectCategory::Backend,
        ProjectCategory::Fullstack,
        ProjectCategory::Mobile,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProjectCategory::All => "All",
            ProjectCategory::Frontend => "Frontend",
            ProjectCategory::Backend => "Backend",
            ProjectCategory::Fullstack => "Fullstack",
            ProjectCategory::Mobile => "Mobile",
        }
    }

    /// Wording used on the placeholder card of an empty filter.
    pub fn empty_label(&self) -> &'static str {
        match self {
            ProjectCategory::All => "Projects",
            other => other.label(),
        }
    }
}

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub live_url: Option<&'static str>,
    pub github_url: Option<&'static str>,
    pub featured: bool,
    pub category: ProjectCategory,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Portfolio Website",
        description: "Personal portfolio website with modern design, animations, and a fast dev workflow.",
        technologies: &["Rust", "Leptos", "Tailwind CSS"],
        live_url: Some("https://xterna1y.github.io/Portfolio/"),
        github_url: Some("https://github.com/Xterna1y/Portfolio"),
        featured: true,
        category: ProjectCategory::Frontend,
    },
    Project {
        title: "Batuu Customer Portal",
        description: "Customer portal for Batuu Climbing — login, bookings, and customer account management.",
        technologies: &["React", "TypeScript", "Tailwind CSS"],
        live_url: Some("https://online.batuuclimbing.com/login"),
        github_url: None,
        featured: true,
        category: ProjectCategory::Frontend,
    },
    Project {
        title: "Agents Of Tech Website",
        description: "Marketing & events site for Agents Of Tech — event pages, team, and signups.",
        technologies: &["React", "TypeScript", "Tailwind CSS"],
        live_url: None,
        github_url: Some("https://github.com/reo/agents-of-tech"),
        featured: false,
        category: ProjectCategory::Frontend,
    },
];

pub fn filter_projects(category: ProjectCategory) -> Vec<&'static Project> {
    PROJECTS
        .iter()
        .filter(|p| category == ProjectCategory::All || p.category == category)
        .collect()
}

pub fn featured_projects() -> impl Iterator<Item = &'static Project> {
    PROJECTS.iter().filter(|p| p.featured)
}
