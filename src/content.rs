//! Literal site content. Everything here is read-only and lives for the whole
//! process; the section components only enumerate it.

use crate::skills::{SkillCategory, SkillEntry};

pub const OWNER_FIRST_NAME: &str = "Shohra";
pub const OWNER_LAST_NAME: &str = "Qadri";
pub const HERO_TITLE: &str = "Front-End Developer";
pub const LOCATION: &str = "Mumbai, India";
pub const EMAIL: &str = "qadrishohra@gmail.com";
pub const PHONE: &str = "+91 9027302188";

pub const RESUME_PATH: &str = "/resume/Qadri_Resume.pdf";
pub const RESUME_FILE_NAME: &str = "Qadri_Resume.pdf";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const HERO_STATS: &[Stat] = &[
    Stat {
        value: "3+",
        label: "Years Experience",
    },
    Stat {
        value: "10+",
        label: "Projects Completed",
    },
    Stat {
        value: "5+",
        label: "Technologies",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        icon: "💻",
        title: "Clean Code",
        description: "Writing maintainable, scalable, and efficient code following best practices.",
    },
    Highlight {
        icon: "⚡",
        title: "Performance",
        description: "Optimizing applications for speed, achieving 30-40% faster load times.",
    },
    Highlight {
        icon: "🤝",
        title: "Collaboration",
        description: "Excellent team player with experience in Agile/Scrum environments.",
    },
    Highlight {
        icon: "🏆",
        title: "Quality",
        description: "Delivering pixel-perfect, responsive designs that exceed expectations.",
    },
];

pub const CERTIFICATIONS: &[&str] = &[
    "Full Stack Java Developer (2022)",
    "Advanced Diploma in Computer Applications (ADCA)",
    "B.Tech in Computer Science Engineering",
];

pub const SKILLS: &[SkillEntry] = &[
    SkillEntry::new("React.js", 90, SkillCategory::Frontend),
    SkillEntry::new("JavaScript", 88, SkillCategory::Frontend),
    SkillEntry::new("HTML5", 95, SkillCategory::Frontend),
    SkillEntry::new("CSS3", 92, SkillCategory::Frontend),
    SkillEntry::new("TypeScript", 80, SkillCategory::Frontend),
    SkillEntry::new("Tailwind CSS", 90, SkillCategory::Frameworks),
    SkillEntry::new("Bootstrap", 85, SkillCategory::Frameworks),
    SkillEntry::new("Angular", 75, SkillCategory::Frameworks),
    SkillEntry::new("Ionic Framework", 70, SkillCategory::Frameworks),
    SkillEntry::new("Git/GitHub", 88, SkillCategory::Tools),
    SkillEntry::new("Node.js", 70, SkillCategory::Tools),
    SkillEntry::new("REST APIs", 85, SkillCategory::Tools),
    SkillEntry::new("Responsive Design", 95, SkillCategory::Tools),
];

/// Untracked expertise shown under the skill bars.
pub const ADDITIONAL_EXPERTISE: &[(&str, &str)] = &[
    ("UI/UX Design", "User-centered design principles"),
    ("Agile/Scrum", "Project management methodologies"),
    ("Performance Optimization", "30-40% faster load times"),
    (
        "Cross-browser Compatibility",
        "Consistent experience across platforms",
    ),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmploymentKind {
    Current,
    Past,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExperienceEntry {
    pub title: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub duration: &'static str,
    pub kind: EmploymentKind,
    pub achievements: &'static [&'static str],
    pub technologies: &'static [&'static str],
}

impl ExperienceEntry {
    pub fn is_current(&self) -> bool {
        self.kind == EmploymentKind::Current
    }
}

pub const EXPERIENCE: &[ExperienceEntry] = &[
    ExperienceEntry {
        title: "Front-End Developer",
        company: "Pie Flow Tech (Mafatlal Group)",
        location: "Navi Mumbai",
        duration: "March 2025 – Present",
        kind: EmploymentKind::Current,
        achievements: &[
            "Developed dynamic web applications using React.js for Project Management, Group-Campus Relations, and Content Verification modules",
            "Designed reusable React components with conditional rendering and state management",
            "Integrated REST APIs for CRUD operations ensuring seamless UI-backend communication",
            "Enhanced UX with dynamic routing and component-level conditional views",
            "Ensured cross-browser compatibility using CSS3, SCSS modules, and Material UI",
        ],
        technologies: &[
            "React.js",
            "JavaScript",
            "Material UI",
            "SCSS",
            "REST APIs",
            "State Management",
        ],
    },
    ExperienceEntry {
        title: "Front-End Developer",
        company: "Times Internet",
        location: "Noida",
        duration: "June 2024 – March 2025",
        kind: EmploymentKind::Past,
        achievements: &[
            "Developed and launched multiple websites with implemented SEO strategies",
            "Enhanced website visibility and performance resulting in increased organic traffic",
            "Integrated IzooTo for user engagement with analytics tracking",
            "Contributed as Full Stack Developer managing React.js frontend and Node.js backend",
            "Analyzed data trends using Google Analytics and Excel for business decisions",
        ],
        technologies: &[
            "React.js",
            "Node.js",
            "SEO Optimization",
            "Google Analytics",
            "IzooTo",
        ],
    },
    ExperienceEntry {
        title: "Front-End Developer",
        company: "Paavu Technology Pvt. Ltd.",
        location: "Gurugram",
        duration: "February 2023 – 2024",
        kind: EmploymentKind::Past,
        achievements: &[
            "Developed web and mobile projects including e-commerce solutions",
            "Designed and optimized HTML books from PDF documents improving loading time",
            "Customized web applications using Ionic framework for mobile platforms",
            "Converted XHTML to responsive HTML using CSS3 and Bootstrap",
            "Ensured cross-browser compatibility and mobile responsiveness",
        ],
        technologies: &[
            "Angular",
            "Ionic Framework",
            "Bootstrap",
            "HTML5",
            "CSS3",
            "JavaScript",
        ],
    },
    ExperienceEntry {
        title: "UI/UX Designer & Front-End Developer",
        company: "Skybreeze Institute",
        location: "Gurugram",
        duration: "March 2022 – November 2022",
        kind: EmploymentKind::Past,
        achievements: &[
            "Designed responsive websites optimized for multiple devices using React.js and Tailwind CSS",
            "Improved page speed and performance optimization",
            "Developed clean, maintainable front-end code enhancing user interface",
            "Conducted UI/UX design analysis increasing user engagement",
            "Collaborated on data-driven insights for design improvements",
        ],
        technologies: &[
            "React.js",
            "Tailwind CSS",
            "UI/UX Design",
            "Performance Optimization",
        ],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectCategory {
    Live,
    Personal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectStatus {
    Live,
    Completed,
    InProgress,
}

impl ProjectStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Live => "live",
            Self::Completed => "completed",
            Self::InProgress => "in-progress",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectEntry {
    pub title: &'static str,
    pub description: &'static str,
    pub long_description: &'static str,
    pub technologies: &'static [&'static str],
    pub features: &'static [&'static str],
    pub live_url: Option<&'static str>,
    pub github_url: Option<&'static str>,
    pub image: &'static str,
    pub category: ProjectCategory,
    pub status: ProjectStatus,
}

pub const PROJECTS: &[ProjectEntry] = &[
    ProjectEntry {
        title: "Al-Infaq Trust",
        description: "Modern charity platform with donation management and community features",
        long_description: "A comprehensive charity and donation platform built with React.js, featuring user authentication, donation tracking, campaign management, and community engagement tools. Currently in active development; features are being gradually deployed live.",
        technologies: &[
            "React.js",
            "Node.js",
            "MongoDB",
            "Tailwind CSS",
            "Express.js",
            "JWT",
        ],
        features: &[
            "Secure donation processing (in progress)",
            "Campaign management system (in progress)",
            "User authentication & profiles",
            "Real-time donation tracking (partial)",
            "Responsive design",
            "Admin dashboard (in progress)",
        ],
        live_url: Some("https://al-infaq-trust.vercel.app/"),
        github_url: None,
        image: "🕌",
        category: ProjectCategory::Live,
        status: ProjectStatus::InProgress,
    },
    ProjectEntry {
        title: "AI Resume Builder",
        description: "Intelligent resume platform with AI content suggestions and ATS optimization",
        long_description: "An AI-powered resume builder helping users create professional resumes with ATS optimization, templates, and content suggestions. Currently in development; features are being rolled out incrementally.",
        technologies: &[
            "React.js",
            "AI/ML Integration",
            "Tailwind CSS",
            "Node.js",
            "PDF Generation",
        ],
        features: &[
            "AI-powered content suggestions (in progress)",
            "ATS optimization scoring (partial)",
            "Multiple resume templates",
            "Real-time preview",
            "PDF export functionality (planned)",
            "Career guidance tools (in progress)",
        ],
        live_url: Some("https://ai-resume-project-72rl.vercel.app/"),
        github_url: None,
        image: "🤖",
        category: ProjectCategory::Live,
        status: ProjectStatus::InProgress,
    },
    ProjectEntry {
        title: "Instagram Clone",
        description: "Full-stack social media application with modern features",
        long_description: "A complete Instagram clone built with the MERN stack, featuring photo sharing, real-time chat, stories, likes, comments, and follow system.",
        technologies: &[
            "React.js",
            "Node.js",
            "MongoDB",
            "Express.js",
            "Socket.io",
            "Cloudinary",
        ],
        features: &[
            "Photo upload & sharing",
            "Real-time messaging",
            "Stories functionality",
            "Like & comment system",
            "User following system",
            "Image filters & editing",
        ],
        live_url: None,
        github_url: None,
        image: "📸",
        category: ProjectCategory::Personal,
        status: ProjectStatus::Completed,
    },
    ProjectEntry {
        title: "Book Management System",
        description: "Java Swing-based library management application",
        long_description: "A desktop application for library management with features for book cataloging, member management, and borrowing system.",
        technologies: &["Java", "Swing", "MySQL", "JDBC", "MVC Architecture"],
        features: &[
            "Book catalog management",
            "Member registration",
            "Borrowing & return system",
            "Search functionality",
            "Report generation",
            "Fine calculation",
        ],
        live_url: None,
        github_url: None,
        image: "📚",
        category: ProjectCategory::Personal,
        status: ProjectStatus::Completed,
    },
    ProjectEntry {
        title: "VegeFoods Website",
        description: "Responsive e-commerce platform for organic products",
        long_description: "A fully responsive e-commerce website for organic food products with shopping cart, product catalog, and payment integration.",
        technologies: &["HTML5", "CSS3", "JavaScript", "Bootstrap", "PHP", "MySQL"],
        features: &[
            "Product catalog",
            "Shopping cart functionality",
            "User authentication",
            "Order management",
            "Payment integration",
            "Admin panel",
        ],
        live_url: None,
        github_url: None,
        image: "🥬",
        category: ProjectCategory::Personal,
        status: ProjectStatus::Completed,
    },
];

pub fn projects_in(category: ProjectCategory) -> impl Iterator<Item = &'static ProjectEntry> {
    PROJECTS.iter().filter(move |p| p.category == category)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactInfo {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: &'static str,
    pub href: &'static str,
    pub description: &'static str,
}

impl ContactInfo {
    /// Web links open in a new tab, `mailto:`/`tel:` links don't.
    pub fn is_external(&self) -> bool {
        self.href.starts_with("http")
    }
}

pub const CONTACT_INFO: &[ContactInfo] = &[
    ContactInfo {
        icon: "✉️",
        label: "Email",
        value: EMAIL,
        href: "mailto:qadrishohra@gmail.com",
        description: "Send me an email anytime",
    },
    ContactInfo {
        icon: "📞",
        label: "Phone",
        value: PHONE,
        href: "tel:+919027302188",
        description: "Available All Days",
    },
    ContactInfo {
        icon: "📍",
        label: "Location",
        value: LOCATION,
        href: "https://maps.google.com/?q=Mumbai,India",
        description: "Open to remote opportunities",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub icon_class: &'static str,
    pub href: &'static str,
    pub description: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "GitHub",
        icon_class: "devicon-github-plain",
        href: "https://github.com/ShohraQadri",
        description: "View my code repositories",
    },
    SocialLink {
        label: "LinkedIn",
        icon_class: "devicon-linkedin-plain",
        href: "https://linkedin.com/in/shohra-qadri-7b2982224",
        description: "Connect professionally",
    },
];
