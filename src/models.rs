//! Content Models
//!
//! Typed fixture records for each page section. All content is compiled-in
//! literal data; none of it changes at runtime.

/// Project category, the closed set behind the projects filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectCategory {
    Frontend,
    FullStack,
    Backend,
}

impl ProjectCategory {
    pub fn label(self) -> &'static str {
        match self {
            ProjectCategory::Frontend => "Frontend",
            ProjectCategory::FullStack => "Full Stack",
            ProjectCategory::Backend => "Backend",
        }
    }
}

/// Skill category, the closed set behind the skills filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillCategory {
    Frontend,
    Backend,
    Database,
    Mobile,
    Design,
    DevOps,
}

impl SkillCategory {
    pub fn label(self) -> &'static str {
        match self {
            SkillCategory::Frontend => "Frontend",
            SkillCategory::Backend => "Backend",
            SkillCategory::Database => "Database",
            SkillCategory::Mobile => "Mobile",
            SkillCategory::Design => "Design",
            SkillCategory::DevOps => "DevOps",
        }
    }
}

/// Certification level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CertLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl CertLevel {
    pub fn label(self) -> &'static str {
        match self {
            CertLevel::Beginner => "Beginner",
            CertLevel::Intermediate => "Intermediate",
            CertLevel::Advanced => "Advanced",
            CertLevel::Expert => "Expert",
        }
    }

    /// CSS class pair for the level badge
    pub fn badge_class(self) -> &'static str {
        match self {
            CertLevel::Expert => "badge badge-accent",
            CertLevel::Advanced => "badge badge-primary",
            CertLevel::Intermediate => "badge badge-yellow",
            CertLevel::Beginner => "badge badge-green",
        }
    }
}

/// Portfolio project shown in the projects grid and detail modal
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub long_description: &'static str,
    pub image: &'static str,
    pub technologies: &'static [&'static str],
    pub live_url: &'static str,
    pub github_url: &'static str,
    pub category: ProjectCategory,
    pub date: &'static str,
    pub features: &'static [&'static str],
}

/// Professional certificate shown in the certificates grid and detail modal
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Certificate {
    pub id: u32,
    pub title: &'static str,
    pub issuer: &'static str,
    pub date: &'static str,
    pub description: &'static str,
    pub credential_url: &'static str,
    pub image: &'static str,
    pub skills: &'static [&'static str],
    pub level: CertLevel,
}

/// Education timeline entry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EducationEntry {
    pub degree: &'static str,
    pub institution: &'static str,
    pub period: &'static str,
    pub location: &'static str,
    pub description: &'static str,
    pub achievements: &'static [&'static str],
    pub gpa: Option<&'static str>,
}

/// Skill with proficiency percentage
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Skill {
    pub name: &'static str,
    pub percentage: u8,
    pub category: SkillCategory,
}

/// Highlight card in the about section
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Highlight {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// Contact detail row (email, phone, location)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContactInfo {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: &'static str,
    pub href: &'static str,
}

/// Outbound social profile link
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SocialLink {
    pub icon: &'static str,
    pub label: &'static str,
    pub href: &'static str,
}
