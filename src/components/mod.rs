//! UI Components
//!
//! Page sections and the shared pieces they compose.

mod navigation;
mod hero_section;
mod about_section;
mod education_section;
mod projects_section;
mod skills_section;
mod certificates_section;
mod contact_section;
mod back_to_top;
mod modal;
mod section_header;

pub use navigation::Navigation;
pub use hero_section::HeroSection;
pub use about_section::AboutSection;
pub use education_section::EducationSection;
pub use projects_section::ProjectsSection;
pub use skills_section::SkillsSection;
pub use certificates_section::CertificatesSection;
pub use contact_section::ContactSection;
pub use back_to_top::BackToTop;
pub use modal::Modal;
pub use section_header::SectionHeader;
