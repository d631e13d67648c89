//! Projects Section
//!
//! Filterable project grid with a single-open detail modal.

use leptos::prelude::*;

use crate::components::{Modal, SectionHeader};
use crate::filter::filter_by_category;
use crate::models::{Project, ProjectCategory};
use crate::reveal::{use_scroll_reveal, DEFAULT_STAGGER_MS, DEFAULT_THRESHOLD};

pub const PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "E-Commerce Platform",
        description: "Full-stack e-commerce solution with React, Node.js, and MongoDB.",
        long_description: "A comprehensive e-commerce platform built from scratch with modern technologies. Features include user authentication, product catalog, shopping cart, payment processing, and admin dashboard.",
        image: "🛒",
        technologies: &["React", "Node.js", "MongoDB", "Stripe", "JWT"],
        live_url: "https://demo-store.com",
        github_url: "https://github.com/johndoe/ecommerce",
        category: ProjectCategory::FullStack,
        date: "2023",
        features: &[
            "User authentication and authorization",
            "Product catalog with search and filters",
            "Shopping cart and wishlist functionality",
            "Secure payment processing with Stripe",
            "Admin dashboard for inventory management",
            "Responsive design for all devices",
        ],
    },
    Project {
        id: 2,
        title: "Task Management App",
        description: "React-based task management application with drag-and-drop functionality.",
        long_description: "A powerful task management application inspired by Trello, featuring drag-and-drop boards, real-time collaboration, and team management capabilities.",
        image: "📋",
        technologies: &["React", "TypeScript", "Zustand", "Tailwind CSS"],
        live_url: "https://taskflow-app.com",
        github_url: "https://github.com/johndoe/taskflow",
        category: ProjectCategory::Frontend,
        date: "2023",
        features: &[
            "Drag-and-drop task boards",
            "Real-time collaboration",
            "Team and project management",
            "Due dates and notifications",
            "File attachments and comments",
            "Mobile-responsive interface",
        ],
    },
    Project {
        id: 3,
        title: "Weather Dashboard",
        description: "Beautiful weather dashboard with location-based forecasts and data visualization.",
        long_description: "An elegant weather dashboard that provides detailed weather information, forecasts, and beautiful data visualizations for any location worldwide.",
        image: "🌤️",
        technologies: &["React", "Chart.js", "Weather API", "Geolocation"],
        live_url: "https://weather-dash.com",
        github_url: "https://github.com/johndoe/weather-dashboard",
        category: ProjectCategory::Frontend,
        date: "2023",
        features: &[
            "Current weather conditions",
            "7-day weather forecast",
            "Interactive weather maps",
            "Location-based auto-detection",
            "Beautiful data visualizations",
            "Offline functionality",
        ],
    },
    Project {
        id: 4,
        title: "Blog CMS",
        description: "Content Management System for blogs with markdown support and SEO optimization.",
        long_description: "A powerful content management system designed for bloggers and content creators, featuring markdown support, SEO optimization, and a beautiful admin interface.",
        image: "📝",
        technologies: &["Next.js", "Prisma", "PostgreSQL", "Markdown"],
        live_url: "https://blog-cms.com",
        github_url: "https://github.com/johndoe/blog-cms",
        category: ProjectCategory::FullStack,
        date: "2022",
        features: &[
            "Markdown editor with live preview",
            "SEO optimization tools",
            "Category and tag management",
            "Comment system with moderation",
            "Analytics dashboard",
            "Multi-author support",
        ],
    },
    Project {
        id: 5,
        title: "Portfolio Website",
        description: "Responsive portfolio website with smooth animations and modern design.",
        long_description: "A stunning portfolio website showcasing my work and skills, built with modern web technologies and featuring smooth animations and responsive design.",
        image: "💼",
        technologies: &["React", "TypeScript", "Tailwind CSS", "Framer Motion"],
        live_url: "https://johndoe-portfolio.com",
        github_url: "https://github.com/johndoe/portfolio",
        category: ProjectCategory::Frontend,
        date: "2023",
        features: &[
            "Smooth scroll animations",
            "Responsive design",
            "Interactive project showcase",
            "Contact form with validation",
            "Dark/light theme toggle",
            "Performance optimized",
        ],
    },
    Project {
        id: 6,
        title: "Chat Application",
        description: "Real-time chat application with rooms, private messaging, and file sharing.",
        long_description: "A real-time chat application built with Socket.io, featuring chat rooms, private messaging, file sharing, and a modern interface.",
        image: "💬",
        technologies: &["React", "Socket.io", "Node.js", "Express"],
        live_url: "https://chatapp-demo.com",
        github_url: "https://github.com/johndoe/chat-app",
        category: ProjectCategory::FullStack,
        date: "2022",
        features: &[
            "Real-time messaging",
            "Private and group chats",
            "File and image sharing",
            "User presence indicators",
            "Message history",
            "Emoji reactions",
        ],
    },
];

/// Filter chips; `None` is the "All" identity filter. The Backend chip is
/// part of the closed set even though no current fixture matches it.
const CATEGORY_FILTERS: &[Option<ProjectCategory>] = &[
    None,
    Some(ProjectCategory::Frontend),
    Some(ProjectCategory::FullStack),
    Some(ProjectCategory::Backend),
];

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let section_ref = NodeRef::<leptos::html::Section>::new();
    let phase = use_scroll_reveal(section_ref, DEFAULT_THRESHOLD, DEFAULT_STAGGER_MS);

    let (filter, set_filter) = signal::<Option<ProjectCategory>>(None);
    let (selected, set_selected) = signal::<Option<&'static Project>>(None);

    let filtered = move || filter_by_category(PROJECTS, filter.get(), |p| p.category);

    view! {
        <section node_ref=section_ref id="projects" class="section section-alt">
            <div class="container">
                <SectionHeader
                    lead="My"
                    accent="Projects"
                    subtitle="A showcase of my recent work and the technologies I love working with."
                />

                <div class="filter-bar scroll-animate">
                    {CATEGORY_FILTERS.iter().map(|&option| {
                        let label = match option {
                            None => "All",
                            Some(category) => category.label(),
                        };
                        view! {
                            <button
                                class=move || if filter.get() == option { "filter-chip active" } else { "filter-chip" }
                                on:click=move |_| set_filter.set(option)
                            >
                                {label}
                            </button>
                        }
                    }).collect_view()}
                </div>

                <div class="card-grid card-grid-three">
                    <For
                        each=filtered
                        key=|project| project.id
                        children=move |project: &'static Project| {
                            // Cards mounted after the section has revealed skip
                            // the stagger and appear directly.
                            let class = if phase.get_untracked().has_fired() {
                                "card card-click scroll-animate animate"
                            } else {
                                "card card-click scroll-animate"
                            };
                            view! {
                                <div class=class on:click=move |_| set_selected.set(Some(project))>
                                    <div class="card-figure">{project.image}</div>
                                    <div class="card-head">
                                        <h3 class="card-title">{project.title}</h3>
                                        <span class="card-date">{project.date}</span>
                                    </div>
                                    <p class="card-text">{project.description}</p>
                                    <div class="chip-row">
                                        {project.technologies.iter().take(3).map(|tech| {
                                            view! { <span class="chip">{*tech}</span> }
                                        }).collect_view()}
                                        {(project.technologies.len() > 3).then(|| view! {
                                            <span class="chip chip-muted">
                                                {format!("+{}", project.technologies.len() - 3)}
                                            </span>
                                        })}
                                    </div>
                                    <div class="card-category">"🏷 " {project.category.label()}</div>
                                </div>
                            }
                        }
                    />
                </div>
            </div>

            {move || selected.get().map(|project| view! {
                <Modal on_close=move || set_selected.set(None)>
                    <div class="modal-head">
                        <div>
                            <h3 class="modal-title">{project.title}</h3>
                            <div class="modal-meta">
                                <span class="meta-item">"📅 " {project.date}</span>
                                <span class="meta-item">"🏷 " {project.category.label()}</span>
                            </div>
                        </div>
                        <button
                            class="modal-close"
                            aria-label="Close"
                            on:click=move |_| set_selected.set(None)
                        >
                            "×"
                        </button>
                    </div>

                    <div class="modal-figure">{project.image}</div>

                    <p class="modal-text">{project.long_description}</p>

                    <div class="modal-block">
                        <h4>"Key Features"</h4>
                        <ul class="feature-list feature-list-columns">
                            {project.features.iter().map(|feature| {
                                view! { <li>{*feature}</li> }
                            }).collect_view()}
                        </ul>
                    </div>

                    <div class="modal-block">
                        <h4>"Technologies Used"</h4>
                        <div class="chip-row">
                            {project.technologies.iter().map(|tech| {
                                view! { <span class="chip">{*tech}</span> }
                            }).collect_view()}
                        </div>
                    </div>

                    <div class="modal-actions">
                        <a
                            class="btn-hero"
                            href=project.live_url
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            "Live Demo"
                        </a>
                        <a
                            class="btn-ghost"
                            href=project.github_url
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            "Source Code"
                        </a>
                    </div>
                </Modal>
            })}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_ids_are_unique() {
        let mut ids: Vec<u32> = PROJECTS.iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), PROJECTS.len());
    }

    #[test]
    fn every_chip_in_the_closed_set_filters_cleanly() {
        for &option in CATEGORY_FILTERS {
            let out = filter_by_category(PROJECTS, option, |p| p.category);
            match option {
                None => assert_eq!(out.len(), PROJECTS.len()),
                Some(category) => assert!(out.iter().all(|p| p.category == category)),
            }
        }
    }

    #[test]
    fn backend_chip_currently_matches_nothing() {
        let out = filter_by_category(PROJECTS, Some(ProjectCategory::Backend), |p| p.category);
        assert!(out.is_empty());
    }
}
