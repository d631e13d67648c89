//! About Section
//!
//! Story paragraphs, profile card, quick stats and highlight cards.

use leptos::prelude::*;

use crate::components::SectionHeader;
use crate::models::Highlight;
use crate::reveal::{use_scroll_reveal, DEFAULT_THRESHOLD};

/// About reveals more slowly than the default sections
const ABOUT_STAGGER_MS: u32 = 200;

const HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        icon: "⌨️",
        title: "Clean Code",
        description: "Writing maintainable, scalable, and efficient code is my passion.",
    },
    Highlight {
        icon: "💡",
        title: "Innovation",
        description: "Always exploring new technologies and creative solutions.",
    },
    Highlight {
        icon: "❤️",
        title: "User-Centric",
        description: "Designing with the user experience at the forefront.",
    },
    Highlight {
        icon: "☕",
        title: "Dedication",
        description: "Committed to continuous learning and improvement.",
    },
];

const PROFILE_TAGS: &[&str] = &["React", "TypeScript", "Node.js", "Python"];

const STORY: &[&str] = &[
    "I'm a passionate full-stack developer with over 5 years of experience creating \
     digital solutions that make a difference. My journey started with a curiosity \
     about how websites work, and it has evolved into a love for crafting elegant, \
     efficient, and user-friendly applications.",
    "I specialize in modern web technologies, with expertise in React, TypeScript, \
     Node.js, and cloud platforms. I believe in writing clean, maintainable code \
     and following best practices to deliver high-quality software.",
    "When I'm not coding, you'll find me exploring new technologies, contributing \
     to open-source projects, or sharing knowledge with the developer community.",
];

const QUICK_STATS: &[(&str, &str)] = &[
    ("50+", "Projects"),
    ("5+", "Years Exp."),
    ("100%", "Satisfaction"),
];

#[component]
pub fn AboutSection() -> impl IntoView {
    let section_ref = NodeRef::<leptos::html::Section>::new();
    use_scroll_reveal(section_ref, DEFAULT_THRESHOLD, ABOUT_STAGGER_MS);

    view! {
        <section node_ref=section_ref id="about" class="section section-alt">
            <div class="container">
                <SectionHeader
                    lead="About"
                    accent="Me"
                    subtitle="Get to know more about my journey, passion, and what drives me as a developer."
                />

                <div class="about-grid">
                    <div class="about-profile scroll-animate">
                        <div class="about-portrait">
                            <span class="about-portrait-glyph">"👨‍💻"</span>
                        </div>
                        <div class="about-identity">
                            <h3>"John Doe"</h3>
                            <p class="about-role">"Full Stack Developer"</p>
                            <div class="chip-row">
                                {PROFILE_TAGS.iter().map(|tag| {
                                    view! { <span class="chip">{*tag}</span> }
                                }).collect_view()}
                            </div>
                        </div>
                    </div>

                    <div class="about-story scroll-animate">
                        <h3>"My Story"</h3>
                        {STORY.iter().map(|paragraph| {
                            view! { <p class="about-paragraph">{*paragraph}</p> }
                        }).collect_view()}

                        <div class="stat-row">
                            {QUICK_STATS.iter().map(|(value, label)| {
                                view! {
                                    <div class="stat">
                                        <div class="stat-value">{*value}</div>
                                        <div class="stat-label">{*label}</div>
                                    </div>
                                }
                            }).collect_view()}
                        </div>
                    </div>
                </div>

                <div class="card-grid card-grid-four">
                    {HIGHLIGHTS.iter().map(|highlight| {
                        view! {
                            <div class="card card-center scroll-animate">
                                <div class="card-icon">{highlight.icon}</div>
                                <h4 class="card-title">{highlight.title}</h4>
                                <p class="card-text">{highlight.description}</p>
                            </div>
                        }
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}
