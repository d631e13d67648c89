//! Education Section
//!
//! Alternating timeline of education entries with achievements and an
//! optional GPA badge.

use leptos::prelude::*;

use crate::components::SectionHeader;
use crate::models::EducationEntry;
use crate::reveal::{use_scroll_reveal, DEFAULT_THRESHOLD};

/// The timeline reveals entry by entry, slower than the default stagger
const EDUCATION_STAGGER_MS: u32 = 300;

pub const EDUCATION: &[EducationEntry] = &[
    EducationEntry {
        degree: "Master of Science in Computer Science",
        institution: "Stanford University",
        period: "2019 - 2021",
        location: "Stanford, CA",
        description: "Specialized in Machine Learning and Software Engineering with focus on web technologies.",
        achievements: &[
            "GPA: 3.9/4.0",
            "Dean's List for 4 consecutive semesters",
            "Research Assistant in AI Lab",
        ],
        gpa: Some("3.9/4.0"),
    },
    EducationEntry {
        degree: "Bachelor of Science in Software Engineering",
        institution: "University of California, Berkeley",
        period: "2015 - 2019",
        location: "Berkeley, CA",
        description: "Comprehensive program covering software development, algorithms, and system design.",
        achievements: &[
            "Magna Cum Laude",
            "President of Programming Club",
            "Winner of Campus Hackathon 2018",
        ],
        gpa: Some("3.8/4.0"),
    },
    EducationEntry {
        degree: "Full Stack Web Development Bootcamp",
        institution: "Le Wagon",
        period: "2015",
        location: "San Francisco, CA",
        description: "Intensive 9-week program covering modern web development technologies.",
        achievements: &[
            "Top 5% of cohort",
            "Built 3 full-stack applications",
            "Mentored junior students",
        ],
        gpa: None,
    },
];

#[component]
pub fn EducationSection() -> impl IntoView {
    let section_ref = NodeRef::<leptos::html::Section>::new();
    use_scroll_reveal(section_ref, DEFAULT_THRESHOLD, EDUCATION_STAGGER_MS);

    view! {
        <section node_ref=section_ref id="education" class="section">
            <div class="container container-narrow">
                <SectionHeader
                    accent="Education"
                    subtitle="My academic journey and continuous learning path that shaped my expertise."
                />

                <div class="timeline">
                    {EDUCATION.iter().enumerate().map(|(index, entry)| {
                        let side = if index % 2 == 0 { "timeline-entry left" } else { "timeline-entry right" };
                        view! {
                            <div class=format!("{side} scroll-animate")>
                                <div class="timeline-dot"></div>
                                <div class="card">
                                    <div class="timeline-head">
                                        <div class="card-icon">"🎓"</div>
                                        <div class="timeline-titles">
                                            <h3 class="card-title">{entry.degree}</h3>
                                            <p class="timeline-institution">{entry.institution}</p>
                                        </div>
                                        {entry.gpa.map(|gpa| view! {
                                            <span class="badge badge-accent">{gpa}</span>
                                        })}
                                    </div>

                                    <div class="timeline-meta">
                                        <span class="meta-item">"📅 " {entry.period}</span>
                                        <span class="meta-item">"📍 " {entry.location}</span>
                                    </div>

                                    <p class="card-text">{entry.description}</p>

                                    <div class="timeline-achievements">
                                        <h4>"Key Achievements"</h4>
                                        <ul class="feature-list">
                                            {entry.achievements.iter().map(|achievement| {
                                                view! { <li>{*achievement}</li> }
                                            }).collect_view()}
                                        </ul>
                                    </div>
                                </div>
                            </div>
                        }
                    }).collect_view()}
                </div>

                <div class="section-footer scroll-animate">
                    <div class="card card-inline">
                        <div class="card-icon">"🎓"</div>
                        <div>
                            <h3>"Continuous Learning"</h3>
                            <p class="card-text">
                                "Always exploring new technologies and expanding my knowledge"
                            </p>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::EDUCATION;

    #[test]
    fn entries_each_carry_achievements() {
        assert_eq!(EDUCATION.len(), 3);
        assert!(EDUCATION.iter().all(|e| !e.achievements.is_empty()));
    }

    #[test]
    fn only_degree_programs_carry_a_gpa() {
        assert!(EDUCATION[0].gpa.is_some());
        assert!(EDUCATION[1].gpa.is_some());
        assert!(EDUCATION[2].gpa.is_none());
    }
}
