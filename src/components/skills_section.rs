//! Skills Section
//!
//! Filterable skill list with proficiency bars that fill once the section
//! has revealed. Uses a higher intersection threshold than the rest of the
//! page so the bars animate well inside the viewport.

use leptos::prelude::*;

use crate::components::SectionHeader;
use crate::filter::filter_by_category;
use crate::models::{Skill, SkillCategory};
use crate::reveal::{use_scroll_reveal, DEFAULT_STAGGER_MS};

const SKILLS_THRESHOLD: f64 = 0.3;

pub const SKILLS: &[Skill] = &[
    Skill { name: "JavaScript/TypeScript", percentage: 95, category: SkillCategory::Frontend },
    Skill { name: "React/Next.js", percentage: 90, category: SkillCategory::Frontend },
    Skill { name: "Node.js/Express", percentage: 85, category: SkillCategory::Backend },
    Skill { name: "Python/Django", percentage: 80, category: SkillCategory::Backend },
    Skill { name: "PostgreSQL/MongoDB", percentage: 85, category: SkillCategory::Database },
    Skill { name: "React Native", percentage: 75, category: SkillCategory::Mobile },
    Skill { name: "UI/UX Design", percentage: 80, category: SkillCategory::Design },
    Skill { name: "AWS/Docker", percentage: 70, category: SkillCategory::DevOps },
];

/// Filter chips; `None` is the "All" identity filter
const CATEGORY_FILTERS: &[Option<SkillCategory>] = &[
    None,
    Some(SkillCategory::Frontend),
    Some(SkillCategory::Backend),
    Some(SkillCategory::Database),
    Some(SkillCategory::Mobile),
    Some(SkillCategory::Design),
    Some(SkillCategory::DevOps),
];

const INFO_TILES: &[(&str, &str, &str)] = &[
    ("⌨️", "5+ Years", "Professional Experience"),
    ("🌐", "50+ Projects", "Completed Successfully"),
    ("🎨", "Always Learning", "New Technologies"),
];

#[component]
pub fn SkillsSection() -> impl IntoView {
    let section_ref = NodeRef::<leptos::html::Section>::new();
    let phase = use_scroll_reveal(section_ref, SKILLS_THRESHOLD, DEFAULT_STAGGER_MS);

    let (selected_category, set_selected_category) = signal::<Option<SkillCategory>>(None);

    let filtered = move || filter_by_category(SKILLS, selected_category.get(), |s| s.category);

    view! {
        <section node_ref=section_ref id="skills" class="section">
            <div class="container">
                <SectionHeader
                    lead="My"
                    accent="Skills"
                    subtitle="Technologies and tools I work with to bring ideas to life."
                />

                <div class="filter-bar scroll-animate">
                    {CATEGORY_FILTERS.iter().map(|&option| {
                        let label = match option {
                            None => "All",
                            Some(category) => category.label(),
                        };
                        view! {
                            <button
                                class=move || if selected_category.get() == option { "filter-chip active" } else { "filter-chip" }
                                on:click=move |_| set_selected_category.set(option)
                            >
                                {label}
                            </button>
                        }
                    }).collect_view()}
                </div>

                <div class="card-grid card-grid-two">
                    {move || filtered().into_iter().enumerate().map(|(index, skill)| {
                        let class = if phase.get_untracked().has_fired() {
                            "card scroll-animate animate"
                        } else {
                            "card scroll-animate"
                        };
                        // The bar stays at zero until the section reveal fires,
                        // then transitions to the skill's percentage.
                        let bar_style = move || {
                            let width = if phase.get().has_fired() { skill.percentage } else { 0 };
                            format!(
                                "width: {width}%; transition-delay: {}ms; transition-duration: 1.5s",
                                index as u32 * 100,
                            )
                        };
                        view! {
                            <div class=class>
                                <div class="skill-head">
                                    <div class="skill-name">
                                        <h3>{skill.name}</h3>
                                        <p class="skill-category">{skill.category.label()}</p>
                                    </div>
                                    <div class="skill-percent">{skill.percentage}"%"</div>
                                </div>
                                <div class="skill-bar">
                                    <div class="skill-progress" style=bar_style></div>
                                </div>
                            </div>
                        }
                    }).collect_view()}
                </div>

                <div class="tile-row scroll-animate">
                    {INFO_TILES.iter().map(|(icon, title, caption)| {
                        view! {
                            <div class="tile">
                                <div class="card-icon">{*icon}</div>
                                <h3>{*title}</h3>
                                <p class="card-text">{*caption}</p>
                            </div>
                        }
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentages_are_valid_fractions() {
        assert!(SKILLS.iter().all(|s| s.percentage <= 100));
    }

    #[test]
    fn every_skill_category_has_a_filter_chip() {
        for skill in SKILLS {
            assert!(CATEGORY_FILTERS.contains(&Some(skill.category)));
        }
    }

    #[test]
    fn each_chip_selects_exactly_its_skills_in_order() {
        for &option in CATEGORY_FILTERS {
            let out = filter_by_category(SKILLS, option, |s| s.category);
            match option {
                None => assert_eq!(out.len(), SKILLS.len()),
                Some(category) => {
                    let expected: Vec<&Skill> =
                        SKILLS.iter().filter(|s| s.category == category).collect();
                    assert_eq!(out, expected);
                }
            }
        }
    }
}
