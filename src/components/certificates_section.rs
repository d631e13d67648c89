//! Certificates Section
//!
//! Certificate gallery with level badges, summary stats and a single-open
//! detail modal.

use leptos::prelude::*;

use crate::components::{Modal, SectionHeader};
use crate::models::{CertLevel, Certificate};
use crate::reveal::{use_scroll_reveal, DEFAULT_STAGGER_MS, DEFAULT_THRESHOLD};

pub const CERTIFICATES: &[Certificate] = &[
    Certificate {
        id: 1,
        title: "AWS Certified Solutions Architect",
        issuer: "Amazon Web Services",
        date: "March 2023",
        description: "Validates expertise in designing distributed systems on AWS.",
        credential_url: "https://aws.amazon.com/certification/",
        image: "☁️",
        skills: &["AWS", "Cloud Architecture", "DevOps", "System Design"],
        level: CertLevel::Advanced,
    },
    Certificate {
        id: 2,
        title: "React Developer Certification",
        issuer: "Meta",
        date: "January 2023",
        description: "Professional certification in React development and modern frontend practices.",
        credential_url: "https://developers.facebook.com/docs/react/",
        image: "⚛️",
        skills: &["React", "JavaScript", "Frontend Development", "UI/UX"],
        level: CertLevel::Expert,
    },
    Certificate {
        id: 3,
        title: "Google Analytics Certified",
        issuer: "Google",
        date: "November 2022",
        description: "Demonstrates proficiency in Google Analytics and digital marketing.",
        credential_url: "https://skillshop.exceedlms.com/student/catalog",
        image: "📊",
        skills: &["Analytics", "Digital Marketing", "Data Analysis", "SEO"],
        level: CertLevel::Intermediate,
    },
    Certificate {
        id: 4,
        title: "Docker Certified Associate",
        issuer: "Docker Inc.",
        date: "September 2022",
        description: "Validates skills in containerization and Docker ecosystem.",
        credential_url: "https://training.mirantis.com/certification/",
        image: "🐳",
        skills: &["Docker", "Containerization", "DevOps", "Kubernetes"],
        level: CertLevel::Advanced,
    },
    Certificate {
        id: 5,
        title: "MongoDB Developer Certification",
        issuer: "MongoDB University",
        date: "July 2022",
        description: "Certification in MongoDB database design and development.",
        credential_url: "https://university.mongodb.com/",
        image: "🍃",
        skills: &["MongoDB", "NoSQL", "Database Design", "Node.js"],
        level: CertLevel::Advanced,
    },
    Certificate {
        id: 6,
        title: "TypeScript Deep Dive",
        issuer: "Microsoft",
        date: "May 2022",
        description: "Advanced TypeScript programming and type system mastery.",
        credential_url: "https://docs.microsoft.com/en-us/learn/",
        image: "📘",
        skills: &["TypeScript", "JavaScript", "Type Safety", "Modern JS"],
        level: CertLevel::Expert,
    },
];

#[component]
pub fn CertificatesSection() -> impl IntoView {
    let section_ref = NodeRef::<leptos::html::Section>::new();
    use_scroll_reveal(section_ref, DEFAULT_THRESHOLD, DEFAULT_STAGGER_MS);

    let (selected, set_selected) = signal::<Option<&'static Certificate>>(None);

    view! {
        <section node_ref=section_ref id="certificates" class="section section-alt">
            <div class="container">
                <SectionHeader
                    accent="Certificates"
                    subtitle="Professional certifications and achievements that validate my expertise."
                />

                <div class="card-grid card-grid-three">
                    {CERTIFICATES.iter().map(|certificate| {
                        view! {
                            <div
                                class="card card-click scroll-animate"
                                on:click=move |_| set_selected.set(Some(certificate))
                            >
                                <div class="cert-head">
                                    <div class="cert-glyph">{certificate.image}</div>
                                    <div class="cert-titles">
                                        <h3 class="card-title">{certificate.title}</h3>
                                        <div class="meta-item">"🏢 " {certificate.issuer}</div>
                                        <div class="meta-item">"📅 " {certificate.date}</div>
                                    </div>
                                </div>

                                <span class=certificate.level.badge_class()>
                                    {certificate.level.label()}
                                </span>

                                <p class="card-text">{certificate.description}</p>

                                <div class="chip-row">
                                    {certificate.skills.iter().take(3).map(|skill| {
                                        view! { <span class="chip">{*skill}</span> }
                                    }).collect_view()}
                                    {(certificate.skills.len() > 3).then(|| view! {
                                        <span class="chip chip-muted">
                                            {format!("+{}", certificate.skills.len() - 3)}
                                        </span>
                                    })}
                                </div>
                            </div>
                        }
                    }).collect_view()}
                </div>

                <div class="tile-row scroll-animate">
                    <div class="tile">
                        <div class="card-icon">"🏆"</div>
                        <h3>{CERTIFICATES.len()}</h3>
                        <p class="card-text">"Professional Certificates"</p>
                    </div>
                    <div class="tile">
                        <div class="card-icon">"📅"</div>
                        <h3>"2023"</h3>
                        <p class="card-text">"Latest Certification"</p>
                    </div>
                    <div class="tile">
                        <div class="card-icon">"🏢"</div>
                        <h3>"5+"</h3>
                        <p class="card-text">"Technology Partners"</p>
                    </div>
                </div>
            </div>

            {move || selected.get().map(|certificate| view! {
                <Modal on_close=move || set_selected.set(None)>
                    <div class="modal-head">
                        <div class="cert-head">
                            <div class="cert-glyph cert-glyph-large">{certificate.image}</div>
                            <div>
                                <h3 class="modal-title">{certificate.title}</h3>
                                <div class="modal-meta">
                                    <span class="meta-item">"🏢 " {certificate.issuer}</span>
                                    <span class="meta-item">"📅 " {certificate.date}</span>
                                </div>
                                <span class=certificate.level.badge_class()>
                                    {certificate.level.label()} " Level"
                                </span>
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

                    <div class="modal-block">
                        <h4>"About This Certification"</h4>
                        <p class="modal-text">{certificate.description}</p>
                    </div>

                    <div class="modal-block">
                        <h4>"Skills Covered"</h4>
                        <div class="chip-row">
                            {certificate.skills.iter().map(|skill| {
                                view! { <span class="chip">{*skill}</span> }
                            }).collect_view()}
                        </div>
                    </div>

                    <div class="modal-block detail-grid">
                        <h4>"Certificate Details"</h4>
                        <div class="detail-grid-body">
                            <div>
                                <span class="detail-label">"Issued by:"</span>
                                <div class="detail-value">{certificate.issuer}</div>
                            </div>
                            <div>
                                <span class="detail-label">"Issue Date:"</span>
                                <div class="detail-value">{certificate.date}</div>
                            </div>
                            <div>
                                <span class="detail-label">"Level:"</span>
                                <div class="detail-value">{certificate.level.label()}</div>
                            </div>
                            <div>
                                <span class="detail-label">"Status:"</span>
                                <div class="detail-value detail-valid">"Valid"</div>
                            </div>
                        </div>
                    </div>

                    <div class="modal-actions">
                        <a
                            class="btn-hero"
                            href=certificate.credential_url
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            "View Credential"
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
    fn certificate_ids_are_unique() {
        let mut ids: Vec<u32> = CERTIFICATES.iter().map(|c| c.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), CERTIFICATES.len());
    }

    #[test]
    fn every_level_maps_to_a_badge_class() {
        for level in [
            CertLevel::Beginner,
            CertLevel::Intermediate,
            CertLevel::Advanced,
            CertLevel::Expert,
        ] {
            assert!(level.badge_class().starts_with("badge "));
        }
    }
}
