//! Portfolio App
//!
//! Top-level page composing the sections in fixed vertical order. Each
//! section is an island: it owns its fixtures, observers and timers. The
//! only shared state is the scroll-lock store.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{
    AboutSection, BackToTop, CertificatesSection, ContactSection, EducationSection, HeroSection,
    Navigation, ProjectsSection, SkillsSection,
};
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    provide_context(Store::new(AppState::default()));

    view! {
        <div class="page">
            <Navigation />
            <HeroSection />
            <AboutSection />
            <EducationSection />
            <ProjectsSection />
            <SkillsSection />
            <CertificatesSection />
            <ContactSection />
            <BackToTop />
        </div>
    }
}
