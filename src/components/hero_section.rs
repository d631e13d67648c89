//! Hero Section
//!
//! Full-height banner with the rotating typewriter headline and the CTA
//! buttons. The hero sits above the fold, so it animates with CSS entrance
//! classes instead of a viewport observer.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::dom;
use crate::typewriter::Typewriter;

/// Roles cycled by the typewriter
const ROLES: &[&str] = &[
    "Full Stack Developer",
    "React Specialist",
    "UI/UX Designer",
    "Problem Solver",
];

#[component]
pub fn HeroSection() -> impl IntoView {
    let typewriter = RwSignal::new(Typewriter::new(ROLES));

    // Single driver task. Each tick reads current state, and the loop
    // exits once the signal is disposed with the section.
    spawn_local(async move {
        loop {
            let Some(delay) = typewriter.try_update(|tw| tw.tick()) else {
                break;
            };
            TimeoutFuture::new(delay).await;
        }
    });

    view! {
        <section id="home" class="hero">
            <div class="hero-gradient"></div>
            <div class="hero-float hero-float-a"></div>
            <div class="hero-float hero-float-b"></div>

            <div class="hero-inner">
                <div class="hero-avatar animate-scale-in">
                    <span class="hero-avatar-initials">"JD"</span>
                </div>

                <h1 class="hero-title animate-fade-in-up">
                    "Hi, I'm " <span class="accent">"John Doe"</span>
                </h1>

                <div class="hero-role-line">
                    <h2>
                        "I'm a "
                        <span class="hero-role">
                            {move || typewriter.with(|tw| tw.text().to_string())}
                            <span class="hero-caret">"|"</span>
                        </span>
                    </h2>
                </div>

                <p class="hero-tagline animate-fade-in-up">
                    "Passionate about creating beautiful, functional, and user-friendly digital experiences. "
                    "I love turning complex problems into simple, elegant solutions."
                </p>

                <div class="hero-cta animate-fade-in-up">
                    <button class="btn-hero" on:click=move |_| dom::scroll_to_anchor("projects")>
                        "View My Work"
                    </button>
                    <button class="btn-ghost" on:click=move |_| dom::scroll_to_anchor("contact")>
                        "Get In Touch"
                    </button>
                </div>
            </div>

            <button
                class="scroll-indicator"
                aria-label="Scroll to about"
                on:click=move |_| dom::scroll_to_anchor("about")
            >
                "⌄"
            </button>
        </section>
    }
}
