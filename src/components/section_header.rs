//! Section Header Component

use leptos::prelude::*;

/// Centered section heading with an accented word and a subtitle line.
/// Both lines take part in the section's staggered reveal.
#[component]
pub fn SectionHeader(
    /// Plain part of the heading, rendered before the accent
    #[prop(into, optional)]
    lead: Option<&'static str>,
    /// Gradient-accented part of the heading
    accent: &'static str,
    subtitle: &'static str,
) -> impl IntoView {
    view! {
        <div class="section-header">
            <h2 class="section-title scroll-animate">
                {lead.map(|lead| view! { <span>{lead} " "</span> })}
                <span class="accent">{accent}</span>
            </h2>
            <p class="section-subtitle scroll-animate">{subtitle}</p>
        </div>
    }
}
