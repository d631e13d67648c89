//! Contact Section
//!
//! Contact details, social links and the validated message form with a
//! simulated submission cycle.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::SectionHeader;
use crate::form::{
    validate, ContactForm, Field, FieldErrors, SUBMIT_DELAY_MS, SUCCESS_VISIBLE_MS,
};
use crate::models::{ContactInfo, SocialLink};
use crate::reveal::{use_scroll_reveal, DEFAULT_STAGGER_MS, DEFAULT_THRESHOLD};

const CONTACT_INFO: &[ContactInfo] = &[
    ContactInfo {
        icon: "✉️",
        label: "Email",
        value: "john.doe@example.com",
        href: "mailto:john.doe@example.com",
    },
    ContactInfo {
        icon: "📞",
        label: "Phone",
        value: "+1 (555) 123-4567",
        href: "tel:+15551234567",
    },
    ContactInfo {
        icon: "📍",
        label: "Location",
        value: "San Francisco, CA",
        href: "https://maps.google.com/?q=San Francisco, CA",
    },
];

const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { icon: "🐙", label: "GitHub", href: "https://github.com/johndoe" },
    SocialLink { icon: "💼", label: "LinkedIn", href: "https://linkedin.com/in/johndoe" },
    SocialLink { icon: "🐦", label: "Twitter", href: "https://twitter.com/johndoe" },
];

fn field_class(error: Option<&'static str>) -> &'static str {
    if error.is_some() {
        "form-input invalid"
    } else {
        "form-input"
    }
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let section_ref = NodeRef::<leptos::html::Section>::new();
    use_scroll_reveal(section_ref, DEFAULT_THRESHOLD, DEFAULT_STAGGER_MS);

    let form = RwSignal::new(ContactForm::default());
    let errors = RwSignal::new(FieldErrors::default());
    let (submitting, set_submitting) = signal(false);
    let (submitted, set_submitted) = signal(false);

    // Editing a field clears that field's error immediately.
    let edit = move |field: Field, value: String| {
        form.update(|f| f.set(field, value));
        errors.update(|e| e.clear(field));
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let found = validate(&form.get_untracked());
        if !found.is_empty() {
            errors.set(found);
            return;
        }

        set_submitting.set(true);
        web_sys::console::log_1(&"[CONTACT] simulating message submission".into());
        spawn_local(async move {
            TimeoutFuture::new(SUBMIT_DELAY_MS).await;
            if set_submitting.try_set(false).is_some() {
                // Section unmounted mid-flight.
                return;
            }
            set_submitted.set(true);
            form.set(ContactForm::default());
            TimeoutFuture::new(SUCCESS_VISIBLE_MS).await;
            let _ = set_submitted.try_set(false);
        });
    };

    view! {
        <section node_ref=section_ref id="contact" class="section">
            <div class="container">
                <SectionHeader
                    lead="Get In"
                    accent="Touch"
                    subtitle="Let's discuss your next project or just say hello. I'm always open to new opportunities and collaborations."
                />

                <div class="contact-grid">
                    <div class="contact-details scroll-animate">
                        <h3>"Let's Connect"</h3>
                        <p class="card-text">
                            "I'm currently available for freelance work and full-time opportunities. "
                            "Whether you have a project in mind or just want to chat about technology, "
                            "I'd love to hear from you."
                        </p>

                        <div class="contact-info-list">
                            {CONTACT_INFO.iter().map(|info| {
                                view! {
                                    <a class="contact-info-card" href=info.href>
                                        <div class="card-icon">{info.icon}</div>
                                        <div>
                                            <h4>{info.label}</h4>
                                            <p class="card-text">{info.value}</p>
                                        </div>
                                    </a>
                                }
                            }).collect_view()}
                        </div>

                        <div class="social-links">
                            <h4>"Follow Me"</h4>
                            <div class="social-row">
                                {SOCIAL_LINKS.iter().map(|social| {
                                    view! {
                                        <a
                                            class="social-link"
                                            href=social.href
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            aria-label=social.label
                                        >
                                            {social.icon}
                                        </a>
                                    }
                                }).collect_view()}
                            </div>
                        </div>
                    </div>

                    <div class="contact-form scroll-animate">
                        <div class="card">
                            <h3>"Send a Message"</h3>

                            <Show when=move || submitted.get()>
                                <div class="form-success">
                                    "Message sent successfully! I'll get back to you soon."
                                </div>
                            </Show>

                            <form on:submit=on_submit>
                                <div class="form-row">
                                    <div class="form-field">
                                        <label class="form-label" for="name">"Name *"</label>
                                        <input
                                            type="text"
                                            id="name"
                                            placeholder="Your name"
                                            class=move || errors.with(|e| field_class(e.get(Field::Name)))
                                            prop:value=move || form.with(|f| f.get(Field::Name).to_string())
                                            on:input=move |ev| edit(Field::Name, event_target_value(&ev))
                                        />
                                        {move || errors.with(|e| e.get(Field::Name)).map(|msg| view! {
                                            <p class="form-error">{msg}</p>
                                        })}
                                    </div>
                                    <div class="form-field">
                                        <label class="form-label" for="email">"Email *"</label>
                                        <input
                                            type="email"
                                            id="email"
                                            placeholder="your.email@example.com"
                                            class=move || errors.with(|e| field_class(e.get(Field::Email)))
                                            prop:value=move || form.with(|f| f.get(Field::Email).to_string())
                                            on:input=move |ev| edit(Field::Email, event_target_value(&ev))
                                        />
                                        {move || errors.with(|e| e.get(Field::Email)).map(|msg| view! {
                                            <p class="form-error">{msg}</p>
                                        })}
                                    </div>
                                </div>

                                <div class="form-field">
                                    <label class="form-label" for="subject">"Subject *"</label>
                                    <input
                                        type="text"
                                        id="subject"
                                        placeholder="What's this about?"
                                        class=move || errors.with(|e| field_class(e.get(Field::Subject)))
                                        prop:value=move || form.with(|f| f.get(Field::Subject).to_string())
                                        on:input=move |ev| edit(Field::Subject, event_target_value(&ev))
                                    />
                                    {move || errors.with(|e| e.get(Field::Subject)).map(|msg| view! {
                                        <p class="form-error">{msg}</p>
                                    })}
                                </div>

                                <div class="form-field">
                                    <label class="form-label" for="message">"Message *"</label>
                                    <textarea
                                        id="message"
                                        rows="5"
                                        placeholder="Tell me about your project or just say hello!"
                                        class=move || errors.with(|e| field_class(e.get(Field::Message)))
                                        prop:value=move || form.with(|f| f.get(Field::Message).to_string())
                                        on:input=move |ev| edit(Field::Message, event_target_value(&ev))
                                    ></textarea>
                                    {move || errors.with(|e| e.get(Field::Message)).map(|msg| view! {
                                        <p class="form-error">{msg}</p>
                                    })}
                                </div>

                                <button
                                    type="submit"
                                    class="btn-hero form-submit"
                                    prop:disabled=move || submitting.get()
                                >
                                    {move || if submitting.get() {
                                        view! { <span class="spinner"></span> "Sending..." }.into_any()
                                    } else {
                                        view! { "Send Message" }.into_any()
                                    }}
                                </button>
                            </form>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
