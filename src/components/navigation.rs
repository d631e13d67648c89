//! Navigation Bar
//!
//! Fixed top bar with smooth-scrolling anchor links and a mobile menu.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::dom;

/// Anchor targets in page order
const NAV_LINKS: &[(&str, &str)] = &[
    ("home", "Home"),
    ("about", "About"),
    ("education", "Education"),
    ("projects", "Projects"),
    ("skills", "Skills"),
    ("certificates", "Certificates"),
    ("contact", "Contact"),
];

/// Scroll offset past which the bar gains its solid background
const SCROLLED_AT: f64 = 50.0;

#[component]
pub fn Navigation() -> impl IntoView {
    let (scrolled, set_scrolled) = signal(false);
    let (menu_open, set_menu_open) = signal(false);

    let on_scroll = Closure::<dyn FnMut()>::new(move || {
        let _ = set_scrolled.try_set(dom::scroll_offset() > SCROLLED_AT);
    });
    let _ = window().add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
    on_cleanup(move || {
        let _ = window()
            .remove_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
    });

    // Navigating from the mobile menu also closes it.
    let go = move |id: &'static str| {
        dom::scroll_to_anchor(id);
        set_menu_open.set(false);
    };

    view! {
        <nav class=move || if scrolled.get() { "navbar scrolled" } else { "navbar" }>
            <div class="navbar-inner">
                <button class="brand" on:click=move |_| go("home")>"JD"</button>

                <div class="nav-links">
                    {NAV_LINKS.iter().map(|(id, label)| {
                        let id = *id;
                        view! {
                            <button class="nav-link" on:click=move |_| go(id)>{*label}</button>
                        }
                    }).collect_view()}
                </div>

                <button
                    class="menu-toggle"
                    aria-label="Toggle menu"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>

            <Show when=move || menu_open.get()>
                <div class="mobile-menu">
                    {NAV_LINKS.iter().map(|(id, label)| {
                        let id = *id;
                        view! {
                            <button class="nav-link" on:click=move |_| go(id)>{*label}</button>
                        }
                    }).collect_view()}
                </div>
            </Show>
        </nav>
    }
}
