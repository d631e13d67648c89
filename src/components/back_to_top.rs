//! Back To Top Control
//!
//! Floating button that appears once the page has been scrolled and
//! smooth-scrolls back to the top.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::dom;

/// Scroll offset past which the control becomes visible
const VISIBLE_AT: f64 = 300.0;

#[component]
pub fn BackToTop() -> impl IntoView {
    let (visible, set_visible) = signal(false);

    let on_scroll = Closure::<dyn FnMut()>::new(move || {
        let _ = set_visible.try_set(dom::scroll_offset() > VISIBLE_AT);
    });
    let _ = window().add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
    on_cleanup(move || {
        let _ = window()
            .remove_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
    });

    view! {
        <Show when=move || visible.get()>
            <button
                class="back-to-top"
                aria-label="Back to top"
                on:click=move |_| dom::scroll_to_top()
            >
                "↑"
            </button>
        </Show>
    }
}
