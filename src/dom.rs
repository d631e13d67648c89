//! DOM Helpers
//!
//! Thin wrappers over the browser APIs the components share: smooth
//! in-page scrolling and the body scroll lock used while a modal is open.

use leptos::prelude::{document, window};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};

/// Smooth-scroll to the section with the given anchor id (`home`, `about`, ...).
pub fn scroll_to_anchor(id: &str) {
    if let Some(element) = document().get_element_by_id(id) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// Smooth-scroll back to the top of the page.
pub fn scroll_to_top() {
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&options);
}

/// Current vertical scroll offset, zero when unavailable.
pub fn scroll_offset() -> f64 {
    window().scroll_y().unwrap_or(0.0)
}

/// Suppress or restore background page scroll.
pub fn set_body_scroll_locked(locked: bool) {
    if let Some(body) = document().body() {
        let value = if locked { "hidden" } else { "" };
        let _ = body.style().set_property("overflow", value);
    }
}
