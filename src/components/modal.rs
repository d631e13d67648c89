//! Modal Overlay
//!
//! Shared backdrop + detail panel. Clicking the backdrop closes the modal;
//! clicks inside the panel are contained and never close it. The page
//! scroll lock is held for exactly the modal's lifetime.

use leptos::prelude::*;

use crate::store::{store_acquire_scroll_lock, store_release_scroll_lock, use_app_store};

/// Detail overlay wrapping section-specific content
///
/// At most one instance per section is mounted at a time; the caller's
/// selection signal enforces that.
#[component]
pub fn Modal(#[prop(into)] on_close: Callback<()>, children: Children) -> impl IntoView {
    let store = use_app_store();
    store_acquire_scroll_lock(&store);
    on_cleanup(move || store_release_scroll_lock(&store));

    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.run(())>
            <div class="modal-content" on:click=move |ev| ev.stop_propagation()>
                {children()}
            </div>
        </div>
    }
}
