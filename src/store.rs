//! Global Application State Store
//!
//! Uses Leptos reactive_stores for the one piece of page-wide state: the
//! reference-counted scroll lock held while detail overlays are open.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::dom;

/// Global application state
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Number of overlays currently holding the scroll lock
    pub open_overlays: u32,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Scroll Lock
// ========================

/// Refcount transition on acquire. Returns the new count and whether the
/// page just became locked.
pub fn acquire_transition(count: u32) -> (u32, bool) {
    let next = count + 1;
    (next, next == 1)
}

/// Refcount transition on release. Never underflows; returns the new count
/// and whether the page just became unlocked.
pub fn release_transition(count: u32) -> (u32, bool) {
    let next = count.saturating_sub(1);
    (next, count > 0 && next == 0)
}

/// Acquire the page scroll lock for one overlay.
pub fn store_acquire_scroll_lock(store: &AppStore) {
    let overlays_field = store.open_overlays();
    let mut overlays = overlays_field.write();
    let (next, became_locked) = acquire_transition(*overlays);
    *overlays = next;
    if became_locked {
        dom::set_body_scroll_locked(true);
    }
}

/// Release the page scroll lock for one overlay. Background scroll is
/// restored only when the last holder releases.
pub fn store_release_scroll_lock(store: &AppStore) {
    let overlays_field = store.open_overlays();
    let mut overlays = overlays_field.write();
    let (next, became_unlocked) = release_transition(*overlays);
    *overlays = next;
    if became_unlocked {
        dom::set_body_scroll_locked(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_acquire_locks_the_page() {
        assert_eq!(acquire_transition(0), (1, true));
    }

    #[test]
    fn nested_overlays_keep_the_lock_until_last_release() {
        let (count, locked) = acquire_transition(0);
        assert!(locked);
        let (count, locked) = acquire_transition(count);
        assert_eq!((count, locked), (2, false));

        let (count, unlocked) = release_transition(count);
        assert_eq!((count, unlocked), (1, false));
        let (count, unlocked) = release_transition(count);
        assert_eq!((count, unlocked), (0, true));
    }

    #[test]
    fn release_without_holders_never_underflows() {
        assert_eq!(release_transition(0), (0, false));
    }
}
