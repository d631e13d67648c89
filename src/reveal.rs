//! Scroll-Reveal
//!
//! One-shot staggered reveal of a section's marked children the first time
//! the section scrolls into view. Re-entering the viewport never replays
//! the animation.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use leptos::html::Section;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Default intersection threshold (fraction of the section visible)
pub const DEFAULT_THRESHOLD: f64 = 0.1;
/// Default delay between sibling reveals
pub const DEFAULT_STAGGER_MS: u32 = 100;

type ObserverSlot = Option<(
    IntersectionObserver,
    Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
)>;

/// Per-section reveal phase. One-shot latch: once out of `Hidden` the
/// section never animates again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealPhase {
    #[default]
    Hidden,
    Revealing,
    Revealed,
}

impl RevealPhase {
    /// First intersection fires the latch; later intersections are no-ops.
    pub fn trigger(self) -> Self {
        match self {
            RevealPhase::Hidden => RevealPhase::Revealing,
            other => other,
        }
    }

    /// The last staggered reveal completes the section.
    pub fn finish(self) -> Self {
        match self {
            RevealPhase::Revealing => RevealPhase::Revealed,
            other => other,
        }
    }

    pub fn has_fired(self) -> bool {
        !matches!(self, RevealPhase::Hidden)
    }
}

/// Delay before the element at `index` reveals. Monotone in `index`, which
/// keeps reveals firing in document order.
pub fn stagger_delay(index: usize, interval_ms: u32) -> u32 {
    index as u32 * interval_ms
}

/// Watch `section_ref` and reveal its `.scroll-animate` descendants, each
/// delayed by its index times `stagger_ms`, the first time the section
/// intersects the viewport by at least `threshold`.
///
/// The observer is disconnected on first trigger; cleanup disconnects it
/// again unconditionally and drops pending timers (dropping cancels them),
/// so no callback can fire against an unmounted section.
pub fn use_scroll_reveal(
    section_ref: NodeRef<Section>,
    threshold: f64,
    stagger_ms: u32,
) -> ReadSignal<RevealPhase> {
    let (phase, set_phase) = signal(RevealPhase::default());

    let pending: Rc<RefCell<Vec<Timeout>>> = Rc::new(RefCell::new(Vec::new()));
    let observer: Rc<RefCell<ObserverSlot>> = Rc::new(RefCell::new(None));

    Effect::new({
        let pending = Rc::clone(&pending);
        let observer = Rc::clone(&observer);
        move |_| {
            let Some(section) = section_ref.get() else {
                return;
            };
            if observer.borrow().is_some() {
                return;
            }

            let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new({
                let pending = Rc::clone(&pending);
                let section = section.clone();
                move |entries: js_sys::Array, obs: IntersectionObserver| {
                    let intersecting = entries.iter().any(|entry| {
                        entry
                            .dyn_into::<IntersectionObserverEntry>()
                            .map(|e| e.is_intersecting())
                            .unwrap_or(false)
                    });
                    if !intersecting {
                        return;
                    }
                    let first_trigger = set_phase.try_update(|p| {
                        let fired = p.has_fired();
                        *p = p.trigger();
                        !fired
                    });
                    if first_trigger != Some(true) {
                        return;
                    }
                    obs.disconnect();
                    schedule_reveals(&section, stagger_ms, &pending, set_phase);
                }
            });

            let options = IntersectionObserverInit::new();
            options.set_threshold(&JsValue::from_f64(threshold));
            if let Ok(obs) =
                IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            {
                obs.observe(&section);
                *observer.borrow_mut() = Some((obs, callback));
            }
        }
    });

    on_cleanup(move || {
        if let Some((obs, _callback)) = observer.borrow_mut().take() {
            obs.disconnect();
        }
        pending.borrow_mut().clear();
    });

    phase
}

/// Schedule the staggered reveal of every marked child, in document order.
fn schedule_reveals(
    section: &web_sys::HtmlElement,
    stagger_ms: u32,
    pending: &Rc<RefCell<Vec<Timeout>>>,
    set_phase: WriteSignal<RevealPhase>,
) {
    let nodes = match section.query_selector_all(".scroll-animate") {
        Ok(nodes) if nodes.length() > 0 => nodes,
        // Nothing to stagger: the section is revealed as soon as it fires.
        _ => {
            let _ = set_phase.try_update(|p| *p = p.finish());
            return;
        }
    };

    let total = nodes.length();
    let mut timers = pending.borrow_mut();
    for index in 0..total {
        let Some(element) = nodes
            .item(index)
            .and_then(|node| node.dyn_into::<web_sys::Element>().ok())
        else {
            continue;
        };
        let is_last = index + 1 == total;
        timers.push(Timeout::new(
            stagger_delay(index as usize, stagger_ms),
            move || {
                let _ = element.class_list().add_1("animate");
                if is_last {
                    let _ = set_phase.try_update(|p| *p = p.finish());
                }
            },
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latch_fires_exactly_once() {
        let phase = RevealPhase::default();
        assert_eq!(phase, RevealPhase::Hidden);
        assert!(!phase.has_fired());

        let phase = phase.trigger();
        assert_eq!(phase, RevealPhase::Revealing);
        assert!(phase.has_fired());

        // A second intersection must not restart the sequence.
        assert_eq!(phase.trigger(), RevealPhase::Revealing);

        let phase = phase.finish();
        assert_eq!(phase, RevealPhase::Revealed);
        assert_eq!(phase.trigger(), RevealPhase::Revealed);
        assert_eq!(phase.finish(), RevealPhase::Revealed);
    }

    #[test]
    fn finish_is_a_no_op_before_trigger() {
        assert_eq!(RevealPhase::Hidden.finish(), RevealPhase::Hidden);
    }

    #[test]
    fn stagger_delays_are_monotone_in_document_order() {
        let delays: Vec<u32> = (0..6).map(|i| stagger_delay(i, 100)).collect();
        assert_eq!(delays, vec![0, 100, 200, 300, 400, 500]);
        assert!(delays.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn stagger_scales_with_section_interval() {
        assert_eq!(stagger_delay(2, 200), 400);
        assert_eq!(stagger_delay(3, 300), 900);
    }
}
