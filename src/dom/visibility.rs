//! One-shot visibility watcher for the statistics reveal.
//!
//! Two implementations behind one entry point, selected by capability
//! detection: `IntersectionObserver` where the browser provides it, and a
//! scroll-position polling fallback with the same fire-exactly-once
//! semantics elsewhere.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::{Closure, JsValue};
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::consts::{REVEAL_VISIBLE_FRACTION, VISIBILITY_POLL_MS};
use crate::dom;

/// Fire `on_visible` exactly once, the first time at least
/// [`REVEAL_VISIBLE_FRACTION`] of `target` is inside the viewport. The watch
/// tears itself down after firing.
pub fn watch_once(target: &Element, on_visible: impl FnOnce() + 'static) {
    let callback: Rc<RefCell<Option<Box<dyn FnOnce()>>>> =
        Rc::new(RefCell::new(Some(Box::new(on_visible))));

    if has_intersection_observer() {
        observe(target, callback);
    } else {
        log::warn!("IntersectionObserver unavailable; polling for visibility");
        poll(target, callback);
    }
}

fn has_intersection_observer() -> bool {
    web_sys::window()
        .map(JsValue::from)
        .map_or(false, |w| {
            js_sys::Reflect::has(&w, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
        })
}

fn observe(target: &Element, callback: Rc<RefCell<Option<Box<dyn FnOnce()>>>>) {
    let fire = Rc::clone(&callback);
    let closure = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            let intersecting = entries.iter().any(|entry| {
                entry
                    .dyn_into::<IntersectionObserverEntry>()
                    .is_ok_and(|e| e.is_intersecting())
            });
            if intersecting {
                observer.disconnect();
                if let Some(f) = fire.borrow_mut().take() {
                    f();
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_VISIBLE_FRACTION));
    match IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            observer.observe(target);
            closure.forget();
        }
        Err(_) => {
            log::warn!("IntersectionObserver construction failed; polling instead");
            poll(target, callback);
        }
    }
}

fn poll(target: &Element, callback: Rc<RefCell<Option<Box<dyn FnOnce()>>>>) {
    let Some(window) = dom::window() else {
        return;
    };

    let interval_id = Rc::new(Cell::new(0));
    let target = target.clone();
    let id_slot = Rc::clone(&interval_id);
    let closure = Closure::<dyn FnMut()>::new(move || {
        if visible_fraction(&target) < REVEAL_VISIBLE_FRACTION {
            return;
        }
        if let Some(window) = web_sys::window() {
            window.clear_interval_with_handle(id_slot.get());
        }
        if let Some(f) = callback.borrow_mut().take() {
            f();
        }
    });

    match window.set_interval_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        VISIBILITY_POLL_MS,
    ) {
        Ok(id) => {
            interval_id.set(id);
            closure.forget();
        }
        Err(_) => log::error!("could not start visibility polling"),
    }
}

/// Fraction of the element's height currently inside the viewport.
fn visible_fraction(target: &Element) -> f64 {
    let Some(window) = web_sys::window() else {
        return 0.0;
    };
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let rect = target.get_bounding_client_rect();
    if rect.height() <= 0.0 {
        return 0.0;
    }
    let visible = rect.bottom().min(viewport_height) - rect.top().max(0.0);
    (visible / rect.height()).clamp(0.0, 1.0)
}
