//! web-sys bindings that wire the state machines to the page.
//!
//! Each widget gets one `bind()` entry point. All element lookups funnel
//! through the helpers here so a missing element is reported once and the
//! affected widget degrades to a no-op instead of panicking.

pub mod accordion;
pub mod contact;
pub mod nav;
pub mod stats;
pub mod visibility;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::{Document, Element, HtmlElement, Window};

pub(crate) fn window() -> Option<Window> {
    let window = web_sys::window();
    if window.is_none() {
        log::error!("no global window; not running in a browser?");
    }
    window
}

pub(crate) fn document() -> Option<Document> {
    let document = window().and_then(|w| w.document());
    if document.is_none() {
        log::error!("window has no document");
    }
    document
}

/// Look up a required element by id, logging a diagnostic when absent.
pub(crate) fn by_id(id: &str) -> Option<HtmlElement> {
    let element = document()?.get_element_by_id(id);
    match element.and_then(|e| e.dyn_into::<HtmlElement>().ok()) {
        Some(el) => Some(el),
        None => {
            log::error!("element #{id} not found; widget disabled");
            None
        }
    }
}

/// Collect every element matching a selector. An invalid selector or empty
/// match yields an empty list.
pub(crate) fn query_all(selector: &str) -> Vec<Element> {
    let Some(document) = document() else {
        return Vec::new();
    };
    let Ok(list) = document.query_selector_all(selector) else {
        log::error!("invalid selector {selector:?}");
        return Vec::new();
    };
    let mut out = Vec::with_capacity(list.length() as usize);
    for i in 0..list.length() {
        if let Some(el) = list.get(i).and_then(|n| n.dyn_into::<Element>().ok()) {
            out.push(el);
        }
    }
    out
}

/// Run `f` once the DOM is ready: immediately if parsing already finished,
/// otherwise on `DOMContentLoaded`.
pub fn on_ready(f: impl FnOnce() + 'static) {
    let Some(document) = document() else {
        return;
    };
    if document.ready_state() == "loading" {
        let mut f = Some(f);
        let closure = Closure::<dyn FnMut()>::new(move || {
            if let Some(f) = f.take() {
                f();
            }
        });
        let _ = document
            .add_event_listener_with_callback("DOMContentLoaded", closure.as_ref().unchecked_ref());
        closure.forget();
    } else {
        f();
    }
}

/// Stamp the footer's `.text-year` element with the current year.
///
/// The element is optional page furniture, so absence is not an error.
pub fn stamp_copyright_year() {
    let Some(document) = document() else {
        return;
    };
    if let Ok(Some(el)) = document.query_selector(".text-year") {
        let year = js_sys::Date::new_0().get_full_year();
        el.set_text_content(Some(&year.to_string()));
    }
}
