//! # whanau-talk-ui
//!
//! Client-side interactivity for the Whānau Talk informational website,
//! compiled to WebAssembly. The crate attaches behavior to the page's
//! existing markup; it renders nothing itself.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`state`] | Browser-free state machines: swipe interpreter, accordion, form validation, counters and the count-up animation |
//! | [`dom`] | web-sys bindings that wire the state machines to real DOM events |
//! | [`consts`] | Shared numeric constants (gesture thresholds, animation timing, fixed statistics) |

pub mod consts;
pub mod dom;
pub mod state;

use wasm_bindgen::prelude::wasm_bindgen;

/// WASM entry point. Sets up logging and binds every widget once the
/// document is ready.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    dom::on_ready(|| {
        dom::nav::bind();
        dom::accordion::bind();
        // The form guard must register its submit listener before the
        // statistics tracker so the tracker sees `defaultPrevented`.
        dom::contact::bind();
        dom::stats::bind();
        dom::stamp_copyright_year();
    });
}

/// Open the slide-in navigation panel. Exported for markup `onclick` use.
#[wasm_bindgen(js_name = openNav)]
pub fn open_nav() {
    dom::nav::open_panel();
}

/// Close the slide-in navigation panel. Exported for markup `onclick` use.
#[wasm_bindgen(js_name = closeNav)]
pub fn close_nav() {
    dom::nav::close_panel();
}

/// Toggle a standalone collapsible block. Exported for markup `onclick` use.
#[wasm_bindgen(js_name = toggleCollapse)]
pub fn toggle_collapse(element_id: &str) {
    dom::accordion::toggle_collapse(element_id);
}
