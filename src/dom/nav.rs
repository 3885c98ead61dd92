//! Slide-in navigation panel binding.
//!
//! The panel is positioned by its inline `left` style: `"0"` when open,
//! `"-100%"` when off-screen. Three ways to drive it: the navbar toggle
//! button, horizontal swipes anywhere on the document, and the panel's own
//! links (which close it on activation).

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::TouchEvent;

use crate::dom;
use crate::state::nav::{SwipeAction, SwipeTracker};

const PANEL_ID: &str = "mySidepanel";
const TOGGLE_SELECTOR: &str = ".navbar-toggler";
const PANEL_LINK_SELECTOR: &str = "#mySidepanel a.nav-link.side";

const LEFT_OPEN: &str = "0";
const LEFT_CLOSED: &str = "-100%";

/// Slide the panel in or out. A missing panel element is reported and the
/// call becomes a no-op.
pub fn set_panel_open(open: bool) {
    let Some(panel) = dom::by_id(PANEL_ID) else {
        return;
    };
    let left = if open { LEFT_OPEN } else { LEFT_CLOSED };
    let _ = panel.style().set_property("left", left);
}

pub fn open_panel() {
    set_panel_open(true);
}

pub fn close_panel() {
    set_panel_open(false);
}

fn apply(action: SwipeAction) {
    match action {
        SwipeAction::Open => open_panel(),
        SwipeAction::Close => close_panel(),
    }
}

/// Wire up the toggle button, swipe gestures, scroll tracking, and
/// link-activated close.
pub fn bind() {
    let Some(document) = dom::document() else {
        return;
    };

    // Toggle button flips on the panel's current rendered position.
    if let Some(panel) = dom::by_id(PANEL_ID) {
        for toggle in dom::query_all(TOGGLE_SELECTOR) {
            let panel = panel.clone();
            let closure = Closure::<dyn FnMut()>::new(move || {
                let open = panel.style().get_property_value("left").ok() == Some("0px".into());
                set_panel_open(!open);
            });
            let _ = toggle
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    let tracker = Rc::new(RefCell::new(SwipeTracker::new()));

    // Scroll offset feeds the tracker continuously; the swipe decision reads
    // the last observed value. Sample once up front too.
    if let Some(window) = dom::window() {
        if let Ok(offset) = window.scroll_y() {
            tracker.borrow_mut().observe_scroll(offset);
        }
        let t = Rc::clone(&tracker);
        let closure = Closure::<dyn FnMut()>::new(move || {
            let Some(window) = web_sys::window() else {
                return;
            };
            if let Ok(offset) = window.scroll_y() {
                t.borrow_mut().observe_scroll(offset);
            }
        });
        let _ = window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // Swipes are tracked across the whole document.
    {
        let t = Rc::clone(&tracker);
        let closure = Closure::<dyn FnMut(TouchEvent)>::new(move |event: TouchEvent| {
            if let Some(touch) = event.changed_touches().get(0) {
                t.borrow_mut().touch_start(f64::from(touch.screen_x()));
            }
        });
        let _ = document
            .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
        closure.forget();
    }
    {
        let t = Rc::clone(&tracker);
        let closure = Closure::<dyn FnMut(TouchEvent)>::new(move |event: TouchEvent| {
            if let Some(touch) = event.changed_touches().get(0) {
                let action = t.borrow_mut().touch_end(f64::from(touch.screen_x()));
                if let Some(action) = action {
                    apply(action);
                }
            }
        });
        let _ = document
            .add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // Following a link inside the panel closes it.
    for link in dom::query_all(PANEL_LINK_SELECTOR) {
        let closure = Closure::<dyn FnMut()>::new(close_panel);
        let _ = link.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
