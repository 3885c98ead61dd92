//! FAQ accordion binding.
//!
//! Each `.accordion-button` toggles the collapsible body that follows its
//! parent element. Expansion sets `max-height` to the body's measured
//! `scrollHeight` so content of any length animates correctly via the CSS
//! transition; the indicator swaps to a minus glyph, rotates 180°, and the
//! button takes the active tint.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::{Element, HtmlElement, HtmlImageElement};

use crate::dom;
use crate::state::accordion::AccordionState;

const BUTTON_SELECTOR: &str = ".accordion-button";

const ICON_COLLAPSED: &str = "./images/chevron-down-solid.svg";
const ICON_EXPANDED: &str = "./images/minus-solid.svg";
const ACTIVE_BACKGROUND: &str = "#65b8f7";

struct Panel {
    button: HtmlElement,
    body: HtmlElement,
    icon: Option<HtmlImageElement>,
}

impl Panel {
    /// Resolve a button's collapsible body (the element after the button's
    /// parent) and its indicator icon.
    fn resolve(button: &Element) -> Option<Self> {
        let button: HtmlElement = button.clone().dyn_into().ok()?;
        let body = button
            .parent_element()
            .and_then(|p| p.next_element_sibling())
            .and_then(|e| e.dyn_into::<HtmlElement>().ok())?;
        let icon = button
            .query_selector("img")
            .ok()
            .flatten()
            .and_then(|e| e.dyn_into::<HtmlImageElement>().ok());
        Some(Self { button, body, icon })
    }

    fn expand(&self) {
        let height = format!("{}px", self.body.scroll_height());
        let _ = self.body.style().set_property("max-height", &height);
        if let Some(icon) = &self.icon {
            icon.set_src(ICON_EXPANDED);
            let _ = icon.style().set_property("transform", "rotate(180deg)");
        }
        let _ = self
            .button
            .style()
            .set_property("background-color", ACTIVE_BACKGROUND);
    }

    fn collapse(&self) {
        let _ = self.body.style().remove_property("max-height");
        if let Some(icon) = &self.icon {
            icon.set_src(ICON_COLLAPSED);
            let _ = icon.style().set_property("transform", "rotate(0deg)");
        }
        let _ = self.button.style().remove_property("background-color");
    }
}

/// Toggle a standalone collapsible block by id, mirroring the new state onto
/// the `.collapse_btn a` trigger's `aria-expanded` attribute.
///
/// Called from markup via the exported `toggleCollapse` binding; independent
/// of the single-open accordion below.
pub fn toggle_collapse(element_id: &str) {
    let Some(document) = dom::document() else {
        return;
    };
    let element = document.get_element_by_id(element_id);
    let button = document.query_selector(".collapse_btn a").ok().flatten();
    let (Some(element), Some(button)) = (element, button) else {
        log::error!("collapse target #{element_id} or its trigger not found");
        return;
    };
    let _ = element.class_list().toggle("show");
    let expanded = button.get_attribute("aria-expanded").as_deref() == Some("true");
    let _ = button.set_attribute("aria-expanded", if expanded { "false" } else { "true" });
}

/// Wire up every accordion button on the page.
pub fn bind() {
    let buttons = dom::query_all(BUTTON_SELECTOR);
    if buttons.is_empty() {
        return;
    }

    let panels: Rc<Vec<Panel>> = Rc::new(
        buttons
            .iter()
            .filter_map(|b| {
                let panel = Panel::resolve(b);
                if panel.is_none() {
                    log::error!("accordion button has no collapsible body; skipped");
                }
                panel
            })
            .collect(),
    );
    let state = Rc::new(RefCell::new(AccordionState::new()));

    for index in 0..panels.len() {
        let state = Rc::clone(&state);
        let all = Rc::clone(&panels);
        let closure = Closure::<dyn FnMut()>::new(move || {
            // Collapse every other panel, then apply the activation result
            // to the clicked one.
            for (i, panel) in all.iter().enumerate() {
                if i != index {
                    panel.collapse();
                }
            }
            if state.borrow_mut().activate(index) {
                all[index].expand();
            } else {
                all[index].collapse();
            }
        });
        let _ = panels[index]
            .button
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
