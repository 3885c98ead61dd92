//! Contact form guard.
//!
//! Intercepts the form's `submit` event, runs the validation checks, and on
//! the first failure shows a blocking alert and cancels the submission. The
//! statistics tracker registers its own submit listener after this one and
//! checks `defaultPrevented`, so registration order matters.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::{Event, HtmlInputElement, HtmlTextAreaElement};

use crate::dom;
use crate::state::contact;

pub(crate) const FORM_ID: &str = "contactFormElement";
const NAME_ID: &str = "name";
const EMAIL_ID: &str = "email";
const MESSAGE_ID: &str = "message";
const CONSENT_ID: &str = "dataConsent";

fn input_value(id: &str) -> Option<String> {
    let el = dom::by_id(id)?;
    Some(el.dyn_into::<HtmlInputElement>().ok()?.value())
}

fn textarea_value(id: &str) -> Option<String> {
    let el = dom::by_id(id)?;
    Some(el.dyn_into::<HtmlTextAreaElement>().ok()?.value())
}

fn checkbox_checked(id: &str) -> Option<bool> {
    let el = dom::by_id(id)?;
    Some(el.dyn_into::<HtmlInputElement>().ok()?.checked())
}

/// Wire the validation guard onto the contact form.
pub fn bind() {
    let Some(form) = dom::by_id(FORM_ID) else {
        return;
    };

    let closure = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        let (Some(name), Some(email), Some(message), Some(consent)) = (
            input_value(NAME_ID),
            input_value(EMAIL_ID),
            textarea_value(MESSAGE_ID),
            checkbox_checked(CONSENT_ID),
        ) else {
            // A missing field element was already reported; let the
            // submission through unguarded rather than wedging the form.
            return;
        };

        if let Err(failure) = contact::validate(&name, &email, &message, consent) {
            if let Some(window) = dom::window() {
                let _ = window.alert_with_message(failure.message());
            }
            event.prevent_default();
        }
    });
    let _ = form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref());
    closure.forget();
}
