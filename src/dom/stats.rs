//! Engagement statistics binding: persistence, submission tracking, and the
//! scroll-triggered count-up reveal.
//!
//! On load the two persistent counters are read from localStorage and the
//! page-view counter is bumped and written straight back. A submit listener
//! (registered after the form guard's) bumps the submission counter whenever
//! the guard let the submission through. The first time the statistics
//! section scrolls into view, four staggered count-up timelines animate the
//! displayed figures; the reveal never replays.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::{Event, HtmlElement, Storage};

use crate::consts::{
    COUNT_UP_DURATION_MS, COUNT_UP_STAGGER_MS, FAMILIES_SUPPORTED, SATISFACTION_RATING,
};
use crate::dom;
use crate::dom::visibility;
use crate::state::stats::{
    CountUp, EngagementCounters, FORM_SUBMISSIONS_KEY, PAGE_VIEWS_KEY, format_grouped,
    format_one_decimal,
};

const SECTION_ID: &str = "statisticsSection";
const PAGE_VIEWS_DISPLAY_ID: &str = "pageViewCount";
const SUBMISSIONS_DISPLAY_ID: &str = "formSubmissionCount";
const FAMILIES_DISPLAY_ID: &str = "familiesSupportedCount";
const RATING_DISPLAY_ID: &str = "satisfactionRating";

/// How a statistic renders its in-flight value.
#[derive(Clone, Copy)]
enum Format {
    Grouped,
    OneDecimal,
}

impl Format {
    fn render(self, value: f64) -> String {
        match self {
            Self::Grouped => format_grouped(value),
            Self::OneDecimal => format_one_decimal(value),
        }
    }
}

/// One display node and its animation timeline.
struct StatDisplay {
    element: HtmlElement,
    count_up: CountUp,
    format: Format,
}

fn storage() -> Option<Storage> {
    match dom::window()?.local_storage() {
        Ok(Some(storage)) => Some(storage),
        _ => {
            log::warn!("localStorage unavailable; counters will not persist");
            None
        }
    }
}

fn read_counters(storage: Option<&Storage>) -> EngagementCounters {
    let get = |key| {
        storage
            .and_then(|s| s.get_item(key).ok())
            .flatten()
    };
    EngagementCounters::from_stored(
        get(PAGE_VIEWS_KEY).as_deref(),
        get(FORM_SUBMISSIONS_KEY).as_deref(),
    )
}

fn persist(storage: Option<&Storage>, key: &str, value: u64) {
    if let Some(storage) = storage {
        let _ = storage.set_item(key, &value.to_string());
    }
}

fn set_display(id: &str, text: &str) {
    if let Some(el) = dom::by_id(id) {
        el.set_text_content(Some(text));
    }
}

/// Read persisted counters, count this page load, and wire the submission
/// tracker and reveal animation.
pub fn bind() {
    let storage = storage();
    let mut counters = read_counters(storage.as_ref());

    let views = counters.record_page_view();
    persist(storage.as_ref(), PAGE_VIEWS_KEY, views);

    let counters = Rc::new(RefCell::new(counters));
    let revealed = Rc::new(Cell::new(false));

    bind_submission_tracker(&counters, &revealed, storage);
    bind_reveal(&counters, &revealed);
}

/// Count validated submissions. Registered after the form guard, so a
/// cancelled (invalid) submission shows up here as `defaultPrevented`.
fn bind_submission_tracker(
    counters: &Rc<RefCell<EngagementCounters>>,
    revealed: &Rc<Cell<bool>>,
    storage: Option<Storage>,
) {
    let Some(form) = dom::by_id(super::contact::FORM_ID) else {
        return;
    };

    let counters = Rc::clone(counters);
    let revealed = Rc::clone(revealed);
    let closure = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        if event.default_prevented() {
            return;
        }
        let submissions = counters.borrow_mut().record_form_submission();
        persist(storage.as_ref(), FORM_SUBMISSIONS_KEY, submissions);

        // Refresh the dynamic figures in place, but only once the reveal has
        // already animated them; before that the markup still shows zeros.
        if revealed.get() {
            let counters = counters.borrow();
            set_display(PAGE_VIEWS_DISPLAY_ID, &format_grouped(to_f64(counters.page_views)));
            set_display(
                SUBMISSIONS_DISPLAY_ID,
                &format_grouped(to_f64(counters.form_submissions)),
            );
        }
    });
    let _ = form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Watch the statistics section and run the one-shot reveal animation.
fn bind_reveal(counters: &Rc<RefCell<EngagementCounters>>, revealed: &Rc<Cell<bool>>) {
    let Some(section) = dom::by_id(SECTION_ID) else {
        return;
    };

    let counters = Rc::clone(counters);
    let revealed = Rc::clone(revealed);
    visibility::watch_once(&section, move || {
        revealed.set(true);
        let counters = counters.borrow();
        let targets = [
            (PAGE_VIEWS_DISPLAY_ID, to_f64(counters.page_views), Format::Grouped),
            (
                SUBMISSIONS_DISPLAY_ID,
                to_f64(counters.form_submissions),
                Format::Grouped,
            ),
            (FAMILIES_DISPLAY_ID, FAMILIES_SUPPORTED, Format::Grouped),
            (RATING_DISPLAY_ID, SATISFACTION_RATING, Format::OneDecimal),
        ];

        let displays: Vec<StatDisplay> = targets
            .iter()
            .enumerate()
            .filter_map(|(i, &(id, target, format))| {
                let element = dom::by_id(id)?;
                #[allow(clippy::cast_precision_loss)]
                let delay = i as f64 * COUNT_UP_STAGGER_MS;
                Some(StatDisplay {
                    element,
                    count_up: CountUp::new(target, COUNT_UP_DURATION_MS, delay),
                    format,
                })
            })
            .collect();
        animate(displays);
    });
}

/// Drive every timeline from one `requestAnimationFrame` loop until all
/// settle. Timestamps come from the frame callback itself.
fn animate(displays: Vec<StatDisplay>) {
    if displays.is_empty() {
        return;
    }
    let displays = Rc::new(RefCell::new(displays));

    let handle: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let next = Rc::clone(&handle);

    *handle.borrow_mut() = Some(Closure::new(move |now_ms: f64| {
        let mut all_settled = true;
        for display in displays.borrow_mut().iter_mut() {
            let value = display.count_up.tick(now_ms);
            display
                .element
                .set_text_content(Some(&display.format.render(value)));
            all_settled &= display.count_up.is_settled();
        }
        if !all_settled {
            request_frame(&next);
        }
    }));
    request_frame(&handle);
}

fn request_frame(handle: &Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>) {
    let Some(window) = dom::window() else {
        return;
    };
    if let Some(closure) = handle.borrow().as_ref() {
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
    }
}

#[allow(clippy::cast_precision_loss)]
fn to_f64(value: u64) -> f64 {
    value as f64
}
