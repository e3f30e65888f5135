//! Hero image slider.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use web_sys::{Document, HtmlElement};

use crate::config::SiteConfig;
use crate::consts::{SEL_SLIDE, SEL_SLIDER_NEXT, SEL_SLIDER_PREV, SEL_SLIDER_TRACK};
use crate::error::{SiteError, report};
use crate::state::slider::SliderState;
use crate::util::dom;

pub struct SliderElements {
    track: HtmlElement,
    slide_count: usize,
    prev: Option<HtmlElement>,
    next: Option<HtmlElement>,
}

impl SliderElements {
    #[must_use]
    pub fn locate(doc: &Document) -> Option<Self> {
        let track = dom::query(doc, SEL_SLIDER_TRACK)?;
        let slide_count = dom::query_all(doc, SEL_SLIDE).len();
        if slide_count == 0 {
            return None;
        }
        Some(Self {
            track,
            slide_count,
            prev: dom::query(doc, SEL_SLIDER_PREV),
            next: dom::query(doc, SEL_SLIDER_NEXT),
        })
    }
}

#[derive(Clone)]
struct SliderHandle {
    track: HtmlElement,
    state: Rc<RefCell<SliderState>>,
}

impl SliderHandle {
    fn advance(&self, step: i64) {
        let transform = {
            let mut state = self.state.borrow_mut();
            if state.advance(step).is_none() {
                return;
            }
            state.track_transform()
        };
        report("slider", dom::set_style(&self.track, "transform", &transform));
    }
}

pub fn attach(elements: SliderElements, config: &SiteConfig) -> Result<(), SiteError> {
    let handle = SliderHandle {
        track: elements.track,
        state: Rc::new(RefCell::new(SliderState::new(elements.slide_count))),
    };

    for (button, step) in [(elements.prev, -1), (elements.next, 1)] {
        if let Some(button) = button {
            let handle = handle.clone();
            dom::listen(&button, "click", move |_| handle.advance(step))?;
        }
    }

    Interval::new(config.slide_interval_ms, move || handle.advance(1)).forget();
    Ok(())
}
