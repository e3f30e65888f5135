//! Kick-off countdown element.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use js_sys::Date;
use web_sys::{Document, HtmlElement};

use crate::config::SiteConfig;
use crate::consts::{ATTR_TARGET, ID_COUNTDOWN};
use crate::error::SiteError;
use crate::state::countdown::Countdown;
use crate::util::dom;

pub struct CountdownElements {
    el: HtmlElement,
    countdown: Countdown,
}

impl CountdownElements {
    #[must_use]
    pub fn locate(doc: &Document) -> Option<Self> {
        let el = dom::by_id(doc, ID_COUNTDOWN)?;
        let raw = el.get_attribute(ATTR_TARGET).unwrap_or_default();
        let Some(countdown) = Countdown::new(Date::parse(&raw)) else {
            log::warn!("fanzone: countdown target {raw:?} is not a date");
            return None;
        };
        Some(Self { el, countdown })
    }
}

pub fn attach(elements: CountdownElements, config: &SiteConfig) -> Result<(), SiteError> {
    let CountdownElements { el, countdown } = elements;
    let countdown = Rc::new(RefCell::new(countdown));

    let render = move || {
        let display = countdown.borrow_mut().tick(Date::now());
        el.set_text_content(Some(&display.to_string()));
    };
    render();
    Interval::new(config.countdown_tick_ms, render).forget();
    Ok(())
}
