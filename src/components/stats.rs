//! Stat bars that fill once the stats section scrolls into view.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config::SiteConfig;
use crate::consts::{ATTR_PCT, SEL_STATS_SECTION, SEL_STAT_BAR};
use crate::error::{SiteError, report};
use crate::state::stats::{RevealTrigger, bar_width, target_percent};
use crate::util::dom;

pub struct StatsElements {
    bars: Vec<HtmlElement>,
    section: Option<HtmlElement>,
}

impl StatsElements {
    #[must_use]
    pub fn locate(doc: &Document) -> Option<Self> {
        let bars = dom::query_all(doc, SEL_STAT_BAR);
        if bars.is_empty() {
            return None;
        }
        Some(Self { bars, section: dom::query(doc, SEL_STATS_SECTION) })
    }
}

fn fill(bars: &[HtmlElement]) {
    for bar in bars {
        let pct = target_percent(bar.get_attribute(ATTR_PCT).as_deref());
        report("stat bar", dom::set_style(bar, "width", &bar_width(pct)));
    }
}

pub fn attach(elements: StatsElements, config: &SiteConfig) -> Result<(), SiteError> {
    let StatsElements { bars, section } = elements;
    let Some(section) = section else {
        fill(&bars);
        return Ok(());
    };

    let trigger = Rc::new(RefCell::new(RevealTrigger::default()));
    let cb = Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
        let intersecting = entries.iter().any(|entry| {
            entry
                .dyn_ref::<IntersectionObserverEntry>()
                .is_some_and(IntersectionObserverEntry::is_intersecting)
        });
        if trigger.borrow_mut().observe(intersecting) {
            log::debug!("fanzone: stats section visible, filling {} bars", bars.len());
            fill(&bars);
            observer.disconnect();
        }
    }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.stats_visibility_threshold));
    let observer = IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &options)?;
    observer.observe(&section);
    cb.forget();
    Ok(())
}
