//! Thin web-sys helpers: element lookup, inline style, listeners, form fields.
//!
//! Lookups return `Option` so a missing element reads as "widget absent"
//! rather than an error. Calls that can throw return [`SiteError`].

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, HtmlInputElement, HtmlTextAreaElement, Node, Window};

use crate::error::SiteError;

#[must_use]
pub fn window() -> Option<Window> {
    web_sys::window()
}

#[must_use]
pub fn document() -> Option<Document> {
    window().and_then(|w| w.document())
}

/// First element matching `selector`, if it is an `HtmlElement`.
#[must_use]
pub fn query(doc: &Document, selector: &str) -> Option<HtmlElement> {
    match doc.query_selector(selector) {
        Ok(found) => found.and_then(|el| el.dyn_ref::<HtmlElement>().cloned()),
        Err(err) => {
            log::warn!("fanzone: bad selector {selector}: {err:?}");
            None
        }
    }
}

/// All `HtmlElement`s matching `selector`, in document order.
#[must_use]
pub fn query_all(doc: &Document, selector: &str) -> Vec<HtmlElement> {
    let list = match doc.query_selector_all(selector) {
        Ok(list) => list,
        Err(err) => {
            log::warn!("fanzone: bad selector {selector}: {err:?}");
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_ref::<HtmlElement>().cloned())
        .collect()
}

/// First descendant of `root` matching `selector`.
#[must_use]
pub fn query_within(root: &Element, selector: &str) -> Option<Element> {
    match root.query_selector(selector) {
        Ok(found) => found,
        Err(err) => {
            log::warn!("fanzone: bad selector {selector}: {err:?}");
            None
        }
    }
}

#[must_use]
pub fn by_id(doc: &Document, id: &str) -> Option<HtmlElement> {
    doc.get_element_by_id(id)
        .and_then(|el| el.dyn_ref::<HtmlElement>().cloned())
}

/// Text content of the first descendant matching `selector`.
#[must_use]
pub fn text_within(root: &Element, selector: &str) -> String {
    query_within(root, selector)
        .and_then(|el| el.text_content())
        .unwrap_or_default()
}

pub fn set_style(el: &HtmlElement, property: &str, value: &str) -> Result<(), SiteError> {
    el.style().set_property(property, value)?;
    Ok(())
}

pub fn set_display(el: &HtmlElement, value: &str) -> Result<(), SiteError> {
    set_style(el, "display", value)
}

/// Inline `display` value, empty when unset.
#[must_use]
pub fn display(el: &HtmlElement) -> String {
    el.style().get_property_value("display").unwrap_or_default()
}

pub fn set_class(el: &Element, class: &str, on: bool) -> Result<(), SiteError> {
    let list = el.class_list();
    if on {
        list.add_1(class)?;
    } else {
        list.remove_1(class)?;
    }
    Ok(())
}

/// Attach `handler` for `event` on `target` for the lifetime of the page.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), SiteError>
where
    F: FnMut(Event) + 'static,
{
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

/// Whether the event was dispatched on `el` itself rather than a descendant.
#[must_use]
pub fn targets_self(ev: &Event, el: &HtmlElement) -> bool {
    let el: &Node = el;
    ev.target()
        .is_some_and(|target| target.dyn_ref::<Node>().is_some_and(|node| node.is_same_node(Some(el))))
}

/// Show a blocking browser message.
pub fn alert(message: &str) {
    let Some(window) = window() else {
        return;
    };
    if let Err(err) = window.alert_with_message(message) {
        log::warn!("fanzone: alert failed: {err:?}");
    }
}

/// Current viewport width in CSS pixels.
#[must_use]
pub fn viewport_width(window: &Window) -> Option<f64> {
    match window.inner_width() {
        Ok(width) => width.as_f64(),
        Err(err) => {
            log::warn!("fanzone: inner_width failed: {err:?}");
            None
        }
    }
}

/// A text input or textarea, read and cleared the same way.
#[derive(Clone)]
pub enum FormField {
    Input(HtmlInputElement),
    TextArea(HtmlTextAreaElement),
}

impl FormField {
    #[must_use]
    pub fn by_id(doc: &Document, id: &str) -> Option<Self> {
        let el = doc.get_element_by_id(id)?;
        if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
            return Some(Self::Input(input.clone()));
        }
        if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
            return Some(Self::TextArea(area.clone()));
        }
        log::warn!("fanzone: #{id} is neither an input nor a textarea");
        None
    }

    #[must_use]
    pub fn value(&self) -> String {
        match self {
            Self::Input(input) => input.value(),
            Self::TextArea(area) => area.value(),
        }
    }

    pub fn clear(&self) {
        match self {
            Self::Input(input) => input.set_value(""),
            Self::TextArea(area) => area.set_value(""),
        }
    }
}
