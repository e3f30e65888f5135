//! Hamburger navigation toggle.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Document, HtmlElement, Window};

use crate::config::SiteConfig;
use crate::consts::{SEL_HAMBURGER, SEL_NAV_LINKS};
use crate::error::{SiteError, report};
use crate::state::nav::{NavMenu, NavState};
use crate::util::dom;

/// Inline layout applied when the menu drops down on narrow screens.
const DROPDOWN_STYLE: &[(&str, &str)] = &[
    ("flex-direction", "column"),
    ("position", "absolute"),
    ("right", "20px"),
    ("top", "64px"),
    ("padding", "12px"),
    ("border-radius", "8px"),
];

pub struct NavElements {
    window: Window,
    doc: Document,
    hamburger: HtmlElement,
    links: HtmlElement,
}

impl NavElements {
    #[must_use]
    pub fn locate(doc: &Document) -> Option<Self> {
        Some(Self {
            window: dom::window()?,
            doc: doc.clone(),
            hamburger: dom::query(doc, SEL_HAMBURGER)?,
            links: dom::query(doc, SEL_NAV_LINKS)?,
        })
    }

    /// Site accent color from `--primary`, or `fallback` when unset.
    fn primary_color(&self, fallback: &str) -> String {
        let Some(root) = self.doc.document_element() else {
            return fallback.to_owned();
        };
        let value = match self.window.get_computed_style(&root) {
            Ok(Some(style)) => style.get_property_value("--primary").unwrap_or_default(),
            Ok(None) => String::new(),
            Err(err) => {
                log::debug!("fanzone: computed style unavailable: {err:?}");
                String::new()
            }
        };
        let value = value.trim();
        if value.is_empty() { fallback.to_owned() } else { value.to_owned() }
    }
}

fn expand(links: &HtmlElement, background: &str) -> Result<(), SiteError> {
    dom::set_display(links, "flex")?;
    for (property, value) in DROPDOWN_STYLE {
        dom::set_style(links, property, value)?;
    }
    dom::set_style(links, "background", background)
}

pub fn attach(elements: NavElements, config: &SiteConfig) -> Result<(), SiteError> {
    let expanded = dom::display(&elements.links) == "flex";
    let menu = Rc::new(RefCell::new(NavMenu::new(config.nav.breakpoint_px, expanded)));
    let fallback = config.nav.fallback_background.clone();
    let elements = Rc::new(elements);

    {
        let menu = Rc::clone(&menu);
        let elements = Rc::clone(&elements);
        let hamburger = elements.hamburger.clone();
        dom::listen(&hamburger, "click", move |_| {
            let state = menu.borrow_mut().toggle();
            let result = match state {
                NavState::Expanded => expand(&elements.links, &elements.primary_color(&fallback)),
                NavState::Collapsed => dom::set_display(&elements.links, "none"),
            };
            report("nav toggle", result);
        })?;
    }

    let window = elements.window.clone();
    dom::listen(&window, "resize", move |_| {
        let Some(width) = dom::viewport_width(&elements.window) else {
            return;
        };
        if menu.borrow_mut().resize(width) {
            report("nav resize", dom::set_display(&elements.links, "flex"));
        }
    })
}
