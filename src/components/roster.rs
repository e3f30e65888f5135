//! Player roster: role buttons, search box, and the "not found" notice.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlImageElement, HtmlInputElement};

use crate::consts::{
    ATTR_ROLE, CLASS_ACTIVE_ROLE, ID_NOT_FOUND, PLAYER_NOT_FOUND, SEL_FILTER_BUTTON, SEL_PLAYERS_GRID,
    SEL_PLAYER_CARD, SEL_PLAYER_IMAGE, SEL_PLAYER_META, SEL_PLAYER_NAME, SEL_SEARCH_BOX,
};
use crate::error::{SiteError, report};
use crate::state::roster::{FilterOutcome, RoleFilter, RosterEntry, RosterFilter};
use crate::util::dom;

/// Read a player card into a roster entry.
#[must_use]
pub fn read_entry(card: &Element) -> RosterEntry {
    RosterEntry {
        display_name: dom::text_within(card, SEL_PLAYER_NAME),
        role: card.get_attribute(ATTR_ROLE).unwrap_or_default(),
        image_ref: dom::query_within(card, SEL_PLAYER_IMAGE)
            .and_then(|img| img.dyn_ref::<HtmlImageElement>().map(HtmlImageElement::src))
            .unwrap_or_default(),
        meta_text: dom::text_within(card, SEL_PLAYER_META),
    }
}

pub struct RosterElements {
    doc: Document,
    cards: Vec<HtmlElement>,
    buttons: Vec<HtmlElement>,
    search: Option<HtmlInputElement>,
    grid: Option<HtmlElement>,
    notice: Option<HtmlElement>,
}

impl RosterElements {
    #[must_use]
    pub fn locate(doc: &Document) -> Option<Self> {
        let cards = dom::query_all(doc, SEL_PLAYER_CARD);
        let buttons = dom::query_all(doc, SEL_FILTER_BUTTON);
        let search = dom::query(doc, SEL_SEARCH_BOX).and_then(|el| el.dyn_ref::<HtmlInputElement>().cloned());
        if buttons.is_empty() && search.is_none() {
            return None;
        }
        Some(Self {
            doc: doc.clone(),
            cards,
            buttons,
            search,
            grid: dom::query(doc, SEL_PLAYERS_GRID),
            notice: dom::by_id(doc, ID_NOT_FOUND),
        })
    }
}

struct RosterView {
    doc: Document,
    cards: Vec<HtmlElement>,
    buttons: Vec<HtmlElement>,
    search: Option<HtmlInputElement>,
    grid: Option<HtmlElement>,
    notice: RefCell<Option<HtmlElement>>,
    filter: RefCell<RosterFilter>,
}

impl RosterView {
    fn query(&self) -> String {
        self.search.as_ref().map(HtmlInputElement::value).unwrap_or_default()
    }

    fn render(&self, outcome: &FilterOutcome) {
        for (card, visible) in self.cards.iter().zip(&outcome.visible) {
            report("roster card", dom::set_display(card, if *visible { "" } else { "none" }));
        }
        if outcome.show_not_found() {
            if let Some(notice) = self.notice_element() {
                report("roster notice", dom::set_display(&notice, "block"));
            }
        } else if let Some(notice) = self.notice.borrow().as_ref() {
            report("roster notice", dom::set_display(notice, "none"));
        }
    }

    /// The notice element, created after the grid on first use.
    fn notice_element(&self) -> Option<HtmlElement> {
        if let Some(existing) = self.notice.borrow().as_ref() {
            return Some(existing.clone());
        }
        let grid = self.grid.as_ref()?;
        match create_notice(&self.doc, grid) {
            Ok(notice) => {
                *self.notice.borrow_mut() = Some(notice.clone());
                Some(notice)
            }
            Err(err) => {
                log::warn!("fanzone: could not create roster notice: {err}");
                None
            }
        }
    }

    fn mark_active(&self, active: usize) {
        for (i, button) in self.buttons.iter().enumerate() {
            report("role button", dom::set_class(button, CLASS_ACTIVE_ROLE, i == active));
        }
    }
}

fn create_notice(doc: &Document, grid: &HtmlElement) -> Result<HtmlElement, SiteError> {
    let notice = doc
        .create_element("p")?
        .dyn_into::<HtmlElement>()
        .map_err(|_| SiteError::Dom("created <p> is not an HtmlElement".into()))?;
    notice.set_id(ID_NOT_FOUND);
    notice.set_text_content(Some(PLAYER_NOT_FOUND));
    for (property, value) in [("display", "none"), ("color", "red"), ("font-weight", "bold"), ("margin-top", "12px")] {
        dom::set_style(&notice, property, value)?;
    }
    let parent = grid
        .parent_node()
        .ok_or_else(|| SiteError::Dom("players grid has no parent".into()))?;
    parent.insert_before(&notice, grid.next_sibling().as_ref())?;
    Ok(notice)
}

pub fn attach(elements: RosterElements) -> Result<(), SiteError> {
    let entries: Vec<RosterEntry> = elements.cards.iter().map(|card| read_entry(card)).collect();
    let roles: Vec<RoleFilter> = elements
        .buttons
        .iter()
        .map(|button| RoleFilter::parse(button.get_attribute(ATTR_ROLE).as_deref()))
        .collect();
    let active = elements
        .buttons
        .iter()
        .position(|button| button.class_list().contains(CLASS_ACTIVE_ROLE));
    log::debug!("fanzone: roster of {} cards, {} role buttons", entries.len(), roles.len());

    let view = Rc::new(RosterView {
        doc: elements.doc,
        cards: elements.cards,
        buttons: elements.buttons,
        search: elements.search,
        grid: elements.grid,
        notice: RefCell::new(elements.notice),
        filter: RefCell::new(RosterFilter::new(entries, roles, active)),
    });

    for (i, button) in view.buttons.iter().enumerate() {
        let view = Rc::clone(&view);
        dom::listen(button, "click", move |_| {
            let outcome = view.filter.borrow_mut().select_button(i, &view.query());
            if let Some(outcome) = outcome {
                view.render(&outcome);
                view.mark_active(i);
            }
        })?;
    }

    if let Some(search) = &view.search {
        let view_for_input = Rc::clone(&view);
        dom::listen(search, "input", move |_| {
            let outcome = view_for_input.filter.borrow().search(&view_for_input.query());
            view_for_input.render(&outcome);
        })?;
    }
    Ok(())
}
