//! Player detail modal, filled from whichever card was clicked.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlImageElement};

use crate::components::overlay::OverlayBinding;
use crate::components::roster::read_entry;
use crate::consts::{SEL_MODAL_BACKDROP, SEL_MODAL_CLOSE, SEL_MODAL_IMAGE, SEL_MODAL_META, SEL_MODAL_NAME, SEL_PLAYER_CARD};
use crate::error::SiteError;
use crate::state::roster::RosterEntry;
use crate::util::dom;

pub struct RosterModalElements {
    backdrop: HtmlElement,
    close: Option<HtmlElement>,
    cards: Vec<HtmlElement>,
}

impl RosterModalElements {
    #[must_use]
    pub fn locate(doc: &Document) -> Option<Self> {
        let cards = dom::query_all(doc, SEL_PLAYER_CARD);
        if cards.is_empty() {
            return None;
        }
        let backdrop = dom::query(doc, SEL_MODAL_BACKDROP)?;
        let close = dom::query_within(&backdrop, SEL_MODAL_CLOSE).and_then(|el| el.dyn_ref::<HtmlElement>().cloned());
        Some(Self { backdrop, close, cards })
    }
}

fn populate(backdrop: &Element, entry: &RosterEntry) {
    if let Some(name) = dom::query_within(backdrop, SEL_MODAL_NAME) {
        name.set_text_content(Some(&entry.display_name));
    }
    if let Some(meta) = dom::query_within(backdrop, SEL_MODAL_META) {
        meta.set_text_content(Some(&entry.meta_text));
    }
    if let Some(img) = dom::query_within(backdrop, SEL_MODAL_IMAGE) {
        if let Some(img) = img.dyn_ref::<HtmlImageElement>() {
            img.set_src(&entry.image_ref);
        }
    }
}

pub fn attach(elements: RosterModalElements) -> Result<(), SiteError> {
    let modal = OverlayBinding::new("roster-modal", elements.backdrop);
    modal.bind_dismissal(elements.close.as_ref())?;

    for card in elements.cards {
        let modal = modal.clone();
        let source = card.clone();
        dom::listen(&card, "click", move |_| {
            let entry = read_entry(&source);
            log::debug!("fanzone: roster modal for {}", entry.display_name);
            populate(modal.backdrop(), &entry);
            modal.open();
        })?;
    }
    Ok(())
}
