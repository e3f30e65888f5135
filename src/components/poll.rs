//! Fan poll buttons and result line.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Document, HtmlElement};

use crate::consts::{ATTR_PLAYER, ID_POLL_RESULT, SEL_POLL_BUTTON};
use crate::error::SiteError;
use crate::state::poll::Poll;
use crate::util::dom;

pub struct PollElements {
    buttons: Vec<HtmlElement>,
    result: Option<HtmlElement>,
}

impl PollElements {
    #[must_use]
    pub fn locate(doc: &Document) -> Option<Self> {
        let buttons = dom::query_all(doc, SEL_POLL_BUTTON);
        if buttons.is_empty() {
            return None;
        }
        Some(Self { buttons, result: dom::by_id(doc, ID_POLL_RESULT) })
    }
}

pub fn attach(elements: PollElements) -> Result<(), SiteError> {
    let poll = Rc::new(RefCell::new(Poll::new()));
    let result = Rc::new(elements.result);

    for button in elements.buttons {
        let poll = Rc::clone(&poll);
        let result = Rc::clone(&result);
        let source = button.clone();
        dom::listen(&button, "click", move |_| {
            let candidate = Poll::candidate_key(
                source.get_attribute(ATTR_PLAYER).as_deref(),
                &source.text_content().unwrap_or_default(),
            );
            let markup = {
                let mut poll = poll.borrow_mut();
                poll.vote(&candidate);
                poll.render_html()
            };
            log::debug!("fanzone: vote for {candidate}");
            if let Some(result) = result.as_ref() {
                result.set_inner_html(&markup);
            }
        })?;
    }
    Ok(())
}
