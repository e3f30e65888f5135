//! Fan comment box.

use web_sys::{Document, HtmlElement};

use crate::consts::{CLASS_FAN_COMMENT, ID_COMMENT_INPUT, ID_COMMENT_LIST, ID_COMMENT_SUBMIT};
use crate::error::{SiteError, report};
use crate::state::comments::CommentFeed;
use crate::util::dom::{self, FormField};

pub struct CommentElements {
    doc: Document,
    input: FormField,
    submit: HtmlElement,
    list: HtmlElement,
}

impl CommentElements {
    #[must_use]
    pub fn locate(doc: &Document) -> Option<Self> {
        Some(Self {
            doc: doc.clone(),
            input: FormField::by_id(doc, ID_COMMENT_INPUT)?,
            submit: dom::by_id(doc, ID_COMMENT_SUBMIT)?,
            list: dom::by_id(doc, ID_COMMENT_LIST)?,
        })
    }
}

fn prepend_comment(doc: &Document, list: &HtmlElement, inner: &str) -> Result<(), SiteError> {
    let block = doc.create_element("div")?;
    block.set_class_name(CLASS_FAN_COMMENT);
    block.set_inner_html(inner);
    list.prepend_with_node_1(&block)?;
    Ok(())
}

pub fn attach(elements: CommentElements) -> Result<(), SiteError> {
    let CommentElements { doc, input, submit, list } = elements;
    let mut feed = CommentFeed::new();

    dom::listen(&submit, "click", move |_| {
        let Some(inner) = feed.submit(&input.value()) else {
            return;
        };
        log::debug!("fanzone: comment #{} posted", feed.posted());
        report("comment", prepend_comment(&doc, &list, &inner));
        input.clear();
    })
}
