//! Fan comment feed.

use crate::consts::COMMENT_AUTHOR;
use crate::util::escape::escape_html;

#[cfg(test)]
#[path = "comments_test.rs"]
mod comments_test;

/// Comment box state. Accepted comments live only in the document; the feed
/// counts them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommentFeed {
    posted: usize,
}

impl CommentFeed {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn posted(&self) -> usize {
        self.posted
    }

    /// Accept `raw` if it has any non-blank text. Returns the inner markup of
    /// the new comment block; blank input returns `None` and changes nothing.
    pub fn submit(&mut self, raw: &str) -> Option<String> {
        let text = raw.trim();
        if text.is_empty() {
            return None;
        }
        self.posted += 1;
        Some(comment_markup(&escape_html(text)))
    }
}

fn comment_markup(escaped: &str) -> String {
    format!(
        "<div style=\"font-weight:700;color:var(--primary)\">{COMMENT_AUTHOR}</div>\
         <div style=\"margin-top:6px\">{escaped}</div>"
    )
}
