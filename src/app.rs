//! Bootstrap: load configuration and attach every widget present on the page.

use web_sys::Document;

use crate::components::{
    comments, contact, countdown, lead_popup, nav, poll, roster, roster_modal, schedule, slider, stats,
};
use crate::config::SiteConfig;
use crate::consts::ID_CONFIG;
use crate::error::{SiteError, report};
use crate::util::dom;

/// Attach once the document has parsed.
pub fn boot() {
    let Some(doc) = dom::document() else {
        log::warn!("fanzone: no document, nothing to attach");
        return;
    };
    if doc.ready_state() == "loading" {
        let ready_doc = doc.clone();
        report(
            "DOMContentLoaded",
            dom::listen(&doc, "DOMContentLoaded", move |_| attach_all(&ready_doc)),
        );
    } else {
        attach_all(&doc);
    }
}

/// Read the optional inline config block.
#[must_use]
pub fn load_config(doc: &Document) -> SiteConfig {
    let raw = doc.get_element_by_id(ID_CONFIG).and_then(|el| el.text_content());
    SiteConfig::from_json_or_default(raw.as_deref())
}

/// Attach every widget whose elements are present. Absent widgets are
/// skipped; a widget that fails to attach is logged and skipped.
pub fn attach_all(doc: &Document) {
    let config = load_config(doc);
    let mut mounted = Mounted::default();

    mounted.mount("nav", nav::NavElements::locate(doc), |els| nav::attach(els, &config));
    mounted.mount("slider", slider::SliderElements::locate(doc), |els| slider::attach(els, &config));
    mounted.mount("roster", roster::RosterElements::locate(doc), roster::attach);
    mounted.mount("roster-modal", roster_modal::RosterModalElements::locate(doc), roster_modal::attach);
    mounted.mount("schedule", schedule::ScheduleElements::locate(doc), schedule::attach);
    mounted.mount("stats", stats::StatsElements::locate(doc), |els| stats::attach(els, &config));
    mounted.mount("poll", poll::PollElements::locate(doc), poll::attach);
    mounted.mount("comments", comments::CommentElements::locate(doc), comments::attach);
    mounted.mount("contact", contact::ContactElements::locate(doc), |els| contact::attach(els, &config));
    mounted.mount("countdown", countdown::CountdownElements::locate(doc), |els| countdown::attach(els, &config));
    mounted.mount("lead-popup", lead_popup::LeadPopupElements::locate(doc), |els| lead_popup::attach(els, &config));

    log::info!("fanzone: attached [{}]", mounted.names.join(", "));
}

#[derive(Default)]
struct Mounted {
    names: Vec<&'static str>,
}

impl Mounted {
    fn mount<E>(&mut self, name: &'static str, located: Option<E>, attach: impl FnOnce(E) -> Result<(), SiteError>) {
        let Some(elements) = located else {
            log::debug!("fanzone: {name} not on this page");
            return;
        };
        match attach(elements) {
            Ok(()) => self.names.push(name),
            Err(err) => log::warn!("fanzone: {name} failed to attach: {err}"),
        }
    }
}
