//! Highlights the next upcoming fixture.

use js_sys::Date;
use web_sys::{Document, HtmlElement};

use crate::consts::{ATTR_DATE, CLASS_NEXT_MATCH, SEL_SCHEDULE_CARD};
use crate::error::SiteError;
use crate::state::schedule::{next_upcoming, parsed_date};
use crate::util::dom;

pub struct ScheduleElements {
    cards: Vec<HtmlElement>,
}

impl ScheduleElements {
    #[must_use]
    pub fn locate(doc: &Document) -> Option<Self> {
        let cards = dom::query_all(doc, SEL_SCHEDULE_CARD);
        (!cards.is_empty()).then_some(Self { cards })
    }
}

/// Runs once; the highlight is not refreshed as matches kick off.
pub fn attach(elements: ScheduleElements) -> Result<(), SiteError> {
    let dates: Vec<Option<f64>> = elements
        .cards
        .iter()
        .map(|card| {
            card.get_attribute(ATTR_DATE)
                .and_then(|raw| parsed_date(Date::parse(&raw)))
        })
        .collect();
    let Some(next) = next_upcoming(&dates, Date::now()) else {
        log::debug!("fanzone: no upcoming fixtures");
        return Ok(());
    };
    if let Some(card) = elements.cards.get(next) {
        dom::set_class(card, CLASS_NEXT_MATCH, true)?;
    }
    Ok(())
}
