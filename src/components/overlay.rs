//! Overlay controller shared by every popup family.
//!
//! An [`OverlayBinding`] pairs a backdrop element with an [`Overlay`] core.
//! Open triggers, close controls, and backdrop dismissal are bound the same
//! way for the roster modal, the lead popup, and both success overlays.

use std::cell::{RefCell, RefMut};
use std::rc::Rc;

use web_sys::HtmlElement;

use crate::error::{SiteError, report};
use crate::state::overlay::{DISPLAY_OPEN, Overlay};
use crate::util::dom;

#[derive(Clone)]
pub struct OverlayBinding {
    backdrop: HtmlElement,
    state: Rc<RefCell<Overlay>>,
}

impl OverlayBinding {
    /// Bind `backdrop`. An inline `display: flex` at load counts as open.
    #[must_use]
    pub fn new(name: &'static str, backdrop: HtmlElement) -> Self {
        let mut overlay = Overlay::new(name);
        if dom::display(&backdrop) == DISPLAY_OPEN {
            overlay.open();
        }
        Self { backdrop, state: Rc::new(RefCell::new(overlay)) }
    }

    #[must_use]
    pub fn backdrop(&self) -> &HtmlElement {
        &self.backdrop
    }

    /// Mutable access to the core. Call [`Self::sync`] after releasing it.
    pub fn borrow_mut(&self) -> RefMut<'_, Overlay> {
        self.state.borrow_mut()
    }

    pub fn open(&self) {
        self.state.borrow_mut().open();
        self.sync();
    }

    pub fn close(&self) {
        self.state.borrow_mut().close();
        self.sync();
    }

    /// Mirror the core state onto the backdrop's inline `display`.
    pub fn sync(&self) {
        let (name, open, display) = {
            let state = self.state.borrow();
            (state.name(), state.is_open(), state.display())
        };
        log::debug!("fanzone: overlay {name} open={open} -> {display}");
        report(name, dom::set_display(&self.backdrop, display));
    }

    /// Clicking `trigger` opens the overlay.
    pub fn bind_trigger(&self, trigger: &HtmlElement) -> Result<(), SiteError> {
        let this = self.clone();
        dom::listen(trigger, "click", move |_| this.open())
    }

    /// Clicking `control` closes the overlay.
    pub fn bind_close(&self, control: &HtmlElement) -> Result<(), SiteError> {
        let this = self.clone();
        dom::listen(control, "click", move |_| this.close())
    }

    /// A click on the backdrop itself, not its content, closes the overlay.
    pub fn bind_backdrop(&self) -> Result<(), SiteError> {
        let this = self.clone();
        dom::listen(&self.backdrop, "click", move |ev| {
            let on_backdrop = dom::targets_self(&ev, &this.backdrop);
            let closed = this.state.borrow_mut().backdrop_click(on_backdrop);
            if closed {
                this.sync();
            }
        })
    }

    /// Bind the optional close control and backdrop dismissal together.
    pub fn bind_dismissal(&self, close: Option<&HtmlElement>) -> Result<(), SiteError> {
        if let Some(close) = close {
            self.bind_close(close)?;
        }
        self.bind_backdrop()
    }
}
