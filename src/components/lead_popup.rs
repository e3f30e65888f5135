//! Newsletter/lead-capture popup and its success popup.

use web_sys::{Document, HtmlElement};

use crate::components::form::FormBinding;
use crate::components::overlay::OverlayBinding;
use crate::config::SiteConfig;
use crate::consts::{
    ID_LEAD_CLOSE, ID_LEAD_EMAIL, ID_LEAD_NAME, ID_LEAD_OPEN, ID_LEAD_OVERLAY, ID_LEAD_SUBMIT, ID_LEAD_SUCCESS,
    ID_LEAD_SUCCESS_CLOSE,
};
use crate::error::SiteError;
use crate::state::forms::LeadCaptureRules;
use crate::util::dom::{self, FormField};

pub struct LeadPopupElements {
    overlay: HtmlElement,
    open: Option<HtmlElement>,
    close: Option<HtmlElement>,
    /// Submit button with its `[name, email]` fields.
    form: Option<(HtmlElement, FormField, FormField)>,
    success: Option<HtmlElement>,
    success_close: Option<HtmlElement>,
}

impl LeadPopupElements {
    #[must_use]
    pub fn locate(doc: &Document) -> Option<Self> {
        let overlay = dom::by_id(doc, ID_LEAD_OVERLAY)?;
        let form = match (
            dom::by_id(doc, ID_LEAD_SUBMIT),
            FormField::by_id(doc, ID_LEAD_NAME),
            FormField::by_id(doc, ID_LEAD_EMAIL),
        ) {
            (Some(submit), Some(name), Some(email)) => Some((submit, name, email)),
            (Some(_), _, _) => {
                log::warn!("fanzone: lead popup submit present without name/email fields");
                None
            }
            _ => None,
        };
        Some(Self {
            overlay,
            open: dom::by_id(doc, ID_LEAD_OPEN),
            close: dom::by_id(doc, ID_LEAD_CLOSE),
            form,
            success: dom::by_id(doc, ID_LEAD_SUCCESS),
            success_close: dom::by_id(doc, ID_LEAD_SUCCESS_CLOSE),
        })
    }
}

pub fn attach(elements: LeadPopupElements, config: &SiteConfig) -> Result<(), SiteError> {
    let popup = OverlayBinding::new("lead", elements.overlay);
    if let Some(open) = &elements.open {
        popup.bind_trigger(open)?;
    }
    popup.bind_dismissal(elements.close.as_ref())?;

    let success = elements.success.map(|el| OverlayBinding::new("lead-success", el));
    if let Some(success) = &success {
        success.bind_dismissal(elements.success_close.as_ref())?;
    }

    if let Some((submit, name, email)) = elements.form {
        FormBinding {
            rules: LeadCaptureRules,
            submit,
            fields: vec![name, email],
            host: Some(popup),
            success,
            toast: config.toast,
        }
        .attach()?;
    }
    Ok(())
}
