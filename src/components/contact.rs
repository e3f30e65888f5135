//! About-page contact form with its success overlay and toast.

use web_sys::{Document, HtmlElement};

use crate::components::form::FormBinding;
use crate::components::overlay::OverlayBinding;
use crate::config::SiteConfig;
use crate::consts::{
    ID_CONTACT_EMAIL, ID_CONTACT_MESSAGE, ID_CONTACT_NAME, ID_CONTACT_SUBMIT, ID_CONTACT_SUCCESS,
    ID_CONTACT_SUCCESS_CLOSE,
};
use crate::error::SiteError;
use crate::state::forms::ContactRules;
use crate::util::dom::{self, FormField};

pub struct ContactElements {
    submit: HtmlElement,
    /// `[name, email, message]`
    fields: Vec<FormField>,
    success: Option<HtmlElement>,
    success_close: Option<HtmlElement>,
}

impl ContactElements {
    #[must_use]
    pub fn locate(doc: &Document) -> Option<Self> {
        let submit = dom::by_id(doc, ID_CONTACT_SUBMIT)?;
        let fields: Option<Vec<FormField>> = [ID_CONTACT_NAME, ID_CONTACT_EMAIL, ID_CONTACT_MESSAGE]
            .iter()
            .map(|id| FormField::by_id(doc, id))
            .collect();
        let Some(fields) = fields else {
            log::warn!("fanzone: contact submit present without all three fields");
            return None;
        };
        Some(Self {
            submit,
            fields,
            success: dom::by_id(doc, ID_CONTACT_SUCCESS),
            success_close: dom::by_id(doc, ID_CONTACT_SUCCESS_CLOSE),
        })
    }
}

pub fn attach(elements: ContactElements, config: &SiteConfig) -> Result<(), SiteError> {
    let success = elements.success.map(|el| OverlayBinding::new("contact-success", el));
    if let Some(success) = &success {
        success.bind_dismissal(elements.success_close.as_ref())?;
    }
    FormBinding {
        rules: ContactRules,
        submit: elements.submit,
        fields: elements.fields,
        host: None,
        success,
        toast: config.toast,
    }
    .attach()
}
