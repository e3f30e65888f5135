//! Validate-and-submit wiring shared by the lead popup and contact form.

use web_sys::HtmlElement;

use crate::components::overlay::OverlayBinding;
use crate::components::toast;
use crate::config::ToastTiming;
use crate::error::SiteError;
use crate::state::forms::{self, FormRules};
use crate::util::dom::{self, FormField};

/// A form whose submit button runs `rules` over `fields`.
pub struct FormBinding<R> {
    pub rules: R,
    pub submit: HtmlElement,
    pub fields: Vec<FormField>,
    /// Popup containing the form, closed on success when the rules say so.
    pub host: Option<OverlayBinding>,
    /// Overlay opened on success.
    pub success: Option<OverlayBinding>,
    pub toast: ToastTiming,
}

impl<R: FormRules + 'static> FormBinding<R> {
    pub fn attach(self) -> Result<(), SiteError> {
        let submit = self.submit.clone();
        dom::listen(&submit, "click", move |ev| {
            ev.prevent_default();
            self.handle_submit();
        })
    }

    fn handle_submit(&self) {
        let values: Vec<String> = self.fields.iter().map(FormField::value).collect();
        let refs: Vec<&str> = values.iter().map(String::as_str).collect();

        let outcome = {
            let mut host = self.host.as_ref().map(OverlayBinding::borrow_mut);
            let mut success = self.success.as_ref().map(OverlayBinding::borrow_mut);
            forms::submit(&self.rules, &refs, host.as_deref_mut(), success.as_deref_mut())
        };

        match outcome {
            Ok(acceptance) => {
                for field in &self.fields {
                    field.clear();
                }
                for overlay in self.host.iter().chain(self.success.iter()) {
                    overlay.sync();
                }
                if let Some(message) = acceptance.toast {
                    toast::show(message, self.toast);
                }
                if self.success.is_none() {
                    if let Some(notice) = acceptance.fallback_notice {
                        dom::alert(notice);
                    }
                }
            }
            Err(err) => {
                log::debug!("fanzone: form rejected: {err:?}");
                dom::alert(&err.to_string());
            }
        }
    }
}
