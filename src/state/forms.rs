//! Validate-and-submit rules for the lead popup and the contact form.
//!
//! Both forms share one flow ([`submit`]): check the fields, and only if
//! every rule passes close the host popup and open the success overlay. A
//! failed check changes nothing; the caller shows the error text.

use std::sync::LazyLock;

use regex::Regex;

use crate::consts::{CONTACT_RECEIVED, CONTACT_TOAST};
use crate::state::overlay::Overlay;

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

static EMAIL_RE: LazyLock<Option<Regex>> = LazyLock::new(|| match Regex::new(EMAIL_PATTERN) {
    Ok(re) => Some(re),
    Err(err) => {
        log::error!("fanzone: email pattern failed to compile: {err}");
        None
    }
});

/// A rejected submission. `Display` is the exact message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter your name.")]
    EmptyName,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Please fill in all fields.")]
    MissingFields,
}

/// `local@domain.tld`: no whitespace, exactly one `@`, a dot after it.
#[must_use]
pub fn is_valid_email(raw: &str) -> bool {
    EMAIL_RE.as_ref().is_some_and(|re| re.is_match(raw.trim()))
}

/// What the page does once a submission is accepted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Acceptance {
    /// Close the popup that hosts the form.
    pub close_host: bool,
    /// Transient toast to raise.
    pub toast: Option<&'static str>,
    /// Blocking message used when the form has no success overlay.
    pub fallback_notice: Option<&'static str>,
}

/// Field rules for one form. Values arrive in the form's field order.
pub trait FormRules {
    fn check(&self, values: &[&str]) -> Result<(), ValidationError>;

    fn acceptance(&self) -> Acceptance;
}

/// Newsletter popup: `[name, email]`. Name is checked before email.
#[derive(Clone, Copy, Debug, Default)]
pub struct LeadCaptureRules;

impl FormRules for LeadCaptureRules {
    fn check(&self, values: &[&str]) -> Result<(), ValidationError> {
        let name = values.first().copied().unwrap_or_default();
        let email = values.get(1).copied().unwrap_or_default();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if !is_valid_email(email) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(())
    }

    fn acceptance(&self) -> Acceptance {
        Acceptance { close_host: true, toast: None, fallback_notice: None }
    }
}

/// About-page contact form: `[name, email, message]`, all required.
///
/// The email is only required to be non-empty here; the stricter pattern
/// belongs to the lead popup.
#[derive(Clone, Copy, Debug, Default)]
pub struct ContactRules;

impl ContactRules {
    pub const FIELD_COUNT: usize = 3;
}

impl FormRules for ContactRules {
    fn check(&self, values: &[&str]) -> Result<(), ValidationError> {
        if values.len() < Self::FIELD_COUNT || values.iter().any(|v| v.trim().is_empty()) {
            return Err(ValidationError::MissingFields);
        }
        Ok(())
    }

    fn acceptance(&self) -> Acceptance {
        Acceptance { close_host: false, toast: Some(CONTACT_TOAST), fallback_notice: Some(CONTACT_RECEIVED) }
    }
}

/// Run `rules` over `values`. On success close `host` (when the rules ask
/// for it) and open `success`; on failure leave both untouched.
pub fn submit<R: FormRules + ?Sized>(
    rules: &R,
    values: &[&str],
    host: Option<&mut Overlay>,
    success: Option<&mut Overlay>,
) -> Result<Acceptance, ValidationError> {
    rules.check(values)?;
    let acceptance = rules.acceptance();
    if acceptance.close_host {
        if let Some(host) = host {
            host.close();
        }
    }
    if let Some(success) = success {
        success.open();
    }
    Ok(acceptance)
}
