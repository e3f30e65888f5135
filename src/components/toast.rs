//! Transient status toast.
//!
//! Failures here never reach the user: a toast that cannot be shown is
//! dropped with a debug log.

use gloo_timers::callback::Timeout;
use web_sys::Element;

use crate::config::ToastTiming;
use crate::consts::{CLASS_TOAST, CLASS_TOAST_SHOW};
use crate::error::SiteError;
use crate::util::dom;

/// Append a toast with `message` to `<body>`, fade it in, and remove it
/// after `timing.visible_ms` plus `timing.fade_ms`.
pub fn show(message: &str, timing: ToastTiming) {
    if let Err(err) = try_show(message, timing) {
        log::debug!("fanzone: toast dropped: {err}");
    }
}

fn try_show(message: &str, timing: ToastTiming) -> Result<(), SiteError> {
    let doc = dom::document().ok_or_else(|| SiteError::Dom("no document".into()))?;
    let body = doc.body().ok_or_else(|| SiteError::Dom("no body".into()))?;
    let toast = doc.create_element("div")?;
    toast.set_class_name(CLASS_TOAST);
    toast.set_text_content(Some(message));
    body.append_child(&toast)?;

    let fading_in = toast.clone();
    Timeout::new(timing.show_delay_ms, move || swallow(dom::set_class(&fading_in, CLASS_TOAST_SHOW, true))).forget();

    Timeout::new(timing.visible_ms, move || {
        swallow(dom::set_class(&toast, CLASS_TOAST_SHOW, false));
        let leaving: Element = toast;
        Timeout::new(timing.fade_ms, move || leaving.remove()).forget();
    })
    .forget();
    Ok(())
}

fn swallow(result: Result<(), SiteError>) {
    if let Err(err) = result {
        log::debug!("fanzone: toast step failed: {err}");
    }
}
