use super::*;

#[test]
fn config_error_display_has_prefix() {
    let err = SiteError::Config("threshold out of range".into());
    assert_eq!(err.to_string(), "config rejected: threshold out of range");
}

#[test]
fn dom_error_display_has_prefix() {
    let err = SiteError::Dom("no body".into());
    assert_eq!(err.to_string(), "dom call failed: no body");
}

#[test]
fn serde_error_converts_to_config() {
    let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err = SiteError::from(parse_err);
    assert!(matches!(err, SiteError::Config(_)));
}

#[test]
fn report_accepts_ok_and_err() {
    report("ok path", Ok(()));
    report("err path", Err(SiteError::Dom("boom".into())));
}
