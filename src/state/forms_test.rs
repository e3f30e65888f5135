use super::*;

// =============================================================
// Email pattern
// =============================================================

#[test]
fn email_accepts_basic_address() {
    assert!(is_valid_email("a@b.co"));
    assert!(is_valid_email("fan.club+news@stadium.example.org"));
}

#[test]
fn email_rejects_malformed_addresses() {
    for bad in ["a@b", "ab.com", "", "a@@b.co", "a b@c.de", "@b.co", "a@.co", "a@b."] {
        assert!(!is_valid_email(bad), "{bad:?} should be rejected");
    }
}

#[test]
fn email_ignores_surrounding_whitespace() {
    assert!(is_valid_email("  a@b.co\n"));
}

// =============================================================
// Lead capture
// =============================================================

#[test]
fn lead_requires_name_first() {
    let err = LeadCaptureRules.check(&["   ", "nope"]).unwrap_err();
    assert_eq!(err, ValidationError::EmptyName);
    assert_eq!(err.to_string(), "Please enter your name.");
}

#[test]
fn lead_rejects_bad_email_with_named_rule() {
    let err = LeadCaptureRules.check(&["Sam", "sam@home"]).unwrap_err();
    assert_eq!(err, ValidationError::InvalidEmail);
    assert_eq!(err.to_string(), "Please enter a valid email address.");
}

#[test]
fn lead_accepts_valid_fields() {
    assert!(LeadCaptureRules.check(&["Sam", "sam@home.net"]).is_ok());
}

// =============================================================
// Contact form
// =============================================================

#[test]
fn contact_requires_every_field() {
    for values in [["", "a@b.co", "hi"], ["Sam", " ", "hi"], ["Sam", "a@b.co", "\t"]] {
        let err = ContactRules.check(&values).unwrap_err();
        assert_eq!(err.to_string(), "Please fill in all fields.");
    }
}

#[test]
fn contact_does_not_apply_email_pattern() {
    assert!(ContactRules.check(&["Sam", "not-an-email", "Go team"]).is_ok());
}

#[test]
fn contact_with_missing_field_slot_is_rejected() {
    assert_eq!(ContactRules.check(&["Sam", "a@b.co"]), Err(ValidationError::MissingFields));
}

// =============================================================
// submit flow
// =============================================================

#[test]
fn lead_submit_swaps_popup_for_success() {
    let mut host = Overlay::new("lead");
    let mut success = Overlay::new("lead-success");
    host.open();

    let acceptance = submit(&LeadCaptureRules, &["Sam", "sam@home.net"], Some(&mut host), Some(&mut success))
        .expect("valid submission");

    assert!(!host.is_open());
    assert!(success.is_open());
    assert_eq!(acceptance.toast, None);
}

#[test]
fn rejected_submit_changes_nothing() {
    let mut host = Overlay::new("lead");
    let mut success = Overlay::new("lead-success");
    host.open();

    let err = submit(&LeadCaptureRules, &["Sam", "bad"], Some(&mut host), Some(&mut success)).unwrap_err();

    assert_eq!(err, ValidationError::InvalidEmail);
    assert!(host.is_open());
    assert!(!success.is_open());
}

#[test]
fn contact_submit_opens_success_and_raises_toast() {
    let mut success = Overlay::new("contact-success");

    let acceptance = submit(&ContactRules, &["Sam", "a@b.co", "Go team"], None, Some(&mut success))
        .expect("valid submission");

    assert!(success.is_open());
    assert_eq!(acceptance.toast, Some("Message sent successfully! ✔️"));
    assert_eq!(acceptance.fallback_notice, Some("Thanks! (Demo) Your message was received."));
}

#[test]
fn submit_works_through_trait_object() {
    let rules: &dyn FormRules = &ContactRules;
    assert!(submit(rules, &["", "", ""], None, None).is_err());
}
