use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn defaults_match_stock_site() {
    let config = SiteConfig::default();
    assert_eq!(config.slide_interval_ms, 5000);
    assert_eq!(config.countdown_tick_ms, 1000);
    assert!((config.stats_visibility_threshold - 0.25).abs() < f64::EPSILON);
    assert_eq!(config.toast, ToastTiming { show_delay_ms: 50, visible_ms: 3000, fade_ms: 300 });
    assert_eq!(config.nav.fallback_background, "#4B0082");
}

#[test]
fn missing_block_uses_defaults() {
    assert_eq!(SiteConfig::from_json_or_default(None), SiteConfig::default());
    assert_eq!(SiteConfig::from_json_or_default(Some("   ")), SiteConfig::default());
}

// =============================================================
// Overrides
// =============================================================

#[test]
fn partial_override_keeps_other_defaults() {
    let config = SiteConfig::from_json(r#"{ "slide_interval_ms": 8000, "toast": { "visible_ms": 5000 } }"#)
        .expect("config should parse");
    assert_eq!(config.slide_interval_ms, 8000);
    assert_eq!(config.countdown_tick_ms, 1000);
    assert_eq!(config.toast.visible_ms, 5000);
    assert_eq!(config.toast.show_delay_ms, 50);
}

#[test]
fn nav_override_parses() {
    let config = SiteConfig::from_json(r##"{ "nav": { "breakpoint_px": 720, "fallback_background": "#000" } }"##)
        .expect("config should parse");
    assert!((config.nav.breakpoint_px - 720.0).abs() < f64::EPSILON);
    assert_eq!(config.nav.fallback_background, "#000");
}

// =============================================================
// Rejections
// =============================================================

#[test]
fn zero_period_is_rejected() {
    let err = SiteConfig::from_json(r#"{ "countdown_tick_ms": 0 }"#).unwrap_err();
    assert!(err.to_string().contains("countdown_tick_ms"));
}

#[test]
fn zero_toast_delays_are_rejected() {
    let err = SiteConfig::from_json(r#"{ "toast": { "show_delay_ms": 0 } }"#).unwrap_err();
    assert!(err.to_string().contains("toast.show_delay_ms"));
    let err = SiteConfig::from_json(r#"{ "toast": { "fade_ms": 0 } }"#).unwrap_err();
    assert!(err.to_string().contains("toast.fade_ms"));
}

#[test]
fn threshold_out_of_range_is_rejected() {
    let err = SiteConfig::from_json(r#"{ "stats_visibility_threshold": 1.5 }"#).unwrap_err();
    assert!(err.to_string().contains("stats_visibility_threshold"));
}

#[test]
fn unknown_field_is_rejected() {
    assert!(SiteConfig::from_json(r#"{ "slide_speed": 3 }"#).is_err());
}

#[test]
fn malformed_block_falls_back_to_defaults() {
    let config = SiteConfig::from_json_or_default(Some("{ not json"));
    assert_eq!(config, SiteConfig::default());
}
