use super::*;

#[test]
fn overlay_starts_closed() {
    let overlay = Overlay::new("roster");
    assert!(!overlay.is_open());
    assert_eq!(overlay.display(), "none");
}

#[test]
fn open_then_close_round_trips_display() {
    let mut overlay = Overlay::new("lead");
    overlay.open();
    assert!(overlay.is_open());
    assert_eq!(overlay.display(), "flex");
    overlay.close();
    assert!(!overlay.is_open());
}

#[test]
fn open_is_idempotent() {
    let mut overlay = Overlay::new("lead");
    overlay.open();
    overlay.open();
    assert!(overlay.is_open());
}

#[test]
fn backdrop_click_on_backdrop_closes() {
    let mut overlay = Overlay::new("lead");
    overlay.open();
    assert!(overlay.backdrop_click(true));
    assert!(!overlay.is_open());
}

#[test]
fn backdrop_click_on_child_keeps_open() {
    let mut overlay = Overlay::new("lead");
    overlay.open();
    assert!(!overlay.backdrop_click(false));
    assert!(overlay.is_open());
}

#[test]
fn backdrop_click_hides_overlay_shown_outside_the_core() {
    let mut overlay = Overlay::new("lead");
    assert!(overlay.backdrop_click(true));
    assert!(!overlay.is_open());
    assert_eq!(overlay.display(), "none");
}
