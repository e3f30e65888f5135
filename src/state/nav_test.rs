use super::*;

#[test]
fn toggle_alternates() {
    let mut nav = NavMenu::new(900.0, false);
    assert_eq!(nav.toggle(), NavState::Expanded);
    assert_eq!(nav.toggle(), NavState::Collapsed);
}

#[test]
fn initial_inline_display_is_respected() {
    let mut nav = NavMenu::new(900.0, true);
    assert_eq!(nav.state(), NavState::Expanded);
    assert_eq!(nav.toggle(), NavState::Collapsed);
}

#[test]
fn wide_resize_forces_menu_open() {
    let mut nav = NavMenu::new(900.0, false);
    assert!(nav.resize(1280.0));
    assert_eq!(nav.state(), NavState::Expanded);
}

#[test]
fn narrow_resize_keeps_user_choice() {
    let mut nav = NavMenu::new(900.0, false);
    assert!(!nav.resize(600.0));
    assert_eq!(nav.state(), NavState::Collapsed);
    assert!(!nav.resize(900.0));
}
