use super::*;

// =============================================================
// go_to
// =============================================================

#[test]
fn go_to_wraps_into_range_for_any_target() {
    let mut slider = SliderState::new(4);
    for target in -13_i64..=13 {
        let index = slider.go_to(target).expect("non-empty slider");
        assert!(index < 4);
        assert_eq!(index as i64, ((target % 4) + 4) % 4);
    }
}

#[test]
fn go_to_handles_extreme_targets() {
    let mut slider = SliderState::new(3);
    assert!(slider.go_to(i64::MIN).is_some_and(|i| i < 3));
    assert!(slider.go_to(i64::MAX).is_some_and(|i| i < 3));
}

#[test]
fn empty_slider_ignores_moves() {
    let mut slider = SliderState::new(0);
    assert!(slider.is_empty());
    assert_eq!(slider.go_to(2), None);
    assert_eq!(slider.advance(1), None);
    assert_eq!(slider.index(), 0);
}

// =============================================================
// advance
// =============================================================

#[test]
fn advance_forward_wraps_to_first() {
    let mut slider = SliderState::new(3);
    assert_eq!(slider.advance(1), Some(1));
    assert_eq!(slider.advance(1), Some(2));
    assert_eq!(slider.advance(1), Some(0));
}

#[test]
fn advance_backward_from_first_wraps_to_last() {
    let mut slider = SliderState::new(3);
    assert_eq!(slider.advance(-1), Some(2));
}

#[test]
fn single_slide_stays_put() {
    let mut slider = SliderState::new(1);
    assert_eq!(slider.advance(1), Some(0));
    assert_eq!(slider.advance(-1), Some(0));
}

// =============================================================
// Rendering
// =============================================================

#[test]
fn track_transform_offsets_by_whole_slides() {
    let mut slider = SliderState::new(3);
    assert_eq!(slider.track_transform(), "translateX(-0%)");
    slider.go_to(2);
    assert_eq!(slider.track_transform(), "translateX(-200%)");
}
