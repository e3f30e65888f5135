use super::*;

const NOW: f64 = 1_792_108_800_000.0;

// =============================================================
// Decomposition
// =============================================================

#[test]
fn one_of_each_unit() {
    let mut countdown = Countdown::new(NOW + 90_061_000.0).expect("finite target");
    assert_eq!(countdown.tick(NOW).to_string(), "1d 1h 1m 1s");
}

#[test]
fn units_wrap_at_their_bases() {
    let display = CountdownDisplay::from_remaining_ms(2 * MS_PER_DAY + 23 * MS_PER_HOUR + 59 * MS_PER_MINUTE + 59_999);
    assert_eq!(display.to_string(), "2d 23h 59m 59s");
}

#[test]
fn sub_second_remainder_shows_zeroes() {
    assert_eq!(CountdownDisplay::from_remaining_ms(400).to_string(), "0d 0h 0m 0s");
}

// =============================================================
// Kick-off latch
// =============================================================

#[test]
fn past_target_shows_started() {
    let mut countdown = Countdown::new(NOW - 1000.0).expect("finite target");
    assert_eq!(countdown.tick(NOW).to_string(), "LIVE / STARTED");
    assert!(countdown.has_started());
}

#[test]
fn exactly_at_target_is_started() {
    let mut countdown = Countdown::new(NOW).expect("finite target");
    assert_eq!(countdown.tick(NOW), CountdownDisplay::Started);
}

#[test]
fn started_latches_even_if_clock_goes_back() {
    let mut countdown = Countdown::new(NOW).expect("finite target");
    countdown.tick(NOW + 1.0);
    assert_eq!(countdown.tick(NOW - 60_000.0), CountdownDisplay::Started);
}

#[test]
fn ticks_count_down_until_kickoff() {
    let mut countdown = Countdown::new(NOW + 2000.0).expect("finite target");
    assert_eq!(countdown.tick(NOW).to_string(), "0d 0h 0m 2s");
    assert_eq!(countdown.tick(NOW + 1000.0).to_string(), "0d 0h 0m 1s");
    assert_eq!(countdown.tick(NOW + 2000.0).to_string(), "LIVE / STARTED");
}

#[test]
fn unreadable_target_disables_countdown() {
    assert!(Countdown::new(f64::NAN).is_none());
}
