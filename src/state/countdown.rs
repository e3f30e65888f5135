//! Kick-off countdown.

use std::fmt;

use crate::consts::COUNTDOWN_STARTED;

#[cfg(test)]
#[path = "countdown_test.rs"]
mod countdown_test;

const MS_PER_SECOND: i64 = 1000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// What the countdown element shows for one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CountdownDisplay {
    Remaining { days: i64, hours: i64, minutes: i64, seconds: i64 },
    Started,
}

impl CountdownDisplay {
    /// Split a positive millisecond difference into whole units.
    #[must_use]
    pub fn from_remaining_ms(remaining_ms: i64) -> Self {
        if remaining_ms <= 0 {
            return Self::Started;
        }
        Self::Remaining {
            days: remaining_ms / MS_PER_DAY,
            hours: (remaining_ms / MS_PER_HOUR) % 24,
            minutes: (remaining_ms / MS_PER_MINUTE) % 60,
            seconds: (remaining_ms / MS_PER_SECOND) % 60,
        }
    }
}

impl fmt::Display for CountdownDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Remaining { days, hours, minutes, seconds } => write!(f, "{days}d {hours}h {minutes}m {seconds}s"),
            Self::Started => f.write_str(COUNTDOWN_STARTED),
        }
    }
}

/// Countdown to a fixed target instant.
///
/// Once the target passes the countdown latches on [`CountdownDisplay::Started`];
/// later ticks return the same display without recomputing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Countdown {
    target_ms: f64,
    started: bool,
}

impl Countdown {
    /// `target_ms` is epoch milliseconds from `Date.parse`; a non-finite
    /// value means the target could not be read and yields `None`.
    #[must_use]
    pub fn new(target_ms: f64) -> Option<Self> {
        target_ms.is_finite().then_some(Self { target_ms, started: false })
    }

    #[must_use]
    pub fn has_started(&self) -> bool {
        self.started
    }

    pub fn tick(&mut self, now_ms: f64) -> CountdownDisplay {
        if self.started {
            return CountdownDisplay::Started;
        }
        let display = CountdownDisplay::from_remaining_ms(millis_between(now_ms, self.target_ms));
        if display == CountdownDisplay::Started {
            log::debug!("fanzone: countdown reached kick-off");
            self.started = true;
        }
        display
    }
}

#[allow(clippy::cast_possible_truncation)]
fn millis_between(from_ms: f64, to_ms: f64) -> i64 {
    // Floor first so a fractional remainder never rounds a second up.
    (to_ms - from_ms).floor() as i64
}
