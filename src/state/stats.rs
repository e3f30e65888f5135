//! Stat bar targets and the fire-once reveal trigger.

#[cfg(test)]
#[path = "stats_test.rs"]
mod stats_test;

/// Target fill for a bar from its `data-pct` attribute, clamped to 0–100.
/// Missing or unparseable values fill nothing.
#[must_use]
pub fn target_percent(raw: Option<&str>) -> f64 {
    raw.and_then(|raw| raw.trim().trim_end_matches('%').parse::<f64>().ok())
        .filter(|pct| pct.is_finite())
        .map_or(0.0, |pct| pct.clamp(0.0, 100.0))
}

/// CSS width for a target percentage.
#[must_use]
pub fn bar_width(pct: f64) -> String {
    format!("{pct}%")
}

/// Reveal latch for the stats section.
///
/// Bars fill the first time the section reports as intersecting; later
/// scroll-away/scroll-back never re-fires.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealTrigger {
    fired: bool,
}

impl RevealTrigger {
    #[must_use]
    pub fn has_fired(&self) -> bool {
        self.fired
    }

    /// Feed one visibility report. Returns `true` exactly once.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if self.fired || !intersecting {
            return false;
        }
        self.fired = true;
        true
    }
}
