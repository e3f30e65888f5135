//! Site configuration: timer periods, thresholds, and nav styling.
//!
//! Every field has a default matching the stock site. A page may override
//! any subset through an inline JSON block:
//!
//! ```html
//! <script type="application/json" id="fanzone-config">
//!   { "slide_interval_ms": 8000, "toast": { "visible_ms": 5000 } }
//! </script>
//! ```

use serde::Deserialize;

use crate::error::SiteError;

pub const DEFAULT_SLIDE_INTERVAL_MS: u32 = 5000;
pub const DEFAULT_COUNTDOWN_TICK_MS: u32 = 1000;
pub const DEFAULT_STATS_VISIBILITY_THRESHOLD: f64 = 0.25;
pub const DEFAULT_NAV_BREAKPOINT_PX: f64 = 900.0;
pub const DEFAULT_NAV_BACKGROUND: &str = "#4B0082";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    pub slide_interval_ms: u32,
    pub countdown_tick_ms: u32,
    /// Fraction of the stats section that must be visible before bars fill.
    pub stats_visibility_threshold: f64,
    pub toast: ToastTiming,
    pub nav: NavConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            slide_interval_ms: DEFAULT_SLIDE_INTERVAL_MS,
            countdown_tick_ms: DEFAULT_COUNTDOWN_TICK_MS,
            stats_visibility_threshold: DEFAULT_STATS_VISIBILITY_THRESHOLD,
            toast: ToastTiming::default(),
            nav: NavConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToastTiming {
    /// Delay before the `show` class is added, so the CSS transition runs.
    pub show_delay_ms: u32,
    pub visible_ms: u32,
    /// Time between hiding and removing the element.
    pub fade_ms: u32,
}

impl Default for ToastTiming {
    fn default() -> Self {
        Self { show_delay_ms: 50, visible_ms: 3000, fade_ms: 300 }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavConfig {
    /// Viewports wider than this always show the full menu.
    pub breakpoint_px: f64,
    /// Used when the `--primary` custom property is unset.
    pub fallback_background: String,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            breakpoint_px: DEFAULT_NAV_BREAKPOINT_PX,
            fallback_background: DEFAULT_NAV_BACKGROUND.to_owned(),
        }
    }
}

impl SiteConfig {
    /// Parse and range-check an inline configuration block.
    pub fn from_json(raw: &str) -> Result<Self, SiteError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse `raw` if present, falling back to defaults on any problem.
    #[must_use]
    pub fn from_json_or_default(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
            return Self::default();
        };
        match Self::from_json(raw) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("fanzone: ignoring inline config: {err}");
                Self::default()
            }
        }
    }

    fn validate(&self) -> Result<(), SiteError> {
        let periods = [
            ("slide_interval_ms", self.slide_interval_ms),
            ("countdown_tick_ms", self.countdown_tick_ms),
            ("toast.show_delay_ms", self.toast.show_delay_ms),
            ("toast.visible_ms", self.toast.visible_ms),
            ("toast.fade_ms", self.toast.fade_ms),
        ];
        if let Some((name, _)) = periods.iter().find(|(_, value)| *value == 0) {
            return Err(SiteError::Config(format!("{name} must be greater than zero")));
        }
        if !(0.0..=1.0).contains(&self.stats_visibility_threshold) {
            return Err(SiteError::Config(format!(
                "stats_visibility_threshold {} outside [0, 1]",
                self.stats_visibility_threshold
            )));
        }
        if !self.nav.breakpoint_px.is_finite() || self.nav.breakpoint_px < 0.0 {
            return Err(SiteError::Config("nav.breakpoint_px must be a non-negative number".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
