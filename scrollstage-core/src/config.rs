//! Tuning knobs for the page, optionally overridden by an inline JSON block.
//!
//! Every field has a default, so a partial document only overrides what it
//! names. Durations ending in `_secs` are tween lengths; `_ms` are timers.

use serde::{Deserialize, Serialize};
use crate::error::ConfigError;

/// Calendar day the countdown runs to. Resolved at midnight in the
/// visitor's own timezone, so everyone hits zero at their local midnight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchDate {
    pub year: u32,
    /// 1-based.
    pub month: u32,
    pub day: u32,
}

impl Default for LaunchDate {
    fn default() -> Self {
        Self { year: 2026, month: 1, day: 18 }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Viewports at or below this CSS width are treated as narrow.
    pub narrow_max_width_px: f64,

    // ── Horizontal track ──
    /// Lag of the scrubbed panel translation behind the scroll position.
    pub scrub_secs: f64,
    /// Quiet time after the last scroll event before snapping.
    pub snap_idle_ms: u32,
    /// Peak vertical drift of each panel, in percent of its height.
    pub drift_percent: f64,

    // ── Zoom overlay ──
    /// Opacity ceiling K; the overlay never becomes fully opaque.
    pub overlay_opacity_ceiling: f64,
    pub overlay_max_scale: f64,
    /// Viewport fraction the designated panel's center crosses to start the overlay.
    pub overlay_enter_at: f64,
    /// Viewport fraction the designated panel's center crosses to end it.
    pub overlay_leave_at: f64,
    pub overlay_tween_secs: f64,

    // ── Countdown ──
    pub launch_date: LaunchDate,
    /// Absolute launch instant in Unix ms; takes precedence over `launch_date`.
    pub launch_epoch_ms: Option<i64>,
    pub countdown_interval_ms: u32,

    // ── Loader ──
    /// Fraction of the canvas width revealed per frame.
    pub loader_reveal_step: f64,
    pub loader_fade_delay_ms: u32,
    pub loader_fade_ms: u32,

    // ── Waitlist ──
    pub waitlist_loader_in_secs: f64,
    pub waitlist_finish_delay_ms: u32,
    pub waitlist_loader_out_secs: f64,
    pub waitlist_success_in_secs: f64,
    pub waitlist_success_rise_px: f64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            narrow_max_width_px: 768.0,
            scrub_secs: 1.0,
            snap_idle_ms: 100,
            drift_percent: 6.0,
            overlay_opacity_ceiling: 0.9,
            overlay_max_scale: 1.05,
            overlay_enter_at: 0.6,
            overlay_leave_at: 0.4,
            overlay_tween_secs: 0.1,
            launch_date: LaunchDate::default(),
            launch_epoch_ms: None,
            countdown_interval_ms: 33,
            loader_reveal_step: 0.012,
            loader_fade_delay_ms: 2500,
            loader_fade_ms: 1000,
            waitlist_loader_in_secs: 0.2,
            waitlist_finish_delay_ms: 350,
            waitlist_loader_out_secs: 0.3,
            waitlist_success_in_secs: 0.4,
            waitlist_success_rise_px: 10.0,
        }
    }
}

impl SiteConfig {
    /// Parse and validate a JSON document.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(ConfigError::OutOfRange { field, value })
            }
        }

        positive("narrow_max_width_px", self.narrow_max_width_px)?;
        positive("scrub_secs", self.scrub_secs)?;
        positive("overlay_tween_secs", self.overlay_tween_secs)?;
        positive("countdown_interval_ms", self.countdown_interval_ms as f64)?;
        positive("loader_reveal_step", self.loader_reveal_step)?;
        positive("waitlist_loader_in_secs", self.waitlist_loader_in_secs)?;
        positive("waitlist_loader_out_secs", self.waitlist_loader_out_secs)?;
        positive("waitlist_success_in_secs", self.waitlist_success_in_secs)?;

        let k = self.overlay_opacity_ceiling;
        if !(k > 0.0 && k <= 1.0) {
            return Err(ConfigError::OutOfRange { field: "overlay_opacity_ceiling", value: k });
        }
        if !(self.overlay_max_scale >= 1.0 && self.overlay_max_scale.is_finite()) {
            return Err(ConfigError::OutOfRange {
                field: "overlay_max_scale",
                value: self.overlay_max_scale,
            });
        }
        if (self.overlay_enter_at - self.overlay_leave_at).abs() < f64::EPSILON {
            return Err(ConfigError::EmptyOverlayWindow);
        }
        let date = self.launch_date;
        if !(1..=12).contains(&date.month) {
            return Err(ConfigError::OutOfRange { field: "launch_date.month", value: date.month as f64 });
        }
        if !(1..=31).contains(&date.day) {
            return Err(ConfigError::OutOfRange { field: "launch_date.day", value: date.day as f64 });
        }
        if !self.drift_percent.is_finite() {
            return Err(ConfigError::OutOfRange { field: "drift_percent", value: self.drift_percent });
        }
        Ok(())
    }

    /// Countdown target in Unix ms. `local_midnight` turns the launch date
    /// into an instant using the host's timezone.
    pub fn launch_target_ms(&self, local_midnight: impl FnOnce(LaunchDate) -> f64) -> i64 {
        self.launch_epoch_ms.unwrap_or_else(|| local_midnight(self.launch_date) as i64)
    }

    /// Media query matching the narrow viewport class.
    pub fn narrow_media_query(&self) -> String {
        format!("(max-width: {}px)", self.narrow_max_width_px)
    }
}
