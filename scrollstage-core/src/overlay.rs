//! Zoomed countdown overlay tied to one panel's pass through the viewport center.

use crate::config::SiteConfig;
use crate::events::{ScrollEvent, ScrollSubscriber};
use crate::mapper::{ScrollMapper, TriggerRegion};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OverlayState {
    /// Not rendered at all.
    Hidden,
    Visible { opacity: f64, scale: f64 },
}

impl OverlayState {
    pub fn is_visible(&self) -> bool {
        matches!(self, OverlayState::Visible { .. })
    }
}

#[derive(Clone, Debug)]
pub struct OverlayController {
    window: TriggerRegion,
    opacity_ceiling: f64,
    max_scale: f64,
    state: OverlayState,
}

impl OverlayController {
    pub fn new(window: TriggerRegion, opacity_ceiling: f64, max_scale: f64) -> Self {
        Self { window, opacity_ceiling, max_scale, state: OverlayState::Hidden }
    }

    /// Controller for the panel at `panel`, or `None` if the mapper has no
    /// such panel (or only one).
    pub fn for_panel(mapper: &ScrollMapper, panel: usize, config: &SiteConfig) -> Option<Self> {
        let window = mapper.center_window(panel, config.overlay_enter_at, config.overlay_leave_at)?;
        Some(Self::new(window, config.overlay_opacity_ceiling, config.overlay_max_scale))
    }

    pub fn window(&self) -> TriggerRegion {
        self.window
    }

    pub fn state(&self) -> OverlayState {
        self.state
    }

    /// Overlay state for a local progress `p` through the window.
    pub fn state_at(&self, p: f64) -> OverlayState {
        if p <= 0.0 || p >= 1.0 {
            return OverlayState::Hidden;
        }
        OverlayState::Visible {
            opacity: p * self.opacity_ceiling,
            scale: 1.0 + p * (self.max_scale - 1.0),
        }
    }

    pub fn update(&mut self, progress: f64) -> OverlayState {
        self.state = self.state_at(self.window.local_progress(progress));
        self.state
    }
}

impl ScrollSubscriber for OverlayController {
    fn on_scroll(&mut self, event: &ScrollEvent) {
        self.update(event.progress);
    }
}
