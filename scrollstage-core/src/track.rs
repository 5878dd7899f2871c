//! Static geometry of the horizontally scrolled panel strip.

use crate::error::TrackError;
use crate::viewport::ViewportMode;

/// The ordered panel strip, measured once at setup.
///
/// Only constructed when horizontal mode can actually run: wide viewport,
/// two or more panels, and a container with real width.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelTrack {
    count: usize,
    container_width: f64,
}

impl PanelTrack {
    pub fn new(count: usize, container_width: f64) -> Result<Self, TrackError> {
        if count < 2 {
            return Err(TrackError::TooFewPanels(count));
        }
        if !container_width.is_finite() || container_width <= 0.0 {
            return Err(TrackError::BadWidth(container_width));
        }
        Ok(Self { count, container_width })
    }

    /// Gate horizontal mode on the frozen viewport class, then validate the strip.
    pub fn activate(mode: ViewportMode, count: usize, container_width: f64) -> Result<Self, TrackError> {
        if !mode.allows_horizontal() {
            return Err(TrackError::NarrowViewport);
        }
        Self::new(count, container_width)
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn container_width(&self) -> f64 {
        self.container_width
    }

    /// The horizontal phase starts where the pinned shell reaches the top of
    /// the viewport and lasts one container width of vertical scrolling.
    pub fn range_from(&self, start: f64) -> ScrollRange {
        ScrollRange { start, end: start + self.container_width }
    }
}

/// Absolute scroll coordinates bounding the horizontal phase. `end > start`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollRange {
    start: f64,
    end: f64,
}

impl ScrollRange {
    pub fn new(start: f64, end: f64) -> Result<Self, TrackError> {
        if !(start.is_finite() && end.is_finite() && end > start) {
            return Err(TrackError::InvertedRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    pub fn len(&self) -> f64 {
        self.end - self.start
    }

    /// Normalized position of `scroll` inside the range, clamped to `[0, 1]`.
    pub fn progress(&self, scroll: f64) -> f64 {
        ((scroll - self.start) / self.len()).clamp(0.0, 1.0)
    }

    /// Inverse of [`ScrollRange::progress`] for `progress` in `[0, 1]`.
    pub fn coordinate(&self, progress: f64) -> f64 {
        self.start + self.len() * progress
    }

    /// How the shell is held at `scroll`. At either bound the fixed and
    /// in-flow placements coincide, so only the open interior is pinned.
    pub fn pin_at(&self, scroll: f64) -> Pin {
        if scroll <= self.start {
            Pin::Before
        } else if scroll < self.end {
            Pin::Pinned
        } else {
            Pin::After
        }
    }
}

/// Placement of the pinned shell relative to the horizontal phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pin {
    /// In normal flow, not yet at the top of the viewport.
    Before,
    /// Fixed to the top of the viewport.
    Pinned,
    /// Back in flow, offset down by the range length so it sits at the
    /// bottom of the reserved spacing.
    After,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_degenerate_strips() {
        assert_eq!(PanelTrack::new(1, 1200.0), Err(TrackError::TooFewPanels(1)));
        assert_eq!(PanelTrack::new(0, 1200.0), Err(TrackError::TooFewPanels(0)));
        assert_eq!(PanelTrack::new(4, 0.0), Err(TrackError::BadWidth(0.0)));
        assert!(matches!(PanelTrack::new(4, f64::NAN), Err(TrackError::BadWidth(_))));
    }

    #[test]
    fn narrow_viewport_never_activates() {
        assert_eq!(
            PanelTrack::activate(ViewportMode::Narrow, 5, 4000.0),
            Err(TrackError::NarrowViewport)
        );
        let track = PanelTrack::activate(ViewportMode::Wide, 5, 4000.0).unwrap();
        assert_eq!(track.count(), 5);
    }

    #[test]
    fn range_spans_container_width() {
        let track = PanelTrack::new(4, 3600.0).unwrap();
        let range = track.range_from(800.0);
        assert_eq!(range.start(), 800.0);
        assert_eq!(range.end(), 4400.0);
        assert_eq!(range.len(), 3600.0);
    }

    #[test]
    fn progress_is_clamped() {
        let range = ScrollRange::new(100.0, 500.0).unwrap();
        assert_eq!(range.progress(0.0), 0.0);
        assert_eq!(range.progress(100.0), 0.0);
        assert_eq!(range.progress(300.0), 0.5);
        assert_eq!(range.progress(500.0), 1.0);
        assert_eq!(range.progress(9000.0), 1.0);
        assert_eq!(range.coordinate(0.25), 200.0);
    }

    #[test]
    fn range_must_be_increasing() {
        assert!(ScrollRange::new(10.0, 10.0).is_err());
        assert!(ScrollRange::new(10.0, 5.0).is_err());
        assert!(ScrollRange::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn pin_holds_only_inside_the_range() {
        let range = ScrollRange::new(100.0, 500.0).unwrap();
        assert_eq!(range.pin_at(0.0), Pin::Before);
        assert_eq!(range.pin_at(100.0), Pin::Before);
        assert_eq!(range.pin_at(100.5), Pin::Pinned);
        assert_eq!(range.pin_at(499.0), Pin::Pinned);
        assert_eq!(range.pin_at(500.0), Pin::After);
        assert_eq!(range.pin_at(9000.0), Pin::After);
    }
}
