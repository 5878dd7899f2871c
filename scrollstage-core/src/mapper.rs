//! Scroll position → panel translation, snap target and active panel.
//!
//! The mapper is the single owner of horizontal-phase progress. Every panel
//! is assumed to be exactly one viewport wide, so panel `i`'s left edge sits
//! at `i - progress * (N - 1)` viewport widths from the left of the screen.
//! All trigger regions follow from that and depend only on `N`, never on
//! the measured scroll range.
//!
//! [`StackedMapper`] covers the narrow layout, where panels stack vertically.

use crate::events::{Direction, ScrollEvent};
use crate::track::{PanelTrack, ScrollRange};
use crate::tween::Ease;

/// Span of global progress during which something about one panel is live.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriggerRegion {
    pub enter: f64,
    pub leave: f64,
}

impl TriggerRegion {
    /// Progress local to this region, clamped to `[0, 1]`.
    pub fn local_progress(&self, progress: f64) -> f64 {
        ((progress - self.enter) / (self.leave - self.enter)).clamp(0.0, 1.0)
    }
}

#[derive(Clone, Debug)]
pub struct ScrollMapper {
    panels: usize,
    range: ScrollRange,
    progress: f64,
    active: usize,
}

impl ScrollMapper {
    /// A mapper over `panels` panels. One panel is accepted and short-circuits
    /// every mapping to the first panel; zero is treated as one.
    pub fn new(panels: usize, range: ScrollRange) -> Self {
        Self { panels: panels.max(1), range, progress: 0.0, active: 0 }
    }

    pub fn for_track(track: &PanelTrack, start: f64) -> Self {
        Self::new(track.count(), track.range_from(start))
    }

    pub fn panel_count(&self) -> usize {
        self.panels
    }

    pub fn range(&self) -> ScrollRange {
        self.range
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    fn spans(&self) -> Option<f64> {
        (self.panels > 1).then(|| (self.panels - 1) as f64)
    }

    /// Horizontal translation of the strip, in percent of one panel width.
    pub fn translation_percent(&self, progress: f64) -> f64 {
        match self.spans() {
            Some(spans) => -100.0 * progress * spans,
            None => 0.0,
        }
    }

    /// The `N` valid rest positions `k / (N - 1)`.
    pub fn snap_points(&self) -> Vec<f64> {
        match self.spans() {
            Some(spans) => (0..self.panels).map(|k| k as f64 / spans).collect(),
            None => vec![0.0],
        }
    }

    /// The rest position nearest to `progress`.
    pub fn snap_target(&self, progress: f64) -> f64 {
        match self.spans() {
            Some(spans) => (progress.clamp(0.0, 1.0) * spans).round() / spans,
            None => 0.0,
        }
    }

    /// Where to settle after scrolling stops at `scroll`, or `None` when
    /// outside the horizontal phase or already resting on a snap point.
    pub fn snap_coordinate(&self, scroll: f64) -> Option<f64> {
        self.spans()?;
        let progress = self.range.progress(scroll);
        if progress <= 0.0 || progress >= 1.0 {
            return None;
        }
        let target = self.range.coordinate(self.snap_target(progress));
        ((target - scroll).abs() >= 0.5).then_some(target)
    }

    /// Absolute scroll coordinate at which panel `index` is at rest.
    pub fn coordinate_for(&self, index: usize) -> Option<f64> {
        if index >= self.panels {
            return None;
        }
        match self.spans() {
            Some(spans) => Some(self.range.coordinate(index as f64 / spans)),
            None => Some(self.range.start()),
        }
    }

    /// Progress at which the point `panel_anchor` (fraction of the panel's
    /// width) of panel `index` lines up with `viewport_anchor` (fraction of
    /// the viewport's width).
    fn crossing(&self, spans: f64, index: usize, panel_anchor: f64, viewport_anchor: f64) -> f64 {
        (index as f64 + panel_anchor - viewport_anchor) / spans
    }

    /// Indicator region of panel `index`: from its leading edge reaching the
    /// viewport center to its trailing edge leaving it.
    pub fn trigger_region(&self, index: usize) -> Option<TriggerRegion> {
        self.panel_window(index, 0.0, 1.0, 0.5, 0.5)
    }

    /// Region where panel `index`'s center travels from `enter_at` to
    /// `leave_at` (viewport fractions, right to left as progress grows).
    pub fn center_window(&self, index: usize, enter_at: f64, leave_at: f64) -> Option<TriggerRegion> {
        self.panel_window(index, 0.5, 0.5, enter_at, leave_at)
    }

    fn panel_window(
        &self,
        index: usize,
        enter_anchor: f64,
        leave_anchor: f64,
        enter_at: f64,
        leave_at: f64,
    ) -> Option<TriggerRegion> {
        let spans = self.spans()?;
        if index >= self.panels {
            return None;
        }
        Some(TriggerRegion {
            enter: self.crossing(spans, index, enter_anchor, enter_at),
            leave: self.crossing(spans, index, leave_anchor, leave_at),
        })
    }

    /// Vertical drift of panel `index` in percent; even panels rise, odd sink.
    pub fn drift_percent(&self, index: usize, progress: f64, amplitude: f64) -> f64 {
        let sign = if index % 2 == 0 { -1.0 } else { 1.0 };
        amplitude * sign * Ease::InOutSine.apply(progress)
    }

    /// Feed a new scroll coordinate.
    ///
    /// The active panel only changes when an indicator region is entered
    /// moving forward or re-entered moving backward; between crossings it
    /// keeps its previous value even while the strip is mid-transit.
    pub fn update(&mut self, scroll: f64) -> ScrollEvent {
        let progress = self.range.progress(scroll);
        let previous = std::mem::replace(&mut self.progress, progress);
        let direction = Direction::between(previous, progress);
        let before = self.active;

        if self.spans().is_some() {
            let regions: Vec<TriggerRegion> =
                (0..self.panels).filter_map(|i| self.trigger_region(i)).collect();
            self.active = cross_regions(&regions, self.active, previous, progress);
        }

        if self.active != before {
            log::debug!("active panel {} -> {} at progress {:.3}", before, self.active, progress);
        }

        ScrollEvent { progress, index: self.active, direction }
    }

    /// Swap in a freshly measured range. Progress already reported stays as
    /// it was; the next [`ScrollMapper::update`] uses the new bounds.
    pub fn remeasure(&mut self, range: ScrollRange) {
        log::debug!(
            "scroll range {:.0}..{:.0} -> {:.0}..{:.0}",
            self.range.start(),
            self.range.end(),
            range.start(),
            range.end()
        );
        self.range = range;
    }
}

/// Active index after moving from `previous` to `current` past `regions`,
/// which are ordered along the scroll axis.
///
/// Moving forward, entering a region at its `enter` edge activates it;
/// moving backward, re-entering at its `leave` edge does. When one move
/// crosses several edges the last one crossed wins.
fn cross_regions(regions: &[TriggerRegion], active: usize, previous: f64, current: f64) -> usize {
    match Direction::between(previous, current) {
        Direction::Forward => regions
            .iter()
            .rposition(|r| previous < r.enter && r.enter <= current)
            .unwrap_or(active),
        Direction::Backward => regions
            .iter()
            .position(|r| current < r.leave && r.leave <= previous)
            .unwrap_or(active),
        Direction::Still => active,
    }
}

/// Active panel for the stacked layout used on narrow viewports, where
/// panels scroll vertically in document order.
///
/// Each panel's region runs from its top edge reaching the viewport center
/// to its bottom edge leaving it, in document pixels. The crossing rule is
/// the same one [`ScrollMapper::update`] applies to horizontal progress.
#[derive(Clone, Debug)]
pub struct StackedMapper {
    regions: Vec<TriggerRegion>,
    center: Option<f64>,
    active: usize,
}

impl StackedMapper {
    /// `bounds` are each panel's `(top, bottom)` in document pixels.
    pub fn new(bounds: impl IntoIterator<Item = (f64, f64)>) -> Self {
        Self { regions: Self::regions(bounds), center: None, active: 0 }
    }

    fn regions(bounds: impl IntoIterator<Item = (f64, f64)>) -> Vec<TriggerRegion> {
        bounds.into_iter().map(|(top, bottom)| TriggerRegion { enter: top, leave: bottom }).collect()
    }

    pub fn panel_count(&self) -> usize {
        self.regions.len()
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Fraction of the way the viewport center has travelled from the first
    /// panel's top to the last panel's bottom.
    fn progress(&self, center: f64) -> f64 {
        match (self.regions.first(), self.regions.last()) {
            (Some(first), Some(last)) if last.leave > first.enter => {
                ((center - first.enter) / (last.leave - first.enter)).clamp(0.0, 1.0)
            }
            _ => 0.0,
        }
    }

    /// Feed the document-space position of the viewport's vertical center.
    ///
    /// The first call counts as arriving from above the page, so a reload
    /// partway down activates the panel under the center.
    pub fn update(&mut self, center: f64) -> ScrollEvent {
        let previous = self.center.replace(center).unwrap_or(f64::NEG_INFINITY);
        let direction = Direction::between(previous, center);
        let before = self.active;
        self.active = cross_regions(&self.regions, self.active, previous, center);
        if self.active != before {
            log::debug!("stacked panel {} -> {} at {:.0}px", before, self.active, center);
        }
        ScrollEvent { progress: self.progress(center), index: self.active, direction }
    }

    /// Replace panel bounds after a layout change; the active panel is kept
    /// until the next crossing.
    pub fn remeasure(&mut self, bounds: impl IntoIterator<Item = (f64, f64)>) {
        self.regions = Self::regions(bounds);
        self.active = self.active.min(self.regions.len().saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn mapper(panels: usize) -> ScrollMapper {
        ScrollMapper::new(panels, ScrollRange::new(1000.0, 5000.0).unwrap())
    }

    fn scroll_at(m: &ScrollMapper, progress: f64) -> f64 {
        m.range().coordinate(progress)
    }

    #[test]
    fn translation_is_exactly_linear() {
        for n in 2..=7 {
            let m = mapper(n);
            for step in 0..=20 {
                let p = step as f64 / 20.0;
                assert_eq!(m.translation_percent(p), -100.0 * p * (n - 1) as f64);
            }
        }
    }

    #[test]
    fn snap_points_are_equally_spaced() {
        let m = mapper(5);
        assert_eq!(m.snap_points(), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn snap_target_is_always_a_snap_point() {
        for n in 2..=6 {
            let m = mapper(n);
            let points = m.snap_points();
            for step in 0..=100 {
                let target = m.snap_target(step as f64 / 100.0);
                assert!(points.iter().any(|p| (p - target).abs() < EPS), "n={n} target={target}");
            }
        }
        let m = mapper(5);
        assert_eq!(m.snap_target(0.1), 0.0);
        assert_eq!(m.snap_target(0.13), 0.25);
        assert_eq!(m.snap_target(0.9), 1.0);
    }

    #[test]
    fn snap_coordinate_only_inside_the_phase() {
        let m = mapper(5);
        assert_eq!(m.snap_coordinate(500.0), None);
        assert_eq!(m.snap_coordinate(1000.0), None);
        assert_eq!(m.snap_coordinate(5000.0), None);
        assert_eq!(m.snap_coordinate(6000.0), None);
        // Already at rest on panel 2.
        assert_eq!(m.snap_coordinate(3000.0), None);
        // Just past panel 1's rest point pulls back to it.
        let target = m.snap_coordinate(2100.0).unwrap();
        assert!((target - 2000.0).abs() < EPS);
    }

    #[test]
    fn single_panel_never_divides_by_zero() {
        let mut m = mapper(1);
        for p in [0.0, 0.3, 1.0] {
            assert_eq!(m.translation_percent(p), 0.0);
        }
        assert_eq!(m.snap_points(), vec![0.0]);
        assert_eq!(m.snap_target(0.7), 0.0);
        assert_eq!(m.snap_coordinate(3000.0), None);
        assert_eq!(m.trigger_region(0), None);
        assert_eq!(m.coordinate_for(0), Some(1000.0));
        for scroll in [0.0, 2000.0, 4500.0, 1500.0, 6000.0] {
            assert_eq!(m.update(scroll).index, 0);
        }
    }

    #[test]
    fn trigger_regions_tile_the_strip() {
        let m = mapper(5);
        for i in 0..4 {
            let a = m.trigger_region(i).unwrap();
            let b = m.trigger_region(i + 1).unwrap();
            assert!((a.leave - b.enter).abs() < EPS);
            assert!(a.enter < a.leave);
        }
        let first = m.trigger_region(0).unwrap();
        assert!((first.enter + 0.125).abs() < EPS);
        assert_eq!(m.trigger_region(5), None);
    }

    #[test]
    fn active_index_holds_during_transit() {
        let mut m = mapper(5);
        // Panel 1's region opens at 0.125.
        assert_eq!(m.update(scroll_at(&m, 0.05)).index, 0);
        assert_eq!(m.update(scroll_at(&m, 0.12)).index, 0);
        let event = m.update(scroll_at(&m, 0.13));
        assert_eq!(event.index, 1);
        assert_eq!(event.direction, Direction::Forward);
        // Round-to-nearest would already say 1 here, and stays 1 until 0.375.
        assert_eq!(m.update(scroll_at(&m, 0.37)).index, 1);
        assert_eq!(m.update(scroll_at(&m, 0.38)).index, 2);
    }

    #[test]
    fn backward_reentry_activates_previous_panel() {
        let mut m = mapper(5);
        m.update(scroll_at(&m, 0.6));
        assert_eq!(m.active_index(), 2);
        // Panel 1's region closes at 0.375; re-entering it scrolling back.
        assert_eq!(m.update(scroll_at(&m, 0.4)).index, 2);
        let event = m.update(scroll_at(&m, 0.36));
        assert_eq!(event.index, 1);
        assert_eq!(event.direction, Direction::Backward);
    }

    #[test]
    fn multi_panel_skip_lands_on_last_crossed() {
        let mut m = mapper(6);
        assert_eq!(m.update(scroll_at(&m, 1.0)).index, 5);
        assert_eq!(m.update(scroll_at(&m, 0.0)).index, 0);
    }

    #[test]
    fn still_updates_do_not_move_the_index() {
        let mut m = mapper(3);
        m.update(scroll_at(&m, 0.5));
        let event = m.update(scroll_at(&m, 0.5));
        assert_eq!(event.direction, Direction::Still);
        assert_eq!(event.index, 1);
    }

    #[test]
    fn center_window_brackets_the_panel_center() {
        let m = mapper(5);
        let w = m.center_window(2, 0.6, 0.4).unwrap();
        assert!((w.enter - 1.9 / 4.0).abs() < EPS);
        assert!((w.leave - 2.1 / 4.0).abs() < EPS);
        assert_eq!(w.local_progress(0.0), 0.0);
        assert!((w.local_progress(0.5) - 0.5).abs() < EPS);
        assert_eq!(w.local_progress(1.0), 1.0);
    }

    #[test]
    fn remeasure_applies_from_the_next_update() {
        let mut m = mapper(3);
        let before = m.update(3000.0);
        assert_eq!(before.progress, 0.5);

        m.remeasure(ScrollRange::new(1000.0, 9000.0).unwrap());
        // The event produced under the old range is untouched.
        assert_eq!(before.progress, 0.5);
        assert_eq!(m.progress(), 0.5);

        let after = m.update(3000.0);
        assert_eq!(after.progress, 0.25);
        assert_eq!(m.coordinate_for(2), Some(9000.0));
    }

    #[test]
    fn drift_alternates_direction() {
        let m = mapper(4);
        assert_eq!(m.drift_percent(0, 0.0, 6.0), 0.0);
        assert!((m.drift_percent(0, 1.0, 6.0) + 6.0).abs() < EPS);
        assert!((m.drift_percent(1, 1.0, 6.0) - 6.0).abs() < EPS);
        assert!((m.drift_percent(3, 0.5, 6.0) - 3.0).abs() < EPS);
    }

    fn stacked(panels: usize) -> StackedMapper {
        // 900px tall panels stacked from y = 200.
        StackedMapper::new((0..panels).map(|i| {
            let top = 200.0 + 900.0 * i as f64;
            (top, top + 900.0)
        }))
    }

    #[test]
    fn stacked_follows_the_panel_under_the_center() {
        let mut m = stacked(4);
        assert_eq!(m.update(450.0).index, 0);
        assert_eq!(m.update(1099.0).index, 0);
        let event = m.update(1100.0);
        assert_eq!(event.index, 1);
        assert_eq!(event.direction, Direction::Forward);
        assert_eq!(m.update(2500.0).index, 2);
    }

    #[test]
    fn stacked_backward_reentry_activates_previous_panel() {
        let mut m = stacked(4);
        m.update(2100.0);
        assert_eq!(m.active_index(), 2);
        // Panel 1 ends at 2000; scrolling back above it re-enters it.
        assert_eq!(m.update(2001.0).index, 2);
        let event = m.update(1999.0);
        assert_eq!(event.index, 1);
        assert_eq!(event.direction, Direction::Backward);
    }

    #[test]
    fn stacked_first_update_picks_up_a_mid_page_reload() {
        let mut m = stacked(4);
        assert_eq!(m.update(3000.0).index, 3);

        let mut above = stacked(4);
        assert_eq!(above.update(50.0).index, 0);
    }

    #[test]
    fn stacked_progress_spans_first_top_to_last_bottom() {
        let mut m = stacked(2);
        assert_eq!(m.update(0.0).progress, 0.0);
        assert_eq!(m.update(1100.0).progress, 0.5);
        assert_eq!(m.update(5000.0).progress, 1.0);
        assert_eq!(StackedMapper::new(Vec::new()).update(300.0).progress, 0.0);
    }

    #[test]
    fn stacked_remeasure_keeps_index_in_bounds() {
        let mut m = stacked(4);
        m.update(3500.0);
        assert_eq!(m.active_index(), 3);
        m.remeasure([(0.0, 500.0), (500.0, 1000.0)]);
        assert_eq!(m.panel_count(), 2);
        assert_eq!(m.active_index(), 1);
        assert_eq!(m.update(200.0).index, 0);
    }

    #[test]
    fn stacked_feeds_exactly_one_indicator() {
        use crate::events::dispatch;
        use crate::indicator::IndicatorSync;

        let mut m = stacked(5);
        let mut sync = IndicatorSync::new(5);
        let mut seed: u64 = 0x2545_f491_4f6c_dd1d;
        for _ in 0..2_000 {
            seed ^= seed << 13;
            seed ^= seed >> 7;
            seed ^= seed << 17;
            let center = (seed % 5_000) as f64;
            let event = m.update(center);
            let mut subscribers: [&mut dyn crate::events::ScrollSubscriber; 1] = [&mut sync];
            dispatch(&event, &mut subscribers);
            assert_eq!(sync.flags().iter().filter(|f| **f).count(), 1);
            assert_eq!(sync.active(), Some(m.active_index()));
        }
    }
}
