use crate::events::{ScrollEvent, ScrollSubscriber};

/// Active flags for the row of progress indicators, one per panel.
///
/// Starts with nothing marked; after the first `set_active` exactly one
/// flag is set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndicatorSync {
    flags: Vec<bool>,
    active: Option<usize>,
}

impl IndicatorSync {
    pub fn new(count: usize) -> Self {
        Self { flags: vec![false; count], active: None }
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.flags.get(index).copied().unwrap_or(false)
    }

    pub fn flags(&self) -> &[bool] {
        &self.flags
    }

    /// Mark `index` active and every other indicator inactive.
    ///
    /// Returns whether anything changed; out-of-range indices are ignored.
    pub fn set_active(&mut self, index: usize) -> bool {
        if index >= self.flags.len() || self.active == Some(index) {
            return false;
        }
        for (i, flag) in self.flags.iter_mut().enumerate() {
            *flag = i == index;
        }
        self.active = Some(index);
        true
    }
}

impl ScrollSubscriber for IndicatorSync {
    fn on_scroll(&mut self, event: &ScrollEvent) {
        self.set_active(event.index);
    }
}
