use std::sync::OnceLock;

/// Coarse viewport class that gates horizontal-scroll mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewportMode {
    Narrow,
    Wide,
}

impl ViewportMode {
    /// `width` at or below `narrow_max` (CSS px) is narrow.
    pub fn classify(width: f64, narrow_max: f64) -> Self {
        if width <= narrow_max {
            ViewportMode::Narrow
        } else {
            ViewportMode::Wide
        }
    }

    pub fn allows_horizontal(self) -> bool {
        self == ViewportMode::Wide
    }
}

/// Samples the viewport once and keeps answering with that first result.
///
/// Resizing across the breakpoint later in the session does not change the
/// mode; the page stays in whatever layout it started with. `new` is const so
/// one classifier can live in a `static` for the whole page.
#[derive(Debug, Default)]
pub struct ViewportClassifier {
    mode: OnceLock<ViewportMode>,
}

impl ViewportClassifier {
    pub const fn new() -> Self {
        Self { mode: OnceLock::new() }
    }

    /// Return the frozen mode, calling `sample` only on the first request.
    pub fn mode(&self, sample: impl FnOnce() -> ViewportMode) -> ViewportMode {
        *self.mode.get_or_init(sample)
    }

    pub fn is_sampled(&self) -> bool {
        self.mode.get().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn breakpoint_is_inclusive() {
        assert_eq!(ViewportMode::classify(768.0, 768.0), ViewportMode::Narrow);
        assert_eq!(ViewportMode::classify(320.0, 768.0), ViewportMode::Narrow);
        assert_eq!(ViewportMode::classify(768.5, 768.0), ViewportMode::Wide);
        assert_eq!(ViewportMode::classify(1440.0, 768.0), ViewportMode::Wide);
    }

    #[test]
    fn mode_is_sampled_once_and_frozen() {
        let classifier = ViewportClassifier::new();
        let calls = Cell::new(0);
        let width = Cell::new(500.0);
        let sample = || {
            calls.set(calls.get() + 1);
            ViewportMode::classify(width.get(), 768.0)
        };

        assert!(!classifier.is_sampled());
        assert_eq!(classifier.mode(sample), ViewportMode::Narrow);

        // Narrow → wide resize mid-session.
        width.set(1920.0);
        let sample_again = || {
            calls.set(calls.get() + 1);
            ViewportMode::classify(width.get(), 768.0)
        };
        assert_eq!(classifier.mode(sample_again), ViewportMode::Narrow);
        assert_eq!(calls.get(), 1);
        assert!(classifier.is_sampled());
    }

    #[test]
    fn only_wide_allows_horizontal() {
        assert!(ViewportMode::Wide.allows_horizontal());
        assert!(!ViewportMode::Narrow.allows_horizontal());
    }

    #[test]
    fn static_classifier_is_shared() {
        static CLASSIFIER: ViewportClassifier = ViewportClassifier::new();
        assert_eq!(CLASSIFIER.mode(|| ViewportMode::Wide), ViewportMode::Wide);
        assert_eq!(CLASSIFIER.mode(|| ViewportMode::Narrow), ViewportMode::Wide);
    }
}
