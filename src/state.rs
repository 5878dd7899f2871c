use leptos::prelude::*;
use scrollstage_core::countdown::CountdownSnapshot;
use scrollstage_core::loader::LoaderPhase;
use scrollstage_core::overlay::OverlayState;
use scrollstage_core::viewport::ViewportMode;

/// Reactive state shared by the page subsystems, provided as context by `App`.
///
/// Each signal has exactly one writer. `active_panel` belongs to whichever
/// panel tracker runs (horizontal on wide viewports, stacked on narrow).
/// The horizontal scroller also owns `overlay`, the countdown timer owns
/// `countdown` and the loader frame loop owns `loader_phase`.
#[derive(Clone, Copy)]
pub struct SiteState {
    /// Sampled once at startup and never updated.
    pub viewport: ReadSignal<ViewportMode>,
    pub active_panel: RwSignal<Option<usize>>,
    pub overlay: RwSignal<OverlayState>,
    pub countdown: RwSignal<CountdownSnapshot>,
    pub loader_phase: RwSignal<LoaderPhase>,
}

impl SiteState {
    pub fn new(viewport: ViewportMode) -> Self {
        let (viewport, _) = signal(viewport);
        Self {
            viewport,
            active_panel: RwSignal::new(None),
            overlay: RwSignal::new(OverlayState::Hidden),
            countdown: RwSignal::new(CountdownSnapshot::default()),
            loader_phase: RwSignal::new(LoaderPhase::Revealing),
        }
    }
}
