//! Active-panel tracking for the narrow layout, where panels stay stacked
//! and scroll vertically.

use std::cell::RefCell;
use std::rc::Rc;
use leptos::prelude::*;
use scrollstage_core::events::{self, ScrollSubscriber};
use scrollstage_core::indicator::IndicatorSync;
use scrollstage_core::StackedMapper;
use web_sys::HtmlElement;
use crate::dom;
use crate::state::SiteState;

struct StackedScroll {
    state: SiteState,
    mapper: StackedMapper,
    indicators: IndicatorSync,
    panels: Vec<HtmlElement>,
}

impl StackedScroll {
    fn bounds(&self) -> Vec<(f64, f64)> {
        self.panels.iter().map(dom::document_bounds).collect()
    }

    fn on_scroll(&mut self) {
        let center = dom::scroll_y() + dom::inner_height() / 2.0;
        let event = self.mapper.update(center);

        let mut subscribers: [&mut dyn ScrollSubscriber; 1] = [&mut self.indicators];
        events::dispatch(&event, &mut subscribers);

        let active = self.indicators.active();
        if self.state.active_panel.get_untracked() != active {
            self.state.active_panel.set(active);
        }
    }

    fn remeasure(&mut self) {
        let bounds = self.bounds();
        self.mapper.remeasure(bounds);
    }
}

/// Keep the guide ticks following the stacked panels on narrow viewports.
/// Wide viewports are handled by the horizontal scroller instead.
pub fn attach() {
    let state = expect_context::<SiteState>();
    if state.viewport.get_untracked().allows_horizontal() {
        return;
    }
    let panels = dom::query_all(".panel");
    if panels.is_empty() {
        log::debug!("No panels; stacked tracking skipped");
        return;
    }

    let mapper = StackedMapper::new(panels.iter().map(dom::document_bounds));
    let shared = Rc::new(RefCell::new(StackedScroll {
        state,
        indicators: IndicatorSync::new(panels.len()),
        mapper,
        panels,
    }));

    if let Some(window) = dom::window() {
        let on_scroll = Rc::clone(&shared);
        dom::listen::<web_sys::Event>(&window, "scroll", move |_| on_scroll.borrow_mut().on_scroll());

        let on_resize = Rc::clone(&shared);
        dom::listen::<web_sys::Event>(&window, "resize", move |_| {
            let mut s = on_resize.borrow_mut();
            s.remeasure();
            s.on_scroll();
        });
    }

    shared.borrow_mut().on_scroll();
    log::info!("Stacked panel tracking over {} panels", shared.borrow().mapper.panel_count());
}
