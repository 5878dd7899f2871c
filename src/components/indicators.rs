use leptos::prelude::*;
use scrollstage_core::navigation;
use web_sys::MouseEvent;
use crate::components::horizontal::SharedScroll;
use crate::dom::{self, WindowScroller};
use crate::state::SiteState;

/// Make the guide ticks clickable and keep their `active` class in sync.
///
/// Clicks go through the navigation bridge; without a horizontal scroller
/// (narrow viewport, missing strip) they do nothing. The `active` class
/// follows whichever tracker is running, horizontal or stacked.
pub fn attach(scroll: Option<SharedScroll>) {
    let state = expect_context::<SiteState>();
    let ticks = dom::query_all(".guide-ticks .tick");
    if ticks.is_empty() {
        return;
    }

    for (index, tick) in ticks.iter().enumerate() {
        dom::set_style(tick, "cursor", "pointer");
        let scroll = scroll.clone();
        dom::listen::<MouseEvent>(tick, "click", move |_| {
            let context = scroll.as_ref().map(|s| s.borrow());
            navigation::go_to(context.as_ref().map(|h| h.mapper()), index, &mut WindowScroller);
        });
    }

    Effect::new(move || {
        let active = state.active_panel.get();
        for (i, tick) in ticks.iter().enumerate() {
            let _ = tick.class_list().toggle_with_force("active", active == Some(i));
        }
    });
}
