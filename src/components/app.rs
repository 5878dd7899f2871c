use leptos::prelude::*;
use crate::components::{countdown, horizontal, indicators, loader, stacked, waitlist};
use crate::dom;
use crate::motion;
use crate::state::SiteState;

/// Root of the page script. Renders nothing itself; it attaches each
/// subsystem to the existing markup, skipping any whose anchors are missing.
#[component]
pub fn App() -> impl IntoView {
    let config = dom::load_config();
    let mode = dom::viewport_mode(&config);
    provide_context(SiteState::new(mode));

    motion::start();

    let scroll = horizontal::attach(&config);
    if scroll.is_none() {
        stacked::attach();
    }
    indicators::attach(scroll);
    countdown::attach(&config);
    loader::attach(&config);
    waitlist::attach(&config);

    log::info!("scrollstage ready, {:?} viewport", mode);
}
