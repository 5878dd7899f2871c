use std::cell::Cell;
use std::time::Duration;
use leptos::prelude::*;
use leptos::mount::mount_to;
use scrollstage_core::countdown::{Countdown, CountdownSnapshot};
use scrollstage_core::{LaunchDate, SiteConfig};
use web_sys::HtmlElement;
use crate::dom;
use crate::state::SiteState;

/// `01D 01H 01M 01S 000MS`, rendered from the shared snapshot.
#[component]
pub fn CountdownReadout(countdown: RwSignal<CountdownSnapshot>) -> impl IntoView {
    view! {
        {move || countdown.get().label()}
        " "
        <span class="ms">{move || countdown.get().millis_label()}</span>
    }
}

/// Unix ms of local midnight on `date`, in the browser's timezone.
fn local_midnight_ms(date: LaunchDate) -> f64 {
    js_sys::Date::new_with_year_month_day(date.year, date.month as i32 - 1, date.day as i32).get_time()
}

/// Start the launch countdown in `#countdown`.
pub fn attach(config: &SiteConfig) {
    let state = expect_context::<SiteState>();
    let Some(el) = dom::by_id::<HtmlElement>("countdown") else {
        log::debug!("No #countdown; countdown skipped");
        return;
    };

    let countdown = Cell::new(Countdown::new(config.launch_target_ms(local_midnight_ms)));
    let tick = move || {
        let mut c = countdown.get();
        state.countdown.set(c.tick(js_sys::Date::now() as i64));
        countdown.set(c);
    };
    tick();

    el.set_text_content(None);
    mount_to(el, move || view! { <CountdownReadout countdown={state.countdown} /> }).forget();

    let interval = Duration::from_millis(config.countdown_interval_ms as u64);
    if let Err(e) = set_interval_with_handle(tick, interval) {
        log::warn!("Countdown timer not started: {:?}", e);
    }
}
