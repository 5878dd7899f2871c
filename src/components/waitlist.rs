use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;
use leptos::prelude::*;
use scrollstage_core::tween::{Prop, TweenConfig};
use scrollstage_core::waitlist::WaitlistFlow;
use scrollstage_core::SiteConfig;
use web_sys::{HtmlElement, HtmlFormElement};
use crate::dom;
use crate::motion::{self, Target};

type SharedFlow = Rc<Cell<WaitlistFlow>>;

fn step(flow: &SharedFlow, f: impl FnOnce(&mut WaitlistFlow) -> bool) -> bool {
    let mut current = flow.get();
    let moved = f(&mut current);
    flow.set(current);
    moved
}

/// Intercept `#waitlist-form`: show the loader, submit natively, then swap
/// in the success view after a fixed delay.
pub fn attach(config: &SiteConfig) {
    let Some(form) = dom::by_id::<HtmlFormElement>("waitlist-form") else {
        log::debug!("No #waitlist-form; waitlist skipped");
        return;
    };
    let loader = dom::by_id::<HtmlElement>("waitlist-loader");
    let success = dom::by_id::<HtmlElement>("waitlist-success");
    if let Some(el) = &loader {
        motion::register(Target::WaitlistLoader, el.clone());
    }
    if let Some(el) = &success {
        motion::register(Target::WaitlistSuccess, el.clone());
    }

    let flow: SharedFlow = Rc::new(Cell::new(WaitlistFlow::new()));
    let config = config.clone();
    let target = form.clone();

    dom::listen::<web_sys::Event>(&target, "submit", move |ev| {
        ev.prevent_default();
        if !step(&flow, WaitlistFlow::submit) {
            return;
        }

        if let Some(el) = &loader {
            dom::set_style(el, "display", "flex");
            let fade_in = TweenConfig::new(config.waitlist_loader_in_secs);
            motion::from_to(Target::WaitlistLoader, Prop::Opacity, 0.0, 1.0, fade_in);
        }

        // Native submit does not re-dispatch the submit event.
        if let Err(e) = form.submit() {
            log::warn!("Waitlist submission failed: {:?}", e);
        }

        let (flow, form, loader, success, config) =
            (flow.clone(), form.clone(), loader.clone(), success.clone(), config.clone());
        let delay = Duration::from_millis(config.waitlist_finish_delay_ms as u64);
        set_timeout(move || finish(flow, form, loader, success, &config), delay);
    });
}

fn finish(
    flow: SharedFlow,
    form: HtmlFormElement,
    loader: Option<HtmlElement>,
    success: Option<HtmlElement>,
    config: &SiteConfig,
) {
    let Some(success) = success else {
        return;
    };
    if !step(&flow, |f| f.finish(true)) {
        return;
    }

    let fade_out = config.waitlist_loader_out_secs;
    if loader.is_some() {
        motion::animate(Target::WaitlistLoader, &[(Prop::Opacity, 0.0)], TweenConfig::new(fade_out));
    }

    let fade_in = TweenConfig::new(config.waitlist_success_in_secs);
    let rise = config.waitlist_success_rise_px;
    set_timeout(
        move || {
            if let Some(el) = &loader {
                dom::set_style(el, "display", "none");
            }
            dom::set_style(&form, "display", "none");
            dom::set_style(&success, "display", "block");
            motion::from_to(Target::WaitlistSuccess, Prop::Opacity, 0.0, 1.0, fade_in);
            motion::from_to(Target::WaitlistSuccess, Prop::Y, rise, 0.0, fade_in);
            step(&flow, WaitlistFlow::complete);
        },
        Duration::from_secs_f64(fade_out),
    );
}
