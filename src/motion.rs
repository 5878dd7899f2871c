//! Applies the core tween book to real elements once per animation frame.
//!
//! Elements are registered under a [`Target`] key; tweens and immediate
//! writes go through the free functions here, which share one book per page.

use std::cell::RefCell;
use std::collections::HashMap;
use leptos::prelude::*;
use scrollstage_core::tween::{Animate, Prop, TweenConfig, Tweens};
use web_sys::HtmlElement;
use crate::dom;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Target {
    Panel(usize),
    Overlay,
    OverlayValue,
    Loader,
    WaitlistLoader,
    WaitlistSuccess,
}

#[derive(Default)]
struct Motion {
    tweens: Tweens<Target>,
    elements: HashMap<Target, HtmlElement>,
    running: bool,
}

thread_local! {
    static MOTION: RefCell<Motion> = RefCell::new(Motion::default());
}

pub fn register(target: Target, el: HtmlElement) {
    MOTION.with(|m| {
        m.borrow_mut().elements.insert(target, el);
    });
}

/// Tween `props` of `target`, replacing any tween already running on them.
pub fn animate(target: Target, props: &[(Prop, f64)], config: TweenConfig) {
    MOTION.with(|m| m.borrow_mut().tweens.animate(target, props, config));
}

pub fn from_to(target: Target, prop: Prop, from: f64, to: f64, config: TweenConfig) {
    MOTION.with(|m| {
        let mut m = m.borrow_mut();
        m.tweens.from_to(target, prop, from, to, config);
        flush(&mut m);
    });
}

/// Write a value immediately, visible without waiting for the next frame.
pub fn set(target: Target, prop: Prop, value: f64) {
    MOTION.with(|m| {
        let mut m = m.borrow_mut();
        m.tweens.set(target, prop, value);
        flush(&mut m);
    });
}

/// Start the frame loop. Safe to call more than once.
pub fn start() {
    let already = MOTION.with(|m| std::mem::replace(&mut m.borrow_mut().running, true));
    if !already {
        schedule(dom::now_ms());
    }
}

fn schedule(last: f64) {
    request_animation_frame(move || {
        let now = dom::now_ms();
        MOTION.with(|m| {
            let mut m = m.borrow_mut();
            m.tweens.tick((now - last) / 1000.0);
            flush(&mut m);
        });
        schedule(now);
    });
}

fn flush(m: &mut Motion) {
    for target in m.tweens.take_dirty() {
        if let Some(el) = m.elements.get(&target) {
            apply(&m.tweens, target, el);
        }
    }
}

fn apply(tweens: &Tweens<Target>, target: Target, el: &HtmlElement) {
    if tweens.has(target, Prop::Opacity) {
        dom::set_style(el, "opacity", &format!("{:.4}", tweens.value(target, Prop::Opacity)));
    }
    let transformed = [Prop::XPercent, Prop::YPercent, Prop::Y, Prop::Scale]
        .into_iter()
        .any(|p| tweens.has(target, p));
    if transformed {
        dom::set_style(el, "transform", &transform_css(tweens, target));
    }
}

fn transform_css(tweens: &Tweens<Target>, target: Target) -> String {
    format!(
        "translate({:.4}%, {:.4}%) translateY({:.2}px) scale({:.4})",
        tweens.value(target, Prop::XPercent),
        tweens.value(target, Prop::YPercent),
        tweens.value(target, Prop::Y),
        tweens.value(target, Prop::Scale),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transform_defaults_to_identity() {
        let tweens = Tweens::new();
        assert_eq!(
            transform_css(&tweens, Target::Overlay),
            "translate(0.0000%, 0.0000%) translateY(0.00px) scale(1.0000)"
        );
    }

    #[test]
    fn transform_combines_all_axes() {
        let mut tweens = Tweens::new();
        tweens.set(Target::Panel(2), Prop::XPercent, -150.0);
        tweens.set(Target::Panel(2), Prop::YPercent, 3.0);
        tweens.set(Target::Panel(2), Prop::Scale, 1.025);
        assert_eq!(
            transform_css(&tweens, Target::Panel(2)),
            "translate(-150.0000%, 3.0000%) translateY(0.00px) scale(1.0250)"
        );
    }
}
