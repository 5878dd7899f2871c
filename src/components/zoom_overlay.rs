use leptos::prelude::*;
use leptos::mount::mount_to;
use scrollstage_core::overlay::{OverlayController, OverlayState};
use scrollstage_core::tween::{Prop, TweenConfig};
use scrollstage_core::{ScrollMapper, SiteConfig};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use crate::components::countdown::CountdownReadout;
use crate::dom;
use crate::motion::{self, Target};
use crate::state::SiteState;

/// Marks the panel whose pass through the viewport center shows the overlay.
const OVERLAY_PANEL_CLASS: &str = "panel-countdown";

/// Wire the zoomed countdown overlay. Returns the controller to feed scroll
/// events into, or `None` if any of its anchors are missing.
pub fn attach(
    mapper: &ScrollMapper,
    panels: &[HtmlElement],
    config: &SiteConfig,
) -> Option<OverlayController> {
    let state = expect_context::<SiteState>();
    let Some(panel) = panels.iter().position(|p| p.class_list().contains(OVERLAY_PANEL_CLASS)) else {
        log::debug!("No .{} panel; zoom overlay skipped", OVERLAY_PANEL_CLASS);
        return None;
    };
    let (Some(overlay), Some(value), Some(_live)) = (
        dom::by_id::<HtmlElement>("countdown-overlay"),
        dom::by_id::<HtmlElement>("countdown-overlay-value"),
        dom::by_id::<HtmlElement>("countdown"),
    ) else {
        log::debug!("Countdown overlay anchors missing; zoom overlay skipped");
        return None;
    };
    let controller = OverlayController::for_panel(mapper, panel, config)?;

    // The first child carries the zoom so the backdrop keeps its size.
    let zoomed = overlay
        .first_element_child()
        .and_then(|c| c.dyn_into::<HtmlElement>().ok())
        .unwrap_or_else(|| value.clone());

    motion::register(Target::Overlay, overlay.clone());
    motion::register(Target::OverlayValue, zoomed);
    motion::set(Target::Overlay, Prop::Opacity, 0.0);
    motion::set(Target::OverlayValue, Prop::Scale, 1.0);
    dom::set_style(&overlay, "display", "none");

    // Same snapshot as the primary countdown, so the copy cannot drift.
    value.set_text_content(None);
    mount_to(value, move || view! { <CountdownReadout countdown={state.countdown} /> }).forget();

    let tween = TweenConfig::new(config.overlay_tween_secs);
    Effect::new(move || match state.overlay.get() {
        OverlayState::Hidden => dom::set_style(&overlay, "display", "none"),
        OverlayState::Visible { opacity, scale } => {
            dom::set_style(&overlay, "display", "flex");
            motion::animate(Target::Overlay, &[(Prop::Opacity, opacity)], tween);
            motion::animate(Target::OverlayValue, &[(Prop::Scale, scale)], tween);
        }
    });

    Some(controller)
}
