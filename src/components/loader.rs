use leptos::prelude::*;
use scrollstage_core::loader::{LoaderPhase, LoaderSchedule, WaveReveal};
use scrollstage_core::tween::{Prop, TweenConfig};
use scrollstage_core::SiteConfig;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement};
use crate::canvas::wave_renderer;
use crate::dom;
use crate::motion::{self, Target};
use crate::state::SiteState;

fn fit_to_window(canvas: &HtmlCanvasElement) {
    canvas.set_width(dom::inner_width().max(0.0) as u32);
    canvas.set_height(dom::inner_height().max(0.0) as u32);
}

/// Start the waveform loading screen on `#waveCanvas`.
pub fn attach(config: &SiteConfig) {
    let state = expect_context::<SiteState>();
    let Some(canvas) = dom::by_id::<HtmlCanvasElement>("waveCanvas") else {
        log::debug!("No #waveCanvas; loader skipped");
        return;
    };
    let Some(ctx) = canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
    else {
        log::debug!("No 2d context; loader skipped");
        return;
    };

    fit_to_window(&canvas);
    if let Some(window) = dom::window() {
        let canvas = canvas.clone();
        dom::listen::<web_sys::Event>(&window, "resize", move |_| fit_to_window(&canvas));
    }

    let schedule = LoaderSchedule {
        fade_delay_ms: config.loader_fade_delay_ms as f64,
        fade_ms: config.loader_fade_ms as f64,
    };

    if let Some(loader) = dom::by_id::<HtmlElement>("loader") {
        motion::register(Target::Loader, loader.clone());
        let fade = TweenConfig::new(schedule.fade_ms / 1000.0);
        Effect::new(move || match state.loader_phase.get() {
            LoaderPhase::Revealing => {}
            LoaderPhase::Fading => motion::animate(Target::Loader, &[(Prop::Opacity, 0.0)], fade),
            LoaderPhase::Hidden => {
                dom::set_style(&loader, "pointer-events", "none");
                dom::set_style(&loader, "visibility", "hidden");
                dom::set_style(&loader, "display", "none");
            }
        });
    }

    run(ctx, canvas, WaveReveal::new(config.loader_reveal_step), schedule, dom::now_ms(), state);
}

/// One frame per animation tick, forever; the reveal stops growing at full
/// width but the completed traces keep being drawn.
fn run(
    ctx: CanvasRenderingContext2d,
    canvas: HtmlCanvasElement,
    mut reveal: WaveReveal,
    schedule: LoaderSchedule,
    started: f64,
    state: SiteState,
) {
    request_animation_frame(move || {
        wave_renderer::draw_wave(&ctx, canvas.width() as f64, canvas.height() as f64, &reveal);
        reveal.advance();

        let phase = schedule.phase_at(dom::now_ms() - started);
        if state.loader_phase.get_untracked() != phase {
            state.loader_phase.set(phase);
        }

        run(ctx, canvas, reveal, schedule, started, state);
    });
}
