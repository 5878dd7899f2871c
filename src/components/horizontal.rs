//! Pinned horizontal panel strip driven by vertical scrolling.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use leptos::prelude::*;
use scrollstage_core::events::{self, ScrollSubscriber};
use scrollstage_core::indicator::IndicatorSync;
use scrollstage_core::navigation::Scroller;
use scrollstage_core::overlay::OverlayController;
use scrollstage_core::tween::{Ease, Prop, TweenConfig};
use scrollstage_core::{PanelTrack, Pin, ScrollMapper, SiteConfig};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use crate::components::zoom_overlay;
use crate::dom::{self, WindowScroller};
use crate::motion::{self, Target};
use crate::state::SiteState;

/// Live horizontal-scroll context. Built once at startup and handed by
/// reference to the scroll, resize and navigation handlers.
pub struct HorizontalScroll {
    state: SiteState,
    mapper: ScrollMapper,
    indicators: IndicatorSync,
    overlay: Option<OverlayController>,
    shell: HtmlElement,
    /// Holds the shell's place in the document, plus the scroll distance of
    /// the horizontal phase, while the shell itself is fixed.
    spacer: HtmlElement,
    container: HtmlElement,
    panel_count: usize,
    config: SiteConfig,
    snap_generation: u64,
    pin: Pin,
    /// Shell `left` and `width` in px, measured while in flow.
    shell_box: (f64, f64),
}

pub type SharedScroll = Rc<RefCell<HorizontalScroll>>;

impl HorizontalScroll {
    pub fn mapper(&self) -> &ScrollMapper {
        &self.mapper
    }

    fn on_scroll(&mut self, scroll: f64) {
        self.apply_pin(scroll);
        let event = self.mapper.update(scroll);

        let scrub = TweenConfig::new(self.config.scrub_secs).ease(Ease::Linear);
        let x = self.mapper.translation_percent(event.progress);
        for i in 0..self.panel_count {
            motion::animate(Target::Panel(i), &[(Prop::XPercent, x)], scrub);
            let drift = self.mapper.drift_percent(i, event.progress, self.config.drift_percent);
            motion::set(Target::Panel(i), Prop::YPercent, drift);
        }

        let mut subscribers: Vec<&mut dyn ScrollSubscriber> = vec![&mut self.indicators];
        if let Some(overlay) = self.overlay.as_mut() {
            subscribers.push(overlay);
        }
        events::dispatch(&event, &mut subscribers);

        let active = self.indicators.active();
        if self.state.active_panel.get_untracked() != active {
            self.state.active_panel.set(active);
        }
        if let Some(overlay) = &self.overlay {
            if self.state.overlay.get_untracked() != overlay.state() {
                self.state.overlay.set(overlay.state());
            }
        }
    }

    /// Switch the shell between in-flow and fixed placement. Styles are only
    /// written when the placement changes, never per scroll event.
    fn apply_pin(&mut self, scroll: f64) {
        let pin = self.mapper.range().pin_at(scroll);
        if pin == self.pin {
            return;
        }
        self.pin = pin;
        match pin {
            Pin::Before => place_in_flow(&self.shell, 0.0),
            Pin::Pinned => {
                let (left, width) = self.shell_box;
                dom::set_style(&self.shell, "position", "fixed");
                dom::set_style(&self.shell, "top", "0px");
                dom::set_style(&self.shell, "left", &format!("{}px", left));
                dom::set_style(&self.shell, "width", &format!("{}px", width));
            }
            Pin::After => place_in_flow(&self.shell, self.mapper.range().len()),
        }
    }

    /// Re-read the container width and shell box after a resize.
    /// A strip that no longer measures keeps its previous range.
    fn remeasure(&mut self) {
        place_in_flow(&self.shell, 0.0);
        self.pin = Pin::Before;

        let width = self.container.offset_width() as f64;
        let track = match PanelTrack::new(self.panel_count, width) {
            Ok(track) => track,
            Err(e) => {
                log::debug!("Keeping stale scroll range: {}", e);
                return;
            }
        };
        self.shell_box = measure_box(&self.shell);
        let range = track.range_from(dom::document_top(&self.spacer));
        reserve_pin_spacing(&self.spacer, &self.shell, range.len());
        self.mapper.remeasure(range);
    }
}

fn place_in_flow(shell: &HtmlElement, offset: f64) {
    dom::set_style(shell, "position", "relative");
    dom::set_style(shell, "top", &format!("{}px", offset));
    dom::clear_style(shell, "left");
    dom::clear_style(shell, "width");
}

fn measure_box(shell: &HtmlElement) -> (f64, f64) {
    let rect = shell.get_bounding_client_rect();
    (rect.left(), rect.width())
}

fn reserve_pin_spacing(spacer: &HtmlElement, shell: &HtmlElement, len: f64) {
    let height = shell.offset_height() as f64 + len;
    dom::set_style(spacer, "height", &format!("{}px", height));
}

/// Wrap `shell` in a spacer div that keeps its slot in the layout.
fn wrap_in_spacer(shell: &HtmlElement) -> Option<HtmlElement> {
    let parent = shell.parent_node()?;
    let spacer = dom::document()?
        .create_element("div")
        .ok()?
        .dyn_into::<HtmlElement>()
        .ok()?;
    spacer.set_class_name("pin-spacer");
    let anchor: &web_sys::Node = shell;
    parent.insert_before(&spacer, Some(anchor)).ok()?;
    spacer.append_child(shell).ok()?;
    Some(spacer)
}

/// Settle onto the nearest panel once scrolling has been quiet for a moment.
fn schedule_snap(shared: &SharedScroll) {
    let (generation, delay) = {
        let mut h = shared.borrow_mut();
        h.snap_generation += 1;
        (h.snap_generation, h.config.snap_idle_ms)
    };
    let shared = Rc::clone(shared);
    set_timeout(
        move || {
            let target = {
                let h = shared.borrow();
                if h.snap_generation != generation {
                    return;
                }
                h.mapper.snap_coordinate(dom::scroll_y())
            };
            if let Some(y) = target {
                WindowScroller.scroll_to(y, true);
            }
        },
        Duration::from_millis(delay as u64),
    );
}

/// Start horizontal mode, or return `None` when the viewport is narrow or
/// the page lacks a usable panel strip.
pub fn attach(config: &SiteConfig) -> Option<SharedScroll> {
    let state = expect_context::<SiteState>();
    let panels = dom::query_all(".panel");
    let Some(container) = dom::query(".panels").filter(|_| !panels.is_empty()) else {
        log::debug!("No panel strip; horizontal scroll skipped");
        return None;
    };
    let Some(shell) = dom::query(".scroll-shell") else {
        log::debug!("No scroll shell; horizontal scroll skipped");
        return None;
    };

    let width = container.offset_width() as f64;
    let track = match PanelTrack::activate(state.viewport.get_untracked(), panels.len(), width) {
        Ok(track) => track,
        Err(e) => {
            log::debug!("Horizontal scroll skipped: {}", e);
            return None;
        }
    };

    let Some(spacer) = wrap_in_spacer(&shell) else {
        log::warn!("Could not wrap scroll shell; horizontal scroll skipped");
        return None;
    };
    place_in_flow(&shell, 0.0);
    let shell_box = measure_box(&shell);
    let mapper = ScrollMapper::for_track(&track, dom::document_top(&spacer));
    reserve_pin_spacing(&spacer, &shell, mapper.range().len());

    for (i, panel) in panels.iter().enumerate() {
        motion::register(Target::Panel(i), panel.clone());
    }

    let overlay = zoom_overlay::attach(&mapper, &panels, config);

    let shared = Rc::new(RefCell::new(HorizontalScroll {
        state,
        indicators: IndicatorSync::new(track.count()),
        mapper,
        overlay,
        shell,
        spacer,
        container,
        panel_count: track.count(),
        config: config.clone(),
        snap_generation: 0,
        pin: Pin::Before,
        shell_box,
    }));

    if let Some(window) = dom::window() {
        let on_scroll = Rc::clone(&shared);
        dom::listen::<web_sys::Event>(&window, "scroll", move |_| {
            on_scroll.borrow_mut().on_scroll(dom::scroll_y());
            schedule_snap(&on_scroll);
        });

        let on_resize = Rc::clone(&shared);
        dom::listen::<web_sys::Event>(&window, "resize", move |_| {
            let mut h = on_resize.borrow_mut();
            h.remeasure();
            h.on_scroll(dom::scroll_y());
        });
    }

    shared.borrow_mut().on_scroll(dom::scroll_y());
    log::info!("Horizontal scroll over {} panels, {:.0}px range", track.count(), track.container_width());
    Some(shared)
}
