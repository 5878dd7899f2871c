//! Thin helpers over web-sys for finding page anchors and poking styles.

use scrollstage_core::navigation::Scroller;
use scrollstage_core::viewport::{ViewportClassifier, ViewportMode};
use scrollstage_core::SiteConfig;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, EventTarget, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    window()?.document()
}

/// Element by id, cast to the requested type.
pub fn by_id<T: JsCast>(id: &str) -> Option<T> {
    document()?.get_element_by_id(id)?.dyn_into::<T>().ok()
}

pub fn query(selector: &str) -> Option<HtmlElement> {
    document()?
        .query_selector(selector)
        .ok()
        .flatten()?
        .dyn_into::<HtmlElement>()
        .ok()
}

/// All matches in document order; empty on any failure.
pub fn query_all(selector: &str) -> Vec<HtmlElement> {
    let Some(list) = document().and_then(|d| d.query_selector_all(selector).ok()) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

pub fn set_style(el: &HtmlElement, property: &str, value: &str) {
    let _ = el.style().set_property(property, value);
}

pub fn clear_style(el: &HtmlElement, property: &str) {
    let _ = el.style().remove_property(property);
}

/// Attach a listener for the lifetime of the page.
pub fn listen<E>(target: &EventTarget, event: &str, mut handler: impl FnMut(E) + 'static)
where
    E: JsCast + 'static,
{
    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |ev: web_sys::Event| {
        handler(ev.unchecked_into::<E>());
    });
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        log::warn!("Failed to listen for {}: {:?}", event, e);
        return;
    }
    closure.forget();
}

pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

pub fn inner_width() -> f64 {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

pub fn inner_height() -> f64 {
    window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

/// Monotonic milliseconds for frame timing.
pub fn now_ms() -> f64 {
    window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

/// Document-space top of `el`.
pub fn document_top(el: &HtmlElement) -> f64 {
    el.get_bounding_client_rect().top() + scroll_y()
}

/// Document-space `(top, bottom)` of `el`.
pub fn document_bounds(el: &HtmlElement) -> (f64, f64) {
    let rect = el.get_bounding_client_rect();
    let y = scroll_y();
    (rect.top() + y, rect.bottom() + y)
}

static VIEWPORT: ViewportClassifier = ViewportClassifier::new();

/// The page's viewport class, sampled on first use and frozen after.
pub fn viewport_mode(config: &SiteConfig) -> ViewportMode {
    VIEWPORT.mode(|| sample_viewport(config))
}

/// Classify the viewport using the same media query the stylesheet uses.
fn sample_viewport(config: &SiteConfig) -> ViewportMode {
    let matched = window()
        .and_then(|w| w.match_media(&config.narrow_media_query()).ok().flatten())
        .map(|mq| mq.matches());
    match matched {
        Some(true) => ViewportMode::Narrow,
        Some(false) => ViewportMode::Wide,
        None => ViewportMode::classify(inner_width(), config.narrow_max_width_px),
    }
}

/// Site config from `<script type="application/json" id="site-config">`,
/// or defaults when absent or invalid.
pub fn load_config() -> SiteConfig {
    let Some(text) = by_id::<HtmlElement>("site-config").and_then(|el| el.text_content()) else {
        return SiteConfig::default();
    };
    match SiteConfig::from_json(&text) {
        Ok(config) => {
            log::debug!("Loaded site config");
            config
        }
        Err(e) => {
            log::warn!("Ignoring site config: {}", e);
            SiteConfig::default()
        }
    }
}

/// Programmatic page scrolling through `window.scrollTo`.
pub struct WindowScroller;

impl Scroller for WindowScroller {
    fn scroll_to(&mut self, coordinate: f64, smooth: bool) {
        let Some(window) = window() else { return };
        let options = ScrollToOptions::new();
        options.set_top(coordinate);
        options.set_behavior(if smooth { ScrollBehavior::Smooth } else { ScrollBehavior::Auto });
        window.scroll_to_with_scroll_to_options(&options);
    }
}
