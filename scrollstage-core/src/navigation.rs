//! Indicator click → absolute scroll coordinate.

use crate::mapper::ScrollMapper;

/// Something that can move the page's vertical scroll position.
pub trait Scroller {
    fn scroll_to(&mut self, coordinate: f64, smooth: bool);
}

/// Inverse of the mapper: scrolls so that panel `index` is at rest.
///
/// Without a mapper (horizontal mode never started) or with an index past
/// the last panel this does nothing and returns `None`.
pub fn go_to<S: Scroller + ?Sized>(
    mapper: Option<&ScrollMapper>,
    index: usize,
    scroller: &mut S,
) -> Option<f64> {
    let target = mapper?.coordinate_for(index)?;
    log::debug!("navigate to panel {} at {:.1}", index, target);
    scroller.scroll_to(target, true);
    Some(target)
}
