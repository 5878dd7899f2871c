pub mod app;
pub mod countdown;
pub mod horizontal;
pub mod indicators;
pub mod loader;
pub mod stacked;
pub mod waitlist;
pub mod zoom_overlay;
