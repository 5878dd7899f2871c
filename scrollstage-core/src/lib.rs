//! Platform-free core of the scrollstage landing page.
//!
//! Everything in here is plain data and pure functions so it can be tested
//! natively; the wasm crate at the workspace root wires it to the DOM.

pub mod config;
pub mod countdown;
pub mod error;
pub mod events;
pub mod indicator;
pub mod loader;
pub mod mapper;
pub mod navigation;
pub mod overlay;
pub mod track;
pub mod tween;
pub mod viewport;
pub mod waitlist;

pub use config::{LaunchDate, SiteConfig};
pub use error::{ConfigError, TrackError};
pub use events::{Direction, ScrollEvent, ScrollSubscriber};
pub use mapper::{ScrollMapper, StackedMapper};
pub use track::{PanelTrack, Pin, ScrollRange};
