use thiserror::Error;

/// Reasons horizontal-scroll mode refuses to activate.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TrackError {
    #[error("horizontal mode is disabled on narrow viewports")]
    NarrowViewport,
    #[error("need at least 2 panels for horizontal mode, found {0}")]
    TooFewPanels(usize),
    #[error("panel container width must be positive and finite, got {0}")]
    BadWidth(f64),
    #[error("scroll range end ({end}) must be greater than start ({start})")]
    InvertedRange { start: f64, end: f64 },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed site config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("`{field}` out of range: {value}")]
    OutOfRange { field: &'static str, value: f64 },
    #[error("overlay enter and leave anchors must differ")]
    EmptyOverlayWindow,
}
