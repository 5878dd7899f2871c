//! Geometry and timing of the waveform loading screen.
//!
//! The trace shape is a two-tone carrier under a Gaussian envelope centred
//! on the canvas, drawn as mirrored pairs fanning out from the midline.

use std::f64::consts::PI;

pub const TRACE_PAIRS: usize = 9;
pub const LINE_WIDTH: f64 = 1.4;

/// Peak amplitude of the innermost pair, as a fraction of canvas height.
const MAX_AMPLITUDE: f64 = 0.16;
/// Amplitude lost per pair moving outward.
const AMPLITUDE_FALLOFF: f64 = 0.07;
/// Pixels between neighbouring pairs.
const PAIR_SPACING: f64 = 8.0;
const BASE_ALPHA: f64 = 0.95;
const ALPHA_FALLOFF: f64 = 0.03;
const ENVELOPE_SHARPNESS: f64 = 18.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TraceSide {
    Upper,
    Lower,
}

/// Stroke parameters of one pair.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TraceStyle {
    pub line_width: f64,
    pub alpha: f64,
}

impl TraceStyle {
    pub fn for_pair(pair: usize) -> Self {
        Self { line_width: LINE_WIDTH, alpha: BASE_ALPHA - pair as f64 * ALPHA_FALLOFF }
    }

    pub fn css_color(&self) -> String {
        format!("rgba(235,235,235,{:.2})", self.alpha)
    }
}

/// Unscaled waveform value at normalized x in `[0, 1]`.
pub fn wave_shape(nx: f64) -> f64 {
    let envelope = (-(nx - 0.5).powi(2) * ENVELOPE_SHARPNESS).exp();
    let carrier = (nx * 8.0 * PI).sin() * 0.85 + (nx * 16.0 * PI).sin() * 0.35;
    carrier * envelope
}

/// Canvas y coordinate of a trace at pixel column `x`.
pub fn trace_y(pair: usize, side: TraceSide, x: f64, width: f64, height: f64) -> f64 {
    let mid = height * 0.5;
    let amplitude = height * MAX_AMPLITUDE * (1.0 - pair as f64 * AMPLITUDE_FALLOFF);
    let offset = PAIR_SPACING * (pair as f64 + 1.0);
    let wave = if width > 0.0 { wave_shape(x / width) * amplitude } else { 0.0 };
    match side {
        TraceSide::Upper => mid - wave - offset,
        TraceSide::Lower => mid + wave + offset,
    }
}

/// Left-to-right reveal that advances a fixed step per frame.
#[derive(Clone, Copy, Debug)]
pub struct WaveReveal {
    fraction: f64,
    step: f64,
}

impl WaveReveal {
    pub fn new(step: f64) -> Self {
        Self { fraction: 0.0, step }
    }

    pub fn fraction(&self) -> f64 {
        self.fraction
    }

    pub fn is_complete(&self) -> bool {
        self.fraction >= 1.0
    }

    /// Rightmost pixel column drawn this frame.
    pub fn max_x(&self, width: f64) -> f64 {
        width * self.fraction
    }

    pub fn advance(&mut self) {
        self.fraction = (self.fraction + self.step).min(1.0);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoaderPhase {
    Revealing,
    Fading,
    Hidden,
}

/// Fade-out timeline measured from loader start, independent of the reveal.
#[derive(Clone, Copy, Debug)]
pub struct LoaderSchedule {
    pub fade_delay_ms: f64,
    pub fade_ms: f64,
}

impl LoaderSchedule {
    pub fn phase_at(&self, elapsed_ms: f64) -> LoaderPhase {
        if elapsed_ms < self.fade_delay_ms {
            LoaderPhase::Revealing
        } else if elapsed_ms < self.fade_delay_ms + self.fade_ms {
            LoaderPhase::Fading
        } else {
            LoaderPhase::Hidden
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_reaches_full_width_and_stops() {
        let mut reveal = WaveReveal::new(0.012);
        let mut frames = 0;
        while !reveal.is_complete() {
            reveal.advance();
            frames += 1;
        }
        assert_eq!(frames, 84);
        reveal.advance();
        assert_eq!(reveal.fraction(), 1.0);
        assert_eq!(reveal.max_x(1920.0), 1920.0);
    }

    #[test]
    fn pairs_are_mirrored_about_the_midline() {
        let (w, h) = (1200.0, 800.0);
        for pair in 0..TRACE_PAIRS {
            for x in [0.0, 150.0, 600.0, 1033.0] {
                let up = trace_y(pair, TraceSide::Upper, x, w, h);
                let down = trace_y(pair, TraceSide::Lower, x, w, h);
                assert!(((up + down) / 2.0 - h / 2.0).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn envelope_flattens_the_edges() {
        assert!(wave_shape(0.0).abs() < 0.02);
        assert!(wave_shape(1.0).abs() < 0.02);
        // At the edges only the pair offset remains.
        assert!((trace_y(0, TraceSide::Upper, 0.0, 1000.0, 600.0) - 292.0).abs() < 0.5);
        assert!((trace_y(8, TraceSide::Lower, 0.0, 1000.0, 600.0) - 372.0).abs() < 0.5);
    }

    #[test]
    fn outer_pairs_fade() {
        assert_eq!(TraceStyle::for_pair(0).css_color(), "rgba(235,235,235,0.95)");
        assert_eq!(TraceStyle::for_pair(8).css_color(), "rgba(235,235,235,0.71)");
        assert_eq!(TraceStyle::for_pair(3).line_width, LINE_WIDTH);
    }

    #[test]
    fn schedule_ignores_reveal_progress() {
        let schedule = LoaderSchedule { fade_delay_ms: 2500.0, fade_ms: 1000.0 };
        assert_eq!(schedule.phase_at(0.0), LoaderPhase::Revealing);
        assert_eq!(schedule.phase_at(2499.0), LoaderPhase::Revealing);
        assert_eq!(schedule.phase_at(2500.0), LoaderPhase::Fading);
        assert_eq!(schedule.phase_at(3499.0), LoaderPhase::Fading);
        assert_eq!(schedule.phase_at(3500.0), LoaderPhase::Hidden);
    }

    #[test]
    fn zero_width_canvas_draws_flat() {
        assert_eq!(trace_y(0, TraceSide::Upper, 0.0, 0.0, 100.0), 42.0);
    }
}
