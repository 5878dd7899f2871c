use web_sys::CanvasRenderingContext2d;
use scrollstage_core::loader::{self, TraceSide, TraceStyle, WaveReveal, TRACE_PAIRS};

/// Draw the loader's mirrored trace pairs up to the current reveal edge.
pub fn draw_wave(
    ctx: &CanvasRenderingContext2d,
    canvas_width: f64,
    canvas_height: f64,
    reveal: &WaveReveal,
) {
    ctx.clear_rect(0.0, 0.0, canvas_width, canvas_height);

    if canvas_width <= 0.0 || canvas_height <= 0.0 {
        return;
    }

    let max_x = reveal.max_x(canvas_width).floor() as usize;

    for pair in 0..TRACE_PAIRS {
        let style = TraceStyle::for_pair(pair);
        let color = style.css_color();

        for side in [TraceSide::Upper, TraceSide::Lower] {
            ctx.begin_path();
            ctx.set_line_width(style.line_width);
            ctx.set_stroke_style_str(&color);

            for px in 0..=max_x {
                let x = px as f64;
                let y = loader::trace_y(pair, side, x, canvas_width, canvas_height);
                if px == 0 {
                    ctx.move_to(x, y);
                } else {
                    ctx.line_to(x, y);
                }
            }
            ctx.stroke();
        }
    }
}
