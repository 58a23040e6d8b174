//! Pointer-to-time mapping and seek-overlay math.
//!
//! These functions are the spatial inverse of the rendered layout: the
//! gutter they account for is the one `resolve_dimensions` computed for
//! the displayed artifact, so a change there needs a matching change
//! here.

/// Fixed pixel span the renderer reserves across both legend margins.
/// This is the renderer's own convention and is NOT `2 * legend_gutter`;
/// kept verbatim for compatibility with the images it produces.
const LEGEND_SPAN_PX: f64 = 200.0;

/// Display lag compensation subtracted from observed playback positions
/// before drawing the overlay, in milliseconds.
const POSITION_LAG_MS: f64 = 400.0;

/// Map a pointer x-coordinate inside the panel to a playback time.
///
/// With the legend enabled the usable track spans
/// `[gutter, panel_width - gutter]`; a pointer left of the gutter clamps
/// to the track start and one right of the span clamps to the end.
pub fn pointer_to_time(
    pointer_x: f64,
    panel_width: f64,
    duration_ms: f64,
    legend_enabled: bool,
    legend_gutter: f64,
) -> f64 {
    if legend_enabled {
        if pointer_x >= legend_gutter && pointer_x <= panel_width - legend_gutter {
            let adjusted = panel_width - LEGEND_SPAN_PX;
            (pointer_x - legend_gutter) / adjusted * duration_ms
        } else if pointer_x < legend_gutter {
            0.0
        } else {
            duration_ms
        }
    } else {
        pointer_x / panel_width * duration_ms
    }
}

/// Fill width of the seek bar for the observed playback position.
///
/// `margin` is the legend gutter when the legend is enabled, zero
/// otherwise; the bar occupies `panel_width - 2 * margin` pixels at full
/// completion. The observed position lags the audible one, so it is
/// first reduced by a fixed compensation, clamped at the track start.
pub fn overlay_width(position_ms: f64, duration_ms: f64, panel_width: f64, margin: f64) -> f64 {
    if duration_ms <= 0.0 {
        return 0.0;
    }
    let compensated = (position_ms - POSITION_LAG_MS).max(0.0);
    (compensated / duration_ms) * (panel_width - 2.0 * margin)
}

/// Format a millisecond offset as `MM:SS`, or `HH:MM:SS` past one hour.
pub fn format_clock(ms: f64) -> String {
    let total_secs = (ms / 1000.0) as u64;
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;

    if ms > 3_600_000.0 {
        format!("{hours:02}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes:02}:{seconds:02}")
    }
}
