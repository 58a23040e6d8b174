use super::layout::*;
use super::seek::*;
use super::state::PanelState;

#[test]
fn height_snaps_to_the_nearest_power_of_two() {
    // 100 is 28 away from 128 and 36 away from 64.
    assert_eq!(resolve_dimensions(400, 100).height, 128);
    assert_eq!(resolve_dimensions(400, 96).height, 128);
    assert_eq!(resolve_dimensions(400, 95).height, 64);
    assert_eq!(resolve_dimensions(400, 300).height, 256);
}

#[test]
fn exact_powers_of_two_are_not_doubled() {
    assert_eq!(resolve_dimensions(400, 128).height, 128);
    assert_eq!(resolve_dimensions(400, 256).height, 256);
    assert_eq!(resolve_dimensions(400, 1).height, 1);
    assert_eq!(resolve_dimensions(400, 2).height, 2);
}

#[test]
fn ties_between_powers_of_two_go_up() {
    // 3 is equidistant from 2 and 4.
    assert_eq!(resolve_dimensions(400, 3).height, 4);
    assert_eq!(resolve_dimensions(400, 96).height, 128);
}

#[test]
fn width_rounds_to_the_nearest_ten_half_up() {
    assert_eq!(resolve_dimensions(147, 128).width, 150);
    assert_eq!(resolve_dimensions(145, 128).width, 150);
    assert_eq!(resolve_dimensions(144, 128).width, 140);
    assert_eq!(resolve_dimensions(150, 128).width, 150);
}

#[test]
fn legend_gutter_follows_the_renderer_proportion() {
    // 141 * 150 / 432 = 48.95..., truncated.
    assert_eq!(resolve_dimensions(150, 128).legend_gutter, 48);
    // 141 * 900 / 1182 = 107.36...
    assert_eq!(resolve_dimensions(900, 300).legend_gutter, 107);
}

#[test]
fn pointer_maps_linearly_without_a_legend() {
    let t = pointer_to_time(100.0, 400.0, 200_000.0, false, 0.0);
    assert_eq!(t, 50_000.0);
}

#[test]
fn pointer_clamps_outside_the_legend_gutter() {
    let duration = 200_000.0;
    assert_eq!(pointer_to_time(40.0, 400.0, duration, true, 48.0), 0.0);
    assert_eq!(pointer_to_time(380.0, 400.0, duration, true, 48.0), duration);
}

#[test]
fn pointer_inside_the_legend_span_uses_the_fixed_margin_width() {
    // Inside the span the effective width is panel_width - 200, measured
    // from the gutter edge.
    let t = pointer_to_time(148.0, 400.0, 200_000.0, true, 48.0);
    assert_eq!(t, (100.0 / 200.0) * 200_000.0);
}

#[test]
fn overlay_width_scales_with_compensated_position() {
    // Position well into the track: (60000 - 400) / 200000 of 400px.
    let w = overlay_width(60_000.0, 200_000.0, 400.0, 0.0);
    assert!((w - 119.2).abs() < 1e-9);

    // With a margin the bar spans panel_width - 2 * margin.
    let w = overlay_width(100_000.0, 200_000.0, 400.0, 48.0);
    assert!((w - (99_600.0 / 200_000.0) * 304.0).abs() < 1e-9);
}

#[test]
fn overlay_compensation_clamps_at_the_track_start() {
    assert_eq!(overlay_width(200.0, 200_000.0, 400.0, 0.0), 0.0);
    assert_eq!(overlay_width(0.0, 200_000.0, 400.0, 0.0), 0.0);
}

#[test]
fn overlay_is_empty_for_unknown_durations() {
    assert_eq!(overlay_width(5_000.0, 0.0, 400.0, 0.0), 0.0);
}

#[test]
fn clock_formats_minutes_and_hours() {
    assert_eq!(format_clock(0.0), "00:00");
    assert_eq!(format_clock(65_000.0), "01:05");
    assert_eq!(format_clock(3_599_000.0), "59:59");
    assert_eq!(format_clock(3_661_000.0), "01:01:01");
}

#[test]
fn seek_margin_is_the_gutter_only_with_a_legend() {
    let mut state = PanelState {
        legend_gutter: 48,
        legend_enabled: true,
        ..PanelState::default()
    };
    assert_eq!(state.seek_margin(), 48);

    state.legend_enabled = false;
    assert_eq!(state.seek_margin(), 0);
}
