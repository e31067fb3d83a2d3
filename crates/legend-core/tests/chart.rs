// File: crates/legend-core/tests/chart.rs
// Purpose: Validate the in-memory chart host: time axis, coordinate mapping and crosshair events.

mod common;

use legend_core::theme;
use legend_core::{ChartHost, DataPoint, SeriesOptions, SeriesType, TimeScale};

#[test]
fn time_axis_is_union_of_series_times() {
    let fx = common::fixture();
    assert_eq!(fx.chart.times(), &[100, 200, 300, 400]);
}

#[test]
fn coordinates_round_trip_through_logical() {
    let mut fx = common::fixture();
    fx.chart.time_scale = TimeScale::new(10.0, 0.0, 20.0);
    let x = fx.chart.time_to_coordinate(300).expect("on axis");
    assert_eq!(x, 50.0);
    assert_eq!(fx.chart.coordinate_to_logical(x), Some(2));
    assert_eq!(fx.chart.coordinate_to_logical(58.0), Some(2));
    assert!(fx.chart.time_to_coordinate(250).is_none());
}

#[test]
fn large_pixel_offsets_map_back_to_the_same_index() {
    let mut fx = common::fixture();
    // bars sit about a million pixels right of the origin, well inside f32's exact range
    fx.chart.time_scale = TimeScale::new(0.0, -1_000_000.0, 1.0);
    for (i, &t) in fx.chart.times().iter().enumerate() {
        let x = fx.chart.time_to_coordinate(t).expect("on axis");
        assert_eq!(fx.chart.coordinate_to_logical(x), Some(i as i64), "t={t}");
    }
}

#[test]
fn data_by_index_outside_axis_is_none() {
    let fx = common::fixture();
    assert!(fx.chart.data_by_index(fx.candles, -1).is_none());
    assert!(fx.chart.data_by_index(fx.candles, 4).is_none());
    assert_eq!(
        fx.chart.data_by_index(fx.volume, 3),
        Some(DataPoint::Value { t: 400, v: 42.0 })
    );
}

#[test]
fn crosshair_at_px_follows_pan() {
    let mut fx = common::fixture();
    fx.chart.time_scale = TimeScale::new(0.0, 0.0, 10.0);
    assert_eq!(fx.chart.crosshair_at_px(21.0).time, Some(300));
    fx.chart.time_scale.pan_px(-10.0);
    assert_eq!(fx.chart.crosshair_at_px(21.0).time, Some(400));
    assert_eq!(fx.chart.crosshair_at_px(35.0).time, None);
}

#[test]
fn crosshair_off_axis_behaves_like_leaving() {
    let fx = common::fixture();
    let event = fx.chart.crosshair_at(150);
    assert_eq!(event.time, None);
    assert!(event.series_data.is_empty());
}

#[test]
fn hidden_series_drop_out_of_events() {
    let mut fx = common::fixture();
    assert!(fx.chart.crosshair_at(100).series_data.contains_key(&fx.volume));
    fx.chart.set_series_visible(fx.volume, false);
    let event = fx.chart.crosshair_at(100);
    assert!(!event.series_data.contains_key(&fx.volume));
    assert!(event.series_data.contains_key(&fx.candles));
}

#[test]
fn themed_options_pick_series_colors() {
    let dark = theme::find("DARK");
    assert_eq!(SeriesOptions::themed(SeriesType::Histogram, &dark).color, dark.histogram);
    assert_eq!(SeriesOptions::themed(SeriesType::Line, &dark).color, dark.line_stroke);
    let light = theme::find("light");
    assert_eq!(SeriesOptions::themed(SeriesType::Candlestick, &light).down_color, light.candle_down);
    assert_eq!(theme::find("nope"), dark);
    assert_eq!(theme::presets().len(), 3);
}

#[test]
fn reference_and_volume_are_reported() {
    let fx = common::fixture();
    assert_eq!(fx.chart.reference_series(), Some(fx.candles));
    assert_eq!(fx.chart.volume_series(), Some(fx.volume));
    assert_eq!(fx.chart.precision(), 2);
    assert_eq!(fx.chart.series_type(fx.volume), Some(SeriesType::Histogram));
}
