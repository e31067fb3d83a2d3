// File: crates/legend-core/tests/common/mod.rs
// Purpose: Shared chart fixture: candles, a volume histogram and one line series.

#![allow(dead_code)]

use legend_core::{Candle, Chart, Series, SeriesId, SeriesOptions, SeriesType};

pub struct Fixture {
    pub chart: Chart,
    pub candles: SeriesId,
    pub volume: SeriesId,
    pub line: SeriesId,
}

pub fn candles() -> Vec<Candle> {
    vec![
        Candle { t: 100, o: 100.0, h: 106.0, l: 99.0, c: 105.0 },
        Candle { t: 200, o: 100.0, h: 101.0, l: 94.0, c: 95.0 },
        Candle { t: 300, o: 0.0, h: 2.0, l: 0.0, c: 1.5 },
        Candle { t: 400, o: 50.0, h: 50.0, l: 50.0, c: 50.0 },
    ]
}

pub fn fixture() -> Fixture {
    let mut chart = Chart::new();
    let candles = chart.add_series(Series::from_candles(
        candles(),
        SeriesOptions::new("#26a69a").with_direction_colors("#26a69a", "#ef5350"),
    ));
    let volume = chart.add_series(Series::with_data(
        SeriesType::Histogram,
        vec![(100, 1_500_000.0), (200, 2_500.0), (400, 42.0)],
        SeriesOptions::new("rgba(38, 166, 154, 0.5)"),
    ));
    let line = chart.add_series(Series::with_data(
        SeriesType::Line,
        vec![(100, 3.14159), (200, 2.5), (300, 0.0)],
        SeriesOptions::new("rgba(10,20,30,0.4)").with_precision(3),
    ));
    chart.set_reference(candles);
    chart.set_volume(volume);
    Fixture { chart, candles, volume, line }
}
