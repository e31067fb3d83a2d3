// File: crates/legend-core/src/series.rs
// Summary: Series model for line, candlestick, bar, histogram, and baseline data, plus the
// per-series options a legend reads (color, precision, direction colors).

use std::fmt;

use crate::theme::Theme;

/// Time coordinate on the chart's time axis (epoch seconds or bar index).
pub type Time = i64;

/// Opaque handle to a series owned by the chart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SeriesId(pub u32);

impl fmt::Display for SeriesId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesType {
    Line,
    Candlestick,
    Bar,         // OHLC bar (no filled body)
    Histogram,   // volume-style bars, read out in K/M shorthand
    Baseline,
}

impl SeriesType {
    /// Magnitude-style series whose values read better as `1.5M` than as prices.
    pub fn is_magnitude(&self) -> bool {
        matches!(self, SeriesType::Histogram)
    }

    pub fn is_ohlc(&self) -> bool {
        matches!(self, SeriesType::Candlestick | SeriesType::Bar)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Candle {
    pub t: Time,
    pub o: f64,
    pub h: f64,
    pub l: f64,
    pub c: f64,
}

impl Candle {
    /// Try to construct a candle enforcing OHLC invariants:
    /// l <= min(o,c) and h >= max(o,c), and l <= h.
    pub fn try_new(t: Time, o: f64, h: f64, l: f64, c: f64) -> Result<Self, &'static str> {
        let lo = o.min(c);
        let hi = o.max(c);
        if l > lo { return Err("low above min(open,close)"); }
        if h < hi { return Err("high below max(open,close)"); }
        if l > h { return Err("low above high"); }
        Ok(Self { t, o, h, l, c })
    }

    /// Percent move from open to close. `None` when open is zero or the result is not finite.
    pub fn change_pct(&self) -> Option<f64> {
        if self.o == 0.0 {
            return None;
        }
        let pct = (self.c - self.o) / self.o * 100.0;
        pct.is_finite().then_some(pct)
    }
}

/// A single data point as the chart reports it under the crosshair.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DataPoint {
    Ohlc(Candle),
    Value { t: Time, v: f64 },
}

impl DataPoint {
    pub fn as_candle(&self) -> Option<&Candle> {
        match self {
            DataPoint::Ohlc(c) => Some(c),
            DataPoint::Value { .. } => None,
        }
    }

    /// Single value of a line/histogram point; OHLC points have none.
    pub fn value(&self) -> Option<f64> {
        match self {
            DataPoint::Value { v, .. } => Some(*v),
            DataPoint::Ohlc(_) => None,
        }
    }
}

/// Options the legend reads from a series.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesOptions {
    /// CSS color string, e.g. `#2962ff` or `rgba(41, 98, 255, 0.4)`.
    pub color: String,
    /// Decimal places used when the value is printed as a price.
    pub precision: usize,
    pub up_color: String,
    pub down_color: String,
    pub visible: bool,
}

impl SeriesOptions {
    pub fn new(color: impl Into<String>) -> Self {
        let theme = Theme::dark();
        Self {
            color: color.into(),
            precision: 2,
            up_color: theme.candle_up.to_string(),
            down_color: theme.candle_down.to_string(),
            visible: true,
        }
    }

    /// Defaults for a series of `series_type` drawn with `theme`.
    pub fn themed(series_type: SeriesType, theme: &Theme) -> Self {
        let color = match series_type {
            SeriesType::Line | SeriesType::Baseline => theme.line_stroke,
            SeriesType::Histogram => theme.histogram,
            SeriesType::Candlestick | SeriesType::Bar => theme.candle_up,
        };
        Self {
            color: color.to_string(),
            precision: 2,
            up_color: theme.candle_up.to_string(),
            down_color: theme.candle_down.to_string(),
            visible: true,
        }
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    pub fn with_direction_colors(mut self, up: impl Into<String>, down: impl Into<String>) -> Self {
        self.up_color = up.into();
        self.down_color = down.into();
        self
    }
}

#[derive(Clone, Debug)]
pub struct Series {
    pub series_type: SeriesType,
    pub options: SeriesOptions,
    pub data_xy: Vec<(Time, f64)>,    // used by Line/Histogram/Baseline
    pub data_ohlc: Vec<Candle>,       // used by Candlestick/Bar
}

impl Series {
    pub fn with_data(series_type: SeriesType, mut data: Vec<(Time, f64)>, options: SeriesOptions) -> Self {
        data.sort_by_key(|&(t, _)| t);
        Self { series_type, options, data_xy: data, data_ohlc: Vec::new() }
    }

    pub fn from_candles(candles: Vec<Candle>, options: SeriesOptions) -> Self {
        Self::from_candles_as(SeriesType::Candlestick, candles, options)
    }

    pub fn from_candles_as(series_type: SeriesType, mut candles: Vec<Candle>, options: SeriesOptions) -> Self {
        candles.sort_by_key(|c| c.t);
        Self { series_type, options, data_xy: Vec::new(), data_ohlc: candles }
    }

    /// Point stamped exactly at `t`, if any. Data is kept sorted by time.
    pub fn point_at(&self, t: Time) -> Option<DataPoint> {
        if self.series_type.is_ohlc() {
            let i = self.data_ohlc.binary_search_by_key(&t, |c| c.t).ok()?;
            Some(DataPoint::Ohlc(self.data_ohlc[i]))
        } else {
            let i = self.data_xy.binary_search_by_key(&t, |&(x, _)| x).ok()?;
            let (t, v) = self.data_xy[i];
            Some(DataPoint::Value { t, v })
        }
    }

    /// Every time stamp this series has data for, in order.
    pub fn times(&self) -> Vec<Time> {
        if self.series_type.is_ohlc() {
            self.data_ohlc.iter().map(|c| c.t).collect()
        } else {
            self.data_xy.iter().map(|&(t, _)| t).collect()
        }
    }
}
