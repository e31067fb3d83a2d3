// File: crates/legend-core/src/readout.rs
// Summary: Readout engine. Turns one crosshair event into the OHLC/percent/volume block and the
// per-series row texts, recomputing from scratch on every call.
// Notes:
// - Missing data is never an error: the block goes blank and rows keep their previous text.
// - Cost is linear in the number of tracked series; nothing scans series history.

use std::collections::HashMap;
use std::fmt;

use crate::format::{legend_item_format, percent_format, shorthand_format, DEFAULT_PRECISION};
use crate::host::ChartHost;
use crate::legend::LegendFeatureState;
use crate::registry::{TrackedSeries, VisibilityIcon, VisibilityRegistry};
use crate::scale::LogicalIndex;
use crate::series::{Candle, DataPoint, SeriesId, Time};

/// Marker drawn before a series name in its row.
pub const ROW_MARKER: char = '▨';
pub const FIELD_SEPARATOR: &str = " | ";
pub const VOLUME_LABEL: &str = "V";

/// Crosshair notification from the chart.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointerEvent {
    /// Time under the pointer; `None` once the pointer leaves the plot.
    pub time: Option<Time>,
    /// Point of each reporting series at `time`. Series without data are absent.
    pub series_data: HashMap<SeriesId, DataPoint>,
}

impl PointerEvent {
    pub fn left() -> Self {
        Self::default()
    }

    pub fn at(time: Time) -> Self {
        Self { time: Some(time), series_data: HashMap::new() }
    }

    pub fn with_point(mut self, id: SeriesId, point: DataPoint) -> Self {
        self.series_data.insert(id, point);
        self
    }
}

/// How series points are resolved for an event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Resolution {
    /// Read points straight from the event's series data.
    #[default]
    SeriesData,
    /// Map time -> coordinate -> logical index and fetch each point by index.
    Logical,
}

/// Text with an optional color.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyledText {
    pub text: String,
    pub color: Option<String>,
}

impl StyledText {
    pub fn plain(text: impl Into<String>) -> Self {
        Self { text: text.into(), color: None }
    }

    pub fn colored(text: impl Into<String>, color: impl Into<String>) -> Self {
        Self { text: text.into(), color: Some(color.into()) }
    }

    /// HTML form for hosts that render markup: colored text becomes a span.
    pub fn to_markup(&self) -> String {
        match &self.color {
            Some(c) => format!("<span style=\"color: {c};\">{}</span>", self.text),
            None => self.text.clone(),
        }
    }
}

/// OHLC, percent and volume parts of the head block. Absent parts are `None`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OhlcReadout {
    pub ohlc: Option<String>,
    pub percent: Option<StyledText>,
    pub volume: Option<String>,
}

impl OhlcReadout {
    pub fn is_empty(&self) -> bool {
        self.ohlc.is_none() && self.percent.is_none() && self.volume.is_none()
    }

    /// Plain text: `O … | H … | L … | C … | +1.00 %`, volume on its own line.
    pub fn text(&self) -> String {
        self.join(|p| p.text.clone())
    }

    pub fn to_markup(&self) -> String {
        self.join(StyledText::to_markup).replace('\n', "<br>")
    }

    fn join(&self, percent: impl Fn(&StyledText) -> String) -> String {
        let mut parts: Vec<String> = Vec::with_capacity(2);
        if let Some(ohlc) = &self.ohlc {
            parts.push(ohlc.clone());
        }
        if let Some(p) = &self.percent {
            parts.push(percent(p));
        }
        let mut out = parts.join(FIELD_SEPARATOR);
        if let Some(v) = &self.volume {
            out.push('\n');
            out.push_str(VOLUME_LABEL);
            out.push(' ');
            out.push_str(v);
        }
        out
    }
}

/// State of the head block after an event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CandleReadout {
    /// Pointer left the plot: blank, transparent block.
    Cleared,
    Shown(OhlcReadout),
}

/// Row text `"▨ name : price"` in the row's solid color.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowText {
    pub marker: char,
    pub name: String,
    pub price: String,
    pub color: String,
}

impl fmt::Display for RowText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} : {}", self.marker, self.name, self.price)
    }
}

/// What to do with one legend row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowUpdate {
    pub handle: SeriesId,
    pub shown: bool,
    pub icon: VisibilityIcon,
    /// New text, or `None` to keep whatever the row shows now.
    pub text: Option<RowText>,
}

impl RowUpdate {
    fn keep(entry: &TrackedSeries, shown: bool) -> Self {
        Self { handle: entry.handle(), shown, icon: entry.icon(), text: None }
    }
}

/// Everything one event changes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Readout {
    pub candle: CandleReadout,
    pub rows: Vec<RowUpdate>,
}

/// Compute the readout for `event`.
pub fn compute_readout<H: ChartHost + ?Sized>(
    features: &LegendFeatureState,
    registry: &VisibilityRegistry,
    host: &H,
    event: &PointerEvent,
    resolution: Resolution,
) -> Readout {
    let Some(time) = event.time else {
        log::trace!("pointer left plot; clearing head block");
        let rows = registry
            .entries()
            .iter()
            .map(|e| RowUpdate::keep(e, features.lines_enabled))
            .collect();
        return Readout { candle: CandleReadout::Cleared, rows };
    };

    let logical = match resolution {
        Resolution::Logical => host
            .time_to_coordinate(time)
            .and_then(|x| host.coordinate_to_logical(x)),
        Resolution::SeriesData => None,
    };
    let resolver = Resolver { host, event, registry, resolution, logical };
    log::trace!("readout at t={time} logical={logical:?} rows={}", registry.len());

    let primary = host
        .reference_series()
        .and_then(|id| resolver.head_point(id))
        .and_then(|p| p.as_candle().copied());
    let block = match primary {
        Some(candle) => head_block(features, host, &resolver, &candle),
        None => OhlcReadout::default(),
    };

    let rows = registry
        .entries()
        .iter()
        .map(|e| row_update(features, host, &resolver, e))
        .collect();

    Readout { candle: CandleReadout::Shown(block), rows }
}

/// Resolves a series' point for one event, by logical index when one was computed.
struct Resolver<'a, H: ?Sized> {
    host: &'a H,
    event: &'a PointerEvent,
    registry: &'a VisibilityRegistry,
    resolution: Resolution,
    logical: Option<LogicalIndex>,
}

impl<H: ChartHost + ?Sized> Resolver<'_, H> {
    /// Point of the reference or volume series. A tracked series that is hidden is absent, and
    /// so is every point when `Logical` resolution could not derive an index.
    fn head_point(&self, id: SeriesId) -> Option<DataPoint> {
        if self.registry.get(id).is_some_and(|e| !e.is_visible()) {
            return None;
        }
        match self.resolution {
            Resolution::Logical => self.host.data_by_index(id, self.logical?),
            Resolution::SeriesData => self.event.series_data.get(&id).copied(),
        }
    }

    /// Point of a legend row. Rows fall back to the event when no index was derived.
    fn row_point(&self, id: SeriesId) -> Option<DataPoint> {
        match self.logical {
            Some(ix) => self.host.data_by_index(id, ix),
            None => self.event.series_data.get(&id).copied(),
        }
    }
}

fn head_block<H: ChartHost + ?Sized>(
    features: &LegendFeatureState,
    host: &H,
    resolver: &Resolver<'_, H>,
    candle: &Candle,
) -> OhlcReadout {
    let precision = host.precision();
    let ohlc = features.ohlc_enabled.then(|| {
        [("O", candle.o), ("H", candle.h), ("L", candle.l), ("C", candle.c)]
            .iter()
            .map(|(label, v)| format!("{label} {}", legend_item_format(*v, precision)))
            .collect::<Vec<_>>()
            .join(FIELD_SEPARATOR)
    });

    let percent = if features.percent_enabled {
        percent_move(features, host, candle)
    } else {
        None
    };

    let volume = if features.ohlc_enabled {
        host.volume_series()
            .and_then(|id| resolver.head_point(id))
            .and_then(|p| p.value())
            .map(shorthand_format)
    } else {
        None
    };

    OhlcReadout { ohlc, percent, volume }
}

fn percent_move<H: ChartHost + ?Sized>(
    features: &LegendFeatureState,
    host: &H,
    candle: &Candle,
) -> Option<StyledText> {
    let Some(pct) = candle.change_pct() else {
        log::warn!("percent move undefined at t={} (open={}); omitted", candle.t, candle.o);
        return None;
    };
    let text = percent_format(pct);
    if !features.color_based_on_candle {
        return Some(StyledText::plain(text));
    }
    let options = host.reference_series().and_then(|id| host.series_options(id));
    match options {
        Some(o) => {
            let color = if pct > 0.0 { &o.up_color } else { &o.down_color };
            Some(StyledText::colored(text, color.clone()))
        }
        None => Some(StyledText::plain(text)),
    }
}

fn row_update<H: ChartHost + ?Sized>(
    features: &LegendFeatureState,
    host: &H,
    resolver: &Resolver<'_, H>,
    entry: &TrackedSeries,
) -> RowUpdate {
    if !features.lines_enabled {
        return RowUpdate::keep(entry, false);
    }
    if !entry.is_visible() {
        // hidden series do not contribute values; the row stays so it can be toggled back
        return RowUpdate::keep(entry, true);
    }
    let Some(value) = resolver.row_point(entry.handle()).and_then(|p| p.value()) else {
        return RowUpdate::keep(entry, true);
    };

    let magnitude = host
        .series_type(entry.handle())
        .is_some_and(|t| t.is_magnitude());
    let price = if magnitude {
        shorthand_format(value)
    } else {
        let precision = host
            .series_options(entry.handle())
            .map_or(DEFAULT_PRECISION, |o| o.precision);
        legend_item_format(value, precision)
    };

    RowUpdate {
        handle: entry.handle(),
        shown: true,
        icon: entry.icon(),
        text: Some(RowText {
            marker: ROW_MARKER,
            name: entry.name().to_string(),
            price,
            color: entry.display_color().to_string(),
        }),
    }
}
