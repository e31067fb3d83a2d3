// File: crates/legend-core/src/lib.rs
// Summary: Core library entry point; exports the legend state, readout engine and chart host API.

pub mod error;
pub mod series;
pub mod scale;
pub mod theme;
pub mod host;
pub mod chart;
pub mod color;
pub mod format;
pub mod registry;
pub mod config;
pub mod readout;
pub mod legend;

pub use error::{LegendError, Result};
pub use series::{Candle, DataPoint, Series, SeriesId, SeriesOptions, SeriesType, Time};
pub use scale::{LogicalIndex, TimeScale};
pub use theme::Theme;
pub use host::ChartHost;
pub use chart::Chart;
pub use color::solid_color;
pub use format::{legend_item_format, percent_format, shorthand_format};
pub use registry::{TrackedSeries, VisibilityIcon, VisibilityRegistry};
pub use config::{LegendConfig, TextStyle};
pub use readout::{
    compute_readout, CandleReadout, OhlcReadout, PointerEvent, Readout, Resolution, RowText, RowUpdate,
    StyledText,
};
pub use legend::{Legend, LegendFeatureState, LegendFrame, RenderModel};
