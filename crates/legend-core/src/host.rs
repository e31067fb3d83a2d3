// File: crates/legend-core/src/host.rs
// Summary: The narrow interface the legend consumes from the chart that owns series, time axis and
// coordinate mapping.

use crate::scale::LogicalIndex;
use crate::series::{DataPoint, SeriesId, SeriesOptions, SeriesType, Time};

/// Read access to chart series plus the one mutation the legend performs (visibility).
pub trait ChartHost {
    fn series_options(&self, id: SeriesId) -> Option<&SeriesOptions>;
    fn series_type(&self, id: SeriesId) -> Option<SeriesType>;
    /// Show or hide a series; hidden series drop out of crosshair data.
    fn set_series_visible(&mut self, id: SeriesId, visible: bool);

    /// Pixel x of the bar at `time`, if the time is on the axis.
    fn time_to_coordinate(&self, time: Time) -> Option<f32>;
    fn coordinate_to_logical(&self, x: f32) -> Option<LogicalIndex>;
    fn data_by_index(&self, id: SeriesId, index: LogicalIndex) -> Option<DataPoint>;

    /// Series whose OHLC and percent move head the legend.
    fn reference_series(&self) -> Option<SeriesId>;
    fn volume_series(&self) -> Option<SeriesId>;
    /// Decimal places for the OHLC readout.
    fn precision(&self) -> usize;
}
