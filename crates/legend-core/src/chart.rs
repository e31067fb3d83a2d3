// File: crates/legend-core/src/chart.rs
// Summary: In-memory chart that owns series and a time axis, implements `ChartHost` and produces
// crosshair events the way an interactive chart would.

use crate::host::ChartHost;
use crate::readout::PointerEvent;
use crate::scale::{LogicalIndex, TimeScale};
use crate::series::{DataPoint, Series, SeriesId, SeriesOptions, SeriesType, Time};

pub struct Chart {
    series: Vec<(SeriesId, Series)>,
    times: Vec<Time>,
    pub time_scale: TimeScale,
    reference: Option<SeriesId>,
    volume: Option<SeriesId>,
    pub precision: usize,
    next_id: u32,
}

impl Default for Chart {
    fn default() -> Self {
        Self::new()
    }
}

impl Chart {
    pub fn new() -> Self {
        Self {
            series: Vec::new(),
            times: Vec::new(),
            time_scale: TimeScale::default(),
            reference: None,
            volume: None,
            precision: 2,
            next_id: 1,
        }
    }

    /// Add a series and return its handle. The time axis becomes the union of all series times.
    pub fn add_series(&mut self, series: Series) -> SeriesId {
        let id = SeriesId(self.next_id);
        self.next_id += 1;
        self.times.extend(series.times());
        self.times.sort_unstable();
        self.times.dedup();
        self.series.push((id, series));
        id
    }

    /// Make `id` the reference series (first candle series by convention).
    pub fn set_reference(&mut self, id: SeriesId) {
        self.reference = Some(id);
    }

    pub fn set_volume(&mut self, id: SeriesId) {
        self.volume = Some(id);
    }

    pub fn series(&self, id: SeriesId) -> Option<&Series> {
        self.series.iter().find(|(sid, _)| *sid == id).map(|(_, s)| s)
    }

    fn series_mut(&mut self, id: SeriesId) -> Option<&mut Series> {
        self.series.iter_mut().find(|(sid, _)| *sid == id).map(|(_, s)| s)
    }

    /// Time axis in ascending order.
    pub fn times(&self) -> &[Time] {
        &self.times
    }

    /// Crosshair event at `time`: every visible series with a point stamped at that time.
    /// A time off the axis behaves like the pointer leaving the plot.
    pub fn crosshair_at(&self, time: Time) -> PointerEvent {
        if self.times.binary_search(&time).is_err() {
            return PointerEvent::left();
        }
        let mut event = PointerEvent::at(time);
        for (id, s) in &self.series {
            if !s.options.visible {
                continue;
            }
            if let Some(p) = s.point_at(time) {
                event.series_data.insert(*id, p);
            }
        }
        event
    }

    /// Crosshair event for a pointer at pixel `px` on the time scale.
    pub fn crosshair_at_px(&self, px: f32) -> PointerEvent {
        match self.time_at_index(self.time_scale.logical_at(px)) {
            Some(t) => self.crosshair_at(t),
            None => PointerEvent::left(),
        }
    }

    fn time_at_index(&self, index: Option<LogicalIndex>) -> Option<Time> {
        let i = usize::try_from(index?).ok()?;
        self.times.get(i).copied()
    }
}

impl ChartHost for Chart {
    fn series_options(&self, id: SeriesId) -> Option<&SeriesOptions> {
        self.series(id).map(|s| &s.options)
    }

    fn series_type(&self, id: SeriesId) -> Option<SeriesType> {
        self.series(id).map(|s| s.series_type)
    }

    fn set_series_visible(&mut self, id: SeriesId, visible: bool) {
        if let Some(s) = self.series_mut(id) {
            s.options.visible = visible;
        }
    }

    // Pixels are f32: indices stay exact while the pixel offset is below 2^24 (about 16.7M
    // pixels), past that the round trip back to a logical index can land one bar off.
    fn time_to_coordinate(&self, time: Time) -> Option<f32> {
        let i = self.times.binary_search(&time).ok()?;
        Some(self.time_scale.to_px(i as f64))
    }

    fn coordinate_to_logical(&self, x: f32) -> Option<LogicalIndex> {
        self.time_scale.logical_at(x)
    }

    fn data_by_index(&self, id: SeriesId, index: LogicalIndex) -> Option<DataPoint> {
        let t = self.time_at_index(Some(index))?;
        self.series(id)?.point_at(t)
    }

    fn reference_series(&self) -> Option<SeriesId> {
        self.reference
    }

    fn volume_series(&self) -> Option<SeriesId> {
        self.volume
    }

    fn precision(&self) -> usize {
        self.precision
    }
}
