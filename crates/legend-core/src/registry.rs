// File: crates/legend-core/src/registry.rs
// Summary: Visibility registry; the single source of truth for which tracked series are shown and
// which solid color their legend row uses.

use crate::color::solid_color;
use crate::error::{LegendError, Result};
use crate::host::ChartHost;
use crate::series::SeriesId;

/// Eye icon drawn next to a legend row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VisibilityIcon {
    Open,
    Closed,
}

impl VisibilityIcon {
    fn for_visible(visible: bool) -> Self {
        if visible { VisibilityIcon::Open } else { VisibilityIcon::Closed }
    }
}

/// One series registered with the legend.
#[derive(Clone, Debug, PartialEq)]
pub struct TrackedSeries {
    name: String,
    handle: SeriesId,
    visible: bool,
    display_color: String,
}

impl TrackedSeries {
    pub fn name(&self) -> &str { &self.name }
    pub fn handle(&self) -> SeriesId { self.handle }
    pub fn is_visible(&self) -> bool { self.visible }
    pub fn display_color(&self) -> &str { &self.display_color }
    pub fn icon(&self) -> VisibilityIcon { VisibilityIcon::for_visible(self.visible) }

    fn set_visible<H: ChartHost + ?Sized>(&mut self, visible: bool, host: &mut H) {
        self.visible = visible;
        host.set_series_visible(self.handle, visible);
    }
}

/// Tracked series in registration order plus the bulk "all visible" flag.
#[derive(Clone, Debug)]
pub struct VisibilityRegistry {
    entries: Vec<TrackedSeries>,
    all_visible: bool,
}

impl Default for VisibilityRegistry {
    fn default() -> Self {
        Self { entries: Vec::new(), all_visible: true }
    }
}

impl VisibilityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track `handle` under `name`. The row color is `color` made fully opaque.
    pub fn register(&mut self, name: impl Into<String>, handle: SeriesId, color: &str) -> Result<&TrackedSeries> {
        if self.get(handle).is_some() {
            log::warn!("rejecting duplicate legend registration of series {handle}");
            return Err(LegendError::DuplicateSeries(handle));
        }
        let entry = TrackedSeries {
            name: name.into(),
            handle,
            visible: true,
            display_color: solid_color(color),
        };
        log::debug!("legend row {:?} tracks series {handle} in {}", entry.name, entry.display_color);
        self.entries.push(entry);
        Ok(&self.entries[self.entries.len() - 1])
    }

    /// Flip one series and push the new visibility to the chart. Returns the new flag.
    pub fn toggle_one<H: ChartHost + ?Sized>(&mut self, handle: SeriesId, host: &mut H) -> Result<bool> {
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.handle == handle)
            .ok_or(LegendError::UnknownSeries(handle))?;
        let visible = !entry.visible;
        entry.set_visible(visible, host);
        log::debug!("series {handle} visible={visible}");
        Ok(visible)
    }

    /// Flip the bulk flag and force every series to it. Returns the new flag.
    pub fn toggle_all<H: ChartHost + ?Sized>(&mut self, host: &mut H) -> bool {
        self.all_visible = !self.all_visible;
        for entry in &mut self.entries {
            entry.set_visible(self.all_visible, host);
        }
        log::debug!("all {} legend series visible={}", self.entries.len(), self.all_visible);
        self.all_visible
    }

    /// Entries in registration order.
    pub fn entries(&self) -> &[TrackedSeries] {
        &self.entries
    }

    pub fn get(&self, handle: SeriesId) -> Option<&TrackedSeries> {
        self.entries.iter().find(|e| e.handle == handle)
    }

    pub fn all_visible(&self) -> bool { self.all_visible }
    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
}
