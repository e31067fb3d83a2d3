// File: crates/legend-core/src/legend.rs
// Summary: Legend instance: feature flags, visibility registry and frame state, with the render
// entry point a chart adapter calls on every crosshair move.

use crate::config::{LegendConfig, TextStyle};
use crate::error::{LegendError, Result};
use crate::host::ChartHost;
use crate::readout::{compute_readout, CandleReadout, PointerEvent, Resolution, RowUpdate};
use crate::registry::{TrackedSeries, VisibilityRegistry};
use crate::series::SeriesId;

pub const GLYPH_EXPANDED: char = '−';
pub const GLYPH_COLLAPSED: char = '+';

/// Feature switches of one legend. Everything starts off.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LegendFeatureState {
    pub ohlc_enabled: bool,
    pub percent_enabled: bool,
    pub lines_enabled: bool,
    pub color_based_on_candle: bool,
    pub collapsed: bool,
}

/// Frame-level presentation state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LegendFrame {
    pub visible: bool,
    pub detail_visible: bool,
    pub collapse_glyph: char,
    pub header: String,
    pub style: TextStyle,
}

/// Output of one render: frame state, head block and row updates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderModel {
    pub frame: LegendFrame,
    pub candle: CandleReadout,
    pub rows: Vec<RowUpdate>,
}

#[derive(Clone, Debug, Default)]
pub struct Legend {
    features: LegendFeatureState,
    registry: VisibilityRegistry,
    visible: bool,
    header: String,
    style: TextStyle,
}

impl Legend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &LegendConfig) -> Result<Self> {
        let mut legend = Self::new();
        legend.configure(config)?;
        Ok(legend)
    }

    /// Apply user options. Hiding the legend switches OHLC, percent and lines off.
    pub fn configure(&mut self, config: &LegendConfig) -> Result<()> {
        config.validate()?;
        if !config.visible {
            self.visible = false;
            self.features.ohlc_enabled = false;
            self.features.percent_enabled = false;
            self.features.lines_enabled = false;
            log::debug!("legend hidden");
            return Ok(());
        }
        self.visible = true;
        self.features.ohlc_enabled = config.ohlc;
        self.features.percent_enabled = config.percent;
        self.features.lines_enabled = config.lines;
        self.features.color_based_on_candle = config.color_based_on_candle;
        self.header = config.text.clone();
        self.style = config.text_style();
        log::debug!("legend configured: {:?}", self.features);
        Ok(())
    }

    pub fn features(&self) -> &LegendFeatureState {
        &self.features
    }

    pub fn registry(&self) -> &VisibilityRegistry {
        &self.registry
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn toggle_ohlc(&mut self) -> bool {
        self.features.ohlc_enabled = !self.features.ohlc_enabled;
        self.features.ohlc_enabled
    }

    pub fn toggle_percent(&mut self) -> bool {
        self.features.percent_enabled = !self.features.percent_enabled;
        self.features.percent_enabled
    }

    pub fn toggle_lines(&mut self) -> bool {
        self.features.lines_enabled = !self.features.lines_enabled;
        self.features.lines_enabled
    }

    pub fn toggle_color_based_on_candle(&mut self) -> bool {
        self.features.color_based_on_candle = !self.features.color_based_on_candle;
        self.features.color_based_on_candle
    }

    /// Collapse or expand the detail area. Readout values are unaffected.
    pub fn toggle_collapse(&mut self) -> bool {
        self.features.collapsed = !self.features.collapsed;
        log::debug!("legend collapsed={}", self.features.collapsed);
        self.features.collapsed
    }

    /// Track a chart series under `name`, taking its color from the chart.
    pub fn register<H: ChartHost + ?Sized>(
        &mut self,
        name: impl Into<String>,
        handle: SeriesId,
        host: &H,
    ) -> Result<&TrackedSeries> {
        let options = host
            .series_options(handle)
            .ok_or(LegendError::UnknownSeries(handle))?;
        self.registry.register(name, handle, &options.color)
    }

    pub fn toggle_series<H: ChartHost + ?Sized>(&mut self, handle: SeriesId, host: &mut H) -> Result<bool> {
        self.registry.toggle_one(handle, host)
    }

    pub fn toggle_all<H: ChartHost + ?Sized>(&mut self, host: &mut H) -> bool {
        self.registry.toggle_all(host)
    }

    pub fn frame(&self) -> LegendFrame {
        let collapsed = self.features.collapsed;
        LegendFrame {
            visible: self.visible,
            detail_visible: !collapsed,
            collapse_glyph: if collapsed { GLYPH_COLLAPSED } else { GLYPH_EXPANDED },
            header: self.header.clone(),
            style: self.style.clone(),
        }
    }

    /// Crosshair-move handler: compute everything the presentation layer must apply.
    pub fn render<H: ChartHost + ?Sized>(
        &self,
        host: &H,
        event: &PointerEvent,
        resolution: Resolution,
    ) -> RenderModel {
        let readout = compute_readout(&self.features, &self.registry, host, event, resolution);
        RenderModel { frame: self.frame(), candle: readout.candle, rows: readout.rows }
    }
}
