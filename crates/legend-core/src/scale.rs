// File: crates/legend-core/src/scale.rs
// Summary: Horizontal time scale mapping logical bar indices to pixels and back.

/// Integer position along the time axis (bar index).
pub type LogicalIndex = i64;

/// Horizontal time scale controlled via logical start and bar spacing (px per logical).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeScale {
    pub left_px: f32,
    pub start_logical: f64,
    pub bar_spacing: f32,
}

impl Default for TimeScale {
    fn default() -> Self {
        Self::new(0.0, 0.0, 6.0)
    }
}

impl TimeScale {
    pub fn new(left_px: f32, start_logical: f64, bar_spacing: f32) -> Self {
        Self { left_px, start_logical, bar_spacing: bar_spacing.max(0.01) }
    }
    #[inline]
    pub fn to_px(&self, x: f64) -> f32 {
        self.left_px + ((x - self.start_logical) as f32) * self.bar_spacing
    }
    #[inline]
    pub fn from_px(&self, px: f32) -> f64 {
        self.start_logical + ((px - self.left_px) / self.bar_spacing) as f64
    }
    /// Nearest bar index under `px`; `None` for non-finite input.
    pub fn logical_at(&self, px: f32) -> Option<LogicalIndex> {
        let x = self.from_px(px);
        x.is_finite().then(|| x.round() as LogicalIndex)
    }
    pub fn pan_px(&mut self, dx_px: f32) {
        self.start_logical -= (dx_px / self.bar_spacing) as f64;
    }
}
