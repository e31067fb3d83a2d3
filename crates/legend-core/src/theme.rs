// File: crates/legend-core/src/theme.rs
// Summary: Light/Dark color presets (CSS color strings) used as default series styling.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub line_stroke: &'static str,
    pub candle_up: &'static str,
    pub candle_down: &'static str,
    pub histogram: &'static str,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            line_stroke: "rgb(64, 160, 255)",
            candle_up: "rgb(40, 200, 120)",
            candle_down: "rgb(220, 80, 80)",
            histogram: "rgba(96, 156, 255, 0.5)",
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            line_stroke: "rgb(32, 120, 200)",
            candle_up: "rgb(20, 160, 90)",
            candle_down: "rgb(200, 60, 60)",
            histogram: "rgba(40, 120, 200, 0.5)",
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            line_stroke: "#00ffff",
            candle_up: "#00ff00",
            candle_down: "#ff0000",
            histogram: "#00aaff",
        }
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light(), Theme::high_contrast_dark()]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::dark()
}
