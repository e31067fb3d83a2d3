// File: crates/legend-core/src/color.rs
// Summary: Resolves the solid (fully opaque) display color of a series for legend rows.

/// Opaque variant of a CSS color. For `rgba(...)` the alpha term is rewritten to `1`;
/// every other color string is returned unchanged.
pub fn solid_color(color: &str) -> String {
    if !color.starts_with("rgba") {
        return color.to_string();
    }
    let Some(close) = color.find(')') else {
        return color.to_string();
    };
    let Some(comma) = color[..close].rfind(',') else {
        return color.to_string();
    };
    // keep any whitespace around the alpha term
    let term = &color[comma + 1..close];
    let lead = term.len() - term.trim_start().len();
    let trail = term.len() - term.trim_end().len();
    if lead == term.len() {
        return color.to_string();
    }
    format!(
        "{}{}1{}{}",
        &color[..comma + 1],
        &term[..lead],
        &term[term.len() - trail..],
        &color[close..]
    )
}
