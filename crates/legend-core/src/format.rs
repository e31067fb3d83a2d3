// File: crates/legend-core/src/format.rs
// Summary: Number formatting for legend readouts (fixed-point, K/M shorthand, percent move).

/// Minimum field width of a readout number.
pub const FIELD_WIDTH: usize = 8;
/// Precision used when a series reports none.
pub const DEFAULT_PRECISION: usize = 2;

/// Fixed-point with `decimals` places, left-padded to `FIELD_WIDTH`.
pub fn legend_item_format(num: f64, decimals: usize) -> String {
    // `+ 0.0` folds -0.0 into 0.0 so it never prints as "-0.00"
    format!("{:>width$.prec$}", num + 0.0, width = FIELD_WIDTH, prec = decimals)
}

/// `1.5M` / `2.5K` above a thousand, otherwise the plain number padded to `FIELD_WIDTH`.
pub fn shorthand_format(num: f64) -> String {
    let abs = num.abs();
    if abs >= 1_000_000.0 {
        format!("{:.1}M", num / 1_000_000.0)
    } else if abs >= 1_000.0 {
        format!("{:.1}K", num / 1_000.0)
    } else {
        format!("{:>width$}", num + 0.0, width = FIELD_WIDTH)
    }
}

/// `+5.00 %` / `-5.00 %`. Zero renders with a plus sign.
pub fn percent_format(pct: f64) -> String {
    let pct = pct + 0.0;
    let sign = if pct >= 0.0 { "+" } else { "" };
    format!("{sign}{pct:.2} %")
}
