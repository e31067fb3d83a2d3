// File: crates/legend-demo/src/main.rs
// Summary: Demo loads an OHLCV CSV into an in-memory chart, registers legend rows, sweeps the
// crosshair and prints what the legend would display at each step.

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use legend_core::theme::{self, Theme};
use legend_core::{
    CandleReadout, Candle, Chart, Legend, LegendConfig, PointerEvent, RenderModel, Resolution, Series,
    SeriesOptions, SeriesType, Time, TimeScale,
};
use std::path::{Path, PathBuf};

const SMA_PERIOD: usize = 3;

fn main() -> Result<()> {
    env_logger::init();

    // Args: [csv] [legend.toml] [theme]
    let manifest = Path::new(env!("CARGO_MANIFEST_DIR"));
    let csv_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| manifest.join("data/sample_ohlcv.csv"));
    let cfg_path = std::env::args()
        .nth(2)
        .map(PathBuf::from)
        .unwrap_or_else(|| manifest.join("data/legend.toml"));
    let theme = theme::find(&std::env::args().nth(3).unwrap_or_else(|| "dark".to_string()));

    let path = resolve_path(&csv_path)?;
    println!("Using input file: {}", path.display());
    let bars = load_ohlcv_csv(&path).with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    println!("Loaded {} bars", bars.len());
    if bars.is_empty() {
        anyhow::bail!("no bars loaded; check headers/delimiter.");
    }

    let config = LegendConfig::load_from(&cfg_path)
        .with_context(|| format!("failed to load legend config '{}'", cfg_path.display()))?;
    let config = if config.visible { config } else { LegendConfig { visible: true, ..config } };

    let (mut chart, ids) = build_chart(&bars, &theme);
    let mut legend = Legend::from_config(&config)?;
    legend.register(format!("SMA {SMA_PERIOD}"), ids.sma, &chart)?;
    legend.register("Volume", ids.volume, &chart)?;

    println!("\n== crosshair sweep (pixel positions)");
    let spacing = chart.time_scale.bar_spacing;
    for i in 0..bars.len() {
        let px = chart.time_scale.left_px + i as f32 * spacing;
        let event = chart.crosshair_at_px(px);
        print_model(&legend.render(&chart, &event, Resolution::SeriesData));
    }

    println!("\n== pointer leaves the plot");
    print_model(&legend.render(&chart, &PointerEvent::left(), Resolution::SeriesData));

    println!("\n== hide SMA, read by logical index");
    legend.toggle_series(ids.sma, &mut chart)?;
    let last = bars[bars.len() - 1].0.t;
    print_model(&legend.render(&chart, &PointerEvent::at(last), Resolution::Logical));

    println!("\n== toggle all twice");
    legend.toggle_all(&mut chart);
    legend.toggle_all(&mut chart);
    print_model(&legend.render(&chart, &chart.crosshair_at(last), Resolution::SeriesData));

    println!("\n== collapsed");
    legend.toggle_collapse();
    print_model(&legend.render(&chart, &chart.crosshair_at(last), Resolution::SeriesData));

    Ok(())
}

struct SeriesIds {
    sma: legend_core::SeriesId,
    volume: legend_core::SeriesId,
}

fn build_chart(bars: &[(Candle, f64)], theme: &Theme) -> (Chart, SeriesIds) {
    let mut chart = Chart::new();
    chart.time_scale = TimeScale::new(72.0, 0.0, 12.0);
    chart.precision = 1;

    let candles: Vec<Candle> = bars.iter().map(|(c, _)| *c).collect();
    let reference = chart.add_series(Series::from_candles(
        candles.clone(),
        SeriesOptions::themed(SeriesType::Candlestick, theme),
    ));
    chart.set_reference(reference);

    let volume = chart.add_series(Series::with_data(
        SeriesType::Histogram,
        bars.iter().map(|(c, v)| (c.t, *v)).collect(),
        SeriesOptions::themed(SeriesType::Histogram, theme),
    ));
    chart.set_volume(volume);

    let sma = chart.add_series(Series::with_data(
        SeriesType::Line,
        sma_close(&candles, SMA_PERIOD),
        SeriesOptions::themed(SeriesType::Line, theme).with_precision(2),
    ));
    (chart, SeriesIds { sma, volume })
}

fn print_model(model: &RenderModel) {
    let frame = &model.frame;
    if !frame.visible {
        println!("[legend hidden]");
        return;
    }
    println!("[{}] {}", frame.collapse_glyph, frame.header);
    if !frame.detail_visible {
        return;
    }
    match &model.candle {
        CandleReadout::Cleared => println!("  (cleared)"),
        CandleReadout::Shown(block) => {
            for line in block.text().lines() {
                println!("  {line}");
            }
        }
    }
    for row in &model.rows {
        if !row.shown {
            continue;
        }
        let eye = match row.icon {
            legend_core::VisibilityIcon::Open => "o",
            legend_core::VisibilityIcon::Closed => "-",
        };
        match &row.text {
            Some(text) => println!("  {text}  [{eye}] {}", text.color),
            None => println!("  (row {} unchanged)  [{eye}]", row.handle),
        }
    }
}

/// Simple moving average of candle closes, stamped at the closing bar.
fn sma_close(data: &[Candle], period: usize) -> Vec<(Time, f64)> {
    if period == 0 || data.len() < period { return Vec::new(); }
    let mut out = Vec::with_capacity(data.len() - period + 1);
    let mut sum = 0.0f64;
    for i in 0..data.len() {
        sum += data[i].c;
        if i + 1 > period { sum -= data[i - period].c; }
        if i + 1 >= period { out.push((data[i].t, sum / period as f64)); }
    }
    out
}

/// Resolve path, trying .csv/.cvs swap if needed.
fn resolve_path(p: &Path) -> Result<PathBuf> {
    if p.exists() {
        return Ok(p.to_path_buf());
    }
    if let Some(alt) = swap_ext(p) {
        if alt.exists() {
            println!("  (extension swapped between .csv/.cvs)");
            return Ok(alt);
        }
    }
    anyhow::bail!("file not found: {}", p.display());
}

/// Load OHLCV CSV into (candle, volume) pairs; rows breaking OHLC invariants are skipped.
fn load_ohlcv_csv(path: &Path) -> Result<Vec<(Candle, f64)>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect::<Vec<_>>();
    log::debug!("headers: {:?}", headers);

    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));
    let i_time = idx(&["time", "timestamp", "open_time", "date", "datetime"]);
    let i_open = idx(&["open", "o"]);
    let i_high = idx(&["high", "h"]);
    let i_low = idx(&["low", "l"]);
    let i_close = idx(&["close", "c", "adj_close", "close_price"]);
    let i_volume = idx(&["volume", "v", "vol"]);

    if i_open.is_none() || i_high.is_none() || i_low.is_none() || i_close.is_none() {
        anyhow::bail!("missing one of open/high/low/close columns in {:?}", headers);
    }

    let mut out = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let parse = |i: Option<usize>| -> Option<f64> { i.and_then(|ix| rec.get(ix)).and_then(|s| s.trim().parse::<f64>().ok()) };

        let t = i_time
            .and_then(|ix| rec.get(ix))
            .and_then(parse_time)
            .unwrap_or(row as Time);
        let (o, h, l, c) = (parse(i_open), parse(i_high), parse(i_low), parse(i_close));
        let (Some(o), Some(h), Some(l), Some(c)) = (o, h, l, c) else {
            log::warn!("row {row}: unparsable OHLC, skipped");
            continue;
        };
        match Candle::try_new(t, o, h, l, c) {
            Ok(candle) => out.push((candle, parse(i_volume).unwrap_or(0.0))),
            Err(reason) => log::warn!("row {row}: {reason}, skipped"),
        }
    }
    Ok(out)
}

/// Epoch seconds/milliseconds, RFC 3339, `YYYY-MM-DD HH:MM:SS` or `YYYY-MM-DD`.
fn parse_time(s: &str) -> Option<Time> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(n) = s.parse::<i64>() {
        // epoch ms -> sec
        return Some(if n > 10_i64.pow(12) { n / 1000 } else { n });
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.timestamp());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.and_utc().timestamp());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc().timestamp())
}

fn swap_ext(p: &Path) -> Option<PathBuf> {
    let mut alt = p.to_path_buf();
    let ext = p.extension()?.to_string_lossy().to_lowercase();
    match ext.as_str() {
        "cvs" => {
            alt.set_extension("csv");
            Some(alt)
        }
        "csv" => {
            alt.set_extension("cvs");
            Some(alt)
        }
        _ => None,
    }
}
