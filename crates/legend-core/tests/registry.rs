// File: crates/legend-core/tests/registry.rs
// Purpose: Validate registration order, duplicate rejection and visibility toggling with chart propagation.

mod common;

use legend_core::{ChartHost, Legend, LegendError, SeriesId, VisibilityIcon, VisibilityRegistry};

#[test]
fn register_keeps_insertion_order_and_defaults() {
    let fx = common::fixture();
    let mut legend = Legend::new();
    legend.register("SMA", fx.line, &fx.chart).expect("register line");
    legend.register("Volume", fx.volume, &fx.chart).expect("register volume");

    let names: Vec<&str> = legend.registry().entries().iter().map(|e| e.name()).collect();
    assert_eq!(names, ["SMA", "Volume"]);
    for e in legend.registry().entries() {
        assert!(e.is_visible());
        assert_eq!(e.icon(), VisibilityIcon::Open);
    }
    assert_eq!(legend.registry().entries()[0].display_color(), "rgba(10,20,30,1)");
    assert_eq!(legend.registry().entries()[1].display_color(), "rgba(38, 166, 154, 1)");
}

#[test]
fn duplicate_registration_is_rejected() {
    let fx = common::fixture();
    let mut legend = Legend::new();
    legend.register("SMA", fx.line, &fx.chart).expect("first");
    let err = legend.register("SMA again", fx.line, &fx.chart).unwrap_err();
    assert!(matches!(err, LegendError::DuplicateSeries(id) if id == fx.line));
    assert_eq!(legend.registry().len(), 1);
    assert_eq!(legend.registry().entries()[0].name(), "SMA");
}

#[test]
fn registry_rejects_duplicates_on_its_own() {
    let mut registry = VisibilityRegistry::new();
    registry.register("SMA", SeriesId(1), "#fff").unwrap();
    let err = registry.register("SMA again", SeriesId(1), "#000").unwrap_err();
    assert!(matches!(err, LegendError::DuplicateSeries(SeriesId(1))));
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.entries()[0].display_color(), "#fff");
}

#[test]
fn unknown_series_cannot_be_registered() {
    let fx = common::fixture();
    let mut legend = Legend::new();
    let err = legend.register("ghost", SeriesId(999), &fx.chart).unwrap_err();
    assert!(matches!(err, LegendError::UnknownSeries(_)));
    assert!(legend.registry().is_empty());
}

#[test]
fn toggle_one_follows_parity_and_reaches_chart() {
    let mut fx = common::fixture();
    let mut legend = Legend::new();
    legend.register("SMA", fx.line, &fx.chart).unwrap();
    legend.register("Volume", fx.volume, &fx.chart).unwrap();

    for n in 1..=5 {
        let visible = legend.toggle_series(fx.line, &mut fx.chart).unwrap();
        assert_eq!(visible, n % 2 == 0);
        assert_eq!(fx.chart.series_options(fx.line).unwrap().visible, visible);
    }
    let line = legend.registry().get(fx.line).unwrap();
    assert!(!line.is_visible());
    assert_eq!(line.icon(), VisibilityIcon::Closed);
    // untouched entry
    assert!(legend.registry().get(fx.volume).unwrap().is_visible());
}

#[test]
fn toggle_unknown_handle_is_an_error() {
    let mut fx = common::fixture();
    let mut registry = VisibilityRegistry::new();
    assert!(matches!(
        registry.toggle_one(fx.line, &mut fx.chart),
        Err(LegendError::UnknownSeries(_))
    ));
}

#[test]
fn toggle_all_sets_every_row_uniformly() {
    let mut fx = common::fixture();
    let mut legend = Legend::new();
    legend.register("SMA", fx.line, &fx.chart).unwrap();
    legend.register("Volume", fx.volume, &fx.chart).unwrap();
    legend.toggle_series(fx.line, &mut fx.chart).unwrap();

    assert!(legend.registry().all_visible());
    assert!(!legend.toggle_all(&mut fx.chart));
    for e in legend.registry().entries() {
        assert!(!e.is_visible());
        assert_eq!(e.icon(), VisibilityIcon::Closed);
        assert!(!fx.chart.series_options(e.handle()).unwrap().visible);
    }

    assert!(legend.toggle_all(&mut fx.chart));
    for e in legend.registry().entries() {
        assert!(e.is_visible());
        assert!(fx.chart.series_options(e.handle()).unwrap().visible);
    }
}

#[test]
fn toggle_all_twice_restores_flags() {
    let mut fx = common::fixture();
    let mut registry = VisibilityRegistry::new();
    registry.register("SMA", fx.line, "#fff").unwrap();
    registry.register("Volume", fx.volume, "#000").unwrap();

    let before: Vec<bool> = registry.entries().iter().map(|e| e.is_visible()).collect();
    registry.toggle_all(&mut fx.chart);
    registry.toggle_all(&mut fx.chart);
    let after: Vec<bool> = registry.entries().iter().map(|e| e.is_visible()).collect();
    assert_eq!(before, after);
}

#[test]
fn entries_snapshot_is_restartable() {
    let fx = common::fixture();
    let mut registry = VisibilityRegistry::new();
    registry.register("a", fx.line, "#fff").unwrap();
    registry.register("b", fx.volume, "#fff").unwrap();
    let first: Vec<_> = registry.entries().iter().map(|e| e.handle()).collect();
    let second: Vec<_> = registry.entries().iter().map(|e| e.handle()).collect();
    assert_eq!(first, second);
}
