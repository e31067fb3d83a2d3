// File: crates/legend-core/tests/format.rs
// Purpose: Validate fixed-point, shorthand and percent formatting of readout numbers.

use legend_core::{legend_item_format, percent_format, shorthand_format};

#[test]
fn fixed_point_is_padded_to_eight() {
    assert_eq!(legend_item_format(3.14159, 2), "    3.14");
    assert_eq!(legend_item_format(105.0, 2), "  105.00");
    assert_eq!(legend_item_format(1.5, 0), "       2");
    assert_eq!(legend_item_format(-0.0, 2), "    0.00");
}

#[test]
fn long_numbers_are_not_truncated() {
    assert_eq!(legend_item_format(123456.789, 3), "123456.789");
}

#[test]
fn shorthand_uses_millions_and_thousands() {
    assert_eq!(shorthand_format(1_500_000.0), "1.5M");
    assert_eq!(shorthand_format(2_500.0), "2.5K");
    assert_eq!(shorthand_format(1_000.0), "1.0K");
    assert_eq!(shorthand_format(-2_500_000.0), "-2.5M");
}

#[test]
fn shorthand_small_numbers_are_padded() {
    assert_eq!(shorthand_format(42.0), "      42");
    assert_eq!(shorthand_format(999.5), "   999.5");
    assert_eq!(shorthand_format(42.0).len(), 8);
}

#[test]
fn percent_has_sign_and_two_decimals() {
    assert_eq!(percent_format((105.0 - 100.0) / 100.0 * 100.0), "+5.00 %");
    assert_eq!(percent_format((95.0 - 100.0) / 100.0 * 100.0), "-5.00 %");
    assert_eq!(percent_format(0.0), "+0.00 %");
    assert_eq!(percent_format(-0.0), "+0.00 %");
}
