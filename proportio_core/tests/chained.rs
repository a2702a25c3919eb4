//! Caller-side composition scenarios: the core's operations are independent,
//! so any chaining happens in the caller. These tests mirror how frontends
//! combine the operations.

use proportio_core::{direct_k, percent_of, resize_dimensions, scale_by_ratio, solve_proportion};

#[test]
fn percentage_feeds_proportion() {
    // 25 is 25% of 100; then 25/100 = x/200
    let percent = percent_of(25.0, 100.0).unwrap();
    let x = solve_proportion(Some(percent), Some(100.0), None, Some(200.0)).unwrap();
    assert_eq!(x, 50.0);
}

#[test]
fn solved_proportion_preserves_the_ratio() {
    let (a, b, c) = (3.0, 4.0, 6.0);
    let d = solve_proportion(Some(a), Some(b), Some(c), None).unwrap();
    assert!((a / b - c / d).abs() < 1e-15);
}

#[test]
fn resize_doubles_area_quadratically() {
    let (width, height) = (100.0, 50.0);
    let (new_width, new_height) = resize_dimensions(width, height, 2.0).unwrap();
    assert_eq!((new_width, new_height), (200.0, 100.0));

    let area_ratio = (new_width * new_height) / (width * height);
    assert_eq!(area_ratio, 4.0);
}

#[test]
fn percentage_then_reverse_proportion() {
    // What percentage is 15 of 60? If that percentage of some number is 30,
    // what is the number?
    let percent = percent_of(15.0, 60.0).unwrap();
    let number = solve_proportion(Some(percent), Some(100.0), Some(30.0), None).unwrap();
    assert_eq!(number, 120.0);
}

#[test]
fn scaling_up_then_down_returns_to_start() {
    let mut value = 100.0;
    value = scale_by_ratio(value, 1.5).unwrap();
    value = scale_by_ratio(value, 2.0 / 3.0).unwrap();
    assert!((value - 100.0).abs() < 1e-12);
}

#[test]
fn recipe_scaling_two_ways_agrees() {
    // A recipe for 4 servings uses 2 cups of flour; scale to 6 servings.
    let ratio = 6.0 / 4.0;
    let scaled_flour = scale_by_ratio(2.0, ratio).unwrap();
    assert_eq!(scaled_flour, 3.0);

    // The proportion route gives the same answer: 2/4 = x/6
    let proportional_flour = solve_proportion(Some(2.0), Some(4.0), None, Some(6.0)).unwrap();
    assert_eq!(proportional_flour, scaled_flour);
}

#[test]
fn growth_factor_verifies_by_scaling() {
    // An investment grows from 1000 to 1250
    let growth_percent = percent_of(250.0, 1000.0).unwrap();
    assert_eq!(growth_percent, 25.0);

    let growth_factor = direct_k(1000.0, 1250.0).unwrap();
    assert_eq!(growth_factor, 1.25);

    let verified = scale_by_ratio(1000.0, growth_factor).unwrap();
    assert_eq!(verified, 1250.0);
}

#[test]
fn operations_are_order_independent() {
    // Interleaving calls in any order leaves each result unchanged
    let first = percent_of(1.0, 3.0).unwrap();
    let _ = resize_dimensions(10.0, 20.0, 0.5).unwrap();
    let _ = direct_k(2.0, 9.0).unwrap();
    let second = percent_of(1.0, 3.0).unwrap();
    assert_eq!(first, second);
}
