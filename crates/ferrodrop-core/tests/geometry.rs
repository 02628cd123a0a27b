//! Rectangle hit-testing and axis helpers.

use ferrodrop_core::geometry::Rect;
use ferrodrop_core::math::{Axis, Vec2};

#[test]
fn test_from_tlwh_maps_top_left() {
    let rect = Rect::from_tlwh(10.0, 20.0, 100.0, 40.0);
    assert_eq!(rect.top(), 10.0);
    assert_eq!(rect.left(), 20.0);
    assert_eq!(rect.right(), 120.0);
    assert_eq!(rect.bottom(), 50.0);
}

#[test]
fn test_contains_is_edge_inclusive() {
    let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
    assert!(rect.contains(Vec2::new(0.0, 0.0)));
    assert!(rect.contains(Vec2::new(10.0, 10.0)));
    assert!(!rect.contains(Vec2::new(10.1, 5.0)));
}

#[test]
fn test_midpoint_and_fraction() {
    let rect = Rect::new(0.0, 100.0, 50.0, 40.0);
    assert_eq!(rect.midpoint(Axis::Y), 120.0);
    assert_eq!(rect.midpoint(Axis::X), 25.0);
    assert_eq!(rect.fraction(Axis::Y, 110.0), Some(0.25));
    assert!(rect.spans(Axis::Y, 140.0));
    assert!(!rect.spans(Axis::Y, 99.0));
}

#[test]
fn test_fraction_of_flat_rect_is_none() {
    let rect = Rect::new(0.0, 0.0, 10.0, 0.0);
    assert!(rect.is_empty());
    assert_eq!(rect.fraction(Axis::Y, 0.0), None);
    assert_eq!(rect.area(), 0.0);
}

#[test]
fn test_center() {
    let rect = Rect::new(10.0, 20.0, 30.0, 40.0);
    assert_eq!(rect.center(), Vec2::new(25.0, 40.0));
}
