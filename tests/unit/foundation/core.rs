use super::*;

#[test]
fn canvas_rejects_zero_and_oversized_sides() {
    let canvas = |width, height| Canvas { width, height };
    assert!(canvas(0, 10).validate().is_err());
    assert!(canvas(10, 0).validate().is_err());
    assert!(canvas(70_000, 10).validate().is_err());
    let c = canvas(1000, 1000);
    c.validate().unwrap();
    assert_eq!(c.rgba_len(), 4_000_000);
}

#[test]
fn point3_dot_and_finiteness() {
    let p = Point3::new(1.0, 2.0, 3.0);
    assert_eq!(p.dot(Point3::new(4.0, -5.0, 6.0)), 12.0);
    assert!(p.is_finite());
    assert!(!Point3::new(f64::NAN, 0.0, 0.0).is_finite());
    assert!(!Point3::new(0.0, f64::INFINITY, 0.0).is_finite());
}

#[test]
fn frame_index_orders_by_generation() {
    let mut v = vec![FrameIndex(3), FrameIndex(0), FrameIndex(2)];
    v.sort();
    assert_eq!(v, vec![FrameIndex(0), FrameIndex(2), FrameIndex(3)]);
}
