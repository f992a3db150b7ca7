use crate::assert_float_eq;
use crate::models::{FromCoordinates, PointSet, ToCoordinates, Vector3D};
use crate::utils::ForceError;

#[test]
fn test_vector_arithmetic() {
    let a = Vector3D::new(1.0, 2.0, 3.0);
    let b = Vector3D::new(4.0, -2.0, 0.5);

    assert_eq!(a + b, Vector3D::new(5.0, 0.0, 3.5));
    assert_eq!(b - a, Vector3D::new(3.0, -4.0, -2.5));
    assert_eq!(-a, Vector3D::new(-1.0, -2.0, -3.0));
    assert_eq!(a * 2.0, Vector3D::new(2.0, 4.0, 6.0));
    assert_eq!(2.0 * a, a * 2.0);
    assert_eq!(a / 2.0, Vector3D::new(0.5, 1.0, 1.5));

    let mut sum = Vector3D::default();
    sum += a;
    sum += b;
    assert_eq!(sum, a + b);
}

#[test]
fn test_magnitude() {
    let v = Vector3D::new(1.0, 2.0, 2.0);
    assert_float_eq(v.magnitude_squared(), 9.0, 1e-12, None);
    assert_float_eq(v.magnitude(), 3.0, 1e-12, None);
    assert_float_eq(Vector3D::ZERO.magnitude(), 0.0, 1e-12, None);
}

#[test]
fn test_is_finite() {
    assert!(Vector3D::new(1.0, 2.0, 3.0).is_finite());
    assert!(!Vector3D::new(f64::NAN, 0.0, 0.0).is_finite());
    assert!(!Vector3D::new(0.0, f64::INFINITY, 0.0).is_finite());
}

#[test]
fn test_coordinate_conversions() {
    let v = Vector3D::from_coord((1.0, -1.0, 0.25));
    assert_eq!(v.to_coord(), (1.0, -1.0, 0.25));
    assert_eq!(Vector3D::from_coord(v.components()), v);
}

#[test]
fn test_point_set_length_mismatch() {
    let result = PointSet::new(vec![Vector3D::ZERO, Vector3D::new(1.0, 0.0, 0.0)], vec![1.0]);
    match result {
        Err(ForceError::LengthMismatch { positions, masses }) => {
            assert_eq!(positions, 2);
            assert_eq!(masses, 1);
        }
        other => panic!("Expected LengthMismatch, got {:?}", other),
    }
}

#[test]
fn test_point_set_accessors() {
    let points = PointSet::new(
        vec![Vector3D::new(0.0, 0.0, 0.0), Vector3D::new(3.0, 0.0, 0.0)],
        vec![2.0, 5.0],
    ).expect("Failed to create point set");

    assert_eq!(points.len(), 2);
    assert!(!points.is_empty());
    assert_eq!(points.position(1), Vector3D::new(3.0, 0.0, 0.0));
    assert_float_eq(points.mass(1), 5.0, 1e-12, None);
    assert_eq!(points.masses(), &[2.0, 5.0]);
}

#[test]
fn test_empty_point_set() {
    let points = PointSet::new(Vec::new(), Vec::new()).expect("Empty sets are valid");
    assert!(points.is_empty());
    assert!(points.coincident_pairs().is_empty());
}

#[test]
fn test_coincident_pairs() {
    let points = PointSet::new(
        vec![
            Vector3D::new(1.0, 1.0, 1.0),
            Vector3D::new(0.0, 0.0, 0.0),
            Vector3D::new(1.0, 1.0, 1.0),
            Vector3D::new(0.0, 0.0, 0.0),
        ],
        vec![1.0; 4],
    ).expect("Failed to create point set");

    assert_eq!(points.coincident_pairs(), vec![(0, 2), (1, 3)]);
}
