//! Inverse-square pairwise forces and their per-point sums.
//!
//! All functions are pure. Index-based functions read from a shared [`PointSet`]
//! and never check `i != j` or coincident coordinates: a zero separation divides
//! by zero and the non-finite result propagates into every sum that includes it.

use crate::models::{PointSet, Vector3D};
use crate::utils::ForceConstants;

/// Squared Euclidean distance between two points.
///
/// # Example
/// ```
/// use rs_pairforce::forces::squared_distance;
/// use rs_pairforce::models::Vector3D;
///
/// let a = Vector3D::new(1.0, 2.0, 3.0);
/// let b = Vector3D::new(2.0, 4.0, 6.0);
/// assert_eq!(squared_distance(&a, &b), 14.0);
/// assert_eq!(squared_distance(&a, &b), squared_distance(&b, &a));
/// ```
pub fn squared_distance(a: &Vector3D, b: &Vector3D) -> f64 {
    (*b - *a).magnitude_squared()
}

/// Unit vector pointing from `a` to `b`.
///
/// Callers must not pass coincident points; the result is then NaN in every component.
///
/// # Example
/// ```
/// use rs_pairforce::forces::unit_direction;
/// use rs_pairforce::models::Vector3D;
///
/// let dir = unit_direction(&Vector3D::new(0.0, 0.0, 0.0), &Vector3D::new(0.0, 0.0, 5.0));
/// assert_eq!(dir, Vector3D::new(0.0, 0.0, 1.0));
/// ```
pub fn unit_direction(a: &Vector3D, b: &Vector3D) -> Vector3D {
    let distance = squared_distance(a, b).sqrt();
    (*b - *a) / distance
}

/// Magnitude of the force between points `i` and `j`.
///
/// `coefficient * m_i * m_j / r²`; symmetric in `i` and `j`.
pub fn scalar_force(i: usize, j: usize, points: &PointSet, constants: &ForceConstants) -> f64 {
    let distance_squared = squared_distance(&points.position(i), &points.position(j));
    constants.inverse_square(points.mass(i), points.mass(j), distance_squared)
}

/// Force vector acting on point `i` from point `j`, directed towards `j`.
///
/// Antisymmetric: `vector_force(i, j) == -vector_force(j, i)`.
///
/// # Example
/// ```
/// use rs_pairforce::forces::vector_force;
/// use rs_pairforce::models::{PointSet, Vector3D};
/// use rs_pairforce::utils::ForceConstants;
///
/// let points = PointSet::new(
///     vec![Vector3D::new(0.0, 0.0, 0.0), Vector3D::new(0.0, 2.0, 0.0)],
///     vec![1.0, 1.0],
/// ).unwrap();
/// let constants = ForceConstants::new(Some(1.0));
///
/// let force = vector_force(0, 1, &points, &constants);
/// assert_eq!(force, Vector3D::new(0.0, 0.25, 0.0));
/// assert_eq!(vector_force(1, 0, &points, &constants), -force);
/// ```
pub fn vector_force(i: usize, j: usize, points: &PointSet, constants: &ForceConstants) -> Vector3D {
    let magnitude = scalar_force(i, j, points, constants);
    unit_direction(&points.position(i), &points.position(j)) * magnitude
}

/// Net force on point `i` from every other point.
///
/// Contributions are accumulated in ascending `j`, starting from zero. The order is
/// fixed so that every caller, partitioned or not, produces bitwise-identical sums.
///
/// # Example
/// ```
/// use rs_pairforce::forces::net_force;
/// use rs_pairforce::models::{PointSet, Vector3D};
/// use rs_pairforce::utils::ForceConstants;
///
/// let points = PointSet::new(
///     vec![
///         Vector3D::new(0.0, 0.0, 0.0),
///         Vector3D::new(0.0, 0.0, 1.0),
///         Vector3D::new(0.0, 2.0, 0.0),
///         Vector3D::new(3.0, 0.0, 0.0),
///     ],
///     vec![2.0, 1.0, 1.0, 1.0],
/// ).unwrap();
///
/// let force = net_force(0, &points, &ForceConstants::default());
/// assert!((force.x - 20.0 / 9.0).abs() < 1e-12);
/// assert!((force.y - 5.0).abs() < 1e-12);
/// assert!((force.z - 20.0).abs() < 1e-12);
/// ```
pub fn net_force(i: usize, points: &PointSet, constants: &ForceConstants) -> Vector3D {
    let mut total = Vector3D::ZERO;
    for j in 0..points.len() {
        if j != i {
            total += vector_force(i, j, points, constants);
        }
    }
    total
}

/// Net force on every point in one unpartitioned pass.
pub fn net_forces(points: &PointSet, constants: &ForceConstants) -> Vec<Vector3D> {
    (0..points.len())
        .map(|i| net_force(i, points, constants))
        .collect()
}
