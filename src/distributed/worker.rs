use rayon::prelude::*;

use crate::distributed::{PartitionRange, ProgressReporter};
use crate::forces::net_force;
use crate::models::{PointSet, Vector3D};
use crate::utils::{ForceConstants, ForceError};

/// Net forces for every index in `range`, in index order.
///
/// Element `k` is the net force on point `range.start + k`. The caller must ensure the
/// range lies within `points`.
///
/// # Examples
///
/// ```
/// use rs_pairforce::distributed::{compute_local_forces, NullReporter, PartitionRange};
/// use rs_pairforce::forces::net_force;
/// use rs_pairforce::models::{PointSet, Vector3D};
/// use rs_pairforce::utils::ForceConstants;
///
/// let points = PointSet::new(
///     vec![Vector3D::new(0.0, 0.0, 0.0), Vector3D::new(1.0, 0.0, 0.0), Vector3D::new(0.0, 3.0, 0.0)],
///     vec![1.0, 2.0, 3.0],
/// ).unwrap();
/// let constants = ForceConstants::default();
///
/// let partial = compute_local_forces(PartitionRange::new(1, 3), &points, &constants, &NullReporter);
/// assert_eq!(partial.len(), 2);
/// assert_eq!(partial[0], net_force(1, &points, &constants));
/// ```
pub fn compute_local_forces(
    range: PartitionRange,
    points: &PointSet,
    constants: &ForceConstants,
    reporter: &dyn ProgressReporter,
) -> Vec<Vector3D> {
    reporter.info(format_args!(
        "process part: [{}, {}), data_size = {}",
        range.start, range.end, points.len()
    ));

    let mut forces = Vec::with_capacity(range.len());
    for i in range.indices() {
        let force = net_force(i, points, constants);
        reporter.debug(format_args!("net force [{}] = {:?}", i, force));
        forces.push(force);
    }
    forces
}

/// Same as [`compute_local_forces`], with rows spread over the Rayon pool.
///
/// Each row's sum still runs sequentially in ascending index order, so the output is
/// bitwise identical to the sequential version. Row reports arrive in completion order.
pub fn compute_local_forces_par(
    range: PartitionRange,
    points: &PointSet,
    constants: &ForceConstants,
    reporter: &dyn ProgressReporter,
) -> Vec<Vector3D> {
    reporter.info(format_args!(
        "process part: [{}, {}), data_size = {}, threads = {}",
        range.start, range.end, points.len(), rayon::current_num_threads()
    ));

    range
        .indices()
        .into_par_iter()
        .map(|i| {
            let force = net_force(i, points, constants);
            reporter.debug(format_args!("net force [{}] = {:?}", i, force));
            force
        })
        .collect()
}

/// Extends a partial result with zero vectors up to the fixed transport capacity.
///
/// # Errors
///
/// Returns `ForceError::TransportMismatch` if `partial` is already longer than `capacity`.
///
/// # Examples
///
/// ```
/// use rs_pairforce::distributed::pad_to_capacity;
/// use rs_pairforce::models::Vector3D;
///
/// let padded = pad_to_capacity(vec![Vector3D::new(1.0, 1.0, 1.0)], 3).unwrap();
/// assert_eq!(padded.len(), 3);
/// assert_eq!(padded[2], Vector3D::ZERO);
///
/// assert!(pad_to_capacity(vec![Vector3D::ZERO; 4], 3).is_err());
/// ```
pub fn pad_to_capacity(mut partial: Vec<Vector3D>, capacity: usize) -> Result<Vec<Vector3D>, ForceError> {
    if partial.len() > capacity {
        return Err(ForceError::TransportMismatch(format!(
            "partial result of {} rows exceeds transport capacity {}",
            partial.len(),
            capacity
        )));
    }
    partial.resize(capacity, Vector3D::ZERO);
    Ok(partial)
}
