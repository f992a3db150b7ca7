use crate::distributed::{plan_ranges, ProgressReporter};
use crate::models::Vector3D;
use crate::utils::ForceError;

/// Reassembles the full force matrix from per-worker transport buffers.
///
/// `buffers[w]` is the buffer submitted by worker `w`. Its first `range.len()` rows are
/// the worker's real results, where `range` is the partition [`plan_ranges`] assigns to `w`.
/// Anything after that is padding and is dropped. The valid prefixes are concatenated in
/// worker order; nothing is summed across workers.
///
/// Buffers are normally all `transport_capacity(worker_count, total_size)` long, but only
/// the valid prefix is required.
///
/// # Errors
///
/// * `ForceError::InvalidWorkerCount` if `worker_count` is zero.
/// * `ForceError::TransportMismatch` if the number of buffers differs from `worker_count`
///   or a buffer is shorter than its worker's range.
///
/// # Examples
///
/// ```
/// use rs_pairforce::distributed::{gather, NullReporter};
/// use rs_pairforce::models::Vector3D;
///
/// let a = Vector3D::new(1.0, 0.0, 0.0);
/// let b = Vector3D::new(2.0, 0.0, 0.0);
/// let c = Vector3D::new(3.0, 0.0, 0.0);
/// let pad = Vector3D::new(f64::NAN, f64::NAN, f64::NAN);
///
/// // Three rows over two workers: ranges [0, 1) and [1, 3), capacity 2.
/// let buffers = vec![vec![a, pad], vec![b, c]];
/// let matrix = gather(&buffers, 3, 2, &NullReporter).unwrap();
/// assert_eq!(matrix, vec![a, b, c]);
/// ```
pub fn gather(
    buffers: &[Vec<Vector3D>],
    total_size: usize,
    worker_count: usize,
    reporter: &dyn ProgressReporter,
) -> Result<Vec<Vector3D>, ForceError> {
    let ranges = plan_ranges(worker_count, total_size)?;
    if buffers.len() != worker_count {
        return Err(ForceError::TransportMismatch(format!(
            "expected {} worker buffers, received {}",
            worker_count,
            buffers.len()
        )));
    }

    let mut matrix = Vec::with_capacity(total_size);
    for (worker, (range, buffer)) in ranges.iter().zip(buffers).enumerate() {
        if buffer.len() < range.len() {
            return Err(ForceError::TransportMismatch(format!(
                "worker {} submitted {} rows but owns [{}, {})",
                worker,
                buffer.len(),
                range.start,
                range.end
            )));
        }
        reporter.debug(format_args!(
            "worker {}: taking {} rows, discarding {} padding rows",
            worker,
            range.len(),
            buffer.len() - range.len()
        ));
        matrix.extend_from_slice(&buffer[..range.len()]);
    }

    debug_assert_eq!(matrix.len(), total_size);
    reporter.info(format_args!("completion gather parts: {} rows from {} workers", matrix.len(), worker_count));
    Ok(matrix)
}
