//! Deterministic splitting of `[0, total_size)` into contiguous per-worker ranges.
//!
//! Worker `w` of `W` owns `[floor(w*N/W), floor((w+1)*N/W))`. The ranges are disjoint,
//! cover every index exactly once, and differ in length by at most one. When `W > N`
//! some workers own an empty range.

use std::ops::Range;

use crate::utils::ForceError;

/// Half-open index range `[start, end)` owned by one worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PartitionRange {
    pub start: usize,
    pub end: usize,
}

impl PartitionRange {
    pub fn new(start: usize, end: usize) -> Self {
        PartitionRange { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn contains(&self, index: usize) -> bool {
        self.start <= index && index < self.end
    }

    pub fn indices(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Range owned by `worker_index` when `total_size` items are split across `worker_count` workers.
///
/// Intermediate products are taken in `u128`, so no input combination can overflow.
///
/// # Panics
///
/// Panics if `worker_count` is zero.
///
/// # Examples
///
/// ```
/// use rs_pairforce::distributed::{compute_range, PartitionRange};
///
/// assert_eq!(compute_range(0, 3, 10), PartitionRange::new(0, 3));
/// assert_eq!(compute_range(1, 3, 10), PartitionRange::new(3, 6));
/// assert_eq!(compute_range(2, 3, 10), PartitionRange::new(6, 10));
///
/// // More workers than items leaves some workers empty.
/// assert!(compute_range(0, 4, 2).is_empty());
/// ```
pub fn compute_range(worker_index: usize, worker_count: usize, total_size: usize) -> PartitionRange {
    assert!(worker_count > 0, "worker_count must be at least 1");
    let bound = |w: usize| -> usize {
        ((w as u128 * total_size as u128) / worker_count as u128) as usize
    };
    PartitionRange::new(bound(worker_index), bound(worker_index + 1))
}

/// Ranges for every worker, in worker order.
pub fn plan_ranges(worker_count: usize, total_size: usize) -> Result<Vec<PartitionRange>, ForceError> {
    if worker_count == 0 {
        return Err(ForceError::InvalidWorkerCount);
    }
    Ok((0..worker_count)
        .map(|w| compute_range(w, worker_count, total_size))
        .collect())
}

/// Fixed buffer length every worker submits for transport: `ceil(total_size / worker_count)`.
///
/// This equals the largest range [`compute_range`] can produce, so every partial result
/// fits and shorter ones are padded up to it.
///
/// # Examples
///
/// ```
/// use rs_pairforce::distributed::transport_capacity;
///
/// assert_eq!(transport_capacity(3, 10).unwrap(), 4);
/// assert_eq!(transport_capacity(4, 2).unwrap(), 1);
/// assert_eq!(transport_capacity(5, 0).unwrap(), 0);
/// assert!(transport_capacity(0, 10).is_err());
/// ```
pub fn transport_capacity(worker_count: usize, total_size: usize) -> Result<usize, ForceError> {
    if worker_count == 0 {
        return Err(ForceError::InvalidWorkerCount);
    }
    Ok(total_size.div_ceil(worker_count))
}
