use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::distributed::{
    compute_local_forces, compute_range, gather, pad_to_capacity, transport_capacity, MemoryReporter, NullReporter,
};
use crate::forces::net_forces;
use crate::models::{PointSet, Vector3D};
use crate::utils::{ForceConstants, ForceError};

fn random_points(count: usize, seed: u64) -> PointSet {
    let mut rng = StdRng::seed_from_u64(seed);
    let positions = (0..count)
        .map(|_| Vector3D::new(rng.gen_range(-10.0..10.0), rng.gen_range(-10.0..10.0), rng.gen_range(-10.0..10.0)))
        .collect();
    let masses = (0..count).map(|_| rng.gen_range(0.5..5.0)).collect();
    PointSet::new(positions, masses).expect("Failed to create point set")
}

/// Runs every worker in turn and returns their padded transport buffers.
fn padded_buffers(points: &PointSet, constants: &ForceConstants, workers: usize) -> Vec<Vec<Vector3D>> {
    let capacity = transport_capacity(workers, points.len()).unwrap();
    (0..workers)
        .map(|w| {
            let range = compute_range(w, workers, points.len());
            let partial = compute_local_forces(range, points, constants, &NullReporter);
            pad_to_capacity(partial, capacity).unwrap()
        })
        .collect()
}

#[test]
fn test_gather_is_partition_invariant() {
    let constants = ForceConstants::default();
    for count in [0, 1, 2, 7, 16, 31] {
        let points = random_points(count, 42 + count as u64);
        let expected = net_forces(&points, &constants);

        for workers in [1, 2, 3, 4, 5, 8, count + 3] {
            let buffers = padded_buffers(&points, &constants, workers);
            let matrix = gather(&buffers, count, workers, &NullReporter).expect("Failed to gather");
            assert_eq!(matrix, expected, "N={} W={}", count, workers);
        }
    }
}

#[test]
fn test_gather_discards_padding() {
    let junk = Vector3D::new(f64::NAN, f64::INFINITY, -1.0e300);
    let rows: Vec<Vector3D> = (0..5).map(|i| Vector3D::new(i as f64, 0.0, 0.0)).collect();

    // N=5 over W=3: ranges [0,1), [1,3), [3,5); capacity 2.
    let buffers = vec![
        vec![rows[0], junk],
        vec![rows[1], rows[2]],
        vec![rows[3], rows[4]],
    ];
    let matrix = gather(&buffers, 5, 3, &NullReporter).expect("Failed to gather");
    assert_eq!(matrix, rows);
}

#[test]
fn test_gather_accepts_unpadded_buffers() {
    let rows: Vec<Vector3D> = (0..5).map(|i| Vector3D::new(0.0, i as f64, 0.0)).collect();
    let buffers = vec![vec![rows[0]], rows[1..3].to_vec(), rows[3..5].to_vec()];
    let matrix = gather(&buffers, 5, 3, &NullReporter).expect("Failed to gather");
    assert_eq!(matrix, rows);
}

#[test]
fn test_gather_rejects_short_buffer() {
    let buffers = vec![vec![Vector3D::ZERO; 2], vec![Vector3D::ZERO; 1]];
    let result = gather(&buffers, 4, 2, &NullReporter);
    assert!(matches!(result, Err(ForceError::TransportMismatch(_))));
}

#[test]
fn test_gather_rejects_wrong_buffer_count() {
    let buffers = vec![vec![Vector3D::ZERO; 2]; 2];
    let result = gather(&buffers, 4, 3, &NullReporter);
    assert!(matches!(result, Err(ForceError::TransportMismatch(_))));
}

#[test]
fn test_gather_rejects_zero_workers() {
    let result = gather(&[], 4, 0, &NullReporter);
    assert!(matches!(result, Err(ForceError::InvalidWorkerCount)));
}

#[test]
fn test_gather_reports_completion() {
    let reporter = MemoryReporter::default();
    let buffers = vec![vec![Vector3D::ZERO; 2]; 2];
    gather(&buffers, 3, 2, &reporter).expect("Failed to gather");

    let messages = reporter.messages();
    assert!(messages.iter().any(|m| m == "worker 0: taking 1 rows, discarding 1 padding rows"));
    assert_eq!(messages.last().map(String::as_str), Some("completion gather parts: 3 rows from 2 workers"));
}
