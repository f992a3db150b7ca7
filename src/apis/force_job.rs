// src/apis/force_job.rs

use std::path::PathBuf;
use std::sync::Arc;

use crate::distributed::{
    compute_local_forces, compute_local_forces_par, compute_range, gather, pad_to_capacity, transport_capacity,
    Communicator, LocalCluster, LogReporter, ProgressReporter,
};
use crate::io::{load_point_set, write_forces, Delimiter};
use crate::models::{PointSet, Vector3D};
use crate::utils::{ForceConstants, ForceError};

/// Everything one force computation job needs.
#[derive(Debug, Clone)]
pub struct JobConfig {
    pub positions_path: PathBuf,
    pub masses_path: PathBuf,
    pub output_path: PathBuf,
    pub constants: ForceConstants,
    /// Number of ranks, root included.
    pub workers: usize,
    pub input_delimiter: Delimiter,
    pub output_delimiter: Delimiter,
    /// Spread each rank's rows over the Rayon pool.
    pub parallel_rows: bool,
}

impl JobConfig {
    /// A job with default constants, space-separated input, tab-separated output, and one
    /// rank per available CPU.
    pub fn new(positions_path: impl Into<PathBuf>, masses_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            positions_path: positions_path.into(),
            masses_path: masses_path.into(),
            output_path: output_path.into(),
            constants: ForceConstants::default(),
            workers: default_workers(),
            input_delimiter: Delimiter::Space,
            output_delimiter: Delimiter::Tab,
            parallel_rows: false,
        }
    }

    pub fn validate(&self) -> Result<(), ForceError> {
        if self.workers == 0 {
            return Err(ForceError::InvalidWorkerCount);
        }
        if !self.constants.coefficient.is_finite() {
            return Err(ForceError::InvalidParameter(format!(
                "coefficient must be finite, got {}",
                self.constants.coefficient
            )));
        }
        Ok(())
    }

    /// Fails with `MissingInput` unless both input tables exist.
    pub fn check_inputs(&self) -> Result<(), ForceError> {
        for path in [&self.positions_path, &self.masses_path] {
            if !path.is_file() {
                return Err(ForceError::MissingInput(path.clone()));
            }
        }
        Ok(())
    }
}

/// One rank per available CPU, or one if that cannot be determined.
pub fn default_workers() -> usize {
    std::thread::available_parallelism().map(|n| n.get()).unwrap_or(1)
}

/// The transport-agnostic core of a job, run by every rank.
///
/// The root passes the loaded points; other ranks pass `None` and receive a copy. Each rank
/// computes its own partition, pads it to the shared transport capacity and submits it.
/// The root returns the reassembled force matrix, every other rank returns `None`.
pub fn compute_distributed<C: Communicator>(
    comm: &C,
    points: Option<Arc<PointSet>>,
    constants: &ForceConstants,
    parallel_rows: bool,
    reporter: &dyn ProgressReporter,
) -> Result<Option<Vec<Vector3D>>, ForceError> {
    let points = comm.distribute(points)?;
    let total = points.len();

    let range = compute_range(comm.rank(), comm.size(), total);
    let partial = if parallel_rows {
        compute_local_forces_par(range, &points, constants, reporter)
    } else {
        compute_local_forces(range, &points, constants, reporter)
    };

    let capacity = transport_capacity(comm.size(), total)?;
    let buffer = pad_to_capacity(partial, capacity)?;

    match comm.collect(buffer)? {
        Some(buffers) => gather(&buffers, total, comm.size(), reporter).map(Some),
        None => Ok(None),
    }
}

/// Full per-rank protocol: the root loads and saves, every rank computes.
pub fn run_rank<C: Communicator>(comm: &C, config: &JobConfig) -> Result<Option<Vec<Vector3D>>, ForceError> {
    let reporter = LogReporter::new(comm.rank());

    let points = if comm.is_root() {
        reporter.info(format_args!("starting job with {} workers", comm.size()));
        config.check_inputs()?;
        let points = load_point_set(&config.positions_path, &config.masses_path, config.input_delimiter, &reporter)?;
        reporter.info(format_args!("distributing {} points to {} workers", points.len(), comm.size()));
        Some(Arc::new(points))
    } else {
        None
    };

    let forces = compute_distributed(comm, points.clone(), &config.constants, config.parallel_rows, &reporter)?;

    if let (Some(forces), Some(points)) = (&forces, &points) {
        let non_finite = forces.iter().filter(|f| !f.is_finite()).count();
        if non_finite > 0 {
            reporter.warn(format_args!(
                "{} of {} force rows are not finite; the input likely contains coincident points",
                non_finite,
                forces.len()
            ));
            for (first, second) in points.coincident_pairs() {
                reporter.debug(format_args!("points {} and {} share coordinates", first, second));
            }
        }
        write_forces(&config.output_path, forces, config.output_delimiter, &reporter)?;
    }
    Ok(forces)
}

/// Runs a whole job on `config.workers` in-process ranks and returns the force matrix.
///
/// # Errors
///
/// Any error on any rank fails the job; nothing is written unless every rank succeeded.
pub fn run_job(config: &JobConfig) -> Result<Vec<Vector3D>, ForceError> {
    config.validate()?;

    let results = LocalCluster::run(config.workers, |comm| run_rank(&comm, config))?;
    results
        .into_iter()
        .next()
        .flatten()
        .ok_or_else(|| ForceError::TransportMismatch("root rank produced no result".to_string()))
}
