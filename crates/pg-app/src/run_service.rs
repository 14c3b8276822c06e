//! Batch execution service.

use std::path::PathBuf;
use std::time::Instant;

use pg_core::{AirfoilSpec, SweepParameters};
use pg_xfoil::{PolarJob, PolarSolver};
use tracing::info;

use crate::cleanup::{cleanup, CleanupReport};
use crate::error::{AppError, AppResult};
use crate::progress::{BatchProgressEvent, BatchStage};

/// Request to run one polar batch: one airfoil, every Reynolds number in
/// the parameter set, one shared AOA sweep.
#[derive(Debug, Clone)]
pub struct BatchRequest {
    pub airfoil: AirfoilSpec,
    pub params: SweepParameters,
    /// Where the solver runs and where its artifacts land. Explicit so
    /// callers (and tests) control the namespace the batch mutates.
    pub workdir: PathBuf,
}

/// Outcome of a completed batch.
#[derive(Debug, Clone)]
pub struct BatchSummary {
    pub polars_generated: usize,
    pub cleanup: CleanupReport,
}

fn emit(
    progress_cb: &mut Option<&mut dyn FnMut(BatchProgressEvent)>,
    stage: BatchStage,
    started: Instant,
) {
    if let Some(cb) = progress_cb.as_deref_mut() {
        cb(BatchProgressEvent {
            stage,
            elapsed_wall_s: started.elapsed().as_secs_f64(),
        });
    }
}

/// Execute a batch without progress reporting.
pub fn run_batch(solver: &dyn PolarSolver, request: &BatchRequest) -> AppResult<BatchSummary> {
    run_batch_with_progress(solver, request, None)
}

/// Execute a batch, streaming stage events to an optional callback.
///
/// Invocations run strictly sequentially: every one of them reads and
/// writes the shared working directory, and the artifact names collide
/// across Reynolds numbers. Any solver failure aborts the batch at once;
/// artifacts already written stay on disk.
pub fn run_batch_with_progress(
    solver: &dyn PolarSolver,
    request: &BatchRequest,
    mut progress_cb: Option<&mut dyn FnMut(BatchProgressEvent)>,
) -> AppResult<BatchSummary> {
    let started = Instant::now();
    emit(&mut progress_cb, BatchStage::CheckingAirfoil, started);

    // A named coordinate file must exist before the first solver call.
    if let AirfoilSpec::CoordinateFile(_) = &request.airfoil {
        if request
            .airfoil
            .resolve_coordinate_file(&request.workdir)
            .is_none()
        {
            return Err(AppError::AirfoilNotFound {
                name: request.airfoil.to_string(),
            });
        }
    }

    let alphas = request.params.aoa.points();
    let total = request.params.reynolds.len();

    for (i, &reynolds) in request.params.reynolds.iter().enumerate() {
        emit(
            &mut progress_cb,
            BatchStage::GeneratingPolar {
                index: i + 1,
                total,
                reynolds,
            },
            started,
        );
        info!(airfoil = %request.airfoil, reynolds, "generating polar");

        let job = PolarJob {
            airfoil: &request.airfoil,
            alphas: &alphas,
            reynolds,
            iter_limit: request.params.iter_limit,
            workdir: &request.workdir,
        };
        solver.generate_polar(&job)?;
    }

    emit(&mut progress_cb, BatchStage::CleaningUp, started);
    let report = cleanup(&request.workdir, &request.airfoil)?;

    emit(&mut progress_cb, BatchStage::Completed, started);
    Ok(BatchSummary {
        polars_generated: total,
        cleanup: report,
    })
}
