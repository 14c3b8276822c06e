//! The solver seam.

use crate::XfoilResult;
use pg_core::AirfoilSpec;
use std::path::Path;

/// One polar-generation request: a single airfoil at a single Reynolds
/// number, swept over the full AOA list.
///
/// The working directory is explicit. Implementations write their
/// `Coordinates_*` / `Polar_*` artifacts there and nowhere else, so tests
/// can point jobs at isolated temp dirs.
#[derive(Debug, Clone)]
pub struct PolarJob<'a> {
    pub airfoil: &'a AirfoilSpec,
    pub alphas: &'a [f64],
    pub reynolds: f64,
    pub iter_limit: u32,
    pub workdir: &'a Path,
}

/// Backends that can produce a polar for one job.
///
/// Implementations must be thread-safe (Send + Sync). Their only
/// observable output is the set of files written into `job.workdir`; the
/// call blocks until the solver finishes (no timeout, no cancellation).
pub trait PolarSolver: Send + Sync {
    fn generate_polar(&self, job: &PolarJob<'_>) -> XfoilResult<()>;
}
