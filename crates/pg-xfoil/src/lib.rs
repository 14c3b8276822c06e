//! pg-xfoil: the XFOIL solver boundary.
//!
//! The solver is an opaque external collaborator. This crate owns the seam
//! (`PolarSolver`), the real subprocess backend (`XfoilProcess`) and the
//! names of the artifacts XFOIL drops into the working directory.

pub mod artifacts;
pub mod driver;
pub mod process;

pub use artifacts::{
    coordinates_artifact_name, polar_artifact_name, BL_TEMP_FILE, COORDINATES_PREFIX,
    POLAR_PREFIX,
};
pub use driver::{PolarJob, PolarSolver};
pub use process::XfoilProcess;

pub type XfoilResult<T> = Result<T, XfoilError>;

#[derive(thiserror::Error, Debug)]
pub enum XfoilError {
    #[error("Failed to launch solver '{binary}': {source}")]
    Spawn {
        binary: String,
        source: std::io::Error,
    },

    #[error("Solver I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Solver exited with {status} (Re = {reynolds})")]
    Failed {
        status: std::process::ExitStatus,
        reynolds: f64,
    },

    #[error("Coordinate file not found for airfoil: {name}")]
    CoordinatesMissing { name: String },
}
