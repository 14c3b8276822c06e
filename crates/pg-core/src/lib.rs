//! pg-core: stable foundation for polargen.
//!
//! Contains:
//! - airfoil (parsed airfoil identifier, parametric vs coordinate file)
//! - sweep (AOA sweep definition + batch sweep parameters)
//! - error (shared error types)

pub mod airfoil;
pub mod error;
pub mod sweep;

// Re-exports: nice ergonomics for downstream crates
pub use airfoil::AirfoilSpec;
pub use error::{PgError, PgResult};
pub use sweep::{AoaSweep, SweepParameters, DEFAULT_REYNOLDS, EXTENDED_REYNOLDS};
