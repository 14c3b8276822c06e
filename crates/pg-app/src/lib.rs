//! pg-app: service layer for the polar batch runner.
//!
//! Orchestrates the per-Reynolds solver invocations and the artifact
//! cleanup for a single airfoil, streaming progress to the caller.

pub mod cleanup;
pub mod error;
pub mod progress;
pub mod run_service;

pub use cleanup::{cleanup, CleanupReport};
pub use error::{AppError, AppResult};
pub use progress::{BatchProgressEvent, BatchStage};
pub use run_service::{run_batch, run_batch_with_progress, BatchRequest, BatchSummary};
