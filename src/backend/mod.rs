// src/backend/mod.rs

use crate::errors::Result;
use crate::relay::{BackendPayload, RunOutcome};

pub mod piston;

pub use piston::PistonBackend;

/// Seam between the relay and the external execution service, so the
/// normalization logic can be exercised without a live backend.
///
/// Note: We're not using async_trait here, so implementers must handle async directly.
pub trait ExecutionBackend: Send + Sync {
    /// Submits one payload for execution and returns the raw process outcome.
    fn run(
        &self,
        payload: &BackendPayload,
    ) -> impl std::future::Future<Output = Result<RunOutcome>> + Send;
}
