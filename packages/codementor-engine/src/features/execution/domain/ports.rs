//! Port for the remote execution sandbox

use async_trait::async_trait;

use crate::errors::SandboxError;
use crate::shared::models::{ExecutionRequest, SandboxResult};

/// Runs one (code, stdin) submission remotely.
///
/// Transport failures are returned to the caller; implementations never
/// substitute a default result.
#[async_trait]
pub trait SandboxPort: Send + Sync {
    async fn execute(&self, request: &ExecutionRequest) -> Result<SandboxResult, SandboxError>;
}
