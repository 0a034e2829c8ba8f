//! Piston HTTP adapter

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use super::piston_wire::{PistonExecuteRequest, PistonExecuteResponse};
use crate::config::SandboxConfig;
use crate::errors::{MentorError, Result, SandboxError};
use crate::features::execution::domain::SandboxPort;
use crate::shared::models::{ExecutionRequest, SandboxResult};

pub struct PistonClient {
    client: reqwest::Client,
    config: SandboxConfig,
}

impl PistonClient {
    pub fn new(config: SandboxConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().map_err(MentorError::client)?;

        Ok(Self { client, config })
    }

    fn execute_url(&self) -> String {
        format!("{}/execute", self.config.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl SandboxPort for PistonClient {
    async fn execute(
        &self,
        request: &ExecutionRequest,
    ) -> std::result::Result<SandboxResult, SandboxError> {
        let body = PistonExecuteRequest::from_request(request, &self.config);
        let url = self.execute_url();
        debug!("POST {} stdin_len={}", url, request.stdin.len());

        let response = self.client.post(&url).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SandboxError::Status {
                status: status.as_u16(),
            });
        }

        let reply: PistonExecuteResponse = response.json().await?;
        Ok(reply.into_result())
    }
}
