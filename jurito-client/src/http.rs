//! reqwest implementation of the backend seam.
//!
//! Two fire-and-forget integrations: a multipart upload for contract
//! summarization and a JSON POST for petition generation. No auth, no retry;
//! failures map into the structured [`BackendError`] taxonomy and the views
//! decide what the user sees.

use std::path::Path;

use anyhow::{Context, Result as AnyResult};
use async_trait::async_trait;
use reqwest::multipart;
use reqwest::Client;
use tracing::debug;

use jurito_core::{Backend, BackendError, IntakeRecord, PetitionReply, Result, SummaryReply};

use crate::config::BackendConfig;

/// HTTP client for the remote assistant backend
pub struct HttpBackend {
    client: Client,
    config: BackendConfig,
}

impl HttpBackend {
    /// Build a client from the given endpoint configuration
    pub fn new(config: BackendConfig) -> AnyResult<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(std::time::Duration::from_secs(secs));
        }
        let client = builder.build().context("Failed to build HTTP client")?;
        Ok(Self { client, config })
    }

    /// Build a client from ~/.jurito/config.toml and environment overrides
    pub fn from_config() -> AnyResult<Self> {
        Self::new(BackendConfig::load()?)
    }
}

/// Map a reqwest failure onto the error taxonomy
fn map_request_error(err: reqwest::Error) -> BackendError {
    if err.is_timeout() {
        BackendError::Timeout
    } else {
        BackendError::transport(err.to_string())
    }
}

/// Reject non-success statuses, logging a truncated body for diagnosis
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let truncated = if body.len() > 500 {
        // Back off to a char boundary so truncation never panics on UTF-8
        let cut = (0..=500).rev().find(|i| body.is_char_boundary(*i)).unwrap_or(0);
        format!("{}...", &body[..cut])
    } else {
        body
    };
    debug!(status = status.as_u16(), body = %truncated, "backend returned error status");
    Err(BackendError::Status {
        status: status.as_u16(),
    })
}

#[async_trait]
impl Backend for HttpBackend {
    async fn summarize_contract(&self, file: &Path) -> Result<SummaryReply> {
        let bytes = tokio::fs::read(file)
            .await
            .map_err(|e| BackendError::file_read(file, e.to_string()))?;

        let file_name = file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "contrato.pdf".to_string());

        // The backend reads exactly one part named "file"
        let part = multipart::Part::bytes(bytes)
            .file_name(file_name)
            .mime_str("application/pdf")
            .map_err(map_request_error)?;
        let form = multipart::Form::new().part("file", part);

        let url = self.config.summarize_url();
        debug!(%url, file = %file.display(), "uploading contract for summarization");

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(map_request_error)?;

        let response = check_status(response).await?;
        response
            .json::<SummaryReply>()
            .await
            .map_err(|e| BackendError::invalid_response(e.to_string()))
    }

    async fn generate_petition(&self, record: &IntakeRecord) -> Result<PetitionReply> {
        let url = self.config.petition_url();
        debug!(%url, "submitting intake record for petition generation");

        let response = self
            .client
            .post(&url)
            .json(record)
            .send()
            .await
            .map_err(map_request_error)?;

        let response = check_status(response).await?;
        response
            .json::<PetitionReply>()
            .await
            .map_err(|e| BackendError::invalid_response(e.to_string()))
    }
}
