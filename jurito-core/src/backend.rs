//! Backend seam between the view-state machines and the HTTP client.
//!
//! The views never touch the network directly: they call through this trait,
//! which jurito-client implements over reqwest and tests implement with
//! canned replies. A missing response field is data (`None`), not an error;
//! the views substitute the fixed fallback string for it.

use std::path::Path;

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::Result;
use crate::record::IntakeRecord;

/// Reply from the contract-summarization endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct SummaryReply {
    /// Summary text, absent when the backend could not produce one
    #[serde(rename = "resumo")]
    pub summary: Option<String>,
}

/// Reply from the petition-generation endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct PetitionReply {
    /// Generated petition document, absent when generation failed server-side
    #[serde(rename = "peticao")]
    pub document: Option<String>,
}

/// The two operations the remote assistant backend exposes
#[async_trait]
pub trait Backend: Send + Sync {
    /// Upload a contract PDF and ask for a plain-language summary
    async fn summarize_contract(&self, file: &Path) -> Result<SummaryReply>;

    /// Submit the full intake record and ask for a legal petition document
    async fn generate_petition(&self, record: &IntakeRecord) -> Result<PetitionReply>;
}
