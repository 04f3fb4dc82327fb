//! Remote explanation service client.
//!
//! The collaborator is a text-generation endpoint that turns a resolution
//! into a short didactic explanation. It is strictly best-effort: every
//! failure mode surfaces as an [`ExplanationError`] and the composer falls
//! back to the local template.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::model::{Bin, FeedbackResult, Language, Resolution, WasteItem};

pub type ExplanationResult<T> = Result<T, ExplanationError>;

#[derive(Debug, Error)]
pub enum ExplanationError {
    #[error("http transport error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("service returned HTTP {status}: {body}")]
    Api { status: u16, body: String },
    #[error("malformed response: {0}")]
    InvalidResponse(String),
}

/// What the service needs to know about one resolution.
#[derive(Debug, Clone, Serialize)]
pub struct ExplanationRequest {
    pub item_name: String,
    pub item_description: String,
    pub chosen_bin: String,
    pub correct_bin: String,
    pub correct: bool,
    pub language: Language,
}

impl ExplanationRequest {
    pub fn for_resolution(item: &WasteItem, resolution: Resolution, language: Language) -> Self {
        let correct = matches!(resolution, Resolution::Drop { bin } if bin == item.correct_bin);
        Self {
            item_name: item.name.get(language).to_string(),
            item_description: item.description.get(language).to_string(),
            chosen_bin: Bin::get(resolution.displayed_bin()).name(language).to_string(),
            correct_bin: Bin::get(item.correct_bin).name(language).to_string(),
            correct,
            language,
        }
    }

    pub fn from_feedback(feedback: &FeedbackResult, language: Language) -> Self {
        Self {
            item_name: feedback.item.name.get(language).to_string(),
            item_description: feedback.item.description.get(language).to_string(),
            chosen_bin: Bin::get(feedback.chosen_bin).name(language).to_string(),
            correct_bin: Bin::get(feedback.item.correct_bin)
                .name(language)
                .to_string(),
            correct: feedback.correct,
            language,
        }
    }
}

#[async_trait]
pub trait ExplanationService: Send + Sync {
    async fn explain(&self, request: &ExplanationRequest) -> ExplanationResult<String>;
}

/// HTTP client for the explanation endpoint.
///
/// Posts the request as JSON, tagged with the configured generation model,
/// and expects `{ "message": "..." }` back. The per-client timeout bounds
/// how long a pending feedback card can wait for an upgrade.
#[derive(Debug, Clone)]
pub struct HttpExplanationService {
    client: Client,
    endpoint: String,
    model: String,
}

#[derive(Debug, Serialize)]
struct ExplanationBody<'a> {
    model: &'a str,
    #[serde(flatten)]
    request: &'a ExplanationRequest,
}

#[derive(Debug, Deserialize)]
struct ExplanationResponse {
    message: String,
}

impl HttpExplanationService {
    pub fn new(
        endpoint: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> ExplanationResult<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
            model: model.into(),
        })
    }
}

#[async_trait]
impl ExplanationService for HttpExplanationService {
    async fn explain(&self, request: &ExplanationRequest) -> ExplanationResult<String> {
        debug!("requesting explanation for {}", request.item_name);

        let body = ExplanationBody {
            model: &self.model,
            request,
        };
        let response = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ExplanationError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ExplanationResponse = serde_json::from_str(&body)
            .map_err(|e| ExplanationError::InvalidResponse(e.to_string()))?;
        if parsed.message.trim().is_empty() {
            return Err(ExplanationError::InvalidResponse(
                "empty message".to_string(),
            ));
        }
        Ok(parsed.message)
    }
}
