//! Upload Client
//!
//! HTTP transport that posts one file to the analysis backend as a
//! multipart form and decodes the returned graph list.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;
use tracing::Instrument;

use crate::config::ClientConfig;
use crate::dashboard::UploadFailure;
use crate::graph::{decode_upload_response, DecodeError, GraphDescriptor};
use crate::upload::{UploadPayload, UPLOAD_FIELD};

/// Header carrying the per-request correlation id
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Anything that can deliver a payload to the backend and return its graphs
#[async_trait]
pub trait UploadTransport: Send + Sync {
    async fn upload(&self, payload: UploadPayload) -> Result<Vec<GraphDescriptor>, ClientError>;
}

/// reqwest-backed upload client
pub struct UploadClient {
    client: Client,
    config: ClientConfig,
}

impl UploadClient {
    /// Create a new upload client with the given configuration
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(ClientError::Request)?;

        Ok(Self { client, config })
    }

    /// Get the current configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn form(payload: UploadPayload) -> Result<Form, ClientError> {
        let content_type = payload.content_type();
        let part = Part::bytes(payload.bytes)
            .file_name(payload.file_name)
            .mime_str(content_type)
            .map_err(ClientError::Request)?;

        Ok(Form::new().part(UPLOAD_FIELD, part))
    }

    async fn send(
        &self,
        payload: UploadPayload,
        request_id: &str,
    ) -> Result<Vec<GraphDescriptor>, ClientError> {
        tracing::info!(
            endpoint = %self.config.endpoint,
            file = %payload.file_name,
            bytes = payload.len(),
            "Uploading file"
        );

        let form = Self::form(payload)?;

        let response = self
            .client
            .post(&self.config.endpoint)
            .header(REQUEST_ID_HEADER, request_id)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ClientError::Timeout
                } else if e.is_connect() {
                    ClientError::Unavailable(self.config.endpoint.clone())
                } else {
                    ClientError::Request(e)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await.map_err(ClientError::Request)?;
        let graphs = decode_upload_response(&body)?;

        tracing::info!(graphs = graphs.len(), "Upload response decoded");
        Ok(graphs)
    }
}

#[async_trait]
impl UploadTransport for UploadClient {
    async fn upload(&self, payload: UploadPayload) -> Result<Vec<GraphDescriptor>, ClientError> {
        let request_id = uuid::Uuid::new_v4().to_string();
        let span = tracing::info_span!("upload", request_id = %request_id);

        self.send(payload, &request_id).instrument(span).await
    }
}

// ============================================
// Errors
// ============================================

/// Errors that can occur while uploading a file
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Failed to read upload file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Backend unavailable at {0}")]
    Unavailable(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("Backend returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

impl ClientError {
    /// Classify this error for display on the dashboard
    pub fn failure(&self) -> UploadFailure {
        match self {
            ClientError::Decode(_) => UploadFailure::malformed(self.to_string()),
            _ => UploadFailure::request_failed(self.to_string()),
        }
    }
}

impl From<ClientError> for UploadFailure {
    fn from(e: ClientError) -> Self {
        e.failure()
    }
}
