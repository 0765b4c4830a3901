//! Remote client for the distance API

use reqwest::{Client, Response};
use std::time::Duration;
use thiserror::Error;

use geodist_core::{Coordinates, DistanceResult};

use crate::server::messages::{DistanceRequest, ErrorBody, UnitEntry};

/// Errors seen by a remote caller
#[derive(Error, Debug)]
pub enum ClientError {
    /// Request never produced an HTTP response, or the body was unreadable
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("Request rejected with status {status} ({code}): {message}")]
    Rejected {
        status: u16,
        code: String,
        message: String,
    },
}

/// Client for a running geodist node
#[derive(Debug, Clone)]
pub struct DistanceClient {
    http: Client,
    base_url: String,
}

impl DistanceClient {
    /// Create a client for `base_url`, e.g. `http://127.0.0.1:50051`
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let http = Client::builder().timeout(Duration::from_secs(30)).build()?;
        Ok(Self::with_client(http, base_url))
    }

    /// Create a client around an existing `reqwest::Client`
    pub fn with_client(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Call `geodesic_distance` on the node.
    ///
    /// The invalid-coordinates sentinel comes back as `Ok`, exactly as the
    /// service produced it.
    pub async fn geodesic_distance(
        &self,
        source: Coordinates,
        destination: Coordinates,
        unit: &str,
    ) -> Result<DistanceResult, ClientError> {
        let request = DistanceRequest {
            source,
            destination,
            unit: unit.to_string(),
        };
        let response = self
            .http
            .post(self.url("/api/geodesic_distance"))
            .json(&request)
            .send()
            .await?;

        let response = Self::check(response).await?;
        Ok(response.json().await?)
    }

    /// Units the node accepts
    pub async fn units(&self) -> Result<Vec<UnitEntry>, ClientError> {
        let response = self.http.get(self.url("/api/units")).send().await?;
        let response = Self::check(response).await?;
        Ok(response.json().await?)
    }

    /// Whether the node answers its health check
    pub async fn health(&self) -> Result<bool, ClientError> {
        let response = self.http.get(self.url("/health")).send().await?;
        Ok(response.status().is_success())
    }

    async fn check(response: Response) -> Result<Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        // axum extractor rejections are plain text, not ErrorBody
        let text = response.text().await?;
        let body = serde_json::from_str::<ErrorBody>(&text).unwrap_or_else(|_| ErrorBody {
            code: "HTTP_ERROR".to_string(),
            message: text,
        });

        Err(ClientError::Rejected {
            status: status.as_u16(),
            code: body.code,
            message: body.message,
        })
    }
}
