//! # haven-adapter-classifier-http
//!
//! HTTP image-classification adapter — implements the
//! [`CatClassifier`](haven_app::ports::CatClassifier) port against a cloud
//! label-detection service.
//!
//! The service receives the raw image bytes and answers with the labels it
//! recognised, each with a percent-scale confidence. An image counts as
//! containing a cat when any label named "cat" reaches the requested
//! confidence. Decoding, model choice, and authentication are the service's
//! concern.
//!
//! ## Dependency rule
//! Depends on `haven-app` (for the port trait) and `haven-domain` (for domain
//! types). The `app` and `domain` crates must never reference this adapter.

pub mod error;

use std::time::Duration;

use serde::Deserialize;

use haven_app::ports::CatClassifier;
use haven_domain::error::HavenError;
use haven_domain::image::CameraImage;

use crate::error::ClassifierError;

/// Configuration for the HTTP classifier client.
pub struct Config {
    /// Full URL of the label-detection endpoint.
    pub endpoint: String,
    /// Per-request timeout. Timeout/retry policy lives here, at the
    /// collaborator boundary — never inside the security service.
    pub timeout: Duration,
}

impl Config {
    /// Build an [`HttpCatClassifier`] from this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClassifierError`] if the underlying HTTP client cannot be
    /// constructed.
    pub fn build(self) -> Result<HttpCatClassifier, ClassifierError> {
        let client = reqwest::Client::builder().timeout(self.timeout).build()?;

        Ok(HttpCatClassifier {
            client,
            endpoint: self.endpoint,
        })
    }
}

/// One recognised label in a classification response.
#[derive(Debug, Deserialize)]
struct Label {
    name: String,
    confidence: f32,
}

/// Response body of the label-detection endpoint.
#[derive(Debug, Deserialize)]
struct LabelResponse {
    labels: Vec<Label>,
}

/// Whether any label names a cat at or above `confidence_threshold`.
fn labels_contain_cat(labels: &[Label], confidence_threshold: f32) -> bool {
    labels
        .iter()
        .any(|label| label.name.eq_ignore_ascii_case("cat") && label.confidence >= confidence_threshold)
}

/// HTTP client for the cloud label-detection service.
pub struct HttpCatClassifier {
    client: reqwest::Client,
    endpoint: String,
}

impl CatClassifier for HttpCatClassifier {
    async fn contains_cat(
        &self,
        image: &CameraImage,
        confidence_threshold: f32,
    ) -> Result<bool, HavenError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header(reqwest::header::CONTENT_TYPE, "application/octet-stream")
            .body(image.as_bytes().to_vec())
            .send()
            .await
            .map_err(ClassifierError::from)?
            .error_for_status()
            .map_err(ClassifierError::from)?;

        let body: LabelResponse = response.json().await.map_err(ClassifierError::from)?;

        Ok(labels_contain_cat(&body.labels, confidence_threshold))
    }
}
