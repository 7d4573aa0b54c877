//! Classifier-specific error type wrapping HTTP failures.

use haven_domain::error::HavenError;

/// Errors originating from the HTTP classification layer.
#[derive(Debug, thiserror::Error)]
pub enum ClassifierError {
    /// The request failed, timed out, or the service answered with an error
    /// status.
    #[error("classification request failed")]
    Http(#[from] reqwest::Error),
}

impl From<ClassifierError> for HavenError {
    fn from(err: ClassifierError) -> Self {
        Self::Classifier(Box::new(err))
    }
}
