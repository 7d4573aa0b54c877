//! Classifier port — camera image analysis.

use std::future::Future;

use haven_domain::error::HavenError;
use haven_domain::image::CameraImage;

/// Answers "does this image contain a cat, with what confidence".
///
/// The classifier is a black box; model and service details live in the
/// adapter. Remote implementations should enforce their own timeout — the
/// security service treats the call as fast, synchronous, and
/// non-cancellable.
pub trait CatClassifier {
    /// Whether `image` contains a cat at or above `confidence_threshold`
    /// (percent scale, 0–100).
    fn contains_cat(
        &self,
        image: &CameraImage,
        confidence_threshold: f32,
    ) -> impl Future<Output = Result<bool, HavenError>> + Send;
}

impl<T: CatClassifier + Send + Sync> CatClassifier for std::sync::Arc<T> {
    fn contains_cat(
        &self,
        image: &CameraImage,
        confidence_threshold: f32,
    ) -> impl Future<Output = Result<bool, HavenError>> + Send {
        (**self).contains_cat(image, confidence_threshold)
    }
}
