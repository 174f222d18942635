//! Food image classification seam
//!
//! The image model is an opaque collaborator: image bytes in, label and
//! confidence out. Handlers receive the handle by injection and report the
//! model as unavailable when none was constructed at startup.

use async_trait::async_trait;
use shared::Classification;

use crate::error::AppResult;

/// Image classification model abstraction.
///
/// Implementations must be safe for concurrent read-only invocation; the
/// handle is constructed once at startup and shared across requests.
#[async_trait]
pub trait FoodClassifier: Send + Sync {
    /// Classify a food photo into one of the known labels.
    async fn classify(&self, image: &[u8]) -> AppResult<Classification>;
}
