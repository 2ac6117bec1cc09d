use async_trait::async_trait;

use crate::error::Result;
use crate::http::{HttpRequest, HttpResponse};

/// Performs the network round-trip for a built request.
///
/// Any HTTP status must come back as an `HttpResponse`; only connection-level
/// failures are errors. No retries happen above this layer.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse>;
}
