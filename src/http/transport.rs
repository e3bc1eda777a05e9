//! Transport abstraction
//!
//! The client only needs "GET this URL, give me the body". Keeping that
//! behind a trait lets callers plug in their own stack and lets tests
//! substitute canned responders.

use crate::error::Result;
use async_trait::async_trait;
use bytes::Bytes;
use tokio_util::sync::CancellationToken;
use url::Url;

/// A GET-capable requester
///
/// Implementations must return [`Error::Cancelled`](crate::Error::Cancelled)
/// once `cancel` fires, whether before or during the request.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Fetch `url` and return the complete response body
    async fn get(&self, url: &Url, cancel: &CancellationToken) -> Result<Bytes>;
}
