//! Relay service abstraction layer.
//!
//! Provides a trait-based seam for relayed request execution, so routes
//! depend on the interface and tests can inject mock implementations.

use super::executor::execute_request;
use super::types::{RelayError, RequestDescriptor, UpstreamReply};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Trait for services that replay a request descriptor against its target.
pub trait RelayService: Send + Sync {
    /// Executes one relayed request and returns the upstream reply or a
    /// classified failure.
    fn relay(
        &self,
        descriptor: RequestDescriptor,
    ) -> Pin<Box<dyn Future<Output = Result<UpstreamReply, RelayError>> + Send + '_>>;
}

/// Default relay implementation backed by a shared `reqwest::Client`.
///
/// The client is built without a global timeout; the deadline is threaded
/// per-request from the descriptor.
#[derive(Default, Clone)]
pub struct HttpRelayService {
    client: reqwest::Client,
}

impl HttpRelayService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new `HttpRelayService` wrapped in an `Arc`.
    pub fn arc() -> Arc<Self> {
        Arc::new(Self::new())
    }
}

impl RelayService for HttpRelayService {
    fn relay(
        &self,
        descriptor: RequestDescriptor,
    ) -> Pin<Box<dyn Future<Output = Result<UpstreamReply, RelayError>> + Send + '_>> {
        Box::pin(async move { execute_request(&self.client, descriptor).await })
    }
}
