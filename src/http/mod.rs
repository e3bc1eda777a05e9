//! HTTP transport module
//!
//! Defines the [`Transport`] seam the client talks through and the default
//! reqwest implementation.
//!
//! # Features
//!
//! - **Pluggable**: anything implementing [`Transport`] can back a client
//! - **Cancellable**: every request races the caller's `CancellationToken`
//! - **Status checked**: non-2xx responses surface as `Error::HttpStatus`

mod client;
mod transport;

pub use client::{HttpClientConfig, HttpClientConfigBuilder, HttpTransport};
pub use transport::Transport;
