// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # cbr-rates
//!
//! Client for the Central Bank of Russia currency service: the full
//! currency catalog and the daily exchange-rate report.
//!
//! ## Features
//!
//! - **Charset Normalization**: documents declared as `windows-1251` (or any
//!   other WHATWG label) are transcoded to UTF-8 before parsing
//! - **Locale Coercion**: comma decimals, padded codes and `DD.MM.YYYY`
//!   dates become `f64`, trimmed strings and `NaiveDate`
//! - **Pluggable Transport**: swap the reqwest transport for anything
//!   implementing [`http::Transport`]
//! - **Cooperative Cancellation**: every fetch takes a `CancellationToken`
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use cbr_rates::{CbrClient, Result};
//! use tokio_util::sync::CancellationToken;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = CbrClient::new([])?;
//!     let cancel = CancellationToken::new();
//!
//!     let currencies = client.currencies(&cancel).await?;
//!     let report = client.rates_report(&cancel, None).await?;
//!
//!     if let Some(usd) = report.find("USD") {
//!         println!("{}: {} RUB", report.date, usd.value);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                          CbrClient                           │
//! │   currencies(cancel)        rates_report(cancel, date)       │
//! └──────────────────────────────────────────────────────────────┘
//!                                │
//! ┌──────────────┬───────────────┴──────────────┬────────────────┐
//! │  Transport   │           Decoder            │     Mapper     │
//! ├──────────────┼──────────────────────────────┼────────────────┤
//! │ GET + cancel │ prologue charset → UTF-8     │ Item → Currency│
//! │ status check │ quick-xml serde              │ Valute → Rate  │
//! └──────────────┴──────────────────────────────┴────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(missing_docs)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Typed results: currencies, rates, reports
pub mod types;

/// Transport trait and reqwest implementation
pub mod http;

/// Charset-aware XML decoding
pub mod decode;

/// Document to typed result mapping
pub mod mapper;

/// Client configuration and options
pub mod config;

/// The provider client
pub mod client;

// ============================================================================
// Re-exports
// ============================================================================

pub use client::CbrClient;
pub use config::{ClientConfig, ClientOption};
pub use error::{Error, ErrorKind, Result};
pub use types::{Currency, Rate, Report};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
