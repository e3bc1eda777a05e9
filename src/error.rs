//! Error types for cbr-rates
//!
//! Every public operation returns `Result<T, Error>`. Variants are grouped
//! by the stage that produced them so callers can branch on [`ErrorKind`]
//! (for example to retry transport failures but not decode failures).

use thiserror::Error;

/// The main error type for cbr-rates
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Transport Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Transport error: {message}")]
    Transport { message: String },

    #[error("Request cancelled")]
    Cancelled,

    // ============================================================================
    // Decode Errors
    // ============================================================================
    #[error("Unsupported charset label: {label}")]
    UnsupportedCharset { label: String },

    #[error("Response body is not valid {encoding}")]
    MalformedText { encoding: &'static str },

    #[error("XML parsing error: {message}")]
    XmlParse { message: String },

    #[error("Invalid date '{value}': {message}")]
    InvalidDate { value: String, message: String },
}

/// Coarse classification of an [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Invalid option supplied while building a client
    Configuration,
    /// Network or status failure reported by the transport
    Transport,
    /// The caller's cancellation token fired
    Cancelled,
    /// The response body could not be decoded or mapped
    Decode,
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create a generic transport error, for custom [`Transport`](crate::http::Transport) impls
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Create an XML parse error
    pub fn xml(message: impl Into<String>) -> Self {
        Self::XmlParse {
            message: message.into(),
        }
    }

    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Config { .. } | Error::InvalidUrl(_) => ErrorKind::Configuration,
            Error::Http(_) | Error::HttpStatus { .. } | Error::Transport { .. } => {
                ErrorKind::Transport
            }
            Error::Cancelled => ErrorKind::Cancelled,
            Error::UnsupportedCharset { .. }
            | Error::MalformedText { .. }
            | Error::XmlParse { .. }
            | Error::InvalidDate { .. } => ErrorKind::Decode,
        }
    }

    /// Check if the operation was aborted by its cancellation token
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Error::Cancelled)
    }
}

impl From<quick_xml::DeError> for Error {
    fn from(err: quick_xml::DeError) -> Self {
        Self::xml(err.to_string())
    }
}

/// Result type alias for cbr-rates
pub type Result<T> = std::result::Result<T, Error>;
