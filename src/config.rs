//! Client configuration
//!
//! A [`ClientConfig`] starts from defaults and is adjusted by an ordered list
//! of [`ClientOption`]s. Each option may reject its input, which aborts
//! client construction before any request is made.

use crate::error::{Error, Result};
use crate::http::{HttpClientConfig, HttpTransport, Transport};
use std::sync::Arc;
use url::Url;

/// Production catalog endpoint
pub const DEFAULT_CATALOG_URL: &str = "http://www.cbr.ru/scripts/XML_valFull.asp";

/// Production daily report endpoint
pub const DEFAULT_DAILY_URL: &str = "http://www.cbr.ru/scripts/XML_daily.asp";

const CATALOG_PATH: &str = "scripts/XML_valFull.asp";
const DAILY_PATH: &str = "scripts/XML_daily.asp";

// ============================================================================
// Endpoints
// ============================================================================

/// URLs of the two provider endpoints
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// Full currency catalog
    pub catalog: Url,
    /// Daily rate report
    pub daily: Url,
}

impl Endpoints {
    /// Build endpoints from explicit URLs
    pub fn new(catalog: &str, daily: &str) -> Result<Self> {
        Ok(Self {
            catalog: Url::parse(catalog)?,
            daily: Url::parse(daily)?,
        })
    }

    /// Place the standard endpoint paths under another host
    pub fn with_base(base: &str) -> Result<Self> {
        let mut base = Url::parse(base)?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(Self {
            catalog: base.join(CATALOG_PATH)?,
            daily: base.join(DAILY_PATH)?,
        })
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            catalog: Url::parse(DEFAULT_CATALOG_URL).expect("default catalog URL is valid"),
            daily: Url::parse(DEFAULT_DAILY_URL).expect("default daily URL is valid"),
        }
    }
}

// ============================================================================
// Client Config
// ============================================================================

/// Settings a client is built from
#[derive(Clone, Default)]
pub struct ClientConfig {
    /// Transport to send requests through; `None` means the default `HttpTransport`
    pub transport: Option<Arc<dyn Transport>>,
    /// Endpoint URLs
    pub endpoints: Endpoints,
}

impl ClientConfig {
    /// Apply options in order, stopping at the first failure
    pub fn from_options(options: impl IntoIterator<Item = ClientOption>) -> Result<Self> {
        let mut config = Self::default();
        for option in options {
            option(&mut config)?;
        }
        Ok(config)
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("has_transport", &self.transport.is_some())
            .field("endpoints", &self.endpoints)
            .finish()
    }
}

// ============================================================================
// Options
// ============================================================================

/// A single named construction parameter
pub type ClientOption = Box<dyn FnOnce(&mut ClientConfig) -> Result<()> + Send>;

/// Use a custom transport; `None` is rejected
pub fn with_transport(transport: Option<Arc<dyn Transport>>) -> ClientOption {
    Box::new(move |config: &mut ClientConfig| {
        let transport = transport.ok_or_else(|| Error::config("transport must not be empty"))?;
        config.transport = Some(transport);
        Ok(())
    })
}

/// Send requests through an existing reqwest client; `None` is rejected
pub fn with_http_client(client: Option<reqwest::Client>) -> ClientOption {
    Box::new(move |config: &mut ClientConfig| {
        let client = client.ok_or_else(|| Error::config("HTTP client must not be empty"))?;
        config.transport = Some(Arc::new(HttpTransport::from_client(client)));
        Ok(())
    })
}

/// Build the default transport from custom HTTP settings
pub fn with_http_config(http: HttpClientConfig) -> ClientOption {
    Box::new(move |config: &mut ClientConfig| {
        let transport =
            HttpTransport::with_config(http).map_err(|e| Error::config(e.to_string()))?;
        config.transport = Some(Arc::new(transport));
        Ok(())
    })
}

/// Serve both endpoints from another host, e.g. a mirror or a test server
pub fn with_base_url(base: impl Into<String>) -> ClientOption {
    let base = base.into();
    Box::new(move |config: &mut ClientConfig| {
        config.endpoints = Endpoints::with_base(&base)?;
        Ok(())
    })
}

/// Use explicit endpoint URLs
pub fn with_endpoints(catalog: impl Into<String>, daily: impl Into<String>) -> ClientOption {
    let (catalog, daily) = (catalog.into(), daily.into());
    Box::new(move |config: &mut ClientConfig| {
        config.endpoints = Endpoints::new(&catalog, &daily)?;
        Ok(())
    })
}
