//! Provider client
//!
//! Each call is one stateless request → decode → map sequence. The client
//! holds only its configured transport and endpoints, so it can be shared
//! freely across tasks.

use crate::config::{ClientConfig, ClientOption, Endpoints};
use crate::decode::XmlDecoder;
use crate::error::{Error, Result};
use crate::http::{HttpTransport, Transport};
use crate::mapper::{self, format_request_date};
use crate::types::{Currency, Report};
use bytes::Bytes;
use chrono::NaiveDate;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument};
use url::Url;

/// Query parameter selecting the report date
pub const DATE_QUERY_PARAM: &str = "date_req";

/// Client for the currency catalog and daily rate report endpoints
#[derive(Clone)]
pub struct CbrClient {
    transport: Arc<dyn Transport>,
    endpoints: Endpoints,
    decoder: XmlDecoder,
}

impl CbrClient {
    /// Build a client from options applied in order
    ///
    /// Without a transport option a default [`HttpTransport`] is used.
    pub fn new(options: impl IntoIterator<Item = ClientOption>) -> Result<Self> {
        Self::with_config(ClientConfig::from_options(options)?)
    }

    /// Build a client from an assembled config
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let transport = match config.transport {
            Some(transport) => transport,
            None => Arc::new(HttpTransport::new()?),
        };

        Ok(Self {
            transport,
            endpoints: config.endpoints,
            decoder: XmlDecoder::new(),
        })
    }

    /// Endpoints this client talks to
    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Fetch the full currency catalog
    #[instrument(skip_all)]
    pub async fn currencies(&self, cancel: &CancellationToken) -> Result<Vec<Currency>> {
        let body = self.fetch(&self.endpoints.catalog, cancel).await?;
        mapper::map_catalog(&self.decoder, &body)
    }

    /// Fetch the rate report for `date`, or the latest one when `None`
    #[instrument(skip(self, cancel))]
    pub async fn rates_report(
        &self,
        cancel: &CancellationToken,
        date: Option<NaiveDate>,
    ) -> Result<Report> {
        let url = self.report_url(date);
        let body = self.fetch(&url, cancel).await?;
        mapper::map_report(&self.decoder, &body)
    }

    /// URL of the daily report, with `date_req` when a date is requested
    pub fn report_url(&self, date: Option<NaiveDate>) -> Url {
        let mut url = self.endpoints.daily.clone();
        if let Some(date) = date {
            url.query_pairs_mut()
                .append_pair(DATE_QUERY_PARAM, &format_request_date(date));
        }
        url
    }

    async fn fetch(&self, url: &Url, cancel: &CancellationToken) -> Result<Bytes> {
        if cancel.is_cancelled() {
            return Err(Error::Cancelled);
        }

        let body = self.transport.get(url, cancel).await?;

        // A body that arrives after cancellation is discarded
        if cancel.is_cancelled() {
            debug!("Discarding response from {} after cancellation", url);
            return Err(Error::Cancelled);
        }
        Ok(body)
    }
}

impl std::fmt::Debug for CbrClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CbrClient")
            .field("endpoints", &self.endpoints)
            .finish_non_exhaustive()
    }
}
