//! Response mapper module
//!
//! Maps decoded provider documents into [`Currency`] lists and [`Report`]s.
//! Every coercion failure is fatal: a document either maps completely or
//! not at all.

mod documents;
mod scalars;

pub use scalars::LocaleDecimal;

use crate::decode::{CharsetResolver, XmlDecoder};
use crate::error::{Error, Result};
use crate::types::{Currency, Report};
use chrono::NaiveDate;
use documents::{CatalogDocument, ReportDocument};
use tracing::debug;

/// Date format of the report's `Date` attribute
pub const REPORT_DATE_FORMAT: &str = "%d.%m.%Y";

/// Date format of the `date_req` query parameter
pub const REQUEST_DATE_FORMAT: &str = "%d/%m/%Y";

/// Map a catalog document body into currencies
pub fn map_catalog<R: CharsetResolver>(
    decoder: &XmlDecoder<R>,
    body: &[u8],
) -> Result<Vec<Currency>> {
    let document: CatalogDocument = decoder.decode(body)?;
    let currencies: Vec<Currency> = document.items.into_iter().map(Currency::from).collect();
    debug!("Mapped {} catalog entries", currencies.len());
    Ok(currencies)
}

/// Map a daily report document body into a [`Report`]
pub fn map_report<R: CharsetResolver>(decoder: &XmlDecoder<R>, body: &[u8]) -> Result<Report> {
    let document: ReportDocument = decoder.decode(body)?;
    let date = parse_report_date(&document.date)?;
    let rates: Vec<_> = document.rates.into_iter().map(Into::into).collect();
    debug!("Mapped {} rates for {}", rates.len(), date);
    Ok(Report { rates, date })
}

/// Parse a `DD.MM.YYYY` report date
pub fn parse_report_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, REPORT_DATE_FORMAT).map_err(|e| Error::InvalidDate {
        value: value.to_string(),
        message: e.to_string(),
    })
}

/// Format a date for the `date_req` query parameter (`DD/MM/YYYY`)
pub fn format_request_date(date: NaiveDate) -> String {
    date.format(REQUEST_DATE_FORMAT).to_string()
}
