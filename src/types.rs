//! Typed results returned by the client
//!
//! These are plain owned values built once per decoded response. They carry
//! serde derives so callers can persist or forward them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// Currency Catalog
// ============================================================================

/// A currency catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    /// Provider identifier (e.g. "R01010")
    pub id: String,
    /// Localized (Russian) name
    pub name: String,
    /// English name
    pub eng_name: String,
    /// Number of units a quoted rate applies to
    pub nominal: i32,
    /// Identifier of the grouping entry, whitespace-trimmed
    pub parent_code: String,
    /// ISO 4217 numeric code, 0 when absent
    pub iso_num_code: i32,
    /// ISO 4217 alphabetic code, empty when absent
    pub iso_char_code: String,
}

impl Currency {
    /// ISO numeric code, if the entry has one
    pub fn iso_numeric(&self) -> Option<i32> {
        (self.iso_num_code != 0).then_some(self.iso_num_code)
    }

    /// ISO alphabetic code, if the entry has one
    pub fn iso_alpha(&self) -> Option<&str> {
        (!self.iso_char_code.is_empty()).then_some(self.iso_char_code.as_str())
    }
}

// ============================================================================
// Rate Report
// ============================================================================

/// A single currency's rate on the report date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rate {
    /// Provider identifier, matches [`Currency::id`]
    pub id: String,
    /// ISO numeric code
    pub num_code: i32,
    /// ISO alphabetic code
    pub char_code: String,
    /// Number of foreign units the value is quoted for
    pub nominal: i32,
    /// Localized name
    pub name: String,
    /// Roubles per `nominal` units of the foreign currency
    pub value: f64,
}

impl Rate {
    /// Rate for a single unit of the foreign currency
    pub fn unit_value(&self) -> Option<f64> {
        (self.nominal != 0).then(|| self.value / f64::from(self.nominal))
    }
}

/// Rates for one effective date, in the order the provider sent them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub rates: Vec<Rate>,
    pub date: NaiveDate,
}

impl Report {
    /// Find a rate by alphabetic code, ignoring case
    pub fn find(&self, char_code: &str) -> Option<&Rate> {
        self.rates
            .iter()
            .find(|r| r.char_code.eq_ignore_ascii_case(char_code))
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}
