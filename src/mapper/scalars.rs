//! Field-level coercions applied while deserializing
//!
//! The provider formats numbers for a Russian locale and pads some codes
//! with spaces. These hooks run inside serde so a bad field aborts the whole
//! document instead of surfacing later.

use serde::de::{Deserializer, Error as _};
use serde::Deserialize;

/// A decimal written with a comma as the fractional separator
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LocaleDecimal(pub f64);

impl LocaleDecimal {
    /// Parse `"49,9059"` or `"10"` style input
    pub fn parse(raw: &str) -> Result<Self, std::num::ParseFloatError> {
        raw.trim().replacen(',', ".", 1).parse().map(Self)
    }
}

impl<'de> Deserialize<'de> for LocaleDecimal {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(|e| D::Error::custom(format!("invalid decimal '{raw}': {e}")))
    }
}

impl From<LocaleDecimal> for f64 {
    fn from(value: LocaleDecimal) -> Self {
        value.0
    }
}

/// Integer element; empty or missing means 0
pub fn lenient_int<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i32, D::Error> {
    let raw = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(0);
    }
    raw.parse()
        .map_err(|e| D::Error::custom(format!("invalid integer '{raw}': {e}")))
}

/// Text element with surrounding whitespace removed; missing means empty
pub fn trimmed_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let raw = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
    Ok(raw.trim().to_string())
}
