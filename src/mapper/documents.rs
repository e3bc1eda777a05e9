//! Wire layout of the provider's XML documents

use super::scalars::{lenient_int, trimmed_text, LocaleDecimal};
use crate::types::{Currency, Rate};
use serde::Deserialize;

// ============================================================================
// Catalog (XML_valFull.asp)
// ============================================================================

/// `<Valuta>` root holding repeated `<Item>` entries
#[derive(Debug, Deserialize)]
pub(crate) struct CatalogDocument {
    #[serde(rename = "Item", default)]
    pub items: Vec<CurrencyRecord>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CurrencyRecord {
    #[serde(rename = "@ID")]
    id: String,
    #[serde(rename = "Name", default)]
    name: String,
    #[serde(rename = "EngName", default)]
    eng_name: String,
    #[serde(rename = "Nominal", default, deserialize_with = "lenient_int")]
    nominal: i32,
    #[serde(rename = "ParentCode", default, deserialize_with = "trimmed_text")]
    parent_code: String,
    #[serde(rename = "ISO_Num_Code", default, deserialize_with = "lenient_int")]
    iso_num_code: i32,
    #[serde(rename = "ISO_Char_Code", default)]
    iso_char_code: String,
}

impl From<CurrencyRecord> for Currency {
    fn from(record: CurrencyRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            eng_name: record.eng_name,
            nominal: record.nominal,
            parent_code: record.parent_code,
            iso_num_code: record.iso_num_code,
            iso_char_code: record.iso_char_code,
        }
    }
}

// ============================================================================
// Daily report (XML_daily.asp)
// ============================================================================

/// `<ValCurs Date="DD.MM.YYYY">` root holding repeated `<Valute>` entries
#[derive(Debug, Deserialize)]
pub(crate) struct ReportDocument {
    #[serde(rename = "@Date")]
    pub date: String,
    #[serde(rename = "Valute", default)]
    pub rates: Vec<RateRecord>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RateRecord {
    #[serde(rename = "@ID")]
    id: String,
    #[serde(rename = "NumCode", default, deserialize_with = "lenient_int")]
    num_code: i32,
    #[serde(rename = "CharCode", default)]
    char_code: String,
    #[serde(rename = "Nominal", default, deserialize_with = "lenient_int")]
    nominal: i32,
    #[serde(rename = "Name", default)]
    name: String,
    #[serde(rename = "Value", default)]
    value: LocaleDecimal,
}

impl From<RateRecord> for Rate {
    fn from(record: RateRecord) -> Self {
        Self {
            id: record.id,
            num_code: record.num_code,
            char_code: record.char_code,
            nominal: record.nominal,
            name: record.name,
            value: record.value.into(),
        }
    }
}
