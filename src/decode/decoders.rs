//! XML decoder
//!
//! Normalizes the response body to UTF-8 using the charset the document
//! declares, then hands the text to quick-xml's serde deserializer.

use super::charset::declared_encoding;
use super::types::{CharsetResolver, WhatwgResolver};
use crate::error::{Error, Result};
use encoding_rs::{Encoding, UTF_8};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use tracing::trace;

/// Charset-aware XML decoder
#[derive(Debug, Clone, Default)]
pub struct XmlDecoder<R = WhatwgResolver> {
    resolver: R,
}

impl XmlDecoder {
    /// Create a decoder using WHATWG charset labels
    pub fn new() -> Self {
        Self::default()
    }
}

impl<R: CharsetResolver> XmlDecoder<R> {
    /// Create a decoder with a custom charset resolver
    pub fn with_resolver(resolver: R) -> Self {
        Self { resolver }
    }

    /// Pick the encoding for a document: BOM first, then the declared label,
    /// then UTF-8 (the XML default)
    pub fn detect_encoding<'a>(&self, bytes: &'a [u8]) -> Result<(&'static Encoding, &'a [u8])> {
        if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
            trace!("Charset from BOM: {}", encoding.name());
            return Ok((encoding, &bytes[bom_len..]));
        }

        match declared_encoding(bytes) {
            Some(label) => {
                let encoding = self.resolver.resolve(label).ok_or_else(|| {
                    Error::UnsupportedCharset {
                        label: label.to_string(),
                    }
                })?;
                trace!("Charset from declaration '{}': {}", label, encoding.name());
                Ok((encoding, bytes))
            }
            None => Ok((UTF_8, bytes)),
        }
    }

    /// Convert the raw body to UTF-8 text
    pub fn decode_text<'a>(&self, bytes: &'a [u8]) -> Result<Cow<'a, str>> {
        let (encoding, body) = self.detect_encoding(bytes)?;
        encoding
            .decode_without_bom_handling_and_without_replacement(body)
            .ok_or(Error::MalformedText {
                encoding: encoding.name(),
            })
    }

    /// Decode the raw body into a serde-deserializable document
    pub fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T> {
        let text = self.decode_text(bytes)?;
        Ok(quick_xml::de::from_str(&text)?)
    }
}
