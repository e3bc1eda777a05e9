//! Response decoder module
//!
//! # Overview
//!
//! Upstream documents are not UTF-8: they declare a legacy Cyrillic charset
//! (usually `windows-1251`) in their prologue. The decoder reads that label,
//! resolves it through a [`CharsetResolver`], transcodes the body to UTF-8
//! and deserializes it with quick-xml.

mod charset;
mod decoders;
mod types;

pub use charset::declared_encoding;
pub use decoders::XmlDecoder;
pub use types::{CharsetResolver, WhatwgResolver};
