//! Decoder types and traits

use encoding_rs::Encoding;

/// Maps a charset label from an XML prologue to a text transform
pub trait CharsetResolver: Send + Sync {
    /// Return the encoding for `label`, or `None` if it is unknown
    fn resolve(&self, label: &str) -> Option<&'static Encoding>;
}

/// Resolves labels per the WHATWG Encoding Standard
///
/// Covers `windows-1251`, `cp1251`, `koi8-r`, `utf-8`, `iso-8859-5` and the
/// other labels browsers accept.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhatwgResolver;

impl CharsetResolver for WhatwgResolver {
    fn resolve(&self, label: &str) -> Option<&'static Encoding> {
        Encoding::for_label(label.as_bytes())
    }
}
