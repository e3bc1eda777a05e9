//! Charset detection from the XML prologue

use regex::bytes::Regex;
use std::sync::LazyLock;

/// Only the prologue is inspected; it always sits at the very start
const PROLOGUE_SCAN_LIMIT: usize = 256;

static ENCODING_DECL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\s*<\?xml[^>]*?\sencoding\s*=\s*["']([A-Za-z][A-Za-z0-9._:\-]*)["']"#)
        .expect("encoding declaration pattern is valid")
});

/// Extract the `encoding` label from an XML declaration, if present
pub fn declared_encoding(bytes: &[u8]) -> Option<&str> {
    let head = &bytes[..bytes.len().min(PROLOGUE_SCAN_LIMIT)];
    let caps = ENCODING_DECL.captures(head)?;
    caps.get(1)
        .and_then(|m| std::str::from_utf8(m.as_bytes()).ok())
}
