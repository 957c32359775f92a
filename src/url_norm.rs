//! URL normalization: turn a raw attribute value into an absolute,
//! scheme-qualified URL.
//!
//! Shopify-style markup serves protocol-relative (`//cdn...`) and
//! root-relative (`/cdn...`) image URLs; both are absolutized against the
//! Darkins origin. Nothing here validates the result — a garbage value simply
//! fails at fetch time.

use crate::site;

/// Normalizes a raw `src`-like attribute value to an absolute URL.
///
/// - absent or empty → `None`
/// - `//host/path` → `https://host/path`
/// - `/path` → `https://darkins.in/path`
/// - no `http://`/`https://` prefix → `https://darkins.in/<value>`
/// - already absolute → unchanged
pub fn normalize(raw: Option<&str>) -> Option<String> {
    let raw = raw?;
    if raw.is_empty() {
        return None;
    }
    if let Some(rest) = raw.strip_prefix("//") {
        return Some(format!("https://{}", rest));
    }
    if raw.starts_with('/') {
        return Some(format!("{}{}", site::ORIGIN, raw));
    }
    if !raw.starts_with("http://") && !raw.starts_with("https://") {
        return Some(format!("{}/{}", site::ORIGIN, raw));
    }
    Some(raw.to_string())
}
