//! Image reference extraction from listing-page elements.
//!
//! The grid serves lazy-loaded images, so the usable URL can live in any of
//! four attributes. First non-empty wins: `src`, `data-src`, then the last
//! entry of `srcset` / `data-srcset`. Elements that yield nothing are dropped;
//! input order is preserved for the survivors.

use crate::url_norm;

/// Attribute values copied out of one rendered image element.
///
/// The DOM handle itself is never retained — the session layer copies these
/// four values out while the element list is live, and extraction works on
/// the copies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageAttrs {
    pub src: Option<String>,
    pub data_src: Option<String>,
    pub srcset: Option<String>,
    pub data_srcset: Option<String>,
}

/// A resolved absolute image URL with its 1-based extraction position.
///
/// `index` is reporting-only: the downloader numbers files by position in the
/// batch it is handed, so the two agree for a full extraction pass but the
/// filename never comes from this field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    pub url: String,
    pub index: usize,
}

fn non_empty(v: &Option<String>) -> Option<&str> {
    v.as_deref().filter(|s| !s.is_empty())
}

/// Picks the URL token of the last entry in a `srcset`-style value
/// (`"<url> <descriptor>, <url> <descriptor>, ..."`).
///
/// The last entry is assumed to be the highest-resolution variant. That holds
/// for this site's markup; it is not a general `srcset` rule. Trailing commas
/// are tolerated: empty segments at the end are skipped, not treated as the
/// last entry.
fn srcset_last_url(srcset: &str) -> Option<String> {
    let last = srcset.rsplit(',').map(str::trim).find(|s| !s.is_empty())?;
    let url = last.split(' ').next()?;
    Some(url.to_string())
}

/// Resolves the raw (pre-normalization) URL value for one element, applying
/// the fixed attribute priority.
fn resolve_raw(attrs: &ImageAttrs) -> Option<String> {
    if let Some(src) = non_empty(&attrs.src) {
        return Some(src.to_string());
    }
    if let Some(data_src) = non_empty(&attrs.data_src) {
        return Some(data_src.to_string());
    }
    non_empty(&attrs.srcset)
        .or_else(|| non_empty(&attrs.data_srcset))
        .and_then(srcset_last_url)
}

/// Walks the elements in order and produces one [`ImageRef`] per element that
/// resolves to a non-empty absolute URL. Non-resolving elements are dropped,
/// not padded, so output indices are contiguous from 1.
pub fn extract(elements: &[ImageAttrs]) -> Vec<ImageRef> {
    let refs: Vec<ImageRef> = elements
        .iter()
        .filter_map(|attrs| url_norm::normalize(resolve_raw(attrs).as_deref()))
        .enumerate()
        .map(|(i, url)| ImageRef { url, index: i + 1 })
        .collect();

    tracing::info!("found {} images", refs.len());
    for r in &refs {
        tracing::info!("image url: {}", r.url);
    }
    refs
}
