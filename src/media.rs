//! Image URL resolution with an explicit fallback order.
//!
//! The CMS stores relative upload paths; absolute URLs (already on a CDN
//! or external host) pass through untouched. Tier lookup falls back to the
//! asset's canonical rendition, so resolution always yields a usable URL.

use crate::models::{ImageTier, MediaAsset};

/// Prefix a CMS-relative path with the configured origin. URLs that are
/// already absolute (start with `http`) are returned unchanged.
pub fn absolute_url(base_url: &str, path: &str) -> String {
    if path.starts_with("http") {
        return path.to_string();
    }
    format!("{}{}", base_url, path)
}

/// Resolve the best URL for an asset at the requested tier.
///
/// Fallback order: the tier's rendition if the CMS generated one, else the
/// canonical upload. Either way the result is absolutized against `base_url`.
pub fn best_image_url(asset: &MediaAsset, tier: ImageTier, base_url: &str) -> String {
    let url = asset
        .formats
        .as_ref()
        .and_then(|formats| formats.get(tier))
        .map(|format| format.url.as_str())
        .unwrap_or(asset.url.as_str());

    absolute_url(base_url, url)
}
