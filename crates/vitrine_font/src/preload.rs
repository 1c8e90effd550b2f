//! Critical font preloading

use tracing::debug;

use vitrine_dom::{AssetKind, Document, LinkHint};

/// MIME type assumed for preloaded fonts
pub const WOFF2_MIME: &str = "font/woff2";

/// Insert a cross-origin preload hint for each critical font URL
///
/// Font fetches are always cross-origin-mode requests, so the hint must be
/// too or the preloaded response goes unused. woff2 is assumed.
pub fn preload_fonts<I, S>(document: &Document, urls: I)
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    for url in urls {
        let href = url.into();
        debug!("preloading font {href}");
        document.append_head_link(
            LinkHint::preload(href)
                .with_kind(AssetKind::Font)
                .with_mime_type(WOFF2_MIME)
                .with_cross_origin(),
        );
    }
}
