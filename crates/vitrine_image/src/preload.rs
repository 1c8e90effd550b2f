//! Critical image preloading

use tracing::debug;

use vitrine_dom::{AssetKind, Document, LinkHint};

/// Insert a preload hint for each above-the-fold image
///
/// Hints accumulate in the head: no deduplication, no removal. Callers
/// decide what counts as critical.
pub fn preload_critical_images<I, S>(document: &Document, paths: I)
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    for path in paths {
        let href = path.into();
        debug!("preloading critical image {href}");
        document.append_head_link(LinkHint::preload(href).with_kind(AssetKind::Image));
    }
}
