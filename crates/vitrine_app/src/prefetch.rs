//! Prefetch-on-hover for internal navigation
//!
//! Hovering a link is a strong navigation signal, so the next page's
//! document is prefetched the first time the pointer (or a touch) reaches
//! an internal anchor. The latch lives on the anchor itself: however many
//! hover and touch events arrive, at most one prefetch hint is inserted
//! per anchor.

use rustc_hash::FxHashSet;
use tracing::debug;

use vitrine_dom::{AnchorId, Document, LinkHint};

/// Registers internal anchors and prefetches them on first hover
#[derive(Debug, Default)]
pub struct PrefetchObserver {
    observed: FxHashSet<AnchorId>,
}

impl PrefetchObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register every internal (path-absolute) anchor for prefetching
    ///
    /// External anchors are never prefetched. Repeated calls pick up
    /// anchors added since the last one.
    pub fn observe(&mut self, document: &Document) {
        for id in document.internal_anchors() {
            self.observed.insert(id);
        }
    }

    /// Pointer entered an anchor
    pub fn on_hover(&mut self, document: &Document, id: AnchorId) {
        self.prefetch(document, id);
    }

    /// Touch started on an anchor (the mobile hover equivalent)
    pub fn on_touch_start(&mut self, document: &Document, id: AnchorId) {
        self.prefetch(document, id);
    }

    /// Number of anchors registered for prefetching
    pub fn observed_count(&self) -> usize {
        self.observed.len()
    }

    fn prefetch(&mut self, document: &Document, id: AnchorId) {
        if !self.observed.contains(&id) {
            return;
        }
        // mark_prefetched latches: only the first event inserts a hint.
        if !document.mark_prefetched(id) {
            return;
        }
        if let Some(anchor) = document.anchor(id) {
            debug!("prefetching {}", anchor.href);
            document.append_head_link(LinkHint::prefetch(anchor.href));
        }
    }
}
