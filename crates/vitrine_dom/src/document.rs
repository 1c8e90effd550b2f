//! Retained document surface
//!
//! [`Document`] models the slice of a page that the Vitrine utilities read
//! and mutate: root and body element state, named meta tags, appended head
//! hints, image and anchor elements, and the viewport rectangle. All
//! methods take `&self`; interior state is guarded per collection so the
//! document can be shared behind an `Arc` by the theme manager and the
//! asset loaders at the same time.

use std::sync::RwLock;

use slotmap::{new_key_type, SlotMap};
use rustc_hash::FxHashMap;

use crate::element::Element;
use crate::geometry::Rect;
use crate::hints::LinkHint;

new_key_type! {
    /// Unique identifier for an image element
    pub struct ImageId;

    /// Unique identifier for an anchor element
    pub struct AnchorId;
}

/// An image element with optional deferred (pending) sources
///
/// A pending source is the parked URL an image carries before lazy loading
/// promotes it to the live `src`/`srcset`.
#[derive(Debug, Clone, Default)]
pub struct ImageElement {
    pub src: Option<String>,
    pub srcset: Option<String>,
    pub pending_src: Option<String>,
    pub pending_srcset: Option<String>,
    pub classes: Element,
    pub bounds: Rect,
}

impl ImageElement {
    /// An image with a live source, loaded eagerly
    pub fn eager(src: impl Into<String>, bounds: Rect) -> Self {
        Self {
            src: Some(src.into()),
            bounds,
            ..Default::default()
        }
    }

    /// An image whose source is parked until lazy loading promotes it
    pub fn deferred(pending_src: impl Into<String>, bounds: Rect) -> Self {
        Self {
            pending_src: Some(pending_src.into()),
            bounds,
            ..Default::default()
        }
    }

    /// Park a srcset alongside the pending source
    pub fn with_pending_srcset(mut self, srcset: impl Into<String>) -> Self {
        self.pending_srcset = Some(srcset.into());
        self
    }

    pub fn has_pending_source(&self) -> bool {
        self.pending_src.is_some() || self.pending_srcset.is_some()
    }
}

/// A link element that can be prefetched at most once
#[derive(Debug, Clone)]
pub struct Anchor {
    pub href: String,
    pub prefetched: bool,
}

impl Anchor {
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            prefetched: false,
        }
    }

    /// Whether the anchor points inside this site (path-absolute href)
    pub fn is_internal(&self) -> bool {
        self.href.starts_with('/')
    }
}

/// The retained document surface
#[derive(Default)]
pub struct Document {
    root: RwLock<Element>,
    body: RwLock<Element>,
    metas: RwLock<FxHashMap<String, String>>,
    head_links: RwLock<Vec<LinkHint>>,
    images: RwLock<SlotMap<ImageId, ImageElement>>,
    anchors: RwLock<SlotMap<AnchorId, Anchor>>,
    viewport: RwLock<Rect>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    // ========== Root element ==========

    pub fn set_root_attribute(&self, name: &str, value: &str) {
        self.root.write().unwrap().set_attribute(name, value);
    }

    pub fn root_attribute(&self, name: &str) -> Option<String> {
        self.root.read().unwrap().attribute(name).map(str::to_string)
    }

    pub fn add_root_class(&self, class: &str) -> bool {
        self.root.write().unwrap().add_class(class)
    }

    pub fn remove_root_class(&self, class: &str) -> bool {
        self.root.write().unwrap().remove_class(class)
    }

    pub fn has_root_class(&self, class: &str) -> bool {
        self.root.read().unwrap().has_class(class)
    }

    // ========== Body element ==========

    pub fn add_body_class(&self, class: &str) -> bool {
        self.body.write().unwrap().add_class(class)
    }

    pub fn remove_body_class(&self, class: &str) -> bool {
        self.body.write().unwrap().remove_class(class)
    }

    pub fn has_body_class(&self, class: &str) -> bool {
        self.body.read().unwrap().has_class(class)
    }

    // ========== Meta tags ==========

    /// Declare a named meta tag so it can be updated later
    pub fn register_meta(&self, name: impl Into<String>, content: impl Into<String>) {
        self.metas
            .write()
            .unwrap()
            .insert(name.into(), content.into());
    }

    /// Update a registered meta tag's content
    ///
    /// Returns false without inserting when no tag of that name exists;
    /// callers that need the tag must register it up front.
    pub fn set_meta_content(&self, name: &str, content: &str) -> bool {
        let mut metas = self.metas.write().unwrap();
        match metas.get_mut(name) {
            Some(existing) => {
                *existing = content.to_string();
                true
            }
            None => false,
        }
    }

    pub fn meta_content(&self, name: &str) -> Option<String> {
        self.metas.read().unwrap().get(name).cloned()
    }

    // ========== Head resource hints ==========

    /// Append a resource hint; hints accumulate and are never deduplicated
    pub fn append_head_link(&self, hint: LinkHint) {
        self.head_links.write().unwrap().push(hint);
    }

    pub fn head_links(&self) -> Vec<LinkHint> {
        self.head_links.read().unwrap().clone()
    }

    // ========== Images ==========

    pub fn insert_image(&self, image: ImageElement) -> ImageId {
        self.images.write().unwrap().insert(image)
    }

    pub fn image(&self, id: ImageId) -> Option<ImageElement> {
        self.images.read().unwrap().get(id).cloned()
    }

    /// Mutate an image in place; returns None when the id is stale
    pub fn update_image<R>(&self, id: ImageId, f: impl FnOnce(&mut ImageElement) -> R) -> Option<R> {
        self.images.write().unwrap().get_mut(id).map(f)
    }

    /// Ids of every image still carrying a parked source
    pub fn pending_images(&self) -> Vec<ImageId> {
        self.images
            .read()
            .unwrap()
            .iter()
            .filter(|(_, img)| img.has_pending_source())
            .map(|(id, _)| id)
            .collect()
    }

    // ========== Anchors ==========

    pub fn insert_anchor(&self, href: impl Into<String>) -> AnchorId {
        self.anchors.write().unwrap().insert(Anchor::new(href))
    }

    pub fn anchor(&self, id: AnchorId) -> Option<Anchor> {
        self.anchors.read().unwrap().get(id).cloned()
    }

    /// Ids of anchors pointing inside this site
    pub fn internal_anchors(&self) -> Vec<AnchorId> {
        self.anchors
            .read()
            .unwrap()
            .iter()
            .filter(|(_, a)| a.is_internal())
            .map(|(id, _)| id)
            .collect()
    }

    /// Latch an anchor as prefetched
    ///
    /// Returns true on the first call for an anchor, false afterwards (and
    /// for stale ids), so callers can key a one-shot side effect on it.
    pub fn mark_prefetched(&self, id: AnchorId) -> bool {
        let mut anchors = self.anchors.write().unwrap();
        match anchors.get_mut(id) {
            Some(anchor) if !anchor.prefetched => {
                anchor.prefetched = true;
                true
            }
            _ => false,
        }
    }

    // ========== Viewport ==========

    pub fn set_viewport(&self, viewport: Rect) {
        *self.viewport.write().unwrap() = viewport;
    }

    pub fn viewport(&self) -> Rect {
        *self.viewport.read().unwrap()
    }
}
