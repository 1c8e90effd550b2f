//! Viewport-proximity lazy loading
//!
//! [`LazyLoader`] defers image fetches until an image nears the viewport.
//! Images carrying a parked source are flagged with [`LAZY_LOADING_CLASS`]
//! and registered; on each [`LazyLoader::scan`] the viewport - expanded by
//! the configured root margin - is tested against every registered image,
//! and those whose visible fraction reaches the threshold get their parked
//! source promoted to the live one. Promotion is one-shot: a promoted
//! image leaves the observation set.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::debug;

use vitrine_dom::{Document, ImageId};

/// Class an image carries while its source is parked
pub const LAZY_LOADING_CLASS: &str = "lazy-loading";

/// Class an image carries after promotion
pub const LAZY_LOADED_CLASS: &str = "lazy-loaded";

/// Lazy loading tuning
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct LazyConfig {
    /// Distance (px) outside the viewport at which loading starts
    #[serde(default = "default_root_margin")]
    pub root_margin: f32,

    /// Minimum visible fraction that counts as intersecting
    #[serde(default = "default_threshold")]
    pub threshold: f32,
}

fn default_root_margin() -> f32 {
    50.0
}

fn default_threshold() -> f32 {
    0.01
}

impl Default for LazyConfig {
    fn default() -> Self {
        Self {
            root_margin: default_root_margin(),
            threshold: default_threshold(),
        }
    }
}

/// Observes pending images and promotes them on viewport proximity
#[derive(Debug, Default)]
pub struct LazyLoader {
    config: LazyConfig,
    observed: FxHashSet<ImageId>,
}

impl LazyLoader {
    pub fn new(config: LazyConfig) -> Self {
        Self {
            config,
            observed: FxHashSet::default(),
        }
    }

    /// Register every image with a parked source for observation
    ///
    /// Newly registered images get the loading class; images already under
    /// observation are left alone, so repeated calls are safe.
    pub fn observe_pending(&mut self, document: &Document) {
        for id in document.pending_images() {
            if self.observed.insert(id) {
                document.update_image(id, |img| {
                    img.classes.add_class(LAZY_LOADING_CLASS);
                });
            }
        }
    }

    /// Promote every observed image near the viewport; returns the count
    pub fn scan(&mut self, document: &Document) -> usize {
        if self.observed.is_empty() {
            return 0;
        }

        let root = document.viewport().expand(self.config.root_margin);
        let threshold = self.config.threshold;

        let ready: Vec<ImageId> = self
            .observed
            .iter()
            .copied()
            .filter(|&id| match document.image(id) {
                Some(img) => img.bounds.intersection_ratio(&root) >= threshold,
                // Stale ids drop out of observation below.
                None => true,
            })
            .collect();

        let mut promoted = 0;
        for id in ready {
            self.observed.remove(&id);
            let did_promote = document
                .update_image(id, |img| {
                    if let Some(src) = img.pending_src.take() {
                        img.src = Some(src);
                    }
                    if let Some(srcset) = img.pending_srcset.take() {
                        img.srcset = Some(srcset);
                    }
                    img.classes.remove_class(LAZY_LOADING_CLASS);
                    img.classes.add_class(LAZY_LOADED_CLASS);
                })
                .is_some();
            if did_promote {
                promoted += 1;
            }
        }

        if promoted > 0 {
            debug!("LazyLoader::scan promoted {promoted} image(s)");
        }
        promoted
    }

    /// Number of images still under observation
    pub fn observed_count(&self) -> usize {
        self.observed.len()
    }
}
