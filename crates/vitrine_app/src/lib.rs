//! Vitrine App
//!
//! The composition root for a Vitrine page: one call wires up font
//! loading, critical image preloads, lazy image observation, link
//! prefetching, and connection hinting over a shared [`Document`].
//!
//! The pipeline performs the eager work at init and hands back the
//! stateful pieces; the host's event loop forwards the signals it
//! observes:
//!
//! - scroll/resize -> [`AssetPipeline::on_scroll`]
//! - frame/timer tick -> [`AssetPipeline::tick`]
//! - platform font-ready signal -> [`AssetPipeline::fonts_ready`]
//! - pointer enters an anchor -> [`AssetPipeline::on_hover`]
//!
//! Theme management composes alongside (see `vitrine_theme`); it shares
//! the document but no state with the asset pipeline.

mod connection;
mod prefetch;

pub use connection::{apply_connection_class, ConnectionKind, SLOW_CONNECTION_CLASS};
pub use prefetch::PrefetchObserver;

use std::sync::Arc;

use tracing::debug;

use vitrine_dom::{AnchorId, AssetKind, Document, LinkHint};
use vitrine_font::{generate_google_fonts_url, preload_fonts, FontConfig, FontLoader, FontLoaderConfig};
use vitrine_image::{preload_critical_images, LazyConfig, LazyLoader};

/// Everything the bootstrap needs to know about the page's assets
#[derive(Debug, Clone, Default)]
pub struct AssetOptions {
    /// Above-the-fold images preloaded eagerly
    pub critical_images: Vec<String>,
    /// Webfonts the page requests; a css2 stylesheet preload is emitted
    /// when non-empty
    pub fonts: Vec<FontConfig>,
    /// Font URLs to preload (woff2)
    pub font_urls: Vec<String>,
    pub lazy: LazyConfig,
    pub font_loader: FontLoaderConfig,
    /// Effective connection type, when the platform exposes one
    pub connection: Option<ConnectionKind>,
}

/// The wired-up asset machinery for one page
pub struct AssetPipeline {
    document: Arc<Document>,
    lazy: LazyLoader,
    fonts: FontLoader,
    prefetch: PrefetchObserver,
}

impl AssetPipeline {
    /// Run the eager bootstrap and return the live pipeline
    ///
    /// Order follows the page's needs: fonts first (text renders on every
    /// page), then critical image preloads, then lazy/prefetch
    /// observation, then connection hinting.
    pub fn init(document: Arc<Document>, options: AssetOptions) -> Self {
        debug!(
            "AssetPipeline::init - {} critical image(s), {} font url(s)",
            options.critical_images.len(),
            options.font_urls.len()
        );

        let mut fonts = FontLoader::new(options.font_loader);
        fonts.start(&document);
        if !options.fonts.is_empty() {
            let stylesheet = generate_google_fonts_url(&options.fonts);
            document.append_head_link(LinkHint::preload(stylesheet).with_kind(AssetKind::Style));
        }
        preload_fonts(&document, options.font_urls);

        preload_critical_images(&document, options.critical_images);

        let mut lazy = LazyLoader::new(options.lazy);
        lazy.observe_pending(&document);
        // Images already near the viewport load on the first scan.
        lazy.scan(&document);

        let mut prefetch = PrefetchObserver::new();
        prefetch.observe(&document);

        if let Some(kind) = options.connection {
            apply_connection_class(&document, kind);
        }

        Self {
            document,
            lazy,
            fonts,
            prefetch,
        }
    }

    /// The document this pipeline drives
    pub fn document(&self) -> &Arc<Document> {
        &self.document
    }

    /// Viewport moved: rescan lazy images; returns the number promoted
    pub fn on_scroll(&mut self) -> usize {
        self.lazy.scan(&self.document)
    }

    /// Timer/frame tick: drive the font fallback; true while pending
    pub fn tick(&mut self) -> bool {
        self.fonts.tick(&self.document)
    }

    /// The platform reported fonts ready
    pub fn fonts_ready(&mut self) {
        self.fonts.fonts_ready(&self.document);
    }

    /// Pointer entered an anchor
    pub fn on_hover(&mut self, id: AnchorId) {
        self.prefetch.on_hover(&self.document, id);
    }

    /// Touch started on an anchor
    pub fn on_touch_start(&mut self, id: AnchorId) {
        self.prefetch.on_touch_start(&self.document, id);
    }

    /// Content changed: register new pending images and anchors
    pub fn on_content_changed(&mut self) {
        self.lazy.observe_pending(&self.document);
        self.prefetch.observe(&self.document);
    }
}
