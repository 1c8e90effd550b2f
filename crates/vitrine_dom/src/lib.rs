//! Vitrine DOM
//!
//! A retained, headless document surface for the Vitrine page utilities.
//!
//! The crate models only what the sibling crates touch:
//!
//! - **Root/body element state**: attributes and class lists
//! - **Meta tags**: named, registered up front, updated in place
//! - **Head resource hints**: accumulating `preload`/`prefetch` links
//! - **Images**: live and parked (deferred) sources plus bounds
//! - **Anchors**: hrefs with a one-shot prefetch latch
//! - **Viewport**: the rectangle lazy loading tests proximity against
//!
//! All [`Document`] methods take `&self`; the document is shared behind an
//! `Arc` between the theme manager and the asset loaders.
//!
//! # Example
//!
//! ```
//! use vitrine_dom::{Document, ImageElement, Rect};
//!
//! let doc = Document::new();
//! doc.set_viewport(Rect::new(0.0, 0.0, 1280.0, 720.0));
//! let img = doc.insert_image(ImageElement::deferred(
//!     "/photo.webp",
//!     Rect::new(0.0, 2000.0, 600.0, 400.0),
//! ));
//! assert_eq!(doc.pending_images(), vec![img]);
//! ```

mod document;
mod element;
mod geometry;
mod hints;

pub use document::{Anchor, AnchorId, Document, ImageElement, ImageId};
pub use element::Element;
pub use geometry::Rect;
pub use hints::{AssetKind, HintRel, LinkHint};
