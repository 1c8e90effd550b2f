//! Vitrine Image
//!
//! Image loading optimization for the Vitrine document surface:
//!
//! - **Responsive sizing**: build a CSS `sizes` attribute value from
//!   per-breakpoint display widths
//! - **Lazy loading**: promote parked image sources on viewport proximity
//!   (see [`LazyLoader`])
//! - **Critical preloads**: head hints for above-the-fold images
//! - **Path classification**: local paths are served to the build
//!   pipeline's optimizer untouched; external URLs pass through
//!
//! # Example
//!
//! ```
//! use vitrine_image::{generate_sizes, ImageSizes};
//!
//! assert_eq!(
//!     generate_sizes(&ImageSizes::default()),
//!     "(max-width: 768px) 375px, (max-width: 1200px) 768px, 1200px",
//! );
//! ```

mod lazy;
mod preload;

pub use lazy::{LazyConfig, LazyLoader, LAZY_LOADED_CLASS, LAZY_LOADING_CLASS};
pub use preload::preload_critical_images;

use serde::{Deserialize, Serialize};

/// Breakpoint threshold between mobile and tablet layouts (px)
pub const TABLET_BREAKPOINT: u32 = 768;

/// Breakpoint threshold between tablet and desktop layouts (px)
pub const DESKTOP_BREAKPOINT: u32 = 1200;

/// Display widths for an image at each layout breakpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct ImageSizes {
    #[serde(default = "default_mobile")]
    pub mobile: u32,
    #[serde(default = "default_tablet")]
    pub tablet: u32,
    #[serde(default = "default_desktop")]
    pub desktop: u32,
}

fn default_mobile() -> u32 {
    375
}

fn default_tablet() -> u32 {
    768
}

fn default_desktop() -> u32 {
    1200
}

impl Default for ImageSizes {
    fn default() -> Self {
        Self {
            mobile: default_mobile(),
            tablet: default_tablet(),
            desktop: default_desktop(),
        }
    }
}

/// Build a CSS `sizes` attribute value from per-breakpoint widths
///
/// The breakpoint thresholds are fixed; only the display widths vary.
pub fn generate_sizes(sizes: &ImageSizes) -> String {
    format!(
        "(max-width: {TABLET_BREAKPOINT}px) {}px, (max-width: {DESKTOP_BREAKPOINT}px) {}px, {}px",
        sizes.mobile, sizes.tablet, sizes.desktop
    )
}

/// Whether a path points at another origin
pub fn is_external_path(path: &str) -> bool {
    path.starts_with("http://") || path.starts_with("https://")
}

/// Resolve the path an image should be requested from
///
/// Local (path-absolute) images are optimized by the build pipeline under
/// their original path, and external URLs are out of our hands, so both
/// pass through unchanged.
pub fn optimized_image_path(path: &str) -> &str {
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_sizes_string_is_exact() {
        assert_eq!(
            generate_sizes(&ImageSizes::default()),
            "(max-width: 768px) 375px, (max-width: 1200px) 768px, 1200px"
        );
    }

    #[test]
    fn overridden_sizes_keep_fixed_breakpoints() {
        let sizes = ImageSizes {
            mobile: 320,
            tablet: 640,
            desktop: 1024,
        };
        assert_eq!(
            generate_sizes(&sizes),
            "(max-width: 768px) 320px, (max-width: 1200px) 640px, 1024px"
        );
    }

    #[test]
    fn partial_override_via_struct_update() {
        let sizes = ImageSizes {
            mobile: 320,
            ..ImageSizes::default()
        };
        assert_eq!(
            generate_sizes(&sizes),
            "(max-width: 768px) 320px, (max-width: 1200px) 768px, 1200px"
        );
    }

    #[test]
    fn path_classification() {
        assert!(!is_external_path("/images/profile.webp"));
        assert!(is_external_path("https://cdn.example.com/a.webp"));
        assert!(is_external_path("http://cdn.example.com/a.webp"));
    }

    #[test]
    fn optimized_path_is_identity() {
        assert_eq!(optimized_image_path("/images/hero.webp"), "/images/hero.webp");
        assert_eq!(
            optimized_image_path("https://cdn.example.com/a.webp"),
            "https://cdn.example.com/a.webp"
        );
    }
}
