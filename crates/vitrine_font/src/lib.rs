//! Vitrine Font
//!
//! Font loading optimization for the Vitrine document surface:
//!
//! - **Google Fonts URLs**: build a css2 request from a declarative font
//!   list
//! - **Load lifecycle**: `font-loading`/`fonts-loaded` body classes driven
//!   by the platform's ready signal, with a timed fallback (see
//!   [`FontLoader`])
//! - **Preload hints**: cross-origin woff2 preloads for critical fonts
//! - **Fallback stacks**: system font stacks used while webfonts load
//!
//! # Example
//!
//! ```
//! use vitrine_font::{generate_google_fonts_url, FontConfig, FontDisplay};
//!
//! let url = generate_google_fonts_url(&[FontConfig::new("Inter", [400, 600, 700])]);
//! assert_eq!(
//!     url,
//!     "https://fonts.googleapis.com/css2?family=Inter:wght@400%3B600%3B700&display=swap",
//! );
//! ```

mod loader;
mod preload;

pub use loader::{FontLoader, FontLoaderConfig, FONTS_LOADED_CLASS, FONT_LOADING_CLASS};
pub use preload::preload_fonts;

use serde::{Deserialize, Serialize};

/// Host serving css2 font stylesheets
pub const GOOGLE_FONTS_HOST: &str = "https://fonts.googleapis.com/css2";

/// CSS `font-display` strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FontDisplay {
    #[default]
    Swap,
    Fallback,
    Optional,
    Auto,
}

impl FontDisplay {
    pub fn as_str(&self) -> &'static str {
        match self {
            FontDisplay::Swap => "swap",
            FontDisplay::Fallback => "fallback",
            FontDisplay::Optional => "optional",
            FontDisplay::Auto => "auto",
        }
    }
}

/// A webfont request: family, weights, display strategy
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FontConfig {
    pub family: String,
    pub weights: Vec<u16>,
    #[serde(default)]
    pub display: FontDisplay,
    #[serde(default)]
    pub preload: bool,
}

impl FontConfig {
    pub fn new(family: impl Into<String>, weights: impl Into<Vec<u16>>) -> Self {
        Self {
            family: family.into(),
            weights: weights.into(),
            display: FontDisplay::default(),
            preload: false,
        }
    }

    pub fn with_display(mut self, display: FontDisplay) -> Self {
        self.display = display;
        self
    }
}

/// Build a Google Fonts css2 URL for a font list
///
/// One `family=` parameter per font: whitespace runs in the family name
/// collapse to `+`, weights follow `:wght@` joined by a percent-encoded
/// `;`. A single `display=` parameter applies to the whole request, taken
/// from the first font entry (Swap for an empty list) - per-font display
/// is not expressible in one css2 request.
pub fn generate_google_fonts_url(fonts: &[FontConfig]) -> String {
    let mut url = String::from(GOOGLE_FONTS_HOST);
    url.push('?');

    for font in fonts {
        let family: String = font
            .family
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("+");
        let weights = font
            .weights
            .iter()
            .map(u16::to_string)
            .collect::<Vec<_>>()
            .join("%3B");
        url.push_str("family=");
        url.push_str(&family);
        url.push_str(":wght@");
        url.push_str(&weights);
        url.push('&');
    }

    let display = fonts.first().map(|f| f.display).unwrap_or_default();
    url.push_str("display=");
    url.push_str(display.as_str());
    url
}

/// Generic family class a fallback stack stands in for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackFamily {
    Sans,
    Serif,
    Mono,
}

/// System font stack used while the matching webfont loads
pub fn fallback_stack(family: FallbackFamily) -> &'static [&'static str] {
    match family {
        FallbackFamily::Sans => &[
            "system-ui",
            "-apple-system",
            "BlinkMacSystemFont",
            "Segoe UI",
            "Roboto",
            "sans-serif",
        ],
        FallbackFamily::Serif => &["Georgia", "Cambria", "Times New Roman", "Times", "serif"],
        FallbackFamily::Mono => &[
            "Menlo",
            "Monaco",
            "Consolas",
            "Liberation Mono",
            "Courier New",
            "monospace",
        ],
    }
}

/// A fallback stack as a CSS `font-family` value
pub fn fallback_css(family: FallbackFamily) -> String {
    fallback_stack(family).join(", ")
}
