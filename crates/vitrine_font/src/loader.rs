//! Font load lifecycle
//!
//! While webfonts load, text renders in the fallback stack and the body
//! carries [`FONT_LOADING_CLASS`]; once fonts settle the class swaps to
//! [`FONTS_LOADED_CLASS`]. Platforms with a font-ready signal call
//! [`FontLoader::fonts_ready`] when it fires; everywhere else a fixed
//! timeout retires the loading state so the page never sticks in its
//! fallback styling.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::debug;

use vitrine_dom::Document;

/// Body class present while fonts are loading
pub const FONT_LOADING_CLASS: &str = "font-loading";

/// Body class present once fonts have settled
pub const FONTS_LOADED_CLASS: &str = "fonts-loaded";

/// Font loader configuration
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct FontLoaderConfig {
    /// Whether the platform reports font readiness
    #[serde(default = "default_true")]
    pub ready_signal: bool,

    /// Timeout (ms) after which loading is presumed done without a signal
    #[serde(default = "default_fallback_ms")]
    pub fallback_timeout_ms: u64,
}

fn default_true() -> bool {
    true
}

fn default_fallback_ms() -> u64 {
    3000
}

impl Default for FontLoaderConfig {
    fn default() -> Self {
        Self {
            ready_signal: true,
            fallback_timeout_ms: default_fallback_ms(),
        }
    }
}

impl FontLoaderConfig {
    pub fn fallback_timeout(&self) -> Duration {
        Duration::from_millis(self.fallback_timeout_ms)
    }
}

/// Drives the `font-loading`/`fonts-loaded` class pair
#[derive(Debug)]
pub struct FontLoader {
    config: FontLoaderConfig,
    started: Option<Instant>,
    loaded: bool,
}

impl FontLoader {
    pub fn new(config: FontLoaderConfig) -> Self {
        Self {
            config,
            started: None,
            loaded: false,
        }
    }

    /// Mark loading as started: the body gets the loading class
    pub fn start(&mut self, document: &Document) {
        if self.started.is_some() || self.loaded {
            return;
        }
        document.add_body_class(FONT_LOADING_CLASS);
        self.started = Some(Instant::now());
    }

    /// The platform's font-ready signal fired
    pub fn fonts_ready(&mut self, document: &Document) {
        self.finish(document);
    }

    /// Apply the timed fallback where no ready signal exists
    ///
    /// Returns true while loading is still pending. Platforms with a
    /// ready signal are left to it; ticking them is a no-op.
    pub fn tick(&mut self, document: &Document) -> bool {
        if self.loaded {
            return false;
        }
        let Some(started) = self.started else {
            return false;
        };
        if self.config.ready_signal {
            return true;
        }

        if started.elapsed() >= self.config.fallback_timeout() {
            debug!("font ready signal unavailable; applying timed fallback");
            self.finish(document);
            return false;
        }
        true
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    fn finish(&mut self, document: &Document) {
        if self.loaded {
            return;
        }
        document.remove_body_class(FONT_LOADING_CLASS);
        document.add_body_class(FONTS_LOADED_CLASS);
        self.loaded = true;
    }
}

impl Default for FontLoader {
    fn default() -> Self {
        Self::new(FontLoaderConfig::default())
    }
}
