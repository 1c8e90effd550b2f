//! Vitrine Theme
//!
//! Theme preference management for pages built on the Vitrine document
//! surface: persistence, system color scheme detection, and change
//! notification.
//!
//! # Overview
//!
//! The crate provides:
//! - **[`ThemeManager`]**: the page's theme authority - requested mode,
//!   resolved scheme, document side effects, listener fan-out
//! - **Preference stores**: [`MemoryStore`] and a TOML-backed
//!   [`FileStore`] behind the [`PreferenceStore`] trait
//! - **Scheme sources**: system preference behind [`SchemeSource`], with
//!   [`SimulatedScheme`] for headless hosts and tests
//! - **Polling watcher** (feature `watcher`): bridges sources that cannot
//!   push change events
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use vitrine_dom::Document;
//! use vitrine_theme::{
//!     ColorScheme, MemoryStore, SimulatedScheme, ThemeConfig, ThemeManager, ThemeMode,
//! };
//!
//! let document = Arc::new(Document::new());
//! let manager = ThemeManager::new(
//!     ThemeConfig::default(),
//!     Arc::new(MemoryStore::new()),
//!     Arc::new(SimulatedScheme::new(ColorScheme::Light)),
//!     document.clone(),
//! );
//!
//! manager.set_mode(ThemeMode::Dark);
//! assert_eq!(manager.resolved(), ColorScheme::Dark);
//! assert!(document.has_root_class("dark"));
//! ```
//!
//! # Lifecycle
//!
//! A manager is constructed once per page session at the application's
//! composition root and handed out as a cloneable handle - there is no
//! implicit global. [`ThemeManager::destroy`] releases the system
//! subscription and clears listeners; document state stays as applied.

mod config;
mod error;
mod manager;
mod store;
mod system;
mod theme;

#[cfg(feature = "watcher")]
mod watcher;

pub use config::ThemeConfig;
pub use error::{Result, StoreError};
pub use manager::{
    ListenerId, ThemeChangeEvent, ThemeManager, DARK_CLASS, DARK_THEME_COLOR, LIGHT_THEME_COLOR,
    THEME_COLOR_META, TRANSITION_CLASS,
};
pub use store::{FileStore, MemoryStore, PreferenceStore};
pub use system::{SchemeCallback, SchemeSource, SimulatedScheme, SubscriptionId, UnsupportedScheme};
pub use theme::{ColorScheme, ParseThemeModeError, ThemeMode};

#[cfg(feature = "watcher")]
pub use watcher::{SchemeWatcher, WatcherConfig};
