//! Theme manager
//!
//! [`ThemeManager`] is the page's single theme authority: it tracks the
//! requested [`ThemeMode`], derives the concrete [`ColorScheme`], mirrors
//! the result onto the document (attribute, dark class, meta color,
//! transient transition class), persists the preference, and notifies
//! registered listeners.
//!
//! The manager is an explicitly constructed, cloneable handle; the
//! application's composition root creates one and passes it where needed.
//! There is no process-wide instance.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::{Arc, Mutex, RwLock, Weak};
use std::time::Instant;

use slotmap::{new_key_type, SlotMap};
use tracing::{debug, warn};

use vitrine_dom::Document;

use crate::config::ThemeConfig;
use crate::store::PreferenceStore;
use crate::system::{SchemeSource, SubscriptionId};
use crate::theme::{ColorScheme, ThemeMode};

/// Root class mirroring a dark resolved scheme
pub const DARK_CLASS: &str = "dark";

/// Transient root class enabling CSS transitions during a scheme change
pub const TRANSITION_CLASS: &str = "theme-transition";

/// Name of the meta tag mirroring the resolved scheme's chrome color
pub const THEME_COLOR_META: &str = "theme-color";

/// Meta color applied for the dark scheme
pub const DARK_THEME_COLOR: &str = "#0f172a";

/// Meta color applied for the light scheme
pub const LIGHT_THEME_COLOR: &str = "#ffffff";

new_key_type! {
    /// Handle to a registered change listener
    pub struct ListenerId;
}

/// Immutable snapshot delivered to listeners on every theme change
///
/// The `previous_*` fields always reflect state from before the mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeChangeEvent {
    pub mode: ThemeMode,
    pub resolved: ColorScheme,
    pub previous_mode: ThemeMode,
    pub previous_resolved: ColorScheme,
}

type Listener = Arc<dyn Fn(&ThemeChangeEvent) + Send + Sync>;

struct Inner {
    config: ThemeConfig,
    store: Arc<dyn PreferenceStore>,
    system: Arc<dyn SchemeSource>,
    document: Arc<Document>,

    mode: RwLock<ThemeMode>,
    resolved: RwLock<ColorScheme>,
    listeners: Mutex<SlotMap<ListenerId, Listener>>,

    /// Exact handle returned at subscription time, reused on destroy
    subscription: Mutex<Option<SubscriptionId>>,

    /// Deadline after which the transition class comes off
    transition_until: Mutex<Option<Instant>>,
}

/// The page's theme authority
#[derive(Clone)]
pub struct ThemeManager {
    inner: Arc<Inner>,
}

impl ThemeManager {
    /// Construct a manager and apply the initial theme
    ///
    /// The saved preference is read from `store` (failures are logged and
    /// read as absent, unrecognized values likewise) and applied without
    /// re-persisting. When system detection is enabled and the source
    /// supports it, the manager subscribes to scheme changes; the
    /// subscription is released by [`ThemeManager::destroy`].
    pub fn new(
        config: ThemeConfig,
        store: Arc<dyn PreferenceStore>,
        system: Arc<dyn SchemeSource>,
        document: Arc<Document>,
    ) -> Self {
        let inner = Arc::new(Inner {
            config,
            store,
            system,
            document,
            mode: RwLock::new(ThemeMode::System),
            resolved: RwLock::new(ColorScheme::Light),
            listeners: Mutex::new(SlotMap::with_key()),
            subscription: Mutex::new(None),
            transition_until: Mutex::new(None),
        });

        if inner.config.enable_system_detection && inner.system.is_supported() {
            let weak: Weak<Inner> = Arc::downgrade(&inner);
            let subscription = inner.system.subscribe(Arc::new(move |scheme| {
                if let Some(inner) = weak.upgrade() {
                    inner.system_changed(scheme);
                }
            }));
            *inner.subscription.lock().unwrap() = subscription;
        }

        let initial = inner.saved_mode().unwrap_or(ThemeMode::System);
        inner.set_mode(initial, false);

        Self { inner }
    }

    // ========== State access ==========

    /// The requested theme mode
    pub fn mode(&self) -> ThemeMode {
        *self.inner.mode.read().unwrap()
    }

    /// The concrete scheme currently applied to the document
    pub fn resolved(&self) -> ColorScheme {
        *self.inner.resolved.read().unwrap()
    }

    // ========== Transitions ==========

    /// Set the theme mode, persisting the preference
    pub fn set_mode(&self, mode: ThemeMode) {
        self.inner.set_mode(mode, true);
    }

    /// Set the theme mode with explicit persistence control
    pub fn set_mode_with_persist(&self, mode: ThemeMode, persist: bool) {
        self.inner.set_mode(mode, persist);
    }

    /// Flip the resolved scheme, pinning the result as a concrete mode
    ///
    /// Toggling never leaves the mode as `System`.
    pub fn toggle(&self) {
        let next = self.resolved().toggle();
        self.inner.set_mode(next.into(), true);
    }

    /// Clear the persisted preference and re-apply `System`
    ///
    /// The reset itself is not persisted, so a fresh manager over the same
    /// store also initializes to `System`.
    pub fn reset(&self) {
        let key = &self.inner.config.storage_key;
        if let Err(err) = self.inner.store.remove(key) {
            warn!("failed to clear saved theme: {err}");
        }
        self.inner.set_mode(ThemeMode::System, false);
    }

    /// Forward a system scheme change observed out-of-band
    ///
    /// Hosts whose scheme source cannot push changes (see the `watcher`
    /// feature) call this when they observe one. Changes are ignored
    /// unless the mode is `System`.
    pub fn system_scheme_changed(&self, scheme: ColorScheme) {
        self.inner.system_changed(scheme);
    }

    /// Remove the transition class once its duration has elapsed
    ///
    /// Returns true while a transition is still pending. Hosts call this
    /// from their frame or timer loop.
    pub fn tick(&self) -> bool {
        let mut until = self.inner.transition_until.lock().unwrap();
        match *until {
            Some(deadline) if Instant::now() >= deadline => {
                *until = None;
                drop(until);
                self.inner.document.remove_root_class(TRANSITION_CLASS);
                false
            }
            Some(_) => true,
            None => false,
        }
    }

    // ========== Capabilities ==========

    /// Whether the environment reports a system color scheme
    pub fn is_system_scheme_supported(&self) -> bool {
        self.inner.system.is_supported()
    }

    /// Modes selectable in this environment
    ///
    /// `System` is offered only where a system scheme can be observed.
    pub fn available_modes(&self) -> Vec<ThemeMode> {
        let mut modes = vec![ThemeMode::Light, ThemeMode::Dark];
        if self.is_system_scheme_supported() {
            modes.push(ThemeMode::System);
        }
        modes
    }

    // ========== Listeners ==========

    /// Register a change listener; the returned token removes it
    pub fn add_listener(
        &self,
        listener: impl Fn(&ThemeChangeEvent) + Send + Sync + 'static,
    ) -> ListenerId {
        self.inner
            .listeners
            .lock()
            .unwrap()
            .insert(Arc::new(listener))
    }

    /// Remove a listener by token; returns false for stale tokens
    pub fn remove_listener(&self, id: ListenerId) -> bool {
        self.inner.listeners.lock().unwrap().remove(id).is_some()
    }

    // ========== Teardown ==========

    /// Release the system subscription and clear all listeners
    ///
    /// Document state is left as applied. The manager remains usable for
    /// explicit calls, but no longer follows system changes.
    pub fn destroy(&self) {
        let subscription = self.inner.subscription.lock().unwrap().take();
        if let Some(id) = subscription {
            self.inner.system.unsubscribe(id);
        }
        self.inner.listeners.lock().unwrap().clear();
    }
}

impl Inner {
    /// Read and parse the saved mode, treating failures as absence
    fn saved_mode(&self) -> Option<ThemeMode> {
        let saved = match self.store.get(&self.config.storage_key) {
            Ok(value) => value,
            Err(err) => {
                warn!("failed to read saved theme: {err}");
                None
            }
        };

        saved.and_then(|value| match value.parse::<ThemeMode>() {
            Ok(mode) => Some(mode),
            Err(err) => {
                warn!("ignoring saved theme: {err}");
                None
            }
        })
    }

    fn resolve(&self, mode: ThemeMode) -> ColorScheme {
        match mode {
            ThemeMode::Light => ColorScheme::Light,
            ThemeMode::Dark => ColorScheme::Dark,
            ThemeMode::System => self.system.current(),
        }
    }

    fn set_mode(&self, mode: ThemeMode, persist: bool) {
        let previous_mode = *self.mode.read().unwrap();
        let previous_resolved = *self.resolved.read().unwrap();

        debug!(
            "ThemeManager::set_mode - switching from {:?} to {:?}",
            previous_mode, mode
        );

        *self.mode.write().unwrap() = mode;
        let resolved = self.resolve(mode);
        *self.resolved.write().unwrap() = resolved;

        self.apply(resolved);

        if persist {
            if let Err(err) = self.store.set(&self.config.storage_key, mode.as_str()) {
                warn!("failed to save theme: {err}");
            }
        }

        self.notify(&ThemeChangeEvent {
            mode,
            resolved,
            previous_mode,
            previous_resolved,
        });
    }

    /// Handle a system scheme change while following the system
    fn system_changed(&self, scheme: ColorScheme) {
        let mode = *self.mode.read().unwrap();
        if mode != ThemeMode::System {
            return;
        }

        let previous_resolved = *self.resolved.read().unwrap();
        if previous_resolved == scheme {
            return;
        }

        debug!(
            "ThemeManager::system_changed - resolved {:?} -> {:?}",
            previous_resolved, scheme
        );

        *self.resolved.write().unwrap() = scheme;
        self.apply(scheme);

        self.notify(&ThemeChangeEvent {
            mode,
            resolved: scheme,
            previous_mode: mode,
            previous_resolved,
        });
    }

    /// Mirror the resolved scheme onto the document
    fn apply(&self, resolved: ColorScheme) {
        if self.config.enable_transitions {
            self.begin_transition();
        }

        self.document
            .set_root_attribute(&self.config.attribute, resolved.as_str());

        match resolved {
            ColorScheme::Dark => self.document.add_root_class(DARK_CLASS),
            ColorScheme::Light => self.document.remove_root_class(DARK_CLASS),
        };

        let color = match resolved {
            ColorScheme::Dark => DARK_THEME_COLOR,
            ColorScheme::Light => LIGHT_THEME_COLOR,
        };
        // Only a registered meta tag is updated; a page without one opts out.
        self.document.set_meta_content(THEME_COLOR_META, color);
    }

    fn begin_transition(&self) {
        self.document.add_root_class(TRANSITION_CLASS);
        let deadline = Instant::now() + self.config.transition_duration();
        *self.transition_until.lock().unwrap() = Some(deadline);
    }

    /// Deliver an event to every listener, isolating failures
    fn notify(&self, event: &ThemeChangeEvent) {
        let listeners: Vec<Listener> = self.listeners.lock().unwrap().values().cloned().collect();

        for listener in listeners {
            let result = catch_unwind(AssertUnwindSafe(|| listener(event)));
            if result.is_err() {
                warn!("theme change listener panicked; continuing delivery");
            }
        }
    }
}
