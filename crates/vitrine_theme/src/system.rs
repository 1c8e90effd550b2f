//! System color scheme sources
//!
//! A [`SchemeSource`] reports the operating environment's light/dark
//! preference and pushes change notifications to subscribers. Hosts with a
//! native media-query facility implement the trait over it; headless hosts
//! and tests use [`SimulatedScheme`]. Environments with no preference
//! facility at all use [`UnsupportedScheme`], which degrades to light.

use std::sync::{Arc, Mutex};

use slotmap::{new_key_type, SlotMap};

use crate::theme::ColorScheme;

new_key_type! {
    /// Handle to an active scheme-change subscription
    pub struct SubscriptionId;
}

/// Callback invoked with the new scheme on every system preference change
pub type SchemeCallback = Arc<dyn Fn(ColorScheme) + Send + Sync>;

/// A source of the system's color scheme preference
pub trait SchemeSource: Send + Sync {
    /// Whether this environment can report a preference at all
    fn is_supported(&self) -> bool;

    /// The current preference; unsupported sources report light
    fn current(&self) -> ColorScheme;

    /// Register for change notifications
    ///
    /// Returns `None` when the source cannot push changes; such sources can
    /// still be polled (see the `watcher` feature).
    fn subscribe(&self, callback: SchemeCallback) -> Option<SubscriptionId>;

    /// Drop a subscription; returns false for stale handles
    fn unsubscribe(&self, id: SubscriptionId) -> bool;
}

/// A settable scheme source that pushes changes to subscribers
///
/// Stands in for the platform media query in headless hosts and tests:
/// calling [`SimulatedScheme::set`] fires every registered callback, the
/// way a `prefers-color-scheme` change event would.
pub struct SimulatedScheme {
    scheme: Mutex<ColorScheme>,
    subscribers: Mutex<SlotMap<SubscriptionId, SchemeCallback>>,
}

impl SimulatedScheme {
    pub fn new(initial: ColorScheme) -> Self {
        Self {
            scheme: Mutex::new(initial),
            subscribers: Mutex::new(SlotMap::with_key()),
        }
    }

    /// Change the reported scheme, notifying subscribers on actual change
    pub fn set(&self, scheme: ColorScheme) {
        {
            let mut current = self.scheme.lock().unwrap();
            if *current == scheme {
                return;
            }
            *current = scheme;
        }

        // Snapshot outside the lock so a callback may re-enter subscribe.
        let callbacks: Vec<SchemeCallback> =
            self.subscribers.lock().unwrap().values().cloned().collect();
        for callback in callbacks {
            callback(scheme);
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.lock().unwrap().len()
    }
}

impl Default for SimulatedScheme {
    fn default() -> Self {
        Self::new(ColorScheme::Light)
    }
}

impl SchemeSource for SimulatedScheme {
    fn is_supported(&self) -> bool {
        true
    }

    fn current(&self) -> ColorScheme {
        *self.scheme.lock().unwrap()
    }

    fn subscribe(&self, callback: SchemeCallback) -> Option<SubscriptionId> {
        Some(self.subscribers.lock().unwrap().insert(callback))
    }

    fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.subscribers.lock().unwrap().remove(id).is_some()
    }
}

/// Scheme source for environments without a preference facility
///
/// The capability probe reports false and reads degrade to light instead
/// of failing.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnsupportedScheme;

impl SchemeSource for UnsupportedScheme {
    fn is_supported(&self) -> bool {
        false
    }

    fn current(&self) -> ColorScheme {
        ColorScheme::Light
    }

    fn subscribe(&self, _callback: SchemeCallback) -> Option<SubscriptionId> {
        None
    }

    fn unsubscribe(&self, _id: SubscriptionId) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn set_notifies_subscribers_once_per_change() {
        let source = SimulatedScheme::new(ColorScheme::Light);
        let fired = Arc::new(AtomicUsize::new(0));

        let fired_clone = fired.clone();
        source
            .subscribe(Arc::new(move |_| {
                fired_clone.fetch_add(1, Ordering::SeqCst);
            }))
            .unwrap();

        source.set(ColorScheme::Dark);
        source.set(ColorScheme::Dark); // no-op, value unchanged
        source.set(ColorScheme::Light);

        assert_eq!(fired.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let source = SimulatedScheme::new(ColorScheme::Light);
        let fired = Arc::new(AtomicUsize::new(0));

        let fired_clone = fired.clone();
        let id = source
            .subscribe(Arc::new(move |_| {
                fired_clone.fetch_add(1, Ordering::SeqCst);
            }))
            .unwrap();

        assert!(source.unsubscribe(id));
        assert!(!source.unsubscribe(id));

        source.set(ColorScheme::Dark);
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn unsupported_source_degrades_to_light() {
        let source = UnsupportedScheme;
        assert!(!source.is_supported());
        assert_eq!(source.current(), ColorScheme::Light);
        assert!(source.subscribe(Arc::new(|_| {})).is_none());
    }
}
