//! Polling system scheme watcher
//!
//! Some hosts can read the system color scheme but get no change events
//! for it. [`SchemeWatcher`] bridges the gap: a background thread polls a
//! [`SchemeSource`] and forwards observed changes to a [`ThemeManager`]
//! via [`ThemeManager::system_scheme_changed`].

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tracing::debug;

use crate::manager::ThemeManager;
use crate::system::SchemeSource;

/// Watcher configuration
#[derive(Debug, Clone)]
pub struct WatcherConfig {
    /// Poll interval; stop latency is bounded by this
    pub interval: Duration,
}

impl Default for WatcherConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(2),
        }
    }
}

/// Background thread polling the system scheme for changes
pub struct SchemeWatcher {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl SchemeWatcher {
    /// Start polling `source`, forwarding changes to `manager`
    pub fn spawn(
        source: Arc<dyn SchemeSource>,
        manager: ThemeManager,
        config: WatcherConfig,
    ) -> Self {
        let stop = Arc::new(AtomicBool::new(false));
        let stop_flag = stop.clone();

        let handle = thread::spawn(move || {
            let mut last = source.current();
            while !stop_flag.load(Ordering::Relaxed) {
                thread::sleep(config.interval);
                if stop_flag.load(Ordering::Relaxed) {
                    break;
                }

                let current = source.current();
                if current != last {
                    debug!("SchemeWatcher: system scheme {:?} -> {:?}", last, current);
                    last = current;
                    manager.system_scheme_changed(current);
                }
            }
        });

        Self {
            stop,
            handle: Some(handle),
        }
    }

    /// Stop polling and join the thread
    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for SchemeWatcher {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ThemeConfig;
    use crate::store::MemoryStore;
    use crate::system::SimulatedScheme;
    use crate::theme::ColorScheme;
    use vitrine_dom::Document;

    #[test]
    fn watcher_forwards_polled_changes() {
        let source = Arc::new(SimulatedScheme::new(ColorScheme::Light));
        let config = ThemeConfig {
            // no push subscription: the watcher is the only change path
            enable_system_detection: false,
            ..ThemeConfig::default()
        };
        let manager = ThemeManager::new(
            config,
            Arc::new(MemoryStore::new()),
            source.clone(),
            Arc::new(Document::new()),
        );
        assert_eq!(manager.resolved(), ColorScheme::Light);

        let watcher = SchemeWatcher::spawn(
            source.clone(),
            manager.clone(),
            WatcherConfig {
                interval: Duration::from_millis(5),
            },
        );

        source.set(ColorScheme::Dark);

        let deadline = std::time::Instant::now() + Duration::from_secs(2);
        while manager.resolved() != ColorScheme::Dark && std::time::Instant::now() < deadline {
            thread::sleep(Duration::from_millis(5));
        }
        assert_eq!(manager.resolved(), ColorScheme::Dark);

        watcher.stop();
    }
}
