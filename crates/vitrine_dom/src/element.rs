//! Generic element state: attributes and class list

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// Attribute map plus class list for a single element
///
/// Class membership is set-like: adding an already-present class is a no-op,
/// order of first insertion is preserved.
#[derive(Debug, Clone, Default)]
pub struct Element {
    attributes: FxHashMap<String, String>,
    classes: SmallVec<[String; 4]>,
}

impl Element {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn remove_attribute(&mut self, name: &str) -> Option<String> {
        self.attributes.remove(name)
    }

    /// Add a class; returns false when it was already present
    pub fn add_class(&mut self, class: &str) -> bool {
        if self.has_class(class) {
            return false;
        }
        self.classes.push(class.to_string());
        true
    }

    /// Remove a class; returns false when it was not present
    pub fn remove_class(&mut self, class: &str) -> bool {
        match self.classes.iter().position(|c| c == class) {
            Some(idx) => {
                self.classes.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }
}
