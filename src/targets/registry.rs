//! Registry of known browsers.

use std::collections::HashSet;

use super::browsers::all_browsers;
use super::Browser;

/// Registry that manages the browsers whose caches may be cleaned.
///
/// Provides filtering by id, which backs CLI options like
/// `--browsers chrome,firefox`.
pub struct BrowserRegistry {
    browsers: Vec<Box<dyn Browser>>,
}

impl BrowserRegistry {
    /// Create a registry with all built-in browsers.
    pub fn new() -> Self {
        Self {
            browsers: all_browsers(),
        }
    }

    /// Create a registry with only the given browser ids.
    ///
    /// # Example
    /// ```
    /// use temp_sweeper::targets::BrowserRegistry;
    ///
    /// let registry = BrowserRegistry::with_ids(&["chrome", "firefox"]);
    /// assert_eq!(registry.len(), 2);
    /// ```
    pub fn with_ids<S: AsRef<str>>(ids: &[S]) -> Self {
        let wanted: HashSet<&str> = ids.iter().map(|s| s.as_ref()).collect();
        Self {
            browsers: all_browsers()
                .into_iter()
                .filter(|b| wanted.contains(b.id()))
                .collect(),
        }
    }

    /// Get all registered browsers.
    pub fn browsers(&self) -> &[Box<dyn Browser>] {
        &self.browsers
    }

    /// Get a browser by id.
    pub fn get(&self, id: &str) -> Option<&dyn Browser> {
        self.browsers
            .iter()
            .find(|b| b.id() == id)
            .map(|b| b.as_ref())
    }

    /// List all browser ids.
    pub fn ids(&self) -> Vec<&'static str> {
        self.browsers.iter().map(|b| b.id()).collect()
    }

    pub fn len(&self) -> usize {
        self.browsers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.browsers.is_empty()
    }
}

impl Default for BrowserRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for BrowserRegistry {
    fn clone(&self) -> Self {
        Self::with_ids(&self.ids())
    }
}
