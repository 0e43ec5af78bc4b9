//! Filter specification owned by the browse controller.
//!
//! A [`FilterSpec`] captures the constraints a shopper has active at any given
//! moment. It is created all-empty at page load, mutated in place by events,
//! and discarded when the shopper leaves. It is never persisted.

use serde::{Deserialize, Serialize};

/// The set of user-chosen constraints applied to the catalog.
///
/// All three constraints are optional and combine conjunctively: a record must
/// pass every active constraint to appear in the result set. The default value
/// (all-empty) matches the entire catalog.
///
/// # Examples
///
/// ```
/// use dripcity::query::FilterSpec;
///
/// let mut filter = FilterSpec::default();
/// assert!(filter.is_empty());
///
/// filter.toggle_category("Fabric");
/// filter.search = "wax".to_string();
/// assert!(!filter.is_empty());
///
/// filter.clear();
/// assert_eq!(filter, FilterSpec::default());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSpec {
    /// Free-text search over name, description, and vendor. Empty means no
    /// text filter.
    pub search: String,

    /// Single selected category. `None` (or an empty string, for specs built
    /// from external input) means all categories.
    pub category: Option<String>,

    /// When `true`, restricts results to items from verified vendors.
    pub verified_only: bool,
}

impl FilterSpec {
    /// Returns `true` when no constraint is active.
    ///
    /// An empty spec is the identity filter: querying with it returns the
    /// full catalog unchanged.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.search.is_empty() && self.active_category().is_none() && !self.verified_only
    }

    /// Returns the selected category if one is active.
    ///
    /// Treats `Some("")` the same as `None` so that specs deserialized from
    /// external payloads with an empty-string category behave like "all".
    #[must_use]
    pub fn active_category(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }

    /// Toggles the single-select category chip.
    ///
    /// Selecting the currently active category clears it; selecting any other
    /// category replaces the previous selection.
    ///
    /// # Examples
    ///
    /// ```
    /// use dripcity::query::FilterSpec;
    ///
    /// let mut filter = FilterSpec::default();
    /// filter.toggle_category("Fabric");
    /// assert_eq!(filter.active_category(), Some("Fabric"));
    ///
    /// filter.toggle_category("Tools");
    /// assert_eq!(filter.active_category(), Some("Tools"));
    ///
    /// filter.toggle_category("Tools");
    /// assert_eq!(filter.active_category(), None);
    /// ```
    pub fn toggle_category(&mut self, category: &str) {
        if self.active_category() == Some(category) {
            self.category = None;
        } else {
            self.category = Some(category.to_string());
        }
    }

    /// Resets every constraint to its all-empty default.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty() {
        assert!(FilterSpec::default().is_empty());
    }

    #[test]
    fn empty_string_category_is_inactive() {
        let filter = FilterSpec {
            category: Some(String::new()),
            ..FilterSpec::default()
        };
        assert!(filter.is_empty());
        assert_eq!(filter.active_category(), None);
    }

    #[test]
    fn toggle_selects_replaces_and_clears() {
        let mut filter = FilterSpec::default();

        filter.toggle_category("Fabric");
        assert_eq!(filter.active_category(), Some("Fabric"));

        filter.toggle_category("Accessories");
        assert_eq!(filter.active_category(), Some("Accessories"));

        filter.toggle_category("Accessories");
        assert_eq!(filter.active_category(), None);
    }

    #[test]
    fn clear_restores_default_from_any_state() {
        let mut filter = FilterSpec {
            search: "leather".to_string(),
            category: Some("Accessories".to_string()),
            verified_only: true,
        };
        filter.clear();
        assert_eq!(filter, FilterSpec::default());
    }
}
