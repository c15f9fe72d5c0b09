//! The column id to visibility mapping.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::table::ColumnRegistry;

/// Maps column ids to whether they are visible.
///
/// A column without an entry is visible. Only overrides need to be stored;
/// [`VisibilityMap::resolve`] turns the implicit defaults into explicit
/// entries before anything compares or edits the map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VisibilityMap(BTreeMap<String, bool>);

impl VisibilityMap {
    /// Create an empty map (every column visible).
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a column is visible, defaulting to true.
    pub fn is_visible(&self, id: &str) -> bool {
        self.0.get(id).copied().unwrap_or(true)
    }

    /// The explicit entry for a column, if any.
    pub fn get(&self, id: &str) -> Option<bool> {
        self.0.get(id).copied()
    }

    /// Set a column's visibility explicitly.
    pub fn set(&mut self, id: impl Into<String>, visible: bool) {
        self.0.insert(id.into(), visible);
    }

    /// Flip an explicit entry. Returns false if the column has no entry.
    pub fn toggle(&mut self, id: &str) -> bool {
        match self.0.get_mut(id) {
            Some(visible) => {
                *visible = !*visible;
                true
            }
            None => false,
        }
    }

    /// Mark every registered column visible.
    ///
    /// Entries for columns outside the registry keep their value.
    pub fn show_all(&mut self, registry: &ColumnRegistry) {
        for id in registry.ids() {
            self.0.insert(id.to_string(), true);
        }
    }

    /// Copy of this map with an explicit entry for every registered column.
    ///
    /// Entries for columns outside the registry are kept as they are.
    pub fn resolve(&self, registry: &ColumnRegistry) -> Self {
        let mut resolved = self.clone();
        for id in registry.ids() {
            resolved.0.entry(id.to_string()).or_insert(true);
        }
        resolved
    }

    /// Number of explicit entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if there are no explicit entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the explicit entries in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.0.iter().map(|(id, visible)| (id.as_str(), *visible))
    }

    /// Build a map from a parsed JSON value.
    ///
    /// Anything other than an object yields `None`. Inside an object,
    /// entries whose value is not a boolean are skipped.
    pub fn from_json_value(value: &serde_json::Value) -> Option<Self> {
        let object = value.as_object()?;
        let entries = object
            .iter()
            .filter_map(|(id, v)| v.as_bool().map(|visible| (id.clone(), visible)))
            .collect();
        Some(Self(entries))
    }
}

impl<K: Into<String>> FromIterator<(K, bool)> for VisibilityMap {
    fn from_iter<I: IntoIterator<Item = (K, bool)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::ColumnDef;
    use serde_json::json;

    fn registry() -> ColumnRegistry {
        ColumnRegistry::new(vec![
            ColumnDef::new("email", "Email", 25),
            ColumnDef::new("phone", "Phone", 15),
            ColumnDef::new("city", "City", 15),
        ])
    }

    #[test]
    fn test_absent_key_is_visible() {
        let map = VisibilityMap::new();
        assert!(map.is_visible("anything"));
        assert_eq!(map.get("anything"), None);
    }

    #[test]
    fn test_explicit_hidden() {
        let map: VisibilityMap = [("phone", false)].into_iter().collect();
        assert!(!map.is_visible("phone"));
        assert!(map.is_visible("email"));
    }

    #[test]
    fn test_resolve_fills_defaults() {
        let map: VisibilityMap = [("phone", false)].into_iter().collect();
        let resolved = map.resolve(&registry());
        assert_eq!(resolved.len(), 3);
        assert_eq!(resolved.get("email"), Some(true));
        assert_eq!(resolved.get("phone"), Some(false));
        assert_eq!(resolved.get("city"), Some(true));
    }

    #[test]
    fn test_resolve_keeps_unknown_columns() {
        let map: VisibilityMap = [("legacy", false)].into_iter().collect();
        let resolved = map.resolve(&registry());
        assert_eq!(resolved.get("legacy"), Some(false));
        assert_eq!(resolved.len(), 4);
    }

    #[test]
    fn test_toggle_only_explicit_entries() {
        let mut map: VisibilityMap = [("email", true)].into_iter().collect();
        assert!(map.toggle("email"));
        assert_eq!(map.get("email"), Some(false));
        assert!(!map.toggle("phone"));
        assert_eq!(map.get("phone"), None);
    }

    #[test]
    fn test_show_all_covers_registered_columns_only() {
        let mut map: VisibilityMap = [("email", false), ("legacy", false)].into_iter().collect();
        map.show_all(&registry());
        for column in registry().iter() {
            assert_eq!(map.get(&column.id), Some(true));
        }
        assert_eq!(map.get("legacy"), Some(false));
    }

    #[test]
    fn test_structural_equality_ignores_insertion_order() {
        let a: VisibilityMap = [("email", true), ("phone", false)].into_iter().collect();
        let b: VisibilityMap = [("phone", false), ("email", true)].into_iter().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_serializes_as_plain_object() {
        let map: VisibilityMap = [("email", true), ("phone", false)].into_iter().collect();
        let json = serde_json::to_value(&map).unwrap();
        assert_eq!(json, json!({"email": true, "phone": false}));
    }

    #[test]
    fn test_from_json_value() {
        assert_eq!(VisibilityMap::from_json_value(&json!([1, 2])), None);
        assert_eq!(VisibilityMap::from_json_value(&json!("str")), None);
        assert_eq!(VisibilityMap::from_json_value(&json!(null)), None);

        let map = VisibilityMap::from_json_value(&json!({"email": false, "phone": "no"})).unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("email"), Some(false));
    }
}
