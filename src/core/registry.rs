use std::collections::BTreeMap;
use thiserror::Error;

/// Key collision reported by the generic container. The domain-facing
/// registries map this onto their own error variants.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("id {0:?} already exists")]
pub struct DuplicateKey(pub String);

/// Keyed in-memory collection with unique string ids.
///
/// Carries no domain validation; id format, cost and quantity rules all
/// live in the entity constructors. A `BTreeMap` keeps `list_all` stable
/// across calls (ordering carries no semantics).
#[derive(Debug, Clone)]
pub struct Registry<T> {
    items: BTreeMap<String, T>,
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Registry<T> {
    pub fn new() -> Self {
        Self {
            items: BTreeMap::new(),
        }
    }

    /// Inserts `item` under `id`, failing if the id is already taken.
    pub fn add(&mut self, id: impl Into<String>, item: T) -> Result<(), DuplicateKey> {
        let id = id.into();
        if self.items.contains_key(&id) {
            return Err(DuplicateKey(id));
        }
        self.items.insert(id, item);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.items.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut T> {
        self.items.get_mut(id)
    }

    /// Removes the entry if present. Deleting an absent id is a no-op.
    pub fn delete(&mut self, id: &str) {
        self.items.remove(id);
    }

    pub fn list_all(&self) -> Vec<&T> {
        self.items.values().collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_rejects_duplicate_id() {
        let mut registry = Registry::new();
        registry.add("a", 1).unwrap();
        let err = registry.add("a", 2).unwrap_err();
        assert_eq!(err, DuplicateKey("a".to_string()));
        // first entry survives unchanged
        assert_eq!(registry.get("a"), Some(&1));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn delete_is_idempotent() {
        let mut registry = Registry::new();
        registry.add("a", 1).unwrap();
        registry.delete("missing");
        assert_eq!(registry.len(), 1);
        registry.delete("a");
        registry.delete("a");
        assert!(registry.is_empty());
    }

    #[test]
    fn list_all_is_stable() {
        let mut registry = Registry::new();
        registry.add("b", 2).unwrap();
        registry.add("a", 1).unwrap();
        registry.add("c", 3).unwrap();
        assert_eq!(registry.list_all(), vec![&1, &2, &3]);
        assert_eq!(registry.list_all(), registry.list_all());
    }
}
