//! Identifier → button controller mapping.

use std::{collections::HashMap, sync::Arc};

use parking_lot::RwLock;

use crate::errors::CommandError;

/// Owned mapping from view identifier to controller.
///
/// Entries are inserted when a button becomes active and removed when it is disposed. Locks are
/// held only for the map operation itself, never while a controller runs.
#[derive(Debug)]
pub struct Registry<C> {
    entries: RwLock<HashMap<i64, Arc<C>>>,
}

impl<C> Default for Registry<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Registry<C> {
    pub fn new() -> Self {
        Registry {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Inserts `controller`, returning the controller it replaced.
    pub fn insert(&self, view_id: i64, controller: Arc<C>) -> Option<Arc<C>> {
        self.entries.write().insert(view_id, controller)
    }

    pub fn remove(&self, view_id: i64) -> Option<Arc<C>> {
        self.entries.write().remove(&view_id)
    }

    /// Removes the entry only if it still points at `controller`.
    pub fn remove_entry(&self, view_id: i64, controller: &Arc<C>) -> bool {
        let mut entries = self.entries.write();
        match entries.get(&view_id) {
            Some(current) if Arc::ptr_eq(current, controller) => {
                entries.remove(&view_id);
                true
            }
            _ => false,
        }
    }

    /// Looks up a controller. Fails with [`CommandError::ViewNotFound`] for unknown identifiers.
    pub fn get(&self, view_id: i64) -> Result<Arc<C>, CommandError> {
        self.entries
            .read()
            .get(&view_id)
            .cloned()
            .ok_or(CommandError::ViewNotFound(view_id))
    }

    pub fn contains(&self, view_id: i64) -> bool {
        self.entries.read().contains_key(&view_id)
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Registered identifiers, in ascending order.
    pub fn view_ids(&self) -> Vec<i64> {
        let mut ids: Vec<i64> = self.entries.read().keys().copied().collect();
        ids.sort_unstable();
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_view_fails_explicitly() {
        let registry: Registry<&'static str> = Registry::new();

        assert_eq!(registry.get(7).unwrap_err(), CommandError::ViewNotFound(7));
        assert!(registry.remove(7).is_none());
    }

    #[test]
    fn test_insert_lookup_remove() {
        let registry = Registry::new();
        assert!(registry.insert(1, Arc::new("first")).is_none());
        assert!(registry.insert(2, Arc::new("second")).is_none());

        assert_eq!(*registry.get(1).unwrap(), "first");
        assert_eq!(registry.get(2).unwrap().len(), 6);
        assert_eq!(registry.view_ids(), vec![1, 2]);

        assert_eq!(registry.remove(1).as_deref(), Some(&"first"));
        assert!(!registry.contains(1));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_remove_entry_ignores_replacements() {
        let registry = Registry::new();
        let original = Arc::new("original");
        let replacement = Arc::new("replacement");

        registry.insert(3, Arc::clone(&original));
        let replaced = registry.insert(3, Arc::clone(&replacement));
        assert!(Arc::ptr_eq(&replaced.unwrap(), &original));

        assert!(!registry.remove_entry(3, &original));
        assert!(registry.contains(3));

        assert!(registry.remove_entry(3, &replacement));
        assert!(registry.is_empty());
    }
}
