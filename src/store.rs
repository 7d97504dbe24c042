//! In-Memory Collections
//! Mission: Ordered CRUD storage with monotonic id allocation

use parking_lot::RwLock;

/// Anything a collection can hold: carries its own collection-assigned id.
pub trait Record {
    fn id(&self) -> u64;
}

/// An ordered in-memory collection with a monotonic id counter.
///
/// Ids start at 1 and are never reused within a process lifetime, deletions
/// included. Each operation holds the lock for its full duration, so
/// create/update/delete never interleave mid-operation. State lives for the
/// process lifetime only; a restart starts empty by design.
pub struct Collection<T> {
    inner: RwLock<Inner<T>>,
}

struct Inner<T> {
    entries: Vec<T>,
    next_id: u64,
}

impl<T: Record + Clone> Collection<T> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                entries: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Snapshot of all entries in insertion order.
    pub fn list(&self) -> Vec<T> {
        self.inner.read().entries.clone()
    }

    /// Allocate the next id, build the entry with it, append and return it.
    pub fn insert_with(&self, build: impl FnOnce(u64) -> T) -> T {
        let mut inner = self.inner.write();
        let id = inner.next_id;
        inner.next_id += 1;

        let entry = build(id);
        inner.entries.push(entry.clone());
        entry
    }

    /// Mutate the entry with the given id in place, returning the updated
    /// entry, or `None` if no entry matches.
    pub fn update_with(&self, id: u64, mutate: impl FnOnce(&mut T)) -> Option<T> {
        let mut inner = self.inner.write();
        let entry = inner.entries.iter_mut().find(|e| e.id() == id)?;
        mutate(entry);
        Some(entry.clone())
    }

    /// Remove the entry with the given id. Returns whether anything was
    /// removed. The id counter is untouched, so the id is gone for good.
    pub fn remove(&self, id: u64) -> bool {
        let mut inner = self.inner.write();
        match inner.entries.iter().position(|e| e.id() == id) {
            Some(index) => {
                inner.entries.remove(index);
                true
            }
            None => false,
        }
    }
}

impl<T: Record + Clone> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: u64,
        label: String,
    }

    impl Record for Item {
        fn id(&self) -> u64 {
            self.id
        }
    }

    fn insert(collection: &Collection<Item>, label: &str) -> Item {
        collection.insert_with(|id| Item {
            id,
            label: label.to_string(),
        })
    }

    #[test]
    fn test_ids_strictly_increasing_from_one() {
        let collection = Collection::new();

        let a = insert(&collection, "a");
        let b = insert(&collection, "b");
        let c = insert(&collection, "c");

        assert_eq!((a.id, b.id, c.id), (1, 2, 3));
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let collection = Collection::new();
        insert(&collection, "first");
        insert(&collection, "second");
        insert(&collection, "third");

        let labels: Vec<String> = collection.list().into_iter().map(|i| i.label).collect();
        assert_eq!(labels, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_round_trip_single_entry() {
        let collection = Collection::new();
        let stored = insert(&collection, "only");

        let listed = collection.list();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0], stored);
    }

    #[test]
    fn test_update_missing_id_leaves_collection_unchanged() {
        let collection = Collection::new();
        insert(&collection, "keep");

        let before = collection.list();
        let result = collection.update_with(42, |i| i.label = "clobbered".to_string());

        assert!(result.is_none());
        assert_eq!(collection.list(), before);
    }

    #[test]
    fn test_delete_then_list_never_contains_id() {
        let collection = Collection::new();
        insert(&collection, "a");
        let b = insert(&collection, "b");
        insert(&collection, "c");

        assert!(collection.remove(b.id));
        assert!(collection.list().iter().all(|i| i.id != b.id));

        // Second delete of the same id is a miss.
        assert!(!collection.remove(b.id));
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let collection = Collection::new();
        let a = insert(&collection, "a");
        assert!(collection.remove(a.id));

        let b = insert(&collection, "b");
        assert_eq!(b.id, 2);
    }

    #[test]
    fn test_counters_are_independent_per_collection() {
        let products = Collection::new();
        let tasks = Collection::new();

        insert(&products, "p1");
        insert(&products, "p2");
        let t = insert(&tasks, "t1");

        assert_eq!(t.id, 1);
    }
}
