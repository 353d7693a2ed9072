//! Local list reconciliation
//!
//! After the server acknowledges a mutation, views patch their in-memory
//! lists instead of refetching. The operations here keep two guarantees:
//! ids are unique within a list, and a moved item is never observable in
//! both lists or in neither.

use std::collections::HashSet;
use std::slice;

/// Anything with a stable backend id
pub trait Keyed {
    fn key(&self) -> &str;
}

/// Ordered list with unique ids
#[derive(Debug, Clone, PartialEq)]
pub struct KeyedList<T> {
    items: Vec<T>,
}

impl<T> Default for KeyedList<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Keyed> KeyedList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from server data; a later duplicate replaces the earlier entry
    pub fn from_items(items: impl IntoIterator<Item = T>) -> Self {
        let mut list = Self::new();
        for item in items {
            list.add(item);
        }
        list
    }

    /// Append an item, or replace the entry with the same id in place.
    ///
    /// Returns `true` when the item was appended.
    pub fn add(&mut self, item: T) -> bool {
        match self.position(item.key()) {
            Some(index) => {
                self.items[index] = item;
                false
            }
            None => {
                self.items.push(item);
                true
            }
        }
    }

    /// Remove by id. Removing an absent id is a no-op.
    pub fn remove(&mut self, id: &str) -> Option<T> {
        let index = self.position(id)?;
        Some(self.items.remove(index))
    }

    /// Remove every item matching `predicate`, keeping the rest in order
    pub fn remove_where(&mut self, mut predicate: impl FnMut(&T) -> bool) -> Vec<T> {
        let mut removed = Vec::new();
        let mut kept = Vec::with_capacity(self.items.len());
        for item in self.items.drain(..) {
            if predicate(&item) {
                removed.push(item);
            } else {
                kept.push(item);
            }
        }
        self.items = kept;
        removed
    }

    /// Patch an item in place. Returns whether the id was found.
    pub fn update(&mut self, id: &str, patch: impl FnOnce(&mut T)) -> bool {
        match self.items.iter_mut().find(|item| item.key() == id) {
            Some(item) => {
                patch(item);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.key() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    pub fn ids(&self) -> HashSet<&str> {
        self.items.iter().map(Keyed::key).collect()
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.key() == id)
    }
}

impl<'a, T> IntoIterator for &'a KeyedList<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Move an item from `source` to `destination` in one step.
///
/// Both lists are borrowed exclusively for the whole call, so there is no
/// intermediate state anyone else can observe. `transform` converts the
/// item on the way, e.g. to set its new status. Returns `false`, changing
/// nothing, when `id` is not in `source`.
pub fn move_between<S, D>(
    source: &mut KeyedList<S>,
    destination: &mut KeyedList<D>,
    id: &str,
    transform: impl FnOnce(S) -> D,
) -> bool
where
    S: Keyed,
    D: Keyed,
{
    match source.remove(id) {
        Some(item) => {
            destination.add(transform(item));
            true
        }
        None => false,
    }
}

/// Roster entries whose id is not in `marked`, in roster order.
///
/// The unmarked side of the attendance partition is always derived with
/// this function and never stored independently of the marked side.
pub fn partition_roster<'a, T, M>(roster: &'a [T], marked: &KeyedList<M>) -> Vec<&'a T>
where
    T: Keyed,
    M: Keyed,
{
    let marked_ids = marked.ids();
    roster
        .iter()
        .filter(|entry| !marked_ids.contains(entry.key()))
        .collect()
}
