use alloc::vec::Vec;
use core::fmt;
use core::iter::repeat_with;
use core::mem;

use log::{debug, trace};

use crate::error::AssocArrayError;
use crate::iter::{Iter, Keys, Values};

/// Number of slots allocated by [`AssociativeArray::new`].
pub const DEFAULT_CAPACITY: usize = 16;

#[derive(Debug, Clone)]
pub(crate) struct Entry<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
}

/// An unordered key/value container backed by a linear slot buffer.
///
/// Every slot is either occupied by an entry or vacant. Lookups scan the
/// slots front to back and compare keys by equality, so all keyed operations
/// are O(n). The buffer doubles when `set` finds no vacant slot and never
/// shrinks. Removal leaves a vacant slot in place which the next insertion
/// reuses.
#[derive(Debug, Clone)]
pub struct AssociativeArray<K, V> {
    slots: Vec<Option<Entry<K, V>>>,
    count: usize,
}

fn vacant_slots<K, V>(capacity: usize) -> Vec<Option<Entry<K, V>>> {
    repeat_with(|| None).take(capacity).collect()
}

impl<K, V> AssociativeArray<K, V> {
    /// Creates an empty array with [`DEFAULT_CAPACITY`] slots.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: vacant_slots(DEFAULT_CAPACITY),
            count: 0,
        }
    }

    /// Creates an empty array with `capacity` slots.
    ///
    /// # Errors
    ///
    /// Returns `AssocArrayError::InvalidConfiguration` if `capacity` is 0,
    /// since a zero-length buffer cannot grow by doubling.
    pub fn with_capacity(capacity: usize) -> Result<Self, AssocArrayError> {
        if capacity == 0 {
            return Err(AssocArrayError::InvalidConfiguration {
                parameter: "capacity",
                value: capacity,
            });
        }

        Ok(Self {
            slots: vacant_slots(capacity),
            count: 0,
        })
    }

    /// Number of key/value pairs stored.
    #[must_use]
    pub fn size(&self) -> usize {
        self.count
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.count
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Number of allocated slots, occupied or not.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Vacates every slot. The capacity is kept.
    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
        self.count = 0;
    }

    /// Returns an iterator over the pairs, in slot order.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(&self.slots, self.count)
    }

    #[must_use]
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys::new(self.iter())
    }

    #[must_use]
    pub fn values(&self) -> Values<'_, K, V> {
        Values::new(self.iter())
    }

    /// Doubles the slot buffer. Existing slots keep their index and occupancy.
    pub(crate) fn expand(&mut self) {
        let old_capacity = self.slots.len();
        let new_capacity = old_capacity * 2;

        self.slots.reserve_exact(new_capacity - old_capacity);
        self.slots.resize_with(new_capacity, || None);
        debug!("expanded associative array from {old_capacity} to {new_capacity} slots");
    }

    fn vacant_slot(&self) -> Option<usize> {
        if self.count == self.slots.len() {
            return None;
        }
        self.slots.iter().position(Option::is_none)
    }
}

impl<K: Eq, V> AssociativeArray<K, V> {
    /// Associates `value` with `key`.
    ///
    /// An existing entry for `key` has its value replaced in place and the old
    /// value is returned. Otherwise the pair goes into the first vacant slot,
    /// doubling the buffer first if every slot is occupied, and `None` is
    /// returned.
    pub fn set(&mut self, key: K, value: V) -> Option<V> {
        if let Some(index) = self.find(&key) {
            if let Some(entry) = self.slots[index].as_mut() {
                trace!("replacing value in slot {index}");
                return Some(mem::replace(&mut entry.value, value));
            }
        }

        let index = match self.vacant_slot() {
            Some(index) => index,
            None => {
                let index = self.slots.len();
                self.expand();
                index
            }
        };

        self.slots[index] = Some(Entry { key, value });
        self.count += 1;
        trace!("inserted into slot {index}, size is now {}", self.count);
        None
    }

    /// Like [`set`](Self::set), for callers whose key may be absent.
    ///
    /// # Errors
    ///
    /// Returns `AssocArrayError::InvalidKey` if `key` is `None`. The array is
    /// left untouched.
    pub fn set_nullable(&mut self, key: Option<K>, value: V) -> Result<Option<V>, AssocArrayError> {
        let key = key.ok_or(AssocArrayError::InvalidKey)?;
        Ok(self.set(key, value))
    }

    /// Gets the value associated with `key`.
    ///
    /// # Errors
    ///
    /// Returns `AssocArrayError::KeyNotFound` if no entry holds `key`.
    pub fn get(&self, key: &K) -> Result<&V, AssocArrayError> {
        self.find(key)
            .and_then(|index| self.slots.get(index)?.as_ref())
            .map(|entry| &entry.value)
            .ok_or(AssocArrayError::KeyNotFound)
    }

    /// Like [`get`](Self::get), for callers whose key may be absent.
    ///
    /// # Errors
    ///
    /// Returns `AssocArrayError::KeyNotFound` if `key` is `None` or no entry
    /// holds it.
    pub fn get_nullable(&self, key: Option<&K>) -> Result<&V, AssocArrayError> {
        key.map_or(Err(AssocArrayError::KeyNotFound), |key| self.get(key))
    }

    /// Gets a mutable reference to the value associated with `key`.
    ///
    /// # Errors
    ///
    /// Returns `AssocArrayError::KeyNotFound` if no entry holds `key`.
    pub fn get_mut(&mut self, key: &K) -> Result<&mut V, AssocArrayError> {
        let index = self.find(key).ok_or(AssocArrayError::KeyNotFound)?;
        self.slots
            .get_mut(index)
            .and_then(Option::as_mut)
            .map(|entry| &mut entry.value)
            .ok_or(AssocArrayError::KeyNotFound)
    }

    #[must_use]
    pub fn has_key(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// Always `false` for an absent key.
    #[must_use]
    pub fn has_key_nullable(&self, key: Option<&K>) -> bool {
        key.is_some_and(|key| self.has_key(key))
    }

    /// Removes the entry for `key` and returns its value.
    ///
    /// The slot becomes vacant and stays in the buffer. Removing a key that is
    /// not present does nothing.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let index = self.find(key)?;
        let entry = self.slots.get_mut(index)?.take()?;
        self.count -= 1;
        trace!("vacated slot {index}, size is now {}", self.count);
        Some(entry.value)
    }

    /// Like [`remove`](Self::remove). An absent key is a no-op.
    pub fn remove_nullable(&mut self, key: Option<&K>) -> Option<V> {
        self.remove(key?)
    }

    /// Index of the first occupied slot holding `key`. Vacant slots are skipped.
    pub(crate) fn find(&self, key: &K) -> Option<usize> {
        self.slots
            .iter()
            .position(|slot| matches!(slot, Some(entry) if entry.key == *key))
    }
}

impl<K, V> Default for AssociativeArray<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq, V> Extend<(K, V)> for AssociativeArray<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

impl<K: Eq, V> FromIterator<(K, V)> for AssociativeArray<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut array = Self::new();
        array.extend(iter);
        array
    }
}

/// Renders as `{ key1: value1, key2: value2 }`, or `{}` when empty.
impl<K: fmt::Display, V: fmt::Display> fmt::Display for AssociativeArray<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("{}");
        }

        f.write_str("{ ")?;
        for (position, (key, value)) in self.iter().enumerate() {
            if position > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}: {value}")?;
        }
        f.write_str(" }")
    }
}
