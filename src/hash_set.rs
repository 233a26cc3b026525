//! Separately chained hash table set
//!
//! Elements are spread over an array of buckets by `hash % capacity`; each
//! bucket holds a chain of the elements that landed there. Once adding an
//! element would push the load factor (`len / capacity`) above 0.8, the
//! bucket array doubles and every element is rehashed into it.
//!
//! The hash strategy is injected as a [`BuildHasher`]. The default is the Fx
//! hasher from `rustc_hash`.
//!
//! # Time Complexity
//!
//! | Operation  | Complexity                                  |
//! |------------|---------------------------------------------|
//! | `add`      | O(1) expected, O(n) when the table grows    |
//! | `contains` | O(1) expected                               |
//! | `len`      | O(1)                                        |
//!
//! # Example
//!
//! ```rust
//! use rust_minheap_collections::Set;
//! use rust_minheap_collections::hash_set::{HashSet, DEFAULT_CAPACITY};
//!
//! let mut set = HashSet::new();
//! assert_eq!(set.capacity(), DEFAULT_CAPACITY);
//! for word in ["alpha", "beta", "gamma"] {
//!     set.add(word);
//! }
//! assert!(set.contains(&"beta"));
//! assert_eq!(set.len(), 3);
//! ```

use crate::traits::Set;
use log::trace;
use rustc_hash::FxHasher;
use std::hash::{BuildHasher, BuildHasherDefault, Hash};

/// Number of buckets in a set created without an explicit capacity
pub const DEFAULT_CAPACITY: usize = 10;

/// Hash builder used when none is supplied
pub type DefaultHashBuilder = BuildHasherDefault<FxHasher>;

/// A set backed by a separately chained hash table
#[derive(Debug, Clone)]
pub struct HashSet<T, S = DefaultHashBuilder> {
    buckets: Vec<Vec<T>>,
    len: usize,
    hash_builder: S,
}

impl<T: Hash + Eq> HashSet<T> {
    /// Creates an empty set with [`DEFAULT_CAPACITY`] buckets
    pub fn new() -> Self {
        Self::with_hasher(DefaultHashBuilder::default())
    }

    /// Creates an empty set with `capacity` buckets (at least one)
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, DefaultHashBuilder::default())
    }
}

impl<T: Hash + Eq, S: BuildHasher> HashSet<T, S> {
    /// Creates an empty set with [`DEFAULT_CAPACITY`] buckets and the given hasher
    pub fn with_hasher(hash_builder: S) -> Self {
        Self::with_capacity_and_hasher(DEFAULT_CAPACITY, hash_builder)
    }

    /// Creates an empty set with `capacity` buckets (at least one) and the given hasher
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        let mut buckets = Vec::new();
        buckets.resize_with(capacity.max(1), Vec::new);
        Self {
            buckets,
            len: 0,
            hash_builder,
        }
    }

    /// Number of buckets
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Number of elements chained in bucket `index`; 0 if the bucket does not exist
    pub fn elements_at_index(&self, index: usize) -> usize {
        self.buckets.get(index).map_or(0, Vec::len)
    }

    /// Returns true if `element` is chained in bucket `index`
    pub fn is_element_at_index(&self, element: &T, index: usize) -> bool {
        self.buckets
            .get(index)
            .is_some_and(|bucket| bucket.contains(element))
    }

    fn bucket_index(&self, element: &T, capacity: usize) -> usize {
        (self.hash_builder.hash_one(element) % capacity as u64) as usize
    }

    fn grow(&mut self) {
        let capacity = self.buckets.len() * 2;
        trace!(
            "hash set: resizing from {} to {} buckets ({} elements)",
            self.buckets.len(),
            capacity,
            self.len
        );

        let mut buckets: Vec<Vec<T>> = Vec::new();
        buckets.resize_with(capacity, Vec::new);
        for element in std::mem::take(&mut self.buckets).into_iter().flatten() {
            let index = self.bucket_index(&element, capacity);
            buckets[index].push(element);
        }
        self.buckets = buckets;
    }
}

impl<T: Hash + Eq, S: BuildHasher> Set<T> for HashSet<T, S> {
    fn add(&mut self, element: T) {
        if self.contains(&element) {
            return;
        }
        // len / capacity would exceed 0.8
        if (self.len + 1) * 5 > self.buckets.len() * 4 {
            self.grow();
        }
        let index = self.bucket_index(&element, self.buckets.len());
        self.buckets[index].push(element);
        self.len += 1;
    }

    fn contains(&self, element: &T) -> bool {
        let index = self.bucket_index(element, self.buckets.len());
        self.buckets[index].contains(element)
    }

    fn len(&self) -> usize {
        self.len
    }
}

impl<T: Hash + Eq, S: BuildHasher + Default> Default for HashSet<T, S> {
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<T: Hash + Eq, S: BuildHasher> Extend<T> for HashSet<T, S> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.add(element);
        }
    }
}

impl<T: Hash + Eq> FromIterator<T> for HashSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}
