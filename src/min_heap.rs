//! Indexed Binary Min-Heap implementation
//!
//! An array-backed binary min-heap. Element positions are plain indices into
//! the backing vector, which makes index-addressed operations such as
//! [`MinHeap::decrease_key`] and [`MinHeap::remove_at`] possible without
//! handles.
//!
//! The tree shape is implicit: index `i` has its parent at `(i - 1) / 2` and
//! its children at `2i + 1` and `2i + 2`.
//!
//! # Time Complexity
//!
//! | Operation      | Complexity |
//! |----------------|------------|
//! | `insert`       | O(log n)   |
//! | `extract_min`  | O(log n)   |
//! | `peek_min`     | O(1)       |
//! | `decrease_key` | O(log n)   |
//! | `remove_at`    | O(log n)   |
//! | `contains`     | O(n)       |
//! | `from_vec`     | O(n)       |
//! | `merge`        | O(n + m)   |
//!
//! `contains` is linear because the heap order says nothing about where a
//! given value sits apart from the minimum.
//!
//! # Example
//!
//! ```rust
//! use rust_minheap_collections::Heap;
//! use rust_minheap_collections::min_heap::MinHeap;
//!
//! let mut heap = MinHeap::from_vec(vec![8, 12, 9, 7, 22, 3, 26, 14, 11, 15, 22]);
//! assert_eq!(heap.peek_min(), Ok(&3));
//! assert_eq!(heap.len(), 11);
//!
//! heap.decrease_key(4, 1).unwrap();
//! assert_eq!(heap.extract_min(), Ok(1));
//! assert_eq!(heap.extract_min(), Ok(3));
//! ```

use crate::cursor::{Cursor, CursorMut};
use crate::traits::{Heap, HeapError};
use log::{debug, trace};
use std::fmt;

/// A binary min-heap over a `Vec<T>`
///
/// Duplicates are kept. Cloning a `MinHeap` copies its storage; to move the
/// contents out and leave an empty heap behind, use [`std::mem::take`].
#[derive(Debug, Clone)]
pub struct MinHeap<T> {
    /// Heap-ordered elements; `data[0]` is the minimum
    data: Vec<T>,
}

impl<T: Ord> Heap<T> for MinHeap<T> {
    fn new() -> Self {
        Self { data: Vec::new() }
    }

    fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn insert(&mut self, element: T) {
        self.data.push(element);
        self.sift_up(self.data.len() - 1);
    }

    fn peek_min(&self) -> Result<&T, HeapError> {
        self.data.first().ok_or_else(|| {
            debug!("peek_min on empty heap");
            HeapError::EmptyHeap
        })
    }

    fn extract_min(&mut self) -> Result<T, HeapError> {
        if self.data.is_empty() {
            debug!("extract_min on empty heap");
            return Err(HeapError::EmptyHeap);
        }

        // swap_remove moves the last element into the root slot
        let min = self.data.swap_remove(0);
        if !self.data.is_empty() {
            self.sift_down(0);
        }

        Ok(min)
    }

    fn merge(&mut self, other: Self) {
        if other.data.is_empty() {
            return;
        }
        self.data.extend(other.data);
        self.rebuild();
    }
}

impl<T: Ord> MinHeap<T> {
    /// Builds a heap from an arbitrary vector in O(n)
    pub fn from_vec(data: Vec<T>) -> Self {
        let mut heap = Self { data };
        heap.rebuild();
        heap
    }

    /// Builds a heap from a copy of the given elements in O(n)
    pub fn from_slice(elements: &[T]) -> Self
    where
        T: Clone,
    {
        Self::from_vec(elements.to_vec())
    }

    /// Height of the implied complete binary tree
    ///
    /// Returns -1 for an empty heap and 0 for a single element.
    pub fn height(&self) -> i32 {
        (usize::BITS - self.data.len().leading_zeros()) as i32 - 1
    }

    /// Returns true if an element equal to `element` is in the heap
    ///
    /// This is a linear scan.
    pub fn contains(&self, element: &T) -> bool {
        self.data.iter().any(|e| e == element)
    }

    /// Lowers the element at `index` to `new_value` and restores heap order
    ///
    /// A `new_value` equal to the current one is accepted and leaves the heap
    /// unchanged.
    ///
    /// # Errors
    /// - `HeapError::IndexOutOfRange` if `index >= len`
    /// - `HeapError::InvalidKeyUpdate` if `new_value` is greater than the current value
    pub fn decrease_key(&mut self, index: usize, new_value: T) -> Result<(), HeapError> {
        let current = self.get_checked(index)?;
        if new_value > *current {
            debug!("decrease_key at index {index} rejected: new key is larger");
            return Err(HeapError::InvalidKeyUpdate);
        }

        self.data[index] = new_value;
        self.sift_up(index);
        Ok(())
    }

    /// Removes and returns the element at `index`
    ///
    /// The last element takes the vacated slot and is sifted up or down,
    /// whichever direction restores the heap property.
    ///
    /// # Errors
    /// Returns `HeapError::IndexOutOfRange` if `index >= len`.
    pub fn remove_at(&mut self, index: usize) -> Result<T, HeapError> {
        self.remove_at_reporting(index).map(|(removed, _)| removed)
    }

    /// Removes one element equal to `element`
    ///
    /// # Errors
    /// Returns `HeapError::ElementNotFound` if no such element exists.
    pub fn remove(&mut self, element: &T) -> Result<T, HeapError> {
        let index = self
            .data
            .iter()
            .position(|e| e == element)
            .ok_or_else(|| {
                debug!("remove of an element not in the heap");
                HeapError::ElementNotFound
            })?;
        self.remove_at(index)
    }

    /// Index of the parent of `index`
    ///
    /// `None` for the root and for an `index` that is not in the heap.
    pub fn parent(&self, index: usize) -> Option<usize> {
        if index >= self.data.len() {
            return None;
        }
        index.checked_sub(1).map(|i| i / 2)
    }

    /// Index of the left child of `index`, if it exists
    pub fn left(&self, index: usize) -> Option<usize> {
        index
            .checked_mul(2)
            .and_then(|i| i.checked_add(1))
            .filter(|&c| c < self.data.len())
    }

    /// Index of the right child of `index`, if it exists
    pub fn right(&self, index: usize) -> Option<usize> {
        index
            .checked_mul(2)
            .and_then(|i| i.checked_add(2))
            .filter(|&c| c < self.data.len())
    }

    /// Checks the heap property over every parent/child pair in O(n)
    pub fn is_valid(&self) -> bool {
        (1..self.data.len()).all(|i| self.data[(i - 1) / 2] <= self.data[i])
    }

    /// Removes all elements
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// The elements in storage (level) order
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Iterates over the elements in storage (level) order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Consumes the heap, returning its storage in heap order
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Consumes the heap, returning its elements in ascending order
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Ok(min) = self.extract_min() {
            sorted.push(min);
        }
        sorted
    }

    /// A read-only cursor starting at the root
    pub fn cursor(&self) -> Cursor<'_, T> {
        Cursor::new(self)
    }

    /// A cursor that can insert and remove elements, starting at the root
    pub fn cursor_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(self)
    }

    pub(crate) fn get_checked(&self, index: usize) -> Result<&T, HeapError> {
        self.data.get(index).ok_or_else(|| {
            debug!("index {index} out of range for heap of length {}", self.data.len());
            HeapError::IndexOutOfRange {
                index,
                len: self.data.len(),
            }
        })
    }

    /// Removes the element at `index`, also reporting whether the element
    /// that took its slot was sifted up
    ///
    /// A sifted-up element only swaps with ancestors of `index`, so every
    /// element after `index` in storage order stays where it was.
    pub(crate) fn remove_at_reporting(&mut self, index: usize) -> Result<(T, bool), HeapError> {
        self.get_checked(index)?;

        let removed = self.data.swap_remove(index);
        let mut moved_up = false;
        if index < self.data.len() {
            moved_up = self.sift_up(index) != index;
            if !moved_up {
                self.sift_down(index);
            }
        }

        Ok((removed, moved_up))
    }

    /// Appends without restoring order; callers must sift afterwards
    pub(crate) fn push_unordered(&mut self, element: T) -> usize {
        self.data.push(element);
        self.data.len() - 1
    }

    /// Bottom-up heapify from the last internal node to the root
    fn rebuild(&mut self) {
        let len = self.data.len();
        trace!("heapifying {len} elements");
        for index in (0..=len / 2).rev() {
            self.sift_down(index);
        }
    }

    /// Move element at index up to maintain heap property; returns its final index
    fn sift_up(&mut self, index: usize) -> usize {
        self.sift_up_tracking(index, index).0
    }

    /// Sift up from `index` while following where `tracked` ends up
    ///
    /// Returns the final index of the sifted element and the new index of
    /// the element that was at `tracked`.
    pub(crate) fn sift_up_tracking(&mut self, mut index: usize, mut tracked: usize) -> (usize, usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.data[index] < self.data[parent] {
                self.data.swap(index, parent);
                if tracked == parent {
                    tracked = index;
                }
                index = parent;
            } else {
                break;
            }
        }
        (index, tracked)
    }

    /// Move element at index down to maintain heap property
    ///
    /// On equal children the left one is chosen.
    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut smallest = index;

            if left < len && self.data[left] < self.data[smallest] {
                smallest = left;
            }
            if right < len && self.data[right] < self.data[smallest] {
                smallest = right;
            }

            if smallest != index {
                self.data.swap(index, smallest);
                index = smallest;
            } else {
                break;
            }
        }
    }
}

impl<T: Ord> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> From<Vec<T>> for MinHeap<T> {
    fn from(data: Vec<T>) -> Self {
        Self::from_vec(data)
    }
}

impl<T: Ord> FromIterator<T> for MinHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T: Ord> Extend<T> for MinHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.insert(element);
        }
    }
}

impl<'a, T> IntoIterator for &'a MinHeap<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

/// Renders one tree level per line, root first
impl<T: fmt::Display> fmt::Display for MinHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut start = 0;
        let mut width = 1;
        while start < self.data.len() {
            let end = (start + width).min(self.data.len());
            for (i, element) in self.data[start..end].iter().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{element}")?;
            }
            writeln!(f)?;
            start = end;
            width *= 2;
        }
        Ok(())
    }
}
