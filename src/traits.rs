//! Common traits for the containers in this crate
//!
//! This module provides the two capability boundaries shared by the containers:
//!
//! - [`Heap`]: min-heap/priority-queue operations, implemented by
//!   [`MinHeap`](crate::min_heap::MinHeap) and consumed by
//!   [`PriorityQueue`](crate::priority_queue::PriorityQueue)
//! - [`Set`]: the add/contains/size contract implemented by the
//!   [`AvlSet`](crate::avl_set::AvlSet), [`HashSet`](crate::hash_set::HashSet)
//!   and [`SkipListSet`](crate::skiplist_set::SkipListSet) backings
//!
//! The two are independent: nothing on the heap side calls into a [`Set`].

use std::fmt;

/// Error type for heap and cursor operations
///
/// Every operation that returns a `HeapError` checks its preconditions before
/// touching the heap, so the heap is unchanged when an error is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// `peek_min` or `extract_min` was called on an empty heap
    EmptyHeap,
    /// An index argument was outside `[0, len)`
    IndexOutOfRange {
        /// The offending index
        index: usize,
        /// The heap length at the time of the call
        len: usize,
    },
    /// `decrease_key` was given a value greater than the current one
    InvalidKeyUpdate,
    /// A cursor was dereferenced or edited at past-start or past-end
    InvalidPosition,
    /// A cursor was moved past a sentinel it already sits on
    IteratorExhausted,
    /// `remove` was asked for an element that is not in the heap
    ElementNotFound,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::EmptyHeap => write!(f, "heap is empty"),
            HeapError::IndexOutOfRange { index, len } => {
                write!(f, "index {index} is out of range for heap of length {len}")
            }
            HeapError::InvalidKeyUpdate => {
                write!(f, "new key is greater than the current key")
            }
            HeapError::InvalidPosition => {
                write!(f, "cursor is not positioned on an element")
            }
            HeapError::IteratorExhausted => {
                write!(f, "cursor cannot move past its sentinel position")
            }
            HeapError::ElementNotFound => write!(f, "element is not in the heap"),
        }
    }
}

impl std::error::Error for HeapError {}

/// Base trait for min-heap/priority queue data structures
///
/// Unlike `std::collections::BinaryHeap`, implementations are min-heaps and
/// report misuse on an empty heap as [`HeapError::EmptyHeap`] rather than
/// returning `None`.
///
/// # Example
///
/// ```rust
/// use rust_minheap_collections::Heap;
/// use rust_minheap_collections::min_heap::MinHeap;
///
/// let mut heap = MinHeap::new();
/// heap.insert(3);
/// heap.insert(1);
/// heap.insert(2);
///
/// assert_eq!(heap.peek_min(), Ok(&1));
/// assert_eq!(heap.extract_min(), Ok(1));
/// ```
pub trait Heap<T: Ord> {
    /// Creates a new empty heap
    fn new() -> Self;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an element
    ///
    /// # Time Complexity
    /// O(log n)
    fn insert(&mut self, element: T);

    /// Returns the minimum element without removing it
    ///
    /// # Errors
    /// Returns `HeapError::EmptyHeap` if the heap is empty.
    fn peek_min(&self) -> Result<&T, HeapError>;

    /// Removes and returns the minimum element
    ///
    /// # Errors
    /// Returns `HeapError::EmptyHeap` if the heap is empty.
    ///
    /// # Time Complexity
    /// O(log n)
    fn extract_min(&mut self) -> Result<T, HeapError>;

    /// Merges another heap into this one, consuming the other heap
    fn merge(&mut self, other: Self);
}

/// The common "Set" capability
///
/// Each backing documents its own complexity; the trait itself promises only
/// that adding an element already present has no effect.
///
/// # Example
///
/// ```rust
/// use rust_minheap_collections::Set;
/// use rust_minheap_collections::avl_set::AvlSet;
///
/// let mut set = AvlSet::new();
/// set.add(5);
/// set.add(5);
/// assert!(set.contains(&5));
/// assert_eq!(set.len(), 1);
/// ```
pub trait Set<T> {
    /// Adds an element; no effect if it is already present
    fn add(&mut self, element: T);

    /// Returns true if the element is in the set
    fn contains(&self, element: &T) -> bool;

    /// Returns the number of elements in the set
    fn len(&self) -> usize;

    /// Returns true if the set holds no elements
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reports whether this backing is implemented
    ///
    /// Every backing in this crate is, so the provided method answers `true`.
    fn is_implemented(&self) -> bool {
        true
    }
}
