//! Priority queue vocabulary over a heap
//!
//! [`PriorityQueue`] renames the heap operations into queue terms and hides
//! everything index-related (parent/child arithmetic, `decrease_key`,
//! cursors). It holds no state of its own beyond the wrapped heap.
//!
//! # Example
//!
//! ```rust
//! use rust_minheap_collections::priority_queue::PriorityQueue;
//!
//! let mut queue = PriorityQueue::new();
//! queue.enqueue(5);
//! queue.enqueue(3);
//! queue.enqueue(7);
//! assert_eq!(queue.find_min(), Ok(&3));
//! assert_eq!(queue.dequeue_min(), Ok(3));
//! assert_eq!(queue.len(), 2);
//! ```

use crate::min_heap::MinHeap;
use crate::traits::{Heap, HeapError};

/// A min-priority queue
///
/// # Type Parameters
/// - `T`: The element type; its ordering is the priority
/// - `H`: The underlying heap implementation, [`MinHeap`] by default
#[derive(Debug, Clone)]
pub struct PriorityQueue<T: Ord, H: Heap<T> = MinHeap<T>> {
    heap: H,
    _phantom: std::marker::PhantomData<T>,
}

impl<T: Ord> PriorityQueue<T> {
    /// Creates a new empty queue backed by a [`MinHeap`]
    pub fn new() -> Self {
        Self::with_heap(MinHeap::new())
    }
}

impl<T: Ord, H: Heap<T>> PriorityQueue<T, H> {
    /// Wraps an existing heap; its elements become the queue's contents
    pub fn with_heap(heap: H) -> Self {
        Self {
            heap,
            _phantom: std::marker::PhantomData,
        }
    }

    /// Returns true if the queue is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of elements in the queue
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Adds an element to the queue
    pub fn enqueue(&mut self, value: T) {
        self.heap.insert(value)
    }

    /// Removes and returns the smallest element
    ///
    /// # Errors
    /// Returns `HeapError::EmptyHeap` if the queue is empty.
    pub fn dequeue_min(&mut self) -> Result<T, HeapError> {
        self.heap.extract_min()
    }

    /// Returns the smallest element without removing it
    ///
    /// # Errors
    /// Returns `HeapError::EmptyHeap` if the queue is empty.
    pub fn find_min(&self) -> Result<&T, HeapError> {
        self.heap.peek_min()
    }
}

impl<T: Ord, H: Heap<T>> Default for PriorityQueue<T, H> {
    fn default() -> Self {
        Self::with_heap(H::new())
    }
}

impl<T: Ord> FromIterator<T> for PriorityQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::with_heap(MinHeap::from_iter(iter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_vocabulary() {
        let mut queue = PriorityQueue::new();
        assert!(queue.is_empty());

        queue.enqueue(4);
        queue.enqueue(1);
        queue.enqueue(3);

        assert_eq!(queue.len(), 3);
        assert_eq!(queue.find_min(), Ok(&1));
        assert_eq!(queue.dequeue_min(), Ok(1));
        assert_eq!(queue.dequeue_min(), Ok(3));
        assert_eq!(queue.dequeue_min(), Ok(4));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_empty_queue_errors() {
        let mut queue: PriorityQueue<u32> = PriorityQueue::default();
        assert_eq!(queue.find_min(), Err(HeapError::EmptyHeap));
        assert_eq!(queue.dequeue_min(), Err(HeapError::EmptyHeap));
    }

    #[test]
    fn test_collect_and_clone() {
        let queue: PriorityQueue<i32> = vec![9, 2, 7].into_iter().collect();
        let mut copy = queue.clone();
        assert_eq!(copy.dequeue_min(), Ok(2));
        assert_eq!(queue.len(), 3);
        assert_eq!(copy.len(), 2);
    }
}
