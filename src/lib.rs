//! Classic Container Data Structures for Rust
//!
//! This crate provides an indexed binary min-heap together with the
//! containers built around it, and a family of sets sharing one capability
//! trait.
//!
//! # Features
//!
//! - **Min-Heap**: array-backed binary heap with `decrease_key` and `remove_at` by index,
//!   O(n) construction from a sequence, and O(log n) insert/extract-min
//! - **Cursors**: bidirectional read-only and mutable cursors over the heap's storage order
//! - **Priority Queue**: queue vocabulary (`enqueue`, `dequeue_min`, `find_min`) over any [`Heap`]
//! - **AVL Set**: balanced search tree with O(log n) add/contains and tree traversals
//! - **Hash Set**: separately chained hash table that doubles past a 0.8 load factor
//! - **Skip List Set**: probabilistic levels with an injectable coin ([`LevelTester`](skiplist_set::LevelTester))
//!
//! # Example
//!
//! ```rust
//! use rust_minheap_collections::min_heap::MinHeap;
//! use rust_minheap_collections::Heap;
//!
//! let mut heap = MinHeap::new();
//! heap.insert(5);
//! heap.insert(3);
//! heap.decrease_key(0, 1).unwrap();
//! assert_eq!(heap.peek_min(), Ok(&1));
//! ```

pub mod avl_set;
pub mod cursor;
pub mod hash_set;
pub mod min_heap;
pub mod priority_queue;
pub mod skiplist_set;
pub mod traits;

// Re-export the main traits for convenience
pub use traits::{Heap, HeapError, Set};
