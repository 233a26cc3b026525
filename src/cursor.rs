//! Bidirectional cursors over a [`MinHeap`]
//!
//! A cursor walks the heap in storage order `0, 1, 2, ...`, which is level
//! order over the implied complete binary tree (not a recursive preorder
//! walk). Besides the live positions `[0, len)` a cursor can sit on one of
//! two sentinels, past-start and past-end. A cursor over an empty heap is on
//! both at once.
//!
//! [`Cursor`] borrows the heap shared and only reads. [`CursorMut`] borrows it
//! exclusively and can insert and remove elements; the heap property holds
//! after every edit returns, so an inserted element ends up wherever heap
//! order puts it rather than next to the cursor.
//!
//! # Example
//!
//! ```rust
//! use rust_minheap_collections::min_heap::MinHeap;
//!
//! let mut heap = MinHeap::from_vec(vec![1, 2, 3]);
//! let mut cursor = heap.cursor_mut();
//! cursor.move_next().unwrap();
//! assert_eq!(cursor.value(), Ok(&2));
//!
//! assert_eq!(cursor.remove(true), Ok(2));
//! assert_eq!(cursor.value(), Ok(&3));
//! ```

use crate::min_heap::MinHeap;
use crate::traits::{Heap, HeapError};
use log::debug;

/// Where a cursor points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Position {
    PastStart,
    At(usize),
    PastEnd,
}

impl Position {
    fn start(len: usize) -> Self {
        if len == 0 {
            Position::PastEnd
        } else {
            Position::At(0)
        }
    }

    fn is_past_start(self, len: usize) -> bool {
        len == 0 || self == Position::PastStart
    }

    fn is_past_end(self, len: usize) -> bool {
        len == 0 || self == Position::PastEnd
    }

    fn next(self, len: usize) -> Result<Self, HeapError> {
        if self.is_past_end(len) {
            debug!("cursor cannot move past the end");
            return Err(HeapError::IteratorExhausted);
        }
        Ok(match self {
            Position::PastStart => Position::At(0),
            Position::At(i) if i + 1 < len => Position::At(i + 1),
            _ => Position::PastEnd,
        })
    }

    fn prev(self, len: usize) -> Result<Self, HeapError> {
        if self.is_past_start(len) {
            debug!("cursor cannot move before the start");
            return Err(HeapError::IteratorExhausted);
        }
        Ok(match self {
            Position::PastEnd => Position::At(len - 1),
            Position::At(i) if i > 0 => Position::At(i - 1),
            _ => Position::PastStart,
        })
    }

    fn index(self) -> Option<usize> {
        match self {
            Position::At(i) => Some(i),
            _ => None,
        }
    }

    fn live_index(self) -> Result<usize, HeapError> {
        self.index().ok_or_else(|| {
            debug!("cursor is on a sentinel, not an element");
            HeapError::InvalidPosition
        })
    }

    fn element_of<T: Ord>(self, heap: &MinHeap<T>) -> Result<&T, HeapError> {
        let index = self.live_index()?;
        heap.as_slice().get(index).ok_or(HeapError::InvalidPosition)
    }
}

/// A read-only cursor over a [`MinHeap`]
#[derive(Debug)]
pub struct Cursor<'a, T> {
    heap: &'a MinHeap<T>,
    position: Position,
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        Cursor {
            heap: self.heap,
            position: self.position,
        }
    }
}

impl<'a, T: Ord> Cursor<'a, T> {
    pub(crate) fn new(heap: &'a MinHeap<T>) -> Self {
        Cursor {
            heap,
            position: Position::start(heap.len()),
        }
    }

    /// Advances one element; moves to past-end after the last element
    ///
    /// # Errors
    /// Returns `HeapError::IteratorExhausted` if already past-end.
    pub fn move_next(&mut self) -> Result<(), HeapError> {
        self.position = self.position.next(self.heap.len())?;
        Ok(())
    }

    /// Steps back one element; moves to past-start before the first element
    ///
    /// # Errors
    /// Returns `HeapError::IteratorExhausted` if already past-start.
    pub fn move_prev(&mut self) -> Result<(), HeapError> {
        self.position = self.position.prev(self.heap.len())?;
        Ok(())
    }

    /// True before the first element, or always on an empty heap
    pub fn is_past_start(&self) -> bool {
        self.position.is_past_start(self.heap.len())
    }

    /// True after the last element, or always on an empty heap
    pub fn is_past_end(&self) -> bool {
        self.position.is_past_end(self.heap.len())
    }

    /// Storage index of the current element, if the cursor is live
    pub fn index(&self) -> Option<usize> {
        self.position.index()
    }

    /// The current element
    ///
    /// # Errors
    /// Returns `HeapError::InvalidPosition` at past-start or past-end.
    pub fn value(&self) -> Result<&'a T, HeapError> {
        let heap: &'a MinHeap<T> = self.heap;
        self.position.element_of(heap)
    }
}

/// A cursor over a [`MinHeap`] that can insert and remove elements
#[derive(Debug)]
pub struct CursorMut<'a, T> {
    heap: &'a mut MinHeap<T>,
    position: Position,
}

impl<'a, T: Ord> CursorMut<'a, T> {
    pub(crate) fn new(heap: &'a mut MinHeap<T>) -> Self {
        let position = Position::start(heap.len());
        CursorMut { heap, position }
    }

    /// Advances one element; moves to past-end after the last element
    ///
    /// # Errors
    /// Returns `HeapError::IteratorExhausted` if already past-end.
    pub fn move_next(&mut self) -> Result<(), HeapError> {
        self.position = self.position.next(self.heap.len())?;
        Ok(())
    }

    /// Steps back one element; moves to past-start before the first element
    ///
    /// # Errors
    /// Returns `HeapError::IteratorExhausted` if already past-start.
    pub fn move_prev(&mut self) -> Result<(), HeapError> {
        self.position = self.position.prev(self.heap.len())?;
        Ok(())
    }

    /// True before the first element, or always on an empty heap
    pub fn is_past_start(&self) -> bool {
        self.position.is_past_start(self.heap.len())
    }

    /// True after the last element, or always on an empty heap
    pub fn is_past_end(&self) -> bool {
        self.position.is_past_end(self.heap.len())
    }

    /// Storage index of the current element, if the cursor is live
    pub fn index(&self) -> Option<usize> {
        self.position.index()
    }

    /// The current element
    ///
    /// # Errors
    /// Returns `HeapError::InvalidPosition` at past-start or past-end.
    pub fn value(&self) -> Result<&T, HeapError> {
        self.position.element_of(self.heap)
    }

    /// A read-only view of the heap at the current position
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor {
            heap: &*self.heap,
            position: self.position,
        }
    }

    /// Inserts `element` ahead of the current element in traversal order
    ///
    /// The element is placed by sift-up, so it lands wherever heap order
    /// requires. The cursor stays on the element it was on.
    ///
    /// # Errors
    /// Returns `HeapError::InvalidPosition` at past-start.
    pub fn insert_before(&mut self, element: T) -> Result<(), HeapError> {
        if self.is_past_start() {
            debug!("insert_before rejected at past-start");
            return Err(HeapError::InvalidPosition);
        }
        self.insert_tracked(element);
        Ok(())
    }

    /// Inserts `element` after the current element in traversal order
    ///
    /// The element is placed by sift-up, so it lands wherever heap order
    /// requires. The cursor stays on the element it was on.
    ///
    /// # Errors
    /// Returns `HeapError::InvalidPosition` at past-end.
    pub fn insert_after(&mut self, element: T) -> Result<(), HeapError> {
        if self.is_past_end() {
            debug!("insert_after rejected at past-end");
            return Err(HeapError::InvalidPosition);
        }
        self.insert_tracked(element);
        Ok(())
    }

    /// Removes and returns the current element
    ///
    /// With `move_to_next_afterward` the cursor lands on the element that
    /// followed the removed one: the same storage index if the element
    /// filling the slot sank below it, or the next index if that element
    /// rose into the part already walked. Otherwise it lands on the index
    /// before. It falls onto past-end or past-start when no such index exists.
    ///
    /// # Errors
    /// Returns `HeapError::InvalidPosition` at past-start or past-end.
    pub fn remove(&mut self, move_to_next_afterward: bool) -> Result<T, HeapError> {
        let index = self.position.live_index()?;
        let (removed, moved_up) = self.heap.remove_at_reporting(index)?;

        self.position = if move_to_next_afterward {
            let next = if moved_up { index + 1 } else { index };
            if next < self.heap.len() {
                Position::At(next)
            } else {
                Position::PastEnd
            }
        } else if index > 0 {
            Position::At(index - 1)
        } else {
            Position::PastStart
        };

        Ok(removed)
    }

    fn insert_tracked(&mut self, element: T) {
        let slot = self.heap.push_unordered(element);
        match self.position {
            Position::At(current) => {
                let (_, current) = self.heap.sift_up_tracking(slot, current);
                self.position = Position::At(current);
            }
            _ => {
                self.heap.sift_up_tracking(slot, slot);
            }
        }
    }
}
