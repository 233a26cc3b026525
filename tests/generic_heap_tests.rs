//! Generic tests for Heap implementations and the priority queue built on them
//!
//! The helpers work with any `Heap` implementation; the `MinHeap`-specific
//! tests below them cover construction, index-addressed operations and cursors.

use rust_minheap_collections::min_heap::MinHeap;
use rust_minheap_collections::priority_queue::PriorityQueue;
use rust_minheap_collections::{Heap, HeapError};

// Test helpers that work with any Heap implementation

/// Test that empty heap behaves correctly
fn test_empty_heap<H: Heap<String>>() {
    let mut heap = H::new();
    assert!(heap.is_empty());
    assert_eq!(heap.len(), 0);
    assert_eq!(heap.peek_min(), Err(HeapError::EmptyHeap));
    assert_eq!(heap.extract_min(), Err(HeapError::EmptyHeap));
}

/// Test basic insert and extract operations
fn test_basic_operations<H: Heap<&'static str>>() {
    let mut heap = H::new();

    heap.insert("pear");
    heap.insert("apple");
    heap.insert("zucchini");
    heap.insert("kiwi");

    assert!(!heap.is_empty());
    assert_eq!(heap.len(), 4);
    assert_eq!(heap.peek_min(), Ok(&"apple"));

    assert_eq!(heap.extract_min(), Ok("apple"));
    assert_eq!(heap.extract_min(), Ok("kiwi"));
    assert_eq!(heap.extract_min(), Ok("pear"));
    assert_eq!(heap.extract_min(), Ok("zucchini"));
    assert_eq!(heap.extract_min(), Err(HeapError::EmptyHeap));
    assert!(heap.is_empty());
}

/// Test size conservation across inserts and extracts
fn test_size_conservation<H: Heap<i32>>() {
    let mut heap = H::new();
    for i in 0..50 {
        let before = heap.len();
        heap.insert(i * 7 % 13);
        assert_eq!(heap.len(), before + 1);
    }
    while !heap.is_empty() {
        let before = heap.len();
        heap.extract_min().unwrap();
        assert_eq!(heap.len(), before - 1);
    }
}

/// Test merge operations
fn test_merge_operations<H: Heap<i32>>() {
    let mut heap1 = H::new();
    heap1.insert(5);
    heap1.insert(1);

    let mut heap2 = H::new();
    heap2.insert(10);
    heap2.insert(3);

    heap1.merge(heap2);

    assert_eq!(heap1.len(), 4);
    assert_eq!(heap1.peek_min(), Ok(&1));
    assert_eq!(heap1.extract_min(), Ok(1));
    assert_eq!(heap1.extract_min(), Ok(3));
    assert_eq!(heap1.extract_min(), Ok(5));
    assert_eq!(heap1.extract_min(), Ok(10));

    // Merge empty into non-empty and back
    let mut heap3 = H::new();
    heap3.insert(2);
    heap3.merge(H::new());
    assert_eq!(heap3.len(), 1);

    let mut heap4 = H::new();
    heap4.merge(heap3);
    assert_eq!(heap4.peek_min(), Ok(&2));
}

/// Test that equal elements all come out
fn test_duplicates<H: Heap<i32>>() {
    let mut heap = H::new();
    for _ in 0..5 {
        heap.insert(7);
    }
    heap.insert(3);
    assert_eq!(heap.extract_min(), Ok(3));
    for _ in 0..5 {
        assert_eq!(heap.extract_min(), Ok(7));
    }
}

/// Test the queue façade over a heap implementation
fn test_priority_queue_over<H: Heap<i32>>() {
    let mut queue: PriorityQueue<i32, H> = PriorityQueue::default();
    assert_eq!(queue.find_min(), Err(HeapError::EmptyHeap));

    for v in [8, 3, 5, 1] {
        queue.enqueue(v);
    }
    assert_eq!(queue.len(), 4);
    assert_eq!(queue.find_min(), Ok(&1));
    assert_eq!(queue.dequeue_min(), Ok(1));
    assert_eq!(queue.dequeue_min(), Ok(3));
    assert_eq!(queue.len(), 2);
}

#[test]
fn test_min_heap_generic_suite() {
    test_empty_heap::<MinHeap<String>>();
    test_basic_operations::<MinHeap<&'static str>>();
    test_size_conservation::<MinHeap<i32>>();
    test_merge_operations::<MinHeap<i32>>();
    test_duplicates::<MinHeap<i32>>();
    test_priority_queue_over::<MinHeap<i32>>();
}

#[test]
fn test_build_from_sequence() {
    let heap = MinHeap::from_vec(vec![8, 12, 9, 7, 22, 3, 26, 14, 11, 15, 22]);
    assert_eq!(heap.peek_min(), Ok(&3));
    assert_eq!(heap.len(), 11);
    assert!(heap.is_valid());
}

#[test]
fn test_extract_min_yields_sorted_sequence() {
    let mut heap = MinHeap::from_vec(vec![1, 3, 6, 5, 9, 8]);
    let mut out = Vec::new();
    while let Ok(min) = heap.extract_min() {
        out.push(min);
    }
    assert_eq!(out, vec![1, 3, 5, 6, 8, 9]);
}

#[test]
fn test_height_formula() {
    assert_eq!(MinHeap::<i32>::new().height(), -1);
    assert_eq!(MinHeap::from_vec(vec![1]).height(), 0);
    assert_eq!(MinHeap::from_vec((1..=7).collect()).height(), 2);
}

#[test]
fn test_copy_assign_keeps_contents_separate() {
    let mut mh1: MinHeap<i32> = (9..=20).step_by(2).collect();
    let mut mh2: MinHeap<i32> = (1..=8).collect();

    mh1.clone_from(&mh2);
    assert_eq!(mh1.len(), 8);
    assert_eq!(mh2.len(), 8);

    mh2.insert(100);
    assert!(mh2.contains(&100));
    assert!(!mh1.contains(&100));
    for i in 1..=8 {
        assert!(mh1.contains(&i));
        assert!(mh2.contains(&i));
    }
    for i in (9..=20).step_by(2) {
        assert!(!mh1.contains(&i));
    }
}

#[test]
fn test_move_assign_swaps_contents() {
    let mut mh1: MinHeap<i32> = (9..=30).step_by(2).collect();
    let mut mh2: MinHeap<i32> = (1..=7).collect();

    std::mem::swap(&mut mh1, &mut mh2);

    assert_eq!(mh1.len(), 7);
    assert_eq!(mh2.len(), 11);
    for i in 1..=7 {
        assert!(mh1.contains(&i));
        assert!(!mh2.contains(&i));
    }
    for i in (9..=30).step_by(2) {
        assert!(!mh1.contains(&i));
        assert!(mh2.contains(&i));
    }
}

#[test]
fn test_take_leaves_source_empty() {
    let mut mh1: MinHeap<i32> = (1..=7).collect();
    let mh2 = std::mem::take(&mut mh1);

    assert_eq!(mh1.len(), 0);
    assert!(mh1.is_empty());
    assert_eq!(mh2.len(), 7);
    assert!((1..=7).all(|i| mh2.contains(&i)));
    assert!((9..=20).all(|i| !mh2.contains(&i)));
}

#[test]
fn test_error_contracts() {
    let mut heap = MinHeap::from_vec(vec![4, 8, 6]);

    assert_eq!(heap.decrease_key(0, 5), Err(HeapError::InvalidKeyUpdate));
    assert_eq!(
        heap.remove_at(9),
        Err(HeapError::IndexOutOfRange { index: 9, len: 3 })
    );
    assert_eq!(heap.as_slice(), &[4, 8, 6]);

    let mut cursor = heap.cursor_mut();
    cursor.move_prev().unwrap();
    assert_eq!(cursor.value(), Err(HeapError::InvalidPosition));
    assert_eq!(cursor.move_prev(), Err(HeapError::IteratorExhausted));
}

#[test]
fn test_errors_display() {
    assert_eq!(HeapError::EmptyHeap.to_string(), "heap is empty");
    assert_eq!(
        HeapError::IndexOutOfRange { index: 4, len: 2 }.to_string(),
        "index 4 is out of range for heap of length 2"
    );
    let boxed: Box<dyn std::error::Error> = Box::new(HeapError::InvalidKeyUpdate);
    assert!(boxed.to_string().contains("greater"));
}

#[test]
fn test_cursor_reads_level_order() {
    // Level order, not tree preorder (which would be 1 2 4 5 3 6)
    let heap = MinHeap::from_vec(vec![1, 2, 3, 4, 5, 6]);
    let mut cursor = heap.cursor();
    let mut seen = Vec::new();
    while let Ok(v) = cursor.value() {
        seen.push(*v);
        cursor.move_next().unwrap();
    }
    assert!(cursor.is_past_end());
    assert_eq!(seen, heap.iter().copied().collect::<Vec<_>>());
    assert_eq!(seen, vec![1, 2, 3, 4, 5, 6]);

    let mut back = Vec::new();
    cursor.move_prev().unwrap();
    while let Ok(v) = cursor.value() {
        back.push(*v);
        cursor.move_prev().unwrap();
    }
    assert!(cursor.is_past_start());
    back.reverse();
    assert_eq!(back, seen);
}

#[test]
fn test_cursor_drain_removes_everything() {
    let mut heap: MinHeap<i32> = (0..20).rev().collect();
    {
        let mut cursor = heap.cursor_mut();
        let mut removed = 0;
        while cursor.remove(true).is_ok() {
            removed += 1;
        }
        assert_eq!(removed, 20);
        assert!(cursor.is_past_start() && cursor.is_past_end());
    }
    assert!(heap.is_empty());
}
