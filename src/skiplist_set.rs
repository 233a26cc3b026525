//! Skip List Set implementation
//!
//! A skip list is a stack of sorted linked lists ("levels"). Level 0 holds
//! every element; each level above holds a subset of the one below, so a
//! search can skip ahead on the sparse upper levels before dropping down.
//!
//! Every node carries two links: to the next node on its own level and to the
//! node for the same element on the level below. Each level starts with a head
//! node acting as -INF; the end of a chain acts as +INF. Nodes are stored in a
//! [`SlotMap`] arena and linked by key.
//!
//! Whether a newly added element also occupies the next level up is decided
//! by a [`LevelTester`]. [`RandomLevelTester`] flips a fair coin;
//! [`ScriptedLevelTester`] replays fixed answers so tests are reproducible.
//! After every `add` the top level is empty.
//!
//! # Time Complexity
//!
//! | Operation  | Complexity        |
//! |------------|-------------------|
//! | `add`      | O(log n) expected |
//! | `contains` | O(log n) expected |
//! | `len`      | O(1)              |
//!
//! # Example
//!
//! ```rust
//! use rust_minheap_collections::Set;
//! use rust_minheap_collections::skiplist_set::{ScriptedLevelTester, SkipListSet};
//!
//! let mut set = SkipListSet::with_level_tester(ScriptedLevelTester::new([true, false]));
//! set.add(10);
//! assert_eq!(set.level_count(), 3);
//! assert!(set.is_element_on_level(&10, 1));
//! assert!(!set.is_element_on_level(&10, 2));
//! ```

use crate::traits::Set;
use log::trace;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use slotmap::{new_key_type, SlotMap};
use std::collections::VecDeque;

/// Upper bound on the number of levels, including the empty top level
pub const MAX_LEVELS: usize = 32;

/// Decides whether an element placed on one level also occupies the next
pub trait LevelTester {
    fn should_occupy_next_level(&mut self) -> bool;
}

/// Fair-coin level tester
#[derive(Debug, Clone)]
pub struct RandomLevelTester {
    rng: StdRng,
}

impl RandomLevelTester {
    /// A tester seeded from the operating system
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// A tester whose coin flips are reproducible
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomLevelTester {
    fn default() -> Self {
        Self::new()
    }
}

impl LevelTester for RandomLevelTester {
    fn should_occupy_next_level(&mut self) -> bool {
        self.rng.gen_bool(0.5)
    }
}

/// Replays a fixed sequence of answers, then answers `false`
#[derive(Debug, Clone, Default)]
pub struct ScriptedLevelTester {
    answers: VecDeque<bool>,
}

impl ScriptedLevelTester {
    pub fn new<I: IntoIterator<Item = bool>>(answers: I) -> Self {
        Self {
            answers: answers.into_iter().collect(),
        }
    }
}

impl LevelTester for ScriptedLevelTester {
    fn should_occupy_next_level(&mut self) -> bool {
        self.answers.pop_front().unwrap_or(false)
    }
}

new_key_type! {
    /// Arena key for skip list nodes
    struct NodeKey;
}

#[derive(Debug, Clone)]
struct Node<T> {
    /// `None` marks a level's head (-INF)
    element: Option<T>,
    /// `None` marks the end of the level (+INF)
    next: Option<NodeKey>,
    down: Option<NodeKey>,
}

/// A set backed by a skip list
///
/// # Type Parameters
/// - `T`: The element type; each occupied level stores its own copy
/// - `L`: The [`LevelTester`] deciding tower heights
#[derive(Debug, Clone)]
pub struct SkipListSet<T, L = RandomLevelTester> {
    nodes: SlotMap<NodeKey, Node<T>>,
    /// Head node of each level, bottom level first
    heads: Vec<NodeKey>,
    len: usize,
    level_tester: L,
}

impl<T: Ord + Clone> SkipListSet<T> {
    /// Creates an empty set using a randomly seeded [`RandomLevelTester`]
    pub fn new() -> Self {
        Self::with_level_tester(RandomLevelTester::new())
    }
}

impl<T: Ord + Clone, L: LevelTester> SkipListSet<T, L> {
    /// Creates an empty set whose tower heights come from `level_tester`
    pub fn with_level_tester(level_tester: L) -> Self {
        let mut nodes = SlotMap::with_key();
        let head = nodes.insert(Node {
            element: None,
            next: None,
            down: None,
        });
        Self {
            nodes,
            heads: vec![head],
            len: 0,
            level_tester,
        }
    }

    /// Number of levels, including the empty top level
    pub fn level_count(&self) -> usize {
        self.heads.len()
    }

    /// Number of elements on `level`; 0 if the level does not exist
    pub fn nodes_on_level(&self, level: usize) -> usize {
        self.level(level).count()
    }

    /// Returns true if `element` is on `level`; false if the level does not exist
    pub fn is_element_on_level(&self, element: &T, level: usize) -> bool {
        self.level(level)
            .take_while(|e| *e <= element)
            .any(|e| e == element)
    }

    /// Iterates over the elements in ascending order
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.level(0)
    }

    fn level(&self, level: usize) -> impl Iterator<Item = &T> + '_ {
        let mut current = self
            .heads
            .get(level)
            .and_then(|&head| self.nodes[head].next);
        std::iter::from_fn(move || {
            let node = &self.nodes[current?];
            current = node.next;
            node.element.as_ref()
        })
    }

    /// The last node before `element` on every level, bottom level first
    fn predecessors(&self, element: &T) -> Vec<NodeKey> {
        let mut preds = Vec::with_capacity(self.heads.len());
        let Some(&top) = self.heads.last() else {
            return preds;
        };

        let mut current = top;
        loop {
            while let Some(next) = self.nodes[current].next {
                match &self.nodes[next].element {
                    Some(e) if e < element => current = next,
                    _ => break,
                }
            }
            preds.push(current);
            match self.nodes[current].down {
                Some(down) => current = down,
                None => break,
            }
        }

        preds.reverse();
        preds
    }

    /// Flips coins for how many levels above 0 a new element occupies
    fn tower_height(&mut self) -> usize {
        let mut height = 0;
        while height + 2 < MAX_LEVELS && self.level_tester.should_occupy_next_level() {
            height += 1;
        }
        height
    }

    fn push_level(&mut self) {
        let below = self.heads.last().copied();
        let head = self.nodes.insert(Node {
            element: None,
            next: None,
            down: below,
        });
        self.heads.push(head);
        trace!("skip list: grew to {} levels", self.heads.len());
    }
}

impl<T: Ord + Clone, L: LevelTester> Set<T> for SkipListSet<T, L> {
    fn add(&mut self, element: T) {
        if self.contains(&element) {
            return;
        }

        let height = self.tower_height();
        // Keep an empty level above the tallest tower
        while self.heads.len() < height + 2 {
            self.push_level();
        }

        let preds = self.predecessors(&element);
        let mut element = Some(element);
        let mut below = None;
        for (level, &pred) in preds.iter().enumerate().take(height + 1) {
            let value = if level == height {
                element.take()
            } else {
                element.clone()
            };
            let node = self.nodes.insert(Node {
                element: value,
                next: self.nodes[pred].next,
                down: below,
            });
            self.nodes[pred].next = Some(node);
            below = Some(node);
        }

        self.len += 1;
    }

    fn contains(&self, element: &T) -> bool {
        self.predecessors(element)
            .first()
            .and_then(|&pred| self.nodes[pred].next)
            .and_then(|next| self.nodes[next].element.as_ref())
            .is_some_and(|e| e == element)
    }

    fn len(&self) -> usize {
        self.len
    }
}

impl<T: Ord + Clone, L: LevelTester + Default> Default for SkipListSet<T, L> {
    fn default() -> Self {
        Self::with_level_tester(L::default())
    }
}

impl<T: Ord + Clone, L: LevelTester> Extend<T> for SkipListSet<T, L> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.add(element);
        }
    }
}
