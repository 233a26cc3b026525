//! AVL tree set
//!
//! A self-balancing binary search tree. After every insertion each node on the
//! insertion path is rebalanced with single or double rotations so that the
//! heights of its two subtrees differ by at most one.
//!
//! Nodes live in a [`SlotMap`] arena and refer to their children by key, so
//! the tree has no owning pointers and cloning the set clones the arena.
//!
//! # Time Complexity
//!
//! | Operation  | Complexity |
//! |------------|------------|
//! | `add`      | O(log n)   |
//! | `contains` | O(log n)   |
//! | `len`      | O(1)       |
//! | `height`   | O(1)       |
//! | traversals | O(n)       |
//!
//! # Example
//!
//! ```rust
//! use rust_minheap_collections::Set;
//! use rust_minheap_collections::avl_set::AvlSet;
//!
//! let mut set = AvlSet::new();
//! for i in 1..=7 {
//!     set.add(i);
//! }
//! assert_eq!(set.height(), 2);
//!
//! let mut sorted = Vec::new();
//! set.inorder(|e| sorted.push(*e));
//! assert_eq!(sorted, vec![1, 2, 3, 4, 5, 6, 7]);
//! ```

use crate::traits::Set;
use log::trace;
use slotmap::{new_key_type, SlotMap};
use std::cmp::Ordering;

new_key_type! {
    /// Arena key for AVL nodes
    struct NodeKey;
}

#[derive(Debug, Clone)]
struct Node<T> {
    element: T,
    /// Height of the subtree rooted here; a leaf has height 0
    height: i32,
    left: Option<NodeKey>,
    right: Option<NodeKey>,
}

#[derive(Debug, Clone, Copy)]
enum Order {
    Pre,
    In,
    Post,
}

/// A set backed by an AVL tree
#[derive(Debug, Clone)]
pub struct AvlSet<T> {
    nodes: SlotMap<NodeKey, Node<T>>,
    root: Option<NodeKey>,
}

impl<T: Ord> AvlSet<T> {
    /// Creates a new empty set
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            root: None,
        }
    }

    /// Height of the tree; -1 when empty, 0 for a single node
    pub fn height(&self) -> i32 {
        self.height_of(self.root)
    }

    /// Visits every element in preorder (node, left, right)
    pub fn preorder<F: FnMut(&T)>(&self, mut visit: F) {
        self.walk(self.root, Order::Pre, &mut visit);
    }

    /// Visits every element in ascending order
    pub fn inorder<F: FnMut(&T)>(&self, mut visit: F) {
        self.walk(self.root, Order::In, &mut visit);
    }

    /// Visits every element in postorder (left, right, node)
    pub fn postorder<F: FnMut(&T)>(&self, mut visit: F) {
        self.walk(self.root, Order::Post, &mut visit);
    }

    fn walk<F: FnMut(&T)>(&self, node: Option<NodeKey>, order: Order, visit: &mut F) {
        let Some(key) = node else { return };
        let node = &self.nodes[key];
        if let Order::Pre = order {
            visit(&node.element);
        }
        self.walk(node.left, order, visit);
        if let Order::In = order {
            visit(&node.element);
        }
        self.walk(node.right, order, visit);
        if let Order::Post = order {
            visit(&node.element);
        }
    }

    /// Inserts below `node`, returning the new subtree root and whether
    /// anything was added
    fn insert_at(&mut self, node: Option<NodeKey>, element: T) -> (NodeKey, bool) {
        let Some(key) = node else {
            let leaf = self.nodes.insert(Node {
                element,
                height: 0,
                left: None,
                right: None,
            });
            return (leaf, true);
        };

        match element.cmp(&self.nodes[key].element) {
            Ordering::Less => {
                let (child, added) = self.insert_at(self.nodes[key].left, element);
                self.nodes[key].left = Some(child);
                if !added {
                    return (key, false);
                }
            }
            Ordering::Greater => {
                let (child, added) = self.insert_at(self.nodes[key].right, element);
                self.nodes[key].right = Some(child);
                if !added {
                    return (key, false);
                }
            }
            Ordering::Equal => return (key, false),
        }

        (self.rebalance(key), true)
    }

    fn height_of(&self, node: Option<NodeKey>) -> i32 {
        node.map_or(-1, |key| self.nodes[key].height)
    }

    fn update_height(&mut self, key: NodeKey) {
        let node = &self.nodes[key];
        let height = 1 + self.height_of(node.left).max(self.height_of(node.right));
        self.nodes[key].height = height;
    }

    fn balance_factor(&self, key: NodeKey) -> i32 {
        let node = &self.nodes[key];
        self.height_of(node.left) - self.height_of(node.right)
    }

    fn rotate_right(&mut self, key: NodeKey) -> NodeKey {
        let Some(pivot) = self.nodes[key].left else {
            return key;
        };
        self.nodes[key].left = self.nodes[pivot].right;
        self.nodes[pivot].right = Some(key);
        self.update_height(key);
        self.update_height(pivot);
        pivot
    }

    fn rotate_left(&mut self, key: NodeKey) -> NodeKey {
        let Some(pivot) = self.nodes[key].right else {
            return key;
        };
        self.nodes[key].right = self.nodes[pivot].left;
        self.nodes[pivot].left = Some(key);
        self.update_height(key);
        self.update_height(pivot);
        pivot
    }

    /// Restores the AVL invariant at `key`, returning the subtree's new root
    fn rebalance(&mut self, key: NodeKey) -> NodeKey {
        self.update_height(key);
        let balance = self.balance_factor(key);

        if balance > 1 {
            if let Some(left) = self.nodes[key].left {
                if self.balance_factor(left) < 0 {
                    trace!("avl: left-right rotation");
                    let new_left = self.rotate_left(left);
                    self.nodes[key].left = Some(new_left);
                }
            }
            trace!("avl: right rotation");
            return self.rotate_right(key);
        }

        if balance < -1 {
            if let Some(right) = self.nodes[key].right {
                if self.balance_factor(right) > 0 {
                    trace!("avl: right-left rotation");
                    let new_right = self.rotate_right(right);
                    self.nodes[key].right = Some(new_right);
                }
            }
            trace!("avl: left rotation");
            return self.rotate_left(key);
        }

        key
    }
}

impl<T: Ord> Set<T> for AvlSet<T> {
    fn add(&mut self, element: T) {
        let (root, _) = self.insert_at(self.root, element);
        self.root = Some(root);
    }

    fn contains(&self, element: &T) -> bool {
        let mut current = self.root;
        while let Some(key) = current {
            let node = &self.nodes[key];
            current = match element.cmp(&node.element) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return true,
            };
        }
        false
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }
}

impl<T: Ord> Default for AvlSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> Extend<T> for AvlSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.add(element);
        }
    }
}

impl<T: Ord> FromIterator<T> for AvlSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}
