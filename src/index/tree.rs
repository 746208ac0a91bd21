//! Unbalanced binary search tree of account numbers.
//!
//! Keys are assigned monotonically so the tree is in practice a right leaning chain. Every walk
//! is iterative to keep deep chains off the call stack.

use crate::AccountNumber;

type Link = Option<Box<Node>>;

#[derive(Debug)]
struct Node {
    key: AccountNumber,
    left: Link,
    right: Link,
}

impl Node {
    fn leaf(key: AccountNumber) -> Box<Self> {
        Box::new(Self {
            key,
            left: None,
            right: None,
        })
    }
}

/// Ordered set of account numbers
#[derive(Debug, Default)]
pub struct AccountTree {
    root: Link,
    len: usize,
}

impl AccountTree {
    /// Returns `false` and leaves tree untouched when `key` is already present
    pub fn insert(&mut self, key: AccountNumber) -> bool {
        let link = find_link(&mut self.root, key);
        if link.is_some() {
            return false;
        }
        *link = Some(Node::leaf(key));
        self.len += 1;
        true
    }

    /// Remove `key`. A node with two children takes over its in-order successor.
    pub fn remove(&mut self, key: AccountNumber) -> bool {
        let link = find_link(&mut self.root, key);
        let Some(mut node) = link.take() else {
            return false;
        };

        *link = match (node.left.take(), node.right.take()) {
            (None, None) => None,
            (Some(child), None) | (None, Some(child)) => Some(child),
            (Some(left), Some(right)) => {
                let (successor, rest) = split_min(right);
                node.key = successor;
                node.left = Some(left);
                node.right = rest;
                Some(node)
            }
        };
        self.len -= 1;
        true
    }

    pub fn contains(&self, key: AccountNumber) -> bool {
        let mut cur = &self.root;
        while let Some(node) = cur {
            if key == node.key {
                return true;
            }
            cur = if key < node.key {
                &node.left
            } else {
                &node.right
            };
        }
        false
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Lazy in-order walk, ascending keys. Call again to restart.
    pub fn iter(&self) -> Iter<'_> {
        let mut iter = Iter { stack: Vec::new() };
        iter.push_left_spine(&self.root);
        iter
    }
}

// default drop recurses once per level
impl Drop for AccountTree {
    fn drop(&mut self) {
        let mut pending: Vec<Box<Node>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

/// Link holding `key`, or the empty link where `key` would be inserted
fn find_link(mut cur: &mut Link, key: AccountNumber) -> &mut Link {
    // test through a shared borrow, reborrow mutably only when descending
    while cur.as_ref().is_some_and(|node| node.key != key) {
        if let Some(node) = cur {
            cur = if key < node.key {
                &mut node.left
            } else {
                &mut node.right
            };
        }
    }
    cur
}

/// Detach the smallest node below `cur`, splicing its right child into its place
fn detach_min(mut cur: &mut Link) -> Option<AccountNumber> {
    while cur.as_ref().is_some_and(|node| node.left.is_some()) {
        if let Some(node) = cur {
            cur = &mut node.left;
        }
    }
    let node = cur.take()?;
    let Node { key, right, .. } = *node;
    *cur = right;
    Some(key)
}

/// Smallest key of subtree and what is left of the subtree without it
fn split_min(mut root: Box<Node>) -> (AccountNumber, Link) {
    match detach_min(&mut root.left) {
        Some(key) => (key, Some(root)),
        None => (root.key, root.right.take()),
    }
}

/// In-order iterator over [`AccountTree`]
pub struct Iter<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iter<'a> {
    fn push_left_spine(&mut self, mut cur: &'a Link) {
        while let Some(node) = cur {
            self.stack.push(node);
            cur = &node.left;
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = AccountNumber;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(&node.right);
        Some(node.key)
    }
}
