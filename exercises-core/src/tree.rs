//! Persistent binary search tree of strings
//!
//! Trees are never modified in place. [`BinarySearchTree::insert`] returns a
//! new tree that shares every untouched subtree with the original.

use alloc::rc::Rc;
use alloc::string::String;
use core::cmp::Ordering;
use core::fmt;

/// Immutable binary search tree keyed by string order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum BinarySearchTree {
    /// Tree with no values
    #[default]
    Empty,
    /// Value with left (smaller) and right (larger) subtrees
    Node(Rc<Node>),
}

/// Interior node of a [`BinarySearchTree`]
#[derive(Debug, PartialEq, Eq)]
pub struct Node {
    value: String,
    left: BinarySearchTree,
    right: BinarySearchTree,
}

impl Node {
    /// Value stored at this node
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Subtree of smaller values
    pub fn left(&self) -> &BinarySearchTree {
        &self.left
    }

    /// Subtree of larger values
    pub fn right(&self) -> &BinarySearchTree {
        &self.right
    }
}

impl BinarySearchTree {
    /// Create an empty tree
    pub const fn new() -> Self {
        BinarySearchTree::Empty
    }

    fn node(value: String, left: Self, right: Self) -> Self {
        BinarySearchTree::Node(Rc::new(Node { value, left, right }))
    }

    /// Check whether the tree holds no values
    pub fn is_empty(&self) -> bool {
        matches!(self, BinarySearchTree::Empty)
    }

    /// Number of values in the tree
    pub fn size(&self) -> usize {
        match self {
            BinarySearchTree::Empty => 0,
            BinarySearchTree::Node(node) => 1 + node.left.size() + node.right.size(),
        }
    }

    /// Check whether `value` is in the tree
    pub fn contains(&self, value: &str) -> bool {
        let mut current = self;
        while let BinarySearchTree::Node(node) = current {
            current = match value.cmp(node.value.as_str()) {
                Ordering::Equal => return true,
                Ordering::Less => &node.left,
                Ordering::Greater => &node.right,
            };
        }
        false
    }

    /// Return a tree that also holds `value`
    ///
    /// Inserting a value already present returns a tree equal to `self`.
    #[must_use]
    pub fn insert(&self, value: &str) -> Self {
        match self {
            BinarySearchTree::Empty => Self::node(value.into(), Self::Empty, Self::Empty),
            BinarySearchTree::Node(node) => match value.cmp(node.value.as_str()) {
                Ordering::Equal => self.clone(),
                Ordering::Less => Self::node(
                    node.value.clone(),
                    node.left.insert(value),
                    node.right.clone(),
                ),
                Ordering::Greater => Self::node(
                    node.value.clone(),
                    node.left.clone(),
                    node.right.insert(value),
                ),
            },
        }
    }

    /// Values in ascending order
    pub fn iter(&self) -> Iter<'_> {
        let mut iter = Iter { stack: alloc::vec::Vec::new() };
        iter.push_left(self);
        iter
    }
}

/// In-order iterator over a [`BinarySearchTree`]
pub struct Iter<'a> {
    stack: alloc::vec::Vec<&'a Node>,
}

impl<'a> Iter<'a> {
    fn push_left(&mut self, mut tree: &'a BinarySearchTree) {
        while let BinarySearchTree::Node(node) = tree {
            self.stack.push(node);
            tree = &node.left;
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let node = self.stack.pop()?;
        self.push_left(&node.right);
        Some(&node.value)
    }
}

impl<'a> IntoIterator for &'a BinarySearchTree {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl<S: AsRef<str>> FromIterator<S> for BinarySearchTree {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |tree, value| tree.insert(value.as_ref()))
    }
}

/// Empty trees render as `()`; nodes as `(left value right)` with empty
/// subtrees left out, e.g. `((A)B(C))`.
impl fmt::Display for BinarySearchTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BinarySearchTree::Empty => f.write_str("()"),
            BinarySearchTree::Node(node) => {
                f.write_str("(")?;
                if !node.left.is_empty() {
                    write!(f, "{}", node.left)?;
                }
                f.write_str(&node.value)?;
                if !node.right.is_empty() {
                    write!(f, "{}", node.right)?;
                }
                f.write_str(")")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let tree = BinarySearchTree::new();
        assert!(tree.is_empty());
        assert_eq!(tree.size(), 0);
        assert!(!tree.contains("A"));
        assert_eq!(tree.to_string(), "()");
    }

    #[test]
    fn test_insert_and_contains() {
        let tree = BinarySearchTree::new()
            .insert("Pecan")
            .insert("Alder")
            .insert("Juniper")
            .insert("Tupelo");
        assert_eq!(tree.size(), 4);
        for value in ["Pecan", "Alder", "Juniper", "Tupelo"] {
            assert!(tree.contains(value));
        }
        assert!(!tree.contains("Maple"));
        assert_eq!(tree.to_string(), "((Alder(Juniper))Pecan(Tupelo))");
    }

    #[test]
    fn test_display_balanced() {
        let tree: BinarySearchTree = ["B", "A", "C"].into_iter().collect();
        assert_eq!(tree.to_string(), "((A)B(C))");
        assert_eq!(BinarySearchTree::new().insert("A").to_string(), "(A)");
    }

    #[test]
    fn test_duplicates_ignored() {
        let tree = BinarySearchTree::new().insert("A").insert("B");
        let again = tree.insert("A").insert("B");
        assert_eq!(again.size(), 2);
        assert_eq!(again, tree);
    }

    #[test]
    fn test_insert_does_not_change_original() {
        let original = BinarySearchTree::new().insert("M");
        let grown = original.insert("A").insert("Z");
        assert_eq!(original.size(), 1);
        assert_eq!(original.to_string(), "(M)");
        assert_eq!(grown.size(), 3);
    }

    #[test]
    fn test_untouched_subtree_is_shared() {
        let tree: BinarySearchTree = ["M", "C", "T"].into_iter().collect();
        let grown = tree.insert("A");
        match (&tree, &grown) {
            (BinarySearchTree::Node(before), BinarySearchTree::Node(after)) => {
                match (before.right(), after.right()) {
                    (BinarySearchTree::Node(r1), BinarySearchTree::Node(r2)) => {
                        assert!(Rc::ptr_eq(r1, r2));
                    }
                    _ => panic!("right subtree missing"),
                }
                assert_ne!(before.left(), after.left());
            }
            _ => panic!("tree should not be empty"),
        }
    }

    #[test]
    fn test_iteration_sorted_regardless_of_insert_order() {
        let words = ["kiwi", "apple", "mango", "banana", "cherry", "apple"];
        let tree: BinarySearchTree = words.into_iter().collect();
        let sorted: Vec<&str> = tree.iter().collect();
        assert_eq!(sorted, vec!["apple", "banana", "cherry", "kiwi", "mango"]);

        let reversed: BinarySearchTree = words.into_iter().rev().collect();
        assert!(words.iter().all(|w| reversed.contains(w)));
        assert_eq!(reversed.size(), tree.size());
    }
}
