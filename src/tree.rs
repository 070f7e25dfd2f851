//! A plain binary tree of labels. This is the container a [`Set`][crate::set::Set]
//! stores its elements in. It knows nothing about ordering: it can only be taken
//! apart into a root and two subtrees and put back together again.
//!
//! # Examples
//!
//! ```
//! use bst_set::tree::Tree;
//!
//! let mut tree = Tree::new();
//! tree.assemble(2, Tree::leaf(1), Tree::leaf(3));
//! assert_eq!(tree.size(), 3);
//!
//! // Taking the tree apart leaves it empty.
//! let (root, left, right) = tree.disassemble();
//! assert!(tree.is_empty());
//! assert_eq!(root, 2);
//! assert_eq!((left.size(), right.size()), (1, 1));
//!
//! // And putting it back restores it.
//! tree.assemble(root, left, right);
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
//! ```

use std::fmt;
use std::iter::FusedIterator;
use std::mem;

/// A binary tree. It is either empty or a [`Node`] holding a label and two
/// child `Tree`s.
#[derive(Clone)]
pub enum Tree<T> {
    /// A marker for the empty pointer at the bottom of a subtree.
    Empty,
    /// A `Node` that has a label and two children (which are both `Tree`s).
    Node(Box<Node<T>>),
}

/// A `Node` has a label and always has two children although those children may
/// be [`Empty`][Tree::Empty].
#[derive(Clone)]
pub struct Node<T> {
    label: T,
    left: Tree<T>,
    right: Tree<T>,

    /// How many labels are in the subtree rooted at this node.
    /// A node with no children has a size of 1.
    size: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self::Empty
    }

    /// Generates a tree with a single label and two empty children.
    pub fn leaf(label: T) -> Self {
        let mut tree = Self::new();
        tree.assemble(label, Self::new(), Self::new());
        tree
    }

    /// The number of labels in this tree.
    pub fn size(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Node(n) => n.size,
        }
    }

    /// Whether this tree has no labels.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Gets the height of this tree. An empty tree has a height of 0.
    ///
    /// This walks the whole tree.
    pub fn height(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Node(n) => n.left.height().max(n.right.height()) + 1,
        }
    }

    /// The label at the root of this tree, if there is one.
    pub fn root(&self) -> Option<&T> {
        self.view().map(|(root, _, _)| root)
    }

    /// Borrows the root label and both subtrees without taking the tree apart.
    /// Returns `None` for an empty tree.
    ///
    /// This is the read-only counterpart of [`disassemble`][Tree::disassemble]:
    /// nothing needs to be reassembled afterwards because nothing was moved.
    pub fn view(&self) -> Option<(&T, &Self, &Self)> {
        match self {
            Self::Empty => None,
            Self::Node(n) => Some((&n.label, &n.left, &n.right)),
        }
    }

    /// Splits this tree into its root label and its left and right subtrees,
    /// leaving `self` empty.
    ///
    /// # Panics
    ///
    /// When called on an empty tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::tree::Tree;
    ///
    /// let mut tree = Tree::leaf("root");
    /// let (root, left, right) = tree.disassemble();
    ///
    /// assert_eq!(root, "root");
    /// assert!(left.is_empty() && right.is_empty());
    /// assert!(tree.is_empty());
    /// ```
    pub fn disassemble(&mut self) -> (T, Self, Self) {
        match mem::take(self) {
            Self::Empty => panic!("Cannot disassemble an empty tree."),
            Self::Node(n) => {
                let Node {
                    label, left, right, ..
                } = *n;
                (label, left, right)
            }
        }
    }

    /// Builds a tree with `root` as its label and `left` and `right` as its
    /// children into `self`.
    ///
    /// # Panics
    ///
    /// When `self` is not empty. Assembling over existing labels would drop
    /// them.
    pub fn assemble(&mut self, root: T, left: Self, right: Self) {
        assert!(self.is_empty(), "Cannot assemble into a non-empty tree.");

        let size = left.size() + right.size() + 1;
        *self = Self::Node(Box::new(Node {
            label: root,
            left,
            right,
            size,
        }));
    }

    /// Replaces the content of `self` with the content of `source`, leaving
    /// `source` empty. Whatever `self` held before is dropped.
    pub fn transfer_from(&mut self, source: &mut Self) {
        *self = mem::take(source);
    }

    /// Iterates over the labels of this tree in order: the left subtree, then
    /// the root, then the right subtree.
    pub fn iter(&self) -> Iter<'_, T> {
        let mut iter = Iter {
            stack: Vec::new(),
            remaining: self.size(),
        };
        iter.push_left_spine(self);
        iter
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("Empty"),
            Self::Node(n) => f
                .debug_struct("Node")
                .field("label", &n.label)
                .field("size", &n.size)
                .field("left", &n.left)
                .field("right", &n.right)
                .finish(),
        }
    }
}

/// An in-order iterator over the labels of a [`Tree`]. Created by
/// [`Tree::iter`].
///
/// It keeps the path of nodes whose labels have not been visited yet, so it
/// needs `O(height)` extra space.
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    fn push_left_spine(&mut self, mut tree: &'a Tree<T>) {
        while let Tree::Node(n) = tree {
            self.stack.push(n);
            tree = &n.left;
        }
    }
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(&node.right);
        self.remaining -= 1;
        Some(&node.label)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// A consuming in-order iterator over the labels of a [`Tree`].
///
/// Each step disassembles the next subtree on the stack, so the tree is torn
/// down as it is read.
pub struct IntoIter<T> {
    /// Labels waiting to be yielded, each with the right subtree that comes
    /// after it.
    stack: Vec<(T, Tree<T>)>,
    remaining: usize,
}

impl<T> IntoIter<T> {
    fn push_left_spine(&mut self, mut tree: Tree<T>) {
        while !tree.is_empty() {
            let (root, left, right) = tree.disassemble();
            self.stack.push((root, right));
            tree = left;
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let (label, right) = self.stack.pop()?;
        self.push_left_spine(right);
        self.remaining -= 1;
        Some(label)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for Tree<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let mut iter = IntoIter {
            stack: Vec::new(),
            remaining: self.size(),
        };
        iter.push_left_spine(self);
        iter
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
