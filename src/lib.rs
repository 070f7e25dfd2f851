//! This crate exposes an ordered set stored in a plain Binary Search Tree
//! (BST), mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored elements. BSTs are typically defined
//! recursively: a tree is either empty or a root label with a left and a
//! right subtree. The most important invariants of a BST are:
//!
//! 1. For every subtree, all the labels in its left subtree are less than
//!    its root label.
//! 2. For every subtree, all the labels in its right subtree are greater
//!    than its root label.
//!
//! > Note that this rules out duplicate labels, which is exactly what a set
//! > needs.
//!
//! Searching for an element takes `O(height)`. This tree does no balancing so
//! inserting elements in sorted order gives a tree whose height is its size.
//!
//! ## Disassemble and assemble
//!
//! A [`tree::Tree`] can't be edited in place. The only way to change one is to
//! [`disassemble`][tree::Tree::disassemble] it into its root and two subtrees
//! (which leaves it empty), work on those owned pieces, and
//! [`assemble`][tree::Tree::assemble] them back. Every algorithm in
//! [`set::Set`] is written that way, so each step hands ownership of every
//! subtree along without copying or losing any of it.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod set;
pub mod tree;
mod util;
