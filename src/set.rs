//! An ordered set stored in a binary search tree. Every algorithm here is
//! written in terms of taking a [`Tree`] apart with
//! [`disassemble`][Tree::disassemble], working on the pieces, and putting it
//! back together with [`assemble`][Tree::assemble]. The tree is never
//! rebalanced so inserting sorted elements builds a chain.
//!
//! # Examples
//!
//! ```
//! use bst_set::set::Set;
//!
//! let mut set = Set::new();
//!
//! // Nothing in here yet.
//! assert!(!set.contains("hello"));
//!
//! set.add("hello".to_string());
//! set.add("there".to_string());
//! assert!(set.contains("hello"));
//! assert_eq!(set.len(), 2);
//!
//! // Removing an element returns the stored instance.
//! let removed = set.remove("there");
//! assert_eq!(removed, "there");
//! assert!(!set.contains("there"));
//!
//! // Elements come out smallest first.
//! assert_eq!(set.remove_any(), "hello");
//! assert!(set.is_empty());
//! ```

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;

use crate::tree::{IntoIter, Iter, Tree};
use crate::util;

/// A set of unique elements kept in a binary search tree.
///
/// Every label in a node's left subtree is less than the node's label and every
/// label in its right subtree is greater. That holds before and after every
/// public method.
///
/// The methods that have a precondition ([`add`][Set::add],
/// [`remove`][Set::remove] and [`remove_any`][Set::remove_any]) panic when it
/// is violated. [`insert`][Set::insert], [`take`][Set::take] and
/// [`pop_first`][Set::pop_first] are the checked versions.
#[derive(Clone)]
pub struct Set<T> {
    tree: Tree<T>,
}

impl<T> Default for Set<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Set<T> {
    /// Generates a new, empty `Set`.
    pub fn new() -> Self {
        Self { tree: Tree::new() }
    }

    /// The number of elements in the set. The tree caches subtree sizes so
    /// this is `O(1)`.
    pub fn len(&self) -> usize {
        self.tree.size()
    }

    /// Whether the set has no elements.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Removes every element, replacing the tree with a fresh empty one.
    pub fn clear(&mut self) {
        self.tree = Tree::new();
    }

    /// The smallest element, without removing it.
    pub fn first(&self) -> Option<&T> {
        let mut smallest = None;
        let mut tree = &self.tree;
        while let Some((root, left, _)) = tree.view() {
            smallest = Some(root);
            tree = left;
        }
        smallest
    }

    /// Removes and returns some element of the set. This is always the
    /// smallest one so repeated calls drain the set in ascending order.
    ///
    /// # Panics
    ///
    /// When the set is empty.
    pub fn remove_any(&mut self) -> T {
        assert!(!self.is_empty(), "Cannot remove an element from an empty set.");
        remove_smallest(&mut self.tree)
    }

    /// Removes and returns the smallest element, or `None` if the set is
    /// empty.
    pub fn pop_first(&mut self) -> Option<T> {
        if self.is_empty() {
            None
        } else {
            Some(remove_smallest(&mut self.tree))
        }
    }

    /// Moves every element of `source` into `self`, leaving `source` empty.
    /// Whatever `self` held before is dropped. No elements are copied.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::set::Set;
    ///
    /// let mut source: Set<_> = vec![1, 2, 3].into_iter().collect();
    /// let mut target: Set<_> = vec![42].into_iter().collect();
    ///
    /// target.transfer_from(&mut source);
    ///
    /// assert!(source.is_empty());
    /// assert_eq!(target.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    /// ```
    pub fn transfer_from(&mut self, source: &mut Self) {
        self.tree.transfer_from(&mut source.tree);
    }

    /// Iterates over the elements in ascending order. Each call starts a new
    /// traversal.
    pub fn iter(&self) -> Iter<'_, T> {
        self.tree.iter()
    }
}

impl<T> Set<T>
where
    T: Ord,
{
    /// Adds `x` to the set.
    ///
    /// # Panics
    ///
    /// When an element equal to `x` is already in the set. The set is left
    /// unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::set::Set;
    ///
    /// let mut set = Set::new();
    /// set.add(2);
    /// set.add(1);
    ///
    /// assert!(set.contains(&1));
    /// assert_eq!(set.len(), 2);
    /// ```
    pub fn add(&mut self, x: T) {
        if insert_in_tree(&mut self.tree, x).is_err() {
            panic!("Cannot add an element that is already in the set.");
        }
    }

    /// Adds `x` to the set if no equal element is there yet. Returns whether
    /// `x` was added.
    pub fn insert(&mut self, x: T) -> bool {
        insert_in_tree(&mut self.tree, x).is_ok()
    }

    /// Whether an element equal to `x` is in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::set::Set;
    ///
    /// let mut set = Set::new();
    /// set.add("hello".to_string());
    ///
    /// assert!(set.contains("hello"));
    /// assert!(!set.contains("general"));
    /// ```
    pub fn contains<Q>(&self, x: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        find_in_tree(&self.tree, x).is_some()
    }

    /// The stored element equal to `x`, if there is one.
    pub fn get<Q>(&self, x: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        find_in_tree(&self.tree, x)
    }

    /// Removes the element equal to `x` and returns it. The returned value is
    /// the one that was stored, not `x`.
    ///
    /// # Panics
    ///
    /// When no element equal to `x` is in the set. The set is left unchanged.
    pub fn remove<Q>(&mut self, x: &Q) -> T
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        match remove_from_tree(&mut self.tree, x) {
            Some(removed) => removed,
            None => panic!("Cannot remove an element that is not in the set."),
        }
    }

    /// Removes the element equal to `x` and returns it, or `None` if there is
    /// no such element.
    pub fn take<Q>(&mut self, x: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        remove_from_tree(&mut self.tree, x)
    }
}

/// Finds the label equal to `x` in `t`.
///
/// A shared borrow can't change the tree so we decompose it with `view`
/// instead of `disassemble`. There's nothing to put back together afterwards.
fn find_in_tree<'a, T, Q>(t: &'a Tree<T>, x: &Q) -> Option<&'a T>
where
    T: Borrow<Q>,
    Q: Ord + ?Sized,
{
    let (root, left, right) = t.view()?;
    match x.cmp(root.borrow()) {
        Ordering::Less => find_in_tree(left, x),
        Ordering::Equal => Some(root),
        Ordering::Greater => find_in_tree(right, x),
    }
}

/// Inserts `x` into `t` as a new leaf. If `t` already has an equal label it is
/// left as it was and `x` is handed back.
fn insert_in_tree<T: Ord>(t: &mut Tree<T>, x: T) -> Result<(), T> {
    if t.is_empty() {
        t.assemble(x, Tree::new(), Tree::new());
        return Ok(());
    }

    let (root, mut left, mut right) = t.disassemble();
    let result = match x.cmp(&root) {
        Ordering::Less => insert_in_tree(&mut left, x),
        Ordering::Equal => Err(x),
        Ordering::Greater => insert_in_tree(&mut right, x),
    };

    if cfg!(debug_assertions) {
        assert!(util::is_locally_ordered(&root, &left, &right));
    }
    t.assemble(root, left, right);
    result
}

/// Removes and returns the smallest (left-most) label of `t`.
///
/// # Panics
///
/// When `t` is empty.
fn remove_smallest<T>(t: &mut Tree<T>) -> T {
    let (root, mut left, mut right) = t.disassemble();
    if left.is_empty() {
        // `root` is the smallest. Whatever was to its right takes its place.
        t.transfer_from(&mut right);
        root
    } else {
        let smallest = remove_smallest(&mut left);
        t.assemble(root, left, right);
        smallest
    }
}

/// Removes and returns the label equal to `x` from `t`. If there is no such
/// label `t` is left as it was.
fn remove_from_tree<T, Q>(t: &mut Tree<T>, x: &Q) -> Option<T>
where
    T: Borrow<Q> + Ord,
    Q: Ord + ?Sized,
{
    if t.is_empty() {
        return None;
    }

    let (root, mut left, mut right) = t.disassemble();
    match x.cmp(root.borrow()) {
        Ordering::Equal if right.is_empty() => {
            t.transfer_from(&mut left);
            Some(root)
        }
        Ordering::Equal => {
            // Promote the successor: the smallest label of the right subtree.
            let successor = remove_smallest(&mut right);
            if cfg!(debug_assertions) {
                assert!(util::is_locally_ordered(&successor, &left, &right));
            }
            t.assemble(successor, left, right);
            Some(root)
        }
        Ordering::Less => {
            let removed = remove_from_tree(&mut left, x);
            t.assemble(root, left, right);
            removed
        }
        Ordering::Greater => {
            let removed = remove_from_tree(&mut right, x);
            t.assemble(root, left, right);
            removed
        }
    }
}

/// Two sets are equal when they hold the same elements. Both iterate in
/// ascending order so this is a pairwise comparison.
impl<T: PartialEq> PartialEq for Set<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Set<T> {}

impl<T: Hash> Hash for Set<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for element in self {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Set<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Formats as `{a, b, c}` in ascending order.
impl<T: fmt::Display> fmt::Display for Set<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, element) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", element)?;
        }
        f.write_str("}")
    }
}

/// Elements equal to one already collected are dropped.
impl<T: Ord> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

/// Elements equal to one already in the set are dropped.
impl<T: Ord> Extend<T> for Set<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for x in iter {
            self.insert(x);
        }
    }
}

impl<T> IntoIterator for Set<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.tree.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Set<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Set<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct SetVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for SetVisitor<T>
where
    T: serde::Deserialize<'de> + Ord,
{
    type Value = Set<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence of distinct elements")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        use serde::de::Error;

        let mut set = Set::new();
        while let Some(element) = seq.next_element()? {
            if !set.insert(element) {
                return Err(A::Error::custom("duplicate element in set"));
            }
        }
        Ok(set)
    }
}

/// Duplicates in the input are rejected since they can't come from a
/// serialized `Set`.
#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Set<T>
where
    T: serde::Deserialize<'de> + Ord,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(SetVisitor {
            marker: std::marker::PhantomData,
        })
    }
}
