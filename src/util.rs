use crate::tree::Tree;

/// Whether `root` sits correctly between the roots of its would-be children.
/// This only looks one level down so it's cheap enough to check on every
/// assemble in debug builds.
pub(crate) fn is_locally_ordered<T: Ord>(root: &T, left: &Tree<T>, right: &Tree<T>) -> bool {
    left.root().map_or(true, |l| l < root) && right.root().map_or(true, |r| root < r)
}

/// Whether `tree` is a binary search tree with no duplicate labels and correct
/// cached sizes at every node.
#[cfg(test)]
pub(crate) fn is_bst<T: Ord>(tree: &Tree<T>) -> bool {
    fn within<T: Ord>(tree: &Tree<T>, lower: Option<&T>, upper: Option<&T>) -> bool {
        match tree.view() {
            None => tree.size() == 0,
            Some((root, left, right)) => {
                lower.map_or(true, |l| l < root)
                    && upper.map_or(true, |u| root < u)
                    && tree.size() == left.size() + right.size() + 1
                    && within(left, lower, Some(root))
                    && within(right, Some(root), upper)
            }
        }
    }

    within(tree, None, None)
}
