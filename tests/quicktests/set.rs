use bst_set::set::Set;
use quickcheck_macros::quickcheck;

use std::collections::{BTreeSet, HashSet};

use crate::Op;

/// Applies a set of operations to a `Set` and a `BTreeSet`.
/// This way we can ensure that after a random smattering of adds
/// and removes we have the same elements in both.
fn do_ops<T>(ops: &[Op<T>], set: &mut Set<T>, oracle: &mut BTreeSet<T>)
where
    T: Ord + Clone + std::fmt::Debug,
{
    for op in ops {
        match op {
            Op::Add(x) => {
                if !set.contains(x) {
                    set.add(x.clone());
                }
                oracle.insert(x.clone());
            }
            Op::Remove(x) => {
                if set.contains(x) {
                    assert_eq!(&set.remove(x), x);
                }
                oracle.remove(x);
            }
            Op::RemoveAny => {
                if !set.is_empty() {
                    let removed = set.remove_any();
                    assert!(oracle.remove(&removed));
                }
            }
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut set = Set::new();
    let mut oracle = BTreeSet::new();

    do_ops(&ops, &mut set, &mut oracle);
    set.len() == oracle.len() && set.iter().eq(oracle.iter())
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let set: Set<_> = xs.iter().copied().collect();

    xs.iter().all(|x| set.contains(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let set: Set<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !set.contains(x))
}

#[quickcheck]
fn add_grows_by_one(xs: Vec<i8>, x: i8) -> bool {
    let mut set: Set<_> = xs.iter().copied().collect();
    if set.contains(&x) {
        return true;
    }
    let before = set.len();

    set.add(x);

    set.len() == before + 1 && set.contains(&x) && xs.iter().all(|y| set.contains(y))
}

#[quickcheck]
fn with_removals(xs: Vec<i8>, removes: Vec<i8>) -> bool {
    let mut set: Set<_> = xs.iter().copied().collect();
    for remove in &removes {
        if set.contains(remove) {
            let before = set.len();
            if set.remove(remove) != *remove || set.len() != before - 1 {
                return false;
            }
        }
    }

    let still_present: HashSet<_> = xs.iter().filter(|x| !removes.contains(*x)).collect();

    removes.iter().all(|x| !set.contains(x)) && still_present.iter().all(|x| set.contains(*x))
}

#[quickcheck]
fn remove_everything_in_any_order(xs: Vec<String>, order: Vec<usize>) -> bool {
    let mut set: Set<_> = xs.iter().cloned().collect();
    let mut remaining: Vec<_> = set.iter().cloned().collect();

    // Use `order` to pick which remaining element goes next.
    let mut picks = order.into_iter();
    while !remaining.is_empty() {
        let i = picks.next().unwrap_or(0) % remaining.len();
        let x = remaining.swap_remove(i);
        if set.remove(&x) != x {
            return false;
        }
    }

    set.is_empty() && set.iter().next().is_none()
}

#[quickcheck]
fn remove_any_drains_ascending(xs: Vec<i8>) -> bool {
    let mut set: Set<_> = xs.iter().copied().collect();
    let mut drained = Vec::new();
    while !set.is_empty() {
        drained.push(set.remove_any());
    }

    let expected: Vec<_> = xs.into_iter().collect::<BTreeSet<_>>().into_iter().collect();
    drained == expected
}

#[quickcheck]
fn reads_are_idempotent(xs: Vec<i8>, probe: i8) -> bool {
    let set: Set<_> = xs.iter().copied().collect();
    let before: Vec<_> = set.iter().copied().collect();

    let first = (set.contains(&probe), set.len());
    let second = (set.contains(&probe), set.len());

    first == second && set.iter().copied().collect::<Vec<_>>() == before
}

#[test]
fn degenerate_chain() {
    // Sorted input builds a chain as tall as the set is big.
    let mut set = Set::new();
    for x in 0..1_000 {
        set.add(x);
    }

    assert_eq!(set.len(), 1_000);
    assert!(set.contains(&999));
    assert_eq!(set.remove(&500), 500);
    assert_eq!(set.first(), Some(&0));
    assert!(set.iter().copied().eq((0..1_000).filter(|x| *x != 500)));
}
