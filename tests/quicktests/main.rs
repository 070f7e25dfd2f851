use quickcheck::{Arbitrary, Gen};

mod set;

/// An enum for the various kinds of "things" to do to
/// a set in a quicktest.
#[derive(Clone, Debug)]
pub(crate) enum Op<T> {
    /// Add the T to the set
    Add(T),
    /// Remove the T from the set
    Remove(T),
    /// Remove whatever the set picks
    RemoveAny,
}

impl<T> Arbitrary for Op<T>
where
    T: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 0, 1, 2]).unwrap() {
            0 => Op::Add(T::arbitrary(g)),
            1 => Op::Remove(T::arbitrary(g)),
            2 => Op::RemoveAny,
            _ => unreachable!(),
        }
    }
}
