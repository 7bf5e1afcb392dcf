use std::cmp::Ordering;

use crate::natural_merge;

sort_impl!("natural_merge_stable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord + Clone,
{
    sort_by(v, T::cmp);
}

/// Sorts `v` through a linked list copy and writes the values back in order.
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let outcome = natural_merge::sort_by(v, |a, b| compare(a, b) == Ordering::Less);

    for (slot, value) in v.iter_mut().zip(outcome.sorted.iter()) {
        *slot = value.clone();
    }
}
