//! Standard Library Baselines
//!
//! Reference sorts the elementary algorithms are measured and verified against:
//! the standard library's unstable and stable sorts, and rayon's parallel
//! pdqsort for a multi-threaded baseline.

use rayon::prelude::*;

/// Sort a slice in-place using unstable sort (typically faster than stable sort).
///
/// Uses Rust's built-in pattern-defeating quicksort, which falls back to heap
/// sort to guarantee O(n log n) worst case.
#[inline]
pub fn sort_unstable<T: Ord>(data: &mut [T]) {
    data.sort_unstable();
}

/// Sort a slice in-place using the standard library's stable sort.
#[inline]
pub fn sort_stable<T: Ord>(data: &mut [T]) {
    data.sort();
}

/// Parallel unstable sort using rayon's parallel pdqsort.
///
/// Spreads the work across the global rayon pool.
pub fn parallel_sort<T: Ord + Send>(data: &mut [T]) {
    data.par_sort_unstable();
}

/// Check if a slice is sorted in ascending order.
#[inline]
pub fn is_sorted<T: PartialOrd>(data: &[T]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}

/// Check that `b` holds exactly the same multiset of elements as `a`.
pub fn is_permutation<T: Ord + Clone>(a: &[T], b: &[T]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut a = a.to_vec();
    let mut b = b.to_vec();
    a.sort_unstable();
    b.sort_unstable();
    a == b
}
