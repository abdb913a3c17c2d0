//! Bubble Sort Implementation
//!
//! Repeated passes over the slice compare adjacent pairs and swap them when the
//! left element is strictly greater. After pass `i` the `i + 1` largest elements
//! sit in their final positions at the tail, so each pass scans one slot less.
//!
//! Complexity: O(n²) comparisons and swaps in the worst and average case. The
//! plain [`sort`] does not stop early, so sorted input still costs O(n²)
//! comparisons; [`sort_early_exit`] stops after a pass with no swaps.

use std::cmp::Ordering;

use log::debug;

use crate::error::SortError;
use crate::stats::SortStats;

/// Sort a slice in-place using bubble sort.
///
/// Returns the same slice so calls can be chained. Empty and single-element
/// slices are left untouched.
pub fn sort<T: Ord>(data: &mut [T]) -> &mut [T] {
    let n = data.len();
    if n <= 1 {
        return data;
    }

    // A final pass over 0..n would scan nothing, so n - 1 passes suffice
    for i in 0..n - 1 {
        // The last i elements are already in place
        for j in 0..n - i - 1 {
            if data[j] > data[j + 1] {
                data.swap(j, j + 1);
            }
        }
    }

    data
}

/// Bubble sort that stops as soon as a full pass performs no swap.
///
/// Sorted input costs a single pass of `n - 1` comparisons.
pub fn sort_early_exit<T: Ord>(data: &mut [T]) -> &mut [T] {
    let n = data.len();
    if n <= 1 {
        return data;
    }

    for i in 0..n - 1 {
        let mut swapped = false;
        for j in 0..n - i - 1 {
            if data[j] > data[j + 1] {
                data.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            debug!("bubble sort settled after {} of {} passes", i + 1, n - 1);
            break;
        }
    }

    data
}

/// Early-exit bubble sort that counts every comparison and swap.
///
/// Performs exactly the same operations as [`sort_early_exit`].
pub fn sort_early_exit_counted<T: Ord>(data: &mut [T]) -> SortStats {
    let mut stats = SortStats::default();
    let n = data.len();
    if n <= 1 {
        return stats;
    }

    for i in 0..n - 1 {
        let swaps_before = stats.swaps;
        for j in 0..n - i - 1 {
            if stats.compare(&data[j], &data[j + 1]) == Ordering::Greater {
                stats.swap(data, j, j + 1);
            }
        }
        if stats.swaps == swaps_before {
            break;
        }
    }

    stats
}

/// Bubble sort that counts every comparison and swap.
///
/// Performs exactly the same operations as [`sort`], so the comparison count
/// is always `n(n-1)/2`.
pub fn sort_counted<T: Ord>(data: &mut [T]) -> SortStats {
    let mut stats = SortStats::default();
    let n = data.len();
    if n <= 1 {
        return stats;
    }

    for i in 0..n - 1 {
        for j in 0..n - i - 1 {
            if stats.compare(&data[j], &data[j + 1]) == Ordering::Greater {
                stats.swap(data, j, j + 1);
            }
        }
    }

    stats
}

/// Bubble sort over partially ordered elements.
///
/// Fails on the first adjacent pair that has no ordering (a NaN, for example).
/// The slice may be partially sorted when that happens.
pub fn try_sort<T: PartialOrd>(data: &mut [T]) -> Result<&mut [T], SortError> {
    let n = data.len();
    if n <= 1 {
        return Ok(data);
    }

    for i in 0..n - 1 {
        for j in 0..n - i - 1 {
            match data[j].partial_cmp(&data[j + 1]) {
                Some(Ordering::Greater) => data.swap(j, j + 1),
                Some(_) => {}
                None => {
                    return Err(SortError::Incomparable {
                        left: j,
                        right: j + 1,
                    })
                }
            }
        }
    }

    Ok(data)
}
