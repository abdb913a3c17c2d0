//! Insertion Sort Implementation
//!
//! Grows a sorted prefix one element at a time, shifting larger elements right
//! until the new element fits. Stable, and linear on already-sorted input.
//!
//! Complexity: O(n²) comparisons and shifts worst case, O(n) best case.

use std::cmp::Ordering;

use crate::error::SortError;
use crate::stats::SortStats;

/// Sort a slice in-place using insertion sort.
pub fn sort<T: Ord>(data: &mut [T]) -> &mut [T] {
    for i in 1..data.len() {
        let mut j = i;
        while j > 0 && data[j - 1] > data[j] {
            data.swap(j - 1, j);
            j -= 1;
        }
    }
    data
}

/// Insertion sort that counts comparisons and shifts.
pub fn sort_counted<T: Ord>(data: &mut [T]) -> SortStats {
    let mut stats = SortStats::default();
    for i in 1..data.len() {
        let mut j = i;
        while j > 0 && stats.compare(&data[j - 1], &data[j]) == Ordering::Greater {
            stats.swap(data, j - 1, j);
            j -= 1;
        }
    }
    stats
}

/// Insertion sort over partially ordered elements.
pub fn try_sort<T: PartialOrd>(data: &mut [T]) -> Result<&mut [T], SortError> {
    for i in 1..data.len() {
        let mut j = i;
        while j > 0 {
            match data[j - 1].partial_cmp(&data[j]) {
                Some(Ordering::Greater) => {
                    data.swap(j - 1, j);
                    j -= 1;
                }
                Some(_) => break,
                None => {
                    return Err(SortError::Incomparable {
                        left: j - 1,
                        right: j,
                    })
                }
            }
        }
    }
    Ok(data)
}
