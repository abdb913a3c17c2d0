//! Selection Sort Implementation
//!
//! For each boundary index `i`, the minimum of the unsorted remainder is found
//! and swapped into position `i`. Ties resolve to the leftmost minimum since
//! only a strictly smaller element replaces the current candidate. The sort is
//! still not stable: a swap can carry an element past an equal one.
//!
//! Complexity: O(n²) comparisons always, at most `n - 1` swaps.

use std::cmp::Ordering;

use crate::error::SortError;
use crate::stats::SortStats;

/// Index of the smallest element in `data[from..]`, leftmost on ties.
///
/// Returns `None` if `from` is past the end of the slice.
pub fn min_index<T: Ord>(data: &[T], from: usize) -> Option<usize> {
    if from >= data.len() {
        return None;
    }

    let mut min = from;
    for j in from + 1..data.len() {
        if data[j] < data[min] {
            min = j;
        }
    }
    Some(min)
}

/// Sort a slice in-place using selection sort.
///
/// Returns the same slice so calls can be chained.
pub fn sort<T: Ord>(data: &mut [T]) -> &mut [T] {
    let n = data.len();
    if n <= 1 {
        return data;
    }

    for i in 0..n - 1 {
        if let Some(min) = min_index(data, i) {
            if min != i {
                data.swap(i, min);
            }
        }
    }

    data
}

/// Selection sort that counts every comparison and swap.
pub fn sort_counted<T: Ord>(data: &mut [T]) -> SortStats {
    let mut stats = SortStats::default();
    let n = data.len();
    if n <= 1 {
        return stats;
    }

    for i in 0..n - 1 {
        let mut min = i;
        for j in i + 1..n {
            if stats.compare(&data[j], &data[min]) == Ordering::Less {
                min = j;
            }
        }
        if min != i {
            stats.swap(data, i, min);
        }
    }

    stats
}

/// Selection sort over partially ordered elements.
///
/// Fails on the first pair the minimum scan cannot order.
pub fn try_sort<T: PartialOrd>(data: &mut [T]) -> Result<&mut [T], SortError> {
    let n = data.len();
    if n <= 1 {
        return Ok(data);
    }

    for i in 0..n - 1 {
        let mut min = i;
        for j in i + 1..n {
            match data[j].partial_cmp(&data[min]) {
                Some(Ordering::Less) => min = j,
                Some(_) => {}
                None => return Err(SortError::Incomparable { left: min, right: j }),
            }
        }
        if min != i {
            data.swap(i, min);
        }
    }

    Ok(data)
}
