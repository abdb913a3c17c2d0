//! Operation counters for the instrumented sorts.

use std::cmp::Ordering;
use std::fmt;

/// Comparison and swap counts collected by a `sort_counted` call.
///
/// For insertion sort `swaps` counts single-slot shifts, which cost the same
/// as an adjacent swap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortStats {
    pub comparisons: u64,
    pub swaps: u64,
}

impl SortStats {
    /// Compare two elements, recording the comparison.
    #[inline]
    pub(crate) fn compare<T: Ord>(&mut self, a: &T, b: &T) -> Ordering {
        self.comparisons += 1;
        a.cmp(b)
    }

    /// Swap two slots, recording the swap.
    #[inline]
    pub(crate) fn swap<T>(&mut self, data: &mut [T], a: usize, b: usize) {
        self.swaps += 1;
        data.swap(a, b);
    }

    /// Number of comparisons a full quadratic scan makes over `n` elements.
    pub fn quadratic_comparisons(n: usize) -> u64 {
        let n = n as u64;
        n * n.saturating_sub(1) / 2
    }
}

impl fmt::Display for SortStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} comparisons, {} swaps",
            self.comparisons, self.swaps
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quadratic_comparisons() {
        assert_eq!(SortStats::quadratic_comparisons(0), 0);
        assert_eq!(SortStats::quadratic_comparisons(1), 0);
        assert_eq!(SortStats::quadratic_comparisons(2), 1);
        assert_eq!(SortStats::quadratic_comparisons(5), 10);
    }

    #[test]
    fn test_counters() {
        let mut stats = SortStats::default();
        let mut data = [2, 1];
        if stats.compare(&data[0], &data[1]) == Ordering::Greater {
            stats.swap(&mut data, 0, 1);
        }
        assert_eq!(data, [1, 2]);
        assert_eq!(stats, SortStats { comparisons: 1, swaps: 1 });
        assert_eq!(stats.to_string(), "1 comparisons, 1 swaps");
    }
}
