//! Name-based dispatch over every sort the crate provides.
//!
//! The driver, the benchmark report and the criterion benches all refer to
//! algorithms by the snake_case names defined here.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;

use crate::error::SortError;
use crate::stats::SortStats;
use crate::{bubble_sort, insertion_sort, selection_sort, std_sort};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
#[value(rename_all = "snake_case")]
pub enum Algorithm {
    Bubble,
    BubbleEarlyExit,
    Selection,
    Insertion,
    StdUnstable,
    StdStable,
    ParallelUnstable,
}

impl Algorithm {
    pub const ALL: [Algorithm; 7] = [
        Algorithm::Bubble,
        Algorithm::BubbleEarlyExit,
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::StdUnstable,
        Algorithm::StdStable,
        Algorithm::ParallelUnstable,
    ];

    /// The O(n²) algorithms implemented in this crate.
    pub const ELEMENTARY: [Algorithm; 4] = [
        Algorithm::Bubble,
        Algorithm::BubbleEarlyExit,
        Algorithm::Selection,
        Algorithm::Insertion,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::BubbleEarlyExit => "bubble_early_exit",
            Algorithm::Selection => "selection",
            Algorithm::Insertion => "insertion",
            Algorithm::StdUnstable => "std_unstable",
            Algorithm::StdStable => "std_stable",
            Algorithm::ParallelUnstable => "parallel_unstable",
        }
    }

    /// Whether the algorithm's cost grows quadratically with input size.
    pub fn is_quadratic(&self) -> bool {
        Self::ELEMENTARY.contains(self)
    }

    /// Sort `data` in place with this algorithm.
    pub fn sort<T: Ord + Send>(&self, data: &mut [T]) {
        match self {
            Algorithm::Bubble => {
                bubble_sort::sort(data);
            }
            Algorithm::BubbleEarlyExit => {
                bubble_sort::sort_early_exit(data);
            }
            Algorithm::Selection => {
                selection_sort::sort(data);
            }
            Algorithm::Insertion => {
                insertion_sort::sort(data);
            }
            Algorithm::StdUnstable => std_sort::sort_unstable(data),
            Algorithm::StdStable => std_sort::sort_stable(data),
            Algorithm::ParallelUnstable => std_sort::parallel_sort(data),
        }
    }

    /// Sort `data` in place and return operation counts.
    ///
    /// The baselines are not instrumented; they sort and return `None`.
    pub fn sort_counted<T: Ord + Send>(&self, data: &mut [T]) -> Option<SortStats> {
        match self {
            Algorithm::Bubble => Some(bubble_sort::sort_counted(data)),
            Algorithm::BubbleEarlyExit => Some(bubble_sort::sort_early_exit_counted(data)),
            Algorithm::Selection => Some(selection_sort::sort_counted(data)),
            Algorithm::Insertion => Some(insertion_sort::sort_counted(data)),
            Algorithm::StdUnstable | Algorithm::StdStable | Algorithm::ParallelUnstable => {
                self.sort(data);
                None
            }
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|a| a.name() == s)
            .ok_or_else(|| SortError::UnknownAlgorithm(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::std_sort::is_sorted;
    use rand::Rng;

    #[test]
    fn test_name_roundtrip() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.name().parse::<Algorithm>(), Ok(algorithm));
            assert_eq!(algorithm.to_string(), algorithm.name());
        }
    }

    #[test]
    fn test_value_enum_names_match() {
        for algorithm in Algorithm::ALL {
            let value = algorithm.to_possible_value().unwrap();
            assert_eq!(value.get_name(), algorithm.name());
        }
    }

    #[test]
    fn test_unknown_name() {
        assert_eq!(
            "quick".parse::<Algorithm>(),
            Err(SortError::UnknownAlgorithm("quick".to_string()))
        );
    }

    #[test]
    fn test_every_algorithm_sorts() {
        let mut rng = rand::thread_rng();
        let original: Vec<i32> = (0..300).map(|_| rng.gen()).collect();
        let mut expected = original.clone();
        expected.sort_unstable();

        for algorithm in Algorithm::ALL {
            let mut data = original.clone();
            algorithm.sort(&mut data);
            assert_eq!(data, expected, "{} produced a wrong order", algorithm);
        }
    }

    #[test]
    fn test_sort_counted_instrumentation() {
        for algorithm in Algorithm::ALL {
            let mut data = vec![5, 4, 3, 2, 1];
            let stats = algorithm.sort_counted(&mut data);
            assert!(is_sorted(&data));
            assert_eq!(stats.is_some(), algorithm.is_quadratic(), "{}", algorithm);
        }
    }

    #[test]
    fn test_early_exit_counts_single_pass_on_sorted_input() {
        let mut data: Vec<u32> = (0..50).collect();
        let stats = Algorithm::BubbleEarlyExit.sort_counted(&mut data).unwrap();
        assert_eq!(stats, SortStats { comparisons: 49, swaps: 0 });
    }

    #[test]
    fn test_is_quadratic() {
        assert!(Algorithm::Bubble.is_quadratic());
        assert!(Algorithm::Insertion.is_quadratic());
        assert!(!Algorithm::StdUnstable.is_quadratic());
        assert!(!Algorithm::ParallelUnstable.is_quadratic());
    }
}
