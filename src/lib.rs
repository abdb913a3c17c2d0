//! Elementary Sorting
//!
//! In-place comparison sorts for any totally ordered element type:
//! - **Bubble Sort**: adjacent compare-and-swap passes, O(n²)
//! - **Selection Sort**: repeated selection of the remaining minimum, O(n²) comparisons, O(n) swaps
//! - **Insertion Sort**: shifting each element into a growing sorted prefix, O(n²)
//!
//! Every sort mutates the slice it is given and returns the same slice. The
//! standard library sorts in [`std_sort`] serve as baselines for verification
//! and benchmarking.

pub mod algorithm;
pub mod bubble_sort;
pub mod display;
pub mod error;
pub mod insertion_sort;
pub mod lino_report;
pub mod selection_sort;
pub mod stats;
pub mod std_sort;

pub use algorithm::Algorithm;
pub use error::SortError;
pub use stats::SortStats;
