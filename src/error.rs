//! Error types for the sorting routines.

use thiserror::Error;

/// Errors reported by the fallible sorting entry points.
///
/// The `Ord`-bounded sorts never fail; only the `try_sort` variants over
/// `PartialOrd` elements and name-based algorithm lookup produce these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    /// Two elements could not be ordered against each other (e.g. a NaN).
    #[error("elements at index {left} and {right} are not comparable")]
    Incomparable { left: usize, right: usize },

    #[error("unknown algorithm `{0}`")]
    UnknownAlgorithm(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incomparable_message() {
        let err = SortError::Incomparable { left: 2, right: 3 };
        assert_eq!(
            err.to_string(),
            "elements at index 2 and 3 are not comparable"
        );
    }

    #[test]
    fn test_unknown_algorithm_message() {
        let err = SortError::UnknownAlgorithm("quick".to_string());
        assert_eq!(err.to_string(), "unknown algorithm `quick`");
    }
}
