//! Console rendering of sequences.
//!
//! The sorts never print; callers hand their results to these helpers.

use std::fmt::Debug;
use std::io::{self, Write};

/// Render a slice as `[a, b, c]`.
pub fn format_sequence<T: Debug>(data: &[T]) -> String {
    format!("{:?}", data)
}

/// Write a slice to `out` on one line, optionally prefixed with `label: `.
pub fn print_sequence<W: Write, T: Debug>(
    out: &mut W,
    label: Option<&str>,
    data: &[T],
) -> io::Result<()> {
    match label {
        Some(label) => writeln!(out, "{}: {}", label, format_sequence(data)),
        None => writeln!(out, "{}", format_sequence(data)),
    }
}
