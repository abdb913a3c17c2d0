//! Links Notation (Lino) Report Generator
//!
//! Benchmark runs are recorded in Links Notation, a plain indented format where
//! each line is a reference or a link between references:
//!
//! ```text
//! results:
//!   size_1000:
//!     bubble:
//!       time_ms 1.250
//!       comparisons 499500
//! ```
//!
//! Reports can be parsed back and rendered as Markdown tables (see `lino2md`).

use std::fmt::{self, Write};
use std::fs;
use std::io;
use std::path::Path;

use crate::algorithm::Algorithm;

/// A single benchmark result for one algorithm at one array size
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkResult {
    pub algorithm: Algorithm,
    /// Array size in elements
    pub array_size: usize,
    /// Execution time in milliseconds
    pub time_ms: f64,
    /// Comparison count, for the instrumented algorithms
    pub comparisons: Option<u64>,
    /// Swap (or shift) count, for the instrumented algorithms
    pub swaps: Option<u64>,
    /// Whether the output matched the baseline sort
    pub verified: bool,
}

/// A complete benchmark report
#[derive(Debug, Clone)]
pub struct BenchmarkReport {
    /// When the benchmark was run (ISO 8601)
    pub timestamp: String,
    pub description: String,
    pub system_info: SystemInfo,
    pub results: Vec<BenchmarkResult>,
}

/// Host details recorded alongside the results
#[derive(Debug, Clone, PartialEq)]
pub struct SystemInfo {
    pub os: String,
    pub arch: String,
    /// Worker threads available to the parallel baseline
    pub threads: usize,
}

impl BenchmarkReport {
    /// Create a new empty benchmark report
    pub fn new(description: &str) -> Self {
        BenchmarkReport {
            timestamp: chrono_lite_timestamp(),
            description: description.to_string(),
            system_info: SystemInfo::default(),
            results: Vec::new(),
        }
    }

    pub fn add_result(&mut self, result: BenchmarkResult) {
        self.results.push(result);
    }

    /// Distinct array sizes in ascending order
    pub fn sizes(&self) -> Vec<usize> {
        let mut sizes: Vec<usize> = self.results.iter().map(|r| r.array_size).collect();
        sizes.sort_unstable();
        sizes.dedup();
        sizes
    }

    /// Look up the result for an algorithm at a given size
    pub fn find(&self, algorithm: Algorithm, size: usize) -> Option<&BenchmarkResult> {
        self.results
            .iter()
            .find(|r| r.algorithm == algorithm && r.array_size == size)
    }

    /// Slowdown of `algorithm` relative to `std_unstable` at `size`
    pub fn slowdown_vs_std(&self, algorithm: Algorithm, size: usize) -> Option<f64> {
        let baseline = self.find(Algorithm::StdUnstable, size)?;
        let result = self.find(algorithm, size)?;
        if baseline.time_ms > 0.0 {
            Some(result.time_ms / baseline.time_ms)
        } else {
            None
        }
    }

    /// Generate the report in Links Notation format
    pub fn to_lino(&self) -> String {
        let mut output = String::new();
        self.write_lino(&mut output).expect("writing to a String cannot fail");
        output
    }

    fn write_lino(&self, output: &mut String) -> fmt::Result {
        writeln!(output, "benchmark_report:")?;
        writeln!(output, "  timestamp '{}'", self.timestamp)?;
        writeln!(output, "  description '{}'", escape_lino_string(&self.description))?;

        writeln!(output)?;
        writeln!(output, "system_info:")?;
        writeln!(output, "  os '{}'", escape_lino_string(&self.system_info.os))?;
        writeln!(output, "  arch '{}'", escape_lino_string(&self.system_info.arch))?;
        writeln!(output, "  threads {}", self.system_info.threads)?;

        let sizes = self.sizes();

        writeln!(output)?;
        writeln!(output, "results:")?;
        for size in &sizes {
            writeln!(output, "  size_{}:", size)?;
            for result in self.results.iter().filter(|r| r.array_size == *size) {
                writeln!(output, "    {}:", result.algorithm)?;
                writeln!(output, "      time_ms {:.3}", result.time_ms)?;
                if let Some(comparisons) = result.comparisons {
                    writeln!(output, "      comparisons {}", comparisons)?;
                }
                if let Some(swaps) = result.swaps {
                    writeln!(output, "      swaps {}", swaps)?;
                }
                writeln!(output, "      verified {}", result.verified)?;
            }
        }

        writeln!(output)?;
        writeln!(output, "comparisons:")?;
        for size in &sizes {
            writeln!(output, "  size_{}:", size)?;
            for algorithm in Algorithm::ELEMENTARY {
                if let Some(ratio) = self.slowdown_vs_std(algorithm, *size) {
                    writeln!(output, "    {}_vs_std_unstable:", algorithm)?;
                    writeln!(output, "      slowdown {:.2}", ratio)?;
                }
            }
        }

        Ok(())
    }

    /// Save the report to a file in Links Notation format
    pub fn save_lino(&self, path: &Path) -> io::Result<()> {
        fs::write(path, self.to_lino())
    }

    /// Generate a markdown summary of the report
    pub fn to_markdown_table(&self) -> String {
        let mut output = String::new();
        self.write_markdown(&mut output).expect("writing to a String cannot fail");
        output
    }

    fn write_markdown(&self, output: &mut String) -> fmt::Result {
        writeln!(output, "# Elementary Sorting Benchmark Report")?;
        writeln!(output)?;
        writeln!(output, "**Timestamp:** {}", self.timestamp)?;
        writeln!(output, "**Description:** {}", self.description)?;
        writeln!(output)?;

        writeln!(output, "## System Information")?;
        writeln!(output)?;
        writeln!(output, "| Property | Value |")?;
        writeln!(output, "|----------|-------|")?;
        writeln!(output, "| OS | {} |", self.system_info.os)?;
        writeln!(output, "| Arch | {} |", self.system_info.arch)?;
        writeln!(output, "| Threads | {} |", self.system_info.threads)?;
        writeln!(output)?;

        let sizes = self.sizes();

        writeln!(output, "## Timings (ms)")?;
        writeln!(output)?;
        write!(output, "| Size |")?;
        for algorithm in Algorithm::ALL {
            write!(output, " {} |", algorithm)?;
        }
        writeln!(output)?;
        write!(output, "|------|")?;
        for _ in Algorithm::ALL {
            write!(output, "------|")?;
        }
        writeln!(output)?;
        for size in &sizes {
            write!(output, "| {} |", format_size(*size))?;
            for algorithm in Algorithm::ALL {
                let cell = self
                    .find(algorithm, *size)
                    .map(|r| format!("{:.3}", r.time_ms))
                    .unwrap_or_else(|| "N/A".to_string());
                write!(output, " {} |", cell)?;
            }
            writeln!(output)?;
        }
        writeln!(output)?;

        writeln!(output, "## Operation Counts")?;
        writeln!(output)?;
        writeln!(output, "| Size | Algorithm | Comparisons | Swaps | Slowdown vs std_unstable |")?;
        writeln!(output, "|------|-----------|-------------|-------|--------------------------|")?;
        for size in &sizes {
            for algorithm in Algorithm::ELEMENTARY {
                let Some(result) = self.find(algorithm, *size) else {
                    continue;
                };
                let slowdown = self
                    .slowdown_vs_std(algorithm, *size)
                    .map(|s| format!("{:.2}x", s))
                    .unwrap_or_else(|| "N/A".to_string());
                writeln!(
                    output,
                    "| {} | {} | {} | {} | {} |",
                    format_size(*size),
                    algorithm,
                    format_count(result.comparisons),
                    format_count(result.swaps),
                    slowdown
                )?;
            }
        }

        writeln!(output)?;
        writeln!(output, "---")?;
        writeln!(output, "*Report generated by elementary-sorting bench*")?;
        Ok(())
    }

    /// Save the report as a markdown file
    pub fn save_markdown(&self, path: &Path) -> io::Result<()> {
        fs::write(path, self.to_markdown_table())
    }
}

impl Default for SystemInfo {
    fn default() -> Self {
        SystemInfo {
            os: std::env::consts::OS.to_string(),
            arch: std::env::consts::ARCH.to_string(),
            threads: rayon::current_num_threads(),
        }
    }
}

/// Escape a string for use in Links Notation (handle single quotes)
fn escape_lino_string(s: &str) -> String {
    s.replace('\'', "\\'")
}

/// Format a size as a human-readable string (e.g., "1K", "1M")
fn format_size(size: usize) -> String {
    if size >= 1_000_000 {
        format!("{}M", size / 1_000_000)
    } else if size >= 1_000 {
        format!("{}K", size / 1_000)
    } else {
        size.to_string()
    }
}

fn format_count(count: Option<u64>) -> String {
    count
        .map(|c| c.to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Generate a UTC timestamp without external dependencies
fn chrono_lite_timestamp() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};

    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let time_of_day = secs % 86400;
    let hours = time_of_day / 3600;
    let minutes = (time_of_day % 3600) / 60;
    let seconds = time_of_day % 60;

    let (year, month, day) = civil_from_days(secs / 86400);

    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
        year, month, day, hours, minutes, seconds
    )
}

/// Convert days since the Unix epoch to a (year, month, day) date.
fn civil_from_days(days: u64) -> (u64, u64, u64) {
    let mut year = 1970;
    let mut remaining = days;

    loop {
        let days_in_year = if is_leap_year(year) { 366 } else { 365 };
        if remaining < days_in_year {
            break;
        }
        remaining -= days_in_year;
        year += 1;
    }

    let feb = if is_leap_year(year) { 29 } else { 28 };
    let days_in_months = [31, feb, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

    let mut month = 1;
    for days in days_in_months {
        if remaining < days {
            break;
        }
        remaining -= days;
        month += 1;
    }

    (year, month, remaining + 1)
}

fn is_leap_year(year: u64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Parse a Links Notation report produced by [`BenchmarkReport::to_lino`].
///
/// Returns `None` if the text holds no results.
pub fn parse_lino_report(content: &str) -> Option<BenchmarkReport> {
    let mut report = BenchmarkReport::new("Parsed report");
    let mut current_size: Option<usize> = None;
    let mut current_result: Option<BenchmarkResult> = None;
    let mut in_results_section = false;

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        if trimmed == "results:" {
            in_results_section = true;
            continue;
        }
        if trimmed == "comparisons:" {
            if let Some(result) = current_result.take() {
                report.results.push(result);
            }
            in_results_section = false;
            current_size = None;
            continue;
        }

        if let Some(ts) = extract_quoted_value(trimmed, "timestamp") {
            report.timestamp = ts;
            continue;
        }
        if let Some(desc) = extract_quoted_value(trimmed, "description") {
            report.description = desc;
            continue;
        }
        if let Some(os) = extract_quoted_value(trimmed, "os") {
            report.system_info.os = os;
            continue;
        }
        if let Some(arch) = extract_quoted_value(trimmed, "arch") {
            report.system_info.arch = arch;
            continue;
        }
        if let Some(threads) = trimmed.strip_prefix("threads ") {
            if let Ok(threads) = threads.parse() {
                report.system_info.threads = threads;
            }
            continue;
        }

        if !in_results_section {
            continue;
        }

        if let Some(header) = trimmed.strip_suffix(':') {
            if let Some(size) = header.strip_prefix("size_") {
                if let Some(result) = current_result.take() {
                    report.results.push(result);
                }
                current_size = size.parse().ok();
                continue;
            }

            if let (Some(size), Ok(algorithm)) = (current_size, header.parse::<Algorithm>()) {
                if let Some(result) = current_result.take() {
                    report.results.push(result);
                }
                current_result = Some(BenchmarkResult {
                    algorithm,
                    array_size: size,
                    time_ms: 0.0,
                    comparisons: None,
                    swaps: None,
                    verified: false,
                });
                continue;
            }
        }

        if let Some(ref mut result) = current_result {
            if let Some(value) = trimmed.strip_prefix("time_ms ") {
                if let Ok(time) = value.parse() {
                    result.time_ms = time;
                }
            } else if let Some(value) = trimmed.strip_prefix("comparisons ") {
                result.comparisons = value.parse().ok();
            } else if let Some(value) = trimmed.strip_prefix("swaps ") {
                result.swaps = value.parse().ok();
            } else if let Some(value) = trimmed.strip_prefix("verified ") {
                result.verified = value == "true";
            }
        }
    }

    if let Some(result) = current_result {
        report.results.push(result);
    }

    if report.results.is_empty() {
        None
    } else {
        Some(report)
    }
}

fn extract_quoted_value(line: &str, key: &str) -> Option<String> {
    let value = line.strip_prefix(key)?.strip_prefix(' ')?;
    let inner = value.strip_prefix('\'')?.strip_suffix('\'')?;
    Some(inner.replace("\\'", "'"))
}
