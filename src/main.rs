//! Elementary Sorting driver
//!
//! - `demo`: runs bubble and selection sort on the fixed example arrays
//! - `sort`: sorts integers given on the command line with a chosen algorithm
//! - `bench`: times every algorithm against the standard library baselines
//!   and optionally writes a Links Notation / Markdown report

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use elementary_sorting::display::print_sequence;
use elementary_sorting::lino_report::{BenchmarkReport, BenchmarkResult};
use elementary_sorting::{bubble_sort, selection_sort, std_sort, Algorithm};
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Array sizes used by `bench` when none are given
const DEFAULT_SIZES: [usize; 4] = [100, 1_000, 10_000, 100_000];

/// Largest input the O(n²) algorithms are timed on
const DEFAULT_MAX_QUADRATIC_SIZE: usize = 10_000;

#[derive(Parser, Debug)]
#[command(version, about = "Bubble, selection and insertion sort")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sort the built-in example arrays and print the results
    Demo,

    /// Sort integers given on the command line
    #[command(allow_negative_numbers = true)]
    Sort {
        #[arg(long, short, value_enum, default_value_t = Algorithm::Bubble)]
        algorithm: Algorithm,

        /// Also print comparison and swap counts
        #[arg(long)]
        stats: bool,

        values: Vec<i64>,
    },

    /// Benchmark every algorithm on random data
    Bench {
        /// Array sizes to benchmark
        #[arg(long, value_delimiter = ',')]
        sizes: Vec<usize>,

        /// Skip quadratic algorithms above this size
        #[arg(long, default_value_t = DEFAULT_MAX_QUADRATIC_SIZE)]
        max_quadratic_size: usize,

        /// Seed for reproducible input data
        #[arg(long)]
        seed: Option<u64>,

        /// Write the report in Links Notation format
        #[arg(long)]
        lino: Option<PathBuf>,

        /// Write the report as Markdown
        #[arg(long)]
        markdown: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match cli.command {
        Command::Demo => {
            let stdout = io::stdout();
            run_demo(&mut stdout.lock())
        }
        Command::Sort {
            algorithm,
            stats,
            values,
        } => run_sort(algorithm, stats, values),
        Command::Bench {
            sizes,
            max_quadratic_size,
            seed,
            lino,
            markdown,
        } => {
            let sizes = if sizes.is_empty() {
                DEFAULT_SIZES.to_vec()
            } else {
                sizes
            };
            let report = run_benchmark(&sizes, max_quadratic_size, seed)?;
            if let Some(path) = lino {
                report
                    .save_lino(&path)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                info!("lino report written to {}", path.display());
            }
            if let Some(path) = markdown {
                report
                    .save_markdown(&path)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                info!("markdown report written to {}", path.display());
            }
            Ok(())
        }
    }
}

/// Run the fixed example invocations, printing each result to `out`
fn run_demo<W: Write>(out: &mut W) -> Result<()> {
    let bubble_inputs: [Vec<i32>; 3] = [vec![1, 0, 9, 3, 4], vec![], vec![1, 0, 9, -3, 4]];
    for mut data in bubble_inputs {
        print_sequence(out, Some("Bubble sort"), bubble_sort::sort(&mut data))?;
    }

    let mut unsorted = vec![64, 25, 12, 22, 11];
    let sorted = selection_sort::sort(&mut unsorted);
    print_sequence(out, Some("Sorted Array"), sorted)?;

    out.flush()?;
    Ok(())
}

fn run_sort(algorithm: Algorithm, stats: bool, mut values: Vec<i64>) -> Result<()> {
    debug!("sorting {} values with {}", values.len(), algorithm);

    let counts = if stats {
        let counts = algorithm.sort_counted(&mut values);
        if counts.is_none() {
            warn!("{} is not instrumented; no counts available", algorithm);
        }
        counts
    } else {
        algorithm.sort(&mut values);
        None
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    print_sequence(&mut out, Some(algorithm.name()), &values)?;
    if let Some(counts) = counts {
        writeln!(out, "{}", counts)?;
    }
    Ok(())
}

/// Time every algorithm at each size and collect the results into a report
fn run_benchmark(
    sizes: &[usize],
    max_quadratic_size: usize,
    seed: Option<u64>,
) -> Result<BenchmarkReport> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut report = BenchmarkReport::new("Elementary sorts vs standard library baselines");

    println!(
        "{:>10} | {:>18} | {:>12} | {:>14} | {:>12} | {:>8}",
        "Size", "Algorithm", "Time (ms)", "Comparisons", "Swaps", "Verified"
    );
    println!(
        "{:-<10}-+-{:-<18}-+-{:-<12}-+-{:-<14}-+-{:-<12}-+-{:-<8}",
        "", "", "", "", "", ""
    );

    for &size in sizes {
        let data: Vec<u32> = (0..size).map(|_| rng.gen()).collect();
        let mut expected = data.clone();
        std_sort::sort_unstable(&mut expected);

        for algorithm in Algorithm::ALL {
            if algorithm.is_quadratic() && size > max_quadratic_size {
                debug!(
                    "skipping {} at size {} (above {})",
                    algorithm, size, max_quadratic_size
                );
                continue;
            }

            let mut timed = data.clone();
            let start = Instant::now();
            algorithm.sort(&mut timed);
            let time_ms = start.elapsed().as_secs_f64() * 1000.0;
            let verified = timed == expected;
            if !verified {
                warn!("{} produced a wrong order at size {}", algorithm, size);
            }

            // Counting runs separately so its bookkeeping stays out of the timing
            let stats = if algorithm.is_quadratic() {
                algorithm.sort_counted(&mut data.clone())
            } else {
                None
            };

            println!(
                "{:>10} | {:>18} | {:>12.3} | {:>14} | {:>12} | {:>8}",
                size,
                algorithm.name(),
                time_ms,
                stats.map_or("-".to_string(), |s| s.comparisons.to_string()),
                stats.map_or("-".to_string(), |s| s.swaps.to_string()),
                if verified { "OK" } else { "FAILED" }
            );

            report.add_result(BenchmarkResult {
                algorithm,
                array_size: size,
                time_ms,
                comparisons: stats.map(|s| s.comparisons),
                swaps: stats.map(|s| s.swaps),
                verified,
            });
        }
    }

    if report.results.iter().any(|r| !r.verified) {
        bail!("one or more algorithms failed verification");
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_sort_with_negatives() {
        let cli = Cli::parse_from(["elementary-sorting", "sort", "-a", "selection", "3", "-1", "2"]);
        match cli.command {
            Command::Sort {
                algorithm,
                stats,
                values,
            } => {
                assert_eq!(algorithm, Algorithm::Selection);
                assert!(!stats);
                assert_eq!(values, vec![3, -1, 2]);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn cli_parses_bench_defaults() {
        let cli = Cli::parse_from(["elementary-sorting", "bench", "--sizes", "10,20"]);
        match cli.command {
            Command::Bench {
                sizes,
                max_quadratic_size,
                seed,
                lino,
                markdown,
            } => {
                assert_eq!(sizes, vec![10, 20]);
                assert_eq!(max_quadratic_size, DEFAULT_MAX_QUADRATIC_SIZE);
                assert!(seed.is_none());
                assert!(lino.is_none());
                assert!(markdown.is_none());
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn demo_prints_example_invocations() {
        let mut out = Vec::new();
        run_demo(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Bubble sort: [0, 1, 3, 4, 9]\n\
             Bubble sort: []\n\
             Bubble sort: [-3, 0, 1, 4, 9]\n\
             Sorted Array: [11, 12, 22, 25, 64]\n"
        );
    }

    #[test]
    fn benchmark_skips_quadratic_above_cap() {
        let report = run_benchmark(&[50, 200], 100, Some(7)).unwrap();
        assert!(report.find(Algorithm::Bubble, 50).is_some());
        assert!(report.find(Algorithm::Bubble, 200).is_none());
        assert!(report.find(Algorithm::StdUnstable, 200).is_some());
        assert!(report.results.iter().all(|r| r.verified));

        let selection = report.find(Algorithm::Selection, 50).unwrap();
        assert_eq!(selection.comparisons, Some(50 * 49 / 2));

        let early_exit = report.find(Algorithm::BubbleEarlyExit, 50).unwrap();
        assert!(early_exit.comparisons.is_some());
        assert!(early_exit.swaps.is_some());
    }
}
