//! Comparative benchmark harness: workload generators, the sorter roster,
//! and the timing driver behind the `bench` binary.
//!
//! The driver warms every sorter up on a small dataset first, then times
//! each `(generator, size, sorter)` combination [`RUN_COUNT`] times on
//! fresh copies of the data and reports a trimmed mean, so a single
//! scheduler hiccup cannot skew a row. Workload generation is seeded:
//! two runs of the harness sort identical data.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::{burstsort, multikey1, multikey2};

/// Times each sorter is run per dataset; the high and low samples are
/// discarded, so this must be at least 3.
pub const RUN_COUNT: usize = 5;

/// Fixed seed for the random generators.
const WORKLOAD_SEED: u64 = 0x5EED_CA5E;
/// Length of every string from the random generator.
const RANDOM_LENGTH: usize = 64;
/// Longest pseudo word; the longest real English word has 28 letters.
const WORD_LONGEST: usize = 28;

/// Number of rows a generator produces per request.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DataSize {
    Small,
    Medium,
    Large,
}

impl DataSize {
    pub const ALL: [DataSize; 3] = [DataSize::Small, DataSize::Medium, DataSize::Large];

    pub fn count(self) -> usize {
        match self {
            DataSize::Small => 100_000,
            DataSize::Medium => 1_000_000,
            DataSize::Large => 3_000_000,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DataSize::Small => "SMALL",
            DataSize::Medium => "MEDIUM",
            DataSize::Large => "LARGE",
        }
    }
}

/// Fault raised by a [`DataGenerator`]; the driver reports it and moves on.
#[derive(Debug)]
pub enum GeneratorError {
    Io(io::Error),
    /// The file ran out of lines before the requested count was reached.
    TooFewLines { path: PathBuf, missing: usize },
}

impl fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeneratorError::Io(err) => write!(f, "{err}"),
            GeneratorError::TooFewLines { path, missing } => write!(
                f,
                "file '{}' has too few lines ({missing} more needed)",
                path.display()
            ),
        }
    }
}

impl std::error::Error for GeneratorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GeneratorError::Io(err) => Some(err),
            GeneratorError::TooFewLines { .. } => None,
        }
    }
}

impl From<io::Error> for GeneratorError {
    fn from(err: io::Error) -> Self {
        GeneratorError::Io(err)
    }
}

/// Produces workloads for the driver.
#[derive(Clone, Debug)]
pub enum DataGenerator {
    /// Fixed-length strings over digits and mixed-case letters.
    Random,
    /// Words of random length over the lower-case alphabet.
    PseudoWords,
    /// Lines read from a file; fails if the file is shorter than requested.
    File(PathBuf),
}

impl DataGenerator {
    pub fn display_name(&self) -> String {
        match self {
            DataGenerator::Random => "Random".to_string(),
            // Spelling kept from the harness output this one replaces.
            DataGenerator::PseudoWords => "Psuedo words".to_string(),
            DataGenerator::File(path) => path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
        }
    }

    /// Generates `size.count()` strings. The random generators draw from a
    /// fixed-seed [`StdRng`], so repeated calls return identical data.
    pub fn generate(&self, size: DataSize) -> Result<Vec<String>, GeneratorError> {
        let count = size.count();
        match self {
            DataGenerator::Random => Ok(random_strings(count)),
            DataGenerator::PseudoWords => Ok(pseudo_words(count)),
            DataGenerator::File(path) => file_lines(path, count),
        }
    }
}

fn random_strings(count: usize) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(WORKLOAD_SEED);
    (0..count)
        .map(|_| {
            (0..RANDOM_LENGTH)
                .map(|_| {
                    let d = rng.random_range(0..62u8);
                    let c = match d {
                        0..=9 => b'0' + d,
                        10..=35 => b'A' + (d - 10),
                        _ => b'a' + (d - 36),
                    };
                    c as char
                })
                .collect()
        })
        .collect()
}

fn pseudo_words(count: usize) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(WORKLOAD_SEED);
    (0..count)
        .map(|_| {
            let length = rng.random_range(1..=WORD_LONGEST);
            (0..length)
                .map(|_| (b'a' + rng.random_range(0..26u8)) as char)
                .collect()
        })
        .collect()
}

fn file_lines(path: &Path, count: usize) -> Result<Vec<String>, GeneratorError> {
    let reader = BufReader::new(File::open(path)?);
    let mut data = Vec::with_capacity(count);
    for line in reader.lines() {
        if data.len() == count {
            break;
        }
        data.push(line?);
    }
    if data.len() < count {
        return Err(GeneratorError::TooFewLines {
            path: path.to_path_buf(),
            missing: count - data.len(),
        });
    }
    Ok(data)
}

/// One sorter under benchmark: a display name paired with an in-place sort.
///
/// The roster is closed, so a fieldless enum with a dispatch method does
/// the work of a trait-object hierarchy.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SortRunner {
    /// Standard library stable sort, the n·log(n) baseline.
    Mergesort,
    /// Standard library unstable sort.
    Quicksort,
    Multikey1,
    Multikey2,
    Burstsort,
}

/// Roster order used by the driver and the `bench` binary.
pub const ALL_RUNNERS: [SortRunner; 5] = [
    SortRunner::Mergesort,
    SortRunner::Quicksort,
    SortRunner::Multikey1,
    SortRunner::Multikey2,
    SortRunner::Burstsort,
];

impl SortRunner {
    pub fn display_name(self) -> &'static str {
        match self {
            SortRunner::Mergesort => "Mergesort",
            SortRunner::Quicksort => "Quicksort",
            SortRunner::Multikey1 => "Multikey 1",
            SortRunner::Multikey2 => "Multikey 2",
            SortRunner::Burstsort => "Burstsort",
        }
    }

    pub fn sort<T: AsRef<[u8]> + Ord>(self, data: &mut [T]) {
        match self {
            SortRunner::Mergesort => data.sort(),
            SortRunner::Quicksort => data.sort_unstable(),
            SortRunner::Multikey1 => multikey1(data),
            SortRunner::Multikey2 => multikey2(data),
            SortRunner::Burstsort => burstsort(data),
        }
    }
}

/// Mean of the samples with the minimum and maximum discarded, in whole
/// milliseconds. Requires at least three samples.
pub fn trimmed_mean(samples: &mut [u64]) -> u64 {
    assert!(samples.len() >= 3, "need at least 3 samples to trim");
    samples.sort_unstable();
    let kept = &samples[1..samples.len() - 1];
    kept.iter().sum::<u64>() / kept.len() as u64
}

/// Runs every sorter over every `(generator, size)` dataset and prints one
/// timing row per combination to stdout.
///
/// A warm-up pass over small datasets runs first with timings discarded, so
/// first-touch cache population hits no measured run. Sorting mutates its
/// input, so each of the [`RUN_COUNT`] measured runs gets a fresh copy of
/// the data; timing uses the monotonic [`Instant`] clock. Generator faults
/// are logged to stderr and skip only the affected rows.
pub fn run_sorts(generators: &[DataGenerator], runners: &[SortRunner], sizes: &[DataSize]) {
    println!("Warming up the system, please wait...");
    for generator in generators {
        match generator.generate(DataSize::Small) {
            Ok(data) => {
                for runner in runners {
                    let mut copy = data.clone();
                    runner.sort(&mut copy);
                }
            }
            Err(err) => log::error!("{} warm-up failed: {err}", generator.display_name()),
        }
    }

    for generator in generators {
        println!("{}...", generator.display_name());
        for size in sizes {
            println!("\t{}...", size.label());
            let data = match generator.generate(*size) {
                Ok(data) => data,
                Err(err) => {
                    log::error!("{} {}: {err}", generator.display_name(), size.label());
                    continue;
                }
            };
            for runner in runners {
                let mut times = [0u64; RUN_COUNT];
                for sample in times.iter_mut() {
                    let mut copy = data.clone();
                    let start = Instant::now();
                    runner.sort(&mut copy);
                    *sample = start.elapsed().as_millis() as u64;
                }
                println!(
                    "\t\t{}:\t{} ms",
                    runner.display_name(),
                    trimmed_mean(&mut times)
                );
            }
        }
    }
}
