//! # Mksort
//!
//! `mksort` is a library of string-sorting algorithms tuned for large
//! arrays of variable-length strings, built around **multikey quicksort**
//! (Bentley & Sedgewick, "Fast algorithms for sorting and searching
//! strings", 1997) and a **burstsort** engine sharing the same
//! character-access discipline, plus the harness that benchmarks them
//! against the standard library sorts.
//!
//! These sorts beat generic comparison sorts on string workloads for two
//! reasons: each comparison touches a single character instead of
//! re-scanning shared prefixes, and the recursion partitions the key space
//! rather than the index space.
//!
//! ## Key features
//!
//! - **Virtual zero padding**: variable-length keys behave as if padded
//!   with `0` to infinity, so the empty string sorts first and every proper
//!   prefix sorts before its extensions. On UTF-8 data the result matches
//!   `slice::sort`.
//! - **In-place mutation**: every sorter permutes the slice it is given;
//!   the quicksort kernels allocate nothing.
//! - **Generic keys**: anything `AsRef<[u8]>` sorts — `String`, `&str`,
//!   `Vec<u8>`, or your own key type.
//! - **Exhausted-key pruning**: an equal partition whose pivot character is
//!   the virtual zero is already fully sorted and is never descended into.
//!
//! ## Usage
//!
//! ```rust
//! use mksort::sort;
//!
//! let mut data = vec!["banana", "apple", "cherry", "date"];
//! sort(&mut data);
//!
//! assert_eq!(data, vec!["apple", "banana", "cherry", "date"]);
//! ```
//!
//! The pedagogical randomized-pivot variant ([`multikey1`]), the
//! range-and-depth-restricted entry ([`mkqsort`]), and the supporting small
//! sorts ([`insertion_sort`], [`shellsort`]) are exported alongside
//! [`multikey2`] and [`burstsort`].
//!
//! ## Benchmarking
//!
//! The `bench` binary drives every sorter over seeded random workloads (or
//! lines of a file you supply) and reports trimmed-mean wall times per
//! dataset; see the [`harness`] module.

pub mod burstsort;
pub mod chars;
pub mod harness;
pub mod insertion;
pub mod multikey;
pub mod shellsort;

pub use burstsort::burstsort;
pub use chars::char_at;
pub use insertion::insertion_sort;
pub use multikey::{mkqsort, multikey1, multikey2, sort};
pub use shellsort::shellsort;

pub mod prelude {
    pub use crate::burstsort::burstsort;
    pub use crate::multikey::{mkqsort, multikey1, multikey2, sort};
}
