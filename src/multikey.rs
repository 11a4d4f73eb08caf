//! Multikey quicksort (Bentley–Sedgewick) over byte-string keys.
//!
//! A three-way quicksort that partitions on a single character at a given
//! depth and recurses on the equal partition at the next depth, which makes
//! it behave like a radix sort whose per-bucket work is another multikey
//! quicksort. Each comparison touches one character instead of re-scanning
//! shared prefixes, so it beats generic comparison sorts on string-heavy
//! workloads.
//!
//! Two variants share one partition routine:
//!
//! - [`multikey1`]: randomized pivot, no small-range cutoff. The reference
//!   form of the algorithm.
//! - [`multikey2`]: median-of-three pivot (pseudo-median of nine on larger
//!   ranges) with an insertion-sort cutoff below eight elements. The one to
//!   use.

use rand::Rng;

use crate::chars::char_at;
use crate::insertion::insertion_sort;

/// Ranges shorter than this are handed to the insertion sort by `ssort2`.
const INSERTION_CUTOFF: usize = 8;
/// Ranges longer than this use a pseudo-median of nine for pivot selection.
const NINTHER_CUTOFF: usize = 30;

/// Band geometry produced by [`partition`]: element counts of the `<`, `=`,
/// and `>` regions, plus whether every key in the equal band was exhausted
/// at the partition depth.
struct Bands {
    less: usize,
    equal: usize,
    greater: usize,
    all_zeros: bool,
}

/// Swaps the `n`-element blocks starting at `i` and `j`.
fn vecswap<T>(strings: &mut [T], mut i: usize, mut j: usize, mut n: usize) {
    while n > 0 {
        strings.swap(i, j);
        i += 1;
        j += 1;
        n -= 1;
    }
}

/// Returns the index (out of `l`, `m`, `h`) whose character at `depth` is
/// the median of the three.
fn med3<T: AsRef<[u8]>>(strings: &[T], l: usize, m: usize, h: usize, depth: usize) -> usize {
    let va = char_at(strings[l].as_ref(), depth);
    let vb = char_at(strings[m].as_ref(), depth);
    if va == vb {
        return l;
    }
    let vc = char_at(strings[h].as_ref(), depth);
    if vc == va || vc == vb {
        return h;
    }
    if va < vb {
        if vb < vc {
            m
        } else if va < vc {
            h
        } else {
            l
        }
    } else if vb > vc {
        m
    } else if va < vc {
        l
    } else {
        h
    }
}

/// Three-way Bentley–McIlroy partition of `strings[base..base + n)` around
/// the character of `strings[base]` at `depth`.
///
/// Precondition: `n >= 1` and the pivot element already swapped to `base`.
/// Equal elements are collected at both edges during the scan and
/// vector-swapped back to the middle, leaving `[less | equal | greater]`.
/// `all_zeros` survives only when the pivot character is the virtual zero
/// and no scanned character differed from it, i.e. every key in the equal
/// band has terminated at or before `depth`.
fn partition<T: AsRef<[u8]>>(strings: &mut [T], base: usize, n: usize, depth: usize) -> Bands {
    let v = char_at(strings[base].as_ref(), depth);
    let mut all_zeros = v == 0;
    let mut le = base + 1;
    let mut lt = le;
    let mut gt = base + n - 1;
    let mut ge = gt;
    loop {
        while lt <= gt {
            let c = char_at(strings[lt].as_ref(), depth);
            if c > v {
                break;
            }
            if c == v {
                strings.swap(le, lt);
                le += 1;
            } else {
                all_zeros = false;
            }
            lt += 1;
        }
        while lt <= gt {
            let c = char_at(strings[gt].as_ref(), depth);
            if c < v {
                break;
            }
            if c == v {
                strings.swap(gt, ge);
                ge -= 1;
            } else {
                all_zeros = false;
            }
            gt -= 1;
        }
        if lt > gt {
            break;
        }
        strings.swap(lt, gt);
        lt += 1;
        gt -= 1;
    }
    let end = base + n;
    let r = (le - base).min(lt - le);
    vecswap(strings, base, lt - r, r);
    let r = (ge - gt).min(end - ge - 1);
    vecswap(strings, lt, end - r, r);
    Bands {
        less: lt - le,
        equal: le + n - ge - 1,
        greater: ge - gt,
        all_zeros,
    }
}

/// Recursive body of [`multikey1`]: random pivot, no cutoff.
fn ssort1<T, R>(strings: &mut [T], base: usize, n: usize, depth: usize, rng: &mut R)
where
    T: AsRef<[u8]>,
    R: Rng,
{
    if n < 2 {
        return;
    }
    let pivot = base + rng.random_range(0..n);
    strings.swap(base, pivot);
    let bands = partition(strings, base, n, depth);
    ssort1(strings, base, bands.less, depth, rng);
    if !bands.all_zeros {
        // Descend only if at least one key still had characters at `depth`.
        ssort1(strings, base + bands.less, bands.equal, depth + 1, rng);
    }
    ssort1(strings, base + n - bands.greater, bands.greater, depth, rng);
}

/// Recursive body of [`multikey2`] and [`mkqsort`].
fn ssort2<T: AsRef<[u8]>>(strings: &mut [T], base: usize, n: usize, depth: usize) {
    if n < INSERTION_CUTOFF {
        insertion_sort(strings, base, base + n, depth);
        return;
    }
    let mut pl = base;
    let mut pm = base + n / 2;
    let mut pn = base + n - 1;
    if n > NINTHER_CUTOFF {
        // On larger ranges, take a pseudo-median of nine samples.
        let d = n / 8;
        pl = med3(strings, base, base + d, base + 2 * d, depth);
        pm = med3(strings, pm - d, pm, pm + d, depth);
        pn = med3(strings, pn - 2 * d, pn - d, pn, depth);
    }
    let pivot = med3(strings, pl, pm, pn, depth);
    strings.swap(base, pivot);
    let bands = partition(strings, base, n, depth);
    if bands.less > 1 {
        ssort2(strings, base, bands.less, depth);
    }
    if !bands.all_zeros {
        // Descend only if at least one key still had characters at `depth`.
        ssort2(strings, base + bands.less, bands.equal, depth + 1);
    }
    if bands.greater > 1 {
        ssort2(strings, base + n - bands.greater, bands.greater, depth);
    }
}

/// Sorts the slice with the randomized-pivot multikey quicksort.
///
/// Pivots are drawn from a thread-local generator obtained inside the call,
/// so the function is reentrant and keeps no global state. Prefer
/// [`multikey2`] for real workloads; this variant exists as the reference
/// form of the algorithm and as a pivot-strategy baseline in the benchmark.
///
/// # Examples
///
/// ```
/// use mksort::multikey1;
///
/// let mut data = vec!["banana", "apple", "cherry"];
/// multikey1(&mut data);
/// assert_eq!(data, vec!["apple", "banana", "cherry"]);
/// ```
pub fn multikey1<T: AsRef<[u8]>>(strings: &mut [T]) {
    if strings.len() < 2 {
        return;
    }
    let mut rng = rand::rng();
    ssort1(strings, 0, strings.len(), 0, &mut rng);
}

/// Sorts the slice with the tuned multikey quicksort: median-of-three pivot
/// (pseudo-median of nine past thirty elements) and an insertion-sort
/// cutoff below eight.
///
/// The sort is in place and not stable. Keys compare as byte strings
/// zero-padded to infinity, so the empty string sorts first and any proper
/// prefix sorts before its extensions; on UTF-8 data the result matches
/// `slice::sort`.
///
/// # Examples
///
/// ```
/// use mksort::multikey2;
///
/// let mut data = vec!["tt", "a", "", "foo", "bar"];
/// multikey2(&mut data);
/// assert_eq!(data, vec!["", "a", "bar", "foo", "tt"]);
/// ```
pub fn multikey2<T: AsRef<[u8]>>(strings: &mut [T]) {
    ssort2(strings, 0, strings.len(), 0);
}

/// Sorts the slice in place. Alias for [`multikey2`].
pub fn sort<T: AsRef<[u8]>>(strings: &mut [T]) {
    multikey2(strings);
}

/// Sorts `strings[low..high)`, comparing only character positions
/// `>= depth`, with the tuned multikey quicksort.
///
/// This is the range-restricted entry into [`multikey2`]; callers that have
/// already partitioned by a common prefix use it to finish a bucket without
/// re-reading the prefix.
///
/// # Panics
///
/// Panics if `low > high` or `high > strings.len()`.
///
/// # Examples
///
/// ```
/// use mksort::mkqsort;
///
/// let mut data = vec!["zz", "ac", "ab", "aa", "_"];
/// // Sort the middle range only, ignoring the first character.
/// mkqsort(&mut data, 1, 4, 1);
/// assert_eq!(data, vec!["zz", "aa", "ab", "ac", "_"]);
/// ```
pub fn mkqsort<T: AsRef<[u8]>>(strings: &mut [T], low: usize, high: usize, depth: usize) {
    assert!(
        low <= high && high <= strings.len(),
        "range {low}..{high} out of bounds for slice of length {}",
        strings.len()
    );
    ssort2(strings, low, high - low, depth);
}
