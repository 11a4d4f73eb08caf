//! Depth-aware insertion sort, the small-range base case of the multikey
//! quicksort.

use crate::chars::less_from;

/// Sorts `strings[low..high)` by straight insertion, comparing only
/// character positions `>= depth`.
///
/// The comparison advances one character at a time until the keys differ or
/// both are exhausted, so runs that share a long prefix past `depth` stay
/// cheap. Used by [`multikey2`](crate::multikey2) for ranges shorter than
/// eight elements, and usable on its own for any small range.
///
/// # Examples
///
/// ```
/// use mksort::insertion_sort;
///
/// let mut data = vec!["bb", "ba", "ab"];
/// // Only positions >= 1 are compared, so "ab" and "bb" tie.
/// insertion_sort(&mut data, 0, 3, 1);
/// assert_eq!(data, vec!["ba", "bb", "ab"]);
/// ```
pub fn insertion_sort<T: AsRef<[u8]>>(strings: &mut [T], low: usize, high: usize, depth: usize) {
    for i in low + 1..high {
        let mut j = i;
        while j > low && less_from(strings[j].as_ref(), strings[j - 1].as_ref(), depth) {
            strings.swap(j - 1, j);
            j -= 1;
        }
    }
}
