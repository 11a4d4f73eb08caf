use mksort::{char_at, insertion_sort};

#[test]
fn test_char_at_pads_with_zero() {
    assert_eq!(char_at(b"abc", 0), b'a');
    assert_eq!(char_at(b"abc", 2), b'c');
    assert_eq!(char_at(b"abc", 3), 0);
    assert_eq!(char_at(b"", 0), 0);
}

#[test]
fn test_comparison_orders_prefixes_first() {
    let mut data = vec!["abc", "ab", "a", ""];
    insertion_sort(&mut data, 0, 4, 0);
    assert_eq!(data, vec!["", "a", "ab", "abc"]);
}

#[test]
fn test_comparison_ignores_skipped_prefix() {
    // Positions before `depth` do not participate.
    let mut data = vec!["aab", "zza"];
    insertion_sort(&mut data, 0, 2, 2);
    assert_eq!(data, vec!["zza", "aab"]);
}

#[test]
fn test_zero_padded_ties_leave_order_alone() {
    // "x" and "x\0" compare equal under zero padding; straight insertion
    // never swaps equals, so both orders come through untouched.
    let mut data = vec!["x\0", "x"];
    insertion_sort(&mut data, 0, 2, 0);
    assert_eq!(data, vec!["x\0", "x"]);

    let mut data = vec!["x", "x\0"];
    insertion_sort(&mut data, 0, 2, 0);
    assert_eq!(data, vec!["x", "x\0"]);
}
