//! Burstsort: a trie-bucketing string sort.
//!
//! Keys are distributed into a trie keyed one byte per level. Each trie
//! slot holds a bucket of element indices until the bucket outgrows the
//! burst limit, at which point it "bursts" into a child node and its
//! contents are redistributed on the next byte. Keys exhausted at a node
//! (their length equals the node's depth) land in that node's null bucket;
//! such keys are fully equal to each other and precede every sibling
//! bucket. An in-order traversal then yields the sorted order: buckets are
//! finished with the multikey quicksort at the bucket's depth, and the
//! resulting index order is applied to the slice as a permutation.
//!
//! The trie keeps whole cache lines of sibling slots together, which is
//! where the algorithm's locality advantage over pointer-chasing
//! comparison sorts comes from on large inputs.

use cuneiform::cuneiform;

use crate::multikey::mkqsort;

/// Bucket size at which a bucket bursts into a child node.
const BURST_LIMIT: usize = 8192;
/// One slot per byte value.
const FANOUT: usize = 256;

enum Slot {
    Empty,
    Bucket(Vec<usize>),
    Child(Box<Node>),
}

// Cache-aligned so a node's slot table starts on a line boundary.
#[cuneiform]
struct Node {
    /// Indices of keys whose length equals this node's depth.
    null_bucket: Vec<usize>,
    slots: [Slot; FANOUT],
}

impl Node {
    fn new() -> Node {
        Node {
            null_bucket: Vec::new(),
            slots: std::array::from_fn(|_| Slot::Empty),
        }
    }

    fn insert<T: AsRef<[u8]>>(&mut self, strings: &[T], index: usize, depth: usize) {
        let key = strings[index].as_ref();
        let Some(&c) = key.get(depth) else {
            self.null_bucket.push(index);
            return;
        };
        let slot = &mut self.slots[c as usize];
        match slot {
            Slot::Empty => *slot = Slot::Bucket(vec![index]),
            Slot::Child(child) => child.insert(strings, index, depth + 1),
            Slot::Bucket(bucket) => {
                bucket.push(index);
                if bucket.len() > BURST_LIMIT {
                    let pending = std::mem::take(bucket);
                    let mut child = Node::new();
                    for moved in pending {
                        child.insert(strings, moved, depth + 1);
                    }
                    *slot = Slot::Child(Box::new(child));
                }
            }
        }
    }

    /// Appends this subtree's indices to `out` in sorted order, draining
    /// the buckets. `depth` is the node's depth in the trie.
    fn emit<T: AsRef<[u8]>>(&mut self, strings: &[T], depth: usize, out: &mut Vec<usize>) {
        out.append(&mut self.null_bucket);
        for slot in &mut self.slots {
            match slot {
                Slot::Empty => {}
                Slot::Bucket(bucket) => {
                    // Members agree on every byte up to and including
                    // `depth`, so only the suffix past it needs sorting.
                    sort_bucket(strings, bucket, depth + 1);
                    out.append(bucket);
                }
                Slot::Child(child) => child.emit(strings, depth + 1, out),
            }
        }
    }
}

/// A bucket member viewed as its key, so the bucket can be fed straight to
/// [`mkqsort`] and the index order read back out afterwards.
struct BucketEntry<'a> {
    key: &'a [u8],
    index: usize,
}

impl AsRef<[u8]> for BucketEntry<'_> {
    fn as_ref(&self) -> &[u8] {
        self.key
    }
}

fn sort_bucket<T: AsRef<[u8]>>(strings: &[T], bucket: &mut [usize], depth: usize) {
    if bucket.len() < 2 {
        return;
    }
    let mut entries: Vec<BucketEntry<'_>> = bucket
        .iter()
        .map(|&index| BucketEntry {
            key: strings[index].as_ref(),
            index,
        })
        .collect();
    let len = entries.len();
    mkqsort(&mut entries, 0, len, depth);
    for (slot, entry) in bucket.iter_mut().zip(&entries) {
        *slot = entry.index;
    }
}

/// Applies the traversal order to the slice: position `i` ends up holding
/// the element `order[i]` points at.
///
/// Each permutation cycle is walked once, swap by swap, with already-placed
/// positions tracked in a bitmap; the displaced element rides along the
/// cycle until the walk closes back on its start, so the whole pass costs
/// at most `n - 1` swaps.
fn place_in_order<T>(strings: &mut [T], order: &[usize]) {
    let mut placed = vec![false; order.len()];
    for start in 0..order.len() {
        if placed[start] {
            continue;
        }
        let mut dst = start;
        let mut src = order[dst];
        while src != start {
            strings.swap(dst, src);
            placed[dst] = true;
            dst = src;
            src = order[dst];
        }
        placed[dst] = true;
    }
}

/// Sorts the slice in place with burstsort.
///
/// Same contract as [`multikey2`](crate::multikey2): in place, not stable,
/// byte-lexicographic order with virtual zero padding. Unlike the
/// quicksorts this allocates: the trie, an index per element, and a
/// placement flag per element live for the duration of the call.
///
/// # Examples
///
/// ```
/// use mksort::burstsort;
///
/// let mut data = vec!["banana", "", "apple", "app"];
/// burstsort(&mut data);
/// assert_eq!(data, vec!["", "app", "apple", "banana"]);
/// ```
pub fn burstsort<T: AsRef<[u8]>>(strings: &mut [T]) {
    if strings.len() < 2 {
        return;
    }
    let mut root = Node::new();
    for index in 0..strings.len() {
        root.insert(&*strings, index, 0);
    }
    let mut order = Vec::with_capacity(strings.len());
    root.emit(&*strings, 0, &mut order);
    place_in_order(strings, &order);
}
