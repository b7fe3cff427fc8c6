//! Counting sort: a two-pass stable sort that is efficient when the key
//! range is small compared to the number of items.
//!
//! Runs in O(n+k) time and O(n+k) auxiliary space, where
//! `k = max(key) + 1`.

use tracing::instrument;

/// Sorts a slice of non-negative integers with counting sort.
///
/// Equivalent to [`counting_sort_by_key`] with the identity key. Returns
/// an empty vector for empty input.
///
/// # Examples
/// ```
/// use abacus_core::counting_sort;
///
/// let sorted = counting_sort(&[1, 2, 3, 4, 0, 0, 1, 2, 3, 4, 10, 8, 7]);
/// assert_eq!(sorted, vec![0, 0, 1, 1, 2, 2, 3, 3, 4, 4, 7, 8, 10]);
/// ```
#[must_use]
pub fn counting_sort(items: &[u32]) -> Vec<u32> {
    counting_sort_by_key(items, |&value| value)
}

/// Sorts a slice by a non-negative integer key, stably.
///
/// The key function is evaluated exactly once per element; the key range
/// `k = max(key) + 1` is derived from those cached keys, so a key can
/// never fall outside the counting array. Elements with equal keys keep
/// their relative input order. Returns an empty vector for empty input.
///
/// # Examples
/// ```
/// use abacus_core::counting_sort_by_key;
///
/// // Tag each value with its input position to observe stability.
/// let items = [(3_u32, 'a'), (1, 'b'), (3, 'c')];
/// let sorted = counting_sort_by_key(&items, |&(key, _)| key);
/// assert_eq!(sorted, vec![(1, 'b'), (3, 'a'), (3, 'c')]);
/// ```
#[must_use]
#[instrument(level = "trace", skip(items, key), fields(items = items.len()))]
pub fn counting_sort_by_key<T, F>(items: &[T], key: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> u32,
{
    if items.is_empty() {
        return Vec::new();
    }

    let keys: Vec<usize> = items.iter().map(|item| key(item) as usize).collect();
    let range = keys.iter().copied().max().map_or(0, |max| max + 1);

    // Count occurrences per key.
    let mut positions = vec![0_usize; range];
    for &item_key in &keys {
        positions[item_key] += 1;
    }

    // Convert counts into exclusive prefix sums: positions[k] becomes the
    // output index of the first element with key k.
    let mut total = 0;
    for slot in &mut positions {
        let count = *slot;
        *slot = total;
        total += count;
    }

    // Place items in input order; bumping the slot after each placement
    // keeps equal-key elements in their original relative order.
    let mut output = items.to_vec();
    for (item, &item_key) in items.iter().zip(&keys) {
        output[positions[item_key]] = item.clone();
        positions[item_key] += 1;
    }

    output
}
