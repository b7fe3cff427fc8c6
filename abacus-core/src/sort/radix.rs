//! Least-significant-digit radix sort over decimal digits.
//!
//! Distributes items into ten buckets per pass, one pass per decimal
//! digit of the maximum value. Runs in O(n·k) time for k digits; each
//! pass is itself a stable distribution, which makes the whole sort
//! stable.

use tracing::instrument;

/// Sorts a slice of non-negative integers with LSB radix sort.
///
/// Returns an empty vector for empty input.
///
/// # Examples
/// ```
/// use abacus_core::radix_sort_lsb;
///
/// let sorted = radix_sort_lsb(&[170, 45, 75, 90, 2, 802, 2, 66]);
/// assert_eq!(sorted, vec![2, 2, 45, 66, 75, 90, 170, 802]);
/// ```
#[must_use]
#[instrument(level = "trace", skip(items), fields(items = items.len()))]
pub fn radix_sort_lsb(items: &[u32]) -> Vec<u32> {
    let Some(max) = items.iter().copied().max() else {
        return Vec::new();
    };

    let passes = decimal_digits(max);
    let mut current = items.to_vec();
    // The divisor is widened to u64 so the pass after the tenth digit of
    // a u32 cannot overflow it.
    let mut divisor: u64 = 1;

    for _ in 0..passes {
        let mut buckets: [Vec<u32>; 10] = std::array::from_fn(|_| Vec::new());
        for &value in &current {
            let digit = (u64::from(value) / divisor % 10) as usize;
            buckets[digit].push(value);
        }
        current = buckets.into_iter().flatten().collect();
        divisor *= 10;
    }

    current
}

/// Number of decimal digits in `value` (1 for zero).
fn decimal_digits(mut value: u32) -> u32 {
    let mut digits = 1;
    while value >= 10 {
        value /= 10;
        digits += 1;
    }
    digits
}
