//! Stable integer sorting.
//!
//! Two distribution sorts over non-negative integers: counting sort
//! (single bucketing pass over the full key range) and least-significant
//! -digit radix sort (one pass per decimal digit). Both are stable and
//! return a freshly allocated vector.
//!
//! Non-negativity is enforced by the type system: items and keys are
//! `u32`, so the negative-value error class cannot arise.

mod counting;
mod radix;

pub use self::counting::{counting_sort, counting_sort_by_key};
pub use self::radix::radix_sort_lsb;

#[cfg(test)]
mod property;
