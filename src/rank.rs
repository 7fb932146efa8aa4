//! Null-path-length type for leftist-tree nodes.
//!
//! # Why u8?
//!
//! The null-path length (the "rank") of a node is `1 +` the length of the
//! shortest path from it to a missing child. In a leftist tree that shortest
//! path always runs down the right spine, so the rank of a node over `n`
//! elements is bounded by `log₂(n + 1)`:
//!
//! - 2⁶⁴ elements → max rank ~64
//! - 2²⁵⁵ elements → max rank 255
//!
//! `u8` therefore covers heaps far larger than could ever fit in memory
//! while saving 7 bytes per node over `usize` on 64-bit systems, and the
//! smaller field often eliminates struct padding on top of that.
//!
//! # Runtime checks
//!
//! [`checked_increment`] is the one place ranks grow; it panics on overflow,
//! which would indicate a bug since exceeding it is mathematically
//! impossible with valid heap operations.

/// Node rank: the null-path length. A missing child has rank 0; a leaf has
/// rank 1.
pub(crate) type Rank = u8;

/// Increment a rank, panicking on overflow.
///
/// # Panics
///
/// Panics if `rank == u8::MAX`, which cannot happen below 2²⁵⁵ elements.
#[inline]
pub(crate) fn checked_increment(rank: Rank) -> Rank {
    rank.checked_add(1).expect(
        "rank overflow: impossible since rank is bounded by log₂(n + 1) \
         and u8::MAX (255) covers heaps with up to 2²⁵⁵ elements",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn increments() {
        assert_eq!(checked_increment(0), 1);
        assert_eq!(checked_increment(64), 65);
    }

    #[test]
    #[should_panic(expected = "rank overflow")]
    fn overflow_panics() {
        checked_increment(Rank::MAX);
    }
}
