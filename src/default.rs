//! Stock comparators.
//!
//! [`NaturalOrder`] makes the heap behave like a plain max-priority queue
//! over any `T: Ord`, with comparisons that can never fail. [`ReverseOrder`]
//! flips an inner comparator to turn the max-queue into a min-queue, and
//! [`FnOrder`] adapts a plain closure predicate.

use crate::traits::Comparator;
use core::convert::Infallible;

/// A zero-sized comparator that delegates to `T`'s [`Ord`] implementation.
///
/// This is the default comparator type parameter of
/// [`LeftistHeap`](crate::LeftistHeap), giving max-heap behavior out of the
/// box. Its comparisons never fail.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T: Ord> Comparator<T> for NaturalOrder {
    type Error = Infallible;

    fn less(&self, a: &T, b: &T) -> Result<bool, Infallible> {
        Ok(a < b)
    }
}

/// A comparator that reverses the ordering of an inner comparator.
///
/// Wrapping the heap's comparator in `ReverseOrder` turns the max-queue into
/// a min-queue, much like `std::cmp::Reverse` does for `BinaryHeap`.
///
/// # Example
///
/// ```
/// use leftist_heap::{LeftistHeap, NaturalOrder, ReverseOrder};
///
/// let mut heap = LeftistHeap::with_comparator(ReverseOrder(NaturalOrder));
/// for n in [4, 1, 3] {
///     heap.push(n).unwrap();
/// }
/// assert_eq!(heap.pop().unwrap(), 1);
/// assert_eq!(heap.pop().unwrap(), 3);
/// ```
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct ReverseOrder<C>(pub C);

impl<T: ?Sized, C: Comparator<T>> Comparator<T> for ReverseOrder<C> {
    type Error = C::Error;

    fn less(&self, a: &T, b: &T) -> Result<bool, C::Error> {
        self.0.less(b, a)
    }
}

/// Adapts a plain `Fn(&T, &T) -> bool` predicate into an infallible
/// comparator.
///
/// The predicate must be a strict weak ordering, with `true` meaning the
/// first argument orders before the second.
///
/// # Example
///
/// ```
/// use leftist_heap::{FnOrder, LeftistHeap};
///
/// // Order strings by length; the longest is on top.
/// let mut heap = LeftistHeap::with_comparator(FnOrder(|a: &&str, b: &&str| a.len() < b.len()));
/// heap.push("ab").unwrap();
/// heap.push("abcd").unwrap();
/// heap.push("a").unwrap();
/// assert_eq!(heap.top().unwrap(), &"abcd");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct FnOrder<F>(pub F);

impl<T: ?Sized, F: Fn(&T, &T) -> bool> Comparator<T> for FnOrder<F> {
    type Error = Infallible;

    fn less(&self, a: &T, b: &T) -> Result<bool, Infallible> {
        Ok((self.0)(a, b))
    }
}
