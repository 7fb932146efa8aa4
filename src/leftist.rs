//! Leftist-heap mergeable priority queue.
//!
//! A leftist heap is a heap-ordered binary tree in which every node's left
//! subtree has a null-path length (rank) at least that of its right subtree.
//! The shortest path to a missing child therefore always runs down the right
//! spine, which bounds the spine at `log₂(n + 1)` nodes and makes the union
//! of two heaps (**meld**) logarithmic. Every mutating operation reduces
//! to meld.
//!
//! # Time Complexity
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | `push`    | O(log n)   |
//! | `pop`     | O(log n)   |
//! | `merge`   | O(log n)   |
//! | `top`     | O(1)       |
//! | `clone`   | O(n)       |
//!
//! # Failure safety
//!
//! The ordering predicate is a caller-supplied [`Comparator`] whose every
//! invocation may fail. `push`, `pop`, and `merge` are transactional: a
//! comparator failure is returned as [`HeapError::OperationFailed`] and
//! every participating heap is left exactly as it was, with no nodes leaked.
//! The meld algorithm makes this cheap: a frame commits no structural change
//! until its recursive call has succeeded, and a failed call hands both
//! operand trees back to the caller intact.

use crate::default::NaturalOrder;
use crate::rank::{self, Rank};
use crate::traits::{Comparator, HeapError};
use std::fmt;
use std::mem;

type Link<T> = Option<Box<Node<T>>>;

#[derive(Clone)]
struct Node<T> {
    item: T,
    left: Link<T>,
    right: Link<T>,
    rank: Rank,
}

impl<T> Node<T> {
    fn singleton(item: T) -> Box<Self> {
        Box::new(Node {
            item,
            left: None,
            right: None,
            rank: 1,
        })
    }
}

fn rank_of<T>(link: &Link<T>) -> Rank {
    link.as_deref().map_or(0, |node| node.rank)
}

/// A failed meld: the comparator error together with both operand trees,
/// handed back to the caller in the order they were passed in.
struct Unmelded<T, E> {
    a: Link<T>,
    b: Link<T>,
    error: E,
}

/// Unions two leftist trees under `comparator`.
///
/// Each frame compares the two roots before anything moves, then detaches
/// only the winner's right subtree for the recursive call. Structural
/// commits (reattach, leftist swap, rank update) happen strictly after that
/// call returns `Ok`; on `Err` the frame reattaches the detached subtree and
/// restores the operand order, so the error reaches the caller with both
/// trees in exactly their original shape.
///
/// Recursion runs down right spines only, so the depth is O(log n).
fn meld<T, C>(comparator: &C, a: Link<T>, b: Link<T>) -> Result<Link<T>, Unmelded<T, C::Error>>
where
    C: Comparator<T>,
{
    let Some(a) = a else { return Ok(b) };
    let Some(b) = b else { return Ok(Some(a)) };

    // Ties keep `a` as the winner.
    let (mut winner, loser, swapped) = match comparator.less(&a.item, &b.item) {
        Ok(true) => (b, a, true),
        Ok(false) => (a, b, false),
        Err(error) => {
            return Err(Unmelded {
                a: Some(a),
                b: Some(b),
                error,
            })
        }
    };

    match meld(comparator, winner.right.take(), Some(loser)) {
        Ok(subtree) => {
            winner.right = subtree;
            if rank_of(&winner.left) < rank_of(&winner.right) {
                mem::swap(&mut winner.left, &mut winner.right);
            }
            winner.rank = rank::checked_increment(rank_of(&winner.right));
            Ok(Some(winner))
        }
        Err(Unmelded {
            a: detached,
            b: loser,
            error,
        }) => {
            winner.right = detached;
            let (a, b) = if swapped {
                (loser, Some(winner))
            } else {
                (Some(winner), loser)
            };
            Err(Unmelded { a, b, error })
        }
    }
}

/// A mergeable max-priority queue backed by a leftist heap.
///
/// The ordering is supplied by a [`Comparator`], which defaults to
/// [`NaturalOrder`] (max-queue over `T: Ord`, comparisons never fail).
/// Because a comparator may fail on any invocation, the mutating operations
/// return `Result`; see the [module docs](self) for the rollback guarantees.
///
/// # Example
///
/// ```
/// use leftist_heap::LeftistHeap;
///
/// let mut heap = LeftistHeap::new();
/// for n in [5, 3, 8, 1] {
///     heap.push(n).unwrap();
/// }
///
/// assert_eq!(heap.top().unwrap(), &8);
/// assert_eq!(heap.pop().unwrap(), 8);
/// assert_eq!(heap.top().unwrap(), &5);
/// assert_eq!(heap.len(), 3);
///
/// let mut other = LeftistHeap::new();
/// other.push(15).unwrap();
/// other.push(25).unwrap();
///
/// // O(log n) union; `other` is drained into `heap`.
/// heap.merge(&mut other).unwrap();
/// assert_eq!(heap.len(), 5);
/// assert_eq!(heap.top().unwrap(), &25);
/// assert!(other.is_empty());
/// ```
pub struct LeftistHeap<T, C = NaturalOrder> {
    root: Link<T>,
    len: usize,
    comparator: C,
}

impl<T> LeftistHeap<T, NaturalOrder> {
    /// Creates an empty max-heap over `T: Ord`.
    ///
    /// Pinned to [`NaturalOrder`] so the comparator type can be inferred,
    /// like `HashMap::new` pins `RandomState`; use
    /// [`with_comparator`](Self::with_comparator) for any other ordering.
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }
}

impl<T, C> LeftistHeap<T, C> {
    /// Creates an empty heap ordered by `comparator`.
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            root: None,
            len: 0,
            comparator,
        }
    }

    /// Returns the number of elements in the heap.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the heap contains no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a reference to the greatest element, or `None` if the heap is
    /// empty.
    pub fn peek(&self) -> Option<&T> {
        self.root.as_deref().map(|node| &node.item)
    }

    /// Structural self-check: element count, leftist property, and rank
    /// correctness. Deliberately never consults the comparator, so it is
    /// valid to run right after a rolled-back operation.
    #[cfg(debug_assertions)]
    fn debug_validate(&self) {
        let mut count = 0usize;
        let mut pending = Vec::new();
        pending.extend(self.root.as_deref());
        while let Some(node) = pending.pop() {
            count += 1;
            assert!(
                rank_of(&node.left) >= rank_of(&node.right),
                "leftist property violated"
            );
            assert_eq!(node.rank, rank_of(&node.right) + 1, "stale rank");
            pending.extend(node.left.as_deref());
            pending.extend(node.right.as_deref());
        }
        assert_eq!(count, self.len, "len does not match reachable nodes");
    }

    #[cfg(not(debug_assertions))]
    #[inline]
    fn debug_validate(&self) {}
}

impl<T, C: Comparator<T>> LeftistHeap<T, C> {
    /// Returns a reference to the greatest element.
    ///
    /// # Errors
    ///
    /// [`HeapError::EmptyContainer`] if the heap holds no elements.
    pub fn top(&self) -> Result<&T, HeapError<C::Error>> {
        self.peek().ok_or(HeapError::EmptyContainer)
    }

    /// Pushes `item` onto the heap.
    ///
    /// # Errors
    ///
    /// [`HeapError::OperationFailed`] if the comparator fails. The heap is
    /// left untouched; the rejected `item` is dropped.
    pub fn push(&mut self, item: T) -> Result<(), HeapError<C::Error>> {
        match meld(
            &self.comparator,
            self.root.take(),
            Some(Node::singleton(item)),
        ) {
            Ok(root) => {
                self.root = root;
                self.len += 1;
                Ok(())
            }
            Err(Unmelded { a, error, .. }) => {
                // `a` is the original tree; the rejected singleton in the
                // other operand drops here.
                self.root = a;
                Err(HeapError::OperationFailed(error))
            }
        }
    }

    /// Removes and returns the greatest element.
    ///
    /// # Errors
    ///
    /// [`HeapError::EmptyContainer`] if the heap holds no elements;
    /// [`HeapError::OperationFailed`] if the comparator fails while melding
    /// the root's children, in which case the root is reassembled and
    /// nothing is removed.
    pub fn pop(&mut self) -> Result<T, HeapError<C::Error>> {
        let mut old = self.root.take().ok_or(HeapError::EmptyContainer)?;
        match meld(&self.comparator, old.left.take(), old.right.take()) {
            Ok(root) => {
                self.root = root;
                self.len -= 1;
                self.debug_validate();
                let Node { item, .. } = *old;
                Ok(item)
            }
            Err(Unmelded { a, b, error }) => {
                old.left = a;
                old.right = b;
                self.root = Some(old);
                Err(HeapError::OperationFailed(error))
            }
        }
    }

    /// Moves every element of `other` into `self`, leaving `other` empty.
    ///
    /// The union is ordered by `self`'s comparator and costs O(log n).
    /// Merging an empty heap is a no-op.
    ///
    /// # Errors
    ///
    /// [`HeapError::OperationFailed`] if the comparator fails. Both heaps
    /// are left exactly as before the call; `other` keeps its elements.
    pub fn merge(&mut self, other: &mut Self) -> Result<(), HeapError<C::Error>> {
        if other.root.is_none() {
            return Ok(());
        }
        match meld(&self.comparator, self.root.take(), other.root.take()) {
            Ok(root) => {
                self.root = root;
                self.len += mem::replace(&mut other.len, 0);
                Ok(())
            }
            Err(Unmelded { a, b, error }) => {
                self.root = a;
                other.root = b;
                Err(HeapError::OperationFailed(error))
            }
        }
    }
}

impl<T, C: Default> Default for LeftistHeap<T, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T: Clone, C: Clone> Clone for LeftistHeap<T, C> {
    /// Structure-preserving deep copy: every node's item and rank are
    /// duplicated, sharing nothing with the source. Clone-assignment via
    /// `clone_from` replaces the destination's old tree only after the copy
    /// is complete.
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            len: self.len,
            comparator: self.comparator.clone(),
        }
    }
}

impl<T, C> Drop for LeftistHeap<T, C> {
    fn drop(&mut self) {
        // Only the right spine is rank-bounded; the left spine can be as
        // deep as the element count, so the default recursive drop glue
        // could overflow the stack on large heaps. Tear down iteratively.
        let mut pending = Vec::new();
        pending.extend(self.root.take());
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

impl<T, C> fmt::Debug for LeftistHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LeftistHeap")
            .field("len", &self.len)
            .finish_non_exhaustive()
    }
}
