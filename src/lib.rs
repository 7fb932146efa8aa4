//! Mergeable priority queue backed by a leftist heap.
//!
//! This crate provides a max-priority queue whose distinguishing operation
//! is an O(log n) **merge** (meld) of two queues, built on the classic
//! leftist-heap structure.
//!
//! # Features
//!
//! - **O(log n) push, pop, and merge**; O(1) top; merge drains the other
//!   queue rather than copying elements
//! - **Caller-supplied ordering**: the queue is generic over a
//!   [`Comparator`], defaulting to [`NaturalOrder`] (plain `Ord` max-queue)
//! - **Fallible comparisons with strong rollback**: a comparator may fail on
//!   any invocation; `push`, `pop`, and `merge` either complete fully or
//!   leave every participating queue exactly as it was, with no nodes
//!   leaked
//!
//! # Example
//!
//! ```rust
//! use leftist_heap::LeftistHeap;
//!
//! let mut tasks = LeftistHeap::new();
//! tasks.push(3).unwrap();
//! tasks.push(8).unwrap();
//!
//! let mut backlog = LeftistHeap::new();
//! backlog.push(5).unwrap();
//!
//! tasks.merge(&mut backlog).unwrap();
//! assert_eq!(tasks.pop().unwrap(), 8);
//! assert_eq!(tasks.len(), 2);
//! assert!(backlog.is_empty());
//! ```
//!
//! Custom and fallible orderings implement [`Comparator`] directly; see its
//! documentation for a comparator that refuses to rank NaN readings. The
//! queue converts such failures into [`HeapError::OperationFailed`] after
//! rolling the operation back, so the queue stays usable.

mod default;
mod leftist;
mod rank;
mod traits;

pub use default::{FnOrder, NaturalOrder, ReverseOrder};
pub use leftist::LeftistHeap;
pub use traits::{Comparator, HeapError};
