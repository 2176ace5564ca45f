//! A growable circular buffer that can be absolutely indexed.
//!
//! Every element added to a `ContinuousQueue` is numbered with an absolute
//! index that stays unique for the life of the queue. Elements can be read
//! or overwritten through that index for as long as they are resident,
//! independent of where the ring currently keeps them. Once an element is
//! removed its index is never handed out again.
//!
//! This queue has `O(1)` amortized inserts and removals from both ends of the
//! container and `O(1)` indexing. When full, an insert doubles the backing
//! array and moves the live elements back to slot 0 in logical order.
//!
//! # Feature Flags
//! The **continuous-queue** crate has the following cargo feature flags:
//!
//! - `serde`
//!   - Optional, enabled by default
//!   - Derive `Serialize` and `Deserialize` for [`Settings`], so the initial
//!     capacity can be read from a host's configuration
//!
//! # Absolute indices
//! ```
//! use continuous_queue::ContinuousQueue;
//!
//! let mut queue: ContinuousQueue<_> = ContinuousQueue::with_capacity(2);
//!
//! assert_eq!(queue.push_back("b"), 0);
//! assert_eq!(queue.push_back("c"), 1);
//! assert_eq!(queue.push_front("a"), -1);
//! assert_eq!(queue.push_back("d"), 2);
//!
//! assert_eq!(queue.beginning_index(), -1);
//! assert_eq!(queue.end_index(), 2);
//! assert_eq!(queue.get(1), Ok(&"c"));
//! ```
//!
//! # Bounds
//! By default random access excludes the two endpoints of the live range:
//! `get(beginning_index())` and `get(end_index())` fail, and the oldest and
//! newest elements are read with `front` and `back`. [`InclusiveQueue`]
//! admits the whole range.
//!
//! ```
//! use continuous_queue::{ContinuousQueue, InclusiveQueue};
//!
//! let exclusive: ContinuousQueue<_> = (0..3).collect();
//! assert!(exclusive.get(0).is_err());
//! assert_eq!(exclusive.get(1), Ok(&1));
//! assert_eq!(exclusive.front(), Ok(&0));
//!
//! let inclusive: InclusiveQueue<_> = (0..3).collect();
//! assert_eq!(inclusive.get(0), Ok(&0));
//! assert_eq!(inclusive.get(2), Ok(&2));
//! ```
//!
//! # Sliding window
//! ```
//! use continuous_queue::InclusiveQueue;
//!
//! let mut window: InclusiveQueue<u32> = InclusiveQueue::with_capacity(4);
//!
//! for sample in 0..10 {
//!     let index = window.push_back(sample);
//!     if window.len() > 3 {
//!         window.pop_front().unwrap();
//!     }
//!     assert_eq!(window.get(index), Ok(&sample));
//! }
//!
//! assert_eq!(window.beginning_index(), 7);
//! assert_eq!(window.iter().cloned().collect::<Vec<_>>(), vec![7, 8, 9]);
//! assert_eq!(window.capacity(), 4);
//! ```
//!
//! # Concurrency
//! The queue does no locking of its own. Mutation takes `&mut self`, so
//! sharing one between threads means putting it behind a lock and taking the
//! write side for every insert, removal, `set` or resize.

#![deny(missing_docs)]

mod behavior;
mod config;
mod continuous_queue;
mod cursor;
pub mod error;
mod utils;

pub use behavior::{Bounds, Exclusive, Inclusive};
pub use config::{Settings, DEFAULT_CAPACITY};
pub use continuous_queue::{ContinuousQueue, InclusiveQueue, Indexed, IntoIter, Iter, IterMut};
pub use error::{QueueError, Result};
