//! # Circular Deque
//!
//! A double-ended queue backed by a growable circular buffer, with a cursor that
//! can remove elements in place while walking the queue.
//!
//! ## Key Features
//!
//! * **O(1) ends:** push and pop at either end move only the `head`/`tail` cursors.
//! * **Doubling growth:** when an insertion fills the buffer it doubles and is
//!   re-linearized so the front sits at slot 0. Capacity never shrinks.
//! * **No stale slots:** removed elements are dropped immediately; empty slots hold `None`.
//! * **Cursor removal:** [`CursorMut`] yields elements front to back and can remove
//!   the last one it yielded. Interior removal shifts the nearer run by one slot.
//! * **Interoperability:** [`CircularDeque`] and `std::collections::VecDeque` both
//!   implement the [`AnyDeque`] trait.
//!
//! ## Errors
//!
//! Operations that can fail return [`Result`] with a [`DequeError`] and leave the
//! deque unchanged on failure.
//!
//! ## Examples
//!
//! ```rust
//! use circular_deque::{CircularDeque, DequeError};
//!
//! let mut deque = CircularDeque::new();
//! deque.push_back(2);
//! deque.push_back(3);
//! deque.push_front(1);
//!
//! assert_eq!(deque.front(), Ok(&1));
//! assert_eq!(deque.back(), Ok(&3));
//! assert!(deque.contains(&2));
//!
//! assert_eq!(deque.pop_front(), Ok(1));
//! assert_eq!(deque.pop_back(), Ok(3));
//! assert_eq!(deque.pop_back(), Ok(2));
//! assert_eq!(deque.pop_back(), Err(DequeError::EmptyCollection));
//! ```
//!
//! ### Removing while iterating
//!
//! ```rust
//! use circular_deque::CircularDeque;
//!
//! let mut deque: CircularDeque<u32> = (1..=10).collect();
//! let mut cursor = deque.cursor_mut();
//! while let Ok(&n) = cursor.next() {
//!     if n % 3 == 0 {
//!         cursor.remove().unwrap();
//!     }
//! }
//! assert_eq!(deque.len(), 7);
//! assert!(!deque.contains(&6));
//! ```

// --- Module Declarations ---

pub mod cursor;
pub mod deque;
pub mod error;

// --- Re-exports ---

pub use cursor::CursorMut;
pub use deque::{AnyDeque, CircularDeque, DEFAULT_CAPACITY, IntoIter, Iter, MIN_CAPACITY};
pub use error::{DequeError, Result};
