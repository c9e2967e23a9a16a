//! Front-to-back cursor with in-place removal.

use crate::deque::CircularDeque;
use crate::error::{DequeError, Result};

/// A single-pass cursor over a [`CircularDeque`] that can remove the element
/// it most recently yielded.
///
/// The cursor holds the deque's exclusive borrow, so nothing else can mutate
/// the deque while it is alive.  It remembers how many elements existed when
/// it was created and how far it has walked in logical positions; after a
/// removal the next element is looked up again from the deque's current
/// `head`, so shifts made by the removal never cause a skip or a repeat.
///
/// ```
/// use circular_deque::CircularDeque;
///
/// let mut deque: CircularDeque<i32> = (1..=5).collect();
/// let mut cursor = deque.cursor_mut();
/// while let Ok(&item) = cursor.next() {
///     if item == 3 {
///         cursor.remove().unwrap();
///     }
/// }
/// assert_eq!(deque.iter().copied().collect::<Vec<_>>(), vec![1, 2, 4, 5]);
/// ```
pub struct CursorMut<'a, E> {
    deque: &'a mut CircularDeque<E>,
    expected: usize,
    yielded: usize,
    next_offset: usize,
    pending: Option<usize>,
}

impl<'a, E> CursorMut<'a, E> {
    pub(crate) fn new(deque: &'a mut CircularDeque<E>) -> Self {
        let expected = deque.len();
        Self {
            deque,
            expected,
            yielded: 0,
            next_offset: 0,
            pending: None,
        }
    }

    /// Returns `true` while fewer elements have been yielded than the deque
    /// held when the cursor was created.
    #[inline]
    pub fn has_next(&self) -> bool {
        self.yielded < self.expected
    }

    /// Number of elements still to be yielded.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.expected - self.yielded
    }

    /// Returns the element the next call to [`next`](CursorMut::next) would
    /// yield, without advancing.
    pub fn peek(&self) -> Option<&E> {
        if self.has_next() {
            self.deque.get(self.next_offset)
        } else {
            None
        }
    }

    /// Yields the next element and marks it as removable.
    ///
    /// Fails with [`DequeError::NoMoreElements`] once every element has been
    /// yielded.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Result<&E> {
        if !self.has_next() {
            return Err(DequeError::NoMoreElements);
        }
        let offset = self.next_offset;
        let item = self
            .deque
            .get(offset)
            .ok_or(DequeError::NoMoreElements)?;
        self.pending = Some(offset);
        self.next_offset += 1;
        self.yielded += 1;
        Ok(item)
    }

    /// Removes and returns the element last yielded by [`next`](CursorMut::next).
    ///
    /// Fails with [`DequeError::InvalidState`] before the first `next` or when
    /// called twice without an intervening `next`.
    pub fn remove(&mut self) -> Result<E> {
        let offset = self.pending.ok_or(DequeError::InvalidState)?;
        let index = self.deque.physical(offset);
        let value = self.deque.delete_at(index)?;
        self.pending = None;
        // Everything after the gap moved one logical position toward the front.
        self.next_offset -= 1;
        Ok(value)
    }
}
