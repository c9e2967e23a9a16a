//! Double-ended queue backed by a growable circular buffer.
//!
//! # Layout
//! ```text
//! |  5 |  6 |    |    |  1 |  2 |  3 |  4 |
//!        |              |                  |--> capacity
//!        |              |---------------------> head
//!        |------------------------------------> tail
//! ```
//! Live elements occupy the slots reached by walking `len` steps forward from
//! `head`, wrapping modulo `capacity`, and ending at `tail`.  Every other slot is
//! `None`, so removed elements are dropped immediately instead of lingering in
//! the buffer.
//!
//! # Growth
//! An insertion that leaves `len == capacity` doubles the buffer before
//! returning.  The old contents are rotated so the logical front lands at
//! physical slot 0.  Capacity never shrinks.

use core::fmt;
use std::collections::VecDeque;

use crate::cursor::CursorMut;
use crate::error::{DequeError, Result};

/// Number of slots allocated by [`CircularDeque::new`].
pub const DEFAULT_CAPACITY: usize = 10;

/// Smallest buffer [`CircularDeque::with_capacity`] will allocate.
pub const MIN_CAPACITY: usize = 1;

// ─── AnyDeque ─────────────────────────────────────────────────────────────────

/// An object-safe abstraction over double-ended queue types.
///
/// Implemented by both `VecDeque<T>` and [`CircularDeque<T>`] so callers can
/// drive either through `&mut dyn AnyDeque<T>`.
pub trait AnyDeque<T> {
    /// Returns the number of elements in the deque.
    fn len(&self) -> usize;
    /// Returns `true` if the deque contains no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Appends an element to the back.
    fn push_back(&mut self, item: T);
    /// Prepends an element to the front.
    fn push_front(&mut self, item: T);
    /// Removes and returns the back element.
    fn pop_back(&mut self) -> Result<T>;
    /// Removes and returns the front element.
    fn pop_front(&mut self) -> Result<T>;
    /// Returns the front element without removing it.
    fn front(&self) -> Result<&T>;
    /// Returns the back element without removing it.
    fn back(&self) -> Result<&T>;
    /// Returns `true` if any element compares equal to `item`.
    fn contains(&self, item: &T) -> bool
    where
        T: PartialEq;
    /// Removes all elements.
    fn clear(&mut self);
}

impl<T> AnyDeque<T> for VecDeque<T> {
    fn len(&self) -> usize {
        self.len()
    }
    fn push_back(&mut self, item: T) {
        self.push_back(item);
    }
    fn push_front(&mut self, item: T) {
        self.push_front(item);
    }
    fn pop_back(&mut self) -> Result<T> {
        self.pop_back().ok_or(DequeError::EmptyCollection)
    }
    fn pop_front(&mut self) -> Result<T> {
        self.pop_front().ok_or(DequeError::EmptyCollection)
    }
    fn front(&self) -> Result<&T> {
        self.front().ok_or(DequeError::EmptyCollection)
    }
    fn back(&self) -> Result<&T> {
        self.back().ok_or(DequeError::EmptyCollection)
    }
    fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.contains(item)
    }
    fn clear(&mut self) {
        self.clear();
    }
}

/// A double-ended queue stored in a resizable ring of `Option<E>` slots.
///
/// Front and back operations are O(1) (amortized for pushes, since a full
/// buffer doubles).  Removing an interior element through
/// [`CursorMut::remove`] or [`remove`](CircularDeque::remove) shifts the
/// elements between the gap and the end of its run, so it costs
/// O(distance to that end).
///
/// There is no internal synchronization: mutation needs `&mut self`, and the
/// cursor holds that exclusive borrow for as long as it lives.
#[derive(Clone)]
pub struct CircularDeque<E> {
    buf: Vec<Option<E>>,
    capacity: usize,
    head: usize,
    tail: usize,
    len: usize,
}

impl<E> AnyDeque<E> for CircularDeque<E> {
    fn len(&self) -> usize {
        self.len
    }
    fn push_back(&mut self, item: E) {
        self.push_back(item);
    }
    fn push_front(&mut self, item: E) {
        self.push_front(item);
    }
    fn pop_back(&mut self) -> Result<E> {
        self.pop_back()
    }
    fn pop_front(&mut self) -> Result<E> {
        self.pop_front()
    }
    fn front(&self) -> Result<&E> {
        self.front()
    }
    fn back(&self) -> Result<&E> {
        self.back()
    }
    fn contains(&self, item: &E) -> bool
    where
        E: PartialEq,
    {
        self.contains(item)
    }
    fn clear(&mut self) {
        self.clear();
    }
}

fn empty_slots<E>(capacity: usize) -> Vec<Option<E>> {
    let mut slots = Vec::with_capacity(capacity);
    slots.resize_with(capacity, || None);
    slots
}

impl<E> CircularDeque<E> {
    /// Creates an empty deque with [`DEFAULT_CAPACITY`] slots.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty deque with at least `capacity` slots
    /// (never fewer than [`MIN_CAPACITY`]).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(MIN_CAPACITY);
        Self {
            buf: empty_slots(capacity),
            capacity,
            head: 0,
            tail: 0,
            len: 0,
        }
    }

    /// Returns the number of elements currently in the deque.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the deque contains no elements.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots in the ring buffer.
    ///
    /// Always strictly greater than [`len`](CircularDeque::len).
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline(always)]
    fn wrap_add(&self, idx: usize, add: usize) -> usize {
        (idx + add) % self.capacity
    }

    #[inline(always)]
    fn wrap_sub(&self, idx: usize, sub: usize) -> usize {
        (idx + self.capacity - sub) % self.capacity
    }

    /// Maps a logical offset from the front to its physical slot.
    #[inline(always)]
    pub(crate) fn physical(&self, offset: usize) -> usize {
        self.wrap_add(self.head, offset)
    }

    /// Maps a physical slot back to its logical offset, if the slot is live.
    fn logical(&self, index: usize) -> Option<usize> {
        if index >= self.capacity {
            return None;
        }
        let offset = self.wrap_sub(index, self.head);
        (offset < self.len).then_some(offset)
    }

    /// Appends `value` to the back of the deque, growing the buffer if it fills.
    pub fn push_back(&mut self, value: E) {
        if self.len == 0 {
            // Start mid-buffer so early pushes on either end don't wrap.
            self.head = self.capacity / 2;
            self.tail = self.head;
        } else {
            self.tail = self.wrap_add(self.tail, 1);
        }
        self.buf[self.tail] = Some(value);
        self.len += 1;
        self.grow_if_full();
    }

    /// Prepends `value` to the front of the deque, growing the buffer if it fills.
    pub fn push_front(&mut self, value: E) {
        if self.len == 0 {
            self.head = self.capacity / 2;
            self.tail = self.head;
        } else {
            self.head = self.wrap_sub(self.head, 1);
        }
        self.buf[self.head] = Some(value);
        self.len += 1;
        self.grow_if_full();
    }

    #[inline(always)]
    fn grow_if_full(&mut self) {
        if self.len == self.capacity {
            self.grow();
        }
    }

    /// Doubles the buffer and re-linearizes it so the front sits at slot 0.
    ///
    /// Only called on a full buffer, where every slot is live and rotating by
    /// `head` puts the elements in logical order.
    #[inline(never)]
    fn grow(&mut self) {
        let new_capacity = self.capacity * 2;
        log::trace!(
            "growing circular deque from {} to {} slots",
            self.capacity,
            new_capacity
        );
        self.buf.rotate_left(self.head);
        self.buf.resize_with(new_capacity, || None);
        self.capacity = new_capacity;
        self.head = 0;
        self.tail = self.len - 1;
    }

    /// Removes and returns the front element.
    ///
    /// Fails with [`DequeError::EmptyCollection`] if the deque is empty.
    pub fn pop_front(&mut self) -> Result<E> {
        if self.len == 0 {
            return Err(DequeError::EmptyCollection);
        }
        let value = self.buf[self.head]
            .take()
            .ok_or(DequeError::EmptyCollection)?;
        self.head = self.wrap_add(self.head, 1);
        self.len -= 1;
        Ok(value)
    }

    /// Removes and returns the back element.
    ///
    /// Fails with [`DequeError::EmptyCollection`] if the deque is empty.
    pub fn pop_back(&mut self) -> Result<E> {
        if self.len == 0 {
            return Err(DequeError::EmptyCollection);
        }
        let value = self.buf[self.tail]
            .take()
            .ok_or(DequeError::EmptyCollection)?;
        self.tail = self.wrap_sub(self.tail, 1);
        self.len -= 1;
        Ok(value)
    }

    /// Returns the front element without removing it.
    pub fn front(&self) -> Result<&E> {
        if self.len == 0 {
            return Err(DequeError::EmptyCollection);
        }
        self.buf[self.head]
            .as_ref()
            .ok_or(DequeError::EmptyCollection)
    }

    /// Returns the back element without removing it.
    pub fn back(&self) -> Result<&E> {
        if self.len == 0 {
            return Err(DequeError::EmptyCollection);
        }
        self.buf[self.tail]
            .as_ref()
            .ok_or(DequeError::EmptyCollection)
    }

    /// Returns the element at logical `index` (0 is the front), or `None`.
    #[inline(always)]
    pub fn get(&self, index: usize) -> Option<&E> {
        if index < self.len {
            self.buf[self.physical(index)].as_ref()
        } else {
            None
        }
    }

    /// Returns `true` if any element compares equal to `value`.  O(len).
    pub fn contains(&self, value: &E) -> bool
    where
        E: PartialEq,
    {
        self.iter().any(|item| item == value)
    }

    /// Drops every element.  Capacity is kept.
    pub fn clear(&mut self) {
        for offset in 0..self.len {
            let idx = self.physical(offset);
            self.buf[idx] = None;
        }
        self.len = 0;
    }

    /// Removes and returns the element at logical `index`.
    ///
    /// Fails with [`DequeError::InvalidArgument`] if `index >= len()`.
    pub fn remove(&mut self, index: usize) -> Result<E> {
        if index >= self.len {
            return Err(DequeError::InvalidArgument { index });
        }
        self.delete_at(self.physical(index))
    }

    /// Keeps only the elements for which `keep` returns `true`, in order.
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&E) -> bool,
    {
        let mut cursor = self.cursor_mut();
        while let Ok(item) = cursor.next() {
            if !keep(item) {
                // next() just succeeded, so there is always an element to remove.
                let _removed = cursor.remove();
            }
        }
    }

    /// Removes the element stored in physical slot `index`.
    ///
    /// Ends are popped directly.  An interior gap is closed by shifting the
    /// part of its contiguous run that lies between the gap and the run's end:
    ///
    /// * unwrapped (`head <= tail`): the shorter side of `head..=tail` moves;
    /// * wrapped, gap in `head..capacity`: `head..index` moves right, `head` advances;
    /// * wrapped, gap in `0..=tail`: `index+1..=tail` moves left, `tail` retreats.
    pub(crate) fn delete_at(&mut self, index: usize) -> Result<E> {
        if self.logical(index).is_none() {
            return Err(DequeError::InvalidArgument { index });
        }
        if index == self.head {
            return self.pop_front();
        }
        if index == self.tail {
            return self.pop_back();
        }

        let value = self.buf[index]
            .take()
            .ok_or(DequeError::InvalidArgument { index })?;
        if self.head <= self.tail {
            if index - self.head < self.tail - index {
                self.close_gap_from_head(index);
            } else {
                self.close_gap_from_tail(index);
            }
        } else if index > self.head {
            self.close_gap_from_head(index);
        } else {
            // Live and below head in a wrapped buffer, so index < tail.
            self.close_gap_from_tail(index);
        }
        self.len -= 1;
        Ok(value)
    }

    /// `head < index`, both in the same run: no wrap inside the slice.
    fn close_gap_from_head(&mut self, index: usize) {
        log::trace!(
            "closing gap at slot {index} by shifting {} slots from head",
            index - self.head
        );
        self.buf[self.head..=index].rotate_right(1);
        self.head += 1;
    }

    /// `index < tail`, both in the same run: no wrap inside the slice.
    fn close_gap_from_tail(&mut self, index: usize) {
        log::trace!(
            "closing gap at slot {index} by shifting {} slots from tail",
            self.tail - index
        );
        self.buf[index..=self.tail].rotate_left(1);
        self.tail -= 1;
    }

    /// Returns a cursor that walks the deque front to back and can remove the
    /// element it last yielded.
    pub fn cursor_mut(&mut self) -> CursorMut<'_, E> {
        CursorMut::new(self)
    }

    /// Returns a front-to-back iterator over shared references.
    pub fn iter(&self) -> Iter<'_, E> {
        Iter {
            deque: self,
            front: 0,
            back: self.len,
        }
    }
}

// --- Iterators ---

/// Borrowing iterator returned by [`CircularDeque::iter`].
pub struct Iter<'a, E> {
    deque: &'a CircularDeque<E>,
    front: usize,
    back: usize,
}

impl<'a, E> Iterator for Iter<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let item = self.deque.get(self.front);
        self.front += 1;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }
}

impl<E> DoubleEndedIterator for Iter<'_, E> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        self.deque.get(self.back)
    }
}

impl<E> ExactSizeIterator for Iter<'_, E> {}

/// Owning iterator; drains the deque front to back.
pub struct IntoIter<E> {
    deque: CircularDeque<E>,
}

impl<E> Iterator for IntoIter<E> {
    type Item = E;

    fn next(&mut self) -> Option<E> {
        self.deque.pop_front().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.deque.len();
        (len, Some(len))
    }
}

impl<E> DoubleEndedIterator for IntoIter<E> {
    fn next_back(&mut self) -> Option<E> {
        self.deque.pop_back().ok()
    }
}

impl<E> ExactSizeIterator for IntoIter<E> {}

impl<E> IntoIterator for CircularDeque<E> {
    type Item = E;
    type IntoIter = IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { deque: self }
    }
}

impl<'a, E> IntoIterator for &'a CircularDeque<E> {
    type Item = &'a E;
    type IntoIter = Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// --- Trait Implementations ---

impl<E> Default for CircularDeque<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: fmt::Debug> fmt::Debug for CircularDeque<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Compares logical contents only; capacity and physical layout are ignored.
impl<E: PartialEq> PartialEq for CircularDeque<E> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<E: Eq> Eq for CircularDeque<E> {}

impl<E> Extend<E> for CircularDeque<E> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<E> FromIterator<E> for CircularDeque<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut deque = Self::new();
        deque.extend(iter);
        deque
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Checks the ring layout: live slots are exactly `head..` for `len` steps,
    /// they end at `tail`, everything else is `None`, and the buffer is never full.
    fn assert_layout<E>(d: &CircularDeque<E>) {
        assert_eq!(d.buf.len(), d.capacity);
        assert!(d.len < d.capacity, "buffer left full");
        let live = d.buf.iter().filter(|slot| slot.is_some()).count();
        assert_eq!(live, d.len, "stale or missing slots");
        for offset in 0..d.len {
            assert!(d.buf[d.physical(offset)].is_some());
        }
        if d.len > 0 {
            assert_eq!(d.physical(d.len - 1), d.tail);
        }
    }

    /// Builds `[5, 6, _, _, 1, 2, 3, 4]` with head = 4, tail = 1.
    fn wrapped() -> CircularDeque<i32> {
        let mut d = CircularDeque::with_capacity(8);
        for i in 1..=6 {
            d.push_back(i);
        }
        assert_eq!((d.head, d.tail, d.capacity()), (4, 1, 8));
        d
    }

    fn contents<E: Clone>(d: &CircularDeque<E>) -> Vec<E> {
        d.iter().cloned().collect()
    }

    // ─── basic ops ────────────────────────────────────────────────────────────
    #[test]
    fn test_deque_ops_basic() {
        let mut d: CircularDeque<i32> = CircularDeque::new();
        assert!(d.is_empty());
        assert_eq!(d.capacity(), DEFAULT_CAPACITY);
        d.push_back(1);
        d.push_back(2);
        d.push_front(0);
        assert_eq!(d.len(), 3);
        assert_eq!(d.front(), Ok(&0));
        assert_eq!(d.back(), Ok(&2));
        assert_eq!(d.pop_front(), Ok(0));
        assert_eq!(d.pop_back(), Ok(2));
        assert_eq!(d.len(), 1);
        assert_layout(&d);
    }

    #[test]
    fn test_deque_ops_empty_errors() {
        let mut d: CircularDeque<i32> = CircularDeque::new();
        assert_eq!(d.pop_front(), Err(DequeError::EmptyCollection));
        assert_eq!(d.pop_back(), Err(DequeError::EmptyCollection));
        assert_eq!(d.front(), Err(DequeError::EmptyCollection));
        assert_eq!(d.back(), Err(DequeError::EmptyCollection));
        assert!(d.is_empty());
    }

    #[test]
    fn test_deque_ops_first_push_starts_mid_buffer() {
        let mut d = CircularDeque::with_capacity(10);
        d.push_front('a');
        assert_eq!((d.head, d.tail), (5, 5));
        d.pop_back().unwrap();
        d.push_back('b');
        assert_eq!((d.head, d.tail), (5, 5));
    }

    #[test]
    fn test_deque_ops_fifo_and_lifo() {
        let mut d = CircularDeque::new();
        for i in 0..25 {
            d.push_back(i);
        }
        let fifo: Vec<_> = (0..25).map(|_| d.pop_front().unwrap()).collect();
        assert_eq!(fifo, (0..25).collect::<Vec<_>>());

        for i in 0..25 {
            d.push_front(i);
        }
        let lifo: Vec<_> = (0..25).map(|_| d.pop_front().unwrap()).collect();
        assert_eq!(lifo, (0..25).rev().collect::<Vec<_>>());
    }

    #[test]
    fn test_deque_ops_get() {
        let d = wrapped();
        assert_eq!(d.get(0), Some(&1));
        assert_eq!(d.get(5), Some(&6));
        assert_eq!(d.get(6), None);
    }

    // ─── wrap-around ──────────────────────────────────────────────────────────
    #[test]
    fn test_deque_wrap_ring_buffer() {
        let d = wrapped();
        assert_eq!(d.buf[0], Some(5));
        assert_eq!(d.buf[1], Some(6));
        assert_eq!(contents(&d), vec![1, 2, 3, 4, 5, 6]);
        assert_layout(&d);
    }

    #[test]
    fn test_deque_wrap_front_past_zero() {
        let mut d = CircularDeque::with_capacity(8);
        for i in 0..6 {
            d.push_front(i);
        }
        assert!(d.head > d.tail);
        assert_eq!(contents(&d), vec![5, 4, 3, 2, 1, 0]);
        assert_layout(&d);
    }

    // ─── growth ───────────────────────────────────────────────────────────────
    #[test]
    fn test_deque_growth_doubles_and_linearizes() {
        let mut d = wrapped();
        d.push_back(7);
        assert_eq!(d.capacity(), 8);
        d.push_front(0); // fills the last slot
        assert_eq!(d.capacity(), 16);
        assert_eq!(d.head, 0);
        assert_eq!(d.tail, 7);
        assert_eq!(contents(&d), vec![0, 1, 2, 3, 4, 5, 6, 7]);
        assert_layout(&d);
    }

    #[test]
    fn test_deque_growth_never_leaves_buffer_full() {
        let mut d = CircularDeque::with_capacity(3);
        for i in 0..100 {
            if i % 3 == 0 {
                d.push_front(i);
            } else {
                d.push_back(i);
            }
            assert_layout(&d);
        }
        assert_eq!(d.len(), 100);
    }

    #[test]
    fn test_deque_growth_from_min_capacity() {
        let mut d = CircularDeque::with_capacity(0);
        assert_eq!(d.capacity(), MIN_CAPACITY);
        d.push_back("x");
        assert_eq!(d.capacity(), 2);
        d.push_front("w");
        assert_eq!(d.capacity(), 4);
        assert_eq!(contents(&d), vec!["w", "x"]);
        assert_layout(&d);
    }

    #[test]
    fn test_deque_growth_behaves_like_fresh_deque() {
        let mut grown = CircularDeque::with_capacity(4);
        grown.extend(0..5);
        let mut fresh = CircularDeque::with_capacity(64);
        fresh.extend(0..5);
        assert_eq!(grown, fresh);

        for d in [&mut grown, &mut fresh] {
            d.push_front(-1);
            d.pop_back().unwrap();
            d.remove(2).unwrap();
        }
        assert_eq!(contents(&grown), contents(&fresh));
        assert_eq!(contents(&grown), vec![-1, 0, 2, 3]);
    }

    // ─── contains / clear ─────────────────────────────────────────────────────
    #[test]
    fn test_deque_contains() {
        let mut d = wrapped();
        assert!(d.contains(&1));
        assert!(d.contains(&6));
        assert!(!d.contains(&7));
        d.pop_back().unwrap();
        assert!(!d.contains(&6));
        d.push_front(42);
        assert!(d.contains(&42));
        assert!(!CircularDeque::<i32>::new().contains(&0));
    }

    #[test]
    fn test_deque_clear_releases_slots() {
        let mut d = wrapped();
        d.clear();
        assert!(d.is_empty());
        assert_eq!(d.capacity(), 8);
        assert!(d.buf.iter().all(Option::is_none));
        d.push_back(3);
        assert_eq!(d.pop_front(), Ok(3));
    }

    #[test]
    fn test_deque_pop_drops_value() {
        use std::rc::Rc;
        let tracked = Rc::new(());
        let mut d = CircularDeque::new();
        d.push_back(Rc::clone(&tracked));
        d.push_back(Rc::clone(&tracked));
        drop(d.pop_front());
        d.remove(0).unwrap();
        assert_eq!(Rc::strong_count(&tracked), 1);
    }

    // ─── positional deletion ──────────────────────────────────────────────────
    #[test]
    fn test_deque_delete_wrapped_upper_run() {
        let mut d = wrapped();
        assert_eq!(d.delete_at(6), Ok(3));
        assert_eq!(d.head, 5);
        assert_eq!(d.buf[4], None);
        assert_eq!(contents(&d), vec![1, 2, 4, 5, 6]);
        assert_layout(&d);
    }

    #[test]
    fn test_deque_delete_wrapped_lower_run() {
        let mut d = wrapped();
        assert_eq!(d.delete_at(0), Ok(5));
        assert_eq!(d.tail, 0);
        assert_eq!(d.buf[1], None);
        assert_eq!(contents(&d), vec![1, 2, 3, 4, 6]);
        assert_layout(&d);
    }

    #[test]
    fn test_deque_delete_wrapped_ends() {
        let mut d = wrapped();
        assert_eq!(d.delete_at(4), Ok(1));
        assert_eq!(d.delete_at(1), Ok(6));
        assert_eq!(contents(&d), vec![2, 3, 4, 5]);
        assert_layout(&d);
    }

    #[test]
    fn test_deque_delete_unwrapped_shifts_nearer_side() {
        let mut d = CircularDeque::with_capacity(16);
        d.extend(0..6); // slots 8..=13
        assert_eq!((d.head, d.tail), (8, 13));

        assert_eq!(d.delete_at(9), Ok(1));
        assert_eq!((d.head, d.tail), (9, 13));

        assert_eq!(d.delete_at(12), Ok(4));
        assert_eq!((d.head, d.tail), (9, 12));

        assert_eq!(contents(&d), vec![0, 2, 3, 5]);
        assert_layout(&d);
    }

    #[test]
    fn test_deque_delete_invalid_slot_leaves_state() {
        let mut d = wrapped();
        for index in [2, 3, 8, 100] {
            assert_eq!(
                d.delete_at(index),
                Err(DequeError::InvalidArgument { index })
            );
        }
        assert_eq!(contents(&d), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(
            CircularDeque::<i32>::new().delete_at(5),
            Err(DequeError::InvalidArgument { index: 5 })
        );
    }

    #[test]
    fn test_deque_remove_logical_index() {
        let mut d = wrapped();
        assert_eq!(d.remove(4), Ok(5));
        assert_eq!(d.remove(0), Ok(1));
        assert_eq!(d.remove(9), Err(DequeError::InvalidArgument { index: 9 }));
        assert_eq!(contents(&d), vec![2, 3, 4, 6]);
        assert_layout(&d);
    }

    #[test]
    fn test_deque_retain() {
        let mut d = wrapped();
        d.retain(|&x| x % 2 == 0);
        assert_eq!(contents(&d), vec![2, 4, 6]);
        assert_layout(&d);
        d.retain(|_| false);
        assert!(d.is_empty());
    }

    // ─── iter ─────────────────────────────────────────────────────────────────
    #[test]
    fn test_deque_iter_both_ends() {
        let d = wrapped();
        let mut it = d.iter();
        assert_eq!(it.len(), 6);
        assert_eq!(it.next(), Some(&1));
        assert_eq!(it.next_back(), Some(&6));
        assert_eq!(it.len(), 4);
        assert_eq!(it.rev().copied().collect::<Vec<_>>(), vec![5, 4, 3, 2]);
    }

    #[test]
    fn test_deque_into_iter() {
        let d = wrapped();
        let mut total = 0;
        for x in &d {
            total += x;
        }
        assert_eq!(total, 21);
        assert_eq!(d.into_iter().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5, 6]);
    }

    // ─── traits ───────────────────────────────────────────────────────────────
    #[test]
    fn test_deque_traits_eq_ignores_layout() {
        let a = wrapped();
        let b: CircularDeque<i32> = (1..=6).collect();
        assert_ne!(a.head, b.head);
        assert_eq!(a, b);
        let c: CircularDeque<i32> = (1..=5).collect();
        assert_ne!(a, c);
    }

    #[test]
    fn test_deque_traits_clone_is_independent() {
        let mut d = wrapped();
        let cloned = d.clone();
        d.push_back(7);
        assert_eq!(cloned.len(), 6);
        assert_eq!(d.len(), 7);
    }

    #[test]
    fn test_deque_traits_debug() {
        let d = wrapped();
        assert_eq!(format!("{:?}", d), "[1, 2, 3, 4, 5, 6]");
        assert_eq!(format!("{:?}", CircularDeque::<u8>::default()), "[]");
    }

    // ─── AnyDeque trait dispatch ──────────────────────────────────────────────
    fn exercise(any: &mut dyn AnyDeque<i32>) {
        any.push_back(10);
        any.push_front(5);
        assert_eq!(any.len(), 2);
        assert!(!any.is_empty());
        assert_eq!(any.front(), Ok(&5));
        assert_eq!(any.back(), Ok(&10));
        assert!(any.contains(&10));
        assert_eq!(any.pop_front(), Ok(5));
        assert_eq!(any.pop_back(), Ok(10));
        assert_eq!(any.pop_back(), Err(DequeError::EmptyCollection));
        any.push_back(1);
        any.clear();
        assert!(any.is_empty());
    }

    #[test]
    fn test_deque_any_deque_trait() {
        exercise(&mut CircularDeque::<i32>::new());
        exercise(&mut VecDeque::<i32>::new());
    }
}
