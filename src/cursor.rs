//! Cursor bookkeeping shared by both ends of the queue.
//!
//! The four counters only move together: every transition below updates
//! `head`/`tail`, `len` and `beginning` as one step, so the front and back
//! halves of the queue cannot drift apart.
//!
//! ```text
//!   capacity = 6, head = 4, tail = 2, len = 4, beginning = 10
//!
//!   slot:   0  1  2  3  4  5
//!         [ c  d  _  _  a  b ]
//!                 T     H
//!
//!   index:  a = 10, b = 11, c = 12, d = 13 (end)
//! ```

use crate::utils::{wrap_add, wrap_sub};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Cursors {
    head: usize,
    tail: usize,
    len: usize,
    beginning: i64,
}

impl Cursors {
    #[inline]
    pub fn head(&self) -> usize {
        self.head
    }

    #[cfg(test)]
    pub fn tail(&self) -> usize {
        self.tail
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn beginning(&self) -> i64 {
        self.beginning
    }

    /// Absolute index of the newest element, `beginning - 1` when empty.
    #[inline]
    pub fn end(&self) -> i64 {
        self.beginning + self.len as i64 - 1
    }

    /// Claims the slot before `head` for a new front element.
    pub fn retreat_head(&mut self, capacity: usize) -> usize {
        debug_assert!(self.len < capacity);
        self.head = wrap_sub(self.head, 1, capacity);
        self.beginning -= 1;
        self.len += 1;
        self.head
    }

    /// Releases the front slot and returns it.
    pub fn advance_head(&mut self, capacity: usize) -> usize {
        debug_assert!(self.len > 0);
        let slot = self.head;
        self.head = wrap_add(self.head, 1, capacity);
        self.beginning += 1;
        self.len -= 1;
        slot
    }

    /// Claims the slot at `tail` for a new back element.
    pub fn advance_tail(&mut self, capacity: usize) -> usize {
        debug_assert!(self.len < capacity);
        let slot = self.tail;
        self.tail = wrap_add(self.tail, 1, capacity);
        self.len += 1;
        slot
    }

    /// Releases the back slot and returns it.
    pub fn retreat_tail(&mut self, capacity: usize) -> usize {
        debug_assert!(self.len > 0);
        self.tail = wrap_sub(self.tail, 1, capacity);
        self.len -= 1;
        self.tail
    }

    /// Resets the cursors after the live elements were moved to slot 0
    /// onward of a `capacity`-long array.
    pub fn relinearize(&mut self, capacity: usize) {
        debug_assert!(self.len <= capacity);
        self.head = 0;
        self.tail = if self.len == capacity { 0 } else { self.len };
    }

    /// Forgets every element. Their indices stay retired.
    pub fn clear(&mut self) {
        self.beginning += self.len as i64;
        self.head = 0;
        self.tail = 0;
        self.len = 0;
    }

    /// Physical slot of the element `offset` positions after the front.
    #[inline]
    pub fn slot(&self, offset: usize, capacity: usize) -> usize {
        debug_assert!(offset < self.len);
        wrap_add(self.head, offset, capacity)
    }

    /// Lengths of the two contiguous runs holding the live elements: from
    /// `head` toward the end of the array, then from slot 0.
    #[inline]
    pub fn runs(&self, capacity: usize) -> (usize, usize) {
        let first = if self.head + self.len > capacity {
            capacity - self.head
        } else {
            self.len
        };
        (first, self.len - first)
    }
}
