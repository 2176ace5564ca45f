use std::cmp;

use log::{debug, trace};

use super::ContinuousQueue;
use crate::behavior::Bounds;

impl<T, B: Bounds> ContinuousQueue<T, B> {
    /// Sets the capacity of the queue.
    ///
    /// Can shrink or grow the backing array, but never below the number of
    /// live elements. The live elements are moved to the start of the new
    /// array in logical order; their absolute indices do not change.
    ///
    /// Returns the capacity actually applied.
    ///
    /// # Examples
    ///
    /// ```
    /// use continuous_queue::ContinuousQueue;
    ///
    /// let mut queue: ContinuousQueue<_> = ContinuousQueue::with_capacity(4);
    /// queue.extend(0..3);
    ///
    /// assert_eq!(queue.set_capacity(32), 32);
    /// assert_eq!(queue.set_capacity(1), 3);
    /// assert_eq!(queue.capacity(), 3);
    /// assert_eq!(queue.get(1), Ok(&1));
    /// ```
    pub fn set_capacity(&mut self, capacity: usize) -> usize {
        let len = self.len();
        let capacity = cmp::max(capacity, len);
        let old_capacity = self.capacity();

        let mut items = Vec::with_capacity(capacity);
        {
            let (front, back) = self.runs_mut();
            items.extend(front.iter_mut().map(Option::take));
            items.extend(back.iter_mut().map(Option::take));
        }
        debug_assert_eq!(items.len(), len);
        items.resize_with(capacity, || None);

        self.items = items;
        self.cursors.relinearize(capacity);

        trace!("resized queue from {} to {} slots ({} live)",
               old_capacity,
               capacity,
               len);
        capacity
    }

    /// Shrinks the backing array to exactly the number of live elements.
    pub fn shrink_to_fit(&mut self) -> usize {
        let len = self.len();
        self.set_capacity(len)
    }

    /// Doubles the backing array when the next insert would not fit.
    #[inline]
    pub(super) fn grow_if_full(&mut self) {
        let len = self.len();
        if len == self.capacity() {
            let capacity = cmp::max(len * 2, 1);
            debug!("queue full at {} elements, growing to {}", len, capacity);
            self.set_capacity(capacity);
        }
    }

    /// The live slots as two contiguous runs in logical order.
    #[inline]
    pub(super) fn runs(&self) -> (&[Option<T>], &[Option<T>]) {
        let head = self.cursors.head();
        let (first, second) = self.cursors.runs(self.capacity());
        (&self.items[head..head + first], &self.items[..second])
    }

    /// Mutable variant of `runs`.
    #[inline]
    pub(super) fn runs_mut(&mut self) -> (&mut [Option<T>], &mut [Option<T>]) {
        let head = self.cursors.head();
        let (first, second) = self.cursors.runs(self.capacity());
        let (wrapped, rest) = self.items.split_at_mut(head);
        (&mut rest[..first], &mut wrapped[..second])
    }
}
