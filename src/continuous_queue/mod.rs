use std::marker::PhantomData;
use std::slice;

use crate::behavior::{Bounds, Exclusive, Inclusive};
use crate::config::{Settings, DEFAULT_CAPACITY};
use crate::cursor::Cursors;
use crate::error::{QueueError, Result};

mod capacity;
mod iterator_impls;
mod trait_impls;

/// `ContinuousQueue` is a growable ring buffer that can be absolutely indexed.
///
/// Every element receives an absolute index when it is inserted. Pushing to
/// the back hands out `end_index() + 1`, pushing to the front hands out
/// `beginning_index() - 1`. The index keeps naming the same element until
/// that element is removed, and is never handed out again afterwards, no
/// matter how the backing array is reallocated.
///
/// `B` selects which indices random access accepts; see [`Exclusive`] (the
/// default) and [`Inclusive`].
///
/// The queue performs no locking. Share it between threads behind a lock,
/// such as `RwLock<ContinuousQueue<T>>`.
///
/// [`Exclusive`]: crate::Exclusive
/// [`Inclusive`]: crate::Inclusive
pub struct ContinuousQueue<T, B: Bounds = Exclusive> {
    items: Vec<Option<T>>,
    cursors: Cursors,
    bounds: PhantomData<B>,
}

/// A `ContinuousQueue` whose random access reaches every resident index.
pub type InclusiveQueue<T> = ContinuousQueue<T, Inclusive>;

/// `ContinuousQueue` iterator
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
pub struct Iter<'a, T: 'a> {
    front: slice::Iter<'a, Option<T>>,
    back: slice::Iter<'a, Option<T>>,
}

/// `ContinuousQueue` mutable iterator
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
pub struct IterMut<'a, T: 'a> {
    front: slice::IterMut<'a, Option<T>>,
    back: slice::IterMut<'a, Option<T>>,
}

/// A by-value `ContinuousQueue` iterator
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
pub struct IntoIter<T, B: Bounds = Exclusive> {
    inner: ContinuousQueue<T, B>,
}

/// `ContinuousQueue` iterator yielding each element with its absolute index
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
pub struct Indexed<'a, T: 'a> {
    iter: Iter<'a, T>,
    front: i64,
}

impl<T, B: Bounds> ContinuousQueue<T, B> {
    /// Creates an empty `ContinuousQueue` with room for 16 elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use continuous_queue::ContinuousQueue;
    ///
    /// let queue: ContinuousQueue<u32> = ContinuousQueue::new();
    /// assert_eq!(queue.capacity(), 16);
    /// ```
    #[inline]
    pub fn new() -> ContinuousQueue<T, B> {
        ContinuousQueue::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty `ContinuousQueue` with room for `capacity` elements.
    ///
    /// The first absolute index handed out is `0` from `push_back`, or `-1`
    /// from `push_front`.
    pub fn with_capacity(capacity: usize) -> ContinuousQueue<T, B> {
        let mut items = Vec::with_capacity(capacity);
        items.resize_with(capacity, || None);
        ContinuousQueue {
            items,
            cursors: Cursors::default(),
            bounds: PhantomData,
        }
    }

    /// Creates an empty `ContinuousQueue` sized by `settings`.
    #[inline]
    pub fn with_settings(settings: &Settings) -> ContinuousQueue<T, B> {
        ContinuousQueue::with_capacity(settings.initial_capacity)
    }

    /// Returns the length of the backing array.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.items.len()
    }

    /// Returns the number of elements in the `ContinuousQueue`.
    #[inline]
    pub fn len(&self) -> usize {
        self.cursors.len()
    }

    /// Returns true if the `ContinuousQueue` contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The absolute index of the front element.
    ///
    /// Anything lower has been removed or was never assigned.
    #[inline]
    pub fn beginning_index(&self) -> i64 {
        self.cursors.beginning()
    }

    /// The absolute index of the back element.
    ///
    /// When the queue is empty this is `beginning_index() - 1`, which never
    /// names a resident element.
    #[inline]
    pub fn end_index(&self) -> i64 {
        self.cursors.end()
    }

    /// Returns true if `index` names an element that is still resident.
    ///
    /// This ignores the bounds policy: the two endpoints count as resident
    /// even when random access refuses them.
    #[inline]
    pub fn contains_index(&self, index: i64) -> bool {
        Inclusive::admits(index, self.beginning_index(), self.end_index())
    }

    /// Adds an element to the front of the queue and returns its absolute
    /// index, one less than the previous beginning index.
    ///
    /// Doubles the capacity first when the queue is full.
    ///
    /// # Examples
    ///
    /// ```
    /// use continuous_queue::ContinuousQueue;
    ///
    /// let mut queue: ContinuousQueue<_> = ContinuousQueue::new();
    /// assert_eq!(queue.push_front('a'), -1);
    /// assert_eq!(queue.push_front('b'), -2);
    /// assert_eq!(queue.front(), Ok(&'b'));
    /// ```
    pub fn push_front(&mut self, element: T) -> i64 {
        self.grow_if_full();
        let capacity = self.capacity();
        let slot = self.cursors.retreat_head(capacity);
        self.items[slot] = Some(element);
        self.beginning_index()
    }

    /// Adds an element to the back of the queue and returns its absolute
    /// index, one more than the previous end index.
    ///
    /// Doubles the capacity first when the queue is full.
    ///
    /// # Examples
    ///
    /// ```
    /// use continuous_queue::ContinuousQueue;
    ///
    /// let mut queue: ContinuousQueue<_> = ContinuousQueue::with_capacity(1);
    /// assert_eq!(queue.push_back(10), 0);
    /// assert_eq!(queue.push_back(20), 1);
    /// assert_eq!(queue.capacity(), 2);
    /// ```
    pub fn push_back(&mut self, element: T) -> i64 {
        self.grow_if_full();
        let capacity = self.capacity();
        let slot = self.cursors.advance_tail(capacity);
        self.items[slot] = Some(element);
        self.end_index()
    }

    /// Adds an element to the beginning of the queue. Same as `push_front`.
    #[inline]
    pub fn enqueue(&mut self, element: T) -> i64 {
        self.push_front(element)
    }

    /// Removes the element at the end of the queue. Same as `pop_back`.
    #[inline]
    pub fn dequeue(&mut self) -> Result<T> {
        self.pop_back()
    }

    /// Removes the front element and returns it.
    ///
    /// Its index is retired and the beginning index moves up by one.
    ///
    /// # Examples
    ///
    /// ```
    /// use continuous_queue::{ContinuousQueue, QueueError};
    ///
    /// let mut queue: ContinuousQueue<_> = ContinuousQueue::new();
    /// queue.push_back(1);
    /// queue.push_back(2);
    ///
    /// assert_eq!(queue.pop_front(), Ok(1));
    /// assert_eq!(queue.beginning_index(), 1);
    /// assert_eq!(queue.pop_front(), Ok(2));
    /// assert_eq!(queue.pop_front(), Err(QueueError::Empty));
    /// ```
    pub fn pop_front(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(QueueError::Empty);
        }
        let capacity = self.capacity();
        let slot = self.cursors.advance_head(capacity);
        self.items[slot].take().ok_or(QueueError::Empty)
    }

    /// Removes the back element and returns it.
    ///
    /// # Examples
    ///
    /// ```
    /// use continuous_queue::{ContinuousQueue, QueueError};
    ///
    /// let mut queue: ContinuousQueue<_> = ContinuousQueue::new();
    /// queue.push_back(1);
    /// queue.push_back(2);
    ///
    /// assert_eq!(queue.pop_back(), Ok(2));
    /// assert_eq!(queue.end_index(), 0);
    /// assert_eq!(queue.pop_back(), Ok(1));
    /// assert_eq!(queue.pop_back(), Err(QueueError::Empty));
    /// ```
    pub fn pop_back(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(QueueError::Empty);
        }
        let capacity = self.capacity();
        let slot = self.cursors.retreat_tail(capacity);
        self.items[slot].take().ok_or(QueueError::Empty)
    }

    /// Provides a reference to the element at the beginning index.
    #[inline]
    pub fn front(&self) -> Result<&T> {
        let slot = self.front_slot()?;
        self.items[slot].as_ref().ok_or(QueueError::Empty)
    }

    /// Provides a mutable reference to the element at the beginning index.
    #[inline]
    pub fn front_mut(&mut self) -> Result<&mut T> {
        let slot = self.front_slot()?;
        self.items[slot].as_mut().ok_or(QueueError::Empty)
    }

    /// Provides a reference to the element at the end index.
    #[inline]
    pub fn back(&self) -> Result<&T> {
        let slot = self.back_slot()?;
        self.items[slot].as_ref().ok_or(QueueError::Empty)
    }

    /// Provides a mutable reference to the element at the end index.
    #[inline]
    pub fn back_mut(&mut self) -> Result<&mut T> {
        let slot = self.back_slot()?;
        self.items[slot].as_mut().ok_or(QueueError::Empty)
    }

    /// Translates an absolute index into the physical slot currently holding
    /// that element.
    ///
    /// The slot is only meaningful until the next insert, removal or resize.
    ///
    /// # Examples
    ///
    /// ```
    /// use continuous_queue::InclusiveQueue;
    ///
    /// let mut queue: InclusiveQueue<_> = InclusiveQueue::with_capacity(4);
    /// queue.extend(0..4);
    /// queue.pop_front().unwrap();
    /// queue.push_back(4);
    ///
    /// assert_eq!(queue.resolve(1), Ok(1));
    /// assert_eq!(queue.resolve(4), Ok(0));
    /// assert!(queue.resolve(0).is_err());
    /// ```
    pub fn resolve(&self, index: i64) -> Result<usize> {
        if !B::admits(index, self.beginning_index(), self.end_index()) {
            return Err(self.out_of_range(index));
        }
        let offset = (index - self.beginning_index()) as usize;
        Ok(self.cursors.slot(offset, self.capacity()))
    }

    /// Retrieves an element by absolute index.
    ///
    /// # Examples
    ///
    /// ```
    /// use continuous_queue::ContinuousQueue;
    ///
    /// let mut queue: ContinuousQueue<_> = ContinuousQueue::new();
    /// queue.extend(vec![3, 4, 5]);
    ///
    /// assert_eq!(queue.get(1), Ok(&4));
    /// // the endpoints are reached through `front` and `back`
    /// assert!(queue.get(0).is_err());
    /// assert_eq!(queue.front(), Ok(&3));
    /// ```
    #[inline]
    pub fn get(&self, index: i64) -> Result<&T> {
        let slot = self.resolve(index)?;
        let err = self.out_of_range(index);
        self.items[slot].as_ref().ok_or(err)
    }

    /// Retrieves an element mutably by absolute index.
    #[inline]
    pub fn get_mut(&mut self, index: i64) -> Result<&mut T> {
        let slot = self.resolve(index)?;
        let err = self.out_of_range(index);
        self.items[slot].as_mut().ok_or(err)
    }

    /// Overwrites the element at an absolute index that is already resident.
    pub fn set(&mut self, index: i64, element: T) -> Result<()> {
        *self.get_mut(index)? = element;
        Ok(())
    }

    /// Drops every element.
    ///
    /// The capacity is kept and the indices of the dropped elements stay
    /// retired: the next `push_back` continues from the old end index.
    ///
    /// # Examples
    ///
    /// ```
    /// use continuous_queue::ContinuousQueue;
    ///
    /// let mut queue: ContinuousQueue<_> = ContinuousQueue::new();
    /// queue.extend(0..3);
    /// queue.clear();
    ///
    /// assert!(queue.is_empty());
    /// assert_eq!(queue.push_back(7), 3);
    /// ```
    pub fn clear(&mut self) {
        {
            let (front, back) = self.runs_mut();
            for slot in front.iter_mut().chain(back.iter_mut()) {
                *slot = None;
            }
        }
        self.cursors.clear();
    }

    /// Returns a front-to-back iterator.
    #[inline]
    pub fn iter(&self) -> Iter<T> {
        let (front, back) = self.runs();
        Iter {
            front: front.iter(),
            back: back.iter(),
        }
    }

    /// Returns a front-to-back iterator that returns mutable references.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<T> {
        let (front, back) = self.runs_mut();
        IterMut {
            front: front.iter_mut(),
            back: back.iter_mut(),
        }
    }

    /// Returns a front-to-back iterator over `(absolute index, element)`
    /// pairs. Unlike `get`, it reaches both endpoints.
    ///
    /// # Examples
    ///
    /// ```
    /// use continuous_queue::ContinuousQueue;
    ///
    /// let mut queue: ContinuousQueue<_> = ContinuousQueue::new();
    /// queue.push_back('b');
    /// queue.push_front('a');
    ///
    /// let pairs: Vec<_> = queue.indexed().collect();
    /// assert_eq!(pairs, vec![(-1, &'a'), (0, &'b')]);
    /// ```
    #[inline]
    pub fn indexed(&self) -> Indexed<T> {
        Indexed {
            iter: self.iter(),
            front: self.beginning_index(),
        }
    }

    #[inline]
    fn front_slot(&self) -> Result<usize> {
        if self.is_empty() {
            return Err(QueueError::Empty);
        }
        Ok(self.cursors.head())
    }

    #[inline]
    fn back_slot(&self) -> Result<usize> {
        if self.is_empty() {
            return Err(QueueError::Empty);
        }
        Ok(self.cursors.slot(self.len() - 1, self.capacity()))
    }

    #[inline]
    fn out_of_range(&self, index: i64) -> QueueError {
        QueueError::IndexOutOfRange {
            index,
            beginning: self.beginning_index(),
            end: self.end_index(),
        }
    }
}
