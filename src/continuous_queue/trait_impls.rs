use std::cmp;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter;
use std::ops::{Index, IndexMut};

use super::*;

impl<T: Clone, B: Bounds> Clone for ContinuousQueue<T, B> {
    fn clone(&self) -> ContinuousQueue<T, B> {
        ContinuousQueue {
            items: self.items.clone(),
            cursors: self.cursors,
            bounds: PhantomData,
        }
    }
}

impl<T, B: Bounds> Default for ContinuousQueue<T, B> {
    #[inline]
    fn default() -> ContinuousQueue<T, B> {
        ContinuousQueue::new()
    }
}

/// Two queues are equal when they hold equal elements under the same
/// absolute indices. Capacity and physical layout are ignored.
impl<T: PartialEq, B: Bounds> PartialEq for ContinuousQueue<T, B> {
    fn eq(&self, other: &ContinuousQueue<T, B>) -> bool {
        self.beginning_index() == other.beginning_index() && self.len() == other.len() &&
        self.iter().eq(other.iter())
    }
}

impl<T: Eq, B: Bounds> Eq for ContinuousQueue<T, B> {}

impl<T: Hash, B: Bounds> Hash for ContinuousQueue<T, B> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.beginning_index().hash(state);
        self.len().hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T, B: Bounds> Index<i64> for ContinuousQueue<T, B> {
    type Output = T;

    #[inline]
    fn index(&self, index: i64) -> &T {
        match self.get(index) {
            Ok(element) => element,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T, B: Bounds> IndexMut<i64> for ContinuousQueue<T, B> {
    #[inline]
    fn index_mut(&mut self, index: i64) -> &mut T {
        match self.get_mut(index) {
            Ok(element) => element,
            Err(err) => panic!("{}", err),
        }
    }
}

/// Collects into a fresh queue; the first element gets index `0`.
impl<T, B: Bounds> iter::FromIterator<T> for ContinuousQueue<T, B> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        let mut queue = ContinuousQueue::with_capacity(cmp::max(lower, DEFAULT_CAPACITY));
        queue.extend(iter);
        queue
    }
}

impl<T, B: Bounds> IntoIterator for ContinuousQueue<T, B> {
    type Item = T;
    type IntoIter = IntoIter<T, B>;

    fn into_iter(self) -> IntoIter<T, B> {
        IntoIter { inner: self }
    }
}

impl<'a, T, B: Bounds> IntoIterator for &'a ContinuousQueue<T, B> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T, B: Bounds> IntoIterator for &'a mut ContinuousQueue<T, B> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

/// Extend the `ContinuousQueue` with an iterator, pushing to the back.
///
/// The queue grows as needed; every element is kept.
impl<T, B: Bounds> Extend<T> for ContinuousQueue<T, B> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.push_back(element);
        }
    }
}

impl<T: fmt::Debug, B: Bounds> fmt::Debug for ContinuousQueue<T, B> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    use crate::{ContinuousQueue, InclusiveQueue};

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_index() {
        let mut queue: ContinuousQueue<_> = ContinuousQueue::new();
        queue.extend(vec![1, 2, 3, 4]);
        assert_eq!(queue[1], 2);
        queue[2] = 30;
        assert_eq!(queue[2], 30);

        let mut inclusive: InclusiveQueue<_> = InclusiveQueue::new();
        inclusive.extend(vec![1, 2]);
        inclusive[0] = 10;
        assert_eq!(inclusive[0], 10);
        assert_eq!(inclusive[1], 2);
    }

    #[test]
    #[should_panic(expected = "index 0 must be between")]
    fn test_index_endpoint() {
        let mut queue: ContinuousQueue<_> = ContinuousQueue::new();
        queue.extend(vec![1, 2, 3]);
        let _front = queue[0];
    }

    #[test]
    #[should_panic]
    fn test_index_evicted() {
        let mut queue: InclusiveQueue<_> = InclusiveQueue::new();
        queue.extend(vec![1, 2, 3]);
        queue.pop_front().unwrap();
        queue[0] = 5;
    }

    #[test]
    fn test_partial_equal() {
        let mut a: ContinuousQueue<_> = ContinuousQueue::with_capacity(3);
        let mut b: ContinuousQueue<_> = ContinuousQueue::with_capacity(8);
        a.extend(0..3);
        a.pop_front().unwrap();
        a.push_back(3);
        b.push_back(-1);
        b.extend(1..4);
        assert_ne!(a, b);
        b.pop_front().unwrap();
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));

        let shifted: ContinuousQueue<_> = (1..4).collect();
        assert_ne!(a, shifted);
    }

    #[test]
    fn test_clone() {
        let mut queue: InclusiveQueue<_> = InclusiveQueue::with_capacity(2);
        queue.push_back(String::from("a"));
        queue.push_front(String::from("b"));
        let mut copy = queue.clone();
        assert_eq!(copy, queue);
        assert_eq!(copy.get(-1).unwrap(), "b");
        copy.set(0, String::from("c")).unwrap();
        assert_eq!(queue.get(0).unwrap(), "a");
        assert_ne!(copy, queue);
    }

    #[test]
    fn test_fmt() {
        let mut queue: ContinuousQueue<_> = ContinuousQueue::with_capacity(2);
        queue.extend(0..3);
        queue.push_front(-1);
        assert_eq!(format!("{:?}", queue), "[-1, 0, 1, 2]");
    }

    #[test]
    fn test_from_iterator() {
        let queue: ContinuousQueue<_> = (0..40).collect();
        assert_eq!(queue.len(), 40);
        assert_eq!(queue.capacity(), 40);
        assert_eq!(queue.beginning_index(), 0);
        assert_eq!(queue.end_index(), 39);
        assert_eq!(queue.front(), Ok(&0));
        assert_eq!(queue.back(), Ok(&39));
    }

    #[test]
    fn test_extend() {
        let mut queue: ContinuousQueue<_> = ContinuousQueue::with_capacity(1);
        queue.extend(0..10);
        assert_eq!(queue.len(), 10);
        assert_eq!(queue.capacity(), 16);
        assert_eq!(queue.into_iter().collect::<Vec<_>>(), (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn test_default() {
        let queue: ContinuousQueue<u8> = Default::default();
        assert_eq!(queue.capacity(), 16);
        assert!(queue.is_empty());
    }
}
