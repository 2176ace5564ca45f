use super::*;

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        self.front
            .next()
            .or_else(|| self.back.next())
            .and_then(Option::as_ref)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.front.len() + self.back.len();
        (len, Some(len))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a T> {
        self.back
            .next_back()
            .or_else(|| self.front.next_back())
            .and_then(Option::as_ref)
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Iter {
            front: self.front.clone(),
            back: self.back.clone(),
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<&'a mut T> {
        self.front
            .next()
            .or_else(|| self.back.next())
            .and_then(Option::as_mut)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.front.len() + self.back.len();
        (len, Some(len))
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a mut T> {
        self.back
            .next_back()
            .or_else(|| self.front.next_back())
            .and_then(Option::as_mut)
    }
}

impl<'a, T> ExactSizeIterator for IterMut<'a, T> {}

impl<T, B: Bounds> Iterator for IntoIter<T, B> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.pop_front().ok()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.inner.len();
        (len, Some(len))
    }
}

impl<T, B: Bounds> DoubleEndedIterator for IntoIter<T, B> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.inner.pop_back().ok()
    }
}

impl<T, B: Bounds> ExactSizeIterator for IntoIter<T, B> {}

impl<'a, T> Iterator for Indexed<'a, T> {
    type Item = (i64, &'a T);

    #[inline]
    fn next(&mut self) -> Option<(i64, &'a T)> {
        let element = self.iter.next()?;
        let index = self.front;
        self.front += 1;
        Some((index, element))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<'a, T> DoubleEndedIterator for Indexed<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<(i64, &'a T)> {
        let element = self.iter.next_back()?;
        Some((self.front + self.iter.len() as i64, element))
    }
}

impl<'a, T> ExactSizeIterator for Indexed<'a, T> {}

impl<'a, T> Clone for Indexed<'a, T> {
    fn clone(&self) -> Self {
        Indexed {
            iter: self.iter.clone(),
            front: self.front,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{ContinuousQueue, InclusiveQueue};

    fn wrapped() -> ContinuousQueue<i32> {
        let mut queue: ContinuousQueue<_> = ContinuousQueue::with_capacity(5);
        queue.extend(0..5);
        queue.pop_front().unwrap();
        queue.pop_front().unwrap();
        queue.push_back(5);
        queue.push_back(6);
        queue
    }

    #[test]
    fn test_iter() {
        let queue = wrapped();
        let mut iter = queue.iter();
        assert_eq!(iter.size_hint(), (5, Some(5)));
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.next_back(), Some(&6));
        assert_eq!(iter.len(), 3);
        let rest: Vec<_> = iter.clone().collect();
        assert_eq!(rest, vec![&3, &4, &5]);
        assert_eq!(iter.rev().collect::<Vec<_>>(), vec![&5, &4, &3]);
    }

    #[test]
    fn test_iter_mut() {
        let mut queue = wrapped();
        for element in queue.iter_mut() {
            *element *= 10;
        }
        assert_eq!(queue.iter().cloned().collect::<Vec<_>>(), vec![20, 30, 40, 50, 60]);

        let mut iter = queue.iter_mut();
        *iter.next_back().unwrap() = 0;
        assert_eq!(iter.len(), 4);
        assert_eq!(queue.back(), Ok(&0));
    }

    #[test]
    fn test_into_iter() {
        let mut iter = wrapped().into_iter();
        assert_eq!(iter.len(), 5);
        assert_eq!(iter.next(), Some(2));
        assert_eq!(iter.next_back(), Some(6));
        assert_eq!(iter.collect::<Vec<_>>(), vec![3, 4, 5]);

        let mut queue = wrapped();
        for element in &mut queue {
            *element += 1;
        }
        let collected: Vec<_> = (&queue).into_iter().cloned().collect();
        assert_eq!(collected, vec![3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_indexed() {
        let mut queue: InclusiveQueue<_> = InclusiveQueue::with_capacity(2);
        queue.push_back('c');
        queue.push_front('b');
        queue.push_front('a');
        queue.push_back('d');

        let pairs: Vec<_> = queue.indexed().collect();
        assert_eq!(pairs, vec![(-2, &'a'), (-1, &'b'), (0, &'c'), (1, &'d')]);
        for (index, element) in queue.indexed() {
            assert_eq!(queue.get(index), Ok(element));
        }

        let mut indexed = queue.indexed();
        assert_eq!(indexed.next_back(), Some((1, &'d')));
        assert_eq!(indexed.next(), Some((-2, &'a')));
        assert_eq!(indexed.next_back(), Some((0, &'c')));
        assert_eq!(indexed.next_back(), Some((-1, &'b')));
        assert_eq!(indexed.next_back(), None);
        assert_eq!(indexed.next(), None);
    }

    #[test]
    fn test_empty_iter() {
        let queue: ContinuousQueue<i32> = ContinuousQueue::with_capacity(0);
        assert_eq!(queue.iter().next(), None);
        assert_eq!(queue.indexed().next_back(), None);
    }
}
