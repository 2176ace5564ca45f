#[inline]
pub fn wrap_add(index: usize, addend: usize, capacity: usize) -> usize {
    debug_assert!(addend <= capacity);
    debug_assert!(capacity > 0);
    (index + addend) % capacity
}

#[inline]
pub fn wrap_sub(index: usize, subtrahend: usize, capacity: usize) -> usize {
    debug_assert!(subtrahend <= capacity);
    debug_assert!(capacity > 0);
    (index + capacity - subtrahend) % capacity
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap() {
        assert_eq!(wrap_add(3, 1, 4), 0);
        assert_eq!(wrap_add(1, 2, 4), 3);
        assert_eq!(wrap_sub(0, 1, 4), 3);
        assert_eq!(wrap_sub(2, 2, 4), 0);
        assert_eq!(wrap_add(0, 1, 1), 0);
        assert_eq!(wrap_sub(0, 1, 1), 0);
    }
}
