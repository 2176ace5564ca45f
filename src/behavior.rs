//! Random-access bounds semantics for `ContinuousQueue`.

/// Tagging trait deciding which absolute indices `get`, `set` and `resolve`
/// accept.
///
/// `front` and `back` always reach the two endpoints regardless of the
/// policy.
pub trait Bounds {
    /// Returns `true` when `index` may be resolved for a queue whose live
    /// range is `beginning..=end`.
    fn admits(index: i64, beginning: i64, end: i64) -> bool;
}

/// Bounds that exclude both endpoints of the live range.
///
/// ### Random access:
///
/// Only indices **strictly between** the beginning and end index resolve.
/// The oldest and newest elements must be read through `front` and `back`,
/// and a queue holding fewer than three elements has nothing addressable.
///
/// This is the historical behavior of the queue and the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Exclusive;

impl Bounds for Exclusive {
    #[inline]
    fn admits(index: i64, beginning: i64, end: i64) -> bool {
        index > beginning && index < end
    }
}

/// Bounds that admit every resident index.
///
/// ### Random access:
///
/// Every index from the beginning index to the end index, **inclusive**,
/// resolves. An empty queue admits nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Inclusive;

impl Bounds for Inclusive {
    #[inline]
    fn admits(index: i64, beginning: i64, end: i64) -> bool {
        index >= beginning && index <= end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exclusive_rejects_endpoints() {
        assert!(!Exclusive::admits(0, 0, 4));
        assert!(Exclusive::admits(1, 0, 4));
        assert!(Exclusive::admits(3, 0, 4));
        assert!(!Exclusive::admits(4, 0, 4));
        // two elements: nothing in between
        assert!(!Exclusive::admits(0, 0, 1));
        assert!(!Exclusive::admits(1, 0, 1));
    }

    #[test]
    fn test_inclusive_admits_endpoints() {
        assert!(Inclusive::admits(-3, -3, 2));
        assert!(Inclusive::admits(2, -3, 2));
        assert!(!Inclusive::admits(3, -3, 2));
        assert!(!Inclusive::admits(-4, -3, 2));
        // empty: end is beginning - 1
        assert!(!Inclusive::admits(5, 5, 4));
    }
}
