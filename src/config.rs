//! Construction settings for `ContinuousQueue`.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Capacity used when no other is given.
pub const DEFAULT_CAPACITY: usize = 16;

/// Settings a host can embed in its own configuration to size a queue.
///
/// With the `serde` feature, missing fields fall back to their defaults:
///
/// ```
/// # #[cfg(feature = "serde")]
/// # {
/// use continuous_queue::Settings;
///
/// let settings: Settings = serde_json::from_str("{}").unwrap();
/// assert_eq!(settings.initial_capacity, 16);
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Settings {
    /// Length of the backing array allocated up front.
    pub initial_capacity: usize,
}

impl Settings {
    /// Settings with the given initial capacity.
    pub fn with_initial_capacity(initial_capacity: usize) -> Settings {
        Settings { initial_capacity }
    }
}

impl Default for Settings {
    fn default() -> Settings {
        Settings { initial_capacity: DEFAULT_CAPACITY }
    }
}
