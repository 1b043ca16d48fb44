//! Pool of dataset indices not yet claimed by any cluster.

/// Membership bitset over dataset indices.
///
/// Iteration always follows the original index order, and an index can only
/// leave the pool once. Cluster growth takes the pool by mutable borrow and
/// removes every point it claims.
///
/// # Examples
/// ```
/// use chaincluster_core::FreePoints;
///
/// let mut pool = FreePoints::full(4);
/// assert!(pool.remove(2));
/// assert!(!pool.remove(2));
/// assert_eq!(pool.to_vec(), vec![0, 1, 3]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FreePoints {
    present: Vec<bool>,
    len: usize,
}

impl FreePoints {
    /// Creates a pool holding every index in `0..size`.
    #[must_use]
    pub fn full(size: usize) -> Self {
        Self {
            present: vec![true; size],
            len: size,
        }
    }

    /// Number of indices still free.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns whether every index has been claimed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns whether `index` is still free.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.present.get(index).copied().unwrap_or(false)
    }

    /// Claims `index`, returning `false` when it was not free.
    pub fn remove(&mut self, index: usize) -> bool {
        match self.present.get_mut(index) {
            Some(slot) if *slot => {
                *slot = false;
                self.len -= 1;
                true
            }
            _ => false,
        }
    }

    /// Iterates over the free indices in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.present
            .iter()
            .enumerate()
            .filter_map(|(index, &free)| free.then_some(index))
    }

    /// Snapshot of the free indices in ascending order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<usize> {
        let mut out = Vec::with_capacity(self.len);
        out.extend(self.iter());
        out
    }
}
