//! The contract shared by every bounded ranked container.
//!
//! A bounded ranked container holds at most `max_len()` elements, exposes its
//! current minimum, and evicts the smallest element once capacity is exceeded.
//! Offering values one by one therefore leaves the K largest values seen so far.
//!
//! Two implementations exist:
//!
//! | Type | Offer | Arbitrary removal / re-rank |
//! |------|-------|-----------------------------|
//! | [`RankedList`](crate::RankedList) | O(n) | yes, O(n) |
//! | [`RankedHeap`](crate::RankedHeap) | O(log K) | no |

use crate::order::Order;

/// Fixed-capacity container that keeps the largest elements offered to it.
pub trait RankedContainer<T: Ord> {
    /// Number of elements currently held.
    fn len(&self) -> usize;

    /// Fixed capacity chosen at construction.
    fn max_len(&self) -> usize;

    /// Smallest element, or `None` when empty.
    fn peek_min(&self) -> Option<&T>;

    /// Offers a value, evicting the smallest element if capacity is exceeded.
    ///
    /// Returns the element that left the container because of this call (the
    /// previous minimum or the offered value itself), or `None` if the
    /// container grew.
    fn offer(&mut self, value: T) -> Option<T>;

    /// Sorted snapshot of the contents.
    fn to_sequence(&self, order: Order) -> Vec<T>
    where
        T: Clone;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    fn is_full(&self) -> bool {
        self.len() >= self.max_len()
    }

    /// Smallest element.
    ///
    /// # Panics
    ///
    /// Panics if the container is empty.
    #[inline]
    fn minimum(&self) -> &T {
        match self.peek_min() {
            Some(min) => min,
            None => panic!("minimum() called on an empty ranked container"),
        }
    }

    /// Snapshot in the direction named by `order` (`"ascend"` / `"descend"`).
    fn sorted(&self, order: &str) -> Result<Vec<T>, crate::RankError>
    where
        T: Clone,
    {
        Ok(self.to_sequence(order.parse()?))
    }
}
