//! Bounded binary min-heap that keeps the largest values pushed into it.
//!
//! Below capacity a push is an ordinary O(log K) heap insert. At capacity the
//! push is fused with a pop of the minimum: a value larger than the current root
//! replaces it and is sifted down; anything else is rejected. The root is the
//! smallest of the K largest values seen so far.
//!
//! # Example
//!
//! ```
//! use rank_core::{Order, RankedHeap};
//!
//! let mut heap = RankedHeap::new(3);
//! for v in [4, 9, 1, 7, 3] {
//!     heap.push(v);
//! }
//! assert_eq!(heap.to_sequence(Order::Descending), vec![9, 7, 4]);
//! assert_eq!(*heap.minimum(), 4);
//! ```

use crate::container::RankedContainer;
use crate::order::Order;

/// Fixed-capacity min-heap.
///
/// No arbitrary removal or re-ranking; use [`RankedList`](crate::RankedList)
/// when a single element's value can change after insertion.
#[derive(Debug, Clone)]
pub struct RankedHeap<T> {
    /// Heap-ordered values; `data[0]` is the minimum.
    data: Vec<T>,
    max_len: usize,
}

impl<T: Ord> RankedHeap<T> {
    /// Creates an empty heap holding at most `max_len` values.
    pub fn new(max_len: usize) -> Self {
        Self {
            data: Vec::new(),
            max_len,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Pushes a value, keeping only the `max_len` largest.
    ///
    /// Returns `None` if the heap grew. At capacity, returns the displaced
    /// minimum when `value` is larger than it, otherwise returns `value`
    /// itself (a value equal to the minimum is rejected).
    pub fn push(&mut self, value: T) -> Option<T> {
        if self.data.len() < self.max_len {
            self.data.push(value);
            self.sift_up(self.data.len() - 1);
            return None;
        }

        match self.data.first_mut() {
            Some(min) if *min < value => {
                let displaced = std::mem::replace(min, value);
                self.sift_down(0);
                Some(displaced)
            }
            _ => Some(value),
        }
    }

    /// Smallest value, or `None` when empty.
    #[inline]
    pub fn peek_min(&self) -> Option<&T> {
        self.data.first()
    }

    /// Smallest value.
    ///
    /// # Panics
    ///
    /// Panics if the heap is empty.
    #[inline]
    pub fn minimum(&self) -> &T {
        match self.data.first() {
            Some(min) => min,
            None => panic!("minimum() called on an empty RankedHeap"),
        }
    }

    /// Sorted snapshot, O(K log K).
    pub fn to_sequence(&self, order: Order) -> Vec<T>
    where
        T: Clone,
    {
        let mut out = self.data.clone();
        out.sort();
        order.apply(&mut out);
        out
    }

    /// Consumes the heap, returning its values in ascending order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        self.data.sort();
        self.data
    }

    /// Values in heap order (unspecified beyond the root being smallest).
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }

    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if self.data[pos] < self.data[parent] {
                self.data.swap(pos, parent);
                pos = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut pos: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * pos + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let smaller = if right < len && self.data[right] < self.data[left] {
                right
            } else {
                left
            };
            if self.data[smaller] < self.data[pos] {
                self.data.swap(pos, smaller);
                pos = smaller;
            } else {
                break;
            }
        }
    }
}

impl<T: Ord> RankedContainer<T> for RankedHeap<T> {
    #[inline]
    fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    fn max_len(&self) -> usize {
        self.max_len
    }

    #[inline]
    fn peek_min(&self) -> Option<&T> {
        self.data.first()
    }

    fn offer(&mut self, value: T) -> Option<T> {
        self.push(value)
    }

    fn to_sequence(&self, order: Order) -> Vec<T>
    where
        T: Clone,
    {
        RankedHeap::to_sequence(self, order)
    }
}

impl<T: Ord> Extend<T> for RankedHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heap_ok<T: Ord>(heap: &RankedHeap<T>) -> bool {
        (1..heap.data.len()).all(|i| heap.data[(i - 1) / 2] <= heap.data[i])
    }

    #[test]
    fn new_is_empty() {
        let heap: RankedHeap<u32> = RankedHeap::new(10);
        assert!(heap.is_empty());
        assert_eq!(heap.len(), 0);
        assert_eq!(heap.max_len(), 10);
        assert!(heap.peek_min().is_none());
    }

    #[test]
    fn keeps_largest_values() {
        let mut heap = RankedHeap::new(10);
        for v in [5, 1, 3, 2, 15, 12, 32, 24, 41, 4, 2] {
            heap.push(v);
            assert!(heap_ok(&heap));
        }
        assert_eq!(heap.len(), 10);
        assert_eq!(
            heap.to_sequence(Order::Descending),
            vec![41, 32, 24, 15, 12, 5, 4, 3, 2, 2]
        );

        heap.push(44);
        assert_eq!(
            heap.to_sequence(Order::Ascending),
            vec![2, 3, 4, 5, 12, 15, 24, 32, 41, 44]
        );
    }

    #[test]
    fn push_reports_what_left() {
        let mut heap = RankedHeap::new(2);
        assert_eq!(heap.push(5), None);
        assert_eq!(heap.push(8), None);
        assert_eq!(heap.push(6), Some(5));
        assert_eq!(heap.push(1), Some(1));
        // Equal to the minimum: rejected.
        assert_eq!(heap.push(6), Some(6));
        assert_eq!(heap.into_sorted_vec(), vec![6, 8]);
    }

    #[test]
    fn zero_capacity_rejects_everything() {
        let mut heap = RankedHeap::new(0);
        assert_eq!(heap.push(3), Some(3));
        assert!(heap.is_empty());
    }

    #[test]
    fn minimum_floor_only_rises() {
        let mut heap = RankedHeap::new(4);
        let mut floor = None;
        for i in 0..200u32 {
            let v = (i * 37 + 11) % 101;
            heap.push(v);
            if heap.len() == heap.max_len() {
                let min = *heap.minimum();
                if let Some(prev) = floor {
                    assert!(min >= prev, "floor dropped from {prev} to {min}");
                }
                floor = Some(min);
            }
        }
        assert!(heap_ok(&heap));
    }

    #[test]
    #[should_panic(expected = "empty RankedHeap")]
    fn minimum_on_empty_panics() {
        let heap: RankedHeap<i64> = RankedHeap::new(3);
        heap.minimum();
    }

    #[test]
    fn sorted_by_name_rejects_unknown_order() {
        let mut heap = RankedHeap::new(3);
        heap.extend([1, 2, 3]);
        assert_eq!(heap.sorted("ascend").unwrap(), vec![1, 2, 3]);
        assert_eq!(heap.sorted("descend").unwrap(), vec![3, 2, 1]);
        let err = heap.sorted("shuffled").unwrap_err();
        assert!(matches!(err, crate::RankError::UnsupportedOrder(_)));
    }

    #[test]
    fn clear_resets() {
        let mut heap = RankedHeap::new(2);
        heap.extend([7, 9]);
        heap.clear();
        assert!(heap.is_empty());
        assert_eq!(heap.push(1), None);
    }

    #[test]
    fn stress_matches_sort() {
        let mut heap = RankedHeap::new(64);
        let mut all = Vec::new();
        for i in 0..1000u32 {
            let v = (i * 7 + 13) % 1000;
            heap.push(v);
            all.push(v);
        }
        all.sort_unstable_by(|a, b| b.cmp(a));
        all.truncate(64);
        assert_eq!(heap.to_sequence(Order::Descending), all);
        assert_eq!(heap.iter().count(), 64);
    }
}
