//! Ascending singly-linked list with a maximum length.
//!
//! Nodes live in an index arena owned by the list. Links are `u32` slot indices
//! with `u32::MAX` as the "no next node" sentinel, so the chain is a singly-owned
//! sequence with no back references. Callers address nodes through [`Handle`]s
//! that stay valid until the node is removed or evicted.
//!
//! Inserting past `max_len` evicts the head, which is always the smallest
//! value. Unlike [`RankedHeap`](crate::RankedHeap), a single node can be
//! repositioned after its value changed ([`RankedList::re_rank`]) without
//! touching the relative order of the others.
//!
//! # Example
//!
//! ```
//! use rank_core::{Order, RankedList};
//!
//! let mut list = RankedList::new(3);
//! for v in [5, 1, 9, 2] {
//!     list.insert(v);
//! }
//! assert_eq!(list.to_sequence(Order::Ascending), vec![2, 5, 9]);
//! ```

use std::sync::atomic::{AtomicU64, Ordering};

use crate::container::RankedContainer;
use crate::order::Order;

/// Sentinel for "no node".
const NONE: u32 = u32::MAX;

/// Source of process-unique list ids, used to recognise foreign handles.
static NEXT_LIST_ID: AtomicU64 = AtomicU64::new(0);

/// Opaque reference to one node of a [`RankedList`].
///
/// A handle is valid until its node is removed, evicted, or the list is
/// cleared. Handles from a different list are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle {
    list: u64,
    index: u32,
    generation: u32,
}

#[derive(Debug)]
struct Slot<T> {
    value: Option<T>,
    next: u32,
    /// Bumped every time the slot is vacated, invalidating old handles.
    generation: u32,
}

/// Ascending linked list holding at most `max_len` values.
///
/// # Thread safety
///
/// Not thread-safe. Wrap in a `Mutex` to share across threads.
#[derive(Debug)]
pub struct RankedList<T> {
    id: u64,
    slots: Vec<Slot<T>>,
    free: Vec<u32>,
    head: u32,
    len: usize,
    max_len: usize,
}

impl<T: Ord> RankedList<T> {
    /// Creates an empty list that holds at most `max_len` values.
    ///
    /// The arena grows on demand up to `max_len + 1` slots; an insert briefly
    /// holds one extra node before evicting.
    ///
    /// # Panics
    ///
    /// Panics if `max_len` does not fit the `u32` slot index.
    pub fn new(max_len: usize) -> Self {
        assert!(
            max_len < NONE as usize,
            "max_len {max_len} exceeds the slot index range"
        );
        Self {
            id: NEXT_LIST_ID.fetch_add(1, Ordering::Relaxed),
            slots: Vec::new(),
            free: Vec::new(),
            head: NONE,
            len: 0,
            max_len,
        }
    }

    /// Number of values in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Fixed maximum length.
    #[inline]
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Inserts `value` at its sorted position and returns its handle.
    ///
    /// Equal values are kept in reverse insertion order: the new node goes
    /// before the first existing node that is not smaller. If the list grows
    /// past `max_len`, the head is evicted; when that head is the new node the
    /// returned handle is already stale (see [`contains`](Self::contains)).
    pub fn insert(&mut self, value: T) -> Handle {
        self.insert_evicting(value).0
    }

    /// Like [`insert`](Self::insert), also returning the evicted value.
    pub fn insert_evicting(&mut self, value: T) -> (Handle, Option<T>) {
        let index = self.alloc(value);
        self.link_sorted(index);
        let handle = self.handle_at(index);

        let evicted = if self.len > self.max_len {
            self.pop_min()
        } else {
            None
        };
        (handle, evicted)
    }

    /// Removes the node behind `handle` and returns its value.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale or belongs to another list.
    pub fn remove(&mut self, handle: Handle) -> T {
        match self.try_remove(handle) {
            Some(value) => value,
            None => panic!("remove: {handle:?} is not a live node of this RankedList"),
        }
    }

    /// Removes the node behind `handle`, or returns `None` if the handle is
    /// stale or foreign.
    pub fn try_remove(&mut self, handle: Handle) -> Option<T> {
        let index = self.resolve(handle)?;
        self.unlink(index);
        Some(self.release(index))
    }

    /// Removes and returns the smallest value.
    pub fn pop_min(&mut self) -> Option<T> {
        if self.head == NONE {
            return None;
        }
        let index = self.head;
        self.unlink(index);
        Some(self.release(index))
    }

    /// Moves the node behind `handle` to its sorted position.
    ///
    /// Call after changing the value through [`get_mut`](Self::get_mut). The
    /// relative order of every other node is unchanged and the handle stays
    /// valid. Calling it again without a further change is a no-op.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale or belongs to another list.
    pub fn re_rank(&mut self, handle: Handle) {
        let Some(index) = self.resolve(handle) else {
            panic!("re_rank: {handle:?} is not a live node of this RankedList");
        };
        self.unlink(index);
        self.link_sorted(index);
    }

    /// Replaces the value behind `handle` and re-ranks it, returning the old value.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale or belongs to another list.
    pub fn replace(&mut self, handle: Handle, value: T) -> T {
        let Some(index) = self.resolve(handle) else {
            panic!("replace: {handle:?} is not a live node of this RankedList");
        };
        let old = self.slots[index as usize].value.replace(value);
        self.unlink(index);
        self.link_sorted(index);
        match old {
            Some(old) => old,
            None => unreachable!("resolved slot is vacant"),
        }
    }

    /// Returns `true` if `handle` refers to a live node of this list.
    #[inline]
    pub fn contains(&self, handle: Handle) -> bool {
        self.resolve(handle).is_some()
    }

    /// Returns the value behind `handle`.
    #[inline]
    pub fn get(&self, handle: Handle) -> Option<&T> {
        let index = self.resolve(handle)?;
        self.slots[index as usize].value.as_ref()
    }

    /// Returns the value behind `handle` mutably.
    ///
    /// Changing the value's ordering breaks the ascending invariant until
    /// [`re_rank`](Self::re_rank) is called for the same handle. Nothing checks this.
    #[inline]
    pub fn get_mut(&mut self, handle: Handle) -> Option<&mut T> {
        let index = self.resolve(handle)?;
        self.slots[index as usize].value.as_mut()
    }

    /// Smallest value, or `None` when empty.
    #[inline]
    pub fn peek_min(&self) -> Option<&T> {
        if self.head == NONE {
            None
        } else {
            Some(self.value_at(self.head))
        }
    }

    /// Smallest value.
    ///
    /// # Panics
    ///
    /// Panics if the list is empty.
    #[inline]
    pub fn minimum(&self) -> &T {
        match self.peek_min() {
            Some(min) => min,
            None => panic!("minimum() called on an empty RankedList"),
        }
    }

    /// Iterates values in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            cursor: self.head,
            remaining: self.len,
        }
    }

    /// Snapshot of all values in the requested order.
    pub fn to_sequence(&self, order: Order) -> Vec<T>
    where
        T: Clone,
    {
        let mut out: Vec<T> = self.iter().cloned().collect();
        order.apply(&mut out);
        out
    }

    /// Removes every node. All outstanding handles become stale.
    pub fn clear(&mut self) {
        while self.pop_min().is_some() {}
    }

    // -------------------------------------------------------------------------
    // Arena plumbing
    // -------------------------------------------------------------------------

    fn alloc(&mut self, value: T) -> u32 {
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.value = Some(value);
            slot.next = NONE;
            index
        } else {
            let index = self.slots.len() as u32;
            self.slots.push(Slot {
                value: Some(value),
                next: NONE,
                generation: 0,
            });
            index
        }
    }

    fn release(&mut self, index: u32) -> T {
        let slot = &mut self.slots[index as usize];
        slot.generation = slot.generation.wrapping_add(1);
        slot.next = NONE;
        self.free.push(index);
        match slot.value.take() {
            Some(value) => value,
            None => unreachable!("released slot {index} was vacant"),
        }
    }

    #[inline]
    fn handle_at(&self, index: u32) -> Handle {
        Handle {
            list: self.id,
            index,
            generation: self.slots[index as usize].generation,
        }
    }

    #[inline]
    fn resolve(&self, handle: Handle) -> Option<u32> {
        if handle.list != self.id {
            return None;
        }
        let slot = self.slots.get(handle.index as usize)?;
        (slot.generation == handle.generation && slot.value.is_some()).then_some(handle.index)
    }

    #[inline]
    fn value_at(&self, index: u32) -> &T {
        match &self.slots[index as usize].value {
            Some(value) => value,
            None => unreachable!("linked slot {index} is vacant"),
        }
    }

    /// Splices an allocated, unlinked node before the first node not smaller
    /// than it.
    fn link_sorted(&mut self, index: u32) {
        let value = self.value_at(index);
        let mut prev = NONE;
        let mut cursor = self.head;
        while cursor != NONE && self.value_at(cursor) < value {
            prev = cursor;
            cursor = self.slots[cursor as usize].next;
        }

        self.slots[index as usize].next = cursor;
        if prev == NONE {
            self.head = index;
        } else {
            self.slots[prev as usize].next = index;
        }
        self.len += 1;
    }

    /// Unlinks a live node, scanning from head for its predecessor.
    fn unlink(&mut self, index: u32) {
        let next = self.slots[index as usize].next;
        if self.head == index {
            self.head = next;
        } else {
            let mut prev = self.head;
            while prev != NONE && self.slots[prev as usize].next != index {
                prev = self.slots[prev as usize].next;
            }
            assert!(prev != NONE, "node {index} is allocated but not linked");
            self.slots[prev as usize].next = next;
        }
        self.slots[index as usize].next = NONE;
        self.len -= 1;
    }
}

impl<T: Ord> RankedContainer<T> for RankedList<T> {
    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    #[inline]
    fn max_len(&self) -> usize {
        self.max_len
    }

    #[inline]
    fn peek_min(&self) -> Option<&T> {
        RankedList::peek_min(self)
    }

    fn offer(&mut self, value: T) -> Option<T> {
        self.insert_evicting(value).1
    }

    fn to_sequence(&self, order: Order) -> Vec<T>
    where
        T: Clone,
    {
        RankedList::to_sequence(self, order)
    }
}

/// Ascending iterator over a [`RankedList`].
pub struct Iter<'a, T> {
    list: &'a RankedList<T>,
    cursor: u32,
    remaining: usize,
}

impl<'a, T: Ord> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor == NONE {
            return None;
        }
        let slot = &self.list.slots[self.cursor as usize];
        self.cursor = slot.next;
        self.remaining -= 1;
        slot.value.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T: Ord> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T: Ord> IntoIterator for &'a RankedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
