#![allow(missing_docs)]

use core::fmt;
use core::iter::{FromIterator, FusedIterator};
use core::ops::{Deref, DerefMut};

use std::slice;
use std::vec;

use log::{debug, trace};

mod dump;
mod error;

pub use dump::{ArrayDump, TreeDump};
pub use error::HeapError;

/// Capacity used when a heap is created without a usable initial capacity.
pub const DEFAULT_CAPACITY: usize = 10;

/// A payload together with the priority it was pushed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Entry<T, P> {
    pub payload: T,
    pub priority: P,
}

impl<T, P> Entry<T, P> {
    pub fn new(payload: T, priority: P) -> Self {
        Entry { payload, priority }
    }

    /// Splits the entry into its `(payload, priority)` pair.
    pub fn into_parts(self) -> (T, P) {
        (self.payload, self.priority)
    }
}

impl<T, P> From<(T, P)> for Entry<T, P> {
    fn from((payload, priority): (T, P)) -> Self {
        Entry { payload, priority }
    }
}

impl<T, P> From<Entry<T, P>> for (T, P) {
    fn from(entry: Entry<T, P>) -> Self {
        entry.into_parts()
    }
}

impl<T: fmt::Display, P: fmt::Display> fmt::Display for Entry<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.payload, self.priority)
    }
}

/// A priority queue implemented with an array-backed binary heap.
///
/// This is a max-heap: the entry with the greatest priority is always at the
/// front. Entries with equal priorities are not reordered against each other
/// on insertion, so an older entry keeps its place above a newer one with the
/// same priority.
///
/// Unlike a plain `Vec`, the heap tracks its own logical capacity and only
/// grows when a push finds it full. Growth goes to `floor(1.25 * capacity) + 1`
/// entries. The capacity never shrinks on its own; see [`resize`].
///
/// # Examples
///
/// ```
/// use prio_heap::{Entry, PriorityHeap};
///
/// let mut heap = PriorityHeap::new();
///
/// // Nothing to look at yet.
/// assert_eq!(heap.try_peek().ok(), None);
///
/// heap.push("A", 5);
/// heap.push("B", 9);
/// heap.push("C", 1);
///
/// // The highest priority is at the front.
/// assert_eq!(heap.peek(), &Entry::new("B", 9));
/// assert_eq!(heap.len(), 3);
///
/// // Popping yields entries by decreasing priority.
/// assert_eq!(heap.pop().payload, "B");
/// assert_eq!(heap.pop().payload, "A");
/// assert_eq!(heap.pop().payload, "C");
/// assert!(heap.is_empty());
/// ```
///
/// Popping or peeking an empty heap is a contract violation and panics. The
/// `try_` variants report it as [`HeapError::Empty`] instead:
///
/// ```
/// use prio_heap::{HeapError, PriorityHeap};
///
/// let mut heap = PriorityHeap::<&str>::new();
/// assert_eq!(heap.try_pop(), Err(HeapError::Empty));
/// ```
///
/// # Time complexity
///
/// | [push]        | [pop]         | [peek] |
/// |---------------|---------------|--------|
/// | *O*(log(*n*)) | *O*(log(*n*)) | *O*(1) |
///
/// A push that has to grow the storage additionally costs *O*(*n*) for the
/// move into the new buffer.
///
/// [push]: PriorityHeap::push
/// [pop]: PriorityHeap::pop
/// [peek]: PriorityHeap::peek
/// [`resize`]: PriorityHeap::resize
pub struct PriorityHeap<T, P = i64> {
    data: Vec<Entry<T, P>>,
    capacity: usize,
}

/// Structure wrapping a mutable reference to the greatest entry on a
/// `PriorityHeap`.
///
/// This `struct` is created by the [`peek_mut`] method on [`PriorityHeap`]. See
/// its documentation for more.
///
/// [`peek_mut`]: PriorityHeap::peek_mut
pub struct PeekMut<'a, T: 'a, P: 'a + Ord> {
    heap: &'a mut PriorityHeap<T, P>,
    sift: bool,
}

impl<T: fmt::Debug, P: Ord + fmt::Debug> fmt::Debug for PeekMut<'_, T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PeekMut").field(&self.heap.data[0]).finish()
    }
}

impl<T, P: Ord> Drop for PeekMut<'_, T, P> {
    fn drop(&mut self) {
        if self.sift {
            self.heap.sift_down(0);
        }
    }
}

impl<T, P: Ord> Deref for PeekMut<'_, T, P> {
    type Target = Entry<T, P>;
    fn deref(&self) -> &Self::Target {
        // PeekMut is only handed out for non-empty heaps.
        &self.heap.data[0]
    }
}

impl<T, P: Ord> DerefMut for PeekMut<'_, T, P> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.sift = true;
        &mut self.heap.data[0]
    }
}

impl<'a, T, P: Ord> PeekMut<'a, T, P> {
    /// Removes the peeked entry from the heap and returns it.
    pub fn pop(mut this: PeekMut<'a, T, P>) -> Entry<T, P> {
        this.sift = false;
        this.heap.pop()
    }
}

impl<T: Clone, P: Clone> Clone for PriorityHeap<T, P> {
    /// Duplicates the live entries into storage of the same capacity.
    fn clone(&self) -> Self {
        match self.try_clone() {
            Ok(heap) => heap,
            Err(err) => fatal(err),
        }
    }

    /// Replaces the contents of `self` with a copy of `source`.
    ///
    /// The old storage is released only after the copy has been built.
    fn clone_from(&mut self, source: &Self) {
        let mut data = match allocate(source.capacity) {
            Ok(data) => data,
            Err(err) => fatal(err),
        };
        data.extend_from_slice(&source.data);
        self.data = data;
        self.capacity = source.capacity;
    }
}

impl<T, P> Default for PriorityHeap<T, P> {
    /// Creates an empty `PriorityHeap<T, P>` with the default capacity.
    #[inline]
    fn default() -> PriorityHeap<T, P> {
        PriorityHeap::new()
    }
}

impl<T: fmt::Debug, P: fmt::Debug> fmt::Debug for PriorityHeap<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

impl<T, P> PriorityHeap<T, P> {
    /// Creates an empty `PriorityHeap` with [`DEFAULT_CAPACITY`] slots.
    ///
    /// # Examples
    ///
    /// ```
    /// use prio_heap::{PriorityHeap, DEFAULT_CAPACITY};
    /// let mut heap = PriorityHeap::new();
    /// heap.push("Steven", 4);
    /// assert_eq!(heap.capacity(), DEFAULT_CAPACITY);
    /// ```
    #[must_use]
    pub fn new() -> PriorityHeap<T, P> {
        PriorityHeap::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty `PriorityHeap` with room for exactly `capacity`
    /// entries before the first growth. A capacity of zero is replaced by
    /// [`DEFAULT_CAPACITY`].
    ///
    /// # Panics
    ///
    /// Panics if the storage cannot be allocated.
    ///
    /// # Examples
    ///
    /// ```
    /// use prio_heap::{PriorityHeap, DEFAULT_CAPACITY};
    ///
    /// let heap = PriorityHeap::<&str>::with_capacity(3);
    /// assert_eq!(heap.capacity(), 3);
    ///
    /// let heap = PriorityHeap::<&str>::with_capacity(0);
    /// assert_eq!(heap.capacity(), DEFAULT_CAPACITY);
    /// ```
    #[must_use]
    pub fn with_capacity(capacity: usize) -> PriorityHeap<T, P> {
        match PriorityHeap::try_with_capacity(capacity) {
            Ok(heap) => heap,
            Err(err) => fatal(err),
        }
    }

    /// Fallible version of [`with_capacity`].
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::ResourceExhaustion`] if the storage cannot be
    /// allocated. No heap is created in that case.
    ///
    /// [`with_capacity`]: PriorityHeap::with_capacity
    pub fn try_with_capacity(capacity: usize) -> Result<PriorityHeap<T, P>, HeapError> {
        let capacity = if capacity < 1 {
            DEFAULT_CAPACITY
        } else {
            capacity
        };

        Ok(PriorityHeap {
            data: allocate(capacity)?,
            capacity,
        })
    }

    /// Fallible version of [`Clone::clone`].
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::ResourceExhaustion`] if the copy cannot be
    /// allocated. `self` is untouched either way.
    pub fn try_clone(&self) -> Result<PriorityHeap<T, P>, HeapError>
    where
        T: Clone,
        P: Clone,
    {
        let mut data = allocate(self.capacity)?;
        data.extend_from_slice(&self.data);
        Ok(PriorityHeap {
            data,
            capacity: self.capacity,
        })
    }

    /// Returns the greatest entry in the heap.
    ///
    /// # Panics
    ///
    /// Panics if the heap is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use prio_heap::{Entry, PriorityHeap};
    /// let mut heap = PriorityHeap::new();
    /// heap.push("Bob", 1);
    /// heap.push("Alice", 5);
    /// heap.push("Eve", 2);
    /// assert_eq!(heap.peek(), &Entry::new("Alice", 5));
    /// ```
    ///
    /// # Time complexity
    ///
    /// Cost is *O*(1) in the worst case.
    #[must_use]
    #[track_caller]
    pub fn peek(&self) -> &Entry<T, P> {
        match self.try_peek() {
            Ok(entry) => entry,
            Err(err) => fatal(err),
        }
    }

    /// Returns the greatest entry in the heap, or [`HeapError::Empty`].
    pub fn try_peek(&self) -> Result<&Entry<T, P>, HeapError> {
        self.data.first().ok_or(HeapError::Empty)
    }

    /// Returns the payload of the greatest entry.
    ///
    /// # Panics
    ///
    /// Panics if the heap is empty.
    #[must_use]
    #[track_caller]
    pub fn front(&self) -> &T {
        &self.peek().payload
    }

    /// Returns the number of entries the heap can hold before it has to grow.
    ///
    /// # Examples
    ///
    /// ```
    /// use prio_heap::PriorityHeap;
    /// let mut heap = PriorityHeap::with_capacity(1);
    /// heap.push("Bob", 4);
    /// assert_eq!(heap.capacity(), 1);
    ///
    /// // Full, so the next push grows to floor(1.25 * 1) + 1.
    /// heap.push("Eve", 2);
    /// assert_eq!(heap.capacity(), 2);
    /// ```
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Reallocates the storage to hold exactly `new_capacity` entries.
    ///
    /// The request is raised to the current length (and to at least one
    /// slot), so live entries are never dropped. This is the only way the
    /// capacity of a heap can shrink.
    ///
    /// # Panics
    ///
    /// Panics if the storage cannot be allocated.
    ///
    /// # Examples
    ///
    /// ```
    /// use prio_heap::PriorityHeap;
    /// let mut heap = PriorityHeap::with_capacity(100);
    /// heap.push("Alice", 1);
    /// heap.push("Bob", 2);
    ///
    /// heap.resize(1);
    /// assert_eq!(heap.capacity(), 2);
    /// assert_eq!(heap.len(), 2);
    /// ```
    pub fn resize(&mut self, new_capacity: usize) {
        if let Err(err) = self.try_resize(new_capacity) {
            fatal(err)
        }
    }

    /// Fallible version of [`resize`].
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::ResourceExhaustion`] if the new storage cannot be
    /// allocated. The heap keeps its old storage in that case.
    ///
    /// [`resize`]: PriorityHeap::resize
    pub fn try_resize(&mut self, new_capacity: usize) -> Result<(), HeapError> {
        let new_capacity = new_capacity.max(self.data.len()).max(1);
        let mut data = allocate(new_capacity)?;

        trace!(
            "resizing heap storage from {} to {} entries ({} live)",
            self.capacity,
            new_capacity,
            self.data.len()
        );

        data.append(&mut self.data);
        self.data = data;
        self.capacity = new_capacity;
        Ok(())
    }

    /// Shrinks the capacity down to the current length (at least one slot).
    pub fn shrink_to_fit(&mut self) {
        self.resize(self.data.len());
    }

    /// Returns an iterator visiting all entries in storage order, which is
    /// the level order of the heap tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use prio_heap::PriorityHeap;
    /// let heap = PriorityHeap::from([("a", 1), ("b", 2), ("c", 3)]);
    ///
    /// // The first entry visited is the greatest one, the rest in heap order.
    /// assert_eq!(heap.iter().next().map(|e| e.payload), Some("c"));
    /// assert_eq!(heap.iter().count(), 3);
    /// ```
    pub fn iter(&self) -> Iter<'_, T, P> {
        Iter {
            iter: self.data.iter(),
        }
    }

    /// Returns the live entries in storage order.
    #[must_use]
    pub fn as_slice(&self) -> &[Entry<T, P>] {
        &self.data
    }

    /// Consumes the heap and returns its entries in storage order.
    #[must_use = "`self` will be dropped if the result is not used"]
    pub fn into_vec(self) -> Vec<Entry<T, P>> {
        self.into()
    }

    /// Returns the number of live entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use prio_heap::PriorityHeap;
    /// let heap = PriorityHeap::from([("a", 1), ("b", 3)]);
    ///
    /// assert_eq!(heap.len(), 2);
    /// ```
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Checks if the heap is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use prio_heap::PriorityHeap;
    /// let mut heap = PriorityHeap::new();
    ///
    /// assert!(heap.is_empty());
    ///
    /// heap.push("a", 3);
    /// heap.push("b", 5);
    /// heap.push("c", 1);
    ///
    /// assert!(!heap.is_empty());
    /// ```
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops all entries. The capacity is kept.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Renders the heap as a sideways tree, see [`TreeDump`].
    pub fn dump_tree(&self) -> TreeDump<'_, T, P> {
        TreeDump::new(&self.data)
    }

    /// Renders the payloads in storage order, see [`ArrayDump`].
    pub fn dump_array(&self) -> ArrayDump<'_, T, P> {
        ArrayDump::new(&self.data)
    }
}

impl<T, P: Ord> PriorityHeap<T, P> {
    /// Returns a mutable reference to the greatest entry in the heap, or
    /// `None` if it is empty.
    ///
    /// Heap order is restored when the returned guard is dropped.
    ///
    /// Note: If the `PeekMut` value is leaked, the heap may be in an
    /// inconsistent state.
    ///
    /// # Examples
    ///
    /// ```
    /// use prio_heap::PriorityHeap;
    /// let mut heap = PriorityHeap::new();
    /// assert!(heap.peek_mut().is_none());
    ///
    /// heap.push("Bob", 1);
    /// heap.push("Alice", 5);
    /// heap.push("Eve", 2);
    /// {
    ///     let mut top = heap.peek_mut().unwrap();
    ///     top.priority = 0;
    /// }
    /// assert_eq!(heap.front(), &"Eve");
    /// ```
    ///
    /// # Time complexity
    ///
    /// If the entry is modified then the worst case time complexity is *O*(log(*n*)),
    /// otherwise it's *O*(1).
    pub fn peek_mut(&mut self) -> Option<PeekMut<'_, T, P>> {
        if self.is_empty() {
            None
        } else {
            Some(PeekMut {
                heap: self,
                sift: false,
            })
        }
    }

    /// Removes the greatest entry from the heap and returns it.
    ///
    /// # Panics
    ///
    /// Panics if the heap is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use prio_heap::PriorityHeap;
    /// let mut heap = PriorityHeap::from([("low", 1), ("high", 3)]);
    ///
    /// assert_eq!(heap.pop().payload, "high");
    /// assert_eq!(heap.pop().payload, "low");
    /// assert!(heap.is_empty());
    /// ```
    ///
    /// # Time complexity
    ///
    /// The worst case cost of `pop` on a heap containing *n* entries is *O*(log(*n*)).
    #[track_caller]
    pub fn pop(&mut self) -> Entry<T, P> {
        match self.try_pop() {
            Ok(entry) => entry,
            Err(err) => fatal(err),
        }
    }

    /// Removes the greatest entry from the heap, or returns
    /// [`HeapError::Empty`].
    pub fn try_pop(&mut self) -> Result<Entry<T, P>, HeapError> {
        if self.data.len() <= 1 {
            return self.data.pop().ok_or(HeapError::Empty);
        }

        // The last entry takes over the root and sinks to its place.
        let top = self.data.swap_remove(0);
        self.sift_down(0);
        Ok(top)
    }

    /// Pushes an entry onto the heap.
    ///
    /// # Panics
    ///
    /// Panics if the heap is full and the grown storage cannot be allocated.
    ///
    /// # Examples
    ///
    /// ```
    /// use prio_heap::{Entry, PriorityHeap};
    /// let mut heap = PriorityHeap::new();
    /// heap.push("Bob", 3);
    /// heap.push("Alice", 5);
    /// heap.push("Eve", 1);
    ///
    /// assert_eq!(heap.len(), 3);
    /// assert_eq!(heap.peek(), &Entry::new("Alice", 5));
    /// ```
    ///
    /// # Time complexity
    ///
    /// The worst case cost of a push is *O*(log(*n*)) for the sift plus, when
    /// the heap is full, *O*(*n*) to move the entries into the grown storage.
    pub fn push(&mut self, payload: T, priority: P) {
        if let Err(err) = self.grow_if_full() {
            fatal(err)
        }
        self.push_within_capacity(Entry { payload, priority });
    }

    /// Fallible version of [`push`].
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::ResourceExhaustion`] or
    /// [`HeapError::CapacityOverflow`] if the heap is full and cannot grow.
    /// The heap is unchanged and the entry is dropped in that case.
    ///
    /// [`push`]: PriorityHeap::push
    pub fn try_push(&mut self, payload: T, priority: P) -> Result<(), HeapError> {
        self.grow_if_full()?;
        self.push_within_capacity(Entry { payload, priority });
        Ok(())
    }

    /// Checks that no entry has a greater priority than its parent.
    ///
    /// # Examples
    ///
    /// ```
    /// use prio_heap::PriorityHeap;
    /// let heap = PriorityHeap::from([("a", 4), ("b", 8), ("c", 8), ("d", 1)]);
    /// assert!(heap.is_heap_ordered());
    /// ```
    #[must_use]
    pub fn is_heap_ordered(&self) -> bool {
        (1..self.data.len()).all(|i| self.data[i].priority <= self.data[(i - 1) / 2].priority)
    }

    /// Consumes the `PriorityHeap` and returns its entries in ascending
    /// priority order.
    ///
    /// # Examples
    ///
    /// ```
    /// use prio_heap::PriorityHeap;
    ///
    /// let mut heap = PriorityHeap::from([("a", 1), ("b", 2), ("d", 4), ("e", 5), ("g", 7)]);
    /// heap.push("f", 6);
    /// heap.push("c", 3);
    ///
    /// let priorities: Vec<_> = heap.into_sorted_vec().into_iter().map(|e| e.priority).collect();
    /// assert_eq!(priorities, [1, 2, 3, 4, 5, 6, 7]);
    /// ```
    #[must_use = "`self` will be dropped if the result is not used"]
    pub fn into_sorted_vec(mut self) -> Vec<Entry<T, P>> {
        let mut end = self.len();
        while end > 1 {
            end -= 1;
            self.data.swap(0, end);
            self.sift_down_range(0, end);
        }
        self.into_vec()
    }

    /// Returns an iterator which retrieves entries in heap order.
    /// This method consumes the original heap.
    ///
    /// # Examples
    ///
    /// ```
    /// use prio_heap::PriorityHeap;
    /// let heap = PriorityHeap::from([("a", 1), ("b", 2), ("c", 3), ("d", 4), ("e", 5)]);
    ///
    /// let top: Vec<_> = heap.into_iter_sorted().take(2).map(|e| e.payload).collect();
    /// assert_eq!(top, ["e", "d"]);
    /// ```
    pub fn into_iter_sorted(self) -> IntoIterSorted<T, P> {
        IntoIterSorted { inner: self }
    }

    fn grow_if_full(&mut self) -> Result<(), HeapError> {
        if self.data.len() < self.capacity {
            return Ok(());
        }

        let new_capacity = grown_capacity(self.capacity)?;
        trace!(
            "heap full at {} entries, growing to {}",
            self.capacity,
            new_capacity
        );
        self.try_resize(new_capacity)
    }

    fn push_within_capacity(&mut self, entry: Entry<T, P>) {
        debug_assert!(self.data.len() < self.capacity);
        let old_len = self.data.len();
        self.data.push(entry);
        self.sift_up(old_len);
    }

    /// Moves the entry at `pos` towards the root while it is strictly
    /// greater than its parent. Returns its final position.
    fn sift_up(&mut self, mut pos: usize) -> usize {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if self.data[pos].priority <= self.data[parent].priority {
                break;
            }
            self.data.swap(pos, parent);
            pos = parent;
        }
        pos
    }

    fn sift_down(&mut self, pos: usize) {
        let end = self.len();
        self.sift_down_range(pos, end);
    }

    /// Take the entry at `pos` and move it down the heap, considering only
    /// `data[..end]`, while it is not greater than its bigger child.
    fn sift_down_range(&mut self, mut pos: usize, end: usize) {
        loop {
            let left = 2 * pos + 1;
            if left >= end {
                return;
            }

            // The right child wins only when it exists and is strictly greater.
            let right = left + 1;
            let child = if right < end && self.data[right].priority > self.data[left].priority {
                right
            } else {
                left
            };

            if self.data[pos].priority > self.data[child].priority {
                return;
            }

            self.data.swap(pos, child);
            pos = child;
        }
    }
}

fn allocate<E>(capacity: usize) -> Result<Vec<E>, HeapError> {
    let mut data = Vec::new();
    data.try_reserve_exact(capacity).map_err(|source| {
        debug!("allocation of {} heap entries failed: {}", capacity, source);
        HeapError::ResourceExhaustion {
            requested: capacity,
            source,
        }
    })?;
    Ok(data)
}

/// `floor(1.25 * capacity) + 1`, strictly greater than `capacity`.
fn grown_capacity(capacity: usize) -> Result<usize, HeapError> {
    capacity
        .checked_add(capacity / 4)
        .and_then(|grown| grown.checked_add(1))
        .ok_or(HeapError::CapacityOverflow(capacity))
}

#[cold]
#[track_caller]
fn fatal(err: HeapError) -> ! {
    panic!("{}", err)
}

impl<T: PartialEq, P: PartialEq> PartialEq for PriorityHeap<T, P> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<T: Eq, P: Eq> Eq for PriorityHeap<T, P> {}

/// An iterator over the entries of a `PriorityHeap`.
///
/// This `struct` is created by [`PriorityHeap::iter()`]. See its
/// documentation for more.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, T: 'a, P: 'a> {
    iter: slice::Iter<'a, Entry<T, P>>,
}

impl<T: fmt::Debug, P: fmt::Debug> fmt::Debug for Iter<'_, T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.iter.as_slice()).finish()
    }
}

impl<T, P> Clone for Iter<'_, T, P> {
    fn clone(&self) -> Self {
        Iter {
            iter: self.iter.clone(),
        }
    }
}

impl<'a, T, P> Iterator for Iter<'a, T, P> {
    type Item = &'a Entry<T, P>;

    #[inline]
    fn next(&mut self) -> Option<&'a Entry<T, P>> {
        self.iter.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }

    #[inline]
    fn last(self) -> Option<&'a Entry<T, P>> {
        self.iter.last()
    }
}

impl<'a, T, P> DoubleEndedIterator for Iter<'a, T, P> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a Entry<T, P>> {
        self.iter.next_back()
    }
}

impl<T, P> ExactSizeIterator for Iter<'_, T, P> {}

impl<T, P> FusedIterator for Iter<'_, T, P> {}

/// An owning iterator over the entries of a `PriorityHeap`, in storage order.
///
/// This `struct` is created by [`PriorityHeap::into_iter()`]
/// (provided by the [`IntoIterator`] trait).
#[derive(Clone)]
pub struct IntoIter<T, P> {
    iter: vec::IntoIter<Entry<T, P>>,
}

impl<T: fmt::Debug, P: fmt::Debug> fmt::Debug for IntoIter<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.iter.as_slice()).finish()
    }
}

impl<T, P> Iterator for IntoIter<T, P> {
    type Item = Entry<T, P>;

    #[inline]
    fn next(&mut self) -> Option<Entry<T, P>> {
        self.iter.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<T, P> DoubleEndedIterator for IntoIter<T, P> {
    #[inline]
    fn next_back(&mut self) -> Option<Entry<T, P>> {
        self.iter.next_back()
    }
}

impl<T, P> ExactSizeIterator for IntoIter<T, P> {}

impl<T, P> FusedIterator for IntoIter<T, P> {}

/// An owning iterator yielding entries by decreasing priority.
///
/// This `struct` is created by [`PriorityHeap::into_iter_sorted()`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Clone, Debug)]
pub struct IntoIterSorted<T, P> {
    inner: PriorityHeap<T, P>,
}

impl<T, P: Ord> Iterator for IntoIterSorted<T, P> {
    type Item = Entry<T, P>;

    #[inline]
    fn next(&mut self) -> Option<Entry<T, P>> {
        self.inner.try_pop().ok()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let exact = self.inner.len();
        (exact, Some(exact))
    }
}

impl<T, P: Ord> ExactSizeIterator for IntoIterSorted<T, P> {}

impl<T, P: Ord> FusedIterator for IntoIterSorted<T, P> {}

impl<T, P: Ord> From<Vec<(T, P)>> for PriorityHeap<T, P> {
    /// Builds a heap by pushing every pair in order.
    fn from(vec: Vec<(T, P)>) -> PriorityHeap<T, P> {
        vec.into_iter().collect()
    }
}

impl<T, P: Ord, const N: usize> From<[(T, P); N]> for PriorityHeap<T, P> {
    /// ```
    /// use prio_heap::PriorityHeap;
    ///
    /// let mut h1 = PriorityHeap::from([("a", 1), ("d", 4), ("b", 2), ("c", 3)]);
    /// let mut h2: PriorityHeap<_, _> = [("a", 1), ("d", 4), ("b", 2), ("c", 3)].into();
    /// while let (Ok(a), Ok(b)) = (h1.try_pop(), h2.try_pop()) {
    ///     assert_eq!(a, b);
    /// }
    /// ```
    fn from(arr: [(T, P); N]) -> Self {
        IntoIterator::into_iter(arr).collect()
    }
}

impl<T, P> From<PriorityHeap<T, P>> for Vec<Entry<T, P>> {
    /// Converts a `PriorityHeap<T, P>` into a `Vec<Entry<T, P>>`.
    ///
    /// This conversion requires no data movement or allocation.
    fn from(heap: PriorityHeap<T, P>) -> Vec<Entry<T, P>> {
        heap.data
    }
}

impl<T, P: Ord> FromIterator<(T, P)> for PriorityHeap<T, P> {
    fn from_iter<I: IntoIterator<Item = (T, P)>>(iter: I) -> PriorityHeap<T, P> {
        iter.into_iter()
            .map(|(payload, priority)| Entry { payload, priority })
            .collect()
    }
}

impl<T, P: Ord> FromIterator<Entry<T, P>> for PriorityHeap<T, P> {
    fn from_iter<I: IntoIterator<Item = Entry<T, P>>>(iter: I) -> PriorityHeap<T, P> {
        let iter = iter.into_iter();
        let mut heap = PriorityHeap::with_capacity(iter.size_hint().0);
        heap.extend(iter);
        heap
    }
}

impl<T, P> IntoIterator for PriorityHeap<T, P> {
    type Item = Entry<T, P>;
    type IntoIter = IntoIter<T, P>;

    /// Creates a consuming iterator that moves each entry out of the heap in
    /// storage order.
    fn into_iter(self) -> IntoIter<T, P> {
        IntoIter {
            iter: self.data.into_iter(),
        }
    }
}

impl<'a, T, P> IntoIterator for &'a PriorityHeap<T, P> {
    type Item = &'a Entry<T, P>;
    type IntoIter = Iter<'a, T, P>;

    fn into_iter(self) -> Iter<'a, T, P> {
        self.iter()
    }
}

impl<T, P: Ord> Extend<(T, P)> for PriorityHeap<T, P> {
    #[inline]
    fn extend<I: IntoIterator<Item = (T, P)>>(&mut self, iter: I) {
        for (payload, priority) in iter {
            self.push(payload, priority);
        }
    }
}

impl<T, P: Ord> Extend<Entry<T, P>> for PriorityHeap<T, P> {
    #[inline]
    fn extend<I: IntoIterator<Item = Entry<T, P>>>(&mut self, iter: I) {
        for Entry { payload, priority } in iter {
            self.push(payload, priority);
        }
    }
}
