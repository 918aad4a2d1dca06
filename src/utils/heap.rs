//! Binary min-heap priority queue with element-embedded handles.
//!
//! This module provides [`BinaryHeapMinPriorityQueue`], a priority queue whose elements carry
//! their own priority and their current position inside the heap array (the *handle*). Because
//! every element always knows where it lives, [`decrease_priority`](BinaryHeapMinPriorityQueue::decrease_priority)
//! runs in O(log n) without any auxiliary lookup table.
//!
//! # Handle Invariant
//!
//! After every mutation, for each queued element `e`, `e.handle() == Some(i)` where `i` is the
//! index of `e` in the backing array. Elements that leave the queue get the handle `None`.
//!
//! # Interior Mutability
//!
//! The setters of [`PriorityQueueElement`] take `&self`. Implementors keep priority and handle
//! in [`Cell`](std::cell::Cell)s so the queue can store plain shared references (`&T`) to
//! elements that live elsewhere, such as the nodes of a graph, and still keep their handles up
//! to date.

use crate::{Error, Result};

/// Capability set required from elements of a [`BinaryHeapMinPriorityQueue`].
///
/// # Examples
///
/// ```rust
/// use std::cell::Cell;
/// use graphalgos::utils::heap::PriorityQueueElement;
///
/// struct Task {
///     priority: Cell<f64>,
///     handle: Cell<Option<usize>>,
/// }
///
/// impl PriorityQueueElement for Task {
///     fn priority(&self) -> f64 { self.priority.get() }
///     fn set_priority(&self, priority: f64) { self.priority.set(priority) }
///     fn handle(&self) -> Option<usize> { self.handle.get() }
///     fn set_handle(&self, handle: Option<usize>) { self.handle.set(handle) }
/// }
/// ```
pub trait PriorityQueueElement {
    /// Returns the current priority; lower values are extracted first.
    fn priority(&self) -> f64;

    /// Overwrites the priority.
    ///
    /// Only the queue should call this while the element is queued, otherwise the heap
    /// property may be broken.
    fn set_priority(&self, priority: f64);

    /// Returns the position of the element in the heap array, or `None` when not queued.
    fn handle(&self) -> Option<usize>;

    /// Overwrites the handle.
    fn set_handle(&self, handle: Option<usize>);
}

impl<T: PriorityQueueElement + ?Sized> PriorityQueueElement for &T {
    fn priority(&self) -> f64 {
        (**self).priority()
    }

    fn set_priority(&self, priority: f64) {
        (**self).set_priority(priority);
    }

    fn handle(&self) -> Option<usize> {
        (**self).handle()
    }

    fn set_handle(&self, handle: Option<usize>) {
        (**self).set_handle(handle);
    }
}

/// A binary min-heap over [`PriorityQueueElement`]s.
///
/// The backing vector is the arena and each element's handle is its index into it. Ties are
/// broken arbitrarily; no stable order is guaranteed.
///
/// | Operation | Complexity |
/// |-----------|------------|
/// | [`insert`](Self::insert) | O(log n) |
/// | [`minimum`](Self::minimum) | O(1) |
/// | [`extract_minimum`](Self::extract_minimum) | O(log n) |
/// | [`decrease_priority`](Self::decrease_priority) | O(log n) |
///
/// # Thread Safety
///
/// The queue is not thread-safe. Its elements mutate through shared references, and
/// concurrent use would break the handle invariant.
#[derive(Debug)]
pub struct BinaryHeapMinPriorityQueue<E> {
    heap: Vec<E>,
}

impl<E> Default for BinaryHeapMinPriorityQueue<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> BinaryHeapMinPriorityQueue<E> {
    /// Creates a new empty queue.
    #[must_use]
    pub fn new() -> Self {
        BinaryHeapMinPriorityQueue { heap: Vec::new() }
    }

    /// Creates a new empty queue with room for `capacity` elements.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        BinaryHeapMinPriorityQueue {
            heap: Vec::with_capacity(capacity),
        }
    }

    /// Returns `true` if the queue holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of queued elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns an iterator over the queued elements in heap-array order.
    ///
    /// The element yielded at position `i` has handle `Some(i)`.
    pub fn iter(&self) -> impl Iterator<Item = &E> + '_ {
        self.heap.iter()
    }
}

impl<E: PriorityQueueElement + PartialEq> BinaryHeapMinPriorityQueue<E> {
    /// Inserts an element, returning the handle it ends up at.
    ///
    /// The element is appended to the array and sifted up while its priority is strictly less
    /// than its parent's.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the element is already queued in this heap.
    pub fn insert(&mut self, element: E) -> Result<usize> {
        if self.position_of(&element).is_some() {
            return Err(invalid_argument!("element is already queued"));
        }

        let index = self.heap.len();
        element.set_handle(Some(index));
        self.heap.push(element);

        Ok(self.sift_up(index))
    }

    /// Returns the element with the lowest priority without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyQueue`] if the queue is empty.
    pub fn minimum(&self) -> Result<&E> {
        self.heap.first().ok_or(Error::EmptyQueue)
    }

    /// Removes and returns the element with the lowest priority.
    ///
    /// The extracted element's handle is reset to `None`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyQueue`] if the queue is empty.
    pub fn extract_minimum(&mut self) -> Result<E> {
        if self.heap.is_empty() {
            return Err(Error::EmptyQueue);
        }

        let minimum = self.heap.swap_remove(0);
        minimum.set_handle(None);

        if let Some(root) = self.heap.first() {
            root.set_handle(Some(0));
            self.sift_down(0);
        }

        Ok(minimum)
    }

    /// Lowers the priority of a queued element and restores the heap property.
    ///
    /// The element is located through its handle; the queued instance is the one updated.
    ///
    /// # Errors
    ///
    /// - [`Error::NotFound`] if `element` is not currently in this queue
    /// - [`Error::InvalidArgument`] if `new_priority` is not strictly less than the current
    ///   priority (this includes a NaN priority)
    pub fn decrease_priority(&mut self, element: &E, new_priority: f64) -> Result<()> {
        let index = self
            .position_of(element)
            .ok_or_else(|| Error::NotFound("element is not in the priority queue".to_string()))?;

        let current = self.heap[index].priority();
        if !(new_priority < current) {
            return Err(invalid_argument!(
                "new priority {} is not strictly less than the current priority {}",
                new_priority,
                current
            ));
        }

        self.heap[index].set_priority(new_priority);
        self.sift_up(index);
        Ok(())
    }

    /// Removes every element, resetting their handles to `None`.
    pub fn clear(&mut self) {
        for element in self.heap.drain(..) {
            element.set_handle(None);
        }
    }

    /// Returns the index of `element` if it is queued here.
    fn position_of(&self, element: &E) -> Option<usize> {
        let index = element.handle()?;
        match self.heap.get(index) {
            Some(queued) if queued == element && queued.handle() == Some(index) => Some(index),
            _ => None,
        }
    }

    /// Moves the element at `index` towards the root until its parent is not greater.
    fn sift_up(&mut self, mut index: usize) -> usize {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.heap[index].priority() < self.heap[parent].priority() {
                self.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
        index
    }

    /// Moves the element at `index` down, swapping with the smaller child, until the heap
    /// property holds or a leaf is reached.
    fn sift_down(&mut self, mut index: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut smallest = index;

            if left < len && self.heap[left].priority() < self.heap[smallest].priority() {
                smallest = left;
            }
            if right < len && self.heap[right].priority() < self.heap[smallest].priority() {
                smallest = right;
            }
            if smallest == index {
                break;
            }

            self.swap(index, smallest);
            index = smallest;
        }
    }

    /// Swaps two array slots and their handles together.
    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.heap[a].set_handle(Some(a));
        self.heap[b].set_handle(Some(b));
    }
}
