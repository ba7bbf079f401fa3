//! Comparator-ordered waiting list.
//!
//! Holds waiting items in the order defined by a pluggable [`Comparator`].
//! Insertion is stable: an item is placed before the first element it is
//! strictly preferred to, so items the comparator cannot distinguish keep
//! their insertion order. A comparator that never expresses a preference
//! turns the list into a plain FIFO queue.
//!
//! # Complexity
//! Backed by a `VecDeque`. `insert` is O(n) (linear scan), `pop_front`
//! is O(1), positional access is O(1). Waiting sets in a CPU scheduling
//! simulation are small, so the linear scan is not a concern.

use std::cmp::Ordering;
use std::collections::VecDeque;

/// Strict ordering used to place items in an [`OrderedQueue`].
///
/// `Less` means `a` is preferred (goes first), `Greater` means `b` is
/// preferred, `Equal` means "no preference".
pub trait Comparator<T> {
    /// Compares two items.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// A waiting list kept in comparator order.
///
/// # Example
/// ```
/// use u_cpusched::queue::OrderedQueue;
///
/// let mut queue = OrderedQueue::new(|a: &i32, b: &i32| a.cmp(b));
/// queue.insert(5);
/// queue.insert(1);
/// assert_eq!(queue.insert(3), 1);
/// assert_eq!(queue.pop_front(), Some(1));
/// ```
#[derive(Debug, Clone)]
pub struct OrderedQueue<T, C> {
    items: VecDeque<T>,
    comparator: C,
}

impl<T, C: Comparator<T>> OrderedQueue<T, C> {
    /// Creates an empty list ordered by `comparator`.
    pub fn new(comparator: C) -> Self {
        Self {
            items: VecDeque::new(),
            comparator,
        }
    }

    /// Inserts `item` before the first element it is strictly preferred to.
    ///
    /// Returns the zero-based index at which the item landed.
    pub fn insert(&mut self, item: T) -> usize {
        let index = self
            .items
            .iter()
            .position(|existing| self.comparator.compare(&item, existing) == Ordering::Less)
            .unwrap_or(self.items.len());
        self.items.insert(index, item);
        index
    }

    /// The front item, without removing it.
    pub fn peek_front(&self) -> Option<&T> {
        self.items.front()
    }

    /// Removes and returns the front item.
    pub fn pop_front(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// The item at `index`, or `None` if out of bounds.
    pub fn at(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Removes and returns the item at `index`, shifting later items up.
    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        self.items.remove(index)
    }

    /// Number of waiting items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates items front to back.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    /// Removes all items, front to back.
    pub fn drain(&mut self) -> impl Iterator<Item = T> + '_ {
        self.items.drain(..)
    }

    /// The comparator ordering this list.
    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Whether every adjacent pair is in comparator order.
    pub fn is_ordered(&self) -> bool {
        self.items
            .iter()
            .zip(self.items.iter().skip(1))
            .all(|(x, y)| self.comparator.compare(x, y) != Ordering::Greater)
    }
}

impl<T: PartialEq, C: Comparator<T>> OrderedQueue<T, C> {
    /// Removes every element equal to `item` (identity, not comparator order).
    ///
    /// Returns the number of elements removed.
    pub fn remove_all(&mut self, item: &T) -> usize {
        let before = self.items.len();
        self.items.retain(|existing| existing != item);
        before - self.items.len()
    }
}
