//! Sorted priority queue for path-prefix frontiers.
//!
//! Entries are kept in a deque sorted ascending by priority. Insertion is a
//! linear scan that places the new entry before the first strictly greater
//! priority, so equal priorities come out in insertion order (FIFO).

use std::collections::VecDeque;

/// An entry in the queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueEntry<T> {
    pub item: T,
    pub priority: i32,
}

/// A priority queue removable from either end.
///
/// [`dequeue_low`](Self::dequeue_low) returns the lowest priority (oldest
/// first among ties), [`dequeue_high`](Self::dequeue_high) the highest
/// (newest first among ties). Priorities are fixed at insertion; there is
/// no decrease-key, callers re-insert instead.
#[derive(Debug, Clone)]
pub struct PriorityQueue<T> {
    entries: VecDeque<QueueEntry<T>>,
}

impl<T> PriorityQueue<T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            entries: VecDeque::new(),
        }
    }

    /// Insert `item` at `priority`.
    pub fn enqueue(&mut self, item: T, priority: i32) {
        let entry = QueueEntry { item, priority };
        match self.entries.iter().position(|e| priority < e.priority) {
            Some(i) => self.entries.insert(i, entry),
            None => self.entries.push_back(entry),
        }
    }

    /// Remove the entry with the lowest priority.
    pub fn dequeue_low(&mut self) -> Option<QueueEntry<T>> {
        self.entries.pop_front()
    }

    /// Remove the entry with the highest priority.
    pub fn dequeue_high(&mut self) -> Option<QueueEntry<T>> {
        self.entries.pop_back()
    }

    /// Number of entries in the queue.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterate from lowest to highest priority without removing anything.
    pub fn iter(&self) -> impl Iterator<Item = &QueueEntry<T>> {
        self.entries.iter()
    }
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
