//! Priority queue of pending candidates.
//!
//! Candidates are served by ascending degree; among equal degrees the one
//! pushed first comes out first, so runs on identical input are
//! reproducible. The zero derivation has no degree and sorts before
//! everything else.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// A queued candidate with its priority.
#[derive(Debug)]
struct QueueItem<T> {
    degree: Option<u32>,
    counter: u64,
    payload: T,
}

impl<T> QueueItem<T> {
    fn key(&self) -> (Option<u32>, u64) {
        (self.degree, self.counter)
    }
}

impl<T> PartialEq for QueueItem<T> {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl<T> Eq for QueueItem<T> {}

impl<T> PartialOrd for QueueItem<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for QueueItem<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

/// Min-queue on (degree, insertion counter).
#[derive(Debug)]
pub struct WorkQueue<T> {
    heap: BinaryHeap<Reverse<QueueItem<T>>>,
    counter: u64,
}

impl<T> WorkQueue<T> {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            counter: 0,
        }
    }

    /// Enqueues `payload` with the given degree.
    pub fn push(&mut self, degree: Option<u32>, payload: T) {
        let item = QueueItem {
            degree,
            counter: self.counter,
            payload,
        };
        self.counter += 1;
        self.heap.push(Reverse(item));
    }

    /// Removes the lowest-degree, earliest-pushed item.
    pub fn pop(&mut self) -> Option<(Option<u32>, T)> {
        self.heap.pop().map(|Reverse(item)| (item.degree, item.payload))
    }

    /// Degree of the next item to be popped.
    #[must_use]
    pub fn peek_degree(&self) -> Option<Option<u32>> {
        self.heap.peek().map(|Reverse(item)| item.degree)
    }

    /// Number of pending items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns true if nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Total number of items ever pushed.
    #[must_use]
    pub fn pushed(&self) -> u64 {
        self.counter
    }
}

impl<T> Default for WorkQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
