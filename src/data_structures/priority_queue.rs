use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// A min-queue over `(priority, key)` pairs with lazy deletion.
///
/// There is no decrease-key: an improved priority is pushed as a new entry and
/// the superseded one stays in the heap until popped. Callers compare each
/// popped priority against their current best and drop stale entries.
/// Equal priorities pop in ascending key order.
#[derive(Debug)]
pub struct LazyMinQueue<K, P>
where
    K: Copy + Ord + Debug,
    P: Copy + Ord + Debug,
{
    /// The underlying binary heap
    heap: BinaryHeap<Reverse<(P, K)>>,
}

impl<K, P> Default for LazyMinQueue<K, P>
where
    K: Copy + Ord + Debug,
    P: Copy + Ord + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, P> LazyMinQueue<K, P>
where
    K: Copy + Ord + Debug,
    P: Copy + Ord + Debug,
{
    /// Creates a new empty queue
    pub fn new() -> Self {
        LazyMinQueue {
            heap: BinaryHeap::new(),
        }
    }

    /// Returns true if the queue is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of entries, stale ones included
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pushes a key with the given priority
    pub fn push(&mut self, key: K, priority: P) {
        self.heap.push(Reverse((priority, key)));
    }

    /// Removes the entry with the lowest priority
    pub fn pop(&mut self) -> Option<(K, P)> {
        self.heap.pop().map(|Reverse((priority, key))| (key, priority))
    }

    /// Returns the entry with the lowest priority without removing it
    pub fn peek(&self) -> Option<(K, P)> {
        self.heap.peek().map(|Reverse((priority, key))| (*key, *priority))
    }

    /// Clears the queue
    pub fn clear(&mut self) {
        self.heap.clear();
    }
}
