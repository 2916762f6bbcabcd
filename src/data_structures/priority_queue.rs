use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// A min-priority queue over (priority, item) pairs with lazy deletion
///
/// `std::collections::BinaryHeap` has no decrease-key, so shortest-path
/// relaxation re-inserts an item every time its priority improves. Multiple
/// entries for the same item may therefore coexist in the heap at once; all
/// but the best are stale, and the consumer discards them on extraction by
/// comparing the popped priority against its own current-best table.
#[derive(Debug, Default)]
pub struct LazyMinHeap<T, P>
where
    T: Ord + Debug,
    P: Ord + Copy + Debug,
{
    heap: BinaryHeap<Reverse<(P, T)>>,
}

impl<T, P> LazyMinHeap<T, P>
where
    T: Ord + Debug,
    P: Ord + Copy + Debug,
{
    /// Creates a new empty queue
    pub fn new() -> Self {
        LazyMinHeap {
            heap: BinaryHeap::new(),
        }
    }

    /// Returns true if the queue holds no entries, stale or otherwise
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of entries currently in the queue, stale
    /// entries included
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Inserts an item with the given priority; an existing entry for the
    /// same item is left in place and becomes stale
    pub fn push(&mut self, item: T, priority: P) {
        self.heap.push(Reverse((priority, item)));
    }

    /// Removes and returns the entry with the minimum priority, ties broken
    /// by item order
    pub fn pop(&mut self) -> Option<(T, P)> {
        self.heap
            .pop()
            .map(|Reverse((priority, item))| (item, priority))
    }
}
