//! Binary min-heap keyed by a caller-supplied priority function.
//!
//! Unlike [`std::collections::BinaryHeap`], the ordering does not come from
//! `Ord` on the items: the heap scores every item once, on push, with the
//! `priority` closure it was built with. Lower scores pop first; equal scores
//! pop in insertion order. Arbitrary items can be removed with
//! [`MinHeap::remove`].

/// Pop or peek on an empty [`MinHeap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("priority queue is empty")]
pub struct EmptyQueue;

struct Entry<T> {
    item: T,
    score: f64,
    seq: u64,
}

impl<T> Entry<T> {
    #[inline]
    fn before(&self, other: &Self) -> bool {
        self.score
            .total_cmp(&other.score)
            .then(self.seq.cmp(&other.seq))
            .is_lt()
    }
}

/// A min-heap ordered by `priority(item)`.
pub struct MinHeap<T, F> {
    entries: Vec<Entry<T>>,
    priority: F,
    seq: u64,
}

impl<T, F> MinHeap<T, F>
where
    F: Fn(&T) -> f64,
{
    /// Create an empty heap scoring items with `priority`.
    pub fn new(priority: F) -> Self {
        Self::with_capacity(0, priority)
    }

    /// Create an empty heap with room for `cap` items.
    pub fn with_capacity(cap: usize, priority: F) -> Self {
        Self {
            entries: Vec::with_capacity(cap),
            priority,
            seq: 0,
        }
    }

    /// Insert `item`. O(log n).
    pub fn push(&mut self, item: T) {
        let score = (self.priority)(&item);
        self.entries.push(Entry {
            item,
            score,
            seq: self.seq,
        });
        self.seq += 1;
        self.bubble_up(self.entries.len() - 1);
    }

    /// Remove and return the lowest-priority item. O(log n).
    pub fn pop(&mut self) -> Result<T, EmptyQueue> {
        if self.entries.is_empty() {
            return Err(EmptyQueue);
        }
        let top = self.entries.swap_remove(0);
        if !self.entries.is_empty() {
            self.sink_down(0);
        }
        Ok(top.item)
    }

    /// The lowest-priority item, without removing it.
    pub fn peek(&self) -> Result<&T, EmptyQueue> {
        self.entries.first().map(|e| &e.item).ok_or(EmptyQueue)
    }

    /// Number of items.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the heap holds no items.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every item. The insertion counter keeps running.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Remove the first item equal to `item`, returning it. O(n).
    pub fn remove(&mut self, item: &T) -> Option<T>
    where
        T: PartialEq,
    {
        let i = self.entries.iter().position(|e| e.item == *item)?;
        let removed = self.entries.swap_remove(i);
        if i < self.entries.len() {
            // The former last entry now sits in the hole; it may need to move
            // either way.
            self.bubble_up(i);
            self.sink_down(i);
        }
        Some(removed.item)
    }

    fn bubble_up(&mut self, mut n: usize) {
        while n > 0 {
            let parent = (n - 1) / 2;
            if !self.entries[n].before(&self.entries[parent]) {
                break;
            }
            self.entries.swap(n, parent);
            n = parent;
        }
    }

    fn sink_down(&mut self, mut n: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * n + 1;
            let right = left + 1;
            let mut best = n;
            if left < len && self.entries[left].before(&self.entries[best]) {
                best = left;
            }
            if right < len && self.entries[right].before(&self.entries[best]) {
                best = right;
            }
            if best == n {
                break;
            }
            self.entries.swap(n, best);
            n = best;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain<T, F: Fn(&T) -> f64>(h: &mut MinHeap<T, F>) -> Vec<T> {
        let mut out = Vec::new();
        while let Ok(x) = h.pop() {
            out.push(x);
        }
        out
    }

    #[test]
    fn pops_in_priority_order() {
        let mut h = MinHeap::new(|x: &i32| *x as f64);
        for x in [5, 1, 8, 3, 9, 2, 7] {
            h.push(x);
        }
        assert_eq!(h.len(), 7);
        assert_eq!(h.peek(), Ok(&1));
        assert_eq!(drain(&mut h), vec![1, 2, 3, 5, 7, 8, 9]);
        assert!(h.is_empty());
    }

    #[test]
    fn priority_comes_from_the_closure() {
        // Max-first by negating the score.
        let mut h = MinHeap::new(|x: &i32| -(*x as f64));
        for x in [2, 9, 4] {
            h.push(x);
        }
        assert_eq!(drain(&mut h), vec![9, 4, 2]);
    }

    #[test]
    fn ties_pop_in_insertion_order() {
        let mut h = MinHeap::new(|p: &(u8, char)| p.0 as f64);
        for p in [(1, 'a'), (0, 'b'), (1, 'c'), (0, 'd'), (1, 'e')] {
            h.push(p);
        }
        let order: Vec<char> = drain(&mut h).into_iter().map(|p| p.1).collect();
        assert_eq!(order, vec!['b', 'd', 'a', 'c', 'e']);
    }

    #[test]
    fn empty_pop_and_peek_report_empty() {
        let mut h = MinHeap::new(|x: &i32| *x as f64);
        assert_eq!(h.pop(), Err(EmptyQueue));
        assert_eq!(h.peek(), Err(EmptyQueue));
        h.push(1);
        assert_eq!(h.pop(), Ok(1));
        assert_eq!(h.pop(), Err(EmptyQueue));
    }

    #[test]
    fn remove_arbitrary_item() {
        let mut h = MinHeap::new(|x: &i32| *x as f64);
        for x in [4, 10, 6, 12, 11, 7, 8, 13] {
            h.push(x);
        }
        assert_eq!(h.remove(&10), Some(10));
        assert_eq!(h.remove(&99), None);
        assert_eq!(h.remove(&13), Some(13));
        assert_eq!(drain(&mut h), vec![4, 6, 7, 8, 11, 12]);
    }

    #[test]
    fn remove_root_and_last() {
        let mut h = MinHeap::new(|x: &i32| *x as f64);
        for x in [3, 1, 2] {
            h.push(x);
        }
        assert_eq!(h.remove(&1), Some(1));
        assert_eq!(h.peek(), Ok(&2));
        h.push(0);
        assert_eq!(h.remove(&3), Some(3));
        assert_eq!(drain(&mut h), vec![0, 2]);
    }

    #[test]
    fn interleaved_push_pop() {
        let mut h = MinHeap::with_capacity(4, |x: &f64| *x);
        h.push(2.5);
        h.push(0.5);
        assert_eq!(h.pop(), Ok(0.5));
        h.push(1.0);
        h.push(3.0);
        assert_eq!(h.pop(), Ok(1.0));
        h.clear();
        assert!(h.is_empty());
    }
}
