use std::collections::HashMap;

use hopgrid_core::Point;

/// Memoized heuristic values keyed by the ordered pair `(from, to)`.
///
/// A plain key → value map: a hit returns exactly what was stored. The cache
/// grows without bound unless built with [`HeuristicCache::with_limit`], in
/// which case it is flushed whenever an insert would exceed the limit.
#[derive(Debug, Clone, Default)]
pub struct HeuristicCache {
    map: HashMap<(Point, Point), f64>,
    limit: Option<usize>,
}

impl HeuristicCache {
    /// An unbounded cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// A cache holding at most `limit` entries.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            map: HashMap::new(),
            limit: Some(limit),
        }
    }

    /// Whether a value is stored for `(from, to)`.
    #[inline]
    pub fn has(&self, from: Point, to: Point) -> bool {
        self.map.contains_key(&(from, to))
    }

    /// The stored value for `(from, to)`.
    #[inline]
    pub fn get(&self, from: Point, to: Point) -> Option<f64> {
        self.map.get(&(from, to)).copied()
    }

    /// Store `value` for `(from, to)`.
    pub fn put(&mut self, from: Point, to: Point, value: f64) {
        if let Some(limit) = self.limit {
            if self.map.len() >= limit && !self.map.contains_key(&(from, to)) {
                log::trace!("heuristic cache reached {limit} entries, flushing");
                self.map.clear();
            }
        }
        self.map.insert((from, to), value);
    }

    /// Number of stored entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether nothing is stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Forget every entry.
    pub fn clear(&mut self) {
        self.map.clear();
    }
}
