use std::collections::VecDeque;

use hopgrid_core::{PassGrid, Point, Range};

use crate::cache::HeuristicCache;
use crate::config::{Algorithm, SearchConfig};
use crate::error::PathError;
use crate::heap::MinHeap;
use crate::jps::unit_steps;
use crate::neighbors::SpeedPather;
use crate::trace::trace_path;
use crate::traits::Pather;

/// One discovered cell in a search tree.
///
/// Nodes live in the [`Pathfinder`]'s arena for the duration of a run;
/// `parent` indexes into that arena and always points at an earlier node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchNode {
    pub pos: Point,
    pub priority: f64,
    /// Hops from the start.
    pub cost: u32,
    pub parent: Option<usize>,
}

/// Counters for the most recent search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub expanded: usize,
    pub pushed: usize,
    pub cache_hits: usize,
    pub cache_misses: usize,
}

/// Open-set entry: a node index with the priority it was pushed with.
#[derive(Clone, Copy)]
pub(crate) struct Frontier {
    pub(crate) node: usize,
    pub(crate) priority: f64,
}

/// Reusable search engine.
///
/// `Pathfinder` owns the node arena, the closed-set stamps and the optional
/// heuristic cache, so repeated searches reuse their allocations. Searches
/// run to completion synchronously; nothing is shared between instances.
pub struct Pathfinder {
    config: SearchConfig,
    cache: Option<HeuristicCache>,
    pub(crate) nodes: Vec<SearchNode>,
    // closed[i] == generation marks cell i as settled in the current run.
    pub(crate) closed: Vec<u32>,
    pub(crate) generation: u32,
    rng: Range,
    width: usize,
    nbuf: Vec<Point>,
    stats: SearchStats,
}

impl Default for Pathfinder {
    fn default() -> Self {
        Self::new()
    }
}

impl Pathfinder {
    /// A* with the Manhattan heuristic and no memoization.
    pub fn new() -> Self {
        Self::with_config(SearchConfig::default())
    }

    pub fn with_config(config: SearchConfig) -> Self {
        Self {
            config,
            cache: Self::make_cache(&config),
            nodes: Vec::new(),
            closed: Vec::new(),
            generation: 0,
            rng: Range::default(),
            width: 0,
            nbuf: Vec::with_capacity(32),
            stats: SearchStats::default(),
        }
    }

    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Replace the configuration.
    ///
    /// The heuristic cache is rebuilt when memoization is switched on, when
    /// its limit changes, or when the heuristic kind changes.
    pub fn set_config(&mut self, config: SearchConfig) {
        let rebuild = self.cache.is_none()
            || config.heuristic != self.config.heuristic
            || config.cache_limit != self.config.cache_limit;
        if !config.memoize {
            self.cache = None;
        } else if rebuild {
            self.cache = Self::make_cache(&config);
        }
        self.config = config;
    }

    /// Counters for the last search.
    #[inline]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// The heuristic cache, when memoization is on.
    #[inline]
    pub fn cache(&self) -> Option<&HeuristicCache> {
        self.cache.as_ref()
    }

    /// The search tree built by the last run.
    #[inline]
    pub fn nodes(&self) -> &[SearchNode] {
        &self.nodes
    }

    /// Route from `from` to `to` for a unit of the given `speed`, using the
    /// configured algorithm.
    ///
    /// Returns the start→goal move vectors; an empty vector means `from`
    /// already is `to`.
    pub fn find(
        &mut self,
        grid: &PassGrid,
        from: Point,
        to: Point,
        speed: u32,
    ) -> Result<Vec<Point>, PathError> {
        let algorithm = self.config.algorithm;
        if !algorithm.supports_speed(speed) {
            return Err(PathError::UnsupportedSpeed { algorithm, speed });
        }
        self.search_with(&SpeedPather::new(grid, speed), from, to, algorithm)
    }

    /// Route using A*.
    pub fn astar(
        &mut self,
        grid: &PassGrid,
        from: Point,
        to: Point,
        speed: u32,
    ) -> Result<Vec<Point>, PathError> {
        self.search_with(&SpeedPather::new(grid, speed), from, to, Algorithm::AStar)
    }

    /// Route using greedy best-first search.
    pub fn best_first(
        &mut self,
        grid: &PassGrid,
        from: Point,
        to: Point,
        speed: u32,
    ) -> Result<Vec<Point>, PathError> {
        let pather = SpeedPather::new(grid, speed);
        self.search_with(&pather, from, to, Algorithm::BestFirst)
    }

    /// Route using breadth-first search.
    pub fn breadth_first(
        &mut self,
        grid: &PassGrid,
        from: Point,
        to: Point,
        speed: u32,
    ) -> Result<Vec<Point>, PathError> {
        let pather = SpeedPather::new(grid, speed);
        self.search_with(&pather, from, to, Algorithm::BreadthFirst)
    }

    /// Route using jump point search.
    ///
    /// Only defined where one hop is one step in any of the 8 directions,
    /// that is speed 2 or 3; other speeds fail with
    /// [`PathError::UnsupportedSpeed`].
    pub fn jump_point(
        &mut self,
        grid: &PassGrid,
        from: Point,
        to: Point,
        speed: u32,
    ) -> Result<Vec<Point>, PathError> {
        let algorithm = Algorithm::JumpPoint;
        if !algorithm.supports_speed(speed) {
            return Err(PathError::UnsupportedSpeed { algorithm, speed });
        }
        self.search_with(&SpeedPather::new(grid, speed), from, to, algorithm)
    }

    /// Route over an arbitrary neighbor relation.
    ///
    /// [`Algorithm::JumpPoint`] ignores [`Pather::neighbors`] and always moves
    /// one step in any of the 8 directions.
    pub fn search_with<P: Pather>(
        &mut self,
        pather: &P,
        from: Point,
        to: Point,
        algorithm: Algorithm,
    ) -> Result<Vec<Point>, PathError> {
        let bounds = pather.range();
        for point in [from, to] {
            if !bounds.contains(point) {
                log::debug!("rejecting search {from} -> {to}: {point} outside {bounds}");
                return Err(PathError::InvalidCoordinate { point, bounds });
            }
        }

        self.begin(bounds);
        if from == to {
            return Ok(Vec::new());
        }
        if !pather.passable(to) {
            log::debug!("rejecting search {from} -> {to}: goal is blocked");
            return Err(PathError::PathNotFound { from, to });
        }

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let settled = match algorithm {
            Algorithm::AStar => self.best_first_loop(pather, from, to, true, &mut nbuf),
            Algorithm::BestFirst => self.best_first_loop(pather, from, to, false, &mut nbuf),
            Algorithm::BreadthFirst => self.breadth_first_loop(pather, from, to, &mut nbuf),
            Algorithm::JumpPoint => self.jump_point_loop(pather, from, to),
        };
        self.nbuf = nbuf;

        match settled {
            Ok(goal) => {
                let mut moves = trace_path(&self.nodes, goal);
                if algorithm == Algorithm::JumpPoint {
                    moves = unit_steps(&moves);
                }
                log::debug!(
                    "{algorithm:?} {from} -> {to}: {} hops, {} expanded",
                    moves.len(),
                    self.stats.expanded
                );
                Ok(moves)
            }
            Err(e) => {
                log::debug!(
                    "{algorithm:?} {from} -> {to} failed after {} expansions: {e}",
                    self.stats.expanded
                );
                Err(e)
            }
        }
    }

    // -----------------------------------------------------------------------
    // Search loops
    // -----------------------------------------------------------------------

    /// Shared loop for A* (`weighted`) and greedy best-first search.
    ///
    /// The goal test happens on pop. A cell popped a second time, via a
    /// duplicate open-set entry, is skipped.
    fn best_first_loop<P: Pather>(
        &mut self,
        pather: &P,
        from: Point,
        to: Point,
        weighted: bool,
        nbuf: &mut Vec<Point>,
    ) -> Result<usize, PathError> {
        let mut open = MinHeap::new(|f: &Frontier| f.priority);

        let h = self.estimate(from, to);
        self.push_open(
            &mut open,
            SearchNode {
                pos: from,
                priority: h,
                cost: 0,
                parent: None,
            },
        );
        // The start is closed up front so nothing expands back into it.
        if let Some(si) = self.idx(from) {
            self.closed[si] = self.generation;
        }

        while !open.is_empty() {
            let ci = open.pop()?.node;
            let pos = self.nodes[ci].pos;
            let Some(pi) = self.idx(pos) else {
                continue;
            };
            if ci != 0 && self.closed[pi] == self.generation {
                continue;
            }
            if pos == to {
                return Ok(ci);
            }
            self.closed[pi] = self.generation;
            self.count_expansion()?;

            nbuf.clear();
            pather.neighbors(pos, nbuf);
            let cost = self.nodes[ci].cost + 1;

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                if self.closed[ni] == self.generation {
                    continue;
                }
                let h = self.estimate(np, to);
                let priority = if weighted { cost as f64 + h } else { h };
                self.push_open(
                    &mut open,
                    SearchNode {
                        pos: np,
                        priority,
                        cost,
                        parent: Some(ci),
                    },
                );
            }
        }

        Err(PathError::PathNotFound { from, to })
    }

    /// FIFO flood; cells are marked when first enqueued.
    fn breadth_first_loop<P: Pather>(
        &mut self,
        pather: &P,
        from: Point,
        to: Point,
        nbuf: &mut Vec<Point>,
    ) -> Result<usize, PathError> {
        let mut queue: VecDeque<usize> = VecDeque::new();
        self.nodes.push(SearchNode {
            pos: from,
            priority: 0.0,
            cost: 0,
            parent: None,
        });
        self.stats.pushed += 1;
        queue.push_back(0);
        if let Some(si) = self.idx(from) {
            self.closed[si] = self.generation;
        }

        while let Some(ci) = queue.pop_front() {
            let pos = self.nodes[ci].pos;
            if pos == to {
                return Ok(ci);
            }
            self.count_expansion()?;

            nbuf.clear();
            pather.neighbors(pos, nbuf);
            let cost = self.nodes[ci].cost + 1;

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                if self.closed[ni] == self.generation {
                    continue;
                }
                self.closed[ni] = self.generation;
                self.nodes.push(SearchNode {
                    pos: np,
                    priority: cost as f64,
                    cost,
                    parent: Some(ci),
                });
                self.stats.pushed += 1;
                queue.push_back(self.nodes.len() - 1);
            }
        }

        Err(PathError::PathNotFound { from, to })
    }

    // -----------------------------------------------------------------------
    // Helpers
    // -----------------------------------------------------------------------

    fn make_cache(config: &SearchConfig) -> Option<HeuristicCache> {
        if !config.memoize {
            return None;
        }
        Some(match config.cache_limit {
            Some(limit) => HeuristicCache::with_limit(limit),
            None => HeuristicCache::new(),
        })
    }

    /// Reset per-run state for a search inside `rng`.
    fn begin(&mut self, rng: Range) {
        self.rng = rng;
        self.width = rng.width().max(0) as usize;
        let len = rng.len();
        if self.closed.len() < len {
            self.closed.resize(len, 0);
        }
        // Bump generation to lazily invalidate the closed set.
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            self.closed.fill(0);
            self.generation = 1;
        }
        self.nodes.clear();
        self.stats = SearchStats::default();
    }

    pub(crate) fn push_open<F: Fn(&Frontier) -> f64>(
        &mut self,
        open: &mut MinHeap<Frontier, F>,
        node: SearchNode,
    ) {
        let priority = node.priority;
        self.nodes.push(node);
        open.push(Frontier {
            node: self.nodes.len() - 1,
            priority,
        });
        self.stats.pushed += 1;
    }

    pub(crate) fn count_expansion(&mut self) -> Result<(), PathError> {
        if let Some(limit) = self.config.max_expansions {
            if self.stats.expanded >= limit {
                log::warn!("search aborted after {limit} expansions");
                return Err(PathError::ExpansionLimit { limit });
            }
        }
        self.stats.expanded += 1;
        Ok(())
    }

    fn estimate(&mut self, from: Point, to: Point) -> f64 {
        let kind = self.config.heuristic;
        let Some(cache) = self.cache.as_mut() else {
            return kind.estimate(from, to);
        };
        if let Some(v) = cache.get(from, to) {
            self.stats.cache_hits += 1;
            return v;
        }
        let v = kind.estimate(from, to);
        cache.put(from, to, v);
        self.stats.cache_misses += 1;
        v
    }

    /// Convert a `Point` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        if !self.rng.contains(p) {
            return None;
        }
        let x = (p.x - self.rng.min.x) as usize;
        let y = (p.y - self.rng.min.y) as usize;
        Some(y * self.width + x)
    }
}
