//! A steppable, reversible cursor over a planned route.

use hopgrid_core::{PassGrid, Point};

use crate::error::PathError;
use crate::search::Pathfinder;

/// What [`Path::next`] hands back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Move by this offset this turn.
    Move(Point),
    /// Nothing left to walk.
    EndOfPath,
}

/// Returned by [`Path::next`] once the route is used up.
pub const END_OF_PATH: Step = Step::EndOfPath;

impl Step {
    /// The move offset, if any.
    #[inline]
    pub fn into_move(self) -> Option<Point> {
        match self {
            Self::Move(d) => Some(d),
            Self::EndOfPath => None,
        }
    }

    #[inline]
    pub fn is_end(self) -> bool {
        matches!(self, Self::EndOfPath)
    }
}

/// A route as relative move vectors plus a cursor into them.
///
/// Each unit owns one `Path` and replaces it wholesale with [`Path::make`]
/// when it replans. `0 ≤ pos ≤ len` always holds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Path {
    moves: Vec<Point>,
    pos: usize,
}

impl Path {
    /// An empty path, already at its end.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap precomputed move vectors.
    pub fn from_moves(moves: Vec<Point>) -> Self {
        Self { moves, pos: 0 }
    }

    /// Plan a route with a default [`Pathfinder`] (A*, Manhattan heuristic).
    ///
    /// The route is shortest for speed 1 only. For faster units Manhattan
    /// distance overestimates the hops left, so routes are near-shortest but
    /// may take extra hops; use [`make_with`](Self::make_with) and a
    /// [`Pathfinder`] running BFS (or A* with Chebyshev at speed 2) when the
    /// hop count must be minimal.
    pub fn make(
        &mut self,
        grid: &PassGrid,
        start: Point,
        goal: Point,
        speed: u32,
    ) -> Result<(), PathError> {
        self.make_with(&mut Pathfinder::new(), grid, start, goal, speed)
    }

    /// Plan a route with a caller-owned [`Pathfinder`].
    ///
    /// On failure the path is left empty, never half-updated.
    pub fn make_with(
        &mut self,
        finder: &mut Pathfinder,
        grid: &PassGrid,
        start: Point,
        goal: Point,
        speed: u32,
    ) -> Result<(), PathError> {
        self.pos = 0;
        match finder.find(grid, start, goal, speed) {
            Ok(moves) => {
                self.moves = moves;
                Ok(())
            }
            Err(e) => {
                self.moves.clear();
                Err(e)
            }
        }
    }

    /// Whether there is a move left to take.
    #[inline]
    pub fn valid(&self) -> bool {
        !self.moves.is_empty() && self.pos < self.moves.len()
    }

    #[inline]
    pub fn at_path_end(&self) -> bool {
        self.pos >= self.moves.len()
    }

    /// Take the move at the cursor and advance.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Step {
        match self.moves.get(self.pos) {
            Some(&d) => {
                self.pos += 1;
                Step::Move(d)
            }
            None => END_OF_PATH,
        }
    }

    /// Step the cursor back and return the move now under it.
    pub fn prev(&mut self) -> Option<Point> {
        if self.pos == 0 {
            return None;
        }
        self.pos -= 1;
        self.moves.get(self.pos).copied()
    }

    /// Rewind to the first move.
    #[inline]
    pub fn reset(&mut self) {
        self.pos = 0;
    }

    /// Turn the route around: reverse the order, negate every vector, rewind.
    pub fn reverse(&mut self) {
        self.moves.reverse();
        for d in &mut self.moves {
            *d = -*d;
        }
        self.pos = 0;
    }

    /// Drop the route.
    pub fn clear(&mut self) {
        self.moves.clear();
        self.pos = 0;
    }

    #[inline]
    pub fn moves(&self) -> &[Point] {
        &self.moves
    }

    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Moves left after the cursor.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.moves.len() - self.pos
    }

    /// Absolute cells visited when walking from `start`, start excluded.
    pub fn waypoints(&self, start: Point) -> Vec<Point> {
        self.moves
            .iter()
            .scan(start, |at, &d| {
                *at += d;
                Some(*at)
            })
            .collect()
    }
}
