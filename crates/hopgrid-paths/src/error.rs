use hopgrid_core::{Point, Range};

use crate::config::Algorithm;
use crate::heap::EmptyQueue;

/// Errors returned by the search engine and the [`Path`](crate::Path) cursor.
///
/// None of these is fatal: callers are expected to pick another destination
/// or idle for the turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    /// The open set was popped while empty. Unreachable with correct loop guards.
    #[error(transparent)]
    EmptyQueue(#[from] EmptyQueue),
    /// Every reachable cell was settled without reaching the goal.
    #[error("no path from {from} to {to}")]
    PathNotFound { from: Point, to: Point },
    /// Start or goal lies outside the grid.
    #[error("{point} is outside the grid {bounds}")]
    InvalidCoordinate { point: Point, bounds: Range },
    /// The configured expansion cap was reached before the goal was settled.
    #[error("search gave up after expanding {limit} nodes")]
    ExpansionLimit { limit: usize },
    /// The algorithm cannot route a unit moving at this speed.
    #[error("{algorithm} search does not support speed {speed}")]
    UnsupportedSpeed { algorithm: Algorithm, speed: u32 },
}
