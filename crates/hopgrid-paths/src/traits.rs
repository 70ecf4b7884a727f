use hopgrid_core::{Point, Range};

/// Neighbor relation the search engine walks.
///
/// Every hop between a cell and one of its neighbors costs exactly 1,
/// whatever the geometric length of the hop.
pub trait Pather {
    /// The rectangle all reachable cells lie in.
    fn range(&self) -> Range;

    /// Whether a unit may stand on `p`.
    fn passable(&self, p: Point) -> bool;

    /// Append neighbors of `p` into `buf`. The caller clears `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}
