use hopgrid_core::Point;

use crate::search::SearchNode;

/// Turn the parent chain ending at `nodes[goal]` into start→goal move vectors.
///
/// A goal node without a parent means start and goal coincide, and yields an
/// empty route. A failed search never reaches this function: the engine
/// reports [`PathError::PathNotFound`](crate::PathError::PathNotFound) instead.
pub fn trace_path(nodes: &[SearchNode], goal: usize) -> Vec<Point> {
    let mut cells = Vec::new();
    let mut cur = Some(goal);
    while let Some(i) = cur {
        cells.push(nodes[i].pos);
        cur = nodes[i].parent;
    }
    cells.reverse();
    moves_between(&cells)
}

/// Relative vectors `cells[i + 1] - cells[i]` between consecutive cells.
pub fn moves_between(cells: &[Point]) -> Vec<Point> {
    cells.windows(2).map(|w| w[1] - w[0]).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(x: i32, y: i32, parent: Option<usize>) -> SearchNode {
        SearchNode {
            pos: Point::new(x, y),
            priority: 0.0,
            cost: 0,
            parent,
        }
    }

    #[test]
    fn root_only_is_empty() {
        let nodes = [node(3, 3, None)];
        assert!(trace_path(&nodes, 0).is_empty());
    }

    #[test]
    fn chain_becomes_forward_moves() {
        // 0:(0,0) <- 1:(1,1) <- 3:(3,1); node 2 is an unrelated sibling.
        let nodes = [
            node(0, 0, None),
            node(1, 1, Some(0)),
            node(0, 1, Some(0)),
            node(3, 1, Some(1)),
        ];
        assert_eq!(
            trace_path(&nodes, 3),
            vec![Point::new(1, 1), Point::new(2, 0)]
        );
    }

    #[test]
    fn moves_between_cells() {
        let cells = [Point::new(2, 2), Point::new(2, 3), Point::new(0, 3)];
        assert_eq!(
            moves_between(&cells),
            vec![Point::new(0, 1), Point::new(-2, 0)]
        );
        assert!(moves_between(&cells[..1]).is_empty());
    }
}
