use hopgrid_core::Point;

/// Multiplier applied by the tie-breaking heuristics.
pub const TIE_BREAK: f64 = 1.0 + 1.0 / 1000.0;

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Chebyshev (L∞) distance between two points.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}

/// Manhattan distance inflated by [`TIE_BREAK`], so that among candidates of
/// equal cost the one closer to the goal is preferred.
#[inline]
pub fn tie_breaking(a: Point, b: Point) -> f64 {
    manhattan(a, b) as f64 * TIE_BREAK
}

/// Heuristic used to order the open set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum HeuristicKind {
    /// Plain L1 distance.
    #[default]
    Manhattan,
    /// L1 distance times [`TIE_BREAK`].
    TieBreaking,
    /// L∞ distance. Admissible for 8-connected hops.
    Chebyshev,
    /// L∞ distance times [`TIE_BREAK`].
    ChebyshevTieBreaking,
}

impl HeuristicKind {
    /// Estimated remaining cost from `from` to `to`.
    #[inline]
    pub fn estimate(self, from: Point, to: Point) -> f64 {
        match self {
            Self::Manhattan => manhattan(from, to) as f64,
            Self::TieBreaking => tie_breaking(from, to),
            Self::Chebyshev => chebyshev(from, to) as f64,
            Self::ChebyshevTieBreaking => chebyshev(from, to) as f64 * TIE_BREAK,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_basics() {
        let o = Point::ZERO;
        assert_eq!(manhattan(o, o), 0);
        assert_eq!(manhattan(o, Point::new(0, 1)), 1);
        assert_eq!(manhattan(o, Point::new(1, 1)), 2);
        assert_eq!(manhattan(Point::new(-2, 3), Point::new(4, -1)), 10);
    }

    #[test]
    fn distances_are_symmetric() {
        let a = Point::new(3, 7);
        let b = Point::new(-1, 2);
        assert_eq!(manhattan(a, b), manhattan(b, a));
        assert_eq!(chebyshev(a, b), chebyshev(b, a));
        assert_eq!(chebyshev(a, b), 5);
    }

    #[test]
    fn tie_breaking_inflates_slightly() {
        let a = Point::ZERO;
        let b = Point::new(3, 4);
        let h = tie_breaking(a, b);
        assert!(h > 7.0);
        assert!((h - 7.007).abs() < 1e-9);
        assert_eq!(tie_breaking(a, a), 0.0);
    }

    #[test]
    fn kinds_dispatch() {
        let a = Point::ZERO;
        let b = Point::new(2, 5);
        assert_eq!(HeuristicKind::Manhattan.estimate(a, b), 7.0);
        assert_eq!(HeuristicKind::Chebyshev.estimate(a, b), 5.0);
        assert!(HeuristicKind::ChebyshevTieBreaking.estimate(a, b) > 5.0);
        assert_eq!(HeuristicKind::default(), HeuristicKind::Manhattan);
    }
}
