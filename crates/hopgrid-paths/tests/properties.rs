//! Randomised checks of the search engine against the BFS oracle.

use hopgrid_core::{PassGrid, Point};
use hopgrid_paths::{
    Algorithm, HeuristicKind, Path, PathError, Pathfinder, SearchConfig, Step, chebyshev,
};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

const SEEDS: u64 = 40;

fn random_grid(rng: &mut StdRng, size: i32, blocked_pct: u32) -> PassGrid {
    let mut grid = PassGrid::open(size).unwrap();
    for p in grid.bounds() {
        if rng.random_range(0..100) < blocked_pct {
            grid.block(p);
        }
    }
    grid
}

fn random_open_cell(rng: &mut StdRng, grid: &PassGrid) -> Point {
    loop {
        let p = Point::new(
            rng.random_range(0..grid.size()),
            rng.random_range(0..grid.size()),
        );
        if grid.passable(p) {
            return p;
        }
    }
}

fn assert_walkable(grid: &PassGrid, from: Point, to: Point, speed: u32, moves: &[Point]) {
    let mut at = from;
    for &m in moves {
        assert!(m.sq_len() <= i64::from(speed));
        at += m;
        assert!(grid.passable(at));
    }
    assert_eq!(at, to);
}

fn finder(algorithm: Algorithm, heuristic: HeuristicKind) -> Pathfinder {
    Pathfinder::with_config(
        SearchConfig::default()
            .with_algorithm(algorithm)
            .with_heuristic(heuristic),
    )
}

#[test]
fn all_algorithms_agree_on_reachability() {
    let mut bfs = finder(Algorithm::BreadthFirst, HeuristicKind::Manhattan);
    let mut astar = finder(Algorithm::AStar, HeuristicKind::Manhattan);
    let mut greedy = finder(Algorithm::BestFirst, HeuristicKind::Manhattan);

    for seed in 0..SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let grid = random_grid(&mut rng, 12, 35);
        for speed in [1, 2, 4, 9] {
            let from = random_open_cell(&mut rng, &grid);
            let to = random_open_cell(&mut rng, &grid);
            let oracle = bfs.find(&grid, from, to, speed);
            let a = astar.find(&grid, from, to, speed);
            let g = greedy.find(&grid, from, to, speed);
            match oracle {
                Ok(best) => {
                    let a = a.unwrap();
                    let g = g.unwrap();
                    assert_walkable(&grid, from, to, speed, &best);
                    assert_walkable(&grid, from, to, speed, &a);
                    assert_walkable(&grid, from, to, speed, &g);
                    assert!(a.len() >= best.len());
                    assert!(g.len() >= best.len());
                    if speed == 1 {
                        // Manhattan is admissible here, so A* is optimal.
                        assert!(a.len() <= g.len());
                    }
                }
                Err(PathError::PathNotFound { .. }) => {
                    assert!(matches!(a, Err(PathError::PathNotFound { .. })));
                    assert!(matches!(g, Err(PathError::PathNotFound { .. })));
                }
                Err(e) => panic!("unexpected error {e}"),
            }
        }
    }
}

#[test]
fn astar_is_optimal_with_admissible_heuristic() {
    let mut bfs = finder(Algorithm::BreadthFirst, HeuristicKind::Manhattan);
    // Manhattan is exact for cardinal steps, Chebyshev for 8-connected ones.
    let mut cardinal = finder(Algorithm::AStar, HeuristicKind::Manhattan);
    let mut diagonal = finder(Algorithm::AStar, HeuristicKind::Chebyshev);
    let mut greedy_cardinal = finder(Algorithm::BestFirst, HeuristicKind::Manhattan);
    let mut greedy_diagonal = finder(Algorithm::BestFirst, HeuristicKind::Chebyshev);

    for seed in 0..SEEDS {
        let mut rng = StdRng::seed_from_u64(1000 + seed);
        let grid = random_grid(&mut rng, 14, 30);
        let from = random_open_cell(&mut rng, &grid);
        let to = random_open_cell(&mut rng, &grid);

        if let Ok(best) = bfs.find(&grid, from, to, 1) {
            let a = cardinal.find(&grid, from, to, 1).unwrap();
            let g = greedy_cardinal.find(&grid, from, to, 1).unwrap();
            assert_eq!(a.len(), best.len());
            assert!(a.len() <= g.len());
        }
        if let Ok(best) = bfs.find(&grid, from, to, 2) {
            let a = diagonal.find(&grid, from, to, 2).unwrap();
            let g = greedy_diagonal.find(&grid, from, to, 2).unwrap();
            assert_eq!(a.len(), best.len());
            assert!(a.len() <= g.len());
        }
    }
}

#[test]
fn jump_point_matches_breadth_first() {
    let mut bfs = finder(Algorithm::BreadthFirst, HeuristicKind::Manhattan);
    let mut jps = finder(Algorithm::JumpPoint, HeuristicKind::Manhattan);

    for seed in 0..SEEDS * 5 {
        let mut rng = StdRng::seed_from_u64(5000 + seed);
        let size = [8, 12, 16][seed as usize % 3];
        let grid = random_grid(&mut rng, size, 15 + (seed % 4) as u32 * 10);
        let from = random_open_cell(&mut rng, &grid);
        let to = random_open_cell(&mut rng, &grid);

        match bfs.find(&grid, from, to, 2) {
            Ok(best) => {
                let moves = jps.find(&grid, from, to, 2).unwrap();
                assert_walkable(&grid, from, to, 2, &moves);
                assert_eq!(moves.len(), best.len());
            }
            Err(PathError::PathNotFound { .. }) => {
                assert!(matches!(
                    jps.find(&grid, from, to, 2),
                    Err(PathError::PathNotFound { .. })
                ));
            }
            Err(e) => panic!("unexpected error {e}"),
        }
    }
}

#[test]
fn open_grid_routes_take_chebyshev_hops() {
    let grid = PassGrid::open(16).unwrap();
    let mut astar = Pathfinder::new();
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let from = random_open_cell(&mut rng, &grid);
        let to = random_open_cell(&mut rng, &grid);
        let moves = astar.find(&grid, from, to, 2).unwrap();
        assert_eq!(moves.len() as i32, chebyshev(from, to));
    }
}

#[test]
fn walked_path_reaches_goal_and_reverse_returns() {
    let mut rng = StdRng::seed_from_u64(99);
    let mut finder = Pathfinder::new();
    let mut checked = 0;
    for _ in 0..SEEDS {
        let grid = random_grid(&mut rng, 10, 20);
        let from = random_open_cell(&mut rng, &grid);
        let to = random_open_cell(&mut rng, &grid);
        let mut path = Path::new();
        if path.make_with(&mut finder, &grid, from, to, 4).is_err() {
            assert!(!path.valid());
            continue;
        }
        checked += 1;

        let mut at = from;
        while let Step::Move(d) = path.next() {
            at += d;
        }
        assert_eq!(at, to);
        assert_eq!(path.next(), Step::EndOfPath);

        let forward = path.moves().to_vec();
        path.reverse();
        while let Some(d) = path.next().into_move() {
            at += d;
        }
        assert_eq!(at, from);

        path.reverse();
        assert_eq!(path.moves(), forward.as_slice());
    }
    assert!(checked > 0);
}
