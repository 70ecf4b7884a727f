//! Plan a route with every search algorithm, draw it, then walk it there and
//! back.
//!
//! Run: cargo run --bin route -- --size 20 --blocked 30 --unit crusader
//!      cargo run --bin route -- --layout demos/maps/corridor.txt

use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::{Parser, ValueEnum};
use hopgrid_core::{PassGrid, Point};
use hopgrid_nav::{UnitKind, Walker, parse_layout, random_grid, render};
use hopgrid_paths::{Algorithm, HeuristicKind, Path, PathError, Pathfinder, SearchConfig};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

#[derive(Debug, Parser)]
#[command(name = "route", about = "Plan, draw and walk a route on a square grid")]
struct Args {
    /// Map file: `.` open, `#` blocked, `S` start, `G` goal.
    #[arg(long)]
    layout: Option<PathBuf>,
    /// Side of the random grid used when no layout is given.
    #[arg(long, default_value_t = 16)]
    size: i32,
    /// Percent chance that a random cell is blocked.
    #[arg(long, default_value_t = 25)]
    blocked: u32,
    #[arg(long, default_value_t = 1)]
    seed: u64,
    #[arg(long, value_enum, default_value_t = Unit::Pilgrim)]
    unit: Unit,
    #[arg(long, value_enum, default_value_t = Heuristic::Manhattan)]
    heuristic: Heuristic,
    /// Memoize heuristic values across the runs.
    #[arg(long)]
    memo: bool,
    /// Abort a search after expanding this many nodes.
    #[arg(long)]
    max_expansions: Option<usize>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Unit {
    Pilgrim,
    Crusader,
    Prophet,
    Preacher,
}

impl Unit {
    fn kind(self) -> UnitKind {
        match self {
            Self::Pilgrim => UnitKind::Pilgrim,
            Self::Crusader => UnitKind::Crusader,
            Self::Prophet => UnitKind::Prophet,
            Self::Preacher => UnitKind::Preacher,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Heuristic {
    Manhattan,
    TieBreaking,
    Chebyshev,
    ChebyshevTieBreaking,
}

impl Heuristic {
    fn kind(self) -> HeuristicKind {
        match self {
            Self::Manhattan => HeuristicKind::Manhattan,
            Self::TieBreaking => HeuristicKind::TieBreaking,
            Self::Chebyshev => HeuristicKind::Chebyshev,
            Self::ChebyshevTieBreaking => HeuristicKind::ChebyshevTieBreaking,
        }
    }
}

struct Scenario {
    grid: PassGrid,
    start: Point,
    goal: Point,
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

fn load_scenario(args: &Args) -> anyhow::Result<Scenario> {
    if let Some(file) = &args.layout {
        let text = std::fs::read_to_string(file)
            .with_context(|| format!("reading {}", file.display()))?;
        let layout =
            parse_layout(&text).with_context(|| format!("parsing {}", file.display()))?;
        let (Some(start), Some(goal)) = (layout.start, layout.goal) else {
            bail!("{} must mark one S and one G cell", file.display());
        };
        return Ok(Scenario {
            grid: layout.grid,
            start,
            goal,
        });
    }

    let mut rng = StdRng::seed_from_u64(args.seed);
    let grid = random_grid(&mut rng, args.size, args.blocked)?;
    if grid.count_passable() < 2 {
        bail!("grid has fewer than two open cells, lower --blocked");
    }
    let start = random_open_cell(&mut rng, &grid);
    let goal = loop {
        let p = random_open_cell(&mut rng, &grid);
        if p != start {
            break p;
        }
    };
    Ok(Scenario { grid, start, goal })
}

/// Walk from start to goal and back, one move per turn. Returns the turns
/// taken each way, or `None` when there is no route.
fn walk(
    finder: &mut Pathfinder,
    sc: &Scenario,
    kind: UnitKind,
) -> Result<Option<(usize, usize)>, PathError> {
    let mut walker = Walker::for_unit(sc.start, kind);
    match walker.plan(finder, &sc.grid, sc.goal) {
        Ok(()) => {}
        Err(PathError::PathNotFound { .. } | PathError::ExpansionLimit { .. }) => return Ok(None),
        Err(e) => return Err(e),
    }

    let mut legs = [0; 2];
    for turns in &mut legs {
        while let Some(at) = walker.step(|p| sc.grid.passable(p)) {
            log::debug!("{kind} moved to {at}");
            *turns += 1;
        }
        walker.retrace();
    }
    Ok(Some((legs[0], legs[1])))
}

fn run(args: Args) -> anyhow::Result<()> {
    let sc = load_scenario(&args)?;
    let kind = args.unit.kind();
    log::info!(
        "{n}x{n} grid, {kind} (speed {}) from {} to {}",
        kind.speed(),
        sc.start,
        sc.goal,
        n = sc.grid.size(),
    );

    let mut base = SearchConfig::default().with_heuristic(args.heuristic.kind());
    if args.memo {
        base = base.with_memo(None);
    }
    base.max_expansions = args.max_expansions;

    let mut finder = Pathfinder::with_config(base);
    for algorithm in Algorithm::ALL {
        if !algorithm.supports_speed(kind.speed()) {
            println!("{algorithm}: skipped, {kind} moves at speed {}\n", kind.speed());
            continue;
        }
        finder.set_config(base.with_algorithm(algorithm));
        let mut path = Path::new();
        match path.make_with(&mut finder, &sc.grid, sc.start, sc.goal, kind.speed()) {
            Ok(()) => {
                let stats = finder.stats();
                println!(
                    "{algorithm}: {} moves, {} expanded, {} pushed",
                    path.len(),
                    stats.expanded,
                    stats.pushed
                );
                println!("{}\n", render(&sc.grid, sc.start, &path));
            }
            Err(e @ (PathError::PathNotFound { .. } | PathError::ExpansionLimit { .. })) => {
                println!("{algorithm}: {e}\n");
            }
            Err(e) => return Err(e.into()),
        }
    }

    finder.set_config(base);
    match walk(&mut finder, &sc, kind)? {
        Some((there, back)) => println!("walked there in {there} turns and back in {back}"),
        None => println!("no route, {kind} stays at {}", sc.start),
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run(Args::parse()) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(extra: &[&str]) -> Args {
        Args::parse_from(std::iter::once("route").chain(extra.iter().copied()))
    }

    #[test]
    fn random_scenario_endpoints_are_open() {
        for seed in 0..20 {
            let seed = seed.to_string();
            let sc = load_scenario(&args(&["--seed", &seed, "--blocked", "40"])).unwrap();
            assert_ne!(sc.start, sc.goal);
            assert!(sc.grid.passable(sc.start));
            assert!(sc.grid.passable(sc.goal));
        }
    }

    #[test]
    fn fully_blocked_grid_is_rejected() {
        assert!(load_scenario(&args(&["--blocked", "100"])).is_err());
    }

    #[test]
    fn corridor_walk_there_and_back() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/maps/corridor.txt");
        let sc = load_scenario(&args(&["--layout", path])).unwrap();
        let mut finder = Pathfinder::new();
        let legs = walk(&mut finder, &sc, UnitKind::Pilgrim).unwrap();
        let (there, back) = legs.unwrap();
        assert!(there > 0);
        assert_eq!(there, back);
    }

    #[test]
    fn unit_flag_maps_to_speed() {
        assert_eq!(args(&["--unit", "crusader"]).unit.kind().speed(), 9);
        assert_eq!(args(&[]).unit.kind(), UnitKind::Pilgrim);
    }
}
