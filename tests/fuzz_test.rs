/// Fuzzes maze generation and solving over many seeds and sizes: generated mazes must be perfect,
/// reproducible and walled in, and the solver must agree with an exhaustive search.
use grid_util::point::Point;
use maze_pathfinding::{
    solver::{is_valid_path, path_length},
    BfsSolver, Direction, MazeGenerator, MazeGrid, MazeSolver, RecursiveBacktracker,
};
use petgraph::unionfind::UnionFind;
use rand::prelude::*;

fn generate(size: usize, seed: u64) -> MazeGrid {
    let mut rng = StdRng::seed_from_u64(seed);
    RecursiveBacktracker::new().generate(size, &mut rng).unwrap()
}

/// Random interior with roughly 60% open cells; start and goal are always open.
fn random_grid(size: usize, rng: &mut StdRng) -> MazeGrid {
    let mut grid = MazeGrid::new(size).unwrap();
    for y in 1..size as i32 - 1 {
        for x in 1..size as i32 - 1 {
            if rng.gen_bool(0.6) {
                grid.set_open(x, y);
            }
        }
    }
    let (start, goal) = (grid.start(), grid.goal());
    grid.set_open(start.x, start.y);
    grid.set_open(goal.x, goal.y);
    grid
}

fn visualize_grid(grid: &MazeGrid, start: &Point, end: &Point) {
    for y in 0..grid.size() as i32 {
        for x in 0..grid.size() as i32 {
            let p = Point::new(x, y);
            if *start == p {
                print!("S");
            } else if *end == p {
                print!("G");
            } else if grid.is_open(x, y) {
                print!(".");
            } else {
                print!("#");
            }
        }
        println!();
    }
}

/// Length in moves of the shortest path found by enumerating every simple path.
fn exhaustive_shortest(grid: &MazeGrid, start: Point, goal: Point) -> Option<usize> {
    fn walk(
        grid: &MazeGrid,
        node: Point,
        goal: Point,
        depth: usize,
        on_path: &mut Vec<bool>,
        best: &mut Option<usize>,
    ) {
        if node == goal {
            *best = Some(best.map_or(depth, |b| b.min(depth)));
            return;
        }
        for dir in Direction::ALL {
            let next = dir.offset(node, 1);
            if grid.point_in_bounds(next) && grid.is_open_point(next) && !on_path[grid.ix(next)] {
                on_path[grid.ix(next)] = true;
                walk(grid, next, goal, depth + 1, on_path, best);
                on_path[grid.ix(next)] = false;
            }
        }
    }
    let mut on_path = vec![false; grid.size() * grid.size()];
    on_path[grid.ix(start)] = true;
    let mut best = None;
    walk(grid, start, goal, 0, &mut on_path, &mut best);
    best
}

#[test]
fn generated_mazes_are_perfect() {
    for size in [5, 7, 9, 11, 21, 45] {
        for seed in 0..50 {
            let grid = generate(size, seed);
            let s = size as i32;
            let nodes: Vec<Point> = grid
                .open_cells()
                .filter(|p| p.x % 2 == 1 && p.y % 2 == 1)
                .collect();
            let half = (size - 1) / 2;
            assert_eq!(nodes.len(), half * half);

            // Join nodes whose separating wall was carved away
            let mut components = UnionFind::new(size * size);
            let mut edges = 0;
            for node in &nodes {
                for (dx, dy) in [(1, 0), (0, 1)] {
                    let (bx, by) = (node.x + dx, node.y + dy);
                    let (nx, ny) = (node.x + 2 * dx, node.y + 2 * dy);
                    if nx < s - 1 && ny < s - 1 && grid.is_open(bx, by) && grid.is_open(nx, ny) {
                        edges += 1;
                        components.union(grid.ix(*node), grid.ix(Point::new(nx, ny)));
                    }
                }
            }
            assert_eq!(edges, nodes.len() - 1, "cycle in maze of size {size}, seed {seed}");
            let root = components.find(grid.ix(nodes[0]));
            assert!(nodes.iter().all(|n| components.find(grid.ix(*n)) == root));
        }
    }
}

#[test]
fn generation_is_deterministic() {
    for size in [5, 13, 31] {
        for seed in 0..20 {
            assert_eq!(generate(size, seed).to_string(), generate(size, seed).to_string());
        }
    }
    assert_ne!(generate(31, 0).to_string(), generate(31, 1).to_string());
}

#[test]
fn border_stays_walled() {
    for size in [5, 7, 15, 45] {
        for seed in 0..20 {
            let grid = generate(size, seed);
            let last = size as i32 - 1;
            for i in 0..size as i32 {
                for (x, y) in [(i, 0), (i, last), (0, i), (last, i)] {
                    assert!(!grid.is_open(x, y), "border ({x}, {y}) open, seed {seed}");
                }
            }
            assert!(grid.is_open_point(grid.goal()));
        }
    }
}

#[test]
fn generated_mazes_are_solvable() {
    let solver = BfsSolver::new();
    for size in [5, 9, 25, 45, 101] {
        for seed in 0..10 {
            let grid = generate(size, seed);
            let path = solver.solve_maze(&grid).unwrap();
            assert_eq!(path.first(), Some(&grid.start()));
            assert_eq!(path.last(), Some(&grid.goal()));
            assert!(is_valid_path(&grid, &path));
        }
    }
}

#[test]
fn fuzz_distance() {
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(0);
    let solver = BfsSolver::new();
    for size in [5, 7] {
        for _ in 0..N_GRIDS {
            let grid = random_grid(size, &mut rng);
            let (start, goal) = (grid.start(), grid.goal());
            let expected = exhaustive_shortest(&grid, start, goal);
            let path = solver.solve(&grid, start, goal);
            if path.as_ref().map(|p| path_length(p)) != expected {
                visualize_grid(&grid, &start, &goal);
                println!("BFS path: {path:?}\nExhaustive length: {expected:?}");
            }
            assert_eq!(path.as_ref().map(|p| path_length(p)), expected);
            assert_eq!(path.is_some(), grid.reachable(&start, &goal));
            if let Some(path) = path {
                assert!(is_valid_path(&grid, &path));
            }
        }
    }
}
