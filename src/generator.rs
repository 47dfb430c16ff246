use grid_util::point::Point;
use log::{info, warn};
use rand::Rng;

use crate::direction::Direction;
use crate::error::MazeError;
use crate::maze_grid::MazeGrid;
use crate::CARVE_STEP;

/// Something that carves a maze into a wall-filled [MazeGrid].
pub trait MazeGenerator {
    /// Carves passages starting from `start`, which must be an interior cell with odd coordinates.
    fn carve<R: Rng + ?Sized>(&self, grid: &mut MazeGrid, start: Point, rng: &mut R);

    /// Carves from `start` and then unconditionally opens the goal cell `(size - 2, size - 2)`.
    fn generate_into<R: Rng + ?Sized>(&self, grid: &mut MazeGrid, start: Point, rng: &mut R) {
        self.carve(grid, start, rng);
        let goal = grid.goal();
        if !grid.is_open_point(goal) {
            // Leaves an isolated open cell which the solver reports as unreachable
            warn!("Carving never reached goal {}, opening it anyway", goal);
        }
        grid.set_open(goal.x, goal.y);
    }

    /// Builds a fresh grid of the given size and fills it with a maze carved from `(1, 1)`.
    fn generate<R: Rng + ?Sized>(&self, size: usize, rng: &mut R) -> Result<MazeGrid, MazeError> {
        let mut grid = MazeGrid::new(size)?;
        let start = grid.start();
        self.generate_into(&mut grid, start, rng);
        Ok(grid)
    }
}

/// Pending work for one node of the depth-first search: the shuffled directions and how many of
/// them were tried already.
struct Frame {
    node: Point,
    dirs: [Direction; 4],
    next: usize,
}

impl Frame {
    fn new<R: Rng + ?Sized>(node: Point, rng: &mut R) -> Frame {
        Frame {
            node,
            dirs: Direction::shuffled(rng),
            next: 0,
        }
    }
}

/// Randomized depth-first backtracking over the lattice of odd/odd cells. Every node is visited
/// exactly once and joined to the node it was discovered from, so the open cells form a spanning
/// tree: a perfect maze.
///
/// The search keeps its frames on a heap allocated stack rather than the call stack. Its depth is
/// bounded by the number of nodes, `((size - 1) / 2)²`, which is reached by mazes without any
/// branching; memory use grows accordingly for very large sizes.
#[derive(Clone, Copy, Debug, Default)]
pub struct RecursiveBacktracker;

impl RecursiveBacktracker {
    pub fn new() -> RecursiveBacktracker {
        RecursiveBacktracker
    }
}

impl MazeGenerator for RecursiveBacktracker {
    fn carve<R: Rng + ?Sized>(&self, grid: &mut MazeGrid, start: Point, rng: &mut R) {
        assert!(
            grid.point_in_bounds(start) && start.x % 2 == 1 && start.y % 2 == 1,
            "carving must start on an interior node, got {}",
            start
        );
        let half = (grid.size() - 1) / 2;
        let mut stack: Vec<Frame> = Vec::with_capacity(half * half);
        let mut carved = 1;
        grid.set_open(start.x, start.y);
        stack.push(Frame::new(start, rng));

        while let Some(frame) = stack.last_mut() {
            if frame.next == frame.dirs.len() {
                stack.pop();
                continue;
            }
            let dir = frame.dirs[frame.next];
            frame.next += 1;
            let node = frame.node;
            let candidate = dir.offset(node, CARVE_STEP);
            if grid.point_in_bounds(candidate) && !grid.is_open_point(candidate) {
                let between = dir.offset(node, 1);
                grid.set_open(between.x, between.y);
                grid.set_open(candidate.x, candidate.y);
                carved += 1;
                stack.push(Frame::new(candidate, rng));
            }
        }
        info!(
            "Carved {} nodes into {1}x{1} maze from {2}",
            carved,
            grid.size(),
            start
        );
    }
}
