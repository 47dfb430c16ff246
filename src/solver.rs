use grid_util::point::Point;
use log::debug;

use crate::maze_grid::MazeGrid;

const NO_PARENT: usize = usize::MAX;

pub trait MazeSolver {
    /// Computes a path from start to goal, both inclusive. Returns [None] if the goal cannot be
    /// reached through open cells.
    fn solve(&self, grid: &MazeGrid, start: Point, goal: Point) -> Option<Vec<Point>>;

    /// Solves from the fixed start `(1, 1)` to the goal `(size - 2, size - 2)`.
    fn solve_maze(&self, grid: &MazeGrid) -> Option<Vec<Point>> {
        self.solve(grid, grid.start(), grid.goal())
    }
}

/// Breadth-first search over 4-connected open cells. As all moves cost the same, the first time
/// the goal is dequeued its path has the fewest cells possible.
///
/// The frontier, visited flags and parent links live in flat arrays indexed by `y * size + x`.
/// Cells are marked visited when enqueued, so each cell enters the frontier at most once and the
/// frontier array never needs more than `size²` slots.
#[derive(Clone, Copy, Debug, Default)]
pub struct BfsSolver;

impl BfsSolver {
    pub fn new() -> BfsSolver {
        BfsSolver
    }
}

impl MazeSolver for BfsSolver {
    fn solve(&self, grid: &MazeGrid, start: Point, goal: Point) -> Option<Vec<Point>> {
        if !grid.point_in_bounds(start) || !grid.is_open_point(start) {
            debug!("Start {} is not an open interior cell", start);
            return None;
        }
        // Components are only trusted while clean; otherwise fall through to the search
        if !grid.components_dirty && grid.unreachable(&start, &goal) {
            debug!("{} is not reachable from {}", goal, start);
            return None;
        }

        let n = grid.size() * grid.size();
        let mut visited = vec![false; n];
        let mut parents = vec![NO_PARENT; n];
        let mut frontier: Vec<usize> = Vec::with_capacity(n);
        let mut head = 0;

        let start_ix = grid.ix(start);
        visited[start_ix] = true;
        frontier.push(start_ix);

        while head < frontier.len() {
            let ix = frontier[head];
            head += 1;
            let node = grid.point(ix);
            if node == goal {
                let path = reverse_path(grid, &parents, ix);
                debug!(
                    "Found path of {} cells after expanding {} cells",
                    path.len(),
                    head
                );
                return Some(path);
            }
            for next in grid.open_neighbours(node) {
                let next_ix = grid.ix(next);
                if !visited[next_ix] {
                    visited[next_ix] = true;
                    parents[next_ix] = ix;
                    frontier.push(next_ix);
                }
            }
        }
        debug!(
            "Frontier exhausted after {} cells without reaching {}",
            head, goal
        );
        None
    }
}

/// Follows parent links from `end` back to the root and returns the cells root first.
fn reverse_path(grid: &MazeGrid, parents: &[usize], end: usize) -> Vec<Point> {
    let mut path: Vec<Point> = itertools::unfold(end, |ix| {
        if *ix == NO_PARENT {
            None
        } else {
            let p = grid.point(*ix);
            *ix = parents[*ix];
            Some(p)
        }
    })
    .collect();
    path.reverse();
    path
}

/// Number of moves along a path, which is one less than its number of cells.
pub fn path_length(path: &[Point]) -> usize {
    path.len().saturating_sub(1)
}

/// Checks that a path is non-empty, only visits open cells and only takes single axis-aligned
/// steps.
pub fn is_valid_path(grid: &MazeGrid, path: &[Point]) -> bool {
    !path.is_empty()
        && path
            .iter()
            .all(|p| grid.point_in_range(*p) && grid.is_open_point(*p))
        && path
            .windows(2)
            .all(|w| (w[0].x - w[1].x).abs() + (w[0].y - w[1].y).abs() == 1)
}
