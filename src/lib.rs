//! # maze_pathfinding
//!
//! Generation and solving of perfect mazes on a square grid. Mazes are carved with
//! [randomized depth-first backtracking](https://en.wikipedia.org/wiki/Maze_generation_algorithm#Randomized_depth-first_search)
//! over the lattice of cells with odd coordinates, which yields a spanning tree: exactly one
//! simple path between any two open cells. Shortest paths are found with
//! [breadth-first search](https://en.wikipedia.org/wiki/Breadth-first_search), reusing
//! [connected components](https://en.wikipedia.org/wiki/Component_(graph_theory))
//! to skip searching when the goal cannot be reached.
//!
//! The random source is always passed in explicitly, so a seeded generator reproduces the same
//! maze. Drawing and input handling are left to the caller, see [Maze].
pub mod direction;
pub mod error;
pub mod generator;
pub mod maze;
pub mod maze_grid;
pub mod navigation;
pub mod solver;

pub use direction::Direction;
pub use error::MazeError;
pub use generator::{MazeGenerator, RecursiveBacktracker};
pub use maze::{Maze, MazeConfig};
pub use maze_grid::{CellState, MazeGrid};
pub use navigation::{MoveEvent, Navigator};
pub use solver::{BfsSolver, MazeSolver};

/// Smallest side length that fits a start at `(1, 1)` and a distinct goal at `(size - 2, size - 2)`.
pub const MIN_SIZE: usize = 5;
/// Start cell of carving, solving and the agent.
pub const START: (i32, i32) = (1, 1);
/// Distance between neighbouring maze nodes; the cell in between is the wall that gets carved.
const CARVE_STEP: i32 = 2;
