use grid_util::point::Point;

use crate::direction::Direction;
use crate::maze_grid::MazeGrid;

/// Outcome of a single step of the agent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveEvent {
    /// The target cell was a wall or outside the grid, the agent stayed put.
    Blocked,
    Moved,
    /// The agent moved and now stands on the goal.
    ReachedGoal,
}

impl MoveEvent {
    pub fn moved(self) -> bool {
        self != MoveEvent::Blocked
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MoveEvent::Blocked => "blocked",
            MoveEvent::Moved => "moved",
            MoveEvent::ReachedGoal => "reached_goal",
        }
    }
}

/// Tracks the agent's cell. The position is kept separately from the [MazeGrid], which it never
/// mutates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Navigator {
    position: Point,
}

impl Navigator {
    pub fn new(position: Point) -> Navigator {
        Navigator { position }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    /// Places the agent without any checks.
    pub fn reset(&mut self, x: i32, y: i32) {
        self.position = Point::new(x, y);
    }

    /// Moves one cell in `direction` if that cell lies on the grid and is open. Unlike generation
    /// and solving this accepts any cell of the grid, border included.
    pub fn try_move(&mut self, grid: &MazeGrid, direction: Direction) -> bool {
        match direction.checked_offset(self.position, 1) {
            Some(target) if grid.point_in_range(target) && grid.is_open_point(target) => {
                self.position = target;
                true
            }
            _ => false,
        }
    }

    pub fn at_goal(&self, goal_x: i32, goal_y: i32) -> bool {
        self.position == Point::new(goal_x, goal_y)
    }
}
