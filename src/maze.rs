use grid_util::point::Point;
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::direction::Direction;
use crate::error::MazeError;
use crate::generator::{MazeGenerator, RecursiveBacktracker};
use crate::maze_grid::{check_size, MazeGrid};
use crate::navigation::{MoveEvent, Navigator};
use crate::solver::{BfsSolver, MazeSolver};

/// Settings for a [Maze]. Without a seed the random source is seeded from system entropy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MazeConfig {
    pub size: usize,
    pub seed: Option<u64>,
}

impl Default for MazeConfig {
    fn default() -> MazeConfig {
        MazeConfig {
            size: 45,
            seed: None,
        }
    }
}

impl MazeConfig {
    pub fn with_size(mut self, size: usize) -> MazeConfig {
        self.size = size;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> MazeConfig {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<(), MazeError> {
        check_size(self.size)
    }
}

/// A generated maze together with the agent walking it. This is the surface a rendering and input
/// layer drives: it reads [grid](Self::grid), [agent](Self::agent) and [goal](Self::goal) for
/// drawing, feeds directional input to [step](Self::step) and asks for [solve](Self::solve) on
/// demand.
#[derive(Clone, Debug)]
pub struct Maze<R: Rng = StdRng> {
    grid: MazeGrid,
    navigator: Navigator,
    generator: RecursiveBacktracker,
    solver: BfsSolver,
    rng: R,
}

impl Maze<StdRng> {
    pub fn from_config(config: &MazeConfig) -> Result<Maze<StdRng>, MazeError> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Maze::new(config.size, rng)
    }
}

impl<R: Rng> Maze<R> {
    /// Generates a maze of the given size with the agent on the start cell.
    pub fn new(size: usize, mut rng: R) -> Result<Maze<R>, MazeError> {
        let generator = RecursiveBacktracker::new();
        let grid = generator.generate(size, &mut rng)?;
        let start = grid.start();
        Ok(Maze {
            grid,
            navigator: Navigator::new(start),
            generator,
            solver: BfsSolver::new(),
            rng,
        })
    }

    /// Replaces the grid with a freshly carved one and moves the agent back to the start. The new
    /// grid is built fully before it is swapped in.
    pub fn regenerate(&mut self) {
        let mut fresh = self.grid.blank();
        let start = fresh.start();
        self.generator.generate_into(&mut fresh, start, &mut self.rng);
        self.grid = fresh;
        self.navigator.reset(start.x, start.y);
        info!("Regenerated {0}x{0} maze", self.grid.size());
    }

    pub fn grid(&self) -> &MazeGrid {
        &self.grid
    }

    pub fn size(&self) -> usize {
        self.grid.size()
    }

    pub fn start(&self) -> Point {
        self.grid.start()
    }

    pub fn goal(&self) -> Point {
        self.grid.goal()
    }

    pub fn agent(&self) -> Point {
        self.navigator.position()
    }

    /// Places the agent on an arbitrary cell.
    pub fn place_agent(&mut self, x: i32, y: i32) {
        self.navigator.reset(x, y);
    }

    pub fn try_move(&mut self, direction: Direction) -> bool {
        self.navigator.try_move(&self.grid, direction)
    }

    pub fn at_goal(&self) -> bool {
        let goal = self.goal();
        self.navigator.at_goal(goal.x, goal.y)
    }

    /// Attempts a move and reports whether the goal was reached by it. What happens after
    /// [MoveEvent::ReachedGoal], such as calling [regenerate](Self::regenerate), is up to the
    /// caller.
    pub fn step(&mut self, direction: Direction) -> MoveEvent {
        if !self.try_move(direction) {
            MoveEvent::Blocked
        } else if self.at_goal() {
            info!("Agent reached goal {}", self.goal());
            MoveEvent::ReachedGoal
        } else {
            MoveEvent::Moved
        }
    }

    /// Shortest path from the start to the goal, or [None] if there is none.
    pub fn solve(&self) -> Option<Vec<Point>> {
        self.solver.solve_maze(&self.grid)
    }
}
