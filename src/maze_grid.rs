use crate::error::MazeError;
use crate::MIN_SIZE;
use core::fmt;
use grid_util::grid::{BoolGrid, ValueGrid};
use grid_util::point::Point;
use log::debug;
use petgraph::unionfind::UnionFind;
use std::str::FromStr;

use crate::direction::Direction;

/// State of a single maze cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellState {
    Wall,
    Open,
}

impl CellState {
    pub fn symbol(self) -> char {
        match self {
            CellState::Wall => '#',
            CellState::Open => '.',
        }
    }
}

/// [MazeGrid] is a square `size × size` grid of walls and open cells. The raw state lives in a
/// [BoolGrid] where [true] marks a wall. Next to the cells it tracks connected components of open
/// cells in a [UnionFind] which allows answering reachability without searching.
///
/// Coordinates are zero-based `(x, y)` column/row pairs. The border ring is never opened by
/// generation, so the interior `0 < x, y < size - 1` is where all maze cells live.
#[derive(Clone, Debug)]
pub struct MazeGrid {
    pub(crate) grid: BoolGrid,
    pub(crate) components: UnionFind<usize>,
    pub(crate) components_dirty: bool,
    size: usize,
}

impl MazeGrid {
    /// Creates a grid filled entirely with walls. The size must be odd and at least [MIN_SIZE].
    pub fn new(size: usize) -> Result<MazeGrid, MazeError> {
        check_size(size)?;
        Ok(MazeGrid {
            grid: BoolGrid::new(size, size, true),
            components: UnionFind::new(size * size),
            components_dirty: false,
            size,
        })
    }

    /// A wall-filled grid of the same size.
    pub fn blank(&self) -> MazeGrid {
        MazeGrid {
            grid: BoolGrid::new(self.size, self.size, true),
            components: UnionFind::new(self.size * self.size),
            components_dirty: false,
            size: self.size,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// The fixed start cell `(1, 1)`.
    pub fn start(&self) -> Point {
        Point::new(crate::START.0, crate::START.1)
    }

    /// The goal cell `(size - 2, size - 2)`.
    pub fn goal(&self) -> Point {
        let g = self.size as i32 - 2;
        Point::new(g, g)
    }

    /// True iff `(x, y)` is strictly inside the permanent border.
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        let s = self.size as i32;
        x > 0 && y > 0 && x < s - 1 && y < s - 1
    }

    /// True iff `(x, y)` addresses a cell of the grid, border included.
    pub fn in_range(&self, x: i32, y: i32) -> bool {
        let s = self.size as i32;
        x >= 0 && y >= 0 && x < s && y < s
    }

    pub fn point_in_bounds(&self, p: Point) -> bool {
        self.in_bounds(p.x, p.y)
    }

    pub fn point_in_range(&self, p: Point) -> bool {
        self.in_range(p.x, p.y)
    }

    /// Whether the cell is open. Panics if `(x, y)` is outside the grid.
    pub fn is_open(&self, x: i32, y: i32) -> bool {
        assert!(
            self.in_range(x, y),
            "cell ({x}, {y}) outside of {0}x{0} grid",
            self.size
        );
        !self.grid.get(x, y)
    }

    pub fn is_open_point(&self, p: Point) -> bool {
        self.is_open(p.x, p.y)
    }

    pub fn cell(&self, x: i32, y: i32) -> CellState {
        if self.is_open(x, y) {
            CellState::Open
        } else {
            CellState::Wall
        }
    }

    /// Opens a cell and joins it with the components of its open neighbours.
    pub fn set_open(&mut self, x: i32, y: i32) {
        self.set_cell(x, y, CellState::Open);
    }

    /// Walls off a cell. Since this may split a component, the components are flagged as dirty.
    pub fn set_wall(&mut self, x: i32, y: i32) {
        self.set_cell(x, y, CellState::Wall);
    }

    pub fn set_cell(&mut self, x: i32, y: i32, state: CellState) {
        assert!(
            self.in_range(x, y),
            "cell ({x}, {y}) outside of {0}x{0} grid",
            self.size
        );
        let blocked = state == CellState::Wall;
        if blocked {
            if !self.grid.get(x, y) {
                self.components_dirty = true;
            }
        } else {
            let p = Point::new(x, y);
            let p_ix = self.ix(p);
            for dir in Direction::ALL {
                let n = dir.offset(p, 1);
                if self.point_in_range(n) && self.is_open_point(n) {
                    self.components.union(p_ix, self.ix(n));
                }
            }
        }
        self.grid.set(x, y, blocked);
    }

    /// Flat arena index `y * size + x` of a point.
    pub fn ix(&self, p: Point) -> usize {
        p.y as usize * self.size + p.x as usize
    }

    /// Inverse of [ix](Self::ix).
    pub fn point(&self, ix: usize) -> Point {
        Point::new((ix % self.size) as i32, (ix / self.size) as i32)
    }

    /// Open neighbours of a point, restricted to the interior.
    pub fn open_neighbours(&self, p: Point) -> impl Iterator<Item = Point> + '_ {
        Direction::ALL
            .into_iter()
            .map(move |dir| dir.offset(p, 1))
            .filter(|n| self.point_in_bounds(*n) && self.is_open_point(*n))
    }

    /// Iterates over all open cells in row-major order.
    pub fn open_cells(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.size * self.size)
            .map(|ix| self.point(ix))
            .filter(|p| self.is_open_point(*p))
    }

    pub fn open_count(&self) -> usize {
        self.open_cells().count()
    }

    /// Retrieves the component id a given [Point] belongs to.
    pub fn get_component(&self, point: &Point) -> usize {
        self.components.find(self.ix(*point))
    }

    /// Checks if start and goal are open and on the same component.
    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        !self.unreachable(start, goal)
    }

    /// Checks if start and goal are not on the same component of open cells.
    pub fn unreachable(&self, start: &Point, goal: &Point) -> bool {
        if self.point_in_range(*start)
            && self.point_in_range(*goal)
            && self.is_open_point(*start)
            && self.is_open_point(*goal)
        {
            self.get_component(start) != self.get_component(goal)
        } else {
            true
        }
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up open neighbours to the same components.
    pub fn generate_components(&mut self) {
        debug!("Generating connected components for {0}x{0} maze", self.size);
        let s = self.size as i32;
        self.components = UnionFind::new(self.size * self.size);
        self.components_dirty = false;
        for y in 0..s {
            for x in 0..s {
                if self.grid.get(x, y) {
                    continue;
                }
                let point = Point::new(x, y);
                let parent_ix = self.ix(point);
                for n in [Point::new(x + 1, y), Point::new(x, y + 1)] {
                    if self.point_in_range(n) && self.is_open_point(n) {
                        let ix = self.ix(n);
                        self.components.union(parent_ix, ix);
                    }
                }
            }
        }
    }

    /// Renders the grid like [Display] does, drawing `*` on the cells of `path`.
    pub fn render_path(&self, path: &[Point]) -> String {
        let mut marked = vec![false; self.size * self.size];
        for p in path.iter().filter(|p| self.point_in_range(**p)) {
            marked[self.ix(*p)] = true;
        }
        let mut out = String::with_capacity(self.size * (self.size + 1));
        for y in 0..self.size as i32 {
            for x in 0..self.size as i32 {
                let p = Point::new(x, y);
                if marked[self.ix(p)] {
                    out.push('*');
                } else {
                    out.push(self.cell(x, y).symbol());
                }
            }
            out.push('\n');
        }
        out
    }
}

pub(crate) fn check_size(size: usize) -> Result<(), MazeError> {
    if size < MIN_SIZE || size % 2 == 0 {
        Err(MazeError::InvalidSize { size })
    } else {
        Ok(())
    }
}

impl fmt::Display for MazeGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in 0..self.size as i32 {
            let row = (0..self.size as i32)
                .map(|x| self.cell(x, y).symbol())
                .collect::<String>();
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}

/// Parses the text form written by [Display]: one row per line, `#` for walls and `.` for open
/// cells. Blank lines and surrounding whitespace are ignored.
impl FromStr for MazeGrid {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect::<Vec<&str>>();
        let mut maze = MazeGrid::new(rows.len())?;
        for (y, row) in rows.iter().enumerate() {
            let width = row.chars().count();
            if width != maze.size {
                return Err(MazeError::RaggedRow {
                    row: y,
                    expected: maze.size,
                    found: width,
                });
            }
            for (x, c) in row.chars().enumerate() {
                match c {
                    '#' => {}
                    '.' => maze.grid.set(x as i32, y as i32, false),
                    found => return Err(MazeError::UnknownCell { x, y, found }),
                }
            }
        }
        maze.generate_components();
        Ok(maze)
    }
}
