use core::fmt;
use std::str::FromStr;

use crate::error::MazeError;
use grid_util::point::Point;
use rand::seq::SliceRandom;
use rand::Rng;

/// One of the four axis-aligned moves on the maze grid. The y axis points down, so [Direction::Up]
/// decreases y.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// The fixed order in which the solver expands neighbours.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// The point `distance` cells away from `point` in this direction.
    pub fn offset(self, point: Point, distance: i32) -> Point {
        let (dx, dy) = self.delta();
        Point::new(point.x + dx * distance, point.y + dy * distance)
    }

    /// Like [offset](Self::offset), but [None] if a coordinate would overflow.
    pub fn checked_offset(self, point: Point, distance: i32) -> Option<Point> {
        let (dx, dy) = self.delta();
        let x = point.x.checked_add(dx.checked_mul(distance)?)?;
        let y = point.y.checked_add(dy.checked_mul(distance)?)?;
        Some(Point::new(x, y))
    }

    /// All four directions in a uniformly random order (Fisher-Yates).
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> [Direction; 4] {
        let mut dirs = Direction::ALL;
        dirs.shuffle(rng);
        dirs
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts plain names in any case as well as the browser key names (`ArrowUp`, ...).
impl FromStr for Direction {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.strip_prefix("Arrow").unwrap_or(s);
        match name.to_ascii_lowercase().as_str() {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            _ => Err(MazeError::UnknownDirection {
                found: s.to_owned(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn parses_names_and_key_codes() {
        assert_eq!("up".parse::<Direction>(), Ok(Direction::Up));
        assert_eq!("RIGHT".parse::<Direction>(), Ok(Direction::Right));
        assert_eq!("ArrowDown".parse::<Direction>(), Ok(Direction::Down));
        assert_eq!("ArrowLeft".parse::<Direction>(), Ok(Direction::Left));
        assert_eq!(
            "north".parse::<Direction>(),
            Err(MazeError::UnknownDirection {
                found: "north".to_owned()
            })
        );
        assert!("Arrow".parse::<Direction>().is_err());
    }

    #[test]
    fn offsets_follow_screen_axes() {
        let p = Point::new(3, 3);
        assert_eq!(Direction::Up.offset(p, 2), Point::new(3, 1));
        assert_eq!(Direction::Down.offset(p, 1), Point::new(3, 4));
        assert_eq!(Direction::Left.offset(p, 2), Point::new(1, 3));
        assert_eq!(Direction::Right.offset(p, 1), Point::new(4, 3));
        for dir in Direction::ALL {
            assert_eq!(dir.checked_offset(p, 3), Some(dir.offset(p, 3)));
        }
    }

    #[test]
    fn checked_offset_stops_at_overflow() {
        let edge = Point::new(i32::MAX, i32::MIN);
        assert_eq!(Direction::Right.checked_offset(edge, 1), None);
        assert_eq!(Direction::Up.checked_offset(edge, 1), None);
        assert_eq!(
            Direction::Left.checked_offset(edge, 1),
            Some(Point::new(i32::MAX - 1, i32::MIN))
        );
        assert_eq!(
            Direction::Down.checked_offset(Point::new(0, 0), i32::MAX),
            Some(Point::new(0, i32::MAX))
        );
        assert_eq!(Direction::Down.checked_offset(Point::new(0, 1), i32::MAX), None);
    }

    /// Every one of the 24 orderings should show up when shuffling often enough.
    #[test]
    fn shuffle_reaches_every_permutation() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..2000 {
            let dirs = Direction::shuffled(&mut rng);
            let mut sorted = dirs.map(|d| d as u8);
            sorted.sort_unstable();
            assert_eq!(sorted, [0, 1, 2, 3]);
            seen.insert(dirs);
        }
        assert_eq!(seen.len(), 24);
    }
}
