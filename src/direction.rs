//! The six facing directions and their orientation algebra.
//!
//! Directions are mapped in a spiral around the cube: front, up, right, down,
//! left, back. Each direction knows its four neighbors in clockwise order
//! `[up, right, down, left]` as seen when looking straight at it, which lets
//! callers ask questions like "what is to the left of the front face if the
//! right face is considered up?"
//!
//! A direction cannot use itself or its opposite as the up reference; those
//! queries have no answer and return `None`.

use std::fmt;
use std::str::FromStr;

/// One of the six faces of the cube, in the fixed face order.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    Front = 0,
    Up = 1,
    Right = 2,
    Down = 3,
    Left = 4,
    Back = 5,
}

use Direction::*;

impl Direction {
    /// All six directions in face order.
    pub const ALL: [Direction; 6] = [Front, Up, Right, Down, Left, Back];

    /// Returns the direction with the given face index (0-5).
    pub const fn from_id(id: usize) -> Option<Self> {
        if id < 6 {
            Some(Self::ALL[id])
        } else {
            None
        }
    }

    /// Looks a direction up by its initial, case-insensitively.
    pub fn from_initial(initial: char) -> Option<Self> {
        match initial.to_ascii_uppercase() {
            'F' => Some(Front),
            'U' => Some(Up),
            'R' => Some(Right),
            'D' => Some(Down),
            'L' => Some(Left),
            'B' => Some(Back),
            _ => None,
        }
    }

    pub const fn id(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            Front => "front",
            Up => "up",
            Right => "right",
            Down => "down",
            Left => "left",
            Back => "back",
        }
    }

    pub const fn initial(self) -> char {
        match self {
            Front => 'F',
            Up => 'U',
            Right => 'R',
            Down => 'D',
            Left => 'L',
            Back => 'B',
        }
    }

    /// Neighbors in clockwise order, starting from this direction's own "up".
    pub const fn neighbors(self) -> [Direction; 4] {
        match self {
            Front => [Up, Right, Down, Left],
            Up => [Back, Right, Front, Left],
            Right => [Up, Back, Down, Front],
            Down => [Front, Right, Back, Left],
            Left => [Up, Front, Down, Back],
            Back => [Up, Left, Down, Right],
        }
    }

    pub const fn opposite(self) -> Self {
        match self {
            Front => Back,
            Up => Down,
            Right => Left,
            Down => Up,
            Left => Right,
            Back => Front,
        }
    }

    /// Steps around the neighbor cycle.
    ///
    /// Starting from `from` (default: the first neighbor), moves `steps`
    /// positions in the sense given by `vector` (+1 clockwise, -1
    /// anticlockwise). Returns `None` when `from` is this direction or its
    /// opposite, since neither lies on the cycle.
    pub fn rotation(self, vector: i32, from: Option<Direction>, steps: i32) -> Option<Direction> {
        let neighbors = self.neighbors();
        let from = from.unwrap_or(neighbors[0]);
        if from == self || from == self.opposite() {
            return None;
        }
        let found = neighbors.iter().position(|&n| n == from)? as i32;
        Some(neighbors[(found + steps.rem_euclid(4) * vector).rem_euclid(4) as usize])
    }

    pub fn clockwise(self, from: Option<Direction>) -> Option<Direction> {
        self.clockwise_by(from, 1)
    }

    pub fn clockwise_by(self, from: Option<Direction>, steps: i32) -> Option<Direction> {
        self.rotation(1, from, steps)
    }

    pub fn anticlockwise(self, from: Option<Direction>) -> Option<Direction> {
        self.anticlockwise_by(from, 1)
    }

    pub fn anticlockwise_by(self, from: Option<Direction>, steps: i32) -> Option<Direction> {
        self.rotation(-1, from, steps)
    }

    /// What appears in the compass slot `slot` (one of up, right, down, left)
    /// when `up` is taken as this face's up.
    fn relative(self, slot: Direction, up: Option<Direction>) -> Option<Direction> {
        self.rotation(1, up, slot.id() as i32 - 1)
    }

    pub fn up(self, up: Option<Direction>) -> Option<Direction> {
        self.relative(Up, up)
    }

    pub fn right(self, up: Option<Direction>) -> Option<Direction> {
        self.relative(Right, up)
    }

    pub fn down(self, up: Option<Direction>) -> Option<Direction> {
        self.relative(Down, up)
    }

    pub fn left(self, up: Option<Direction>) -> Option<Direction> {
        self.relative(Left, up)
    }

    /// Unit normal in cube coordinates (x right, y up, z toward the viewer).
    pub const fn normal(self) -> (i32, i32, i32) {
        match self {
            Front => (0, 0, 1),
            Up => (0, 1, 0),
            Right => (1, 0, 0),
            Down => (0, -1, 0),
            Left => (-1, 0, 0),
            Back => (0, 0, -1),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|d| d.name() == lower)
            .ok_or_else(|| format!("unknown direction {s:?}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_front_relationships() {
        assert_eq!(Front.opposite(), Back);
        assert_eq!(Front.up(None), Some(Up));
        assert_eq!(Front.up(Some(Left)), Some(Left));
        assert_eq!(Front.right(None), Some(Right));
        assert_eq!(Front.right(Some(Down)), Some(Left));
        assert_eq!(Front.clockwise(None), Some(Right));
        assert_eq!(Front.clockwise(Some(Right)), Some(Down));
    }

    #[test]
    fn test_right_relationships() {
        assert_eq!(Right.opposite(), Left);
        assert_eq!(Right.up(None), Some(Up));
        assert_eq!(Right.up(Some(Front)), Some(Front));
        assert_eq!(Right.right(None), Some(Back));
        assert_eq!(Right.right(Some(Down)), Some(Front));
        assert_eq!(Right.clockwise(None), Some(Back));
        assert_eq!(Right.clockwise(Some(Front)), Some(Up));
    }

    #[test]
    fn test_self_and_opposite_are_undefined() {
        assert_eq!(Right.up(Some(Right)), None);
        assert_eq!(Right.up(Some(Left)), None);
        for d in Direction::ALL {
            assert_eq!(d.clockwise(Some(d)), None);
            assert_eq!(d.anticlockwise(Some(d.opposite())), None);
        }
    }

    #[test]
    fn test_clockwise_then_anticlockwise_is_identity() {
        for d in Direction::ALL {
            for from in d.neighbors() {
                for steps in 0..4 {
                    let there = d.clockwise_by(Some(from), steps).unwrap();
                    assert_eq!(d.anticlockwise_by(Some(there), steps), Some(from));
                }
            }
        }
    }

    #[test]
    fn test_opposite_is_involution_and_neighbors_exclude_axis() {
        for d in Direction::ALL {
            assert_eq!(d.opposite().opposite(), d);
            assert!(!d.neighbors().contains(&d));
            assert!(!d.neighbors().contains(&d.opposite()));
        }
    }

    #[test]
    fn test_lookups() {
        for d in Direction::ALL {
            assert_eq!(Direction::from_id(d.id()), Some(d));
            assert_eq!(Direction::from_initial(d.initial()), Some(d));
            assert_eq!(d.name().parse::<Direction>(), Ok(d));
        }
        assert_eq!(Direction::from_id(6), None);
        assert_eq!(Direction::from_initial('q'), None);
        assert_eq!("UP".parse::<Direction>(), Ok(Up));
    }
}
